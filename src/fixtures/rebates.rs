//! Rebate Fixtures

use rusty_money::{Money, iso::Currency};
use serde::Deserialize;

use crate::{
    fixtures::{FixtureError, parse_fixture_amount},
    incentives::IncentiveType,
    rebates::{Rebate, RebateRate},
};

/// Rebate Fixture
#[derive(Debug, Deserialize)]
pub struct RebateFixture {
    /// Incentive type (e.g., "fixed-rate-rebate")
    pub incentive: IncentiveType,

    /// Rebate amount (e.g., "2.50 GBP"), zero when omitted
    #[serde(default)]
    pub amount: Option<String>,

    /// Rebate percentage (e.g., "5%" or "0.05"), zero when omitted
    #[serde(default)]
    pub percentage: Option<String>,
}

impl RebateFixture {
    /// Build the rebate identified by `identifier`.
    ///
    /// # Errors
    ///
    /// Returns an error if the amount or percentage cannot be parsed, or if the
    /// amount is not in `currency`.
    pub fn into_rebate(
        self,
        identifier: String,
        currency: &'static Currency,
    ) -> Result<Rebate, FixtureError> {
        let amount = match self.amount.as_deref() {
            Some(amount) => parse_fixture_amount(amount, currency)?,
            None => Money::from_minor(0, currency),
        };

        let percentage = match self.percentage.as_deref() {
            Some(percentage) => percentage.parse::<RebateRate>()?,
            None => RebateRate::ZERO,
        };

        Ok(Rebate {
            identifier,
            incentive: self.incentive,
            amount,
            percentage,
        })
    }
}
