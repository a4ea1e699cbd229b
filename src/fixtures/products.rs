//! Product Fixtures

use rusty_money::{Money, iso::Currency};
use serde::Deserialize;

use crate::{
    fixtures::{FixtureError, parse_fixture_amount},
    incentives::SupportedIncentives,
    products::Product,
};

/// Product Fixture
#[derive(Debug, Deserialize)]
pub struct ProductFixture {
    /// Product unit price (e.g., "10.00 GBP"), zero when omitted
    #[serde(default)]
    pub price: Option<String>,

    /// Incentive types the product supports
    #[serde(default)]
    pub supported_incentives: SupportedIncentives,
}

impl ProductFixture {
    /// Build the product identified by `identifier`.
    ///
    /// # Errors
    ///
    /// Returns an error if the price cannot be parsed or is not in `currency`.
    pub fn into_product(
        self,
        identifier: String,
        currency: &'static Currency,
    ) -> Result<Product, FixtureError> {
        let price = match self.price.as_deref() {
            Some(price) => parse_fixture_amount(price, currency)?,
            None => Money::from_minor(0, currency),
        };

        Ok(Product {
            identifier,
            price,
            supported_incentives: self.supported_incentives,
        })
    }
}
