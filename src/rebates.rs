//! Rebates

use std::{fmt, str::FromStr};

use rust_decimal::Decimal;
use thiserror::Error;

use crate::{incentives::IncentiveType, money::Amount};

/// Rebate definition, as resolved from a rebate store.
#[derive(Debug, Clone, PartialEq)]
pub struct Rebate {
    /// Identifier the rebate was resolved by
    pub identifier: String,

    /// Calculation rule for this rebate
    pub incentive: IncentiveType,

    /// Flat amount, used by fixed cash amount and amount per UOM rebates
    pub amount: Amount,

    /// Rate applied to the product price, used by fixed rate rebates
    pub percentage: RebateRate,
}

/// Error parsing a rebate rate.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("invalid rebate rate: {0}")]
pub struct RateParseError(String);

/// Fractional rebate rate, where `1` is 100%.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RebateRate(Decimal);

impl RebateRate {
    /// Zero rate
    pub const ZERO: RebateRate = RebateRate(Decimal::ZERO);

    /// Create a rate from a fraction (`0.05` is 5%).
    #[must_use]
    pub const fn new(fraction: Decimal) -> Self {
        Self(fraction)
    }

    /// Create a rate from percentage points (`5` is 5%).
    #[must_use]
    pub fn from_percent(points: Decimal) -> Self {
        Self(points / Decimal::ONE_HUNDRED)
    }

    /// The rate as a fraction
    pub const fn value(&self) -> Decimal {
        self.0
    }
}

impl From<Decimal> for RebateRate {
    fn from(fraction: Decimal) -> Self {
        Self::new(fraction)
    }
}

impl fmt::Display for RebateRate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0.checked_mul(Decimal::ONE_HUNDRED) {
            Some(points) => write!(f, "{}%", points.normalize()),
            None => write!(f, "{}", self.0.normalize()),
        }
    }
}

/// Parses either percentage format ("5%") or fraction format ("0.05").
impl FromStr for RebateRate {
    type Err = RateParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();

        if let Some(points) = trimmed.strip_suffix('%') {
            let points = points
                .trim()
                .parse::<Decimal>()
                .map_err(|_err| RateParseError(s.to_string()))?;

            Ok(Self::from_percent(points))
        } else {
            let fraction = trimmed
                .parse::<Decimal>()
                .map_err(|_err| RateParseError(s.to_string()))?;

            Ok(Self::new(fraction))
        }
    }
}
