//! Rebate Service Models

use rust_decimal::Decimal;

use crate::money::Amount;

/// Request to calculate and record a rebate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CalculateRebateRequest {
    /// Rebate to calculate
    pub rebate_identifier: String,

    /// Product the rebate is claimed against
    pub product_identifier: String,

    /// Quantity of product purchased
    pub volume: Decimal,
}

impl CalculateRebateRequest {
    /// Create a new request.
    pub fn new(
        rebate_identifier: impl Into<String>,
        product_identifier: impl Into<String>,
        volume: Decimal,
    ) -> Self {
        Self {
            rebate_identifier: rebate_identifier.into(),
            product_identifier: product_identifier.into(),
            volume,
        }
    }
}

/// Result of a rebate calculation.
///
/// A failed calculation has no amount rather than a zero amount.
#[derive(Debug, Clone, PartialEq)]
pub struct CalculateRebateResult {
    rebate_amount: Option<Amount>,
}

impl CalculateRebateResult {
    /// A successful calculation worth `amount`.
    pub fn success(amount: Amount) -> Self {
        Self {
            rebate_amount: Some(amount),
        }
    }

    /// A failed calculation.
    pub fn failure() -> Self {
        Self {
            rebate_amount: None,
        }
    }

    /// Whether the rebate was calculated and recorded.
    pub fn is_success(&self) -> bool {
        self.rebate_amount.is_some()
    }

    /// The recorded rebate amount, present only on success.
    pub fn rebate_amount(&self) -> Option<&Amount> {
        self.rebate_amount.as_ref()
    }
}
