//! Products

use crate::{incentives::SupportedIncentives, money::Amount};

/// Product
#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    /// Identifier the product was resolved by
    pub identifier: String,

    /// Unit price, used by fixed rate rebates
    pub price: Amount,

    /// Incentive types rebates may be calculated under for this product
    pub supported_incentives: SupportedIncentives,
}
