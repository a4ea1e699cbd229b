//! Incentives
//!
//! The closed set of rebate calculation rules, and the set of rules a product
//! accepts rebates under.

use std::{fmt, iter::Copied, slice};

use serde::Deserialize;
use smallvec::SmallVec;

/// Incentive Type
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum IncentiveType {
    /// A flat amount, independent of volume.
    FixedCashAmount,

    /// A percentage of the product price, per unit of volume.
    FixedRateRebate,

    /// A flat amount per unit of measure.
    AmountPerUom,
}

impl IncentiveType {
    /// Every incentive type, in declaration order.
    pub const ALL: [IncentiveType; 3] = [
        IncentiveType::FixedCashAmount,
        IncentiveType::FixedRateRebate,
        IncentiveType::AmountPerUom,
    ];
}

impl fmt::Display for IncentiveType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            IncentiveType::FixedCashAmount => "fixed-cash-amount",
            IncentiveType::FixedRateRebate => "fixed-rate-rebate",
            IncentiveType::AmountPerUom => "amount-per-uom",
        };

        f.write_str(name)
    }
}

/// Set of incentive types a product supports.
///
/// Members are kept sorted and unique, so two sets with the same members
/// compare equal regardless of insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(from = "Vec<IncentiveType>")]
pub struct SupportedIncentives {
    incentives: SmallVec<[IncentiveType; 3]>,
}

impl SupportedIncentives {
    /// A set with no supported incentives.
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// A set supporting every incentive type.
    #[must_use]
    pub fn all() -> Self {
        IncentiveType::ALL.into_iter().collect()
    }

    /// Add an incentive type to the set.
    ///
    /// Returns `false` if it was already present.
    pub fn insert(&mut self, incentive: IncentiveType) -> bool {
        match self.incentives.binary_search(&incentive) {
            Ok(_) => false,
            Err(idx) => {
                self.incentives.insert(idx, incentive);
                true
            }
        }
    }

    /// Whether the set contains the incentive type.
    pub fn contains(&self, incentive: IncentiveType) -> bool {
        self.incentives.binary_search(&incentive).is_ok()
    }

    /// Number of supported incentive types.
    pub fn len(&self) -> usize {
        self.incentives.len()
    }

    /// Whether no incentive types are supported.
    pub fn is_empty(&self) -> bool {
        self.incentives.is_empty()
    }

    /// Iterate over the supported incentive types in declaration order.
    pub fn iter(&self) -> Copied<slice::Iter<'_, IncentiveType>> {
        self.incentives.iter().copied()
    }
}

impl<'a> IntoIterator for &'a SupportedIncentives {
    type Item = IncentiveType;
    type IntoIter = Copied<slice::Iter<'a, IncentiveType>>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl FromIterator<IncentiveType> for SupportedIncentives {
    fn from_iter<I: IntoIterator<Item = IncentiveType>>(iter: I) -> Self {
        let mut set = Self::empty();

        for incentive in iter {
            set.insert(incentive);
        }

        set
    }
}

impl From<Vec<IncentiveType>> for SupportedIncentives {
    fn from(incentives: Vec<IncentiveType>) -> Self {
        incentives.into_iter().collect()
    }
}

impl<const N: usize> From<[IncentiveType; N]> for SupportedIncentives {
    fn from(incentives: [IncentiveType; N]) -> Self {
        incentives.into_iter().collect()
    }
}
