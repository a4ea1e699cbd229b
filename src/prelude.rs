//! Rebates prelude.
//!
//! Convenience exports for common library consumers.

pub use crate::{
    calculator::{Inapplicable, RebateField, RebateOutcome, calculate},
    fixtures::{Fixture, FixtureError},
    incentives::{IncentiveType, SupportedIncentives},
    money::{Amount, MoneyParseError, parse_amount},
    products::Product,
    rebates::{RateParseError, Rebate, RebateRate},
    service::{
        CalculateRebateRequest, CalculateRebateResult, RebateService, RebateServiceError,
        StoreRebateService,
    },
    stores::{CalculationRecord, InMemoryStore, ProductStore, RebateStore, StoreError},
};
