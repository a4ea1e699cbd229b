//! Rebate Calculator
//!
//! Decides whether a rebate applies to a product at a given volume, and if so,
//! how much it is worth.
//!
//! | Incentive           | Applies when                               | Amount                       |
//! |---------------------|--------------------------------------------|------------------------------|
//! | Fixed cash amount   | amount is positive                         | amount                       |
//! | Fixed rate rebate   | percentage, price and volume are positive  | price × percentage × volume |
//! | Amount per UOM      | amount and volume are positive             | amount × volume              |
//!
//! In every case the product must also support the rebate's incentive type.

use std::fmt;

use rust_decimal::Decimal;
use rusty_money::Money;
use thiserror::Error;

use crate::{incentives::IncentiveType, money::Amount, products::Product, rebates::Rebate};

/// Value a rebate rule depends on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RebateField {
    /// Rebate amount
    Amount,

    /// Rebate percentage
    Percentage,

    /// Product price
    Price,

    /// Requested volume
    Volume,
}

impl fmt::Display for RebateField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            RebateField::Amount => "amount",
            RebateField::Percentage => "percentage",
            RebateField::Price => "price",
            RebateField::Volume => "volume",
        };

        f.write_str(name)
    }
}

/// Why a rebate does not apply.
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum Inapplicable {
    /// The product does not accept rebates of this incentive type.
    #[error("product does not support {0} rebates")]
    UnsupportedIncentive(IncentiveType),

    /// A value the rule depends on is zero.
    #[error("{0} is zero")]
    ZeroValue(RebateField),

    /// A value the rule depends on is negative.
    #[error("{0} is negative")]
    NegativeValue(RebateField),

    /// The amount cannot be represented.
    #[error("rebate amount overflowed")]
    Overflow,
}

/// Outcome of evaluating a rebate rule.
#[derive(Debug, Clone, PartialEq)]
#[must_use]
pub enum RebateOutcome {
    /// The rebate applies and is worth this amount.
    Applicable(Amount),

    /// The rebate does not apply.
    Inapplicable(Inapplicable),
}

impl RebateOutcome {
    /// Whether the rebate applies
    pub fn is_applicable(&self) -> bool {
        matches!(self, RebateOutcome::Applicable(_))
    }

    /// The rebate amount, if it applies
    pub fn amount(&self) -> Option<&Amount> {
        match self {
            RebateOutcome::Applicable(amount) => Some(amount),
            RebateOutcome::Inapplicable(_) => None,
        }
    }
}

impl From<Result<Amount, Inapplicable>> for RebateOutcome {
    fn from(result: Result<Amount, Inapplicable>) -> Self {
        match result {
            Ok(amount) => RebateOutcome::Applicable(amount),
            Err(reason) => RebateOutcome::Inapplicable(reason),
        }
    }
}

/// Evaluate the rebate's rule for a product and volume.
///
/// Pure: the same inputs always give the same outcome.
pub fn calculate(rebate: &Rebate, product: &Product, volume: Decimal) -> RebateOutcome {
    if !product.supported_incentives.contains(rebate.incentive) {
        return RebateOutcome::Inapplicable(Inapplicable::UnsupportedIncentive(rebate.incentive));
    }

    let result = match rebate.incentive {
        IncentiveType::FixedCashAmount => fixed_cash_amount(rebate),
        IncentiveType::FixedRateRebate => fixed_rate_rebate(rebate, product, volume),
        IncentiveType::AmountPerUom => amount_per_uom(rebate, volume),
    };

    result.into()
}

fn fixed_cash_amount(rebate: &Rebate) -> Result<Amount, Inapplicable> {
    require_positive(&[(RebateField::Amount, *rebate.amount.amount())])?;

    Ok(rebate.amount)
}

fn fixed_rate_rebate(
    rebate: &Rebate,
    product: &Product,
    volume: Decimal,
) -> Result<Amount, Inapplicable> {
    let percentage = rebate.percentage.value();
    let price = *product.price.amount();

    require_positive(&[
        (RebateField::Percentage, percentage),
        (RebateField::Price, price),
        (RebateField::Volume, volume),
    ])?;

    let amount = price
        .checked_mul(percentage)
        .and_then(|value| value.checked_mul(volume))
        .ok_or(Inapplicable::Overflow)?;

    Ok(Money::from_decimal(amount, product.price.currency()))
}

fn amount_per_uom(rebate: &Rebate, volume: Decimal) -> Result<Amount, Inapplicable> {
    let per_unit = *rebate.amount.amount();

    require_positive(&[(RebateField::Amount, per_unit), (RebateField::Volume, volume)])?;

    let amount = per_unit
        .checked_mul(volume)
        .ok_or(Inapplicable::Overflow)?;

    Ok(Money::from_decimal(amount, rebate.amount.currency()))
}

/// Zero checks run over every field before any sign check.
fn require_positive(values: &[(RebateField, Decimal)]) -> Result<(), Inapplicable> {
    if let Some((field, _)) = values.iter().find(|(_, value)| value.is_zero()) {
        return Err(Inapplicable::ZeroValue(*field));
    }

    if let Some((field, _)) = values.iter().find(|(_, value)| value.is_sign_negative()) {
        return Err(Inapplicable::NegativeValue(*field));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use rusty_money::iso::{GBP, USD};

    use crate::{incentives::SupportedIncentives, rebates::RebateRate};

    use super::*;

    fn rebate(incentive: IncentiveType, amount: Amount, percentage: Decimal) -> Rebate {
        Rebate {
            identifier: "rebate".to_string(),
            incentive,
            amount,
            percentage: RebateRate::new(percentage),
        }
    }

    fn product(price: Amount, supported: impl Into<SupportedIncentives>) -> Product {
        Product {
            identifier: "product".to_string(),
            price,
            supported_incentives: supported.into(),
        }
    }

    #[test]
    fn fixed_cash_amount_returns_rebate_amount() {
        let rebate = rebate(
            IncentiveType::FixedCashAmount,
            Money::from_minor(100_00, GBP),
            Decimal::ZERO,
        );
        let product = product(Money::from_minor(0, GBP), [IncentiveType::FixedCashAmount]);

        let outcome = calculate(&rebate, &product, Decimal::ZERO);

        assert_eq!(
            outcome,
            RebateOutcome::Applicable(Money::from_minor(100_00, GBP))
        );
    }

    #[test]
    fn fixed_cash_amount_zero_amount_is_inapplicable() {
        let rebate = rebate(
            IncentiveType::FixedCashAmount,
            Money::from_minor(0, GBP),
            Decimal::ONE,
        );
        let product = product(Money::from_minor(10_00, GBP), SupportedIncentives::all());

        let outcome = calculate(&rebate, &product, Decimal::TEN);

        assert_eq!(
            outcome,
            RebateOutcome::Inapplicable(Inapplicable::ZeroValue(RebateField::Amount))
        );
    }

    #[test]
    fn fixed_rate_rebate_multiplies_price_percentage_and_volume() {
        let rebate = rebate(
            IncentiveType::FixedRateRebate,
            Money::from_minor(0, GBP),
            Decimal::new(5, 2),
        );
        let product = product(Money::from_minor(10_00, GBP), [IncentiveType::FixedRateRebate]);

        let outcome = calculate(&rebate, &product, Decimal::from(20));

        assert_eq!(
            outcome.amount(),
            Some(&Money::from_decimal(Decimal::new(10_00, 2), GBP))
        );
    }

    #[test]
    fn fixed_rate_rebate_uses_product_currency() {
        let rebate = rebate(
            IncentiveType::FixedRateRebate,
            Money::from_minor(0, GBP),
            Decimal::new(1, 1),
        );
        let product = product(Money::from_minor(5_00, USD), [IncentiveType::FixedRateRebate]);

        let outcome = calculate(&rebate, &product, Decimal::TWO);

        assert_eq!(outcome.amount().map(Money::currency), Some(USD));
    }

    #[test]
    fn fixed_rate_rebate_zero_volume_is_inapplicable() {
        let rebate = rebate(
            IncentiveType::FixedRateRebate,
            Money::from_minor(0, GBP),
            Decimal::new(5, 2),
        );
        let product = product(Money::from_minor(10_00, GBP), [IncentiveType::FixedRateRebate]);

        let outcome = calculate(&rebate, &product, Decimal::ZERO);

        assert_eq!(
            outcome,
            RebateOutcome::Inapplicable(Inapplicable::ZeroValue(RebateField::Volume))
        );
    }

    #[test]
    fn fixed_rate_rebate_zero_percentage_or_price_is_inapplicable() {
        let no_rate = rebate(
            IncentiveType::FixedRateRebate,
            Money::from_minor(0, GBP),
            Decimal::ZERO,
        );
        let rate = rebate(
            IncentiveType::FixedRateRebate,
            Money::from_minor(0, GBP),
            Decimal::new(5, 2),
        );
        let priced = product(Money::from_minor(10_00, GBP), [IncentiveType::FixedRateRebate]);
        let free = product(Money::from_minor(0, GBP), [IncentiveType::FixedRateRebate]);

        assert_eq!(
            calculate(&no_rate, &priced, Decimal::ONE),
            RebateOutcome::Inapplicable(Inapplicable::ZeroValue(RebateField::Percentage))
        );
        assert_eq!(
            calculate(&rate, &free, Decimal::ONE),
            RebateOutcome::Inapplicable(Inapplicable::ZeroValue(RebateField::Price))
        );
    }

    #[test]
    fn amount_per_uom_multiplies_amount_and_volume() {
        let rebate = rebate(
            IncentiveType::AmountPerUom,
            Money::from_minor(2_50, GBP),
            Decimal::ZERO,
        );
        let product = product(Money::from_minor(0, GBP), [IncentiveType::AmountPerUom]);

        let outcome = calculate(&rebate, &product, Decimal::ONE_HUNDRED);

        assert_eq!(
            outcome,
            RebateOutcome::Applicable(Money::from_minor(250_00, GBP))
        );
    }

    #[test]
    fn amount_per_uom_zero_volume_is_inapplicable() {
        let rebate = rebate(
            IncentiveType::AmountPerUom,
            Money::from_minor(2_50, GBP),
            Decimal::ZERO,
        );
        let product = product(Money::from_minor(0, GBP), [IncentiveType::AmountPerUom]);

        let outcome = calculate(&rebate, &product, Decimal::ZERO);

        assert!(!outcome.is_applicable());
        assert!(outcome.amount().is_none());
    }

    #[test]
    fn unsupported_incentive_is_inapplicable_for_every_type() {
        for incentive in IncentiveType::ALL {
            let rebate = rebate(incentive, Money::from_minor(5_00, GBP), Decimal::new(5, 2));

            let supported: SupportedIncentives = IncentiveType::ALL
                .into_iter()
                .filter(|other| *other != incentive)
                .collect();

            let product = product(Money::from_minor(10_00, GBP), supported);

            assert_eq!(
                calculate(&rebate, &product, Decimal::TEN),
                RebateOutcome::Inapplicable(Inapplicable::UnsupportedIncentive(incentive)),
                "{incentive} should not apply to a product without it"
            );
        }
    }

    fn assert_negative(outcome: RebateOutcome, field: RebateField) {
        assert_eq!(
            outcome,
            RebateOutcome::Inapplicable(Inapplicable::NegativeValue(field))
        );
    }

    #[test]
    fn fixed_cash_amount_negative_amount_is_inapplicable() {
        let rebate = rebate(
            IncentiveType::FixedCashAmount,
            Money::from_minor(-1_00, GBP),
            Decimal::ZERO,
        );
        let product = product(Money::from_minor(10_00, GBP), [IncentiveType::FixedCashAmount]);

        assert_negative(calculate(&rebate, &product, Decimal::ONE), RebateField::Amount);
    }

    #[test]
    fn fixed_rate_rebate_negative_values_are_inapplicable() {
        let negative_rate = rebate(
            IncentiveType::FixedRateRebate,
            Money::from_minor(0, GBP),
            Decimal::new(-5, 2),
        );
        let rate = rebate(
            IncentiveType::FixedRateRebate,
            Money::from_minor(0, GBP),
            Decimal::new(5, 2),
        );
        let priced = product(Money::from_minor(10_00, GBP), [IncentiveType::FixedRateRebate]);
        let negative_price = product(
            Money::from_minor(-10_00, GBP),
            [IncentiveType::FixedRateRebate],
        );

        assert_negative(
            calculate(&negative_rate, &priced, Decimal::ONE),
            RebateField::Percentage,
        );
        assert_negative(
            calculate(&rate, &negative_price, Decimal::ONE),
            RebateField::Price,
        );
        assert_negative(
            calculate(&rate, &priced, Decimal::NEGATIVE_ONE),
            RebateField::Volume,
        );
    }

    #[test]
    fn amount_per_uom_negative_values_are_inapplicable() {
        let negative_amount = rebate(
            IncentiveType::AmountPerUom,
            Money::from_minor(-2_50, GBP),
            Decimal::ZERO,
        );
        let per_unit = rebate(
            IncentiveType::AmountPerUom,
            Money::from_minor(2_50, GBP),
            Decimal::ZERO,
        );
        let product = product(Money::from_minor(0, GBP), [IncentiveType::AmountPerUom]);

        assert_negative(
            calculate(&negative_amount, &product, Decimal::TEN),
            RebateField::Amount,
        );
        assert_negative(
            calculate(&per_unit, &product, Decimal::NEGATIVE_ONE),
            RebateField::Volume,
        );
    }

    #[test]
    fn zero_is_reported_before_negative() {
        let rebate = rebate(
            IncentiveType::AmountPerUom,
            Money::from_minor(-2_50, GBP),
            Decimal::ZERO,
        );
        let product = product(Money::from_minor(0, GBP), [IncentiveType::AmountPerUom]);

        let outcome = calculate(&rebate, &product, Decimal::ZERO);

        assert_eq!(
            outcome,
            RebateOutcome::Inapplicable(Inapplicable::ZeroValue(RebateField::Volume))
        );
    }

    #[test]
    fn unused_fields_are_ignored() {
        // Negative percentage and price are irrelevant to a fixed cash amount.
        let rebate = rebate(
            IncentiveType::FixedCashAmount,
            Money::from_minor(1_00, GBP),
            Decimal::NEGATIVE_ONE,
        );
        let product = product(Money::from_minor(-1_00, GBP), [IncentiveType::FixedCashAmount]);

        let outcome = calculate(&rebate, &product, Decimal::NEGATIVE_ONE);

        assert!(outcome.is_applicable());
    }

    #[test]
    fn overflow_is_inapplicable() {
        let rebate = rebate(
            IncentiveType::AmountPerUom,
            Money::from_decimal(Decimal::MAX, GBP),
            Decimal::ZERO,
        );
        let product = product(Money::from_minor(0, GBP), [IncentiveType::AmountPerUom]);

        let outcome = calculate(&rebate, &product, Decimal::TEN);

        assert_eq!(outcome, RebateOutcome::Inapplicable(Inapplicable::Overflow));
    }

    #[test]
    fn calculate_is_repeatable() {
        let rebate = rebate(
            IncentiveType::FixedRateRebate,
            Money::from_minor(0, GBP),
            Decimal::new(5, 2),
        );
        let product = product(Money::from_minor(3_33, GBP), SupportedIncentives::all());

        let first = calculate(&rebate, &product, Decimal::new(7, 0));
        let second = calculate(&rebate, &product, Decimal::new(7, 0));

        assert_eq!(first, second);
    }
}
