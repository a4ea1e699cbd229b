//! Money

use rust_decimal::Decimal;
use rusty_money::{
    Money,
    iso::{Currency, EUR, GBP, USD},
};
use thiserror::Error;

/// Monetary amount in an ISO currency.
pub type Amount = Money<'static, Currency>;

/// Errors parsing a monetary amount.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum MoneyParseError {
    /// Not in the `AMOUNT CURRENCY` format, or the amount is not a decimal.
    #[error("invalid amount: {0}")]
    InvalidAmount(String),

    /// Unknown currency code
    #[error("unknown currency code: {0}")]
    UnknownCurrency(String),
}

/// Parse an amount string (e.g., "2.50 GBP") into money.
///
/// The amount is kept exactly as written; no rounding to minor units.
///
/// # Errors
///
/// - [`MoneyParseError::InvalidAmount`]: not two whitespace separated parts,
///   or the first part is not a decimal.
/// - [`MoneyParseError::UnknownCurrency`]: the currency code is not supported.
pub fn parse_amount(s: &str) -> Result<Amount, MoneyParseError> {
    let mut parts = s.split_whitespace();

    let (Some(amount), Some(code), None) = (parts.next(), parts.next(), parts.next()) else {
        return Err(MoneyParseError::InvalidAmount(format!(
            "expected format 'AMOUNT CURRENCY', got: {s}"
        )));
    };

    let amount = amount
        .parse::<Decimal>()
        .map_err(|_err| MoneyParseError::InvalidAmount(s.to_string()))?;

    Ok(Money::from_decimal(amount, parse_currency(code)?))
}

/// Look up a supported ISO currency by its alphabetic code.
///
/// # Errors
///
/// Returns [`MoneyParseError::UnknownCurrency`] for anything other than GBP,
/// USD or EUR.
pub fn parse_currency(code: &str) -> Result<&'static Currency, MoneyParseError> {
    match code {
        "GBP" => Ok(GBP),
        "USD" => Ok(USD),
        "EUR" => Ok(EUR),
        other => Err(MoneyParseError::UnknownCurrency(other.to_string())),
    }
}
