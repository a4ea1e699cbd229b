//! Fixtures
//!
//! Rebates and products loaded from a YAML file:
//!
//! ```yaml
//! currency: GBP
//! rebates:
//!   cash-100:
//!     incentive: fixed-cash-amount
//!     amount: "100.00 GBP"
//! products:
//!   widget:
//!     price: "10.00 GBP"
//!     supported_incentives: [fixed-cash-amount]
//! ```

use std::{fs, path::Path};

use rustc_hash::FxHashMap;
use rusty_money::iso::{Currency, GBP};
use serde::Deserialize;
use thiserror::Error;

use crate::{
    fixtures::{products::ProductFixture, rebates::RebateFixture},
    money::{Amount, MoneyParseError, parse_amount, parse_currency},
    products::Product,
    rebates::{RateParseError, Rebate},
    stores::InMemoryStore,
};

pub mod products;
pub mod rebates;

/// Fixture Parsing Errors
#[derive(Debug, Error)]
pub enum FixtureError {
    /// IO error reading fixture files
    #[error("Failed to read fixture file: {0}")]
    Io(#[from] std::io::Error),

    /// YAML parsing error
    #[error("Failed to parse YAML: {0}")]
    Yaml(#[from] serde_norway::Error),

    /// Invalid amount or unknown currency
    #[error(transparent)]
    Money(#[from] MoneyParseError),

    /// Invalid percentage format
    #[error(transparent)]
    InvalidPercentage(#[from] RateParseError),

    /// Amount in a different currency to the fixture
    #[error("Currency mismatch: expected {expected}, found {found}")]
    CurrencyMismatch {
        /// Fixture currency code
        expected: String,

        /// Currency code found on the amount
        found: String,
    },
}

/// Fixture file layout
#[derive(Debug, Deserialize)]
pub struct RebatesFixture {
    /// Currency every amount must be in, GBP when omitted
    #[serde(default)]
    pub currency: Option<String>,

    /// Map of rebate identifier -> rebate fixture
    #[serde(default)]
    pub rebates: FxHashMap<String, RebateFixture>,

    /// Map of product identifier -> product fixture
    #[serde(default)]
    pub products: FxHashMap<String, ProductFixture>,
}

/// Rebates and products loaded from a fixture file, sorted by identifier.
#[derive(Debug, Clone)]
pub struct Fixture {
    currency: &'static Currency,
    rebates: Vec<Rebate>,
    products: Vec<Product>,
}

impl Fixture {
    /// Load a fixture from a YAML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or its contents are invalid.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, FixtureError> {
        let contents = fs::read_to_string(path)?;

        Self::from_yaml(&contents)
    }

    /// Load a fixture from YAML source.
    ///
    /// # Errors
    ///
    /// Returns an error if the YAML cannot be parsed, an amount or percentage is
    /// invalid, or an amount is not in the fixture currency.
    pub fn from_yaml(yaml: &str) -> Result<Self, FixtureError> {
        let fixture: RebatesFixture = serde_norway::from_str(yaml)?;

        let currency = match fixture.currency.as_deref() {
            Some(code) => parse_currency(code)?,
            None => GBP,
        };

        let mut rebates = fixture
            .rebates
            .into_iter()
            .map(|(identifier, rebate)| rebate.into_rebate(identifier, currency))
            .collect::<Result<Vec<_>, _>>()?;

        let mut products = fixture
            .products
            .into_iter()
            .map(|(identifier, product)| product.into_product(identifier, currency))
            .collect::<Result<Vec<_>, _>>()?;

        rebates.sort_by(|a, b| a.identifier.cmp(&b.identifier));
        products.sort_by(|a, b| a.identifier.cmp(&b.identifier));

        Ok(Self {
            currency,
            rebates,
            products,
        })
    }

    /// Fixture currency
    pub fn currency(&self) -> &'static Currency {
        self.currency
    }

    /// Get all rebates
    pub fn rebates(&self) -> &[Rebate] {
        &self.rebates
    }

    /// Get all products
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// Get a rebate by identifier
    pub fn rebate(&self, identifier: &str) -> Option<&Rebate> {
        self.rebates
            .iter()
            .find(|rebate| rebate.identifier == identifier)
    }

    /// Get a product by identifier
    pub fn product(&self, identifier: &str) -> Option<&Product> {
        self.products
            .iter()
            .find(|product| product.identifier == identifier)
    }

    /// Move the rebates and products into an in-memory store.
    pub fn into_store(self) -> InMemoryStore {
        InMemoryStore::with_entries(self.rebates, self.products)
    }
}

/// Parse an amount and check it is in the fixture currency.
pub(crate) fn parse_fixture_amount(
    s: &str,
    currency: &'static Currency,
) -> Result<Amount, FixtureError> {
    let amount = parse_amount(s)?;

    if amount.currency() != currency {
        return Err(FixtureError::CurrencyMismatch {
            expected: currency.iso_alpha_code.to_string(),
            found: amount.currency().iso_alpha_code.to_string(),
        });
    }

    Ok(amount)
}
