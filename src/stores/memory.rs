//! In-memory rebate and product store.

use std::sync::RwLock;

use rustc_hash::FxHashMap;

use crate::{
    money::Amount,
    products::Product,
    rebates::Rebate,
    stores::{ProductStore, RebateStore, StoreError},
};

/// A committed calculation result.
#[derive(Debug, Clone, PartialEq)]
pub struct CalculationRecord {
    /// Rebate the result was calculated for
    pub rebate: Rebate,

    /// Calculated rebate amount
    pub amount: Amount,
}

/// Map-backed store for rebates and products.
///
/// Committed calculation results are appended to a log, readable through
/// [`InMemoryStore::calculation_results`].
#[derive(Debug, Default)]
pub struct InMemoryStore {
    rebates: RwLock<FxHashMap<String, Rebate>>,
    products: RwLock<FxHashMap<String, Product>>,
    results: RwLock<Vec<CalculationRecord>>,
}

impl InMemoryStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store seeded with rebates and products, keyed by their identifiers.
    pub fn with_entries(
        rebates: impl IntoIterator<Item = Rebate>,
        products: impl IntoIterator<Item = Product>,
    ) -> Self {
        Self {
            rebates: RwLock::new(
                rebates
                    .into_iter()
                    .map(|rebate| (rebate.identifier.clone(), rebate))
                    .collect(),
            ),
            products: RwLock::new(
                products
                    .into_iter()
                    .map(|product| (product.identifier.clone(), product))
                    .collect(),
            ),
            results: RwLock::default(),
        }
    }

    /// Insert or replace a rebate, keyed by its identifier.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Poisoned`] if the store lock is poisoned.
    pub fn insert_rebate(&self, rebate: Rebate) -> Result<Option<Rebate>, StoreError> {
        let mut rebates = self.rebates.write().map_err(|_err| StoreError::Poisoned)?;

        Ok(rebates.insert(rebate.identifier.clone(), rebate))
    }

    /// Insert or replace a product, keyed by its identifier.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Poisoned`] if the store lock is poisoned.
    pub fn insert_product(&self, product: Product) -> Result<Option<Product>, StoreError> {
        let mut products = self.products.write().map_err(|_err| StoreError::Poisoned)?;

        Ok(products.insert(product.identifier.clone(), product))
    }

    /// Snapshot of every committed calculation result, oldest first.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Poisoned`] if the store lock is poisoned.
    pub fn calculation_results(&self) -> Result<Vec<CalculationRecord>, StoreError> {
        let results = self.results.read().map_err(|_err| StoreError::Poisoned)?;

        Ok(results.clone())
    }
}

impl RebateStore for InMemoryStore {
    fn get_rebate(&self, identifier: &str) -> Result<Option<Rebate>, StoreError> {
        let rebates = self.rebates.read().map_err(|_err| StoreError::Poisoned)?;

        Ok(rebates.get(identifier).cloned())
    }

    fn store_calculation_result(&self, rebate: &Rebate, amount: Amount) -> Result<(), StoreError> {
        let mut results = self.results.write().map_err(|_err| StoreError::Poisoned)?;

        results.push(CalculationRecord {
            rebate: rebate.clone(),
            amount,
        });

        Ok(())
    }
}

impl ProductStore for InMemoryStore {
    fn get_product(&self, identifier: &str) -> Result<Option<Product>, StoreError> {
        let products = self.products.read().map_err(|_err| StoreError::Poisoned)?;

        Ok(products.get(identifier).cloned())
    }
}
