//! Rebate and product stores.
//!
//! The calculator only ever sees snapshots; stores own the lifecycle of rebates
//! and products and persist committed calculation results.

use std::sync::Arc;

use mockall::automock;

use crate::{money::Amount, products::Product, rebates::Rebate};

pub mod errors;
pub mod memory;

pub use errors::StoreError;
pub use memory::{CalculationRecord, InMemoryStore};

/// Resolves rebates and records calculation results against them.
#[automock]
pub trait RebateStore: Send + Sync {
    /// Resolve a rebate by identifier, `None` if there is no such rebate.
    ///
    /// # Errors
    ///
    /// Returns a [`StoreError`] if the backing storage cannot be read.
    fn get_rebate(&self, identifier: &str) -> Result<Option<Rebate>, StoreError>;

    /// Persist a committed calculation result for a rebate.
    ///
    /// # Errors
    ///
    /// Returns a [`StoreError`] if the backing storage cannot be written.
    fn store_calculation_result(&self, rebate: &Rebate, amount: Amount) -> Result<(), StoreError>;
}

/// Resolves products.
#[automock]
pub trait ProductStore: Send + Sync {
    /// Resolve a product by identifier, `None` if there is no such product.
    ///
    /// # Errors
    ///
    /// Returns a [`StoreError`] if the backing storage cannot be read.
    fn get_product(&self, identifier: &str) -> Result<Option<Product>, StoreError>;
}

impl<S: RebateStore + ?Sized> RebateStore for Arc<S> {
    fn get_rebate(&self, identifier: &str) -> Result<Option<Rebate>, StoreError> {
        (**self).get_rebate(identifier)
    }

    fn store_calculation_result(&self, rebate: &Rebate, amount: Amount) -> Result<(), StoreError> {
        (**self).store_calculation_result(rebate, amount)
    }
}

impl<S: ProductStore + ?Sized> ProductStore for Arc<S> {
    fn get_product(&self, identifier: &str) -> Result<Option<Product>, StoreError> {
        (**self).get_product(identifier)
    }
}

impl<S: RebateStore + ?Sized> RebateStore for &S {
    fn get_rebate(&self, identifier: &str) -> Result<Option<Rebate>, StoreError> {
        (**self).get_rebate(identifier)
    }

    fn store_calculation_result(&self, rebate: &Rebate, amount: Amount) -> Result<(), StoreError> {
        (**self).store_calculation_result(rebate, amount)
    }
}

impl<S: ProductStore + ?Sized> ProductStore for &S {
    fn get_product(&self, identifier: &str) -> Result<Option<Product>, StoreError> {
        (**self).get_product(identifier)
    }
}
