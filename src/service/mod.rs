//! Rebate service.
//!
//! Resolves the rebate and product for a request, runs the calculator and, only
//! when the rebate applies, records the amount against the rebate.

use mockall::automock;
use tracing::{debug, info, warn};

use crate::{
    calculator::{RebateOutcome, calculate},
    stores::{ProductStore, RebateStore},
};

pub mod errors;
pub mod models;

pub use errors::RebateServiceError;
pub use models::{CalculateRebateRequest, CalculateRebateResult};

/// Calculates and records rebates.
#[automock]
pub trait RebateService: Send + Sync {
    /// Calculate the rebate for a request, recording the amount on success.
    ///
    /// # Errors
    ///
    /// Returns a [`RebateServiceError`] if a store fails. A missing rebate or
    /// product, or an inapplicable rebate, is a failed result, not an error.
    fn calculate(
        &self,
        request: &CalculateRebateRequest,
    ) -> Result<CalculateRebateResult, RebateServiceError>;
}

/// Rebate service backed by a rebate store and a product store.
#[derive(Debug, Clone)]
pub struct StoreRebateService<R, P> {
    rebates: R,
    products: P,
}

impl<R: RebateStore, P: ProductStore> StoreRebateService<R, P> {
    /// Create a service over the given stores.
    pub fn new(rebates: R, products: P) -> Self {
        Self { rebates, products }
    }
}

impl<R: RebateStore, P: ProductStore> RebateService for StoreRebateService<R, P> {
    fn calculate(
        &self,
        request: &CalculateRebateRequest,
    ) -> Result<CalculateRebateResult, RebateServiceError> {
        let rebate = self
            .rebates
            .get_rebate(&request.rebate_identifier)
            .map_err(RebateServiceError::Lookup)?;

        let Some(rebate) = rebate else {
            warn!(rebate = %request.rebate_identifier, "rebate not found");

            return Ok(CalculateRebateResult::failure());
        };

        let product = self
            .products
            .get_product(&request.product_identifier)
            .map_err(RebateServiceError::Lookup)?;

        let Some(product) = product else {
            warn!(product = %request.product_identifier, "product not found");

            return Ok(CalculateRebateResult::failure());
        };

        match calculate(&rebate, &product, request.volume) {
            RebateOutcome::Applicable(amount) => {
                self.rebates
                    .store_calculation_result(&rebate, amount)
                    .map_err(RebateServiceError::Commit)?;

                info!(
                    rebate = %rebate.identifier,
                    product = %product.identifier,
                    incentive = %rebate.incentive,
                    volume = %request.volume,
                    %amount,
                    "rebate recorded"
                );

                Ok(CalculateRebateResult::success(amount))
            }
            RebateOutcome::Inapplicable(reason) => {
                debug!(
                    rebate = %rebate.identifier,
                    product = %product.identifier,
                    incentive = %rebate.incentive,
                    volume = %request.volume,
                    %reason,
                    "rebate not applicable"
                );

                Ok(CalculateRebateResult::failure())
            }
        }
    }
}
