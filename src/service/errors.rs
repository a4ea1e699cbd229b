//! Rebate service errors.

use thiserror::Error;

use crate::stores::StoreError;

/// Errors that abort a rebate calculation.
///
/// Missing entities and inapplicable rebates are not errors; they produce a
/// failed [`CalculateRebateResult`](super::CalculateRebateResult).
#[derive(Debug, Error)]
pub enum RebateServiceError {
    /// Resolving the rebate or product failed.
    #[error("failed to resolve rebate or product")]
    Lookup(#[source] StoreError),

    /// Recording the calculated amount failed.
    #[error("failed to store calculation result")]
    Commit(#[source] StoreError),
}
