//! Store errors.

use thiserror::Error;

/// Errors raised by a store backend.
///
/// A missing rebate or product is not an error; lookups return `None`.
#[derive(Debug, Error)]
pub enum StoreError {
    /// A writer panicked while holding the store lock.
    #[error("store lock poisoned")]
    Poisoned,

    /// The backing storage failed.
    #[error("store backend error: {0}")]
    Backend(String),
}
