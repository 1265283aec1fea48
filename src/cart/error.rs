//! Error types for the cart store.

use thiserror::Error;

/// Errors that can occur during cart operations.
///
/// Cart transitions themselves cannot fail: unknown ids are no-ops. What can fail is
/// reaching the store at all.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum CartError {
    /// The cart store is not running, i.e. it was used outside of an active session.
    #[error("Cart store unavailable: {0}")]
    StoreUnavailable(String),
}

impl From<String> for CartError {
    fn from(msg: String) -> Self {
        CartError::StoreUnavailable(msg)
    }
}
