//! Error types for the wishlist store.

use thiserror::Error;

/// Errors that can occur during wishlist operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum WishlistError {
    /// The wishlist store is not running, i.e. it was used outside of an active session.
    #[error("Wishlist store unavailable: {0}")]
    StoreUnavailable(String),
}

impl From<String> for WishlistError {
    fn from(msg: String) -> Self {
        WishlistError::StoreUnavailable(msg)
    }
}
