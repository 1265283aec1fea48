//! # Wishlist Store
//!
//! Saved products, one entry per product id, in the order they were saved.
//!
//! - [`state`] - the [`Wishlist`] aggregate
//! - [`actions`] - [`WishlistAction`]
//! - [`error`] - [`WishlistError`]
//! - [`new()`] - Factory function that creates the store and its client

pub mod actions;
pub mod error;
pub mod state;

pub use actions::*;
pub use error::*;
pub use state::*;

use crate::clients::WishlistClient;
use store_framework::{SharedStorage, StoreActor};

/// Creates a hydrated wishlist store and its client.
pub fn new(storage: SharedStorage) -> (StoreActor<Wishlist>, WishlistClient) {
    let (actor, client) = StoreActor::new(32, storage);
    (actor, WishlistClient::new(client))
}
