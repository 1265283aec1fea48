//! # Cart Store
//!
//! The shopping cart: ordered line items with derived totals.
//!
//! ## Structure
//!
//! - [`state`] - the [`Cart`] aggregate and its [`StoreState`](store_framework::StoreState) implementation
//! - [`actions`] - [`CartAction`], one variant per mutation
//! - [`error`] - [`CartError`] for type-safe error handling
//! - [`new()`] - Factory function that creates the store and its client
//!
//! ## Quantity semantics
//!
//! Adding a product that is already in the cart **sets** its quantity to the incoming value
//! rather than incrementing it:
//!
//! ```rust
//! use rust_decimal::Decimal;
//! use storefront::cart::Cart;
//! use storefront::model::LineItem;
//!
//! let mut cart = Cart::new();
//! cart.add_to_cart(LineItem::new(5u32, "Campari", Decimal::new(2299, 2), "/campari.webp", 2));
//! cart.add_to_cart(LineItem::new(5u32, "Campari", Decimal::new(2299, 2), "/campari.webp", 7));
//!
//! assert_eq!(cart.len(), 1);
//! assert_eq!(cart.total_items(), 7);
//! ```

pub mod actions;
pub mod error;
pub mod state;

pub use actions::*;
pub use error::*;
pub use state::*;

use crate::clients::CartClient;
use store_framework::{SharedStorage, StoreActor};

/// Creates a hydrated cart store and its client.
pub fn new(storage: SharedStorage) -> (StoreActor<Cart>, CartClient) {
    let (actor, client) = StoreActor::new(32, storage);
    (actor, CartClient::new(client))
}
