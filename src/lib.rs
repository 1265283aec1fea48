//! # Storefront
//!
//! > **Session-scoped cart and wishlist stores for an online shop.**
//!
//! Each collection lives in its own store built on [`store_framework`]: one task owns the
//! aggregate, applies mutations in the order they were sent, writes the whole collection to
//! its storage slot after every change and publishes the result to subscribers.
//!
//! ## 🗺️ Module Tour
//!
//! ### 1. The Data ([`model`])
//! Plain serializable records: [`LineItem`](model::LineItem),
//! [`WishlistEntry`](model::WishlistEntry) and the [`ProductId`](model::ProductId) key.
//!
//! ### 2. The Stores ([`cart`], [`wishlist`])
//! The aggregates and their transitions.
//! - **Cart**: one line per product, quantities replace on re-add, totals derived on read.
//! - **Wishlist**: one entry per product, the first saved entry wins.
//!
//! ### 3. The Interface ([`clients`])
//! [`CartClient`](clients::CartClient) and [`WishlistClient`](clients::WishlistClient) hide
//! the message passing and map store failures to domain errors.
//!
//! ### 4. The Orchestrator ([`lifecycle`])
//! [`Session`](lifecycle::Session) hydrates and spawns both stores and shuts them down.
//!
//! ## 🚀 Quick Start
//!
//! ```rust
//! use rust_decimal::Decimal;
//! use storefront::lifecycle::Session;
//! use storefront::model::{LineItem, ProductId, WishlistEntry};
//! use store_framework::{KeyValueStorage, MemoryStorage};
//!
//! #[tokio::main]
//! async fn main() {
//!     let storage = MemoryStorage::new();
//!     let session = Session::start(storage.shared());
//!
//!     let negroni = LineItem::new(5u32, "Negroni kit", Decimal::new(3200, 2), "/img/5.webp", 2);
//!     session.cart.add_to_cart(negroni).await.unwrap();
//!
//!     let bitters = WishlistEntry::new(9u32, "Bitters", Decimal::new(1150, 2), "/img/9.webp", "bitters");
//!     session.wishlist.add_to_wishlist(bitters).await.unwrap();
//!     session.move_to_cart(ProductId(9)).await.unwrap();
//!
//!     assert_eq!(session.cart.total_items().await.unwrap(), 3);
//!     assert_eq!(session.cart.total_price().await.unwrap(), Decimal::new(7550, 2));
//!     assert!(storage.get_item("cart").unwrap().is_some());
//!
//!     session.shutdown().await.unwrap();
//! }
//! ```
//!
//! ## 🧪 Testing
//!
//! See [`store_framework::mock`] for testing the clients without spawning a store.

pub mod cart;
pub mod clients;
pub mod lifecycle;
pub mod model;
pub mod wishlist;
