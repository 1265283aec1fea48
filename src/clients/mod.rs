//! Typed wrappers around [`StoreClient`](store_framework::StoreClient), one per store.
//!
//! Both implement [`StoreHandle`](store_framework::StoreHandle), which supplies `snapshot`
//! and `subscribe`.

pub mod cart_client;
pub mod wishlist_client;

pub use cart_client::*;
pub use wishlist_client::*;
