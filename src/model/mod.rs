//! Plain data carried by the session stores.

pub mod line_item;
pub mod product;
pub mod wishlist_entry;

pub use line_item::*;
pub use product::*;
pub use wishlist_entry::*;
