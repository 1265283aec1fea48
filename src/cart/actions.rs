//! Mutations accepted by the cart store.
//!
//! Each variant maps 1:1 onto a [`Cart`](crate::cart::Cart) operation and is applied by
//! [`StoreState::apply`](store_framework::StoreState::apply).

use crate::model::{LineItem, ProductId};

/// Cart mutations. Every one of them is followed by a full write of the `cart` slot.
#[derive(Debug, Clone, PartialEq)]
pub enum CartAction {
    /// Insert a line, or set the quantity of the existing line with the same id.
    Add(LineItem),
    /// Remove a line. No-op when absent.
    Remove(ProductId),
    /// Set a line's quantity; `<= 0` removes the line, values above `u32::MAX` clamp.
    /// No-op when absent.
    UpdateQuantity(ProductId, i64),
    /// Empty the cart.
    Clear,
}
