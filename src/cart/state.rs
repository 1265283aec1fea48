//! The cart aggregate and its [`StoreState`] implementation.
//!
//! Invariants held after every transition:
//! - at most one [`LineItem`] per [`ProductId`], in insertion order;
//! - every stored quantity is at least 1;
//! - `total_items` and `total_price` are folds over the current lines, never stored.

use super::actions::CartAction;
use crate::model::{LineItem, ProductId};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use store_framework::StoreState;

/// Ordered line items. Persists as a bare JSON array of [`LineItem`]s.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(from = "Vec<LineItem>", into = "Vec<LineItem>")]
pub struct Cart {
    items: Vec<LineItem>,
}

impl Cart {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn items(&self) -> &[LineItem] {
        &self.items
    }

    pub fn get(&self, id: ProductId) -> Option<&LineItem> {
        self.items.iter().find(|item| item.id == id)
    }

    pub fn contains(&self, id: ProductId) -> bool {
        self.get(id).is_some()
    }

    /// Number of distinct lines.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Sum of quantities over all lines.
    pub fn total_items(&self) -> u64 {
        self.items.iter().map(|item| u64::from(item.quantity)).sum()
    }

    /// Sum of `unit_price × quantity` over all lines.
    ///
    /// Saturates instead of overflowing: a slot can hold prices no real catalog has.
    pub fn total_price(&self) -> Decimal {
        self.items
            .iter()
            .map(LineItem::line_total)
            .fold(Decimal::ZERO, Decimal::saturating_add)
    }

    /// Insert `item`, or replace the quantity of the line with the same id.
    ///
    /// The incoming quantity *replaces* the stored one; it is not added to it. Other fields
    /// of an existing line are left as they were. A quantity of 0 removes the line.
    pub fn add_to_cart(&mut self, item: LineItem) {
        if item.quantity == 0 {
            self.remove_from_cart(item.id);
            return;
        }

        match self.items.iter_mut().find(|line| line.id == item.id) {
            Some(line) => line.quantity = item.quantity,
            None => self.items.push(item),
        }
    }

    pub fn remove_from_cart(&mut self, id: ProductId) {
        self.items.retain(|line| line.id != id);
    }

    /// Set the quantity of an existing line. `quantity <= 0` removes it; values above
    /// `u32::MAX` are stored as `u32::MAX`.
    pub fn update_quantity(&mut self, id: ProductId, quantity: i64) {
        if quantity <= 0 {
            self.remove_from_cart(id);
            return;
        }

        let quantity = u32::try_from(quantity).unwrap_or(u32::MAX);
        if let Some(line) = self.items.iter_mut().find(|line| line.id == id) {
            line.quantity = quantity;
        }
    }

    pub fn clear_cart(&mut self) {
        self.items.clear();
    }
}

/// Rebuilds the invariants on hydration: duplicate ids collapse onto the first line and
/// zero quantities are dropped.
impl From<Vec<LineItem>> for Cart {
    fn from(items: Vec<LineItem>) -> Self {
        let mut cart = Cart::new();
        for item in items {
            cart.add_to_cart(item);
        }
        cart
    }
}

impl From<Cart> for Vec<LineItem> {
    fn from(cart: Cart) -> Self {
        cart.items
    }
}

impl StoreState for Cart {
    const SLOT: &'static str = "cart";
    type Action = CartAction;
    type ActionResult = ();

    fn apply(&mut self, action: CartAction) {
        match action {
            CartAction::Add(item) => self.add_to_cart(item),
            CartAction::Remove(id) => self.remove_from_cart(id),
            CartAction::UpdateQuantity(id, quantity) => self.update_quantity(id, quantity),
            CartAction::Clear => self.clear_cart(),
        }
    }

    fn item_count(&self) -> usize {
        self.items.len()
    }
}
