//! The wishlist aggregate.

use super::actions::WishlistAction;
use crate::model::{ProductId, WishlistEntry};
use serde::{Deserialize, Serialize};
use store_framework::StoreState;

/// Saved products in insertion order. Persists as a bare JSON array of [`WishlistEntry`]s.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(from = "Vec<WishlistEntry>", into = "Vec<WishlistEntry>")]
pub struct Wishlist {
    entries: Vec<WishlistEntry>,
}

impl Wishlist {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn entries(&self) -> &[WishlistEntry] {
        &self.entries
    }

    pub fn get(&self, id: ProductId) -> Option<&WishlistEntry> {
        self.entries.iter().find(|entry| entry.id == id)
    }

    pub fn is_in_wishlist(&self, id: ProductId) -> bool {
        self.get(id).is_some()
    }

    pub fn total_items(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Append `entry` unless its id is already saved. The first entry wins; a later one with
    /// the same id is discarded whole. Returns whether the entry was added.
    pub fn add_to_wishlist(&mut self, entry: WishlistEntry) -> bool {
        if self.is_in_wishlist(entry.id) {
            return false;
        }
        self.entries.push(entry);
        true
    }

    /// Returns whether an entry was removed.
    pub fn remove_from_wishlist(&mut self, id: ProductId) -> bool {
        let before = self.entries.len();
        self.entries.retain(|entry| entry.id != id);
        self.entries.len() != before
    }

    /// Returns whether there was anything to clear.
    pub fn clear_wishlist(&mut self) -> bool {
        let had_entries = !self.entries.is_empty();
        self.entries.clear();
        had_entries
    }
}

/// Duplicate ids in a persisted slot collapse onto the first entry.
impl From<Vec<WishlistEntry>> for Wishlist {
    fn from(entries: Vec<WishlistEntry>) -> Self {
        let mut wishlist = Wishlist::new();
        for entry in entries {
            wishlist.add_to_wishlist(entry);
        }
        wishlist
    }
}

impl From<Wishlist> for Vec<WishlistEntry> {
    fn from(wishlist: Wishlist) -> Self {
        wishlist.entries
    }
}

impl StoreState for Wishlist {
    const SLOT: &'static str = "wishlist";
    type Action = WishlistAction;
    type ActionResult = bool;

    fn apply(&mut self, action: WishlistAction) -> bool {
        match action {
            WishlistAction::Add(entry) => self.add_to_wishlist(entry),
            WishlistAction::Remove(id) => self.remove_from_wishlist(id),
            WishlistAction::Clear => self.clear_wishlist(),
        }
    }

    fn item_count(&self) -> usize {
        self.entries.len()
    }
}
