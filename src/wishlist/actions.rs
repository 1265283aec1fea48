//! Mutations accepted by the wishlist store.

use crate::model::{ProductId, WishlistEntry};

/// Wishlist mutations. Each one reports whether the collection changed and is followed
/// by a full write of the `wishlist` slot either way.
///
/// Membership checks are reads, not actions: see
/// [`WishlistClient::is_in_wishlist`](crate::clients::WishlistClient::is_in_wishlist).
#[derive(Debug, Clone, PartialEq)]
pub enum WishlistAction {
    /// Append an entry unless its id is already present.
    Add(WishlistEntry),
    /// Remove an entry. No-op when absent.
    Remove(ProductId),
    /// Empty the wishlist.
    Clear,
}
