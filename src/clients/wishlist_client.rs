use crate::model::{ProductId, WishlistEntry};
use crate::wishlist::{Wishlist, WishlistAction, WishlistError};
use async_trait::async_trait;
use store_framework::{FrameworkError, StoreClient, StoreHandle};
use tracing::{debug, instrument};

/// Client for interacting with the wishlist store.
#[derive(Debug, Clone)]
pub struct WishlistClient {
    inner: StoreClient<Wishlist>,
}

impl WishlistClient {
    pub fn new(inner: StoreClient<Wishlist>) -> Self {
        Self { inner }
    }

    async fn send(&self, action: WishlistAction) -> Result<bool, WishlistError> {
        self.inner.apply(action).await.map_err(Self::map_error)
    }

    /// Save a product. Returns `false` when the id was already saved; the stored entry is
    /// kept as it was, but the slot is still rewritten.
    #[instrument(skip(self, entry), fields(id = %entry.id))]
    pub async fn add_to_wishlist(&self, entry: WishlistEntry) -> Result<bool, WishlistError> {
        debug!("Sending request");
        self.send(WishlistAction::Add(entry)).await
    }

    /// Returns whether an entry was removed.
    #[instrument(skip(self))]
    pub async fn remove_from_wishlist(&self, id: ProductId) -> Result<bool, WishlistError> {
        debug!("Sending request");
        self.send(WishlistAction::Remove(id)).await
    }

    #[instrument(skip(self))]
    pub async fn clear_wishlist(&self) -> Result<(), WishlistError> {
        debug!("Sending request");
        self.send(WishlistAction::Clear).await.map(|_| ())
    }

    /// Membership check. A read: nothing is written.
    pub async fn is_in_wishlist(&self, id: ProductId) -> Result<bool, WishlistError> {
        Ok(self.snapshot().await?.is_in_wishlist(id))
    }

    pub async fn wishlist_items(&self) -> Result<Vec<WishlistEntry>, WishlistError> {
        Ok(self.snapshot().await?.into())
    }

    pub async fn total_items(&self) -> Result<usize, WishlistError> {
        Ok(self.snapshot().await?.total_items())
    }
}

#[async_trait]
impl StoreHandle<Wishlist> for WishlistClient {
    type Error = WishlistError;

    fn inner(&self) -> &StoreClient<Wishlist> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        WishlistError::StoreUnavailable(e.to_string())
    }
}
