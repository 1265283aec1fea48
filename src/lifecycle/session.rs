use crate::cart::CartError;
use crate::clients::{CartClient, WishlistClient};
use crate::model::{LineItem, ProductId};
use crate::wishlist::WishlistError;
use store_framework::{SharedStorage, StoreHandle};
use thiserror::Error;
use tracing::{debug, error, info, instrument, warn};

/// Errors surfaced by session-level operations.
#[derive(Debug, Error)]
pub enum SessionError {
    #[error(transparent)]
    Cart(#[from] CartError),
    #[error(transparent)]
    Wishlist(#[from] WishlistError),
    #[error("Store task failed: {0}")]
    TaskFailed(String),
}

/// One shopper's cart and wishlist, hydrated from the same storage.
///
/// `Session` is the explicit context object consumers receive instead of reaching for a
/// global: the clients are cheap to clone and are handed down to whatever renders or mutates
/// the collections. Both stores stop when the session shuts down and every clone has been
/// dropped.
///
/// # Example
///
/// ```rust
/// use rust_decimal::Decimal;
/// use storefront::lifecycle::Session;
/// use storefront::model::LineItem;
/// use store_framework::MemoryStorage;
///
/// #[tokio::main]
/// async fn main() {
///     let session = Session::start(MemoryStorage::new().shared());
///
///     let item = LineItem::new(1u32, "Rosé", Decimal::new(1490, 2), "/img/rose.webp", 2);
///     session.cart.add_to_cart(item).await.unwrap();
///     assert_eq!(session.cart.total_items().await.unwrap(), 2);
///
///     session.shutdown().await.unwrap();
/// }
/// ```
pub struct Session {
    /// Client for the cart store
    pub cart: CartClient,

    /// Client for the wishlist store
    pub wishlist: WishlistClient,

    handles: Vec<tokio::task::JoinHandle<()>>,
}

impl Session {
    /// Wraps clients whose stores are run elsewhere, e.g. a mocked store in tests.
    /// [`shutdown`](Self::shutdown) still stops them but has no tasks to await.
    pub fn from_clients(cart: CartClient, wishlist: WishlistClient) -> Self {
        Self {
            cart,
            wishlist,
            handles: Vec::new(),
        }
    }

    /// Hydrates both stores from `storage` and spawns them on the current Tokio runtime.
    pub fn start(storage: SharedStorage) -> Self {
        let (cart_actor, cart) = crate::cart::new(storage.clone());
        let (wishlist_actor, wishlist) = crate::wishlist::new(storage);

        let cart_handle = tokio::spawn(cart_actor.run());
        let wishlist_handle = tokio::spawn(wishlist_actor.run());

        info!("Session started");
        Self {
            cart,
            wishlist,
            handles: vec![cart_handle, wishlist_handle],
        }
    }

    /// Moves a saved product into the cart with a quantity of 1 and drops it from the
    /// wishlist. Returns `false`, touching neither store, when the product is not saved.
    ///
    /// An existing cart line for the product has its quantity set to 1.
    ///
    /// The two stores are updated one after the other, not atomically. If the wishlist
    /// removal fails, the cart is put back the way it was (the previous line restored, or
    /// the new one removed) and the wishlist error is returned.
    #[instrument(skip(self))]
    pub async fn move_to_cart(&self, id: ProductId) -> Result<bool, SessionError> {
        let wishlist = self.wishlist.snapshot().await?;
        let Some(entry) = wishlist.get(id) else {
            debug!("Not in wishlist");
            return Ok(false);
        };

        let item = LineItem::new(
            entry.id,
            entry.name.clone(),
            entry.price,
            entry.image.clone(),
            1,
        )
        .with_slug(entry.slug.clone());

        let previous = self.cart.snapshot().await?.get(id).cloned();
        self.cart.add_to_cart(item).await?;

        if let Err(e) = self.wishlist.remove_from_wishlist(id).await {
            warn!(error = %e, "Wishlist remove failed, rolling back cart");
            match previous {
                Some(line) => self.cart.add_to_cart(line).await?,
                None => self.cart.remove_from_cart(id).await?,
            }
            return Err(e.into());
        }
        Ok(true)
    }

    /// Stops both stores.
    ///
    /// Each store is told to stop, so clones of the clients still held elsewhere fail with
    /// `StoreUnavailable` from here on. Mutations queued before the stop are applied and
    /// written first.
    pub async fn shutdown(self) -> Result<(), SessionError> {
        info!("Shutting down session...");

        if let Err(e) = self.cart.inner().stop().await {
            debug!(error = %e, "Cart store already stopped");
        }
        if let Err(e) = self.wishlist.inner().stop().await {
            debug!(error = %e, "Wishlist store already stopped");
        }
        drop(self.cart);
        drop(self.wishlist);

        for handle in self.handles {
            if let Err(e) = handle.await {
                error!("Store task failed: {:?}", e);
                return Err(SessionError::TaskFailed(e.to_string()));
            }
        }

        info!("Session shutdown complete.");
        Ok(())
    }
}
