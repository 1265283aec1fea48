use crate::cart::{Cart, CartAction, CartError};
use crate::model::{LineItem, ProductId};
use async_trait::async_trait;
use rust_decimal::Decimal;
use store_framework::{FrameworkError, StoreClient, StoreHandle};
use tracing::{debug, instrument};

/// Client for interacting with the cart store.
///
/// Every mutation waits until the new cart has been committed and written to the `cart`
/// slot. Reads are served from a snapshot and never touch storage.
#[derive(Debug, Clone)]
pub struct CartClient {
    inner: StoreClient<Cart>,
}

impl CartClient {
    pub fn new(inner: StoreClient<Cart>) -> Self {
        Self { inner }
    }

    async fn send(&self, action: CartAction) -> Result<(), CartError> {
        self.inner.apply(action).await.map_err(Self::map_error)
    }

    /// Insert a line, or replace the quantity of the line with the same id.
    #[instrument(skip(self, item), fields(id = %item.id, quantity = item.quantity))]
    pub async fn add_to_cart(&self, item: LineItem) -> Result<(), CartError> {
        debug!("Sending request");
        self.send(CartAction::Add(item)).await
    }

    #[instrument(skip(self))]
    pub async fn remove_from_cart(&self, id: ProductId) -> Result<(), CartError> {
        debug!("Sending request");
        self.send(CartAction::Remove(id)).await
    }

    /// `quantity <= 0` removes the line. Quantities are stored as `u32`, so anything above
    /// `u32::MAX` is stored as `u32::MAX`.
    #[instrument(skip(self))]
    pub async fn update_quantity(&self, id: ProductId, quantity: i64) -> Result<(), CartError> {
        debug!("Sending request");
        self.send(CartAction::UpdateQuantity(id, quantity)).await
    }

    #[instrument(skip(self))]
    pub async fn clear_cart(&self) -> Result<(), CartError> {
        debug!("Sending request");
        self.send(CartAction::Clear).await
    }

    pub async fn cart_items(&self) -> Result<Vec<LineItem>, CartError> {
        Ok(self.snapshot().await?.into())
    }

    pub async fn total_items(&self) -> Result<u64, CartError> {
        Ok(self.snapshot().await?.total_items())
    }

    pub async fn total_price(&self) -> Result<Decimal, CartError> {
        Ok(self.snapshot().await?.total_price())
    }
}

#[async_trait]
impl StoreHandle<Cart> for CartClient {
    type Error = CartError;

    fn inner(&self) -> &StoreClient<Cart> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        CartError::StoreUnavailable(e.to_string())
    }
}
