use crate::model::ProductId;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One product line in the cart.
///
/// # Store Framework
/// Held by [`Cart`](crate::cart::Cart), which keeps at most one `LineItem` per
/// [`ProductId`] and never stores a zero quantity.
///
/// Persisted with camelCase keys (`unitPrice`) as part of the `cart` slot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LineItem {
    pub id: ProductId,
    pub name: String,
    pub unit_price: Decimal,
    pub image: String,
    pub quantity: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub slug: Option<String>,
}

impl LineItem {
    /// Creates a new LineItem.
    ///
    /// # Arguments
    /// * `id` - Catalog product id
    /// * `name` - Display name
    /// * `unit_price` - Price of a single unit
    /// * `image` - Image path or URL
    /// * `quantity` - Number of units, expected to be at least 1
    pub fn new(
        id: impl Into<ProductId>,
        name: impl Into<String>,
        unit_price: Decimal,
        image: impl Into<String>,
        quantity: u32,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            unit_price,
            image: image.into(),
            quantity,
            slug: None,
        }
    }

    /// Sets the product page slug.
    pub fn with_slug(mut self, slug: impl Into<String>) -> Self {
        self.slug = Some(slug.into());
        self
    }

    /// `unit_price × quantity`, saturating at the bounds of [`Decimal`].
    pub fn line_total(&self) -> Decimal {
        self.unit_price.saturating_mul(Decimal::from(self.quantity))
    }
}
