//! Scripted storefront session against file-backed storage.
//!
//! Run it twice with the same `--data-dir` to see the second session pick up where the
//! first left off.

use clap::Parser;
use rust_decimal::Decimal;
use std::path::PathBuf;
use std::sync::Arc;
use store_framework::tracing::setup_tracing;
use store_framework::FileStorage;
use storefront::lifecycle::Session;
use storefront::model::{LineItem, ProductId, WishlistEntry};
use tracing::{info, Instrument};

#[derive(Debug, Parser)]
#[command(name = "storefront", about = "Runs a scripted cart and wishlist session")]
struct Cli {
    /// Directory holding one JSON file per storage slot
    #[arg(long, env = "STOREFRONT_DATA_DIR", default_value = ".storefront")]
    data_dir: PathBuf,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    setup_tracing();
    let cli = Cli::parse();

    let storage = FileStorage::open(cli.data_dir.clone())?;
    info!(data_dir = %cli.data_dir.display(), "Starting storefront session");

    let session = Session::start(Arc::new(storage));

    let restored = session.cart.total_items().await?;
    info!(items = restored, "Cart restored");

    let span = tracing::info_span!("browsing");
    async {
        let spritz = LineItem::new(
            101u32,
            "Spritz Kit",
            Decimal::new(2490, 2),
            "/img/spritz.webp",
            2,
        )
        .with_slug("spritz-kit");
        session.cart.add_to_cart(spritz).await?;

        let tonic = LineItem::new(
            102u32,
            "Tonic Water 6-pack",
            Decimal::new(799, 2),
            "/img/tonic.webp",
            1,
        );
        session.cart.add_to_cart(tonic).await?;
        session.cart.update_quantity(ProductId(102), 3).await?;

        let vermouth = WishlistEntry::new(
            201u32,
            "Vermouth Rosso",
            Decimal::new(1850, 2),
            "/img/vermouth.webp",
            "vermouth-rosso",
        )
        .with_category("aperitivo")
        .with_rating(4.6);
        session.wishlist.add_to_wishlist(vermouth).await?;

        let gin = WishlistEntry::new(
            202u32,
            "London Dry Gin",
            Decimal::new(3100, 2),
            "/img/gin.webp",
            "london-dry-gin",
        )
        .with_category("spirits");
        session.wishlist.add_to_wishlist(gin).await?;

        session.move_to_cart(ProductId(201)).await?;
        Ok::<_, Box<dyn std::error::Error>>(())
    }
    .instrument(span)
    .await?;

    let lines = session.cart.cart_items().await?.len();
    let items = session.cart.total_items().await?;
    let total = session.cart.total_price().await?;
    let saved = session.wishlist.total_items().await?;
    info!(lines, items, total = %total, saved, "Session totals");

    session.shutdown().await?;

    info!("Application completed successfully");
    Ok(())
}
