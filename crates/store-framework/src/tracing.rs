//! # Observability & Tracing
//!
//! [`setup_tracing`] installs the structured logging used by every store.
//!
//! ## What Gets Traced
//!
//! - **Store lifecycle**: start (with the hydrated size), shutdown
//! - **Hydration**: empty slot, hydrated slot, corrupt slot (`warn`)
//! - **Mutations**: every `Apply` with its action (`debug`) and resulting size (`info`)
//! - **Persistence**: slot writes (`debug`), failed writes (`error`)
//!
//! ## Usage
//!
//! ```bash
//! # Compact logs
//! RUST_LOG=info cargo run
//!
//! # Show actions and slot writes
//! RUST_LOG=debug cargo run
//!
//! # Only the persistence layer
//! RUST_LOG=store_framework::sync=debug cargo run
//! ```
//!
//! With `RUST_LOG=debug` a single add-to-cart looks like:
//!
//! ```text
//! DEBUG add_to_cart: Sending request id=product_7
//! DEBUG Apply store="Cart" action=Add(LineItem { id: ProductId(7), .. })
//! DEBUG Slot written slot="cart" bytes=118
//! INFO Applied store="Cart" size=1
//! ```

/// Initializes the tracing subscriber, filtered by `RUST_LOG`.
pub fn setup_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false) // store name is already a field
        .compact()
        .init();
}
