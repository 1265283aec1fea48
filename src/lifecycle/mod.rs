//! # Session Lifecycle
//!
//! Starting, wiring and stopping the stores that make up one shopper's session.
//!
//! [`Session::start`] hydrates the cart and the wishlist from the same
//! [`KeyValueStorage`](store_framework::KeyValueStorage) and spawns one task per store.
//! The returned clients are the only way in: consumers get a clone instead of reaching
//! for a global, and tests build as many independent sessions as they like.
//!
//! ## Shutdown
//!
//! 1. **Stop each store** - a `Stop` request closes the store channel for every clone
//! 2. **Drain** - queued mutations are still applied and written
//! 3. **Await completion** - [`Session::shutdown`] waits for both tasks
//!
//! A client clone kept after shutdown fails every call with `StoreUnavailable`.
//!
//! ## Tracing
//!
//! Call [`setup_tracing`](store_framework::tracing::setup_tracing) once at startup and
//! filter with `RUST_LOG`.

pub mod session;

pub use session::*;
