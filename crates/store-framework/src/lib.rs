//! # Store Framework
//!
//! This crate provides the building blocks for session-scoped state stores: an aggregate
//! owned by a single task, mutated through typed actions, mirrored wholesale into a named
//! slot of persisted key-value storage, and published to subscribers after every change.
//!
//! ## Why an actor per aggregate?
//!
//! - **Ordering**: one task applies requests in arrival order, so a sequence of UI events
//!   is applied exactly as it was dispatched.
//! - **Isolation**: the aggregate is owned by the task. Callers only ever see clones or
//!   `watch` views, never a mutable reference into the collection.
//! - **Scoping**: the client is a plain value handed down to whoever needs it. There is no
//!   global singleton, so every test can build its own store.
//!
//! ## Architecture Overview
//!
//! 1. **State Layer** ([`StoreState`]) - the aggregate and its transitions
//! 2. **Persistence Layer** ([`storage`], [`sync`]) - slots, hydration, write-through
//! 3. **Runtime Layer** ([`StoreActor`]) - request processing
//! 4. **Interface Layer** ([`StoreClient`], [`StoreHandle`]) - type-safe communication
//!
//! ## Example
//!
//! ```rust
//! use serde::{Deserialize, Serialize};
//! use store_framework::{KeyValueStorage, MemoryStorage, StoreActor, StoreState};
//!
//! #[derive(Clone, Debug, Default, Serialize, Deserialize)]
//! #[serde(transparent)]
//! struct Favourites {
//!     ids: Vec<u32>,
//! }
//!
//! #[derive(Debug)]
//! enum FavouritesAction {
//!     Add(u32),
//!     Clear,
//! }
//!
//! impl StoreState for Favourites {
//!     const SLOT: &'static str = "favourites";
//!     type Action = FavouritesAction;
//!     type ActionResult = ();
//!
//!     fn apply(&mut self, action: FavouritesAction) {
//!         match action {
//!             FavouritesAction::Add(id) => self.ids.push(id),
//!             FavouritesAction::Clear => self.ids.clear(),
//!         }
//!     }
//!
//!     fn item_count(&self) -> usize {
//!         self.ids.len()
//!     }
//! }
//!
//! #[tokio::main]
//! async fn main() {
//!     let storage = MemoryStorage::new();
//!
//!     let (actor, client) = StoreActor::<Favourites>::new(10, storage.shared());
//!     tokio::spawn(actor.run());
//!
//!     client.apply(FavouritesAction::Add(42)).await.unwrap();
//!
//!     // Every mutation lands in the slot
//!     assert_eq!(storage.get_item("favourites").unwrap().as_deref(), Some("[42]"));
//! }
//! ```
//!
//! ## Testing
//!
//! [`sync::SyncedState`] runs the apply/persist/publish cycle without any runtime, and the
//! [`mock`] module provides a `MockClient` for testing client wrappers without a store.

pub mod actor;
pub mod client;
pub mod error;
pub mod handle;
pub mod message;
pub mod mock;
pub mod state;
pub mod storage;
pub mod sync;
pub mod tracing;

// Re-export core types for convenience
pub use actor::StoreActor;
pub use client::StoreClient;
pub use error::FrameworkError;
pub use handle::StoreHandle;
pub use message::{Response, StoreRequest};
pub use state::StoreState;
pub use storage::{FileStorage, KeyValueStorage, MemoryStorage, SharedStorage, StorageError};
pub use sync::{PersistenceSync, SyncError, SyncedState};
