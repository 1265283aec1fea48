//! # Generic Store Server
//!
//! This module defines the `StoreActor`, the component that owns one session aggregate.
//! It implements the "Server" side of the Actor Model: requests are processed one at a
//! time, so the aggregate never needs a lock and mutations are applied in exactly the order
//! they were sent.

use crate::client::StoreClient;
use crate::message::StoreRequest;
use crate::state::StoreState;
use crate::storage::SharedStorage;
use crate::sync::SyncedState;
use tokio::sync::mpsc;
use tracing::{debug, info};

/// The generic actor that owns one aggregate for the lifetime of a session.
///
/// # Architecture Note
/// This struct is the "Server" half of the store. It owns the [`SyncedState`] and the
/// receiver end of the channel. The matching [`StoreClient`] is cheap to clone and is what
/// gets passed down to consumers.
///
/// # Lifecycle
///
/// 1. **Hydrate**: `StoreActor::new()` reads `T::SLOT` from storage (empty on absence or
///    corruption).
/// 2. **Run**: `run()` loops over requests. Each `Apply` mutates, overwrites the slot and
///    publishes the new aggregate before the next request is read.
/// 3. **Tear down**: a `Stop` request, or dropping every client, closes the channel. Queued
///    requests are still served, then the loop ends. Nothing is flushed on shutdown because
///    every mutation was already persisted.
///
/// ```rust
/// use serde::{Deserialize, Serialize};
/// use store_framework::{MemoryStorage, StoreActor, StoreState};
///
/// #[derive(Clone, Debug, Default, Serialize, Deserialize)]
/// #[serde(transparent)]
/// struct Notes(Vec<String>);
///
/// impl StoreState for Notes {
///     const SLOT: &'static str = "notes";
///     type Action = String;
///     type ActionResult = ();
///
///     fn apply(&mut self, note: String) {
///         self.0.push(note);
///     }
///
///     fn item_count(&self) -> usize {
///         self.0.len()
///     }
/// }
///
/// #[tokio::main]
/// async fn main() {
///     let storage = MemoryStorage::new();
///     let (actor, client) = StoreActor::<Notes>::new(10, storage.shared());
///     tokio::spawn(actor.run());
///
///     client.apply("buy limes".to_string()).await.unwrap();
///     assert_eq!(client.get().await.unwrap().0, vec!["buy limes".to_string()]);
/// }
/// ```
#[derive(Debug)]
pub struct StoreActor<T: StoreState> {
    receiver: mpsc::Receiver<StoreRequest<T>>,
    state: SyncedState<T>,
}

impl<T: StoreState> StoreActor<T> {
    /// Creates a hydrated `StoreActor` and its associated `StoreClient`.
    ///
    /// # Arguments
    ///
    /// * `buffer_size` - The capacity of the MPSC channel. If the channel is full,
    ///   calls to the client will wait until there is space.
    /// * `storage` - The persisted storage holding `T::SLOT`.
    pub fn new(buffer_size: usize, storage: SharedStorage) -> (Self, StoreClient<T>) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        let state = SyncedState::hydrate(storage);
        let client = StoreClient::new(sender, state.subscribe());
        (Self { receiver, state }, client)
    }

    /// Runs the store's event loop, processing requests until the channel closes or a
    /// `Stop` request arrives.
    pub async fn run(mut self) {
        // Just the type name (e.g. "Cart" instead of "storefront::cart::state::Cart")
        let store = std::any::type_name::<T>()
            .split("::")
            .last()
            .unwrap_or("Unknown");
        info!(store, slot = T::SLOT, size = self.state.state().item_count(), "Store started");

        while let Some(msg) = self.receiver.recv().await {
            match msg {
                StoreRequest::Get { respond_to } => {
                    debug!(store, "Get");
                    let _ = respond_to.send(Ok(self.state.state().clone()));
                }
                StoreRequest::Apply { action, respond_to } => {
                    debug!(store, ?action, "Apply");
                    let result = self.state.apply(action);
                    info!(store, size = self.state.state().item_count(), "Applied");
                    let _ = respond_to.send(Ok(result));
                }
                StoreRequest::Stop { respond_to } => {
                    debug!(store, "Stop");
                    self.receiver.close();
                    let _ = respond_to.send(Ok(()));
                }
            }
        }

        info!(store, size = self.state.state().item_count(), "Shutdown");
    }
}
