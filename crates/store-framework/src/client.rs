//! # Generic Client
//!
//! This module defines the generic client for communicating with a store.

use crate::error::FrameworkError;
use crate::message::StoreRequest;
use crate::state::StoreState;
use tokio::sync::{mpsc, oneshot, watch};

/// ## StoreClient
///
/// The `StoreClient<T>` provides a type-safe, async API for interacting with a
/// `StoreActor<T>`. Requests travel over a Tokio mpsc channel and results come back on
/// oneshot channels. The client also carries a `watch` receiver so consumers can follow
/// the aggregate without sending anything.
///
/// * **Cloneable** – holds a sender and a receiver handle, so cloning is inexpensive.
/// * **Ordered** – requests from one client are applied in the order they were awaited.
/// * **Fails loudly** – once the store is gone every call returns a [`FrameworkError`].
#[derive(Debug, Clone)]
pub struct StoreClient<T: StoreState> {
    sender: mpsc::Sender<StoreRequest<T>>,
    watcher: watch::Receiver<T>,
}

impl<T: StoreState> StoreClient<T> {
    pub fn new(sender: mpsc::Sender<StoreRequest<T>>, watcher: watch::Receiver<T>) -> Self {
        Self { sender, watcher }
    }

    /// Fetch a snapshot of the aggregate.
    pub async fn get(&self) -> Result<T, FrameworkError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(StoreRequest::Get { respond_to })
            .await
            .map_err(|_| FrameworkError::StoreClosed)?;
        response.await.map_err(|_| FrameworkError::StoreDropped)?
    }

    /// Apply one mutation and wait for it to commit.
    pub async fn apply(&self, action: T::Action) -> Result<T::ActionResult, FrameworkError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(StoreRequest::Apply { action, respond_to })
            .await
            .map_err(|_| FrameworkError::StoreClosed)?;
        response.await.map_err(|_| FrameworkError::StoreDropped)?
    }

    /// Ask the store to stop. Requests already queued are still applied; every later call on
    /// any clone of this client fails with [`FrameworkError::StoreClosed`].
    pub async fn stop(&self) -> Result<(), FrameworkError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(StoreRequest::Stop { respond_to })
            .await
            .map_err(|_| FrameworkError::StoreClosed)?;
        response.await.map_err(|_| FrameworkError::StoreDropped)?
    }

    /// A receiver that is notified after every committed mutation.
    pub fn subscribe(&self) -> watch::Receiver<T> {
        let mut receiver = self.watcher.clone();
        receiver.mark_unchanged();
        receiver
    }
}
