//! # StoreHandle Trait
//!
//! Provides a common interface for aggregate-specific clients, adding default `snapshot` and
//! `subscribe` methods built on top of a generic `StoreClient`.
use crate::{FrameworkError, StoreClient, StoreState};
use async_trait::async_trait;
use tokio::sync::watch;

/// Trait for aggregate-specific clients to inherit the standard read operations.
///
/// # Example
///
/// ```rust
/// use serde::{Deserialize, Serialize};
/// use store_framework::{FrameworkError, StoreClient, StoreHandle, StoreState};
///
/// #[derive(Clone, Debug, Default, Serialize, Deserialize)]
/// struct Counter(u32);
///
/// impl StoreState for Counter {
///     const SLOT: &'static str = "counter";
///     type Action = u32;
///     type ActionResult = u32;
///     fn apply(&mut self, by: u32) -> u32 { self.0 += by; self.0 }
///     fn item_count(&self) -> usize { 1 }
/// }
///
/// #[derive(Debug)]
/// struct CounterError(String);
/// impl From<String> for CounterError {
///     fn from(s: String) -> Self { CounterError(s) }
/// }
///
/// struct CounterClient {
///     inner: StoreClient<Counter>,
/// }
///
/// impl StoreHandle<Counter> for CounterClient {
///     type Error = CounterError;
///
///     fn inner(&self) -> &StoreClient<Counter> {
///         &self.inner
///     }
///
///     fn map_error(e: FrameworkError) -> Self::Error {
///         CounterError(e.to_string())
///     }
/// }
///
/// async fn usage(client: CounterClient) {
///     // snapshot() and subscribe() are provided automatically!
///     let _ = client.snapshot().await;
///     let _ = client.subscribe();
/// }
/// ```
#[async_trait]
pub trait StoreHandle<T: StoreState>: Send + Sync {
    /// The aggregate-specific error type.
    type Error: From<String> + Send + Sync;

    /// Access the inner generic StoreClient.
    fn inner(&self) -> &StoreClient<T>;

    /// Map framework errors to the specific error type.
    fn map_error(e: FrameworkError) -> Self::Error;

    /// Fetch a snapshot of the aggregate.
    #[tracing::instrument(skip(self))]
    async fn snapshot(&self) -> Result<T, Self::Error> {
        tracing::debug!("Sending request");
        self.inner().get().await.map_err(Self::map_error)
    }

    /// Follow the aggregate as it changes.
    fn subscribe(&self) -> watch::Receiver<T> {
        self.inner().subscribe()
    }
}
