//! # Mock Framework
//!
//! The `MockClient<T>` hands out a real [`StoreClient<T>`] whose requests are answered from
//! a queue of expectations instead of a running store. It lets you test the logic *around*
//! a client (argument mapping, result translation, error handling) deterministically.
//!
//! | Feature | MockClient | Real Store |
//! |---------|------------|------------|
//! | **State** | None (expectations) | Real aggregate + persistence |
//! | **Use Case** | Testing client wrappers | Testing the store or the full session |
//! | **Error Injection** | Easy (`return_err`) | Needs a stopped store |
//!
//! ```rust
//! use serde::{Deserialize, Serialize};
//! use store_framework::mock::MockClient;
//! use store_framework::StoreState;
//!
//! #[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
//! struct Counter(u32);
//!
//! impl StoreState for Counter {
//!     const SLOT: &'static str = "counter";
//!     type Action = u32;
//!     type ActionResult = u32;
//!     fn apply(&mut self, by: u32) -> u32 { self.0 += by; self.0 }
//!     fn item_count(&self) -> usize { 1 }
//! }
//!
//! #[tokio::main]
//! async fn main() {
//!     let mut mock = MockClient::<Counter>::new();
//!     mock.expect_apply().return_ok(5);
//!
//!     let client = mock.client();
//!     assert_eq!(client.apply(5).await.unwrap(), 5);
//!
//!     assert_eq!(mock.take_applied(), vec![5]);
//!     mock.verify();
//! }
//! ```

use crate::{FrameworkError, StoreClient, StoreRequest, StoreState};
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use tokio::sync::{mpsc, oneshot, watch};

/// An expected request and the canned response for it.
enum Expectation<T: StoreState> {
    Get {
        response: Result<T, FrameworkError>,
    },
    Apply {
        response: Result<T::ActionResult, FrameworkError>,
    },
}

type Expectations<T> = Arc<Mutex<VecDeque<Expectation<T>>>>;

/// A mock store answering requests from expectations, in order.
pub struct MockClient<T: StoreState> {
    client: StoreClient<T>,
    publisher: watch::Sender<T>,
    expectations: Expectations<T>,
    applied: Arc<Mutex<Vec<T::Action>>>,
    _handle: tokio::task::JoinHandle<()>,
}

impl<T: StoreState> MockClient<T> {
    /// Creates a new mock with no expectations. Must be called inside a Tokio runtime.
    pub fn new() -> Self {
        let (sender, mut receiver) = mpsc::channel::<StoreRequest<T>>(100);
        let (publisher, watcher) = watch::channel(T::default());
        let expectations: Expectations<T> = Arc::new(Mutex::new(VecDeque::new()));
        let applied = Arc::new(Mutex::new(Vec::new()));

        let pending = expectations.clone();
        let recorded = applied.clone();
        let handle = tokio::spawn(async move {
            while let Some(request) = receiver.recv().await {
                let expectation = match &request {
                    StoreRequest::Stop { .. } => None,
                    _ => pending.lock().expect("mock lock poisoned").pop_front(),
                };

                match (request, expectation) {
                    (StoreRequest::Stop { respond_to }, _) => {
                        let _ = respond_to.send(Ok(()));
                    }
                    (StoreRequest::Get { respond_to }, Some(Expectation::Get { response })) => {
                        let _ = respond_to.send(response);
                    }
                    (
                        StoreRequest::Apply { action, respond_to },
                        Some(Expectation::Apply { response }),
                    ) => {
                        recorded.lock().expect("mock lock poisoned").push(action);
                        let _ = respond_to.send(response);
                    }
                    (request, _) => {
                        panic!("Unexpected request or expectation mismatch: {request:?}");
                    }
                }
            }
        });

        Self {
            client: StoreClient::new(sender, watcher),
            publisher,
            expectations,
            applied,
            _handle: handle,
        }
    }

    /// Returns the client for use in tests.
    pub fn client(&self) -> StoreClient<T> {
        self.client.clone()
    }

    /// Pushes a value to subscribers as if a mutation had committed.
    pub fn publish(&self, state: T) {
        self.publisher.send_replace(state);
    }

    /// Expects a `get` request.
    pub fn expect_get(&mut self) -> GetExpectationBuilder<T> {
        GetExpectationBuilder {
            expectations: self.expectations.clone(),
        }
    }

    /// Expects an `apply` request.
    pub fn expect_apply(&mut self) -> ApplyExpectationBuilder<T> {
        ApplyExpectationBuilder {
            expectations: self.expectations.clone(),
        }
    }

    /// Drains the actions received so far, in arrival order.
    pub fn take_applied(&self) -> Vec<T::Action> {
        std::mem::take(&mut *self.applied.lock().expect("mock lock poisoned"))
    }

    /// Verifies that all expectations were met.
    pub fn verify(&self) {
        let remaining = self.expectations.lock().expect("mock lock poisoned").len();
        assert!(
            remaining == 0,
            "Not all expectations were met. {remaining} remaining"
        );
    }
}

impl<T: StoreState> Default for MockClient<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// Builder for `get` expectations.
pub struct GetExpectationBuilder<T: StoreState> {
    expectations: Expectations<T>,
}

impl<T: StoreState> GetExpectationBuilder<T> {
    /// Sets the expectation to return a successful result.
    pub fn return_ok(self, state: T) {
        self.push(Ok(state));
    }

    /// Sets the expectation to return an error.
    pub fn return_err(self, error: FrameworkError) {
        self.push(Err(error));
    }

    fn push(self, response: Result<T, FrameworkError>) {
        self.expectations
            .lock()
            .expect("mock lock poisoned")
            .push_back(Expectation::Get { response });
    }
}

/// Builder for `apply` expectations.
pub struct ApplyExpectationBuilder<T: StoreState> {
    expectations: Expectations<T>,
}

impl<T: StoreState> ApplyExpectationBuilder<T> {
    /// Sets the expectation to return a successful result.
    pub fn return_ok(self, result: T::ActionResult) {
        self.push(Ok(result));
    }

    /// Sets the expectation to return an error.
    pub fn return_err(self, error: FrameworkError) {
        self.push(Err(error));
    }

    fn push(self, response: Result<T::ActionResult, FrameworkError>) {
        self.expectations
            .lock()
            .expect("mock lock poisoned")
            .push_back(Expectation::Apply { response });
    }
}

/// Creates a client and the raw receiver behind it.
///
/// Lower-level than [`MockClient`]: the test reads requests itself and answers on the
/// `respond_to` channel, which makes it possible to hold a request open.
pub fn create_mock_client<T: StoreState>(
    buffer_size: usize,
) -> (StoreClient<T>, mpsc::Receiver<StoreRequest<T>>) {
    let (sender, receiver) = mpsc::channel(buffer_size);
    let (_publisher, watcher) = watch::channel(T::default());
    (StoreClient::new(sender, watcher), receiver)
}

/// Helper to take the next request if it is an `Apply`.
pub async fn expect_apply<T: StoreState>(
    receiver: &mut mpsc::Receiver<StoreRequest<T>>,
) -> Option<(
    T::Action,
    oneshot::Sender<Result<T::ActionResult, FrameworkError>>,
)> {
    match receiver.recv().await {
        Some(StoreRequest::Apply { action, respond_to }) => Some((action, respond_to)),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::{Deserialize, Serialize};

    #[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
    struct Shelf(Vec<String>);

    impl StoreState for Shelf {
        const SLOT: &'static str = "shelf";
        type Action = String;
        type ActionResult = usize;

        fn apply(&mut self, bottle: String) -> usize {
            self.0.push(bottle);
            self.0.len()
        }

        fn item_count(&self) -> usize {
            self.0.len()
        }
    }

    #[tokio::test]
    async fn test_raw_mock_client() {
        let (client, mut receiver) = create_mock_client::<Shelf>(10);

        let apply_task = tokio::spawn(async move { client.apply("Rioja".to_string()).await });

        let (action, responder) = expect_apply(&mut receiver)
            .await
            .expect("Expected Apply request");
        assert_eq!(action, "Rioja");
        responder.send(Ok(1)).unwrap();

        assert_eq!(apply_task.await.unwrap(), Ok(1));
    }

    #[tokio::test]
    async fn test_mock_client_with_expectations() {
        let mut mock = MockClient::<Shelf>::new();
        mock.expect_apply().return_ok(1);
        mock.expect_get()
            .return_ok(Shelf(vec!["Islay single malt".to_string()]));

        let client = mock.client();

        assert_eq!(client.apply("Islay single malt".to_string()).await, Ok(1));
        let shelf = client.get().await.unwrap();
        assert_eq!(shelf.0.len(), 1);

        assert_eq!(mock.take_applied(), vec!["Islay single malt".to_string()]);
        mock.verify();
    }

    #[tokio::test]
    async fn test_mock_client_error_injection() {
        let mut mock = MockClient::<Shelf>::new();
        mock.expect_get().return_err(FrameworkError::StoreClosed);

        let result = mock.client().get().await;

        assert_eq!(result, Err(FrameworkError::StoreClosed));
        mock.verify();
    }

    #[tokio::test]
    async fn test_mock_publish_reaches_subscribers() {
        let mock = MockClient::<Shelf>::new();
        let mut rx = mock.client().subscribe();

        mock.publish(Shelf(vec!["Mezcal".to_string()]));

        assert!(rx.has_changed().unwrap());
        assert_eq!(rx.borrow_and_update().0, vec!["Mezcal".to_string()]);
    }
}
