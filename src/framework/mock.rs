//! # Mock Framework
//!
//! Utilities for testing clients in isolation, without spawning a real actor.
//!
//! | Feature | MockClient | Real Actor |
//! |---------|------------|------------|
//! | **State** | No real state (expectations) | Real state management |
//! | **Use Case** | Unit testing logic *around* the client | Testing the actor itself or full system |
//! | **Error Injection** | Easy (`return_err`) | Requires a failing context |
//!
//! Use [`MockClient`] for the fluent expectation API, or [`create_mock_client`] to get a
//! client plus the raw receiver and answer requests by hand.

use crate::framework::durability::{Applied, Durability, Persistence};
use crate::framework::{ActorEntity, FrameworkError, ResourceClient, ResourceRequest};
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use tokio::sync::mpsc;

// =============================================================================
// EXPECTATION BUILDER API
// =============================================================================

/// An expected request and the response to give it.
enum Expectation<T: ActorEntity> {
    Get {
        response: Result<T, FrameworkError>,
    },
    Load {
        response: Result<T, FrameworkError>,
    },
    Action {
        response: Result<T::ActionResult, FrameworkError>,
        persistence: Persistence,
    },
}

/// A mock client with expectation tracking for fluent testing.
///
/// Expectations are consumed in order. A request that does not match the next
/// expectation makes the mock task panic, which the caller observes as
/// [`FrameworkError::ActorDropped`]. Every action received is recorded and can be
/// inspected with [`MockClient::take_actions`].
///
/// # Example
/// ```ignore
/// let mut mock = MockClient::<Cart>::new();
/// mock.expect_get().return_ok(cart.clone());
/// mock.expect_action().return_ok(Cart::new());
///
/// let client = CartClient::new(mock.client());
/// // Use client in tests...
/// mock.verify(); // Ensures all expectations were met
/// ```
pub struct MockClient<T: ActorEntity> {
    client: ResourceClient<T>,
    expectations: Arc<Mutex<VecDeque<Expectation<T>>>>,
    actions: Arc<Mutex<Vec<T::Action>>>,
    _handle: tokio::task::JoinHandle<()>,
}

impl<T: ActorEntity> MockClient<T> {
    /// Creates a new mock client with no expectations.
    pub fn new() -> Self {
        let (sender, mut receiver) = mpsc::channel::<ResourceRequest<T>>(100);
        let expectations = Arc::new(Mutex::new(VecDeque::new()));
        let actions = Arc::new(Mutex::new(Vec::new()));
        let expectations_clone = expectations.clone();
        let actions_clone = actions.clone();

        // Spawn background task to handle requests
        let handle = tokio::spawn(async move {
            while let Some(request) = receiver.recv().await {
                let expectation = expectations_clone.lock().unwrap().pop_front();

                match (request, expectation) {
                    (ResourceRequest::Get { respond_to }, Some(Expectation::Get { response })) => {
                        let _ = respond_to.send(response);
                    }
                    (ResourceRequest::Load { respond_to }, Some(Expectation::Load { response })) => {
                        let _ = respond_to.send(response);
                    }
                    (
                        ResourceRequest::Action { action, respond_to },
                        Some(Expectation::Action {
                            response,
                            persistence,
                        }),
                    ) => {
                        actions_clone.lock().unwrap().push(action);
                        let applied = response
                            .map(|result| Applied::new(result, Durability::ready(persistence)));
                        let _ = respond_to.send(applied);
                    }
                    _ => {
                        panic!("Unexpected request or expectation mismatch");
                    }
                }
            }
        });

        Self {
            client: ResourceClient::new(sender),
            expectations,
            actions,
            _handle: handle,
        }
    }

    /// Returns the client for use in tests.
    pub fn client(&self) -> ResourceClient<T> {
        self.client.clone()
    }

    /// Expects a `get` operation.
    pub fn expect_get(&mut self) -> StateExpectationBuilder<T> {
        StateExpectationBuilder {
            load: false,
            expectations: self.expectations.clone(),
        }
    }

    /// Expects a `load` operation.
    pub fn expect_load(&mut self) -> StateExpectationBuilder<T> {
        StateExpectationBuilder {
            load: true,
            expectations: self.expectations.clone(),
        }
    }

    /// Expects an `action` operation.
    pub fn expect_action(&mut self) -> ActionExpectationBuilder<T> {
        ActionExpectationBuilder {
            expectations: self.expectations.clone(),
        }
    }

    /// Drains the actions received so far, in arrival order.
    pub fn take_actions(&self) -> Vec<T::Action> {
        std::mem::take(&mut *self.actions.lock().unwrap())
    }

    /// Verifies that all expectations were met.
    pub fn verify(&self) {
        let exps = self.expectations.lock().unwrap();
        if !exps.is_empty() {
            panic!("Not all expectations were met. {} remaining", exps.len());
        }
    }
}

impl<T: ActorEntity> Default for MockClient<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// Builder for `get` and `load` expectations.
pub struct StateExpectationBuilder<T: ActorEntity> {
    load: bool,
    expectations: Arc<Mutex<VecDeque<Expectation<T>>>>,
}

impl<T: ActorEntity> StateExpectationBuilder<T> {
    /// Sets the expectation to return a successful result.
    pub fn return_ok(self, state: T) {
        self.push(Ok(state));
    }

    /// Sets the expectation to return an error.
    pub fn return_err(self, error: FrameworkError) {
        self.push(Err(error));
    }

    fn push(self, response: Result<T, FrameworkError>) {
        let expectation = if self.load {
            Expectation::Load { response }
        } else {
            Expectation::Get { response }
        };
        self.expectations.lock().unwrap().push_back(expectation);
    }
}

/// Builder for `action` expectations.
pub struct ActionExpectationBuilder<T: ActorEntity> {
    expectations: Arc<Mutex<VecDeque<Expectation<T>>>>,
}

impl<T: ActorEntity> ActionExpectationBuilder<T> {
    /// Sets the expectation to return a successful, persisted result.
    pub fn return_ok(self, result: T::ActionResult) {
        self.return_ok_with(result, Persistence::Saved);
    }

    /// Sets the expectation to return a successful result with the given persistence.
    pub fn return_ok_with(self, result: T::ActionResult, persistence: Persistence) {
        self.expectations
            .lock()
            .unwrap()
            .push_back(Expectation::Action {
                response: Ok(result),
                persistence,
            });
    }

    /// Sets the expectation to return an error.
    pub fn return_err(self, error: FrameworkError) {
        self.expectations
            .lock()
            .unwrap()
            .push_back(Expectation::Action {
                response: Err(error),
                persistence: Persistence::Skipped,
            });
    }
}

// =============================================================================
// LOW-LEVEL HELPERS
// =============================================================================

/// Creates a mock client and a receiver for asserting requests.
///
/// The test drives the "actor" side by hand: read the next request from `receiver`
/// with [`expect_get`] or [`expect_action`], assert on it, and answer through the
/// returned responder.
pub fn create_mock_client<T: ActorEntity>(
    buffer_size: usize,
) -> (ResourceClient<T>, mpsc::Receiver<ResourceRequest<T>>) {
    let (sender, receiver) = mpsc::channel(buffer_size);
    (ResourceClient::new(sender), receiver)
}

/// Helper to verify that the next message is a Get request
pub async fn expect_get<T: ActorEntity>(
    receiver: &mut mpsc::Receiver<ResourceRequest<T>>,
) -> Option<tokio::sync::oneshot::Sender<Result<T, FrameworkError>>> {
    match receiver.recv().await {
        Some(ResourceRequest::Get { respond_to }) => Some(respond_to),
        _ => None,
    }
}

/// Helper to verify that the next message is an Action request
pub async fn expect_action<T: ActorEntity>(
    receiver: &mut mpsc::Receiver<ResourceRequest<T>>,
) -> Option<(
    T::Action,
    tokio::sync::oneshot::Sender<Result<Applied<T::ActionResult>, FrameworkError>>,
)> {
    match receiver.recv().await {
        Some(ResourceRequest::Action { action, respond_to }) => Some((action, respond_to)),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cart_actor::CartAction;
    use crate::model::{Cart, Product};

    #[tokio::test]
    async fn test_mock_client_with_expectations() {
        let mut cart = Cart::new();
        cart.add(Product::new("1", "Agua", "sem alcool", 2.0), 1);

        let mut mock = MockClient::<Cart>::new();
        mock.expect_get().return_ok(cart.clone());
        mock.expect_action()
            .return_ok_with(Cart::new(), Persistence::Failed);

        let client = mock.client();

        assert_eq!(client.get().await.unwrap(), cart);

        let applied = client.perform_action(CartAction::Clear).await.unwrap();
        assert!(applied.result.is_empty());
        assert_eq!(applied.durability.wait().await, Persistence::Failed);

        let actions = mock.take_actions();
        assert!(matches!(actions.as_slice(), [CartAction::Clear]));
        mock.verify();
    }

    #[tokio::test]
    async fn test_mismatched_request_drops_response() {
        let mut mock = MockClient::<Cart>::new();
        mock.expect_load().return_ok(Cart::new());

        let err = mock.client().get().await.unwrap_err();
        assert!(matches!(err, FrameworkError::ActorDropped));
    }

    #[tokio::test]
    async fn test_raw_mock_client() {
        let (client, mut receiver) = create_mock_client::<Cart>(10);

        let get_task = tokio::spawn(async move { client.get().await });

        let responder = expect_get(&mut receiver).await.expect("Expected Get request");
        responder.send(Ok(Cart::new())).unwrap();

        let result = get_task.await.unwrap();
        assert!(result.unwrap().is_empty());
    }
}
