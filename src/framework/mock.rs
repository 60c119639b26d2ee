//! # Mock Framework
//!
//! Utilities for testing clients in isolation.
//!
//! [`MockClient`] answers requests from a queue of expectations, which makes it
//! easy to inject failures that a real actor rarely produces (a closed store,
//! a dropped reply). Use [`create_mock_client`] to get a client plus the raw
//! request receiver, then helpers like [`expect_batch`] or [`expect_action`]
//! to assert on what the client sent.
//!
//! ```ignore
//! let mut mock = MockClient::<MenuItem>::new();
//! mock.expect_batch().return_err(FrameworkError::ActorClosed);
//!
//! let menu = MenuClient::new(mock.client());
//! // Use client in tests...
//! mock.verify(); // Ensures all expectations were met
//! ```

use crate::framework::{ActorEntity, BatchOutcome, FrameworkError, ResourceClient, ResourceRequest};
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use tokio::sync::{mpsc, oneshot};

// =============================================================================
// EXPECTATION BUILDER API
// =============================================================================

/// An expected request and the canned response for it.
enum Expectation<T: ActorEntity> {
    Get(Result<Option<T>, FrameworkError>),
    Create(Result<T::Id, FrameworkError>),
    List(Result<Vec<T>, FrameworkError>),
    Action(Result<T::ActionResult, FrameworkError>),
    Batch(Result<Vec<BatchOutcome<T>>, FrameworkError>),
}

type Expectations<T> = Arc<Mutex<VecDeque<Expectation<T>>>>;

/// A mock client with expectation tracking for fluent testing.
///
/// Requests are matched against expectations in FIFO order. A request that
/// does not match the next expectation is answered with
/// [`FrameworkError::ActorDropped`] and recorded as a mismatch, which makes
/// [`MockClient::verify`] fail.
pub struct MockClient<T: ActorEntity> {
    client: ResourceClient<T>,
    expectations: Expectations<T>,
    mismatches: Arc<Mutex<Vec<String>>>,
    _handle: tokio::task::JoinHandle<()>,
}

impl<T: ActorEntity> Default for MockClient<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: ActorEntity> MockClient<T> {
    /// Creates a new mock client with no expectations.
    pub fn new() -> Self {
        let (sender, mut receiver) = mpsc::channel::<ResourceRequest<T>>(100);
        let expectations: Expectations<T> = Arc::new(Mutex::new(VecDeque::new()));
        let mismatches = Arc::new(Mutex::new(Vec::new()));
        let queue = expectations.clone();
        let misses = mismatches.clone();

        let handle = tokio::spawn(async move {
            while let Some(request) = receiver.recv().await {
                let expectation = queue.lock().ok().and_then(|mut q| q.pop_front());

                match (request, expectation) {
                    (ResourceRequest::Get { respond_to, .. }, Some(Expectation::Get(r))) => {
                        let _ = respond_to.send(r);
                    }
                    (ResourceRequest::Create { respond_to, .. }, Some(Expectation::Create(r))) => {
                        let _ = respond_to.send(r);
                    }
                    (ResourceRequest::List { respond_to, .. }, Some(Expectation::List(r))) => {
                        let _ = respond_to.send(r);
                    }
                    (ResourceRequest::Action { respond_to, .. }, Some(Expectation::Action(r))) => {
                        let _ = respond_to.send(r);
                    }
                    (ResourceRequest::Batch { respond_to, .. }, Some(Expectation::Batch(r))) => {
                        let _ = respond_to.send(r);
                    }
                    (request, _) => {
                        if let Ok(mut m) = misses.lock() {
                            m.push(format!("{request:?}"));
                        }
                        reject(request);
                    }
                }
            }
        });

        Self {
            client: ResourceClient::new(sender),
            expectations,
            mismatches,
            _handle: handle,
        }
    }

    /// Returns the client for use in tests.
    pub fn client(&self) -> ResourceClient<T> {
        self.client.clone()
    }

    fn push(&self, expectation: Expectation<T>) {
        if let Ok(mut q) = self.expectations.lock() {
            q.push_back(expectation);
        }
    }

    /// Expects a `get` operation.
    pub fn expect_get(&mut self) -> ExpectationBuilder<'_, T, Option<T>> {
        ExpectationBuilder::new(self, Expectation::Get)
    }

    /// Expects a `create` operation.
    pub fn expect_create(&mut self) -> ExpectationBuilder<'_, T, T::Id> {
        ExpectationBuilder::new(self, Expectation::Create)
    }

    /// Expects a filtered scan.
    pub fn expect_list(&mut self) -> ExpectationBuilder<'_, T, Vec<T>> {
        ExpectationBuilder::new(self, Expectation::List)
    }

    /// Expects a single-record action.
    pub fn expect_action(&mut self) -> ExpectationBuilder<'_, T, T::ActionResult> {
        ExpectationBuilder::new(self, Expectation::Action)
    }

    /// Expects a multi-record batch.
    pub fn expect_batch(&mut self) -> ExpectationBuilder<'_, T, Vec<BatchOutcome<T>>> {
        ExpectationBuilder::new(self, Expectation::Batch)
    }

    /// Panics unless every expectation was consumed and no request was unexpected.
    pub fn verify(&self) {
        let remaining = self.expectations.lock().map(|q| q.len()).unwrap_or(0);
        if remaining != 0 {
            panic!("Not all expectations were met. {remaining} remaining");
        }
        let mismatches = self.mismatches.lock().map(|m| m.clone()).unwrap_or_default();
        if !mismatches.is_empty() {
            panic!("Unexpected requests: {mismatches:?}");
        }
    }
}

fn reject<T: ActorEntity>(request: ResourceRequest<T>) {
    fn drop_reply<R>(respond_to: oneshot::Sender<Result<R, FrameworkError>>) {
        let _ = respond_to.send(Err(FrameworkError::ActorDropped));
    }
    match request {
        ResourceRequest::Create { respond_to, .. } => drop_reply(respond_to),
        ResourceRequest::Get { respond_to, .. } => drop_reply(respond_to),
        ResourceRequest::List { respond_to, .. } => drop_reply(respond_to),
        ResourceRequest::Update { respond_to, .. } => drop_reply(respond_to),
        ResourceRequest::Delete { respond_to, .. } => drop_reply(respond_to),
        ResourceRequest::Action { respond_to, .. } => drop_reply(respond_to),
        ResourceRequest::Batch { respond_to, .. } => drop_reply(respond_to),
    }
}

/// Builder that records the response for one expected request.
pub struct ExpectationBuilder<'a, T: ActorEntity, R> {
    mock: &'a MockClient<T>,
    wrap: fn(Result<R, FrameworkError>) -> Expectation<T>,
}

impl<'a, T: ActorEntity, R> ExpectationBuilder<'a, T, R> {
    fn new(mock: &'a MockClient<T>, wrap: fn(Result<R, FrameworkError>) -> Expectation<T>) -> Self {
        Self { mock, wrap }
    }

    /// Sets the expectation to return a successful result.
    pub fn return_ok(self, value: R) {
        self.mock.push((self.wrap)(Ok(value)));
    }

    /// Sets the expectation to return an error.
    pub fn return_err(self, error: FrameworkError) {
        self.mock.push((self.wrap)(Err(error)));
    }
}

// =============================================================================
// RAW RECEIVER HELPERS
// =============================================================================

/// Creates a client and the receiver its requests arrive on.
///
/// Tests drive the receiver by hand, inspect each request, and answer through
/// the `respond_to` channel, simulating the store deterministically.
pub fn create_mock_client<T: ActorEntity>(
    buffer_size: usize,
) -> (ResourceClient<T>, mpsc::Receiver<ResourceRequest<T>>) {
    let (sender, receiver) = mpsc::channel(buffer_size);
    (ResourceClient::new(sender), receiver)
}

/// Returns the next request if it is an Action.
pub async fn expect_action<T: ActorEntity>(
    receiver: &mut mpsc::Receiver<ResourceRequest<T>>,
) -> Option<(
    T::Id,
    T::Action,
    oneshot::Sender<Result<T::ActionResult, FrameworkError>>,
)> {
    match receiver.recv().await {
        Some(ResourceRequest::Action {
            id,
            action,
            respond_to,
        }) => Some((id, action, respond_to)),
        _ => None,
    }
}

/// Returns the next request if it is a Batch.
pub async fn expect_batch<T: ActorEntity>(
    receiver: &mut mpsc::Receiver<ResourceRequest<T>>,
) -> Option<(
    Vec<(T::Id, T::Action)>,
    oneshot::Sender<Result<Vec<BatchOutcome<T>>, FrameworkError>>,
)> {
    match receiver.recv().await {
        Some(ResourceRequest::Batch { ops, respond_to }) => Some((ops, respond_to)),
        _ => None,
    }
}

/// Returns the next request if it is a Create.
pub async fn expect_create<T: ActorEntity>(
    receiver: &mut mpsc::Receiver<ResourceRequest<T>>,
) -> Option<(T::Create, oneshot::Sender<Result<T::Id, FrameworkError>>)> {
    match receiver.recv().await {
        Some(ResourceRequest::Create { params, respond_to }) => Some((params, respond_to)),
        _ => None,
    }
}
