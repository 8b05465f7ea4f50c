//! langpat Test Utilities
//!
//! Shared test infrastructure for the langpat workspace:
//! - Proptest generators for `Maybe`, `Outcome` and failure messages
//! - Mock producers, queries and commands with call counting
//! - Custom assertions for outcomes
//! - Test tracing setup

pub use langpat_adapters::{AsyncCommand, AsyncQuery, Command, Query};
pub use langpat_core::{FailureMessage, Maybe, Outcome, Unit};
pub use langpat_lifetime::{Expiring, Producer};

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;
use uuid::Uuid;

/// Error returned by every mock in this crate.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{0}")]
pub struct MockError(pub String);

/// Install a test subscriber once per process. Honors `RUST_LOG`, falling
/// back to debug output for the langpat crates.
pub fn init_test_tracing() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        tracing_subscriber::EnvFilter::new("langpat_lifetime=debug,langpat_adapters=debug")
    });
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_test_writer()
        .try_init();
}

// ============================================================================
// TEST OBJECTS
// ============================================================================

/// A value with identity, for checking which produce call a cached value
/// came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TestObject {
    pub id: Uuid,
    /// Zero-based index of the produce call that made this object.
    pub generation: usize,
    pub expires_at: DateTime<Utc>,
}

impl TestObject {
    /// An object valid for an hour.
    pub fn new(generation: usize) -> Self {
        Self::expiring_in(generation, chrono::Duration::hours(1))
    }

    /// An object whose deadline is `ttl` from now (negative for already stale).
    pub fn expiring_in(generation: usize, ttl: chrono::Duration) -> Self {
        Self {
            id: Uuid::now_v7(),
            generation,
            expires_at: Utc::now() + ttl,
        }
    }
}

impl Expiring for TestObject {
    fn expires_at(&self) -> DateTime<Utc> {
        self.expires_at
    }
}

// ============================================================================
// MOCK PRODUCER
// ============================================================================

/// Producer that counts its calls and builds values from the call index.
///
/// ```
/// use langpat_test_utils::CountingProducer;
///
/// let producer = CountingProducer::new(|n: usize| n * 10).failing_on([1]);
/// let calls = producer.counter();
/// # drop((producer, calls));
/// ```
pub struct CountingProducer<F> {
    make: F,
    calls: Arc<AtomicUsize>,
    delay: Option<Duration>,
    failing: Vec<usize>,
}

impl<F> CountingProducer<F> {
    pub fn new(make: F) -> Self {
        Self {
            make,
            calls: Arc::new(AtomicUsize::new(0)),
            delay: None,
            failing: Vec::new(),
        }
    }

    /// Sleep before every produce, to widen race windows.
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    /// Fail the produce calls with these zero-based indices.
    pub fn failing_on(mut self, calls: impl IntoIterator<Item = usize>) -> Self {
        self.failing.extend(calls);
        self
    }

    /// Number of produce calls started so far.
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    /// Shared handle to the call counter, readable after the producer has
    /// been moved into a manager.
    pub fn counter(&self) -> Arc<AtomicUsize> {
        Arc::clone(&self.calls)
    }
}

#[async_trait]
impl<T, F> Producer<T> for CountingProducer<F>
where
    T: Send + 'static,
    F: Fn(usize) -> T + Send + Sync,
{
    type Error = MockError;

    async fn produce(&self) -> Result<T, MockError> {
        let call = self.calls.fetch_add(1, Ordering::SeqCst);
        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }
        if self.failing.contains(&call) {
            return Err(MockError(format!("produce call {} failed", call)));
        }
        Ok((self.make)(call))
    }
}

// ============================================================================
// MOCK COLLABORATORS
// ============================================================================

/// Query that always answers with the same result and counts its calls.
/// Implements both [`Query`] and [`AsyncQuery`] for any argument type.
#[derive(Debug)]
pub struct MockQuery<R> {
    response: Result<R, MockError>,
    calls: AtomicUsize,
}

impl<R> MockQuery<R> {
    pub fn returning(value: R) -> Self {
        Self {
            response: Ok(value),
            calls: AtomicUsize::new(0),
        }
    }

    pub fn failing(message: impl Into<String>) -> Self {
        Self {
            response: Err(MockError(message.into())),
            calls: AtomicUsize::new(0),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    fn respond(&self) -> Result<R, MockError>
    where
        R: Clone,
    {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.response.clone()
    }
}

impl<A, R: Clone> Query<A> for MockQuery<R> {
    type Output = R;
    type Error = MockError;

    fn send_query(&self, _args: A) -> Result<R, MockError> {
        self.respond()
    }
}

#[async_trait]
impl<A, R> AsyncQuery<A> for MockQuery<R>
where
    A: Send + 'static,
    R: Clone + Send + Sync + 'static,
{
    type Output = R;
    type Error = MockError;

    async fn send_query(&self, _args: A) -> Result<R, MockError> {
        self.respond()
    }
}

/// Command that records every argument it receives, failing on arguments
/// matching `rejects`.
pub struct MockCommand<A> {
    received: std::sync::Mutex<Vec<A>>,
    rejects: fn(&A) -> Option<String>,
}

impl<A> MockCommand<A> {
    /// A command that accepts everything.
    pub fn accepting() -> Self {
        Self::rejecting(|_| None)
    }

    /// A command that fails with the returned message when `rejects` says so.
    pub fn rejecting(rejects: fn(&A) -> Option<String>) -> Self {
        Self {
            received: std::sync::Mutex::new(Vec::new()),
            rejects,
        }
    }

    /// Arguments received so far, in call order.
    pub fn received(&self) -> Vec<A>
    where
        A: Clone,
    {
        self.received
            .lock()
            .map(|received| received.clone())
            .unwrap_or_default()
    }

    fn record(&self, args: A) -> Result<(), MockError> {
        let rejected = (self.rejects)(&args);
        if let Ok(mut received) = self.received.lock() {
            received.push(args);
        }
        match rejected {
            Some(message) => Err(MockError(message)),
            None => Ok(()),
        }
    }
}

impl<A: std::fmt::Debug> std::fmt::Debug for MockCommand<A> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MockCommand")
            .field("received", &self.received)
            .finish_non_exhaustive()
    }
}

impl<A> Command<A> for MockCommand<A> {
    type Error = MockError;

    fn send_command(&self, args: A) -> Result<(), MockError> {
        self.record(args)
    }
}

#[async_trait]
impl<A: Send + 'static> AsyncCommand<A> for MockCommand<A> {
    type Error = MockError;

    async fn send_command(&self, args: A) -> Result<(), MockError> {
        self.record(args)
    }
}

// ============================================================================
// PROPTEST GENERATORS
// ============================================================================

pub mod generators {
    //! Proptest strategies for langpat value types.

    use super::*;
    use proptest::prelude::*;

    /// Generate `Nothing` or `Just` a value from `inner`.
    pub fn arb_maybe<S: Strategy>(inner: S) -> impl Strategy<Value = Maybe<S::Value>> {
        proptest::option::of(inner).prop_map(Maybe::from)
    }

    /// Generate a non-empty failure message.
    pub fn arb_failure_message() -> impl Strategy<Value = FailureMessage> {
        "[a-zA-Z0-9 _:-]{1,40}".prop_filter_map("message must be non-empty", |s| {
            FailureMessage::new(s).ok()
        })
    }

    /// Generate a success from `inner` or a failure with a random message.
    pub fn arb_outcome<S>(inner: S) -> impl Strategy<Value = Outcome<S::Value>>
    where
        S: Strategy,
    {
        prop_oneof![
            inner.prop_map(Outcome::Success),
            arb_failure_message().prop_map(Outcome::from_message),
        ]
    }

    /// Generate a test object with a deadline between an hour ago and an
    /// hour from now. Only the deadline depends on the clock.
    pub fn arb_test_object() -> impl Strategy<Value = TestObject> {
        (any::<[u8; 16]>(), any::<u16>(), -3600i64..3600).prop_map(|(id, generation, ttl)| {
            TestObject {
                id: Uuid::from_bytes(id),
                generation: generation as usize,
                expires_at: Utc::now() + chrono::Duration::seconds(ttl),
            }
        })
    }
}

// ============================================================================
// CUSTOM ASSERTIONS
// ============================================================================

pub mod assertions {
    //! Assertion helpers for outcomes.

    use super::*;
    use std::fmt::Debug;

    /// Assert that an outcome succeeded with `expected`.
    #[track_caller]
    pub fn assert_success<T: Debug + PartialEq>(outcome: &Outcome<T>, expected: &T) {
        match outcome {
            Outcome::Success(value) => assert_eq!(value, expected, "Wrong success value"),
            Outcome::Failure(message) => panic!("Expected success, got failure: {}", message),
        }
    }

    /// Assert that an outcome failed with exactly `expected` as message.
    #[track_caller]
    pub fn assert_failure<T: Debug>(outcome: &Outcome<T>, expected: &str) {
        match outcome {
            Outcome::Failure(message) => {
                assert_eq!(message.as_str(), expected, "Wrong failure message")
            }
            Outcome::Success(value) => {
                panic!("Expected failure '{}', got success: {:?}", expected, value)
            }
        }
    }
}
