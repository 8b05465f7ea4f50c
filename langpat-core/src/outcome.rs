//! Explicit success/failure results.
//!
//! [`Outcome<T>`] replaces exception-driven control flow for *expected*
//! failures (a lookup that found nothing, a remote call that was rejected).
//! Every call site has to handle both branches, either by pattern matching or
//! through [`Outcome::traverse`].
//!
//! # Outcome at Boundaries, Result Internally
//!
//! Internal code keeps using `Result<T, E>` and `?`. `Outcome<T>` is what a
//! query or command hands back across a collaborator boundary, usually
//! produced by one of the `TryOutcome*` shims.
//!
//! ```
//! use langpat_core::{Outcome, Success};
//!
//! fn lookup(id: u32) -> Outcome<&'static str> {
//!     match id {
//!         1 => Success::of("first"),
//!         _ => Err::<&str, _>(format!("no entry {}", id)).into(),
//!     }
//! }
//!
//! assert!(lookup(1).succeeded());
//! assert_eq!(lookup(2).error_message().unwrap_or(""), "no entry 2");
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{ContractResult, ContractViolation};
use crate::maybe::Maybe;
use crate::unit::Unit;

/// Text used when a caught error renders as an empty string.
pub const UNSPECIFIED_FAILURE: &str = "unspecified failure";

// ============================================================================
// FAILURE MESSAGE
// ============================================================================

/// A failure description that is guaranteed to be non-empty.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct FailureMessage(String);

impl FailureMessage {
    /// Validate and wrap a message.
    ///
    /// # Errors
    ///
    /// Returns [`ContractViolation::EmptyMessage`] when `message` is empty.
    pub fn new(message: impl Into<String>) -> ContractResult<Self> {
        let message = message.into();
        if message.is_empty() {
            return Err(ContractViolation::EmptyMessage {
                parameter: "error_message",
            });
        }
        Ok(Self(message))
    }

    /// Render a caught error, falling back to [`UNSPECIFIED_FAILURE`] when the
    /// error's text is empty. Never fails.
    pub fn from_error<E: fmt::Display + ?Sized>(error: &E) -> Self {
        let text = error.to_string();
        if text.is_empty() {
            Self(UNSPECIFIED_FAILURE.to_string())
        } else {
            Self(text)
        }
    }

    /// Borrow the message text.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consume and return the message text.
    pub fn into_string(self) -> String {
        self.0
    }
}

impl TryFrom<String> for FailureMessage {
    type Error = ContractViolation;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<FailureMessage> for String {
    fn from(value: FailureMessage) -> Self {
        value.0
    }
}

impl AsRef<str> for FailureMessage {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for FailureMessage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl std::error::Error for FailureMessage {}

// ============================================================================
// OUTCOME TYPE
// ============================================================================

/// The result of an operation that can fail in an expected way.
///
/// # Variants
///
/// - `Success(T)`: the operation produced a value
/// - `Failure(FailureMessage)`: the operation failed; no payload is retained
///
/// Two outcomes are equal when they are the same variant and carry equal
/// payloads or equal messages. A success never equals a failure.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome<T> {
    /// Successful result
    Success(T),
    /// Expected failure with a description
    Failure(FailureMessage),
}

impl<T> Outcome<T> {
    /// Create a successful outcome.
    pub fn success(value: T) -> Self {
        Outcome::Success(value)
    }

    /// Create a failed outcome.
    ///
    /// # Errors
    ///
    /// Returns [`ContractViolation::EmptyMessage`] when `message` is empty.
    pub fn failure(message: impl Into<String>) -> ContractResult<Self> {
        FailureMessage::new(message).map(Outcome::Failure)
    }

    /// Create a failed outcome from an already validated message.
    pub fn from_message(message: FailureMessage) -> Self {
        Outcome::Failure(message)
    }

    /// Check if the operation succeeded.
    pub fn succeeded(&self) -> bool {
        matches!(self, Outcome::Success(_))
    }

    /// Check if the operation failed.
    pub fn failed(&self) -> bool {
        matches!(self, Outcome::Failure(_))
    }

    /// Borrow the success value, if any.
    pub fn value(&self) -> Maybe<&T> {
        match self {
            Outcome::Success(v) => Maybe::Just(v),
            Outcome::Failure(_) => Maybe::Nothing,
        }
    }

    /// Take the success value, if any.
    pub fn into_value(self) -> Maybe<T> {
        match self {
            Outcome::Success(v) => Maybe::Just(v),
            Outcome::Failure(_) => Maybe::Nothing,
        }
    }

    /// Borrow the failure message, if any.
    pub fn error_message(&self) -> Maybe<&str> {
        match self {
            Outcome::Success(_) => Maybe::Nothing,
            Outcome::Failure(m) => Maybe::Just(m.as_str()),
        }
    }

    /// Eliminate the outcome. Exactly one of the two handlers runs.
    pub fn traverse<R, S, F>(self, on_success: S, on_failure: F) -> R
    where
        S: FnOnce(T) -> R,
        F: FnOnce(&FailureMessage) -> R,
    {
        match self {
            Outcome::Success(v) => on_success(v),
            Outcome::Failure(m) => on_failure(&m),
        }
    }

    /// Side-effecting elimination. Exactly one of the two handlers runs.
    pub fn inspect<S, F>(&self, on_success: S, on_failure: F)
    where
        S: FnOnce(&T),
        F: FnOnce(&str),
    {
        match self {
            Outcome::Success(v) => on_success(v),
            Outcome::Failure(m) => on_failure(m.as_str()),
        }
    }

    /// Map the success value.
    pub fn map<U, F>(self, f: F) -> Outcome<U>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Outcome::Success(v) => Outcome::Success(f(v)),
            Outcome::Failure(m) => Outcome::Failure(m),
        }
    }

    /// Chain a function that returns an Outcome on the success value.
    ///
    /// If `self` is `Success(t)`, returns `f(t)`. Otherwise the failure is
    /// passed through unchanged.
    pub fn bind<U, F>(self, f: F) -> Outcome<U>
    where
        F: FnOnce(T) -> Outcome<U>,
    {
        match self {
            Outcome::Success(v) => f(v),
            Outcome::Failure(m) => Outcome::Failure(m),
        }
    }

    /// Rewrite the failure message.
    pub fn map_failure<F>(self, f: F) -> Self
    where
        F: FnOnce(FailureMessage) -> FailureMessage,
    {
        match self {
            Outcome::Failure(m) => Outcome::Failure(f(m)),
            other => other,
        }
    }

    /// Extract the success value or return `default`.
    pub fn unwrap_or(self, default: T) -> T {
        match self {
            Outcome::Success(v) => v,
            Outcome::Failure(_) => default,
        }
    }

    /// Convert to a Result for use with `?` inside internal code.
    pub fn into_result(self) -> Result<T, FailureMessage> {
        match self {
            Outcome::Success(v) => Ok(v),
            Outcome::Failure(m) => Err(m),
        }
    }
}

impl<T: Default> Outcome<T> {
    /// Extract the success value, or the empty/default payload on failure.
    pub fn unwrap_or_default(self) -> T {
        match self {
            Outcome::Success(v) => v,
            Outcome::Failure(_) => T::default(),
        }
    }
}

impl<T, E: fmt::Display> From<Result<T, E>> for Outcome<T> {
    fn from(result: Result<T, E>) -> Self {
        match result {
            Ok(v) => Outcome::Success(v),
            Err(e) => Outcome::Failure(FailureMessage::from_error(&e)),
        }
    }
}

// ============================================================================
// SMART CONSTRUCTORS
// ============================================================================

/// Constructors for successful outcomes.
#[derive(Debug, Clone, Copy)]
pub struct Success;

impl Success {
    /// Wrap `value` in a successful outcome.
    pub fn of<T>(value: T) -> Outcome<T> {
        Outcome::Success(value)
    }

    /// A successful command outcome.
    pub fn ok() -> Outcome<Unit> {
        Outcome::Success(Unit)
    }
}

/// Constructors for failed outcomes.
#[derive(Debug, Clone, Copy)]
pub struct Failure;

impl Failure {
    /// A failed outcome of any payload type.
    ///
    /// # Errors
    ///
    /// Returns [`ContractViolation::EmptyMessage`] when `message` is empty.
    pub fn of<T>(message: impl Into<String>) -> ContractResult<Outcome<T>> {
        Outcome::failure(message)
    }

    /// A failed command outcome.
    ///
    /// # Errors
    ///
    /// Returns [`ContractViolation::EmptyMessage`] when `message` is empty.
    pub fn nok(message: impl Into<String>) -> ContractResult<Outcome<Unit>> {
        Outcome::failure(message)
    }
}
