//! Query and command capabilities.
//!
//! A query takes arguments and returns a value; a command takes arguments and
//! returns nothing but may still fail. Each comes in four flavours:
//!
//! | | fallible (`Result`) | expected failure as data (`Outcome`) |
//! |---|---|---|
//! | sync | [`Query`], [`Command`] | [`OutcomeQuery`], [`OutcomeCommand`] |
//! | async | [`AsyncQuery`], [`AsyncCommand`] | [`AsyncOutcomeQuery`], [`AsyncOutcomeCommand`] |
//!
//! Closures implement the `Result` flavours directly, so a plain
//! `|id: u32| -> Result<_, _>` can be handed to any shim.

use async_trait::async_trait;
use langpat_core::{Outcome, Unit};
use std::fmt;
use std::future::Future;

// ============================================================================
// FALLIBLE CAPABILITIES
// ============================================================================

/// Synchronous query that may fail.
pub trait Query<A> {
    /// Value produced on success.
    type Output;
    /// Error raised on failure. Its `Display` text becomes the failure message
    /// when wrapped by a shim.
    type Error: fmt::Display;

    fn send_query(&self, args: A) -> Result<Self::Output, Self::Error>;
}

impl<A, R, E, F> Query<A> for F
where
    F: Fn(A) -> Result<R, E>,
    E: fmt::Display,
{
    type Output = R;
    type Error = E;

    fn send_query(&self, args: A) -> Result<R, E> {
        self(args)
    }
}

/// Synchronous command that may fail.
pub trait Command<A> {
    type Error: fmt::Display;

    fn send_command(&self, args: A) -> Result<(), Self::Error>;
}

/// Asynchronous query that may fail.
#[async_trait]
pub trait AsyncQuery<A: Send + 'static>: Send + Sync {
    type Output: Send + 'static;
    type Error: fmt::Display + Send + 'static;

    async fn send_query(&self, args: A) -> Result<Self::Output, Self::Error>;
}

#[async_trait]
impl<A, R, E, F, Fut> AsyncQuery<A> for F
where
    F: Fn(A) -> Fut + Send + Sync,
    Fut: Future<Output = Result<R, E>> + Send + 'static,
    A: Send + 'static,
    R: Send + 'static,
    E: fmt::Display + Send + 'static,
{
    type Output = R;
    type Error = E;

    async fn send_query(&self, args: A) -> Result<R, E> {
        (self)(args).await
    }
}

/// Asynchronous command that may fail.
#[async_trait]
pub trait AsyncCommand<A: Send + 'static>: Send + Sync {
    type Error: fmt::Display + Send + 'static;

    async fn send_command(&self, args: A) -> Result<(), Self::Error>;
}

// ============================================================================
// OUTCOME CAPABILITIES
// ============================================================================

/// Synchronous query that reports expected failures as data.
pub trait OutcomeQuery<A> {
    type Output;

    fn send_query(&self, args: A) -> Outcome<Self::Output>;
}

/// Synchronous command that reports expected failures as data.
pub trait OutcomeCommand<A> {
    fn send_command(&self, args: A) -> Outcome<Unit>;
}

/// Asynchronous query that reports expected failures as data.
#[async_trait]
pub trait AsyncOutcomeQuery<A: Send + 'static>: Send + Sync {
    type Output: Send + 'static;

    async fn send_query(&self, args: A) -> Outcome<Self::Output>;
}

/// Asynchronous command that reports expected failures as data.
#[async_trait]
pub trait AsyncOutcomeCommand<A: Send + 'static>: Send + Sync {
    async fn send_command(&self, args: A) -> Outcome<Unit>;
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(input: &str) -> Result<u32, std::num::ParseIntError> {
        input.parse()
    }

    #[test]
    fn test_fn_is_query() {
        assert_eq!(Query::send_query(&parse, "12"), Ok(12));
        assert!(Query::send_query(&parse, "twelve").is_err());
    }

    #[tokio::test]
    async fn test_async_closure_is_query() {
        let double = |n: u32| async move { Ok::<_, String>(n * 2) };
        assert_eq!(AsyncQuery::send_query(&double, 21).await, Ok(42));
    }
}
