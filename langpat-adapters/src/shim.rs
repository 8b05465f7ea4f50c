//! Shims that catch collaborator errors and hand them back as failures.
//!
//! Each shim wraps one fallible capability and implements the matching
//! outcome capability with the same argument type:
//!
//! - `Ok(value)` becomes `Success::of(value)`
//! - `Err(error)` becomes a failure whose message is `error.to_string()`
//!   (or [`UNSPECIFIED_FAILURE`](langpat_core::UNSPECIFIED_FAILURE) when that
//!   renders empty)
//!
//! A shim never fails itself. Panics are not caught: a panicking collaborator
//! has broken its contract and the panic keeps unwinding.
//!
//! A query whose output is already a [`Maybe<R>`](langpat_core::Maybe) comes
//! out as `Outcome<Maybe<R>>`, and `Outcome::unwrap_or_default` on a failure
//! yields `Maybe::Nothing`.

use std::any::type_name;
use std::fmt;

use async_trait::async_trait;
use langpat_core::{FailureMessage, Outcome, Success, Unit};
use tracing::warn;

use crate::capability::{
    AsyncCommand, AsyncOutcomeCommand, AsyncOutcomeQuery, AsyncQuery, Command, OutcomeCommand,
    OutcomeQuery, Query,
};

fn caught<T, E: fmt::Display>(collaborator: &'static str, error: E) -> Outcome<T> {
    let message = FailureMessage::from_error(&error);
    warn!(collaborator, error = %message, "collaborator failed");
    Outcome::from_message(message)
}

fn settle<T, E: fmt::Display>(collaborator: &'static str, result: Result<T, E>) -> Outcome<T> {
    match result {
        Ok(value) => Success::of(value),
        Err(error) => caught(collaborator, error),
    }
}

macro_rules! shim_accessors {
    ($shim:ident) => {
        impl<C> $shim<C> {
            /// Wrap a collaborator.
            pub fn new(inner: C) -> Self {
                Self { inner }
            }

            /// Borrow the wrapped collaborator.
            pub fn inner(&self) -> &C {
                &self.inner
            }

            /// Unwrap the collaborator.
            pub fn into_inner(self) -> C {
                self.inner
            }
        }
    };
}

// ============================================================================
// SYNCHRONOUS SHIMS
// ============================================================================

/// Turns a [`Query`] into an [`OutcomeQuery`].
#[derive(Debug, Clone, Copy, Default)]
pub struct TryOutcomeQuery<C> {
    inner: C,
}

shim_accessors!(TryOutcomeQuery);

impl<A, C: Query<A>> OutcomeQuery<A> for TryOutcomeQuery<C> {
    type Output = C::Output;

    fn send_query(&self, args: A) -> Outcome<C::Output> {
        settle(type_name::<C>(), self.inner.send_query(args))
    }
}

/// Turns a [`Command`] into an [`OutcomeCommand`].
#[derive(Debug, Clone, Copy, Default)]
pub struct TryOutcomeCommand<C> {
    inner: C,
}

shim_accessors!(TryOutcomeCommand);

impl<A, C: Command<A>> OutcomeCommand<A> for TryOutcomeCommand<C> {
    fn send_command(&self, args: A) -> Outcome<Unit> {
        settle(type_name::<C>(), self.inner.send_command(args).map(Unit::from))
    }
}

// ============================================================================
// ASYNCHRONOUS SHIMS
// ============================================================================

/// Turns an [`AsyncQuery`] into an [`AsyncOutcomeQuery`].
#[derive(Debug, Clone, Copy, Default)]
pub struct TryAsyncOutcomeQuery<C> {
    inner: C,
}

shim_accessors!(TryAsyncOutcomeQuery);

#[async_trait]
impl<A, C> AsyncOutcomeQuery<A> for TryAsyncOutcomeQuery<C>
where
    A: Send + 'static,
    C: AsyncQuery<A>,
{
    type Output = C::Output;

    async fn send_query(&self, args: A) -> Outcome<C::Output> {
        settle(type_name::<C>(), self.inner.send_query(args).await)
    }
}

/// Turns an [`AsyncCommand`] into an [`AsyncOutcomeCommand`].
#[derive(Debug, Clone, Copy, Default)]
pub struct TryAsyncOutcomeCommand<C> {
    inner: C,
}

shim_accessors!(TryAsyncOutcomeCommand);

#[async_trait]
impl<A, C> AsyncOutcomeCommand<A> for TryAsyncOutcomeCommand<C>
where
    A: Send + 'static,
    C: AsyncCommand<A>,
{
    async fn send_command(&self, args: A) -> Outcome<Unit> {
        settle(type_name::<C>(), self.inner.send_command(args).await.map(Unit::from))
    }
}
