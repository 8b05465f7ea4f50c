//! Constructors for the `TryOutcome*` shims.

use crate::shim::{TryAsyncOutcomeCommand, TryAsyncOutcomeQuery, TryOutcomeCommand, TryOutcomeQuery};

/// Wrap a synchronous query.
pub fn try_outcome_query<C>(query: C) -> TryOutcomeQuery<C> {
    TryOutcomeQuery::new(query)
}

/// Wrap a synchronous command.
pub fn try_outcome_command<C>(command: C) -> TryOutcomeCommand<C> {
    TryOutcomeCommand::new(command)
}

/// Wrap an asynchronous query.
pub fn try_async_outcome_query<C>(query: C) -> TryAsyncOutcomeQuery<C> {
    TryAsyncOutcomeQuery::new(query)
}

/// Wrap an asynchronous command.
pub fn try_async_outcome_command<C>(command: C) -> TryAsyncOutcomeCommand<C> {
    TryAsyncOutcomeCommand::new(command)
}

/// Method-call sugar for the shim constructors.
///
/// ```
/// use langpat_adapters::{OutcomeQuery, TryOutcomeExt};
///
/// let lookup = (|key: &str| key.parse::<u16>()).try_outcome_query();
/// assert!(lookup.send_query("8080").succeeded());
/// assert!(lookup.send_query("http").failed());
/// ```
pub trait TryOutcomeExt: Sized {
    fn try_outcome_query(self) -> TryOutcomeQuery<Self> {
        TryOutcomeQuery::new(self)
    }

    fn try_outcome_command(self) -> TryOutcomeCommand<Self> {
        TryOutcomeCommand::new(self)
    }

    fn try_async_outcome_query(self) -> TryAsyncOutcomeQuery<Self> {
        TryAsyncOutcomeQuery::new(self)
    }

    fn try_async_outcome_command(self) -> TryAsyncOutcomeCommand<Self> {
        TryAsyncOutcomeCommand::new(self)
    }
}

impl<T> TryOutcomeExt for T {}
