//! langpat adapters - query/command capabilities and outcome shims
//!
//! Collaborators expose [`Query`] and [`Command`] (or their async forms) and
//! report failures through `Result`. At the boundary where callers expect
//! failures as data, wrap them in a shim:
//!
//! ```text
//! Query<A>        ─ TryOutcomeQuery ────────→ OutcomeQuery<A>
//! Command<A>      ─ TryOutcomeCommand ──────→ OutcomeCommand<A>
//! AsyncQuery<A>   ─ TryAsyncOutcomeQuery ───→ AsyncOutcomeQuery<A>
//! AsyncCommand<A> ─ TryAsyncOutcomeCommand ─→ AsyncOutcomeCommand<A>
//! ```

pub mod capability;
pub mod factory;
pub mod shim;

pub use capability::{
    AsyncCommand, AsyncOutcomeCommand, AsyncOutcomeQuery, AsyncQuery, Command, OutcomeCommand,
    OutcomeQuery, Query,
};
pub use factory::{
    try_async_outcome_command, try_async_outcome_query, try_outcome_command, try_outcome_query,
    TryOutcomeExt,
};
pub use shim::{TryAsyncOutcomeCommand, TryAsyncOutcomeQuery, TryOutcomeCommand, TryOutcomeQuery};
