//! langpat core - value types
//!
//! Pure data types with no I/O: [`Maybe<T>`] for zero-or-one values and
//! [`Outcome<T>`] for expected success/failure results. Every other crate in
//! the workspace depends on this one.

pub mod error;
pub mod maybe;
pub mod outcome;
pub mod unit;

pub use error::{ContractResult, ContractViolation};
pub use maybe::{IntoMaybe, Maybe};
pub use outcome::{Failure, FailureMessage, Outcome, Success, UNSPECIFIED_FAILURE};
pub use unit::Unit;
