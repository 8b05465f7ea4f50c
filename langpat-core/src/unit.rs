//! Zero-information marker type.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Marker payload for operations where only success or failure matters.
///
/// Commands report `Outcome<Unit>`; queries report `Outcome<R>` for a real
/// result type `R`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Unit;

impl Unit {
    /// The single value of this type.
    pub const DEFAULT: Unit = Unit;
}

impl From<()> for Unit {
    fn from(_: ()) -> Self {
        Unit
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("()")
    }
}
