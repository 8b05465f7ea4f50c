//! Configuration for a lifetime manager.

use serde::{Deserialize, Serialize};

/// What a manager does when refreshing a stale value fails.
///
/// A failed *first* fill always returns the producer's error, since there is
/// nothing to fall back on.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RefreshFailure {
    /// Return the producer's error. The previous value stays cached and the
    /// next access tries again.
    #[default]
    Propagate,
    /// Log the error and hand out the previous value. The next access tries
    /// again.
    ServeStale,
}

/// Configuration for a [`LifetimeManager`](crate::LifetimeManager).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LifetimeConfig {
    /// Name attached to the manager's tracing spans.
    pub label: String,
    /// Behaviour when a refresh fails after a successful fill.
    pub refresh_failure: RefreshFailure,
}

impl Default for LifetimeConfig {
    fn default() -> Self {
        Self {
            label: "lifetime".to_string(),
            refresh_failure: RefreshFailure::Propagate,
        }
    }
}

impl LifetimeConfig {
    /// Create a new config with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the tracing label.
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }

    /// Set the refresh failure behaviour.
    pub fn with_refresh_failure(mut self, refresh_failure: RefreshFailure) -> Self {
        self.refresh_failure = refresh_failure;
        self
    }
}
