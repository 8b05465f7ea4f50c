//! Expiration policies.
//!
//! A policy looks at the currently held value and answers one question: is it
//! stale? The manager asks on every access after the first fill, while it
//! holds its lock, so a policy must answer promptly and should not block.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use std::time::Duration;

/// Decides whether a cached value must be replaced.
///
/// Any `Fn(&T) -> bool` closure is a policy. Annotate the closure's argument
/// type (`|token: &Token| ...`) so the compiler can see it takes a reference.
pub trait ExpirationPolicy<T>: Send + Sync {
    /// Returns true when `value` is stale.
    fn is_expired(&self, value: &T) -> bool;
}

impl<T, F> ExpirationPolicy<T> for F
where
    F: Fn(&T) -> bool + Send + Sync,
{
    fn is_expired(&self, value: &T) -> bool {
        self(value)
    }
}

/// Never refresh once filled. The manager behaves as a lazy async cell.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Never;

impl<T> ExpirationPolicy<T> for Never {
    fn is_expired(&self, _value: &T) -> bool {
        false
    }
}

/// Refresh on every access. Accesses are still serialized.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Always;

impl<T> ExpirationPolicy<T> for Always {
    fn is_expired(&self, _value: &T) -> bool {
        true
    }
}

// ============================================================================
// DEADLINE-BASED EXPIRATION
// ============================================================================

/// A value that knows when it stops being valid (access tokens, leases,
/// signed URLs).
pub trait Expiring {
    /// Instant after which the value must not be used.
    fn expires_at(&self) -> DateTime<Utc>;
}

impl<T: Expiring + ?Sized> Expiring for Arc<T> {
    fn expires_at(&self) -> DateTime<Utc> {
        (**self).expires_at()
    }
}

impl<T: Expiring + ?Sized> Expiring for Box<T> {
    fn expires_at(&self) -> DateTime<Utc> {
        (**self).expires_at()
    }
}

/// Refresh values whose deadline is reached, or will be within `skew`.
///
/// The skew lets a token be replaced shortly before it actually lapses, so
/// a value handed out is still valid by the time the caller uses it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExpiresAt {
    /// How long before the deadline a value already counts as stale.
    pub skew: Duration,
}

impl ExpiresAt {
    /// Expire exactly at the deadline.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the early-refresh skew.
    pub fn with_skew(mut self, skew: Duration) -> Self {
        self.skew = skew;
        self
    }

    /// Evaluate against an explicit clock reading.
    pub fn is_expired_at<T: Expiring + ?Sized>(&self, value: &T, now: DateTime<Utc>) -> bool {
        let skew = chrono::Duration::from_std(self.skew).unwrap_or(chrono::Duration::MAX);
        match now.checked_add_signed(skew) {
            Some(horizon) => horizon >= value.expires_at(),
            None => true,
        }
    }
}

impl<T: Expiring> ExpirationPolicy<T> for ExpiresAt {
    fn is_expired(&self, value: &T) -> bool {
        self.is_expired_at(value, Utc::now())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Lease {
        until: DateTime<Utc>,
    }

    impl Expiring for Lease {
        fn expires_at(&self) -> DateTime<Utc> {
            self.until
        }
    }

    #[test]
    fn test_never_and_always() {
        assert!(!ExpirationPolicy::<i32>::is_expired(&Never, &1));
        assert!(ExpirationPolicy::<i32>::is_expired(&Always, &1));
    }

    #[test]
    fn test_closure_policy() {
        let policy = |v: &u32| *v > 10;
        assert!(policy.is_expired(&11));
        assert!(!policy.is_expired(&10));
    }

    #[test]
    fn test_expires_at_deadline() {
        let now = Utc::now();
        let lease = Lease {
            until: now + chrono::Duration::seconds(30),
        };
        let policy = ExpiresAt::new();

        assert!(!policy.is_expired_at(&lease, now));
        assert!(policy.is_expired_at(&lease, now + chrono::Duration::seconds(30)));
        assert!(policy.is_expired_at(&lease, now + chrono::Duration::seconds(31)));
    }

    #[test]
    fn test_expires_at_with_skew() {
        let now = Utc::now();
        let lease = Arc::new(Lease {
            until: now + chrono::Duration::seconds(30),
        });
        let policy = ExpiresAt::new().with_skew(Duration::from_secs(60));

        assert!(policy.is_expired_at(&lease, now));
        let narrow = ExpiresAt::new().with_skew(Duration::from_secs(5));
        assert!(narrow.is_expired_at(&lease, now + chrono::Duration::seconds(26)));
        assert!(!narrow.is_expired_at(&lease, now + chrono::Duration::seconds(20)));
    }

    #[test]
    fn test_expires_at_uses_wall_clock() {
        let past = Lease {
            until: Utc::now() - chrono::Duration::seconds(1),
        };
        let future = Lease {
            until: Utc::now() + chrono::Duration::hours(1),
        };
        assert!(ExpiresAt::new().is_expired(&past));
        assert!(!ExpiresAt::new().is_expired(&future));
    }
}

#[cfg(test)]
mod prop_tests {
    use super::*;
    use proptest::prelude::*;

    struct Deadline(DateTime<Utc>);

    impl Expiring for Deadline {
        fn expires_at(&self) -> DateTime<Utc> {
            self.0
        }
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(256))]

        /// Property: A value is stale exactly when the deadline falls within the skew window.
        #[test]
        fn prop_expires_within_skew(remaining in -86_400i64..86_400, skew in 0u64..3_600) {
            let now = Utc::now();
            let value = Deadline(now + chrono::Duration::seconds(remaining));
            let policy = ExpiresAt::new().with_skew(Duration::from_secs(skew));

            prop_assert_eq!(policy.is_expired_at(&value, now), remaining <= skew as i64);
        }

        /// Property: Never and Always ignore the value entirely.
        #[test]
        fn prop_constant_policies(v in any::<i64>()) {
            prop_assert!(!Never.is_expired(&v));
            prop_assert!(Always.is_expired(&v));
        }
    }
}
