//! Single-slot cache with caller-defined expiration.
//!
//! # State Transition Diagram
//!
//! ```text
//! Uninitialized ── get(): produce ok ──→ Holding(v)
//!       ↑                                   │
//!       └──── invalidate() ─────────────────┤
//!                                           │ get(): policy(v) == true
//!                                           ↓
//!                         produce ok ──→ Holding(v')
//!                         produce err ─→ Holding(v)   (error or stale v, per RefreshFailure)
//! ```
//!
//! Every access takes the slot's async mutex first and keeps it across the
//! whole check-and-refresh sequence. At most one produce runs at a time and
//! no caller sees a value while it is being replaced. A caller that waited
//! behind a refresh re-evaluates the policy against the fresh value, so
//! concurrent accesses on a stale slot trigger a single produce.

use std::fmt;

use langpat_core::Maybe;
use tokio::sync::Mutex;
use tracing::{debug, warn};

use crate::config::{LifetimeConfig, RefreshFailure};
use crate::policy::ExpirationPolicy;
use crate::producer::Producer;

/// Lazily produced value, replaced whenever `policy` says it is stale.
///
/// # Type Parameters
///
/// - `T`: the cached value; cloned out on every access, so wrap large values
///   in an `Arc`
/// - `P`: the [`Producer`] that makes fresh values
/// - `X`: the [`ExpirationPolicy`] consulted on each access
///
/// # Example
///
/// ```
/// use std::sync::Arc;
/// use std::sync::atomic::{AtomicU32, Ordering};
/// use langpat_lifetime::{LifetimeManager, Never};
///
/// # tokio_test_block(async {
/// let calls = Arc::new(AtomicU32::new(0));
/// let counter = Arc::clone(&calls);
/// let manager = LifetimeManager::new(
///     move || {
///         let n = counter.fetch_add(1, Ordering::SeqCst);
///         async move { Ok::<_, std::io::Error>(n) }
///     },
///     Never,
/// );
///
/// assert_eq!(manager.get().await.unwrap(), 0);
/// assert_eq!(manager.get().await.unwrap(), 0);
/// assert_eq!(calls.load(Ordering::SeqCst), 1);
/// # });
/// # fn tokio_test_block<F: std::future::Future>(f: F) -> F::Output {
/// #     tokio::runtime::Builder::new_current_thread().build().unwrap().block_on(f)
/// # }
/// ```
pub struct LifetimeManager<T, P, X> {
    producer: P,
    policy: X,
    slot: Mutex<Option<T>>,
    config: LifetimeConfig,
}

impl<T, P, X> LifetimeManager<T, P, X>
where
    T: Clone + Send + 'static,
    P: Producer<T>,
    X: ExpirationPolicy<T>,
{
    /// Create an uninitialized manager with default configuration.
    pub fn new(producer: P, policy: X) -> Self {
        Self::with_config(producer, policy, LifetimeConfig::default())
    }

    /// Create an uninitialized manager.
    pub fn with_config(producer: P, policy: X, config: LifetimeConfig) -> Self {
        Self {
            producer,
            policy,
            slot: Mutex::new(None),
            config,
        }
    }

    /// Get the manager configuration.
    pub fn config(&self) -> &LifetimeConfig {
        &self.config
    }

    /// Return the cached value, producing a fresh one first if the slot is
    /// empty or the policy says the held value is stale.
    ///
    /// # Errors
    ///
    /// Returns the producer's error when the first fill fails (the manager
    /// stays uninitialized and the next call retries), or when a refresh
    /// fails under [`RefreshFailure::Propagate`] (the previous value stays
    /// cached).
    #[tracing::instrument(level = "debug", skip_all, fields(label = %self.config.label))]
    pub async fn get(&self) -> Result<T, P::Error> {
        let mut slot = self.slot.lock().await;

        let refreshing = match slot.as_ref() {
            Some(current) if !self.policy.is_expired(current) => return Ok(current.clone()),
            Some(_) => true,
            None => false,
        };

        debug!(refreshing, "producing value");
        match self.producer.produce().await {
            Ok(fresh) => {
                *slot = Some(fresh.clone());
                Ok(fresh)
            }
            Err(error) => match (slot.as_ref(), self.config.refresh_failure) {
                (Some(previous), RefreshFailure::ServeStale) => {
                    warn!(%error, "refresh failed, serving previous value");
                    Ok(previous.clone())
                }
                _ => {
                    warn!(%error, refreshing, "produce failed");
                    Err(error)
                }
            },
        }
    }

    /// Return the held value without producing or consulting the policy.
    pub async fn peek(&self) -> Maybe<T> {
        Maybe::from_nullable(self.slot.lock().await.clone())
    }

    /// Check whether a value has been produced and not invalidated since.
    pub async fn is_initialized(&self) -> bool {
        self.slot.lock().await.is_some()
    }

    /// Drop the held value so the next [`get`](Self::get) produces a fresh
    /// one. Returns true if a value was held.
    pub async fn invalidate(&self) -> bool {
        let dropped = self.slot.lock().await.take().is_some();
        debug!(label = %self.config.label, dropped, "invalidated");
        dropped
    }
}

impl<T, P, X> fmt::Debug for LifetimeManager<T, P, X> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LifetimeManager")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}
