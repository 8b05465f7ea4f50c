//! Producers of fresh values for a [`LifetimeManager`](crate::LifetimeManager).

use async_trait::async_trait;
use std::fmt;
use std::future::Future;

/// Zero-argument asynchronous source of a fresh `T`.
///
/// This trait abstracts over whatever is expensive to call (a token endpoint,
/// a configuration service, a file parse), so the manager can work with any
/// of them. Any `Fn() -> impl Future<Output = Result<T, E>>` closure is a
/// producer.
///
/// No cancellation token is passed in. If the caller of
/// [`LifetimeManager::get`](crate::LifetimeManager::get) drops its future
/// while a produce is in flight, the produce future is dropped with it.
#[async_trait]
pub trait Producer<T: Send + 'static>: Send + Sync {
    /// Error returned when producing fails. Propagated to the caller as-is.
    type Error: fmt::Display + Send + 'static;

    /// Produce a fresh value.
    async fn produce(&self) -> Result<T, Self::Error>;
}

#[async_trait]
impl<T, E, F, Fut> Producer<T> for F
where
    F: Fn() -> Fut + Send + Sync,
    Fut: Future<Output = Result<T, E>> + Send + 'static,
    T: Send + 'static,
    E: fmt::Display + Send + 'static,
{
    type Error = E;

    async fn produce(&self) -> Result<T, E> {
        (self)().await
    }
}
