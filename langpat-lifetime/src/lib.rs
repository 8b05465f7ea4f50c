//! Lazily produced values with caller-defined expiration.
//!
//! A [`LifetimeManager`] owns one slot. The first [`get`](LifetimeManager::get)
//! fills it from a [`Producer`]; later calls hand out the held value until an
//! [`ExpirationPolicy`] says it is stale, at which point the next caller
//! refreshes it. Checking and refreshing happen under one async lock, so
//! concurrent callers never race to produce.
//!
//! ```text
//! caller ─→ get() ─→ lock ─→ held && !expired? ─yes─→ clone out
//!                                  │
//!                                  no
//!                                  ↓
//!                      Producer::produce() ─→ store ─→ clone out
//! ```
//!
//! Typical uses are bearer tokens with a deadline ([`ExpiresAt`]), parsed
//! configuration refreshed on a predicate, or a lazy async singleton
//! ([`Never`]).

pub mod config;
pub mod manager;
pub mod policy;
pub mod producer;

pub use config::{LifetimeConfig, RefreshFailure};
pub use manager::LifetimeManager;
pub use policy::{Always, ExpirationPolicy, ExpiresAt, Expiring, Never};
pub use producer::Producer;
