//! Bounded TTL caching for API responses.
//!
//! The store guards the content API against repeated identical list queries
//! within a short window (page navigation, re-renders). It is an explicitly
//! constructed, injectable instance rather than a module-level singleton, so
//! tests can isolate instances and drive simulated time through [`Clock`].
//!
//! Staleness up to the TTL is accepted; no caller ever observes a value past
//! its TTL.

mod clock;
mod lock;
mod store;

pub use clock::{Clock, SystemClock};
pub use store::{CacheStats, DEFAULT_CAPACITY, DEFAULT_TTL, ResponseStore};
