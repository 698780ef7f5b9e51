//! Bounded TTL store for API responses.
//!
//! Eviction is FIFO over insertion order, not LRU: reads never reorder
//! entries, and overwriting an existing key keeps its original position.
//! Expired entries are removed lazily when read.

use std::collections::{HashMap, VecDeque};
use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};

use tracing::debug;

use super::clock::{Clock, SystemClock};
use super::lock::mutex_lock;

const SOURCE: &str = "cache::store";

/// Default TTL applied when the caller does not pick one.
pub const DEFAULT_TTL: Duration = Duration::from_secs(5 * 60);
/// Default maximum number of entries.
pub const DEFAULT_CAPACITY: usize = 50;

struct CacheEntry<V> {
    value: V,
    stored_at: Instant,
    expires_at: Instant,
}

/// Introspection snapshot, for diagnostics only.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CacheStats {
    pub size: usize,
    /// Keys in insertion order, oldest first.
    pub keys: Vec<String>,
}

struct StoreInner<V> {
    entries: HashMap<String, CacheEntry<V>>,
    order: VecDeque<String>,
}

/// Bounded in-memory TTL cache keyed by strings. `set` never fails and
/// `get` never blocks on anything but the inner lock.
pub struct ResponseStore<V> {
    inner: Mutex<StoreInner<V>>,
    capacity: usize,
    clock: Arc<dyn Clock>,
}

impl<V: Clone> ResponseStore<V> {
    pub fn new(capacity: usize) -> Self {
        Self::with_clock(capacity, Arc::new(SystemClock))
    }

    /// Store with an injected time source. Capacity is clamped to at least 1.
    pub fn with_clock(capacity: usize, clock: Arc<dyn Clock>) -> Self {
        Self {
            inner: Mutex::new(StoreInner {
                entries: HashMap::new(),
                order: VecDeque::new(),
            }),
            capacity: capacity.max(1),
            clock,
        }
    }

    /// Value for `key` if present and not past its expiry. A stale entry
    /// counts as a miss and is dropped so the slot frees up.
    pub fn get(&self, key: &str) -> Option<V> {
        let now = self.clock.now();
        let mut inner = mutex_lock(&self.inner, SOURCE, "get");
        match inner.entries.get(key) {
            Some(entry) if now <= entry.expires_at => {
                debug!(
                    key,
                    age_ms = now.duration_since(entry.stored_at).as_millis() as u64,
                    "cache hit"
                );
                Some(entry.value.clone())
            }
            Some(_) => {
                inner.entries.remove(key);
                inner.order.retain(|k| k != key);
                None
            }
            None => None,
        }
    }

    /// Insert `value` under `key` with the given TTL.
    ///
    /// At capacity the oldest key by insertion order is evicted first.
    /// Overwriting an existing key replaces the entry wholesale (fresh TTL)
    /// without changing its position in the eviction order.
    pub fn set(&self, key: &str, value: V, ttl: Duration) {
        let now = self.clock.now();
        let entry = CacheEntry {
            value,
            stored_at: now,
            expires_at: now + ttl,
        };
        let mut inner = mutex_lock(&self.inner, SOURCE, "set");
        if inner.entries.contains_key(key) {
            inner.entries.insert(key.to_string(), entry);
            return;
        }
        if inner.entries.len() >= self.capacity {
            if let Some(oldest) = inner.order.pop_front() {
                inner.entries.remove(&oldest);
                debug!(key = %oldest, "evicted oldest cache entry");
            }
        }
        inner.order.push_back(key.to_string());
        inner.entries.insert(key.to_string(), entry);
    }

    pub fn clear(&self) {
        let mut inner = mutex_lock(&self.inner, SOURCE, "clear");
        inner.entries.clear();
        inner.order.clear();
    }

    pub fn stats(&self) -> CacheStats {
        let inner = mutex_lock(&self.inner, SOURCE, "stats");
        CacheStats {
            size: inner.entries.len(),
            keys: inner.order.iter().cloned().collect(),
        }
    }

    pub fn len(&self) -> usize {
        mutex_lock(&self.inner, SOURCE, "len").entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
