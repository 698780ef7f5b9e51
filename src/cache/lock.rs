use std::sync::{Mutex, MutexGuard};

use tracing::warn;

/// Acquire a mutex, recovering the guard if another thread panicked while
/// holding it. Cached state may be stale after recovery, which is acceptable
/// for a cache.
pub(crate) fn mutex_lock<'a, T>(
    lock: &'a Mutex<T>,
    target: &'static str,
    op: &'static str,
) -> MutexGuard<'a, T> {
    match lock.lock() {
        Ok(guard) => guard,
        Err(poisoned) => {
            warn!(
                op,
                target_module = target,
                result = "poisoned_recovered",
                "Recovered from poisoned cache lock"
            );
            poisoned.into_inner()
        }
    }
}
