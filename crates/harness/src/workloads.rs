//! Pure computational kernels exercised by the benchmark cases.
//!
//! Everything here is deterministic (or, for [`async_operation`], bounded
//! by its requested delay) so that cases can assert exact results around
//! their timing measurements. The string, memory, and math kernels have no
//! reuse surface and live inside their case modules instead.

use once_cell::sync::Lazy;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::Duration;

/// Memo table for [`fibonacci`].
///
/// Once populated for a key the value never changes. [`shared_cache`] hands
/// out the process-wide instance used by the standard suite, which persists
/// across cases and across suite runs; tests construct private instances
/// and reset them between property checks.
#[derive(Debug, Default)]
pub struct FibCache {
    values: HashMap<u32, u128>,
}

impl FibCache {
    /// Create an empty cache.
    pub fn new() -> Self {
        Self::default()
    }

    /// Cached value for `n`, if computed before.
    pub fn get(&self, n: u32) -> Option<u128> {
        self.values.get(&n).copied()
    }

    /// Number of memoized entries.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether the cache holds no entries.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Drop every memoized entry.
    pub fn reset(&mut self) {
        self.values.clear();
    }

    fn insert(&mut self, n: u32, value: u128) {
        self.values.insert(n, value);
    }
}

static SHARED_CACHE: Lazy<Arc<Mutex<FibCache>>> =
    Lazy::new(|| Arc::new(Mutex::new(FibCache::new())));

/// Process-wide fibonacci cache shared across cases and suite runs.
pub fn shared_cache() -> Arc<Mutex<FibCache>> {
    Arc::clone(&SHARED_CACHE)
}

/// `n!` with wrapping multiplication.
///
/// Exact only while the product fits in `u64` (`n <= 20`); past that the
/// value wraps. Stress plans discard the result and measure time only, so
/// wrapping is accepted behavior rather than guarded against.
pub fn factorial(n: u64) -> u64 {
    if n <= 1 {
        return 1;
    }
    n.wrapping_mul(factorial(n - 1))
}

/// Trial-division primality check over `6k±1` candidates up to `sqrt(n)`.
pub fn is_prime(n: u64) -> bool {
    if n <= 1 {
        return false;
    }
    if n <= 3 {
        return true;
    }
    if n % 2 == 0 || n % 3 == 0 {
        return false;
    }
    let mut i = 5u64;
    while i * i <= n {
        if n % i == 0 || n % (i + 2) == 0 {
            return false;
        }
        i += 6;
    }
    true
}

/// Memoized fibonacci.
///
/// The first call for a given `n` fills the cache linearly; repeat calls
/// against the same cache are a single lookup.
pub fn fibonacci(n: u32, cache: &mut FibCache) -> u128 {
    if n <= 1 {
        return n as u128;
    }
    if let Some(value) = cache.get(n) {
        return value;
    }
    let value = fibonacci(n - 1, cache) + fibonacci(n - 2, cache);
    cache.insert(n, value);
    value
}

/// Copy-then-sort ascending. The input is never mutated.
pub fn sort_array(input: &[i64]) -> Vec<i64> {
    let mut sorted = input.to_vec();
    sorted.sort_unstable();
    sorted
}

/// Suspend the calling task for `delay_ms` milliseconds on the tokio timer,
/// then resolve to the literal completion marker. Never fails and never
/// spin-waits.
pub async fn async_operation(delay_ms: u64) -> &'static str {
    tokio::time::sleep(Duration::from_millis(delay_ms)).await;
    "completed"
}
