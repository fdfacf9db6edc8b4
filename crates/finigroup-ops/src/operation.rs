//! Named binary operations with optional memoization.
//!
//! An operation's identity is its name. Two operations with the same name are
//! equal even when they were built separately, so callers must give different
//! formulas different names.

use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::Arc;

use finigroup_elements::GroupElement;
use parking_lot::Mutex;

use crate::lru::LruCache;

type BinaryFn<E> = dyn Fn(&E, &E) -> E + Send + Sync;

/// Cache statistics of one operation.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CacheStats {
    /// Calls answered from the cache.
    pub hits: u64,
    /// Calls that had to evaluate the function.
    pub misses: u64,
    /// Entries currently cached.
    pub size: usize,
    /// Maximum number of entries. Zero means caching is disabled.
    pub capacity: usize,
}

impl fmt::Display for CacheStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "hits={} misses={} size={} capacity={}",
            self.hits, self.misses, self.size, self.capacity
        )
    }
}

struct Memo<E> {
    entries: LruCache<(E, E), E>,
    hits: u64,
    misses: u64,
}

struct Inner<E> {
    name: String,
    func: Box<BinaryFn<E>>,
    memo: Option<Mutex<Memo<E>>>,
}

/// A named binary function over group elements.
///
/// Clones share the function and the cache.
///
/// # Example
///
/// ```
/// use finigroup_ops::Operation;
///
/// let op = Operation::new("addmod5", 16, |a: &i64, b: &i64| (a + b) % 5);
/// assert_eq!(op.apply(&3, &4), 2);
/// assert_eq!(op.apply(&3, &4), 2);
/// assert_eq!(op.cache_stats().hits, 1);
/// ```
pub struct Operation<E> {
    inner: Arc<Inner<E>>,
}

impl<E: GroupElement> Operation<E> {
    /// Wraps `func` under `name`, caching up to `capacity` results.
    ///
    /// A capacity of zero disables memoization.
    pub fn new<F>(name: impl Into<String>, capacity: usize, func: F) -> Self
    where
        F: Fn(&E, &E) -> E + Send + Sync + 'static,
    {
        let memo = (capacity > 0).then(|| {
            Mutex::new(Memo {
                entries: LruCache::new(capacity),
                hits: 0,
                misses: 0,
            })
        });
        Self {
            inner: Arc::new(Inner {
                name: name.into(),
                func: Box::new(func),
                memo,
            }),
        }
    }

    /// Returns the operation's name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.inner.name
    }

    /// Returns the cache capacity. Zero means caching is disabled.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.inner
            .memo
            .as_ref()
            .map_or(0, |memo| memo.lock().entries.capacity())
    }

    /// Returns true if results are memoized.
    #[must_use]
    pub fn is_cached(&self) -> bool {
        self.inner.memo.is_some()
    }

    /// Evaluates the operation on `(a, b)`.
    ///
    /// The cache lock is not held while the function runs.
    pub fn apply(&self, a: &E, b: &E) -> E {
        let Some(memo) = &self.inner.memo else {
            return (self.inner.func)(a, b);
        };

        let key = (a.clone(), b.clone());
        {
            let mut memo = memo.lock();
            if let Some(value) = memo.entries.get(&key) {
                memo.hits += 1;
                return value;
            }
            memo.misses += 1;
        }

        let value = (self.inner.func)(a, b);
        memo.lock().entries.insert(key, value.clone());
        value
    }

    /// Returns the current cache statistics.
    #[must_use]
    pub fn cache_stats(&self) -> CacheStats {
        self.inner.memo.as_ref().map_or_else(CacheStats::default, |memo| {
            let memo = memo.lock();
            CacheStats {
                hits: memo.hits,
                misses: memo.misses,
                size: memo.entries.len(),
                capacity: memo.entries.capacity(),
            }
        })
    }

    /// Drops all cached results. Statistics are kept.
    pub fn clear_cache(&self) {
        if let Some(memo) = &self.inner.memo {
            memo.lock().entries.clear();
        }
    }

    /// Returns true if both handles point at the same instance and cache.
    #[must_use]
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }
}

impl<E> Clone for Operation<E> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<E> PartialEq for Operation<E> {
    fn eq(&self, other: &Self) -> bool {
        self.inner.name == other.inner.name
    }
}

impl<E> Eq for Operation<E> {}

impl<E> Hash for Operation<E> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.inner.name.hash(state);
    }
}

impl<E> fmt::Debug for Operation<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Operation").field(&self.inner.name).finish()
    }
}

impl<E> fmt::Display for Operation<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.inner.name)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};

    use super::*;

    #[test]
    fn test_memoization_skips_recomputation() {
        let calls = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&calls);
        let op = Operation::new("mult", 8, move |a: &i64, b: &i64| {
            counter.fetch_add(1, Ordering::SeqCst);
            a * b
        });

        assert_eq!(op.apply(&3, &4), 12);
        assert_eq!(op.apply(&3, &4), 12);
        assert_eq!(op.apply(&4, &3), 12);

        assert_eq!(calls.load(Ordering::SeqCst), 2);
        assert_eq!(
            op.cache_stats(),
            CacheStats {
                hits: 1,
                misses: 2,
                size: 2,
                capacity: 8
            }
        );
    }

    #[test]
    fn test_uncached_operation() {
        let op = Operation::new("add", 0, |a: &i64, b: &i64| a + b);
        assert_eq!(op.apply(&1, &2), 3);
        assert!(!op.is_cached());
        assert_eq!(op.cache_stats(), CacheStats::default());
    }

    #[test]
    fn test_equality_by_name() {
        let a = Operation::new("mult", 0, |x: &i64, y: &i64| x * y);
        let b = Operation::new("mult", 4, |x: &i64, y: &i64| x + y);
        let c = Operation::new("add", 0, |x: &i64, y: &i64| x + y);
        assert_eq!(a, b);
        assert_ne!(a, c);
        assert!(!a.ptr_eq(&b));
        assert!(a.ptr_eq(&a.clone()));
    }

    #[test]
    fn test_clones_share_cache() {
        let op = Operation::new("mult", 4, |a: &i64, b: &i64| a * b);
        let shared = op.clone();
        op.apply(&2, &3);
        shared.apply(&2, &3);
        assert_eq!(op.cache_stats().hits, 1);

        op.clear_cache();
        assert_eq!(shared.cache_stats().size, 0);
    }
}
