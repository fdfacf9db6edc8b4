//! Bounded least-recently-used cache.
//!
//! Every access stamps the entry with a fresh tick. The oldest tick is evicted
//! first, so lookups and inserts stay logarithmic in the capacity.

use std::collections::BTreeMap;
use std::hash::Hash;

use rustc_hash::FxHashMap;

/// A bounded map evicting the least recently used entry when full.
#[derive(Debug)]
pub(crate) struct LruCache<K, V> {
    capacity: usize,
    entries: FxHashMap<K, (V, u64)>,
    /// Tick of last use -> key.
    recency: BTreeMap<u64, K>,
    tick: u64,
}

impl<K: Clone + Eq + Hash, V: Clone> LruCache<K, V> {
    /// Creates an empty cache holding at most `capacity` entries.
    pub(crate) fn new(capacity: usize) -> Self {
        Self {
            capacity,
            entries: FxHashMap::default(),
            recency: BTreeMap::new(),
            tick: 0,
        }
    }

    fn next_tick(&mut self) -> u64 {
        self.tick += 1;
        self.tick
    }

    /// Returns a clone of the cached value and marks it as recently used.
    pub(crate) fn get(&mut self, key: &K) -> Option<V> {
        let tick = self.next_tick();
        let (value, stamp) = self.entries.get_mut(key)?;
        self.recency.remove(stamp);
        *stamp = tick;
        self.recency.insert(tick, key.clone());
        Some(value.clone())
    }

    /// Inserts a value, evicting the least recently used entry if full.
    pub(crate) fn insert(&mut self, key: K, value: V) {
        if self.capacity == 0 {
            return;
        }
        let tick = self.next_tick();
        if let Some((old_value, stamp)) = self.entries.get_mut(&key) {
            self.recency.remove(stamp);
            *old_value = value;
            *stamp = tick;
            self.recency.insert(tick, key);
            return;
        }
        if self.entries.len() >= self.capacity {
            if let Some((_, oldest)) = self.recency.pop_first() {
                self.entries.remove(&oldest);
            }
        }
        self.recency.insert(tick, key.clone());
        self.entries.insert(key, (value, tick));
    }

    pub(crate) fn len(&self) -> usize {
        self.entries.len()
    }

    pub(crate) fn capacity(&self) -> usize {
        self.capacity
    }

    pub(crate) fn clear(&mut self) {
        self.entries.clear();
        self.recency.clear();
    }
}
