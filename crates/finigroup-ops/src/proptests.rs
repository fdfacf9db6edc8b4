//! Property-based tests for operations and their caches.

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use finigroup_elements::Element;

    use crate::lru::LruCache;
    use crate::{OpKind, Operation};

    proptest! {
        #[test]
        fn lru_respects_capacity(
            capacity in 0usize..8,
            keys in prop::collection::vec(0u8..16, 0..64),
        ) {
            let mut cache = LruCache::new(capacity);
            for key in keys {
                if cache.get(&key).is_none() {
                    cache.insert(key, u32::from(key) * 2);
                }
                prop_assert!(cache.len() <= capacity);
            }
        }

        #[test]
        fn lru_keeps_latest_insert(capacity in 1usize..8, keys in prop::collection::vec(0u8..16, 1..64)) {
            let mut cache = LruCache::new(capacity);
            for &key in &keys {
                cache.insert(key, key);
            }
            let last = keys[keys.len() - 1];
            prop_assert_eq!(cache.get(&last), Some(last));
        }

        #[test]
        fn memoized_matches_uncached(n in 1i64..20, pairs in prop::collection::vec((0i64..40, 0i64..40), 1..32)) {
            let cached = OpKind::MultMod(n).build(4);
            let plain = Operation::mult_mod(n, 0);
            for (a, b) in pairs {
                let (a, b) = (Element::Int(a), Element::Int(b));
                prop_assert_eq!(cached.apply(&a, &b), plain.apply(&a, &b));
            }
            prop_assert!(cached.cache_stats().size <= 4);
        }
    }
}
