//! Explicit registry of shared operations.
//!
//! Callers that want two groups to share one memoization cache request the
//! operation from the same registry. The registry is an ordinary value with no
//! global state, and its lifetime is the caller's session.

use finigroup_elements::{Element, GroupElement};
use parking_lot::Mutex;
use rustc_hash::FxHashMap;

use crate::operation::{CacheStats, Operation};

#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
struct RegistryKey {
    name: String,
    key: Option<String>,
}

/// Cache statistics of one registered operation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RegisteredStats {
    /// Operation name.
    pub name: String,
    /// Identity key the operation was requested under, if any.
    pub key: Option<String>,
    /// Cache statistics.
    pub stats: CacheStats,
}

/// Hands out shared operations keyed by name and an optional identity key.
///
/// # Example
///
/// ```
/// use finigroup_elements::Element;
/// use finigroup_ops::{OpKind, OperationRegistry};
///
/// let registry = OperationRegistry::<Element>::new();
/// let a = registry.get(OpKind::AddMod(7));
/// let b = registry.get(OpKind::AddMod(7));
/// assert!(a.ptr_eq(&b));
/// ```
pub struct OperationRegistry<E> {
    operations: Mutex<FxHashMap<RegistryKey, Operation<E>>>,
}

impl<E: GroupElement> Default for OperationRegistry<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E: GroupElement> OperationRegistry<E> {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self {
            operations: Mutex::new(FxHashMap::default()),
        }
    }

    /// Returns the operation registered under `(name, key)`, building it with
    /// `make` on first request.
    ///
    /// `make` must produce an operation called `name`.
    pub fn shared<F>(&self, name: &str, key: Option<&str>, make: F) -> Operation<E>
    where
        F: FnOnce() -> Operation<E>,
    {
        let registry_key = RegistryKey {
            name: name.to_owned(),
            key: key.map(str::to_owned),
        };
        let mut operations = self.operations.lock();
        operations
            .entry(registry_key)
            .or_insert_with(|| {
                let op = make();
                debug_assert_eq!(op.name(), name);
                tracing::debug!(name, key, capacity = op.capacity(), "registered operation");
                op
            })
            .clone()
    }

    /// Returns the number of registered operations.
    #[must_use]
    pub fn len(&self) -> usize {
        self.operations.lock().len()
    }

    /// Returns true if nothing has been registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.operations.lock().is_empty()
    }

    /// Returns the cache statistics of every registered operation, ordered
    /// by name and key.
    #[must_use]
    pub fn stats(&self) -> Vec<RegisteredStats> {
        let operations = self.operations.lock();
        let mut keys: Vec<_> = operations.keys().collect();
        keys.sort();
        keys.into_iter()
            .map(|k| RegisteredStats {
                name: k.name.clone(),
                key: k.key.clone(),
                stats: operations[k].cache_stats(),
            })
            .collect()
    }
}

/// The built-in operations a registry can hand out.
#[derive(Clone, Debug)]
pub enum OpKind {
    /// `add`
    Add,
    /// `mult`
    Mult,
    /// `addmod{n}`
    AddMod(i64),
    /// `multmod{n}`
    MultMod(i64),
    /// `matrixmod{n}`
    MatrixMod(i64),
    /// `matrixelement({op})`
    MatrixElementwise(Operation<Element>),
    /// `null`
    Null,
}

impl OpKind {
    /// Returns the name the built operation will carry.
    #[must_use]
    pub fn name(&self) -> String {
        match self {
            OpKind::Add => "add".to_owned(),
            OpKind::Mult => "mult".to_owned(),
            OpKind::AddMod(n) => format!("addmod{n}"),
            OpKind::MultMod(n) => format!("multmod{n}"),
            OpKind::MatrixMod(n) => format!("matrixmod{n}"),
            OpKind::MatrixElementwise(inner) => format!("matrixelement({inner})"),
            OpKind::Null => "null".to_owned(),
        }
    }

    /// Builds a fresh, unshared operation.
    #[must_use]
    pub fn build(&self, capacity: usize) -> Operation<Element> {
        match self {
            OpKind::Add => Operation::addition(capacity),
            OpKind::Mult => Operation::multiplication(capacity),
            OpKind::AddMod(n) => Operation::add_mod(*n, capacity),
            OpKind::MultMod(n) => Operation::mult_mod(*n, capacity),
            OpKind::MatrixMod(n) => Operation::matrix_mod(*n, capacity),
            OpKind::MatrixElementwise(inner) => Operation::matrix_elementwise(inner, capacity),
            OpKind::Null => Operation::null(),
        }
    }
}

impl OperationRegistry<Element> {
    /// Returns the shared, uncached instance of `kind`.
    #[must_use]
    pub fn get(&self, kind: OpKind) -> Operation<Element> {
        self.get_with_capacity(kind, 0, None)
    }

    /// Returns the instance of `kind` registered under an explicit identity
    /// key. It is equal to the unkeyed instance but has its own cache.
    #[must_use]
    pub fn get_keyed(&self, kind: OpKind, key: &str) -> Operation<Element> {
        self.get_with_capacity(kind, 0, Some(key))
    }

    /// Returns the shared instance of `kind` under `key`.
    ///
    /// `capacity` only applies when this call creates the instance.
    #[must_use]
    pub fn get_with_capacity(
        &self,
        kind: OpKind,
        capacity: usize,
        key: Option<&str>,
    ) -> Operation<Element> {
        let name = kind.name();
        self.shared(&name, key, || kind.build(capacity))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unkeyed_requests_share_instance() {
        let registry = OperationRegistry::<Element>::new();
        let a = registry.get(OpKind::Mult);
        let b = registry.get(OpKind::Mult);
        assert!(a.ptr_eq(&b));
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_keyed_request_is_separate_but_equal() {
        let registry = OperationRegistry::<Element>::new();
        let plain = registry.get(OpKind::Mult);
        let keyed = registry.get_keyed(OpKind::Mult, "test_operations");
        assert_eq!(plain, keyed);
        assert!(!plain.ptr_eq(&keyed));
        assert!(keyed.ptr_eq(&registry.get_keyed(OpKind::Mult, "test_operations")));
        assert_eq!(registry.len(), 2);
    }

    #[test]
    fn test_parametrized_operations() {
        let registry = OperationRegistry::<Element>::new();
        let seven = registry.get(OpKind::MatrixMod(7));
        assert_eq!(seven.name(), "matrixmod7");
        assert_ne!(seven, registry.get(OpKind::MatrixMod(5)));

        let a = Element::int_matrix(vec![vec![1, 2], vec![3, 4]]).unwrap();
        assert_eq!(
            seven.apply(&a, &a),
            Element::int_matrix(vec![vec![0, 3], vec![1, 1]]).unwrap()
        );
    }

    #[test]
    fn test_shared_cache_statistics() {
        let registry = OperationRegistry::<Element>::new();
        let first = registry.get_with_capacity(OpKind::AddMod(5), 16, None);
        let second = registry.get(OpKind::AddMod(5));
        first.apply(&Element::Int(2), &Element::Int(4));
        second.apply(&Element::Int(2), &Element::Int(4));

        let stats = registry.stats();
        assert_eq!(stats.len(), 1);
        assert_eq!(stats[0].name, "addmod5");
        assert_eq!(stats[0].stats.hits, 1);
        assert_eq!(stats[0].stats.misses, 1);
        assert_eq!(stats[0].stats.capacity, 16);
    }

    #[test]
    fn test_elementwise_kind_name() {
        let registry = OperationRegistry::<Element>::new();
        let inner = registry.get(OpKind::AddMod(3));
        let op = registry.get(OpKind::MatrixElementwise(inner));
        assert_eq!(op.name(), "matrixelement(addmod3)");
    }
}
