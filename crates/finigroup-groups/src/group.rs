//! Finite groups over an arbitrary element type.
//!
//! A group is a deduplicated element list plus an [`Operation`]. Everything
//! else (identity, orders, center, Cayley table, cyclicity) is derived on first
//! request and cached for the lifetime of the instance.
//!
//! Elements keep their insertion order. Where a result depends on element
//! order, the canonical (sorted) order is used unless stated otherwise.

use std::cmp::Ordering;
use std::collections::BTreeMap;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::OnceLock;

use itertools::{iproduct, Itertools};
use parking_lot::Mutex;
use rayon::prelude::*;
use rustc_hash::{FxHashMap, FxHashSet};
use tracing::{debug, debug_span, warn};

use finigroup_elements::GroupElement;
use finigroup_ops::Operation;

use crate::cayley::CayleyTable;
use crate::config::ParallelConfig;
use crate::error::GroupError;

/// Result of the cyclicity test.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Cyclicity<E> {
    /// True if at least one element generates the whole group.
    pub is_cyclic: bool,
    /// Every generating element, in insertion order.
    pub generators: Vec<E>,
}

/// Sizes of the per-instance power and order memo tables.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MemoStats {
    /// Memoized `(element, exponent)` powers.
    pub powers: usize,
    /// Memoized element orders.
    pub orders: usize,
}

#[derive(Clone, Copy)]
enum Side {
    Left,
    Right,
}

/// A finite group: a set of elements closed under an operation.
///
/// Two groups are equal when their operations have the same name and they
/// hold the same elements. `a <= b` holds when they share an operation and
/// every element of `a` is in `b`.
///
/// # Example
///
/// ```
/// use finigroup_groups::FiniteGroup;
/// use finigroup_ops::Operation;
///
/// let z6 = FiniteGroup::new(0..6_i64, Operation::add_mod(6, 0));
/// assert_eq!(z6.identity(), Some(&0));
/// assert_eq!(z6.order(&4), Ok(Some(3)));
/// assert!(z6.abelian());
/// ```
pub struct FiniteGroup<E> {
    elements: Vec<E>,
    members: FxHashSet<E>,
    op: Operation<E>,
    name: Option<String>,
    config: ParallelConfig,

    identity: OnceLock<Option<E>>,
    sorted: OnceLock<Vec<E>>,
    abelian: OnceLock<bool>,
    cyclic: OnceLock<Cyclicity<E>>,
    center: OnceLock<Vec<E>>,
    cayley: OnceLock<CayleyTable<E>>,
    orders: OnceLock<BTreeMap<E, Option<usize>>>,
    rev_orders: OnceLock<BTreeMap<usize, Vec<E>>>,

    powers: Mutex<FxHashMap<(E, usize), E>>,
    element_orders: Mutex<FxHashMap<E, Option<usize>>>,
}

impl<E: GroupElement> FiniteGroup<E> {
    /// Creates a group from `elements` under `op`.
    ///
    /// Duplicates are dropped, keeping the first occurrence. Nothing is
    /// checked: a set that is not a group under `op` surfaces later as a
    /// missing identity.
    pub fn new(elements: impl IntoIterator<Item = E>, op: Operation<E>) -> Self {
        let mut members = FxHashSet::default();
        let mut unique = Vec::new();
        let mut dropped = 0usize;
        for element in elements {
            if members.insert(element.clone()) {
                unique.push(element);
            } else {
                dropped += 1;
            }
        }
        if dropped > 0 {
            warn!(dropped, operation = %op, "dropped duplicate group elements");
        }

        Self {
            elements: unique,
            members,
            op,
            name: None,
            config: ParallelConfig::default(),
            identity: OnceLock::new(),
            sorted: OnceLock::new(),
            abelian: OnceLock::new(),
            cyclic: OnceLock::new(),
            center: OnceLock::new(),
            cayley: OnceLock::new(),
            orders: OnceLock::new(),
            rev_orders: OnceLock::new(),
            powers: Mutex::new(FxHashMap::default()),
            element_orders: Mutex::new(FxHashMap::default()),
        }
    }

    /// Supplies the identity instead of searching for it.
    #[must_use]
    pub fn with_identity(mut self, identity: E) -> Self {
        self.identity = OnceLock::from(Some(identity));
        self
    }

    /// Sets the display name.
    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Records whether the group is abelian without checking it.
    ///
    /// A wrong hint makes [`Self::center`] and [`Self::cayley`] wrong.
    #[must_use]
    pub fn with_abelian_hint(mut self, abelian: bool) -> Self {
        self.abelian = OnceLock::from(abelian);
        self
    }

    /// Sets the parallelism configuration.
    #[must_use]
    pub fn with_parallel_config(mut self, config: ParallelConfig) -> Self {
        self.config = config;
        self
    }

    /// The empty group, returned when no subgroup of a requested order exists.
    #[must_use]
    pub fn null() -> Self {
        Self::new(Vec::new(), Operation::null()).with_name("NullGroup")
    }

    /// Returns true for the group built by [`Self::null`].
    #[must_use]
    pub fn is_null(&self) -> bool {
        self.elements.is_empty() && self.op.name() == "null"
    }

    /// Returns the number of elements.
    #[must_use]
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    /// Returns true if the group has no elements.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Returns true if `element` belongs to the group.
    #[must_use]
    pub fn contains(&self, element: &E) -> bool {
        self.members.contains(element)
    }

    /// Returns the elements in insertion order.
    #[must_use]
    pub fn elements(&self) -> &[E] {
        &self.elements
    }

    /// Returns the elements in canonical order.
    #[must_use]
    pub fn sorted(&self) -> &[E] {
        self.sorted.get_or_init(|| {
            let mut sorted = self.elements.clone();
            sorted.sort();
            sorted
        })
    }

    /// Returns the group operation.
    #[must_use]
    pub fn operation(&self) -> &Operation<E> {
        &self.op
    }

    /// Returns the display name, if one was set.
    #[must_use]
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Returns the name, or the full element listing when unnamed.
    #[must_use]
    pub fn label(&self) -> String {
        self.name.clone().unwrap_or_else(|| self.to_string())
    }

    /// Returns the parallelism configuration.
    #[must_use]
    pub fn parallel_config(&self) -> ParallelConfig {
        self.config
    }

    /// Returns true if both groups share an operation and every element of
    /// `self` is in `other`.
    #[must_use]
    pub fn is_subgroup_of(&self, other: &Self) -> bool {
        self.op == other.op && self.elements.iter().all(|e| other.contains(e))
    }

    fn commutes(&self, a: &E, b: &E) -> bool {
        self.op.apply(a, b) == self.op.apply(b, a)
    }

    // ------------------------------------------------------------------
    // Identity, powers and orders
    // ------------------------------------------------------------------

    /// Returns the identity: the first element `i`, in insertion order, with
    /// `op(i, j) == j` for every `j`.
    ///
    /// Returns `None` when no such element exists, which means the elements
    /// do not form a group under the operation.
    #[must_use]
    pub fn identity(&self) -> Option<&E> {
        self.identity.get_or_init(|| self.find_identity()).as_ref()
    }

    fn find_identity(&self) -> Option<E> {
        let is_identity = |i: &&E| self.elements.iter().all(|j| self.op.apply(i, j) == *j);
        let found = if self.config.is_parallel(self.len()) {
            self.elements.par_iter().find_first(is_identity)
        } else {
            self.elements.iter().find(is_identity)
        };
        if found.is_none() && !self.is_empty() {
            debug!(group = %self.label(), "no identity element");
        }
        found.cloned()
    }

    fn require_identity(&self) -> Result<&E, GroupError> {
        self.identity()
            .ok_or_else(|| GroupError::NoIdentity { group: self.label() })
    }

    /// Returns `element` combined with itself `exponent` times.
    ///
    /// An exponent of zero is treated as one.
    #[must_use]
    pub fn power(&self, element: &E, exponent: usize) -> E {
        let exponent = exponent.max(1);
        if exponent == 1 {
            return element.clone();
        }

        let (mut term, start) = {
            let powers = self.powers.lock();
            if let Some(value) = powers.get(&(element.clone(), exponent)) {
                return value.clone();
            }
            match powers.get(&(element.clone(), exponent - 1)) {
                Some(previous) => (previous.clone(), exponent - 1),
                None => (element.clone(), 1),
            }
        };
        for _ in start..exponent {
            term = self.op.apply(&term, element);
        }

        self.powers
            .lock()
            .insert((element.clone(), exponent), term.clone());
        term
    }

    /// Returns the order of `element`: the least `k` in `1..=len` with
    /// `power(element, k) == identity`, or `None` if there is none.
    ///
    /// # Errors
    ///
    /// Returns [`GroupError::NoIdentity`] if the group has no identity.
    pub fn order(&self, element: &E) -> Result<Option<usize>, GroupError> {
        let identity = self.require_identity()?;
        Ok(self.order_with(element, identity))
    }

    fn order_with(&self, element: &E, identity: &E) -> Option<usize> {
        if let Some(order) = self.element_orders.lock().get(element) {
            return *order;
        }
        let order = (1..=self.len()).find(|&k| self.power(element, k) == *identity);
        self.element_orders.lock().insert(element.clone(), order);
        order
    }

    /// Returns the element `x` with `op(element, x) == identity`, if any.
    ///
    /// # Errors
    ///
    /// Returns [`GroupError::NoIdentity`] if the group has no identity.
    pub fn inverse(&self, element: &E) -> Result<Option<E>, GroupError> {
        let identity = self.require_identity()?;
        Ok(self
            .elements
            .iter()
            .find(|x| self.op.apply(element, x) == *identity)
            .cloned())
    }

    /// Returns the order of every element.
    ///
    /// # Errors
    ///
    /// Returns [`GroupError::NoIdentity`] if the group has no identity.
    pub fn orders(&self) -> Result<&BTreeMap<E, Option<usize>>, GroupError> {
        if let Some(orders) = self.orders.get() {
            return Ok(orders);
        }
        let identity = self.require_identity()?;
        Ok(self.orders.get_or_init(|| {
            self.elements
                .iter()
                .map(|e| (e.clone(), self.order_with(e, identity)))
                .collect()
        }))
    }

    /// Groups the elements by order. Elements without an order are left out.
    ///
    /// # Errors
    ///
    /// Returns [`GroupError::NoIdentity`] if the group has no identity.
    pub fn rev_orders(&self) -> Result<&BTreeMap<usize, Vec<E>>, GroupError> {
        let orders = self.orders()?;
        Ok(self.rev_orders.get_or_init(|| {
            let mut rev: BTreeMap<usize, Vec<E>> = BTreeMap::new();
            for (element, order) in orders {
                if let Some(k) = order {
                    rev.entry(*k).or_default().push(element.clone());
                }
            }
            rev
        }))
    }

    /// Returns the sizes of the power and order memo tables.
    #[must_use]
    pub fn memo_stats(&self) -> MemoStats {
        MemoStats {
            powers: self.powers.lock().len(),
            orders: self.element_orders.lock().len(),
        }
    }

    // ------------------------------------------------------------------
    // Structure
    // ------------------------------------------------------------------

    /// Tests whether some element generates the whole group.
    ///
    /// A cyclic group is recorded as abelian if that was not known yet.
    ///
    /// # Errors
    ///
    /// Returns [`GroupError::NoIdentity`] if the group has no identity.
    pub fn cyclic(&self) -> Result<&Cyclicity<E>, GroupError> {
        if let Some(cyclicity) = self.cyclic.get() {
            return Ok(cyclicity);
        }
        let identity = self.require_identity()?;
        let cyclicity = self.cyclic.get_or_init(|| {
            let _span = debug_span!("cyclic", size = self.len()).entered();
            let n = self.len();
            let generators: Vec<E> = self
                .elements
                .iter()
                .filter(|e| self.order_with(e, identity) == Some(n) && self.powers_cover(e, n))
                .cloned()
                .collect();
            Cyclicity {
                is_cyclic: !generators.is_empty(),
                generators,
            }
        });
        if cyclicity.is_cyclic {
            let _ = self.abelian.set(true);
        }
        Ok(cyclicity)
    }

    fn powers_cover(&self, element: &E, order: usize) -> bool {
        let mut powers: Vec<E> = (1..=order).map(|k| self.power(element, k)).collect();
        powers.sort();
        powers == self.sorted()
    }

    /// Returns true if every pair of elements commutes.
    #[must_use]
    pub fn abelian(&self) -> bool {
        *self.abelian.get_or_init(|| {
            let _span = debug_span!("abelian", size = self.len()).entered();
            let commutes_with_all = |a: &E| self.elements.iter().all(|b| self.commutes(a, b));
            if self.config.is_parallel(self.len()) {
                self.elements.par_iter().all(commutes_with_all)
            } else {
                self.elements.iter().all(commutes_with_all)
            }
        })
    }

    /// Returns the elements commuting with every element, in canonical order.
    ///
    /// Computing the center also records whether the group is abelian.
    #[must_use]
    pub fn center(&self) -> &[E] {
        self.center.get_or_init(|| {
            if self.abelian.get() == Some(&true) {
                return self.sorted().to_vec();
            }
            let _span = debug_span!("center", size = self.len()).entered();
            let central = |a: &&E| self.elements.iter().all(|b| self.commutes(a, b));
            let mut center: Vec<E> = if self.config.is_parallel(self.len()) {
                self.elements.par_iter().filter(central).cloned().collect()
            } else {
                self.elements.iter().filter(central).cloned().collect()
            };
            center.sort();
            let _ = self.abelian.set(center.len() == self.len());
            center
        })
    }

    /// Returns the elements of the group commuting with every element of
    /// `subset`, in insertion order.
    #[must_use]
    pub fn centralizer(&self, subset: &[E]) -> Vec<E> {
        self.elements
            .iter()
            .filter(|a| subset.iter().all(|b| self.commutes(a, b)))
            .cloned()
            .collect()
    }

    /// Returns the centralizer of another group's elements.
    #[must_use]
    pub fn centralizer_of(&self, other: &Self) -> Vec<E> {
        self.centralizer(other.elements())
    }

    /// Returns the Cayley table over the canonical order.
    ///
    /// A group already known to be abelian only evaluates the upper triangle.
    #[must_use]
    pub fn cayley(&self) -> &CayleyTable<E> {
        self.cayley.get_or_init(|| {
            let _span = debug_span!("cayley", size = self.len()).entered();
            let symmetric = self.abelian.get() == Some(&true);
            CayleyTable::build(self.sorted(), symmetric, |a, b| self.op.apply(a, b))
        })
    }

    /// Returns true if `op(a, b)` is in the group for every pair.
    #[must_use]
    pub fn is_closed(&self) -> bool {
        iproduct!(&self.elements, &self.elements).all(|(a, b)| self.contains(&self.op.apply(a, b)))
    }

    /// Returns true if the operation is associative on every triple.
    #[must_use]
    pub fn is_associative(&self) -> bool {
        iproduct!(&self.elements, &self.elements, &self.elements).all(|(a, b, c)| {
            let ab = self.op.apply(a, b);
            let bc = self.op.apply(b, c);
            self.op.apply(&ab, c) == self.op.apply(a, &bc)
        })
    }

    // ------------------------------------------------------------------
    // Cosets and subgroups
    // ------------------------------------------------------------------

    /// Partitions the group into the left cosets `aH` of `subgroup`.
    ///
    /// The first block is `subgroup` itself. Representatives are taken from
    /// the end of the canonically ordered pool of uncovered elements.
    ///
    /// # Errors
    ///
    /// Returns [`GroupError::NotASubgroup`] if `subgroup` is not `<= self`.
    pub fn left_cosets(&self, subgroup: &Self) -> Result<Vec<Vec<E>>, GroupError> {
        self.cosets(subgroup, Side::Left)
    }

    /// Partitions the group into the right cosets `Ha` of `subgroup`.
    ///
    /// # Errors
    ///
    /// Returns [`GroupError::NotASubgroup`] if `subgroup` is not `<= self`.
    pub fn right_cosets(&self, subgroup: &Self) -> Result<Vec<Vec<E>>, GroupError> {
        self.cosets(subgroup, Side::Right)
    }

    fn cosets(&self, subgroup: &Self, side: Side) -> Result<Vec<Vec<E>>, GroupError> {
        if !subgroup.is_subgroup_of(self) {
            let err = GroupError::NotASubgroup {
                subgroup: subgroup.label(),
                group: self.label(),
            };
            warn!(%err, "rejected coset request");
            return Err(err);
        }

        let mut remaining: Vec<E> = self
            .sorted()
            .iter()
            .filter(|e| !subgroup.contains(e))
            .cloned()
            .collect();
        let mut cosets = vec![subgroup.elements().to_vec()];
        while let Some(representative) = remaining.pop() {
            let mut coset = Vec::with_capacity(subgroup.len());
            for h in subgroup.elements() {
                let product = match side {
                    Side::Left => self.op.apply(&representative, h),
                    Side::Right => self.op.apply(h, &representative),
                };
                if let Some(pos) = remaining.iter().position(|r| *r == product) {
                    remaining.remove(pos);
                }
                coset.push(product);
            }
            cosets.push(coset);
        }
        Ok(cosets)
    }

    /// Returns one subgroup of order `k`.
    ///
    /// That is `self` when `k` is the group's size, otherwise the cyclic
    /// subgroup generated by the first element of order `k`. Returns the
    /// [`Self::null`] group when there is no such element.
    ///
    /// # Errors
    ///
    /// Returns [`GroupError::NoIdentity`] if the group has no identity.
    pub fn subgroup(&self, k: usize) -> Result<Self, GroupError> {
        if k == self.len() {
            return Ok(self.clone());
        }
        let rev = self.rev_orders()?;
        Ok(rev
            .get(&k)
            .and_then(|elements| elements.first())
            .map_or_else(Self::null, |g| self.cyclic_subgroup(g)))
    }

    /// Returns the distinct cyclic subgroups of order `k`.
    ///
    /// That is `[self]` when `k` is the group's size. A group already known
    /// to be cyclic has exactly one subgroup per order, so only the first
    /// element of order `k` is used. The result is `[NullGroup]` rather than
    /// empty when nothing is found.
    ///
    /// # Errors
    ///
    /// Returns [`GroupError::NoIdentity`] if the group has no identity.
    pub fn subgroups(&self, k: usize) -> Result<Vec<Self>, GroupError> {
        if k == self.len() {
            return Ok(vec![self.clone()]);
        }
        let rev = self.rev_orders()?;
        let candidates = rev.get(&k).map_or(&[][..], Vec::as_slice);
        let known_cyclic = self.cyclic.get().is_some_and(|c| c.is_cyclic);

        let mut subgroups: Vec<Self> = Vec::new();
        let take = if known_cyclic { 1 } else { candidates.len() };
        for g in candidates.iter().take(take) {
            let subgroup = self.cyclic_subgroup(g);
            if !subgroups.contains(&subgroup) {
                subgroups.push(subgroup);
            }
        }
        if subgroups.is_empty() {
            subgroups.push(Self::null());
        }
        Ok(subgroups)
    }

    fn cyclic_subgroup(&self, generator: &E) -> Self {
        Self::generated(generator.clone(), self.op.clone()).with_parallel_config(self.config)
    }
}

impl<E: GroupElement> Clone for FiniteGroup<E> {
    fn clone(&self) -> Self {
        Self {
            elements: self.elements.clone(),
            members: self.members.clone(),
            op: self.op.clone(),
            name: self.name.clone(),
            config: self.config,
            identity: self.identity.clone(),
            sorted: self.sorted.clone(),
            abelian: self.abelian.clone(),
            cyclic: self.cyclic.clone(),
            center: self.center.clone(),
            cayley: self.cayley.clone(),
            orders: self.orders.clone(),
            rev_orders: self.rev_orders.clone(),
            powers: Mutex::new(self.powers.lock().clone()),
            element_orders: Mutex::new(self.element_orders.lock().clone()),
        }
    }
}

impl<E: GroupElement> PartialEq for FiniteGroup<E> {
    fn eq(&self, other: &Self) -> bool {
        self.op == other.op && self.len() == other.len() && self.sorted() == other.sorted()
    }
}

impl<E: GroupElement> Eq for FiniteGroup<E> {}

impl<E: GroupElement> Hash for FiniteGroup<E> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.op.hash(state);
        self.sorted().hash(state);
    }
}

impl<E: GroupElement> PartialOrd for FiniteGroup<E> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        match (self.is_subgroup_of(other), other.is_subgroup_of(self)) {
            (true, true) => Some(Ordering::Equal),
            (true, false) => Some(Ordering::Less),
            (false, true) => Some(Ordering::Greater),
            (false, false) => None,
        }
    }
}

impl<E: GroupElement> fmt::Display for FiniteGroup<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "([{}], {})", self.elements.iter().join(", "), self.op)
    }
}

impl<E: GroupElement> fmt::Debug for FiniteGroup<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FiniteGroup")
            .field("name", &self.name)
            .field("operation", &self.op)
            .field("elements", &self.elements)
            .finish_non_exhaustive()
    }
}
