//! Permutations in sparse cycle form.
//!
//! A permutation stores only the labels it moves. Fixed points are never
//! stored, so two constructions of the same bijection compare equal no matter
//! how their cycles were written down.

use std::collections::{BTreeMap, BTreeSet};
use std::fmt;
use std::ops::Mul;

use itertools::Itertools;
use num_integer::Integer;
use thiserror::Error;

/// Errors raised when an explicit mapping does not describe a bijection.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum PermutationError {
    #[error("label {0} is mapped to two different images")]
    ConflictingImage(u32),

    #[error("label {0} has more than one preimage")]
    DuplicateImage(u32),

    #[error("label {0} is an image but is never moved itself")]
    OpenImage(u32),
}

/// A finite bijection on `u32` labels.
///
/// # Example
///
/// ```
/// use finigroup_elements::Permutation;
///
/// let p = Permutation::from_cycle(&[1, 3, 4]);
/// assert_eq!(p.apply(3), 4);
/// assert_eq!(p.apply(4), 1);
/// assert_eq!(p.apply(2), 2);
/// ```
#[derive(Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
pub struct Permutation {
    /// Non-fixed points only.
    map: BTreeMap<u32, u32>,
}

impl Permutation {
    /// Returns the identity permutation.
    #[must_use]
    pub fn identity() -> Self {
        Self::default()
    }

    /// Builds a permutation from explicit `(label, image)` pairs.
    ///
    /// Pairs with `label == image` are dropped.
    ///
    /// # Errors
    ///
    /// Returns an error if a label is given two images, or if the moved
    /// labels do not form a bijection onto themselves.
    pub fn from_mapping<I>(pairs: I) -> Result<Self, PermutationError>
    where
        I: IntoIterator<Item = (u32, u32)>,
    {
        let mut map = BTreeMap::new();
        for (label, image) in pairs {
            if label == image {
                continue;
            }
            if let Some(previous) = map.insert(label, image) {
                if previous != image {
                    return Err(PermutationError::ConflictingImage(label));
                }
            }
        }

        let mut images = BTreeSet::new();
        for &image in map.values() {
            if !map.contains_key(&image) {
                return Err(PermutationError::OpenImage(image));
            }
            if !images.insert(image) {
                return Err(PermutationError::DuplicateImage(image));
            }
        }

        Ok(Self { map })
    }

    /// Builds a permutation from its one-line notation: label `k + 1` maps to
    /// `images[k]`.
    ///
    /// # Errors
    ///
    /// Returns an error if `images` is not a rearrangement of its labels.
    pub fn from_arrangement(images: &[u32]) -> Result<Self, PermutationError> {
        Self::from_mapping((1u32..).zip(images.iter().copied()))
    }

    /// Returns every permutation of the labels `1..=n`, in lexicographic
    /// order of their one-line notation.
    ///
    /// `all(0)` yields only the identity.
    pub fn all(n: u32) -> impl Iterator<Item = Self> {
        let len = usize::try_from(n).unwrap_or(usize::MAX);
        (1..=n).permutations(len).map(|images| Self {
            map: (1u32..)
                .zip(images)
                .filter(|(label, image)| label != image)
                .collect(),
        })
    }

    /// Builds a single cycle: each label maps to the next, the last back to
    /// the first.
    ///
    /// Consecutive repeats are skipped. A cycle whose last label equals its
    /// first is not closed, so `[1]` and `[1, 1]` give the identity.
    #[must_use]
    pub fn from_cycle(labels: &[u32]) -> Self {
        let mut map = BTreeMap::new();
        let mut last: Option<u32> = None;
        for &label in labels {
            if let Some(prev) = last {
                if prev != label {
                    map.insert(prev, label);
                }
            }
            last = Some(label);
        }
        if let (Some(&first), Some(last)) = (labels.first(), last) {
            if first != last {
                map.insert(last, first);
            }
        }
        Self { map }
    }

    /// Builds the product of several cycles, rightmost applied first.
    ///
    /// For disjoint cycles the order does not matter.
    #[must_use]
    pub fn from_cycles(cycles: &[Vec<u32>]) -> Self {
        cycles
            .iter()
            .fold(Self::identity(), |acc, cycle| acc.compose(&Self::from_cycle(cycle)))
    }

    /// Returns the image of `label`.
    #[must_use]
    pub fn apply(&self, label: u32) -> u32 {
        self.map.get(&label).copied().unwrap_or(label)
    }

    /// Returns `self ∘ other`: apply `other` first, then `self`.
    #[must_use]
    pub fn compose(&self, other: &Self) -> Self {
        let mut map = BTreeMap::new();
        for &label in other.map.keys() {
            let image = self.apply(other.apply(label));
            if image != label {
                map.insert(label, image);
            }
        }
        for (&label, &image) in &self.map {
            if !other.map.contains_key(&label) {
                map.insert(label, image);
            }
        }
        Self { map }
    }

    /// Returns the inverse permutation.
    #[must_use]
    pub fn inverse(&self) -> Self {
        Self {
            map: self.map.iter().map(|(&label, &image)| (image, label)).collect(),
        }
    }

    /// Returns true if no label is moved.
    #[must_use]
    pub fn is_identity(&self) -> bool {
        self.map.is_empty()
    }

    /// Returns the moved labels in ascending order.
    pub fn support(&self) -> impl Iterator<Item = u32> + '_ {
        self.map.keys().copied()
    }

    /// Decomposes into disjoint cycles of length at least two.
    ///
    /// Each cycle starts at its smallest label and cycles are ordered by that
    /// label.
    #[must_use]
    pub fn cycles(&self) -> Vec<Vec<u32>> {
        let mut visited = BTreeSet::new();
        let mut cycles = Vec::new();
        for &start in self.map.keys() {
            if visited.contains(&start) {
                continue;
            }
            let mut cycle = Vec::new();
            let mut cur = start;
            while visited.insert(cur) {
                cycle.push(cur);
                cur = self.apply(cur);
            }
            cycles.push(cycle);
        }
        cycles
    }

    /// Returns `1` for an even permutation and `-1` for an odd one.
    ///
    /// A cycle of length `L` contributes `L - 1` transpositions.
    #[must_use]
    pub fn sign(&self) -> i8 {
        let parity = self
            .cycles()
            .iter()
            .map(|cycle| cycle.len() - 1)
            .sum::<usize>()
            % 2;
        if parity == 0 {
            1
        } else {
            -1
        }
    }

    /// Returns the order as the lcm of the cycle lengths.
    #[must_use]
    pub fn order(&self) -> usize {
        self.cycles()
            .iter()
            .fold(1, |acc, cycle| acc.lcm(&cycle.len()))
    }
}

impl Mul for Permutation {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self::Output {
        self.compose(&rhs)
    }
}

impl Mul<&Permutation> for &Permutation {
    type Output = Permutation;

    fn mul(self, rhs: &Permutation) -> Self::Output {
        self.compose(rhs)
    }
}

impl fmt::Display for Permutation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_identity() {
            return write!(f, "()");
        }
        for cycle in self.cycles() {
            write!(f, "(")?;
            for (i, label) in cycle.iter().enumerate() {
                if i > 0 {
                    write!(f, " ")?;
                }
                write!(f, "{label}")?;
            }
            write!(f, ")")?;
        }
        Ok(())
    }
}
