//! Element traits.
//!
//! These traits describe what the group engine needs from the values it
//! stores, independently of how those values combine.

use std::fmt::{Debug, Display};
use std::hash::Hash;

/// A value that can live in a finite group.
///
/// Equality and hashing drive membership, caching and subset tests. The total
/// order only produces a deterministic canonical ordering and carries no
/// algebraic meaning.
pub trait GroupElement:
    Clone + Eq + Hash + Ord + Debug + Display + Send + Sync + 'static
{
}

impl<T> GroupElement for T where
    T: Clone + Eq + Hash + Ord + Debug + Display + Send + Sync + 'static
{
}

/// Reduction modulo a positive integer.
///
/// Backs the `addmod`/`multmod`/`matrixmod` operations.
pub trait Residue: Sized {
    /// Returns the non-negative remainder of `self` modulo `modulus`.
    ///
    /// # Panics
    ///
    /// Panics if `modulus` is zero.
    #[must_use]
    fn reduce_mod(&self, modulus: i64) -> Self;
}

impl Residue for i64 {
    fn reduce_mod(&self, modulus: i64) -> Self {
        self.rem_euclid(modulus)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reduce_negative() {
        assert_eq!((-3i64).reduce_mod(7), 4);
        assert_eq!(10i64.reduce_mod(7), 3);
        assert_eq!(0i64.reduce_mod(1), 0);
    }
}
