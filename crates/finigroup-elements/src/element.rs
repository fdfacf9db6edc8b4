//! The tagged element value used by the named group families.
//!
//! Integers, permutations and matrices share one type so that a matrix may
//! hold permutations, and so a single operation can act on all of them.

use std::fmt;
use std::ops::{Add, Mul, Neg};

use crate::matrix::{Matrix, MatrixError};
use crate::permutation::Permutation;
use crate::traits::Residue;

/// A group element: an integer, a permutation, or a matrix of elements.
///
/// # Mixed arithmetic
///
/// A permutation combined with an integer scalar follows a sentinel rule.
/// Under `*`, `0` annihilates and any other scalar acts as the identity.
/// Under `+`, `0` is the identity and any other scalar wins. This makes
/// affine matrices `[[a, b], [0, 1]]` over permutations multiply correctly.
///
/// A matrix combined with a non-matrix broadcasts the scalar over its
/// entries.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
pub enum Element {
    /// An integer.
    Int(i64),
    /// A permutation.
    Perm(Permutation),
    /// A matrix whose entries are elements.
    Matrix(Matrix<Element>),
}

impl Element {
    /// Builds a matrix element from rows of elements.
    ///
    /// # Errors
    ///
    /// Returns an error if the rows are ragged or empty.
    pub fn matrix(rows: Vec<Vec<Element>>) -> Result<Self, MatrixError> {
        Matrix::from_rows(rows).map(Element::Matrix)
    }

    /// Builds an integer matrix element.
    ///
    /// # Errors
    ///
    /// Returns an error if the rows are ragged or empty.
    pub fn int_matrix(rows: Vec<Vec<i64>>) -> Result<Self, MatrixError> {
        Self::matrix(
            rows.into_iter()
                .map(|row| row.into_iter().map(Element::Int).collect())
                .collect(),
        )
    }

    /// Returns true for the integer zero.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        matches!(self, Element::Int(0))
    }

    /// Returns the integer value, if this is an integer.
    #[must_use]
    pub fn as_int(&self) -> Option<i64> {
        match self {
            Element::Int(v) => Some(*v),
            _ => None,
        }
    }

    /// Returns the permutation, if this is a permutation.
    #[must_use]
    pub fn as_perm(&self) -> Option<&Permutation> {
        match self {
            Element::Perm(p) => Some(p),
            _ => None,
        }
    }

    /// Returns the matrix, if this is a matrix.
    #[must_use]
    pub fn as_matrix(&self) -> Option<&Matrix<Element>> {
        match self {
            Element::Matrix(m) => Some(m),
            _ => None,
        }
    }

    /// Returns the determinant of a square matrix element.
    #[must_use]
    pub fn det(&self) -> Option<Element> {
        self.as_matrix().and_then(Matrix::det)
    }
}

impl Add for Element {
    type Output = Self;

    /// # Panics
    ///
    /// Panics when two matrices differ in shape.
    fn add(self, rhs: Self) -> Self::Output {
        match (self, rhs) {
            (Element::Int(a), Element::Int(b)) => Element::Int(a + b),
            (Element::Perm(p), Element::Perm(q)) => Element::Perm(p.compose(&q)),
            (Element::Perm(p), Element::Int(s)) | (Element::Int(s), Element::Perm(p)) => {
                if s == 0 {
                    Element::Perm(p)
                } else {
                    Element::Int(s)
                }
            }
            (Element::Matrix(a), Element::Matrix(b)) => Element::Matrix(a + b),
            (Element::Matrix(a), s) | (s, Element::Matrix(a)) => Element::Matrix(a.offset(&s)),
        }
    }
}

impl Mul for Element {
    type Output = Self;

    /// # Panics
    ///
    /// Panics when the column count of the left matrix differs from the row
    /// count of the right one.
    fn mul(self, rhs: Self) -> Self::Output {
        match (self, rhs) {
            (Element::Int(a), Element::Int(b)) => Element::Int(a * b),
            (Element::Perm(p), Element::Perm(q)) => Element::Perm(p.compose(&q)),
            (Element::Perm(p), Element::Int(s)) | (Element::Int(s), Element::Perm(p)) => {
                if s == 0 {
                    Element::Int(0)
                } else {
                    Element::Perm(p)
                }
            }
            (Element::Matrix(a), Element::Matrix(b)) => Element::Matrix(a * b),
            (Element::Matrix(a), s) | (s, Element::Matrix(a)) => Element::Matrix(a.scale(&s)),
        }
    }
}

impl Neg for Element {
    type Output = Self;

    fn neg(self) -> Self::Output {
        match self {
            Element::Int(v) => Element::Int(-v),
            // (-1) * p = p under the sentinel rule
            Element::Perm(p) => Element::Perm(p),
            Element::Matrix(m) => Element::Matrix(-m),
        }
    }
}

impl Residue for Element {
    fn reduce_mod(&self, modulus: i64) -> Self {
        match self {
            Element::Int(v) => Element::Int(v.reduce_mod(modulus)),
            Element::Perm(p) => Element::Perm(p.clone()),
            Element::Matrix(m) => Element::Matrix(m.map(|v| v.reduce_mod(modulus))),
        }
    }
}

impl From<i64> for Element {
    fn from(value: i64) -> Self {
        Element::Int(value)
    }
}

impl From<Permutation> for Element {
    fn from(value: Permutation) -> Self {
        Element::Perm(value)
    }
}

impl From<Matrix<Element>> for Element {
    fn from(value: Matrix<Element>) -> Self {
        Element::Matrix(value)
    }
}

impl fmt::Display for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Element::Int(v) => write!(f, "{v}"),
            Element::Perm(p) => write!(f, "{p}"),
            Element::Matrix(m) => write!(f, "{m}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn perm(cycle: &[u32]) -> Element {
        Element::Perm(Permutation::from_cycle(cycle))
    }

    #[test]
    fn test_int_arithmetic() {
        assert_eq!(Element::Int(3) + Element::Int(4), Element::Int(7));
        assert_eq!(Element::Int(3) * Element::Int(4), Element::Int(12));
        assert_eq!(-Element::Int(3), Element::Int(-3));
    }

    #[test]
    fn test_perm_scalar_sentinels() {
        let p = perm(&[1, 2]);
        assert_eq!(p.clone() * Element::Int(0), Element::Int(0));
        assert_eq!(Element::Int(0) * p.clone(), Element::Int(0));
        assert_eq!(p.clone() * Element::Int(1), p);
        assert_eq!(Element::Int(1) * p.clone(), p);
        assert_eq!(p.clone() + Element::Int(0), p);
        assert_eq!(Element::Int(0) + p.clone(), p);
        assert_eq!(p.clone() + Element::Int(1), Element::Int(1));
        assert_eq!(-p.clone(), p);
    }

    #[test]
    fn test_perm_add_is_composition() {
        let p = perm(&[1, 2]);
        assert_eq!(p.clone() + p.clone(), Element::Perm(Permutation::identity()));
        assert_eq!(p.clone() * p, Element::Perm(Permutation::identity()));
    }

    #[test]
    fn test_affine_product_over_permutations() {
        let f = perm(&[1, 2]);
        let e = Element::Perm(Permutation::identity());
        let a = Element::matrix(vec![
            vec![f.clone(), f.clone()],
            vec![Element::Int(0), Element::Int(1)],
        ])
        .unwrap();
        // [[f, f], [0, 1]]^2 = [[f f, f f + f], [0, 1]] = [[e, f], [0, 1]]
        let expected = Element::matrix(vec![
            vec![e, f],
            vec![Element::Int(0), Element::Int(1)],
        ])
        .unwrap();
        assert_eq!(a.clone() * a, expected);
    }

    #[test]
    fn test_matrix_scalar_broadcast() {
        let a = Element::int_matrix(vec![vec![1, 2], vec![3, 4]]).unwrap();
        assert_eq!(
            a.clone() * Element::Int(2),
            Element::int_matrix(vec![vec![2, 4], vec![6, 8]]).unwrap()
        );
        assert_eq!(
            Element::Int(1) + a,
            Element::int_matrix(vec![vec![2, 3], vec![4, 5]]).unwrap()
        );
    }

    #[test]
    fn test_reduce_mod() {
        let a = Element::int_matrix(vec![vec![7, 10], vec![15, 22]]).unwrap();
        assert_eq!(
            a.reduce_mod(7),
            Element::int_matrix(vec![vec![0, 3], vec![1, 1]]).unwrap()
        );
        assert_eq!(Element::Int(-1).reduce_mod(5), Element::Int(4));
    }

    #[test]
    fn test_det() {
        let a = Element::int_matrix(vec![vec![2, 1], vec![1, 2]]).unwrap();
        assert_eq!(a.det(), Some(Element::Int(3)));
        assert_eq!(Element::Int(5).det(), None);
    }

    #[test]
    fn test_det_of_nested_matrix() {
        let block = |rows: Vec<Vec<i64>>| Element::int_matrix(rows).unwrap();
        let a = block(vec![vec![1, 0], vec![0, 1]]);
        let b = block(vec![vec![1, 1], vec![0, 1]]);
        let c = block(vec![vec![2, 0], vec![0, 2]]);
        let d = block(vec![vec![1, 2], vec![3, 4]]);
        let outer = Element::matrix(vec![vec![a, b], vec![c, d]]).unwrap();
        // a d - b c, with block products
        assert_eq!(outer.det(), Some(block(vec![vec![-1, 0], vec![3, 2]])));
        assert_eq!(outer.det(), outer.det());
    }

    #[test]
    #[should_panic(expected = "matrix product failed")]
    fn test_mismatched_matrix_product_panics() {
        let square = Element::int_matrix(vec![vec![1, 2], vec![3, 4]]).unwrap();
        let column = Element::int_matrix(vec![vec![1], vec![2], vec![3]]).unwrap();
        let _ = square * column;
    }
}
