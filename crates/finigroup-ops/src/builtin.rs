//! Built-in operations.
//!
//! Names follow a fixed scheme (`add`, `mult`, `addmod7`, `matrixmod4`,
//! `matrixelement(addmod3)`), since the name is what makes two operations
//! equal.

use std::ops::{Add, Mul};

use finigroup_elements::{Element, GroupElement, Residue};

use crate::operation::Operation;

impl<E: GroupElement> Operation<E> {
    /// The operation of the empty group. It is never applied to anything, so
    /// it simply returns its left operand.
    #[must_use]
    pub fn null() -> Self {
        Self::new("null", 0, |a: &E, _: &E| a.clone())
    }
}

impl<E: GroupElement + Add<Output = E>> Operation<E> {
    /// Plain addition, named `add`.
    #[must_use]
    pub fn addition(capacity: usize) -> Self {
        Self::new("add", capacity, |a: &E, b: &E| a.clone() + b.clone())
    }
}

impl<E: GroupElement + Mul<Output = E>> Operation<E> {
    /// Plain multiplication, named `mult`.
    ///
    /// For permutations this is composition, for matrices the matrix product.
    #[must_use]
    pub fn multiplication(capacity: usize) -> Self {
        Self::new("mult", capacity, |a: &E, b: &E| a.clone() * b.clone())
    }
}

impl<E: GroupElement + Add<Output = E> + Residue> Operation<E> {
    /// Addition reduced modulo `modulus`, named `addmod{modulus}`.
    ///
    /// # Panics
    ///
    /// The returned operation panics when applied if `modulus` is zero.
    #[must_use]
    pub fn add_mod(modulus: i64, capacity: usize) -> Self {
        Self::new(format!("addmod{modulus}"), capacity, move |a: &E, b: &E| {
            (a.clone() + b.clone()).reduce_mod(modulus)
        })
    }
}

impl<E: GroupElement + Mul<Output = E> + Residue> Operation<E> {
    /// Multiplication reduced modulo `modulus`, named `multmod{modulus}`.
    ///
    /// # Panics
    ///
    /// The returned operation panics when applied if `modulus` is zero.
    #[must_use]
    pub fn mult_mod(modulus: i64, capacity: usize) -> Self {
        Self::new(format!("multmod{modulus}"), capacity, move |a: &E, b: &E| {
            (a.clone() * b.clone()).reduce_mod(modulus)
        })
    }
}

impl Operation<Element> {
    /// Matrix product with every entry reduced modulo `modulus`, named
    /// `matrixmod{modulus}`.
    ///
    /// # Panics
    ///
    /// The returned operation panics when applied to matrices whose
    /// dimensions do not chain, or if `modulus` is zero.
    #[must_use]
    pub fn matrix_mod(modulus: i64, capacity: usize) -> Self {
        Self::new(
            format!("matrixmod{modulus}"),
            capacity,
            move |a: &Element, b: &Element| (a.clone() * b.clone()).reduce_mod(modulus),
        )
    }

    /// Applies `inner` entry by entry to two matrices of the same shape, named
    /// `matrixelement({inner})`.
    ///
    /// Non-matrix operands are passed to `inner` directly.
    ///
    /// # Panics
    ///
    /// The returned operation panics when applied to matrices of different
    /// shapes.
    #[must_use]
    pub fn matrix_elementwise(inner: &Operation<Element>, capacity: usize) -> Self {
        let entry_op = inner.clone();
        Self::new(
            format!("matrixelement({})", inner.name()),
            capacity,
            move |a: &Element, b: &Element| match (a, b) {
                (Element::Matrix(x), Element::Matrix(y)) => {
                    match x.zip_with(y, |p, q| entry_op.apply(p, q)) {
                        Ok(m) => Element::Matrix(m),
                        Err(e) => panic!("{}: {e}", entry_op.name()),
                    }
                }
                _ => entry_op.apply(a, b),
            },
        )
    }
}
