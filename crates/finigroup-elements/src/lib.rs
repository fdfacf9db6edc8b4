//! # finigroup-elements
//!
//! Element algebras for the finigroup engine.
//!
//! This crate provides:
//! - The `GroupElement` bound every group element satisfies
//! - Cycle-based permutations with composition and sign
//! - Dense matrices over arbitrary entries with cofactor determinants
//! - The tagged `Element` value used by the named group families
//!
//! ## Element Hierarchy
//!
//! ```text
//! Element
//!  ├── Int(i64)
//!  ├── Perm(Permutation)
//!  └── Matrix(Matrix<Element>)
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod element;
pub mod matrix;
pub mod permutation;
pub mod traits;

#[cfg(test)]
mod proptests;

pub use element::Element;
pub use matrix::{Matrix, MatrixError};
pub use permutation::{Permutation, PermutationError};
pub use traits::{GroupElement, Residue};
