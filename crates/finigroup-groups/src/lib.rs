//! # finigroup-groups
//!
//! Finite groups and their derived structure.
//!
//! This crate provides:
//! - `FiniteGroup`: identity detection, powers and orders, cyclic and abelian
//!   tests, center, centralizers, Cayley tables, cosets and subgroups by order
//! - Groups generated by one or more elements
//! - Named families (Z, U, Zx, S, A, D, M, GL, SL, Aff) in [`families`]
//!
//! ## Lazy Structure
//!
//! Derived properties are computed on first request and cached for the
//! lifetime of the group. Element powers and orders are memoized per instance.
//! Large groups scan for the identity, commutativity and the center in
//! parallel, see [`ParallelConfig`].

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod cayley;
pub mod config;
pub mod error;
pub mod families;
mod generated;
pub mod group;

#[cfg(test)]
mod proptests;

pub use cayley::CayleyTable;
pub use config::ParallelConfig;
pub use error::GroupError;
pub use families::BaseSet;
pub use group::{Cyclicity, FiniteGroup, MemoStats};
