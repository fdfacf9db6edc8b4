//! # finigroup-ops
//!
//! Binary operations for the finigroup engine.
//!
//! This crate provides:
//! - `Operation`: a named binary function with an optional LRU memo cache
//! - Built-in operations (`add`, `mult`, `addmod{n}`, `multmod{n}`,
//!   `matrixmod{n}`, `matrixelement({op})`, `null`)
//! - `OperationRegistry`: opt-in sharing of operation instances by name and
//!   identity key
//!
//! Operations compare equal by name. That name is what groups use to decide
//! whether they share a group law.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

mod builtin;
mod lru;
pub mod operation;
pub mod registry;

#[cfg(test)]
mod proptests;

pub use operation::{CacheStats, Operation};
pub use registry::{OpKind, OperationRegistry, RegisteredStats};
