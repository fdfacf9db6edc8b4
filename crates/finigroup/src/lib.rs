//! # finigroup
//!
//! Structural properties of concrete finite groups.
//!
//! finigroup detects identities and inverses, computes element orders,
//! classifies groups as cyclic or abelian, and builds centers, centralizers,
//! Cayley tables, coset decompositions and subgroups by order.
//!
//! ## Features
//!
//! - **Element Algebras**: cycle-based permutations, matrices over arbitrary
//!   entries, and a tagged `Element` mixing both with integers
//! - **Named Operations**: memoized binary operations, shared on request
//!   through an explicit registry
//! - **Lazy Structure**: every derived property is computed once per group
//! - **Named Families**: Z, U, Zx, S, A, D, M, GL, SL and Aff
//!
//! ## Quick Start
//!
//! ```rust
//! use finigroup::prelude::*;
//!
//! let d4 = dihedral(4);
//! assert_eq!(d4.len(), 8);
//! assert!(!d4.abelian());
//! assert!(d4 < symmetric(4));
//!
//! let z5 = additive(5);
//! assert!(z5.cyclic().unwrap().is_cyclic);
//! assert_eq!(z5.order(&Element::Int(2)), Ok(Some(5)));
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub use finigroup_elements as elements;
pub use finigroup_groups as groups;
pub use finigroup_ops as ops;


/// Prelude module for convenient imports.
pub mod prelude {
    pub use finigroup_elements::{Element, GroupElement, Matrix, Permutation, Residue};
    pub use finigroup_groups::families::{
        additive, affine, alternating, dihedral, general_linear, matrices, matrix_group,
        nonzero_residues, permutation_generated, permutation_group, special_linear, symmetric,
        units,
    };
    pub use finigroup_groups::{
        BaseSet, CayleyTable, Cyclicity, FiniteGroup, GroupError, ParallelConfig,
    };
    pub use finigroup_ops::{CacheStats, OpKind, Operation, OperationRegistry};
}
