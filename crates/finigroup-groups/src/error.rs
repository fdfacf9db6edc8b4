//! Errors raised by group queries.

use thiserror::Error;

/// Errors that can occur while querying a group.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum GroupError {
    /// No element acts as a left identity, so the structure is not a group
    /// under its operation.
    #[error("{group} has no identity element")]
    NoIdentity {
        /// Label of the malformed group.
        group: String,
    },

    /// A coset decomposition was requested for a group that is not a
    /// subgroup of the ambient group.
    #[error("{subgroup} is not a subgroup of {group}")]
    NotASubgroup {
        /// Label of the rejected subgroup.
        subgroup: String,
        /// Label of the ambient group.
        group: String,
    },
}
