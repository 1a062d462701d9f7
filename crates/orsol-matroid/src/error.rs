//! Errors raised for malformed matroid data.

use thiserror::Error;

/// Errors that can occur when building or querying a matroid.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum MatroidError {
    /// An ordering is not a permutation of the ground set.
    #[error("invalid ordering: {0}")]
    InvalidOrdering(String),

    /// The ground set lists an element twice.
    #[error("invalid ground set: {0}")]
    InvalidGroundSet(String),

    /// A circuit is empty, repeats an element, leaves the ground set, or
    /// contains another circuit.
    #[error("invalid circuit: {0}")]
    InvalidCircuit(String),

    /// An edge refers to a vertex that does not exist.
    #[error("invalid graph: {0}")]
    InvalidGraph(String),
}
