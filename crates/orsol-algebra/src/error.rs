//! Error types for algebra construction and computation.

use orsol_matroid::MatroidError;
use thiserror::Error;

/// Errors that can occur while building or computing in an algebra.
///
/// Every error is a defect in the input data or in the caller's request;
/// a vanishing product is a zero element, never an error.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum AlgebraError {
    /// An ordering omits, repeats or invents a ground-set element.
    #[error("invalid ordering: {0}")]
    InvalidOrdering(String),

    /// A subset or basis index supplied by the caller is malformed.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// The matroid data violates an invariant the reduction relies on.
    #[error("arithmetic inconsistency: {0}")]
    ArithmeticInconsistency(String),

    /// Text could not be read as an algebra element.
    #[error("cannot parse `{input}`: {reason}")]
    Parse {
        /// The text that failed to parse.
        input: String,
        /// What was wrong with it.
        reason: String,
    },

    /// The matroid rejected its own data.
    #[error(transparent)]
    Matroid(MatroidError),
}

impl From<MatroidError> for AlgebraError {
    fn from(err: MatroidError) -> Self {
        match err {
            MatroidError::InvalidOrdering(msg) => Self::InvalidOrdering(msg),
            other => Self::Matroid(other),
        }
    }
}

/// Result type for algebra operations.
pub type Result<T> = std::result::Result<T, AlgebraError>;
