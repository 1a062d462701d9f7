//! Errors raised while reading coefficients from text.

use thiserror::Error;

/// A string could not be read as an element of a coefficient ring.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ParseCoefficientError {
    /// The input was empty or only whitespace.
    #[error("empty coefficient")]
    Empty,

    /// The input is not a number in the expected notation.
    #[error("invalid {ring} coefficient `{input}`")]
    Invalid {
        /// Name of the ring being parsed.
        ring: &'static str,
        /// The offending input.
        input: String,
    },

    /// A rational with denominator zero.
    #[error("zero denominator in `{0}`")]
    ZeroDenominator(String),
}

impl ParseCoefficientError {
    pub(crate) fn invalid(ring: &'static str, input: &str) -> Self {
        Self::Invalid {
            ring,
            input: input.to_string(),
        }
    }
}
