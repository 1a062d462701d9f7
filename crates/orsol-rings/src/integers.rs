//! The ring of integers Z.

use std::fmt;
use std::ops::{Add, Mul, Neg, Sub};
use std::str::FromStr;

use dashu::integer::IBig;

use crate::error::ParseCoefficientError;
use crate::traits::{CommutativeRing, Ring};

/// The ring of arbitrary precision integers.
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Z(pub IBig);

impl Z {
    /// Creates a new integer.
    #[must_use]
    pub fn new(value: i64) -> Self {
        Self(IBig::from(value))
    }

    /// Returns the inner `dashu::IBig`.
    #[must_use]
    pub fn into_inner(self) -> IBig {
        self.0
    }

    /// Returns a reference to the inner `dashu::IBig`.
    #[must_use]
    pub fn as_inner(&self) -> &IBig {
        &self.0
    }

    /// Attempts to convert to an i64.
    ///
    /// Returns `None` if the value doesn't fit in an i64.
    #[must_use]
    pub fn to_i64(&self) -> Option<i64> {
        self.0.clone().try_into().ok()
    }
}

impl Ring for Z {
    fn zero() -> Self {
        Self(IBig::ZERO)
    }

    fn one() -> Self {
        Self(IBig::ONE)
    }

    fn is_zero(&self) -> bool {
        self.0 == IBig::ZERO
    }

    fn is_one(&self) -> bool {
        self.0 == IBig::ONE
    }

    fn from_i64(n: i64) -> Self {
        Self::new(n)
    }
}

impl CommutativeRing for Z {}

impl Add for Z {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self(self.0 + rhs.0)
    }
}

impl Sub for Z {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        Self(self.0 - rhs.0)
    }
}

impl Mul for Z {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self::Output {
        Self(self.0 * rhs.0)
    }
}

impl Neg for Z {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Self(-self.0)
    }
}

impl From<i64> for Z {
    fn from(value: i64) -> Self {
        Self::new(value)
    }
}

impl From<IBig> for Z {
    fn from(value: IBig) -> Self {
        Self(value)
    }
}

impl FromStr for Z {
    type Err = ParseCoefficientError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() {
            return Err(ParseCoefficientError::Empty);
        }
        let digits = s.strip_prefix('+').unwrap_or(s);
        digits
            .parse::<IBig>()
            .map(Self)
            .map_err(|_| ParseCoefficientError::invalid("integer", s))
    }
}

impl fmt::Debug for Z {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Z({})", self.0)
    }
}

impl fmt::Display for Z {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
