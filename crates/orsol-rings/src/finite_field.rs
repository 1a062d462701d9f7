//! Prime fields Z/pZ.

use std::fmt;
use std::ops::{Add, Mul, Neg, Sub};
use std::str::FromStr;

use crate::error::ParseCoefficientError;
use crate::traits::{CommutativeRing, Field, Ring};

/// The prime field Z/PZ.
///
/// `P` must be prime for `inv` to be meaningful; it must also fit in 32
/// bits so products never overflow a u64.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct FiniteField<const P: u64>(u64);

impl<const P: u64> FiniteField<P> {
    /// Creates a new field element.
    #[must_use]
    pub const fn new(value: u64) -> Self {
        Self(value % P)
    }

    /// Creates a field element from a signed value.
    #[must_use]
    pub fn from_signed(value: i64) -> Self {
        let r = value.rem_euclid(P as i64);
        Self(r as u64)
    }

    /// Returns the canonical representative in `0..P`.
    #[must_use]
    pub const fn value(self) -> u64 {
        self.0
    }

    /// Returns the characteristic (the prime p).
    #[must_use]
    pub const fn characteristic() -> u64 {
        P
    }
}

impl<const P: u64> Ring for FiniteField<P> {
    fn zero() -> Self {
        Self(0)
    }

    fn one() -> Self {
        Self::new(1)
    }

    fn is_zero(&self) -> bool {
        self.0 == 0
    }

    fn is_one(&self) -> bool {
        self.0 == 1 % P
    }

    fn from_i64(n: i64) -> Self {
        Self::from_signed(n)
    }
}

impl<const P: u64> CommutativeRing for FiniteField<P> {}

impl<const P: u64> Field for FiniteField<P> {
    fn inv(&self) -> Option<Self> {
        if self.0 == 0 {
            return None;
        }

        // Extended Euclid on (P, self).
        let mut t = 0i128;
        let mut new_t = 1i128;
        let mut r = i128::from(P);
        let mut new_r = i128::from(self.0);

        while new_r != 0 {
            let quotient = r / new_r;
            (t, new_t) = (new_t, t - quotient * new_t);
            (r, new_r) = (new_r, r - quotient * new_r);
        }

        if r > 1 {
            return None;
        }

        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        Some(Self(t.rem_euclid(i128::from(P)) as u64))
    }
}

impl<const P: u64> Add for FiniteField<P> {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self((self.0 + rhs.0) % P)
    }
}

impl<const P: u64> Sub for FiniteField<P> {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        Self((self.0 + P - rhs.0) % P)
    }
}

impl<const P: u64> Mul for FiniteField<P> {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self::Output {
        Self(self.0 * rhs.0 % P)
    }
}

impl<const P: u64> Neg for FiniteField<P> {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Self((P - self.0) % P)
    }
}

impl<const P: u64> FromStr for FiniteField<P> {
    type Err = ParseCoefficientError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() {
            return Err(ParseCoefficientError::Empty);
        }
        s.strip_prefix('+')
            .unwrap_or(s)
            .parse::<i64>()
            .map(Self::from_signed)
            .map_err(|_| ParseCoefficientError::invalid("prime field", s))
    }
}

impl<const P: u64> fmt::Debug for FiniteField<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (mod {})", self.0, P)
    }
}

impl<const P: u64> fmt::Display for FiniteField<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
