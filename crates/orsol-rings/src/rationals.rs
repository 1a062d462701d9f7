//! The field of rational numbers Q.

use std::fmt;
use std::ops::{Add, Mul, Neg, Sub};
use std::str::FromStr;

use dashu::base::Inverse;
use dashu::integer::{IBig, UBig};
use dashu::rational::RBig;

use crate::error::ParseCoefficientError;
use crate::traits::{CommutativeRing, Field, Ring};

/// The field of rational numbers.
///
/// Values are kept in lowest terms with a positive denominator by `dashu`.
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Q(pub RBig);

impl Q {
    /// Creates a new rational from numerator and denominator.
    ///
    /// # Panics
    ///
    /// Panics if the denominator is zero.
    #[must_use]
    pub fn new(num: i64, den: i64) -> Self {
        assert!(den != 0, "denominator cannot be zero");
        Self(RBig::from(IBig::from(num)) / RBig::from(IBig::from(den)))
    }

    /// Creates a rational from an integer.
    #[must_use]
    pub fn from_integer(n: i64) -> Self {
        Self(RBig::from(IBig::from(n)))
    }

    /// Returns the numerator (carrying the sign).
    #[must_use]
    pub fn numerator(&self) -> IBig {
        self.0.numerator().clone()
    }

    /// Returns true if the denominator is one.
    #[must_use]
    pub fn is_integer(&self) -> bool {
        *self.0.denominator() == UBig::ONE
    }

    /// Returns the inner `dashu::RBig`.
    #[must_use]
    pub fn into_inner(self) -> RBig {
        self.0
    }

    /// Returns a reference to the inner `dashu::RBig`.
    #[must_use]
    pub fn as_inner(&self) -> &RBig {
        &self.0
    }
}

impl Ring for Q {
    fn zero() -> Self {
        Self(RBig::ZERO)
    }

    fn one() -> Self {
        Self(RBig::ONE)
    }

    fn is_zero(&self) -> bool {
        self.0 == RBig::ZERO
    }

    fn is_one(&self) -> bool {
        self.0 == RBig::ONE
    }

    fn from_i64(n: i64) -> Self {
        Self::from_integer(n)
    }
}

impl CommutativeRing for Q {}

impl Field for Q {
    fn inv(&self) -> Option<Self> {
        if self.is_zero() {
            None
        } else {
            Some(Self(self.0.clone().inv()))
        }
    }
}

impl Add for Q {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self(self.0 + rhs.0)
    }
}

impl Sub for Q {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        Self(self.0 - rhs.0)
    }
}

impl Mul for Q {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self::Output {
        Self(self.0 * rhs.0)
    }
}

impl Neg for Q {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Self(-self.0)
    }
}

impl From<i64> for Q {
    fn from(value: i64) -> Self {
        Self::from_integer(value)
    }
}

impl From<RBig> for Q {
    fn from(value: RBig) -> Self {
        Self(value)
    }
}

/// Reads `n` or `n/d` with optional signs on either part.
impl FromStr for Q {
    type Err = ParseCoefficientError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() {
            return Err(ParseCoefficientError::Empty);
        }

        let parse_part = |part: &str| {
            let part = part.trim();
            part.strip_prefix('+')
                .unwrap_or(part)
                .parse::<IBig>()
                .map_err(|_| ParseCoefficientError::invalid("rational", s))
        };

        match s.split_once('/') {
            None => Ok(Self(RBig::from(parse_part(s)?))),
            Some((num, den)) => {
                let num = parse_part(num)?;
                let den = parse_part(den)?;
                if den == IBig::ZERO {
                    return Err(ParseCoefficientError::ZeroDenominator(s.to_string()));
                }
                Ok(Self(RBig::from(num) / RBig::from(den)))
            }
        }
    }
}

impl fmt::Debug for Q {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Q({self})")
    }
}

impl fmt::Display for Q {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_integer() {
            write!(f, "{}", self.0.numerator())
        } else {
            write!(f, "{}/{}", self.0.numerator(), self.0.denominator())
        }
    }
}
