//! Signs of wedge-product reorderings.

use std::ops::Mul;

use orsol_rings::Ring;

/// A sign `±1`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Sign {
    /// `+1`
    Plus,
    /// `-1`
    Minus,
}

impl Sign {
    /// `(-1)^n`.
    #[must_use]
    pub fn from_parity(n: usize) -> Self {
        if n % 2 == 0 {
            Sign::Plus
        } else {
            Sign::Minus
        }
    }

    /// The sign of reversing `k` wedge factors, `(-1)^(k(k-1)/2)`.
    ///
    /// Positive iff `k mod 4` is 0 or 1.
    #[must_use]
    pub fn reversal(k: usize) -> Self {
        if k % 4 < 2 {
            Sign::Plus
        } else {
            Sign::Minus
        }
    }

    /// The opposite sign.
    #[must_use]
    pub fn flip(self) -> Self {
        match self {
            Sign::Plus => Sign::Minus,
            Sign::Minus => Sign::Plus,
        }
    }

    /// `±1` in the ring `R`.
    #[must_use]
    pub fn to_ring<R: Ring>(self) -> R {
        self.apply(R::one())
    }

    /// Multiplies `value` by this sign.
    #[must_use]
    pub fn apply<R: Ring>(self, value: R) -> R {
        match self {
            Sign::Plus => value,
            Sign::Minus => -value,
        }
    }
}

impl Mul for Sign {
    type Output = Sign;

    fn mul(self, rhs: Sign) -> Sign {
        if self == rhs {
            Sign::Plus
        } else {
            Sign::Minus
        }
    }
}
