//! Algebraic structure traits.
//!
//! These are the coefficient-side abstractions the free module and the
//! Orlik-Solomon algebra are generic over.

use std::fmt::{Debug, Display};
use std::ops::{Add, Mul, Neg, Sub};

/// A ring is a set with addition and multiplication operations.
///
/// # Laws
///
/// - Addition is associative and commutative with identity `zero()`
/// - Multiplication is associative with identity `one()`
/// - Multiplication distributes over addition
/// - Every element has an additive inverse (`neg`)
pub trait Ring:
    Clone
    + Eq
    + Debug
    + Display
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Neg<Output = Self>
{
    /// The additive identity.
    fn zero() -> Self;

    /// The multiplicative identity.
    fn one() -> Self;

    /// Returns true if this is the additive identity.
    fn is_zero(&self) -> bool;

    /// Returns true if this is the multiplicative identity.
    fn is_one(&self) -> bool;

    /// Computes self + self + ... (n times).
    fn mul_by_scalar(&self, n: i64) -> Self {
        if n == 0 {
            return Self::zero();
        }

        // Double-and-add keeps this logarithmic in |n|.
        let mut result = Self::zero();
        let mut base = self.clone();
        let mut k = n.unsigned_abs();

        while k > 0 {
            if k & 1 == 1 {
                result = result + base.clone();
            }
            base = base.clone() + base;
            k >>= 1;
        }

        if n < 0 {
            -result
        } else {
            result
        }
    }

    /// The image of an integer under the canonical map Z -> R.
    fn from_i64(n: i64) -> Self {
        Self::one().mul_by_scalar(n)
    }
}

/// A commutative ring where multiplication is commutative.
///
/// Orlik-Solomon algebras are only defined over commutative rings; the
/// algebra, its reducer and its product engine all bound their
/// coefficients by this trait.
pub trait CommutativeRing: Ring {}

/// A field is a commutative ring where every non-zero element has a
/// multiplicative inverse.
pub trait Field: CommutativeRing {
    /// Computes the multiplicative inverse.
    ///
    /// Returns `None` if the element is zero.
    fn inv(&self) -> Option<Self>;
}
