//! Sparse linear combinations of basis keys.

use std::collections::btree_map::{self, BTreeMap, Entry};
use std::ops::{Add, Neg, Sub};

use orsol_rings::Ring;

/// A finite linear combination of basis keys with coefficients in `R`.
///
/// Terms are stored ordered by key and never carry a zero coefficient, so
/// two combinations are equal exactly when they represent the same module
/// element.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct LinearCombination<K: Ord, R: Ring> {
    terms: BTreeMap<K, R>,
}

impl<K: Ord + Clone, R: Ring> LinearCombination<K, R> {
    /// Creates the zero element.
    #[must_use]
    pub fn zero() -> Self {
        Self {
            terms: BTreeMap::new(),
        }
    }

    /// Creates the basis element `[key]` with coefficient one.
    #[must_use]
    pub fn monomial(key: K) -> Self {
        Self::term(key, R::one())
    }

    /// Creates the single term `coeff * [key]`.
    #[must_use]
    pub fn term(key: K, coeff: R) -> Self {
        let mut terms = BTreeMap::new();
        if !coeff.is_zero() {
            terms.insert(key, coeff);
        }
        Self { terms }
    }

    /// Creates a combination from terms.
    ///
    /// Repeated keys are combined and zero coefficients dropped.
    #[must_use]
    pub fn from_terms<I: IntoIterator<Item = (K, R)>>(terms: I) -> Self {
        let mut result = Self::zero();
        for (key, coeff) in terms {
            result.add_term(key, coeff);
        }
        result
    }

    /// Returns true if this is the zero element.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.terms.is_empty()
    }

    /// Returns the number of nonzero terms.
    #[must_use]
    pub fn len(&self) -> usize {
        self.terms.len()
    }

    /// Returns true if there are no terms.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    /// Iterates over the nonzero terms in key order.
    pub fn iter(&self) -> btree_map::Iter<'_, K, R> {
        self.terms.iter()
    }

    /// Returns the coefficient of `key`, if nonzero.
    #[must_use]
    pub fn coefficient(&self, key: &K) -> Option<&R> {
        self.terms.get(key)
    }

    /// Iterates over the keys with nonzero coefficient.
    pub fn support(&self) -> impl Iterator<Item = &K> + '_ {
        self.terms.keys()
    }

    /// If this is a single term `c * [k]`, returns it.
    #[must_use]
    pub fn as_single_term(&self) -> Option<(&K, &R)> {
        if self.terms.len() == 1 {
            self.terms.iter().next()
        } else {
            None
        }
    }

    /// Adds `coeff * [key]` in place.
    pub fn add_term(&mut self, key: K, coeff: R) {
        if coeff.is_zero() {
            return;
        }
        match self.terms.entry(key) {
            Entry::Vacant(slot) => {
                slot.insert(coeff);
            }
            Entry::Occupied(mut slot) => {
                let sum = slot.get().clone() + coeff;
                if sum.is_zero() {
                    slot.remove();
                } else {
                    *slot.get_mut() = sum;
                }
            }
        }
    }

    /// Adds `scalar * other` in place.
    pub fn add_scaled(&mut self, other: &Self, scalar: &R) {
        if scalar.is_zero() {
            return;
        }
        for (key, coeff) in &other.terms {
            self.add_term(key.clone(), coeff.clone() * scalar.clone());
        }
    }

    /// Multiplies by a scalar.
    #[must_use]
    pub fn scale(&self, scalar: &R) -> Self {
        if scalar.is_zero() {
            return Self::zero();
        }

        // Over rings with zero divisors a product of nonzero values can vanish.
        Self::from_terms(
            self.terms
                .iter()
                .map(|(k, c)| (k.clone(), c.clone() * scalar.clone())),
        )
    }

    /// Applies `f` to every coefficient, dropping terms that become zero.
    #[must_use]
    pub fn map_coefficients<S: Ring, F: FnMut(&R) -> S>(&self, mut f: F) -> LinearCombination<K, S> {
        LinearCombination::from_terms(self.terms.iter().map(|(k, c)| (k.clone(), f(c))))
    }

    /// Consumes the combination, returning its terms in key order.
    #[must_use]
    pub fn into_terms(self) -> Vec<(K, R)> {
        self.terms.into_iter().collect()
    }
}

impl<K: Ord + Clone, R: Ring> Default for LinearCombination<K, R> {
    fn default() -> Self {
        Self::zero()
    }
}

impl<K: Ord + Clone, R: Ring> FromIterator<(K, R)> for LinearCombination<K, R> {
    fn from_iter<I: IntoIterator<Item = (K, R)>>(iter: I) -> Self {
        Self::from_terms(iter)
    }
}

impl<'a, K: Ord, R: Ring> IntoIterator for &'a LinearCombination<K, R> {
    type Item = (&'a K, &'a R);
    type IntoIter = btree_map::Iter<'a, K, R>;

    fn into_iter(self) -> Self::IntoIter {
        self.terms.iter()
    }
}

impl<K: Ord + Clone, R: Ring> Add for LinearCombination<K, R> {
    type Output = Self;

    fn add(mut self, rhs: Self) -> Self::Output {
        for (key, coeff) in rhs.terms {
            self.add_term(key, coeff);
        }
        self
    }
}

impl<K: Ord + Clone, R: Ring> Add for &LinearCombination<K, R> {
    type Output = LinearCombination<K, R>;

    fn add(self, rhs: Self) -> Self::Output {
        let mut result = self.clone();
        result.add_scaled(rhs, &R::one());
        result
    }
}

impl<K: Ord + Clone, R: Ring> Neg for LinearCombination<K, R> {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Self {
            terms: self.terms.into_iter().map(|(k, c)| (k, -c)).collect(),
        }
    }
}

impl<K: Ord + Clone, R: Ring> Neg for &LinearCombination<K, R> {
    type Output = LinearCombination<K, R>;

    fn neg(self) -> Self::Output {
        -self.clone()
    }
}

impl<K: Ord + Clone, R: Ring> Sub for LinearCombination<K, R> {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        self + (-rhs)
    }
}

impl<K: Ord + Clone, R: Ring> Sub for &LinearCombination<K, R> {
    type Output = LinearCombination<K, R>;

    fn sub(self, rhs: Self) -> Self::Output {
        let mut result = self.clone();
        result.add_scaled(rhs, &-R::one());
        result
    }
}
