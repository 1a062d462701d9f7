//! Products of NBC basis elements.

use std::sync::Arc;

use orsol_rings::CommutativeRing;
use parking_lot::RwLock;
use rustc_hash::FxHashMap;

use crate::algebra::OsElement;
use crate::error::{AlgebraError, Result};
use crate::reducer::SubsetReducer;
use crate::sign::Sign;
use crate::subset::{Rank, RankSet};

/// Multiplies basis elements on top of a [`SubsetReducer`].
///
/// A single generator is inserted directly: `e_x · e_b` is `e_{b ∪ {x}}`
/// up to the sign of moving `x` past the smaller members of `b`. Longer
/// left factors are applied one generator at a time, smallest first, which
/// builds `e_a` in reverse; the starting sign undoes that reversal.
pub struct BasisProductEngine<R: CommutativeRing> {
    reducer: SubsetReducer<R>,
    products: RwLock<FxHashMap<(RankSet, RankSet), Arc<OsElement<R>>>>,
}

impl<R: CommutativeRing> BasisProductEngine<R> {
    /// Creates an engine with an empty product cache.
    pub fn new(reducer: SubsetReducer<R>) -> Self {
        Self {
            reducer,
            products: RwLock::new(FxHashMap::default()),
        }
    }

    /// The underlying subset reducer.
    #[must_use]
    pub fn reducer(&self) -> &SubsetReducer<R> {
        &self.reducer
    }

    /// The product of the basis elements indexed by `a` and `b`.
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument` if `a` or `b` is not a basis index.
    pub fn product_on_basis(&self, a: &RankSet, b: &RankSet) -> Result<Arc<OsElement<R>>> {
        for index in [a, b] {
            if !self.reducer.is_basis(index) {
                return Err(AlgebraError::InvalidArgument(format!(
                    "{index:?} is not a basis index"
                )));
            }
        }

        let key = (a.clone(), b.clone());
        let cached = self.products.read().get(&key).cloned();
        if let Some(value) = cached {
            return Ok(value);
        }

        let value = Arc::new(self.compute(a, b)?);
        self.products.write().insert(key, Arc::clone(&value));
        Ok(value)
    }

    /// Number of cached basis products.
    #[must_use]
    pub fn cached_products(&self) -> usize {
        self.products.read().len()
    }

    /// `e_x · e_m` for a single generator `x` and any subset `m`.
    ///
    /// # Errors
    ///
    /// Propagates reduction errors.
    pub fn generator_times(&self, x: Rank, m: &RankSet) -> Result<OsElement<R>> {
        let Some((joined, pos)) = m.insert(x) else {
            return Ok(OsElement::zero());
        };
        let image = self.reducer.image(&joined)?;
        Ok(match Sign::from_parity(pos) {
            Sign::Plus => (*image).clone(),
            Sign::Minus => -&*image,
        })
    }

    fn compute(&self, a: &RankSet, b: &RankSet) -> Result<OsElement<R>> {
        if a.is_empty() {
            return Ok(OsElement::monomial(b.clone()));
        }
        if b.is_empty() {
            return Ok(OsElement::monomial(a.clone()));
        }
        if !a.is_disjoint(b) {
            return Ok(OsElement::zero());
        }
        if let [x] = a.ranks() {
            return self.generator_times(*x, b);
        }

        let mut acc = OsElement::term(b.clone(), Sign::reversal(a.len()).to_ring());
        for &x in a.ranks() {
            acc = self.left_multiply(x, &acc)?;
            if acc.is_zero() {
                break;
            }
        }
        Ok(acc)
    }

    fn left_multiply(&self, x: Rank, value: &OsElement<R>) -> Result<OsElement<R>> {
        let mut out = OsElement::zero();
        for (m, coeff) in value {
            out.add_scaled(&self.generator_times(x, m)?, coeff);
        }
        Ok(out)
    }
}
