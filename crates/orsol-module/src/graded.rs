//! Gradings on free modules.
//!
//! A grading is a degree attached to every basis key. A combination is
//! homogeneous when all of its terms share one degree.

use orsol_rings::Ring;

use crate::combination::LinearCombination;

/// A basis key with an integral degree.
pub trait Graded {
    /// The degree of the basis element indexed by this key.
    fn degree(&self) -> usize;
}

impl<K: Ord + Clone + Graded, R: Ring> LinearCombination<K, R> {
    /// Returns the common degree of all terms.
    ///
    /// Returns `None` for the zero element and for combinations mixing
    /// several degrees.
    #[must_use]
    pub fn homogeneous_degree(&self) -> Option<usize> {
        let mut degrees = self.support().map(Graded::degree);
        let first = degrees.next()?;
        degrees.all(|d| d == first).then_some(first)
    }

    /// Returns the part of this combination lying in degree `degree`.
    #[must_use]
    pub fn homogeneous_component(&self, degree: usize) -> Self {
        Self::from_terms(
            self.iter()
                .filter(|(k, _)| k.degree() == degree)
                .map(|(k, c)| (k.clone(), c.clone())),
        )
    }

    /// Returns the largest degree of a nonzero term.
    #[must_use]
    pub fn max_degree(&self) -> Option<usize> {
        self.support().map(Graded::degree).max()
    }
}
