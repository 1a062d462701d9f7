//! The matroid interface.

use std::fmt::{self, Debug};
use std::hash::Hash;

use crate::nbc::NbcEnumerator;
use crate::Result;

/// A finite matroid presented by its circuits.
///
/// Implementors supply the ground set and the circuits; broken circuits and
/// NBC sets are derived from them for a chosen ordering.
pub trait Matroid: fmt::Display {
    /// The ground set element type.
    type Element: Clone + Eq + Hash + Ord + Debug;

    /// The ground set, in ascending natural order.
    fn groundset(&self) -> Vec<Self::Element>;

    /// The circuits (minimal dependent sets).
    fn circuits(&self) -> Vec<Vec<Self::Element>>;

    /// The distinct broken circuits for `ordering`, each listed in rank order.
    ///
    /// # Errors
    ///
    /// Fails if `ordering` is not a permutation of the ground set.
    fn broken_circuits(&self, ordering: Option<&[Self::Element]>) -> Result<Vec<Vec<Self::Element>>> {
        let enumerator = NbcEnumerator::new(&self.groundset(), &self.circuits(), ordering)?;
        Ok(enumerator.broken_circuits())
    }

    /// The NBC sets for `ordering`, each listed in rank order.
    ///
    /// # Errors
    ///
    /// Fails if `ordering` is not a permutation of the ground set.
    fn no_broken_circuits_sets(
        &self,
        ordering: Option<&[Self::Element]>,
    ) -> Result<Vec<Vec<Self::Element>>> {
        let enumerator = NbcEnumerator::new(&self.groundset(), &self.circuits(), ordering)?;
        Ok(enumerator.nbc_sets())
    }
}

impl<M: Matroid + ?Sized> Matroid for &M {
    type Element = M::Element;

    fn groundset(&self) -> Vec<Self::Element> {
        (**self).groundset()
    }

    fn circuits(&self) -> Vec<Vec<Self::Element>> {
        (**self).circuits()
    }

    fn broken_circuits(&self, ordering: Option<&[Self::Element]>) -> Result<Vec<Vec<Self::Element>>> {
        (**self).broken_circuits(ordering)
    }

    fn no_broken_circuits_sets(
        &self,
        ordering: Option<&[Self::Element]>,
    ) -> Result<Vec<Vec<Self::Element>>> {
        (**self).no_broken_circuits_sets(ordering)
    }
}
