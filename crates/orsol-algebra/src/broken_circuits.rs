//! The broken-circuit table.
//!
//! Every circuit `C` contributes the pair `(C \ {min C}, min C)`. Distinct
//! circuits can share a broken circuit (in `U(1, 3)` the circuits `{0, 2}`
//! and `{1, 2}` both give `{2}`), so each key keeps all of its removed
//! elements. Any one of them proves that a set containing the key and that
//! element is dependent; the smallest is used for rewriting.

use std::fmt::Debug;
use std::hash::Hash;

use rustc_hash::FxHashMap;
use smallvec::SmallVec;

use crate::error::{AlgebraError, Result};
use crate::ordering::OrderingIndex;
use crate::subset::{Rank, RankSet};

/// One broken circuit with the minima removed to produce it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BrokenCircuit {
    set: RankSet,
    removed: SmallVec<[Rank; 2]>,
}

impl BrokenCircuit {
    /// The broken circuit itself.
    #[must_use]
    pub fn set(&self) -> &RankSet {
        &self.set
    }

    /// Every removed minimum, ascending. Never empty.
    #[must_use]
    pub fn removed(&self) -> &[Rank] {
        &self.removed
    }

    /// The smallest removed minimum.
    #[must_use]
    pub fn smallest_removed(&self) -> Rank {
        self.removed[0]
    }
}

/// All broken circuits of a matroid under one ordering.
#[derive(Clone, Debug, Default)]
pub struct BrokenCircuitTable {
    /// Entries sorted by broken circuit in graded order.
    entries: Vec<BrokenCircuit>,
}

impl BrokenCircuitTable {
    /// Builds the table from the matroid's circuits.
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument` if a circuit repeats an element or leaves
    /// the ground set, and `ArithmeticInconsistency` for an empty circuit.
    pub fn new<E>(circuits: &[Vec<E>], ordering: &OrderingIndex<E>) -> Result<Self>
    where
        E: Clone + Eq + Hash + Ord + Debug,
    {
        let mut index: FxHashMap<RankSet, usize> = FxHashMap::default();
        let mut entries: Vec<BrokenCircuit> = Vec::new();

        for circuit in circuits {
            let set = ordering.rank_set(circuit)?;
            let Some(min) = set.min_rank() else {
                return Err(AlgebraError::ArithmeticInconsistency(
                    "the empty set is not a circuit".to_string(),
                ));
            };
            let broken = set.without_min();

            match index.get(&broken) {
                Some(&at) => {
                    let removed = &mut entries[at].removed;
                    if let Err(pos) = removed.binary_search(&min) {
                        removed.insert(pos, min);
                    }
                }
                None => {
                    index.insert(broken.clone(), entries.len());
                    let mut removed = SmallVec::new();
                    removed.push(min);
                    entries.push(BrokenCircuit {
                        set: broken,
                        removed,
                    });
                }
            }
        }

        entries.sort_by(|a, b| a.set.cmp(&b.set));
        Ok(Self { entries })
    }

    /// The first broken circuit contained in `s`, if any.
    ///
    /// Entries are scanned in graded order, so the result is deterministic.
    #[must_use]
    pub fn find_contained(&self, s: &RankSet) -> Option<&BrokenCircuit> {
        self.entries.iter().find(|bc| bc.set.is_subset(s))
    }

    /// The removed minima recorded for `broken`, if it is a broken circuit.
    #[must_use]
    pub fn removed_for(&self, broken: &RankSet) -> Option<&[Rank]> {
        self.entries
            .binary_search_by(|bc| bc.set.cmp(broken))
            .ok()
            .map(|at| self.entries[at].removed())
    }

    /// Number of distinct broken circuits.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the matroid has no circuits.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates over the broken circuits in graded order.
    pub fn iter(&self) -> std::slice::Iter<'_, BrokenCircuit> {
        self.entries.iter()
    }
}

impl<'a> IntoIterator for &'a BrokenCircuitTable {
    type Item = &'a BrokenCircuit;
    type IntoIter = std::slice::Iter<'a, BrokenCircuit>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
