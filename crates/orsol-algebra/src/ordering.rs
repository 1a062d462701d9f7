//! The total order on the ground set.

use std::fmt::Debug;
use std::hash::Hash;

use orsol_matroid::rank_map;
use rustc_hash::FxHashMap;

use crate::error::{AlgebraError, Result};
use crate::subset::{Rank, RankSet};

/// A bijection between the ground set and `0..n`.
///
/// Fixed when the algebra is built; everything downstream works on ranks.
#[derive(Clone, Debug)]
pub struct OrderingIndex<E> {
    /// Elements indexed by rank.
    elements: Vec<E>,
    /// Rank of each element.
    ranks: FxHashMap<E, Rank>,
}

impl<E: Clone + Eq + Hash + Ord + Debug> OrderingIndex<E> {
    /// Ranks `groundset` by `ordering`, or by the natural order of `E` when
    /// no ordering is given.
    ///
    /// # Errors
    ///
    /// Returns `AlgebraError::InvalidOrdering` if `ordering` omits or
    /// repeats an element of the ground set, or lists a foreign element.
    pub fn new(groundset: &[E], ordering: Option<&[E]>) -> Result<Self> {
        let mut sorted = groundset.to_vec();
        sorted.sort();
        if let Some(w) = sorted.windows(2).find(|w| w[0] == w[1]) {
            return Err(AlgebraError::InvalidOrdering(format!(
                "ground set lists {:?} twice",
                w[0]
            )));
        }

        let positions = rank_map(&sorted, ordering)?;
        let mut elements = sorted;
        elements.sort_by_key(|x| positions[x]);

        let ranks: FxHashMap<E, Rank> = elements
            .iter()
            .enumerate()
            .map(|(r, x)| Ok((x.clone(), to_rank(r)?)))
            .collect::<Result<_>>()?;

        Ok(Self { elements, ranks })
    }

    /// The rank of `x`, if it is in the ground set.
    #[must_use]
    pub fn rank(&self, x: &E) -> Option<Rank> {
        self.ranks.get(x).copied()
    }

    /// The element of rank `r`.
    #[must_use]
    pub fn element(&self, r: Rank) -> Option<&E> {
        self.elements.get(r as usize)
    }

    /// The ground set in rank order.
    #[must_use]
    pub fn elements(&self) -> &[E] {
        &self.elements
    }

    /// Size of the ground set.
    #[must_use]
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    /// Returns true if the ground set is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Converts a collection of elements into its canonical subset.
    ///
    /// # Errors
    ///
    /// Returns `AlgebraError::InvalidArgument` if an element is not in the
    /// ground set or appears more than once.
    pub fn rank_set<'a, I>(&self, items: I) -> Result<RankSet>
    where
        I: IntoIterator<Item = &'a E>,
        E: 'a,
    {
        let ranks = items
            .into_iter()
            .map(|x| {
                self.rank(x).ok_or_else(|| {
                    AlgebraError::InvalidArgument(format!("{x:?} is not in the ground set"))
                })
            })
            .collect::<Result<Vec<_>>>()?;

        RankSet::from_ranks(ranks.iter().copied()).ok_or_else(|| {
            let names: Vec<_> = ranks.iter().filter_map(|&r| self.element(r)).collect();
            AlgebraError::InvalidArgument(format!("{names:?} repeats an element"))
        })
    }

    /// The members of `set`, in rank order.
    ///
    /// # Panics
    ///
    /// Panics if `set` was not built against this ordering.
    #[must_use]
    pub fn to_elements(&self, set: &RankSet) -> Vec<E> {
        set.ranks()
            .iter()
            .map(|&r| self.elements[r as usize].clone())
            .collect()
    }
}

fn to_rank(r: usize) -> Result<Rank> {
    Rank::try_from(r).map_err(|_| {
        AlgebraError::InvalidArgument(format!("ground set too large: rank {r} overflows"))
    })
}
