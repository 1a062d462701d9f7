//! Canonical subsets of the ground set.
//!
//! Elements are replaced by their ranks under the algebra's ordering, and a
//! subset is stored as its strictly increasing rank sequence. Two subsets
//! are therefore equal (and hash equally) exactly when they have the same
//! members, whatever order they were built from.

use std::cmp::Ordering;
use std::fmt;

use orsol_module::Graded;
use smallvec::SmallVec;

/// Position of an element in the algebra's ordering.
pub type Rank = u32;

/// A finite subset of the ground set, as ascending ranks.
#[derive(Clone, PartialEq, Eq, Hash, Default)]
pub struct RankSet(SmallVec<[Rank; 8]>);

impl RankSet {
    /// The empty set.
    #[must_use]
    pub fn empty() -> Self {
        Self(SmallVec::new())
    }

    /// The set `{r}`.
    #[must_use]
    pub fn singleton(r: Rank) -> Self {
        let mut ranks = SmallVec::new();
        ranks.push(r);
        Self(ranks)
    }

    /// Builds a set from ranks in any order.
    ///
    /// Returns `None` if a rank is repeated.
    #[must_use]
    pub fn from_ranks<I: IntoIterator<Item = Rank>>(ranks: I) -> Option<Self> {
        let mut ranks: SmallVec<[Rank; 8]> = ranks.into_iter().collect();
        ranks.sort_unstable();
        if ranks.windows(2).any(|w| w[0] == w[1]) {
            return None;
        }
        Some(Self(ranks))
    }

    /// Number of elements.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns true for the empty set.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// The ranks in ascending order.
    #[must_use]
    pub fn ranks(&self) -> &[Rank] {
        &self.0
    }

    /// The smallest rank, if any.
    #[must_use]
    pub fn min_rank(&self) -> Option<Rank> {
        self.0.first().copied()
    }

    /// Membership test.
    #[must_use]
    pub fn contains(&self, r: Rank) -> bool {
        self.0.binary_search(&r).is_ok()
    }

    /// Returns true if every element of `self` lies in `other`.
    #[must_use]
    pub fn is_subset(&self, other: &RankSet) -> bool {
        if self.len() > other.len() {
            return false;
        }
        let mut rest = other.0.iter();
        self.0.iter().all(|x| rest.any(|y| y == x))
    }

    /// Returns true if the sets share no element.
    #[must_use]
    pub fn is_disjoint(&self, other: &RankSet) -> bool {
        let (mut i, mut j) = (0, 0);
        while i < self.0.len() && j < other.0.len() {
            match self.0[i].cmp(&other.0[j]) {
                Ordering::Less => i += 1,
                Ordering::Greater => j += 1,
                Ordering::Equal => return false,
            }
        }
        true
    }

    /// Inserts `r`, returning the new set and the zero-based position of
    /// `r` in it.
    ///
    /// Returns `None` if `r` is already present.
    #[must_use]
    pub fn insert(&self, r: Rank) -> Option<(Self, usize)> {
        let pos = self.0.binary_search(&r).err()?;
        let mut ranks = self.0.clone();
        ranks.insert(pos, r);
        Some((Self(ranks), pos))
    }

    /// Replaces the member `out` by the non-member `into`.
    ///
    /// This is the symmetric difference `self △ {out, into}`.
    #[must_use]
    pub fn exchange(&self, out: Rank, into: Rank) -> Self {
        debug_assert!(self.contains(out) && !self.contains(into));
        let mut ranks: SmallVec<[Rank; 8]> = self.0.iter().copied().filter(|&x| x != out).collect();
        let pos = ranks.binary_search(&into).unwrap_or_else(|p| p);
        ranks.insert(pos, into);
        Self(ranks)
    }

    /// The set with its smallest element removed.
    #[must_use]
    pub fn without_min(&self) -> Self {
        Self(self.0.iter().skip(1).copied().collect())
    }
}

/// Graded order: by size, then lexicographically by rank.
impl Ord for RankSet {
    fn cmp(&self, other: &Self) -> Ordering {
        self.len()
            .cmp(&other.len())
            .then_with(|| self.0.as_slice().cmp(other.0.as_slice()))
    }
}

impl PartialOrd for RankSet {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Graded for RankSet {
    fn degree(&self) -> usize {
        self.len()
    }
}

impl fmt::Debug for RankSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.0.iter()).finish()
    }
}
