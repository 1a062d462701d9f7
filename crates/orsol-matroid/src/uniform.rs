//! Uniform matroids.

use std::fmt;

use crate::matroid::Matroid;
use crate::subsets::Combinations;

/// The uniform matroid `U(r, n)` on `{0, ..., n - 1}`.
///
/// A set is independent iff it has at most `r` elements, so the circuits
/// are exactly the `(r + 1)`-element subsets.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct UniformMatroid {
    rank: usize,
    size: usize,
}

impl UniformMatroid {
    /// Creates `U(rank, size)`. A rank above `size` is clamped to `size`.
    #[must_use]
    pub fn new(rank: usize, size: usize) -> Self {
        Self {
            rank: rank.min(size),
            size,
        }
    }

    /// The rank `r`.
    #[must_use]
    pub fn rank(&self) -> usize {
        self.rank
    }

    /// The ground set size `n`.
    #[must_use]
    pub fn size(&self) -> usize {
        self.size
    }
}

impl Matroid for UniformMatroid {
    type Element = usize;

    fn groundset(&self) -> Vec<usize> {
        (0..self.size).collect()
    }

    fn circuits(&self) -> Vec<Vec<usize>> {
        if self.rank == self.size {
            return Vec::new();
        }
        Combinations::new(self.size, self.rank + 1).collect()
    }
}

impl fmt::Display for UniformMatroid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "U({}, {}): uniform matroid of rank {} on {} elements",
            self.rank, self.size, self.rank, self.size
        )
    }
}
