//! Small combinatorial helpers over index sets.

/// Iterator over the `k`-element subsets of `0..n` in lexicographic order.
///
/// Each subset is yielded as a strictly increasing vector.
#[derive(Clone, Debug)]
pub struct Combinations {
    n: usize,
    current: Option<Vec<usize>>,
}

impl Combinations {
    /// Creates the iterator over `k`-subsets of `0..n`.
    #[must_use]
    pub fn new(n: usize, k: usize) -> Self {
        let current = (k <= n).then(|| (0..k).collect());
        Self { n, current }
    }
}

impl Iterator for Combinations {
    type Item = Vec<usize>;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.current.take()?;
        let k = current.len();

        // Advance to the lexicographic successor, if any.
        let mut next = current.clone();
        let mut i = k;
        while i > 0 {
            i -= 1;
            if next[i] < self.n - k + i {
                next[i] += 1;
                for j in i + 1..k {
                    next[j] = next[j - 1] + 1;
                }
                self.current = Some(next);
                break;
            }
        }

        Some(current)
    }
}

/// Returns true if the sorted slice `small` is contained in the sorted slice
/// `large`.
#[must_use]
pub fn is_sorted_subset<T: Ord>(small: &[T], large: &[T]) -> bool {
    if small.len() > large.len() {
        return false;
    }
    let mut rest = large.iter();
    small.iter().all(|x| rest.any(|y| y == x))
}
