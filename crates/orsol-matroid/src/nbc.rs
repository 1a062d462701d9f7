//! Broken circuits and no-broken-circuit (NBC) sets.
//!
//! Given a total order on the ground set, the broken circuit of a circuit
//! `C` is `C` minus its smallest element. A set is NBC when it contains no
//! broken circuit. NBC sets are independent, and every subset of an NBC set
//! is NBC, which is what makes the depth-first enumeration below complete.

use std::fmt::Debug;
use std::hash::Hash;

use rustc_hash::FxHashMap;

use crate::error::MatroidError;
use crate::subsets::is_sorted_subset;
use crate::Result;

/// Maps every ground-set element to its position in `ordering`.
///
/// With `ordering = None` the ground set's own order is used. The ordering
/// must list every element of the ground set exactly once.
///
/// # Errors
///
/// Returns `MatroidError::InvalidOrdering` if the ordering omits an
/// element, repeats one, or lists an element outside the ground set.
pub fn rank_map<E>(groundset: &[E], ordering: Option<&[E]>) -> Result<FxHashMap<E, usize>>
where
    E: Clone + Eq + Hash + Debug,
{
    let ordering = ordering.unwrap_or(groundset);
    let mut ranks = FxHashMap::default();
    ranks.reserve(ordering.len());

    for (rank, x) in ordering.iter().enumerate() {
        if !groundset.contains(x) {
            return Err(MatroidError::InvalidOrdering(format!(
                "{x:?} is not in the ground set"
            )));
        }
        if ranks.insert(x.clone(), rank).is_some() {
            return Err(MatroidError::InvalidOrdering(format!("{x:?} appears twice")));
        }
    }

    if let Some(missing) = groundset.iter().find(|x| !ranks.contains_key(*x)) {
        return Err(MatroidError::InvalidOrdering(format!("{missing:?} is missing")));
    }

    Ok(ranks)
}

/// Enumerates broken circuits and NBC sets for one ordering.
#[derive(Clone, Debug)]
pub struct NbcEnumerator<E> {
    /// Ground set listed in rank order.
    ordered: Vec<E>,
    /// Broken circuits as increasing rank vectors, deduplicated.
    broken: Vec<Vec<usize>>,
}

impl<E: Clone + Eq + Hash + Debug> NbcEnumerator<E> {
    /// Prepares the enumeration for `circuits` under `ordering`.
    ///
    /// # Errors
    ///
    /// Returns `InvalidOrdering` for a bad ordering and `InvalidCircuit` for
    /// an empty circuit or one mentioning an element outside the ground set.
    pub fn new(groundset: &[E], circuits: &[Vec<E>], ordering: Option<&[E]>) -> Result<Self> {
        let ranks = rank_map(groundset, ordering)?;

        let mut ordered = groundset.to_vec();
        ordered.sort_by_key(|x| ranks[x]);

        let mut broken = Vec::with_capacity(circuits.len());
        for circuit in circuits {
            let mut sorted = circuit
                .iter()
                .map(|x| {
                    ranks.get(x).copied().ok_or_else(|| {
                        MatroidError::InvalidCircuit(format!("{x:?} is not in the ground set"))
                    })
                })
                .collect::<Result<Vec<_>>>()?;
            if sorted.is_empty() {
                return Err(MatroidError::InvalidCircuit("empty circuit".to_string()));
            }
            sorted.sort_unstable();
            sorted.remove(0);
            broken.push(sorted);
        }
        broken.sort();
        broken.dedup();

        Ok(Self { ordered, broken })
    }

    /// The ground set in rank order.
    #[must_use]
    pub fn ordered(&self) -> &[E] {
        &self.ordered
    }

    /// The distinct broken circuits, each listed in rank order.
    #[must_use]
    pub fn broken_circuits(&self) -> Vec<Vec<E>> {
        self.broken.iter().map(|bc| self.elements(bc)).collect()
    }

    /// All NBC sets, each listed in rank order.
    ///
    /// Sets are sorted by size, then lexicographically by rank. A matroid
    /// with a loop has an empty broken circuit and therefore no NBC sets.
    #[must_use]
    pub fn nbc_sets(&self) -> Vec<Vec<E>> {
        if self.broken.iter().any(Vec::is_empty) {
            return Vec::new();
        }

        // Broken circuits indexed by their largest element: appending `r`
        // to an NBC set can only complete broken circuits ending in `r`.
        let n = self.ordered.len();
        let mut by_max: Vec<Vec<&[usize]>> = vec![Vec::new(); n];
        for bc in &self.broken {
            if let Some((&last, rest)) = bc.split_last() {
                by_max[last].push(rest);
            }
        }

        let mut found: Vec<Vec<usize>> = vec![Vec::new()];
        let mut stack: Vec<Vec<usize>> = vec![Vec::new()];

        while let Some(set) = stack.pop() {
            let start = set.last().map_or(0, |&r| r + 1);
            for r in start..n {
                if by_max[r].iter().any(|rest| is_sorted_subset(rest, &set)) {
                    continue;
                }
                let mut next = set.clone();
                next.push(r);
                found.push(next.clone());
                stack.push(next);
            }
        }

        found.sort_by(|a, b| a.len().cmp(&b.len()).then_with(|| a.cmp(b)));
        found.iter().map(|set| self.elements(set)).collect()
    }

    fn elements(&self, ranks: &[usize]) -> Vec<E> {
        ranks.iter().map(|&r| self.ordered[r].clone()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rank_map_default() {
        let ranks = rank_map(&['a', 'b', 'c'], None).unwrap();
        assert_eq!(ranks[&'a'], 0);
        assert_eq!(ranks[&'c'], 2);
    }

    #[test]
    fn test_rank_map_rejects_bad_orderings() {
        let ground = [0, 1, 2];
        assert!(matches!(
            rank_map(&ground, Some(&[0, 1][..])),
            Err(MatroidError::InvalidOrdering(_))
        ));
        assert!(matches!(
            rank_map(&ground, Some(&[0, 1, 1][..])),
            Err(MatroidError::InvalidOrdering(_))
        ));
        assert!(matches!(
            rank_map(&ground, Some(&[0, 1, 7][..])),
            Err(MatroidError::InvalidOrdering(_))
        ));
        assert!(rank_map(&ground, Some(&[2, 0, 1][..])).is_ok());
    }

    #[test]
    fn test_nbc_sets_of_triangle() {
        // Triangle graph: one circuit {0, 1, 2}, broken circuit {1, 2}.
        let e = NbcEnumerator::new(&[0, 1, 2], &[vec![2, 0, 1]], None).unwrap();
        assert_eq!(e.broken_circuits(), vec![vec![1, 2]]);
        assert_eq!(
            e.nbc_sets(),
            vec![
                vec![],
                vec![0],
                vec![1],
                vec![2],
                vec![0, 1],
                vec![0, 2],
            ]
        );
    }

    #[test]
    fn test_nbc_sets_follow_ordering() {
        let e = NbcEnumerator::new(&[0, 1, 2], &[vec![0, 1, 2]], Some(&[2, 1, 0][..])).unwrap();
        assert_eq!(e.ordered(), &[2, 1, 0]);
        assert_eq!(e.broken_circuits(), vec![vec![1, 0]]);
        let top: Vec<_> = e.nbc_sets().into_iter().filter(|s| s.len() == 2).collect();
        assert_eq!(top, vec![vec![2, 1], vec![2, 0]]);
    }

    #[test]
    fn test_loop_kills_everything() {
        let e = NbcEnumerator::new(&[0, 1], &[vec![0]], None).unwrap();
        assert_eq!(e.broken_circuits(), vec![Vec::<i32>::new()]);
        assert!(e.nbc_sets().is_empty());
    }

    #[test]
    fn test_rejects_foreign_circuit() {
        assert!(matches!(
            NbcEnumerator::new(&[0, 1], &[vec![0, 5]], None),
            Err(MatroidError::InvalidCircuit(_))
        ));
        assert!(matches!(
            NbcEnumerator::new(&[0, 1], &[vec![]], None),
            Err(MatroidError::InvalidCircuit(_))
        ));
    }
}
