//! The full multiplication table on the NBC basis.

use std::fmt::Debug;
use std::hash::Hash;
use std::sync::Arc;

use orsol_rings::CommutativeRing;
use rayon::prelude::*;
use tracing::debug;

use crate::algebra::{OrlikSolomonAlgebra, OsElement};
use crate::error::Result;
use crate::subset::RankSet;

/// One nonzero entry of the multiplication table.
pub type TableEntry<R> = (RankSet, RankSet, Arc<OsElement<R>>);

impl<E, R> OrlikSolomonAlgebra<E, R>
where
    E: Clone + Eq + Hash + Ord + Debug + Send + Sync,
    R: CommutativeRing + Send + Sync,
{
    /// Every nonzero product of two basis elements, ordered by `(a, b)`.
    ///
    /// Pairs are distributed over rayon once the basis has at least
    /// `parallel_threshold` elements; the reducer and product caches are
    /// shared between workers.
    ///
    /// # Errors
    ///
    /// Propagates reduction errors.
    pub fn multiplication_table(&self) -> Result<Vec<TableEntry<R>>> {
        let basis = self.basis();
        let pairs: Vec<(&RankSet, &RankSet)> = basis
            .iter()
            .flat_map(|a| basis.iter().map(move |b| (a, b)))
            .filter(|(a, b)| a.is_disjoint(b))
            .collect();

        let product = |(a, b): (&RankSet, &RankSet)| -> Result<Option<TableEntry<R>>> {
            let value = self.product_on_basis(a, b)?;
            Ok((!value.is_zero()).then(|| (a.clone(), b.clone(), value)))
        };

        let parallel = basis.len() >= self.parallel_threshold;
        let entries: Vec<Option<TableEntry<R>>> = if parallel {
            pairs.into_par_iter().map(product).collect::<Result<_>>()?
        } else {
            pairs.into_iter().map(product).collect::<Result<_>>()?
        };
        let entries: Vec<TableEntry<R>> = entries.into_iter().flatten().collect();

        debug!(
            dimension = basis.len(),
            nonzero = entries.len(),
            parallel,
            "computed multiplication table"
        );
        Ok(entries)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AlgebraConfig;
    use orsol_matroid::{GraphicMatroid, UniformMatroid};
    use orsol_rings::Z;

    #[test]
    fn test_table_of_uniform() {
        let os: OrlikSolomonAlgebra<usize, Z> =
            OrlikSolomonAlgebra::new(&UniformMatroid::new(3, 4)).unwrap();
        let table = os.multiplication_table().unwrap();
        for (a, b, value) in &table {
            assert!(a.is_disjoint(b));
            assert_eq!(value.homogeneous_degree(), Some(a.len() + b.len()));
        }
        // The unit row and column: 14 + 14 - 1 entries.
        let unit = table
            .iter()
            .filter(|(a, b, _)| a.is_empty() || b.is_empty())
            .count();
        assert_eq!(unit, 27);
    }

    #[test]
    fn test_parallel_matches_sequential() {
        let m = GraphicMatroid::complete(4);
        let sequential: OrlikSolomonAlgebra<usize, Z> = OrlikSolomonAlgebra::with_config(
            &m,
            AlgebraConfig::default().with_parallel_threshold(usize::MAX),
        )
        .unwrap();
        let parallel: OrlikSolomonAlgebra<usize, Z> =
            OrlikSolomonAlgebra::with_config(&m, AlgebraConfig::default().with_parallel_threshold(0))
                .unwrap();

        let expected = sequential.multiplication_table().unwrap();
        let actual = parallel.multiplication_table().unwrap();
        assert_eq!(expected.len(), actual.len());
        for ((a1, b1, x1), (a2, b2, x2)) in expected.iter().zip(&actual) {
            assert_eq!((a1, b1), (a2, b2));
            assert_eq!(**x1, **x2);
        }
    }
}
