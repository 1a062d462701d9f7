//! The Orlik-Solomon algebra of a matroid.

use std::fmt::{self, Debug};
use std::hash::Hash;
use std::sync::Arc;

use orsol_matroid::Matroid;
use orsol_module::LinearCombination;
use orsol_rings::CommutativeRing;
use tracing::debug;

use crate::broken_circuits::BrokenCircuitTable;
use crate::config::AlgebraConfig;
use crate::error::{AlgebraError, Result};
use crate::ordering::OrderingIndex;
use crate::product::BasisProductEngine;
use crate::reducer::{CacheStats, SubsetReducer};
use crate::sign::Sign;
use crate::subset::RankSet;

/// An element of an Orlik-Solomon algebra: a combination of NBC sets.
pub type OsElement<R> = LinearCombination<RankSet, R>;

/// The Orlik-Solomon algebra `A(M)` of a matroid `M` over a ring `R`.
///
/// The basis is indexed by the NBC sets of `M` for the chosen ordering,
/// stored as [`RankSet`]s. The ordering, broken circuits and basis are
/// fixed at construction; reductions and products are cached as they are
/// computed and the caches only grow.
pub struct OrlikSolomonAlgebra<E, R: CommutativeRing> {
    description: String,
    ordering: OrderingIndex<E>,
    basis: Vec<RankSet>,
    engine: BasisProductEngine<R>,
    unit: OsElement<R>,
    generators: Vec<OsElement<R>>,
    pub(crate) prefix: String,
    pub(crate) parallel_threshold: usize,
}

impl<E, R> OrlikSolomonAlgebra<E, R>
where
    E: Clone + Eq + Hash + Ord + Debug,
    R: CommutativeRing,
{
    /// Builds the algebra of `matroid` under the natural order of its
    /// ground set.
    ///
    /// # Errors
    ///
    /// Fails if the matroid's circuits are malformed or disagree with its
    /// NBC sets.
    pub fn new<M: Matroid<Element = E>>(matroid: &M) -> Result<Self> {
        Self::with_config(matroid, AlgebraConfig::default())
    }

    /// Builds the algebra of `matroid` under `ordering`.
    ///
    /// # Errors
    ///
    /// Returns `InvalidOrdering` if `ordering` is not a permutation of the
    /// ground set.
    pub fn with_ordering<M: Matroid<Element = E>>(matroid: &M, ordering: &[E]) -> Result<Self> {
        Self::with_config(matroid, AlgebraConfig::default().with_ordering(ordering.to_vec()))
    }

    /// Builds the algebra of `matroid` from a full configuration.
    ///
    /// # Errors
    ///
    /// Returns `InvalidOrdering` for a bad ordering, and propagates
    /// matroid and reduction errors.
    pub fn with_config<M: Matroid<Element = E>>(matroid: &M, config: AlgebraConfig<E>) -> Result<Self> {
        let groundset = matroid.groundset();
        let circuits = matroid.circuits();
        let ordering = OrderingIndex::new(&groundset, config.ordering.as_deref())?;
        let table = BrokenCircuitTable::new(&circuits, &ordering)?;

        let mut basis = matroid
            .no_broken_circuits_sets(Some(ordering.elements()))?
            .iter()
            .map(|set| ordering.rank_set(set))
            .collect::<Result<Vec<_>>>()?;
        basis.sort();

        debug!(
            matroid = %matroid,
            ground_set = ordering.len(),
            circuits = circuits.len(),
            broken_circuits = table.len(),
            dimension = basis.len(),
            "built Orlik-Solomon algebra"
        );

        let engine = BasisProductEngine::new(SubsetReducer::new(table, basis.iter().cloned()));
        let reducer = engine.reducer();
        let unit = (*reducer.image(&RankSet::empty())?).clone();
        let generators = ordering
            .elements()
            .iter()
            .map(|x| Ok((*reducer.image(&ordering.rank_set([x])?)?).clone()))
            .collect::<Result<Vec<_>>>()?;

        Ok(Self {
            description: matroid.to_string(),
            ordering,
            basis,
            engine,
            unit,
            generators,
            prefix: config.prefix,
            parallel_threshold: config.parallel_threshold,
        })
    }

    /// The ground set in rank order.
    #[must_use]
    pub fn ordering(&self) -> &[E] {
        self.ordering.elements()
    }

    /// The rank index behind [`Self::ordering`].
    #[must_use]
    pub fn ordering_index(&self) -> &OrderingIndex<E> {
        &self.ordering
    }

    /// The broken-circuit table.
    #[must_use]
    pub fn broken_circuit_table(&self) -> &BrokenCircuitTable {
        self.engine.reducer().table()
    }

    /// The broken circuits as element lists in rank order.
    #[must_use]
    pub fn broken_circuits(&self) -> Vec<Vec<E>> {
        self.broken_circuit_table()
            .iter()
            .map(|bc| self.ordering.to_elements(bc.set()))
            .collect()
    }

    /// The basis indices (NBC sets) in graded order.
    #[must_use]
    pub fn basis(&self) -> &[RankSet] {
        &self.basis
    }

    /// The basis indices as element lists in rank order.
    #[must_use]
    pub fn basis_sets(&self) -> Vec<Vec<E>> {
        self.basis.iter().map(|m| self.ordering.to_elements(m)).collect()
    }

    /// The dimension of the algebra as a free module.
    #[must_use]
    pub fn dimension(&self) -> usize {
        self.basis.len()
    }

    /// The number of basis elements in each degree, starting from 0.
    ///
    /// These are the coefficients of the Poincaré polynomial.
    #[must_use]
    pub fn dimensions_by_degree(&self) -> Vec<usize> {
        let top = self.basis.iter().map(RankSet::len).max();
        let mut dims = vec![0; top.map_or(0, |d| d + 1)];
        for m in &self.basis {
            dims[m.len()] += 1;
        }
        dims
    }

    /// The basis index of the unit, the empty set.
    #[must_use]
    pub fn one_basis(&self) -> RankSet {
        RankSet::empty()
    }

    /// The unit. Zero when the matroid has a loop.
    #[must_use]
    pub fn one(&self) -> OsElement<R> {
        self.unit.clone()
    }

    /// The zero element.
    #[must_use]
    pub fn zero(&self) -> OsElement<R> {
        OsElement::zero()
    }

    /// The basis element indexed by `m`.
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument` if `m` is not a basis index.
    pub fn monomial(&self, m: RankSet) -> Result<OsElement<R>> {
        if self.engine.reducer().is_basis(&m) {
            Ok(OsElement::monomial(m))
        } else {
            Err(AlgebraError::InvalidArgument(format!(
                "{m:?} is not a basis index"
            )))
        }
    }

    /// The basis element indexed by the NBC set `elements`.
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument` if `elements` is not an NBC set.
    pub fn basis_element(&self, elements: &[E]) -> Result<OsElement<R>> {
        let m = self.ordering.rank_set(elements)?;
        self.monomial(m).map_err(|_| {
            AlgebraError::InvalidArgument(format!("{elements:?} is not a basis index"))
        })
    }

    /// The generators `e_x`, one per ground-set element, in rank order.
    #[must_use]
    pub fn algebra_generators(&self) -> Vec<(E, OsElement<R>)> {
        self.ordering
            .elements()
            .iter()
            .cloned()
            .zip(self.generators.iter().cloned())
            .collect()
    }

    /// The generator `e_x`.
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument` if `x` is not in the ground set.
    pub fn generator(&self, x: &E) -> Result<OsElement<R>> {
        self.ordering
            .rank(x)
            .and_then(|r| self.generators.get(r as usize))
            .cloned()
            .ok_or_else(|| AlgebraError::InvalidArgument(format!("{x:?} is not in the ground set")))
    }

    /// The element `e_S` for a subset `S` given in any order.
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument` if `subset` repeats an element or leaves
    /// the ground set.
    pub fn subset_image(&self, subset: &[E]) -> Result<OsElement<R>> {
        let s = self.ordering.rank_set(subset)?;
        Ok((*self.subset_image_ranks(&s)?).clone())
    }

    /// The element `e_S` for a canonical subset.
    ///
    /// # Errors
    ///
    /// Propagates reduction errors.
    pub fn subset_image_ranks(&self, s: &RankSet) -> Result<Arc<OsElement<R>>> {
        self.engine.reducer().image(s)
    }

    /// The wedge product `e_{x1} ∧ … ∧ e_{xk}` in the order listed.
    ///
    /// A repeated element makes the product zero.
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument` if an element is not in the ground set.
    pub fn wedge(&self, factors: &[E]) -> Result<OsElement<R>> {
        let ranks = factors
            .iter()
            .map(|x| {
                self.ordering.rank(x).ok_or_else(|| {
                    AlgebraError::InvalidArgument(format!("{x:?} is not in the ground set"))
                })
            })
            .collect::<Result<Vec<_>>>()?;

        let Some(s) = RankSet::from_ranks(ranks.iter().copied()) else {
            return Ok(OsElement::zero());
        };
        let inversions = ranks
            .iter()
            .enumerate()
            .map(|(i, a)| ranks[i + 1..].iter().filter(|b| *b < a).count())
            .sum();

        let image = self.subset_image_ranks(&s)?;
        Ok(match Sign::from_parity(inversions) {
            Sign::Plus => (*image).clone(),
            Sign::Minus => -&*image,
        })
    }

    /// The product of two basis elements.
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument` if either index is not an NBC set.
    pub fn product_on_basis(&self, a: &RankSet, b: &RankSet) -> Result<Arc<OsElement<R>>> {
        self.engine.product_on_basis(a, b)
    }

    /// The product `x · y`, extended bilinearly from the basis.
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument` if either element has a term outside the
    /// basis.
    pub fn multiply(&self, x: &OsElement<R>, y: &OsElement<R>) -> Result<OsElement<R>> {
        let mut out = OsElement::zero();
        for (a, ca) in x {
            for (b, cb) in y {
                let product = self.engine.product_on_basis(a, b)?;
                out.add_scaled(&product, &(ca.clone() * cb.clone()));
            }
        }
        Ok(out)
    }

    /// The product of `factors` from left to right; the unit if empty.
    ///
    /// # Errors
    ///
    /// Propagates [`Self::multiply`] errors.
    pub fn prod<'a, I>(&self, factors: I) -> Result<OsElement<R>>
    where
        I: IntoIterator<Item = &'a OsElement<R>>,
        R: 'a,
    {
        factors
            .into_iter()
            .try_fold(self.one(), |acc, x| self.multiply(&acc, x))
    }

    /// The degree of a basis element, `|m|`.
    #[must_use]
    pub fn degree_on_basis(&self, m: &RankSet) -> usize {
        m.len()
    }

    /// The degree of a nonzero homogeneous element.
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument` for zero or for mixed degrees.
    pub fn degree(&self, x: &OsElement<R>) -> Result<usize> {
        if x.is_zero() {
            return Err(AlgebraError::InvalidArgument(
                "the zero element has no degree".to_string(),
            ));
        }
        x.homogeneous_degree().ok_or_else(|| {
            AlgebraError::InvalidArgument("element is not homogeneous".to_string())
        })
    }

    /// Counters of the subset reducer's cache.
    #[must_use]
    pub fn cache_stats(&self) -> CacheStats {
        self.engine.reducer().stats()
    }

    /// The prefix printed before basis indices.
    #[must_use]
    pub fn prefix(&self) -> &str {
        &self.prefix
    }
}

impl<E, R: CommutativeRing> fmt::Display for OrlikSolomonAlgebra<E, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Orlik-Solomon algebra of {}", self.description)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::subset::Rank;
    use orsol_matroid::{CircuitMatroid, GraphicMatroid, UniformMatroid};
    use orsol_rings::{FiniteField, Q, Ring, Z};

    fn set(ranks: &[Rank]) -> RankSet {
        RankSet::from_ranks(ranks.iter().copied()).unwrap()
    }

    fn element(terms: &[(&[Rank], i64)]) -> OsElement<Z> {
        OsElement::from_terms(terms.iter().map(|(s, c)| (set(s), Z::new(*c))))
    }

    fn u34() -> OrlikSolomonAlgebra<usize, Z> {
        OrlikSolomonAlgebra::new(&UniformMatroid::new(3, 4)).unwrap()
    }

    #[test]
    fn test_uniform_3_4() {
        let os = u34();
        assert_eq!(os.dimension(), 14);
        assert_eq!(os.dimensions_by_degree(), vec![1, 4, 6, 3]);
        assert_eq!(os.broken_circuits(), vec![vec![1, 2, 3]]);
        let bc = os.broken_circuit_table().iter().next().unwrap();
        assert_eq!(bc.removed(), &[0]);
        assert!(!os.basis().contains(&set(&[1, 2, 3])));
    }

    #[test]
    fn test_uniform_3_4_triple_product() {
        let os = u34();
        let g: Vec<_> = os.algebra_generators().into_iter().map(|(_, x)| x).collect();
        let x = os.prod([&g[1], &g[2], &g[3]]).unwrap();
        assert_eq!(
            x,
            element(&[(&[0, 2, 3], 1), (&[0, 1, 2], 1), (&[0, 1, 3], -1)])
        );
        assert_eq!(os.subset_image(&[3, 2, 1]).unwrap(), x);
    }

    #[test]
    fn test_generators_are_subset_images() {
        let os = u34();
        for (x, g) in os.algebra_generators() {
            assert_eq!(os.subset_image(&[x]).unwrap(), g);
            assert_eq!(os.generator(&x).unwrap(), g);
        }
        assert!(matches!(
            os.generator(&9),
            Err(AlgebraError::InvalidArgument(_))
        ));
    }

    #[test]
    fn test_rank_one_generators_coincide() {
        let os: OrlikSolomonAlgebra<usize, Q> =
            OrlikSolomonAlgebra::new(&UniformMatroid::new(1, 3)).unwrap();
        assert_eq!(os.dimension(), 2);
        for (_, g) in os.algebra_generators() {
            assert_eq!(g, OsElement::monomial(set(&[0])));
        }
    }

    #[test]
    fn test_free_matroid() {
        let os: OrlikSolomonAlgebra<usize, Z> =
            OrlikSolomonAlgebra::new(&UniformMatroid::new(2, 2)).unwrap();
        assert_eq!(os.dimensions_by_degree(), vec![1, 2, 1]);
        let g = os.algebra_generators();
        let x = os.multiply(&g[1].1, &g[0].1).unwrap();
        assert_eq!(x, element(&[(&[0, 1], -1)]));
    }

    #[test]
    fn test_complete_graph_dimensions() {
        let os: OrlikSolomonAlgebra<usize, Z> =
            OrlikSolomonAlgebra::new(&GraphicMatroid::complete(4)).unwrap();
        assert_eq!(os.dimensions_by_degree(), vec![1, 6, 11, 6]);
        assert_eq!(os.dimension(), 24);
    }

    #[test]
    fn test_circuits_vanish_and_nbc_sets_are_monomials() {
        let m = GraphicMatroid::complete(4);
        let os: OrlikSolomonAlgebra<usize, Z> = OrlikSolomonAlgebra::new(&m).unwrap();
        for circuit in m.circuits() {
            assert!(os.subset_image(&circuit).unwrap().is_zero(), "{circuit:?}");
        }
        for m in os.basis() {
            let elements = os.ordering_index().to_elements(m);
            assert_eq!(os.subset_image(&elements).unwrap(), OsElement::monomial(m.clone()));
        }
    }

    #[test]
    fn test_graded_commutativity() {
        let os: OrlikSolomonAlgebra<usize, Z> =
            OrlikSolomonAlgebra::new(&GraphicMatroid::wheel(3)).unwrap();
        for a in os.basis() {
            for b in os.basis() {
                let ab = os.product_on_basis(a, b).unwrap();
                let ba = os.product_on_basis(b, a).unwrap();
                let sign = Sign::from_parity(a.len() * b.len());
                assert_eq!(*ab, ba.scale(&sign.to_ring()), "{a:?} {b:?}");
                for (m, _) in ab.iter() {
                    assert_eq!(m.len(), a.len() + b.len());
                }
            }
        }
    }

    #[test]
    fn test_unit_laws_and_squares() {
        let os = u34();
        let one = os.one();
        assert_eq!(one, OsElement::monomial(os.one_basis()));
        for m in os.basis() {
            let x = os.monomial(m.clone()).unwrap();
            assert_eq!(os.multiply(&one, &x).unwrap(), x);
            assert_eq!(os.multiply(&x, &one).unwrap(), x);
            if !m.is_empty() {
                assert!(os.product_on_basis(m, m).unwrap().is_zero());
            }
        }
        let (_, g) = &os.algebra_generators()[2];
        assert!(os.multiply(g, g).unwrap().is_zero());
    }

    #[test]
    fn test_wedge_signs() {
        let os = u34();
        assert_eq!(os.wedge(&[2, 0]).unwrap(), element(&[(&[0, 2], -1)]));
        assert_eq!(os.wedge(&[0, 2]).unwrap(), element(&[(&[0, 2], 1)]));
        assert!(os.wedge(&[1, 1]).unwrap().is_zero());
        assert_eq!(os.wedge(&[]).unwrap(), os.one());
        assert!(matches!(os.wedge(&[5]), Err(AlgebraError::InvalidArgument(_))));
    }

    #[test]
    fn test_memoization_ignores_input_order() {
        let os = u34();
        let first = os.subset_image(&[3, 1, 2]).unwrap();
        let before = os.cache_stats();
        let second = os.subset_image(&[2, 3, 1]).unwrap();
        let after = os.cache_stats();
        assert_eq!(first, second);
        assert_eq!(after.derivations, before.derivations);
        assert_eq!(after.hits, before.hits + 1);
        assert_eq!(after.entries, before.entries);
    }

    #[test]
    fn test_degree() {
        let os = u34();
        let g = os.algebra_generators();
        assert_eq!(os.degree(&g[0].1).unwrap(), 1);
        assert_eq!(os.degree_on_basis(&set(&[0, 1])), 2);
        assert!(os.degree(&os.zero()).is_err());
        let mixed = &os.one() + &g[0].1;
        assert!(matches!(os.degree(&mixed), Err(AlgebraError::InvalidArgument(_))));
    }

    #[test]
    fn test_custom_ordering() {
        let m = UniformMatroid::new(3, 4);
        let os: OrlikSolomonAlgebra<usize, Z> =
            OrlikSolomonAlgebra::with_ordering(&m, &[3, 2, 1, 0]).unwrap();
        assert_eq!(os.ordering(), &[3, 2, 1, 0]);
        assert_eq!(os.broken_circuits(), vec![vec![2, 1, 0]]);
        assert_eq!(os.dimension(), 14);
        assert!(os.subset_image(&[0, 1, 2, 3]).unwrap().is_zero());

        assert!(matches!(
            OrlikSolomonAlgebra::<usize, Z>::with_ordering(&m, &[0, 1, 2]),
            Err(AlgebraError::InvalidOrdering(_))
        ));
        assert!(matches!(
            OrlikSolomonAlgebra::<usize, Z>::with_ordering(&m, &[0, 1, 2, 2]),
            Err(AlgebraError::InvalidOrdering(_))
        ));
    }

    #[test]
    fn test_monomial_checks_basis() {
        let os = u34();
        assert_eq!(os.monomial(set(&[0, 3])).unwrap(), OsElement::monomial(set(&[0, 3])));
        assert!(matches!(
            os.monomial(RankSet::singleton(99)),
            Err(AlgebraError::InvalidArgument(_))
        ));
        assert!(matches!(
            os.monomial(set(&[1, 2, 3])),
            Err(AlgebraError::InvalidArgument(_))
        ));
    }

    #[test]
    fn test_basis_element_and_bad_subsets() {
        let os = u34();
        assert_eq!(
            os.basis_element(&[2, 0]).unwrap(),
            OsElement::monomial(set(&[0, 2]))
        );
        assert!(os.basis_element(&[1, 2, 3]).is_err());
        assert!(matches!(
            os.subset_image(&[0, 0]),
            Err(AlgebraError::InvalidArgument(_))
        ));
        assert!(matches!(
            os.subset_image(&[4]),
            Err(AlgebraError::InvalidArgument(_))
        ));
        assert!(matches!(
            os.product_on_basis(&set(&[1, 2, 3]), &set(&[0])),
            Err(AlgebraError::InvalidArgument(_))
        ));
    }

    #[test]
    fn test_loop_collapses_everything() {
        let m = CircuitMatroid::new(vec![0, 1], vec![vec![0]]).unwrap();
        let os: OrlikSolomonAlgebra<i32, Z> = OrlikSolomonAlgebra::new(&m).unwrap();
        assert_eq!(os.dimension(), 0);
        assert!(os.one().is_zero());
        assert!(os.generator(&1).unwrap().is_zero());
        assert!(os.subset_image(&[0, 1]).unwrap().is_zero());
    }

    fn top_relation<R: CommutativeRing>() -> OsElement<R> {
        let os: OrlikSolomonAlgebra<usize, R> =
            OrlikSolomonAlgebra::new(&UniformMatroid::new(2, 3)).unwrap();
        os.subset_image(&[1, 2]).unwrap()
    }

    #[test]
    fn test_generic_over_commutative_rings() {
        // {1, 2} = {0, 2} - {0, 1} over every coefficient ring.
        let expected = element(&[(&[0, 1], -1), (&[0, 2], 1)]);
        assert_eq!(top_relation::<Z>(), expected);
        assert_eq!(
            top_relation::<Q>(),
            expected.map_coefficients(|c| Q::from_integer(c.to_i64().unwrap()))
        );
        let over_f2 = top_relation::<FiniteField<2>>();
        assert_eq!(over_f2.len(), 2);
        assert!(over_f2.iter().all(|(_, c)| c.is_one()));
    }

    #[test]
    fn test_finite_field_coefficients() {
        let os: OrlikSolomonAlgebra<usize, FiniteField<2>> =
            OrlikSolomonAlgebra::new(&UniformMatroid::new(3, 4)).unwrap();
        let x = os.subset_image(&[1, 2, 3]).unwrap();
        // Signs disappear in characteristic 2.
        assert_eq!(x.len(), 3);
        assert!(x.iter().all(|(_, c)| c.is_one()));
    }

    #[test]
    fn test_display() {
        assert_eq!(
            u34().to_string(),
            "Orlik-Solomon algebra of U(3, 4): uniform matroid of rank 3 on 4 elements"
        );
    }
}
