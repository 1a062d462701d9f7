//! Property-based tests for the algebra laws.

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use orsol_matroid::{GraphicMatroid, Matroid, UniformMatroid};
    use orsol_rings::{FiniteField, Z};

    use crate::{AlgebraConfig, OrlikSolomonAlgebra, OsElement, Sign};

    type F7 = FiniteField<7>;

    /// A uniform matroid of size at most 5 with a shuffled ordering.
    fn ordered_uniform() -> impl Strategy<Value = (UniformMatroid, Vec<usize>)> {
        (1usize..=5)
            .prop_flat_map(|n| (0..=n, Just((0..n).collect::<Vec<_>>()).prop_shuffle()))
            .prop_map(|(r, ordering)| (UniformMatroid::new(r, ordering.len()), ordering))
    }

    fn k4_ordering() -> impl Strategy<Value = Vec<usize>> {
        Just((0..6).collect::<Vec<usize>>()).prop_shuffle()
    }

    fn build<M: Matroid<Element = usize>>(m: &M, ordering: &[usize]) -> OrlikSolomonAlgebra<usize, Z> {
        OrlikSolomonAlgebra::with_config(m, AlgebraConfig::default().with_ordering(ordering.to_vec()))
            .unwrap()
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(48))]

        #[test]
        fn circuits_vanish_and_nbc_sets_are_monomials((m, ordering) in ordered_uniform()) {
            let os = build(&m, &ordering);
            for circuit in m.circuits() {
                prop_assert!(os.subset_image(&circuit).unwrap().is_zero());
            }
            for nbc in m.no_broken_circuits_sets(Some(&ordering)).unwrap() {
                let m = os.ordering_index().rank_set(&nbc).unwrap();
                prop_assert_eq!(os.subset_image(&nbc).unwrap(), OsElement::monomial(m));
            }
        }

        #[test]
        fn products_are_graded_commutative((m, ordering) in ordered_uniform()) {
            let os = build(&m, &ordering);
            for a in os.basis() {
                for b in os.basis() {
                    let ab = os.product_on_basis(a, b).unwrap();
                    let ba = os.product_on_basis(b, a).unwrap();
                    let sign = Sign::from_parity(a.len() * b.len());
                    prop_assert_eq!(&*ab, &ba.scale(&sign.to_ring()));
                    if !ab.is_zero() {
                        prop_assert_eq!(ab.homogeneous_degree(), Some(a.len() + b.len()));
                    }
                }
            }
        }

        #[test]
        fn generators_associate(
            ordering in k4_ordering(),
            (i, j, k) in (0usize..6, 0usize..6, 0usize..6),
        ) {
            let os = build(&GraphicMatroid::complete(4), &ordering);
            let g = os.algebra_generators();
            let (x, y, z) = (&g[i].1, &g[j].1, &g[k].1);
            let left = os.multiply(&os.multiply(x, y).unwrap(), z).unwrap();
            let right = os.multiply(x, &os.multiply(y, z).unwrap()).unwrap();
            prop_assert_eq!(&left, &right);
            prop_assert_eq!(left, os.wedge(&[g[i].0, g[j].0, g[k].0]).unwrap());
        }

        #[test]
        fn wedge_matches_generator_products(
            ordering in k4_ordering(),
            factors in Just((0..6).collect::<Vec<usize>>()).prop_shuffle().prop_map(|mut v| { v.truncate(3); v }),
        ) {
            let os = build(&GraphicMatroid::complete(4), &ordering);
            let gens: Vec<_> = factors.iter().map(|x| os.generator(x).unwrap()).collect();
            prop_assert_eq!(os.prod(&gens).unwrap(), os.wedge(&factors).unwrap());
        }

        #[test]
        fn reduction_commutes_with_coefficient_maps(
            ordering in k4_ordering(),
            subset in proptest::sample::subsequence((0..6).collect::<Vec<usize>>(), 0..=4),
        ) {
            let m = GraphicMatroid::complete(4);
            let over_z = build(&m, &ordering);
            let over_f7: OrlikSolomonAlgebra<usize, F7> = OrlikSolomonAlgebra::with_ordering(&m, &ordering).unwrap();
            let reduced = over_z.subset_image(&subset).unwrap();
            let mapped = reduced.map_coefficients(|c| F7::from_signed(c.to_i64().unwrap()));
            prop_assert_eq!(mapped, over_f7.subset_image(&subset).unwrap());
        }
    }
}
