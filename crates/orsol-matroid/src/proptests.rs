//! Property-based tests for NBC enumeration.

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use crate::subsets::is_sorted_subset;
    use crate::{GraphicMatroid, Matroid, UniformMatroid};

    fn binomial(n: usize, k: usize) -> usize {
        if k > n {
            return 0;
        }
        (0..k).fold(1, |acc, i| acc * (n - i) / (i + 1))
    }

    fn uniform() -> impl Strategy<Value = UniformMatroid> {
        (1usize..7).prop_flat_map(|n| (0..=n, Just(n))).prop_map(|(r, n)| UniformMatroid::new(r, n))
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(64))]

        #[test]
        fn uniform_nbc_count(m in uniform()) {
            let (r, n) = (m.rank(), m.size());
            let expected = if r == n {
                1 << n
            } else {
                (0..r).map(|k| binomial(n, k)).sum::<usize>() + binomial(n - 1, r.saturating_sub(1))
                    - usize::from(r == 0)
            };
            prop_assert_eq!(m.no_broken_circuits_sets(None).unwrap().len(), expected);
        }

        #[test]
        fn nbc_count_independent_of_ordering(
            ordering in Just((0..6).collect::<Vec<usize>>()).prop_shuffle()
        ) {
            let m = GraphicMatroid::complete(4);
            let default = m.no_broken_circuits_sets(None).unwrap().len();
            let permuted = m.no_broken_circuits_sets(Some(&ordering)).unwrap();
            prop_assert_eq!(permuted.len(), default);
            prop_assert_eq!(default, 24);
        }

        #[test]
        fn nbc_sets_are_independent_and_avoid_broken_circuits(
            ordering in Just((0..6).collect::<Vec<usize>>()).prop_shuffle()
        ) {
            let m = GraphicMatroid::wheel(3);
            let position = |x: &usize| ordering.iter().position(|y| y == x).unwrap();
            let broken = m.broken_circuits(Some(&ordering)).unwrap();

            for set in m.no_broken_circuits_sets(Some(&ordering)).unwrap() {
                prop_assert_eq!(m.rank_of(&set), set.len());
                let ranks: Vec<usize> = set.iter().map(position).collect();
                for bc in &broken {
                    let bc_ranks: Vec<usize> = bc.iter().map(position).collect();
                    prop_assert!(!is_sorted_subset(&bc_ranks, &ranks));
                }
            }
        }
    }
}
