//! Property-based tests for module arithmetic.

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use crate::LinearCombination;
    use orsol_rings::{Ring, Z};

    type Comb = LinearCombination<u8, Z>;

    fn combination() -> impl Strategy<Value = Comb> {
        prop::collection::vec((0u8..8, -5i64..5), 0..8)
            .prop_map(|terms| Comb::from_terms(terms.into_iter().map(|(k, c)| (k, Z::new(c)))))
    }

    proptest! {
        #[test]
        fn add_commutative(x in combination(), y in combination()) {
            prop_assert_eq!(&x + &y, &y + &x);
        }

        #[test]
        fn add_associative(x in combination(), y in combination(), z in combination()) {
            prop_assert_eq!(&(&x + &y) + &z, &x + &(&y + &z));
        }

        #[test]
        fn sub_is_inverse(x in combination(), y in combination()) {
            prop_assert_eq!(&(&x + &y) - &y, x);
        }

        #[test]
        fn scale_distributes(x in combination(), y in combination(), c in -5i64..5) {
            let c = Z::new(c);
            prop_assert_eq!((&x + &y).scale(&c), &x.scale(&c) + &y.scale(&c));
        }

        #[test]
        fn add_scaled_matches_scale(x in combination(), y in combination(), c in -5i64..5) {
            let c = Z::new(c);
            let mut acc = x.clone();
            acc.add_scaled(&y, &c);
            prop_assert_eq!(acc, &x + &y.scale(&c));
        }

        #[test]
        fn no_stored_zeros(x in combination(), y in combination()) {
            let sum = &x - &y;
            prop_assert!(sum.iter().all(|(_, c)| !c.is_zero()));
        }
    }
}
