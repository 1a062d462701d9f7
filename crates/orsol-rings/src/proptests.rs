//! Property-based tests for the coefficient rings.

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use crate::{Field, FiniteField, Ring, Q, Z};

    type F101 = FiniteField<101>;

    fn small_int() -> impl Strategy<Value = i64> {
        -1000i64..1000i64
    }

    fn non_zero_int() -> impl Strategy<Value = i64> {
        prop_oneof![(-1000i64..=-1i64), (1i64..=1000i64)]
    }

    proptest! {
        #[test]
        fn integer_distributive(a in small_int(), b in small_int(), c in small_int()) {
            let (a, b, c) = (Z::new(a), Z::new(b), Z::new(c));
            prop_assert_eq!(
                a.clone() * (b.clone() + c.clone()),
                a.clone() * b + a * c
            );
        }

        #[test]
        fn integer_display_round_trip(a in any::<i64>()) {
            let z = Z::new(a);
            prop_assert_eq!(z.to_string().parse::<Z>(), Ok(z));
        }

        #[test]
        fn rational_display_round_trip(n in small_int(), d in non_zero_int()) {
            let q = Q::new(n, d);
            prop_assert_eq!(q.to_string().parse::<Q>(), Ok(q));
        }

        #[test]
        fn rational_inverse(n in non_zero_int(), d in non_zero_int()) {
            let q = Q::new(n, d);
            let inv = q.inv().unwrap();
            prop_assert!((q * inv).is_one());
        }

        #[test]
        fn prime_field_matches_integers(a in small_int(), b in small_int()) {
            let expected = F101::from_signed(a * b + a - b);
            let (fa, fb) = (F101::from_signed(a), F101::from_signed(b));
            prop_assert_eq!(fa * fb + fa - fb, expected);
        }

        #[test]
        fn from_i64_is_ring_morphism(a in small_int(), b in small_int()) {
            prop_assert_eq!(Q::from_i64(a + b), Q::from_i64(a) + Q::from_i64(b));
            prop_assert_eq!(Z::from_i64(a * b), Z::from_i64(a) * Z::from_i64(b));
            prop_assert_eq!(F101::one().mul_by_scalar(a), F101::from_i64(a));
        }
    }
}
