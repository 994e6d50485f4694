//! Property-based tests for arbitrary precision arithmetic.

#[cfg(test)]
mod tests {
    use num_traits::Zero;
    use proptest::prelude::*;

    use crate::Integer;

    // Strategy for generating small integers
    fn small_int() -> impl Strategy<Value = i64> {
        -1000i64..1000i64
    }

    // Strategy for generating non-zero integers
    fn non_zero_int() -> impl Strategy<Value = i64> {
        prop_oneof![(-1000i64..=-1i64), (1i64..=1000i64)]
    }

    proptest! {
        #[test]
        fn integer_add_commutative(a in small_int(), b in small_int()) {
            let a = Integer::new(a);
            let b = Integer::new(b);
            prop_assert_eq!(a.clone() + b.clone(), b + a);
        }

        #[test]
        fn integer_distributive(a in small_int(), b in small_int(), c in small_int()) {
            let a = Integer::new(a);
            let b = Integer::new(b);
            let c = Integer::new(c);
            prop_assert_eq!(
                a.clone() * (b.clone() + c.clone()),
                a.clone() * b + a * c
            );
        }

        #[test]
        fn integer_additive_inverse(a in small_int()) {
            let a = Integer::new(a);
            let neg_a = -a.clone();
            prop_assert!((a + neg_a).is_zero());
        }

        #[test]
        fn gcd_divides_both(a in non_zero_int(), b in non_zero_int()) {
            let a = Integer::new(a);
            let b = Integer::new(b);
            let g = a.gcd(&b);

            prop_assert!(a.is_divisible_by(&g));
            prop_assert!(b.is_divisible_by(&g));
        }

        #[test]
        fn extended_gcd_bezout(a in small_int(), b in small_int()) {
            let a = Integer::new(a);
            let b = Integer::new(b);
            let (g, s, t) = a.extended_gcd(&b);

            prop_assert!(!g.is_negative());
            prop_assert_eq!(&g, &a.gcd(&b));
            prop_assert_eq!(s * &a + t * &b, g);
        }

        #[test]
        fn floor_div_matches_primitive(a in small_int(), b in non_zero_int()) {
            let q = Integer::new(a).floor_div(&Integer::new(b));
            prop_assert_eq!(q.to_i64(), Some(a.div_euclid(b) - i64::from(b < 0 && a.rem_euclid(b) != 0)));
        }
    }
}
