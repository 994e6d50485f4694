//! Property-based tests for nonnegative solving.

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use crate::{solve_nonnegative, LinearEquation, SolveError, SolveOptions};

    fn options() -> SolveOptions {
        SolveOptions::default().with_bound_limit(30).with_verbose(false)
    }

    fn non_zero_coeff() -> impl Strategy<Value = i64> {
        prop_oneof![(-12i64..=-1i64), (1i64..=12i64)]
    }

    fn coefficients() -> impl Strategy<Value = Vec<i64>> {
        prop::collection::vec(non_zero_coeff(), 1..=3)
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(48))]

        #[test]
        fn solutions_satisfy_the_simplified_equation(
            coeffs in coefficients(),
            constant in -20i64..40i64,
        ) {
            let equation = LinearEquation::from_i64(&coeffs, constant);
            let normalized = equation.normalize().unwrap();
            let result = equation.solve_nonnegative(&options()).unwrap();

            prop_assert_eq!(result.variables(), normalized.variables());
            for tuple in result.solutions() {
                prop_assert_eq!(tuple.len(), normalized.num_vars());
                prop_assert!(tuple.iter().all(|v| !v.is_negative()));
                prop_assert!(normalized.is_satisfied_by(tuple));
            }
        }

        #[test]
        fn solutions_are_strictly_ascending(
            coeffs in coefficients(),
            constant in 0i64..40i64,
        ) {
            let result = solve_nonnegative(&coeffs, constant, None, &options()).unwrap();
            prop_assert!(result.solutions().windows(2).all(|w| w[0] < w[1]));
        }

        #[test]
        fn zero_coefficient_always_fails(
            mut coeffs in coefficients(),
            position in any::<prop::sample::Index>(),
            constant in -50i64..50i64,
        ) {
            let index = position.index(coeffs.len() + 1);
            coeffs.insert(index, 0);
            let first_zero = coeffs.iter().position(|&a| a == 0).unwrap();

            let result = solve_nonnegative(&coeffs, constant, None, &options());
            prop_assert_eq!(result, Err(SolveError::ZeroCoefficient { index: first_zero }));
        }

        #[test]
        fn repeated_coefficient_drops_later_variable(
            coeff in non_zero_coeff(),
            other in non_zero_coeff(),
            constant in 0i64..30i64,
        ) {
            prop_assume!(coeff != other);
            let names = ["p", "q", "r"];
            let result = solve_nonnegative(
                &[coeff, other, coeff],
                constant,
                Some(&names[..]),
                &options(),
            )
            .unwrap();

            prop_assert_eq!(result.variables(), ["p", "q"]);
            prop_assert!(result.solutions().iter().all(|t| t.len() == 2));
        }
    }
}
