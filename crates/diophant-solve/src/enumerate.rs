//! Nonnegative instantiation of parametric solutions.
//!
//! Each free parameter is tried over `[-B, B]` and every point of the
//! hypercube `[-B, B]^k` is substituted, so the cost is `(2B + 1)^k`
//! evaluations per parametric solution. `B` comes from a [`BoundPolicy`]
//! and is a heuristic: solutions needing a parameter outside the range are
//! not found.

use std::collections::BTreeSet;

use itertools::Itertools;

use diophant_core::ParametricSolution;
use diophant_integers::Integer;

use crate::error::SolveError;
use crate::options::BoundPolicy;

/// Collects the nonnegative integer instances of `solutions`.
///
/// Returns the distinct instances in ascending lexicographic order.
/// `coefficients` and `constant` are those of the normalized equation; they
/// only feed the search bound.
///
/// # Errors
///
/// Propagates [`SolveError::BoundOverflow`] from the bound policy.
pub fn enumerate_nonnegative(
    solutions: &[ParametricSolution],
    coefficients: &[Integer],
    constant: &Integer,
    bound: &BoundPolicy,
) -> Result<Vec<Vec<Integer>>, SolveError> {
    let mut accepted = BTreeSet::new();

    for solution in solutions {
        let params = solution.free_symbols();

        if params.is_empty() {
            if let Some(values) = solution.as_fixed() {
                if is_nonnegative(&values) {
                    accepted.insert(values);
                }
            }
            continue;
        }

        let bound = bound.search_bound(constant, coefficients)?;
        let bound = i64::try_from(bound).map_err(|_| SolveError::BoundOverflow {
            bound: bound.to_string(),
        })?;
        tracing::debug!(
            solution = %solution,
            params = params.len(),
            bound,
            "enumerating parameter hypercube"
        );

        // Row i: (constant, coefficient of each parameter) of component i.
        let rows: Vec<(Integer, Vec<Integer>)> = solution
            .components()
            .iter()
            .map(|c| {
                (
                    c.constant_term().clone(),
                    params.iter().map(|p| c.coefficient(p)).collect(),
                )
            })
            .collect();

        let before = accepted.len();
        for point in (0..params.len())
            .map(|_| -bound..=bound)
            .multi_cartesian_product()
        {
            let point: Vec<Integer> = point.into_iter().map(Integer::new).collect();
            if let Some(values) = instantiate_nonnegative(&rows, &point) {
                accepted.insert(values);
            }
        }
        tracing::debug!(found = accepted.len() - before, "hypercube exhausted");
    }

    Ok(accepted.into_iter().collect())
}

/// Evaluates every row at `point`, bailing out at the first negative value.
fn instantiate_nonnegative(rows: &[(Integer, Vec<Integer>)], point: &[Integer]) -> Option<Vec<Integer>> {
    rows.iter()
        .map(|(constant, coeffs)| {
            let value = coeffs
                .iter()
                .zip(point)
                .fold(constant.clone(), |acc, (k, t)| acc + k * t);
            (!value.is_negative()).then_some(value)
        })
        .collect()
}

fn is_nonnegative(values: &[Integer]) -> bool {
    values.iter().all(|v| !v.is_negative())
}
