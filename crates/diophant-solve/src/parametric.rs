//! General integer solution of a linear Diophantine equation.
//!
//! With `a * U = (g, 0, ..., 0)` for a unimodular `U`, substituting
//! `x = U * y` turns the equation into `g * y_0 = c`. It is solvable over
//! the integers iff `g | c`, and then
//!
//! ```text
//! x = (c/g) * U[:, 0] + t_0 * U[:, 1] + ... + t_{n-2} * U[:, n-1]
//! ```
//!
//! ranges over every integer solution exactly once as `t` ranges over
//! `Z^(n-1)`.

use diophant_core::{LinearExpr, ParametricSolution, SymbolTable};
use diophant_linalg::row_hermite_form;

use crate::equation::NormalizedEquation;

/// Returns the integer-parametrized solution family of `equation`.
///
/// The family is empty when the equation has no integer solution, and
/// otherwise holds a single tuple with `n - 1` fresh parameters drawn from
/// `symbols`.
#[must_use]
pub fn diophantine(
    equation: &NormalizedEquation,
    symbols: &mut SymbolTable,
) -> Vec<ParametricSolution> {
    let coefficients = equation.coefficients();
    let n = coefficients.len();
    if n == 0 {
        return Vec::new();
    }

    let form = row_hermite_form(coefficients);
    debug_assert!(form.is_unimodular());

    let Some(scale) = equation.constant().div_exact(&form.gcd) else {
        return Vec::new();
    };

    let params = symbols.fresh_many(n - 1);
    let transform = &form.transform;

    let components = (0..n)
        .map(|i| {
            LinearExpr::from_terms(
                &transform[(i, 0)] * &scale,
                params
                    .iter()
                    .enumerate()
                    .map(|(j, param)| (transform[(i, j + 1)].clone(), param.clone())),
            )
        })
        .collect();

    vec![ParametricSolution::new(components)]
}
