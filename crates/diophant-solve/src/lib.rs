//! Nonnegative solutions of linear Diophantine equations.
//!
//! Given `a_1*x_1 + ... + a_n*x_n = c`, [`solve_nonnegative`] returns the
//! nonnegative integer tuples `(x_1, ..., x_n)` satisfying it, in three
//! stages:
//!
//! - **Normalize**: reject zero coefficients and drop every variable whose
//!   coefficient repeats an earlier one ([`LinearEquation::normalize`])
//! - **Parametrize**: compute the general integer solution as affine
//!   expressions in free parameters ([`diophantine`])
//! - **Enumerate**: substitute every parameter point in a bounded hypercube
//!   and keep the nonnegative results ([`enumerate_nonnegative`])
//!
//! # Completeness
//!
//! The parameter range comes from a [`BoundPolicy`] heuristic. Every tuple
//! returned is a genuine nonnegative solution, but solutions that need a
//! parameter beyond the bound are missed, and the result does not tell the
//! two apart.
//!
//! # Example
//!
//! ```
//! use diophant_solve::{solve_nonnegative, SolveOptions};
//!
//! let options = SolveOptions::default().with_verbose(false);
//! let result = solve_nonnegative(&[5, 5], 10, Some(&["a", "b"][..]), &options).unwrap();
//!
//! assert_eq!(result.variables(), ["a"]);
//! assert_eq!(result.len(), 1);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod enumerate;
pub mod equation;
pub mod error;
pub mod options;
pub mod parametric;
pub mod present;

#[cfg(test)]
mod proptests;

use diophant_core::SymbolTable;
use diophant_integers::Integer;

pub use enumerate::enumerate_nonnegative;
pub use equation::{LinearEquation, NormalizedEquation};
pub use error::SolveError;
pub use options::{BoundPolicy, SolveOptions, DEFAULT_BOUND_LIMIT};
pub use parametric::diophantine;
pub use present::SetNotation;

/// Sorted nonnegative solutions together with the variables they assign.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NonnegativeSolutions {
    solutions: Vec<Vec<Integer>>,
    variables: Vec<String>,
}

impl NonnegativeSolutions {
    /// The solution tuples, strictly ascending.
    #[must_use]
    pub fn solutions(&self) -> &[Vec<Integer>] {
        &self.solutions
    }

    /// Variable names after simplification; one per tuple component.
    #[must_use]
    pub fn variables(&self) -> &[String] {
        &self.variables
    }

    /// Number of solutions found.
    #[must_use]
    pub fn len(&self) -> usize {
        self.solutions.len()
    }

    /// Returns true if no solution was found.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.solutions.is_empty()
    }

    /// Iterates over the solution tuples.
    pub fn iter(&self) -> std::slice::Iter<'_, Vec<Integer>> {
        self.solutions.iter()
    }

    /// Solutions as machine integers, or `None` if any component overflows.
    #[must_use]
    pub fn to_i64(&self) -> Option<Vec<Vec<i64>>> {
        self.solutions
            .iter()
            .map(|tuple| tuple.iter().map(Integer::to_i64).collect())
            .collect()
    }

    /// Set-notation rendering labeled with the variable names.
    #[must_use]
    pub fn set_notation(&self) -> SetNotation<'_> {
        SetNotation::new(&self.solutions, &self.variables)
    }

    /// Splits into `(solutions, variables)`.
    #[must_use]
    pub fn into_parts(self) -> (Vec<Vec<Integer>>, Vec<String>) {
        (self.solutions, self.variables)
    }
}

impl<'a> IntoIterator for &'a NonnegativeSolutions {
    type Item = &'a Vec<Integer>;
    type IntoIter = std::slice::Iter<'a, Vec<Integer>>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl LinearEquation {
    /// Finds the nonnegative integer solutions of this equation.
    ///
    /// # Errors
    ///
    /// Fails if the equation does not normalize (see
    /// [`LinearEquation::normalize`]) or the search bound overflows.
    pub fn solve_nonnegative(
        &self,
        options: &SolveOptions,
    ) -> Result<NonnegativeSolutions, SolveError> {
        let equation = self.normalize()?;
        if equation.was_simplified() && options.verbose {
            tracing::info!(
                dropped = ?equation.dropped(),
                equation = %equation,
                "simplified equation due to duplicate coefficients"
            );
        }

        let mut symbols = SymbolTable::new();
        for name in equation.variables() {
            symbols.reserve(name);
        }

        let family = parametric::diophantine(&equation, &mut symbols);
        if options.verbose {
            match family.as_slice() {
                [] => tracing::info!("equation has no integer solutions"),
                [solution] => tracing::info!(%solution, "analytical solution"),
                _ => {
                    let family: Vec<String> = family.iter().map(ToString::to_string).collect();
                    tracing::info!(?family, "analytical solutions");
                }
            }
        }

        let solutions = enumerate::enumerate_nonnegative(
            &family,
            equation.coefficients(),
            equation.constant(),
            &options.bound,
        )?;
        debug_assert!(solutions.iter().all(|s| equation.is_satisfied_by(s)));

        Ok(NonnegativeSolutions {
            solutions,
            variables: equation.variables().to_vec(),
        })
    }
}

/// Finds the nonnegative integer solutions of
/// `coefficients[0]*x_1 + ... = constant`.
///
/// `variables` names the unknowns (default `x1, ..., xn`). Variables whose
/// coefficient repeats an earlier one are dropped, so the returned names
/// and tuple width can be shorter than `coefficients`.
///
/// # Errors
///
/// - [`SolveError::EmptyEquation`] for an empty coefficient list
/// - [`SolveError::ZeroCoefficient`] if any coefficient is zero
/// - [`SolveError::VariableCountMismatch`] if the name count is wrong
/// - [`SolveError::BoundOverflow`] if the search bound is unrepresentable
pub fn solve_nonnegative(
    coefficients: &[i64],
    constant: i64,
    variables: Option<&[&str]>,
    options: &SolveOptions,
) -> Result<NonnegativeSolutions, SolveError> {
    let mut equation = LinearEquation::from_i64(coefficients, constant);
    if let Some(names) = variables {
        equation = equation.with_variables(names.iter().copied());
    }
    equation.solve_nonnegative(options)
}
