//! Linear equations and their normalization.

use std::fmt;

use hashbrown::HashSet;
use num_traits::{One, Zero};

use diophant_integers::Integer;

use crate::error::SolveError;

/// The equation `a_1*x_1 + ... + a_n*x_n = c` as supplied by the caller.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LinearEquation {
    coefficients: Vec<Integer>,
    constant: Integer,
    variables: Option<Vec<String>>,
}

impl LinearEquation {
    /// Creates an equation with default variable names `x1, ..., xn`.
    #[must_use]
    pub fn new(coefficients: Vec<Integer>, constant: Integer) -> Self {
        Self {
            coefficients,
            constant,
            variables: None,
        }
    }

    /// Convenience constructor from machine integers.
    #[must_use]
    pub fn from_i64(coefficients: &[i64], constant: i64) -> Self {
        Self::new(
            coefficients.iter().copied().map(Integer::new).collect(),
            Integer::new(constant),
        )
    }

    /// Names the variables, one per coefficient.
    #[must_use]
    pub fn with_variables<S: Into<String>>(mut self, names: impl IntoIterator<Item = S>) -> Self {
        self.variables = Some(names.into_iter().map(Into::into).collect());
        self
    }

    /// The coefficients, in order.
    #[must_use]
    pub fn coefficients(&self) -> &[Integer] {
        &self.coefficients
    }

    /// The right-hand side.
    #[must_use]
    pub fn constant(&self) -> &Integer {
        &self.constant
    }

    /// Variable names, synthesizing `x1, ..., xn` when none were given.
    #[must_use]
    pub fn variable_names(&self) -> Vec<String> {
        match &self.variables {
            Some(names) => names.clone(),
            None => (1..=self.coefficients.len()).map(|i| format!("x{i}")).collect(),
        }
    }

    /// Validates the equation and collapses repeated coefficients.
    ///
    /// When a coefficient value occurs more than once, only its first
    /// occurrence (with that variable's name) is kept; the later variables
    /// are dropped from the equation altogether. Their coefficients are not
    /// added to the survivor. This changes the equation being solved and is
    /// deliberate.
    ///
    /// # Errors
    ///
    /// - [`SolveError::EmptyEquation`] if there are no coefficients
    /// - [`SolveError::ZeroCoefficient`] if any coefficient is zero
    /// - [`SolveError::VariableCountMismatch`] if names were given and their
    ///   count differs from the number of coefficients
    pub fn normalize(&self) -> Result<NormalizedEquation, SolveError> {
        if self.coefficients.is_empty() {
            return Err(SolveError::EmptyEquation);
        }
        if let Some(index) = self.coefficients.iter().position(Zero::is_zero) {
            return Err(SolveError::ZeroCoefficient { index });
        }

        let names = self.variable_names();
        if names.len() != self.coefficients.len() {
            return Err(SolveError::VariableCountMismatch {
                expected: self.coefficients.len(),
                found: names.len(),
            });
        }

        let mut seen = HashSet::with_capacity(self.coefficients.len());
        let mut coefficients = Vec::with_capacity(self.coefficients.len());
        let mut variables = Vec::with_capacity(names.len());
        let mut dropped = Vec::new();

        for (coeff, name) in self.coefficients.iter().zip(names) {
            if seen.insert(coeff) {
                coefficients.push(coeff.clone());
                variables.push(name);
            } else {
                dropped.push(name);
            }
        }

        Ok(NormalizedEquation {
            coefficients,
            constant: self.constant.clone(),
            variables,
            dropped,
        })
    }
}

impl fmt::Display for LinearEquation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_equation(f, &self.coefficients, &self.variable_names(), &self.constant)
    }
}

/// A validated equation with pairwise distinct, nonzero coefficients.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NormalizedEquation {
    coefficients: Vec<Integer>,
    constant: Integer,
    variables: Vec<String>,
    dropped: Vec<String>,
}

impl NormalizedEquation {
    /// The surviving coefficients.
    #[must_use]
    pub fn coefficients(&self) -> &[Integer] {
        &self.coefficients
    }

    /// The right-hand side.
    #[must_use]
    pub fn constant(&self) -> &Integer {
        &self.constant
    }

    /// The surviving variable names, in first-occurrence order.
    #[must_use]
    pub fn variables(&self) -> &[String] {
        &self.variables
    }

    /// Names of the variables removed because their coefficient repeated.
    #[must_use]
    pub fn dropped(&self) -> &[String] {
        &self.dropped
    }

    /// Returns true if any variable was dropped.
    #[must_use]
    pub fn was_simplified(&self) -> bool {
        !self.dropped.is_empty()
    }

    /// Number of variables after simplification.
    #[must_use]
    pub fn num_vars(&self) -> usize {
        self.coefficients.len()
    }

    /// Evaluates `Σ a_i * x_i` at `values`.
    #[must_use]
    pub fn lhs(&self, values: &[Integer]) -> Integer {
        self.coefficients
            .iter()
            .zip(values)
            .fold(Integer::zero(), |acc, (a, x)| acc + a * x)
    }

    /// Returns true if `values` satisfies the equation.
    #[must_use]
    pub fn is_satisfied_by(&self, values: &[Integer]) -> bool {
        values.len() == self.num_vars() && self.lhs(values) == self.constant
    }
}

impl fmt::Display for NormalizedEquation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_equation(f, &self.coefficients, &self.variables, &self.constant)
    }
}

/// Writes `11*x - 8*y + z = 96`.
fn write_equation(
    f: &mut fmt::Formatter<'_>,
    coefficients: &[Integer],
    variables: &[String],
    constant: &Integer,
) -> fmt::Result {
    for (i, (coeff, name)) in coefficients.iter().zip(variables).enumerate() {
        let magnitude = coeff.abs();
        match (i == 0, coeff.is_negative()) {
            (true, true) => f.write_str("-")?,
            (true, false) => {}
            (false, true) => f.write_str(" - ")?,
            (false, false) => f.write_str(" + ")?,
        }
        if magnitude.is_one() {
            f.write_str(name)?;
        } else {
            write!(f, "{magnitude}*{name}")?;
        }
    }
    write!(f, " = {constant}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_names() {
        let eq = LinearEquation::from_i64(&[3, 5, 7], 10);
        assert_eq!(eq.variable_names(), ["x1", "x2", "x3"]);
        assert_eq!(eq.to_string(), "3*x1 + 5*x2 + 7*x3 = 10");
    }

    #[test]
    fn test_normalize_without_duplicates() {
        let eq = LinearEquation::from_i64(&[11, 8, 9], 96).with_variables(["x", "y", "z"]);
        let norm = eq.normalize().unwrap();
        assert_eq!(norm.variables(), ["x", "y", "z"]);
        assert!(!norm.was_simplified());
        assert_eq!(norm.to_string(), "11*x + 8*y + 9*z = 96");
    }

    #[test]
    fn test_normalize_keeps_first_occurrence() {
        let eq = LinearEquation::from_i64(&[5, 3, 5, -1, 3], 10)
            .with_variables(["a", "b", "c", "d", "e"]);
        let norm = eq.normalize().unwrap();

        assert_eq!(norm.variables(), ["a", "b", "d"]);
        assert_eq!(
            norm.coefficients(),
            [Integer::new(5), Integer::new(3), Integer::new(-1)]
        );
        assert_eq!(norm.dropped(), ["c", "e"]);
        assert!(norm.was_simplified());
        assert_eq!(norm.to_string(), "5*a + 3*b - d = 10");
    }

    #[test]
    fn test_default_names_come_from_positions_before_dedup() {
        let norm = LinearEquation::from_i64(&[2, 2, 3], 6).normalize().unwrap();
        assert_eq!(norm.variables(), ["x1", "x3"]);
    }

    #[test]
    fn test_zero_coefficient_is_rejected() {
        let eq = LinearEquation::from_i64(&[4, 0, 0], 1);
        assert_eq!(eq.normalize(), Err(SolveError::ZeroCoefficient { index: 1 }));
    }

    #[test]
    fn test_empty_and_mismatched() {
        assert_eq!(
            LinearEquation::from_i64(&[], 1).normalize(),
            Err(SolveError::EmptyEquation)
        );
        assert_eq!(
            LinearEquation::from_i64(&[1, 2], 1)
                .with_variables(["x"])
                .normalize(),
            Err(SolveError::VariableCountMismatch {
                expected: 2,
                found: 1
            })
        );
    }

    #[test]
    fn test_satisfaction() {
        let norm = LinearEquation::from_i64(&[11, 8, 9], 96).normalize().unwrap();
        let good = [Integer::new(0), Integer::new(3), Integer::new(8)];
        let bad = [Integer::new(1), Integer::new(1), Integer::new(1)];
        assert!(norm.is_satisfied_by(&good));
        assert!(!norm.is_satisfied_by(&bad));
        assert!(!norm.is_satisfied_by(&good[..2]));
    }
}
