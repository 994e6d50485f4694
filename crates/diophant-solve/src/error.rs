//! Errors raised while setting up a solve.

use thiserror::Error;

/// Errors that abort a solve before any enumeration happens.
///
/// An equation without integer solutions, or without nonnegative ones
/// inside the search bound, is not an error: it yields an empty result.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum SolveError {
    /// The coefficient list is empty.
    #[error("equation has no coefficients")]
    EmptyEquation,

    /// A coefficient is zero.
    #[error("coefficient {index} is zero; each coefficient must be nonzero")]
    ZeroCoefficient {
        /// Position of the first zero coefficient.
        index: usize,
    },

    /// The variable names do not match the coefficients one to one.
    #[error("expected {expected} variable names, found {found}")]
    VariableCountMismatch {
        /// Number of coefficients.
        expected: usize,
        /// Number of names supplied.
        found: usize,
    },

    /// The search bound is too large to enumerate.
    #[error("search bound {bound} does not fit in a machine word")]
    BoundOverflow {
        /// The bound as computed.
        bound: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let msg = SolveError::ZeroCoefficient { index: 2 }.to_string();
        assert!(msg.contains("coefficient 2"));
        assert!(msg.contains("nonzero"));

        let msg = SolveError::VariableCountMismatch {
            expected: 3,
            found: 2,
        }
        .to_string();
        assert_eq!(msg, "expected 3 variable names, found 2");
    }
}
