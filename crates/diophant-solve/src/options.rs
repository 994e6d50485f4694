//! Solver configuration.

use num_traits::Zero;

use diophant_integers::Integer;

use crate::error::SolveError;

/// Default cap of the quadratic search bound.
pub const DEFAULT_BOUND_LIMIT: u64 = 100;

/// How the symmetric search range `[-B, B]` of each free parameter is chosen.
///
/// Both policies are heuristics. Neither is proven to reach every
/// nonnegative solution: a parametrization whose particular solution lies
/// far from the nonnegative region needs parameter values beyond `B`, and
/// those solutions are silently missed. Raise the limit when in doubt.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BoundPolicy {
    /// `B = min(limit, c^2 div min|a_i|)`.
    Quadratic {
        /// Upper cap on `B`.
        limit: u64,
    },
    /// `B = |3c| div min|a_i|`, uncapped.
    Linear,
}

impl Default for BoundPolicy {
    fn default() -> Self {
        Self::Quadratic {
            limit: DEFAULT_BOUND_LIMIT,
        }
    }
}

impl BoundPolicy {
    /// Computes `B` for an equation with the given constant and (nonzero)
    /// coefficients.
    ///
    /// # Errors
    ///
    /// Returns [`SolveError::BoundOverflow`] if a [`BoundPolicy::Linear`]
    /// bound does not fit in an `i64`.
    pub fn search_bound(
        &self,
        constant: &Integer,
        coefficients: &[Integer],
    ) -> Result<u64, SolveError> {
        let Some(min_coeff) = coefficients.iter().map(Integer::abs).min() else {
            return Ok(0);
        };
        if min_coeff.is_zero() {
            return Err(SolveError::ZeroCoefficient {
                index: coefficients.iter().position(Zero::is_zero).unwrap_or(0),
            });
        }

        match *self {
            Self::Quadratic { limit } => {
                let raw = constant.pow(2).floor_div(&min_coeff);
                let capped = raw
                    .to_i64()
                    .and_then(|b| u64::try_from(b).ok())
                    .map_or(limit, |b| b.min(limit));
                Ok(capped)
            }
            Self::Linear => {
                let raw = (constant.abs() * Integer::new(3)).floor_div(&min_coeff);
                raw.to_i64()
                    .and_then(|b| u64::try_from(b).ok())
                    .ok_or_else(|| SolveError::BoundOverflow {
                        bound: raw.to_string(),
                    })
            }
        }
    }
}

/// Options for [`solve_nonnegative`](crate::solve_nonnegative).
#[derive(Clone, Debug)]
pub struct SolveOptions {
    /// Search bound policy for free parameters.
    pub bound: BoundPolicy,
    /// Emit informational notices (simplification, analytical solution).
    pub verbose: bool,
}

impl Default for SolveOptions {
    fn default() -> Self {
        Self {
            bound: BoundPolicy::default(),
            verbose: true,
        }
    }
}

impl SolveOptions {
    /// Uses the given bound policy.
    #[must_use]
    pub fn with_bound(mut self, bound: BoundPolicy) -> Self {
        self.bound = bound;
        self
    }

    /// Uses the quadratic policy capped at `limit`.
    #[must_use]
    pub fn with_bound_limit(self, limit: u64) -> Self {
        self.with_bound(BoundPolicy::Quadratic { limit })
    }

    /// Turns informational notices on or off.
    #[must_use]
    pub fn with_verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }
}
