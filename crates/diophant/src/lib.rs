//! # Diophant
//!
//! Nonnegative integer solutions of linear Diophantine equations
//! `a_1*x_1 + ... + a_n*x_n = c`.
//!
//! ## Features
//!
//! - **Exact arithmetic**: arbitrary precision coefficients and constants
//! - **Parametric solutions**: the full integer solution family from a
//!   unimodular reduction of the coefficient row
//! - **Bounded enumeration**: nonnegative instances within a configurable
//!   parameter range
//!
//! ## Quick Start
//!
//! ```
//! use diophant::prelude::*;
//!
//! let equation = LinearEquation::from_i64(&[11, 8, 9], 96).with_variables(["x", "y", "z"]);
//! let result = equation
//!     .solve_nonnegative(&SolveOptions::default().with_verbose(false))
//!     .unwrap();
//!
//! assert!(result.iter().all(|t| equation.normalize().unwrap().is_satisfied_by(t)));
//! println!("{}", result.set_notation());
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub use diophant_core as core;
pub use diophant_integers as integers;
pub use diophant_linalg as linalg;
pub use diophant_solve as solve;

pub use diophant_solve::{solve_nonnegative, NonnegativeSolutions, SolveError};

/// Prelude module for convenient imports.
pub mod prelude {
    pub use diophant_core::{LinearExpr, ParametricSolution, Symbol, SymbolTable};
    pub use diophant_integers::Integer;
    pub use diophant_solve::{
        diophantine, solve_nonnegative, BoundPolicy, LinearEquation, NonnegativeSolutions,
        SetNotation, SolveError, SolveOptions,
    };
}
