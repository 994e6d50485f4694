//! # diophant-core
//!
//! Symbolic core for diophant.
//!
//! This crate provides:
//! - Named integer-valued parameters ([`Symbol`]) and a table that hands
//!   out fresh ones ([`SymbolTable`])
//! - Affine integer expressions over those parameters ([`LinearExpr`])
//! - Parametric solution tuples ([`ParametricSolution`]) with free-symbol
//!   introspection and substitution
//!
//! ## Design Principles
//!
//! - **Canonical form**: terms are kept sorted by symbol with no zero
//!   coefficients, so structural equality is semantic equality
//! - **Cheap symbols**: a symbol is a reference-counted name

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod expr;
pub mod parametric;
pub mod symbol;

pub use expr::{Assignment, LinearExpr};
pub use parametric::ParametricSolution;
pub use symbol::{Symbol, SymbolTable};
