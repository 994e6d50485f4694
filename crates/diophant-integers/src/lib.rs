//! # diophant-integers
//!
//! Arbitrary precision integer arithmetic for diophant.
//!
//! This crate wraps `dashu` to provide an [`Integer`] type with the
//! number-theoretic helpers the Diophantine solver needs:
//! - Extended gcd (Bezout coefficients)
//! - Floor division and exact division
//!
//! Coefficients, constants and every intermediate of the parametrization
//! are `Integer`s, so products such as `c * U[i][0]` never overflow.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod integer;

#[cfg(test)]
mod proptests;

pub use integer::Integer;
