//! # diophant-linalg
//!
//! Dense integer linear algebra for diophant.
//!
//! This crate provides:
//! - Dense matrices in row-major order
//! - Unimodular column reduction of a coefficient row (the row Hermite form)
//! - Fraction-free (Bareiss) determinants over the integers
//!
//! The row Hermite form is what turns `a1*x1 + ... + an*xn = c` into a
//! parametric family: if `a * U = (g, 0, ..., 0)` with `U` unimodular, then
//! every integer solution is `x = U * (c/g, t_0, ..., t_{n-2})`.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod dense_matrix;

mod hermite;

pub use dense_matrix::{DenseMatrix, Scalar};
pub use hermite::{determinant, row_hermite_form, RowHermiteForm};
