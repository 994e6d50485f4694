//! Unimodular column reduction of a single integer row.
//!
//! For a row vector `a = (a_1, ..., a_n)` this computes a unimodular matrix
//! `U` (integer entries, determinant ±1) such that
//!
//! ```text
//! a * U = (g, 0, ..., 0),   g = gcd(a_1, ..., a_n) >= 0
//! ```
//!
//! # Algorithm
//!
//! Column 0 absorbs every other column in turn. For the pair
//! `(a_0, a_j)` with Bezout identity `g = s*a_0 + t*a_j`, the columns are
//! replaced using
//!
//! ```text
//! [[s, -a_j/g],
//!  [t,  a_0/g]]
//! ```
//!
//! whose determinant is `(s*a_0 + t*a_j)/g = 1`. Afterwards the running
//! entry in column 0 is `g` and entry `j` is zero. The same operations are
//! replayed on `U`, starting from the identity.

use num_traits::{One, Zero};

use diophant_integers::Integer;

use crate::dense_matrix::DenseMatrix;

/// Result of the row Hermite reduction.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RowHermiteForm {
    /// `gcd` of the row entries; nonnegative.
    pub gcd: Integer,
    /// Unimodular `n x n` transform with `row * transform = (gcd, 0, ..., 0)`.
    pub transform: DenseMatrix<Integer>,
}

impl RowHermiteForm {
    /// Number of columns of the reduced row.
    #[must_use]
    pub fn dimension(&self) -> usize {
        self.transform.num_cols()
    }

    /// The remaining columns of the transform, a basis of the integer
    /// kernel `{ x : row . x = 0 }`.
    #[must_use]
    pub fn kernel_basis(&self) -> Vec<Vec<Integer>> {
        (1..self.dimension()).map(|j| self.transform.col(j)).collect()
    }

    /// Returns true if the transform has determinant ±1.
    #[must_use]
    pub fn is_unimodular(&self) -> bool {
        determinant(&self.transform).abs().is_one()
    }
}

/// Computes the row Hermite form of `row`.
///
/// An empty row gives `gcd = 0` and a `0 x 0` transform.
#[must_use]
pub fn row_hermite_form(row: &[Integer]) -> RowHermiteForm {
    let n = row.len();
    let mut transform = DenseMatrix::identity(n);

    if n == 0 {
        return RowHermiteForm {
            gcd: Integer::zero(),
            transform,
        };
    }

    let mut lead = row[0].clone();

    for (j, a_j) in row.iter().enumerate().skip(1) {
        if a_j.is_zero() {
            continue;
        }

        let (g, s, t) = lead.extended_gcd(a_j);
        let lead_over_g = &lead / &g;
        let a_j_over_g = a_j / &g;

        transform.combine_cols(0, j, &s, &(-a_j_over_g), &t, &lead_over_g);
        lead = g;
    }

    if lead.is_negative() {
        transform.negate_col(0);
        lead = -lead;
    }

    RowHermiteForm {
        gcd: lead,
        transform,
    }
}

/// Determinant of a square integer matrix.
///
/// Uses Bareiss fraction-free elimination, so every intermediate division
/// is exact and no rationals are needed.
///
/// # Panics
///
/// Panics if the matrix is not square.
#[must_use]
pub fn determinant(matrix: &DenseMatrix<Integer>) -> Integer {
    assert!(matrix.is_square(), "determinant of a non-square matrix");
    let n = matrix.num_rows();
    if n == 0 {
        return Integer::one();
    }

    let mut m = matrix.clone();
    let mut negate = false;
    let mut prev = Integer::one();

    for k in 0..n - 1 {
        if m[(k, k)].is_zero() {
            let Some(pivot) = (k + 1..n).find(|&i| !m[(i, k)].is_zero()) else {
                return Integer::zero();
            };
            m.swap_rows(k, pivot);
            negate = !negate;
        }

        for i in k + 1..n {
            for j in k + 1..n {
                let num = &(&m[(i, j)] * &m[(k, k)]) - &(&m[(i, k)] * &m[(k, j)]);
                m[(i, j)] = &num / &prev;
            }
        }
        prev = m[(k, k)].clone();
    }

    let det = m[(n - 1, n - 1)].clone();
    if negate {
        -det
    } else {
        det
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ints(values: &[i64]) -> Vec<Integer> {
        values.iter().copied().map(Integer::new).collect()
    }

    fn check_reduction(values: &[i64]) -> RowHermiteForm {
        let row = ints(values);
        let form = row_hermite_form(&row);
        let reduced = form.transform.vm(&row);

        assert_eq!(reduced[0], form.gcd);
        assert!(reduced[1..].iter().all(Zero::is_zero), "{reduced:?}");
        assert!(form.is_unimodular());
        form
    }

    #[test]
    fn test_three_coefficients() {
        let form = check_reduction(&[11, 8, 9]);
        assert_eq!(form.gcd, Integer::new(1));
        assert_eq!(form.kernel_basis().len(), 2);
    }

    #[test]
    fn test_common_factor() {
        let form = check_reduction(&[2, 4]);
        assert_eq!(form.gcd, Integer::new(2));
    }

    #[test]
    fn test_negative_entries() {
        let form = check_reduction(&[-6, 10, -15]);
        assert_eq!(form.gcd, Integer::new(1));

        let form = check_reduction(&[-4]);
        assert_eq!(form.gcd, Integer::new(4));
        assert_eq!(form.transform.col(0), ints(&[-1]));
    }

    #[test]
    fn test_single_entry() {
        let form = check_reduction(&[5]);
        assert_eq!(form.gcd, Integer::new(5));
        assert!(form.kernel_basis().is_empty());
    }

    #[test]
    fn test_empty_row() {
        let form = row_hermite_form(&[]);
        assert!(form.gcd.is_zero());
        assert_eq!(form.dimension(), 0);
    }

    #[test]
    fn test_determinant() {
        let m = DenseMatrix::from_rows(vec![ints(&[1, 2]), ints(&[3, 4])]);
        assert_eq!(determinant(&m), Integer::new(-2));

        // Needs a row swap on the first pivot
        let m = DenseMatrix::from_rows(vec![ints(&[0, 1, 0]), ints(&[1, 0, 0]), ints(&[0, 0, 1])]);
        assert_eq!(determinant(&m), Integer::new(-1));

        let singular = DenseMatrix::from_rows(vec![ints(&[2, 4]), ints(&[1, 2])]);
        assert!(determinant(&singular).is_zero());

        let m = DenseMatrix::from_rows(vec![
            ints(&[2, -3, 1]),
            ints(&[2, 0, -1]),
            ints(&[1, 4, 5]),
        ]);
        assert_eq!(determinant(&m), Integer::new(49));
    }
}
