//! Dense matrix implementation for small matrices.
//!
//! The matrices handled here are `n x n` with `n` the number of variables
//! of an equation, so a flat row-major `Vec` is all that is needed.

use std::ops::{Index, IndexMut, Mul, Neg, Sub};

use num_traits::{One, Zero};

/// Entry type of a [`DenseMatrix`].
pub trait Scalar:
    Clone + Zero + One + Sub<Output = Self> + Mul<Output = Self> + Neg<Output = Self>
{
}

impl<T> Scalar for T where
    T: Clone + Zero + One + Sub<Output = T> + Mul<Output = T> + Neg<Output = T>
{
}

/// Dense matrix stored in row-major order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DenseMatrix<R> {
    /// Matrix entries in row-major order.
    data: Vec<R>,
    /// Number of rows.
    num_rows: usize,
    /// Number of columns.
    num_cols: usize,
}

impl<R: Scalar> DenseMatrix<R> {
    /// Creates a new matrix filled with zeros.
    #[must_use]
    pub fn zeros(num_rows: usize, num_cols: usize) -> Self {
        Self {
            data: vec![R::zero(); num_rows * num_cols],
            num_rows,
            num_cols,
        }
    }

    /// Creates a matrix from a 2D vector.
    ///
    /// # Panics
    ///
    /// Panics if the rows have different lengths.
    #[must_use]
    pub fn from_rows(rows: Vec<Vec<R>>) -> Self {
        if rows.is_empty() {
            return Self::zeros(0, 0);
        }
        let num_rows = rows.len();
        let num_cols = rows[0].len();
        let data: Vec<R> = rows.into_iter().flatten().collect();
        assert_eq!(data.len(), num_rows * num_cols);
        Self {
            data,
            num_rows,
            num_cols,
        }
    }

    /// Creates an identity matrix.
    #[must_use]
    pub fn identity(n: usize) -> Self {
        let mut m = Self::zeros(n, n);
        for i in 0..n {
            m[(i, i)] = R::one();
        }
        m
    }

    /// Returns the number of rows.
    #[must_use]
    pub fn num_rows(&self) -> usize {
        self.num_rows
    }

    /// Returns the number of columns.
    #[must_use]
    pub fn num_cols(&self) -> usize {
        self.num_cols
    }

    /// Checks if the matrix is square.
    #[must_use]
    pub fn is_square(&self) -> bool {
        self.num_rows == self.num_cols
    }

    /// Returns a slice of the specified row.
    #[must_use]
    pub fn row(&self, row: usize) -> &[R] {
        let start = row * self.num_cols;
        &self.data[start..start + self.num_cols]
    }

    /// Returns a column as a vector.
    #[must_use]
    pub fn col(&self, col: usize) -> Vec<R> {
        (0..self.num_rows)
            .map(|row| self[(row, col)].clone())
            .collect()
    }

    /// Matrix-vector multiply: y = A * x.
    ///
    /// # Panics
    ///
    /// Panics if `x.len()` differs from the number of columns.
    #[must_use]
    pub fn mv(&self, x: &[R]) -> Vec<R> {
        assert_eq!(x.len(), self.num_cols);
        (0..self.num_rows)
            .map(|row| {
                self.row(row)
                    .iter()
                    .zip(x.iter())
                    .fold(R::zero(), |acc, (a, b)| acc + a.clone() * b.clone())
            })
            .collect()
    }

    /// Vector-matrix multiply: y = x * A.
    ///
    /// # Panics
    ///
    /// Panics if `x.len()` differs from the number of rows.
    #[must_use]
    pub fn vm(&self, x: &[R]) -> Vec<R> {
        assert_eq!(x.len(), self.num_rows);
        (0..self.num_cols)
            .map(|col| {
                x.iter()
                    .enumerate()
                    .fold(R::zero(), |acc, (row, a)| {
                        acc + a.clone() * self[(row, col)].clone()
                    })
            })
            .collect()
    }

    /// Matrix-matrix multiply: C = A * B.
    ///
    /// # Panics
    ///
    /// Panics if the inner dimensions differ.
    #[must_use]
    pub fn mm(&self, other: &Self) -> Self {
        assert_eq!(self.num_cols, other.num_rows);

        let mut result = Self::zeros(self.num_rows, other.num_cols);
        for i in 0..self.num_rows {
            for j in 0..other.num_cols {
                let mut sum = R::zero();
                for k in 0..self.num_cols {
                    sum = sum + self[(i, k)].clone() * other[(k, j)].clone();
                }
                result[(i, j)] = sum;
            }
        }
        result
    }

    /// Swaps two rows in-place.
    pub fn swap_rows(&mut self, i: usize, j: usize) {
        if i == j {
            return;
        }
        let i_start = i * self.num_cols;
        let j_start = j * self.num_cols;
        for k in 0..self.num_cols {
            self.data.swap(i_start + k, j_start + k);
        }
    }

    /// Replaces columns `i` and `j` by a 2x2 combination of themselves:
    ///
    /// ```text
    /// [col_i, col_j] <- [col_i, col_j] * [[a, b], [c, d]]
    /// ```
    ///
    /// i.e. `col_i' = a*col_i + c*col_j` and `col_j' = b*col_i + d*col_j`.
    /// When `a*d - b*c = ±1` the operation is unimodular.
    pub fn combine_cols(&mut self, i: usize, j: usize, a: &R, b: &R, c: &R, d: &R) {
        for row in 0..self.num_rows {
            let x = self[(row, i)].clone();
            let y = self[(row, j)].clone();
            self[(row, i)] = a.clone() * x.clone() + c.clone() * y.clone();
            self[(row, j)] = b.clone() * x + d.clone() * y;
        }
    }

    /// Negates a column in-place.
    pub fn negate_col(&mut self, col: usize) {
        for row in 0..self.num_rows {
            let v = self[(row, col)].clone();
            self[(row, col)] = -v;
        }
    }
}

impl<R> Index<(usize, usize)> for DenseMatrix<R> {
    type Output = R;

    fn index(&self, (row, col): (usize, usize)) -> &Self::Output {
        &self.data[row * self.num_cols + col]
    }
}

impl<R> IndexMut<(usize, usize)> for DenseMatrix<R> {
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut Self::Output {
        &mut self.data[row * self.num_cols + col]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use diophant_integers::Integer;

    fn int_rows(rows: &[&[i64]]) -> DenseMatrix<Integer> {
        DenseMatrix::from_rows(
            rows.iter()
                .map(|r| r.iter().copied().map(Integer::new).collect())
                .collect(),
        )
    }

    #[test]
    fn test_identity() {
        let id = DenseMatrix::<Integer>::identity(3);
        assert!(id.is_square());
        assert_eq!(id[(1, 1)], Integer::new(1));
        assert_eq!(id[(0, 2)], Integer::new(0));
    }

    #[test]
    fn test_mv_and_vm() {
        let m = int_rows(&[&[1, 2], &[3, 4]]);
        let x = vec![Integer::new(5), Integer::new(6)];
        assert_eq!(m.mv(&x), vec![Integer::new(17), Integer::new(39)]);
        assert_eq!(m.vm(&x), vec![Integer::new(23), Integer::new(34)]);
    }

    #[test]
    fn test_mm() {
        let a = int_rows(&[&[1, 2], &[3, 4]]);
        let b = int_rows(&[&[0, 1], &[1, 0]]);
        assert_eq!(a.mm(&b), int_rows(&[&[2, 1], &[4, 3]]));
    }

    #[test]
    fn test_swap_rows() {
        let mut m = int_rows(&[&[1, 2, 3], &[4, 5, 6]]);
        m.swap_rows(0, 1);
        assert_eq!(m, int_rows(&[&[4, 5, 6], &[1, 2, 3]]));
        m.swap_rows(1, 1);
        assert_eq!(m.row(1), int_rows(&[&[1, 2, 3]]).row(0));
    }

    #[test]
    fn test_combine_cols() {
        let mut m = int_rows(&[&[1, 0], &[0, 1]]);
        // [[3, -8], [-4, 11]] has determinant 1
        m.combine_cols(
            0,
            1,
            &Integer::new(3),
            &Integer::new(-8),
            &Integer::new(-4),
            &Integer::new(11),
        );
        assert_eq!(m, int_rows(&[&[3, -8], &[-4, 11]]));

        m.negate_col(1);
        assert_eq!(m.col(1), vec![Integer::new(8), Integer::new(-11)]);
    }
}
