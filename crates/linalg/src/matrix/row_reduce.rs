use maybe_rayon::prelude::*;

use super::Matrix;
use crate::precision;

impl Matrix {
    /// Brings the matrix towards row echelon form. Only a precursor to [`Matrix::row_reduce`],
    /// whose result is the one to rely on.
    ///
    /// For each `i < min(rows, columns)` the entry `(i, i)` is made the pivot: if it is zero, the
    /// first row below with a non-zero entry in column `i` is swapped up. No attempt is made to
    /// pick the largest candidate. The pivot row is then divided by the pivot and column `i` is
    /// cleared below it. If no candidate exists the row is left as is.
    #[tracing::instrument(skip_all, fields(rows = self.rows(), columns = self.columns()))]
    pub fn row_echelon_form(&mut self) {
        let rows = self.rows();
        for i in 0..std::cmp::min(rows, self.columns()) {
            if self[i][i] == 0.0 {
                if let Some(j) = (i + 1..rows).find(|&j| self[j][i] != 0.0) {
                    self.swap_rows(i, j);
                }
            }

            let pivot = self[i][i];
            if pivot == 0.0 {
                continue;
            }
            self.divide_row(i, pivot);

            for j in i + 1..rows {
                let c = self[j][i];
                if c != 0.0 {
                    self.row_op(j, i, c);
                }
            }
        }
    }

    /// Perform row reduction to reduce it to reduced row echelon form, followed by
    /// [`Matrix::clean_up`]. This modifies the matrix in place and returns the number of pivots.
    ///
    /// Pivots are searched column by column, the constant column included, so a row reading
    /// `0 = c` with `c != 0` ends up as `0 = 1`.
    ///
    /// # Example
    /// ```
    /// # use linalg::matrix::Matrix;
    /// let input  = [vec![2.0, 4.0, 6.0],
    ///               vec![1.0, 3.0, 5.0]];
    ///
    /// let result = [vec![1.0, 0.0, -1.0],
    ///               vec![0.0, 1.0, 2.0]];
    ///
    /// let mut m = Matrix::from_vec(&input).unwrap();
    /// assert_eq!(m.row_reduce(), 2);
    /// assert_eq!(m, Matrix::from_vec(&result).unwrap());
    /// ```
    #[tracing::instrument(skip_all, fields(rows = self.rows(), columns = self.columns(), rank = tracing::field::Empty))]
    pub fn row_reduce(&mut self) -> usize {
        self.row_echelon_form();

        let rows = self.rows();
        let columns = self.columns();
        let mut pivot = 0;
        let mut pivot_column = 0;
        while pivot < rows && pivot_column < columns {
            // Search down column for a nonzero entry.
            let Some(pivot_row) = (pivot..rows).find(|&i| self[i][pivot_column] != 0.0) else {
                pivot_column += 1;
                continue;
            };
            tracing::debug!(row = pivot, column = pivot_column, "pivot");

            self.swap_rows(pivot, pivot_row);
            let c = self[pivot][pivot_column];
            self.divide_row(pivot, c);
            self.clear_column(pivot, pivot_column);

            pivot += 1;
            pivot_column += 1;
        }

        self.clean_up();
        tracing::Span::current().record("rank", pivot);
        pivot
    }

    /// Subtracts multiples of row `pivot` from every other row so that `column` is zero
    /// everywhere except at the pivot. Rows are independent of each other here, so this is the
    /// step that runs in parallel under the `concurrent` feature.
    fn clear_column(&mut self, pivot: usize, column: usize) {
        let pivot_row = self.vectors[pivot].clone();
        self.vectors
            .maybe_par_iter_mut()
            .enumerate()
            .filter(|(i, _)| *i != pivot)
            .for_each(|(_, target)| {
                let c = target[column];
                if c != 0.0 {
                    for (t, &s) in target.iter_mut().zip(&pivot_row) {
                        *t -= c * s;
                    }
                }
            });
    }

    /// Replaces every entry below [`precision::ZERO_TOLERANCE`] in absolute value by `0.0` and
    /// rounds every other entry to [`precision::MATRIX_DIGITS`] decimal places.
    pub fn clean_up(&mut self) {
        self.vectors.maybe_par_iter_mut().for_each(|row| {
            for x in row.iter_mut() {
                *x = precision::snap(*x);
            }
        });
    }
}

/// Consumes a matrix and returns its reduced row echelon form.
pub fn reduced_row_echelon_form(mut matrix: Matrix) -> Matrix {
    matrix.row_reduce();
    matrix
}
