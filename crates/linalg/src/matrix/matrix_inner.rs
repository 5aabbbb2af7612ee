use itertools::Itertools;
use serde::{Deserialize, Serialize};

use crate::error::ShapeError;

use std::fmt;

/// An augmented matrix with `f64` entries. Each row is one equation: the last column holds the
/// constant term and the columns before it hold the coefficients of the variables `x1, x2, ...`.
///
/// The shape is fixed at construction. Every constructor checks that there is at least one row,
/// at least one column and that all rows have the same length, so code operating on a `Matrix`
/// can index freely. Row operations act in place and never change the shape.
#[derive(Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Vec<f64>>", into = "Vec<Vec<f64>>")]
pub struct Matrix {
    columns: usize,
    pub(super) vectors: Vec<Vec<f64>>,
}

impl Matrix {
    /// Produces a new matrix with the specified number of rows and columns, initialized to the 0
    /// matrix.
    pub fn new(rows: usize, columns: usize) -> Result<Self, ShapeError> {
        Self::from_rows(vec![vec![0.0; columns]; rows])
    }

    /// Produces a matrix from a list of rows, taking ownership of them.
    pub fn from_rows(vectors: Vec<Vec<f64>>) -> Result<Self, ShapeError> {
        let columns = vectors.first().ok_or(ShapeError::NoRows)?.len();
        if columns == 0 {
            return Err(ShapeError::NoColumns);
        }
        if let Some((row, v)) = vectors.iter().find_position(|v| v.len() != columns) {
            return Err(ShapeError::RaggedRow {
                row,
                expected: columns,
                found: v.len(),
            });
        }
        Ok(Self { columns, vectors })
    }

    /// Produces a matrix from a borrowed list of rows.
    ///
    /// # Example
    /// ```
    /// # use linalg::matrix::Matrix;
    /// let input = [vec![1.0, 3.0, 6.0],
    ///              vec![0.0, 3.0, 4.0]];
    ///
    /// let m = Matrix::from_vec(&input).unwrap();
    /// assert_eq!(m.rows(), 2);
    /// assert_eq!(m.variables(), 2);
    ///
    /// assert!(Matrix::from_vec(&[vec![1.0, 2.0], vec![3.0]]).is_err());
    /// ```
    pub fn from_vec(input: &[Vec<f64>]) -> Result<Self, ShapeError> {
        Self::from_rows(input.to_vec())
    }

    pub fn into_vec(self) -> Vec<Vec<f64>> {
        self.vectors
    }

    /// Gets the number of rows in the matrix.
    pub fn rows(&self) -> usize {
        self.vectors.len()
    }

    /// Gets the number of columns in the matrix, including the constant column.
    pub fn columns(&self) -> usize {
        self.columns
    }

    /// The number of variables, i.e. the number of coefficient columns.
    pub fn variables(&self) -> usize {
        self.columns - 1
    }

    /// The coefficient part of a row, i.e. everything but the constant term.
    pub fn coefficients(&self, row: usize) -> &[f64] {
        &self.vectors[row][..self.columns - 1]
    }

    /// The constant term of a row.
    pub fn constant(&self, row: usize) -> f64 {
        self.vectors[row][self.columns - 1]
    }

    pub fn iter(&self) -> std::slice::Iter<Vec<f64>> {
        self.vectors.iter()
    }
}

impl Matrix {
    pub fn swap_rows(&mut self, i: usize, j: usize) {
        if i != j {
            tracing::trace!(i, j, "swap rows");
            self.vectors.swap(i, j);
        }
    }

    /// Divides every entry of `row` by `c`.
    pub fn divide_row(&mut self, row: usize, c: f64) {
        for x in &mut self.vectors[row] {
            *x /= c;
        }
    }

    /// Performs `self[target] -= coeff * self[source]`.
    pub fn row_op(&mut self, target: usize, source: usize, coeff: f64) {
        debug_assert!(target != source);
        let (target, source) = if target < source {
            let (head, tail) = self.vectors.split_at_mut(source);
            (&mut head[target], &tail[0])
        } else {
            let (head, tail) = self.vectors.split_at_mut(target);
            (&mut tail[0], &head[source])
        };
        for (t, &s) in target.iter_mut().zip(source) {
            *t -= coeff * s;
        }
    }
}

impl TryFrom<Vec<Vec<f64>>> for Matrix {
    type Error = ShapeError;

    fn try_from(vectors: Vec<Vec<f64>>) -> Result<Self, ShapeError> {
        Self::from_rows(vectors)
    }
}

impl From<Matrix> for Vec<Vec<f64>> {
    fn from(m: Matrix) -> Self {
        m.into_vec()
    }
}

impl std::ops::Index<usize> for Matrix {
    type Output = [f64];

    fn index(&self, i: usize) -> &Self::Output {
        &self.vectors[i]
    }
}

impl std::ops::IndexMut<usize> for Matrix {
    fn index_mut(&mut self, i: usize) -> &mut Self::Output {
        &mut self.vectors[i]
    }
}

/// Formats a row the way a list of floats is usually printed, e.g. `[1.0, -0.5, 3.0]`.
fn format_row(row: &[f64]) -> impl fmt::Display + '_ {
    row.iter()
        .format_with(", ", |x, f| f(&format_args!("{x:?}")))
}

/// One row per line, each as a bracketed list.
impl fmt::Display for Matrix {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for row in &self.vectors {
            writeln!(f, "[{}]", format_row(row))?;
        }
        Ok(())
    }
}

impl fmt::Debug for Matrix {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let mut it = self.vectors.iter();
        if let Some(x) = it.next() {
            write!(f, "[\n    [{}]", format_row(x))?;
        } else {
            return write!(f, "[]");
        }
        for x in it {
            write!(f, ",\n    [{}]", format_row(x))?;
        }
        write!(f, "\n]")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use expect_test::expect;

    #[test]
    fn test_from_vec_shape() {
        let m = Matrix::from_vec(&[vec![1.0, 2.0, 3.0], vec![4.0, 5.0, 6.0]]).unwrap();
        assert_eq!(m.rows(), 2);
        assert_eq!(m.columns(), 3);
        assert_eq!(m.variables(), 2);
        assert_eq!(m.coefficients(1), &[4.0, 5.0]);
        assert_eq!(m.constant(1), 6.0);
    }

    #[test]
    fn test_shape_errors() {
        assert_eq!(Matrix::from_vec(&[]), Err(ShapeError::NoRows));
        assert_eq!(Matrix::from_vec(&[vec![], vec![]]), Err(ShapeError::NoColumns));
        assert_eq!(
            Matrix::from_vec(&[vec![1.0; 3], vec![1.0; 3], vec![1.0; 2]]),
            Err(ShapeError::RaggedRow {
                row: 2,
                expected: 3,
                found: 2
            })
        );
        assert_eq!(Matrix::new(0, 4), Err(ShapeError::NoRows));
    }

    #[test]
    fn test_row_op() {
        let mut m = Matrix::from_vec(&[vec![1.0, 2.0, 3.0], vec![2.0, 5.0, 7.0]]).unwrap();
        m.row_op(1, 0, 2.0);
        assert_eq!(m[1], [0.0, 1.0, 1.0]);
        m.row_op(0, 1, 2.0);
        assert_eq!(m[0], [1.0, 0.0, 1.0]);
        m.divide_row(1, -0.5);
        assert_eq!(m[1], [-0.0, -2.0, -2.0]);
    }

    #[test]
    fn test_display() {
        let m = Matrix::from_vec(&[vec![1.0, -0.5, 3.0], vec![0.0, 0.0, 1.25]]).unwrap();
        expect![[r#"
            [1.0, -0.5, 3.0]
            [0.0, 0.0, 1.25]
        "#]]
        .assert_eq(&m.to_string());
        expect![[r#"
            [
                [1.0, -0.5, 3.0],
                [0.0, 0.0, 1.25]
            ]"#]]
        .assert_eq(&format!("{m:?}"));
    }

    #[test]
    fn test_serde_rejects_ragged() {
        let m: Matrix = serde_json::from_str("[[1.0, 2.0], [3.0, 4.0]]").unwrap();
        assert_eq!(m.rows(), 2);
        assert!(serde_json::from_str::<Matrix>("[[1.0, 2.0], [3.0]]").is_err());
        assert_eq!(serde_json::to_string(&m).unwrap(), "[[1.0,2.0],[3.0,4.0]]");
    }
}
