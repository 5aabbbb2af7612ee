use super::Matrix;

impl Matrix {
    /// Whether row `row` reads `0 = c` with `c != 0`. Exact comparisons are used: after
    /// [`Matrix::row_reduce`] small entries have already been snapped to zero.
    pub fn is_contradiction(&self, row: usize) -> bool {
        self.coefficients(row).iter().all(|&x| x == 0.0) && self.constant(row) != 0.0
    }

    /// The indices of the contradiction rows.
    pub fn contradictions(&self) -> impl Iterator<Item = usize> + '_ {
        (0..self.rows()).filter(move |&row| self.is_contradiction(row))
    }

    /// Whether the system described by the matrix has a solution. Only meaningful once the matrix
    /// is in reduced row echelon form.
    ///
    /// # Example
    /// ```
    /// # use linalg::matrix::Matrix;
    /// let mut m = Matrix::from_vec(&[vec![1.0, 0.0, 5.0], vec![0.0, 0.0, 7.0]]).unwrap();
    /// m.row_reduce();
    /// assert!(!m.is_consistent());
    /// ```
    pub fn is_consistent(&self) -> bool {
        match self.contradictions().next() {
            Some(row) => {
                tracing::warn!(row, "contradiction: 0 = {}", self.constant(row));
                false
            }
            None => true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unique_solution_is_consistent() {
        let m = Matrix::from_vec(&[
            vec![1.0, 0.0, 0.0, 2.0],
            vec![0.0, 1.0, 0.0, 3.0],
            vec![0.0, 0.0, 1.0, -1.0],
        ])
        .unwrap();
        assert!(m.is_consistent());
        assert_eq!(m.contradictions().count(), 0);
    }

    #[test]
    fn test_zero_row_is_not_a_contradiction() {
        let m = Matrix::from_vec(&[vec![1.0, 1.0, 2.0], vec![0.0, 0.0, 0.0]]).unwrap();
        assert!(!m.is_contradiction(1));
        assert!(m.is_consistent());
    }

    #[test]
    fn test_contradictions_listed() {
        let m = Matrix::from_vec(&[
            vec![0.0, 0.0, 7.0],
            vec![1.0, 0.0, 5.0],
            vec![0.0, 0.0, -1.0],
        ])
        .unwrap();
        assert_eq!(m.contradictions().collect::<Vec<_>>(), vec![0, 2]);
        assert!(!m.is_consistent());
    }

    #[test]
    fn test_single_column_matrix() {
        // No variables at all: the only question is whether the constant vanishes.
        assert!(Matrix::from_vec(&[vec![0.0]]).unwrap().is_consistent());
        assert!(!Matrix::from_vec(&[vec![1.0]]).unwrap().is_consistent());
    }
}
