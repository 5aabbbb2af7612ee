use serde::Serialize;

use super::Matrix;

/// The split of the variables of a reduced system into leading and free ones. Variables are
/// numbered from 1, so `x1` is the variable of column 0.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PivotSet {
    lead_vars: Vec<usize>,
    free_vars: Vec<usize>,
    #[serde(skip)]
    pivot_rows: Vec<usize>,
}

impl PivotSet {
    /// Reads the pivots off a matrix in reduced row echelon form. The first non-zero coefficient
    /// of a row is its pivot, rows without a non-zero coefficient contribute nothing, and every
    /// variable that is not the pivot of some row is free.
    ///
    /// # Example
    /// ```
    /// # use linalg::matrix::{Matrix, PivotSet};
    /// let m = Matrix::from_vec(&[vec![1.0, 2.0, 0.0, 3.0],
    ///                            vec![0.0, 0.0, 1.0, 4.0]]).unwrap();
    /// let pivots = PivotSet::classify(&m);
    /// assert_eq!(pivots.lead_vars(), &[1, 3]);
    /// assert_eq!(pivots.free_vars(), &[2]);
    /// ```
    pub fn classify(matrix: &Matrix) -> Self {
        let mut lead_vars = Vec::new();
        let mut pivot_rows = Vec::new();
        for row in 0..matrix.rows() {
            if let Some(col) = matrix.coefficients(row).iter().position(|&x| x != 0.0) {
                lead_vars.push(col + 1);
                pivot_rows.push(row);
            }
        }
        let free_vars = (1..=matrix.variables())
            .filter(|var| !lead_vars.contains(var))
            .collect();

        Self {
            lead_vars,
            free_vars,
            pivot_rows,
        }
    }

    /// The leading variables, in the order of the rows they lead.
    pub fn lead_vars(&self) -> &[usize] {
        &self.lead_vars
    }

    /// The free variables in ascending order.
    pub fn free_vars(&self) -> &[usize] {
        &self.free_vars
    }

    /// Pairs of (row, leading variable).
    pub fn leads(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.pivot_rows
            .iter()
            .copied()
            .zip(self.lead_vars.iter().copied())
    }

    pub fn is_free(&self, var: usize) -> bool {
        self.free_vars.contains(&var)
    }

    pub fn is_lead(&self, var: usize) -> bool {
        self.lead_vars.contains(&var)
    }

    /// The position of a free variable in [`PivotSet::free_vars`], counting from 1. This is the
    /// index of the parameter standing in for it.
    pub fn parameter_index(&self, var: usize) -> Option<usize> {
        self.free_vars
            .iter()
            .position(|&v| v == var)
            .map(|i| i + 1)
    }

    pub fn rank(&self) -> usize {
        self.lead_vars.len()
    }
}
