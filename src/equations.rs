//! Human readable listing of a reduced system, one equation per row.

use itertools::Itertools;
use linalg::matrix::Matrix;

/// Renders row `row` as `c1*xi + c2*xj + ... = constant` with two decimals everywhere. Terms
/// are joined by `" + "` whatever their sign. Returns `None` for rows without a non-zero
/// coefficient; in particular contradictions are not rendered, use
/// [`Matrix::is_consistent`] to find those.
pub fn format_equation(matrix: &Matrix, row: usize) -> Option<String> {
    let coefficients = matrix.coefficients(row);
    if coefficients.iter().all(|&c| c == 0.0) {
        return None;
    }
    let lhs = coefficients
        .iter()
        .enumerate()
        .filter(|(_, c)| **c != 0.0)
        .format_with(" + ", |(j, c), f| f(&format_args!("{c:.2}*x{}", j + 1)));
    Some(format!("{lhs} = {:.2}", matrix.constant(row)))
}

/// One string per row that has a non-zero coefficient.
pub fn format_equations(matrix: &Matrix) -> Vec<String> {
    (0..matrix.rows())
        .filter_map(|row| format_equation(matrix, row))
        .collect()
}
