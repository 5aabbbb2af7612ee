use linalg::ShapeError;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// The input rows do not form a matrix.
    #[error(transparent)]
    Shape(#[from] ShapeError),

    /// A leading column has a non-zero entry in a row led by another variable. This cannot
    /// happen for a matrix produced by `row_reduce`.
    #[error("leading column {column} is non-zero in row {row}, which is led by another variable")]
    InvariantViolation { row: usize, column: usize },
}
