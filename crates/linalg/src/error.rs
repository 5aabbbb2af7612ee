use thiserror::Error;

/// The ways a list of rows can fail to describe an augmented matrix.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ShapeError {
    #[error("matrix has no rows")]
    NoRows,

    #[error("matrix has no columns")]
    NoColumns,

    #[error("row {row} has {found} entries, expected {expected}")]
    RaggedRow {
        /// 0-based index of the first offending row
        row: usize,
        expected: usize,
        found: usize,
    },
}
