use proptest::prelude::*;

use super::Matrix;

pub const MAX_ROWS: usize = 8;
pub const MAX_COLUMNS: usize = 9;

/// Parameters for generating matrices. Entries default to small integers so that elimination
/// stays well conditioned.
#[derive(Debug, Clone)]
pub struct MatrixArbParams {
    pub rows: BoxedStrategy<usize>,
    pub columns: BoxedStrategy<usize>,
    pub entries: BoxedStrategy<f64>,
    /// Only used by [`Matrix::arbitrary_rref_with`]: never put a pivot in the constant column.
    pub consistent: bool,
}

impl Default for MatrixArbParams {
    fn default() -> Self {
        Self {
            rows: (1..=MAX_ROWS).boxed(),
            columns: (1..=MAX_COLUMNS).boxed(),
            entries: (-9i32..=9).prop_map(f64::from).boxed(),
            consistent: false,
        }
    }
}

impl Arbitrary for Matrix {
    type Parameters = MatrixArbParams;
    type Strategy = BoxedStrategy<Self>;

    fn arbitrary_with(args: Self::Parameters) -> Self::Strategy {
        let entries = args.entries;
        (args.rows, args.columns)
            .prop_flat_map(move |(rows, columns)| {
                proptest::collection::vec(proptest::collection::vec(entries.clone(), columns), rows)
            })
            .prop_filter_map("matrix must have rows and columns", |v| {
                Matrix::from_rows(v).ok()
            })
            .boxed()
    }
}

impl Matrix {
    /// Generate an arbitrary matrix in reduced row echelon form. The pivot columns are a random
    /// increasing sequence, the remaining entries of the pivot rows are drawn from
    /// `args.entries` and the rows below the last pivot are zero.
    pub fn arbitrary_rref_with(args: MatrixArbParams) -> impl Strategy<Value = Self> {
        let entries = args.entries;
        let consistent = args.consistent;
        (args.rows, args.columns)
            .prop_flat_map(move |(rows, columns)| {
                let pivot_range = if consistent { columns.saturating_sub(1) } else { columns };
                let candidates: Vec<usize> = (0..pivot_range).collect();
                (
                    proptest::sample::subsequence(candidates, 0..=rows.min(pivot_range)),
                    proptest::collection::vec(
                        proptest::collection::vec(entries.clone(), columns),
                        rows,
                    ),
                )
            })
            .prop_filter_map("matrix must have rows and columns", |(pivots, mut vectors)| {
                for (row, v) in vectors.iter_mut().enumerate() {
                    let Some(&pivot) = pivots.get(row) else {
                        v.iter_mut().for_each(|x| *x = 0.0);
                        continue;
                    };
                    v[..pivot].iter_mut().for_each(|x| *x = 0.0);
                    for &col in &pivots {
                        v[col] = 0.0;
                    }
                    v[pivot] = 1.0;
                }
                Matrix::from_rows(vectors).ok()
            })
    }

    pub fn arbitrary_rref() -> impl Strategy<Value = Self> {
        Self::arbitrary_rref_with(MatrixArbParams::default())
    }
}
