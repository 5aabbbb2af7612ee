use linalg::matrix::{
    arbitrary::{MatrixArbParams, MAX_COLUMNS, MAX_ROWS},
    Matrix, PivotSet,
};
use linalg::precision::ZERO_TOLERANCE;
use proptest::prelude::*;

/// An arbitrary matrix whose entries are small integers.
fn arb_matrix() -> impl Strategy<Value = Matrix> {
    any::<Matrix>()
}

/// An arbitrary matrix whose entries are not integers, so that elimination produces values that
/// need rounding.
fn arb_fractional_matrix() -> impl Strategy<Value = Matrix> {
    any_with::<Matrix>(MatrixArbParams {
        rows: (1..=MAX_ROWS).boxed(),
        columns: (1..=MAX_COLUMNS).boxed(),
        entries: (-1000i32..=1000).prop_map(|x| f64::from(x) / 7.0).boxed(),
        ..Default::default()
    })
}

/// The pivot columns of a reduced matrix, one per non-zero row.
fn pivot_columns(m: &Matrix) -> Vec<Option<usize>> {
    (0..m.rows())
        .map(|row| m[row].iter().position(|&x| x != 0.0))
        .collect()
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 512,
        max_shrink_iters: 100_000,
        .. ProptestConfig::default()
    })]

    /// Each pivot is 1, it is the only non-zero entry in its column, and the pivots move strictly
    /// to the right going down. Zero rows come last.
    #[test]
    fn has_unique_pivots(mut m in arb_matrix()) {
        let rank = m.row_reduce();
        let pivots = pivot_columns(&m);
        prop_assert!(pivots[..rank].iter().all(Option::is_some));
        prop_assert!(pivots[rank..].iter().all(Option::is_none));

        let pivots: Vec<usize> = pivots.into_iter().flatten().collect();
        prop_assert!(pivots.windows(2).all(|w| w[0] < w[1]));
        for (row, &col) in pivots.iter().enumerate() {
            prop_assert_eq!(m[row][col], 1.0);
            for other in (0..m.rows()).filter(|&r| r != row) {
                prop_assert_eq!(m[other][col], 0.0);
            }
        }
    }

    /// Nothing between zero and the tolerance survives the cleanup.
    #[test]
    fn has_no_small_entries(mut m in arb_fractional_matrix()) {
        m.row_reduce();
        for row in m.iter() {
            for &x in row {
                prop_assert!(x == 0.0 || x.abs() >= ZERO_TOLERANCE, "{} in\n{}", x, m);
            }
        }
    }

    /// Reducing again changes nothing.
    #[test]
    fn is_idempotent(mut m in arb_fractional_matrix()) {
        m.row_reduce();
        let reduced = m.clone();
        m.row_reduce();
        prop_assert_eq!(reduced, m);
    }

    /// A matrix that is already reduced is left alone.
    #[test]
    fn fixes_reduced_matrices(m in Matrix::arbitrary_rref()) {
        let mut reduced = m.clone();
        reduced.row_reduce();
        prop_assert_eq!(m, reduced);
    }

    /// Leading and free variables partition the variables.
    #[test]
    fn classifies_every_variable(mut m in arb_matrix()) {
        m.row_reduce();
        let pivots = PivotSet::classify(&m);
        let mut all: Vec<usize> = pivots.lead_vars().iter().chain(pivots.free_vars()).copied().collect();
        all.sort_unstable();
        prop_assert_eq!(all, (1..=m.variables()).collect::<Vec<_>>());
    }

    /// A reduced system is inconsistent exactly when the constant column holds a pivot.
    #[test]
    fn detects_contradictions(mut m in arb_matrix()) {
        m.row_reduce();
        let constant = m.columns() - 1;
        let pivot_in_constant = pivot_columns(&m).contains(&Some(constant));
        prop_assert_eq!(m.is_consistent(), !pivot_in_constant);
    }
}
