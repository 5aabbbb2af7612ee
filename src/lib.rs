#![warn(clippy::if_not_else)]
#![warn(clippy::needless_continue)]
#![warn(clippy::redundant_closure_for_method_calls)]
#![warn(clippy::explicit_iter_loop)]

//! Solve systems of linear equations given as augmented matrices.
//!
//! The pipeline is
//! ```text
//! Matrix ──row_reduce──▶ RREF ──┬─ is_consistent ──┐
//!                               ├─ PivotSet::classify ─▶ solve_system ─▶ SolveResult
//!                               └─ format_equations
//! ```
//! and [`solve`] runs all of it. The pieces are public so that they can be used on their own.
//!
//! # Example
//! ```
//! let reduction = linsys::solve_rows(vec![
//!     vec![1.0, 2.0, 0.0, 3.0],
//!     vec![0.0, 0.0, 1.0, 4.0],
//! ])
//! .unwrap();
//!
//! let solution = reduction.result.solution().unwrap();
//! assert_eq!(solution.get(1).unwrap().to_string(), "3.00 - 2.00*t1");
//! assert_eq!(solution.get(2).unwrap().to_string(), "t1");
//! ```

pub mod equations;
pub mod error;
pub mod report;
pub mod solver;
pub mod utils;

use serde::Serialize;

pub use error::{Error, Result};
pub use linalg::matrix::{reduced_row_echelon_form, Matrix, PivotSet};
pub use linalg::ShapeError;
pub use solver::{Parameter, ParametricValue, Solution, SolutionEntry, SolveResult};

/// Everything produced while solving one system.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Reduction {
    /// The matrix as given.
    pub input: Matrix,
    /// Its reduced row echelon form.
    pub rref: Matrix,
    /// One equation per row of `rref` with a non-zero coefficient.
    pub equations: Vec<String>,
    pub result: SolveResult,
}

/// Reduces `matrix`, checks consistency and, if the system is consistent, solves it in terms of
/// the free parameters.
#[tracing::instrument(skip_all, fields(rows = matrix.rows(), columns = matrix.columns()))]
pub fn solve(matrix: Matrix) -> Result<Reduction> {
    let input = matrix.clone();
    let rref = reduced_row_echelon_form(matrix);
    let equations = equations::format_equations(&rref);

    let result = if rref.is_consistent() {
        let pivots = PivotSet::classify(&rref);
        let solution = solver::solve_system(&rref, &pivots)?;
        tracing::info!(
            rank = pivots.rank(),
            parameters = solution.parameters(),
            "consistent"
        );
        SolveResult::Consistent { pivots, solution }
    } else {
        tracing::info!("inconsistent");
        SolveResult::Inconsistent
    };

    Ok(Reduction {
        input,
        rref,
        equations,
        result,
    })
}

/// [`solve`] for a list of rows. Rows of unequal length, or no rows or columns at all, are
/// rejected with [`Error::Shape`] before any elimination happens.
pub fn solve_rows(rows: Vec<Vec<f64>>) -> Result<Reduction> {
    solve(Matrix::from_rows(rows)?)
}
