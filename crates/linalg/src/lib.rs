//! Augmented matrices over `f64` and the Gauss-Jordan machinery used to solve linear systems:
//! row echelon form, reduced row echelon form with a fixed numerical cleanup, consistency checks
//! and the split of variables into leading and free ones.

pub mod error;
pub mod matrix;
pub mod precision;

pub use error::ShapeError;
