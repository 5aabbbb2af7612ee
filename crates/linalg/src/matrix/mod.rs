mod consistency;
mod matrix_inner;
mod pivots;
mod row_reduce;

#[cfg(feature = "proptest")]
pub mod arbitrary;

pub use matrix_inner::Matrix;
pub use pivots::PivotSet;
pub use row_reduce::reduced_row_echelon_form;
