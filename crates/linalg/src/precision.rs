//! The fixed tolerances applied after elimination. Nothing here adapts to the input: the same
//! snap and rounding are used for every matrix so that output is reproducible.

/// Entries of a reduced matrix with absolute value below this are replaced by exactly `0.0`.
pub const ZERO_TOLERANCE: f64 = 1e-4;

/// Number of decimal digits kept in a reduced matrix.
pub const MATRIX_DIGITS: usize = 4;

/// Number of decimal digits kept in solution values.
pub const SOLUTION_DIGITS: usize = 2;

/// Rounds `x` to `digits` decimal places. The exact binary value of `x` is rounded, ties going to
/// the even digit, so `0.125` becomes `0.12` and `2.675` (stored slightly below) becomes `2.67`.
/// A result of negative zero is returned as `0.0`.
pub fn round_to(x: f64, digits: usize) -> f64 {
    // Float formatting expands the exact value, which is what makes ties come out even.
    let rounded = format!("{x:.digits$}").parse().unwrap_or(x);
    if rounded == 0.0 {
        0.0
    } else {
        rounded
    }
}

/// The cleanup applied to every cell of a reduced matrix.
pub fn snap(x: f64) -> f64 {
    if x.abs() < ZERO_TOLERANCE {
        0.0
    } else {
        round_to(x, MATRIX_DIGITS)
    }
}
