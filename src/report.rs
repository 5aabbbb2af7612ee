use std::fmt;

use crate::{Reduction, SolveResult};

/// The console report for a solved system. With `quiet` the input and reduced matrices are left
/// out.
pub fn text_report(reduction: &Reduction, quiet: bool) -> String {
    Report { reduction, quiet }.to_string()
}

/// Displays as the text report, see [`text_report`].
#[derive(Debug, Clone, Copy)]
pub struct Report<'a> {
    pub reduction: &'a Reduction,
    pub quiet: bool,
}

impl fmt::Display for Report<'_> {
    fn fmt(&self, out: &mut fmt::Formatter) -> fmt::Result {
        let Self { reduction, quiet } = *self;
        if !quiet {
            writeln!(out, "Matrix Before Converting:")?;
            write!(out, "{}", reduction.input)?;
            writeln!(out)?;
            writeln!(out, "After Converting to Reduced Row Echelon Form:")?;
            write!(out, "{}", reduction.rref)?;
            writeln!(out)?;
        }

        match &reduction.result {
            SolveResult::Inconsistent => {
                writeln!(out, "The system is Inconsistent.")?;
                writeln!(out)?;
                writeln!(out, "Cannot Solve.")?;
            }
            SolveResult::Consistent { pivots, solution } => {
                writeln!(out, "The system is Consistent.")?;
                writeln!(out)?;
                writeln!(out, "Lead Variables (Pivot Columns): {:?}", pivots.lead_vars())?;
                writeln!(out, "Free Variables: {:?}", pivots.free_vars())?;
                writeln!(out)?;
                writeln!(out, "The Linear Equations are:")?;
                for equation in &reduction.equations {
                    writeln!(out, "{equation}")?;
                }
                writeln!(out)?;
                writeln!(out, "The Solutions are:")?;
                write!(out, "{solution}")?;
            }
        }
        Ok(())
    }
}
