//! Reading the solution of a system off its reduced row echelon form.
//!
//! Every free variable becomes a parameter `t1, t2, ...` and every leading variable is expressed
//! as a constant plus a combination of those parameters. The parameters are kept symbolic: a
//! value like `3 - 2*t1` is stored as the constant `3` and the term `-2*t1`, never evaluated at
//! some arbitrary choice of `t1`.

use std::collections::BTreeMap;
use std::fmt;

use linalg::matrix::{Matrix, PivotSet};
use linalg::precision::{round_to, SOLUTION_DIGITS};
use serde::{Serialize, Serializer};

use crate::error::{Error, Result};

/// A free parameter. `Parameter::new(1)` is `t1`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Parameter(usize);

impl Parameter {
    pub fn new(index: usize) -> Self {
        debug_assert!(index >= 1, "parameters are numbered from 1");
        Self(index)
    }

    pub fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for Parameter {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "t{}", self.0)
    }
}

impl Serialize for Parameter {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Term {
    pub coefficient: f64,
    pub parameter: Parameter,
}

/// `constant + Σ coefficient * parameter`.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ParametricValue {
    constant: f64,
    terms: Vec<Term>,
}

impl ParametricValue {
    pub fn new(constant: f64) -> Self {
        Self {
            constant,
            terms: Vec::new(),
        }
    }

    pub fn with_term(mut self, coefficient: f64, parameter: Parameter) -> Self {
        self.terms.push(Term {
            coefficient,
            parameter,
        });
        self
    }

    pub fn constant(&self) -> f64 {
        self.constant
    }

    pub fn terms(&self) -> &[Term] {
        &self.terms
    }

    /// The value for a choice of parameters, where `parameters[k]` is the value of `t(k+1)`.
    /// Returns `None` if a parameter the value depends on is missing.
    pub fn evaluate(&self, parameters: &[f64]) -> Option<f64> {
        self.terms.iter().try_fold(self.constant, |acc, term| {
            let t = parameters.get(term.parameter.index() - 1)?;
            Some(acc + term.coefficient * t)
        })
    }

    /// Rounds the constant and the coefficients. Terms whose coefficient rounds to zero are
    /// dropped.
    fn rounded(self, digits: usize) -> Self {
        Self {
            constant: round_to(self.constant, digits),
            terms: self
                .terms
                .into_iter()
                .map(|term| Term {
                    coefficient: round_to(term.coefficient, digits),
                    ..term
                })
                .filter(|term| term.coefficient != 0.0)
                .collect(),
        }
    }
}

/// Prints e.g. `3.00 - 2.00*t1`. A zero constant is left out when there are terms.
impl fmt::Display for ParametricValue {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let mut terms = self.terms.iter();
        if self.constant != 0.0 || self.terms.is_empty() {
            write!(f, "{:.2}", self.constant)?;
        } else if let Some(first) = terms.next() {
            write!(f, "{:.2}*{}", first.coefficient, first.parameter)?;
        }
        for term in terms {
            let sign = if term.coefficient < 0.0 { '-' } else { '+' };
            write!(f, " {sign} {:.2}*{}", term.coefficient.abs(), term.parameter)?;
        }
        Ok(())
    }
}

/// What a single variable is in a solution.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum SolutionEntry {
    /// A free variable, standing for the given parameter.
    Parameter(Parameter),
    /// A leading variable.
    Resolved(ParametricValue),
}

impl SolutionEntry {
    pub fn as_parameter(&self) -> Option<Parameter> {
        match self {
            Self::Parameter(t) => Some(*t),
            Self::Resolved(_) => None,
        }
    }

    pub fn evaluate(&self, parameters: &[f64]) -> Option<f64> {
        match self {
            Self::Parameter(t) => parameters.get(t.index() - 1).copied(),
            Self::Resolved(value) => value.evaluate(parameters),
        }
    }
}

impl fmt::Display for SolutionEntry {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::Parameter(t) => fmt::Display::fmt(t, f),
            Self::Resolved(value) => fmt::Display::fmt(value, f),
        }
    }
}

/// The value of every variable of a consistent system, keyed by the 1-based variable index.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Solution {
    entries: BTreeMap<usize, SolutionEntry>,
}

impl Solution {
    pub fn get(&self, var: usize) -> Option<&SolutionEntry> {
        self.entries.get(&var)
    }

    /// Pairs of (variable, entry) in increasing variable order.
    pub fn iter(&self) -> impl Iterator<Item = (usize, &SolutionEntry)> + '_ {
        self.entries.iter().map(|(&var, entry)| (var, entry))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The number of free parameters.
    pub fn parameters(&self) -> usize {
        self.entries
            .values()
            .filter(|entry| entry.as_parameter().is_some())
            .count()
    }

    /// Whether the system has exactly one solution.
    pub fn is_unique(&self) -> bool {
        self.parameters() == 0
    }

    /// The values of all variables for a choice of parameters, see
    /// [`ParametricValue::evaluate`].
    pub fn evaluate(&self, parameters: &[f64]) -> Option<Vec<f64>> {
        self.entries
            .values()
            .map(|entry| entry.evaluate(parameters))
            .collect()
    }
}

/// One `xi = value` line per variable.
impl fmt::Display for Solution {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for (var, entry) in self.iter() {
            writeln!(f, "x{var} = {entry}")?;
        }
        Ok(())
    }
}

/// The outcome of solving a system. Check the variant before looking for a solution.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum SolveResult {
    Consistent {
        pivots: PivotSet,
        solution: Solution,
    },
    Inconsistent,
}

impl SolveResult {
    pub fn is_consistent(&self) -> bool {
        matches!(self, Self::Consistent { .. })
    }

    pub fn pivots(&self) -> Option<&PivotSet> {
        match self {
            Self::Consistent { pivots, .. } => Some(pivots),
            Self::Inconsistent => None,
        }
    }

    pub fn solution(&self) -> Option<&Solution> {
        match self {
            Self::Consistent { solution, .. } => Some(solution),
            Self::Inconsistent => None,
        }
    }
}

/// Expresses every variable of a consistent system in reduced row echelon form in terms of the
/// free parameters. `pivots` must be [`PivotSet::classify`] of `matrix`.
///
/// Each leading variable equals the constant of its row minus the other terms of that row. In
/// reduced row echelon form those other terms only involve free variables; finding a leading
/// variable there means the matrix was not reduced and is reported as
/// [`Error::InvariantViolation`].
///
/// # Example
/// ```
/// # use linsys::Matrix;
/// # use linsys::PivotSet;
/// # use linsys::solver::solve_system;
/// let m = Matrix::from_vec(&[vec![1.0, 2.0, 0.0, 3.0],
///                            vec![0.0, 0.0, 1.0, 4.0]]).unwrap();
/// let solution = solve_system(&m, &PivotSet::classify(&m)).unwrap();
/// assert_eq!(solution.to_string(), "x1 = 3.00 - 2.00*t1\nx2 = t1\nx3 = 4.00\n");
/// ```
#[tracing::instrument(skip_all, fields(leads = pivots.rank(), free = pivots.free_vars().len()))]
pub fn solve_system(matrix: &Matrix, pivots: &PivotSet) -> Result<Solution> {
    let mut entries = BTreeMap::new();
    for (k, &var) in pivots.free_vars().iter().enumerate() {
        entries.insert(var, SolutionEntry::Parameter(Parameter::new(k + 1)));
    }

    for (row, lead) in pivots.leads() {
        let mut value = ParametricValue::new(matrix.constant(row));
        for (column, &c) in matrix.coefficients(row).iter().enumerate() {
            let var = column + 1;
            if var == lead || c == 0.0 {
                continue;
            }
            let Some(index) = pivots.parameter_index(var) else {
                tracing::error!(row, column, "leading column is not cleared");
                return Err(Error::InvariantViolation { row, column });
            };
            value = value.with_term(-c, Parameter::new(index));
        }
        entries.insert(
            lead,
            SolutionEntry::Resolved(value.rounded(SOLUTION_DIGITS)),
        );
    }

    Ok(Solution { entries })
}

#[cfg(test)]
mod tests {
    use super::*;
    use expect_test::expect;
    use rstest::rstest;

    fn solve(rows: &[Vec<f64>]) -> Result<Solution> {
        let m = Matrix::from_vec(rows).unwrap();
        solve_system(&m, &PivotSet::classify(&m))
    }

    #[test]
    fn test_unique_solution() {
        let solution = solve(&[
            vec![1.0, 0.0, 0.0, 2.0],
            vec![0.0, 1.0, 0.0, 3.0],
            vec![0.0, 0.0, 1.0, -1.0],
        ])
        .unwrap();
        assert!(solution.is_unique());
        assert_eq!(solution.evaluate(&[]), Some(vec![2.0, 3.0, -1.0]));
        expect![[r#"
            x1 = 2.00
            x2 = 3.00
            x3 = -1.00
        "#]]
        .assert_eq(&solution.to_string());
    }

    #[test]
    fn test_free_variable_stays_symbolic() {
        let solution = solve(&[vec![1.0, 2.0, 0.0, 3.0], vec![0.0, 0.0, 1.0, 4.0]]).unwrap();
        assert_eq!(
            solution.get(2),
            Some(&SolutionEntry::Parameter(Parameter::new(1)))
        );
        assert_eq!(
            solution.get(1),
            Some(&SolutionEntry::Resolved(
                ParametricValue::new(3.0).with_term(-2.0, Parameter::new(1))
            ))
        );
        assert_eq!(
            solution.get(3),
            Some(&SolutionEntry::Resolved(ParametricValue::new(4.0)))
        );
        // x1 = 3 - 2 * t1 at t1 = 5
        assert_eq!(solution.evaluate(&[5.0]), Some(vec![-7.0, 5.0, 4.0]));
        assert_eq!(solution.evaluate(&[]), None);
    }

    #[test]
    fn test_parameters_follow_free_order() {
        let solution = solve(&[vec![0.0, 1.0, 0.5, 0.0, -1.5, 2.0]]).unwrap();
        assert_eq!(solution.parameters(), 4);
        expect![[r#"
            x1 = t1
            x2 = 2.00 - 0.50*t2 + 1.50*t4
            x3 = t2
            x4 = t3
            x5 = t4
        "#]]
        .assert_eq(&solution.to_string());
    }

    #[test]
    fn test_leading_variable_in_other_row_is_rejected() {
        // Column 1 leads row 1 but is not cleared in row 0.
        let err = solve(&[vec![1.0, 1.0, 2.0], vec![0.0, 1.0, 1.0]]).unwrap_err();
        assert_eq!(err, Error::InvariantViolation { row: 0, column: 1 });
    }

    #[rstest]
    #[case(ParametricValue::new(0.0), "0.00")]
    #[case(ParametricValue::new(0.0).with_term(-1.0, Parameter::new(2)), "-1.00*t2")]
    #[case(
        ParametricValue::new(0.0)
            .with_term(1.0, Parameter::new(1))
            .with_term(-0.25, Parameter::new(2)),
        "1.00*t1 - 0.25*t2"
    )]
    #[case(ParametricValue::new(-1.5).with_term(2.0, Parameter::new(1)), "-1.50 + 2.00*t1")]
    fn test_display(#[case] value: ParametricValue, #[case] expected: &str) {
        assert_eq!(value.to_string(), expected);
    }

    #[test]
    fn test_rounding() {
        let value = ParametricValue::new(1.23456)
            .with_term(-0.004, Parameter::new(1))
            .with_term(0.6667, Parameter::new(2))
            .rounded(SOLUTION_DIGITS);
        assert_eq!(
            value,
            ParametricValue::new(1.23).with_term(0.67, Parameter::new(2))
        );
        assert_eq!(ParametricValue::new(-0.001).rounded(SOLUTION_DIGITS).to_string(), "0.00");
    }

    #[test]
    fn test_serialize() {
        let solution = solve(&[vec![1.0, 2.0, 3.0]]).unwrap();
        assert_eq!(
            serde_json::to_string(&solution).unwrap(),
            r#"{"1":{"kind":"resolved","value":{"constant":3.0,"terms":[{"coefficient":-2.0,"parameter":"t1"}]}},"2":{"kind":"parameter","value":"t1"}}"#
        );
        assert_eq!(
            serde_json::to_string(&SolveResult::Inconsistent).unwrap(),
            r#"{"status":"inconsistent"}"#
        );
    }
}
