use std::path::{Path, PathBuf};

use anyhow::Context;
use linalg::matrix::Matrix;

/// Settings of one run of the command line tool.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Config {
    /// Read the matrix from this file instead of prompting for it.
    pub input: Option<PathBuf>,
    /// Print JSON instead of the text report.
    pub json: bool,
    /// Leave the matrices out of the text report.
    pub quiet: bool,
}

/// Installs a `tracing` subscriber writing to stderr. The filter is read from `RUST_LOG` and
/// defaults to errors only.
pub fn init_logging() -> anyhow::Result<()> {
    use tracing_subscriber::{fmt::format::FmtSpan, prelude::*, EnvFilter};

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_span_events(FmtSpan::CLOSE),
        )
        .with(EnvFilter::from_default_env())
        .try_init()?;
    Ok(())
}

fn positive(n: usize) -> Result<usize, String> {
    if n == 0 {
        Err("must be positive".to_string())
    } else {
        Ok(n)
    }
}

/// Asks for the dimensions and then for each row of the matrix on the terminal. Rows with the
/// wrong number of entries or with entries that are not numbers are asked for again.
pub fn query_matrix() -> anyhow::Result<Matrix> {
    let rows = query::raw("Enter the number of rows (n)", positive)?;
    let columns = query::raw("Enter the number of columns (m)", positive)?;

    eprintln!("Enter the elements of the matrix row by row:");
    let vectors = (1..=rows)
        .map(|i| query::vector::<f64>(&format!("Row {i}"), columns))
        .collect::<std::io::Result<Vec<_>>>()?;
    Ok(Matrix::from_rows(vectors)?)
}

/// Parses a matrix written one row per line, entries separated by whitespace. Blank lines and
/// everything after a `#` are ignored.
pub fn parse_matrix(text: &str) -> anyhow::Result<Matrix> {
    let vectors = text
        .lines()
        .enumerate()
        .map(|(i, line)| (i + 1, line.split('#').next().unwrap_or_default().trim()))
        .filter(|(_, line)| !line.is_empty())
        .map(|(line_number, line)| {
            line.split_whitespace()
                .map(|word| {
                    word.parse::<f64>()
                        .with_context(|| format!("line {line_number}: '{word}' is not a number"))
                })
                .collect::<anyhow::Result<Vec<f64>>>()
        })
        .collect::<anyhow::Result<Vec<_>>>()?;
    Ok(Matrix::from_rows(vectors)?)
}

pub fn read_matrix(path: &Path) -> anyhow::Result<Matrix> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    parse_matrix(&text).with_context(|| format!("invalid matrix in {}", path.display()))
}
