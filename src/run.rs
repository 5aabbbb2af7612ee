use linsys::report::text_report;
use linsys::utils::{self, Config};

/// Reads the matrix, solves the system and renders the outcome as requested by `config`.
pub fn solve(config: &Config) -> anyhow::Result<String> {
    let matrix = match &config.input {
        Some(path) => utils::read_matrix(path)?,
        None => utils::query_matrix()?,
    };
    tracing::debug!(rows = matrix.rows(), columns = matrix.columns(), "read matrix");

    let reduction = linsys::solve(matrix)?;
    if config.json {
        let mut json = serde_json::to_string_pretty(&reduction)?;
        json.push('\n');
        Ok(json)
    } else {
        Ok(text_report(&reduction, config.quiet))
    }
}
