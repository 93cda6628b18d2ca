//! Dataset loader for churn CSV files

use anyhow::{Context, Result};
use polars::prelude::*;
use std::path::Path;

use crate::utils::{create_spinner, finish_with_success};

/// Load a churn dataset from a CSV file.
///
/// The first line is treated as the header; cell types are inferred over the
/// first `infer_schema_length` rows (0 means full scan). A file that fails to
/// parse, has no columns, or has no data rows is rejected outright - the
/// pipeline never sees a partial dataset.
pub fn load_dataset(path: &Path, infer_schema_length: usize) -> Result<DataFrame> {
    let schema_length = if infer_schema_length == 0 {
        None
    } else {
        Some(infer_schema_length)
    };

    let df = LazyCsvReader::new(path)
        .with_has_header(true)
        .with_infer_schema_length(schema_length)
        .finish()
        .with_context(|| format!("Failed to read CSV file: {}", path.display()))?
        .collect()
        .with_context(|| format!("Failed to parse CSV file: {}", path.display()))?;

    if df.width() == 0 {
        anyhow::bail!("CSV file has no columns: {}", path.display());
    }
    if df.height() == 0 {
        anyhow::bail!("CSV file has no data rows: {}", path.display());
    }

    Ok(df)
}

/// Load a dataset with a spinner, returning the frame plus display statistics
/// (row count, column count, estimated memory in MB).
pub fn load_dataset_with_progress(
    path: &Path,
    infer_schema_length: usize,
) -> Result<(DataFrame, usize, usize, f64)> {
    let spinner = create_spinner("Loading dataset...");
    let df = load_dataset(path, infer_schema_length)?;
    finish_with_success(&spinner, "Dataset loaded");

    let (rows, cols) = df.shape();
    let memory_mb = df.estimated_size() as f64 / (1024.0 * 1024.0);

    Ok((df, rows, cols, memory_mb))
}

/// Read just the column names from a CSV file (cheap schema-only scan)
pub fn get_column_names(path: &Path) -> Result<Vec<String>> {
    let schema = LazyCsvReader::new(path)
        .with_has_header(true)
        .with_infer_schema_length(Some(100))
        .finish()
        .with_context(|| format!("Failed to read CSV file: {}", path.display()))?
        .collect_schema()
        .with_context(|| format!("Failed to read CSV header: {}", path.display()))?;

    Ok(schema.iter_names().map(|name| name.to_string()).collect())
}
