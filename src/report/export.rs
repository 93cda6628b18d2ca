//! JSON export of projected chart series

use std::path::Path;

use anyhow::{Context, Result};
use chrono::Utc;
use serde::Serialize;

use crate::pipeline::{ChartData, ChartSpec};

/// Metadata about the projection run
#[derive(Serialize)]
pub struct ExportMetadata {
    /// Timestamp of the projection (ISO 8601 format)
    pub timestamp: String,
    /// Churnlens version
    pub churnlens_version: String,
    /// Input file path
    pub input_file: String,
    /// Chart family
    pub chart: String,
    /// X-axis column ("" when not configured)
    pub x_axis: String,
    /// Y-axis column ("" when not configured)
    pub y_axis: String,
    /// Aggregation mode
    pub aggregation: String,
}

/// Complete chart export: metadata envelope plus the tagged series
#[derive(Serialize)]
pub struct ChartExport<'a> {
    pub metadata: ExportMetadata,
    #[serde(flatten)]
    pub chart: &'a ChartData,
}

/// Write a projected chart to a JSON file
pub fn export_chart_json(
    output_path: &Path,
    input_file: &Path,
    spec: &ChartSpec,
    data: &ChartData,
) -> Result<()> {
    let export = ChartExport {
        metadata: ExportMetadata {
            timestamp: Utc::now().to_rfc3339(),
            churnlens_version: env!("CARGO_PKG_VERSION").to_string(),
            input_file: input_file.display().to_string(),
            chart: spec.kind.to_string(),
            x_axis: spec.x_key.clone(),
            y_axis: spec.y_key.clone(),
            aggregation: spec.aggregation.to_string(),
        },
        chart: data,
    };

    let json = serde_json::to_string_pretty(&export)
        .context("Failed to serialize chart data to JSON")?;

    std::fs::write(output_path, json)
        .with_context(|| format!("Failed to write chart export to {}", output_path.display()))?;

    Ok(())
}
