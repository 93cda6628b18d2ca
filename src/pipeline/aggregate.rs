//! Grouped aggregation for bar and doughnut charts

use anyhow::{Context, Result};
use polars::prelude::*;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

use crate::pipeline::columns::{column_as_f64, column_as_labels, partition_by_label};
use crate::pipeline::config::Aggregation;

/// Maximum number of groups returned, to bound rendering cost
pub const MAX_GROUPS: usize = 20;

/// Labels and values for a single-series chart, index-aligned
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AggregatedSeries {
    pub labels: Vec<String>,
    pub values: Vec<f64>,
}

/// Group rows by a categorical column and reduce a numeric column per group.
///
/// Groups are keyed by the string rendering of the grouping column (nulls
/// become the literal "null" group). Count mode, or a missing value column,
/// yields the group's row count. Sum/avg reduce over the value column with
/// non-numeric and missing cells excluded, not zeroed; a group with no
/// numeric cells reduces to 0. Groups come back ranked by value descending
/// (ties keep encounter order), truncated to the top [`MAX_GROUPS`].
///
/// An empty grouping key or an empty dataset yields an empty series.
pub fn aggregate_by_group(
    df: &DataFrame,
    group_key: &str,
    value_key: Option<&str>,
    mode: Aggregation,
) -> Result<AggregatedSeries> {
    if group_key.is_empty() || df.height() == 0 {
        return Ok(AggregatedSeries::default());
    }

    let group_col = df
        .column(group_key)
        .with_context(|| format!("Grouping column '{}' not found", group_key))?;
    let groups = partition_by_label(&column_as_labels(group_col)?);

    // Count mode ignores the value column entirely
    let numeric = match value_key {
        Some(key) if mode != Aggregation::Count => {
            let col = df
                .column(key)
                .with_context(|| format!("Value column '{}' not found", key))?;
            Some(column_as_f64(col)?)
        }
        _ => None,
    };

    let mut ranked: Vec<(String, f64)> = groups
        .into_iter()
        .map(|(label, rows)| {
            let value = match &numeric {
                None => rows.len() as f64,
                Some(cells) => reduce_numeric(cells, &rows, mode),
            };
            (label, value)
        })
        .collect();

    // Stable sort: equal values keep their group-encounter order
    ranked.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(Ordering::Equal));
    ranked.truncate(MAX_GROUPS);

    let (labels, values) = ranked.into_iter().unzip();
    Ok(AggregatedSeries { labels, values })
}

/// Reduce the numeric cells of a row subset under the given mode.
///
/// Missing cells are excluded from sum/avg so they cannot skew averages; an
/// empty numeric subset reduces to 0.
pub fn reduce_numeric(cells: &[Option<f64>], rows: &[usize], mode: Aggregation) -> f64 {
    let numeric: Vec<f64> = rows.iter().filter_map(|&i| cells[i]).collect();

    match mode {
        Aggregation::Count => rows.len() as f64,
        _ if numeric.is_empty() => 0.0,
        Aggregation::Sum => numeric.iter().sum(),
        Aggregation::Avg => numeric.iter().sum::<f64>() / numeric.len() as f64,
    }
}
