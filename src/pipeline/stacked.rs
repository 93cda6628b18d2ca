//! Stacked-bar projection: categories split by churn class

use anyhow::{Context, Result};
use polars::prelude::*;
use serde::{Deserialize, Serialize};

use crate::pipeline::aggregate::reduce_numeric;
use crate::pipeline::churn::{is_churned, is_retained, resolve_churn_key};
use crate::pipeline::columns::{column_as_f64, column_as_labels, partition_by_label};
use crate::pipeline::config::Aggregation;
use crate::pipeline::project::{ChartOutcome, Unsuitable};

/// Maximum number of categories; smaller than the single-series cap because
/// this view renders two bars per category
pub const MAX_STACKED_GROUPS: usize = 15;

/// Per-category retained/churned values, all three sequences index-aligned
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StackedSeries {
    pub labels: Vec<String>,
    pub retained: Vec<f64>,
    pub churned: Vec<f64>,
}

/// Cross-tabulate a categorical column against the churn label.
///
/// Categories are ranked by raw row count descending (ties keep encounter
/// order) and truncated to the top [`MAX_STACKED_GROUPS`]. Each kept
/// category's rows split into retained (churn == 0) and churned (churn == 1)
/// subsets; rows with any other churn value belong to neither. Subset values
/// follow the aggregator's count/sum/avg rule, with a missing value column
/// falling back to count.
///
/// Requires a resolvable churn column and a non-empty grouping key;
/// otherwise the projection is reported as not applicable.
pub fn stacked_churn_series(
    df: &DataFrame,
    group_key: &str,
    value_key: Option<&str>,
    mode: Aggregation,
) -> Result<ChartOutcome<StackedSeries>> {
    let Some(churn_key) = resolve_churn_key(df) else {
        return Ok(ChartOutcome::NotApplicable(Unsuitable::NoChurnColumn));
    };
    if group_key.is_empty() {
        return Ok(ChartOutcome::NotApplicable(Unsuitable::MissingGroupKey));
    }
    if df.height() == 0 {
        return Ok(ChartOutcome::Ready(StackedSeries::default()));
    }

    let group_col = df
        .column(group_key)
        .with_context(|| format!("Grouping column '{}' not found", group_key))?;
    let mut groups = partition_by_label(&column_as_labels(group_col)?);

    // Rank by raw group size, not by the aggregated value
    groups.sort_by(|a, b| b.1.len().cmp(&a.1.len()));
    groups.truncate(MAX_STACKED_GROUPS);

    let churn = column_as_f64(df.column(&churn_key)?)?;
    let numeric = match value_key {
        Some(key) if mode != Aggregation::Count => {
            let col = df
                .column(key)
                .with_context(|| format!("Value column '{}' not found", key))?;
            Some(column_as_f64(col)?)
        }
        _ => None,
    };

    let mut series = StackedSeries::default();
    for (label, rows) in groups {
        let retained_rows: Vec<usize> = rows
            .iter()
            .copied()
            .filter(|&i| matches!(churn[i], Some(v) if is_retained(v)))
            .collect();
        let churned_rows: Vec<usize> = rows
            .iter()
            .copied()
            .filter(|&i| matches!(churn[i], Some(v) if is_churned(v)))
            .collect();

        series.retained.push(subset_value(&numeric, &retained_rows, mode));
        series.churned.push(subset_value(&numeric, &churned_rows, mode));
        series.labels.push(label);
    }

    Ok(ChartOutcome::Ready(series))
}

fn subset_value(numeric: &Option<Vec<Option<f64>>>, rows: &[usize], mode: Aggregation) -> f64 {
    match numeric {
        None => rows.len() as f64,
        Some(cells) => reduce_numeric(cells, rows, mode),
    }
}
