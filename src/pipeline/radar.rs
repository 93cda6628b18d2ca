//! Radar projection: behavioral profile of retained vs churned customers

use anyhow::Result;
use polars::prelude::*;
use serde::{Deserialize, Serialize};

use crate::pipeline::churn::{is_churned, is_retained, resolve_churn_key};
use crate::pipeline::columns::column_as_f64;
use crate::pipeline::project::{ChartOutcome, Unsuitable};

/// Behavioral metrics compared across churn classes, in display order.
/// Column names follow the e-commerce churn dataset schema.
pub const PROFILE_METRICS: [&str; 5] = [
    "SatisfactionScore",
    "HourSpendOnApp",
    "NumberOfDeviceRegistered",
    "NumberOfAddress",
    "Complain",
];

/// Minimum number of available metrics for the profile to be meaningful
pub const MIN_PROFILE_METRICS: usize = 3;

/// Per-metric mean values for each churn class, aligned by metric index
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RadarProfile {
    pub metrics: Vec<String>,
    #[serde(rename = "retainedMeans")]
    pub retained_means: Vec<f64>,
    #[serde(rename = "churnedMeans")]
    pub churned_means: Vec<f64>,
}

/// Compute per-metric group means split by churn class.
///
/// Only metrics from [`PROFILE_METRICS`] that exist as columns participate,
/// in allow-list order. Missing and non-numeric cells count toward the mean
/// as 0 (the group aggregator excludes them instead; both policies are kept
/// deliberately). A class with no rows gets a mean of 0 for every metric.
///
/// Requires a resolvable churn column and at least [`MIN_PROFILE_METRICS`]
/// available metrics; otherwise the projection is reported as not applicable.
pub fn radar_profile(df: &DataFrame) -> Result<ChartOutcome<RadarProfile>> {
    let Some(churn_key) = resolve_churn_key(df) else {
        return Ok(ChartOutcome::NotApplicable(Unsuitable::NoChurnColumn));
    };

    let column_names: Vec<String> = df
        .get_column_names()
        .iter()
        .map(|name| name.to_string())
        .collect();
    let available: Vec<&str> = PROFILE_METRICS
        .iter()
        .copied()
        .filter(|metric| column_names.iter().any(|name| name == metric))
        .collect();

    if available.len() < MIN_PROFILE_METRICS {
        return Ok(ChartOutcome::NotApplicable(Unsuitable::TooFewMetrics {
            found: available.len(),
            min: MIN_PROFILE_METRICS,
        }));
    }

    let churn = column_as_f64(df.column(&churn_key)?)?;
    let retained_rows: Vec<usize> = class_rows(&churn, is_retained);
    let churned_rows: Vec<usize> = class_rows(&churn, is_churned);

    let mut profile = RadarProfile::default();
    for metric in available {
        let cells = column_as_f64(df.column(metric)?)?;
        profile.retained_means.push(zero_filled_mean(&cells, &retained_rows));
        profile.churned_means.push(zero_filled_mean(&cells, &churned_rows));
        profile.metrics.push(metric.to_string());
    }

    Ok(ChartOutcome::Ready(profile))
}

fn class_rows(churn: &[Option<f64>], class: fn(f64) -> bool) -> Vec<usize> {
    churn
        .iter()
        .enumerate()
        .filter(|(_, v)| matches!(v, Some(value) if class(*value)))
        .map(|(i, _)| i)
        .collect()
}

/// Mean over a row subset with missing cells counted as 0
fn zero_filled_mean(cells: &[Option<f64>], rows: &[usize]) -> f64 {
    if rows.is_empty() {
        return 0.0;
    }
    let sum: f64 = rows.iter().map(|&i| cells[i].unwrap_or(0.0)).sum();
    sum / rows.len() as f64
}
