//! Chart projection dispatch
//!
//! A single dispatch point selects one projector per chart family and wraps
//! its output in a tagged union, so the rendering side branches exactly once
//! on the chart data shape instead of re-checking the chart type.

use anyhow::Result;
use polars::prelude::*;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::pipeline::aggregate::{aggregate_by_group, AggregatedSeries};
use crate::pipeline::config::{ChartKind, ChartSpec};
use crate::pipeline::radar::{radar_profile, RadarProfile};
use crate::pipeline::scatter::{scatter_points, ScatterPoint};
use crate::pipeline::stacked::{stacked_churn_series, StackedSeries};

/// Reasons a chart cannot be projected from the given dataset.
///
/// These are expected, recoverable conditions - the caller renders the
/// message in place of a chart. Faults in the underlying data plumbing
/// surface separately as errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Unsuitable {
    #[error("no churn column found; expected one of: churn, exited, target")]
    NoChurnColumn,
    #[error("this chart needs a grouping column on the x-axis")]
    MissingGroupKey,
    #[error("column '{0}' not found in the dataset")]
    UnknownColumn(String),
    #[error("only {found} profile metric column(s) present; at least {min} are required")]
    TooFewMetrics { found: usize, min: usize },
}

/// Result of a projection attempt
#[derive(Debug, Clone, PartialEq)]
pub enum ChartOutcome<T> {
    /// A well-formed series, ready to render
    Ready(T),
    /// The dataset/configuration pair cannot produce this chart
    NotApplicable(Unsuitable),
}

impl<T> ChartOutcome<T> {
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> ChartOutcome<U> {
        match self {
            ChartOutcome::Ready(value) => ChartOutcome::Ready(f(value)),
            ChartOutcome::NotApplicable(reason) => ChartOutcome::NotApplicable(reason),
        }
    }
}

/// Renderer-ready chart data, one variant per chart family
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "family", content = "series", rename_all = "camelCase")]
pub enum ChartData {
    Aggregated(AggregatedSeries),
    Scatter(Vec<ScatterPoint>),
    Stacked(StackedSeries),
    Radar(RadarProfile),
}

/// Run the projector selected by the chart configuration.
///
/// Bar, horizontal bar, and doughnut charts all consume the grouped
/// aggregation. Axis keys that name a nonexistent column are reported as
/// not applicable rather than projected as zeros.
pub fn project(df: &DataFrame, spec: &ChartSpec) -> Result<ChartOutcome<ChartData>> {
    if let Some(missing) = missing_axis_column(df, spec) {
        return Ok(ChartOutcome::NotApplicable(Unsuitable::UnknownColumn(
            missing,
        )));
    }

    let outcome = match spec.kind {
        ChartKind::Bar | ChartKind::HorizontalBar | ChartKind::Doughnut => {
            let series =
                aggregate_by_group(df, &spec.x_key, spec.value_key(), spec.aggregation)?;
            ChartOutcome::Ready(ChartData::Aggregated(series))
        }
        ChartKind::Scatter => {
            ChartOutcome::Ready(ChartData::Scatter(scatter_points(df, &spec.x_key, &spec.y_key)?))
        }
        ChartKind::StackedBar => {
            stacked_churn_series(df, &spec.x_key, spec.value_key(), spec.aggregation)?
                .map(ChartData::Stacked)
        }
        ChartKind::Radar => radar_profile(df)?.map(ChartData::Radar),
    };

    Ok(outcome)
}

/// First non-empty axis key that does not name a dataset column.
/// The radar chart ignores axis keys entirely.
fn missing_axis_column(df: &DataFrame, spec: &ChartSpec) -> Option<String> {
    if spec.kind == ChartKind::Radar {
        return None;
    }

    let names: Vec<String> = df
        .get_column_names()
        .iter()
        .map(|name| name.to_string())
        .collect();

    [&spec.x_key, &spec.y_key]
        .into_iter()
        .find(|key| !key.is_empty() && !names.contains(*key))
        .cloned()
}
