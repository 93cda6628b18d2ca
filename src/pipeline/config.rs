//! Chart configuration value objects
//!
//! A `ChartSpec` captures the user's declarative intent: which chart family
//! to render, which columns feed the axes, and how numeric values are
//! reduced. It is constructed once per invocation and never mutated; a new
//! configuration replaces the old one wholesale.

use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Chart families the dashboard can render
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ChartKind {
    /// Vertical bar (comparison)
    Bar,
    /// Horizontal bar (long labels)
    HorizontalBar,
    /// Doughnut (proportions)
    Doughnut,
    /// Scatter plot (correlation)
    Scatter,
    /// Stacked bar (churn split per category)
    StackedBar,
    /// Radar (retained vs churned profile)
    Radar,
}

impl fmt::Display for ChartKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ChartKind::Bar => "bar",
            ChartKind::HorizontalBar => "horizontal-bar",
            ChartKind::Doughnut => "doughnut",
            ChartKind::Scatter => "scatter",
            ChartKind::StackedBar => "stacked-bar",
            ChartKind::Radar => "radar",
        };
        f.write_str(name)
    }
}

/// Reduction applied to a numeric column within a group
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Aggregation {
    /// Count of rows (frequency)
    Count,
    /// Sum of values
    Sum,
    /// Average of values
    Avg,
}

impl fmt::Display for Aggregation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Aggregation::Count => "count",
            Aggregation::Sum => "sum",
            Aggregation::Avg => "avg",
        };
        f.write_str(name)
    }
}

/// A complete chart configuration, consumed once per projection
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartSpec {
    pub kind: ChartKind,
    /// Grouping column for bar/doughnut/stacked charts, x coordinate for scatter
    pub x_key: String,
    /// Value column; empty means no numeric reduction (count only)
    pub y_key: String,
    pub aggregation: Aggregation,
}

impl ChartSpec {
    /// The value column, or `None` when no y-axis column was configured
    pub fn value_key(&self) -> Option<&str> {
        if self.y_key.is_empty() {
            None
        } else {
            Some(&self.y_key)
        }
    }
}
