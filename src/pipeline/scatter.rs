//! Scatter projection with churn coloring

use anyhow::{Context, Result};
use polars::prelude::*;
use serde::{Deserialize, Serialize};

use crate::pipeline::churn::{is_churned, resolve_churn_key};
use crate::pipeline::columns::column_as_f64;

/// Maximum number of points emitted; a silent prefix truncation that keeps
/// the consuming chart responsive
pub const MAX_POINTS: usize = 2000;

/// One scatter point annotated with its churn class for coloring
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScatterPoint {
    pub x: f64,
    pub y: f64,
    /// 1 when the row's churn value is 1, else 0
    #[serde(rename = "churnClass")]
    pub churn_class: u8,
}

/// Project two numeric columns into coordinate pairs.
///
/// The first [`MAX_POINTS`] rows are emitted in original order, no sampling.
/// Missing and non-numeric coordinates coerce to 0. The churn class comes
/// from the resolved churn column; without one, every point is class 0.
/// An empty x or y key yields an empty sequence.
pub fn scatter_points(df: &DataFrame, x_key: &str, y_key: &str) -> Result<Vec<ScatterPoint>> {
    if x_key.is_empty() || y_key.is_empty() || df.height() == 0 {
        return Ok(Vec::new());
    }

    let xs = column_as_f64(
        df.column(x_key)
            .with_context(|| format!("X-axis column '{}' not found", x_key))?,
    )?;
    let ys = column_as_f64(
        df.column(y_key)
            .with_context(|| format!("Y-axis column '{}' not found", y_key))?,
    )?;

    let churn = match resolve_churn_key(df) {
        Some(key) => Some(column_as_f64(df.column(&key)?)?),
        None => None,
    };

    let take = df.height().min(MAX_POINTS);
    let mut points = Vec::with_capacity(take);
    for i in 0..take {
        let churn_class = churn
            .as_ref()
            .and_then(|cells| cells[i])
            .map(|v| u8::from(is_churned(v)))
            .unwrap_or(0);

        points.push(ScatterPoint {
            x: xs[i].unwrap_or(0.0),
            y: ys[i].unwrap_or(0.0),
            churn_class,
        });
    }

    Ok(points)
}
