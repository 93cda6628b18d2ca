//! Column materialization helpers
//!
//! The projectors work row-wise over loosely-typed cells, so columns are
//! materialized once into plain vectors: numeric cells as `Option<f64>`
//! (None for missing or non-numeric) and group labels as their canonical
//! string rendering.

use anyhow::Result;
use polars::prelude::*;
use std::collections::HashMap;

/// Label used for null cells in a grouping column
pub const NULL_LABEL: &str = "null";

/// Materialize a column as numeric cells.
///
/// The cast is non-strict: missing values and cells that cannot be read as a
/// number come back as `None`, leaving the fallback policy (exclude vs
/// zero-fill) to the caller.
pub fn column_as_f64(col: &Column) -> Result<Vec<Option<f64>>> {
    let cast = col.cast(&DataType::Float64)?;
    Ok(cast.f64()?.into_iter().collect())
}

/// Materialize a column as group labels (one canonical string per cell).
///
/// Numeric cells render without a trailing fractional part (3.0 -> "3"), so
/// equal numbers always land in the same group. Null cells stay `None`.
pub fn column_as_labels(col: &Column) -> Result<Vec<Option<String>>> {
    let labels: Vec<Option<String>> = match col.dtype() {
        DataType::String => col
            .str()?
            .into_iter()
            .map(|v| v.map(|s| s.to_string()))
            .collect(),
        DataType::Boolean => col
            .bool()?
            .into_iter()
            .map(|v| v.map(|b| b.to_string()))
            .collect(),
        DataType::Int8 | DataType::Int16 | DataType::Int32 | DataType::Int64 => {
            let cast = col.cast(&DataType::Int64)?;
            cast.i64()?
                .into_iter()
                .map(|v| v.map(|n| n.to_string()))
                .collect()
        }
        DataType::UInt8 | DataType::UInt16 | DataType::UInt32 | DataType::UInt64 => {
            let cast = col.cast(&DataType::UInt64)?;
            cast.u64()?
                .into_iter()
                .map(|v| v.map(|n| n.to_string()))
                .collect()
        }
        DataType::Float32 | DataType::Float64 => {
            let cast = col.cast(&DataType::Float64)?;
            cast.f64()?
                .into_iter()
                .map(|v| v.map(|n| format!("{}", n)))
                .collect()
        }
        _ => {
            let cast = col.cast(&DataType::String)?;
            cast.str()?
                .into_iter()
                .map(|v| v.map(|s| s.to_string()))
                .collect()
        }
    };

    Ok(labels)
}

/// Partition row indices by group label, preserving encounter order.
///
/// Null labels become the literal [`NULL_LABEL`] group.
pub fn partition_by_label(labels: &[Option<String>]) -> Vec<(String, Vec<usize>)> {
    let mut groups: Vec<(String, Vec<usize>)> = Vec::new();
    let mut index: HashMap<String, usize> = HashMap::new();

    for (row, label) in labels.iter().enumerate() {
        let key = label.clone().unwrap_or_else(|| NULL_LABEL.to_string());
        let slot = *index.entry(key.clone()).or_insert_with(|| {
            groups.push((key, Vec::new()));
            groups.len() - 1
        });
        groups[slot].1.push(row);
    }

    groups
}
