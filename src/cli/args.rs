//! Command-line argument definitions using clap

use clap::Parser;
use std::path::PathBuf;

use crate::pipeline::{Aggregation, ChartKind, ChartSpec};

/// Churnlens - project a churn CSV dataset into chart-ready series
#[derive(Parser, Debug)]
#[command(name = "churnlens")]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Input CSV file path
    #[arg(short, long)]
    pub input: PathBuf,

    /// Chart family to project
    #[arg(short = 'c', long, value_enum, default_value_t = ChartKind::Bar)]
    pub chart: ChartKind,

    /// X-axis column: the grouping column for bar/doughnut/stacked charts,
    /// the x coordinate for scatter. Ignored by radar.
    #[arg(short = 'x', long, default_value = "")]
    pub x_axis: String,

    /// Y-axis column: the value column for sum/avg aggregation,
    /// the y coordinate for scatter. Optional for count aggregation.
    #[arg(short = 'y', long, default_value = "")]
    pub y_axis: String,

    /// Aggregation applied to the value column
    #[arg(short = 'a', long, value_enum, default_value_t = Aggregation::Count)]
    pub aggregation: Aggregation,

    /// Write the projected series to a JSON file
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// List the dataset's columns and the resolved churn column, then exit
    #[arg(long, default_value = "false")]
    pub list_columns: bool,

    /// Number of rows to use for schema inference.
    /// Higher values improve type detection for ambiguous columns but may be slower.
    /// Use 0 for a full table scan.
    #[arg(long, default_value = "10000")]
    pub infer_schema_length: usize,
}

impl Args {
    /// Build the immutable chart configuration consumed by the pipeline
    pub fn chart_spec(&self) -> ChartSpec {
        ChartSpec {
            kind: self.chart,
            x_key: self.x_axis.clone(),
            y_key: self.y_axis.clone(),
            aggregation: self.aggregation,
        }
    }
}
