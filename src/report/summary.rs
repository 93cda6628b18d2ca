//! Terminal rendering of projected chart series

use comfy_table::{presets::UTF8_FULL_CONDENSED, Attribute, Cell, Table};
use console::style;

use crate::pipeline::{
    AggregatedSeries, ChartData, ChartSpec, RadarProfile, ScatterPoint, StackedSeries,
};

/// Scatter rows shown in the terminal preview; the projected series itself
/// still carries up to the full point cap
const SCATTER_PREVIEW_ROWS: usize = 10;

/// Render a projected chart as an indented terminal table
pub fn display_chart(spec: &ChartSpec, data: &ChartData) {
    println!();
    println!(
        "    {} {}",
        style("📈").cyan(),
        style(format!("{} CHART", spec.kind).to_uppercase())
            .white()
            .bold()
    );
    println!("    {}", style("─".repeat(50)).dim());
    println!();

    let table = match data {
        ChartData::Aggregated(series) => aggregated_table(spec, series),
        ChartData::Scatter(points) => scatter_table(spec, points),
        ChartData::Stacked(series) => stacked_table(series),
        ChartData::Radar(profile) => radar_table(profile),
    };

    for line in table.to_string().lines() {
        println!("    {}", line);
    }

    if let ChartData::Scatter(points) = data {
        if points.len() > SCATTER_PREVIEW_ROWS {
            println!(
                "    {}",
                style(format!(
                    "showing {} of {} points",
                    SCATTER_PREVIEW_ROWS,
                    points.len()
                ))
                .dim()
            );
        }
    }
}

fn aggregated_table(spec: &ChartSpec, series: &AggregatedSeries) -> Table {
    let value_header = match spec.value_key() {
        Some(key) => format!("{}({})", spec.aggregation, key),
        None => "count".to_string(),
    };

    let mut table = new_table(&[&spec.x_key, &value_header]);
    for (label, value) in series.labels.iter().zip(&series.values) {
        table.add_row(vec![Cell::new(label), Cell::new(format_value(*value))]);
    }
    table
}

fn scatter_table(spec: &ChartSpec, points: &[ScatterPoint]) -> Table {
    let mut table = new_table(&[&spec.x_key, &spec.y_key, "churn"]);
    for point in points.iter().take(SCATTER_PREVIEW_ROWS) {
        table.add_row(vec![
            Cell::new(format_value(point.x)),
            Cell::new(format_value(point.y)),
            Cell::new(point.churn_class),
        ]);
    }
    table
}

fn stacked_table(series: &StackedSeries) -> Table {
    let mut table = new_table(&["Category", "Retained (churn=0)", "Churned (churn=1)"]);
    for (i, label) in series.labels.iter().enumerate() {
        table.add_row(vec![
            Cell::new(label),
            Cell::new(format_value(series.retained[i])),
            Cell::new(format_value(series.churned[i])),
        ]);
    }
    table
}

fn radar_table(profile: &RadarProfile) -> Table {
    let mut table = new_table(&["Metric", "Retained mean", "Churned mean"]);
    for (i, metric) in profile.metrics.iter().enumerate() {
        table.add_row(vec![
            Cell::new(metric),
            Cell::new(format_value(profile.retained_means[i])),
            Cell::new(format_value(profile.churned_means[i])),
        ]);
    }
    table
}

fn new_table(headers: &[&str]) -> Table {
    let mut table = Table::new();
    table.load_preset(UTF8_FULL_CONDENSED);
    table.set_header(
        headers
            .iter()
            .map(|h| Cell::new(h).add_attribute(Attribute::Bold))
            .collect::<Vec<_>>(),
    );
    table
}

/// Whole numbers print without a fractional part, everything else with two
/// decimal places
fn format_value(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{:.0}", value)
    } else {
        format!("{:.2}", value)
    }
}
