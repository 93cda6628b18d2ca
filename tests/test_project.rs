//! Tests for the chart dispatch point

use churnlens::pipeline::{
    project, Aggregation, ChartData, ChartKind, ChartOutcome, ChartSpec, Unsuitable,
};

#[path = "common/mod.rs"]
mod common;

fn spec(kind: ChartKind, x: &str, y: &str, aggregation: Aggregation) -> ChartSpec {
    ChartSpec {
        kind,
        x_key: x.to_string(),
        y_key: y.to_string(),
        aggregation,
    }
}

#[test]
fn test_bar_family_selects_the_aggregator() {
    let df = common::create_customer_dataframe();

    for kind in [ChartKind::Bar, ChartKind::HorizontalBar, ChartKind::Doughnut] {
        let outcome = project(&df, &spec(kind, "City", "", Aggregation::Count)).unwrap();
        let ChartOutcome::Ready(ChartData::Aggregated(series)) = outcome else {
            panic!("Expected aggregated data for {}", kind);
        };
        assert_eq!(series.labels.len(), 3);
    }
}

#[test]
fn test_scatter_selects_the_scatter_projector() {
    let df = common::create_customer_dataframe();

    let outcome = project(&df, &spec(ChartKind::Scatter, "Age", "Income", Aggregation::Count))
        .unwrap();

    let ChartOutcome::Ready(ChartData::Scatter(points)) = outcome else {
        panic!("Expected scatter data");
    };
    assert_eq!(points.len(), df.height());
}

#[test]
fn test_stacked_bar_selects_the_stacked_projector() {
    let df = common::create_city_churn_dataframe();

    let outcome =
        project(&df, &spec(ChartKind::StackedBar, "City", "", Aggregation::Count)).unwrap();

    let ChartOutcome::Ready(ChartData::Stacked(series)) = outcome else {
        panic!("Expected stacked data");
    };
    assert_eq!(series.labels, vec!["A", "B"]);
}

#[test]
fn test_radar_selects_the_profile_projector() {
    let df = common::create_profile_dataframe();

    let outcome = project(&df, &spec(ChartKind::Radar, "", "", Aggregation::Count)).unwrap();

    assert!(matches!(
        outcome,
        ChartOutcome::Ready(ChartData::Radar(_))
    ));
}

#[test]
fn test_unknown_axis_column_is_not_applicable() {
    let df = common::create_customer_dataframe();

    let outcome =
        project(&df, &spec(ChartKind::Bar, "Nope", "", Aggregation::Count)).unwrap();

    assert_eq!(
        outcome,
        ChartOutcome::NotApplicable(Unsuitable::UnknownColumn("Nope".to_string()))
    );
}

#[test]
fn test_radar_ignores_axis_keys() {
    let df = common::create_profile_dataframe();

    // Stale axis keys from a previous configuration must not block the radar
    let outcome = project(
        &df,
        &spec(ChartKind::Radar, "NotAColumn", "AlsoNot", Aggregation::Count),
    )
    .unwrap();

    assert!(matches!(outcome, ChartOutcome::Ready(ChartData::Radar(_))));
}

#[test]
fn test_stacked_without_churn_column_reports_reason() {
    let df = common::create_large_scatter_dataframe(10)
        .drop("Churn")
        .unwrap();

    let outcome =
        project(&df, &spec(ChartKind::StackedBar, "Age", "", Aggregation::Count)).unwrap();

    assert_eq!(
        outcome,
        ChartOutcome::NotApplicable(Unsuitable::NoChurnColumn)
    );
}

#[test]
fn test_projection_is_idempotent() {
    let df = common::create_customer_dataframe();
    let specs = [
        spec(ChartKind::Bar, "City", "Income", Aggregation::Avg),
        spec(ChartKind::Scatter, "Age", "Income", Aggregation::Count),
        spec(ChartKind::StackedBar, "City", "Income", Aggregation::Sum),
    ];

    for s in &specs {
        let first = project(&df, s).unwrap();
        let second = project(&df, s).unwrap();
        assert_eq!(first, second, "projection differed for {}", s.kind);
    }
}
