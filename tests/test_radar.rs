//! Tests for the radar profile projector

use churnlens::pipeline::{radar_profile, ChartOutcome, Unsuitable, MIN_PROFILE_METRICS};
use polars::prelude::*;

#[path = "common/mod.rs"]
mod common;

#[test]
fn test_profile_means_per_class() {
    let df = common::create_profile_dataframe();

    let outcome = radar_profile(&df).unwrap();

    let ChartOutcome::Ready(profile) = outcome else {
        panic!("Expected a ready profile");
    };
    // Metrics come back in allow-list order, filtered to available columns
    assert_eq!(
        profile.metrics,
        vec![
            "SatisfactionScore",
            "HourSpendOnApp",
            "NumberOfDeviceRegistered"
        ]
    );
    assert_eq!(profile.retained_means, vec![4.5, 2.5, 3.0]);
    assert_eq!(profile.churned_means, vec![1.5, 4.5, 3.0]);
}

#[test]
fn test_missing_cells_count_as_zero() {
    let df = df! {
        "Churn" => [0i32, 0],
        "SatisfactionScore" => [Some(4.0f64), None],
        "HourSpendOnApp" => [2.0f64, 2.0],
        "Complain" => [0.0f64, 1.0],
    }
    .unwrap();

    let outcome = radar_profile(&df).unwrap();

    let ChartOutcome::Ready(profile) = outcome else {
        panic!("Expected a ready profile");
    };
    // (4.0 + 0) / 2, not 4.0 / 1: the zero-fill policy differs from the aggregator
    assert_eq!(profile.retained_means[0], 2.0);
}

#[test]
fn test_no_churn_column_is_not_applicable() {
    let df = df! {
        "SatisfactionScore" => [4.0f64, 5.0],
        "HourSpendOnApp" => [2.0f64, 3.0],
        "NumberOfAddress" => [1.0f64, 2.0],
    }
    .unwrap();

    let outcome = radar_profile(&df).unwrap();

    assert_eq!(
        outcome,
        ChartOutcome::NotApplicable(Unsuitable::NoChurnColumn)
    );
}

#[test]
fn test_too_few_metrics_is_not_applicable() {
    let df = df! {
        "Churn" => [0i32, 1],
        "SatisfactionScore" => [4.0f64, 2.0],
        "HourSpendOnApp" => [2.0f64, 4.0],
    }
    .unwrap();

    let outcome = radar_profile(&df).unwrap();

    assert_eq!(
        outcome,
        ChartOutcome::NotApplicable(Unsuitable::TooFewMetrics {
            found: 2,
            min: MIN_PROFILE_METRICS
        })
    );
}

#[test]
fn test_empty_class_subset_means_zero() {
    let df = df! {
        "Churn" => [0i32, 0, 0],
        "SatisfactionScore" => [4.0f64, 5.0, 3.0],
        "HourSpendOnApp" => [2.0f64, 3.0, 4.0],
        "Complain" => [0.0f64, 0.0, 1.0],
    }
    .unwrap();

    let outcome = radar_profile(&df).unwrap();

    let ChartOutcome::Ready(profile) = outcome else {
        panic!("Expected a ready profile");
    };
    assert!(profile.churned_means.iter().all(|&m| m == 0.0));
    assert_eq!(profile.retained_means[0], 4.0);
}

#[test]
fn test_idempotent() {
    let df = common::create_profile_dataframe();

    let first = radar_profile(&df).unwrap();
    let second = radar_profile(&df).unwrap();

    assert_eq!(first, second);
}
