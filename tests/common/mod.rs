//! Shared test utilities and fixture generators

use polars::prelude::*;
use std::path::PathBuf;
use tempfile::TempDir;

/// Minimal two-city churn dataset used by the concrete chart scenarios
pub fn create_city_churn_dataframe() -> DataFrame {
    df! {
        "City" => ["A", "A", "B"],
        "Churn" => [1i32, 0, 1],
    }
    .unwrap()
}

/// Churn dataset with numeric feature columns, including a missing Income cell
pub fn create_customer_dataframe() -> DataFrame {
    df! {
        "City" => ["A", "A", "B", "B", "C"],
        "Age" => [30i32, 40, 25, 35, 50],
        "Income" => [Some(100.0f64), None, Some(50.0), Some(70.0), Some(90.0)],
        "Churn" => [0i32, 1, 0, 1, 0],
    }
    .unwrap()
}

/// Dataset carrying three of the radar profile metric columns
pub fn create_profile_dataframe() -> DataFrame {
    df! {
        "Churn" => [0i32, 0, 1, 1],
        "SatisfactionScore" => [4.0f64, 5.0, 2.0, 1.0],
        "HourSpendOnApp" => [2.0f64, 3.0, 4.0, 5.0],
        "NumberOfDeviceRegistered" => [3.0f64, 3.0, 4.0, 2.0],
        "Tenure" => [12.0f64, 24.0, 3.0, 6.0],
    }
    .unwrap()
}

/// Large random dataset for stressing the scatter point cap
pub fn create_large_scatter_dataframe(rows: usize) -> DataFrame {
    use rand::Rng;
    let mut rng = rand::thread_rng();

    let age: Vec<f64> = (0..rows).map(|_| rng.gen_range(18.0..90.0)).collect();
    let income: Vec<f64> = (0..rows)
        .map(|_| rng.gen_range(10_000.0..200_000.0))
        .collect();
    let churn: Vec<i32> = (0..rows).map(|_| rng.gen_range(0..2)).collect();

    df! {
        "Age" => age,
        "Income" => income,
        "Churn" => churn,
    }
    .unwrap()
}

/// Create a temporary directory with a test CSV file
pub fn create_temp_csv(df: &mut DataFrame) -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().unwrap();
    let csv_path = temp_dir.path().join("test_data.csv");

    let mut file = std::fs::File::create(&csv_path).unwrap();
    CsvWriter::new(&mut file).finish(df).unwrap();

    (temp_dir, csv_path)
}
