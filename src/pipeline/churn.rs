//! Churn-key resolution
//!
//! Locates the column carrying the binary churn label by case-insensitive
//! match against a fixed alias set. Churn-dependent projectors treat a
//! missing churn column as a recoverable "not applicable" condition, never
//! as a fault.

use polars::prelude::*;

/// Column names (lower-cased) that are recognized as the churn label
pub const CHURN_ALIASES: [&str; 3] = ["churn", "exited", "target"];

/// Tolerance for floating point comparison when classifying 0/1 churn values
pub const BINARY_TOLERANCE: f64 = 1e-9;

/// Find the churn column, if any.
///
/// Returns the first column (in column order) whose lower-cased name matches
/// one of [`CHURN_ALIASES`].
pub fn resolve_churn_key(df: &DataFrame) -> Option<String> {
    df.get_column_names()
        .iter()
        .find(|name| {
            let lower = name.to_lowercase();
            CHURN_ALIASES.iter().any(|alias| lower == *alias)
        })
        .map(|name| name.to_string())
}

/// True when a coerced churn value means the customer left (== 1)
pub fn is_churned(value: f64) -> bool {
    (value - 1.0).abs() < BINARY_TOLERANCE
}

/// True when a coerced churn value means the customer stayed (== 0)
pub fn is_retained(value: f64) -> bool {
    value.abs() < BINARY_TOLERANCE
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolves_exact_lowercase_alias() {
        let df = df! {
            "city" => ["A", "B"],
            "churn" => [0i32, 1],
        }
        .unwrap();

        assert_eq!(resolve_churn_key(&df), Some("churn".to_string()));
    }

    #[test]
    fn test_resolves_case_insensitively() {
        let df = df! {
            "City" => ["A", "B"],
            "Exited" => [0i32, 1],
        }
        .unwrap();

        assert_eq!(resolve_churn_key(&df), Some("Exited".to_string()));
    }

    #[test]
    fn test_first_matching_column_wins() {
        let df = df! {
            "Target" => [0i32, 1],
            "Churn" => [1i32, 0],
        }
        .unwrap();

        assert_eq!(resolve_churn_key(&df), Some("Target".to_string()));
    }

    #[test]
    fn test_no_alias_present() {
        let df = df! {
            "City" => ["A", "B"],
            "Age" => [30i32, 40],
        }
        .unwrap();

        assert_eq!(resolve_churn_key(&df), None);
    }

    #[test]
    fn test_binary_classification_helpers() {
        assert!(is_churned(1.0));
        assert!(is_retained(0.0));
        assert!(!is_churned(0.0));
        assert!(!is_retained(1.0));
        assert!(!is_churned(2.0));
        assert!(!is_retained(2.0));
    }
}
