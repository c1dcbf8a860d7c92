//! Shared salary types used by the collector.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Salary bounds attached to a single vacancy.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct SalaryRange {
    pub from: Option<u64>,
    pub to: Option<u64>,
    pub currency: String,
}

impl SalaryRange {
    /// Builds a range, treating zero bounds as missing.
    pub fn new(from: Option<u64>, to: Option<u64>, currency: impl Into<String>) -> Self {
        SalaryRange {
            from: from.filter(|v| *v > 0),
            to: to.filter(|v| *v > 0),
            currency: currency.into(),
        }
    }

    /// Predicted salary, only if the range is quoted in `currency`.
    pub fn estimate_in(&self, currency: &str) -> Option<f64> {
        if self.currency != currency {
            return None;
        }
        predict_salary(self.from, self.to)
    }
}

/// Predicts a single salary figure from a possibly open-ended range.
///
/// An upper bound alone is discounted by 20%, a lower bound alone is raised
/// by 20%, and a closed range yields its midpoint. A zero bound counts as
/// missing.
pub fn predict_salary(from: Option<u64>, to: Option<u64>) -> Option<f64> {
    match (from.filter(|v| *v > 0), to.filter(|v| *v > 0)) {
        (None, Some(to)) => Some(to as f64 * 0.8),
        (Some(from), None) => Some(from as f64 * 1.2),
        (Some(from), Some(to)) => Some((from as f64 + to as f64) / 2.0),
        (None, None) => None,
    }
}

/// Per-language result for one job board.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
pub struct VacancySummary {
    pub vacancies_found: u64,
    pub vacancies_processed: u64,
    pub average_salary: u64,
}

impl VacancySummary {
    /// Folds a list of estimates into a summary. The average is truncated
    /// and stays at zero when nothing was processed.
    pub fn from_estimates(vacancies_found: u64, estimates: &[f64]) -> Self {
        let vacancies_processed = estimates.len() as u64;
        let average_salary = if estimates.is_empty() {
            0
        } else {
            (estimates.iter().sum::<f64>() / estimates.len() as f64) as u64
        };

        VacancySummary {
            vacancies_found,
            vacancies_processed,
            average_salary,
        }
    }
}

/// Language name to summary, in the order languages were queried.
pub type LanguageStatistics = IndexMap<String, VacancySummary>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_predict_salary_upper_bound_only() {
        assert_eq!(predict_salary(None, Some(100_000)), Some(80_000.0));
    }

    #[test]
    fn test_predict_salary_lower_bound_only() {
        assert_eq!(predict_salary(Some(100_000), None), Some(120_000.0));
    }

    #[test]
    fn test_predict_salary_both_bounds() {
        assert_eq!(predict_salary(Some(100_000), Some(200_000)), Some(150_000.0));
        assert_eq!(predict_salary(Some(1), Some(2)), Some(1.5));
    }

    #[test]
    fn test_predict_salary_no_bounds() {
        assert_eq!(predict_salary(None, None), None);
    }

    #[test]
    fn test_zero_bounds_are_missing() {
        let range = SalaryRange::new(Some(0), Some(50_000), "rub");
        assert_eq!(range.from, None);
        assert_eq!(range.estimate_in("rub"), Some(40_000.0));

        let empty = SalaryRange::new(Some(0), Some(0), "rub");
        assert_eq!(empty.estimate_in("rub"), None);
    }

    #[test]
    fn test_zero_bounds_are_missing_without_constructor() {
        assert_eq!(predict_salary(Some(0), Some(0)), None);
        assert_eq!(predict_salary(Some(0), Some(100_000)), Some(80_000.0));

        let range: SalaryRange =
            serde_json::from_str(r#"{"from": 0, "to": 0, "currency": "rub"}"#).unwrap();
        assert_eq!(range.from, Some(0));
        assert_eq!(range.estimate_in("rub"), None);

        let literal = SalaryRange {
            from: Some(90_000),
            to: Some(0),
            currency: "RUR".to_string(),
        };
        assert_eq!(literal.estimate_in("RUR"), Some(108_000.0));
    }

    #[test]
    fn test_estimate_rejects_foreign_currency() {
        let range = SalaryRange::new(None, Some(200_000), "USD");
        assert_eq!(range.estimate_in("RUR"), None);
        assert_eq!(range.estimate_in("USD"), Some(160_000.0));
    }

    #[test]
    fn test_summary_without_estimates_has_zero_average() {
        let summary = VacancySummary::from_estimates(42, &[]);
        assert_eq!(
            summary,
            VacancySummary {
                vacancies_found: 42,
                vacancies_processed: 0,
                average_salary: 0,
            }
        );
    }

    #[test]
    fn test_summary_average_is_truncated() {
        let summary = VacancySummary::from_estimates(3, &[100.0, 101.0, 101.0]);
        assert_eq!(summary.vacancies_processed, 3);
        assert_eq!(summary.average_salary, 100);
    }

    #[test]
    fn test_statistics_keep_insertion_order() {
        let mut stats = LanguageStatistics::new();
        stats.insert("Shell".to_string(), VacancySummary::default());
        stats.insert("C".to_string(), VacancySummary::default());
        stats.insert("Go".to_string(), VacancySummary::default());

        let json = serde_json::to_string(&stats).unwrap();
        assert!(json.starts_with("{\"Shell\""));
        let keys: Vec<&str> = stats.keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["Shell", "C", "Go"]);
    }
}
