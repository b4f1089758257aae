//! Summary statistics shown beneath the residual table.

use serde::{Deserialize, Serialize};

use super::residual::Residual;
use super::{Sample, FORMULA};

/// Descriptive statistics for the dataset and its agreement with the model.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Summary {
    /// Number of measurements.
    pub count: usize,
    /// Earliest and latest measurement time.
    pub time_range: (f64, f64),
    /// Smallest and largest measured height.
    pub height_range: (f64, f64),
    /// Model formula.
    pub formula: String,
    /// Gravitational acceleration used by the model.
    pub gravity: f64,
    /// Root mean square of the residuals.
    pub rmse: f64,
    /// Mean residual (positive when measurements run above the model).
    pub mean_residual: f64,
    /// Largest residual magnitude.
    pub max_abs_residual: f64,
}

impl Summary {
    /// Summarize `samples` together with their `residuals`.
    #[must_use]
    pub fn new(samples: &[Sample], residuals: &[Residual], gravity: f64) -> Self {
        let time_range = min_max(samples.iter().map(|s| s.time));
        let height_range = min_max(samples.iter().map(|s| s.height));

        let (rmse, mean_residual, max_abs_residual) = if residuals.is_empty() {
            (0.0, 0.0, 0.0)
        } else {
            #[allow(clippy::cast_precision_loss)]
            let n = residuals.len() as f64;
            let sum_sq: f64 = residuals.iter().map(|r| r.difference * r.difference).sum();
            let sum: f64 = residuals.iter().map(|r| r.difference).sum();
            let max_abs = residuals
                .iter()
                .map(|r| r.difference.abs())
                .fold(0.0, f64::max);
            ((sum_sq / n).sqrt(), sum / n, max_abs)
        };

        Self {
            count: samples.len(),
            time_range,
            height_range,
            formula: FORMULA.to_string(),
            gravity,
            rmse,
            mean_residual,
            max_abs_residual,
        }
    }
}

fn min_max(values: impl Iterator<Item = f64>) -> (f64, f64) {
    let (lo, hi) = values.fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| {
        (lo.min(v), hi.max(v))
    });
    if lo > hi {
        (0.0, 0.0)
    } else {
        (lo, hi)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::experiment::{residuals, samples, GRAVITY};

    fn experiment_summary() -> Summary {
        Summary::new(samples(), &residuals(samples(), GRAVITY), GRAVITY)
    }

    #[test]
    fn test_summary_counts_and_ranges() {
        let summary = experiment_summary();
        assert_eq!(summary.count, 14);
        assert!(summary.time_range.0.abs() < f64::EPSILON);
        assert!((summary.time_range.1 - 0.65).abs() < 1e-12);
        assert!(summary.height_range.0.abs() < f64::EPSILON);
        assert!((summary.height_range.1 - 2.07025).abs() < 1e-12);
        assert_eq!(summary.formula, "h = ½gt²");
    }

    #[test]
    fn test_summary_agreement_with_model() {
        // The recorded heights are the model values to 5 places
        let summary = experiment_summary();
        assert!(summary.rmse < 1e-6);
        assert!(summary.max_abs_residual < 1e-6);
        assert!(summary.mean_residual.abs() < 1e-6);
    }

    #[test]
    fn test_summary_with_offset_data() {
        let data = [Sample::new(0.0, 0.1), Sample::new(0.5, 1.325)];
        let rows = residuals(&data, GRAVITY);
        let summary = Summary::new(&data, &rows, GRAVITY);
        assert!((summary.rmse - 0.1).abs() < 1e-9);
        assert!((summary.mean_residual - 0.1).abs() < 1e-9);
        assert!((summary.max_abs_residual - 0.1).abs() < 1e-9);
    }

    #[test]
    fn test_summary_empty() {
        let summary = Summary::new(&[], &[], GRAVITY);
        assert_eq!(summary.count, 0);
        assert_eq!(summary.time_range, (0.0, 0.0));
        assert!(summary.rmse.abs() < f64::EPSILON);
    }
}
