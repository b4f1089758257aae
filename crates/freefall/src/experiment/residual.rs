//! Per-sample residuals against the theoretical curve.

use serde::{Deserialize, Serialize};

use super::curve::{round_to, theoretical_height};
use super::Sample;
use crate::format::HEIGHT_PLACES;

/// Which of the two difference styles a residual is shown with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Indicator {
    /// Measured height at or above the model (shown red, with a `+`).
    AtOrAbove,
    /// Measured height below the model (shown blue).
    Below,
}

impl Indicator {
    /// Classify a difference by its displayed (rounded) value.
    ///
    /// Rounding first keeps the style in agreement with the text, so a
    /// difference of `-1e-17` is shown as `+0.00000` in the "above" style.
    #[must_use]
    pub fn for_difference(difference: f64) -> Self {
        if round_to(difference, HEIGHT_PLACES) >= 0.0 {
            Self::AtOrAbove
        } else {
            Self::Below
        }
    }

    /// CSS colour used in the HTML report.
    #[must_use]
    pub fn css_color(&self) -> &'static str {
        match self {
            Self::AtOrAbove => "#dc2626",
            Self::Below => "#2563eb",
        }
    }

    /// ANSI SGR colour code for terminal output.
    #[must_use]
    pub fn ansi_code(&self) -> &'static str {
        match self {
            Self::AtOrAbove => "31",
            Self::Below => "34",
        }
    }
}

impl std::fmt::Display for Indicator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::AtOrAbove => write!(f, "at_or_above"),
            Self::Below => write!(f, "below"),
        }
    }
}

/// A measured sample next to the model's prediction for the same time.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Residual {
    /// 1-based row number.
    pub index: usize,
    /// Time of the measurement.
    pub time: f64,
    /// Measured height.
    pub measured: f64,
    /// Model height at `time`.
    pub theoretical: f64,
    /// `measured - theoretical`.
    pub difference: f64,
    /// Display style chosen from the sign of `difference`.
    pub indicator: Indicator,
}

impl Residual {
    /// Compare one sample against the model.
    #[must_use]
    pub fn new(index: usize, sample: Sample, gravity: f64) -> Self {
        let theoretical = theoretical_height(sample.time, gravity);
        let difference = sample.height - theoretical;
        Self {
            index,
            time: sample.time,
            measured: sample.height,
            theoretical,
            difference,
            indicator: Indicator::for_difference(difference),
        }
    }
}

/// Residuals for every sample, numbered from 1.
#[must_use]
pub fn residuals(samples: &[Sample], gravity: f64) -> Vec<Residual> {
    samples
        .iter()
        .enumerate()
        .map(|(i, sample)| Residual::new(i + 1, *sample, gravity))
        .collect()
}
