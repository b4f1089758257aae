//! The free-fall experiment: measured samples and the model they are compared to.
//!
//! - [`SAMPLES`]: the fixed measurement table, ordered by time.
//! - [`curve`]: the theoretical curve h = ½gt² sampled over the same domain.
//! - [`residual`]: per-sample differences between measurement and model.
//! - [`summary`]: descriptive statistics shown under the table.

pub mod curve;
pub mod residual;
pub mod summary;

use serde::{Deserialize, Serialize};

pub use curve::{sample_curve, theoretical_height, CurveDomain, CurvePoint};
pub use residual::{residuals, Indicator, Residual};
pub use summary::Summary;

/// Gravitational acceleration used by the model, in m/s².
pub const GRAVITY: f64 = 9.8;

/// Formula shown next to the model curve.
pub const FORMULA: &str = "h = ½gt²";

/// A single measurement: elapsed time and distance fallen.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Sample {
    /// Seconds since release.
    pub time: f64,
    /// Meters fallen.
    pub height: f64,
}

impl Sample {
    /// Create a sample.
    #[must_use]
    pub const fn new(time: f64, height: f64) -> Self {
        Self { time, height }
    }
}

/// The recorded measurements, sorted by increasing time.
pub const SAMPLES: [Sample; 14] = [
    Sample::new(0.00, 0.00000),
    Sample::new(0.05, 0.01225),
    Sample::new(0.10, 0.04900),
    Sample::new(0.15, 0.11025),
    Sample::new(0.20, 0.19600),
    Sample::new(0.25, 0.30625),
    Sample::new(0.30, 0.44100),
    Sample::new(0.35, 0.60025),
    Sample::new(0.40, 0.78400),
    Sample::new(0.45, 0.99225),
    Sample::new(0.50, 1.22500),
    Sample::new(0.55, 1.48225),
    Sample::new(0.60, 1.76400),
    Sample::new(0.65, 2.07025),
];

/// The recorded measurements as a slice.
#[must_use]
pub fn samples() -> &'static [Sample] {
    &SAMPLES
}

/// Time of the last measurement, which is also the end of the curve domain.
#[must_use]
pub fn max_time(samples: &[Sample]) -> f64 {
    samples.iter().map(|s| s.time).fold(0.0, f64::max)
}

/// Largest measured height.
#[must_use]
pub fn max_height(samples: &[Sample]) -> f64 {
    samples.iter().map(|s| s.height).fold(0.0, f64::max)
}

/// Check that times are strictly increasing and no height is negative.
#[must_use]
pub fn is_well_ordered(samples: &[Sample]) -> bool {
    samples.iter().all(|s| s.height >= 0.0)
        && samples.windows(2).all(|pair| pair[0].time < pair[1].time)
}
