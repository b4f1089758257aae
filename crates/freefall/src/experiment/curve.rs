//! Sampling of the theoretical free-fall curve.

use serde::{Deserialize, Serialize};
use tracing::trace;

use super::GRAVITY;

/// Slack used when counting steps, so that 0.65 / 0.01 = 64.999… still
/// yields 65 whole steps.
const STEP_EPSILON: f64 = 1e-9;

/// Time range `[0, t_max]` and spacing for the theoretical curve.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CurveDomain {
    /// Last time included in the curve, in seconds.
    pub t_max: f64,
    /// Spacing between consecutive points, in seconds.
    pub step: f64,
}

impl CurveDomain {
    /// The domain covered by the experiment: 0.00 s to 0.65 s every 0.01 s.
    pub const EXPERIMENT: Self = Self {
        t_max: 0.65,
        step: 0.01,
    };

    /// Number of points the sampler produces: ⌊t_max / step⌋ + 1.
    #[must_use]
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn point_count(&self) -> usize {
        debug_assert!(self.step > 0.0 && self.t_max >= 0.0);
        (self.t_max / self.step + STEP_EPSILON).floor() as usize + 1
    }
}

impl Default for CurveDomain {
    fn default() -> Self {
        Self::EXPERIMENT
    }
}

/// One point on the theoretical curve, rounded for display.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CurvePoint {
    /// Time, rounded to 2 decimal places.
    pub time: f64,
    /// Model height, rounded to 5 decimal places.
    pub height: f64,
}

/// Height fallen after `time` seconds under constant acceleration `gravity`.
#[must_use]
pub fn theoretical_height(time: f64, gravity: f64) -> f64 {
    0.5 * gravity * time * time
}

/// Round `value` to `places` decimal places.
#[must_use]
pub fn round_to(value: f64, places: i32) -> f64 {
    let scale = 10f64.powi(places);
    (value * scale).round() / scale
}

/// Sample h = ½gt² (g = [`GRAVITY`]) over `domain`.
///
/// Time points are `i * step` for `i in 0..point_count`, so the output does
/// not drift the way repeated float addition does. Times are rounded to 2
/// places and heights to 5.
#[must_use]
pub fn sample_curve(domain: CurveDomain) -> Vec<CurvePoint> {
    let count = domain.point_count();
    trace!(count, t_max = domain.t_max, step = domain.step, "sampling theoretical curve");

    (0..count)
        .map(|i| {
            #[allow(clippy::cast_precision_loss)]
            let t = i as f64 * domain.step;
            CurvePoint {
                time: round_to(t, 2),
                height: round_to(theoretical_height(t, GRAVITY), 5),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_theoretical_height_at_half_second() {
        assert!((theoretical_height(0.5, GRAVITY) - 1.225).abs() < 1e-12);
    }

    #[test]
    fn test_theoretical_height_at_zero() {
        assert!(theoretical_height(0.0, GRAVITY).abs() < f64::EPSILON);
    }

    #[test]
    fn test_round_to() {
        assert!((round_to(1.224_999_9, 5) - 1.225).abs() < 1e-12);
        assert!((round_to(0.345, 1) - 0.3).abs() < 1e-12);
        assert!((round_to(0.650_000_000_4, 2) - 0.65).abs() < 1e-12);
    }

    #[test]
    fn test_point_count() {
        assert_eq!(CurveDomain::EXPERIMENT.point_count(), 66);
        let domain = CurveDomain {
            t_max: 1.0,
            step: 0.25,
        };
        assert_eq!(domain.point_count(), 5);
    }

    #[test]
    fn test_sample_curve_spans_domain() {
        let curve = sample_curve(CurveDomain::EXPERIMENT);
        assert_eq!(curve.len(), 66);
        assert!(curve[0].time.abs() < f64::EPSILON);
        assert!(curve[0].height.abs() < f64::EPSILON);
        let last = curve[curve.len() - 1];
        assert!((last.time - 0.65).abs() < 1e-12);
        assert!((last.height - 2.07025).abs() < 1e-12);
    }

    #[test]
    fn test_sample_curve_value_at_half_second() {
        let curve = sample_curve(CurveDomain::EXPERIMENT);
        let point = curve
            .iter()
            .find(|p| (p.time - 0.5).abs() < 1e-9)
            .expect("0.50 is on the grid");
        assert!((point.height - 1.225).abs() < 1e-9);
    }

    #[test]
    fn test_sample_curve_times_are_on_two_decimal_grid() {
        for (i, point) in sample_curve(CurveDomain::EXPERIMENT).iter().enumerate() {
            let expected = f64::from(u32::try_from(i).unwrap()) / 100.0;
            assert!((point.time - expected).abs() < 1e-12, "point {i}: {point:?}");
        }
    }

    #[test]
    fn test_sample_curve_is_deterministic() {
        let first = sample_curve(CurveDomain::EXPERIMENT);
        let second = sample_curve(CurveDomain::EXPERIMENT);
        assert_eq!(first, second);
    }

    #[test]
    fn test_sample_curve_monotonic() {
        let curve = sample_curve(CurveDomain::EXPERIMENT);
        for pair in curve.windows(2) {
            assert!(pair[0].time < pair[1].time);
            assert!(pair[0].height <= pair[1].height);
        }
    }

    #[test]
    fn test_default_domain() {
        assert_eq!(CurveDomain::default(), CurveDomain::EXPERIMENT);
    }
}
