//! Fixed-precision formatting for displayed values.
//!
//! Times always show 2 decimal places and heights 5, everywhere: terminal
//! tables, chart labels and the HTML report.

use crate::experiment::curve::round_to;

/// Decimal places shown for times.
pub const TIME_PLACES: i32 = 2;

/// Decimal places shown for heights and differences.
pub const HEIGHT_PLACES: i32 = 5;

/// Series name for the measured data.
pub const MEASURED_LABEL: &str = "Measured";

/// Series name for the model curve.
pub const THEORY_LABEL: &str = "Theory (g=9.8)";

/// Format a time in seconds, e.g. `0.50`.
#[must_use]
pub fn time(value: f64) -> String {
    format!("{value:.2}")
}

/// Format a height in meters, e.g. `1.22500`.
#[must_use]
pub fn height(value: f64) -> String {
    format!("{:.5}", normalize_zero(round_to(value, HEIGHT_PLACES)))
}

/// Format a signed difference, with an explicit `+` when not negative.
#[must_use]
pub fn difference(value: f64) -> String {
    let rounded = normalize_zero(round_to(value, HEIGHT_PLACES));
    if rounded >= 0.0 {
        format!("+{rounded:.5}")
    } else {
        format!("{rounded:.5}")
    }
}

/// Tooltip text for a height, e.g. `1.22500 m`.
#[must_use]
pub fn tooltip_value(value: f64) -> String {
    format!("{} m", height(value))
}

/// Tooltip heading for a time, e.g. `Time: 0.50 s`.
#[must_use]
pub fn tooltip_label(value: f64) -> String {
    format!("Time: {} s", time(value))
}

/// Map `-0.0` to `0.0` so it never prints with a sign.
#[allow(clippy::float_cmp)]
fn normalize_zero(value: f64) -> f64 {
    if value == 0.0 {
        0.0
    } else {
        value
    }
}
