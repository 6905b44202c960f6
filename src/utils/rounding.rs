//! Decimal rounding helpers for display values and the weight-sum check.

/// Round to two decimal places (half away from zero, as `f64::round` does).
#[must_use]
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Round to one decimal place.
#[must_use]
pub fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
