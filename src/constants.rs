//! Baseline constants and unit conversions shared by the component models.

use std::f64::consts::PI;

/// Returns the angular frequency corresponding to a linear frequency `hz`.
#[inline]
#[must_use]
pub fn angular_frequency(hz: f64) -> f64 {
    2.0 * PI * hz
}

/// Phase of an ideal capacitor in radians (current leads voltage by π/2).
pub const CAPACITIVE_PHASE: f64 = -PI / 2.0;
/// Phase of an ideal inductor in radians (voltage leads current by π/2).
pub const INDUCTIVE_PHASE: f64 = PI / 2.0;

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    #[test]
    fn angular_frequency_matches_reference() {
        assert_relative_eq!(angular_frequency(1_000.0), 6_283.185_307_179_586, max_relative = 1.0e-12);
        assert_relative_eq!(angular_frequency(0.0), 0.0);
    }
}
