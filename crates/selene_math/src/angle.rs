//! Angle conversion and normalization helpers.

use std::f64::consts::PI;

/// Convert degrees to radians.
pub fn to_rad(deg: f64) -> f64 {
    deg * PI / 180.0
}

/// Convert radians to degrees.
pub fn to_deg(rad: f64) -> f64 {
    rad * 180.0 / PI
}

/// Normalize an angle to [0, 360) degrees.
///
/// Uses the mathematical (always non-negative) modulo, so negative
/// inputs wrap correctly: −10 → 350.
pub fn normalize_360(deg: f64) -> f64 {
    let r = deg % 360.0;
    if r < 0.0 { r + 360.0 } else { r }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rad_deg_roundtrip() {
        let deg = 123.456;
        assert!((to_deg(to_rad(deg)) - deg).abs() < 1e-12);
    }

    #[test]
    fn right_angle() {
        assert!((to_rad(90.0) - PI / 2.0).abs() < 1e-15);
    }

    #[test]
    fn normalize_in_range_is_identity() {
        assert!((normalize_360(45.0) - 45.0).abs() < 1e-15);
    }

    #[test]
    fn normalize_negative() {
        assert!((normalize_360(-10.0) - 350.0).abs() < 1e-12);
    }

    #[test]
    fn normalize_multiple_turns() {
        assert!((normalize_360(725.0) - 5.0).abs() < 1e-12);
    }

    #[test]
    fn normalize_exact_turn() {
        assert!((normalize_360(360.0) - 0.0).abs() < 1e-15);
    }
}
