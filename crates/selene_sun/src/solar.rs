//! Apparent solar longitude, at two accuracy levels.
//!
//! The low-accuracy form (Meeus ch. 25) is a handful of trigonometric
//! terms good to ~0.01°. The high-accuracy form goes through the
//! truncated VSOP87 Earth series plus nutation and aberration and is
//! good to better than 1″ over several millennia.

use selene_math::{normalize_360, poly_eval, to_rad};
use selene_time::{julian_centuries, julian_millennia};

use crate::earth_vsop::{earth_heliocentric_longitude_deg, earth_radius_vector_au};
use crate::nutation::nutation_in_longitude;

/// Rotation from the VSOP87 dynamical frame to FK5, degrees.
const FK5_CORRECTION_DEG: f64 = -2.509_167e-5;

/// Sun's geometric mean longitude, degrees per century powers.
const MEAN_LONGITUDE: [f64; 3] = [0.0003032, 36_000.76983, 280.46646];

/// Sun's mean anomaly, degrees per century powers.
const MEAN_ANOMALY: [f64; 3] = [-0.0001537, 35_999.05029, 357.52911];

/// Apparent geocentric longitude of the Sun in degrees, low-accuracy
/// series, at a Julian Date in TT.
pub fn solar_longitude_low_accuracy(jd_tt: f64) -> f64 {
    let t = julian_centuries(jd_tt);
    let l0 = poly_eval(&MEAN_LONGITUDE, t);
    let m = to_rad(poly_eval(&MEAN_ANOMALY, t));

    // Equation of center
    let c = (1.914602 - 0.004817 * t - 0.000014 * t * t) * m.sin()
        + (0.019993 - 0.000101 * t) * (2.0 * m).sin()
        + 0.000289 * (3.0 * m).sin();

    // Nutation and aberration folded into two small terms
    let omega = to_rad(125.04 - 1934.136 * t);
    normalize_360(l0 + c - 0.00569 - 0.00478 * omega.sin())
}

/// Apparent geocentric longitude of the Sun in degrees, via the
/// truncated VSOP87 Earth series, at a Julian Date in TT.
///
/// Geocentric true longitude is the heliocentric longitude of the
/// Earth plus 180°, rotated to FK5, then corrected for nutation in
/// longitude and for aberration (−20.4898″/R).
pub fn apparent_solar_longitude(jd_tt: f64) -> f64 {
    let jme = julian_millennia(jd_tt);
    let geocentric = normalize_360(earth_heliocentric_longitude_deg(jme) + 180.0);
    let r = earth_radius_vector_au(jme);
    let aberration = -0.005_691_611_1 / r;
    normalize_360(geocentric + FK5_CORRECTION_DEG + nutation_in_longitude(jd_tt) + aberration)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn meeus_example_25a_low_accuracy() {
        // 1992 Oct 13.0 TD → apparent longitude 199.90895°
        let jd = 2_448_908.5;
        let lon = solar_longitude_low_accuracy(jd);
        assert!((lon - 199.90895).abs() < 2e-4, "λ = {lon}");
    }

    #[test]
    fn meeus_example_25b_high_accuracy() {
        // Same instant through the VSOP87 path: λ = 199.90608°
        let jd = 2_448_908.5;
        let lon = apparent_solar_longitude(jd);
        assert!((lon - 199.90608).abs() < 1e-3, "λ = {lon}");
    }

    #[test]
    fn accuracy_levels_agree_to_the_hundredth() {
        for i in 0..24 {
            let jd = 2_451_545.0 + i as f64 * 61.0;
            let low = solar_longitude_low_accuracy(jd);
            let high = apparent_solar_longitude(jd);
            let diff = (low - high + 180.0).rem_euclid(360.0) - 180.0;
            assert!(diff.abs() < 0.02, "Δλ = {diff}° at {jd}");
        }
    }

    #[test]
    fn longitude_near_zero_at_march_equinox() {
        // 2000 Mar 20 ~07:35 UT; apparent longitude crosses 0°
        let jd = 2_451_623.816;
        let lon = apparent_solar_longitude(jd);
        let signed = if lon > 180.0 { lon - 360.0 } else { lon };
        assert!(signed.abs() < 0.01, "λ = {signed}°");
    }
}
