//! Nutation in longitude from the truncated IAU 1980 series.
//!
//! 63 lunisolar terms with arguments built from the five fundamental
//! arguments (D, M, M′, F, Ω). Amplitudes are in units of 0.0001″;
//! dividing the summed series by 36 000 000 yields degrees.

use selene_math::{normalize_360, poly_eval, to_rad};
use selene_time::julian_centuries;

/// Fundamental-argument polynomials in Julian centuries from J2000.0,
/// descending powers, degrees.
const MEAN_ELONGATION: [f64; 4] = [1.0 / 189_474.0, -0.0019142, 445_267.111480, 297.85036];
const SUN_MEAN_ANOMALY: [f64; 4] = [-1.0 / 300_000.0, -0.0001603, 35_999.050340, 357.52772];
const MOON_MEAN_ANOMALY: [f64; 4] = [1.0 / 56_250.0, 0.0086972, 477_198.867398, 134.96298];
const MOON_ARG_LATITUDE: [f64; 4] = [1.0 / 327_270.0, -0.0036825, 483_202.017538, 93.27191];
const ASCENDING_NODE: [f64; 4] = [1.0 / 450_000.0, 0.0020708, -1934.136261, 125.04452];

/// Compute the five fundamental arguments in degrees, each normalized
/// to [0, 360).
///
/// `t` = Julian centuries of TT since J2000.0.
///
/// Returns `[D, M, M′, F, Ω]` where:
/// - `D`  = mean elongation of the Moon from the Sun
/// - `M`  = mean anomaly of the Sun
/// - `M′` = mean anomaly of the Moon
/// - `F`  = mean argument of latitude of the Moon
/// - `Ω`  = mean longitude of the ascending node of the Moon
pub fn fundamental_arguments(t: f64) -> [f64; 5] {
    [
        normalize_360(poly_eval(&MEAN_ELONGATION, t)),
        normalize_360(poly_eval(&SUN_MEAN_ANOMALY, t)),
        normalize_360(poly_eval(&MOON_MEAN_ANOMALY, t)),
        normalize_360(poly_eval(&MOON_ARG_LATITUDE, t)),
        normalize_360(poly_eval(&ASCENDING_NODE, t)),
    ]
}

/// Nutation-in-longitude term coefficients.
///
/// Each row: `(d, m, m′, f, ω, A, B)` — integer multipliers of the
/// fundamental arguments and the sine amplitude `A + B·t` in 0.0001″.
#[rustfmt::skip]
static NUTATION_TERMS: [(i8, i8, i8, i8, i8, f64, f64); 63] = [
    ( 0,  0,  0,  0,  1, -171996.0, -174.2),
    (-2,  0,  0,  2,  2,  -13187.0,   -1.6),
    ( 0,  0,  0,  2,  2,   -2274.0,   -0.2),
    ( 0,  0,  0,  0,  2,    2062.0,    0.2),
    ( 0,  1,  0,  0,  0,    1426.0,   -3.4),
    ( 0,  0,  1,  0,  0,     712.0,    0.1),
    (-2,  1,  0,  2,  2,    -517.0,    1.2),
    ( 0,  0,  0,  2,  1,    -386.0,   -0.4),
    ( 0,  0,  1,  2,  2,    -301.0,    0.0),
    (-2, -1,  0,  2,  2,     217.0,   -0.5),
    (-2,  0,  1,  0,  0,    -158.0,    0.0),
    (-2,  0,  0,  2,  1,     129.0,    0.1),
    ( 0,  0, -1,  2,  2,     123.0,    0.0),
    ( 2,  0,  0,  0,  0,      63.0,    0.0),
    ( 0,  0,  1,  0,  1,      63.0,    0.1),
    ( 2,  0, -1,  2,  2,     -59.0,    0.0),
    ( 0,  0, -1,  0,  1,     -58.0,   -0.1),
    ( 0,  0,  1,  2,  1,     -51.0,    0.0),
    (-2,  0,  2,  0,  0,      48.0,    0.0),
    ( 0,  0, -2,  2,  1,      46.0,    0.0),
    ( 2,  0,  0,  2,  2,     -38.0,    0.0),
    ( 0,  0,  2,  2,  2,     -31.0,    0.0),
    ( 0,  0,  2,  0,  0,      29.0,    0.0),
    (-2,  0,  1,  2,  2,      29.0,    0.0),
    ( 0,  0,  0,  2,  0,      26.0,    0.0),
    (-2,  0,  0,  2,  0,     -22.0,    0.0),
    ( 0,  0, -1,  2,  1,      21.0,    0.0),
    ( 0,  2,  0,  0,  0,      17.0,   -0.1),
    ( 2,  0, -1,  0,  1,      16.0,    0.0),
    (-2,  2,  0,  2,  2,     -16.0,    0.1),
    ( 0,  1,  0,  0,  1,     -15.0,    0.0),
    (-2,  0,  1,  0,  1,     -13.0,    0.0),
    ( 0, -1,  0,  0,  1,     -12.0,    0.0),
    ( 0,  0,  2, -2,  0,      11.0,    0.0),
    ( 2,  0, -1,  2,  1,     -10.0,    0.0),
    ( 2,  0,  1,  2,  2,      -8.0,    0.0),
    ( 0,  1,  0,  2,  2,       7.0,    0.0),
    (-2,  1,  1,  0,  0,      -7.0,    0.0),
    ( 0, -1,  0,  2,  2,      -7.0,    0.0),
    ( 2,  0,  0,  2,  1,      -7.0,    0.0),
    ( 2,  0,  1,  0,  0,       6.0,    0.0),
    (-2,  0,  2,  2,  2,       6.0,    0.0),
    (-2,  0,  1,  2,  1,       6.0,    0.0),
    ( 2,  0, -2,  0,  1,      -6.0,    0.0),
    ( 2,  0,  0,  0,  1,      -6.0,    0.0),
    ( 0, -1,  1,  0,  0,       5.0,    0.0),
    (-2, -1,  0,  2,  1,      -5.0,    0.0),
    (-2,  0,  0,  0,  1,      -5.0,    0.0),
    ( 0,  0,  2,  2,  1,      -5.0,    0.0),
    (-2,  0,  2,  0,  1,       4.0,    0.0),
    (-2,  1,  0,  2,  1,       4.0,    0.0),
    ( 0,  0,  1, -2,  0,       4.0,    0.0),
    (-1,  0,  1,  0,  0,      -4.0,    0.0),
    (-2,  1,  0,  0,  0,      -4.0,    0.0),
    ( 1,  0,  0,  0,  0,      -4.0,    0.0),
    ( 0,  0,  1,  2,  0,       3.0,    0.0),
    ( 0,  0, -2,  2,  2,      -3.0,    0.0),
    (-1, -1,  1,  0,  0,      -3.0,    0.0),
    ( 0,  1,  1,  0,  0,      -3.0,    0.0),
    ( 0, -1,  1,  2,  2,      -3.0,    0.0),
    ( 2, -1, -1,  2,  2,      -3.0,    0.0),
    ( 0,  0,  3,  2,  2,      -3.0,    0.0),
    ( 2, -1,  0,  2,  2,      -3.0,    0.0),
];

/// Nutation in longitude (Δψ) in degrees at a Julian Date in TT.
pub fn nutation_in_longitude(jd_tt: f64) -> f64 {
    let t = julian_centuries(jd_tt);
    let [d, m, mp, f, om] = fundamental_arguments(t);

    let mut sum = 0.0;
    for &(nd, nm, nmp, nf, nom, a, b) in &NUTATION_TERMS {
        let arg = d * nd as f64 + m * nm as f64 + mp * nmp as f64 + f * nf as f64 + om * nom as f64;
        sum += (a + b * t) * to_rad(arg).sin();
    }

    sum / 36_000_000.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn worked_example_1987() {
        // Meeus example 22.a: 1987 Apr 10.0 TD → Δψ ≈ −3.788″
        let jd = 2_446_895.5;
        let dpsi_arcsec = nutation_in_longitude(jd) * 3600.0;
        assert!(
            (dpsi_arcsec + 3.788).abs() < 0.01,
            "Δψ = {dpsi_arcsec}″"
        );
    }

    #[test]
    fn amplitude_stays_within_principal_term() {
        // |Δψ| never exceeds ~19″ (dominated by the 18.6-year Ω term)
        for i in 0..40 {
            let jd = 2_451_545.0 + i as f64 * 500.0;
            let dpsi = nutation_in_longitude(jd) * 3600.0;
            assert!(dpsi.abs() < 19.0, "|Δψ| = {}″ at {jd}", dpsi.abs());
        }
    }

    #[test]
    fn fundamental_arguments_at_example_epoch() {
        // Meeus example 22.a intermediate values, T = −0.127296372348
        let t = -0.127296372348;
        let [d, m, mp, f, om] = fundamental_arguments(t);
        assert!((d - 136.9623).abs() < 1e-3, "D = {d}");
        assert!((m - 94.9792).abs() < 1e-3, "M = {m}");
        assert!((mp - 229.2784).abs() < 1e-3, "M′ = {mp}");
        assert!((f - 143.4079).abs() < 1e-3, "F = {f}");
        assert!((om - 11.2531).abs() < 1e-3, "Ω = {om}");
    }
}
