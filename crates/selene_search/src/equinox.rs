//! Vernal equinox instants (Meeus, *Astronomical Algorithms* ch. 27).
//!
//! The low-accuracy form evaluates a mean-equinox polynomial plus a
//! 24-term periodic correction. The full form refines that seed
//! against the high-accuracy apparent solar longitude until the
//! longitude vanishes, with a fixed budget of 5 passes. The 5-pass cap
//! and the `year >= 1000` table split are part of the contract; the
//! worked examples depend on both.

use selene_math::{poly_eval, to_rad};
use selene_sun::apparent_solar_longitude;
use selene_time::{Instant, julian_centuries};

/// Mean March-equinox JDE, years 1000..3000, in millennia from 2000.
const VERNAL_SINCE_1000: [f64; 5] = [-0.00057, -0.00411, 0.05169, 365_242.37404, 2_451_623.80984];

/// Mean March-equinox JDE, years before 1000, in millennia from 0.
const VERNAL_BEFORE_1000: [f64; 5] = [-0.00071, 0.00111, 0.06134, 365_242.13740, 1_721_139.29189];

/// Periodic corrections to the mean equinox, rows `(A, B, C)`
/// contributing `A·cos(B + C·t)` in units of 1e-5 day.
#[rustfmt::skip]
static PERIODIC_TERMS: [(f64, f64, f64); 24] = [
    (485.0, 324.96,   1934.136),
    (203.0, 337.23,  32964.467),
    (199.0, 342.08,     20.186),
    (182.0,  27.85, 445267.112),
    (156.0,  73.14,  45036.886),
    (136.0, 171.52,  22518.443),
    ( 77.0, 222.54,  65928.934),
    ( 74.0, 296.72,   3034.906),
    ( 70.0, 243.58,   9037.513),
    ( 58.0, 119.81,  33718.147),
    ( 52.0, 297.17,    150.678),
    ( 50.0,  21.02,   2281.226),
    ( 45.0, 247.54,  29929.562),
    ( 44.0, 325.15,  31555.956),
    ( 29.0,  60.93,   4443.417),
    ( 18.0, 155.12,  67555.328),
    ( 17.0, 288.79,   4562.452),
    ( 16.0, 198.04,  62894.029),
    ( 14.0, 199.76,  31436.921),
    ( 12.0,  95.39,  14577.848),
    ( 12.0, 287.11,  31931.756),
    ( 12.0, 320.81,  34777.259),
    (  9.0, 227.73,   1222.114),
    (  8.0,  15.45,  16859.074),
];

/// Vernal equinox of `year` from the table-based series alone.
///
/// Good to a couple of minutes over the tables' validity window
/// (roughly −1000..+3000).
pub fn date_of_vernal_equinox_low_accuracy(year: i32) -> Instant {
    let jde0 = if year >= 1000 {
        poly_eval(&VERNAL_SINCE_1000, (year - 2000) as f64 / 1000.0)
    } else {
        poly_eval(&VERNAL_BEFORE_1000, year as f64 / 1000.0)
    };

    let t = julian_centuries(jde0);
    let w = to_rad(35_999.373 * t - 2.47);
    let delta_lambda = 1.0 + 0.0334 * w.cos() + 0.0007 * (2.0 * w).cos();

    let s: f64 = PERIODIC_TERMS
        .iter()
        .map(|&(a, b, c)| a * to_rad(b + c * t).cos())
        .sum();

    Instant::from_jd_tt(jde0 + 0.00001 * s / delta_lambda)
}

/// Vernal equinox of `year`, refined against the high-accuracy solar
/// longitude.
///
/// Up to 5 correction passes of `58·sin(−λ)` days; stops early once
/// |λ| < 1e-6°. Exhausting the budget is not an error, the last
/// estimate is returned as-is.
pub fn date_of_vernal_equinox(year: i32) -> Instant {
    let mut estimate = date_of_vernal_equinox_low_accuracy(year).as_jd_tt();
    for _ in 0..5 {
        let lambda = apparent_solar_longitude(estimate);
        let signed = if lambda > 180.0 { lambda - 360.0 } else { lambda };
        if signed.abs() < 1e-6 {
            break;
        }
        estimate += 58.0 * to_rad(-signed).sin();
    }
    Instant::from_jd_tt(estimate)
}
