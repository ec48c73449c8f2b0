//! ΔT = TT − UT, from the Espenak–Meeus polynomial expressions.
//!
//! Piecewise model over 14 historical year ranges, each a polynomial
//! in a range-local year offset. Boundaries are half-open `[lo, hi)`
//! except the final catch-all. The model is an approximation of the
//! observed Earth-rotation drift; outside roughly −1999..+3000 the
//! values degrade smoothly rather than failing.

use selene_math::poly_eval;

use crate::julian::jd_to_calendar;

// Coefficient tables, descending powers of the range-local variable.

/// −500 ≤ y < 500, u = y/100.
const RANGE_M500_500: [f64; 7] = [
    0.0090316521,
    0.022174192,
    -0.1798452,
    -5.952053,
    33.78311,
    -1014.41,
    10583.6,
];

/// 500 ≤ y < 1600, u = (y − 1000)/100.
const RANGE_500_1600: [f64; 7] = [
    0.0083572073,
    -0.005050998,
    -0.8503463,
    0.319781,
    71.23472,
    -556.01,
    1574.2,
];

/// 1600 ≤ y < 1700, t = y − 1600.
const RANGE_1600_1700: [f64; 4] = [1.0 / 7129.0, -0.01532, -0.9808, 120.0];

/// 1700 ≤ y < 1800, t = y − 1700.
const RANGE_1700_1800: [f64; 5] = [-1.0 / 1_174_000.0, 0.00013336, -0.0059285, 0.1603, 8.83];

/// 1800 ≤ y < 1860, t = y − 1800.
const RANGE_1800_1860: [f64; 8] = [
    0.000000000875,
    -0.0000001699,
    0.0000121272,
    -0.00037436,
    0.0041116,
    0.0068612,
    -0.332447,
    13.72,
];

/// 1860 ≤ y < 1900, t = y − 1860.
const RANGE_1860_1900: [f64; 6] = [
    1.0 / 233_174.0,
    -0.0004473624,
    0.01680668,
    -0.251754,
    0.5737,
    7.62,
];

/// 1900 ≤ y < 1920, t = y − 1900.
const RANGE_1900_1920: [f64; 5] = [-0.000197, 0.0061966, -0.0598939, 1.494119, -2.79];

/// 1920 ≤ y < 1941, t = y − 1920.
const RANGE_1920_1941: [f64; 4] = [0.0020936, -0.0761, 0.84493, 21.20];

/// 1941 ≤ y < 1961, t = y − 1950.
const RANGE_1941_1961: [f64; 4] = [1.0 / 2547.0, -1.0 / 233.0, 0.407, 29.07];

/// 1961 ≤ y < 1986, t = y − 1975.
const RANGE_1961_1986: [f64; 4] = [-1.0 / 718.0, -1.0 / 260.0, 1.067, 45.45];

/// 2005 ≤ y < 2050, t = y − 2000.
const RANGE_2005_2050: [f64; 3] = [0.005589, 0.32217, 62.92];

/// The long-term parabola used before −500 and after 2150.
fn parabola(y: f64) -> f64 {
    let u = (y - 1820.0) / 100.0;
    -20.0 + 32.0 * u * u
}

/// ΔT in seconds for a decimal year.
fn delta_t_for_decimal_year(y: f64) -> f64 {
    if y < -500.0 {
        parabola(y)
    } else if y < 500.0 {
        poly_eval(&RANGE_M500_500, y / 100.0)
    } else if y < 1600.0 {
        poly_eval(&RANGE_500_1600, (y - 1000.0) / 100.0)
    } else if y < 1700.0 {
        poly_eval(&RANGE_1600_1700, y - 1600.0)
    } else if y < 1800.0 {
        poly_eval(&RANGE_1700_1800, y - 1700.0)
    } else if y < 1860.0 {
        poly_eval(&RANGE_1800_1860, y - 1800.0)
    } else if y < 1900.0 {
        poly_eval(&RANGE_1860_1900, y - 1860.0)
    } else if y < 1920.0 {
        poly_eval(&RANGE_1900_1920, y - 1900.0)
    } else if y < 1941.0 {
        poly_eval(&RANGE_1920_1941, y - 1920.0)
    } else if y < 1961.0 {
        poly_eval(&RANGE_1941_1961, y - 1950.0)
    } else if y < 1986.0 {
        poly_eval(&RANGE_1961_1986, y - 1975.0)
    } else if y < 2005.0 {
        // Closed form; fitted to the 1986-2005 lunar-occultation data.
        let t = y - 2000.0;
        63.86 + 0.3345 * t - 0.060374 * t * t
            + 0.0017275 * t * t * t
            + 0.000651814 * t * t * t * t
            + 0.00002373599 * t * t * t * t * t
    } else if y < 2050.0 {
        poly_eval(&RANGE_2005_2050, y - 2000.0)
    } else if y < 2150.0 {
        // Parabola with a linear blend toward the 2150 asymptote.
        parabola(y) - 0.5628 * (2150.0 - y)
    } else {
        parabola(y)
    }
}

/// ΔT in seconds for a calendar year and month.
///
/// The model is keyed on the decimal year `y = year + (month − 0.5)/12`
/// (mid-month sampling).
pub fn delta_t_seconds(year: i32, month: u32) -> f64 {
    delta_t_for_decimal_year(year as f64 + (month as f64 - 0.5) / 12.0)
}

/// ΔT in seconds at a Julian Date (either time scale; ΔT varies far
/// too slowly for the ~minute difference to matter).
pub fn delta_t_at_jd(jd: f64) -> f64 {
    let (year, month, _) = jd_to_calendar(jd);
    delta_t_seconds(year, month)
}
