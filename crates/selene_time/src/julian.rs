//! Julian Day ↔ proleptic-Gregorian calendar conversions.
//!
//! Standard algorithm from Meeus, *Astronomical Algorithms* ch. 7,
//! with the Gregorian leap rule applied over the whole axis (no
//! Julian-calendar switchover).

/// Julian Date of the J2000.0 epoch (2000 Jan 1.5 TT).
pub const J2000_JD: f64 = 2_451_545.0;

/// Seconds per day.
pub const SECONDS_PER_DAY: f64 = 86_400.0;

/// Julian centuries from J2000.0 for a Julian Date.
pub fn julian_centuries(jd: f64) -> f64 {
    (jd - J2000_JD) / 36_525.0
}

/// Julian millennia from J2000.0 for a Julian Date.
pub fn julian_millennia(jd: f64) -> f64 {
    (jd - J2000_JD) / 365_250.0
}

/// Convert a proleptic-Gregorian calendar date to a Julian Date.
///
/// `day` carries the time of day as a fraction; `calendar_to_jd(2000,
/// 1, 1.5)` is J2000.0.
pub fn calendar_to_jd(year: i32, month: u32, day: f64) -> f64 {
    let (y, m) = if month > 2 {
        (year as f64, month as f64)
    } else {
        (year as f64 - 1.0, month as f64 + 12.0)
    };
    let a = (y / 100.0).floor();
    let b = 2.0 - a + (a / 4.0).floor();
    (365.25 * (y + 4716.0)).floor() + (30.6001 * (m + 1.0)).floor() + day + b - 1524.5
}

/// Convert a Julian Date to a proleptic-Gregorian calendar date.
///
/// Returns `(year, month, day)` with the time of day in the fractional
/// part of `day`.
pub fn jd_to_calendar(jd: f64) -> (i32, u32, f64) {
    let z = (jd + 0.5).floor();
    let f = jd + 0.5 - z;
    let alpha = ((z - 1_867_216.25) / 36_524.25).floor();
    let a = z + 1.0 + alpha - (alpha / 4.0).floor();
    let b = a + 1524.0;
    let c = ((b - 122.1) / 365.25).floor();
    let d = (365.25 * c).floor();
    let e = ((b - d) / 30.6001).floor();
    let day = b - d - (30.6001 * e).floor() + f;
    let month = if e < 14.0 { e - 1.0 } else { e - 13.0 };
    let year = if month > 2.0 { c - 4716.0 } else { c - 4715.0 };
    (year as i32, month as u32, day)
}

/// Integer day number of the calendar day containing `jd`.
///
/// Drops the time of day while respecting the noon-based JD epoch
/// (the calendar day boundary sits at JD fraction 0.5). Two instants
/// share a day number exactly when they fall on the same calendar day.
pub fn jd_day_number(jd: f64) -> i64 {
    (jd + 0.5).floor() as i64
}
