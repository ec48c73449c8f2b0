//! Time scales and calendar conversions for ephemeris math.
//!
//! This crate provides:
//! - Julian Date ↔ proleptic-Gregorian calendar conversions
//! - The ΔT model relating Terrestrial Time and Universal Time
//! - An `Instant` type for type-safe TT epoch handling
//! - `CalendarTime`, the presentation-boundary date/time
//!
//! All periodic-series computation elsewhere in the workspace happens
//! in Terrestrial (Dynamical) Time; Universal Time appears only when a
//! result is rendered for display.

pub mod delta_t;
pub mod julian;

pub use delta_t::{delta_t_at_jd, delta_t_seconds};
pub use julian::{
    J2000_JD, SECONDS_PER_DAY, calendar_to_jd, jd_day_number, jd_to_calendar, julian_centuries,
    julian_millennia,
};

/// A point in time as a Julian Date on the Terrestrial Time axis.
///
/// This is the primary time type used throughout the workspace. It
/// wraps an `f64` day count, which resolves sub-second differences
/// over the model's whole validity window.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Instant {
    jd_tt: f64,
}

impl Instant {
    /// Create an instant from a Julian Date in TT.
    pub fn from_jd_tt(jd: f64) -> Self {
        Self { jd_tt: jd }
    }

    /// Julian Date in TT.
    pub fn as_jd_tt(self) -> f64 {
        self.jd_tt
    }

    /// Julian Date in UT: `TT − ΔT/86400`.
    pub fn as_jd_ut(self) -> f64 {
        self.jd_tt - delta_t_at_jd(self.jd_tt) / SECONDS_PER_DAY
    }
}

/// Calendar date/time with sub-second precision.
///
/// Scale-agnostic: it renders whatever Julian Date it is built from,
/// so callers pick TT or UT before converting.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CalendarTime {
    pub year: i32,
    pub month: u32,
    pub day: u32,
    pub hour: u32,
    pub minute: u32,
    pub second: f64,
}

impl CalendarTime {
    pub fn new(year: i32, month: u32, day: u32, hour: u32, minute: u32, second: f64) -> Self {
        Self {
            year,
            month,
            day,
            hour,
            minute,
            second,
        }
    }

    /// Split a Julian Date into calendar fields.
    pub fn from_jd(jd: f64) -> Self {
        let (year, month, day_frac) = jd_to_calendar(jd);
        let day = day_frac.floor() as u32;
        let total_seconds = day_frac.fract() * SECONDS_PER_DAY;
        let hour = (total_seconds / 3600.0).floor() as u32;
        let minute = ((total_seconds % 3600.0) / 60.0).floor() as u32;
        let second = total_seconds % 60.0;
        Self {
            year,
            month,
            day,
            hour,
            minute,
            second,
        }
    }

    /// Julian Date of this calendar time (same scale it was built in).
    pub fn to_jd(self) -> f64 {
        let day_frac = self.day as f64
            + self.hour as f64 / 24.0
            + self.minute as f64 / 1440.0
            + self.second / SECONDS_PER_DAY;
        calendar_to_jd(self.year, self.month, day_frac)
    }
}

impl std::fmt::Display for CalendarTime {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{:04}-{:02}-{:02} {:02}:{:02}:{:02}",
            self.year,
            self.month,
            self.day,
            self.hour,
            self.minute,
            // Truncate rather than round so seconds never show as 60
            self.second as u32
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn instant_roundtrip() {
        let jd = 2_460_000.5;
        let instant = Instant::from_jd_tt(jd);
        assert_eq!(instant.as_jd_tt(), jd);
    }

    #[test]
    fn ut_lags_tt_in_modern_era() {
        let instant = Instant::from_jd_tt(J2000_JD);
        let lag_seconds = (instant.as_jd_tt() - instant.as_jd_ut()) * SECONDS_PER_DAY;
        assert!((lag_seconds - 63.9).abs() < 0.3, "ΔT = {lag_seconds}");
    }

    #[test]
    fn instants_order_by_day_count() {
        let a = Instant::from_jd_tt(2_451_545.0);
        let b = Instant::from_jd_tt(2_451_545.0 + 1e-9);
        assert!(a < b);
    }

    #[test]
    fn calendar_time_display() {
        let t = CalendarTime::new(1999, 3, 21, 1, 46, 56.2);
        assert_eq!(t.to_string(), "1999-03-21 01:46:56");
    }

    #[test]
    fn calendar_time_roundtrip() {
        // An f64 JD near 2.45e6 resolves to ~4e-5 s, which bounds how
        // tightly the seconds field can survive the round trip
        let t = CalendarTime::new(2007, 1, 19, 4, 1, 45.0);
        let back = CalendarTime::from_jd(t.to_jd());
        assert_eq!((back.year, back.month, back.day), (2007, 1, 19));
        assert_eq!((back.hour, back.minute), (4, 1));
        assert!((back.second - 45.0).abs() < 1e-3, "second = {}", back.second);
    }
}
