//! A lunar calendar anchored on the vernal equinox.
//!
//! Lunar years start at the last New Moon preceding the year's vernal
//! equinox. Months ("moonths") are zero-based lunations from that
//! anchor; days are zero-based calendar-day offsets within a moonth.
//! Calendar arithmetic compares whole calendar days in Universal Time;
//! only the equinox-anchor scan compares full Dynamical-Time instants.

use selene_time::{Instant, jd_day_number, jd_to_calendar};

use crate::equinox::date_of_vernal_equinox;
use crate::lunar_phase::{Phase, date_of_moon};

/// Mean lunations per year, for seeding lunation scans.
const LUNATIONS_PER_YEAR: f64 = 12.3685;

/// A date in the equinox-anchored lunar calendar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LunarDate {
    /// Gregorian year owning the anchoring New Moon.
    pub year: i32,
    /// Zero-based lunation count since the anchor.
    pub moonth: u32,
    /// Zero-based day offset within the moonth.
    pub day: u32,
}

/// The New and Full Moons bracketing an instant.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MoonBrackets {
    pub prev_new: Instant,
    pub next_new: Instant,
    pub prev_full: Instant,
    pub next_full: Instant,
}

/// Lunation of the first New Moon whose calendar year is `year`.
fn first_lunation_of_year(year: i32) -> i32 {
    let mut k = ((year - 2000) as f64 * LUNATIONS_PER_YEAR).floor() as i32;
    while jd_to_calendar(date_of_moon(k, Phase::New).as_jd_tt()).0 < year {
        k += 1;
    }
    k
}

/// Lunation of the last New Moon before `year`'s vernal equinox.
///
/// Instants are compared on the Dynamical-Time axis; both sides come
/// from the same models so the scale cancels out of the ordering.
pub fn new_moon_before_vernal_equinox(year: i32) -> i32 {
    let equinox = date_of_vernal_equinox(year);
    let mut k = first_lunation_of_year(year);
    while date_of_moon(k, Phase::New) < equinox {
        k += 1;
    }
    k - 1
}

/// Calendar day number of a phase instant in Universal Time.
fn phase_day_number(k: i32, phase: Phase) -> i64 {
    jd_day_number(date_of_moon(k, phase).as_jd_ut())
}

/// Lunar calendar date of the calendar day containing `jd_ut`.
pub fn lunar_date(jd_ut: f64) -> LunarDate {
    let target = jd_day_number(jd_ut);
    let mut year = jd_to_calendar(jd_ut).0;
    let mut lun0 = new_moon_before_vernal_equinox(year);

    // January/February days before the anchor belong to the previous
    // lunar year
    if target < phase_day_number(lun0, Phase::New) {
        year -= 1;
        lun0 = new_moon_before_vernal_equinox(year);
    }

    let mut k = lun0;
    let mut prev_day = phase_day_number(lun0, Phase::New);
    loop {
        k += 1;
        let day = phase_day_number(k, Phase::New);
        if day > target {
            return LunarDate {
                year,
                moonth: (k - lun0 - 1) as u32,
                day: (target - prev_day) as u32,
            };
        }
        prev_day = day;
    }
}

/// The New and Full Moons bracketing the Universal-Time instant
/// `jd_ut`: the latest of each phase at or before it, and the earliest
/// strictly after.
pub fn date_of_moons(jd_ut: f64) -> MoonBrackets {
    let year = jd_to_calendar(jd_ut).0;
    let seed = ((year - 2000) as f64 * LUNATIONS_PER_YEAR).floor() as i32 - 1;

    let bracket = |phase: Phase| {
        let mut k = seed;
        loop {
            let next = date_of_moon(k + 1, phase);
            if next.as_jd_ut() > jd_ut {
                return (date_of_moon(k, phase), next);
            }
            k += 1;
        }
    };

    let (prev_new, next_new) = bracket(Phase::New);
    let (prev_full, next_full) = bracket(Phase::Full);
    MoonBrackets {
        prev_new,
        next_new,
        prev_full,
        next_full,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use selene_time::calendar_to_jd;

    #[test]
    fn anchor_precedes_equinox() {
        for year in [1984, 2000, 2024] {
            let lun0 = new_moon_before_vernal_equinox(year);
            let equinox = date_of_vernal_equinox(year);
            assert!(date_of_moon(lun0, Phase::New) < equinox, "year {year}");
            assert!(date_of_moon(lun0 + 1, Phase::New) >= equinox, "year {year}");
        }
    }

    #[test]
    fn first_lunation_lands_in_its_year() {
        for year in [1984, 1999, 2024] {
            let k = first_lunation_of_year(year);
            let (y_k, _, _) = jd_to_calendar(date_of_moon(k, Phase::New).as_jd_tt());
            let (y_prev, _, _) = jd_to_calendar(date_of_moon(k - 1, Phase::New).as_jd_tt());
            assert_eq!(y_k, year);
            assert_eq!(y_prev, year - 1);
        }
    }

    #[test]
    fn brackets_straddle_the_target() {
        let target = calendar_to_jd(2024, 3, 25.5);
        let brackets = date_of_moons(target);
        assert!(brackets.prev_new.as_jd_ut() <= target);
        assert!(brackets.next_new.as_jd_ut() > target);
        assert!(brackets.prev_full.as_jd_ut() <= target);
        assert!(brackets.next_full.as_jd_ut() > target);
        // The two phase families interleave by about half a lunation
        let gap = (brackets.next_full.as_jd_tt() - brackets.prev_new.as_jd_tt()).abs();
        assert!(gap < 45.0, "gap = {gap}");
    }
}
