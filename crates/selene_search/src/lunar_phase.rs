//! Instants of the Moon's principal phases, from the periodic series
//! of Meeus, *Astronomical Algorithms* ch. 49.
//!
//! A lunation index `k` counts synodic months; k = 0 is the first New
//! Moon of 2000. Fractional offsets 0.25/0.5/0.75 select the other
//! three phases of the same lunation. Accurate for k within roughly
//! years −1999..+3000; there is no range check and accuracy degrades
//! silently outside that window.

use selene_math::{normalize_360, poly_eval, to_rad};
use selene_time::Instant;

/// One of the Moon's four principal phases.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    New,
    FirstQuarter,
    Full,
    LastQuarter,
}

impl Phase {
    /// Fractional lunation offset selecting this phase.
    fn k_offset(self) -> f64 {
        match self {
            Phase::New => 0.0,
            Phase::FirstQuarter => 0.25,
            Phase::Full => 0.5,
            Phase::LastQuarter => 0.75,
        }
    }
}

/// Mean-phase JDE polynomial in `t`, applied on top of the linear
/// 29.530588861·k term (descending powers of t, days).
const MEAN_PHASE_CORRECTION: [f64; 5] = [0.000_000_000_73, -0.000_000_150, 0.000_154_37, 0.0, 0.0];

/// Eccentricity factor E, descending powers of t.
const ECCENTRICITY: [f64; 3] = [-0.000_007_4, -0.002_516, 1.0];

/// Periodic corrections for New and Full Moon.
///
/// Each row: `(new_amp, full_amp, e_pow, m, m′, f, ω)` — the sine
/// amplitude in days for the New and Full columns, the power of E
/// applied, and integer multipliers of the phase-local arguments.
#[rustfmt::skip]
static NEW_FULL_TERMS: [(f64, f64, u8, i8, i8, i8, i8); 25] = [
    (-0.40720, -0.40614, 0,  0, 1,  0, 0),
    ( 0.17241,  0.17302, 1,  1, 0,  0, 0),
    ( 0.01608,  0.01614, 0,  0, 2,  0, 0),
    ( 0.01039,  0.01043, 0,  0, 0,  2, 0),
    ( 0.00739,  0.00734, 1, -1, 1,  0, 0),
    (-0.00514, -0.00515, 1,  1, 1,  0, 0),
    ( 0.00208,  0.00209, 2,  2, 0,  0, 0),
    (-0.00111, -0.00111, 0,  0, 1, -2, 0),
    (-0.00057, -0.00057, 0,  0, 1,  2, 0),
    ( 0.00056,  0.00056, 1,  1, 2,  0, 0),
    (-0.00042, -0.00042, 0,  0, 3,  0, 0),
    ( 0.00042,  0.00042, 1,  1, 0,  2, 0),
    ( 0.00038,  0.00038, 1,  1, 0, -2, 0),
    (-0.00024, -0.00024, 1, -1, 2,  0, 0),
    (-0.00017, -0.00017, 0,  0, 0,  0, 1),
    (-0.00007, -0.00007, 0,  2, 1,  0, 0),
    ( 0.00004,  0.00004, 0,  0, 2, -2, 0),
    ( 0.00004,  0.00004, 0,  3, 0,  0, 0),
    ( 0.00003,  0.00003, 0,  1, 1, -2, 0),
    ( 0.00003,  0.00003, 0,  0, 2,  2, 0),
    (-0.00003, -0.00003, 0,  1, 1,  2, 0),
    ( 0.00003,  0.00003, 0, -1, 1,  2, 0),
    (-0.00002, -0.00002, 0, -1, 1, -2, 0),
    (-0.00002, -0.00002, 0,  1, 3,  0, 0),
    ( 0.00002,  0.00002, 0,  0, 4,  0, 0),
];

/// Periodic corrections for First and Last Quarter.
///
/// Each row: `(amp, e_pow, m, m′, f, ω)`.
#[rustfmt::skip]
static QUARTER_TERMS: [(f64, u8, i8, i8, i8, i8); 25] = [
    (-0.62801, 0,  0, 1,  0, 0),
    ( 0.17172, 1,  1, 0,  0, 0),
    (-0.01183, 1,  1, 1,  0, 0),
    ( 0.00862, 0,  0, 2,  0, 0),
    ( 0.00804, 0,  0, 0,  2, 0),
    ( 0.00454, 1, -1, 1,  0, 0),
    ( 0.00204, 2,  2, 0,  0, 0),
    (-0.00180, 0,  0, 1, -2, 0),
    (-0.00070, 0,  0, 1,  2, 0),
    (-0.00040, 0,  0, 3,  0, 0),
    (-0.00034, 1, -1, 2,  0, 0),
    ( 0.00032, 1,  1, 0,  2, 0),
    ( 0.00032, 1,  1, 0, -2, 0),
    (-0.00028, 2,  2, 1,  0, 0),
    ( 0.00027, 1,  1, 2,  0, 0),
    (-0.00017, 0,  0, 0,  0, 1),
    (-0.00005, 0, -1, 1, -2, 0),
    ( 0.00004, 0,  0, 2,  2, 0),
    (-0.00004, 0,  1, 1,  2, 0),
    ( 0.00004, 0, -2, 1,  0, 0),
    ( 0.00003, 0,  1, 1, -2, 0),
    ( 0.00003, 0,  3, 0,  0, 0),
    ( 0.00002, 0,  0, 2, -2, 0),
    ( 0.00002, 0, -1, 1,  2, 0),
    (-0.00002, 0,  1, 3,  0, 0),
];

/// Additional corrections from planetary perturbations.
///
/// Each row: `(amp, base, rate, quad)` contributing
/// `amp·sin(base + rate·k + quad·t²)` days.
#[rustfmt::skip]
static PLANETARY_TERMS: [(f64, f64, f64, f64); 14] = [
    (0.000_325, 299.77,  0.107408, -0.009173),
    (0.000_165, 251.88,  0.016321,  0.0),
    (0.000_164, 251.83, 26.651886,  0.0),
    (0.000_126, 349.42, 36.412478,  0.0),
    (0.000_110,  84.66, 18.206239,  0.0),
    (0.000_062, 141.74, 53.303771,  0.0),
    (0.000_060, 207.14,  2.453732,  0.0),
    (0.000_056, 154.84,  7.306860,  0.0),
    (0.000_047,  34.52, 27.261239,  0.0),
    (0.000_042, 207.19,  0.121824,  0.0),
    (0.000_040, 291.34,  1.844379,  0.0),
    (0.000_037, 161.72, 24.198154,  0.0),
    (0.000_035, 239.56, 25.513099,  0.0),
    (0.000_023, 331.55,  3.592518,  0.0),
];

/// Dynamical-Time instant of the given phase of lunation `k`.
pub fn date_of_moon(k: i32, phase: Phase) -> Instant {
    let kf = k as f64 + phase.k_offset();
    let t = kf / 1236.85;
    let t2 = t * t;

    let mut jde = 2_451_550.097_66 + 29.530_588_861 * kf + poly_eval(&MEAN_PHASE_CORRECTION, t);

    let e = poly_eval(&ECCENTRICITY, t);
    let m = to_rad(normalize_360(
        2.5534 + 29.105_356_70 * kf - 0.000_001_4 * t2 - 0.000_000_11 * t2 * t,
    ));
    let mp = to_rad(normalize_360(
        201.5643 + 385.816_935_28 * kf + 0.010_758_2 * t2 + 0.000_012_38 * t2 * t
            - 0.000_000_058 * t2 * t2,
    ));
    let f = to_rad(normalize_360(
        160.7108 + 390.670_502_84 * kf - 0.001_611_8 * t2 - 0.000_002_27 * t2 * t
            + 0.000_000_011 * t2 * t2,
    ));
    let om = to_rad(normalize_360(
        124.7746 - 1.563_755_88 * kf + 0.002_067_2 * t2 + 0.000_002_15 * t2 * t,
    ));

    match phase {
        Phase::New | Phase::Full => {
            for &(new_amp, full_amp, e_pow, nm, nmp, nf, nom) in &NEW_FULL_TERMS {
                let amp = if phase == Phase::New { new_amp } else { full_amp };
                let arg = m * nm as f64 + mp * nmp as f64 + f * nf as f64 + om * nom as f64;
                jde += amp * e.powi(e_pow as i32) * arg.sin();
            }
        }
        Phase::FirstQuarter | Phase::LastQuarter => {
            for &(amp, e_pow, nm, nmp, nf, nom) in &QUARTER_TERMS {
                let arg = m * nm as f64 + mp * nmp as f64 + f * nf as f64 + om * nom as f64;
                jde += amp * e.powi(e_pow as i32) * arg.sin();
            }
            // Quarters sit off the mean instant by a phase-dependent
            // half-width w
            let w = 0.00306 - 0.00038 * e * m.cos() + 0.00026 * mp.cos()
                - 0.00002 * (mp - m).cos()
                + 0.00002 * (mp + m).cos()
                + 0.00002 * (2.0 * f).cos();
            jde += if phase == Phase::FirstQuarter { w } else { -w };
        }
    }

    for &(amp, base, rate, quad) in &PLANETARY_TERMS {
        jde += amp * to_rad(normalize_360(base + rate * kf + quad * t2)).sin();
    }

    Instant::from_jd_tt(jde)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quarter_offsets_order_within_a_lunation() {
        for k in [-500, -1, 0, 1, 300] {
            let new = date_of_moon(k, Phase::New);
            let fq = date_of_moon(k, Phase::FirstQuarter);
            let full = date_of_moon(k, Phase::Full);
            let lq = date_of_moon(k, Phase::LastQuarter);
            let next = date_of_moon(k + 1, Phase::New);
            assert!(new < fq && fq < full && full < lq && lq < next, "k = {k}");
        }
    }

    #[test]
    fn quarters_sit_roughly_a_week_apart() {
        for k in [-100, 0, 250] {
            let new = date_of_moon(k, Phase::New).as_jd_tt();
            let fq = date_of_moon(k, Phase::FirstQuarter).as_jd_tt();
            let gap = fq - new;
            assert!((6.0..9.0).contains(&gap), "gap = {gap} at k = {k}");
        }
    }
}
