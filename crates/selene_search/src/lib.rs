//! Event searches over the solar and lunar models: phase instants by
//! lunation index, vernal equinoxes, and the equinox-anchored lunar
//! calendar built from both.

pub mod calendar;
pub mod equinox;
pub mod lunar_phase;

pub use calendar::{
    LunarDate, MoonBrackets, date_of_moons, lunar_date, new_moon_before_vernal_equinox,
};
pub use equinox::{date_of_vernal_equinox, date_of_vernal_equinox_low_accuracy};
pub use lunar_phase::{Phase, date_of_moon};
