//! Solar position models: VSOP87 Earth series, nutation in longitude,
//! and apparent solar longitude at two accuracy levels.

pub mod earth_vsop;
pub mod nutation;
pub mod solar;

pub use earth_vsop::{earth_heliocentric_longitude_deg, earth_radius_vector_au};
pub use nutation::nutation_in_longitude;
pub use solar::{apparent_solar_longitude, solar_longitude_low_accuracy};
