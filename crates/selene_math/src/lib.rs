//! Numeric primitives shared by every ephemeris computation.
//!
//! This crate provides:
//! - Horner polynomial evaluation over coefficient slices
//! - Degree/radian conversion and angle normalization

pub mod angle;
pub mod polynomial;

pub use angle::{normalize_360, to_deg, to_rad};
pub use polynomial::poly_eval;
