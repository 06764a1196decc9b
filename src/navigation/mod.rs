//! Navigation geometry
//!
//! Pure functions for geographic calculations used by the mission checks.

pub mod geo;

pub use geo::{great_circle_distance, radians};
