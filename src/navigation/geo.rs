//! Geographic calculations over a spherical Earth
//!
//! Every feasibility sub-check measures distance with the same formula so
//! that boundary cases (acceptance radii, gate coincidence) are consistent
//! across checks.

use libm::{atan2, cos, sin, sqrt};

/// Mean Earth radius in meters (spherical model)
const EARTH_RADIUS_M: f64 = 6_371_000.0;

/// Convert degrees to radians
pub fn radians(degrees: f32) -> f32 {
    degrees * (core::f32::consts::PI / 180.0)
}

/// Great-circle distance between two positions using the Haversine formula
///
/// # Arguments
///
/// * `lat1`, `lon1` - Start position in degrees
/// * `lat2`, `lon2` - End position in degrees
///
/// # Returns
///
/// Distance in meters
pub fn great_circle_distance(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> f32 {
    const DEG_TO_RAD: f64 = core::f64::consts::PI / 180.0;

    let lat1_rad = lat1 * DEG_TO_RAD;
    let lat2_rad = lat2 * DEG_TO_RAD;
    let delta_lat = (lat2 - lat1) * DEG_TO_RAD;
    let delta_lon = (lon2 - lon1) * DEG_TO_RAD;

    let sin_dlat = sin(delta_lat / 2.0);
    let sin_dlon = sin(delta_lon / 2.0);
    let a = sin_dlat * sin_dlat + cos(lat1_rad) * cos(lat2_rad) * sin_dlon * sin_dlon;
    let c = 2.0 * atan2(sqrt(a), sqrt(1.0 - a));

    (EARTH_RADIUS_M * c) as f32
}
