//! Geofence Interface
//!
//! The feasibility checker treats the geofence as an opaque containment
//! predicate: fence storage, polygon math and breach handling live
//! elsewhere. Altitudes passed to [`Geofence::contains`] are always AMSL;
//! relative mission altitudes are normalized via home before the query.

/// Containment queries against the configured geofence.
pub trait Geofence {
    /// A usable fence definition is loaded.
    fn valid(&self) -> bool;

    /// Fence evaluation needs a valid home position (e.g. a fence defined
    /// with altitudes relative to home).
    fn is_home_required(&self) -> bool;

    /// Check whether a position is inside the fence.
    ///
    /// # Arguments
    ///
    /// * `lat`, `lon` - Position in degrees
    /// * `altitude_amsl` - Altitude above mean sea level in meters
    fn contains(&self, lat: f64, lon: f64, altitude_amsl: f32) -> bool;
}

/// Null geofence: no fence configured, nothing is constrained.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoGeofence;

impl Geofence for NoGeofence {
    fn valid(&self) -> bool {
        false
    }

    fn is_home_required(&self) -> bool {
        false
    }

    fn contains(&self, _lat: f64, _lon: f64, _altitude_amsl: f32) -> bool {
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_geofence_never_constrains() {
        let fence = NoGeofence;
        assert!(!fence.valid());
        assert!(!fence.is_home_required());
        assert!(fence.contains(47.0, 8.0, 500.0));
    }
}
