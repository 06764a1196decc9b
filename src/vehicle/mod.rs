//! Vehicle State Snapshot
//!
//! Plain-field snapshot of the vehicle consumed by the feasibility checker.
//! The caller fills it from its own telemetry and parameter sources before
//! a check; the checker never writes to it.

/// Airframe category, as far as mission validation cares.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VehicleType {
    /// Rotary wing; landing validity is not checked
    Multicopter,
    /// Fixed wing; landings need an approach with a feasible glide slope
    FixedWing,
    /// Hybrid; landings are checked for ordering but not geometry
    Vtol,
}

/// Home position (origin for relative altitudes, default RTL target).
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct HomePosition {
    /// Latitude in degrees
    pub lat: f64,
    /// Longitude in degrees
    pub lon: f64,
    /// Altitude above mean sea level in meters
    pub alt: f32,
}

/// Snapshot of the vehicle state at check time.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VehicleState {
    /// Horizontal home position is valid
    pub home_position_valid: bool,
    /// Home altitude is valid
    pub home_alt_valid: bool,
    /// Home position (meaningful only per the validity flags)
    pub home: HomePosition,
    /// Vehicle is on the ground
    pub landed: bool,
    /// Airframe category
    pub vehicle_type: VehicleType,
    /// Raw takeoff/landing requirement policy (MIS_TKO_LAND_REQ)
    pub takeoff_land_required: i32,
    /// Acceptance radius used when an item does not carry one (NAV_ACC_RAD)
    pub default_acceptance_radius: f32,
}

impl Default for VehicleState {
    fn default() -> Self {
        Self {
            home_position_valid: false,
            home_alt_valid: false,
            home: HomePosition::default(),
            landed: true,
            vehicle_type: VehicleType::Multicopter,
            takeoff_land_required: 0,
            default_acceptance_radius: 10.0,
        }
    }
}

impl VehicleState {
    /// Snapshot with a valid home position.
    pub fn with_home(vehicle_type: VehicleType, home: HomePosition) -> Self {
        Self {
            home_position_valid: true,
            home_alt_valid: true,
            home,
            vehicle_type,
            ..Self::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_has_no_home() {
        let state = VehicleState::default();
        assert!(!state.home_position_valid);
        assert!(!state.home_alt_valid);
        assert!(state.landed);
    }

    #[test]
    fn test_with_home_marks_valid() {
        let home = HomePosition {
            lat: 47.3977,
            lon: 8.5456,
            alt: 488.0,
        };
        let state = VehicleState::with_home(VehicleType::FixedWing, home);
        assert!(state.home_position_valid);
        assert!(state.home_alt_valid);
        assert_eq!(state.vehicle_type, VehicleType::FixedWing);
        assert_eq!(state.home.alt, 488.0);
    }
}
