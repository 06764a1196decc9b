//! Mission Check Parameter Definitions
//!
//! Defines the parameters the feasibility checker reads.
//!
//! # Parameters
//!
//! - `MIS_DIST_1WP` - Maximum distance from home to the first waypoint, meters (0 = unchecked)
//! - `MIS_DIST_WPS` - Maximum distance between successive waypoints, meters (0 = unchecked)
//! - `MIS_TKO_LAND_REQ` - Required mission items policy (0..4, see the policy check)
//! - `NAV_ACC_RAD` - Default waypoint acceptance radius, meters
//! - `FW_LND_ANG` - Fixed-wing maximum landing glide angle, degrees

use super::error::ParameterError;
use super::storage::{ParamFlags, ParamValue, ParameterStore};

// --- Defaults ---

const DEFAULT_DIST_FIRST_WP: f32 = 900.0;
const DEFAULT_DIST_BETWEEN_WP: f32 = 900.0;
const DEFAULT_TAKEOFF_LAND_REQ: i32 = 0;
const DEFAULT_ACCEPTANCE_RADIUS: f32 = 10.0;
const DEFAULT_LAND_ANGLE: f32 = 5.0;

// --- Ranges ---

const MIN_DISTANCE: f32 = 0.0;
const MAX_DISTANCE: f32 = 10_000.0;

const MIN_ACCEPTANCE_RADIUS: f32 = 0.05;
const MAX_ACCEPTANCE_RADIUS: f32 = 200.0;

const MIN_LAND_ANGLE: f32 = 1.0;
const MAX_LAND_ANGLE: f32 = 15.0;

/// Mission check parameters loaded from the parameter store
#[derive(Debug, Clone)]
pub struct MissionParams {
    /// Maximum distance from home to the first waypoint (0 = unchecked)
    pub dist_first_wp: f32,
    /// Maximum distance between successive waypoints (0 = unchecked)
    pub dist_between_wp: f32,
    /// Required mission items policy, raw value
    pub takeoff_land_req: i32,
    /// Default waypoint acceptance radius in meters
    pub acceptance_radius: f32,
    /// Fixed-wing maximum landing glide angle in degrees
    pub land_angle: f32,
}

impl Default for MissionParams {
    fn default() -> Self {
        Self {
            dist_first_wp: DEFAULT_DIST_FIRST_WP,
            dist_between_wp: DEFAULT_DIST_BETWEEN_WP,
            takeoff_land_req: DEFAULT_TAKEOFF_LAND_REQ,
            acceptance_radius: DEFAULT_ACCEPTANCE_RADIUS,
            land_angle: DEFAULT_LAND_ANGLE,
        }
    }
}

impl MissionParams {
    /// Register mission check parameters with default values
    pub fn register_defaults(store: &mut ParameterStore) -> Result<(), ParameterError> {
        store.register(
            "MIS_DIST_1WP",
            ParamValue::Float(DEFAULT_DIST_FIRST_WP),
            ParamFlags::empty(),
        )?;
        store.register(
            "MIS_DIST_WPS",
            ParamValue::Float(DEFAULT_DIST_BETWEEN_WP),
            ParamFlags::empty(),
        )?;
        store.register(
            "MIS_TKO_LAND_REQ",
            ParamValue::Int(DEFAULT_TAKEOFF_LAND_REQ),
            ParamFlags::empty(),
        )?;
        store.register(
            "NAV_ACC_RAD",
            ParamValue::Float(DEFAULT_ACCEPTANCE_RADIUS),
            ParamFlags::empty(),
        )?;
        store.register(
            "FW_LND_ANG",
            ParamValue::Float(DEFAULT_LAND_ANGLE),
            ParamFlags::empty(),
        )?;

        Ok(())
    }

    /// Load mission check parameters from the parameter store
    pub fn from_store(store: &ParameterStore) -> Self {
        let takeoff_land_req = match store.get("MIS_TKO_LAND_REQ") {
            Some(ParamValue::Int(v)) => *v,
            Some(ParamValue::Float(v)) => *v as i32,
            None => DEFAULT_TAKEOFF_LAND_REQ,
        };

        Self {
            dist_first_wp: load_float(
                store,
                "MIS_DIST_1WP",
                DEFAULT_DIST_FIRST_WP,
                MIN_DISTANCE,
                MAX_DISTANCE,
            ),
            dist_between_wp: load_float(
                store,
                "MIS_DIST_WPS",
                DEFAULT_DIST_BETWEEN_WP,
                MIN_DISTANCE,
                MAX_DISTANCE,
            ),
            takeoff_land_req,
            acceptance_radius: load_float(
                store,
                "NAV_ACC_RAD",
                DEFAULT_ACCEPTANCE_RADIUS,
                MIN_ACCEPTANCE_RADIUS,
                MAX_ACCEPTANCE_RADIUS,
            ),
            land_angle: load_float(
                store,
                "FW_LND_ANG",
                DEFAULT_LAND_ANGLE,
                MIN_LAND_ANGLE,
                MAX_LAND_ANGLE,
            ),
        }
    }
}

/// Load a float parameter from store with clamping
fn load_float(store: &ParameterStore, name: &str, default: f32, min: f32, max: f32) -> f32 {
    match store.get(name) {
        Some(ParamValue::Float(v)) => v.clamp(min, max),
        Some(ParamValue::Int(v)) => (*v as f32).clamp(min, max),
        None => default,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let params = MissionParams::default();
        assert_eq!(params.dist_first_wp, 900.0);
        assert_eq!(params.dist_between_wp, 900.0);
        assert_eq!(params.takeoff_land_req, 0);
        assert_eq!(params.acceptance_radius, 10.0);
        assert_eq!(params.land_angle, 5.0);
    }

    #[test]
    fn test_register_defaults_populates_all() {
        let mut store = ParameterStore::new();
        MissionParams::register_defaults(&mut store).unwrap();

        assert!(store.get("MIS_DIST_1WP").is_some());
        assert!(store.get("MIS_DIST_WPS").is_some());
        assert!(store.get("MIS_TKO_LAND_REQ").is_some());
        assert!(store.get("NAV_ACC_RAD").is_some());
        assert!(store.get("FW_LND_ANG").is_some());
    }

    #[test]
    fn test_from_store_reads_custom_values() {
        let mut store = ParameterStore::new();
        MissionParams::register_defaults(&mut store).unwrap();
        store.set("MIS_DIST_1WP", ParamValue::Float(250.0)).unwrap();
        store.set("MIS_TKO_LAND_REQ", ParamValue::Int(3)).unwrap();

        let params = MissionParams::from_store(&store);
        assert_eq!(params.dist_first_wp, 250.0);
        assert_eq!(params.takeoff_land_req, 3);
    }

    #[test]
    fn test_from_store_clamps_out_of_range() {
        let mut store = ParameterStore::new();
        MissionParams::register_defaults(&mut store).unwrap();
        store.set("FW_LND_ANG", ParamValue::Float(45.0)).unwrap();
        store.set("NAV_ACC_RAD", ParamValue::Float(0.0)).unwrap();

        let params = MissionParams::from_store(&store);
        assert_eq!(params.land_angle, MAX_LAND_ANGLE);
        assert_eq!(params.acceptance_radius, MIN_ACCEPTANCE_RADIUS);
    }

    #[test]
    fn test_from_empty_store_uses_defaults() {
        let store = ParameterStore::new();
        let params = MissionParams::from_store(&store);
        assert_eq!(params.dist_first_wp, DEFAULT_DIST_FIRST_WP);
        assert_eq!(params.land_angle, DEFAULT_LAND_ANGLE);
    }

    #[test]
    fn test_policy_value_not_clamped() {
        let mut store = ParameterStore::new();
        MissionParams::register_defaults(&mut store).unwrap();
        store.set("MIS_TKO_LAND_REQ", ParamValue::Int(9)).unwrap();

        // unknown policy values pass through; the policy check ignores them
        let params = MissionParams::from_store(&store);
        assert_eq!(params.takeoff_land_req, 9);
    }
}
