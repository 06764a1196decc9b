//! Mission Feasibility Checker
//!
//! Decides whether a persisted mission can be safely executed by the
//! current vehicle in its current state. The checker runs a fixed sequence
//! of sub-checks, each of which reads items through the storage adapter and
//! reports rejections as [`FeasibilityEvent`]s. Sub-checks short-circuit on
//! the first violation they find, but the checker runs every sub-check even
//! after a failure so the operator sees all reasons at once.
//!
//! All state (`warning` flag, derived takeoff/landing presence) is reset at
//! the start of every [`FeasibilityChecker::check`] call; nothing persists
//! across calls.

mod altitude;
mod distance;
mod geofence;
mod item;
mod landing;
mod policy;
mod takeoff;

pub use policy::TakeoffLandRequirement;

use crate::events::{EventSink, FeasibilityEvent};
use crate::geofence::Geofence;
use crate::parameters::ParameterStore;
use crate::vehicle::{VehicleState, VehicleType};

use super::storage::MissionStore;
use super::{MissionItem, MissionPlan};

/// Positions closer than this are considered identical (meters).
///
/// Used to decide whether an item carries its own acceptance radius.
pub const NAV_EPSILON_POSITION: f32 = 0.001;

/// Outcome of a feasibility check beyond the pass/fail verdict.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MissionResult {
    /// A non-fatal condition was found (e.g. a waypoint below home)
    pub warning: bool,
}

/// Mission feasibility checker.
///
/// Borrows its collaborators for the duration of the check; the mission
/// snapshot and vehicle state must be stable while [`check`](Self::check)
/// runs (caller contract).
pub struct FeasibilityChecker<'a> {
    store: &'a dyn MissionStore,
    geofence: &'a dyn Geofence,
    params: &'a ParameterStore,
    vehicle: &'a VehicleState,
    events: &'a mut dyn EventSink,
    result: MissionResult,
    has_takeoff: bool,
    has_landing: bool,
}

impl<'a> FeasibilityChecker<'a> {
    /// Create a checker over the given collaborators.
    pub fn new(
        store: &'a dyn MissionStore,
        geofence: &'a dyn Geofence,
        params: &'a ParameterStore,
        vehicle: &'a VehicleState,
        events: &'a mut dyn EventSink,
    ) -> Self {
        Self {
            store,
            geofence,
            params,
            vehicle,
            events,
            result: MissionResult::default(),
            has_takeoff: false,
            has_landing: false,
        }
    }

    /// Result of the most recent check.
    pub fn result(&self) -> &MissionResult {
        &self.result
    }

    /// Check whether the mission is feasible.
    ///
    /// # Arguments
    ///
    /// * `mission` - Handle to the persisted mission
    /// * `max_dist_first` - Maximum distance from home to the first
    ///   waypoint in meters (`<= 0` disables the check)
    /// * `max_dist_between` - Maximum distance between successive waypoints
    ///   in meters (`<= 0` disables the check)
    ///
    /// Returns `true` iff every sub-check passed. Rejection reasons are
    /// delivered to the event sink in generation order.
    pub fn check(
        &mut self,
        mission: &MissionPlan,
        max_dist_first: f32,
        max_dist_between: f32,
    ) -> bool {
        self.result.warning = false;
        self.has_takeoff = false;
        self.has_landing = false;

        // a mission with length zero cannot be valid
        if mission.count == 0 {
            return false;
        }

        crate::log_info!("Running mission feasibility checks ({} items)", mission.count);

        let mut failed = false;

        let home_valid = self.vehicle.home_position_valid;
        let home_alt_valid = self.vehicle.home_alt_valid;

        if !home_alt_valid {
            failed = true;
            self.events.send(FeasibilityEvent::NoPositionLock);
        } else {
            failed |= !self.check_distance_to_first_waypoint(mission, max_dist_first);
        }

        let home_alt = self.vehicle.home.alt;

        failed |= !self.check_item_validity(mission);
        failed |= !self.check_distances_between_waypoints(mission, max_dist_between);
        failed |= !self.check_geofence(mission, home_alt, home_valid);
        failed |= !self.check_home_altitude(mission, home_alt, home_alt_valid);
        failed |= !self.check_takeoff(mission, home_alt);

        // landing checks also derive has_landing for the policy check below
        match self.vehicle.vehicle_type {
            VehicleType::Vtol => failed |= !self.check_vtol_landing(mission),
            VehicleType::FixedWing => failed |= !self.check_fixed_wing_landing(mission),
            VehicleType::Multicopter => self.has_landing = self.has_mission_landing(mission),
        }

        failed |= !self.check_takeoff_land_available();

        if failed {
            crate::log_warn!("Mission feasibility check failed");
        }

        !failed
    }

    /// Read one mission item, reporting a storage failure if the read fails.
    fn read_item(&mut self, mission: &MissionPlan, index: u16) -> Option<MissionItem> {
        match self.store.read_item(mission.storage_id, index) {
            Ok(item) => Some(item),
            Err(_) => {
                self.events.send(FeasibilityEvent::StorageFailure);
                None
            }
        }
    }
}


#[cfg(test)]
mod tests {
    use super::testing::{World, HOME, LAT_DEG_PER_M};
    use crate::mission::{MissionItem, NavCommand};
    use crate::vehicle::VehicleType;

    fn minimal_mission(world: &mut World) {
        let mut takeoff = MissionItem::nav(NavCommand::Takeoff, HOME.lat, HOME.lon, 10.0);
        takeoff.acceptance_radius = 2.0;
        world.store.push(takeoff).unwrap();
        world
            .store
            .push(MissionItem::nav(
                NavCommand::Waypoint,
                HOME.lat + 100.0 * LAT_DEG_PER_M,
                HOME.lon,
                10.0,
            ))
            .unwrap();
        world
            .store
            .push(MissionItem::nav(NavCommand::Land, HOME.lat, HOME.lon, 0.0))
            .unwrap();
    }

    #[test]
    fn test_empty_mission_is_infeasible() {
        let mut world = World::new(VehicleType::Multicopter);
        assert!(!world.run());
        // trivially invalid, no reason reported
        assert!(world.events().is_empty());
    }

    #[test]
    fn test_minimal_mission_passes() {
        let mut world = World::new(VehicleType::Multicopter);
        minimal_mission(&mut world);

        assert!(world.run());
        assert!(!world.warning);
        assert!(world.events().is_empty());
    }

    #[test]
    fn test_invalid_home_altitude_reports_no_position_lock() {
        let mut world = World::new(VehicleType::Multicopter);
        minimal_mission(&mut world);
        world.vehicle.home_alt_valid = false;

        assert!(!world.run());
        assert!(world.has_event("NoPositionLock"));
    }

    #[test]
    fn test_failures_aggregate_across_sub_checks() {
        let mut world = World::new(VehicleType::Multicopter);
        // waypoint first, then a takeoff that is both too low and not first
        world
            .store
            .push(MissionItem::nav(NavCommand::Waypoint, HOME.lat, HOME.lon, 5.0))
            .unwrap();
        let mut takeoff = MissionItem::nav(NavCommand::Takeoff, HOME.lat, HOME.lon, 1.0);
        takeoff.acceptance_radius = 10.0;
        world.store.push(takeoff).unwrap();

        world.vehicle.takeoff_land_required = 3;

        assert!(!world.run());
        // both the takeoff check and the policy check report
        assert!(world.has_event("TakeoffAltTooLow"));
        assert!(world.has_event("TakeoffOrLandingMissing"));
    }

    #[test]
    fn test_check_is_repeatable() {
        let mut world = World::new(VehicleType::Multicopter);
        minimal_mission(&mut world);
        world.vehicle.home_alt_valid = false;

        assert!(!world.run());
        let first = world.events.clone();

        world.events.clear();
        assert!(!world.run());
        assert_eq!(world.events(), first.events());
    }

    #[test]
    fn test_state_resets_between_checks() {
        let mut world = World::new(VehicleType::Multicopter);
        minimal_mission(&mut world);
        // below-home waypoint sets the warning
        world
            .store
            .push(MissionItem::nav_amsl(
                NavCommand::Waypoint,
                HOME.lat,
                HOME.lon,
                HOME.alt - 5.0,
            ))
            .unwrap();

        assert!(world.run());
        assert!(world.warning);

        // replace with a clean mission: warning must clear
        world.store.clear();
        minimal_mission(&mut world);
        world.events.clear();
        assert!(world.run());
        assert!(!world.warning);
    }
}
