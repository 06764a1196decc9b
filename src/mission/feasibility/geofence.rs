//! Geofence containment check
//!
//! Normalizes every item altitude to AMSL and queries the geofence for each
//! positional item. Relative altitudes are only meaningful with a valid
//! home, with or without a fence that explicitly requires one.

use crate::events::FeasibilityEvent;
use crate::mission::MissionPlan;

use super::FeasibilityChecker;

impl FeasibilityChecker<'_> {
    pub(super) fn check_geofence(
        &mut self,
        mission: &MissionPlan,
        home_alt: f32,
        home_valid: bool,
    ) -> bool {
        if self.geofence.is_home_required() && !home_valid {
            self.events.send(FeasibilityEvent::GeofenceRequiresHome);
            return false;
        }

        if !self.geofence.valid() {
            return true;
        }

        for index in 0..mission.count {
            let Some(item) = self.read_item(mission, index) else {
                return false;
            };

            if item.altitude_is_relative && !home_valid {
                self.events.send(FeasibilityEvent::GeofenceRequiresHome);
                return false;
            }

            let altitude_amsl = item.altitude_amsl(home_alt);

            if item.has_position() && !self.geofence.contains(item.lat, item.lon, altitude_amsl) {
                self.events
                    .send(FeasibilityEvent::GeofenceViolation { item: index + 1 });
                return false;
            }
        }

        true
    }
}
