//! Home-relative altitude checks
//!
//! Items with relative altitude need a known home altitude. A waypoint
//! planned below home is suspicious but legal, so it only raises the
//! warning flag.

use crate::events::FeasibilityEvent;
use crate::mission::MissionPlan;

use super::FeasibilityChecker;

impl FeasibilityChecker<'_> {
    pub(super) fn check_home_altitude(
        &mut self,
        mission: &MissionPlan,
        home_alt: f32,
        home_alt_valid: bool,
    ) -> bool {
        for index in 0..mission.count {
            let Some(item) = self.read_item(mission, index) else {
                return false;
            };

            if item.altitude_is_relative && !home_alt_valid && item.has_position() {
                self.events
                    .send(FeasibilityEvent::NoHomeRelativeAlt { item: index + 1 });
                return false;
            }

            let waypoint_alt = item.altitude_amsl(home_alt);

            if home_alt_valid && home_alt > waypoint_alt && item.has_position() {
                // non-fatal: flag it and keep walking
                self.result.warning = true;
                self.events
                    .send(FeasibilityEvent::WaypointBelowHome { item: index + 1 });
            }
        }

        true
    }
}
