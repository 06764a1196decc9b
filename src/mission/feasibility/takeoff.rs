//! Takeoff sequence check
//!
//! Every takeoff item must climb at least one meter past its acceptance
//! sphere, otherwise the item is reached while the vehicle is still on the
//! ground. If the mission contains a takeoff anywhere but the start, only
//! non-positional items may precede it.

use crate::events::FeasibilityEvent;
use crate::mission::MissionPlan;

use super::{FeasibilityChecker, NAV_EPSILON_POSITION};

impl FeasibilityChecker<'_> {
    pub(super) fn check_takeoff(&mut self, mission: &MissionPlan, home_alt: f32) -> bool {
        let mut first_takeoff_index: Option<u16> = None;

        for index in 0..mission.count {
            let Some(item) = self.read_item(mission, index) else {
                return false;
            };

            let Some(command) = item.nav_command() else {
                continue;
            };

            if command.is_takeoff() {
                let takeoff_alt = if item.altitude_is_relative {
                    item.altitude
                } else {
                    item.altitude - home_alt
                };

                let acceptance_radius = if item.acceptance_radius > NAV_EPSILON_POSITION {
                    item.acceptance_radius
                } else {
                    self.vehicle.default_acceptance_radius
                };

                // the climb must clear the acceptance sphere with a meter to spare
                if takeoff_alt - 1.0 < acceptance_radius {
                    self.events.send(FeasibilityEvent::TakeoffAltTooLow {
                        min_altitude: acceptance_radius + 1.0,
                    });
                    return false;
                }

                self.has_takeoff = true;

                if first_takeoff_index.is_none() {
                    first_takeoff_index = Some(index);
                }
            }
        }

        if let Some(takeoff_index) = first_takeoff_index {
            // every item before the takeoff must be one that works on the ground
            for index in 0..takeoff_index {
                let Some(item) = self.read_item(mission, index) else {
                    return false;
                };

                let allowed =
                    matches!(item.nav_command(), Some(cmd) if cmd.allowed_before_takeoff());

                if !allowed {
                    self.events.send(FeasibilityEvent::TakeoffNotFirst);
                    return false;
                }
            }
        }

        true
    }
}
