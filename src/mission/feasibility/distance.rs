//! Distance checks
//!
//! Bounds the distance from home to the first waypoint and between
//! successive waypoints, and rejects condition gates that coincide with an
//! adjacent waypoint (a zero-length segment leaves the crossing direction
//! undefined).

use crate::events::FeasibilityEvent;
use crate::mission::{MissionPlan, NavCommand};
use crate::navigation::great_circle_distance;

use super::FeasibilityChecker;

/// Minimum separation between a condition gate and its neighbors (meters).
const MIN_GATE_DISTANCE_M: f32 = 0.05;

impl FeasibilityChecker<'_> {
    pub(super) fn check_distance_to_first_waypoint(
        &mut self,
        mission: &MissionPlan,
        max_distance: f32,
    ) -> bool {
        if max_distance <= 0.0 {
            // check disabled
            return true;
        }

        for index in 0..mission.count {
            let Some(item) = self.read_item(mission, index) else {
                return false;
            };

            if !item.has_position() {
                continue;
            }

            let distance = great_circle_distance(
                item.lat,
                item.lon,
                self.vehicle.home.lat,
                self.vehicle.home.lon,
            );

            if distance < max_distance {
                return true;
            }

            self.events.send(FeasibilityEvent::FirstWaypointTooFar {
                distance: distance as u32,
                max_distance: max_distance as u32,
            });
            return false;
        }

        // no positional items, the vehicle will not fly anywhere
        true
    }

    pub(super) fn check_distances_between_waypoints(
        &mut self,
        mission: &MissionPlan,
        max_distance: f32,
    ) -> bool {
        if max_distance <= 0.0 {
            // check disabled
            return true;
        }

        let mut previous: Option<(f64, f64, NavCommand)> = None;

        for index in 0..mission.count {
            let Some(item) = self.read_item(mission, index) else {
                return false;
            };

            let Some(command) = item.nav_command() else {
                continue;
            };

            if !command.has_position() {
                continue;
            }

            if let Some((last_lat, last_lon, last_command)) = previous {
                let distance = great_circle_distance(item.lat, item.lon, last_lat, last_lon);

                if distance > max_distance {
                    self.events.send(FeasibilityEvent::WaypointDistanceTooFar {
                        distance: distance as u32,
                        max_distance: max_distance as u32,
                    });
                    return false;
                } else if distance < MIN_GATE_DISTANCE_M
                    && (command == NavCommand::ConditionGate
                        || last_command == NavCommand::ConditionGate)
                {
                    self.events.send(FeasibilityEvent::GateCoincidence {
                        distance,
                        min_distance: MIN_GATE_DISTANCE_M,
                    });
                    return false;
                }
            }

            previous = Some((item.lat, item.lon, command));
        }

        true
    }
}
