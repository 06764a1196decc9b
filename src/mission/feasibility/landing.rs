//! Landing sequence checks
//!
//! Fixed-wing landings descend along a glide slope from an approach
//! entrance (a waypoint, or the tangent exit of an orbit-to-altitude
//! pattern), so the entrance geometry is validated against the configured
//! maximum glide angle. VTOL landings are checked for ordering only.
//! Multicopters land vertically from anywhere; their missions are merely
//! scanned for the presence of a landing.

use libm::{ceilf, fabsf, sqrtf, tanf};

use crate::events::FeasibilityEvent;
use crate::mission::{MissionPlan, NavCommand};
use crate::navigation::{great_circle_distance, radians};
use crate::parameters::ParamValue;

use super::FeasibilityChecker;

/// Headroom added to the configured landing angle (degrees), so missions
/// planned exactly at the limit are not rejected over float rounding.
const GLIDE_SLOPE_BUFFER_DEG: f32 = 0.1;

impl FeasibilityChecker<'_> {
    pub(super) fn check_fixed_wing_landing(&mut self, mission: &MissionPlan) -> bool {
        let mut landing_valid = false;
        let mut do_land_start_index: Option<u16> = None;
        let mut landing_approach_index: Option<u16> = None;

        for index in 0..mission.count {
            let Some(item) = self.read_item(mission, index) else {
                return false;
            };

            let Some(command) = item.nav_command() else {
                continue;
            };

            match command {
                NavCommand::DoLandStart => {
                    if self.has_landing {
                        self.events.send(FeasibilityEvent::MultipleLandStart);
                        return false;
                    }
                    self.has_landing = true;
                    do_land_start_index = Some(index);
                }
                NavCommand::Land => {
                    self.has_landing = true;

                    if index == 0 {
                        self.events.send(FeasibilityEvent::StartsWithLanding);
                        return false;
                    }

                    let land_angle = match self.params.get("FW_LND_ANG") {
                        Some(ParamValue::Float(v)) => *v,
                        Some(ParamValue::Int(v)) => *v as f32,
                        None => {
                            self.events.send(FeasibilityEvent::LandAngleParamMissing);
                            return false;
                        }
                    };

                    landing_approach_index = Some(index - 1);
                    let Some(entrance) = self.read_item(mission, index - 1) else {
                        return false;
                    };

                    if !entrance.has_position() {
                        self.events.send(FeasibilityEvent::ApproachRequired);
                        return false;
                    }

                    let home_alt = self.vehicle.home.alt;
                    let land_alt_amsl = item.altitude_amsl(home_alt);
                    let entrance_alt_amsl = entrance.altitude_amsl(home_alt);
                    let approach_altitude = entrance_alt_amsl - land_alt_amsl;

                    if approach_altitude < f32::EPSILON {
                        self.events.send(FeasibilityEvent::ApproachBelowLand);
                        return false;
                    }

                    let approach_distance = match entrance.nav_command() {
                        Some(NavCommand::LoiterToAlt) => {
                            // orbit to altitude followed by a tangent exit to
                            // the approach and touchdown at the landing point
                            let orbit_to_land = great_circle_distance(
                                entrance.lat,
                                entrance.lon,
                                item.lat,
                                item.lon,
                            );
                            let orbit_radius = fabsf(entrance.loiter_radius);

                            if orbit_to_land <= orbit_radius {
                                self.events.send(FeasibilityEvent::LandInsideOrbit);
                                return false;
                            }

                            sqrtf(orbit_to_land * orbit_to_land - orbit_radius * orbit_radius)
                        }
                        Some(NavCommand::Waypoint) => great_circle_distance(
                            entrance.lat,
                            entrance.lon,
                            item.lat,
                            item.lon,
                        ),
                        _ => {
                            self.events.send(FeasibilityEvent::UnsupportedApproach);
                            return false;
                        }
                    };

                    let glide_slope = approach_altitude / approach_distance;
                    let max_glide_slope = tanf(radians(land_angle + GLIDE_SLOPE_BUFFER_DEG));

                    if glide_slope > max_glide_slope {
                        self.events.send(FeasibilityEvent::GlideSlopeTooSteep {
                            max_angle: land_angle,
                        });
                        self.events.send(FeasibilityEvent::CorrectGlideSlope {
                            entrance_alt: (max_glide_slope * approach_distance) as u32,
                            landing_dist: ceilf(approach_altitude / max_glide_slope) as u32,
                        });
                        return false;
                    }

                    landing_valid = true;
                }
                NavCommand::ReturnToLaunch => {
                    if self.has_landing
                        && do_land_start_index.map_or(true, |land_start| land_start < index)
                    {
                        self.events.send(FeasibilityEvent::LandBeforeRtl);
                        return false;
                    }
                }
                _ => {}
            }
        }

        if self.has_landing {
            let land_start = do_land_start_index.unwrap_or(0);
            let approach = landing_approach_index.unwrap_or(0);

            if !landing_valid || land_start > approach {
                self.events.send(FeasibilityEvent::InvalidLandStart);
                return false;
            }
        }

        true
    }

    pub(super) fn check_vtol_landing(&mut self, mission: &MissionPlan) -> bool {
        let mut do_land_start_index: Option<u16> = None;
        let mut landing_approach_index: Option<u16> = None;

        for index in 0..mission.count {
            let Some(item) = self.read_item(mission, index) else {
                return false;
            };

            let Some(command) = item.nav_command() else {
                continue;
            };

            match command {
                NavCommand::DoLandStart => {
                    if self.has_landing {
                        self.events.send(FeasibilityEvent::MultipleLandStart);
                        return false;
                    }
                    self.has_landing = true;
                    do_land_start_index = Some(index);
                }
                NavCommand::Land | NavCommand::VtolLand => {
                    self.has_landing = true;

                    if index == 0 {
                        self.events.send(FeasibilityEvent::StartsWithLanding);
                        return false;
                    }

                    landing_approach_index = Some(index - 1);
                    if self.read_item(mission, index - 1).is_none() {
                        return false;
                    }
                }
                NavCommand::ReturnToLaunch => {
                    if self.has_landing
                        && do_land_start_index.map_or(true, |land_start| land_start < index)
                    {
                        self.events.send(FeasibilityEvent::LandBeforeRtl);
                        return false;
                    }
                }
                _ => {}
            }
        }

        if self.has_landing
            && do_land_start_index.unwrap_or(0) > landing_approach_index.unwrap_or(0)
        {
            self.events.send(FeasibilityEvent::InvalidLandStart);
            return false;
        }

        true
    }

    /// Scan for a landing without validating it (multicopter missions).
    pub(super) fn has_mission_landing(&mut self, mission: &MissionPlan) -> bool {
        for index in 0..mission.count {
            let Some(item) = self.read_item(mission, index) else {
                return false;
            };

            if item.nav_command() == Some(NavCommand::Land) {
                return true;
            }
        }

        false
    }
}
