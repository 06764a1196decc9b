//! Mission Types and Feasibility Checking
//!
//! Pure data structures for persisted missions plus the feasibility checker
//! that decides whether a mission is safe to run.
//!
//! # Mission Storage
//!
//! Missions are persisted externally and addressed as `(storage_id, index)`
//! with a known item count. The checker reads items one at a time through
//! the [`MissionStore`] trait and never buffers the full mission, so the
//! item count is not bounded by validator memory.
//!
//! # Item Format
//!
//! [`MissionItem`] carries the raw MAV_CMD id plus position, altitude
//! reference, acceptance/loiter radii and the seven generic command
//! parameters. Command classification lives in [`command`].

pub mod command;
pub mod feasibility;
pub mod storage;

pub use command::NavCommand;
pub use feasibility::{
    FeasibilityChecker, MissionResult, TakeoffLandRequirement, NAV_EPSILON_POSITION,
};
pub use storage::{InMemoryMissionStore, MissionStore, StoreError, MAX_MISSION_ITEMS};

/// Handle to a persisted mission.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MissionPlan {
    /// Storage slot the mission items were written to
    pub storage_id: u8,
    /// Number of items in the mission
    pub count: u16,
}

/// A single mission item as persisted in mission storage.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MissionItem {
    /// Raw MAV_CMD id (see [`NavCommand`])
    pub command: u16,
    /// Latitude in degrees
    pub lat: f64,
    /// Longitude in degrees
    pub lon: f64,
    /// Altitude in meters; AMSL, or above home when `altitude_is_relative`
    pub altitude: f32,
    /// Altitude is relative to the home altitude
    pub altitude_is_relative: bool,
    /// Acceptance radius in meters (0 = use the vehicle default)
    pub acceptance_radius: f32,
    /// Loiter radius in meters; the sign encodes the turn direction
    pub loiter_radius: f32,
    /// Command-specific parameters
    pub params: [f32; 7],
}

impl Default for MissionItem {
    fn default() -> Self {
        Self {
            command: NavCommand::Waypoint.id(),
            lat: 0.0,
            lon: 0.0,
            altitude: 0.0,
            altitude_is_relative: false,
            acceptance_radius: 0.0,
            loiter_radius: 0.0,
            params: [0.0; 7],
        }
    }
}

impl MissionItem {
    /// Create a navigation item with a relative altitude (above home).
    pub fn nav(command: NavCommand, lat: f64, lon: f64, altitude: f32) -> Self {
        Self {
            command: command.id(),
            lat,
            lon,
            altitude,
            altitude_is_relative: true,
            ..Self::default()
        }
    }

    /// Create a navigation item with an absolute (AMSL) altitude.
    pub fn nav_amsl(command: NavCommand, lat: f64, lon: f64, altitude: f32) -> Self {
        Self {
            command: command.id(),
            lat,
            lon,
            altitude,
            altitude_is_relative: false,
            ..Self::default()
        }
    }

    /// Create a positionless DO/condition item.
    pub fn action(command: NavCommand) -> Self {
        Self {
            command: command.id(),
            ..Self::default()
        }
    }

    /// Decode the command id. `None` means the command is unsupported.
    pub fn nav_command(&self) -> Option<NavCommand> {
        NavCommand::from_id(self.command)
    }

    /// Check if this item carries a target position.
    pub fn has_position(&self) -> bool {
        matches!(self.nav_command(), Some(cmd) if cmd.has_position())
    }

    /// Altitude above mean sea level, normalizing relative altitudes via home.
    pub fn altitude_amsl(&self, home_alt: f32) -> f32 {
        if self.altitude_is_relative {
            self.altitude + home_alt
        } else {
            self.altitude
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_item_default_is_waypoint() {
        let item = MissionItem::default();
        assert_eq!(item.nav_command(), Some(NavCommand::Waypoint));
        assert!(item.has_position());
    }

    #[test]
    fn test_nav_constructor_relative_altitude() {
        let item = MissionItem::nav(NavCommand::Takeoff, 47.39, 8.54, 20.0);
        assert!(item.altitude_is_relative);
        assert_eq!(item.altitude_amsl(488.0), 508.0);
    }

    #[test]
    fn test_nav_amsl_constructor() {
        let item = MissionItem::nav_amsl(NavCommand::Land, 47.39, 8.54, 490.0);
        assert!(!item.altitude_is_relative);
        assert_eq!(item.altitude_amsl(488.0), 490.0);
    }

    #[test]
    fn test_action_has_no_position() {
        let item = MissionItem::action(NavCommand::DoChangeSpeed);
        assert!(!item.has_position());
    }

    #[test]
    fn test_unsupported_command_decodes_to_none() {
        let item = MissionItem {
            command: 176,
            ..MissionItem::default()
        };
        assert_eq!(item.nav_command(), None);
        assert!(!item.has_position());
    }
}
