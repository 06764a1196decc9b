//! Mission Command Classification
//!
//! The closed set of mission commands the autopilot accepts, with the
//! predicates the feasibility checks are built on. Discriminants are the
//! MAVLink MAV_CMD ids as persisted in mission items; anything outside this
//! set is rejected as unsupported.

/// Mission commands accepted by the mission subsystem.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u16)]
pub enum NavCommand {
    /// Loiter indefinitely without position change
    Idle = 0,
    /// Navigate to waypoint
    Waypoint = 16,
    /// Loiter around position indefinitely
    LoiterUnlimited = 17,
    /// Loiter around position for a given time
    LoiterTimeLimit = 19,
    /// Return to the launch position
    ReturnToLaunch = 20,
    /// Land at position
    Land = 21,
    /// Take off from ground
    Takeoff = 22,
    /// Orbit around position until reaching a target altitude, then exit tangentially
    LoiterToAlt = 31,
    /// VTOL transition to hover and take off
    VtolTakeoff = 84,
    /// VTOL transition to hover and land at position
    VtolLand = 85,
    /// Wait before continuing with the mission
    Delay = 93,
    /// Jump to another mission item
    DoJump = 177,
    /// Change cruise speed
    DoChangeSpeed = 178,
    /// Move the home position
    DoSetHome = 179,
    /// Drive a servo output
    DoSetServo = 183,
    /// Drive a generic actuator output
    DoSetActuator = 187,
    /// Marker: start of the landing sub-sequence
    DoLandStart = 189,
    /// Point region of interest at a location
    DoSetRoiLocation = 195,
    /// Point region of interest at an offset from the next waypoint
    DoSetRoiWpnextOffset = 196,
    /// Clear region of interest
    DoSetRoiNone = 197,
    /// Configure on-board video
    DoControlVideo = 200,
    /// Point region of interest (legacy)
    DoSetRoi = 201,
    /// Trigger the camera (legacy)
    DoDigicamControl = 203,
    /// Configure the gimbal mount
    DoMountConfigure = 204,
    /// Point the gimbal mount (legacy)
    DoMountControl = 205,
    /// Trigger the camera every n meters
    DoSetCamTriggDist = 206,
    /// Actuate the cargo gripper
    DoGripper = 211,
    /// Trigger the camera at a time interval
    DoSetCamTriggInterval = 214,
    /// Oblique survey camera pattern
    ObliqueSurvey = 260,
    /// Set camera photo/video mode
    SetCameraMode = 530,
    /// Set camera zoom
    SetCameraZoom = 531,
    /// Set camera focus
    SetCameraFocus = 532,
    /// Point the gimbal (pitch/yaw)
    DoGimbalManagerPitchyaw = 1000,
    /// Configure gimbal control
    DoGimbalManagerConfigure = 1001,
    /// Start image capture
    ImageStartCapture = 2000,
    /// Stop image capture
    ImageStopCapture = 2001,
    /// Enable/disable the camera trigger
    DoTriggerControl = 2003,
    /// Start video capture
    VideoStartCapture = 2500,
    /// Stop video capture
    VideoStopCapture = 2501,
    /// Command a VTOL transition
    DoVtolTransition = 3000,
    /// Condition gate: advance when crossing the gate line
    ConditionGate = 4501,
    /// Actuate the winch
    DoWinch = 42600,
}

impl NavCommand {
    /// Decode a raw command id. Returns `None` for unsupported commands.
    pub const fn from_id(id: u16) -> Option<Self> {
        match id {
            0 => Some(Self::Idle),
            16 => Some(Self::Waypoint),
            17 => Some(Self::LoiterUnlimited),
            19 => Some(Self::LoiterTimeLimit),
            20 => Some(Self::ReturnToLaunch),
            21 => Some(Self::Land),
            22 => Some(Self::Takeoff),
            31 => Some(Self::LoiterToAlt),
            84 => Some(Self::VtolTakeoff),
            85 => Some(Self::VtolLand),
            93 => Some(Self::Delay),
            177 => Some(Self::DoJump),
            178 => Some(Self::DoChangeSpeed),
            179 => Some(Self::DoSetHome),
            183 => Some(Self::DoSetServo),
            187 => Some(Self::DoSetActuator),
            189 => Some(Self::DoLandStart),
            195 => Some(Self::DoSetRoiLocation),
            196 => Some(Self::DoSetRoiWpnextOffset),
            197 => Some(Self::DoSetRoiNone),
            200 => Some(Self::DoControlVideo),
            201 => Some(Self::DoSetRoi),
            203 => Some(Self::DoDigicamControl),
            204 => Some(Self::DoMountConfigure),
            205 => Some(Self::DoMountControl),
            206 => Some(Self::DoSetCamTriggDist),
            211 => Some(Self::DoGripper),
            214 => Some(Self::DoSetCamTriggInterval),
            260 => Some(Self::ObliqueSurvey),
            530 => Some(Self::SetCameraMode),
            531 => Some(Self::SetCameraZoom),
            532 => Some(Self::SetCameraFocus),
            1000 => Some(Self::DoGimbalManagerPitchyaw),
            1001 => Some(Self::DoGimbalManagerConfigure),
            2000 => Some(Self::ImageStartCapture),
            2001 => Some(Self::ImageStopCapture),
            2003 => Some(Self::DoTriggerControl),
            2500 => Some(Self::VideoStartCapture),
            2501 => Some(Self::VideoStopCapture),
            3000 => Some(Self::DoVtolTransition),
            4501 => Some(Self::ConditionGate),
            42600 => Some(Self::DoWinch),
            _ => None,
        }
    }

    /// Raw MAV_CMD id as persisted in mission items.
    pub const fn id(self) -> u16 {
        self as u16
    }

    /// Check if a command carries a target position (lat/lon/alt).
    ///
    /// Condition gates carry the position of the gate line, so they count.
    pub const fn has_position(self) -> bool {
        matches!(
            self,
            Self::Waypoint
                | Self::LoiterUnlimited
                | Self::LoiterTimeLimit
                | Self::LoiterToAlt
                | Self::Takeoff
                | Self::VtolTakeoff
                | Self::Land
                | Self::VtolLand
                | Self::ReturnToLaunch
                | Self::ConditionGate
        )
    }

    /// Check if a command starts a takeoff.
    pub const fn is_takeoff(self) -> bool {
        matches!(self, Self::Takeoff | Self::VtolTakeoff)
    }

    /// Check if a command lands the vehicle.
    pub const fn is_landing(self) -> bool {
        matches!(self, Self::Land | Self::VtolLand)
    }

    /// Camera, gimbal, region-of-interest and video commands.
    pub const fn is_payload_control(self) -> bool {
        matches!(
            self,
            Self::DoControlVideo
                | Self::DoSetRoi
                | Self::DoSetRoiLocation
                | Self::DoSetRoiWpnextOffset
                | Self::DoSetRoiNone
                | Self::DoDigicamControl
                | Self::DoMountConfigure
                | Self::DoMountControl
                | Self::DoSetCamTriggDist
                | Self::DoSetCamTriggInterval
                | Self::ObliqueSurvey
                | Self::SetCameraMode
                | Self::SetCameraZoom
                | Self::SetCameraFocus
                | Self::DoGimbalManagerPitchyaw
                | Self::DoGimbalManagerConfigure
                | Self::ImageStartCapture
                | Self::ImageStopCapture
                | Self::VideoStartCapture
                | Self::VideoStopCapture
        )
    }

    /// Check if a command may appear before the first takeoff item.
    ///
    /// Positional commands never qualify: the vehicle must not be asked to
    /// move anywhere before it is airborne.
    pub const fn allowed_before_takeoff(self) -> bool {
        matches!(
            self,
            Self::Idle
                | Self::Delay
                | Self::DoJump
                | Self::DoChangeSpeed
                | Self::DoSetHome
                | Self::DoSetServo
                | Self::DoLandStart
                | Self::DoVtolTransition
        ) || self.is_payload_control()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_id_round_trip() {
        for cmd in [
            NavCommand::Idle,
            NavCommand::Waypoint,
            NavCommand::LoiterToAlt,
            NavCommand::VtolLand,
            NavCommand::DoLandStart,
            NavCommand::ConditionGate,
            NavCommand::DoWinch,
        ] {
            assert_eq!(NavCommand::from_id(cmd.id()), Some(cmd));
        }
    }

    #[test]
    fn test_from_id_unsupported() {
        // MAV_CMD_NAV_PATHPLANNING and friends are outside the accepted set
        assert_eq!(NavCommand::from_id(81), None);
        assert_eq!(NavCommand::from_id(176), None);
        assert_eq!(NavCommand::from_id(30000), None);
    }

    #[test]
    fn test_has_position_navigation_commands() {
        assert!(NavCommand::Waypoint.has_position());
        assert!(NavCommand::Takeoff.has_position());
        assert!(NavCommand::VtolLand.has_position());
        assert!(NavCommand::ReturnToLaunch.has_position());
        assert!(NavCommand::ConditionGate.has_position());
    }

    #[test]
    fn test_has_position_do_commands() {
        assert!(!NavCommand::DoJump.has_position());
        assert!(!NavCommand::DoSetServo.has_position());
        assert!(!NavCommand::DoLandStart.has_position());
        assert!(!NavCommand::ImageStartCapture.has_position());
    }

    #[test]
    fn test_takeoff_and_landing_predicates() {
        assert!(NavCommand::Takeoff.is_takeoff());
        assert!(NavCommand::VtolTakeoff.is_takeoff());
        assert!(!NavCommand::Waypoint.is_takeoff());

        assert!(NavCommand::Land.is_landing());
        assert!(NavCommand::VtolLand.is_landing());
        assert!(!NavCommand::DoLandStart.is_landing());
    }

    #[test]
    fn test_allowed_before_takeoff() {
        assert!(NavCommand::Delay.allowed_before_takeoff());
        assert!(NavCommand::DoSetServo.allowed_before_takeoff());
        assert!(NavCommand::DoLandStart.allowed_before_takeoff());
        assert!(NavCommand::SetCameraMode.allowed_before_takeoff());
        assert!(NavCommand::DoGimbalManagerConfigure.allowed_before_takeoff());
    }

    #[test]
    fn test_not_allowed_before_takeoff() {
        // nothing positional may precede the takeoff
        assert!(!NavCommand::Waypoint.allowed_before_takeoff());
        assert!(!NavCommand::LoiterUnlimited.allowed_before_takeoff());
        assert!(!NavCommand::Land.allowed_before_takeoff());
        assert!(!NavCommand::ConditionGate.allowed_before_takeoff());
        // actuators other than servos stay disallowed too
        assert!(!NavCommand::DoWinch.allowed_before_takeoff());
        assert!(!NavCommand::DoGripper.allowed_before_takeoff());
        assert!(!NavCommand::DoTriggerControl.allowed_before_takeoff());
    }
}
