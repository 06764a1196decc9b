//! Feasibility Events
//!
//! Typed records emitted while checking a mission. Each rejection reason
//! maps to exactly one event; the string id is a stable key suitable for
//! localization lookup on a ground station, and the `Display` text is the
//! fallback message. Severities are advisory. Item indices in events are
//! 1-based (user facing).

use core::fmt;

use heapless::Vec;

/// Maximum events buffered per feasibility check
pub const MAX_FEASIBILITY_EVENTS: usize = 16;

/// Advisory severity attached to each event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// Informational, no action needed
    Info,
    /// Mission accepted but worth a look
    Warning,
    /// Mission rejected
    Error,
}

/// Structured reason emitted during a feasibility check.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FeasibilityEvent {
    /// Mission storage could not be read
    StorageFailure,
    /// Home altitude unknown; not ready for a mission yet
    NoPositionLock,
    /// Geofence is defined relative to home but home is not valid
    GeofenceRequiresHome,
    /// A mission item lies outside the geofence
    GeofenceViolation {
        /// 1-based item index
        item: u16,
    },
    /// An item uses relative altitude but home altitude is unknown
    NoHomeRelativeAlt {
        /// 1-based item index
        item: u16,
    },
    /// A waypoint is below the home altitude (non-fatal)
    WaypointBelowHome {
        /// 1-based item index
        item: u16,
    },
    /// An item uses a command outside the accepted set
    UnsupportedCommand {
        /// 1-based item index
        item: u16,
        /// Raw MAV_CMD id found in the item
        command: u16,
    },
    /// Servo index outside the output range
    ActuatorIndexOutOfBounds {
        /// Servo index found in the item
        index: i32,
    },
    /// Servo value outside the PWM output range
    ActuatorValueOutOfBounds {
        /// PWM value found in the item
        value: i32,
        /// Symmetric bound on the value
        max: i32,
    },
    /// Mission begins with a landing while the vehicle is on the ground
    StartsWithLanding,
    /// Takeoff altitude does not clear the acceptance sphere
    TakeoffAltTooLow {
        /// Minimum acceptable altitude above home in meters
        min_altitude: f32,
    },
    /// A positional item precedes the first takeoff
    TakeoffNotFirst,
    /// First waypoint is too far from home
    FirstWaypointTooFar {
        /// Measured distance in meters
        distance: u32,
        /// Configured maximum in meters
        max_distance: u32,
    },
    /// Two successive waypoints are too far apart
    WaypointDistanceTooFar {
        /// Measured distance in meters
        distance: u32,
        /// Configured maximum in meters
        max_distance: u32,
    },
    /// A condition gate coincides with an adjacent waypoint
    GateCoincidence {
        /// Measured distance in meters
        distance: f32,
        /// Minimum separation in meters
        min_distance: f32,
    },
    /// More than one land start marker in the mission
    MultipleLandStart,
    /// Fixed-wing landing angle parameter is not configured
    LandAngleParamMissing,
    /// Landing item has no positional approach entrance before it
    ApproachRequired,
    /// Approach entrance is at or below the landing point
    ApproachBelowLand,
    /// Landing point lies inside the approach orbit
    LandInsideOrbit,
    /// Approach entrance command cannot start a landing
    UnsupportedApproach,
    /// Landing approach descends steeper than the configured angle
    GlideSlopeTooSteep {
        /// Configured maximum angle in degrees
        max_angle: f32,
    },
    /// Advisory paired with [`FeasibilityEvent::GlideSlopeTooSteep`]
    CorrectGlideSlope {
        /// Entrance altitude above the landing point that would fit, meters
        entrance_alt: u32,
        /// Approach distance that would fit, meters
        landing_dist: u32,
    },
    /// A land start marker precedes a return-to-launch item
    LandBeforeRtl,
    /// Land start marker without a valid landing sequence after it
    InvalidLandStart,
    /// Policy requires a takeoff item
    TakeoffRequired,
    /// Policy requires a landing item
    LandingRequired,
    /// Policy requires both takeoff and landing items
    TakeoffOrLandingMissing,
    /// Policy requires pairing; only a takeoff is present
    AddLandingOrRemoveTakeoff,
    /// Policy requires pairing; only a landing is present
    AddTakeoffOrRemoveLanding,
}

impl FeasibilityEvent {
    /// Stable string key for this event (external contract).
    pub fn id(&self) -> &'static str {
        match self {
            Self::StorageFailure => "StorageFailure",
            Self::NoPositionLock => "NoPositionLock",
            Self::GeofenceRequiresHome => "GeofenceRequiresHome",
            Self::GeofenceViolation { .. } => "GeofenceViolation",
            Self::NoHomeRelativeAlt { .. } => "NoHomeRelativeAlt",
            Self::WaypointBelowHome { .. } => "WaypointBelowHome",
            Self::UnsupportedCommand { .. } => "UnsupportedCommand",
            Self::ActuatorIndexOutOfBounds { .. } => "ActuatorIndexOutOfBounds",
            Self::ActuatorValueOutOfBounds { .. } => "ActuatorValueOutOfBounds",
            Self::StartsWithLanding => "StartsWithLanding",
            Self::TakeoffAltTooLow { .. } => "TakeoffAltTooLow",
            Self::TakeoffNotFirst => "TakeoffNotFirst",
            Self::FirstWaypointTooFar { .. } => "FirstWaypointTooFar",
            Self::WaypointDistanceTooFar { .. } => "WaypointDistanceTooFar",
            Self::GateCoincidence { .. } => "GateCoincidence",
            Self::MultipleLandStart => "MultipleLandStart",
            Self::LandAngleParamMissing => "LandAngleParamMissing",
            Self::ApproachRequired => "ApproachRequired",
            Self::ApproachBelowLand => "ApproachBelowLand",
            Self::LandInsideOrbit => "LandInsideOrbit",
            Self::UnsupportedApproach => "UnsupportedApproach",
            Self::GlideSlopeTooSteep { .. } => "GlideSlopeTooSteep",
            Self::CorrectGlideSlope { .. } => "CorrectGlideSlope",
            Self::LandBeforeRtl => "LandBeforeRTL",
            Self::InvalidLandStart => "InvalidLandStart",
            Self::TakeoffRequired => "TakeoffRequired",
            Self::LandingRequired => "LandingRequired",
            Self::TakeoffOrLandingMissing => "TakeoffOrLandingMissing",
            Self::AddLandingOrRemoveTakeoff => "AddLandingOrRemoveTakeoff",
            Self::AddTakeoffOrRemoveLanding => "AddTakeoffOrRemoveLanding",
        }
    }

    /// Advisory severity for this event.
    pub fn severity(&self) -> Severity {
        match self {
            Self::NoPositionLock => Severity::Info,
            Self::WaypointBelowHome { .. } => Severity::Warning,
            _ => Severity::Error,
        }
    }
}

impl fmt::Display for FeasibilityEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::StorageFailure => {
                write!(f, "Mission rejected: cannot access mission storage")
            }
            Self::NoPositionLock => {
                write!(f, "Not yet ready for mission, no position lock")
            }
            Self::GeofenceRequiresHome => {
                write!(f, "Geofence requires a valid home position")
            }
            Self::GeofenceViolation { item } => {
                write!(f, "Geofence violation for waypoint {}", item)
            }
            Self::NoHomeRelativeAlt { item } => {
                write!(
                    f,
                    "Mission rejected: no home position, waypoint {} uses relative altitude",
                    item
                )
            }
            Self::WaypointBelowHome { item } => {
                write!(f, "Waypoint {} below home", item)
            }
            Self::UnsupportedCommand { item, command } => {
                write!(
                    f,
                    "Mission rejected: item {}: unsupported command {}",
                    item, command
                )
            }
            Self::ActuatorIndexOutOfBounds { index } => {
                write!(f, "Actuator number {} is out of bounds 0..5", index)
            }
            Self::ActuatorValueOutOfBounds { value, max } => {
                write!(f, "Actuator value {} is out of bounds -{}..{}", value, max, max)
            }
            Self::StartsWithLanding => {
                write!(f, "Mission rejected: starts with landing")
            }
            Self::TakeoffAltTooLow { min_altitude } => {
                write!(
                    f,
                    "Mission rejected: takeoff altitude too low, minimum {:.1} m",
                    min_altitude
                )
            }
            Self::TakeoffNotFirst => {
                write!(f, "Mission rejected: takeoff is not the first waypoint item")
            }
            Self::FirstWaypointTooFar {
                distance,
                max_distance,
            } => {
                write!(
                    f,
                    "First waypoint too far away: {} m (maximum: {} m)",
                    distance, max_distance
                )
            }
            Self::WaypointDistanceTooFar {
                distance,
                max_distance,
            } => {
                write!(
                    f,
                    "Distance between waypoints too far: {} m (maximum: {} m)",
                    distance, max_distance
                )
            }
            Self::GateCoincidence {
                distance,
                min_distance,
            } => {
                write!(
                    f,
                    "Distance between waypoint and gate too close: {:.3} m (minimum: {:.3} m)",
                    distance, min_distance
                )
            }
            Self::MultipleLandStart => {
                write!(f, "Mission rejected: more than one land start command")
            }
            Self::LandAngleParamMissing => {
                write!(f, "Mission rejected: FW_LND_ANG parameter is missing")
            }
            Self::ApproachRequired => {
                write!(f, "Mission rejected: landing approach is required")
            }
            Self::ApproachBelowLand => {
                write!(
                    f,
                    "Mission rejected: the approach waypoint must be above the landing point"
                )
            }
            Self::LandInsideOrbit => {
                write!(
                    f,
                    "Mission rejected: the landing point must be outside the orbit radius"
                )
            }
            Self::UnsupportedApproach => {
                write!(
                    f,
                    "Mission rejected: unsupported landing approach entrance, only orbit-to-altitude or waypoint allowed"
                )
            }
            Self::GlideSlopeTooSteep { max_angle } => {
                write!(
                    f,
                    "Mission rejected: the landing glide slope is steeper than the vehicle setting of {:.1} degrees",
                    max_angle
                )
            }
            Self::CorrectGlideSlope {
                entrance_alt,
                landing_dist,
            } => {
                write!(
                    f,
                    "Lower the entrance altitude to {} m or increase the landing approach distance to {} m",
                    entrance_alt, landing_dist
                )
            }
            Self::LandBeforeRtl => {
                write!(
                    f,
                    "Mission rejected: land start item before RTL item is not possible"
                )
            }
            Self::InvalidLandStart => {
                write!(f, "Mission rejected: invalid land start")
            }
            Self::TakeoffRequired => {
                write!(f, "Mission rejected: takeoff waypoint required")
            }
            Self::LandingRequired => {
                write!(f, "Mission rejected: landing waypoint or pattern required")
            }
            Self::TakeoffOrLandingMissing => {
                write!(f, "Mission rejected: takeoff or landing item missing")
            }
            Self::AddLandingOrRemoveTakeoff => {
                write!(f, "Mission rejected: add a landing item or remove takeoff")
            }
            Self::AddTakeoffOrRemoveLanding => {
                write!(f, "Mission rejected: add a takeoff item or remove landing")
            }
        }
    }
}

/// Sink receiving events in generation order.
pub trait EventSink {
    /// Deliver one event.
    fn send(&mut self, event: FeasibilityEvent);
}

/// Bounded event buffer.
///
/// The default sink: holds events emitted during one check for later
/// delivery to telemetry. Overflowing events are dropped.
#[derive(Debug, Clone, Default)]
pub struct EventBuffer {
    events: Vec<FeasibilityEvent, MAX_FEASIBILITY_EVENTS>,
}

impl EventBuffer {
    /// Create an empty buffer.
    pub fn new() -> Self {
        Self { events: Vec::new() }
    }

    /// Events collected so far, in generation order.
    pub fn events(&self) -> &[FeasibilityEvent] {
        &self.events
    }

    /// Check whether an event with the given stable id was collected.
    pub fn contains(&self, id: &str) -> bool {
        self.events.iter().any(|event| event.id() == id)
    }

    /// Drop all collected events.
    pub fn clear(&mut self) {
        self.events.clear();
    }
}

impl EventSink for EventBuffer {
    fn send(&mut self, event: FeasibilityEvent) {
        let _ = self.events.push(event);
    }
}
