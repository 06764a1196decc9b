//! Takeoff/landing requirement policy
//!
//! Arbitrates the derived `has_takeoff`/`has_landing` flags against the
//! configured requirement (MIS_TKO_LAND_REQ). Values outside the known set
//! do not constrain the mission.

use crate::events::FeasibilityEvent;

use super::FeasibilityChecker;

/// Required mission items policy (MIS_TKO_LAND_REQ values).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TakeoffLandRequirement {
    /// No requirement
    None = 0,
    /// Mission must contain a takeoff
    Takeoff = 1,
    /// Mission must contain a landing
    Landing = 2,
    /// Mission must contain both a takeoff and a landing
    Both = 3,
    /// Mission must contain either both or neither
    Paired = 4,
}

impl TakeoffLandRequirement {
    /// Decode the raw parameter value. Unknown values decode to `None`.
    pub const fn from_value(value: i32) -> Option<Self> {
        match value {
            0 => Some(Self::None),
            1 => Some(Self::Takeoff),
            2 => Some(Self::Landing),
            3 => Some(Self::Both),
            4 => Some(Self::Paired),
            _ => None,
        }
    }
}

impl FeasibilityChecker<'_> {
    pub(super) fn check_takeoff_land_available(&mut self) -> bool {
        let Some(requirement) =
            TakeoffLandRequirement::from_value(self.vehicle.takeoff_land_required)
        else {
            return true;
        };

        match requirement {
            TakeoffLandRequirement::None => true,
            TakeoffLandRequirement::Takeoff => {
                if !self.has_takeoff {
                    self.events.send(FeasibilityEvent::TakeoffRequired);
                    return false;
                }
                true
            }
            TakeoffLandRequirement::Landing => {
                if !self.has_landing {
                    self.events.send(FeasibilityEvent::LandingRequired);
                    return false;
                }
                true
            }
            TakeoffLandRequirement::Both => {
                if !(self.has_takeoff && self.has_landing) {
                    self.events.send(FeasibilityEvent::TakeoffOrLandingMissing);
                    return false;
                }
                true
            }
            TakeoffLandRequirement::Paired => {
                if self.has_takeoff == self.has_landing {
                    true
                } else if self.has_takeoff {
                    self.events.send(FeasibilityEvent::AddLandingOrRemoveTakeoff);
                    false
                } else {
                    self.events.send(FeasibilityEvent::AddTakeoffOrRemoveLanding);
                    false
                }
            }
        }
    }
}
