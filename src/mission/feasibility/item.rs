//! Per-item validity checks
//!
//! Rejects unsupported commands, out-of-range actuator parameters, and
//! missions that begin with a landing while the vehicle is on the ground.

use libm::floorf;

use crate::events::FeasibilityEvent;
use crate::mission::{MissionPlan, NavCommand};

use super::FeasibilityChecker;

/// Symmetric PWM output bound for servo values (microseconds).
const PWM_DEFAULT_MAX: f32 = 2000.0;

/// Highest addressable servo output index.
const SERVO_INDEX_MAX: f32 = 5.0;

impl FeasibilityChecker<'_> {
    pub(super) fn check_item_validity(&mut self, mission: &MissionPlan) -> bool {
        for index in 0..mission.count {
            let Some(item) = self.read_item(mission, index) else {
                return false;
            };

            let Some(command) = item.nav_command() else {
                self.events.send(FeasibilityEvent::UnsupportedCommand {
                    item: index + 1,
                    command: item.command,
                });
                return false;
            };

            if command == NavCommand::DoSetServo {
                let servo_index = item.params[0];
                if !(0.0..=SERVO_INDEX_MAX).contains(&servo_index)
                    || floorf(servo_index) != servo_index
                {
                    self.events.send(FeasibilityEvent::ActuatorIndexOutOfBounds {
                        index: servo_index as i32,
                    });
                    return false;
                }

                let servo_value = item.params[1];
                if !(-PWM_DEFAULT_MAX..=PWM_DEFAULT_MAX).contains(&servo_value) {
                    self.events.send(FeasibilityEvent::ActuatorValueOutOfBounds {
                        value: servo_value as i32,
                        max: PWM_DEFAULT_MAX as i32,
                    });
                    return false;
                }
            }

            if index == 0 && command == NavCommand::Land && self.vehicle.landed {
                self.events.send(FeasibilityEvent::StartsWithLanding);
                return false;
            }
        }

        true
    }
}

#[cfg(test)]
mod tests {
    use crate::mission::feasibility::testing::{World, HOME};
    use crate::mission::{MissionItem, MissionPlan, NavCommand};
    use crate::vehicle::VehicleType;

    fn run(world: &mut World) -> bool {
        let plan = world.store.plan();
        world.run_sub(|checker| checker.check_item_validity(&plan))
    }

    #[test]
    fn test_supported_commands_pass() {
        let mut world = World::new(VehicleType::Multicopter);
        world
            .store
            .push(MissionItem::nav(NavCommand::Takeoff, HOME.lat, HOME.lon, 10.0))
            .unwrap();
        world
            .store
            .push(MissionItem::action(NavCommand::DoChangeSpeed))
            .unwrap();

        assert!(run(&mut world));
        assert!(world.events().is_empty());
    }

    #[test]
    fn test_unsupported_command_rejected() {
        let mut world = World::new(VehicleType::Multicopter);
        world.store.push(MissionItem::default()).unwrap();
        world
            .store
            .push(MissionItem {
                command: 176, // not in the accepted set
                ..MissionItem::default()
            })
            .unwrap();

        assert!(!run(&mut world));
        assert_eq!(
            world.events()[0],
            crate::events::FeasibilityEvent::UnsupportedCommand {
                item: 2,
                command: 176
            }
        );
    }

    #[test]
    fn test_servo_index_out_of_bounds() {
        let mut world = World::new(VehicleType::Multicopter);
        let mut item = MissionItem::action(NavCommand::DoSetServo);
        item.params[0] = 6.0;
        item.params[1] = 1500.0;
        world.store.push(item).unwrap();

        assert!(!run(&mut world));
        assert!(world.has_event("ActuatorIndexOutOfBounds"));
    }

    #[test]
    fn test_servo_index_must_be_integer() {
        let mut world = World::new(VehicleType::Multicopter);
        let mut item = MissionItem::action(NavCommand::DoSetServo);
        item.params[0] = 2.5;
        item.params[1] = 1500.0;
        world.store.push(item).unwrap();

        assert!(!run(&mut world));
        assert!(world.has_event("ActuatorIndexOutOfBounds"));
    }

    #[test]
    fn test_servo_value_out_of_bounds() {
        let mut world = World::new(VehicleType::Multicopter);
        let mut item = MissionItem::action(NavCommand::DoSetServo);
        item.params[0] = 3.0;
        item.params[1] = -2500.0;
        world.store.push(item).unwrap();

        assert!(!run(&mut world));
        assert!(world.has_event("ActuatorValueOutOfBounds"));
    }

    #[test]
    fn test_servo_in_bounds_passes() {
        let mut world = World::new(VehicleType::Multicopter);
        let mut item = MissionItem::action(NavCommand::DoSetServo);
        item.params[0] = 5.0;
        item.params[1] = 2000.0;
        world.store.push(item).unwrap();

        assert!(run(&mut world));
    }

    #[test]
    fn test_starts_with_landing_while_landed() {
        let mut world = World::new(VehicleType::Multicopter);
        world.vehicle.landed = true;
        world
            .store
            .push(MissionItem::nav(NavCommand::Land, HOME.lat, HOME.lon, 0.0))
            .unwrap();

        assert!(!run(&mut world));
        assert!(world.has_event("StartsWithLanding"));
    }

    #[test]
    fn test_starts_with_landing_while_airborne_passes() {
        let mut world = World::new(VehicleType::Multicopter);
        world.vehicle.landed = false;
        world
            .store
            .push(MissionItem::nav(NavCommand::Land, HOME.lat, HOME.lon, 0.0))
            .unwrap();

        assert!(run(&mut world));
    }

    #[test]
    fn test_storage_failure() {
        let mut world = World::new(VehicleType::Multicopter);
        world.store.push(MissionItem::default()).unwrap();
        // lie about the count so the read past the end fails
        let plan = MissionPlan {
            storage_id: 0,
            count: 2,
        };

        assert!(!world.run_sub(|checker| checker.check_item_validity(&plan)));
        assert!(world.has_event("StorageFailure"));
    }
}
