//! Vehicle controller system.
//!
//! Runs once per fixed physics tick and parameterizes the four wheel-physics
//! objects of every [`Vehicle`](crate::components::vehicle::Vehicle) from the
//! current [`InputState`](crate::resources::input::InputState), in a fixed
//! order: motor, braking, steering, wheel visual sync, drift.
//!
//! The logic itself only touches wheels through the
//! [`WheelActuator`](crate::components::wheel::WheelActuator) capability
//! trait; everything it computes is a pure function of the sampled inputs and
//! the vehicle tuning.

use bevy_ecs::prelude::*;

use crate::components::transform3d::Transform3D;
use crate::components::vehicle::Vehicle;
use crate::components::wheel::{
    DEFAULT_SIDEWAYS_EXTREMUM_SLIP, WheelActuator, WheelPhysics,
};
use crate::resources::input::InputState;

/// Apply motor, brake, steer, visual sync, and drift to every vehicle.
///
/// All wheel and visual entity handles are fixed at spawn time; a handle that
/// no longer resolves is a scene configuration error and panics.
pub fn vehicle_control(
    input: Res<InputState>,
    vehicles: Query<&Vehicle>,
    mut wheels: Query<&mut WheelPhysics>,
    mut visuals: Query<&mut Transform3D, Without<Vehicle>>,
) {
    let throttle = input.vertical.value;
    let steering = input.horizontal.value;
    let braking = input.brake.active;
    let drifting = input.drift.active;

    for vehicle in vehicles.iter() {
        // Motor: rear-wheel drive, both rear wheels identically.
        let motor_torque = motor_torque(throttle, vehicle.config.motor_force);
        for pair in vehicle.rear() {
            let mut wheel = wheels
                .get_mut(pair.physics)
                .expect("rear wheel entity lost its WheelPhysics");
            wheel.set_motor_torque(motor_torque);
        }

        // Braking: all four wheels, all or nothing each tick.
        let brake_torque = brake_torque(braking, vehicle.config.brake_force);
        for pair in vehicle.pairs() {
            let mut wheel = wheels
                .get_mut(pair.physics)
                .expect("wheel entity lost its WheelPhysics");
            wheel.set_brake_torque(brake_torque);
        }

        // Steering: front axle only, both wheels identically.
        let steer = steer_angle(steering, vehicle.config.max_steer_angle);
        for pair in vehicle.front() {
            let mut wheel = wheels
                .get_mut(pair.physics)
                .expect("front wheel entity lost its WheelPhysics");
            wheel.set_steer_angle(steer);
        }

        // Mirror each simulated wheel pose onto its visual transform,
        // no interpolation.
        for pair in vehicle.pairs() {
            let pose = wheels
                .get(pair.physics)
                .expect("wheel entity lost its WheelPhysics")
                .world_pose();
            let mut visual = visuals
                .get_mut(pair.visual)
                .expect("wheel visual entity lost its Transform3D");
            visual.position = pose.position;
            visual.rotation = pose.rotation;
        }

        // Drift: only the rear-left wheel is loosened while the key is held;
        // the rear-right keeps its grip.
        let slip = drift_extremum_slip(drifting, vehicle.config.drift_extremum_slip);
        let mut back_left = wheels
            .get_mut(vehicle.back_left.physics)
            .expect("rear-left wheel entity lost its WheelPhysics");
        back_left.set_sideways_extremum_slip(slip);
    }
}

/// Drive torque for the rear axle.
fn motor_torque(throttle: f32, motor_force: f32) -> f32 {
    throttle * motor_force
}

/// Uniform brake torque: `brake_force` while braking, zero otherwise.
fn brake_torque(braking: bool, brake_force: f32) -> f32 {
    if braking { brake_force } else { 0.0 }
}

/// Steer angle in degrees for the front axle.
fn steer_angle(steering: f32, max_steer_angle: f32) -> f32 {
    max_steer_angle * steering
}

/// Sideways extremum slip for the rear-left wheel.
fn drift_extremum_slip(drifting: bool, drift_slip: f32) -> f32 {
    if drifting {
        drift_slip
    } else {
        DEFAULT_SIDEWAYS_EXTREMUM_SLIP
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn motor_torque_scales_with_throttle() {
        assert_eq!(motor_torque(1.0, 1500.0), 1500.0);
        assert_eq!(motor_torque(0.5, 1500.0), 750.0);
        assert_eq!(motor_torque(-1.0, 1500.0), -1500.0);
        assert_eq!(motor_torque(0.0, 1500.0), 0.0);
    }

    #[test]
    fn brake_torque_is_binary() {
        assert_eq!(brake_torque(true, 60000.0), 60000.0);
        assert_eq!(brake_torque(false, 60000.0), 0.0);
    }

    #[test]
    fn steer_angle_scales_with_input() {
        assert_eq!(steer_angle(1.0, 30.0), 30.0);
        assert_eq!(steer_angle(-1.0, 30.0), -30.0);
        assert_eq!(steer_angle(0.25, 30.0), 7.5);
    }

    #[test]
    fn drift_slip_toggles_between_configured_and_default() {
        assert_eq!(drift_extremum_slip(true, 0.9), 0.9);
        assert_eq!(drift_extremum_slip(false, 0.9), DEFAULT_SIDEWAYS_EXTREMUM_SLIP);
    }
}
