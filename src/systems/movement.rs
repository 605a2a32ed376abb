//! Host-physics stand-in: chassis integration and wheel pose propagation.
//!
//! In the full game the engine's physics solver owns these poses. For the
//! headless driver and the tests, this system integrates the chassis
//! transform from the rigid body velocity and derives each wheel's world
//! pose from the chassis pose, its rig mount point, its current steer angle,
//! and an accumulated roll from travel speed. Pose book-keeping only, no
//! forces and no tire model.

use bevy_ecs::prelude::*;
use glam::Quat;

use crate::components::rigidbody::RigidBody;
use crate::components::transform3d::Transform3D;
use crate::components::vehicle::Vehicle;
use crate::components::wheel::WheelPhysics;
use crate::resources::worldtime::WorldTime;

pub fn movement(
    time: Res<WorldTime>,
    mut chassis: Query<(&Vehicle, &RigidBody, &mut Transform3D)>,
    mut wheels: Query<&mut WheelPhysics>,
) {
    for (vehicle, rigidbody, mut transform) in chassis.iter_mut() {
        transform.position += rigidbody.velocity * time.delta;

        let speed = rigidbody.speed();
        for pair in vehicle.pairs() {
            let mut wheel = wheels
                .get_mut(pair.physics)
                .expect("wheel entity lost its WheelPhysics");

            wheel.roll += speed / wheel.radius * time.delta;
            wheel.roll %= std::f32::consts::TAU;

            let steer = Quat::from_rotation_y(wheel.steer_angle.to_radians());
            wheel.pose.position = transform.position + transform.rotation * wheel.mount;
            wheel.pose.rotation =
                transform.rotation * steer * Quat::from_rotation_x(wheel.roll);
        }
    }
}
