//! Wheel-physics component and the actuator capability trait.
//!
//! [`WheelPhysics`] mirrors the parameter surface of an engine wheel-physics
//! object: settable motor torque, brake torque, steer angle, and a sideways
//! friction curve, plus a queryable world pose. The control layer talks to it
//! exclusively through the [`WheelActuator`] trait so the per-tick logic is
//! not tied to this particular backend.
//!
//! The pose itself is owned by the host physics step (see
//! [`crate::systems::movement`]); this component only stores the result.

use bevy_ecs::prelude::Component;
use glam::{Quat, Vec3};

/// Sideways extremum slip a wheel returns to when not drifting.
pub const DEFAULT_SIDEWAYS_EXTREMUM_SLIP: f32 = 0.2;

/// Which corner of the vehicle a wheel occupies.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Corner {
    FrontLeft,
    FrontRight,
    BackLeft,
    BackRight,
}

/// World pose of a simulated wheel: position plus rotation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Pose {
    pub position: Vec3,
    pub rotation: Quat,
}

impl Default for Pose {
    fn default() -> Self {
        Self {
            position: Vec3::ZERO,
            rotation: Quat::IDENTITY,
        }
    }
}

/// Sideways friction curve of a wheel-physics object.
///
/// `extremum_slip` is the slip ratio at which lateral traction peaks; raising
/// it lets the tire slide further before gripping, which is what the drift
/// handling adjusts at runtime. The remaining fields are configured at spawn
/// and left alone by the control layer.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct WheelFrictionCurve {
    pub extremum_slip: f32,
    pub extremum_value: f32,
    pub asymptote_slip: f32,
    pub asymptote_value: f32,
    pub stiffness: f32,
}

impl Default for WheelFrictionCurve {
    fn default() -> Self {
        Self {
            extremum_slip: DEFAULT_SIDEWAYS_EXTREMUM_SLIP,
            extremum_value: 1.0,
            asymptote_slip: 0.5,
            asymptote_value: 0.75,
            stiffness: 1.0,
        }
    }
}

/// Capability surface the vehicle controller needs from a wheel.
///
/// Modeled after the engine-side wheel-physics object: four settable
/// parameters and one pose query. Implementations are opaque mutable handles
/// as far as the control logic is concerned.
pub trait WheelActuator {
    /// Drive torque in newton-meters.
    fn set_motor_torque(&mut self, torque: f32);
    /// Brake torque in newton-meters.
    fn set_brake_torque(&mut self, torque: f32);
    /// Steer angle in degrees around the wheel's vertical axis.
    fn set_steer_angle(&mut self, degrees: f32);
    /// Extremum slip of the sideways friction curve.
    fn set_sideways_extremum_slip(&mut self, slip: f32);
    /// Current world pose of the simulated wheel.
    fn world_pose(&self) -> Pose;
}

/// Wheel-physics parameters for one wheel entity.
///
/// One entity per wheel; the chassis [`Vehicle`](crate::components::vehicle::Vehicle)
/// component holds the four entity handles and never reassigns them.
#[derive(Component, Clone, Debug)]
pub struct WheelPhysics {
    pub corner: Corner,
    /// Chassis-local attachment point, from the rig definition.
    pub mount: Vec3,
    /// Wheel radius in world units.
    pub radius: f32,
    pub motor_torque: f32,
    pub brake_torque: f32,
    /// Steer angle in degrees.
    pub steer_angle: f32,
    pub sideways_friction: WheelFrictionCurve,
    /// World pose written by the host physics step each tick.
    pub pose: Pose,
    /// Accumulated roll around the axle, radians.
    pub roll: f32,
}

impl WheelPhysics {
    pub fn new(corner: Corner, mount: Vec3, radius: f32) -> Self {
        Self {
            corner,
            mount,
            radius,
            motor_torque: 0.0,
            brake_torque: 0.0,
            steer_angle: 0.0,
            sideways_friction: WheelFrictionCurve::default(),
            pose: Pose::default(),
            roll: 0.0,
        }
    }
}

impl WheelActuator for WheelPhysics {
    fn set_motor_torque(&mut self, torque: f32) {
        self.motor_torque = torque;
    }

    fn set_brake_torque(&mut self, torque: f32) {
        self.brake_torque = torque;
    }

    fn set_steer_angle(&mut self, degrees: f32) {
        self.steer_angle = degrees;
    }

    fn set_sideways_extremum_slip(&mut self, slip: f32) {
        self.sideways_friction.extremum_slip = slip;
    }

    fn world_pose(&self) -> Pose {
        self.pose
    }
}
