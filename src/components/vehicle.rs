//! Vehicle wiring and tuning configuration.
//!
//! The [`Vehicle`] component lives on the chassis entity and holds the four
//! wheel-physics/visual entity pairs plus the scalar tuning the controller
//! reads every tick. The pairs are fixed at spawn time and never reassigned.

use bevy_ecs::prelude::{Component, Entity};
use glam::Vec3;

/// Scalar tuning for one vehicle.
#[derive(Clone, Copy, Debug)]
pub struct VehicleConfig {
    /// Peak drive torque in newton-meters, scaled by the throttle axis.
    pub motor_force: f32,
    /// Brake torque applied uniformly to all four wheels while braking.
    pub brake_force: f32,
    /// Steer angle in degrees at full lock.
    pub max_steer_angle: f32,
    /// Sideways extremum slip applied to the rear-left wheel while drifting.
    pub drift_extremum_slip: f32,
    /// Chassis-local center-of-mass offset, applied once at spawn.
    pub center_of_mass: Vec3,
}

impl Default for VehicleConfig {
    fn default() -> Self {
        Self {
            motor_force: 1500.0,
            brake_force: 60000.0,
            max_steer_angle: 30.0,
            drift_extremum_slip: 0.9,
            center_of_mass: Vec3::new(0.0, -0.5, 0.0),
        }
    }
}

/// A wheel-physics entity and the visual transform entity that mirrors it.
#[derive(Clone, Copy, Debug)]
pub struct WheelPair {
    pub physics: Entity,
    pub visual: Entity,
}

/// Chassis component wiring the four wheel pairs to their tuning.
#[derive(Component, Clone, Debug)]
pub struct Vehicle {
    pub front_left: WheelPair,
    pub front_right: WheelPair,
    pub back_left: WheelPair,
    pub back_right: WheelPair,
    pub config: VehicleConfig,
}

impl Vehicle {
    /// All four wheel pairs, front axle first.
    pub fn pairs(&self) -> [&WheelPair; 4] {
        [
            &self.front_left,
            &self.front_right,
            &self.back_left,
            &self.back_right,
        ]
    }

    /// The steered axle.
    pub fn front(&self) -> [&WheelPair; 2] {
        [&self.front_left, &self.front_right]
    }

    /// The driven axle.
    pub fn rear(&self) -> [&WheelPair; 2] {
        [&self.back_left, &self.back_right]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_defaults() {
        let config = VehicleConfig::default();
        assert_eq!(config.motor_force, 1500.0);
        assert_eq!(config.brake_force, 60000.0);
        assert_eq!(config.max_steer_angle, 30.0);
        assert_eq!(config.drift_extremum_slip, 0.9);
    }
}
