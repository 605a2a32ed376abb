//! Chassis rigid body component.
//!
//! The [`RigidBody`] component stores the linear velocity the host physics
//! step maintains for the chassis, plus the chassis-local center-of-mass
//! offset applied once at spawn time. The control layer only ever reads the
//! velocity (for the speed display) and never writes it.

use bevy_ecs::prelude::Component;
use glam::Vec3;

/// Rigid body state for the vehicle chassis.
#[derive(Component, Clone, Copy, Debug)]
pub struct RigidBody {
    /// Linear velocity in world units per second.
    pub velocity: Vec3,
    /// Chassis-local center-of-mass offset, set once at spawn.
    pub center_of_mass: Vec3,
}

impl Default for RigidBody {
    fn default() -> Self {
        Self {
            velocity: Vec3::ZERO,
            center_of_mass: Vec3::ZERO,
        }
    }
}

impl RigidBody {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_center_of_mass(mut self, offset: Vec3) -> Self {
        self.center_of_mass = offset;
        self
    }

    /// Velocity magnitude in world units per second.
    pub fn speed(&self) -> f32 {
        self.velocity.length()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_at_rest() {
        let rb = RigidBody::new();
        assert_eq!(rb.velocity, Vec3::ZERO);
        assert_eq!(rb.center_of_mass, Vec3::ZERO);
        assert_eq!(rb.speed(), 0.0);
    }

    #[test]
    fn test_speed_is_velocity_magnitude() {
        let mut rb = RigidBody::new();
        rb.velocity = Vec3::new(3.0, 0.0, 4.0);
        assert!((rb.speed() - 5.0).abs() < 1e-6);
    }
}
