use bevy_ecs::prelude::Component;
use glam::{Quat, Vec3};

/// World-space transform for an entity: position plus rotation.
///
/// Used for the vehicle chassis and for the visual wheel meshes that mirror
/// the simulated wheel poses.
#[derive(Component, Clone, Copy, Debug, PartialEq)]
pub struct Transform3D {
    pub position: Vec3,
    pub rotation: Quat,
}

impl Default for Transform3D {
    fn default() -> Self {
        Self {
            position: Vec3::ZERO,
            rotation: Quat::IDENTITY,
        }
    }
}
