//! High-level scene setup: rig loading and entity spawning.

use bevy_ecs::prelude::*;
use log::info;

use crate::components::dynamictext::DynamicText;
use crate::components::rigidbody::RigidBody;
use crate::components::speedometer::Speedometer;
use crate::components::transform3d::Transform3D;
use crate::components::vehicle::{Vehicle, VehicleConfig, WheelPair};
use crate::components::wheel::{Corner, WheelPhysics};
use crate::resources::rigstore::RigDef;

/// Parse a rig definition from a JSON string.
pub fn parse_rig(json: &str) -> Result<RigDef, String> {
    serde_json::from_str(json).map_err(|e| format!("Failed to parse rig JSON: {}", e))
}

/// Load a rig definition from a JSON file.
pub fn load_rig(path: &str) -> Result<RigDef, String> {
    let json = std::fs::read_to_string(path)
        .map_err(|e| format!("Failed to read rig file {}: {}", path, e))?;
    parse_rig(&json)
}

fn spawn_wheel(world: &mut World, rig: &RigDef, corner: Corner) -> WheelPair {
    let physics = world
        .spawn((WheelPhysics::new(corner, rig.mount(corner), rig.wheel_radius),))
        .id();
    let visual = world.spawn((Transform3D::default(),)).id();
    WheelPair { physics, visual }
}

/// Spawn a vehicle from a rig definition.
///
/// Creates the four wheel-physics entities, their paired visual transform
/// entities, and the chassis entity carrying [`Vehicle`], [`RigidBody`], and
/// [`Transform3D`]. The wheel/visual pairs are fixed here and never
/// reassigned; the center-of-mass offset is applied to the body once.
///
/// Returns the chassis entity.
pub fn spawn_vehicle(world: &mut World, rig: &RigDef, config: VehicleConfig) -> Entity {
    let front_left = spawn_wheel(world, rig, Corner::FrontLeft);
    let front_right = spawn_wheel(world, rig, Corner::FrontRight);
    let back_left = spawn_wheel(world, rig, Corner::BackLeft);
    let back_right = spawn_wheel(world, rig, Corner::BackRight);

    let body = RigidBody::new().with_center_of_mass(config.center_of_mass);
    let chassis = world
        .spawn((
            Vehicle {
                front_left,
                front_right,
                back_left,
                back_right,
                config,
            },
            body,
            Transform3D::default(),
        ))
        .id();

    info!("Spawned vehicle '{}' as {:?}", rig.name, chassis);

    chassis
}

/// Spawn a speed label observing `body`.
///
/// Returns the label entity.
pub fn spawn_speedometer(world: &mut World, body: Entity) -> Entity {
    world
        .spawn((Speedometer::new(body), DynamicText::new("0")))
        .id()
}
