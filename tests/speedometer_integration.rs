//! Speed display integration tests: unit conversion, truncation, and the
//! tolerant handling of a missing label.

use bevy_ecs::prelude::*;
use glam::Vec3;

use driftline::components::dynamictext::DynamicText;
use driftline::components::rigidbody::RigidBody;
use driftline::components::speedometer::Speedometer;
use driftline::systems::speedometer::update_speedometer;

fn make_world() -> World {
    World::new()
}

fn tick_speedometer(world: &mut World) {
    let mut schedule = Schedule::default();
    schedule.add_systems(update_speedometer);
    schedule.run(world);
}

fn spawn_body(world: &mut World, velocity: Vec3) -> Entity {
    let mut body = RigidBody::new();
    body.velocity = velocity;
    world.spawn((body,)).id()
}

#[test]
fn speed_label_shows_kmh_floor() {
    let mut world = make_world();
    let body = spawn_body(&mut world, Vec3::new(0.0, 0.0, 10.0));
    let label = world
        .spawn((Speedometer::new(body), DynamicText::new("0")))
        .id();

    tick_speedometer(&mut world);

    // 10.0 * 2.36 = 23.6, truncated to "23" with no decimal point.
    let text = world.get::<DynamicText>(label).unwrap();
    assert_eq!(text.content, "23");
}

#[test]
fn speed_label_truncates_fraction() {
    let mut world = make_world();
    let body = spawn_body(&mut world, Vec3::new(5.0, 0.0, 0.0));
    let label = world
        .spawn((Speedometer::new(body), DynamicText::new("0")))
        .id();

    tick_speedometer(&mut world);

    // 5.0 * 2.36 = 11.8 -> "11"
    let text = world.get::<DynamicText>(label).unwrap();
    assert_eq!(text.content, "11");
}

#[test]
fn speed_label_uses_velocity_magnitude() {
    let mut world = make_world();
    let body = spawn_body(&mut world, Vec3::new(3.0, 0.0, 4.0));
    let label = world
        .spawn((Speedometer::new(body), DynamicText::new("0")))
        .id();

    tick_speedometer(&mut world);

    // |(3, 0, 4)| = 5.0, 5.0 * 2.36 = 11.8 -> "11"
    let text = world.get::<DynamicText>(label).unwrap();
    assert_eq!(text.content, "11");
}

#[test]
fn stationary_body_shows_zero() {
    let mut world = make_world();
    let body = spawn_body(&mut world, Vec3::ZERO);
    let label = world
        .spawn((Speedometer::new(body), DynamicText::new("99")))
        .id();

    tick_speedometer(&mut world);

    let text = world.get::<DynamicText>(label).unwrap();
    assert_eq!(text.content, "0");
}

#[test]
fn missing_label_is_skipped() {
    let mut world = make_world();
    let body = spawn_body(&mut world, Vec3::new(0.0, 0.0, 10.0));
    // Speedometer entity without a DynamicText: the update is a no-op.
    world.spawn((Speedometer::new(body),));

    tick_speedometer(&mut world);
}

#[test]
fn label_updates_as_the_body_speeds_up() {
    let mut world = make_world();
    let body = spawn_body(&mut world, Vec3::ZERO);
    let label = world
        .spawn((Speedometer::new(body), DynamicText::new("0")))
        .id();

    tick_speedometer(&mut world);
    assert_eq!(world.get::<DynamicText>(label).unwrap().content, "0");

    world.get_mut::<RigidBody>(body).unwrap().velocity = Vec3::new(0.0, 0.0, 20.0);
    tick_speedometer(&mut world);

    // 20.0 * 2.36 = 47.2 -> "47"
    assert_eq!(world.get::<DynamicText>(label).unwrap().content, "47");
}
