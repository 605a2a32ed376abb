//! Driftline headless driver.
//!
//! A vehicle-control layer for a 3D driving game, written in Rust using:
//! - **bevy_ecs** for entity-component-system architecture
//! - **glam** for 3D math
//!
//! This executable steps the control logic without a window: a scripted key
//! sequence drives the car through throttle, steering, drift, and braking
//! phases while the speed label is logged periodically.
//!
//! # Project Structure
//!
//! - [`components`] – ECS components (wheels, vehicle wiring, rigid body, text)
//! - [`game`] – rig loading and scene spawning
//! - [`resources`] – ECS resources (input, timing, configuration, rig store)
//! - [`systems`] – ECS systems (input smoothing, vehicle control, movement,
//!   speed display)
//!
//! # Main Loop
//!
//! 1. Load `config.ini` and the rig JSON
//! 2. Build the ECS world and spawn the vehicle plus its speed label
//! 3. Per tick: write the scripted key set, advance time, run the fixed-step
//!    schedule (input → control → movement), then the render schedule
//!
//! # Running
//!
//! ```sh
//! cargo run --release
//! ```

mod components;
mod game;
mod resources;
mod systems;

use bevy_ecs::prelude::*;
use clap::Parser;
use glam::Vec3;
use std::path::PathBuf;

use crate::components::dynamictext::DynamicText;
use crate::components::rigidbody::RigidBody;
use crate::components::speedometer::Speedometer;
use crate::components::vehicle::Vehicle;
use crate::resources::gameconfig::GameConfig;
use crate::resources::input::{InputState, Key, RawKeys};
use crate::resources::rigstore::{RigDef, RigStore};
use crate::resources::worldtime::WorldTime;
use crate::systems::carcontrol::vehicle_control;
use crate::systems::input::update_input_state;
use crate::systems::movement::movement;
use crate::systems::speedometer::update_speedometer;
use crate::systems::time::update_world_time;

/// Top speed of the demo drivetrain stand-in, world units per second.
const DEMO_TOP_SPEED: f32 = 25.0;
/// Velocity response rate of the stand-in, per second.
const DEMO_RESPONSE: f32 = 0.8;
/// Extra decay applied while braking, per second.
const DEMO_BRAKE_RESPONSE: f32 = 4.0;

/// Driftline headless demo
#[derive(Parser)]
#[command(version, about = "Vehicle-control demo loop without a window")]
struct Cli {
    /// Path to the INI configuration file.
    #[arg(long, value_name = "PATH", default_value = "./config.ini")]
    config: PathBuf,

    /// Path to the vehicle rig JSON.
    #[arg(long, value_name = "PATH", default_value = "./assets/rigs/buggy.json")]
    rig: PathBuf,

    /// Number of fixed physics ticks to run.
    #[arg(long, default_value_t = 500)]
    ticks: u32,
}

/// Scripted key set for one tick of the demo drive.
fn scripted_keys(fraction: f32) -> Vec<Key> {
    let mut keys = Vec::new();
    if fraction < 0.55 {
        keys.push(Key::W);
    }
    if (0.2..0.35).contains(&fraction) {
        keys.push(Key::D);
    }
    if (0.35..0.55).contains(&fraction) {
        keys.push(Key::LeftShift);
    }
    if fraction >= 0.8 {
        keys.push(Key::Space);
    }
    keys
}

/// Drivetrain stand-in for the headless demo.
///
/// The real game's physics solver turns motor and brake torque into chassis
/// motion; here the chassis velocity just approaches a throttle-scaled
/// forward speed so the speed label and wheel poses have something to show.
fn demo_drivetrain(world: &mut World, dt: f32) {
    let (throttle, braking) = {
        let input = world.resource::<InputState>();
        (input.vertical.value, input.brake.active)
    };

    let mut chassis = world.query_filtered::<&mut RigidBody, With<Vehicle>>();
    for mut body in chassis.iter_mut(world) {
        let target = if braking {
            Vec3::ZERO
        } else {
            Vec3::Z * (throttle * DEMO_TOP_SPEED)
        };
        let response = if braking {
            DEMO_BRAKE_RESPONSE
        } else {
            DEMO_RESPONSE
        };
        let blend = (response * dt).min(1.0);
        let delta = (target - body.velocity) * blend;
        body.velocity += delta;
    }
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    let mut config = GameConfig::with_path(&cli.config);
    if let Err(e) = config.load_from_file() {
        log::warn!("{e}; using defaults");
    }

    let rig = match game::load_rig(&cli.rig.to_string_lossy()) {
        Ok(rig) => rig,
        Err(e) => {
            log::warn!("{e}; using the built-in rig");
            RigDef::default()
        }
    };

    // --------------- ECS world + resources ---------------
    let mut world = World::new();
    world.insert_resource(WorldTime::default().with_time_scale(1.0));
    world.insert_resource(RawKeys::default());

    let mut input = InputState::default();
    input.horizontal.ramp = config.axis_ramp;
    input.vertical.ramp = config.axis_ramp;
    world.insert_resource(input);

    let rig_name = rig.name.clone();
    let mut rigs = RigStore::new();
    rigs.insert(rig_name.clone(), rig);
    world.insert_resource(rigs);

    let fixed_dt = config.fixed_dt;
    let vehicle_config = config.vehicle_config();
    world.insert_resource(config);

    // Spawn from the cached rig, the way any further vehicles would be.
    let rig = world
        .resource::<RigStore>()
        .get(&rig_name)
        .cloned()
        .expect("rig cached at startup");
    let chassis = game::spawn_vehicle(&mut world, &rig, vehicle_config);
    game::spawn_speedometer(&mut world, chassis);

    // Fixed-timestep physics phase, strictly ordered; the render phase runs
    // after it each iteration of the headless loop.
    let mut physics = Schedule::default();
    physics.add_systems((update_input_state, vehicle_control, movement).chain());

    let mut render = Schedule::default();
    render.add_systems(update_speedometer);

    physics
        .initialize(&mut world)
        .expect("Failed to initialize physics schedule");
    render
        .initialize(&mut world)
        .expect("Failed to initialize render schedule");

    log::info!(
        "Driving '{}' for {} ticks at dt={}",
        rig.name,
        cli.ticks,
        fixed_dt
    );

    // --------------- Main loop ---------------
    for tick in 0..cli.ticks {
        let fraction = tick as f32 / cli.ticks.max(1) as f32;
        world
            .resource_mut::<RawKeys>()
            .set_down(scripted_keys(fraction));

        update_world_time(&mut world, fixed_dt);
        demo_drivetrain(&mut world, fixed_dt);
        physics.run(&mut world);
        render.run(&mut world);

        if tick % 25 == 0 {
            let speed = world.get::<RigidBody>(chassis).map(|b| b.speed()).unwrap_or(0.0);
            let mut labels = world.query::<(&Speedometer, &DynamicText)>();
            for (_, text) in labels.iter(&world) {
                log::info!(
                    "tick {:4}  speed {:6.2} u/s  label \"{}\" km/h",
                    tick,
                    speed,
                    text.content
                );
            }
        }
    }
}
