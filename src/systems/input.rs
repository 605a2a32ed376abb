//! Input systems.
//!
//! [`update_input_state`] reads the raw key-down set each tick and writes the
//! results into [`crate::resources::input::InputState`]: edge-detected key
//! states for the brake and drift actions, and continuous axis values ramped
//! from the digital steering/throttle keys the way an engine input layer
//! smooths them.
use bevy_ecs::prelude::*;

use crate::resources::input::{AxisState, BoolState, InputState, RawKeys};
use crate::resources::worldtime::WorldTime;

/// Derive the per-tick `InputState` from the `RawKeys` resource.
pub fn update_input_state(
    mut input: ResMut<InputState>,
    keys: Res<RawKeys>,
    time: Res<WorldTime>,
) {
    update_bool_state(&mut input.brake, &keys);
    update_bool_state(&mut input.drift, &keys);

    step_axis(&mut input.horizontal, &keys, time.delta);
    step_axis(&mut input.vertical, &keys, time.delta);
}

fn update_bool_state(state: &mut BoolState, keys: &RawKeys) {
    let down = keys.is_down(state.key_binding);
    state.just_pressed = down && !state.active;
    state.just_released = !down && state.active;
    state.active = down;
}

/// Ramp an axis toward the target implied by its key pair.
///
/// Opposite keys cancel to a zero target. The value moves at `ramp` units
/// per second and snaps to the target once within one step, so it never
/// overshoots the [-1, 1] range.
fn step_axis(axis: &mut AxisState, keys: &RawKeys, dt: f32) {
    let negative = keys.is_down(axis.negative);
    let positive = keys.is_down(axis.positive);
    let target = (positive as i32 - negative as i32) as f32;

    let max_step = axis.ramp * dt;
    let diff = target - axis.value;
    if diff.abs() <= max_step {
        axis.value = target;
    } else {
        axis.value += max_step * diff.signum();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resources::input::Key;

    fn make_world(delta: f32) -> World {
        let mut world = World::new();
        world.insert_resource(WorldTime {
            elapsed: 0.0,
            delta,
            time_scale: 1.0,
        });
        world.insert_resource(InputState::default());
        world.insert_resource(RawKeys::default());
        world
    }

    fn tick(world: &mut World) {
        let mut schedule = Schedule::default();
        schedule.add_systems(update_input_state);
        schedule.run(world);
    }

    #[test]
    fn axis_ramps_toward_held_key() {
        let mut world = make_world(0.1);
        world.resource_mut::<RawKeys>().press(Key::W);

        tick(&mut world);

        let input = world.resource::<InputState>();
        // ramp 3.0 * dt 0.1 = 0.3 per tick
        assert!((input.vertical.value - 0.3).abs() < 1e-6);
    }

    #[test]
    fn axis_saturates_at_one_without_overshoot() {
        let mut world = make_world(0.1);
        world.resource_mut::<RawKeys>().press(Key::W);

        for _ in 0..10 {
            tick(&mut world);
        }

        let input = world.resource::<InputState>();
        assert_eq!(input.vertical.value, 1.0);
    }

    #[test]
    fn axis_returns_to_zero_when_released() {
        let mut world = make_world(0.1);
        world.resource_mut::<RawKeys>().press(Key::D);
        for _ in 0..10 {
            tick(&mut world);
        }
        world.resource_mut::<RawKeys>().release(Key::D);
        for _ in 0..10 {
            tick(&mut world);
        }

        let input = world.resource::<InputState>();
        assert_eq!(input.horizontal.value, 0.0);
    }

    #[test]
    fn opposite_keys_cancel() {
        let mut world = make_world(0.1);
        {
            let mut keys = world.resource_mut::<RawKeys>();
            keys.press(Key::A);
            keys.press(Key::D);
        }

        for _ in 0..5 {
            tick(&mut world);
        }

        let input = world.resource::<InputState>();
        assert_eq!(input.horizontal.value, 0.0);
    }

    #[test]
    fn brake_key_edges_are_detected() {
        let mut world = make_world(0.02);
        world.resource_mut::<RawKeys>().press(Key::Space);

        tick(&mut world);
        {
            let input = world.resource::<InputState>();
            assert!(input.brake.active);
            assert!(input.brake.just_pressed);
            assert!(!input.brake.just_released);
        }

        tick(&mut world);
        {
            let input = world.resource::<InputState>();
            assert!(input.brake.active);
            assert!(!input.brake.just_pressed);
        }

        world.resource_mut::<RawKeys>().release(Key::Space);
        tick(&mut world);
        let input = world.resource::<InputState>();
        assert!(!input.brake.active);
        assert!(input.brake.just_released);
    }
}
