//! Per-tick driving input resources.
//!
//! [`RawKeys`] holds the set of keys currently held down; the frame driver
//! (or a test) writes it before each physics tick. The
//! [`update_input_state`](crate::systems::input::update_input_state) system
//! then derives the smoothed axes and key edge states exposed through
//! [`InputState`], which is what the vehicle controller samples.

use bevy_ecs::prelude::Resource;
use rustc_hash::FxHashSet;

/// Keys the driving controls can be bound to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    W,
    A,
    S,
    D,
    Space,
    LeftShift,
}

/// Resource holding the raw key-down set for the current tick.
#[derive(Resource, Debug, Clone, Default)]
pub struct RawKeys {
    down: FxHashSet<Key>,
}

impl RawKeys {
    pub fn is_down(&self, key: Key) -> bool {
        self.down.contains(&key)
    }

    pub fn press(&mut self, key: Key) {
        self.down.insert(key);
    }

    pub fn release(&mut self, key: Key) {
        self.down.remove(&key);
    }

    /// Replace the whole key-down set for this tick.
    pub fn set_down(&mut self, keys: impl IntoIterator<Item = Key>) {
        self.down.clear();
        self.down.extend(keys);
    }
}

#[derive(Debug, Clone, Copy)]
/// Boolean key state with an associated keyboard binding.
pub struct BoolState {
    /// Whether the key is currently active/pressed this tick.
    pub active: bool,
    /// Whether the key was just pressed this tick.
    pub just_pressed: bool,
    /// Whether the key was just released this tick.
    pub just_released: bool,

    /// The key bound to this action.
    pub key_binding: Key,
}

impl BoolState {
    fn bound_to(key: Key) -> Self {
        Self {
            active: false,
            just_pressed: false,
            just_released: false,
            key_binding: key,
        }
    }
}

/// A continuous input axis smoothed from a pair of digital keys.
///
/// `value` ramps toward -1, 0, or +1 at `ramp` units per second, mimicking
/// the smoothed axes a game engine's input layer provides. Tests may write
/// `value` directly.
#[derive(Debug, Clone, Copy)]
pub struct AxisState {
    /// Current smoothed value in [-1, 1].
    pub value: f32,
    /// Ramp rate toward the target, units per second.
    pub ramp: f32,
    /// Key that pulls the axis toward -1.
    pub negative: Key,
    /// Key that pulls the axis toward +1.
    pub positive: Key,
}

/// Resource capturing the per-tick input state relevant to driving.
///
/// Two smoothed axes (steering and throttle) plus the brake and drift keys.
#[derive(Resource, Debug, Clone)]
pub struct InputState {
    /// Steering axis: A = -1 (left), D = +1 (right).
    pub horizontal: AxisState,
    /// Throttle axis: S = -1 (reverse), W = +1 (forward).
    pub vertical: AxisState,
    pub brake: BoolState,
    pub drift: BoolState,
}

impl Default for InputState {
    fn default() -> Self {
        Self {
            horizontal: AxisState {
                value: 0.0,
                ramp: 3.0,
                negative: Key::A,
                positive: Key::D,
            },
            vertical: AxisState {
                value: 0.0,
                ramp: 3.0,
                negative: Key::S,
                positive: Key::W,
            },
            brake: BoolState::bound_to(Key::Space),
            drift: BoolState::bound_to(Key::LeftShift),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_inputstate_default_all_inactive() {
        let input = InputState::default();
        assert_eq!(input.horizontal.value, 0.0);
        assert_eq!(input.vertical.value, 0.0);
        assert!(!input.brake.active);
        assert!(!input.drift.active);
        assert!(!input.brake.just_pressed);
        assert!(!input.drift.just_released);
    }

    #[test]
    fn test_inputstate_default_key_bindings() {
        let input = InputState::default();
        assert_eq!(input.horizontal.negative, Key::A);
        assert_eq!(input.horizontal.positive, Key::D);
        assert_eq!(input.vertical.negative, Key::S);
        assert_eq!(input.vertical.positive, Key::W);
        assert_eq!(input.brake.key_binding, Key::Space);
        assert_eq!(input.drift.key_binding, Key::LeftShift);
    }

    #[test]
    fn test_rawkeys_press_release() {
        let mut keys = RawKeys::default();
        assert!(!keys.is_down(Key::W));
        keys.press(Key::W);
        assert!(keys.is_down(Key::W));
        keys.release(Key::W);
        assert!(!keys.is_down(Key::W));
    }

    #[test]
    fn test_rawkeys_set_down_replaces() {
        let mut keys = RawKeys::default();
        keys.press(Key::Space);
        keys.set_down([Key::W, Key::LeftShift]);
        assert!(keys.is_down(Key::W));
        assert!(keys.is_down(Key::LeftShift));
        assert!(!keys.is_down(Key::Space));
    }
}
