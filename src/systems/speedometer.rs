//! Speed display system.
//!
//! Runs once per render frame: reads the observed rigid body's velocity
//! magnitude, converts it to km/h, and writes the truncated integer as a
//! decimal string into the label.

use bevy_ecs::prelude::*;

use crate::components::dynamictext::DynamicText;
use crate::components::rigidbody::RigidBody;
use crate::components::speedometer::Speedometer;

/// World units per second to km/h.
pub const MS_TO_KMH: f32 = 2.36;

/// Update every speed label from its observed rigid body.
///
/// A label entity without a `DynamicText` is skipped silently; a speedometer
/// whose observed entity has no `RigidBody` is a scene configuration error
/// and panics.
pub fn update_speedometer(
    mut displays: Query<(&Speedometer, Option<&mut DynamicText>)>,
    bodies: Query<&RigidBody>,
) {
    for (speedometer, text) in displays.iter_mut() {
        let body = bodies
            .get(speedometer.body)
            .expect("speedometer target entity has no RigidBody");
        let kmh = body.speed() * MS_TO_KMH;

        let Some(mut text) = text else {
            continue;
        };

        let content = (kmh as i64).to_string();
        if text.content != content {
            text.set_content(content);
        }
    }
}
