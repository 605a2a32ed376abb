use bevy_ecs::prelude::{Component, Entity};

/// Binds a text label to a rigid body's speed.
///
/// Lives on the label entity next to a
/// [`DynamicText`](crate::components::dynamictext::DynamicText) component.
/// The observed body must carry a
/// [`RigidBody`](crate::components::rigidbody::RigidBody) for the vehicle's
/// whole lifetime; the label itself is optional and skipped when absent.
#[derive(Component, Clone, Copy, Debug)]
pub struct Speedometer {
    /// Entity whose rigid body velocity is displayed.
    pub body: Entity,
}

impl Speedometer {
    pub fn new(body: Entity) -> Self {
        Self { body }
    }
}
