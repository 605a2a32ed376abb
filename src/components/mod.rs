//! ECS components for entities.
//!
//! This module groups all component types that can be attached to entities in
//! the game world. Components define data such as poses, physics parameters,
//! vehicle wiring, and UI text.
//!
//! Submodules overview:
//! - [`dynamictext`] – text component for rendering variable strings
//! - [`rigidbody`] – chassis body storing velocity and center of mass
//! - [`speedometer`] – binds a text label to a rigid body's speed
//! - [`transform3d`] – world-space position and rotation for an entity
//! - [`vehicle`] – per-vehicle wheel wiring and tuning configuration
//! - [`wheel`] – wheel-physics parameters and the actuator capability trait

pub mod dynamictext;
pub mod rigidbody;
pub mod speedometer;
pub mod transform3d;
pub mod vehicle;
pub mod wheel;
