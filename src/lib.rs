//! Driftline library.
//!
//! This module exposes the crate's ECS components, resources, and systems
//! for use in integration tests and as a reusable library.

pub mod components;
pub mod game;
pub mod resources;
pub mod systems;
