//! Engine systems.
//!
//! This module groups all ECS systems that advance the simulation each tick.
//!
//! Submodules overview
//! - [`carcontrol`] – per-physics-tick wheel torque, brake, steer, and drift
//! - [`input`] – derive smoothed axes and key edges from the raw key set
//! - [`movement`] – integrate the chassis pose and derive wheel world poses
//! - [`speedometer`] – per-render-frame speed label update
//! - [`time`] – update simulation time and delta

pub mod carcontrol;
pub mod input;
pub mod movement;
pub mod speedometer;
pub mod time;
