//! ECS resources made available to systems.
//!
//! This module groups the long-lived data injected into the ECS world and
//! accessed by systems during execution: input state, timing, configuration,
//! and the rig definition store. Each submodule documents the semantics and
//! intended usage of its resource(s).
//!
//! Overview
//! - `gameconfig` – tuning and simulation settings loaded from an INI file
//! - `input` – per-tick key and axis state relevant to driving
//! - `rigstore` – loaded vehicle rig definitions keyed by string IDs
//! - `worldtime` – simulation time and delta

pub mod gameconfig;
pub mod input;
pub mod rigstore;
pub mod worldtime;
