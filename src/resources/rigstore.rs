//! Vehicle rig definitions and their store.
//!
//! A rig describes the fixed geometry of a vehicle: the four chassis-local
//! wheel mount points and the wheel radius. Rigs are authored as JSON files
//! under `assets/rigs/` and cached here by name, so scene setup can spawn the
//! same rig repeatedly without touching the filesystem.

use bevy_ecs::prelude::Resource;
use glam::Vec3;
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::components::wheel::Corner;

/// Geometry of one vehicle rig, loaded from JSON.
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct RigDef {
    pub name: String,
    /// Wheel radius in world units.
    pub wheel_radius: f32,
    /// Chassis-local mount points, `[x, y, z]`.
    pub front_left: [f32; 3],
    pub front_right: [f32; 3],
    pub back_left: [f32; 3],
    pub back_right: [f32; 3],
}

impl Default for RigDef {
    fn default() -> Self {
        Self {
            name: "buggy".into(),
            wheel_radius: 0.35,
            front_left: [-0.8, -0.3, 1.2],
            front_right: [0.8, -0.3, 1.2],
            back_left: [-0.8, -0.3, -1.2],
            back_right: [0.8, -0.3, -1.2],
        }
    }
}

impl RigDef {
    /// Mount point for one corner as a vector.
    pub fn mount(&self, corner: Corner) -> Vec3 {
        let [x, y, z] = match corner {
            Corner::FrontLeft => self.front_left,
            Corner::FrontRight => self.front_right,
            Corner::BackLeft => self.back_left,
            Corner::BackRight => self.back_right,
        };
        Vec3::new(x, y, z)
    }
}

/// Resource caching loaded rig definitions by name.
#[derive(Resource, Default)]
pub struct RigStore {
    rigs: FxHashMap<String, RigDef>,
}

impl RigStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, key: impl Into<String>, rig: RigDef) {
        self.rigs.insert(key.into(), rig);
    }

    pub fn get(&self, key: &str) -> Option<&RigDef> {
        self.rigs.get(key)
    }
}
