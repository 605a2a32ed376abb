//! Game configuration resource.
//!
//! Manages simulation and vehicle tuning loaded from an INI configuration
//! file. Provides defaults for safe startup and methods to load/save
//! configuration.
//!
//! # Configuration File Format
//!
//! ```ini
//! [simulation]
//! fixed_dt = 0.02
//! axis_ramp = 3.0
//!
//! [vehicle]
//! motor_force = 1500.0
//! brake_force = 60000.0
//! max_steer_angle = 30.0
//! drift_extremum_slip = 0.9
//! center_of_mass_y = -0.5
//! ```

use bevy_ecs::prelude::*;
use configparser::ini::Ini;
use glam::Vec3;
use log::info;
use std::path::PathBuf;

use crate::components::vehicle::VehicleConfig;

/// Default safe values for startup
const DEFAULT_FIXED_DT: f32 = 0.02;
const DEFAULT_AXIS_RAMP: f32 = 3.0;
const DEFAULT_MOTOR_FORCE: f32 = 1500.0;
const DEFAULT_BRAKE_FORCE: f32 = 60000.0;
const DEFAULT_MAX_STEER_ANGLE: f32 = 30.0;
const DEFAULT_DRIFT_EXTREMUM_SLIP: f32 = 0.9;
const DEFAULT_CENTER_OF_MASS_Y: f32 = -0.5;
const DEFAULT_CONFIG_PATH: &str = "./config.ini";

/// Game configuration resource.
///
/// Stores the fixed physics timestep, input smoothing rate, and the vehicle
/// tuning used when spawning the player car. Values not present in the
/// configuration file retain their defaults.
#[derive(Resource, Debug, Clone)]
pub struct GameConfig {
    /// Fixed physics timestep in seconds.
    pub fixed_dt: f32,
    /// Axis smoothing ramp in units per second.
    pub axis_ramp: f32,
    /// Peak drive torque in newton-meters.
    pub motor_force: f32,
    /// Uniform brake torque in newton-meters.
    pub brake_force: f32,
    /// Steer angle in degrees at full lock.
    pub max_steer_angle: f32,
    /// Rear-left sideways extremum slip while drifting.
    pub drift_extremum_slip: f32,
    /// Vertical center-of-mass offset for the chassis.
    pub center_of_mass_y: f32,
    /// Path to the configuration file.
    pub config_path: PathBuf,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl GameConfig {
    /// Create a new configuration with safe default values.
    pub fn new() -> Self {
        Self {
            fixed_dt: DEFAULT_FIXED_DT,
            axis_ramp: DEFAULT_AXIS_RAMP,
            motor_force: DEFAULT_MOTOR_FORCE,
            brake_force: DEFAULT_BRAKE_FORCE,
            max_steer_angle: DEFAULT_MAX_STEER_ANGLE,
            drift_extremum_slip: DEFAULT_DRIFT_EXTREMUM_SLIP,
            center_of_mass_y: DEFAULT_CENTER_OF_MASS_Y,
            config_path: PathBuf::from(DEFAULT_CONFIG_PATH),
        }
    }

    /// Create a new configuration with a custom config file path.
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self {
            config_path: path.into(),
            ..Self::new()
        }
    }

    /// Load configuration from the INI file.
    ///
    /// Missing values retain their current (default) values.
    /// Returns an error if the file cannot be read or parsed.
    pub fn load_from_file(&mut self) -> Result<(), String> {
        let mut config = Ini::new();
        config
            .load(&self.config_path)
            .map_err(|e| format!("Failed to load config file: {}", e))?;

        // [simulation] section
        if let Some(dt) = config.getfloat("simulation", "fixed_dt").ok().flatten() {
            self.fixed_dt = dt as f32;
        }
        if let Some(ramp) = config.getfloat("simulation", "axis_ramp").ok().flatten() {
            self.axis_ramp = ramp as f32;
        }

        // [vehicle] section
        if let Some(force) = config.getfloat("vehicle", "motor_force").ok().flatten() {
            self.motor_force = force as f32;
        }
        if let Some(force) = config.getfloat("vehicle", "brake_force").ok().flatten() {
            self.brake_force = force as f32;
        }
        if let Some(angle) = config.getfloat("vehicle", "max_steer_angle").ok().flatten() {
            self.max_steer_angle = angle as f32;
        }
        if let Some(slip) = config
            .getfloat("vehicle", "drift_extremum_slip")
            .ok()
            .flatten()
        {
            self.drift_extremum_slip = slip as f32;
        }
        if let Some(com_y) = config
            .getfloat("vehicle", "center_of_mass_y")
            .ok()
            .flatten()
        {
            self.center_of_mass_y = com_y as f32;
        }

        info!(
            "Loaded config: dt={}, motor={}, brake={}, steer={}, drift_slip={}, com_y={}",
            self.fixed_dt,
            self.motor_force,
            self.brake_force,
            self.max_steer_angle,
            self.drift_extremum_slip,
            self.center_of_mass_y
        );

        Ok(())
    }

    /// Save configuration to the INI file.
    ///
    /// Creates the file if it doesn't exist.
    #[allow(dead_code)]
    pub fn save_to_file(&self) -> Result<(), String> {
        let mut config = Ini::new();

        // [simulation] section
        config.set("simulation", "fixed_dt", Some(self.fixed_dt.to_string()));
        config.set("simulation", "axis_ramp", Some(self.axis_ramp.to_string()));

        // [vehicle] section
        config.set("vehicle", "motor_force", Some(self.motor_force.to_string()));
        config.set("vehicle", "brake_force", Some(self.brake_force.to_string()));
        config.set(
            "vehicle",
            "max_steer_angle",
            Some(self.max_steer_angle.to_string()),
        );
        config.set(
            "vehicle",
            "drift_extremum_slip",
            Some(self.drift_extremum_slip.to_string()),
        );
        config.set(
            "vehicle",
            "center_of_mass_y",
            Some(self.center_of_mass_y.to_string()),
        );

        config
            .write(&self.config_path)
            .map_err(|e| format!("Failed to save config file: {}", e))?;

        info!("Saved config to {:?}", self.config_path);

        Ok(())
    }

    /// Vehicle tuning assembled from the loaded scalars.
    pub fn vehicle_config(&self) -> VehicleConfig {
        VehicleConfig {
            motor_force: self.motor_force,
            brake_force: self.brake_force,
            max_steer_angle: self.max_steer_angle,
            drift_extremum_slip: self.drift_extremum_slip,
            center_of_mass: Vec3::new(0.0, self.center_of_mass_y, 0.0),
        }
    }
}
