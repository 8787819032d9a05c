//! Configuration types for loading simulation scenarios from YAML.
//!
//! This module defines a thin, `serde`-deserializable representation of a
//! simulation scenario. A scenario consists of:
//!
//! - [`EngineConfig`]     – viewport size and overlay scaling
//! - [`ParametersConfig`] – numerical parameters and physical constants
//! - [`BodyConfig`]       – mass and radius for each body role
//! - [`ScenarioConfig`]   – top-level wrapper used to load a scenario from YAML
//!
//! # YAML format
//! The reference scenario YAML matching these types:
//!
//! ```yaml
//! engine:
//!   width: 1000.0            # viewport width in device pixels
//!   height: 1000.0           # viewport height in device pixels
//!   accel_overlay_scale: 5.0e12  # display magnification of acceleration
//!
//! parameters:
//!   G: 6.6743e-11            # gravitational constant (SI value)
//!   dt: 86400.0              # seconds per frame (one simulated day)
//!   launch_scale: 50.0       # velocity gesture divisor scale
//!
//! central_body:
//!   m: 5.0e4                 # mass
//!   radius: 50.0             # radius in pixels
//!
//! satellite:
//!   m: 10.0
//!   radius: 10.0
//! ```
//!
//! The central body's position is not configurable: it is derived as the
//! viewport center, which the force law assumes as its angular origin.

use serde::Deserialize;

/// Viewport and overlay configuration
#[derive(Deserialize, Debug)]
pub struct EngineConfig {
    pub width: f64, // viewport width in device pixels
    pub height: f64, // viewport height in device pixels
    #[serde(default = "default_accel_overlay_scale")]
    pub accel_overlay_scale: f64, // acceleration display magnification
}

fn default_accel_overlay_scale() -> f64 {
    5e12
}

/// Global numerical and physical parameters for a scenario
#[allow(non_snake_case)]
#[derive(Deserialize, Debug, Clone)]
pub struct ParametersConfig {
    pub G: f64,            // gravitational constant
    pub dt: f64,           // fixed step size, simulated seconds per frame
    pub launch_scale: f64, // divisor scale for the launch gesture
}

/// Mass and radius for one body role (central body or satellite)
#[derive(Deserialize, Debug)]
pub struct BodyConfig {
    pub m: f64,      // Mass of the body
    pub radius: f64, // Radius of the body, used for collision and visualization
}

/// Top-level scenario configuration loaded from YAML.
#[derive(Deserialize, Debug)]
pub struct ScenarioConfig {
    pub engine: EngineConfig, // Viewport-level configuration
    pub parameters: ParametersConfig, // Global numerical and physical parameters
    pub central_body: BodyConfig, // The fixed gravity source
    pub satellite: BodyConfig, // Template for each user-placed satellite
}
