//! Configuration types for loading simulation scenarios from YAML.
//!
//! This module defines a thin, `serde`-deserializable representation of a
//! sandbox scenario. A scenario consists of:
//!
//! - [`WorldConfig`]      – the rectangular world the bodies bounce in
//! - [`ParametersConfig`] – numerical parameters and engine knobs
//! - [`FieldConfig`]      – initial state of the central attraction field
//! - [`BodyConfig`]       – initial state for each explicitly placed body
//! - [`ScatterConfig`]    – optional seeded random population of the world
//! - [`ScenarioConfig`]   – top-level wrapper used to load a scenario from YAML
//!
//! # YAML format
//! An example scenario YAML matching these types:
//!
//! ```yaml
//! world:
//!   width: 1280.0
//!   height: 720.0
//!
//! parameters:
//!   t_end: 10.0             # total simulation time
//!   h0: 0.016666            # fixed step size of the headless runner
//!   substeps: 1             # pipeline passes per step, dt split evenly
//!   field_strength: 5.0     # central attraction impulse magnitude
//!   contact_margin: 0.01    # tangency tolerance of the overlap test
//!
//! field:
//!   enabled: false
//!   target: [ 640.0, 360.0 ]
//!
//! bodies:
//!   - x: [ 640.0, 360.0 ]
//!     v: [ 0.0, 0.0 ]
//!     radius: 200.0
//!
//! scatter:
//!   count: 200
//!   radius: 10.0
//!   speed: 125.0
//!   seed: 42
//! ```
//!
//! Note that bodies carry no mass entry: mass is always derived from the
//! radius when the runtime `Body` is built.

use serde::Deserialize;

/// The world rectangle the boundary policy reflects against
#[derive(Deserialize, Debug)]
pub struct WorldConfig {
    pub width: f64,  // world extent along x, bodies live in [0, width]
    pub height: f64, // world extent along y, bodies live in [0, height]
}

/// Global numerical parameters and engine knobs for a scenario
#[derive(Deserialize, Debug, Clone)]
pub struct ParametersConfig {
    pub t_end: f64,                 // time end for the headless runner
    pub h0: f64,                    // fixed step size
    pub substeps: Option<usize>,    // pipeline passes per step call, default 1
    pub field_strength: f64,        // central attraction impulse magnitude
    pub contact_margin: Option<f64>, // tangency tolerance, default 0.01
}

/// Initial state of the central attraction field
#[derive(Deserialize, Debug)]
pub struct FieldConfig {
    pub enabled: bool,           // start with the field on?
    pub target: Option<Vec<f64>>, // attraction point, defaults to the world center
}

/// Configuration for a single explicitly placed body
#[derive(Deserialize, Debug)]
pub struct BodyConfig {
    pub x: Vec<f64>, // initial position in world units
    pub v: Vec<f64>, // initial velocity in world units per time unit
    pub radius: f64, // circle radius; mass is derived as pi * radius^2
}

/// Seeded random population of the world rectangle
#[derive(Deserialize, Debug)]
pub struct ScatterConfig {
    pub count: usize,      // how many bodies to scatter
    pub radius: f64,       // radius of every scattered body
    pub speed: f64,        // velocity components drawn uniformly from [-speed, speed]
    pub seed: Option<u64>, // rng seed, default 42, same seed -> same scene
}

/// Top-level scenario configuration loaded from YAML.
#[derive(Deserialize, Debug)]
pub struct ScenarioConfig {
    pub world: WorldConfig, // the bounded rectangle
    pub parameters: ParametersConfig, // numerical parameters and knobs
    pub field: Option<FieldConfig>, // central attraction, defaults to disabled
    #[serde(default)]
    pub bodies: Vec<BodyConfig>, // explicitly placed bodies
    pub scatter: Option<ScatterConfig>, // optional random population
}
