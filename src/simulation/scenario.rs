//! Build fully-initialized simulations from configuration
//!
//! Takes a `ScenarioConfig` (YAML-facing) and produces the runtime bundle
//! ([`Simulation`]) containing:
//! - world bounds (`Bounds`)
//! - numerical parameters (`Parameters`)
//! - the body collection at t = 0, explicit entries plus optional scatter
//! - the central attraction field, positioned and toggled per config
//!
//! The scatter population mirrors the original sandbox's random scene
//! (many small bodies strewn across the window) but draws from a seeded
//! generator so a scenario file always produces the same scene.

use crate::configuration::config::{BodyConfig, ScenarioConfig};
use crate::simulation::boundary::Bounds;
use crate::simulation::engine::Simulation;
use crate::simulation::params::Parameters;
use crate::simulation::states::{Body, NVec2};

/// Map a `ScenarioConfig` onto a ready-to-step [`Simulation`]
pub fn build_simulation(cfg: ScenarioConfig) -> Simulation {
    let bounds = Bounds {
        width: cfg.world.width,
        height: cfg.world.height,
    };

    // Bodies: map `BodyConfig` -> runtime `Body`; mass derives from radius
    let mut bodies: Vec<Body> = cfg
        .bodies
        .iter()
        .map(|bc: &BodyConfig| {
            Body::new(
                NVec2::new(bc.x[0], bc.x[1]),
                NVec2::new(bc.v[0], bc.v[1]),
                bc.radius,
            )
        })
        .collect();

    // Optional scatter: uniform positions over the world rectangle,
    // velocity components uniform in [-speed, speed], reproducible per seed
    if let Some(sc) = &cfg.scatter {
        let mut rng = fastrand::Rng::with_seed(sc.seed.unwrap_or(42));
        for _ in 0..sc.count {
            let x = NVec2::new(rng.f64() * bounds.width, rng.f64() * bounds.height);
            let v = NVec2::new(
                (rng.f64() * 2.0 - 1.0) * sc.speed,
                (rng.f64() * 2.0 - 1.0) * sc.speed,
            );
            bodies.push(Body::new(x, v, sc.radius));
        }
    }

    // Parameters (runtime) from ParametersConfig
    let p_cfg = cfg.parameters;
    let params = Parameters {
        t_end: p_cfg.t_end,
        h0: p_cfg.h0,
        substeps: p_cfg.substeps.unwrap_or(1),
        field_strength: p_cfg.field_strength,
        contact_margin: p_cfg.contact_margin.unwrap_or(0.01),
    };

    let mut sim = Simulation::new(bounds, params, bodies);

    // Field: toggled and retargeted per config, world center otherwise
    if let Some(f_cfg) = cfg.field {
        sim.set_field_enabled(f_cfg.enabled);
        if let Some(t) = f_cfg.target {
            sim.set_field_target(NVec2::new(t[0], t[1]));
        }
    }

    sim
}
