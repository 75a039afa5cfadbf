pub mod simulation;
pub mod configuration;
pub mod benchmark;

pub use simulation::states::{Body, System, NVec2};
pub use simulation::params::Parameters;
pub use simulation::boundary::{Bounds, reflect_at_walls};
pub use simulation::forces::ForceField;
pub use simulation::collision::{overlaps, penetration_depth, contact_normal, resolve};
pub use simulation::engine::{Simulation, RunState};
pub use simulation::scenario::build_simulation;

pub use configuration::config::{
    BodyConfig, FieldConfig, ParametersConfig, ScatterConfig, ScenarioConfig, WorldConfig,
};

pub use benchmark::benchmark::{bench_collision_sweep, bench_step};
