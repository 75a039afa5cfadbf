//! The simulation orchestrator
//!
//! `Simulation` owns the body collection, the world bounds, the runtime
//! parameters and the force field, and advances everything by one discrete
//! step per `step(dt)` call:
//! 1. apply the field (if enabled) to every body
//! 2. test every unordered pair once and resolve the overlapping ones
//! 3. reflect at the walls against the now-updated velocities
//! 4. sanitize velocities, then integrate positions
//!
//! A Running/Paused state machine gates `step`; `step_once` arms a one-shot
//! pass from Paused. The pair sweep is brute-force O(n^2), fine for the
//! tens-to-hundreds of bodies a sandbox scene holds.

use super::boundary::{reflect_at_walls, Bounds};
use super::collision;
use super::forces::ForceField;
use super::params::Parameters;
use super::states::{Body, NVec2, System};

/// Operating state of the simulation loop
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunState {
    Running,
    Paused,
}

/// Fully-assembled runtime bundle: bodies, bounds, parameters, force field
/// and the run state machine
#[derive(Debug)]
pub struct Simulation {
    pub system: System,
    pub bounds: Bounds,
    pub params: Parameters,
    pub field: ForceField,
    state: RunState,
    single_step: bool, // armed from Paused, consumed by the one step it admits
}

impl Simulation {
    /// Build a running simulation over `bodies` inside `bounds`
    ///
    /// The field starts disabled with its target at the world center, the
    /// position the original sandbox points it at before any mouse input
    pub fn new(bounds: Bounds, params: Parameters, bodies: Vec<Body>) -> Self {
        let target = NVec2::new(bounds.width / 2.0, bounds.height / 2.0);
        let field = ForceField::new(params.field_strength, target);
        Self {
            system: System { bodies, t: 0.0 },
            bounds,
            params,
            field,
            state: RunState::Running,
            single_step: false,
        }
    }

    /// Advance by `dt` if the state machine admits it
    ///
    /// Running: always advances. Paused: advances only when `step_once`
    /// armed the one-shot flag, which this call consumes
    pub fn step(&mut self, dt: f64) {
        match self.state {
            RunState::Running => self.advance(dt),
            RunState::Paused => {
                if self.single_step {
                    self.single_step = false;
                    self.advance(dt);
                }
            }
        }
    }

    /// Run the pipeline `substeps` times with an evenly split dt
    fn advance(&mut self, dt: f64) {
        let n = self.params.substeps.max(1);
        let h = dt / n as f64;
        for _ in 0..n {
            self.pass(h);
        }
    }

    /// One full pipeline pass: field, collisions, walls, integration
    fn pass(&mut self, dt: f64) {
        self.field.apply(&mut self.system);

        // every unordered pair (i, j) with i < j exactly once; resolving a
        // pair twice per pass would double both the positional correction
        // and the velocity exchange
        let n = self.system.bodies.len();
        for i in 0..n {
            for j in (i + 1)..n {
                // split the slice so both bodies can be borrowed mutably
                let (head, tail) = self.system.bodies.split_at_mut(j);
                let a = &mut head[i];
                let b = &mut tail[0];
                if collision::overlaps(a, b, self.params.contact_margin) {
                    collision::resolve(a, b);
                }
            }
        }

        for b in self.system.bodies.iter_mut() {
            reflect_at_walls(b, &self.bounds, dt);
        }

        for b in self.system.bodies.iter_mut() {
            b.sanitize_velocity();
            b.x += b.v * dt;
        }
        self.system.t += dt;
    }

    /// Read-only view of the bodies, for rendering or inspection
    pub fn bodies(&self) -> &[Body] {
        &self.system.bodies
    }

    /// Append a new body (click-to-add in the original sandbox).
    /// Mass is derived from the radius like every other body
    pub fn spawn(&mut self, pos: NVec2, vel: NVec2, radius: f64) {
        self.system.bodies.push(Body::new(pos, vel, radius));
    }

    pub fn set_field_enabled(&mut self, enabled: bool) {
        self.field.enabled = enabled;
    }

    pub fn set_field_target(&mut self, target: NVec2) {
        self.field.target = target;
    }

    pub fn pause(&mut self) {
        self.state = RunState::Paused;
    }

    pub fn resume(&mut self) {
        self.state = RunState::Running;
        self.single_step = false;
    }

    /// Arm a single pipeline pass while paused; ignored while running
    pub fn step_once(&mut self) {
        if self.state == RunState::Paused {
            self.single_step = true;
        }
    }

    pub fn is_paused(&self) -> bool {
        self.state == RunState::Paused
    }
}
