//! Core state types for the circle sandbox.
//!
//! Defines the body/system structs:
//! - `Body` using `NVec2` (one circular particle)
//! - `System` (the body collection plus the simulation clock `t`)
//!
//! Mass is derived from radius at construction (`m = pi * r^2`), so all
//! construction goes through [`Body::new`]. The system also exposes the
//! whole-collection diagnostics (kinetic energy, linear momentum) that the
//! runner reports each cadence.

use nalgebra::Vector2;
pub type NVec2 = Vector2<f64>;

#[derive(Debug, Clone)]
pub struct Body {
    pub x: NVec2, // position (circle center)
    pub v: NVec2, // velocity
    pub radius: f64, // collision radius, immutable after creation
    pub m: f64, // mass, derived: pi * radius^2
}

impl Body {
    /// Create a body at `x` with velocity `v`; mass is area-proportional
    /// (`pi * radius^2`) and never stored independently of the radius
    pub fn new(x: NVec2, v: NVec2, radius: f64) -> Self {
        Self {
            x,
            v,
            radius,
            m: std::f64::consts::PI * radius * radius,
        }
    }

    /// Zero the velocity if any component went non-finite, so one degenerate
    /// update cannot corrupt every subsequent step
    pub fn sanitize_velocity(&mut self) {
        if !(self.v.x.is_finite() && self.v.y.is_finite()) {
            self.v = NVec2::zeros();
        }
    }
}

#[derive(Debug, Clone)]
pub struct System {
    pub bodies: Vec<Body>, // collection of bodies
    pub t: f64, // time
}

impl System {
    /// Total kinetic energy: sum of 1/2 * m * |v|^2 over all bodies
    pub fn kinetic_energy(&self) -> f64 {
        self.bodies
            .iter()
            .map(|b| 0.5 * b.m * b.v.norm_squared())
            .sum()
    }

    /// Total linear momentum: sum of m * v over all bodies
    pub fn momentum(&self) -> NVec2 {
        self.bodies
            .iter()
            .fold(NVec2::zeros(), |p, b| p + b.m * b.v)
    }
}
