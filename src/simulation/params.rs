//! Numerical and physical parameters for the simulation
//!
//! `Parameters` holds runtime settings:
//! - run length and step size for the headless runner,
//! - substep count per `step` call,
//! - force-field strength and the tangency margin of the collision test

#[derive(Debug, Clone)]
pub struct Parameters {
    pub t_end: f64, // time end
    pub h0: f64, // step size
    pub substeps: usize, // pipeline passes per step call, dt is split evenly
    pub field_strength: f64, // impulse magnitude of the central attraction
    pub contact_margin: f64, // tolerance subtracted in the overlap test so exact tangency is not a collision
}

impl Default for Parameters {
    fn default() -> Self {
        Self {
            t_end: 10.0,
            h0: 1.0 / 60.0,
            substeps: 1,
            field_strength: 5.0,
            contact_margin: 0.01,
        }
    }
}
