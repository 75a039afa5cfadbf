//! Rectangular world boundary and wall reflection
//!
//! The world is a fixed axis-aligned rectangle `[0, width] x [0, height]`
//! supplied by the caller at construction; the engine never owns or resizes
//! it. Reflection is predictive: a body whose *next* position would leave
//! the rectangle has its velocity mirrored about the violated wall's normal
//! before integration, so the following position update moves it back in.

use super::states::{Body, NVec2};

/// The world rectangle `[0, width] x [0, height]`
#[derive(Debug, Clone, Copy)]
pub struct Bounds {
    pub width: f64,
    pub height: f64,
}

/// Mirror `v` about the wall normal `n`: v' = v - 2 (v . n) n
fn reflect(v: NVec2, n: NVec2) -> NVec2 {
    v - 2.0 * v.dot(&n) * n
}

/// Reflect `body.v` for every wall its predicted position `x + v * dt`
/// would cross. Corner hits violate two walls and get both reflections in
/// sequence. Velocity-only: the body may overshoot the wall by up to
/// `|v| * dt` for one step before the reflected velocity carries it back,
/// inherited behavior from the source sandbox
pub fn reflect_at_walls(body: &mut Body, bounds: &Bounds, dt: f64) {
    let next = body.x + body.v * dt;
    if next.x < 0.0 {
        body.v = reflect(body.v, NVec2::new(1.0, 0.0));
    }
    if next.y < 0.0 {
        body.v = reflect(body.v, NVec2::new(0.0, 1.0));
    }
    if next.x > bounds.width {
        body.v = reflect(body.v, NVec2::new(-1.0, 0.0));
    }
    if next.y > bounds.height {
        body.v = reflect(body.v, NVec2::new(0.0, -1.0));
    }
}
