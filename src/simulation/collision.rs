//! Circle-circle collision detection and resolution
//!
//! Detection is a plain distance test with a small tangency margin.
//! Resolution is two independent transformations of the pair:
//! - positional correction: push both centers apart along the contact
//!   normal, each by the *other* body's mass fraction of the penetration
//!   depth, so the heavier body moves less and the pair ends at exact
//!   contact distance
//! - velocity exchange: the classic 1D two-body elastic formula applied to
//!   the normal components, tangential components untouched (frictionless)
//!
//! Both momentum and kinetic energy of the pair are conserved. No errors
//! are raised; degenerate inputs (coincident centers, non-finite results)
//! fall back to safe defaults instead of propagating NaN.

use super::states::{Body, NVec2};

/// True iff the circles overlap by more than `margin`
///
/// The margin (0.01 in the source sandbox) keeps exact tangency from
/// registering as a collision; it is consulted only here, never in
/// [`penetration_depth`]
pub fn overlaps(a: &Body, b: &Body, margin: f64) -> bool {
    (a.x - b.x).norm() + margin < a.radius + b.radius
}

/// Overlap distance: (r_a + r_b) - |x_a - x_b|
/// Positive when the circles interpenetrate; non-positive values carry no
/// meaning and are ignored by callers
pub fn penetration_depth(a: &Body, b: &Body) -> f64 {
    (a.radius + b.radius) - (a.x - b.x).norm()
}

/// Unit normal from a toward b
///
/// Coincident centers leave the direction undefined; the deterministic
/// fallback is +x so resolution still terminates with finite state
pub fn contact_normal(a: &Body, b: &Body) -> NVec2 {
    let d = b.x - a.x;
    let dist2 = d.norm_squared();
    if dist2 > 0.0 {
        d / dist2.sqrt()
    } else {
        NVec2::new(1.0, 0.0)
    }
}

/// Separate the pair along the contact normal, splitting the penetration
/// depth by the opposite body's mass fraction
///
/// After this, |x_a - x_b| = r_a + r_b up to floating tolerance
fn resolve_position(a: &mut Body, b: &mut Body) {
    let n = contact_normal(a, b);
    let depth = penetration_depth(a, b);
    if depth <= 0.0 {
        return;
    }
    let combined_mass = a.m + b.m;
    // each body is displaced by the other's share of the total mass, so
    // the heavier body yields less ground
    a.x -= n * depth * (b.m / combined_mass);
    b.x += n * depth * (a.m / combined_mass);
}

/// Resolve one colliding pair: de-penetrate, then exchange velocity along
/// the line of centers
pub fn resolve(a: &mut Body, b: &mut Body) {
    resolve_position(a, b);

    // aliases to make the formulas look like the common elastic collision
    // formulas, which makes cross checking them for mistakes easier
    let v1 = a.v;
    let v2 = b.v;
    let m1 = a.m;
    let m2 = b.m;

    // normal vector a -> b
    let vn = contact_normal(a, b);
    // tangent vector, perpendicular to vn
    let vt = NVec2::new(-vn.y, vn.x);

    // project both velocities onto the normal and the tangent
    let v1n = v1.dot(&vn);
    let v1t = v1.dot(&vt);
    let v2n = v2.dot(&vn);
    let v2t = v2.dot(&vt);

    // tangential components pass through a frictionless contact unchanged,
    // only the normal components exchange

    // one-dimensional elastic collision formula:
    // v1n' = (v1n (m1 - m2) + 2 m2 v2n) / (m1 + m2)
    // for m1 == m2 this reduces to swapping v1n and v2n
    let v1n_p = (v1n * (m1 - m2) + 2.0 * m2 * v2n) / (m1 + m2);
    let v2n_p = (v2n * (m2 - m1) + 2.0 * m1 * v1n) / (m1 + m2);

    // recombine the scalar components into vectors
    a.v = v1n_p * vn + v1t * vt;
    b.v = v2n_p * vn + v2t * vt;

    // a degenerate pair must not leak NaN into the next step
    a.sanitize_velocity();
    b.sanitize_velocity();
}
