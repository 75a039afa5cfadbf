//! Central attraction field for the circle sandbox
//!
//! A single togglable force: every body is pulled toward a movable target
//! point with a fixed impulse magnitude scaled by the body's inverse mass,
//! so lighter bodies accelerate harder (F = m a). The target is owned here
//! but repositioned between steps by the caller (mouse tracking in the
//! original sandbox).

use super::states::{NVec2, System};

/// Togglable pull toward `target`
///
/// When enabled, each pipeline pass adds
/// `normalize(target - x) * strength / m` to every body's velocity.
/// When disabled it is a no-op
#[derive(Debug, Clone)]
pub struct ForceField {
    pub strength: f64, // impulse magnitude before the mass division
    pub target: NVec2, // attraction point, movable between steps
    pub enabled: bool, // off -> apply() does nothing
}

impl ForceField {
    pub fn new(strength: f64, target: NVec2) -> Self {
        Self {
            strength,
            target,
            enabled: false,
        }
    }

    /// Pull every body toward the target
    ///
    /// A body sitting exactly on the target has no defined pull direction
    /// and is skipped for that pass rather than fed a NaN
    pub fn apply(&self, sys: &mut System) {
        if !self.enabled {
            return;
        }
        for b in sys.bodies.iter_mut() {
            let d = self.target - b.x;
            let dist2 = d.norm_squared();
            if dist2 > 0.0 {
                b.v += d / dist2.sqrt() * self.strength / b.m;
            }
        }
    }
}
