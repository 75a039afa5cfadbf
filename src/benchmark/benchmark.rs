use std::time::Instant;
use crate::simulation::boundary::Bounds;
use crate::simulation::collision;
use crate::simulation::engine::Simulation;
use crate::simulation::params::Parameters;
use crate::simulation::states::{Body, NVec2};

/// Deterministic synthetic scene: `n` bodies strewn over the rectangle on
/// trig curves, no rand needed
fn scatter_bodies(n: usize, bounds: &Bounds) -> Vec<Body> {
    let mut bodies = Vec::with_capacity(n);
    for i in 0..n {
        let i_f = i as f64;
        let x = NVec2::new(
            (0.5 + 0.45 * (i_f * 0.37).sin()) * bounds.width,
            (0.5 + 0.45 * (i_f * 0.13).cos()) * bounds.height,
        );
        let v = NVec2::new((i_f * 0.07).sin() * 50.0, (i_f * 0.11).cos() * 50.0);
        bodies.push(Body::new(x, v, 10.0));
    }
    bodies
}

/// Time the raw O(n^2) overlap sweep across system sizes
pub fn bench_collision_sweep() {
    // Different system sizes to test
    let ns = [200, 400, 800, 1600, 3200, 6400];
    let bounds = Bounds {
        width: 1280.0,
        height: 720.0,
    };

    for n in ns {
        let bodies = scatter_bodies(n, &bounds);

        // Warm up
        let mut hits = 0usize;
        for i in 0..n {
            for j in (i + 1)..n {
                if collision::overlaps(&bodies[i], &bodies[j], 0.01) {
                    hits += 1;
                }
            }
        }

        let t0 = Instant::now();
        let mut hits_timed = 0usize;
        for i in 0..n {
            for j in (i + 1)..n {
                if collision::overlaps(&bodies[i], &bodies[j], 0.01) {
                    hits_timed += 1;
                }
            }
        }
        let dt_sweep = t0.elapsed().as_secs_f64();

        println!(
            "N = {n:5}, sweep = {:8.6} s, overlapping pairs = {} ({} warm)",
            dt_sweep, hits_timed, hits
        );
    }
}

/// Time full `step` calls (field + collisions + walls + integration)
/// across system sizes
pub fn bench_step() {
    let ns = [200, 400, 800, 1600, 3200, 6400];
    let steps = 10; // steps per size (tune as needed)
    let h = 1.0 / 60.0;

    for n in ns {
        let bounds = Bounds {
            width: 1280.0,
            height: 720.0,
        };
        let bodies = scatter_bodies(n, &bounds);
        let mut sim = Simulation::new(bounds, Parameters::default(), bodies);
        sim.set_field_enabled(true);

        // Warm up
        sim.step(h);

        let t0 = Instant::now();
        for _ in 0..steps {
            sim.step(h);
        }
        let per_step = t0.elapsed().as_secs_f64() / steps as f64;

        println!("N = {n:5}, step = {:8.6} s", per_step);
    }
}
