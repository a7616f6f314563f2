use std::time::Instant;

use crate::simulation::collision::{pair_mut, resolve};
use crate::simulation::engine::Simulation;
use crate::simulation::params::PhysicsParams;
use crate::simulation::recorder::NullSink;
use crate::simulation::states::{Body, BoundingRegion, NVec2};

/// Deterministic body layout inside a 1000 x 1000 box, no rand needed
fn build_bodies(n: usize) -> Vec<Body> {
    (0..n)
        .filter_map(|i| {
            let i_f = i as f64;
            let center = NVec2::new(
                (i_f * 0.37).sin() * 450.0,
                500.0 + (i_f * 0.13).cos() * 450.0,
            );
            let velocity = NVec2::new((i_f * 0.07).sin() * 20.0, (i_f * 0.11).cos() * 20.0);
            Body::new(i.to_string(), center, velocity, 0.8, 4.0, 1.0 + (i % 5) as f64).ok()
        })
        .collect()
}

pub fn bench_advance() {
    // Different system sizes to test
    let ns = [8, 16, 32, 64, 128, 256, 512];
    let steps = 200;
    let dt = 1.0 / 60.0;

    for n in ns {
        let region = BoundingRegion::new(-500.0, 500.0, 0.0, 1000.0).ok();
        let sim = Simulation::with_sink(build_bodies(n), region, PhysicsParams::default(), NullSink);
        let mut sim = match sim {
            Ok(sim) => sim,
            Err(e) => {
                println!("N = {n:5}, setup failed: {e}");
                continue;
            }
        };

        // Warm up
        if let Err(e) = sim.advance(dt) {
            println!("N = {n:5}, warm-up failed: {e}");
            continue;
        }

        let t0 = Instant::now();
        if let Err(e) = sim.advance_n(dt, steps) {
            println!("N = {n:5}, step failed: {e}");
            continue;
        }
        let elapsed = t0.elapsed().as_secs_f64();

        println!(
            "N = {n:5}, {steps} steps = {:8.6} s, per step = {:10.3} us",
            elapsed,
            elapsed / steps as f64 * 1e6
        );
    }
}

/// Time the all-pairs collision pass alone
pub fn bench_collisions() {
    let ns = [64, 128, 256, 512, 1024];

    for n in ns {
        let mut bodies = build_bodies(n);

        let t0 = Instant::now();
        let mut contacts = 0usize;
        for i in 0..n {
            for j in (i + 1)..n {
                let (a, b) = pair_mut(&mut bodies, i, j);
                if resolve(a, b) {
                    contacts += 1;
                }
            }
        }
        let elapsed = t0.elapsed().as_secs_f64();

        println!("N = {n:5}, pairs = {:8}, contacts = {contacts:5}, pass = {:8.6} s", n * (n - 1) / 2, elapsed);
    }
}
