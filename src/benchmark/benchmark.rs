use std::time::Instant;

use crate::simulation::dynamics::mechanical_energy;
use crate::simulation::params::{Parameters, PhysicalConstants};
use crate::simulation::states::AngularState;
use crate::simulation::trajectory::{generate, integrate_states};

/// Step sizes swept by both benchmarks, coarse to fine
const STEP_SIZES: [f64; 6] = [0.04, 0.02, 0.01, 0.005, 0.0025, 0.001];

/// Pendulum used by the benchmarks: equal rods, released high enough to be chaotic
fn make_constants() -> PhysicalConstants {
    PhysicalConstants {
        mass1: 2.0,
        mass2: 1.0,
        length1: 0.5,
        length2: 0.5,
    }
}

fn make_initial() -> AngularState {
    AngularState::at_rest(90f64.to_radians(), 120f64.to_radians())
}

/// Time a full 60 s generation (integration plus position mapping) per step size
pub fn bench_generate() {
    let constants = make_constants();
    let initial = make_initial();

    for dt in STEP_SIZES {
        let params = Parameters {
            duration: 60.0,
            dt,
            ..Parameters::default()
        };

        // Warm up
        let _ = generate(initial, &constants, &params);

        let t0 = Instant::now();
        let trajectory = generate(initial, &constants, &params);
        let elapsed = t0.elapsed().as_secs_f64();

        println!(
            "dt = {:7.4} s, steps = {:6}, generate = {:8.6} s, per step = {:8.3} us",
            dt,
            trajectory.len(),
            elapsed,
            elapsed * 1.0e6 / trajectory.len().max(1) as f64
        );
    }
}

/// Largest relative energy deviation over a 10 s run, per step size.
/// Paste output directly into a spreadsheet to graph
pub fn bench_energy_curve() {
    let constants = make_constants();
    let initial = make_initial();
    let e0 = mechanical_energy(&initial, &constants);

    println!("dt,steps,max_rel_energy_drift");

    for dt in STEP_SIZES {
        let (_, states) = integrate_states(initial, &constants, 10.0, dt);

        let max_drift = states
            .iter()
            .map(|s| ((mechanical_energy(s, &constants) - e0) / e0).abs())
            .fold(0.0, f64::max);

        println!("{},{},{:.3e}", dt, states.len(), max_drift);
    }
}
