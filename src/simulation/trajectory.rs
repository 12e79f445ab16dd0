//! Batch trajectory generation
//!
//! Runs the integrator across the whole simulated duration up front, then
//! maps every recorded state to chained bob positions for playback.

use log::{debug, info};

use super::integrator::rk4_step;
use super::params::{Parameters, PhysicalConstants};
use super::states::{AngularState, BobPositions};
use super::transform::to_cartesian;

/// Precomputed run, indexed by step `0..len()`
#[derive(Debug, Clone, PartialEq)]
pub struct Trajectory {
    pub times: Vec<f64>,              // accumulated simulation time per step
    pub states: Vec<AngularState>,    // state per step, step 0 is the initial state
    pub positions: Vec<BobPositions>, // chained bob positions per step
}

impl Trajectory {
    pub fn len(&self) -> usize {
        self.states.len()
    }

    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }

    /// `(theta1, theta2)` per step
    pub fn angles(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.states.iter().map(|s| (s.theta1, s.theta2))
    }

    /// Index of the first step holding a NaN or infinite state
    pub fn first_non_finite(&self) -> Option<usize> {
        self.states.iter().position(|s| !s.is_finite())
    }
}

/// Number of recorded steps for a run: `round(duration / dt)`
pub fn total_steps(duration: f64, dt: f64) -> usize {
    // negative or NaN ratios saturate to zero
    (duration / dt).round() as usize
}

/// Integrate from `initial` and record `round(duration / dt)` states.
/// Returns the states together with the accumulated time of each one.
pub fn integrate_states(
    initial: AngularState,
    constants: &PhysicalConstants,
    duration: f64,
    dt: f64,
) -> (Vec<f64>, Vec<AngularState>) {
    let n = total_steps(duration, dt);
    let mut times = Vec::with_capacity(n);
    let mut states = Vec::with_capacity(n);
    if n == 0 {
        return (times, states);
    }

    let mut state = initial;
    let mut t = 0.0;
    times.push(t);
    states.push(state);

    for _ in 1..n {
        state = rk4_step(state, constants, dt);
        t += dt; // accumulated, not recomputed as i * dt
        times.push(t);
        states.push(state);
    }

    debug!(
        "integrated {} steps, accumulated time {:.12} s (i * dt gives {:.12} s)",
        n,
        t,
        (n - 1) as f64 * dt
    );

    (times, states)
}

/// Chained bob positions for each state at `scale` pixels per meter.
/// Bob 1 hangs from the pivot, bob 2 hangs from bob 1.
pub fn positions_for(
    states: &[AngularState],
    constants: &PhysicalConstants,
    scale: f64,
) -> Vec<BobPositions> {
    let l1 = scale * constants.length1;
    let l2 = scale * constants.length2;

    states
        .iter()
        .map(|s| {
            let bob1 = to_cartesian(s.theta1, l1);
            let bob2 = bob1 + to_cartesian(s.theta2, l2);
            BobPositions { bob1, bob2 }
        })
        .collect()
}

/// Generate the full trajectory for one run
pub fn generate(
    initial: AngularState,
    constants: &PhysicalConstants,
    params: &Parameters,
) -> Trajectory {
    info!(
        "generating trajectory: duration = {} s, dt = {} s, {} steps",
        params.duration,
        params.dt,
        total_steps(params.duration, params.dt)
    );

    let (times, states) = integrate_states(initial, constants, params.duration, params.dt);
    let positions = positions_for(&states, constants, params.scale);

    Trajectory {
        times,
        states,
        positions,
    }
}
