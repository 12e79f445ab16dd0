//! Equations of motion for the double pendulum
//!
//! The two angular accelerations are coupled through a 2x2 linear system
//! (from the Lagrangian of two point masses on massless rods). It is solved
//! here in closed form:
//!
//! ```text
//! theta1'' + alpha1 * theta2'' = f1
//! alpha2 * theta1'' + theta2'' = f2
//! ```

use crate::simulation::params::{PhysicalConstants, G};
use crate::simulation::states::{AngularState, DerivativeSample};

/// Time derivative of `state` for the pendulum described by `c`.
///
/// Pure and allocation free. The determinant `denom = 1 - alpha1 * alpha2`
/// is not guarded: it equals `1 - M cos^2(diff)` with `M < 1`, so it only
/// degenerates in the limit of a vanishing first mass. Whatever
/// floating-point value results (including inf or NaN) is returned as is.
pub fn derivative(state: &AngularState, c: &PhysicalConstants) -> DerivativeSample {
    let m = c.mass2 / (c.mass1 + c.mass2);
    let diff = state.theta1 - state.theta2;
    let (sin_diff, cos_diff) = diff.sin_cos();

    let f1 = -(c.length2 / c.length1) * m * state.omega2.powi(2) * sin_diff
        - (G / c.length1) * state.theta1.sin();
    let f2 = (c.length1 / c.length2) * state.omega1.powi(2) * sin_diff
        - (G / c.length2) * state.theta2.sin();

    let alpha1 = (c.length2 / c.length1) * m * cos_diff;
    let alpha2 = (c.length1 / c.length2) * cos_diff;
    let denom = 1.0 - alpha1 * alpha2;

    DerivativeSample {
        dtheta1: state.omega1,
        dtheta2: state.omega2,
        d2theta1: (f1 - alpha1 * f2) / denom,
        d2theta2: (-alpha2 * f1 + f2) / denom,
    }
}

/// Total mechanical energy (J): kinetic plus gravitational potential,
/// with the pivot as the zero of potential.
pub fn mechanical_energy(state: &AngularState, c: &PhysicalConstants) -> f64 {
    let (l1, l2) = (c.length1, c.length2);
    let (w1, w2) = (state.omega1, state.omega2);

    // Bob 2 velocity squared: |v1 + v_rel|^2
    let v1_sq = l1 * l1 * w1 * w1;
    let v2_sq = v1_sq
        + l2 * l2 * w2 * w2
        + 2.0 * l1 * l2 * w1 * w2 * (state.theta1 - state.theta2).cos();
    let kinetic = 0.5 * c.mass1 * v1_sq + 0.5 * c.mass2 * v2_sq;

    // Heights are -y, with y = l cos(theta) measured downward
    let potential = -(c.mass1 + c.mass2) * G * l1 * state.theta1.cos()
        - c.mass2 * G * l2 * state.theta2.cos();

    kinetic + potential
}
