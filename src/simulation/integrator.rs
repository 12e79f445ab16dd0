//! Fixed-step time integrator for the double pendulum
//!
//! Classical fourth-order Runge–Kutta over the state vector
//! `(theta1, theta2, omega1, omega2)`, driven by `dynamics::derivative`

use super::dynamics::derivative;
use super::params::PhysicalConstants;
use super::states::AngularState;

/// Advance `state` by one step of size `dt` using RK4.
/// Four derivative evaluations per step; each stage state is a fresh value
/// built from `state` and the previous stage, so angles and angular
/// velocities are both carried through every stage.
pub fn rk4_step(state: AngularState, constants: &PhysicalConstants, dt: f64) -> AngularState {
    let half_dt = 0.5 * dt; // half step dt/2

    // k1 = f(y_n)
    let k1 = derivative(&state, constants);

    // k2 = f(y_n + dt/2 * k1)
    let k2 = derivative(&state.advanced_by(&k1, half_dt), constants);

    // k3 = f(y_n + dt/2 * k2)
    let k3 = derivative(&state.advanced_by(&k2, half_dt), constants);

    // k4 = f(y_n + dt * k3)
    let k4 = derivative(&state.advanced_by(&k3, dt), constants);

    // y_n+1 = y_n + dt/6 * (k1 + 2 k2 + 2 k3 + k4)
    let w = dt / 6.0;
    AngularState {
        theta1: state.theta1 + w * (k1.dtheta1 + 2.0 * k2.dtheta1 + 2.0 * k3.dtheta1 + k4.dtheta1),
        theta2: state.theta2 + w * (k1.dtheta2 + 2.0 * k2.dtheta2 + 2.0 * k3.dtheta2 + k4.dtheta2),
        omega1: state.omega1 + w * (k1.d2theta1 + 2.0 * k2.d2theta1 + 2.0 * k3.d2theta1 + k4.d2theta1),
        omega2: state.omega2 + w * (k1.d2theta2 + 2.0 * k2.d2theta2 + 2.0 * k3.d2theta2 + k4.d2theta2),
    }
}
