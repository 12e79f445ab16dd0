//! Core state types for the double pendulum.
//!
//! - `AngularState`     angles and angular velocities of both rods
//! - `DerivativeSample` time derivative of an `AngularState`
//! - `NVec2`            2D point in pixel-scaled units
//! - `BobPositions`     absolute positions of both bobs for one step
//!
//! All of them are `Copy` value types: integrator stages build new values
//! instead of mutating shared ones.

use nalgebra::Vector2;
pub type NVec2 = Vector2<f64>;

/// Cartesian point produced by the coordinate transform.
pub type CartesianPoint = NVec2;

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct AngularState {
    pub theta1: f64, // angle of rod 1 from the downward vertical (rad)
    pub theta2: f64, // angle of rod 2 from the downward vertical (rad)
    pub omega1: f64, // angular velocity of rod 1 (rad/s)
    pub omega2: f64, // angular velocity of rod 2 (rad/s)
}

impl AngularState {
    /// Released from rest at the given angles
    pub fn at_rest(theta1: f64, theta2: f64) -> Self {
        Self {
            theta1,
            theta2,
            omega1: 0.0,
            omega2: 0.0,
        }
    }

    /// `self + h * k`, element-wise over `(theta1, theta2, omega1, omega2)`
    pub fn advanced_by(&self, k: &DerivativeSample, h: f64) -> Self {
        Self {
            theta1: self.theta1 + h * k.dtheta1,
            theta2: self.theta2 + h * k.dtheta2,
            omega1: self.omega1 + h * k.d2theta1,
            omega2: self.omega2 + h * k.d2theta2,
        }
    }

    pub fn is_finite(&self) -> bool {
        self.theta1.is_finite()
            && self.theta2.is_finite()
            && self.omega1.is_finite()
            && self.omega2.is_finite()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct DerivativeSample {
    pub dtheta1: f64,  // d(theta1)/dt
    pub dtheta2: f64,  // d(theta2)/dt
    pub d2theta1: f64, // d2(theta1)/dt2
    pub d2theta2: f64, // d2(theta2)/dt2
}

/// Absolute positions of both bobs relative to the pivot.
/// `y` grows downward, so a hanging pendulum has positive `y`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BobPositions {
    pub bob1: NVec2,
    pub bob2: NVec2,
}
