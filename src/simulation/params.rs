//! Physical constants and numerical parameters for a simulation run
//!
//! `PhysicalConstants` holds the pendulum itself (masses and rod lengths),
//! `Parameters` holds the run settings:
//! - total simulated duration and fixed step size,
//! - pixel scale applied when converting angles to positions

/// Standard gravitational acceleration (m/s^2)
pub const G: f64 = 9.8;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PhysicalConstants {
    pub mass1: f64,   // mass at the end of rod 1 (kg)
    pub mass2: f64,   // mass at the end of rod 2 (kg)
    pub length1: f64, // length of rod 1 (m)
    pub length2: f64, // length of rod 2 (m)
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Parameters {
    pub duration: f64, // simulated time (s)
    pub dt: f64,       // fixed step size (s)
    pub scale: f64,    // pixels per meter
}

impl Default for Parameters {
    fn default() -> Self {
        Self {
            duration: 60.0,
            dt: 0.01,
            scale: 100.0,
        }
    }
}
