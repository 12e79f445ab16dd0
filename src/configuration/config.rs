//! Configuration types for loading pendulum scenarios from YAML.
//!
//! A pendulum scenario file is split into three sections plus a wrapper,
//! each one a plain `serde` struct:
//!
//! - [`PendulumConfig`]   – masses, rod lengths and release angles, in user units
//! - [`ParametersConfig`] – duration, step size and pixel scale
//! - [`DisplayConfig`]    – playback window settings
//! - [`ScenarioConfig`]   – top-level wrapper used to load a scenario from YAML
//!
//! # YAML format
//!
//! ```yaml
//! pendulum:
//!   mass1: 2.0        # kg, 0 < m <= 10
//!   mass2: 1.0
//!   length1: 50.0     # cm, 10 <= l <= 100
//!   length2: 50.0
//!   angle1: 120.0     # degrees from the downward vertical, 0 <= a <= 180
//!   angle2: 150.0
//!
//! parameters:         # optional, defaults shown
//!   duration: 60.0    # simulated seconds
//!   dt: 0.01          # fixed step size
//!   scale: 100.0      # pixels per meter
//!
//! display:            # optional, defaults shown
//!   width: 640
//!   height: 480
//!   frame_rate: 60.0
//!   pivot_size: 10.0
//! ```
//!
//! The simulation maps this into its runtime types (meters, radians) in
//! `Scenario::build_scenario`.

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use serde::Deserialize;

use super::error::ConfigError;

/// Largest accepted `round(duration / dt)`; every step keeps a state, a time
/// and two positions in memory
pub const MAX_STEPS: usize = 5_000_000;

/// Initial conditions as a user states them
#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct PendulumConfig {
    pub mass1: f64,   // kg
    pub mass2: f64,   // kg
    pub length1: f64, // cm
    pub length2: f64, // cm
    pub angle1: f64,  // degrees
    pub angle2: f64,  // degrees
}

impl PendulumConfig {
    /// Range checks for the six initial conditions
    pub fn validate(&self) -> Result<(), ConfigError> {
        for m in [self.mass1, self.mass2] {
            if !(m > 0.0 && m <= 10.0) {
                return Err(ConfigError::MassOutOfRange(m));
            }
        }
        for l in [self.length1, self.length2] {
            if !(10.0..=100.0).contains(&l) {
                return Err(ConfigError::LengthOutOfRange(l));
            }
        }
        for a in [self.angle1, self.angle2] {
            if !(0.0..=180.0).contains(&a) {
                return Err(ConfigError::AngleOutOfRange(a));
            }
        }
        Ok(())
    }
}

/// Numerical settings for a run
#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct ParametersConfig {
    pub duration: f64, // simulated seconds
    pub dt: f64,       // step size
    pub scale: f64,    // pixels per meter
}

impl Default for ParametersConfig {
    fn default() -> Self {
        Self {
            duration: 60.0,
            dt: 0.01,
            scale: 100.0,
        }
    }
}

impl ParametersConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.dt.is_finite() && self.dt > 0.0) {
            return Err(ConfigError::InvalidTimeStep(self.dt));
        }
        if !(self.duration.is_finite() && self.duration >= 0.0) {
            return Err(ConfigError::InvalidDuration(self.duration));
        }
        if !(self.scale.is_finite() && self.scale > 0.0) {
            return Err(ConfigError::InvalidScale(self.scale));
        }
        let steps = (self.duration / self.dt).round();
        if steps > MAX_STEPS as f64 {
            return Err(ConfigError::TooManySteps(steps));
        }
        Ok(())
    }
}

/// Playback window settings, only read by the viewer
#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct DisplayConfig {
    pub width: u32,      // window width in pixels
    pub height: u32,     // window height in pixels
    pub frame_rate: f64, // trajectory steps shown per second
    pub pivot_size: f64, // side of the pivot square in pixels
}

impl DisplayConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.width == 0 || self.height == 0 {
            return Err(ConfigError::InvalidWindowSize(self.width, self.height));
        }
        if !(self.frame_rate.is_finite() && self.frame_rate > 0.0) {
            return Err(ConfigError::InvalidFrameRate(self.frame_rate));
        }
        if !(self.pivot_size.is_finite() && self.pivot_size > 0.0) {
            return Err(ConfigError::InvalidPivotSize(self.pivot_size));
        }
        Ok(())
    }
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            width: 640,
            height: 480,
            frame_rate: 60.0,
            pivot_size: 10.0,
        }
    }
}

/// Top-level scenario configuration loaded from YAML.
#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct ScenarioConfig {
    pub pendulum: PendulumConfig, // Initial conditions
    #[serde(default)]
    pub parameters: ParametersConfig, // Duration, step size, scale
    #[serde(default)]
    pub display: DisplayConfig, // Viewer settings
}

impl ScenarioConfig {
    /// Scenario with default parameters and display around the given pendulum
    pub fn from_pendulum(pendulum: PendulumConfig) -> Self {
        Self {
            pendulum,
            parameters: ParametersConfig::default(),
            display: DisplayConfig::default(),
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        self.pendulum.validate()?;
        self.parameters.validate()?;
        self.display.validate()
    }
}

/// Read and parse a scenario file. Validation is left to `Scenario::build_scenario`.
pub fn load_scenario_config(path: &Path) -> Result<ScenarioConfig, ConfigError> {
    let file = File::open(path)?;
    let reader = BufReader::new(file);
    let cfg: ScenarioConfig = serde_yaml::from_reader(reader)?;
    Ok(cfg)
}
