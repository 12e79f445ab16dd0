//! Build a fully-initialized simulation run from configuration
//!
//! Takes a `ScenarioConfig` (YAML- or prompt-facing, user units) and produces
//! the runtime bundle `Scenario` containing:
//! - physical constants in SI units (`PhysicalConstants`)
//! - the initial state, released from rest (`AngularState`)
//! - numerical parameters (`Parameters`)
//! - display settings, passed through to the viewer

use log::info;

use crate::configuration::config::{DisplayConfig, ScenarioConfig};
use crate::configuration::error::ConfigError;
use crate::simulation::params::{Parameters, PhysicalConstants};
use crate::simulation::states::AngularState;
use crate::simulation::trajectory::{generate, Trajectory};

/// Runtime bundle for one simulation run
#[derive(Debug, Clone, PartialEq)]
pub struct Scenario {
    pub constants: PhysicalConstants,
    pub initial: AngularState,
    pub parameters: Parameters,
    pub display: DisplayConfig,
}

impl Scenario {
    /// Validate `cfg` and convert it to runtime units (cm -> m, degrees -> radians)
    pub fn build_scenario(cfg: ScenarioConfig) -> Result<Self, ConfigError> {
        cfg.validate()?;

        let p = cfg.pendulum;
        let constants = PhysicalConstants {
            mass1: p.mass1,
            mass2: p.mass2,
            length1: p.length1 / 100.0,
            length2: p.length2 / 100.0,
        };

        // Both rods start at rest
        let initial = AngularState::at_rest(p.angle1.to_radians(), p.angle2.to_radians());

        let parameters = Parameters {
            duration: cfg.parameters.duration,
            dt: cfg.parameters.dt,
            scale: cfg.parameters.scale,
        };

        info!(
            "scenario: m1 = {} kg, m2 = {} kg, l1 = {} m, l2 = {} m, theta1 = {:.6} rad, theta2 = {:.6} rad",
            constants.mass1,
            constants.mass2,
            constants.length1,
            constants.length2,
            initial.theta1,
            initial.theta2
        );

        Ok(Self {
            constants,
            initial,
            parameters,
            display: cfg.display,
        })
    }

    /// Generate the whole trajectory for this scenario
    pub fn run(&self) -> Trajectory {
        generate(self.initial, &self.constants, &self.parameters)
    }
}
