pub mod simulation;
pub mod configuration;
pub mod export;
pub mod benchmark;
#[cfg(feature = "viewer")]
pub mod visualization;

pub use simulation::states::{AngularState, DerivativeSample, CartesianPoint, BobPositions, NVec2};
pub use simulation::params::{PhysicalConstants, Parameters, G};
pub use simulation::dynamics::{derivative, mechanical_energy};
pub use simulation::integrator::rk4_step;
pub use simulation::transform::to_cartesian;
pub use simulation::trajectory::{Trajectory, generate, integrate_states, positions_for, total_steps};
pub use simulation::scenario::Scenario;

pub use configuration::config::{PendulumConfig, ParametersConfig, DisplayConfig, ScenarioConfig, load_scenario_config};
pub use configuration::error::ConfigError;
pub use configuration::prompt::prompt_initial_conditions;

pub use export::csv::{write_trajectory_csv, save_trajectory_csv};

#[cfg(feature = "viewer")]
pub use visualization::dpsim_vis2d::run_2d;

pub use benchmark::benchmark::{bench_generate, bench_energy_curve};
