use dpsim::{load_scenario_config, prompt_initial_conditions, save_trajectory_csv};
use dpsim::{bench_energy_curve, bench_generate};
use dpsim::{Scenario, ScenarioConfig, Trajectory};

use anyhow::{Context, Result};
use clap::Parser;
use log::{info, warn};

use std::io;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(about = "Double pendulum simulator")]
struct Args {
    /// Scenario YAML, relative names are looked up in `scenarios/`.
    /// Prompts for initial conditions when omitted
    #[arg(short, long)]
    file_name: Option<String>,

    /// Write the generated trajectory to this CSV file
    #[arg(long)]
    csv: Option<PathBuf>,

    /// Do not open the playback window
    #[arg(long)]
    headless: bool,

    /// Run the integrator benchmarks and exit
    #[arg(long)]
    bench: bool,
}

// load here to keep main clean
fn load_scenario(args: &Args) -> Result<ScenarioConfig> {
    match &args.file_name {
        Some(file_name) => {
            let config_path = PathBuf::from(env!("CARGO_MANIFEST_DIR"))
                .join("scenarios")
                .join(file_name);
            info!("loading scenario from {}", config_path.display());
            load_scenario_config(&config_path)
                .with_context(|| format!("failed to load scenario {}", config_path.display()))
        }
        None => {
            let stdin = io::stdin();
            let pendulum = prompt_initial_conditions(&mut stdin.lock(), &mut io::stdout())
                .context("failed to read initial conditions")?;
            Ok(ScenarioConfig::from_pendulum(pendulum))
        }
    }
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();

    if args.bench {
        bench_generate();
        bench_energy_curve();
        return Ok(());
    }

    let scenario_cfg = load_scenario(&args)?;
    let scenario = Scenario::build_scenario(scenario_cfg).context("invalid scenario")?;

    let trajectory = scenario.run();
    if let Some(step) = trajectory.first_non_finite() {
        warn!("trajectory holds non-finite values from step {step} on");
    }

    if let Some(path) = &args.csv {
        save_trajectory_csv(path, &trajectory)
            .with_context(|| format!("failed to write {}", path.display()))?;
    }

    if let Some(last) = trajectory.positions.last() {
        info!(
            "final positions: bob1 = ({:.3}, {:.3}), bob2 = ({:.3}, {:.3})",
            last.bob1.x, last.bob1.y, last.bob2.x, last.bob2.y
        );
    }

    if !args.headless {
        play(scenario, trajectory);
    }

    Ok(())
}

#[cfg(feature = "viewer")]
fn play(scenario: Scenario, trajectory: Trajectory) {
    dpsim::run_2d(scenario, trajectory);
}

#[cfg(not(feature = "viewer"))]
fn play(_scenario: Scenario, _trajectory: Trajectory) {
    info!("built without the `viewer` feature, skipping playback");
}
