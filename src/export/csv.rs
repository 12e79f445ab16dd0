//! CSV export of a generated trajectory

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use log::info;

use crate::simulation::trajectory::Trajectory;

const HEADER: &str = "step,time,theta1,theta2,omega1,omega2,x1,y1,x2,y2";

/// Write the header and one row per step
pub fn write_trajectory_csv<W: Write>(writer: &mut W, trajectory: &Trajectory) -> std::io::Result<()> {
    writeln!(writer, "{HEADER}")?;

    let rows = trajectory
        .times
        .iter()
        .zip(&trajectory.states)
        .zip(&trajectory.positions)
        .enumerate();

    for (step, ((t, s), p)) in rows {
        writeln!(
            writer,
            "{},{},{},{},{},{},{},{},{},{}",
            step, t, s.theta1, s.theta2, s.omega1, s.omega2, p.bob1.x, p.bob1.y, p.bob2.x, p.bob2.y
        )?;
    }
    Ok(())
}

/// Create `path` and write the trajectory to it
pub fn save_trajectory_csv(path: &Path, trajectory: &Trajectory) -> std::io::Result<()> {
    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);
    write_trajectory_csv(&mut writer, trajectory)?;
    writer.flush()?;

    info!("wrote {} steps to {}", trajectory.len(), path.display());
    Ok(())
}
