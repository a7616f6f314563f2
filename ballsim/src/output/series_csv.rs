//! CSV export of recorded time series
//!
//! One file per body, one row per sample:
//! `step,time,x,y,vx,vy,ax,ay,angular_velocity`.
//! Plotting is left to whatever reads the files.

use std::collections::HashSet;
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};

use crate::simulation::recorder::BodySeries;
use crate::simulation::scenario::Scenario;

pub const HEADER: &str = "step,time,x,y,vx,vy,ax,ay,angular_velocity";

/// Write one body's series as CSV into `w`
pub fn write_series<W: Write>(w: &mut W, series: &BodySeries) -> std::io::Result<()> {
    writeln!(w, "{HEADER}")?;
    for s in series.samples() {
        writeln!(
            w,
            "{},{},{},{},{},{},{},{},{}",
            s.step,
            s.time,
            s.center.x,
            s.center.y,
            s.velocity.x,
            s.velocity.y,
            s.acceleration.x,
            s.acceleration.y,
            s.angular_velocity,
        )?;
    }
    Ok(())
}

/// File name for body `id` of system `system`
pub fn file_name(system: usize, id: &str) -> String {
    // ids come from user config, keep them path-safe
    let id: String = id
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() || c == '-' || c == '_' { c } else { '_' })
        .collect();
    format!("system_{system}_{id}.csv")
}

/// Export every body of every system in the scenario's output range
///
/// Creates `dir` if needed and returns the written paths. Fails before
/// writing anything when two ids of one system map to the same file name.
pub fn export_scenario(scenario: &Scenario, dir: &Path) -> Result<Vec<PathBuf>> {
    let mut names = HashSet::new();
    for (system_id, sim) in scenario.output_systems() {
        for series in sim.sink().iter() {
            let name = file_name(system_id, series.id());
            if !names.insert(name.clone()) {
                bail!("body id '{}' collides with another id as file name {name}", series.id());
            }
        }
    }

    fs::create_dir_all(dir)
        .with_context(|| format!("failed to create output directory {}", dir.display()))?;

    let mut written = Vec::new();
    for (system_id, sim) in scenario.output_systems() {
        for series in sim.sink().iter() {
            let path = dir.join(file_name(system_id, series.id()));
            let file = File::create(&path)
                .with_context(|| format!("failed to create {}", path.display()))?;
            let mut writer = BufWriter::new(file);
            write_series(&mut writer, series)
                .and_then(|_| writer.flush())
                .with_context(|| format!("failed to write {}", path.display()))?;
            written.push(path);
        }
    }
    Ok(written)
}
