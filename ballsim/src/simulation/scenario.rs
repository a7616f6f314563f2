//! Build fully-initialized simulations from configuration
//!
//! Takes a `ScenarioConfig` (YAML-facing) and produces a `Scenario`: one or
//! more independent `Simulation`s built from the same body list, plus the
//! fixed-step replay settings.
//!
//! With `system_count > 1` the scenario is an ensemble: system `i` is a copy of
//! the base system with `shift_body` moved by `shift * i` along x, which shows
//! how quickly tiny perturbations of the initial state grow.

use std::ops::RangeInclusive;

use crate::configuration::config::{BodyConfig, ScenarioConfig};
use crate::simulation::engine::Simulation;
use crate::simulation::errors::{SimError, StepError};
use crate::simulation::states::Body;

pub struct Scenario {
    pub dt: f64, // step handed to every advance call
    pub steps: u64, // steps covering the configured duration
    systems: Vec<Simulation>,
    output: RangeInclusive<usize>, // systems selected for export
}

impl Scenario {
    pub fn build_scenario(cfg: &ScenarioConfig) -> Result<Self, SimError> {
        let params = cfg.parameters.to_params()?;
        let region = cfg.region.as_ref().map(|r| r.to_region()).transpose()?;
        let steps = cfg.run.step_count()?;

        // Bodies: map `BodyConfig` -> runtime `Body`
        let bodies = cfg
            .bodies
            .iter()
            .map(BodyConfig::to_body)
            .collect::<Result<Vec<Body>, SimError>>()?;

        let ens = &cfg.ensemble;
        if ens.system_count == 0 {
            return Err(SimError::InvalidEnsemble { reason: "system_count must be at least 1".into() });
        }
        if !ens.shift.is_finite() {
            return Err(SimError::InvalidParameter { name: "shift", value: ens.shift });
        }
        let shift_body = match ens.shift_body {
            Some(index) if index >= bodies.len() => {
                return Err(SimError::InvalidEnsemble {
                    reason: format!("shift_body {index} out of range for {} bodies", bodies.len()),
                });
            }
            Some(index) => Some(index),
            None => bodies.len().checked_sub(1),
        };
        if ens.output_start >= ens.system_count || ens.output_start > ens.output_end {
            return Err(SimError::InvalidEnsemble {
                reason: format!(
                    "output range {}..={} does not select any of {} systems",
                    ens.output_start, ens.output_end, ens.system_count
                ),
            });
        }
        let output = ens.output_start..=ens.output_end.min(ens.system_count - 1);

        let mut systems = Vec::with_capacity(ens.system_count);
        for i in 0..ens.system_count {
            let mut copy = bodies.clone();
            if let Some(index) = shift_body {
                copy[index].center.x += ens.shift * i as f64;
            }
            systems.push(Simulation::new(copy, region, params.clone())?);
        }

        Ok(Self {
            dt: cfg.run.dt,
            steps,
            systems,
            output,
        })
    }

    /// Advance every system by one step
    pub fn advance(&mut self) -> Result<(), StepError> {
        for sim in &mut self.systems {
            sim.advance(self.dt)?;
        }
        Ok(())
    }

    /// Replay the configured number of steps on every system
    pub fn run(&mut self) -> Result<u64, StepError> {
        for sim in &mut self.systems {
            sim.advance_n(self.dt, self.steps)?;
        }
        Ok(self.steps)
    }

    pub fn systems(&self) -> &[Simulation] {
        &self.systems
    }

    pub fn system(&self, index: usize) -> Option<&Simulation> {
        self.systems.get(index)
    }

    pub fn output_range(&self) -> RangeInclusive<usize> {
        self.output.clone()
    }

    /// `(index, system)` for every system in the export range
    pub fn output_systems(&self) -> impl Iterator<Item = (usize, &Simulation)> {
        self.output.clone().filter_map(move |i| self.systems.get(i).map(|s| (i, s)))
    }
}
