//! The stepping engine
//!
//! `Simulation` owns the bodies, the optional bounding region, the physics
//! parameters and a sample sink. `advance(dt)` is the only way state moves
//! forward: tick every body in order, then resolve every pair `(i, j), i < j`
//! in ascending order so identical inputs give identical trajectories.

use std::collections::HashSet;

use super::collision::{pair_mut, resolve};
use super::errors::{SimError, StepError};
use super::forces::AccelSet;
use super::integrator::tick;
use super::params::PhysicsParams;
use super::recorder::{BodySeries, SampleSink, TimeSeries};
use super::states::{Body, BoundingRegion, NVec2};

pub struct Simulation<S: SampleSink = TimeSeries> {
    bodies: Vec<Body>, // ordered, fixed for the run
    region: Option<BoundingRegion>, // None = no border handling
    params: PhysicsParams,
    forces: AccelSet, // built from params
    time: f64, // accumulated scaled time
    steps: u64, // completed advance calls
    sink: S,
}

impl Simulation<TimeSeries> {
    /// Simulation recording every sample in memory
    pub fn new(
        bodies: Vec<Body>,
        region: Option<BoundingRegion>,
        params: PhysicsParams,
    ) -> Result<Self, SimError> {
        Self::with_sink(bodies, region, params, TimeSeries::new())
    }

    /// Recorded history of the body at `index`
    pub fn series(&self, index: usize) -> Option<&BodySeries> {
        self.sink.series(index)
    }
}

impl<S: SampleSink> Simulation<S> {
    /// Simulation streaming samples into `sink`
    ///
    /// # Errors
    /// Invalid parameters, a body with non-finite state, or duplicate ids.
    pub fn with_sink(
        bodies: Vec<Body>,
        region: Option<BoundingRegion>,
        params: PhysicsParams,
        sink: S,
    ) -> Result<Self, SimError> {
        params.validate()?;

        let mut seen = HashSet::new();
        for body in &bodies {
            if !body.is_state_finite() {
                return Err(SimError::NonFiniteState { id: body.id().to_owned() });
            }
            if !seen.insert(body.id()) {
                return Err(SimError::DuplicateBodyId(body.id().to_owned()));
            }
        }

        let forces = AccelSet::from_params(&params);

        Ok(Self {
            bodies,
            region,
            params,
            forces,
            time: 0.0,
            steps: 0,
            sink,
        })
    }

    /// Advance the whole system by one step of `dt` (scaled by `time_scale`)
    ///
    /// 1. validate `dt` (raw and scaled) and every body's state, before anything is mutated
    /// 2. tick each body (integrate, border, record)
    /// 3. resolve all unordered pairs in ascending index order
    pub fn advance(&mut self, dt: f64) -> Result<(), StepError> {
        if !dt.is_finite() || dt < 0.0 {
            return Err(StepError::InvalidTimestep(dt));
        }
        // a finite dt can still overflow once scaled
        let scaled = dt * self.params.time_scale;
        if !scaled.is_finite() {
            return Err(StepError::InvalidTimestep(dt));
        }
        if let Some(index) = self.bodies.iter().position(|b| !b.is_state_finite()) {
            return Err(StepError::NonFiniteState { index });
        }

        let dt = scaled;
        self.steps += 1;
        self.time += dt;

        let region = self.region.as_ref();
        for (index, body) in self.bodies.iter_mut().enumerate() {
            let sample = tick(
                body,
                &self.forces,
                dt,
                region,
                self.params.border_contact,
                self.steps,
                self.time,
            );
            self.sink.record(index, body.id(), &sample);
        }

        let n = self.bodies.len();
        for i in 0..n {
            for j in (i + 1)..n {
                let (a, b) = pair_mut(&mut self.bodies, i, j);
                resolve(a, b);
            }
        }

        Ok(())
    }

    /// Fixed-step batch replay: `steps` calls to [`Self::advance`]
    pub fn advance_n(&mut self, dt: f64, steps: u64) -> Result<(), StepError> {
        for _ in 0..steps {
            self.advance(dt)?;
        }
        Ok(())
    }

    pub fn bodies(&self) -> &[Body] {
        &self.bodies
    }

    pub fn body(&self, index: usize) -> Option<&Body> {
        self.bodies.get(index)
    }

    pub fn body_by_id(&self, id: &str) -> Option<&Body> {
        self.bodies.iter().find(|b| b.id() == id)
    }

    pub fn region(&self) -> Option<&BoundingRegion> {
        self.region.as_ref()
    }

    pub fn params(&self) -> &PhysicsParams {
        &self.params
    }

    /// Simulated (time-scaled) time since the start of the run
    pub fn time(&self) -> f64 {
        self.time
    }

    pub fn steps(&self) -> u64 {
        self.steps
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn into_sink(self) -> S {
        self.sink
    }

    /// Total linear momentum `sum(m v)`
    pub fn momentum(&self) -> NVec2 {
        self.bodies.iter().map(|b| b.velocity * b.mass()).sum()
    }

    /// Total kinetic energy `sum(m v^2 / 2)`
    pub fn kinetic_energy(&self) -> f64 {
        self.bodies
            .iter()
            .map(|b| 0.5 * b.mass() * b.velocity.norm_squared())
            .sum()
    }
}
