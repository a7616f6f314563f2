//! Configuration types for loading simulation scenarios from YAML.
//!
//! A scenario consists of:
//!
//! - [`ParametersConfig`] – gravity, friction coefficients, time scale, contact mode
//! - [`RunConfig`]        – fixed step size and duration for batch replay
//! - [`RegionConfig`]     – optional bounding box (omit to skip border handling)
//! - [`EnsembleConfig`]   – optional set of shifted copies of the same system
//! - [`BodyConfig`]       – initial state for each body
//! - [`ScenarioConfig`]   – top-level wrapper
//!
//! # YAML format
//!
//! ```yaml
//! parameters:
//!   gravity: [0.0, -9.81]
//!   sliding_friction: 0.3
//!   rolling_friction: 0.15
//!   time_scale: 10.0
//!   border_contact: any_axis   # or last_axis
//!
//! run:
//!   dt: 0.016666666666667
//!   duration: 5.0
//!
//! region:
//!   left: -200.0
//!   right: 200.0
//!   top: 0.0
//!   bottom: 800.0
//!
//! ensemble:
//!   system_count: 4
//!   shift: 1.0e-8
//!   shift_body: 3
//!   output_start: 0
//!   output_end: 2
//!
//! bodies:
//!   - id: "0"
//!     center: [0.0, 185.0]
//!     velocity: [0.0, 0.0]
//!     restitution: 0.8
//!     radius: 5.0
//!     mass: 2.0
//! ```
//!
//! Everything except `bodies` has defaults. Values are only checked when the
//! config is turned into runtime types (see `scenario`).

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::simulation::errors::SimError;
use crate::simulation::params::{BorderContact, PhysicsParams};
use crate::simulation::states::{Body, BoundingRegion, NVec2};

/// Physical constants
#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct ParametersConfig {
    pub gravity: [f64; 2],
    pub sliding_friction: f64,
    pub rolling_friction: f64,
    pub time_scale: f64,
    pub border_contact: BorderContact,
}

impl Default for ParametersConfig {
    fn default() -> Self {
        Self {
            gravity: [0.0, -9.81],
            sliding_friction: 0.3,
            rolling_friction: 0.15,
            time_scale: 10.0,
            border_contact: BorderContact::AnyAxis,
        }
    }
}

impl ParametersConfig {
    pub fn to_params(&self) -> Result<PhysicsParams, SimError> {
        let params = PhysicsParams {
            gravity: NVec2::new(self.gravity[0], self.gravity[1]),
            sliding_friction: self.sliding_friction,
            rolling_friction: self.rolling_friction,
            time_scale: self.time_scale,
            border_contact: self.border_contact,
        };
        params.validate()?;
        Ok(params)
    }
}

/// Fixed-step replay settings
#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct RunConfig {
    pub dt: f64, // step handed to advance (before time scale)
    pub duration: f64, // total unscaled time to replay
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            dt: 1.0 / 60.0,
            duration: 5.0,
        }
    }
}

/// Upper bound on `ceil(duration / dt)` for one run
pub const MAX_STEPS: u64 = 1_000_000_000;

impl RunConfig {
    /// Number of steps covering `duration`, rounded up, at most [`MAX_STEPS`]
    pub fn step_count(&self) -> Result<u64, SimError> {
        if !self.dt.is_finite() || self.dt <= 0.0 {
            return Err(SimError::InvalidTimestep(self.dt));
        }
        if !self.duration.is_finite() || self.duration < 0.0 {
            return Err(SimError::InvalidParameter { name: "duration", value: self.duration });
        }
        let steps = (self.duration / self.dt).ceil();
        if steps > MAX_STEPS as f64 {
            return Err(SimError::InvalidParameter { name: "duration", value: self.duration });
        }
        Ok(steps as u64)
    }
}

/// Axis-aligned bounding box; `top` is the low-y edge
#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct RegionConfig {
    pub left: f64,
    pub right: f64,
    pub top: f64,
    pub bottom: f64,
}

impl RegionConfig {
    pub fn to_region(&self) -> Result<BoundingRegion, SimError> {
        BoundingRegion::new(self.left, self.right, self.top, self.bottom)
    }
}

/// Copies of the same system with one body nudged along x
#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct EnsembleConfig {
    pub system_count: usize, // number of systems
    pub shift: f64, // x offset per system index
    pub shift_body: Option<usize>, // body that gets shifted, defaults to the last one
    pub output_start: usize, // first system exported
    pub output_end: usize, // last system exported (inclusive)
}

impl Default for EnsembleConfig {
    fn default() -> Self {
        Self {
            system_count: 1,
            shift: 0.0,
            shift_body: None,
            output_start: 0,
            output_end: 0,
        }
    }
}

/// Initial state of one body
#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct BodyConfig {
    pub id: String,
    pub center: [f64; 2],
    #[serde(default)]
    pub velocity: [f64; 2],
    pub restitution: f64,
    pub radius: f64,
    pub mass: f64,
    #[serde(default)]
    pub angular_velocity: f64,
}

impl BodyConfig {
    pub fn to_body(&self) -> Result<Body, SimError> {
        Body::new(
            self.id.clone(),
            NVec2::new(self.center[0], self.center[1]),
            NVec2::new(self.velocity[0], self.velocity[1]),
            self.restitution,
            self.radius,
            self.mass,
        )?
        .with_angular_velocity(self.angular_velocity)
    }
}

/// Top-level scenario configuration loaded from YAML.
#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct ScenarioConfig {
    #[serde(default)]
    pub parameters: ParametersConfig,
    #[serde(default)]
    pub run: RunConfig,
    #[serde(default)]
    pub region: Option<RegionConfig>,
    #[serde(default)]
    pub ensemble: EnsembleConfig,
    pub bodies: Vec<BodyConfig>,
}

impl ScenarioConfig {
    pub fn from_yaml_str(text: &str) -> Result<Self> {
        serde_yaml::from_str(text).context("failed to parse scenario YAML")
    }

    pub fn from_path(path: &Path) -> Result<Self> {
        let file = File::open(path)
            .with_context(|| format!("failed to open scenario {}", path.display()))?;
        let reader = BufReader::new(file);
        serde_yaml::from_reader(reader)
            .with_context(|| format!("failed to parse scenario {}", path.display()))
    }
}
