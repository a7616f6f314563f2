//! Error types for building and stepping a simulation
//!
//! - [`SimError`]  – rejected construction or configuration input
//! - [`StepError`] – a single `advance` call that could not run

use std::fmt;

/// Construction / configuration failures
///
/// Raised when a body, region, parameter set or ensemble would violate the
/// invariants the physics relies on (positive radius and mass, finite values).
#[derive(Debug, Clone, PartialEq)]
pub enum SimError {
    /// Radius is zero, negative or not finite.
    InvalidRadius { id: String, radius: f64 },
    /// Mass is zero, negative or not finite.
    InvalidMass { id: String, mass: f64 },
    /// Restitution outside `[0, 1]`.
    InvalidRestitution { id: String, restitution: f64 },
    /// Position, velocity or spin contains NaN or Inf.
    NonFiniteState { id: String },
    /// Region bounds are not finite or not ordered.
    InvalidRegion { reason: &'static str },
    /// A physics parameter is out of range.
    InvalidParameter { name: &'static str, value: f64 },
    /// Step size is zero, negative or not finite.
    InvalidTimestep(f64),
    /// Ensemble layout does not fit the body set.
    InvalidEnsemble { reason: String },
    /// Two bodies share the same id.
    DuplicateBodyId(String),
    /// Body id is the empty string.
    EmptyBodyId,
}

impl fmt::Display for SimError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidRadius { id, radius } => {
                write!(f, "body '{id}': radius must be positive and finite, got {radius}")
            }
            Self::InvalidMass { id, mass } => {
                write!(f, "body '{id}': mass must be positive and finite, got {mass}")
            }
            Self::InvalidRestitution { id, restitution } => {
                write!(f, "body '{id}': restitution must lie in [0, 1], got {restitution}")
            }
            Self::NonFiniteState { id } => {
                write!(f, "body '{id}': state contains NaN or Inf")
            }
            Self::InvalidRegion { reason } => write!(f, "invalid bounding region: {reason}"),
            Self::InvalidParameter { name, value } => {
                write!(f, "invalid parameter '{name}': {value}")
            }
            Self::InvalidTimestep(dt) => {
                write!(f, "timestep must be positive and finite, got {dt}")
            }
            Self::InvalidEnsemble { reason } => write!(f, "invalid ensemble: {reason}"),
            Self::DuplicateBodyId(id) => write!(f, "duplicate body id '{id}'"),
            Self::EmptyBodyId => write!(f, "body id must not be empty"),
        }
    }
}

impl std::error::Error for SimError {}

/// Errors returned by [`crate::Simulation::advance`]
///
/// The step is validated before any body is touched, so a failed call leaves
/// the simulation exactly as it was.
#[derive(Debug, Clone, PartialEq)]
pub enum StepError {
    /// `dt` is negative, NaN or Inf.
    InvalidTimestep(f64),
    /// Body at `index` carries NaN or Inf in its state.
    NonFiniteState { index: usize },
}

impl fmt::Display for StepError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidTimestep(dt) => {
                write!(f, "timestep must be finite and non-negative, got {dt}")
            }
            Self::NonFiniteState { index } => {
                write!(f, "body {index} has a non-finite state")
            }
        }
    }
}

impl std::error::Error for StepError {}
