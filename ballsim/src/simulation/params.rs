//! Physical parameters for the simulation
//!
//! `PhysicsParams` holds the constants the original scripts kept as globals:
//! - gravity vector,
//! - sliding and rolling friction coefficients,
//! - time scale applied to every `dt`,
//! - how border contact is reported across the two axes

use serde::Deserialize;

use super::errors::SimError;
use super::states::{is_finite, NVec2};

/// How the per-axis border hits fold into a body's contact flag
#[derive(Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BorderContact {
    #[serde(rename = "any_axis")] // colliding if either axis hit the border this tick
    #[default]
    AnyAxis,

    #[serde(rename = "last_axis")] // y-axis result overwrites the x-axis one (legacy behaviour)
    LastAxis,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PhysicsParams {
    pub gravity: NVec2, // gravitational acceleration
    pub sliding_friction: f64, // sliding friction coefficient
    pub rolling_friction: f64, // rolling friction coefficient
    pub time_scale: f64, // multiplies dt before integration
    pub border_contact: BorderContact,
}

impl Default for PhysicsParams {
    fn default() -> Self {
        Self {
            gravity: NVec2::new(0.0, -9.81),
            sliding_friction: 0.3,
            rolling_friction: 0.15,
            time_scale: 1.0,
            border_contact: BorderContact::AnyAxis,
        }
    }
}

impl PhysicsParams {
    /// No gravity, no friction, unit time scale.
    pub fn frictionless() -> Self {
        Self {
            gravity: NVec2::zeros(),
            sliding_friction: 0.0,
            rolling_friction: 0.0,
            ..Self::default()
        }
    }

    pub fn with_gravity(mut self, gravity: NVec2) -> Self {
        self.gravity = gravity;
        self
    }

    pub fn with_time_scale(mut self, time_scale: f64) -> Self {
        self.time_scale = time_scale;
        self
    }

    pub fn with_friction(mut self, sliding: f64, rolling: f64) -> Self {
        self.sliding_friction = sliding;
        self.rolling_friction = rolling;
        self
    }

    pub fn with_border_contact(mut self, border_contact: BorderContact) -> Self {
        self.border_contact = border_contact;
        self
    }

    /// Reject non-finite values and negative coefficients before a run starts.
    pub fn validate(&self) -> Result<(), SimError> {
        if !is_finite(&self.gravity) {
            let value = if self.gravity.x.is_finite() { self.gravity.y } else { self.gravity.x };
            return Err(SimError::InvalidParameter { name: "gravity", value });
        }
        let checks = [
            ("sliding_friction", self.sliding_friction),
            ("rolling_friction", self.rolling_friction),
            ("time_scale", self.time_scale),
        ];
        for (name, value) in checks {
            if !value.is_finite() || value < 0.0 {
                return Err(SimError::InvalidParameter { name, value });
            }
        }
        Ok(())
    }
}
