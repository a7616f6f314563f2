//! Core state types for the circular-body simulation.
//!
//! - `NVec2` plus the few vector helpers nalgebra does not give us directly
//! - `Body`: one circular rigid body (fixed radius/mass/restitution, mutable kinematics)
//! - `BoundingRegion`: the static axis-aligned box bodies bounce inside

use nalgebra::Vector2;

use super::errors::SimError;

pub type NVec2 = Vector2<f64>;

/// Unit vector along `v`, or the zero vector when `v` has zero length.
///
/// Two bodies whose centers coincide produce a zero collision normal through
/// this, which turns the overlap and impulse updates into no-ops instead of NaN.
pub fn normalize_or_zero(v: NVec2) -> NVec2 {
    let len = v.norm();
    if len == 0.0 {
        NVec2::zeros()
    } else {
        v / len
    }
}

/// True when both components are finite.
pub fn is_finite(v: &NVec2) -> bool {
    v.x.is_finite() && v.y.is_finite()
}

#[derive(Debug, Clone, PartialEq)]
pub struct Body {
    id: String, // correlates recorded series
    pub center: NVec2, // position of the centroid
    pub velocity: NVec2, // linear velocity
    pub angular_velocity: f64, // spin, only read by the friction model
    pub(crate) acceleration: NVec2, // recomputed every tick
    pub(crate) colliding: bool, // touching the border after the last tick
    radius: f64,
    mass: f64,
    restitution: f64,
}

impl Body {
    /// Build a body at rest in spin.
    ///
    /// # Errors
    /// - [`SimError::EmptyBodyId`] when `id` is empty
    /// - [`SimError::InvalidRadius`] / [`SimError::InvalidMass`] when not positive and finite
    /// - [`SimError::InvalidRestitution`] outside `[0, 1]`
    /// - [`SimError::NonFiniteState`] when `center` or `velocity` holds NaN/Inf
    pub fn new(
        id: impl Into<String>,
        center: NVec2,
        velocity: NVec2,
        restitution: f64,
        radius: f64,
        mass: f64,
    ) -> Result<Self, SimError> {
        let id = id.into();

        if id.is_empty() {
            return Err(SimError::EmptyBodyId);
        }
        if !(radius.is_finite() && radius > 0.0) {
            return Err(SimError::InvalidRadius { id, radius });
        }
        if !(mass.is_finite() && mass > 0.0) {
            return Err(SimError::InvalidMass { id, mass });
        }
        if !(0.0..=1.0).contains(&restitution) {
            return Err(SimError::InvalidRestitution { id, restitution });
        }
        if !is_finite(&center) || !is_finite(&velocity) {
            return Err(SimError::NonFiniteState { id });
        }

        Ok(Self {
            id,
            center,
            velocity,
            angular_velocity: 0.0,
            acceleration: NVec2::zeros(),
            colliding: false,
            radius,
            mass,
            restitution,
        })
    }

    /// Set the initial spin.
    pub fn with_angular_velocity(mut self, angular_velocity: f64) -> Result<Self, SimError> {
        if !angular_velocity.is_finite() {
            return Err(SimError::NonFiniteState { id: self.id });
        }
        self.angular_velocity = angular_velocity;
        Ok(self)
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn radius(&self) -> f64 {
        self.radius
    }

    pub fn mass(&self) -> f64 {
        self.mass
    }

    pub fn restitution(&self) -> f64 {
        self.restitution
    }

    /// Acceleration applied during the most recent tick.
    pub fn acceleration(&self) -> NVec2 {
        self.acceleration
    }

    /// Whether the body ended its last tick in contact with the border.
    pub fn is_colliding(&self) -> bool {
        self.colliding
    }

    /// Moment of inertia of a solid disc, `2/5 m r^2`.
    pub fn inertia(&self) -> f64 {
        0.4 * self.mass * self.radius * self.radius
    }

    pub(crate) fn inv_mass(&self) -> f64 {
        self.mass.recip()
    }

    /// Kinematic state is finite (checked before every step).
    pub fn is_state_finite(&self) -> bool {
        is_finite(&self.center)
            && is_finite(&self.velocity)
            && is_finite(&self.acceleration)
            && self.angular_velocity.is_finite()
    }
}

/// Axis-aligned box the bodies live in.
///
/// `top` is the minimum-y edge and `bottom` the maximum-y edge, so a region
/// built from `(x, y, width, height)` has `top = y` and `bottom = y + height`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingRegion {
    pub left: f64,
    pub right: f64,
    pub top: f64,
    pub bottom: f64,
}

impl BoundingRegion {
    pub fn new(left: f64, right: f64, top: f64, bottom: f64) -> Result<Self, SimError> {
        if ![left, right, top, bottom].iter().all(|v| v.is_finite()) {
            return Err(SimError::InvalidRegion { reason: "bounds must be finite" });
        }
        if left >= right {
            return Err(SimError::InvalidRegion { reason: "left must be less than right" });
        }
        if top >= bottom {
            return Err(SimError::InvalidRegion { reason: "top must be less than bottom" });
        }
        Ok(Self { left, right, top, bottom })
    }

    /// Region from an origin corner and extents.
    pub fn from_rect(x: f64, y: f64, width: f64, height: f64) -> Result<Self, SimError> {
        Self::new(x, x + width, y, y + height)
    }

    pub fn width(&self) -> f64 {
        self.right - self.left
    }

    pub fn height(&self) -> f64 {
        self.bottom - self.top
    }
}
