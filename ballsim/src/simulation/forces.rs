//! Acceleration contributors for a single body
//!
//! Each term returns the velocity increment it adds for one tick (the model
//! folds `dt` into the acceleration itself). Terms are summed in insertion
//! order, so friction, which reads the spin before gravity is added, goes first.

use super::params::PhysicsParams;
use super::states::{Body, NVec2};

/// Ordered collection of acceleration terms (friction, gravity, ...)
/// Contributions are summed into the body's per-tick acceleration
pub struct AccelSet {
    terms: Vec<Box<dyn Acceleration + Send + Sync>>,
}

impl Default for AccelSet {
    fn default() -> Self {
        Self::new()
    }
}

impl AccelSet {
    /// Create an empty acceleration set
    pub fn new() -> Self {
        Self {
            terms: Vec::new()
        }
    }

    /// The standard set: border friction followed by mass-scaled gravity
    pub fn from_params(params: &PhysicsParams) -> Self {
        Self::new()
            .with(ContactFriction {
                sliding: params.sliding_friction,
                rolling: params.rolling_friction,
                gravity_y: params.gravity.y,
            })
            .with(ScaledGravity {
                gravity: params.gravity,
            })
    }

    /// Add an acceleration term
    pub fn with<T>(mut self, term: T) -> Self
    where
        T: Acceleration + Send + Sync + 'static,
    {
        self.terms.push(Box::new(term));
        self
    }

    pub fn len(&self) -> usize {
        self.terms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    /// Sum every term's contribution for `body` over a tick of length `dt`
    pub fn accumulate(&self, dt: f64, body: &mut Body) -> NVec2 {
        let mut total = NVec2::zeros();
        for term in &self.terms {
            total += term.acceleration(dt, body);
        }
        total
    }
}

/// Trait for per-body acceleration sources
/// A term may update auxiliary state on the body (friction bleeds spin).
pub trait Acceleration {
    fn acceleration(&self, dt: f64, body: &mut Body) -> NVec2;
}

/// Rolling / sliding friction, active only while the body touches the border
///
/// - rolling regime (`|vx| < |w r|`): spin decays by `rolling * w * dt` and the
///   same angular change is fed back along x
/// - sliding regime: deceleration `sliding * |g.y|` against the velocity
pub struct ContactFriction {
    pub sliding: f64,
    pub rolling: f64,
    pub gravity_y: f64,
}

impl Acceleration for ContactFriction {
    fn acceleration(&self, dt: f64, body: &mut Body) -> NVec2 {
        if !body.colliding {
            return NVec2::zeros();
        }

        let radius = body.radius();
        if body.velocity.x.abs() < (body.angular_velocity * radius).abs() {
            let angular_friction = self.rolling * body.angular_velocity;
            body.angular_velocity -= angular_friction * dt;
            let linear_friction = angular_friction * radius;
            NVec2::new(linear_friction * dt, 0.0)
        } else {
            let speed = body.velocity.norm();
            if speed == 0.0 {
                // nothing to oppose at rest
                return NVec2::zeros();
            }
            let mass = body.mass();
            let friction_force = self.sliding * mass * self.gravity_y.abs();
            let friction_acceleration = friction_force / mass;
            -body.velocity * (friction_acceleration / speed) * dt
        }
    }
}

/// Gravity scaled by the square root of the body's mass
///
/// Heavier bodies fall faster in this model: the velocity increment per tick
/// is `g * sqrt(m) * dt`, not `g * dt`.
pub struct ScaledGravity {
    pub gravity: NVec2,
}

impl Acceleration for ScaledGravity {
    fn acceleration(&self, dt: f64, body: &mut Body) -> NVec2 {
        self.gravity * body.mass().sqrt() * dt
    }
}
