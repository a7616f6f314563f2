//! Fixed-step per-body update
//!
//! One tick of a body is: integrate (friction + gravity, then explicit
//! velocity/position update), resolve the border, take a sample.

use super::forces::AccelSet;
use super::params::BorderContact;
use super::recorder::Sample;
use super::states::{Body, BoundingRegion};

/// Advance one body by `dt` (already time-scaled)
/// - acceleration is rebuilt from scratch by `forces`
/// - `velocity += acceleration` (the terms already carry `dt`)
/// - `center += velocity * dt`
pub fn integrate(body: &mut Body, forces: &AccelSet, dt: f64) {
    let acceleration = forces.accumulate(dt, body);
    body.acceleration = acceleration;
    body.velocity += body.acceleration;
    body.center += body.velocity * dt;
}

/// Clamp a body back inside `region`, reflecting the crossing velocity
/// component scaled by restitution, and update the contact flag.
///
/// Returns `(x_hit, y_hit)`.
pub fn resolve_border(body: &mut Body, region: &BoundingRegion, mode: BorderContact) -> (bool, bool) {
    let radius = body.radius();
    let restitution = body.restitution();

    let x_hit = if body.center.x - radius < region.left {
        body.center.x = region.left + radius;
        body.velocity.x = -body.velocity.x * restitution;
        true
    } else if body.center.x + radius > region.right {
        body.center.x = region.right - radius;
        body.velocity.x = -body.velocity.x * restitution;
        true
    } else {
        false
    };

    let y_hit = if body.center.y - radius < region.top {
        body.center.y = region.top + radius;
        body.velocity.y = -body.velocity.y * restitution;
        true
    } else if body.center.y + radius > region.bottom {
        body.center.y = region.bottom - radius;
        body.velocity.y = -body.velocity.y * restitution;
        true
    } else {
        false
    };

    body.colliding = match mode {
        BorderContact::AnyAxis => x_hit || y_hit,
        BorderContact::LastAxis => y_hit,
    };

    (x_hit, y_hit)
}

/// Integrate, resolve the border (when a region is given) and snapshot the body
///
/// # Parameters
/// - `dt`     : time-scaled step length
/// - `region` : `None` skips border handling entirely and leaves the contact flag untouched
/// - `step`, `time` : stamped onto the returned sample
pub fn tick(
    body: &mut Body,
    forces: &AccelSet,
    dt: f64,
    region: Option<&BoundingRegion>,
    mode: BorderContact,
    step: u64,
    time: f64,
) -> Sample {
    integrate(body, forces, dt);
    if let Some(region) = region {
        resolve_border(body, region, mode);
    }

    Sample {
        step,
        time,
        center: body.center,
        velocity: body.velocity,
        acceleration: body.acceleration,
        angular_velocity: body.angular_velocity,
    }
}
