//! Pairwise body-body collision handling
//!
//! Narrow phase only: the simulation feeds every unordered pair through
//! [`resolve`]. Resolution is two independent passes:
//! 1. positional correction, splitting the overlap evenly between the bodies
//! 2. an impulse along the contact normal using the smaller restitution
//!
//! Border contact state is not read or written here.

use super::states::{normalize_or_zero, Body};

/// True iff the two discs interpenetrate (touching exactly does not count).
pub fn detect(a: &Body, b: &Body) -> bool {
    (a.center - b.center).norm() < a.radius() + b.radius()
}

/// Push overlapping bodies apart by half the overlap each, along `b - a`.
///
/// The split is even regardless of mass. Coincident centers give a zero
/// direction and therefore no correction.
pub fn resolve_overlap(a: &mut Body, b: &mut Body) {
    let distance_vector = b.center - a.center;
    let distance = distance_vector.norm();
    let overlap = (a.radius() + b.radius()) - distance;

    if overlap > 0.0 {
        let direction = normalize_or_zero(distance_vector);
        let correction = direction * (overlap / 2.0);

        a.center -= correction;
        b.center += correction;
    }
}

/// Apply the collision impulse between `a` and `b`.
///
/// Returns the scalar impulse applied, or `None` when the bodies are already
/// separating along the normal.
pub fn resolve_impulse(a: &mut Body, b: &mut Body) -> Option<f64> {
    let normal = normalize_or_zero(b.center - a.center);
    let relative_velocity = b.velocity - a.velocity;
    let velocity_along_normal = relative_velocity.dot(&normal);

    if velocity_along_normal > 0.0 {
        return None;
    }

    let restitution = a.restitution().min(b.restitution());
    let impulse_scalar =
        -(1.0 + restitution) * velocity_along_normal / (a.inv_mass() + b.inv_mass());

    let impulse = normal * impulse_scalar;
    a.velocity -= impulse * a.inv_mass();
    b.velocity += impulse * b.inv_mass();

    Some(impulse_scalar)
}

/// Detect, then correct overlap and exchange impulse.
///
/// Returns whether the pair was in contact.
pub fn resolve(a: &mut Body, b: &mut Body) -> bool {
    if !detect(a, b) {
        return false;
    }
    resolve_overlap(a, b);
    resolve_impulse(a, b);
    true
}

/// Mutable references to two distinct bodies, `i < j`.
pub(crate) fn pair_mut(bodies: &mut [Body], i: usize, j: usize) -> (&mut Body, &mut Body) {
    debug_assert!(i < j);
    let (head, tail) = bodies.split_at_mut(j);
    (&mut head[i], &mut tail[0])
}
