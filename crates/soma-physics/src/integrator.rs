//! Semi-implicit Euler integration.
//!
//! Despite "Verlet" naming conventions elsewhere in the wider system, the
//! scheme is semi-implicit (symplectic) Euler with uniform multiplicative
//! damping, and the exact update law below is part of the engine contract:
//!
//! ```text
//! accel     = force / mass
//! velocity += accel * dt
//! velocity *= damping
//! position += velocity * dt
//! ```
//!
//! Gravity enters the accumulator as `force.y -= mass * g`, so the mass
//! cancels during integration and every free point falls at `-g`. That
//! cancellation is Newtonian behavior, not a redundancy.

use crate::point::MassPointSet;

/// Advance velocity and position of every non-fixed point by one step.
///
/// Fixed points are excluded entirely from the update.
pub fn integrate(points: &mut MassPointSet, dt: f32, damping: f32) {
    for point in points.points_mut() {
        if point.fixed {
            continue;
        }
        let accel = point.force * (1.0 / point.mass);
        point.velocity += accel * dt;
        point.velocity *= damping;
        point.position += point.velocity * dt;
    }
}
