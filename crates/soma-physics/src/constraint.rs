//! Anatomical distance constraints and ground collision.

use serde::{Deserialize, Serialize};

use crate::point::MassPointSet;
use crate::{GROUND_FRICTION, GROUND_RESTITUTION, GROUND_Y};

/// Stiffness shared by all anatomical constraints.
pub const ANATOMICAL_STIFFNESS: f32 = 0.9;

/// The fixed anatomical constraint table: id pairs and target separations.
///
/// Target distances are literal anatomical values, independent of the
/// spring rest lengths measured from the mesh.
pub const ANATOMICAL_CONSTRAINTS: [(&str, &str, f32); 8] = [
    ("head_top", "neck_top_center", 15.0),
    ("head_chin", "neck_top_front", 8.0),
    ("shoulder_left_top", "clavicle_left", 12.0),
    ("shoulder_right_top", "clavicle_right", 12.0),
    ("hip_left", "waist_left", 10.0),
    ("hip_right", "waist_right", 10.0),
    ("neck_base_center", "spine_center", 30.0),
    ("spine_center", "waist_center_front", 15.0),
];

/// A positional correction pulling two points toward a target separation.
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct DistanceConstraint {
    /// Index of the first endpoint.
    pub a: usize,
    /// Index of the second endpoint.
    pub b: usize,
    /// Target separation between the endpoints.
    pub target_distance: f32,
    /// Correction stiffness in `[0, 1]`.
    pub stiffness: f32,
}

impl DistanceConstraint {
    /// Apply one relaxation pass of this constraint.
    ///
    /// Moves each non-fixed endpoint by half the stiffness-scaled error
    /// along the separation vector. A degenerate zero separation is skipped
    /// for the pass; a constraint between two fixed points is a no-op.
    pub fn relax(&self, points: &mut MassPointSet) {
        let (pa, pb) = points.pair_mut(self.a, self.b);
        if pa.fixed && pb.fixed {
            return;
        }
        let delta = pb.position - pa.position;
        let distance = delta.magnitude();
        if distance == 0.0 {
            return;
        }
        let diff = (distance - self.target_distance) / distance;
        let correction = delta * (0.5 * diff * self.stiffness);
        if !pa.fixed {
            pa.position += correction;
        }
        if !pb.fixed {
            pb.position -= correction;
        }
    }
}

/// The anatomical distance constraints of one mesh.
///
/// Solved by Gauss-Seidel-style fixed-iteration relaxation: bounded cost,
/// convergence toward (not exactly onto) the target distances.
#[derive(Clone, Debug, Default)]
pub struct ConstraintSet {
    constraints: Vec<DistanceConstraint>,
}

impl ConstraintSet {
    /// An empty constraint set, used when the topology does not request
    /// joint constraints.
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// Install the anatomical constraint table against a point set.
    ///
    /// Pairs where either id is absent from the mesh are dropped silently;
    /// the second element of the return value counts them.
    #[must_use]
    pub fn anatomical(points: &MassPointSet) -> (Self, usize) {
        let mut constraints = Vec::with_capacity(ANATOMICAL_CONSTRAINTS.len());
        let mut skipped = 0;
        for (id_a, id_b, target_distance) in ANATOMICAL_CONSTRAINTS {
            match (points.index_of(id_a), points.index_of(id_b)) {
                (Some(a), Some(b)) if a != b => constraints.push(DistanceConstraint {
                    a,
                    b,
                    target_distance,
                    stiffness: ANATOMICAL_STIFFNESS,
                }),
                _ => skipped += 1,
            }
        }
        (Self { constraints }, skipped)
    }

    /// Number of constraints.
    #[must_use]
    pub fn len(&self) -> usize {
        self.constraints.len()
    }

    /// Check if empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.constraints.is_empty()
    }

    /// Run the given number of full relaxation passes over all constraints.
    pub fn relax(&self, points: &mut MassPointSet, iterations: usize) {
        for _ in 0..iterations {
            for constraint in &self.constraints {
                constraint.relax(points);
            }
        }
    }
}

/// Clamp every non-fixed mass below the ground plane back onto it.
///
/// Vertical velocity is negated and scaled by the restitution; lateral
/// velocity is scaled by the friction factor. This is a procedural
/// correction applied after constraint relaxation, not part of the
/// relaxation loop.
pub fn resolve_ground_collisions(points: &mut MassPointSet) {
    for point in points.points_mut() {
        if point.fixed {
            continue;
        }
        if point.position.y < GROUND_Y {
            point.position.y = GROUND_Y;
            point.velocity.y = -point.velocity.y * GROUND_RESTITUTION;
            point.velocity.x *= GROUND_FRICTION;
            point.velocity.z *= GROUND_FRICTION;
        }
    }
}
