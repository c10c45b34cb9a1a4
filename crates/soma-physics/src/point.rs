//! Mass points and the engine-owned point set.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use soma_mesh::MeshVertex;

use crate::types::{PointState, Vec3};
use crate::MASS_SCALE;

/// A simulated particle with position, velocity, and a force accumulator.
///
/// Fixed points are excluded from all motion: integration, force
/// accumulation, constraint relaxation, and ground collision. Their
/// velocity and force stay permanently zero.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct MassPoint {
    /// Stable external key.
    pub id: String,
    /// Current position.
    pub position: Vec3,
    /// Position at construction time; used only by reset.
    pub original_position: Vec3,
    /// Current velocity.
    pub velocity: Vec3,
    /// Force accumulator, cleared at the end of every successful step.
    pub force: Vec3,
    /// Mass, derived from vertex weight. Strictly positive for a valid mesh.
    pub mass: f32,
    /// Whether the point is anchored.
    pub fixed: bool,
    /// Anatomical group tag from the source vertex.
    pub group: String,
    /// Kind tag from the source vertex.
    pub kind: String,
}

impl MassPoint {
    /// Build a mass point from a mesh vertex.
    ///
    /// Mass is `weight × 10`; the point is fixed when its kind is `"joint"`
    /// or its group contains `"head"`.
    #[must_use]
    pub fn from_vertex(vertex: &MeshVertex) -> Self {
        let position = Vec3::new(vertex.x, vertex.y, vertex.z);
        let fixed = vertex.kind == "joint" || vertex.group.contains("head");
        Self {
            id: vertex.id.clone(),
            position,
            original_position: position,
            velocity: Vec3::zero(),
            force: Vec3::zero(),
            mass: vertex.weight * MASS_SCALE,
            fixed,
            group: vertex.group.clone(),
            kind: vertex.kind.clone(),
        }
    }

    /// Set the fixed flag.
    ///
    /// Newly fixed points have their velocity and force zeroed so the fixed
    /// invariant holds from the moment they become fixed.
    pub fn set_fixed(&mut self, fixed: bool) {
        self.fixed = fixed;
        if fixed {
            self.velocity = Vec3::zero();
            self.force = Vec3::zero();
        }
    }

    /// Restore the construction position and zero all motion state.
    pub fn reset(&mut self) {
        self.position = self.original_position;
        self.velocity = Vec3::zero();
        self.force = Vec3::zero();
    }
}

/// The engine-owned set of mass points with O(1) id lookup.
///
/// Points live for one construction epoch and are replaced wholesale when
/// the engine is rebuilt; indices into the set are stable for that epoch.
#[derive(Clone, Debug, Default)]
pub struct MassPointSet {
    points: Vec<MassPoint>,
    index: HashMap<String, usize>,
}

impl MassPointSet {
    /// Build the point set from the mesh vertex list, preserving order.
    #[must_use]
    pub fn from_vertices(vertices: &[MeshVertex]) -> Self {
        let mut points = Vec::with_capacity(vertices.len());
        let mut index = HashMap::with_capacity(vertices.len());
        for vertex in vertices {
            index.insert(vertex.id.clone(), points.len());
            points.push(MassPoint::from_vertex(vertex));
        }
        Self { points, index }
    }

    /// Number of mass points.
    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Check if empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Resolve an id to its index, if present.
    #[must_use]
    pub fn index_of(&self, id: &str) -> Option<usize> {
        self.index.get(id).copied()
    }

    /// Look up a point by id.
    #[must_use]
    pub fn get(&self, id: &str) -> Option<&MassPoint> {
        self.index_of(id).map(|i| &self.points[i])
    }

    /// Look up a point mutably by id.
    pub fn get_mut(&mut self, id: &str) -> Option<&mut MassPoint> {
        let i = self.index_of(id)?;
        Some(&mut self.points[i])
    }

    /// All points in construction order.
    #[must_use]
    pub fn points(&self) -> &[MassPoint] {
        &self.points
    }

    /// All points, mutable, in construction order.
    pub fn points_mut(&mut self) -> &mut [MassPoint] {
        &mut self.points
    }

    /// Borrow two distinct points mutably by index.
    ///
    /// # Panics
    ///
    /// Panics when `a == b` or either index is out of bounds.
    pub fn pair_mut(&mut self, a: usize, b: usize) -> (&mut MassPoint, &mut MassPoint) {
        assert_ne!(a, b, "pair_mut requires distinct indices");
        if a < b {
            let (low, high) = self.points.split_at_mut(b);
            (&mut low[a], &mut high[0])
        } else {
            let (low, high) = self.points.split_at_mut(a);
            (&mut high[0], &mut low[b])
        }
    }

    /// Restore every point to its construction position with zero motion.
    pub fn reset(&mut self) {
        for point in &mut self.points {
            point.reset();
        }
    }

    /// Zero every force accumulator.
    pub fn clear_forces(&mut self) {
        for point in &mut self.points {
            point.force = Vec3::zero();
        }
    }

    /// Snapshot of all positions in construction order.
    #[must_use]
    pub fn snapshot(&self) -> Vec<PointState> {
        self.points
            .iter()
            .map(|p| PointState {
                id: p.id.clone(),
                position: p.position,
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_vertices() -> Vec<MeshVertex> {
        vec![
            MeshVertex::new("head_top", 0.0, 80.0, 0.0, "head", "surface", 0.5),
            MeshVertex::new("neck_base_center", 0.0, 60.0, 0.0, "neck", "joint", 1.0),
            MeshVertex::new("spine_center", 0.0, 40.0, 0.0, "torso", "surface", 2.0),
        ]
    }

    #[test]
    fn test_mass_derivation() {
        let set = MassPointSet::from_vertices(&sample_vertices());
        assert!((set.get("head_top").unwrap().mass - 5.0).abs() < 0.001);
        assert!((set.get("spine_center").unwrap().mass - 20.0).abs() < 0.001);
    }

    #[test]
    fn test_fixed_derivation() {
        let set = MassPointSet::from_vertices(&sample_vertices());
        // Group contains "head".
        assert!(set.get("head_top").unwrap().fixed);
        // Kind is "joint".
        assert!(set.get("neck_base_center").unwrap().fixed);
        assert!(!set.get("spine_center").unwrap().fixed);
    }

    #[test]
    fn test_lookup_unknown_id() {
        let set = MassPointSet::from_vertices(&sample_vertices());
        assert!(set.get("no_such_point").is_none());
        assert!(set.index_of("no_such_point").is_none());
    }

    #[test]
    fn test_set_fixed_zeroes_motion() {
        let mut set = MassPointSet::from_vertices(&sample_vertices());
        let point = set.get_mut("spine_center").unwrap();
        point.velocity = Vec3::new(1.0, 2.0, 3.0);
        point.force = Vec3::new(4.0, 5.0, 6.0);
        point.set_fixed(true);
        assert!(point.velocity.magnitude() < 0.001);
        assert!(point.force.magnitude() < 0.001);
    }

    #[test]
    fn test_reset_restores_original_position() {
        let mut set = MassPointSet::from_vertices(&sample_vertices());
        {
            let point = set.get_mut("spine_center").unwrap();
            point.position = Vec3::new(5.0, 5.0, 5.0);
            point.velocity = Vec3::new(0.0, -1.0, 0.0);
        }
        set.reset();
        let point = set.get("spine_center").unwrap();
        assert!((point.position.y - 40.0).abs() < 0.001);
        assert!(point.velocity.magnitude() < 0.001);
    }

    #[test]
    fn test_snapshot_preserves_order() {
        let set = MassPointSet::from_vertices(&sample_vertices());
        let snapshot = set.snapshot();
        assert_eq!(snapshot.len(), 3);
        assert_eq!(snapshot[0].id, "head_top");
        assert_eq!(snapshot[2].id, "spine_center");
    }

    #[test]
    fn test_pair_mut_distinct_borrows() {
        let mut set = MassPointSet::from_vertices(&sample_vertices());
        let (a, b) = set.pair_mut(2, 0);
        assert_eq!(a.id, "spine_center");
        assert_eq!(b.id, "head_top");
    }
}
