//! Elastic springs derived from mesh connectivity.

use serde::{Deserialize, Serialize};

use crate::point::MassPointSet;

/// Per-spring velocity damping coefficient.
///
/// Carried as data for every spring but not read by the force model,
/// matching the source system.
pub const SPRING_DAMPING: f32 = 0.1;

/// An elastic link between two mass points.
///
/// Endpoints are indices into the owning [`MassPointSet`], resolved once at
/// construction; they stay valid for the whole construction epoch. The rest
/// length is measured from the mesh, not designed.
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct Spring {
    /// Index of the first endpoint.
    pub a: usize,
    /// Index of the second endpoint.
    pub b: usize,
    /// Euclidean distance between the endpoints at construction time.
    pub rest_length: f32,
    /// Spring stiffness (global stiffness × muscle tension at build time).
    pub stiffness: f32,
    /// Damping coefficient (unused by the force model).
    pub damping: f32,
}

/// All springs of one mesh, one per usable connectivity edge.
#[derive(Clone, Debug, Default)]
pub struct SpringNetwork {
    springs: Vec<Spring>,
}

impl SpringNetwork {
    /// Build one spring per connectivity edge whose endpoints both exist.
    ///
    /// Edges referencing a missing id, and degenerate self-edges, are
    /// dropped silently; the second element of the return value counts them
    /// so callers can assert on the skips.
    #[must_use]
    pub fn from_edges(
        points: &MassPointSet,
        edges: &[(String, String)],
        stiffness: f32,
    ) -> (Self, usize) {
        let mut springs = Vec::with_capacity(edges.len());
        let mut skipped = 0;
        for (id_a, id_b) in edges {
            match (points.index_of(id_a), points.index_of(id_b)) {
                (Some(a), Some(b)) if a != b => {
                    let rest_length = points.points()[a]
                        .position
                        .distance(&points.points()[b].position);
                    springs.push(Spring {
                        a,
                        b,
                        rest_length,
                        stiffness,
                        damping: SPRING_DAMPING,
                    });
                }
                _ => skipped += 1,
            }
        }
        (Self { springs }, skipped)
    }

    /// Number of springs.
    #[must_use]
    pub fn len(&self) -> usize {
        self.springs.len()
    }

    /// Check if empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.springs.is_empty()
    }

    /// Iterate over the springs.
    pub fn iter(&self) -> impl Iterator<Item = &Spring> {
        self.springs.iter()
    }

    /// Overwrite every spring's stiffness with one global value.
    ///
    /// The per-mesh muscle tension scale is intentionally not reapplied;
    /// this flattening matches the source system's global setter.
    pub fn set_stiffness(&mut self, stiffness: f32) {
        for spring in &mut self.springs {
            spring.stiffness = stiffness;
        }
    }
}
