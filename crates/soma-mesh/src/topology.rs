//! Complete mesh topology: vertices, connectivity, and optional hints.

use serde::{Deserialize, Serialize};

use crate::error::TopologyError;
use crate::vertex::MeshVertex;

/// Per-mesh spring tuning hints.
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct SpringHints {
    /// Scale factor applied to the global spring stiffness.
    #[serde(rename = "muscleTension")]
    pub muscle_tension: f32,
}

/// Optional physics section of the topology document.
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize)]
pub struct PhysicsHints {
    /// Spring tuning hints.
    #[serde(default)]
    pub springs: Option<SpringHints>,
}

/// Biomechanical metadata flags.
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize)]
pub struct Biomechanical {
    /// When true, the engine installs the anatomical distance constraints.
    #[serde(rename = "jointConstraints", default)]
    pub joint_constraints: bool,
}

/// Optional metadata section of the topology document.
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize)]
pub struct MeshMetadata {
    /// Biomechanical flags.
    #[serde(default)]
    pub biomechanical: Option<Biomechanical>,
}

/// A complete body mesh topology: point set plus connectivity.
///
/// The vertex list and edge list are fixed for the lifetime of one physics
/// construction epoch; deforming the mesh never changes its topology.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct MeshTopology {
    /// All mesh vertices.
    pub vertices: Vec<MeshVertex>,
    /// Connectivity edges as pairs of vertex ids.
    pub edges: Vec<(String, String)>,
    /// Optional physics hints.
    #[serde(default)]
    pub physics: Option<PhysicsHints>,
    /// Optional metadata.
    #[serde(default)]
    pub metadata: Option<MeshMetadata>,
}

impl MeshTopology {
    /// Create a topology from vertices and edges, with no hints.
    #[must_use]
    pub fn new(vertices: Vec<MeshVertex>, edges: Vec<(String, String)>) -> Self {
        Self {
            vertices,
            edges,
            physics: None,
            metadata: None,
        }
    }

    /// Parse a topology from a JSON document.
    ///
    /// # Errors
    ///
    /// Returns [`TopologyError::Json`] when the document does not match the
    /// expected shape, and [`TopologyError::EmptyVertices`] when the vertex
    /// list is empty.
    pub fn from_json(json: &str) -> Result<Self, TopologyError> {
        let topology: Self = serde_json::from_str(json)?;
        if topology.vertices.is_empty() {
            return Err(TopologyError::EmptyVertices);
        }
        Ok(topology)
    }

    /// Get the muscle tension scale hint, if present.
    #[must_use]
    pub fn muscle_tension(&self) -> Option<f32> {
        self.physics
            .as_ref()
            .and_then(|p| p.springs.as_ref())
            .map(|s| s.muscle_tension)
    }

    /// Whether the anatomical joint constraints should be installed.
    #[must_use]
    pub fn joint_constraints_enabled(&self) -> bool {
        self.metadata
            .as_ref()
            .and_then(|m| m.biomechanical.as_ref())
            .is_some_and(|b| b.joint_constraints)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FULL_DOCUMENT: &str = r#"{
        "vertices": [
            {"id": "head_top", "x": 0.0, "y": 80.0, "z": 0.0,
             "group": "head", "type": "surface", "weight": 0.5},
            {"id": "neck_top_center", "x": 0.0, "y": 65.0, "z": 0.0,
             "group": "neck", "type": "joint", "weight": 1.0}
        ],
        "edges": [["head_top", "neck_top_center"]],
        "physics": {"springs": {"muscleTension": 0.5}},
        "metadata": {"biomechanical": {"jointConstraints": true}}
    }"#;

    #[test]
    fn test_full_document_parses() {
        let topology = MeshTopology::from_json(FULL_DOCUMENT).unwrap();
        assert_eq!(topology.vertices.len(), 2);
        assert_eq!(topology.edges.len(), 1);
        assert_eq!(topology.edges[0].0, "head_top");
        assert!((topology.muscle_tension().unwrap() - 0.5).abs() < 0.001);
        assert!(topology.joint_constraints_enabled());
    }

    #[test]
    fn test_optional_sections_default() {
        let topology = MeshTopology::from_json(
            r#"{"vertices": [{"id": "a", "x": 0.0, "y": 0.0, "z": 0.0}], "edges": []}"#,
        )
        .unwrap();
        assert!(topology.muscle_tension().is_none());
        assert!(!topology.joint_constraints_enabled());
    }

    #[test]
    fn test_empty_vertices_rejected() {
        let result = MeshTopology::from_json(r#"{"vertices": [], "edges": []}"#);
        assert!(matches!(result, Err(TopologyError::EmptyVertices)));
    }

    #[test]
    fn test_malformed_json_rejected() {
        let result = MeshTopology::from_json("not json");
        assert!(matches!(result, Err(TopologyError::Json(_))));
    }
}
