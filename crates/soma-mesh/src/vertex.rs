//! Mesh vertex types for body representation.

use serde::{Deserialize, Serialize};

/// A vertex in the source body mesh.
///
/// The `group` and `kind` tags are opaque to the physics engine except for
/// the fixed-point derivation (`kind == "joint"` or a group containing
/// `"head"` anchors the point).
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct MeshVertex {
    /// Stable external key, unique within a mesh.
    pub id: String,
    /// X position.
    pub x: f32,
    /// Y position (up axis).
    pub y: f32,
    /// Z position.
    pub z: f32,
    /// Anatomical group tag (e.g. `"head"`, `"torso_upper"`).
    #[serde(default)]
    pub group: String,
    /// Vertex kind tag (e.g. `"joint"`, `"surface"`).
    #[serde(rename = "type", default)]
    pub kind: String,
    /// Relative weight; the engine derives mass from it.
    #[serde(default = "default_weight")]
    pub weight: f32,
}

fn default_weight() -> f32 {
    1.0
}

impl MeshVertex {
    /// Create a new vertex with the given tags.
    #[must_use]
    pub fn new(id: &str, x: f32, y: f32, z: f32, group: &str, kind: &str, weight: f32) -> Self {
        Self {
            id: id.to_owned(),
            x,
            y,
            z,
            group: group.to_owned(),
            kind: kind.to_owned(),
            weight,
        }
    }

    /// Create a free surface vertex with unit weight.
    #[must_use]
    pub fn surface(id: &str, x: f32, y: f32, z: f32) -> Self {
        Self::new(id, x, y, z, "", "surface", 1.0)
    }

    /// Create a joint vertex with unit weight (anchored by the engine).
    #[must_use]
    pub fn joint(id: &str, x: f32, y: f32, z: f32) -> Self {
        Self::new(id, x, y, z, "", "joint", 1.0)
    }
}
