//! Soma Mesh - Body Mesh Topology Model
//!
//! Provides the boundary data model for anatomical body meshes consumed
//! by the Soma physics engine: a vertex list with anatomical tags, pairwise
//! connectivity edges, and optional physics hints and biomechanical metadata.
//!
//! The topology is parsed and validated by an external loader; the physics
//! engine consumes it as-is and does not re-validate. `MeshTopology::from_json`
//! is a convenience for tests and standalone tools.
//!
//! # Input shape
//!
//! ```text
//! { vertices: [{ id, x, y, z, group, type, weight }, ...],
//!   edges:    [[idA, idB], ...],
//!   physics?: { springs: { muscleTension: number } },
//!   metadata?: { biomechanical: { jointConstraints: bool } } }
//! ```
//!
//! # Example
//!
//! ```
//! use soma_mesh::MeshTopology;
//!
//! let topology = MeshTopology::from_json(r#"{
//!     "vertices": [
//!         {"id": "head_top", "x": 0.0, "y": 80.0, "z": 0.0,
//!          "group": "head", "type": "surface", "weight": 1.0}
//!     ],
//!     "edges": []
//! }"#).unwrap();
//!
//! assert_eq!(topology.vertices.len(), 1);
//! ```

#![warn(missing_docs)]

pub mod error;
pub mod topology;
pub mod vertex;

pub use error::TopologyError;
pub use topology::{Biomechanical, MeshMetadata, MeshTopology, PhysicsHints, SpringHints};
pub use vertex::MeshVertex;
