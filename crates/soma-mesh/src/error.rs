//! Error types for topology loading.

use thiserror::Error;

/// Errors raised while loading a mesh topology from JSON.
#[derive(Debug, Error)]
pub enum TopologyError {
    /// The document is not valid JSON or does not match the expected shape.
    #[error("failed to parse topology JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// The topology parsed but contains no vertices.
    #[error("topology has no vertices")]
    EmptyVertices,
}
