//! Error types for fieldscope.

use thiserror::Error;

/// The main error type for fieldscope operations.
///
/// Only contract violations are surfaced here. Imperfect upstream data
/// (stale sparse indices, degenerate bounding boxes, a missing orientation)
/// is absorbed by the mapping functions with a documented fallback.
#[derive(Error, Debug)]
pub enum FieldscopeError {
    /// A dense per-vertex array does not match the vertex count.
    #[error("data size mismatch: expected {expected}, got {actual}")]
    ShapeMismatch { expected: usize, actual: usize },

    /// A face references a vertex that does not exist.
    #[error("face {face} references vertex {index}, but the mesh has {num_vertices} vertices")]
    FaceIndexOutOfRange {
        face: usize,
        index: u32,
        num_vertices: usize,
    },

    /// The scene backend failed to acquire render resources.
    #[error("scene backend error: {0}")]
    Backend(String),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// A specialized Result type for fieldscope operations.
pub type Result<T> = std::result::Result<T, FieldscopeError>;
