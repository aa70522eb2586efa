//! Error types for shape construction and selection.

use thiserror::Error;

/// Errors raised by the geometry core.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// A shape name or index outside the known set.
    #[error("unknown shape: {0}")]
    UnknownShape(String),

    /// A generator parameter that cannot produce a valid shape.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// An edge or face refers to a vertex that does not exist.
    #[error("vertex index {index} out of bounds for {len} vertices")]
    IndexOutOfBounds { index: usize, len: usize },

    /// A face with fewer than three vertices.
    #[error("face {face} has {len} vertices, need at least 3")]
    DegenerateFace { face: usize, len: usize },

    /// An edge that starts and ends at the same vertex.
    #[error("edge {edge} joins a vertex to itself")]
    DegenerateEdge { edge: usize },
}

/// Result type for geometry core operations.
pub type Result<T> = std::result::Result<T, Error>;
