//! Error types for the graph engine.

use thiserror::Error;

/// Errors raised by the checked entry points and the `gx` command line.
///
/// Plain graph mutation never produces one of these; see [`Ignored`].
#[derive(Error, Debug)]
pub enum GraphError {
    /// Vertex index outside `[0, count)`.
    #[error("Vertex {vertex} out of range for graph with {count} vertices")]
    VertexOutOfRange { vertex: usize, count: usize },

    /// Vertex argument that could not be parsed.
    #[error("Invalid vertex: {0:?}")]
    InvalidVertex(String),

    /// Edge argument that could not be parsed.
    #[error("Invalid edge spec {spec:?}: {reason}")]
    InvalidEdgeSpec { spec: String, reason: String },

    /// Query not available for this graph kind.
    #[error("{0}")]
    Unsupported(&'static str),
}

/// Convenience result type for graph operations.
pub type GraphResult<T> = Result<T, GraphError>;

/// Why a mutation request was dropped.
///
/// Mutations on both graph types are permissive: an invalid or redundant
/// request leaves the graph untouched and returns normally. The reason is
/// only surfaced through debug logging.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Ignored {
    /// Endpoint index outside the vertex range.
    #[error("vertex {0} out of range")]
    OutOfRange(usize),

    /// Both endpoints are the same vertex.
    #[error("self-loop on {0}")]
    SelfLoop(String),

    /// Weight below 1.
    #[error("non-positive weight")]
    NonPositiveWeight,

    /// Edge already present.
    #[error("edge {0} - {1} already exists")]
    Duplicate(String, String),

    /// Named vertex absent.
    #[error("vertex {0:?} does not exist")]
    MissingVertex(String),

    /// No edge between the endpoints.
    #[error("no edge between {0} and {1}")]
    MissingEdge(String, String),
}
