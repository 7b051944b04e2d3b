//! graph-engine: small in-memory graph library.
//!
//! Two independent graph types share one traversal core:
//!
//! - [`DirectedGraph`]: integer vertices, positive integer weights, dense
//!   adjacency matrix. DFS/BFS, Kahn-style cycle detection, Dijkstra.
//! - [`UndirectedGraph`]: string vertices, unweighted, adjacency lists.
//!   DFS/BFS, parent-tracked cycle detection, connected components.
//!
//! Mutation is permissive: requests that are invalid or already satisfied
//! (self-loops, unknown vertices, zero weights, duplicate edges) leave the
//! graph unchanged and return normally.

pub mod cli;
pub mod graph;
pub mod types;

// Re-export commonly used types at the crate root
pub use graph::{DirectedGraph, UndirectedGraph};
pub use types::{
    GraphError, GraphResult, Ignored, UndirectedEdge, Vertex, Weight, WeightedEdge,
    DEFAULT_WEIGHT, EMPTY_GRAPH_BANNER, INLINE_RENDER_LIMIT,
};
