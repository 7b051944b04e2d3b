//! Shared data types for both graph representations.

pub mod edge;
pub mod error;

pub use edge::{UndirectedEdge, WeightedEdge};
pub use error::{GraphError, GraphResult, Ignored};

/// Vertex index in a [`DirectedGraph`](crate::graph::DirectedGraph).
pub type Vertex = usize;

/// Edge weight in a [`DirectedGraph`](crate::graph::DirectedGraph). Zero means "no edge".
pub type Weight = u32;

/// Weight used when a caller does not name one.
pub const DEFAULT_WEIGHT: Weight = 1;

/// Rendering of a directed graph with no vertices.
pub const EMPTY_GRAPH_BANNER: &str = "EMPTY GRAPH\n";

/// Undirected renderings whose body is shorter than this stay on one line.
pub const INLINE_RENDER_LIMIT: usize = 70;
