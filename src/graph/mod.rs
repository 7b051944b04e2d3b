//! The two graph representations and the traversal they share.

pub mod directed;
pub mod traversal;
pub mod undirected;

pub use directed::DirectedGraph;
pub use traversal::SearchOrder;
pub use undirected::UndirectedGraph;
