//! Edge records returned by the `edges()` queries.

use serde::Serialize;

use super::{Vertex, Weight};

/// A directed edge `src -> dst` with a strictly positive weight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct WeightedEdge {
    /// Origin vertex.
    pub src: Vertex,
    /// Destination vertex.
    pub dst: Vertex,
    /// Edge weight (always >= 1).
    pub weight: Weight,
}

impl WeightedEdge {
    /// Create a new edge record.
    pub fn new(src: Vertex, dst: Vertex, weight: Weight) -> Self {
        Self { src, dst, weight }
    }
}

impl From<(Vertex, Vertex, Weight)> for WeightedEdge {
    fn from((src, dst, weight): (Vertex, Vertex, Weight)) -> Self {
        Self::new(src, dst, weight)
    }
}

impl std::fmt::Display for WeightedEdge {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {}, {})", self.src, self.dst, self.weight)
    }
}

/// An undirected edge. The endpoint order carries no meaning.
#[derive(Debug, Clone, Eq, Serialize)]
pub struct UndirectedEdge {
    pub u: String,
    pub v: String,
}

impl UndirectedEdge {
    /// Create a new edge record.
    pub fn new(u: impl Into<String>, v: impl Into<String>) -> Self {
        Self {
            u: u.into(),
            v: v.into(),
        }
    }

    /// Whether `name` is one of the two endpoints.
    pub fn touches(&self, name: &str) -> bool {
        self.u == name || self.v == name
    }
}

impl PartialEq for UndirectedEdge {
    fn eq(&self, other: &Self) -> bool {
        (self.u == other.u && self.v == other.v) || (self.u == other.v && self.v == other.u)
    }
}

impl std::hash::Hash for UndirectedEdge {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        // Order-independent so that equal edges hash equally.
        let (a, b) = if self.u <= self.v {
            (&self.u, &self.v)
        } else {
            (&self.v, &self.u)
        };
        a.hash(state);
        b.hash(state);
    }
}

impl std::fmt::Display for UndirectedEdge {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.u, self.v)
    }
}
