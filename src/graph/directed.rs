//! Directed, positively weighted graph stored as a dense adjacency matrix.

use std::cmp::Reverse;
use std::collections::{BinaryHeap, VecDeque};
use std::fmt;

use crate::types::{
    GraphError, GraphResult, Ignored, Vertex, Weight, WeightedEdge, DEFAULT_WEIGHT,
    EMPTY_GRAPH_BANNER,
};

use super::traversal::{walk, SearchOrder};

/// Directed graph over the vertex range `[0, vertex_count)`.
///
/// Cell `(i, j)` of the matrix holds the weight of edge `i -> j`, or 0 when
/// there is no such edge. The diagonal is always 0. Vertices can be added but
/// never removed.
///
/// Mutations are permissive: out-of-range endpoints, self-loops and zero
/// weights are ignored instead of reported.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DirectedGraph {
    /// Number of vertices; always equals `matrix.len()`.
    v_count: usize,
    /// Square `v_count x v_count` weight matrix.
    matrix: Vec<Vec<Weight>>,
}

impl DirectedGraph {
    /// Create an empty graph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a graph from `(src, dst, weight)` triples.
    ///
    /// The vertex count is the largest referenced index plus one, so an empty
    /// list still yields vertex 0; use [`new`](Self::new) for a graph with no
    /// vertices. All vertices are created first, then every triple goes through
    /// [`add_edge`](Self::add_edge), so invalid triples are dropped.
    pub fn from_edges(edges: &[(Vertex, Vertex, Weight)]) -> Self {
        let mut graph = Self::new();
        let max_index = edges.iter().map(|&(u, v, _)| u.max(v)).max().unwrap_or(0);
        for _ in 0..=max_index {
            graph.add_vertex();
        }
        for &(src, dst, weight) in edges {
            graph.add_edge(src, dst, weight);
        }
        graph
    }

    /// Number of vertices.
    pub fn vertex_count(&self) -> usize {
        self.v_count
    }

    /// Number of edges (cells with a positive weight).
    pub fn edge_count(&self) -> usize {
        self.matrix
            .iter()
            .map(|row| row.iter().filter(|&&w| w > 0).count())
            .sum()
    }

    /// Append a vertex and return the new vertex count.
    pub fn add_vertex(&mut self) -> usize {
        self.v_count += 1;
        for row in &mut self.matrix {
            row.push(0);
        }
        self.matrix.push(vec![0; self.v_count]);
        self.v_count
    }

    /// Set the weight of `src -> dst`, overwriting any existing weight.
    ///
    /// Does nothing when either endpoint is out of range, when
    /// `src == dst`, or when `weight` is 0.
    pub fn add_edge(&mut self, src: Vertex, dst: Vertex, weight: Weight) {
        let checked = self.check_endpoints(src, dst).and_then(|()| {
            if weight < 1 {
                Err(Ignored::NonPositiveWeight)
            } else {
                Ok(())
            }
        });
        match checked {
            Ok(()) => self.matrix[src][dst] = weight,
            Err(reason) => log::debug!("add_edge({src}, {dst}, {weight}) ignored: {reason}"),
        }
    }

    /// [`add_edge`](Self::add_edge) with [`DEFAULT_WEIGHT`].
    pub fn add_unit_edge(&mut self, src: Vertex, dst: Vertex) {
        self.add_edge(src, dst, DEFAULT_WEIGHT);
    }

    /// Remove `src -> dst`. Does nothing for out-of-range endpoints or `src == dst`.
    pub fn remove_edge(&mut self, src: Vertex, dst: Vertex) {
        match self.check_endpoints(src, dst) {
            Ok(()) => self.matrix[src][dst] = 0,
            Err(reason) => log::debug!("remove_edge({src}, {dst}) ignored: {reason}"),
        }
    }

    fn check_endpoints(&self, src: Vertex, dst: Vertex) -> Result<(), Ignored> {
        if let Some(&bad) = [src, dst].iter().find(|&&v| v >= self.v_count) {
            return Err(Ignored::OutOfRange(bad));
        }
        if src == dst {
            return Err(Ignored::SelfLoop(src.to_string()));
        }
        Ok(())
    }

    /// Whether `v` is a vertex of this graph.
    pub fn contains_vertex(&self, v: Vertex) -> bool {
        v < self.v_count
    }

    /// Weight of `src -> dst`, if that edge exists.
    pub fn weight(&self, src: Vertex, dst: Vertex) -> Option<Weight> {
        self.matrix
            .get(src)
            .and_then(|row| row.get(dst))
            .copied()
            .filter(|&w| w > 0)
    }

    /// Whether `src -> dst` exists.
    pub fn has_edge(&self, src: Vertex, dst: Vertex) -> bool {
        self.weight(src, dst).is_some()
    }

    /// All vertices, ascending.
    pub fn vertices(&self) -> Vec<Vertex> {
        (0..self.v_count).collect()
    }

    /// All edges in row-major order (by `src`, then `dst`).
    pub fn edges(&self) -> Vec<WeightedEdge> {
        (0..self.v_count)
            .flat_map(|src| {
                self.out_edges(src)
                    .map(move |(dst, weight)| WeightedEdge::new(src, dst, weight))
            })
            .collect()
    }

    /// Direct successors of `v`, ascending. Empty when `v` is out of range.
    pub fn successors(&self, v: Vertex) -> Vec<Vertex> {
        if !self.contains_vertex(v) {
            return Vec::new();
        }
        self.out_edges(v).map(|(dst, _)| dst).collect()
    }

    fn out_edges(&self, src: Vertex) -> impl Iterator<Item = (Vertex, Weight)> + '_ {
        self.matrix[src]
            .iter()
            .enumerate()
            .filter(|&(_, &w)| w > 0)
            .map(|(dst, &w)| (dst, w))
    }

    /// Whether every consecutive pair of `path` is joined by an edge in that
    /// direction. The empty path and single-vertex paths are valid.
    ///
    /// # Panics
    ///
    /// Panics if a consecutive pair references a vertex outside the graph.
    /// Use [`try_is_valid_path`](Self::try_is_valid_path) for unchecked input.
    pub fn is_valid_path(&self, path: &[Vertex]) -> bool {
        path.windows(2).all(|step| self.matrix[step[0]][step[1]] > 0)
    }

    /// Checked variant of [`is_valid_path`](Self::is_valid_path).
    pub fn try_is_valid_path(&self, path: &[Vertex]) -> GraphResult<bool> {
        if let Some(&vertex) = path.iter().find(|&&v| !self.contains_vertex(v)) {
            return Err(GraphError::VertexOutOfRange {
                vertex,
                count: self.v_count,
            });
        }
        Ok(self.is_valid_path(path))
    }

    /// Depth-first search from `start`, lower indices first.
    ///
    /// Returns an empty list when `start` is out of range. An out-of-range
    /// `end` is ignored.
    pub fn dfs(&self, start: Vertex, end: Option<Vertex>) -> Vec<Vertex> {
        self.search(start, end, SearchOrder::DepthFirst)
    }

    /// Breadth-first search from `start`, lower indices first.
    ///
    /// Same handling of `start` and `end` as [`dfs`](Self::dfs).
    pub fn bfs(&self, start: Vertex, end: Option<Vertex>) -> Vec<Vertex> {
        self.search(start, end, SearchOrder::BreadthFirst)
    }

    fn search(&self, start: Vertex, end: Option<Vertex>, order: SearchOrder) -> Vec<Vertex> {
        if !self.contains_vertex(start) {
            return Vec::new();
        }
        let end = end.filter(|&v| self.contains_vertex(v));
        walk(start, end.as_ref(), order, |&v| {
            self.out_edges(v).map(|(dst, _)| dst)
        })
    }

    /// Whether the graph contains a directed cycle.
    ///
    /// Repeatedly removes vertices with no incoming edges (Kahn's algorithm);
    /// any vertex left with a nonzero in-degree lies on or behind a cycle.
    pub fn has_cycle(&self) -> bool {
        let mut in_degree = vec![0usize; self.v_count];
        for edge in self.edges() {
            in_degree[edge.dst] += 1;
        }

        let mut queue: VecDeque<Vertex> = (0..self.v_count)
            .filter(|&v| in_degree[v] == 0)
            .collect();

        while let Some(v) = queue.pop_front() {
            for (dst, _) in self.out_edges(v) {
                in_degree[dst] -= 1;
                if in_degree[dst] == 0 {
                    queue.push_back(dst);
                }
            }
        }

        let stuck = in_degree.iter().filter(|&&d| d != 0).count();
        log::debug!("has_cycle: {stuck} of {} vertices not eliminated", self.v_count);
        stuck > 0
    }

    /// Shortest distance from `src` to every vertex; `f64::INFINITY` when
    /// unreachable.
    ///
    /// Lazy-deletion Dijkstra without decrease-key. Heap entries are ordered
    /// by `(vertex, distance)`, so on equal distances the lower vertex index
    /// surfaces first. A popped entry is accepted only if it improves on the
    /// distance already recorded for its vertex, and each accepted vertex
    /// pushes a candidate for every out-edge.
    ///
    /// # Panics
    ///
    /// Panics if `src` is out of range. Use [`try_dijkstra`](Self::try_dijkstra)
    /// for unchecked input.
    pub fn dijkstra(&self, src: Vertex) -> Vec<f64> {
        assert!(
            self.contains_vertex(src),
            "dijkstra source {src} out of range for {} vertices",
            self.v_count
        );

        let mut best: Vec<Option<u64>> = vec![None; self.v_count];
        let mut heap: BinaryHeap<Reverse<(Vertex, u64)>> = BinaryHeap::new();
        heap.push(Reverse((src, 0)));

        let mut pops = 0usize;
        while let Some(Reverse((vertex, distance))) = heap.pop() {
            pops += 1;
            if best[vertex].is_some_and(|known| known <= distance) {
                continue;
            }
            best[vertex] = Some(distance);
            for (dst, weight) in self.out_edges(vertex) {
                heap.push(Reverse((dst, distance + u64::from(weight))));
            }
        }
        log::debug!("dijkstra({src}): {pops} heap pops over {} vertices", self.v_count);

        best.into_iter()
            .map(|d| d.map_or(f64::INFINITY, |d| d as f64))
            .collect()
    }

    /// Checked variant of [`dijkstra`](Self::dijkstra).
    pub fn try_dijkstra(&self, src: Vertex) -> GraphResult<Vec<f64>> {
        if !self.contains_vertex(src) {
            return Err(GraphError::VertexOutOfRange {
                vertex: src,
                count: self.v_count,
            });
        }
        Ok(self.dijkstra(src))
    }
}

impl FromIterator<(Vertex, Vertex, Weight)> for DirectedGraph {
    fn from_iter<T: IntoIterator<Item = (Vertex, Vertex, Weight)>>(iter: T) -> Self {
        let edges: Vec<_> = iter.into_iter().collect();
        Self::from_edges(&edges)
    }
}

impl fmt::Display for DirectedGraph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.v_count == 0 {
            return f.write_str(EMPTY_GRAPH_BANNER);
        }
        writeln!(f, "GRAPH ({} vertices):", self.v_count)?;
        let header: Vec<String> = (0..self.v_count).map(|i| format!("{i:2}")).collect();
        writeln!(f, "   |{}", header.join(" "))?;
        writeln!(f, "{}", "-".repeat(self.v_count * 3 + 3))?;
        for (i, row) in self.matrix.iter().enumerate() {
            let cells: Vec<String> = row.iter().map(|w| format!("{w:2}")).collect();
            writeln!(f, "{i:2} |{}", cells.join(" "))?;
        }
        Ok(())
    }
}
