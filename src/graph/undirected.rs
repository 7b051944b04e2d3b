//! Undirected, unweighted graph stored as adjacency lists keyed by vertex name.

use std::collections::{HashMap, HashSet};
use std::fmt;

use crate::types::{Ignored, UndirectedEdge, INLINE_RENDER_LIMIT};

use super::traversal::{walk, SearchOrder};

/// Undirected graph with string-named vertices.
///
/// Every edge is stored twice, once in each endpoint's neighbor list, and
/// neighbor lists keep insertion order. There are no self-loops and no
/// parallel edges. Vertices are enumerated in the order they were created.
#[derive(Debug, Clone, Default)]
pub struct UndirectedGraph {
    /// Vertex name -> neighbor names.
    adj_list: HashMap<String, Vec<String>>,
    /// Vertex names in creation order.
    order: Vec<String>,
}

impl UndirectedGraph {
    /// Create an empty graph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a graph by applying [`add_edge`](Self::add_edge) to each pair.
    pub fn from_edges<A: AsRef<str>, B: AsRef<str>>(edges: &[(A, B)]) -> Self {
        let mut graph = Self::new();
        for (u, v) in edges {
            graph.add_edge(u.as_ref(), v.as_ref());
        }
        graph
    }

    /// Number of vertices.
    pub fn vertex_count(&self) -> usize {
        self.order.len()
    }

    /// Number of edges.
    pub fn edge_count(&self) -> usize {
        self.adj_list.values().map(Vec::len).sum::<usize>() / 2
    }

    /// Whether `v` is a vertex of this graph.
    pub fn contains_vertex(&self, v: &str) -> bool {
        self.adj_list.contains_key(v)
    }

    /// Neighbors of `v` in insertion order.
    pub fn neighbors(&self, v: &str) -> Option<&[String]> {
        self.adj_list.get(v).map(Vec::as_slice)
    }

    /// Number of neighbors of `v`.
    pub fn degree(&self, v: &str) -> Option<usize> {
        self.adj_list.get(v).map(Vec::len)
    }

    /// Whether `u` and `v` are adjacent.
    pub fn has_edge(&self, u: &str, v: &str) -> bool {
        self.adj_list
            .get(u)
            .is_some_and(|list| list.iter().any(|n| n == v))
    }

    /// Add `v` with no neighbors. Existing vertices keep their edges.
    pub fn add_vertex(&mut self, v: &str) {
        if !self.ensure_vertex(v) {
            log::debug!("add_vertex({v:?}) ignored: already present");
        }
    }

    /// Insert `v` if absent; returns whether it was created.
    fn ensure_vertex(&mut self, v: &str) -> bool {
        if self.adj_list.contains_key(v) {
            return false;
        }
        self.adj_list.insert(v.to_owned(), Vec::new());
        self.order.push(v.to_owned());
        true
    }

    /// Connect `u` and `v`, creating either vertex if needed.
    ///
    /// Does nothing when `u == v` or the edge already exists.
    pub fn add_edge(&mut self, u: &str, v: &str) {
        let checked = if u == v {
            Err(Ignored::SelfLoop(u.to_owned()))
        } else {
            self.ensure_vertex(u);
            self.ensure_vertex(v);
            if self.has_edge(u, v) {
                Err(Ignored::Duplicate(u.to_owned(), v.to_owned()))
            } else {
                Ok(())
            }
        };
        match checked {
            Ok(()) => {
                self.push_neighbor(u, v);
                self.push_neighbor(v, u);
            }
            Err(reason) => log::debug!("add_edge({u:?}, {v:?}) ignored: {reason}"),
        }
    }

    fn push_neighbor(&mut self, of: &str, neighbor: &str) {
        if let Some(list) = self.adj_list.get_mut(of) {
            list.push(neighbor.to_owned());
        }
    }

    /// Disconnect `u` and `v`. Does nothing if either is missing or they are
    /// not adjacent.
    pub fn remove_edge(&mut self, u: &str, v: &str) {
        let checked = match [u, v].into_iter().find(|x| !self.contains_vertex(x)) {
            Some(missing) => Err(Ignored::MissingVertex(missing.to_owned())),
            None if !self.has_edge(u, v) => {
                Err(Ignored::MissingEdge(u.to_owned(), v.to_owned()))
            }
            None => Ok(()),
        };
        match checked {
            Ok(()) => {
                self.drop_neighbor(u, v);
                self.drop_neighbor(v, u);
            }
            Err(reason) => log::debug!("remove_edge({u:?}, {v:?}) ignored: {reason}"),
        }
    }

    fn drop_neighbor(&mut self, of: &str, neighbor: &str) {
        if let Some(list) = self.adj_list.get_mut(of) {
            list.retain(|n| n != neighbor);
        }
    }

    /// Remove `v` and every edge touching it. Does nothing if `v` is absent.
    pub fn remove_vertex(&mut self, v: &str) {
        let Some(former) = self.adj_list.remove(v) else {
            let reason = Ignored::MissingVertex(v.to_owned());
            log::debug!("remove_vertex({v:?}) ignored: {reason}");
            return;
        };
        self.order.retain(|name| name != v);
        for neighbor in &former {
            self.drop_neighbor(neighbor, v);
        }
    }

    /// All vertex names in creation order.
    pub fn vertices(&self) -> Vec<String> {
        self.order.clone()
    }

    /// Every edge exactly once.
    pub fn edges(&self) -> Vec<UndirectedEdge> {
        let mut done: HashSet<&str> = HashSet::new();
        let mut edges = Vec::new();
        for v in &self.order {
            for n in &self.adj_list[v] {
                if !done.contains(n.as_str()) {
                    edges.push(UndirectedEdge::new(v.as_str(), n.as_str()));
                }
            }
            done.insert(v.as_str());
        }
        edges
    }

    /// Whether `path` walks along existing edges. The empty path is valid;
    /// a path naming an unknown vertex is not.
    pub fn is_valid_path<S: AsRef<str>>(&self, path: &[S]) -> bool {
        if path.iter().any(|v| !self.contains_vertex(v.as_ref())) {
            return false;
        }
        path.windows(2)
            .all(|step| self.has_edge(step[0].as_ref(), step[1].as_ref()))
    }

    /// Depth-first search from `start`, neighbors in lexicographic order.
    ///
    /// Returns an empty list when `start` is unknown. An unknown `end` is
    /// ignored.
    pub fn dfs(&self, start: &str, end: Option<&str>) -> Vec<String> {
        self.search(start, end, SearchOrder::DepthFirst)
    }

    /// Breadth-first search from `start`, neighbors in lexicographic order.
    pub fn bfs(&self, start: &str, end: Option<&str>) -> Vec<String> {
        self.search(start, end, SearchOrder::BreadthFirst)
    }

    fn search(&self, start: &str, end: Option<&str>, order: SearchOrder) -> Vec<String> {
        if !self.contains_vertex(start) {
            return Vec::new();
        }
        let end = end.filter(|v| self.contains_vertex(v));
        walk(start, end.as_ref(), order, |v| self.sorted_neighbors(v))
            .into_iter()
            .map(str::to_owned)
            .collect()
    }

    fn sorted_neighbors(&self, v: &str) -> Vec<&str> {
        let mut names: Vec<&str> = self
            .adj_list
            .get(v)
            .map(|list| list.iter().map(String::as_str).collect())
            .unwrap_or_default();
        names.sort_unstable();
        names
    }

    /// Number of connected components; 0 for an empty graph.
    pub fn count_connected_components(&self) -> usize {
        let mut reached: HashSet<&str> = HashSet::new();
        let mut components = 0;
        for v in &self.order {
            if reached.contains(v.as_str()) {
                continue;
            }
            components += 1;
            let component = walk(v.as_str(), None, SearchOrder::DepthFirst, |x| {
                self.sorted_neighbors(x)
            });
            reached.extend(component);
        }
        log::debug!(
            "count_connected_components: {components} over {} vertices",
            self.vertex_count()
        );
        components
    }

    /// Whether the graph contains a cycle.
    ///
    /// Iterative DFS carrying each vertex's parent. Reaching an already
    /// visited neighbor other than the parent is a back-edge. When the stack
    /// empties with vertices left over, the search restarts from the first
    /// unvisited vertex with no parent.
    pub fn has_cycle(&self) -> bool {
        let mut unvisited: HashSet<&str> = self.order.iter().map(String::as_str).collect();
        let mut starts = self.order.iter().map(String::as_str);
        let mut stack: Vec<(&str, Option<&str>)> = Vec::new();

        loop {
            if stack.is_empty() {
                match starts.find(|v| unvisited.contains(v)) {
                    Some(v) => stack.push((v, None)),
                    None => break,
                }
            }
            let Some((vertex, parent)) = stack.pop() else {
                break;
            };
            unvisited.remove(vertex);

            for neighbor in self.sorted_neighbors(vertex).into_iter().rev() {
                if unvisited.contains(neighbor) {
                    stack.push((neighbor, Some(vertex)));
                } else if Some(neighbor) != parent {
                    log::debug!("has_cycle: back-edge {vertex} - {neighbor}");
                    return true;
                }
            }
        }
        false
    }
}

impl<A: AsRef<str>, B: AsRef<str>> FromIterator<(A, B)> for UndirectedGraph {
    fn from_iter<T: IntoIterator<Item = (A, B)>>(iter: T) -> Self {
        let mut graph = Self::new();
        for (u, v) in iter {
            graph.add_edge(u.as_ref(), v.as_ref());
        }
        graph
    }
}

impl fmt::Display for UndirectedGraph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let entries: Vec<String> = self
            .order
            .iter()
            .map(|v| {
                let quoted: Vec<String> =
                    self.adj_list[v].iter().map(|n| format!("'{n}'")).collect();
                format!("{v}: [{}]", quoted.join(", "))
            })
            .collect();
        let body = entries.join("\n  ");
        if body.len() < INLINE_RENDER_LIMIT {
            write!(f, "GRAPH: {{{}}}", entries.join(", "))
        } else {
            write!(f, "GRAPH: {{\n  {body}}}")
        }
    }
}
