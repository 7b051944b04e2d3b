//! CLI command implementations.

use crate::graph::{DirectedGraph, SearchOrder, UndirectedGraph};
use crate::types::{GraphError, GraphResult, Vertex, Weight, DEFAULT_WEIGHT};

/// A graph assembled from command-line edge specs.
#[derive(Debug, Clone)]
pub enum GraphInput {
    Directed(DirectedGraph),
    Undirected(UndirectedGraph),
}

impl GraphInput {
    /// Build a graph from `--edge` specs.
    ///
    /// Directed specs are `SRC:DST[:WEIGHT]` (weight defaults to
    /// [`DEFAULT_WEIGHT`]); undirected specs are `U:V`.
    pub fn from_specs(directed: bool, specs: &[String]) -> GraphResult<Self> {
        if directed {
            let edges = specs
                .iter()
                .map(|s| parse_directed_edge(s))
                .collect::<GraphResult<Vec<_>>>()?;
            Ok(Self::Directed(DirectedGraph::from_edges(&edges)))
        } else {
            let edges = specs
                .iter()
                .map(|s| parse_undirected_edge(s))
                .collect::<GraphResult<Vec<_>>>()?;
            Ok(Self::Undirected(UndirectedGraph::from_edges(&edges)))
        }
    }

    fn kind(&self) -> &'static str {
        match self {
            Self::Directed(_) => "directed",
            Self::Undirected(_) => "undirected",
        }
    }
}

/// Parse `SRC:DST` or `SRC:DST:WEIGHT`.
pub fn parse_directed_edge(spec: &str) -> GraphResult<(Vertex, Vertex, Weight)> {
    let invalid = |reason: &str| GraphError::InvalidEdgeSpec {
        spec: spec.to_string(),
        reason: reason.to_string(),
    };
    let parts: Vec<&str> = spec.split(':').map(str::trim).collect();
    let (src, dst, weight) = match parts.as_slice() {
        [src, dst] => (*src, *dst, None),
        [src, dst, weight] => (*src, *dst, Some(*weight)),
        _ => return Err(invalid("expected SRC:DST[:WEIGHT]")),
    };
    let src = src
        .parse()
        .map_err(|_| invalid("source is not a vertex index"))?;
    let dst = dst
        .parse()
        .map_err(|_| invalid("destination is not a vertex index"))?;
    let weight = match weight {
        Some(w) => w
            .parse()
            .map_err(|_| invalid("weight is not a non-negative integer"))?,
        None => DEFAULT_WEIGHT,
    };
    Ok((src, dst, weight))
}

/// Parse `U:V`.
pub fn parse_undirected_edge(spec: &str) -> GraphResult<(String, String)> {
    match spec.split_once(':') {
        Some((u, v)) if !u.trim().is_empty() && !v.trim().is_empty() => {
            Ok((u.trim().to_string(), v.trim().to_string()))
        }
        _ => Err(GraphError::InvalidEdgeSpec {
            spec: spec.to_string(),
            reason: "expected U:V".to_string(),
        }),
    }
}

/// Parse a directed-graph vertex index.
pub fn parse_vertex(s: &str) -> GraphResult<Vertex> {
    s.trim()
        .parse()
        .map_err(|_| GraphError::InvalidVertex(s.to_string()))
}

fn print_json(value: &serde_json::Value) {
    println!("{}", serde_json::to_string_pretty(value).unwrap_or_default());
}

/// Print the graph.
pub fn cmd_show(graph: &GraphInput, json: bool) -> GraphResult<()> {
    if json {
        let info = match graph {
            GraphInput::Directed(g) => serde_json::json!({
                "kind": graph.kind(),
                "vertices": g.vertices(),
                "edges": g.edges(),
            }),
            GraphInput::Undirected(g) => serde_json::json!({
                "kind": graph.kind(),
                "vertices": g.vertices(),
                "edges": g.edges(),
            }),
        };
        print_json(&info);
    } else {
        match graph {
            GraphInput::Directed(g) => print!("{g}"),
            GraphInput::Undirected(g) => println!("{g}"),
        }
    }
    Ok(())
}

/// List edges.
pub fn cmd_edges(graph: &GraphInput, json: bool) -> GraphResult<()> {
    match graph {
        GraphInput::Directed(g) => {
            let edges = g.edges();
            if json {
                print_json(&serde_json::json!(edges));
            } else {
                for edge in &edges {
                    println!("{edge}");
                }
            }
        }
        GraphInput::Undirected(g) => {
            let edges = g.edges();
            if json {
                print_json(&serde_json::json!(edges));
            } else {
                for edge in &edges {
                    println!("{edge}");
                }
            }
        }
    }
    Ok(())
}

/// Check whether the given vertex sequence is a path.
pub fn cmd_path(graph: &GraphInput, vertices: &[String], json: bool) -> GraphResult<()> {
    let valid = match graph {
        GraphInput::Directed(g) => {
            let path = vertices
                .iter()
                .map(|v| parse_vertex(v))
                .collect::<GraphResult<Vec<_>>>()?;
            g.try_is_valid_path(&path)?
        }
        GraphInput::Undirected(g) => g.is_valid_path(vertices),
    };
    if json {
        print_json(&serde_json::json!({"path": vertices, "valid": valid}));
    } else {
        println!("[{}] {}", vertices.join(", "), valid);
    }
    Ok(())
}

/// Run DFS or BFS from `start`.
pub fn cmd_search(
    graph: &GraphInput,
    start: &str,
    end: Option<&str>,
    order: SearchOrder,
    json: bool,
) -> GraphResult<()> {
    let visited: Vec<String> = match graph {
        GraphInput::Directed(g) => {
            let start = parse_vertex(start)?;
            let end = end.map(parse_vertex).transpose()?;
            let found = match order {
                SearchOrder::DepthFirst => g.dfs(start, end),
                SearchOrder::BreadthFirst => g.bfs(start, end),
            };
            found.iter().map(ToString::to_string).collect()
        }
        GraphInput::Undirected(g) => match order {
            SearchOrder::DepthFirst => g.dfs(start, end),
            SearchOrder::BreadthFirst => g.bfs(start, end),
        },
    };
    let label = match order {
        SearchOrder::DepthFirst => "dfs",
        SearchOrder::BreadthFirst => "bfs",
    };
    if json {
        print_json(&serde_json::json!({"search": label, "start": start, "visited": visited}));
    } else {
        println!("{} {}: [{}]", label.to_uppercase(), start, visited.join(", "));
    }
    Ok(())
}

/// Report whether the graph has a cycle.
pub fn cmd_cycle(graph: &GraphInput, json: bool) -> GraphResult<()> {
    let has_cycle = match graph {
        GraphInput::Directed(g) => g.has_cycle(),
        GraphInput::Undirected(g) => g.has_cycle(),
    };
    if json {
        print_json(&serde_json::json!({"kind": graph.kind(), "has_cycle": has_cycle}));
    } else {
        println!("Has cycle: {has_cycle}");
    }
    Ok(())
}

/// Count connected components of an undirected graph.
pub fn cmd_components(graph: &GraphInput, json: bool) -> GraphResult<()> {
    let GraphInput::Undirected(g) = graph else {
        return Err(GraphError::Unsupported(
            "components requires an undirected graph",
        ));
    };
    let count = g.count_connected_components();
    if json {
        print_json(&serde_json::json!({"components": count}));
    } else {
        println!("Connected components: {count}");
    }
    Ok(())
}

/// Shortest distances from `source` in a directed graph.
pub fn cmd_dijkstra(graph: &GraphInput, source: &str, json: bool) -> GraphResult<()> {
    let GraphInput::Directed(g) = graph else {
        return Err(GraphError::Unsupported("dijkstra requires a directed graph"));
    };
    let source = parse_vertex(source)?;
    let distances = g.try_dijkstra(source)?;
    if json {
        // JSON has no infinity; unreachable vertices become null.
        let finite: Vec<Option<u64>> = distances
            .iter()
            .map(|&d| d.is_finite().then_some(d as u64))
            .collect();
        print_json(&serde_json::json!({"source": source, "distances": finite}));
    } else {
        for (v, d) in distances.iter().enumerate() {
            if d.is_finite() {
                println!("{v}: {d}");
            } else {
                println!("{v}: inf");
            }
        }
    }
    Ok(())
}
