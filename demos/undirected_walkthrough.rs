//! Undirected graph walkthrough: mutation, traversal, components, cycles.

use graph_engine::*;

fn main() {
    let mut graph = UndirectedGraph::new();
    println!("{}", graph);
    for v in ["A", "B", "C", "D", "E"] {
        graph.add_vertex(v);
    }
    graph.add_vertex("A");
    for (u, v) in [
        ("A", "B"),
        ("A", "C"),
        ("B", "C"),
        ("B", "D"),
        ("C", "D"),
        ("C", "E"),
        ("D", "E"),
        ("B", "C"),
    ] {
        graph.add_edge(u, v);
    }
    println!("{}", graph);

    graph.remove_vertex("DOES NOT EXIST");
    graph.remove_edge("A", "B");
    graph.remove_vertex("D");
    println!("{}", graph);
    println!("edges: {:?}", graph.edges());

    let graph = UndirectedGraph::from_edges(&[
        ("A", "E"),
        ("A", "C"),
        ("B", "E"),
        ("C", "E"),
        ("C", "D"),
        ("C", "B"),
        ("B", "D"),
        ("E", "D"),
        ("B", "H"),
        ("Q", "G"),
        ("F", "G"),
    ]);
    for start in ["A", "B", "Q", "Z"] {
        println!(
            "{} DFS:{:?} BFS:{:?}",
            start,
            graph.dfs(start, None),
            graph.bfs(start, None)
        );
    }
    println!("components: {}", graph.count_connected_components());
    println!("has_cycle: {}", graph.has_cycle());
}
