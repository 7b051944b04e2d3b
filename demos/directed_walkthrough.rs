//! Directed graph walkthrough: build, traverse, break cycles, shortest paths.

use graph_engine::*;

const EDGES: [(Vertex, Vertex, Weight); 7] = [
    (0, 1, 10),
    (4, 0, 12),
    (1, 4, 15),
    (4, 3, 3),
    (3, 1, 5),
    (2, 1, 23),
    (3, 2, 7),
];

fn main() {
    // Build incrementally
    let mut graph = DirectedGraph::new();
    print!("{}", graph);
    for _ in 0..5 {
        graph.add_vertex();
    }
    for (src, dst, weight) in EDGES {
        graph.add_edge(src, dst, weight);
    }
    println!("{}", graph);

    // Or from an edge list
    let graph = DirectedGraph::from_edges(&EDGES);
    println!("edges: {:?}", graph.edges());
    println!("vertices: {:?}", graph.vertices());

    let paths: [&[Vertex]; 6] = [&[0, 1, 4, 3], &[1, 3, 2, 1], &[0, 4], &[4, 0], &[], &[2]];
    for path in paths {
        println!("{:?} {}", path, graph.is_valid_path(path));
    }

    for start in 0..5 {
        println!(
            "{} DFS:{:?} BFS:{:?}",
            start,
            graph.dfs(start, None),
            graph.bfs(start, None)
        );
    }

    // Break the cycles one edge at a time
    let mut graph = DirectedGraph::from_edges(&EDGES);
    for (src, dst) in [(3, 1), (4, 0), (3, 2)] {
        graph.remove_edge(src, dst);
        println!("removed {src}->{dst}: has_cycle = {}", graph.has_cycle());
    }
    graph.add_unit_edge(2, 3);
    graph.add_edge(4, 0, 99);
    println!("after re-adding 4->0: has_cycle = {}", graph.has_cycle());

    let mut graph = DirectedGraph::from_edges(&EDGES);
    for i in 0..5 {
        println!("DIJKSTRA {} {:?}", i, graph.dijkstra(i));
    }
    graph.remove_edge(4, 3);
    println!("\n{}", graph);
    for i in 0..5 {
        println!("DIJKSTRA {} {:?}", i, graph.dijkstra(i));
    }
}
