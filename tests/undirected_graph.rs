//! UndirectedGraph tests: list mutation, traversal, components, cycles.

use std::collections::HashSet;

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

use graph_engine::graph::UndirectedGraph;
use graph_engine::types::UndirectedEdge;

// ==================== Helper ====================

/// A-B, A-C, B-C, B-D, C-D, C-E, D-E
fn five_vertex_graph() -> UndirectedGraph {
    UndirectedGraph::from_edges(&[
        ("A", "B"),
        ("A", "C"),
        ("B", "C"),
        ("B", "D"),
        ("C", "D"),
        ("C", "E"),
        ("D", "E"),
    ])
}

/// Two components: {A, B, C, D, E, H} and {F, G, Q}.
fn two_component_graph() -> UndirectedGraph {
    UndirectedGraph::from_edges(&[
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
    ])
}

fn edge_set(graph: &UndirectedGraph) -> HashSet<UndirectedEdge> {
    graph.edges().into_iter().collect()
}

fn e(u: &str, v: &str) -> UndirectedEdge {
    UndirectedEdge::new(u, v)
}

// ==================== Construction & Mutation Tests ====================

#[test]
fn test_add_vertex_is_idempotent() {
    let mut graph = UndirectedGraph::new();
    for v in ["A", "B", "C", "D", "E"] {
        graph.add_vertex(v);
    }
    graph.add_vertex("A");
    assert_eq!(graph.vertices(), vec!["A", "B", "C", "D", "E"]);
    assert_eq!(graph.edge_count(), 0);

    graph.add_edge("A", "B");
    graph.add_vertex("A");
    assert!(graph.has_edge("A", "B"));
    assert_eq!(graph.neighbors("A").unwrap(), ["B".to_string()]);
}

#[test]
fn test_add_edge_creates_vertices_symmetrically() {
    let mut graph = UndirectedGraph::new();
    graph.add_edge("X", "Y");
    assert_eq!(graph.vertices(), vec!["X", "Y"]);
    assert!(graph.has_edge("X", "Y"));
    assert!(graph.has_edge("Y", "X"));
    assert_eq!(graph.degree("X"), Some(1));
    assert_eq!(graph.degree("Y"), Some(1));
}

#[test]
fn test_add_edge_ignores_self_loop_and_duplicate() {
    let mut graph = five_vertex_graph();
    let before = edge_set(&graph);

    graph.add_edge("B", "C");
    graph.add_edge("C", "B");
    graph.add_edge("A", "A");

    assert_eq!(edge_set(&graph), before);
    assert_eq!(graph.edge_count(), 7);
    assert_eq!(graph.degree("B"), Some(3));
    // Self-loop request does not create a vertex either.
    graph.add_edge("Z", "Z");
    assert!(!graph.contains_vertex("Z"));
}

#[test]
fn test_neighbor_lists_keep_insertion_order() {
    let graph = five_vertex_graph();
    assert_eq!(graph.neighbors("C").unwrap(), ["A", "B", "D", "E"]);
    assert_eq!(graph.neighbors("D").unwrap(), ["B", "C", "E"]);
    assert!(graph.neighbors("Q").is_none());
}

#[test]
fn test_edges_each_listed_once() {
    let graph = five_vertex_graph();
    let edges = graph.edges();
    assert_eq!(edges.len(), 7);
    assert_eq!(
        edges,
        vec![
            e("A", "B"),
            e("A", "C"),
            e("B", "C"),
            e("B", "D"),
            e("C", "D"),
            e("C", "E"),
            e("D", "E"),
        ]
    );
}

#[test]
fn test_undirected_edge_equality_ignores_order() {
    assert_eq!(e("A", "B"), e("B", "A"));
    let set: HashSet<UndirectedEdge> = [e("A", "B"), e("B", "A")].into_iter().collect();
    assert_eq!(set.len(), 1);
    assert!(e("A", "B").touches("B"));
}

#[test]
fn test_remove_edge() {
    let mut graph = five_vertex_graph();
    graph.remove_edge("A", "B");
    assert!(!graph.has_edge("A", "B"));
    assert!(!graph.has_edge("B", "A"));
    assert_eq!(graph.edge_count(), 6);

    let before = edge_set(&graph);
    graph.remove_edge("A", "B"); // already gone
    graph.remove_edge("A", "Z"); // unknown vertex
    graph.remove_edge("A", "E"); // never existed
    assert_eq!(edge_set(&graph), before);
    assert!(!graph.contains_vertex("Z"));
}

#[test]
fn test_remove_vertex_strips_neighbors() {
    let mut graph = five_vertex_graph();
    graph.remove_vertex("DOES NOT EXIST");
    assert_eq!(graph.vertex_count(), 5);

    graph.remove_edge("A", "B");
    graph.remove_vertex("D");
    assert_eq!(graph.vertices(), vec!["A", "B", "C", "E"]);
    assert_eq!(graph.edges(), vec![e("A", "C"), e("B", "C"), e("C", "E")]);
    assert_eq!(graph.neighbors("B").unwrap(), ["C"]);
    assert_eq!(graph.neighbors("E").unwrap(), ["C"]);
}

#[test]
fn test_edge_set_after_random_mutations() {
    let names = ["A", "B", "C", "D", "E", "F"];
    let mut rng = StdRng::seed_from_u64(11);
    let mut graph = UndirectedGraph::new();
    let mut expected: HashSet<UndirectedEdge> = HashSet::new();

    for _ in 0..200 {
        let u = names[rng.gen_range(0..names.len())];
        let v = names[rng.gen_range(0..names.len())];
        if rng.gen_bool(0.6) {
            graph.add_edge(u, v);
            if u != v {
                expected.insert(e(u, v));
            }
        } else {
            graph.remove_edge(u, v);
            expected.remove(&e(u, v));
        }
        assert_eq!(edge_set(&graph), expected);
        assert_eq!(graph.edges().len(), expected.len());
    }
}

// ==================== Path Tests ====================

#[test]
fn test_is_valid_path() {
    let graph = five_vertex_graph();
    assert!(graph.is_valid_path(&["A", "B", "D", "E"]));
    assert!(graph.is_valid_path(&["E", "C", "A"]));
    assert!(!graph.is_valid_path(&["A", "D"]));
    assert!(!graph.is_valid_path(&["A", "Z"]));
    assert!(!graph.is_valid_path(&["Z"]));
    assert!(graph.is_valid_path(&["A"]));
    assert!(graph.is_valid_path::<&str>(&[]));
    assert!(UndirectedGraph::new().is_valid_path::<String>(&[]));
}

// ==================== Traversal Tests ====================

#[test]
fn test_dfs_lexicographic() {
    let graph = two_component_graph();
    assert_eq!(graph.dfs("A", None), vec!["A", "C", "B", "D", "E", "H"]);
    assert_eq!(graph.dfs("Q", None), vec!["Q", "G", "F"]);
}

#[test]
fn test_bfs_lexicographic() {
    let graph = two_component_graph();
    assert_eq!(graph.bfs("A", None), vec!["A", "C", "E", "B", "D", "H"]);
    assert_eq!(graph.bfs("F", None), vec!["F", "G", "Q"]);
}

#[test]
fn test_search_stops_at_end() {
    let graph = two_component_graph();
    assert_eq!(graph.dfs("A", Some("B")), vec!["A", "C", "B"]);
    assert_eq!(graph.bfs("A", Some("D")), vec!["A", "C", "E", "B", "D"]);
}

#[test]
fn test_search_edge_cases() {
    let graph = two_component_graph();
    assert!(graph.dfs("Z", None).is_empty());
    assert!(graph.bfs("Z", Some("A")).is_empty());
    assert_eq!(graph.dfs("A", Some("ZZ")), graph.dfs("A", None));
    assert_eq!(graph.bfs("A", Some("ZZ")), graph.bfs("A", None));
}

#[test]
fn test_multi_character_names() {
    let graph = UndirectedGraph::from_edges(&[("alpha", "beta"), ("alpha", "gamma")]);
    assert_eq!(graph.dfs("alpha", None), vec!["alpha", "beta", "gamma"]);
    assert_eq!(graph.bfs("gamma", None), vec!["gamma", "alpha", "beta"]);
}

// ==================== Component Tests ====================

#[test]
fn test_count_connected_components() {
    assert_eq!(two_component_graph().count_connected_components(), 2);
    assert_eq!(five_vertex_graph().count_connected_components(), 1);
    assert_eq!(UndirectedGraph::new().count_connected_components(), 0);
}

#[test]
fn test_components_without_edges_equal_vertex_count() {
    let mut graph = UndirectedGraph::new();
    for v in ["P", "Q", "R", "S"] {
        graph.add_vertex(v);
    }
    assert_eq!(graph.count_connected_components(), 4);

    graph.add_edge("P", "Q");
    assert_eq!(graph.count_connected_components(), 3);
    graph.remove_vertex("Q");
    assert_eq!(graph.count_connected_components(), 3);
}

#[test]
fn test_single_vertex_is_one_component() {
    let mut graph = UndirectedGraph::new();
    graph.add_vertex("solo");
    assert_eq!(graph.count_connected_components(), 1);
}

// ==================== Cycle Tests ====================

#[test]
fn test_has_cycle_basic() {
    assert!(five_vertex_graph().has_cycle());
    assert!(two_component_graph().has_cycle());
    assert!(UndirectedGraph::from_edges(&[("A", "B"), ("B", "C"), ("C", "A")]).has_cycle());
}

#[test]
fn test_has_cycle_false_for_trees_and_forests() {
    assert!(!UndirectedGraph::new().has_cycle());
    assert!(!UndirectedGraph::from_edges(&[("A", "B")]).has_cycle());
    assert!(!UndirectedGraph::from_edges(&[("A", "B"), ("A", "C"), ("C", "D")]).has_cycle());
    assert!(!UndirectedGraph::from_edges(&[("A", "B"), ("C", "D"), ("E", "F")]).has_cycle());

    let mut graph = UndirectedGraph::from_edges(&[("A", "B"), ("B", "C")]);
    graph.add_vertex("lonely");
    assert!(!graph.has_cycle());
}

#[test]
fn test_has_cycle_in_later_component() {
    // First component is a tree; the cycle is only found after restarting.
    let graph = UndirectedGraph::from_edges(&[
        ("A", "B"),
        ("C", "D"),
        ("D", "E"),
        ("E", "C"),
    ]);
    assert!(graph.has_cycle());
}

#[test]
fn test_has_cycle_after_breaking_cycle() {
    let mut graph = UndirectedGraph::from_edges(&[("A", "B"), ("B", "C"), ("C", "A")]);
    graph.remove_edge("C", "A");
    assert!(!graph.has_cycle());
    graph.add_edge("A", "C");
    assert!(graph.has_cycle());
}

#[test]
fn test_has_cycle_independent_of_insertion_order() {
    let tree = vec![
        ("A", "B"),
        ("A", "C"),
        ("C", "D"),
        ("C", "E"),
        ("F", "G"),
        ("G", "H"),
    ];
    let mut looped = tree.clone();
    looped.push(("H", "F"));

    let mut rng = StdRng::seed_from_u64(3);
    for _ in 0..20 {
        let mut t: Vec<(&str, &str)> = tree
            .iter()
            .map(|&(u, v)| if rng.gen_bool(0.5) { (u, v) } else { (v, u) })
            .collect();
        t.shuffle(&mut rng);
        assert!(!UndirectedGraph::from_edges(&t).has_cycle(), "{:?}", t);

        let mut l = looped.clone();
        l.shuffle(&mut rng);
        assert!(UndirectedGraph::from_edges(&l).has_cycle(), "{:?}", l);
    }
}

// ==================== Rendering Tests ====================

#[test]
fn test_display_inline_and_multiline() {
    assert_eq!(UndirectedGraph::new().to_string(), "GRAPH: {}");

    let mut graph = UndirectedGraph::new();
    for v in ["A", "B", "C", "D", "E"] {
        graph.add_vertex(v);
    }
    assert_eq!(graph.to_string(), "GRAPH: {A: [], B: [], C: [], D: [], E: []}");

    let expected = "GRAPH: {\n  A: ['B', 'C']\n  B: ['A', 'C', 'D']\n  C: ['A', 'B', 'D', 'E']\n  D: ['B', 'C', 'E']\n  E: ['C', 'D']}";
    assert_eq!(five_vertex_graph().to_string(), expected);
}
