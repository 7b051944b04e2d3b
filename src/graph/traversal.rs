//! Graph traversal shared by both representations (DFS and BFS).

use std::collections::{HashSet, VecDeque};
use std::fmt::Debug;
use std::hash::Hash;

/// Frontier discipline of a graph search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchOrder {
    /// Explicit stack (LIFO).
    DepthFirst,
    /// FIFO queue.
    BreadthFirst,
}

/// Walk the graph from `start`, returning vertices in visit order.
///
/// `neighbors` must yield the adjacent vertices of a vertex in ascending
/// order. Depth-first pushes them in reverse so the stack pops the smallest
/// first; breadth-first enqueues them as given. When `end` is popped it is
/// appended and the walk stops.
pub(crate) fn walk<V, I, F>(
    start: V,
    end: Option<&V>,
    order: SearchOrder,
    mut neighbors: F,
) -> Vec<V>
where
    V: Clone + Eq + Hash + Debug,
    I: IntoIterator<Item = V>,
    F: FnMut(&V) -> I,
{
    let mut visited: HashSet<V> = HashSet::new();
    let mut visited_order: Vec<V> = Vec::new();
    let mut frontier: VecDeque<V> = VecDeque::new();
    frontier.push_back(start);

    loop {
        let current = match order {
            SearchOrder::DepthFirst => frontier.pop_back(),
            SearchOrder::BreadthFirst => frontier.pop_front(),
        };
        let Some(current) = current else { break };

        if end == Some(&current) {
            log::trace!("{:?}: reached end vertex {:?}", order, current);
            visited_order.push(current);
            break;
        }
        if !visited.insert(current.clone()) {
            continue;
        }
        visited_order.push(current.clone());

        // Already-visited neighbors would be skipped on pop anyway.
        let next: Vec<V> = neighbors(&current)
            .into_iter()
            .filter(|n| !visited.contains(n))
            .collect();
        log::trace!("{:?}: {:?} -> {:?}", order, current, next);

        match order {
            SearchOrder::DepthFirst => frontier.extend(next.into_iter().rev()),
            SearchOrder::BreadthFirst => frontier.extend(next),
        }
    }

    visited_order
}
