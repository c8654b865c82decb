//! Depth-first and breadth-first traversals over any [`Graph`].
//!
//! Each function returns the vertices reachable from `start` in the order they were visited,
//! every one exactly once. Neighbors are considered in the order the graph lists them. A start
//! vertex the graph doesn't know has no neighbors, so the result is just `[start]`.
//!
//! # Examples
//!
//! ```
//! use dsa::graph::{traversal, AdjacencyList};
//!
//! let mut graph = AdjacencyList::directed();
//! graph.add_edge(1, 2, ());
//! graph.add_edge(1, 3, ());
//! graph.add_edge(2, 4, ());
//! graph.add_edge(4, 1, ());
//!
//! assert_eq!(traversal::dfs_recursive(&graph, &1), vec![1, 2, 4, 3]);
//! assert_eq!(traversal::dfs_iterative(&graph, &1), vec![1, 2, 4, 3]);
//! assert_eq!(traversal::bfs(&graph, &1), vec![1, 2, 3, 4]);
//! ```

use std::collections::{HashSet, VecDeque};
use std::hash::Hash;

use super::Graph;

/// Depth-first traversal that recurses into each unvisited neighbor before moving on to the
/// next one. Returns the vertices in pre-order.
pub fn dfs_recursive<G>(graph: &G, start: &G::Vertex) -> Vec<G::Vertex>
where
    G: Graph + ?Sized,
    G::Vertex: Eq + Hash + Clone,
{
    fn visit<G>(
        graph: &G,
        vertex: G::Vertex,
        visited: &mut HashSet<G::Vertex>,
        path: &mut Vec<G::Vertex>,
    ) where
        G: Graph + ?Sized,
        G::Vertex: Eq + Hash + Clone,
    {
        let neighbors = graph.weighted_neighbors(&vertex);
        visited.insert(vertex.clone());
        path.push(vertex);
        for (neighbor, _) in neighbors {
            if !visited.contains(&neighbor) {
                visit(graph, neighbor, visited, path);
            }
        }
    }

    let mut visited = HashSet::new();
    let mut path = Vec::new();
    visit(graph, start.clone(), &mut visited, &mut path);
    log::trace!("recursive depth-first traversal visited {} vertices", path.len());
    path
}

/// Depth-first traversal with an explicit stack. Visits vertices in the same order as
/// [`dfs_recursive`] without growing the call stack.
pub fn dfs_iterative<G>(graph: &G, start: &G::Vertex) -> Vec<G::Vertex>
where
    G: Graph + ?Sized,
    G::Vertex: Eq + Hash + Clone,
{
    let mut visited = HashSet::new();
    let mut path = Vec::new();
    let mut stack = vec![start.clone()];

    while let Some(vertex) = stack.pop() {
        if !visited.insert(vertex.clone()) {
            continue;
        }
        let neighbors = graph.weighted_neighbors(&vertex);
        path.push(vertex);
        // Reversed so the first neighbor is popped first.
        for (neighbor, _) in neighbors.into_iter().rev() {
            if !visited.contains(&neighbor) {
                stack.push(neighbor);
            }
        }
    }
    log::trace!("iterative depth-first traversal visited {} vertices", path.len());
    path
}

/// Breadth-first traversal. A vertex is marked visited when it is queued, so it is queued at
/// most once.
pub fn bfs<G>(graph: &G, start: &G::Vertex) -> Vec<G::Vertex>
where
    G: Graph + ?Sized,
    G::Vertex: Eq + Hash + Clone,
{
    let mut visited = HashSet::from([start.clone()]);
    let mut queue = VecDeque::from([start.clone()]);
    let mut path = Vec::new();

    while let Some(vertex) = queue.pop_front() {
        for (neighbor, _) in graph.weighted_neighbors(&vertex) {
            if visited.insert(neighbor.clone()) {
                queue.push_back(neighbor);
            }
        }
        path.push(vertex);
    }
    log::trace!("breadth-first traversal visited {} vertices", path.len());
    path
}
