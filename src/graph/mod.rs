//! Weighted graphs in two representations and the traversals that run over either.
//!
//! [`AdjacencyList`] suits sparse graphs and grows without bound. [`AdjacencyMatrix`] suits dense
//! graphs with a vertex count known up front. Both implement [`Graph`], which is all the
//! [`traversal`] functions need.
//!
//! Neither representation is synchronized. Share one across threads only behind a lock.
//!
//! # Examples
//!
//! ```
//! use dsa::graph::{traversal, AdjacencyList};
//!
//! let mut graph = AdjacencyList::undirected();
//! graph.add_edge('A', 'B', 1);
//! graph.add_edge('B', 'C', 2);
//!
//! assert!(graph.has_edge(&'B', &'A'));
//! assert_eq!(traversal::bfs(&graph, &'A'), vec!['A', 'B', 'C']);
//! ```

pub mod list;
pub mod matrix;
pub mod traversal;

pub use list::AdjacencyList;
pub use matrix::AdjacencyMatrix;

/// Whether an edge from `u` to `v` also connects `v` back to `u`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Direction {
    /// Edges only lead from their first endpoint to their second.
    Directed,
    /// Every edge is registered for both endpoints.
    #[default]
    Undirected,
}

impl Direction {
    /// Whether edges are one-way.
    pub fn is_directed(self) -> bool {
        self == Direction::Directed
    }
}

/// Anything that can list the outgoing edges of a vertex. This is the only view of a graph the
/// traversals use.
pub trait Graph {
    /// How a vertex is identified.
    type Vertex;
    /// The weight carried by an edge.
    type Weight;

    /// The `(neighbor, weight)` pairs of the edges leaving `vertex`, in the graph's own order.
    /// A vertex the graph doesn't know has no neighbors.
    fn weighted_neighbors(&self, vertex: &Self::Vertex) -> Vec<(Self::Vertex, Self::Weight)>;
}
