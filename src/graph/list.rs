//! A sparse graph storing, for every vertex, the sequence of edges leaving it.
//!
//! # Examples
//!
//! ```
//! use dsa::graph::AdjacencyList;
//!
//! let mut graph = AdjacencyList::directed();
//! graph.add_edge("home", "work", 12);
//! graph.add_vertex("moon");
//!
//! assert!(graph.has_edge(&"home", &"work"));
//! assert!(!graph.has_edge(&"work", &"home"));
//! assert_eq!(graph.neighbors(&"home"), &[("work", 12)]);
//! assert!(graph.neighbors(&"moon").is_empty());
//! assert!(graph.neighbors(&"mars").is_empty());
//! ```

use std::collections::HashMap;
use std::fmt;
use std::hash::Hash;

use super::{Direction, Graph};

/// A weighted graph kept as one edge sequence per vertex. Adding the same edge twice keeps both
/// copies. In an undirected graph every edge `(u, v, w)` has its reciprocal `(v, u, w)`.
#[derive(Clone, Debug)]
pub struct AdjacencyList<V, W> {
    direction: Direction,
    /// Dense index of every known vertex into `vertices` and `edges`.
    index: HashMap<V, usize>,
    vertices: Vec<V>,
    edges: Vec<Vec<(V, W)>>,
    edge_count: usize,
}

impl<V, W> Default for AdjacencyList<V, W> {
    fn default() -> Self {
        Self::new(Direction::default())
    }
}

impl<V, W> AdjacencyList<V, W> {
    /// Generates an empty graph whose edges follow `direction`.
    pub fn new(direction: Direction) -> Self {
        Self {
            direction,
            index: HashMap::new(),
            vertices: Vec::new(),
            edges: Vec::new(),
            edge_count: 0,
        }
    }

    /// Generates an empty graph with one-way edges.
    pub fn directed() -> Self {
        Self::new(Direction::Directed)
    }

    /// Generates an empty graph with two-way edges.
    pub fn undirected() -> Self {
        Self::new(Direction::Undirected)
    }

    /// Whether edges are one-way.
    pub fn is_directed(&self) -> bool {
        self.direction.is_directed()
    }

    /// Every known vertex once, including those without edges. The order is not part of the
    /// contract.
    pub fn vertices(&self) -> impl Iterator<Item = &V> {
        self.vertices.iter()
    }

    /// Number of known vertices.
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Number of `add_edge` calls so far. An undirected edge counts once.
    pub fn edge_count(&self) -> usize {
        self.edge_count
    }
}

impl<V, W> AdjacencyList<V, W>
where
    V: Eq + Hash + Clone,
{
    /// Registers `vertex` without any edges. Registering a known vertex does nothing.
    pub fn add_vertex(&mut self, vertex: V) {
        self.register(vertex);
    }

    /// Appends an edge from `u` to `v`, registering both endpoints. An undirected graph also
    /// appends the edge from `v` to `u`.
    pub fn add_edge(&mut self, u: V, v: V, weight: W)
    where
        W: Copy,
    {
        let u_idx = self.register(u.clone());
        let v_idx = self.register(v.clone());

        self.edges[u_idx].push((v, weight));
        if !self.is_directed() {
            self.edges[v_idx].push((u, weight));
        }
        self.edge_count += 1;
        log::trace!("added edge {} -> {}", u_idx, v_idx);
    }

    /// [`add_edge`](Self::add_edge) with a weight of `1`.
    pub fn add_unweighted_edge(&mut self, u: V, v: V)
    where
        W: Copy + From<u8>,
    {
        self.add_edge(u, v, W::from(1));
    }

    /// The `(neighbor, weight)` pairs of the edges leaving `vertex` in insertion order. Unknown
    /// vertices have none.
    pub fn neighbors(&self, vertex: &V) -> &[(V, W)] {
        match self.index.get(vertex) {
            Some(&i) => self.edges[i].as_slice(),
            None => &[],
        }
    }

    /// Whether any edge leads from `u` to `v`. Scans the edges of `u`.
    pub fn has_edge(&self, u: &V, v: &V) -> bool {
        self.neighbors(u).iter().any(|(neighbor, _)| neighbor == v)
    }

    fn register(&mut self, vertex: V) -> usize {
        if let Some(&i) = self.index.get(&vertex) {
            return i;
        }
        let i = self.vertices.len();
        self.index.insert(vertex.clone(), i);
        self.vertices.push(vertex);
        self.edges.push(Vec::new());
        i
    }
}

impl<V, W> Graph for AdjacencyList<V, W>
where
    V: Eq + Hash + Clone,
    W: Clone,
{
    type Vertex = V;
    type Weight = W;

    fn weighted_neighbors(&self, vertex: &V) -> Vec<(V, W)> {
        self.neighbors(vertex).to_vec()
    }
}

/// One line per vertex listing its edges, e.g. `A: [B(1), C(4)]`.
impl<V, W> fmt::Display for AdjacencyList<V, W>
where
    V: fmt::Display,
    W: fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (vertex, edges) in self.vertices.iter().zip(&self.edges) {
            write!(f, "{}: [", vertex)?;
            for (i, (neighbor, weight)) in edges.iter().enumerate() {
                if i > 0 {
                    f.write_str(", ")?;
                }
                write!(f, "{}({})", neighbor, weight)?;
            }
            writeln!(f, "]")?;
        }
        Ok(())
    }
}
