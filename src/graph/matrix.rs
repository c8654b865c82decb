//! A dense graph over a fixed number of vertices, storing one weight per ordered vertex pair.
//!
//! Vertices are given dense indices in the order they are first seen, until the capacity chosen
//! at construction runs out.
//!
//! A weight equal to `W::default()` (zero for numbers) means "no edge". Adding an edge with a
//! zero weight is therefore indistinguishable from never adding it, and can even erase an
//! existing edge.
//!
//! # Examples
//!
//! ```
//! use dsa::graph::AdjacencyMatrix;
//! use dsa::Error;
//!
//! let mut graph = AdjacencyMatrix::undirected(2);
//! graph.add_edge('A', 'B', 3).unwrap();
//!
//! assert_eq!(graph.weight(&'B', &'A'), 3);
//! assert_eq!(graph.neighbors(&'A'), vec![&'B']);
//!
//! // A third vertex does not fit.
//! assert_eq!(graph.add_vertex('C'), Err(Error::CapacityExceeded { capacity: 2 }));
//! assert!(graph.has_edge(&'A', &'B'));
//! ```

use std::collections::HashMap;
use std::fmt;
use std::hash::Hash;

use super::{Direction, Graph};
use crate::error::{Error, Result};

/// A weighted graph kept as a `capacity × capacity` matrix of weights.
#[derive(Clone, Debug)]
pub struct AdjacencyMatrix<V, W> {
    capacity: usize,
    direction: Direction,
    matrix: Vec<Vec<W>>,
    index: HashMap<V, usize>,
    /// Vertices by dense index, the reverse of `index`.
    vertices: Vec<V>,
}

impl<V, W> AdjacencyMatrix<V, W>
where
    W: Copy + Default,
{
    /// Generates a graph with room for `capacity` vertices and no edges.
    pub fn new(capacity: usize, direction: Direction) -> Self {
        Self {
            capacity,
            direction,
            matrix: vec![vec![W::default(); capacity]; capacity],
            index: HashMap::with_capacity(capacity),
            vertices: Vec::with_capacity(capacity),
        }
    }

    /// Generates a graph with one-way edges and room for `capacity` vertices.
    pub fn directed(capacity: usize) -> Self {
        Self::new(capacity, Direction::Directed)
    }

    /// Generates a graph with two-way edges and room for `capacity` vertices.
    pub fn undirected(capacity: usize) -> Self {
        Self::new(capacity, Direction::Undirected)
    }
}

impl<V, W> AdjacencyMatrix<V, W> {
    /// The fixed number of vertices this graph can hold.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Whether edges are one-way.
    pub fn is_directed(&self) -> bool {
        self.direction.is_directed()
    }

    /// Known vertices in the order they were registered.
    pub fn vertices(&self) -> impl Iterator<Item = &V> {
        self.vertices.iter()
    }

    /// Number of registered vertices, never more than the capacity.
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }
}

impl<V, W> AdjacencyMatrix<V, W>
where
    V: Eq + Hash + Clone,
    W: Copy + Default + PartialEq,
{
    /// Registers `vertex` and returns its dense index. A known vertex keeps its index.
    ///
    /// # Errors
    ///
    /// [`Error::CapacityExceeded`] if `vertex` is new and every index is taken. The graph is left
    /// as it was.
    pub fn add_vertex(&mut self, vertex: V) -> Result<usize> {
        if let Some(&i) = self.index.get(&vertex) {
            return Ok(i);
        }
        if self.vertices.len() == self.capacity {
            log::debug!("rejecting vertex, all {} indices are taken", self.capacity);
            return Err(Error::CapacityExceeded {
                capacity: self.capacity,
            });
        }
        let i = self.vertices.len();
        self.index.insert(vertex.clone(), i);
        self.vertices.push(vertex);
        Ok(i)
    }

    /// Sets the weight of the edge from `u` to `v`, and from `v` to `u` if undirected. Unknown
    /// endpoints are registered first. Setting an existing edge overwrites its weight.
    ///
    /// # Errors
    ///
    /// [`Error::CapacityExceeded`] if the unknown endpoints don't all fit. Neither endpoint is
    /// registered and no weight changes.
    pub fn add_edge(&mut self, u: V, v: V, weight: W) -> Result<()> {
        let mut unknown = usize::from(!self.index.contains_key(&u));
        if v != u && !self.index.contains_key(&v) {
            unknown += 1;
        }
        if self.vertices.len() + unknown > self.capacity {
            log::debug!("rejecting edge, {} new vertices do not fit", unknown);
            return Err(Error::CapacityExceeded {
                capacity: self.capacity,
            });
        }

        let u_idx = self.add_vertex(u)?;
        let v_idx = self.add_vertex(v)?;
        self.matrix[u_idx][v_idx] = weight;
        if !self.is_directed() {
            self.matrix[v_idx][u_idx] = weight;
        }
        log::trace!("set weight of edge {} -> {}", u_idx, v_idx);
        Ok(())
    }

    /// [`add_edge`](Self::add_edge) with a weight of `1`.
    pub fn add_unweighted_edge(&mut self, u: V, v: V) -> Result<()>
    where
        W: From<u8>,
    {
        self.add_edge(u, v, W::from(1))
    }

    /// Whether an edge with a nonzero weight leads from `u` to `v`. False if either vertex is
    /// unknown.
    pub fn has_edge(&self, u: &V, v: &V) -> bool {
        self.entry(u, v).map_or(false, |weight| weight != W::default())
    }

    /// Weight of the edge from `u` to `v`, zero if there is none or either vertex is unknown.
    pub fn weight(&self, u: &V, v: &V) -> W {
        self.entry(u, v).unwrap_or_default()
    }

    /// Vertices reachable from `vertex` over one edge, in index order. Unknown vertices have none.
    pub fn neighbors(&self, vertex: &V) -> Vec<&V> {
        self.row(vertex).map(|(neighbor, _)| neighbor).collect()
    }

    fn entry(&self, u: &V, v: &V) -> Option<W> {
        let u_idx = *self.index.get(u)?;
        let v_idx = *self.index.get(v)?;
        Some(self.matrix[u_idx][v_idx])
    }

    /// The `(neighbor, weight)` pairs with an edge in `vertex`'s row.
    fn row<'a>(&'a self, vertex: &V) -> impl Iterator<Item = (&'a V, W)> + 'a {
        let weights: &[W] = match self.index.get(vertex) {
            Some(&i) => &self.matrix[i][..self.vertices.len()],
            None => &[],
        };
        self.vertices
            .iter()
            .zip(weights.iter().copied())
            .filter(|(_, weight)| *weight != W::default())
    }
}

impl<V, W> Graph for AdjacencyMatrix<V, W>
where
    V: Eq + Hash + Clone,
    W: Copy + Default + PartialEq,
{
    type Vertex = V;
    type Weight = W;

    fn weighted_neighbors(&self, vertex: &V) -> Vec<(V, W)> {
        self.row(vertex)
            .map(|(neighbor, weight)| (neighbor.clone(), weight))
            .collect()
    }
}

/// A header row of vertices, then one row of weights per vertex, each column three wide.
impl<V, W> fmt::Display for AdjacencyMatrix<V, W>
where
    V: fmt::Display,
    W: fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let n = self.vertices.len();
        f.write_str("   ")?;
        for vertex in &self.vertices {
            write!(f, " {:3}", vertex)?;
        }
        writeln!(f)?;
        for (vertex, row) in self.vertices.iter().zip(&self.matrix) {
            write!(f, "{:3}:", vertex)?;
            for weight in &row[..n] {
                write!(f, " {:3}", weight)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
