//! This crate exposes classic data structures and graph traversals
//! mostly for educational purposes.
//!
//! ## Binary Search Tree
//!
//! A Binary Search Tree is a data structure supporting operations to
//! insert, find, and delete stored values. BSTs are typically defined
//! recursively using the notion of a `Node`. A `Node` stores a value and
//! sometimes has child `Node`s. The most important invariants of a BST are:
//!
//! 1. For every `Node` in a BST, all the `Node`s in its left subtree have a
//!    value less than its own value.
//! 2. For every `Node` in a BST, all the `Node`s in its right subtree have a
//!    value greater than or equal to its own value.
//!
//! Searching takes `O(height)`. The tree in [`bst`] never rebalances, so its
//! height depends entirely on insertion order.
//!
//! ## Heaps
//!
//! A binary heap keeps the highest priority value at the root of a complete
//! binary tree laid out in an array, giving `O(1)` peeks and `O(lg N)`
//! inserts and extractions. [`heap::MinHeap`] and [`heap::MaxHeap`] share one
//! implementation.
//!
//! ## Graphs
//!
//! [`graph::AdjacencyList`] and [`graph::AdjacencyMatrix`] store weighted,
//! directed or undirected graphs. The [`graph::traversal`] functions walk
//! either one depth-first or breadth-first.
//!
//! None of these structures synchronize access. Wrap them in a lock to share
//! them between threads.

#![deny(missing_docs, clippy::clone_on_ref_ptr)]

pub mod bst;
pub mod error;
pub mod graph;
pub mod heap;
mod util;


pub use bst::BinarySearchTree;
pub use error::{Error, Result};
pub use graph::{AdjacencyList, AdjacencyMatrix, Direction, Graph};
pub use heap::{MaxHeap, MinHeap};
