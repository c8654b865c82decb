//! An unbalanced Binary Search Tree. Operations that change the shape of the tree (`insert` and
//! `delete`) take the tree by value and hand back the new tree, the same way the recursion inside
//! takes a subtree and returns whatever should now hang in its place.
//!
//! Equal values are kept: a value equal to a node's value is inserted into its right subtree.
//!
//! # Examples
//!
//! ```
//! use dsa::bst::BinarySearchTree;
//!
//! let tree: BinarySearchTree<i32> = [5, 3, 8, 1, 4, 7, 9].into_iter().collect();
//!
//! assert_eq!(tree.inorder(), vec![&1, &3, &4, &5, &7, &8, &9]);
//! assert_eq!(tree.height(), 2);
//!
//! // Deleting a node with two children promotes its in-order successor.
//! let tree = tree.delete(&5);
//! assert_eq!(tree.root().map(|root| *root.value()), Some(7));
//! assert_eq!(tree.count_nodes(), 6);
//! ```

use std::cmp::Ordering;
use std::collections::VecDeque;
use std::fmt;

use crate::error::{Error, Result};

type Link<T> = Option<Box<Node<T>>>;

/// A Binary Search Tree over values with a total order. Note that this tree never rebalances,
/// so inserting already sorted values degrades it into a list.
pub struct BinarySearchTree<T> {
    root: Link<T>,
}

impl<T> Default for BinarySearchTree<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for BinarySearchTree<T> {
    fn drop(&mut self) {
        // Detach children before each node is released so a degenerate tree doesn't recurse once
        // per level.
        let mut pending: Vec<Box<Node<T>>> = self.root.take().into_iter().collect();
        while let Some(mut node) = pending.pop() {
            pending.extend(node.left.take());
            pending.extend(node.right.take());
        }
    }
}

impl<T> Clone for BinarySearchTree<T>
where
    T: Clone,
{
    fn clone(&self) -> Self {
        Self {
            root: self.root.clone(),
        }
    }
}

impl<T> fmt::Debug for BinarySearchTree<T>
where
    T: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BinarySearchTree")
            .field("root", &self.root())
            .finish()
    }
}

/// Renders the values in sorted order separated by single spaces.
impl<T> fmt::Display for BinarySearchTree<T>
where
    T: fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, value) in self.inorder().into_iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{}", value)?;
        }
        Ok(())
    }
}

impl<T> BinarySearchTree<T> {
    /// Generates a new, empty `BinarySearchTree`.
    pub fn new() -> Self {
        Self { root: None }
    }

    /// The root node, if the tree has any values.
    pub fn root(&self) -> Option<&Node<T>> {
        self.root.as_deref()
    }

    /// Whether the tree holds no values.
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Number of edges on the longest path from the root to a leaf. A single node has a height
    /// of `0` and an empty tree has a height of `-1`.
    pub fn height(&self) -> isize {
        self.root().map_or(-1, Node::height)
    }

    /// Number of values stored in the tree, duplicates included.
    pub fn count_nodes(&self) -> usize {
        self.root().map_or(0, Node::count_nodes)
    }

    /// The smallest value in the tree.
    ///
    /// # Errors
    ///
    /// [`Error::EmptyStructure`] if the tree has no values.
    ///
    /// # Examples
    ///
    /// ```
    /// use dsa::bst::BinarySearchTree;
    ///
    /// let tree = BinarySearchTree::new();
    /// assert!(tree.find_min().is_err());
    ///
    /// let tree = tree.insert(2).insert(1);
    /// assert_eq!(tree.find_min(), Ok(&1));
    /// ```
    pub fn find_min(&self) -> Result<&T> {
        self.root()
            .map(Node::find_min)
            .ok_or(Error::EmptyStructure {
                operation: "find_min",
            })
    }

    /// The largest value in the tree.
    ///
    /// # Errors
    ///
    /// [`Error::EmptyStructure`] if the tree has no values.
    pub fn find_max(&self) -> Result<&T> {
        self.root()
            .map(Node::find_max)
            .ok_or(Error::EmptyStructure {
                operation: "find_max",
            })
    }

    /// Values in sorted order: left subtree, node, right subtree.
    pub fn inorder(&self) -> Vec<&T> {
        self.root().map_or_else(Vec::new, Node::inorder)
    }

    /// Values with each node before its left then right subtree.
    pub fn preorder(&self) -> Vec<&T> {
        self.root().map_or_else(Vec::new, Node::preorder)
    }

    /// Values with each node after its left then right subtree.
    pub fn postorder(&self) -> Vec<&T> {
        self.root().map_or_else(Vec::new, Node::postorder)
    }

    /// Values level by level from the root, left to right within a level.
    pub fn level_order(&self) -> Vec<&T> {
        self.root().map_or_else(Vec::new, Node::level_order)
    }
}

impl<T> BinarySearchTree<T>
where
    T: Ord,
{
    /// Returns the tree with `value` added. Values equal to an existing value go to its right.
    ///
    /// # Examples
    ///
    /// ```
    /// use dsa::bst::BinarySearchTree;
    ///
    /// let tree = BinarySearchTree::new().insert(1).insert(1);
    ///
    /// assert_eq!(tree.count_nodes(), 2);
    /// assert_eq!(tree.root().and_then(|root| root.right()).map(|n| *n.value()), Some(1));
    /// ```
    pub fn insert(mut self, value: T) -> Self {
        log::trace!("inserting value into tree");
        self.root = Some(insert(self.root.take(), value));
        self
    }

    /// Returns the tree without one node holding `value`. If no node holds `value` the tree is
    /// returned unchanged.
    ///
    /// A node with two children takes the value of its in-order successor (the smallest value of
    /// its right subtree), and the successor's node is removed instead.
    pub fn delete(mut self, value: &T) -> Self {
        if self.search(value).is_none() {
            log::debug!("value to delete is not in the tree, nothing to do");
            return self;
        }
        self.root = delete(self.root.take(), value);
        self
    }

    /// Finds the first node on the search path holding `value`.
    ///
    /// # Examples
    ///
    /// ```
    /// use dsa::bst::BinarySearchTree;
    ///
    /// let tree: BinarySearchTree<_> = [2, 1, 3].into_iter().collect();
    ///
    /// assert_eq!(tree.search(&3).map(|node| node.height()), Some(0));
    /// assert!(tree.search(&42).is_none());
    /// ```
    pub fn search(&self, value: &T) -> Option<&Node<T>> {
        self.root()?.search(value)
    }

    /// Whether any node holds `value`.
    pub fn contains(&self, value: &T) -> bool {
        self.search(value).is_some()
    }
}

impl<T> FromIterator<T> for BinarySearchTree<T>
where
    T: Ord,
{
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        iter.into_iter().fold(Self::new(), Self::insert)
    }
}

impl<T> Extend<T> for BinarySearchTree<T>
where
    T: Ord,
{
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            *self = std::mem::take(self).insert(value);
        }
    }
}

/// A `Node` holds a value and owns up to two child subtrees. Every node is the root of its own
/// subtree, so the queries available on [`BinarySearchTree`] work on any node as well.
#[derive(Clone, Debug)]
pub struct Node<T> {
    value: T,
    left: Link<T>,
    right: Link<T>,
}

impl<T> Node<T> {
    fn new_boxed(value: T) -> Box<Self> {
        Box::new(Self {
            value,
            left: None,
            right: None,
        })
    }

    /// The value stored in this node.
    pub fn value(&self) -> &T {
        &self.value
    }

    /// The root of the left subtree, holding only smaller values.
    pub fn left(&self) -> Option<&Self> {
        self.left.as_deref()
    }

    /// The root of the right subtree, holding values at least as large as this one.
    pub fn right(&self) -> Option<&Self> {
        self.right.as_deref()
    }

    /// Smallest value in this subtree, found by following left children.
    pub fn find_min(&self) -> &T {
        let mut current = self;
        while let Some(left) = current.left() {
            current = left;
        }
        &current.value
    }

    /// Largest value in this subtree, found by following right children.
    pub fn find_max(&self) -> &T {
        let mut current = self;
        while let Some(right) = current.right() {
            current = right;
        }
        &current.value
    }

    /// Height of this subtree. A node without children has a height of `0`.
    pub fn height(&self) -> isize {
        let left = self.left().map_or(-1, Self::height);
        let right = self.right().map_or(-1, Self::height);
        1 + left.max(right)
    }

    /// Number of nodes in this subtree, this node included.
    pub fn count_nodes(&self) -> usize {
        1 + self.left().map_or(0, Self::count_nodes) + self.right().map_or(0, Self::count_nodes)
    }

    /// Finds the first node in this subtree holding `value`.
    pub fn search(&self, value: &T) -> Option<&Self>
    where
        T: Ord,
    {
        match value.cmp(&self.value) {
            Ordering::Less => self.left()?.search(value),
            Ordering::Equal => Some(self),
            Ordering::Greater => self.right()?.search(value),
        }
    }

    /// In-order values of this subtree.
    pub fn inorder(&self) -> Vec<&T> {
        let mut values = Vec::new();
        let mut stack = Vec::new();
        let mut current = Some(self);
        loop {
            while let Some(node) = current {
                stack.push(node);
                current = node.left();
            }
            match stack.pop() {
                Some(node) => {
                    values.push(&node.value);
                    current = node.right();
                }
                None => break values,
            }
        }
    }

    /// Pre-order values of this subtree.
    pub fn preorder(&self) -> Vec<&T> {
        let mut values = Vec::new();
        let mut stack = vec![self];
        while let Some(node) = stack.pop() {
            values.push(&node.value);
            // Right first so the left subtree is popped first.
            stack.extend(node.right());
            stack.extend(node.left());
        }
        values
    }

    /// Post-order values of this subtree.
    pub fn postorder(&self) -> Vec<&T> {
        // Node, right, left read backwards is left, right, node.
        let mut values = Vec::new();
        let mut stack = vec![self];
        while let Some(node) = stack.pop() {
            values.push(&node.value);
            stack.extend(node.left());
            stack.extend(node.right());
        }
        values.reverse();
        values
    }

    /// Breadth-first values of this subtree.
    pub fn level_order(&self) -> Vec<&T> {
        let mut values = Vec::new();
        let mut queue = VecDeque::from([self]);
        while let Some(node) = queue.pop_front() {
            values.push(&node.value);
            queue.extend(node.left());
            queue.extend(node.right());
        }
        values
    }
}

/// Inserts `value` below `link` and returns the node that should now occupy `link`.
fn insert<T>(link: Link<T>, value: T) -> Box<Node<T>>
where
    T: Ord,
{
    match link {
        None => Node::new_boxed(value),
        Some(mut node) => {
            if value < node.value {
                node.left = Some(insert(node.left.take(), value));
            } else {
                node.right = Some(insert(node.right.take(), value));
            }
            node
        }
    }
}

/// Removes one node holding `value` below `link` and returns what should now occupy `link`.
fn delete<T>(link: Link<T>, value: &T) -> Link<T>
where
    T: Ord,
{
    let mut node = link?;
    match value.cmp(&node.value) {
        Ordering::Less => node.left = delete(node.left.take(), value),
        Ordering::Greater => node.right = delete(node.right.take(), value),
        Ordering::Equal => match (node.left.take(), node.right.take()) {
            (None, right) => {
                log::trace!("splicing out node with at most a right child");
                return right;
            }
            (left, None) => {
                log::trace!("splicing out node with only a left child");
                return left;
            }
            (left, Some(right)) => {
                log::trace!("replacing node with its in-order successor");
                let (successor, rest) = take_min(right);
                node.value = successor;
                node.left = left;
                node.right = rest;
            }
        },
    }
    Some(node)
}

/// Detaches the leftmost node of a subtree. Returns its value and the remaining subtree.
fn take_min<T>(mut node: Box<Node<T>>) -> (T, Link<T>) {
    match node.left.take() {
        None => {
            let Node { value, right, .. } = *node;
            (value, right)
        }
        Some(left) => {
            let (min, rest) = take_min(left);
            node.left = rest;
            (min, Some(node))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tree_of(values: &[i32]) -> BinarySearchTree<i32> {
        values.iter().copied().collect()
    }

    /// Checks every node lies within the bounds its ancestors impose: strictly below an ancestor
    /// it is left of, at or above an ancestor it is right of.
    fn assert_ordered(node: Option<&Node<i32>>, low: Option<i32>, high: Option<i32>) {
        if let Some(n) = node {
            if let Some(low) = low {
                assert!(n.value >= low, "{} is left of a smaller ancestor", n.value);
            }
            if let Some(high) = high {
                assert!(n.value < high, "{} is not below its ancestor", n.value);
            }
            assert_ordered(n.left(), low, Some(n.value));
            assert_ordered(n.right(), Some(n.value), high);
        }
    }

    #[test]
    fn sample_tree_shape() {
        let tree = tree_of(&[5, 3, 8, 1, 4, 7, 9]);

        assert_eq!(tree.inorder(), vec![&1, &3, &4, &5, &7, &8, &9]);
        assert_eq!(tree.preorder(), vec![&5, &3, &1, &4, &8, &7, &9]);
        assert_eq!(tree.postorder(), vec![&1, &4, &3, &7, &9, &8, &5]);
        assert_eq!(tree.level_order(), vec![&5, &3, &8, &1, &4, &7, &9]);
        assert_eq!(tree.height(), 2);
        assert_eq!(tree.count_nodes(), 7);
        assert_eq!(tree.to_string(), "1 3 4 5 7 8 9");
    }

    #[test]
    fn delete_root_promotes_successor() {
        let tree = tree_of(&[5, 3, 8, 1, 4, 7, 9]).delete(&5);

        assert_eq!(tree.root().map(|n| n.value), Some(7));
        assert_eq!(tree.inorder(), vec![&1, &3, &4, &7, &8, &9]);
        assert!(!tree.contains(&5));
        assert_ordered(tree.root(), None, None);
    }

    #[test]
    fn empty_tree() {
        let tree = BinarySearchTree::<i32>::new();

        assert!(tree.is_empty());
        assert_eq!(tree.height(), -1);
        assert_eq!(tree.count_nodes(), 0);
        assert!(tree.inorder().is_empty());
        assert!(tree.level_order().is_empty());
        assert_eq!(tree.to_string(), "");
        assert_eq!(
            tree.find_min(),
            Err(Error::EmptyStructure {
                operation: "find_min"
            })
        );
        assert_eq!(
            tree.find_max(),
            Err(Error::EmptyStructure {
                operation: "find_max"
            })
        );
    }

    #[test]
    fn min_and_max() {
        let tree = tree_of(&[5, 3, 8, 1, 4, 7, 9]);

        assert_eq!(tree.find_min(), Ok(&1));
        assert_eq!(tree.find_max(), Ok(&9));

        let eight = tree.search(&8).unwrap();
        assert_eq!(eight.find_min(), &7);
        assert_eq!(eight.find_max(), &9);
        assert_eq!(eight.height(), 1);
        assert_eq!(eight.count_nodes(), 3);
        assert_eq!(eight.inorder(), vec![&7, &8, &9]);
    }

    #[test]
    fn duplicates_go_right() {
        let tree = tree_of(&[2, 2, 2]);

        assert_eq!(tree.count_nodes(), 3);
        assert_eq!(tree.height(), 2);
        assert!(tree.root().unwrap().left().is_none());
        assert_eq!(tree.inorder(), vec![&2, &2, &2]);

        let tree = tree.delete(&2);
        assert_eq!(tree.count_nodes(), 2);
        assert!(tree.contains(&2));
    }

    #[test]
    fn delete_with_no_children() {
        let tree = tree_of(&[5, 3, 7]).delete(&7);

        assert!(!tree.contains(&7));
        assert!(tree.contains(&3));
        assert!(tree.contains(&5));
    }

    #[test]
    fn delete_with_null_left() {
        let tree = tree_of(&[5, 3, 7, 9]).delete(&7);

        assert!(!tree.contains(&7));
        assert_eq!(tree.root().and_then(Node::right).map(|n| n.value), Some(9));
    }

    #[test]
    fn delete_with_null_right() {
        let tree = tree_of(&[5, 3, 7, 6]).delete(&7);

        assert!(!tree.contains(&7));
        assert_eq!(tree.root().and_then(Node::right).map(|n| n.value), Some(6));
    }

    #[test]
    fn delete_with_deeper_successor() {
        let tree = tree_of(&[5, 3, 8, 2, 6, 9, 7]).delete(&5);

        // 6 is the leftmost node of the right subtree and had a right child.
        assert_eq!(tree.root().map(|n| n.value), Some(6));
        assert_eq!(tree.inorder(), vec![&2, &3, &6, &7, &8, &9]);
        assert_ordered(tree.root(), None, None);
    }

    #[test]
    fn delete_missing_value_keeps_tree() {
        let tree = tree_of(&[5, 3, 8]).delete(&42);

        assert_eq!(tree.count_nodes(), 3);
        assert_eq!(tree.preorder(), vec![&5, &3, &8]);
    }

    #[test]
    fn delete_only_node() {
        let tree = tree_of(&[5]).delete(&5);

        assert!(tree.is_empty());
        assert!(tree.search(&5).is_none());
    }

    #[test]
    fn extend_inserts_every_value() {
        let mut tree = tree_of(&[4]);
        tree.extend(vec![2, 6]);

        assert_eq!(tree.level_order(), vec![&4, &2, &6]);
    }

    #[test]
    fn dropping_degenerate_tree() {
        let mut root = None;
        for value in (0..200_000).rev() {
            root = Some(Box::new(Node {
                value,
                left: None,
                right: root,
            }));
        }
        let tree = BinarySearchTree { root };

        assert_eq!(tree.find_min(), Ok(&0));
        drop(tree);
    }
}
