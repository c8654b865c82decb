//! Array-backed binary heaps. [`MinHeap`] and [`MaxHeap`] are the same [`Heap`] with the
//! comparison flipped by a [`Priority`] marker type.
//!
//! # Examples
//!
//! ```
//! use dsa::heap::{MaxHeap, MinHeap};
//!
//! let mut min: MinHeap<_> = [5, 3, 8, 1].into_iter().collect();
//! assert_eq!(min.peek(), Some(&1));
//! assert_eq!(min.extract_min(), Some(1));
//! assert_eq!(min.extract_min(), Some(3));
//!
//! let mut max: MaxHeap<_> = [5, 3, 8, 1].into_iter().collect();
//! assert_eq!(max.extract_max(), Some(8));
//! assert_eq!(max.into_sorted_vec(), vec![5, 3, 1]);
//! ```

use std::fmt;
use std::marker::PhantomData;

use crate::util::{left_child, parent, right_child};

/// Decides which of two keys belongs nearer the root of a heap.
pub trait Priority {
    /// Whether `a` must sit above `b`. This must be strict: equal keys never outrank each other.
    fn outranks<T: Ord>(a: &T, b: &T) -> bool;
}

/// Smallest key first.
#[derive(Clone, Copy, Debug, Default)]
pub struct MinFirst;

impl Priority for MinFirst {
    fn outranks<T: Ord>(a: &T, b: &T) -> bool {
        a < b
    }
}

/// Largest key first.
#[derive(Clone, Copy, Debug, Default)]
pub struct MaxFirst;

impl Priority for MaxFirst {
    fn outranks<T: Ord>(a: &T, b: &T) -> bool {
        a > b
    }
}

/// A heap whose root is the smallest key.
pub type MinHeap<T> = Heap<T, MinFirst>;

/// A heap whose root is the largest key.
pub type MaxHeap<T> = Heap<T, MaxFirst>;

/// A binary heap stored as a complete binary tree in a `Vec`. No key is ever outranked by one of
/// its children. Keys of equal priority come out in no particular order.
#[derive(Clone, Debug)]
pub struct Heap<T, P> {
    data: Vec<T>,
    priority: PhantomData<P>,
}

impl<T, P> Default for Heap<T, P> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T, P> Heap<T, P> {
    /// Generates a new, empty `Heap`.
    pub fn new() -> Self {
        Self::with_capacity(0)
    }

    /// Generates an empty `Heap` with room for `capacity` keys before reallocating.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            data: Vec::with_capacity(capacity),
            priority: PhantomData,
        }
    }

    /// Number of keys in the heap.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Whether the heap holds no keys.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// The highest priority key, without removing it.
    pub fn peek(&self) -> Option<&T> {
        self.data.first()
    }

    /// The keys in their array order, root first.
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }
}

impl<T, P> Heap<T, P>
where
    T: Ord,
    P: Priority,
{
    /// Adds `key` to the end of the array then swaps it towards the root until its parent
    /// outranks or ties with it.
    pub fn insert(&mut self, key: T) {
        self.data.push(key);
        self.sift_up(self.data.len() - 1);
        log::trace!("inserted key, heap now holds {} keys", self.data.len());
    }

    /// Removes and returns the highest priority key, or `None` if the heap is empty.
    ///
    /// The last key takes the root's place and is swapped down towards the leaves until neither
    /// child outranks it.
    pub fn extract(&mut self) -> Option<T> {
        if self.data.len() <= 1 {
            return self.data.pop();
        }
        let last = self.data.pop()?;
        let root = std::mem::replace(&mut self.data[0], last);
        self.heapify_down(0);
        log::trace!("extracted root, heap now holds {} keys", self.data.len());
        Some(root)
    }

    /// Drains the heap in priority order.
    pub fn into_sorted_vec(mut self) -> Vec<T> {
        std::iter::from_fn(|| self.extract()).collect()
    }

    fn sift_up(&mut self, mut i: usize) {
        while i != 0 && P::outranks(&self.data[i], &self.data[parent(i)]) {
            let p = parent(i);
            self.data.swap(p, i);
            i = p;
        }
    }

    fn heapify_down(&mut self, mut i: usize) {
        let len = self.data.len();
        loop {
            let mut top = i;
            for child in [left_child(i), right_child(i)] {
                if child < len && P::outranks(&self.data[child], &self.data[top]) {
                    top = child;
                }
            }
            if top == i {
                return;
            }
            self.data.swap(i, top);
            i = top;
        }
    }
}

impl<T> Heap<T, MinFirst>
where
    T: Ord,
{
    /// Removes and returns the smallest key, or `None` if the heap is empty.
    pub fn extract_min(&mut self) -> Option<T> {
        self.extract()
    }
}

impl<T> Heap<T, MaxFirst>
where
    T: Ord,
{
    /// Removes and returns the largest key, or `None` if the heap is empty.
    pub fn extract_max(&mut self) -> Option<T> {
        self.extract()
    }
}

impl<T, P> FromIterator<T> for Heap<T, P>
where
    T: Ord,
    P: Priority,
{
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut heap = Self::new();
        heap.extend(iter);
        heap
    }
}

impl<T, P> Extend<T> for Heap<T, P>
where
    T: Ord,
    P: Priority,
{
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for key in iter {
            self.insert(key);
        }
    }
}

/// Renders the keys in array order, e.g. `[1, 3, 8, 5]`.
impl<T, P> fmt::Display for Heap<T, P>
where
    T: fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (i, key) in self.data.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{}", key)?;
        }
        f.write_str("]")
    }
}
