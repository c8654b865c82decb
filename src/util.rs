//! Index arithmetic for complete binary trees stored in a flat array.
//!
//! The root lives at index `0` and the children of `i` at `2i + 1` and `2i + 2`.

/// Index of the parent of `i`. Must not be called with the root index.
pub(crate) fn parent(i: usize) -> usize {
    debug_assert!(i > 0, "the root has no parent");
    (i - 1) / 2
}

pub(crate) fn left_child(i: usize) -> usize {
    2 * i + 1
}

pub(crate) fn right_child(i: usize) -> usize {
    2 * i + 2
}
