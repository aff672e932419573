//! Perfectly balanced trees built in one shot from sorted input.
//!
//! The middle element becomes the root and both halves are built the same way, so the
//! result has the minimum possible height, `⌈log2(n + 1)⌉`. The tree that comes back is a
//! plain [`Tree`]: it can be queried but not changed.
//!
//! # Examples
//!
//! ```
//! use bintree::build_ideal;
//!
//! let tree = build_ideal(&[1, 2, 3, 4, 5]).unwrap();
//!
//! assert_eq!(tree.root().map(|n| *n.value()), Some(3));
//! assert_eq!(tree.height(), 3);
//! ```

use std::ops::RangeInclusive;

use tracing::debug;

use crate::error::TreeError;
use crate::node::{Link, Node};
use crate::tree::{OrderIds, Tree};

/// Builds a perfectly balanced tree from all of `values`, which must be in non-decreasing
/// order.
///
/// # Errors
///
/// [`TreeError::Unsorted`] if `values` is out of order.
pub fn build_ideal<T>(values: &[T]) -> Result<Tree<T>, TreeError>
where
    T: Ord + Clone,
{
    match values.len() {
        0 => Ok(Tree::new()),
        len => build_ideal_range(values, 0..=len - 1),
    }
}

/// Builds a perfectly balanced tree from `values[range]`. A range whose start lies past
/// its end selects nothing and yields an empty tree.
///
/// # Errors
///
/// - [`TreeError::RangeOutOfBounds`] if the range reaches past the end of `values`.
/// - [`TreeError::Unsorted`] if the selected values are out of order. The index is
///   relative to `values`, not to the range.
pub fn build_ideal_range<T>(values: &[T], range: RangeInclusive<usize>) -> Result<Tree<T>, TreeError>
where
    T: Ord + Clone,
{
    let (start, end) = range.into_inner();
    let mut tree = Tree::new();
    if start > end {
        return Ok(tree);
    }
    if end >= values.len() {
        return Err(TreeError::RangeOutOfBounds {
            start,
            end,
            len: values.len(),
        });
    }

    let selected = &values[start..=end];
    if let Some(pos) = selected.windows(2).position(|pair| pair[0] > pair[1]) {
        return Err(TreeError::Unsorted {
            index: start + pos + 1,
        });
    }

    tree.root = place(&mut tree.order_ids, selected);
    debug!(size = selected.len(), height = tree.height(), "built ideal tree");
    Ok(tree)
}

fn place<T>(order_ids: &mut OrderIds, values: &[T]) -> Link<T>
where
    T: Clone,
{
    if values.is_empty() {
        return None;
    }

    let mid = (values.len() - 1) / 2;
    let mut node = Node::boxed(values[mid].clone(), order_ids.take());
    node.left = place(order_ids, &values[..mid]);
    node.right = place(order_ids, &values[mid + 1..]);
    Some(node)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn value_of(node: Option<&Node<i32>>) -> Option<i32> {
        node.map(|n| n.value)
    }

    #[test]
    fn five_elements() {
        let tree = build_ideal(&[1, 2, 3, 4, 5]).unwrap();
        let root = tree.root().unwrap();

        assert_eq!(root.value, 3);

        let left = root.left().unwrap();
        assert_eq!(left.value, 1);
        assert_eq!(value_of(left.left()), None);
        assert_eq!(value_of(left.right()), Some(2));

        let right = root.right().unwrap();
        assert_eq!(right.value, 4);
        assert_eq!(value_of(right.left()), None);
        assert_eq!(value_of(right.right()), Some(5));
    }

    #[test]
    fn order_ids_follow_construction() {
        let tree = build_ideal(&[1, 2, 3, 4, 5]).unwrap();
        let root = tree.root().unwrap();

        assert_eq!(root.order_id, 0);
        assert_eq!(root.left().unwrap().order_id, 1);
        assert_eq!(root.left().unwrap().right().unwrap().order_id, 2);
        assert_eq!(root.right().unwrap().order_id, 3);
        assert_eq!(root.right().unwrap().right().unwrap().order_id, 4);
    }

    #[test]
    fn height_is_minimal() {
        for n in 0..300usize {
            let values: Vec<usize> = (0..n).collect();
            let tree = build_ideal(&values).unwrap();
            let expected = (usize::BITS - n.leading_zeros()) as usize;

            assert_eq!(tree.size(), n);
            assert_eq!(tree.height(), expected, "n = {}", n);
            assert!(tree.check_order().is_ok());
        }
    }

    #[test]
    fn sub_range() {
        let tree = build_ideal_range(&[0, 1, 2, 3, 4, 5, 6], 2..=4).unwrap();

        assert_eq!(tree.iter().copied().collect::<Vec<_>>(), [2, 3, 4]);
        assert_eq!(value_of(tree.root()), Some(3));
    }

    #[test]
    fn empty_range_is_empty_tree() {
        #[allow(clippy::reversed_empty_ranges)]
        let tree = build_ideal_range(&[1, 2, 3], 2..=1).unwrap();
        assert!(tree.is_empty());
    }

    #[test]
    fn range_out_of_bounds() {
        assert_eq!(
            build_ideal_range(&[1, 2, 3], 1..=3).unwrap_err(),
            TreeError::RangeOutOfBounds {
                start: 1,
                end: 3,
                len: 3
            }
        );
    }

    #[test]
    fn unsorted_input() {
        assert_eq!(
            build_ideal(&[1, 3, 2]).unwrap_err(),
            TreeError::Unsorted { index: 2 }
        );
        // Only the selected range has to be sorted.
        assert!(build_ideal_range(&[9, 1, 2, 3, 0], 1..=3).is_ok());
    }

    #[test]
    fn duplicates_are_kept() {
        let tree = build_ideal(&[1, 1, 2]).unwrap();
        assert_eq!(tree.size(), 3);
        assert!(tree.check_order().is_ok());
    }
}
