//! A plain Binary Search Tree that never rebalances. Its shape is whatever the insertion
//! order makes of it, so sorted input degrades it into a list. It is the baseline the
//! other trees are measured against, and the substrate [`OptimalTreeBuilder`] builds on.
//!
//! Both `insert` and `delete` are loops over owning links rather than recursions, so a
//! degenerate tree costs time but never stack.
//!
//! # Examples
//!
//! ```
//! use bintree::UnbalancedTree;
//!
//! let mut tree = UnbalancedTree::new();
//! assert!(tree.insert(2));
//! assert!(tree.insert(1));
//!
//! // Duplicates are ignored.
//! assert!(!tree.insert(2));
//!
//! assert_eq!(tree.delete(&2), Some(2));
//! assert_eq!(tree.delete(&2), None);
//! assert_eq!(tree.size(), 1);
//! ```
//!
//! [`OptimalTreeBuilder`]: crate::OptimalTreeBuilder

use std::ops::Deref;

use tracing::debug;

use crate::node::{self, Node};
use crate::tree::Tree;

/// A Binary Search Tree without any balancing.
#[derive(Clone, Debug)]
pub struct UnbalancedTree<T> {
    tree: Tree<T>,
}

impl<T> Default for UnbalancedTree<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Deref for UnbalancedTree<T> {
    type Target = Tree<T>;

    fn deref(&self) -> &Tree<T> {
        &self.tree
    }
}

impl<T> UnbalancedTree<T> {
    /// Generates a new, empty `UnbalancedTree`.
    pub fn new() -> Self {
        Self { tree: Tree::new() }
    }

    /// Gives up mutability and returns the underlying tree.
    pub fn into_tree(self) -> Tree<T> {
        self.tree
    }

    /// Adds `value` as a new leaf. Returns `false`, and changes nothing, if the value is
    /// already present.
    pub fn insert(&mut self, value: T) -> bool
    where
        T: Ord,
    {
        let link = node::locate(&mut self.tree.root, &value);
        if link.is_some() {
            return false;
        }

        *link = Some(Node::boxed(value, self.tree.order_ids.take()));
        true
    }

    /// Removes the node holding `value` and returns the value. If the tree does not
    /// contain it, nothing happens and `None` is returned.
    ///
    /// A node with two children is replaced by its in-order predecessor (the rightmost
    /// node of its left subtree), which keeps its construction id as it moves.
    pub fn delete(&mut self, value: &T) -> Option<T>
    where
        T: Ord,
    {
        let link = node::locate(&mut self.tree.root, value);
        let Some(mut deleted) = link.take() else {
            debug!("no key found");
            return None;
        };

        *link = match (deleted.left.take(), deleted.right.take()) {
            (None, right) => right,
            (left, None) => left,
            (mut left, right) => {
                let mut predecessor =
                    node::detach_max(&mut left).expect("a left child implies a maximum");
                predecessor.left = left;
                predecessor.right = right;
                Some(predecessor)
            }
        };

        let Node { value, .. } = *deleted;
        Some(value)
    }
}

impl<T> FromIterator<T> for UnbalancedTree<T>
where
    T: Ord,
{
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut tree = Self::new();
        tree.extend(iter);
        tree
    }
}

impl<T> Extend<T> for UnbalancedTree<T>
where
    T: Ord,
{
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.insert(value);
        }
    }
}
