//! The shape-agnostic part of every tree: ownership of the root, construction ids, and
//! the read-only queries.
//!
//! Nothing here is cached. `size`, `height`, `average_depth` and `checksum` walk the
//! current shape each time they are called, so they can never go stale after a
//! rotation or a delete. All walks use an explicit stack, and so do `Clone`, `Debug` and
//! `Drop`, which keeps degenerate trees (an [`UnbalancedTree`][crate::UnbalancedTree] fed
//! sorted input, say) from blowing the call stack.

use std::cmp::Ordering;
use std::fmt;

use crate::checksum::Checksum;
use crate::error::TreeError;
use crate::node::{Link, Node};

/// A binary tree that owns all of its nodes.
///
/// A bare `Tree` only supports queries. Build one with [`build_ideal`][crate::build_ideal],
/// or use one of the mutable variants, which deref to `Tree`.
pub struct Tree<T> {
    pub(crate) root: Link<T>,
    pub(crate) order_ids: OrderIds,
}

/// Hands out construction ids. An id is never handed out twice, even after the node that
/// had it is deleted.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub(crate) struct OrderIds(usize);

impl OrderIds {
    pub(crate) fn take(&mut self) -> usize {
        let id = self.0;
        self.0 += 1;
        id
    }
}

impl<T> Default for Tree<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for Tree<T> {
    fn drop(&mut self) {
        // Unlink nodes one at a time so dropping a long chain doesn't recurse.
        let mut pending: Vec<Box<Node<T>>> = self.root.take().into_iter().collect();
        while let Some(mut node) = pending.pop() {
            pending.extend(node.left.take());
            pending.extend(node.right.take());
        }
    }
}

impl<T> Clone for Tree<T>
where
    T: Clone,
{
    fn clone(&self) -> Self {
        // Children come off `built` before their parent is assembled: right on top, left
        // below it.
        let mut built: Vec<Box<Node<T>>> = Vec::new();
        for node in post_order(self.root()) {
            let right = node.right.as_ref().and_then(|_| built.pop());
            let left = node.left.as_ref().and_then(|_| built.pop());
            built.push(Box::new(Node {
                value: node.value.clone(),
                order_id: node.order_id,
                balance: node.balance,
                left,
                right,
            }));
        }

        Self {
            root: built.pop(),
            order_ids: self.order_ids,
        }
    }
}

impl<T> fmt::Debug for Tree<T>
where
    T: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let nodes: Vec<_> = self.walk().map(|(node, _)| node).collect();
        f.debug_struct("Tree")
            .field("nodes", &nodes)
            .field("order_ids", &self.order_ids)
            .finish()
    }
}

/// Every node below `root`, children before their parent and left before right.
fn post_order<T>(root: Option<&Node<T>>) -> Vec<&Node<T>> {
    let mut pending: Vec<&Node<T>> = root.into_iter().collect();
    let mut reversed = Vec::new();
    while let Some(node) = pending.pop() {
        pending.extend(node.left());
        pending.extend(node.right());
        reversed.push(node);
    }
    reversed.reverse();
    reversed
}

impl<T> Tree<T> {
    /// Generates a new, empty `Tree`.
    pub fn new() -> Self {
        Self {
            root: None,
            order_ids: OrderIds::default(),
        }
    }

    /// The root node, or `None` for an empty tree.
    pub fn root(&self) -> Option<&Node<T>> {
        self.root.as_deref()
    }

    /// Whether the tree has no nodes.
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// The number of nodes in the tree.
    ///
    /// # Examples
    ///
    /// ```
    /// use bintree::UnbalancedTree;
    ///
    /// let tree: UnbalancedTree<_> = [3, 1, 2].into_iter().collect();
    /// assert_eq!(tree.size(), 3);
    /// ```
    pub fn size(&self) -> usize {
        self.walk().count()
    }

    /// The number of levels in the tree. An empty tree has height 0 and a single node has
    /// height 1.
    pub fn height(&self) -> usize {
        self.walk().map(|(_, depth)| depth).max().unwrap_or(0)
    }

    /// The mean depth of all nodes, counting the root as depth 1.
    ///
    /// # Errors
    ///
    /// [`TreeError::EmptyTree`] if there are no nodes to average over.
    pub fn average_depth(&self) -> Result<f64, TreeError> {
        let (count, total) = self
            .walk()
            .fold((0usize, 0usize), |(count, total), (_, depth)| {
                (count + 1, total + depth)
            });

        if count == 0 {
            return Err(TreeError::EmptyTree);
        }
        Ok(total as f64 / count as f64)
    }

    /// The sum of all values. Payloads without additive structure (text) count as `0`.
    ///
    /// The sum is kept in an `i128`, so every 64-bit payload counts at its full value.
    pub fn checksum(&self) -> i128
    where
        T: Checksum,
    {
        self.walk().map(|(node, _)| node.value.contribution()).sum()
    }

    /// Iterates over the values in ascending order.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter(InOrder::new(self.root(), false))
    }

    /// Finds the node holding `value`.
    pub fn find(&self, value: &T) -> Option<&Node<T>>
    where
        T: Ord,
    {
        let mut current = self.root();
        while let Some(node) = current {
            current = match value.cmp(&node.value) {
                Ordering::Less => node.left(),
                Ordering::Equal => return Some(node),
                Ordering::Greater => node.right(),
            };
        }
        None
    }

    /// Whether some node holds `value`.
    pub fn contains(&self, value: &T) -> bool
    where
        T: Ord,
    {
        self.find(value).is_some()
    }

    /// Checks the search-tree order: an in-order walk never steps down to a smaller value.
    ///
    /// # Errors
    ///
    /// [`TreeError::InvariantViolation`] naming the first node that is out of place.
    pub fn check_order(&self) -> Result<(), TreeError>
    where
        T: Ord,
    {
        let mut previous: Option<&T> = None;
        for (node, _) in InOrder::new(self.root(), false) {
            if previous.map_or(false, |prev| prev > &node.value) {
                return Err(TreeError::InvariantViolation {
                    order_id: node.order_id,
                    detail: "in-order walk is not ascending".to_string(),
                });
            }
            previous = Some(&node.value);
        }
        Ok(())
    }

    /// Every node paired with its depth (root = 1), in pre-order.
    pub(crate) fn walk(&self) -> Walk<'_, T> {
        Walk {
            stack: self.root().map(|root| (root, 1)).into_iter().collect(),
        }
    }
}

impl<'a, T> IntoIterator for &'a Tree<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Pre-order walk yielding each node with its depth.
pub(crate) struct Walk<'a, T> {
    stack: Vec<(&'a Node<T>, usize)>,
}

impl<'a, T> Iterator for Walk<'a, T> {
    type Item = (&'a Node<T>, usize);

    fn next(&mut self) -> Option<Self::Item> {
        let (node, depth) = self.stack.pop()?;
        self.stack.extend(node.right().map(|right| (right, depth + 1)));
        self.stack.extend(node.left().map(|left| (left, depth + 1)));
        Some((node, depth))
    }
}

/// In-order walk yielding each node with its depth. A mirrored walk visits the right
/// subtree first, which is the order the sideways printer needs.
pub(crate) struct InOrder<'a, T> {
    stack: Vec<(&'a Node<T>, usize)>,
    mirrored: bool,
}

impl<'a, T> InOrder<'a, T> {
    pub(crate) fn new(root: Option<&'a Node<T>>, mirrored: bool) -> Self {
        let mut walk = Self {
            stack: Vec::new(),
            mirrored,
        };
        walk.push_spine(root, 1);
        walk
    }

    fn push_spine(&mut self, mut node: Option<&'a Node<T>>, mut depth: usize) {
        while let Some(n) = node {
            self.stack.push((n, depth));
            node = if self.mirrored { n.right() } else { n.left() };
            depth += 1;
        }
    }
}

impl<'a, T> Iterator for InOrder<'a, T> {
    type Item = (&'a Node<T>, usize);

    fn next(&mut self) -> Option<Self::Item> {
        let (node, depth) = self.stack.pop()?;
        let far_side = if self.mirrored {
            node.left()
        } else {
            node.right()
        };
        self.push_spine(far_side, depth + 1);
        Some((node, depth))
    }
}

/// Ascending iterator over the values of a [`Tree`].
pub struct Iter<'a, T>(InOrder<'a, T>);

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        self.0.next().map(|(node, _)| &node.value)
    }
}
