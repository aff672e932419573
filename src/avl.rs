//! A self-balancing Binary Search Tree (specifically, an AVL tree).
//!
//! Every node stores its [`Balance`]: the height of its right subtree minus the height of
//! its left subtree, always one of `-1`, `0` or `+1`. After an insert or delete the
//! recursion unwinds back to the root and each ancestor adjusts its balance. A node that
//! would reach `±2` is restored with one of the four rotations (see [Wikipedia] for the
//! terminology):
//!
//! ```text
//!       LL                         LR
//!       p          q               p             r
//!      / \        / \             / \          /   \
//!     q   c  ->  a   p           q   d  ->   q      p
//!    / \            / \         / \         / \    / \
//!   a   b          b   c       a   r       a   b  c   d
//!                                 / \
//!                                b   c
//! ```
//!
//! RR and RL are the mirror images. Each recursive step reports whether its subtree got
//! taller (insert) or shorter (delete) through its return value, so no state outlives a
//! call.
//!
//! # Examples
//!
//! ```
//! use bintree::AvlTree;
//!
//! let mut tree: AvlTree<_> = (1..=7).collect();
//!
//! // Sorted input still gives the shortest possible tree.
//! assert_eq!(tree.height(), 3);
//!
//! assert_eq!(tree.delete(&4), Some(4));
//! assert_eq!(tree.delete(&4), None);
//! assert!(tree.check_invariants().is_ok());
//! ```
//!
//! [Wikipedia]: https://en.wikipedia.org/wiki/AVL_tree#Rebalancing

use std::cmp::Ordering;
use std::mem;
use std::ops::Deref;

use tracing::{debug, trace};

use crate::error::TreeError;
use crate::node::{Balance, Link, Node};
use crate::tree::{OrderIds, Tree};
use crate::util::{DeleteResult, InsertResult};

/// An AVL tree. Its height stays within `1.44 * log2(n + 2)` whatever the order of
/// inserts and deletes.
#[derive(Clone, Debug)]
pub struct AvlTree<T> {
    tree: Tree<T>,
}

impl<T> Default for AvlTree<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Deref for AvlTree<T> {
    type Target = Tree<T>;

    fn deref(&self) -> &Tree<T> {
        &self.tree
    }
}

impl<T> AvlTree<T> {
    /// Generates a new, empty `AvlTree`.
    pub fn new() -> Self {
        Self { tree: Tree::new() }
    }

    /// Gives up mutability and returns the underlying tree.
    pub fn into_tree(self) -> Tree<T> {
        self.tree
    }

    /// Inserts `value` and rebalances. Returns `false`, and changes nothing, if the value
    /// is already present.
    ///
    /// # Examples
    ///
    /// ```
    /// use bintree::AvlTree;
    ///
    /// let mut tree = AvlTree::new();
    /// assert!(tree.insert(10));
    /// assert!(tree.insert(20));
    /// assert!(tree.insert(30));
    /// assert!(!tree.insert(30));
    ///
    /// // Inserting 30 rotated 20 up to the root.
    /// assert_eq!(tree.root().map(|n| *n.value()), Some(20));
    /// ```
    pub fn insert(&mut self, value: T) -> bool
    where
        T: Ord,
    {
        insert(&mut self.tree.root, value, &mut self.tree.order_ids) != InsertResult::Duplicate
    }

    /// Deletes the node holding `value`, rebalances, and returns the value. If the tree
    /// does not contain it, nothing happens and `None` is returned.
    ///
    /// A node with two children takes over its in-order predecessor's value and the
    /// predecessor's cell is freed instead, so the surviving node keeps its own
    /// construction id.
    pub fn delete(&mut self, value: &T) -> Option<T>
    where
        T: Ord,
    {
        let deleted = delete(&mut self.tree.root, value).into_value();
        if deleted.is_none() {
            debug!("no key found");
        }
        deleted
    }

    /// Verifies the search-tree order and, for every node, that the stored balance equals
    /// the difference of its subtree heights and lies in `-1..=1`.
    ///
    /// A failure here is a bug in this module, never a recoverable condition.
    ///
    /// # Errors
    ///
    /// [`TreeError::InvariantViolation`] for the first bad node found.
    pub fn check_invariants(&self) -> Result<(), TreeError>
    where
        T: Ord,
    {
        self.tree.check_order()?;
        checked_height(self.tree.root()).map(|_| ())
    }
}

impl<T> FromIterator<T> for AvlTree<T>
where
    T: Ord,
{
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut tree = Self::new();
        tree.extend(iter);
        tree
    }
}

impl<T> Extend<T> for AvlTree<T>
where
    T: Ord,
{
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.insert(value);
        }
    }
}

fn insert<T>(link: &mut Link<T>, value: T, order_ids: &mut OrderIds) -> InsertResult
where
    T: Ord,
{
    let Some(node) = link.as_mut() else {
        *link = Some(Node::boxed(value, order_ids.take()));
        return InsertResult::Grew;
    };

    match value.cmp(&node.value) {
        Ordering::Equal => InsertResult::Duplicate,
        Ordering::Less => match insert(&mut node.left, value, order_ids) {
            InsertResult::Grew => left_grew(link),
            settled => settled,
        },
        Ordering::Greater => match insert(&mut node.right, value, order_ids) {
            InsertResult::Grew => right_grew(link),
            settled => settled,
        },
    }
}

/// The left subtree of the node at `link` just got taller.
fn left_grew<T>(link: &mut Link<T>) -> InsertResult {
    let node = link.as_mut().expect("growth is reported by a child");
    match node.balance {
        Balance::RightHeavy => {
            node.balance = Balance::Even;
            InsertResult::Absorbed
        }
        Balance::Even => {
            node.balance = Balance::LeftHeavy;
            InsertResult::Grew
        }
        Balance::LeftHeavy => {
            let left_balance = node.left.as_ref().map_or(Balance::Even, |left| left.balance);
            let node = link.take().expect("checked non-empty above");
            *link = Some(if left_balance.factor() <= 0 {
                trace!("LL rotation");
                rotate_ll(node).0
            } else {
                trace!("LR rotation");
                rotate_lr(node)
            });
            InsertResult::Absorbed
        }
    }
}

/// The right subtree of the node at `link` just got taller.
fn right_grew<T>(link: &mut Link<T>) -> InsertResult {
    let node = link.as_mut().expect("growth is reported by a child");
    match node.balance {
        Balance::LeftHeavy => {
            node.balance = Balance::Even;
            InsertResult::Absorbed
        }
        Balance::Even => {
            node.balance = Balance::RightHeavy;
            InsertResult::Grew
        }
        Balance::RightHeavy => {
            let right_balance = node
                .right
                .as_ref()
                .map_or(Balance::Even, |right| right.balance);
            let node = link.take().expect("checked non-empty above");
            *link = Some(if right_balance.factor() >= 0 {
                trace!("RR rotation");
                rotate_rr(node).0
            } else {
                trace!("RL rotation");
                rotate_rl(node)
            });
            InsertResult::Absorbed
        }
    }
}

fn delete<T>(link: &mut Link<T>, value: &T) -> DeleteResult<T>
where
    T: Ord,
{
    let Some(node) = link.as_mut() else {
        return DeleteResult::NotFound;
    };

    match value.cmp(&node.value) {
        Ordering::Less => match delete(&mut node.left, value) {
            DeleteResult::Shrunk(removed) => {
                trace!("BL rebalance");
                shrunk_if(left_shrunk(link), removed)
            }
            other => other,
        },
        Ordering::Greater => match delete(&mut node.right, value) {
            DeleteResult::Shrunk(removed) => {
                trace!("BR rebalance");
                shrunk_if(right_shrunk(link), removed)
            }
            other => other,
        },
        Ordering::Equal if node.left.is_some() && node.right.is_some() => {
            let (predecessor, shrunk) = remove_max(&mut node.left);
            let removed = mem::replace(&mut node.value, predecessor);
            if shrunk {
                trace!("BL rebalance");
                shrunk_if(left_shrunk(link), removed)
            } else {
                DeleteResult::Removed(removed)
            }
        }
        Ordering::Equal => {
            let mut target = link.take().expect("checked non-empty above");
            *link = target.left.take().or_else(|| target.right.take());
            let Node { value, .. } = *target;
            DeleteResult::Shrunk(value)
        }
    }
}

fn shrunk_if<T>(shrunk: bool, value: T) -> DeleteResult<T> {
    if shrunk {
        DeleteResult::Shrunk(value)
    } else {
        DeleteResult::Removed(value)
    }
}

/// Unlinks the rightmost node below `link`, rebalancing on the way back up. Returns its
/// value and whether the subtree at `link` got shorter.
fn remove_max<T>(link: &mut Link<T>) -> (T, bool) {
    let node = link.as_mut().expect("predecessor of a node with a left child");
    if node.right.is_some() {
        let (value, shrunk) = remove_max(&mut node.right);
        (value, shrunk && right_shrunk(link))
    } else {
        let mut max = link.take().expect("checked non-empty above");
        *link = max.left.take();
        let Node { value, .. } = *max;
        (value, true)
    }
}

/// The left subtree of the node at `link` just got shorter. Returns whether the whole
/// subtree at `link` is now shorter too.
fn left_shrunk<T>(link: &mut Link<T>) -> bool {
    let node = link.as_mut().expect("shrinking is reported by a child");
    match node.balance {
        Balance::LeftHeavy => {
            node.balance = Balance::Even;
            true
        }
        Balance::Even => {
            node.balance = Balance::RightHeavy;
            false
        }
        Balance::RightHeavy => {
            let right_balance = node
                .right
                .as_ref()
                .map_or(Balance::Even, |right| right.balance);
            let node = link.take().expect("checked non-empty above");
            if right_balance.factor() >= 0 {
                trace!("RR1 rotation");
                let (root, shrunk) = rotate_rr(node);
                *link = Some(root);
                shrunk
            } else {
                trace!("RL rotation");
                *link = Some(rotate_rl(node));
                true
            }
        }
    }
}

/// The right subtree of the node at `link` just got shorter. Returns whether the whole
/// subtree at `link` is now shorter too.
fn right_shrunk<T>(link: &mut Link<T>) -> bool {
    let node = link.as_mut().expect("shrinking is reported by a child");
    match node.balance {
        Balance::RightHeavy => {
            node.balance = Balance::Even;
            true
        }
        Balance::Even => {
            node.balance = Balance::LeftHeavy;
            false
        }
        Balance::LeftHeavy => {
            let left_balance = node.left.as_ref().map_or(Balance::Even, |left| left.balance);
            let node = link.take().expect("checked non-empty above");
            if left_balance.factor() <= 0 {
                trace!("LL1 rotation");
                let (root, shrunk) = rotate_ll(node);
                *link = Some(root);
                shrunk
            } else {
                trace!("LR rotation");
                *link = Some(rotate_lr(node));
                true
            }
        }
    }
}

/// Promotes the left child `q` of `p`. Returns the new subtree root and whether the
/// subtree lost a level.
///
/// On insert `q` always leans left, both nodes end up even and the growth is absorbed.
/// On delete `q` may be even (the LL1 case): then both nodes keep leaning and the
/// subtree keeps its height, which stops the rebalancing further up.
fn rotate_ll<T>(mut p: Box<Node<T>>) -> (Box<Node<T>>, bool) {
    let mut q = p.left.take().expect("LL rotation needs a left child");
    p.left = q.right.take();

    let shrunk = if q.balance == Balance::Even {
        p.balance = Balance::LeftHeavy;
        q.balance = Balance::RightHeavy;
        false
    } else {
        p.balance = Balance::Even;
        q.balance = Balance::Even;
        true
    };

    q.right = Some(p);
    (q, shrunk)
}

/// Mirror image of [`rotate_ll`] (the RR and RR1 cases).
fn rotate_rr<T>(mut p: Box<Node<T>>) -> (Box<Node<T>>, bool) {
    let mut q = p.right.take().expect("RR rotation needs a right child");
    p.right = q.left.take();

    let shrunk = if q.balance == Balance::Even {
        p.balance = Balance::RightHeavy;
        q.balance = Balance::LeftHeavy;
        false
    } else {
        p.balance = Balance::Even;
        q.balance = Balance::Even;
        true
    };

    q.left = Some(p);
    (q, shrunk)
}

/// Promotes `r`, the right child of `p`'s left child `q`. The subtree always ends up
/// even at `r`.
fn rotate_lr<T>(mut p: Box<Node<T>>) -> Box<Node<T>> {
    let mut q = p.left.take().expect("LR rotation needs a left child");
    let mut r = q.right.take().expect("LR rotation needs a left-right grandchild");
    q.right = r.left.take();
    p.left = r.right.take();

    q.balance = if r.balance == Balance::RightHeavy {
        Balance::LeftHeavy
    } else {
        Balance::Even
    };
    p.balance = if r.balance == Balance::LeftHeavy {
        Balance::RightHeavy
    } else {
        Balance::Even
    };
    r.balance = Balance::Even;

    r.left = Some(q);
    r.right = Some(p);
    r
}

/// Mirror image of [`rotate_lr`].
fn rotate_rl<T>(mut p: Box<Node<T>>) -> Box<Node<T>> {
    let mut q = p.right.take().expect("RL rotation needs a right child");
    let mut r = q.left.take().expect("RL rotation needs a right-left grandchild");
    q.left = r.right.take();
    p.right = r.left.take();

    q.balance = if r.balance == Balance::LeftHeavy {
        Balance::RightHeavy
    } else {
        Balance::Even
    };
    p.balance = if r.balance == Balance::RightHeavy {
        Balance::LeftHeavy
    } else {
        Balance::Even
    };
    r.balance = Balance::Even;

    r.right = Some(q);
    r.left = Some(p);
    r
}

fn checked_height<T>(node: Option<&Node<T>>) -> Result<usize, TreeError> {
    let Some(node) = node else {
        return Ok(0);
    };

    let left = checked_height(node.left())?;
    let right = checked_height(node.right())?;
    let difference = right as isize - left as isize;
    if difference != isize::from(node.balance.factor()) {
        return Err(TreeError::InvariantViolation {
            order_id: node.order_id,
            detail: format!(
                "balance is {} but subtree heights differ by {}",
                node.balance.factor(),
                difference
            ),
        });
    }

    Ok(left.max(right) + 1)
}
