//! The single cell every tree in this crate is made of.

use std::cmp::Ordering;
use std::fmt;

/// An owning link to a child. Each child has exactly one owner, so there are no parent
/// pointers and dropping a link drops the whole subtree below it.
pub(crate) type Link<T> = Option<Box<Node<T>>>;

/// The signed difference between the heights of a node's right and left subtrees.
///
/// Only [`AvlTree`][crate::AvlTree] keeps this up to date. Every other tree leaves all
/// of its nodes at [`Balance::Even`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Balance {
    /// The left subtree is one level taller.
    LeftHeavy,
    /// Both subtrees have the same height.
    Even,
    /// The right subtree is one level taller.
    RightHeavy,
}

impl Balance {
    /// The balance as a number in `-1..=1`.
    pub fn factor(self) -> i8 {
        match self {
            Self::LeftHeavy => -1,
            Self::Even => 0,
            Self::RightHeavy => 1,
        }
    }
}

/// A tree node. It holds a value, the id it was given when it was created, and up to two
/// children.
pub struct Node<T> {
    pub(crate) value: T,
    pub(crate) order_id: usize,
    pub(crate) balance: Balance,
    pub(crate) left: Link<T>,
    pub(crate) right: Link<T>,
}

impl<T> Node<T> {
    pub(crate) fn boxed(value: T, order_id: usize) -> Box<Self> {
        Box::new(Self {
            value,
            order_id,
            balance: Balance::Even,
            left: None,
            right: None,
        })
    }

    /// The value stored in this node.
    pub fn value(&self) -> &T {
        &self.value
    }

    /// The id this node was given at creation. Ids increase with every node a tree
    /// creates and are never reused, so they are a stable handle for renderers.
    pub fn order_id(&self) -> usize {
        self.order_id
    }

    /// The node's balance. Meaningful only inside an [`AvlTree`][crate::AvlTree].
    pub fn balance(&self) -> Balance {
        self.balance
    }

    /// The left child, if any.
    pub fn left(&self) -> Option<&Self> {
        self.left.as_deref()
    }

    /// The right child, if any.
    pub fn right(&self) -> Option<&Self> {
        self.right.as_deref()
    }
}

/// Shows the children by construction id only, so formatting a node never descends into
/// its subtree.
impl<T> fmt::Debug for Node<T>
where
    T: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Node")
            .field("value", &self.value)
            .field("order_id", &self.order_id)
            .field("balance", &self.balance)
            .field("left", &self.left().map(Node::order_id))
            .field("right", &self.right().map(Node::order_id))
            .finish()
    }
}

/// Walks down from `link` and returns the link that holds `value`, or the empty link
/// where `value` would have to be inserted.
pub(crate) fn locate<'a, T>(mut link: &'a mut Link<T>, value: &T) -> &'a mut Link<T>
where
    T: Ord,
{
    loop {
        match link.as_deref().map(|node| value.cmp(&node.value)) {
            None | Some(Ordering::Equal) => return link,
            Some(Ordering::Less) => {
                link = &mut link.as_mut().expect("checked non-empty above").left;
            }
            Some(Ordering::Greater) => {
                link = &mut link.as_mut().expect("checked non-empty above").right;
            }
        }
    }
}

/// Unlinks the rightmost node of the subtree at `link` and hands it back. Its left child
/// takes its place.
pub(crate) fn detach_max<T>(mut link: &mut Link<T>) -> Option<Box<Node<T>>> {
    while link.as_ref().map_or(false, |node| node.right.is_some()) {
        link = &mut link.as_mut().expect("checked non-empty above").right;
    }

    let mut max = link.take()?;
    *link = max.left.take();
    Some(max)
}
