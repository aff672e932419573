//! This crate builds Binary Search Trees (BSTs) four different ways, mostly for
//! educational purposes: comparing how the shape of a tree comes about and what that
//! does to its height.
//!
//! ## Binary Search Tree
//!
//! A Binary Search Tree is a data structure supporting operations to
//! insert, find, and delete stored records. BSTs are typically defined
//! recursively using the notion of a `Node`. A `Node` will typically store
//! some sort of value (the value that was inserted, for example) and will
//! sometimes have child `Node`s. The most important invariants of a BST are:
//!
//! 1. For every `Node` in a BST, all the `Node`s in its left subtree have a
//!    value less than its own value.
//! 2. For every `Node` in a BST, all the `Node`s in its right subtree have a
//!    value greater than its own value.
//!
//! > Note that some `Node`s have no children. These `Node`s are called "leaf nodes".
//!
//! Searching takes `O(height)`, so everything comes down to the shape:
//!
//! - [`build_ideal`] lays sorted input out with the minimum possible height.
//! - [`UnbalancedTree`] takes whatever shape the insertion order gives it.
//! - [`AvlTree`] rotates after every insert and delete to stay within `O(lg N)`.
//! - [`build_optimal`] weighs each key by how often it is looked up and minimizes the
//!   expected search cost instead of the height.
//!
//! All of them share [`Tree`] and its queries, and can be exported with [`render`].
//!
//! # Examples
//!
//! ```
//! use bintree::{AvlTree, UnbalancedTree};
//!
//! let unbalanced: UnbalancedTree<_> = (0..100).collect();
//! let avl: AvlTree<_> = (0..100).collect();
//!
//! assert_eq!(unbalanced.height(), 100);
//! assert_eq!(avl.height(), 7);
//! assert_eq!(unbalanced.checksum(), avl.checksum());
//! ```

#![deny(missing_docs)]

mod avl;
mod checksum;
mod error;
mod ideal;
mod node;
mod optimal;
pub mod render;
mod tree;
mod unbalanced;
mod util;


pub use avl::AvlTree;
pub use checksum::Checksum;
pub use error::TreeError;
pub use ideal::{build_ideal, build_ideal_range};
pub use node::{Balance, Node};
pub use optimal::{build_optimal, OptimalTreeBuilder};
pub use tree::{Iter, Tree};
pub use unbalanced::UnbalancedTree;
