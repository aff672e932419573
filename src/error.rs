//! Errors reported by tree construction and queries.
//!
//! Looking for a value that isn't there is not an error: `delete` returns `None` and
//! leaves the tree alone. The variants here cover misuse of the builders, queries that
//! have no answer on an empty tree, and broken invariants found by the checkers.

use thiserror::Error;

/// Everything that can go wrong while building or inspecting a tree.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TreeError {
    /// A value that was asked for is not stored in the tree.
    #[error("no key found")]
    NotFound,

    /// The query has no meaningful answer on a tree without nodes.
    #[error("query on an empty tree")]
    EmptyTree,

    /// A builder was handed an empty input sequence.
    #[error("builder input is empty")]
    EmptyInput,

    /// The builder input is not in the order the builder needs.
    #[error("input is out of order at index {index}")]
    Unsorted {
        /// Index of the first element that breaks the ordering.
        index: usize,
    },

    /// A sub-range does not fit inside the input sequence.
    #[error("range {start}..={end} is out of bounds for {len} elements")]
    RangeOutOfBounds {
        /// First index of the requested range.
        start: usize,
        /// Last index (inclusive) of the requested range.
        end: usize,
        /// Length of the sequence.
        len: usize,
    },

    /// Summing the weights of an optimal-tree input overflowed.
    #[error("cumulative weight overflowed")]
    WeightOverflow,

    /// A structural invariant does not hold. This is always a bug in this crate.
    #[error("invariant violated at node {order_id}: {detail}")]
    InvariantViolation {
        /// Construction id of the offending node.
        order_id: usize,
        /// What exactly is wrong.
        detail: String,
    },
}
