//! Statically optimal search trees.
//!
//! Given keys in ascending order, each with an access weight, [`OptimalTreeBuilder`] finds
//! the shape that minimizes the total weighted search cost
//!
//! ```text
//! cost = Σ weight(key) * depth(key)        (the root has depth 1)
//! ```
//!
//! by dynamic programming over every contiguous run of keys, using Knuth's observation
//! that the best root of a run never moves left when the run grows to the right (or right
//! when it grows to the left). That bounds the search for each run's root and brings the
//! whole construction down to `O(n²)`.
//!
//! The tree is then materialized by inserting the chosen roots, top down, into an
//! [`UnbalancedTree`]. Nothing rebalances it afterwards: further inserts follow the plain
//! BST rules and can ruin the optimality.
//!
//! # Examples
//!
//! ```
//! use bintree::build_optimal;
//!
//! let tree = build_optimal([('a', 5), ('b', 1), ('c', 2)]).unwrap();
//!
//! // The heavy key sits at the root.
//! assert_eq!(tree.root().map(|n| *n.value()), Some('a'));
//! ```

use tracing::debug;

use crate::error::TreeError;
use crate::unbalanced::UnbalancedTree;

/// Builds the cost-optimal tree for `weighted`, a sequence of `(key, weight)` pairs in
/// strictly ascending key order.
///
/// # Errors
///
/// See [`OptimalTreeBuilder::new`].
pub fn build_optimal<T, I>(weighted: I) -> Result<UnbalancedTree<T>, TreeError>
where
    T: Ord,
    I: IntoIterator<Item = (T, u64)>,
{
    Ok(OptimalTreeBuilder::new(weighted)?.build())
}

/// The dynamic-programming tables for one weighted key sequence.
///
/// Tables are indexed by run boundaries: `(i, j)` stands for the keys at indices `i..j` of
/// the input.
#[derive(Clone, Debug)]
pub struct OptimalTreeBuilder<T> {
    values: Vec<T>,
    /// `weight[i][j]`: sum of the weights of run `(i, j)`.
    weight: Vec<Vec<u64>>,
    /// `cost[i][j]`: smallest weighted search cost of any tree over run `(i, j)`.
    cost: Vec<Vec<u64>>,
    /// `root[i][j]`: one past the index of the root chosen for run `(i, j)`.
    root: Vec<Vec<usize>>,
}

impl<T> OptimalTreeBuilder<T>
where
    T: Ord,
{
    /// Computes the tables for `weighted`, a sequence of `(key, weight)` pairs.
    ///
    /// # Errors
    ///
    /// - [`TreeError::EmptyInput`] if there are no pairs.
    /// - [`TreeError::Unsorted`] if the keys are not strictly ascending.
    /// - [`TreeError::WeightOverflow`] if a cost does not fit in a `u64`.
    pub fn new<I>(weighted: I) -> Result<Self, TreeError>
    where
        I: IntoIterator<Item = (T, u64)>,
    {
        let (values, weights): (Vec<T>, Vec<u64>) = weighted.into_iter().unzip();
        if values.is_empty() {
            return Err(TreeError::EmptyInput);
        }
        if let Some(pos) = values.windows(2).position(|pair| pair[0] >= pair[1]) {
            return Err(TreeError::Unsorted { index: pos + 1 });
        }

        let n = values.len();
        let mut weight = vec![vec![0u64; n + 1]; n + 1];
        for i in 0..n {
            for j in i + 1..=n {
                weight[i][j] = weight[i][j - 1]
                    .checked_add(weights[j - 1])
                    .ok_or(TreeError::WeightOverflow)?;
            }
        }

        let mut cost = vec![vec![0u64; n + 1]; n + 1];
        let mut root = vec![vec![0usize; n + 1]; n + 1];
        for i in 0..n {
            cost[i][i + 1] = weight[i][i + 1];
            root[i][i + 1] = i + 1;
        }

        for len in 2..=n {
            for i in 0..=n - len {
                let j = i + len;
                let mut best = root[i][j - 1];
                let mut best_cost = u64::MAX;
                for k in root[i][j - 1]..=root[i + 1][j] {
                    let candidate = cost[i][k - 1]
                        .checked_add(cost[k][j])
                        .ok_or(TreeError::WeightOverflow)?;
                    if candidate < best_cost {
                        best = k;
                        best_cost = candidate;
                    }
                }
                cost[i][j] = best_cost
                    .checked_add(weight[i][j])
                    .ok_or(TreeError::WeightOverflow)?;
                root[i][j] = best;
            }
        }

        debug!(keys = n, cost = cost[0][n], "computed optimal tree tables");
        Ok(Self {
            values,
            weight,
            cost,
            root,
        })
    }

    /// Inserts the keys into a fresh [`UnbalancedTree`], each run's chosen root before the
    /// runs on either side of it, so the tree takes exactly the optimal shape.
    pub fn build(self) -> UnbalancedTree<T> {
        let n = self.values.len();
        let mut values: Vec<Option<T>> = self.values.into_iter().map(Some).collect();
        let mut tree = UnbalancedTree::new();

        // Left runs are popped first so construction ids come out in pre-order.
        let mut pending = vec![(0, n)];
        while let Some((i, j)) = pending.pop() {
            if i >= j {
                continue;
            }
            let k = self.root[i][j];
            let value = values[k - 1].take().expect("every key is placed once");
            tree.insert(value);
            pending.push((k, j));
            pending.push((i, k - 1));
        }

        debug!(size = tree.size(), height = tree.height(), "built optimal tree");
        tree
    }
}

impl<T> OptimalTreeBuilder<T> {
    /// The number of keys.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Always `false`: a builder cannot be created from empty input.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// The weighted search cost of the optimal tree over all keys.
    pub fn cost(&self) -> u64 {
        self.cost[0][self.len()]
    }

    /// The optimal cost of a tree over the keys at `i..j`, or `None` if `i > j` or `j` is
    /// past the last key.
    pub fn cost_of(&self, i: usize, j: usize) -> Option<u64> {
        self.in_bounds(i, j).then(|| self.cost[i][j])
    }

    /// The total weight of the keys at `i..j`, or `None` if `i > j` or `j` is past the last
    /// key.
    pub fn weight_of(&self, i: usize, j: usize) -> Option<u64> {
        self.in_bounds(i, j).then(|| self.weight[i][j])
    }

    /// The index of the key chosen as the root of the tree over `i..j`, or `None` if the
    /// range is empty or out of bounds.
    pub fn root_of(&self, i: usize, j: usize) -> Option<usize> {
        (self.in_bounds(i, j) && i < j).then(|| self.root[i][j] - 1)
    }

    fn in_bounds(&self, i: usize, j: usize) -> bool {
        i <= j && j <= self.len()
    }
}
