use bintree::AvlTree;

use std::collections::BTreeSet;

use crate::Op;

fn height_bound(n: usize) -> f64 {
    1.4405 * ((n + 2) as f64).log2() - 0.3277
}

/// Applies a set of operations to a tree and a set, checking after every step that the
/// tree is still a valid AVL tree holding exactly the values in the set. Returns how many
/// inserts and deletes actually changed something.
fn do_ops(ops: &[Op<i16>], tree: &mut AvlTree<i16>, set: &mut BTreeSet<i16>) -> (usize, usize) {
    let (mut inserted, mut deleted) = (0, 0);
    for op in ops {
        match op {
            Op::Insert(v) => {
                let added = tree.insert(*v);
                assert_eq!(added, set.insert(*v));
                inserted += usize::from(added);
            }
            Op::Remove(v) => {
                let removed = tree.delete(v);
                assert_eq!(removed, set.take(v));
                deleted += usize::from(removed.is_some());
            }
        }

        tree.check_invariants().unwrap();
        assert!(tree.height() as f64 <= height_bound(tree.size()));
    }
    (inserted, deleted)
}

#[quickcheck]
fn fuzz_multiple_operations(ops: Vec<Op<i16>>) -> bool {
    let mut tree = AvlTree::new();
    let mut set = BTreeSet::new();

    let (inserted, deleted) = do_ops(&ops, &mut tree, &mut set);
    tree.size() == inserted - deleted && tree.iter().eq(set.iter())
}

#[quickcheck]
fn in_order_is_sorted(xs: Vec<i32>) -> bool {
    let tree: AvlTree<_> = xs.iter().copied().collect();
    let values: Vec<_> = tree.iter().copied().collect();

    values.windows(2).all(|pair| pair[0] < pair[1])
}

#[quickcheck]
fn delete_everything(xs: Vec<i32>, seed: usize) -> bool {
    let mut tree: AvlTree<_> = xs.iter().copied().collect();

    // Delete in a different order than inserted.
    let mut order = xs;
    if !order.is_empty() {
        let split = seed % order.len();
        order.rotate_left(split);
        order.reverse();
    }
    for x in &order {
        tree.delete(x);
        tree.check_invariants().unwrap();
    }

    tree.size() == 0 && tree.root().is_none()
}
