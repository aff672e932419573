use bintree::{build_ideal, build_optimal, AvlTree, UnbalancedTree};

/// Sorts and deduplicates so every builder accepts the input.
fn distinct(mut xs: Vec<i16>) -> Vec<i16> {
    xs.sort_unstable();
    xs.dedup();
    xs
}

#[quickcheck]
fn ideal_height_is_minimal(xs: Vec<i16>) -> bool {
    let xs = distinct(xs);
    let tree = build_ideal(&xs).unwrap();
    let n = xs.len();

    tree.size() == n && tree.height() == (usize::BITS - n.leading_zeros()) as usize
}

#[quickcheck]
fn all_shapes_hold_the_same_values(xs: Vec<i16>) -> bool {
    let sorted = distinct(xs.clone());
    if sorted.is_empty() {
        return true;
    }

    let ideal = build_ideal(&sorted).unwrap();
    let unbalanced: UnbalancedTree<_> = xs.iter().copied().collect();
    let avl: AvlTree<_> = xs.iter().copied().collect();
    let optimal = build_optimal(sorted.iter().map(|&x| (x, 1))).unwrap();

    let expected: Vec<_> = sorted.iter().collect();
    ideal.iter().eq(expected.iter().copied())
        && unbalanced.iter().eq(expected.iter().copied())
        && avl.iter().eq(expected.iter().copied())
        && optimal.iter().eq(expected.iter().copied())
        && ideal.checksum() == avl.checksum()
        && unbalanced.checksum() == optimal.checksum()
}

#[quickcheck]
fn ideal_is_never_taller(xs: Vec<i16>) -> bool {
    let ideal = build_ideal(&distinct(xs.clone())).unwrap();
    let unbalanced: UnbalancedTree<_> = xs.iter().copied().collect();
    let avl: AvlTree<_> = xs.iter().copied().collect();

    ideal.height() <= avl.height() && ideal.height() <= unbalanced.height()
}

#[quickcheck]
fn uniform_optimal_tree_is_as_short_as_ideal(xs: Vec<i16>) -> bool {
    let xs = distinct(xs);
    if xs.is_empty() {
        return true;
    }

    let ideal = build_ideal(&xs).unwrap();
    let optimal = build_optimal(xs.iter().map(|&x| (x, 1))).unwrap();

    optimal.height() == ideal.height()
}
