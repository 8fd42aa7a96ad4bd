use adt::avl::Tree;
use adt::ordering::Reversed;

use std::collections::BTreeSet;

use crate::Op;

/// Applies a set of operations to a tree and a `BTreeSet`, returning `false` as soon as a
/// removal disagrees.
fn do_ops<T, L>(ops: &[Op<T>], tree: &mut Tree<T, L>, set: &mut BTreeSet<T>) -> bool
where
    T: Ord + Clone,
    L: adt::ordering::Less<T>,
{
    for op in ops {
        match op {
            Op::Insert(x) => {
                tree.insert(x.clone());
                set.insert(x.clone());
            }
            Op::Remove(x) => {
                if tree.remove(x) != set.remove(x) {
                    return false;
                }
            }
        }
        tree.check_consistency();
    }
    true
}

/// Upper bound on the height of an AVL tree holding `len` values.
fn max_height(len: usize) -> usize {
    (1.45 * ((len + 2) as f64).log2()) as usize
}

#[quickcheck]
fn matches_btreeset(ops: Vec<Op<i8>>) -> bool {
    let mut tree = Tree::new();
    let mut set = BTreeSet::new();

    do_ops(&ops, &mut tree, &mut set)
        && tree.len() == set.len()
        && tree.iter().eq(set.iter())
        && set.iter().all(|x| tree.search(x) == Some(x))
}

#[quickcheck]
fn height_stays_logarithmic(ops: Vec<Op<i16>>) -> bool {
    let mut tree = Tree::new();
    let mut set = BTreeSet::new();

    do_ops(&ops, &mut tree, &mut set) && tree.height() <= max_height(tree.len())
}

#[quickcheck]
fn sorted_inserts_stay_balanced(n: u8) -> bool {
    let ascending: Tree<_> = (0..u16::from(n)).collect();
    let descending: Tree<_> = (0..u16::from(n)).rev().collect();
    ascending.check_consistency();
    descending.check_consistency();

    ascending.height() <= max_height(ascending.len())
        && descending.height() <= max_height(descending.len())
}

#[quickcheck]
fn reversed_order(ops: Vec<Op<i8>>) -> bool {
    let mut tree = Tree::with_less(Reversed);
    let mut set = BTreeSet::new();

    do_ops(&ops, &mut tree, &mut set) && tree.iter().eq(set.iter().rev())
}

#[quickcheck]
fn traversals_mirror_each_other(xs: Vec<i8>) -> bool {
    let tree: Tree<_> = xs.into_iter().collect();
    let forward: Vec<_> = tree.traverse().collect();
    let mut backward: Vec<_> = tree.traverse_rev().collect();
    backward.reverse();

    forward == backward && forward.iter().all(|&(depth, _)| depth < tree.height())
}

#[quickcheck]
fn display_has_one_line_per_value(xs: Vec<u8>) -> bool {
    let tree: Tree<_> = xs.into_iter().collect();
    let rendered = tree.to_string();

    rendered.lines().count() == tree.len()
        && rendered
            .lines()
            .zip(tree.traverse_rev())
            .all(|(line, (depth, value))| line == format!("{:1$}{value}", "", depth * 3))
}

#[quickcheck]
fn predicate_equality_keeps_first(xs: Vec<(u8, u8)>) -> bool {
    // Only the first field takes part in the ordering.
    let mut tree = Tree::with_less(|a: &(u8, u8), b: &(u8, u8)| a.0 < b.0);
    tree.extend(xs.iter().copied());
    tree.check_consistency();

    tree.iter().all(|stored| xs.iter().find(|x| x.0 == stored.0) == Some(stored))
}

#[quickcheck]
fn take_returns_stored_value(xs: Vec<i8>, x: i8) -> bool {
    let mut tree: Tree<_> = xs.iter().copied().collect();
    let expected = xs.contains(&x).then_some(x);

    tree.take(&x) == expected && !tree.contains(&x)
}
