use adt::bst::Tree;

use crate::Op;

/// Applies a set of operations to a tree and to a sorted `Vec` holding the same multiset.
fn do_ops<T: Ord + Clone>(ops: &[Op<T>], tree: &mut Tree<T>, model: &mut Vec<T>) -> bool {
    for op in ops {
        match op {
            Op::Insert(x) => {
                tree.insert(x.clone());
                let at = model.partition_point(|y| y <= x);
                model.insert(at, x.clone());
            }
            Op::Remove(x) => {
                let removed = match model.binary_search(x) {
                    Ok(at) => {
                        model.remove(at);
                        true
                    }
                    Err(_) => false,
                };
                if tree.remove(x) != removed {
                    return false;
                }
            }
        }
        tree.check_consistency();
    }
    true
}

#[quickcheck]
fn matches_sorted_multiset(ops: Vec<Op<i8>>) -> bool {
    let mut tree = Tree::new();
    let mut model = Vec::new();

    do_ops(&ops, &mut tree, &mut model) && tree.len() == model.len() && tree.iter().eq(&model)
}

#[quickcheck]
fn keeps_every_duplicate(xs: Vec<u8>) -> bool {
    let tree: Tree<_> = xs.iter().map(|x| x % 4).collect();
    let mut sorted: Vec<_> = xs.iter().map(|x| x % 4).collect();
    sorted.sort_unstable();

    tree.iter().copied().eq(sorted)
}

#[quickcheck]
fn removed_values_are_gone(xs: Vec<i8>, deletes: Vec<i8>) -> bool {
    let mut tree: Tree<_> = xs.iter().copied().collect();
    for delete in &deletes {
        while tree.remove(delete) {}
    }
    tree.check_consistency();

    deletes.iter().all(|x| !tree.contains(x))
        && xs.iter().filter(|x| !deletes.contains(x)).all(|x| tree.search(x) == Some(x))
}

#[quickcheck]
fn traversals_mirror_each_other(xs: Vec<i8>) -> bool {
    let tree: Tree<_> = xs.into_iter().collect();
    let forward: Vec<_> = tree.traverse().collect();
    let mut backward: Vec<_> = tree.traverse_rev().collect();
    backward.reverse();

    forward == backward && tree.to_string().lines().count() == tree.len()
}
