use relation::RelationTree;

use quickcheck_macros::quickcheck;
use std::collections::{BTreeSet, HashSet};

use crate::Op;

/// Narrows an `i8` down to a few values so that pairs keep sharing elements.
fn small(v: i8) -> i8 {
    v.rem_euclid(6)
}

/// Applies a set of operations to a tree and a set of pairs.
/// This way we can ensure that after a random smattering of inserts
/// and deletes we have the same pairs in both.
fn do_ops(ops: &[Op<i8, i8>], tree: &mut RelationTree<i8, i8>, set: &mut BTreeSet<(i8, i8)>) {
    for op in ops {
        match *op {
            Op::Insert(x, y) => {
                let (x, y) = (small(x), small(y));
                tree.insert(x, y);
                set.insert((x, y));
            }
            Op::Delete(x, y) => {
                let (x, y) = (small(x), small(y));
                tree.delete(&x, &y);
                set.remove(&(x, y));
            }
            Op::DeleteViaX(x) => {
                let x = small(x);
                tree.delete_via_x(&x);
                set.retain(|&(other, _)| other != x);
            }
            Op::DeleteViaY(y) => {
                let y = small(y);
                tree.delete_via_y(&y);
                set.retain(|&(_, other)| other != y);
            }
        }
    }
}

/// Whether the in-order traversal is strictly ascending by `x` and then `y`.
fn is_sorted(tree: &RelationTree<i8, i8>) -> bool {
    let pairs: Vec<_> = tree.iter().collect();
    pairs.windows(2).all(|w| w[0] < w[1])
}

#[quickcheck]
fn fuzz_multiple_operations_i8(ops: Vec<Op<i8, i8>>) -> bool {
    let mut tree = RelationTree::new();
    let mut set = BTreeSet::new();

    do_ops(&ops, &mut tree, &mut set);
    is_sorted(&tree)
        && tree.len() == set.len()
        && set.iter().all(|(x, y)| tree.contains(x, y))
}

#[quickcheck]
fn contains(pairs: Vec<(i8, i8)>) -> bool {
    let tree: RelationTree<_, _> = pairs.iter().copied().collect();

    pairs.iter().all(|(x, y)| tree.contains(x, y))
}

#[quickcheck]
fn contains_not(pairs: Vec<(i8, i8)>, nots: Vec<(i8, i8)>) -> bool {
    let tree: RelationTree<_, _> = pairs.iter().copied().collect();
    let added: HashSet<_> = pairs.into_iter().collect();
    let nots: HashSet<_> = nots.into_iter().collect();
    let mut nots = nots.difference(&added);

    nots.all(|(x, y)| !tree.contains(x, y))
}

#[quickcheck]
fn insert_twice_changes_nothing(pairs: Vec<(i8, i8)>) -> bool {
    let once: RelationTree<_, _> = pairs.iter().copied().collect();
    let twice: RelationTree<_, _> = pairs.iter().chain(pairs.iter()).copied().collect();

    once.to_string() == twice.to_string() && once.len() == twice.len()
}

#[quickcheck]
fn with_deletions(pairs: Vec<(i8, i8)>, deletes: Vec<(i8, i8)>) -> bool {
    let mut tree: RelationTree<_, _> = pairs.iter().copied().collect();
    for (x, y) in &deletes {
        tree.delete(x, y);
    }
    // Deleting again is a no-op.
    let deleted_again = deletes.iter().any(|(x, y)| tree.delete(x, y));

    let deleted: HashSet<_> = deletes.iter().copied().collect();
    let mut still_present = pairs.iter().filter(|pair| !deleted.contains(*pair));

    !deleted_again
        && deletes.iter().all(|(x, y)| !tree.contains(x, y))
        && still_present.all(|(x, y)| tree.contains(x, y))
        && is_sorted(&tree)
}

#[quickcheck]
fn delete_via_x_is_complete(pairs: Vec<(i8, i8)>, x: i8) -> bool {
    let pairs: Vec<_> = pairs.into_iter().map(|(a, b)| (small(a), b)).collect();
    let x = small(x);
    let mut tree: RelationTree<_, _> = pairs.iter().copied().collect();
    tree.delete_via_x(&x);

    tree.determine_via_x(&x).is_empty()
        && pairs
            .iter()
            .all(|(a, b)| tree.contains(a, b) == (*a != x))
        && is_sorted(&tree)
}

#[quickcheck]
fn delete_via_y_is_complete(pairs: Vec<(i8, i8)>, y: i8) -> bool {
    let pairs: Vec<_> = pairs.into_iter().map(|(a, b)| (a, small(b))).collect();
    let y = small(y);
    let mut tree: RelationTree<_, _> = pairs.iter().copied().collect();
    tree.delete_via_y(&y);

    tree.determine_via_y(&y).is_empty()
        && pairs
            .iter()
            .all(|(a, b)| tree.contains(a, b) == (*b != y))
        && is_sorted(&tree)
}

#[quickcheck]
fn determine_via_x_is_exact(pairs: Vec<(i8, i8)>, x: i8) -> bool {
    let pairs: Vec<_> = pairs.into_iter().map(|(a, b)| (small(a), b)).collect();
    let x = small(x);
    let tree: RelationTree<_, _> = pairs.iter().copied().collect();

    let expected: BTreeSet<_> = pairs.iter().filter(|(a, _)| *a == x).map(|(_, b)| *b).collect();
    let found: Vec<_> = tree.determine_via_x(&x).into_iter().copied().collect();

    found.iter().copied().eq(expected.into_iter())
}

#[quickcheck]
fn determine_via_y_is_exact(pairs: Vec<(i8, i8)>, y: i8) -> bool {
    let pairs: Vec<_> = pairs.into_iter().map(|(a, b)| (a, small(b))).collect();
    let y = small(y);
    let tree: RelationTree<_, _> = pairs.iter().copied().collect();

    let expected: BTreeSet<_> = pairs.iter().filter(|(_, b)| *b == y).map(|(a, _)| *a).collect();
    let found: Vec<_> = tree.determine_via_y(&y).into_iter().copied().collect();

    found.iter().copied().eq(expected.into_iter())
}

#[quickcheck]
fn empty_forgets_everything(pairs: Vec<(i8, i8)>) -> bool {
    let mut tree: RelationTree<_, _> = pairs.iter().copied().collect();
    tree.empty();

    tree.is_empty() && tree.len() == 0 && pairs.iter().all(|(x, y)| !tree.contains(x, y))
}

#[quickcheck]
fn display_round_trips(pairs: Vec<(i8, i8)>) -> bool {
    let tree: RelationTree<_, _> = pairs.iter().copied().collect();
    let read: RelationTree<i8, i8> = match tree.to_string().parse() {
        Ok(read) => read,
        Err(_) => return false,
    };

    read.to_string() == tree.to_string()
}
