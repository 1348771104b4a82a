use bintree::{walk, Node, Order, Tree};
use quickcheck::TestResult;
use quickcheck_macros::quickcheck;

use crate::Op;

/// Builds a tree rooted at `root` by inserting `xs` in order.
fn build(root: i8, xs: &[i8]) -> Tree {
    let mut tree = Tree::with_root(Node::leaf(root.into()));
    for x in xs {
        tree.insert_value((*x).into());
    }

    tree
}

/// Applies a set of operations to a tree and a plain list of its values.
/// This way we can ensure that after a random smattering of inserts both
/// searches agree with the list about what is in the tree.
fn do_ops(ops: &[Op], tree: &mut Tree, values: &mut Vec<i8>) -> bool {
    for op in ops {
        match op {
            Op::Insert(x) => {
                tree.insert_value((*x).into());
                values.push(*x);
            }
            Op::Bfs(x) => {
                if tree.bfs((*x).into()) != values.contains(x) {
                    return false;
                }
            }
            Op::Dfs(x) => {
                if tree.dfs((*x).into()) != values.contains(x) {
                    return false;
                }
            }
        }
    }

    true
}

#[quickcheck]
fn fuzz_multiple_operations_i8(root: i8, ops: Vec<Op>) -> bool {
    let mut tree = Tree::with_root(Node::leaf(root.into()));
    let mut values = vec![root];

    do_ops(&ops, &mut tree, &mut values)
}

#[quickcheck]
fn in_order_is_sorted(root: i8, xs: Vec<i8>) -> bool {
    let tree = build(root, &xs);

    let mut expected: Vec<i64> = xs.iter().map(|x| (*x).into()).collect();
    expected.push(root.into());
    expected.sort_unstable();

    walk(tree.root(), Order::InOrder) == expected
}

#[quickcheck]
fn every_order_visits_every_node(root: i8, xs: Vec<i8>) -> bool {
    let tree = build(root, &xs);

    Order::ALL.into_iter().all(|order| {
        let rendered = tree.traverse(order);
        walk(tree.root(), order).len() == xs.len() + 1
            && rendered.matches("->").count() == xs.len() + 1
    })
}

#[quickcheck]
fn pre_order_starts_and_post_order_ends_at_root(root: i8, xs: Vec<i8>) -> bool {
    let tree = build(root, &xs);

    walk(tree.root(), Order::PreOrder).first() == Some(&i64::from(root))
        && walk(tree.root(), Order::PostOrder).last() == Some(&i64::from(root))
}

#[quickcheck]
fn contains(root: i8, xs: Vec<i8>) -> bool {
    let tree = build(root, &xs);

    xs.iter().all(|x| tree.dfs((*x).into()) && tree.bfs((*x).into()))
}

#[quickcheck]
fn contains_not(root: i8, xs: Vec<i8>, nots: Vec<i8>) -> bool {
    let tree = build(root, &xs);

    nots.iter()
        .filter(|x| **x != root && !xs.contains(*x))
        .all(|x| !tree.dfs((*x).into()) && !tree.bfs((*x).into()))
}

#[quickcheck]
fn compare_is_reflexive(root: i8, xs: Vec<i8>) -> bool {
    let tree = build(root, &xs);
    let same = build(root, &xs);

    bintree::compare(tree.root(), tree.root())
        && bintree::compare(tree.root(), same.root())
        && tree == tree.clone()
}

#[quickcheck]
fn compare_detects_changed_value(root: i8, xs: Vec<i8>, index: usize, x: i8) -> TestResult {
    if xs.is_empty() || x == root || xs.contains(&x) {
        return TestResult::discard();
    }

    let mut changed = xs.clone();
    let index = index % xs.len();
    changed[index] = x;

    let tree = build(root, &xs);
    let other = build(root, &changed);
    TestResult::from_bool(!bintree::compare(tree.root(), other.root()))
}

#[quickcheck]
fn insert_into_empty_tree_is_noop(xs: Vec<i8>) -> bool {
    let mut tree = Tree::new();
    let attached = xs.iter().any(|x| tree.insert_value((*x).into()));

    !attached && tree.is_empty()
}
