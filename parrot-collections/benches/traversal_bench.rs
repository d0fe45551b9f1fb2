//! Traversal throughput over wide and deep trees.

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use rand::{Rng, rng};

use parrot_collections::node::{BinaryTreeNode, TreeNode};
use parrot_collections::traversal::breadth_first_by_key;

const TREE_SIZES: [u64; 3] = [1 << 10, 1 << 13, 1 << 16];

/// A random n-ary tree: each new node hangs off a random node already in the tree.
fn random_tree(size: u64) -> TreeNode<u64> {
    let mut rng = rng();
    let mut root = TreeNode::new(0);
    for value in 1..size {
        let mut cursor = &mut root;
        while !cursor.is_leaf() && rng.random_bool(0.7) {
            let index = rng.random_range(0..cursor.child_count());
            cursor = &mut cursor[index];
        }
        cursor.add_child(value);
    }
    root
}

/// A binary tree built by inserting random keys with search-tree ordering.
fn random_binary_tree(size: u64) -> BinaryTreeNode<u64> {
    let mut rng = rng();
    let mut root = BinaryTreeNode::new(u64::MAX / 2);
    for _ in 1..size {
        let value: u64 = rng.random();
        let mut cursor = &mut root;
        loop {
            let go_left = value < *cursor.value();
            let slot_empty = if go_left {
                cursor.left().is_none()
            } else {
                cursor.right().is_none()
            };
            if slot_empty {
                if go_left {
                    cursor.set_left(value);
                } else {
                    cursor.set_right(value);
                }
                break;
            }
            let next = if go_left {
                cursor.left_mut()
            } else {
                cursor.right_mut()
            };
            match next {
                Some(next) => cursor = next,
                None => break,
            }
        }
    }
    root
}

pub fn tree_node_orders(c: &mut Criterion) {
    let mut group = c.benchmark_group("tree_node_orders");

    for size in TREE_SIZES {
        group.throughput(Throughput::Elements(size));
        let tree = random_tree(size);

        group.bench_with_input(BenchmarkId::new("pre_order", size), &tree, |b, tree| {
            b.iter(|| {
                let mut sum = 0u64;
                tree.pre_order(|n| sum += n.value());
                std::hint::black_box(sum);
            })
        });

        group.bench_with_input(BenchmarkId::new("post_order", size), &tree, |b, tree| {
            b.iter(|| {
                let sum: u64 = tree.iter_post_order().map(|n| n.value()).sum();
                std::hint::black_box(sum);
            })
        });

        group.bench_with_input(BenchmarkId::new("breadth_first", size), &tree, |b, tree| {
            b.iter(|| {
                let mut sum = 0u64;
                tree.breadth_first(|n| sum += n.value());
                std::hint::black_box(sum);
            })
        });

        group.bench_with_input(
            BenchmarkId::new("breadth_first_by_value", size),
            &tree,
            |b, tree| {
                b.iter(|| {
                    let mut sum = 0u64;
                    breadth_first_by_key(
                        Some(tree),
                        TreeNode::children,
                        |n: &TreeNode<u64>| *n.value(),
                        |n| sum += n.value(),
                    );
                    std::hint::black_box(sum);
                })
            },
        );
    }

    group.finish();
}

pub fn binary_in_order(c: &mut Criterion) {
    let mut group = c.benchmark_group("binary_in_order");

    for size in TREE_SIZES {
        group.throughput(Throughput::Elements(size));
        let tree = random_binary_tree(size);

        group.bench_with_input(BenchmarkId::new("in_order", size), &tree, |b, tree| {
            b.iter(|| {
                let mut sum = 0u64;
                tree.in_order(|n| sum = sum.wrapping_add(*n.value()));
                std::hint::black_box(sum);
            })
        });
    }

    group.finish();
}

criterion_group!(benches, tree_node_orders, binary_in_order);
criterion_main!(benches);
