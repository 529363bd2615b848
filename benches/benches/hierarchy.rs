// Copyright 2025 the Tastemap Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use tastemap_hierarchy::{CategoryNode, CategoryTree};
use tastemap_selection::SelectionState;

/// `groups` top-level groups, each with `fanout` children of `fanout` leaves.
fn synthetic_tree(groups: usize, fanout: usize) -> CategoryTree {
    let roots = (0..groups).map(|g| {
        let mut group = CategoryNode::new(format!("Group {g}"), 0, [128, 128, 128]);
        for c in 0..fanout {
            let mut child = CategoryNode::new(format!("Group {g} / {c}"), 0, [128, 128, 128]);
            for l in 0..fanout {
                let leaf = CategoryNode::new(format!("Group {g} / {c} / {l}"), 0, [128, 128, 128]);
                child.push_child(leaf).expect("unique leaf names");
            }
            group.push_child(child).expect("unique child names");
        }
        group
    });
    CategoryTree::from_roots(roots).expect("unique group names")
}

fn bench_descendant_names(c: &mut Criterion) {
    let mut group = c.benchmark_group("hierarchy/descendant_names");

    // The last group is the worst case for the depth-first lookup.
    for fanout in [4usize, 8, 16] {
        let tree = synthetic_tree(20, fanout);
        let target = String::from("Group 19");
        group.throughput(Throughput::Elements((1 + fanout + fanout * fanout) as u64));
        group.bench_with_input(BenchmarkId::from_parameter(fanout), &tree, |b, tree| {
            b.iter(|| black_box(tree.descendant_names(black_box(&target))));
        });
    }

    group.finish();
}

fn bench_status_of_all_rows(c: &mut Criterion) {
    let mut group = c.benchmark_group("selection/status_of_all_rows");

    // One legend rebuild computes the status of every node.
    for fanout in [4usize, 8] {
        let tree = synthetic_tree(20, fanout);
        let mut selection = SelectionState::new();
        selection.select_all(&tree);
        selection.toggle_category_and_descendants(&tree, "Group 3 / 1", false);
        let names: Vec<String> = tree.iter().map(|(_, n)| n.name().to_owned()).collect();
        group.throughput(Throughput::Elements(names.len() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(fanout), &names, |b, names| {
            b.iter(|| {
                for name in names {
                    black_box(selection.status_of(&tree, name));
                }
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_descendant_names, bench_status_of_all_rows);
criterion_main!(benches);
