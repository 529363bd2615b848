// Copyright 2025 the Tastemap Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use tastemap_dataset::Entity;
use tastemap_hierarchy::DescendantSet;
use tastemap_pipeline::{filter_glow, filter_points};
use tastemap_selection::VisibleSet;

const CATEGORIES: usize = 200;

fn entities(len: usize) -> Vec<Entity> {
    (0..len)
        .map(|i| Entity {
            lon: -74.0 + (i % 1_000) as f64 * 1e-4,
            lat: 40.6 + (i / 1_000) as f64 * 1e-4,
            category: format!("Category {}", i % CATEGORIES),
            ..Entity::default()
        })
        .collect()
}

fn bench_filter_points(c: &mut Criterion) {
    let mut group = c.benchmark_group("pipeline/filter_points");

    // Roughly the size of the city dataset and a tenth of it.
    for len in [2_500usize, 25_000] {
        let entities = entities(len);
        let mut visible = VisibleSet::new();
        visible.extend_with((0..CATEGORIES / 2).map(|i| format!("Category {i}")));
        group.throughput(Throughput::Elements(len as u64));
        group.bench_with_input(BenchmarkId::from_parameter(len), &entities, |b, entities| {
            b.iter(|| black_box(filter_points(entities, &visible)));
        });
    }

    group.finish();
}

fn bench_filter_glow(c: &mut Criterion) {
    let mut group = c.benchmark_group("pipeline/filter_glow");

    for len in [2_500usize, 25_000] {
        let entities = entities(len);
        let branch = DescendantSet::detached("Category 7");
        group.throughput(Throughput::Elements(len as u64));
        group.bench_with_input(BenchmarkId::from_parameter(len), &entities, |b, entities| {
            b.iter(|| black_box(filter_glow(entities, &branch)));
        });
    }

    group.finish();
}

criterion_group!(benches, bench_filter_points, bench_filter_glow);
criterion_main!(benches);
