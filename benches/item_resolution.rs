// SPDX-License-Identifier: MPL-2.0
use appshots::gallery::{build_items, optimized_name, OptimizedAssetIndex};
use appshots::media::sort_natural;
use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use std::hint::black_box;

/// Listing shaped like a real export: numbered shots, a few hidden and
/// non-image files, deliberately out of order.
fn listing(count: usize) -> Vec<String> {
    let mut names: Vec<String> = (1..=count)
        .rev()
        .map(|n| format!("Screen Shot {n:03}.png"))
        .collect();
    names.push(".DS_Store".to_string());
    names.push("README.md".to_string());
    names
}

fn item_resolution_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("item_resolution");

    for count in [50usize, 500, 5_000] {
        let names = listing(count);
        let optimized = OptimizedAssetIndex::from_names(
            names
                .iter()
                .step_by(2)
                .map(|name| optimized_name("tvOS", name)),
        );

        group.bench_with_input(BenchmarkId::new("build_items", count), &names, |b, names| {
            b.iter(|| black_box(build_items("tvOS", "tvOS", names, &optimized)));
        });

        group.bench_with_input(BenchmarkId::new("sort_natural", count), &names, |b, names| {
            b.iter(|| black_box(sort_natural(names)));
        });
    }

    group.finish();
}

criterion_group!(benches, item_resolution_benchmark);
criterion_main!(benches);
