// Copyright 2025 the Keyhint Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{Criterion, Throughput, black_box, criterion_group, criterion_main};
use keyhint_label::{Alphabet, generate_label, label_len};

fn bench_label_len(c: &mut Criterion) {
    let mut group = c.benchmark_group("label_len");
    for &total in &[20usize, 400, 8001, usize::MAX] {
        group.bench_function(format!("total{}", total), |b| {
            b.iter(|| label_len(black_box(total)));
        });
    }
    group.finish();
}

fn bench_generate(c: &mut Criterion) {
    let mut group = c.benchmark_group("generate_label");
    for &total in &[25usize, 400, 2000] {
        group.throughput(Throughput::Elements(total as u64));
        group.bench_function(format!("each_n{}", total), |b| {
            b.iter(|| {
                for i in 0..total {
                    black_box(generate_label(i, total));
                }
            });
        });
        group.bench_function(format!("iter_n{}", total), |b| {
            b.iter(|| {
                for label in Alphabet::DEFAULT.labels(black_box(total)) {
                    black_box(label);
                }
            });
        });
    }
    group.finish();
}

criterion_group!(benches, bench_label_len, bench_generate);
criterion_main!(benches);
