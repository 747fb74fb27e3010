// Copyright 2025 the Keyhint Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BatchSize, Criterion, Throughput, black_box, criterion_group, criterion_main};
use keyhint_engine::discover::discover;
use keyhint_engine::rank::rank;
use keyhint_engine::types::{
    ComputedStyle, ElementKind, ElementTraits, HintTarget, Landmark, Modifiers,
};
use kurbo::{Rect, Size};

#[derive(Clone)]
struct Target {
    rect: Rect,
    kind: ElementKind,
    landmark: Option<Landmark>,
}

impl HintTarget for Target {
    fn traits(&self) -> ElementTraits {
        ElementTraits {
            kind: self.kind,
            ..Default::default()
        }
    }
    fn bounding_rect(&self) -> Rect {
        self.rect
    }
    fn has_layout_parent(&self) -> bool {
        true
    }
    fn computed_style(&self) -> ComputedStyle {
        ComputedStyle::default()
    }
    fn landmark(&self) -> Option<Landmark> {
        self.landmark
    }
    fn click(&self) {}
    fn click_with(&self, _modifiers: Modifiers) {}
    fn focus(&self) {}
}

#[derive(Clone)]
struct Rng(u64);

impl Rng {
    fn new(seed: u64) -> Self {
        Self(seed)
    }
    fn next_u64(&mut self) -> u64 {
        let mut x = self.0;
        x ^= x << 13;
        x ^= x >> 7;
        x ^= x << 17;
        self.0 = x;
        x
    }
    fn next_f64(&mut self) -> f64 {
        let v = self.next_u64() >> 11;
        (v as f64) / ((1u64 << 53) as f64)
    }
}

/// A page-like mix: mostly links, some buttons and plain `div`s, a few in landmarks,
/// scattered over a viewport that extends past the fold.
fn gen_page(count: usize) -> Vec<Target> {
    let mut rng = Rng::new(0xCAFE_F00D_DEAD_BEEF);
    let landmarks = [
        Some(Landmark::Navigation),
        Some(Landmark::Header),
        Some(Landmark::Aside),
        Some(Landmark::Footer),
    ];
    (0..count)
        .map(|i| {
            let x = rng.next_f64() * 1200.0;
            let y = rng.next_f64() * 2400.0;
            let w = 20.0 + rng.next_f64() * 300.0;
            let h = 12.0 + rng.next_f64() * 40.0;
            let kind = match i % 10 {
                0 => ElementKind::Button,
                1 => ElementKind::Other,
                _ => ElementKind::Anchor,
            };
            let landmark = if i % 7 == 0 {
                landmarks[(i / 7) % landmarks.len()]
            } else {
                None
            };
            Target {
                rect: Rect::new(x, y, x + w, y + h),
                kind,
                landmark,
            }
        })
        .collect()
}

fn bench_rank(c: &mut Criterion) {
    let viewport = Size::new(1280.0, 800.0);
    let mut group = c.benchmark_group("rank");
    for &n in &[100usize, 1000, 5000] {
        let page = gen_page(n);
        group.throughput(Throughput::Elements(n as u64));
        group.bench_function(format!("rank_n{}", n), |b| {
            b.iter_batched(
                || page.clone(),
                |v| black_box(rank(v, viewport)),
                BatchSize::SmallInput,
            );
        });
        group.bench_function(format!("discover_rank_n{}", n), |b| {
            b.iter_batched(
                || page.clone(),
                |v| black_box(rank(discover(v), viewport)),
                BatchSize::SmallInput,
            );
        });
    }
    group.finish();
}

criterion_group!(benches, bench_rank);
criterion_main!(benches);
