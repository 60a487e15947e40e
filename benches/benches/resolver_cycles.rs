// Copyright 2026 the Backdrop Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BatchSize, Criterion, Throughput, black_box, criterion_group, criterion_main};

use backdrop_resolver::resolver::BodyResolver;
use backdrop_resolver::types::{CycleFlags, RenderRequest, ScreenDescriptor};

const CYCLES: usize = 1_000;

fn render(data: &u32) -> String {
    format!("page-{data}")
}

fn wrap(content: String, _data: &u32) -> String {
    format!("<layout>{content}</layout>")
}

fn request<'a>(data: &'a u32, path: &'a str, flags: CycleFlags) -> RenderRequest<'a, u32, String> {
    RenderRequest {
        screen: ScreenDescriptor::with_layout(render, wrap),
        page_data: data,
        current_path: path,
        flags,
    }
}

// Cache-hit path: every cycle re-presents the screen already cached as
// main, so decide does no rendering at all.
fn bench_steady_same_path(c: &mut Criterion) {
    let mut group = c.benchmark_group("resolver_steady_same_path");
    group.throughput(Throughput::Elements(CYCLES as u64));
    group.bench_function("cycles", |b| {
        b.iter_batched(
            BodyResolver::<String>::new,
            |mut resolver| {
                let data = 1_u32;
                for _ in 0..CYCLES {
                    let out = resolver.decide(&request(&data, "/home", CycleFlags::empty()));
                    black_box(out.slave_active);
                    resolver.commit();
                }
                resolver
            },
            BatchSize::SmallInput,
        );
    });
    group.finish();
}

// Dialog churn: alternate between the cached main and an overlay cycle,
// re-rendering the slave each time it is shown.
fn bench_overlay_toggle(c: &mut Criterion) {
    let mut group = c.benchmark_group("resolver_overlay_toggle");
    group.throughput(Throughput::Elements(CYCLES as u64));
    group.bench_function("cycles", |b| {
        b.iter_batched(
            BodyResolver::<String>::new,
            |mut resolver| {
                let home = 0_u32;
                let detail = 1_u32;
                for i in 0..CYCLES {
                    let out = if i % 2 == 0 {
                        resolver.decide(&request(&home, "/", CycleFlags::empty()))
                    } else {
                        resolver.decide(&request(&detail, "/detail", CycleFlags::MAY_BE_SLAVE))
                    };
                    black_box(out.slave_active);
                    resolver.commit();
                }
                resolver
            },
            BatchSize::SmallInput,
        );
    });
    group.finish();
}

// Worst case: every cycle lands on a new path and rebuilds the main body.
fn bench_navigation_sweep(c: &mut Criterion) {
    let paths: Vec<String> = (0..CYCLES).map(|i| format!("/pages/{i}")).collect();
    let mut group = c.benchmark_group("resolver_navigation_sweep");
    group.throughput(Throughput::Elements(CYCLES as u64));
    group.bench_function("cycles", |b| {
        b.iter_batched(
            BodyResolver::<String>::new,
            |mut resolver| {
                for (i, path) in paths.iter().enumerate() {
                    let data = i as u32;
                    let out = resolver.decide(&request(&data, path, CycleFlags::empty()));
                    black_box(out.main.is_some());
                    resolver.commit();
                }
                resolver
            },
            BatchSize::SmallInput,
        );
    });
    group.finish();
}

criterion_group!(
    benches,
    bench_steady_same_path,
    bench_overlay_toggle,
    bench_navigation_sweep
);
criterion_main!(benches);
