//! Benchmarks for the badge render path.

use badge_common::{RenderRequest, ValueRange};
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use renderer::{BadgeRenderer, Palette};

fn bench_render(c: &mut Criterion) {
    let renderer = BadgeRenderer::new(Palette::default()).unwrap();

    let mut group = c.benchmark_group("badge");

    let percentage = RenderRequest::new(76.0).unwrap();
    group.bench_function("render_percentage", |b| {
        b.iter(|| renderer.render(black_box(&percentage)).unwrap())
    });

    let range = RenderRequest::new(1234.5)
        .unwrap()
        .with_range(ValueRange::new(0.0, 2000.0).unwrap())
        .with_label("coverage & more")
        .unwrap();
    group.bench_function("render_range_labeled", |b| {
        b.iter(|| renderer.render(black_box(&range)).unwrap())
    });

    group.bench_function("compile_template", |b| {
        b.iter(|| BadgeRenderer::new(black_box(Palette::default())).unwrap())
    });

    group.finish();
}

criterion_group!(benches, bench_render);
criterion_main!(benches);
