// Copyright 2025 the Pinboard Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use kurbo::{Point, Size, Vec2};
use pinboard_view::{CanvasConfig, CanvasTransform, CanvasViewport, OriginMode};

fn fitted(mode: OriginMode) -> CanvasViewport {
    let mut view = CanvasViewport::new(CanvasConfig::default().with_origin_mode(mode));
    view.initialize(Size::new(1280.0, 800.0));
    view.pan_to(Vec2::new(-35.0, 120.0));
    view
}

fn grid(n: usize) -> Vec<Point> {
    (0..n)
        .map(|i| {
            let column = (i % 97) as f64;
            let row = (i / 97) as f64;
            Point::new(column * 13.0, row * 7.0)
        })
        .collect()
}

fn bench_conversion(c: &mut Criterion) {
    let mut group = c.benchmark_group("viewport/convert");
    let modes = [
        ("centered", OriginMode::Centered),
        ("top_left", OriginMode::TopLeft),
    ];
    for (name, mode) in modes {
        let view = fitted(mode);
        let points = grid(4_096);
        group.throughput(Throughput::Elements(points.len() as u64));

        group.bench_with_input(
            BenchmarkId::new("viewport_to_canvas", name),
            &points,
            |b, points| {
                b.iter(|| {
                    for &p in points {
                        black_box(view.viewport_to_canvas(black_box(p)));
                    }
                });
            },
        );

        group.bench_with_input(BenchmarkId::new("round_trip", name), &points, |b, points| {
            b.iter(|| {
                for &p in points {
                    let canvas = view.viewport_to_canvas(black_box(p));
                    black_box(view.canvas_to_viewport(canvas));
                }
            });
        });
    }
    group.finish();
}

fn bench_wheel_zoom(c: &mut Criterion) {
    let mut group = c.benchmark_group("viewport/wheel");
    let pointers = grid(256);
    group.throughput(Throughput::Elements(pointers.len() as u64));
    group.bench_function("alternating", |b| {
        let mut view = fitted(OriginMode::Centered);
        view.set_transform(CanvasTransform::from_scale(1.0));
        b.iter(|| {
            for (i, &p) in pointers.iter().enumerate() {
                let delta = if i % 2 == 0 { -1.0 } else { 1.0 };
                black_box(view.zoom_by_wheel(black_box(p), delta));
            }
        });
    });
    group.finish();
}

fn bench_affine(c: &mut Criterion) {
    let view = fitted(OriginMode::Centered);
    c.bench_function("viewport/to_affine", |b| {
        b.iter(|| black_box(black_box(&view).to_affine()));
    });
    c.bench_function("viewport/visible_canvas_rect", |b| {
        b.iter(|| black_box(black_box(&view).visible_canvas_rect()));
    });
}

criterion_group!(benches, bench_conversion, bench_wheel_zoom, bench_affine);
criterion_main!(benches);
