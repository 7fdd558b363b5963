// Copyright 2025 the Pinboard Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BatchSize, Criterion, Throughput, black_box, criterion_group, criterion_main};
use kurbo::{Point, Rect, Vec2};
use pinboard_gesture::{CanvasController, MouseButton, PointerInput};

fn board() -> CanvasController {
    let mut board = CanvasController::default();
    board.initialize(Rect::new(0.0, 64.0, 1280.0, 864.0));
    board
}

fn bench_pan_updates(c: &mut Criterion) {
    let mut group = c.benchmark_group("gesture/pan");
    let moves: Vec<PointerInput> = (0..512)
        .map(|i| {
            let p = Point::new(640.0, 400.0) + Vec2::new(f64::from(i) * 0.5, -f64::from(i) * 0.25);
            PointerInput::mouse(p, MouseButton::Primary)
        })
        .collect();
    group.throughput(Throughput::Elements(moves.len() as u64));

    group.bench_function("mouse_drag", |b| {
        b.iter_batched(
            board,
            |mut board| {
                board.pointer_down(&moves[0], false);
                for m in &moves[1..] {
                    black_box(board.pointer_move(m));
                }
                black_box(board.pointer_up());
            },
            BatchSize::SmallInput,
        );
    });

    group.bench_function("touch_drag", |b| {
        let touches: Vec<PointerInput> = moves
            .iter()
            .filter_map(PointerInput::primary_position)
            .map(|p| PointerInput::touch([p]))
            .collect();
        b.iter_batched(
            board,
            |mut board| {
                board.pointer_down(&touches[0], false);
                for t in &touches[1..] {
                    black_box(board.pointer_move(t));
                }
                black_box(board.pointer_up());
            },
            BatchSize::SmallInput,
        );
    });
    group.finish();
}

fn bench_item_drag(c: &mut Criterion) {
    let board = board();
    c.bench_function("gesture/item_drag", |b| {
        b.iter(|| {
            let mut drag =
                board.begin_item_drag(7_u32, Point::new(10.0, 10.0), Point::new(600.0, 400.0));
            for i in 0..64 {
                let client = Point::new(600.0 + f64::from(i), 400.0 + f64::from(i));
                black_box(board.drag_item(&mut drag, client));
            }
            black_box(drag.finish())
        });
    });
}

criterion_group!(benches, bench_pan_updates, bench_item_drag);
criterion_main!(benches);
