//! Benchmark tests for switcher widget operations.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use switcher_core::{Color, Event, Point, Rect, RecordingCanvas, Widget};
use switcher_widgets::{slot_tints, HoverTrack, Slot, SwitcherView};

fn laid_out_switcher() -> SwitcherView {
    let mut view = SwitcherView::new(Slot::new("List").icon("ic_list"), Slot::new("Map"));
    view.layout(Rect::new(0.0, 0.0, 200.0, 40.0));
    view
}

fn bench_switcher_paint(c: &mut Criterion) {
    let view = laid_out_switcher();

    c.bench_function("switcher_paint", |b| {
        b.iter(|| {
            let mut canvas = RecordingCanvas::new();
            view.paint(&mut canvas);
            black_box(canvas.command_count())
        })
    });
}

fn bench_drag_gesture(c: &mut Criterion) {
    c.bench_function("hover_track_drag", |b| {
        b.iter(|| {
            let mut track = HoverTrack::new();
            track.layout(Rect::new(0.0, 0.0, 200.0, 40.0));
            track.handle_event(&Event::touch_down(Point::new(40.0, 20.0)));
            for step in 1..=20u8 {
                let x = 40.0 + f32::from(step) * 4.0;
                track.handle_event(&Event::touch_move(Point::new(x, 20.0)));
            }
            black_box(track.handle_event(&Event::touch_up(Point::new(120.0, 20.0))))
        })
    });
}

fn bench_snap_animation(c: &mut Criterion) {
    c.bench_function("switcher_snap_animation", |b| {
        b.iter(|| {
            let mut view = laid_out_switcher();
            view.select_right();
            for _ in 0..12 {
                view.tick(black_box(1.0 / 60.0));
            }
            view.ratio()
        })
    });
}

fn bench_slot_tints(c: &mut Criterion) {
    c.bench_function("slot_tints", |b| {
        b.iter(|| slot_tints(Color::WHITE, Color::BLACK, black_box(0.37)))
    });
}

criterion_group!(
    benches,
    bench_switcher_paint,
    bench_drag_gesture,
    bench_snap_animation,
    bench_slot_tints,
);
criterion_main!(benches);
