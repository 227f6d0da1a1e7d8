use criterion::{criterion_group, criterion_main, Criterion};

use canvasgrid::{Color, GridCanvas, Pixmap};

// Benchmarks exercise the two hot public paths: full redraw and clear.
fn bench_draw_full_grid(c: &mut Criterion) {
    let mut canvas = GridCanvas::new(Pixmap::new(0, 0), 8, 64, 64).expect("failed to create canvas");
    let color = Color::rgb(0x2a, 0x9d, 0x8f);
    for x in 0..64 {
        for y in 0..64 {
            canvas.set_square_color([x, y], Some(color)).expect("in bounds");
        }
    }

    c.bench_function("draw_64x64_full", |b| {
        b.iter(|| {
            canvas.draw();
        })
    });
}

fn bench_clear(c: &mut Criterion) {
    let mut canvas = GridCanvas::new(Pixmap::new(0, 0), 8, 64, 64).expect("failed to create canvas");

    c.bench_function("clear_64x64", |b| {
        b.iter(|| {
            canvas.clear();
        })
    });
}

criterion_group!(benches, bench_draw_full_grid, bench_clear);
criterion_main!(benches);
