use criterion::{black_box, criterion_group, criterion_main, Criterion};
use pixel_grid::field::FieldEvaluator;
use pixel_grid::grid::GridGeometry;
use pixel_grid::raster::{hsv_to_rgb, render_field};
use pixel_grid::types::PixelBuffer;

/// Benchmark: one full frame at a desktop resolution. This is the cost that
/// has to stay low for the effect to remain interactive at native size.
fn bench_full_frame(c: &mut Criterion) {
    let grid = GridGeometry::new(1920, 1080, 2).unwrap();
    let mut field = FieldEvaluator::new(&grid);
    let mut fb = PixelBuffer::new(1920, 1080);

    let mut t: u32 = 0;
    c.bench_function("render_field_1080p", |b| {
        b.iter(|| {
            // Wander the pointer so successive iterations don't reuse the
            // exact same distance tables.
            t = t.wrapping_add(17);
            let mx = (t % 1920) as f32;
            let my = (t % 1080) as f32;
            field.update(&grid, black_box(mx), black_box(my));
            render_field(&mut fb, &grid, &field);
            black_box(fb.bytes[0]);
        })
    });
}

/// Benchmark: field table refresh alone, the O(rows + cols) part of a frame.
fn bench_field_update(c: &mut Criterion) {
    let grid = GridGeometry::new(1920, 1080, 2).unwrap();
    let mut field = FieldEvaluator::new(&grid);

    c.bench_function("field_update_1080p", |b| {
        b.iter(|| {
            field.update(&grid, black_box(733.0), black_box(411.0));
            black_box(field.value(&grid, 0, 0));
        })
    });
}

/// Benchmark: a single HSV conversion, the inner-loop cost per cell.
fn bench_hsv_to_rgb(c: &mut Criterion) {
    c.bench_function("hsv_to_rgb", |b| {
        b.iter(|| black_box(hsv_to_rgb(black_box(1234.5), 1.0, 1.0)))
    });
}

criterion_group!(benches, bench_full_frame, bench_field_update, bench_hsv_to_rgb);
criterion_main!(benches);
