//! Criterion micro-benchmarks for grid construction, access, and rendering.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use jag_bench::{large_grid, ranked_grid, small_grid};
use jag_grid::render;

fn bench_construct(c: &mut Criterion) {
    c.bench_function("construct_16x16", |b| {
        b.iter(|| jag_grid::JaggedGrid::new(black_box(16), black_box(16)).unwrap())
    });
    c.bench_function("construct_512x512", |b| {
        b.iter(|| jag_grid::JaggedGrid::new(black_box(512), black_box(512)).unwrap())
    });
}

fn bench_set_sweep(c: &mut Criterion) {
    c.bench_function("set_sweep_512x512", |b| {
        let mut grid = large_grid();
        b.iter(|| {
            for r in 0..grid.rows() {
                for col in 0..grid.cols() {
                    grid.set(r, col, black_box(1.0)).unwrap();
                }
            }
        })
    });
}

fn bench_get_sweep(c: &mut Criterion) {
    c.bench_function("get_sweep_512x512", |b| {
        let grid = large_grid();
        b.iter(|| {
            let mut total = 0.0;
            for r in 0..grid.rows() {
                for col in 0..grid.cols() {
                    total += grid.get(r, col).unwrap();
                }
            }
            black_box(total)
        })
    });
    c.bench_function("row_iter_sweep_512x512", |b| {
        let grid = large_grid();
        b.iter(|| {
            let total: f64 = grid.iter_rows().flatten().sum();
            black_box(total)
        })
    });
}

fn bench_render(c: &mut Criterion) {
    c.bench_function("render_16x16", |b| {
        let grid = small_grid();
        b.iter(|| black_box(render::to_table_string(&grid)))
    });
    c.bench_function("render_100x100", |b| {
        let grid = ranked_grid(100, 100);
        b.iter(|| black_box(render::to_table_string(&grid)))
    });
}

criterion_group!(
    benches,
    bench_construct,
    bench_set_sweep,
    bench_get_sweep,
    bench_render
);
criterion_main!(benches);
