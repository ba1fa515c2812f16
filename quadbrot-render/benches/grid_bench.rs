use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};

use quadbrot_core::ViewState;
use quadbrot_render::{colorize, compute_grid, compute_grid_with, Banded, ComputeOptions, Mode};

fn bench_modes(c: &mut Criterion) {
    let view = ViewState::default();

    c.bench_function("sequential_640x480", |b| {
        b.iter(|| compute_grid(&view, 640, 480, Mode::Sequential, 256));
    });

    c.bench_function("parallel_640x480", |b| {
        b.iter(|| compute_grid(&view, 640, 480, Mode::Parallel, 256));
    });
}

fn bench_block_size(c: &mut Criterion) {
    let view = ViewState::default();
    let mut group = c.benchmark_group("min_block_size_512x512");
    for size in [8u32, 16, 32, 64, 128] {
        let opts = ComputeOptions::new(Mode::Parallel).with_min_block_size(size);
        group.bench_with_input(BenchmarkId::from_parameter(size), &opts, |b, opts| {
            b.iter(|| compute_grid_with(&view, 512, 512, 1000, opts));
        });
    }
    group.finish();
}

fn bench_colorize(c: &mut Criterion) {
    let grid = compute_grid(&ViewState::default(), 640, 480, Mode::Parallel, 256)
        .expect("default view is valid");
    let map = Banded::default();

    c.bench_function("colorize_640x480", |b| {
        b.iter(|| colorize(&grid, &map));
    });
}

criterion_group!(benches, bench_modes, bench_block_size, bench_colorize);
criterion_main!(benches);
