use ridge::{RidgeGenerator, RngSource, SceneStyle, render_scene, triangulate};
use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;

const WIDTH: u32 = 2436;
const HEIGHT: u32 = 1125;
const SEGMENTS: usize = 15;
const SEED: u64 = 2025;

fn bench_generate(c: &mut Criterion) {
    let generator = RidgeGenerator::new(SEGMENTS, WIDTH as f64, HEIGHT as f64).unwrap();
    c.bench_function("RidgeGenerator generate (15 segments)", |b| {
        let mut source = RngSource::seeded(SEED);
        b.iter(|| black_box(generator.generate(&mut source)))
    });
}

fn bench_generate_triangulate(c: &mut Criterion) {
    let generator = RidgeGenerator::new(SEGMENTS, WIDTH as f64, HEIGHT as f64).unwrap();
    c.bench_function("generate + triangulate (15 segments)", |b| {
        let mut source = RngSource::seeded(SEED);
        b.iter(|| {
            let ridge = generator.generate(&mut source);
            black_box(triangulate(&ridge, WIDTH as f64, HEIGHT as f64).unwrap())
        })
    });
}

fn bench_full_render(c: &mut Criterion) {
    let generator = RidgeGenerator::new(SEGMENTS, WIDTH as f64, HEIGHT as f64).unwrap();
    let style = SceneStyle::default();
    c.bench_function("generate + triangulate + render 2436x1125", |b| {
        let mut source = RngSource::seeded(SEED);
        b.iter(|| {
            let ridge = generator.generate(&mut source);
            let triangles = triangulate(&ridge, WIDTH as f64, HEIGHT as f64).unwrap();
            let canvas =
                render_scene(WIDTH, HEIGHT, &ridge, &triangles, &style, &mut source).unwrap();
            black_box(canvas.into_image())
        })
    });
}

criterion_group!(
    ridge_benchmarks,
    bench_generate,
    bench_generate_triangulate,
    bench_full_render
);
criterion_main!(ridge_benchmarks);
