use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use voxel::pipeline::transform_voxel;
use voxel::prelude::*;
use voxel::render::draw_line;

const BUFFER_WIDTH: u32 = 640;
const BUFFER_HEIGHT: u32 = 480;

fn posed_voxel(scale: f64) -> Voxel {
    Voxel::new(
        scale as i32,
        Transformation::new(
            Vec4::direction(scale, scale, scale),
            Vec4::direction(20.0, 35.0, 10.0),
            Vec4::direction(320.0, 240.0, 0.0),
        ),
    )
}

fn benchmark_line(c: &mut Criterion) {
    let mut group = c.benchmark_group("line");
    let mut renderer = Renderer::new(BUFFER_WIDTH, BUFFER_HEIGHT);

    for (name, end) in [
        ("short", Vec4::point(20.0, 10.0, 0.0)),
        ("medium", Vec4::point(200.0, 150.0, 0.0)),
        ("long", Vec4::point(639.0, 479.0, 0.0)),
    ] {
        group.bench_with_input(BenchmarkId::new("step", name), &end, |b, &end| {
            b.iter(|| {
                draw_line(
                    &mut renderer,
                    black_box(Vec4::point(0.0, 0.0, 0.0)),
                    black_box(end),
                    0xFFFFFFFF,
                )
            })
        });
    }

    group.finish();
}

fn benchmark_pipeline(c: &mut Criterion) {
    let mut voxel = posed_voxel(50.0);
    c.bench_function("transform_voxel", |b| {
        b.iter(|| {
            transform_voxel(black_box(&mut voxel));
        })
    });
}

fn benchmark_frame(c: &mut Criterion) {
    let mut group = c.benchmark_group("frame");

    for count in [1usize, 3, 30] {
        let config = Config {
            voxel_count: count,
            ..Config::default()
        };
        let mut renderer = Renderer::new(BUFFER_WIDTH, BUFFER_HEIGHT);
        group.bench_with_input(BenchmarkId::new("dirty", count), &count, |b, _| {
            let mut scene = Scene::from_config(&config).expect("valid config");
            b.iter(|| {
                for index in 0..scene.voxel_count() {
                    scene.voxel_mut(index).expect("in range").mark_dirty();
                }
                scene.render(&mut renderer).expect("headless present");
            })
        });
    }

    group.finish();
}

criterion_group!(benches, benchmark_line, benchmark_pipeline, benchmark_frame);
criterion_main!(benches);
