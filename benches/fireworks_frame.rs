use criterion::{criterion_group, criterion_main, Criterion};
use std::hint::black_box;

use pink_fireworks::physic_engine::{PhysicConfig, PhysicEngine, PhysicEngineFireworks};
use pink_fireworks::renderer_engine::{Renderer, RendererConfig, RendererEngine};

const WIDTH: i32 = 1280;
const HEIGHT: i32 = 720;

/// Scène chargée : une dizaine de gerbes en vol et quelques fusées.
fn busy_scene() -> PhysicEngineFireworks {
    let mut physic =
        PhysicEngineFireworks::with_seed(&PhysicConfig::default(), WIDTH as f32, HEIGHT as f32, 42);
    for i in 0..10 {
        physic.explode(100.0 + i as f32 * 110.0, 200.0, 330.0);
        physic.launch_rocket();
    }
    for _ in 0..20 {
        physic.advance();
    }
    physic
}

fn physic_benchmark(c: &mut Criterion) {
    c.bench_function("physic_explode", |b| {
        let mut physic =
            PhysicEngineFireworks::with_seed(&PhysicConfig::default(), WIDTH as f32, HEIGHT as f32, 1);
        b.iter(|| {
            physic.explode(black_box(640.0), black_box(200.0), black_box(330.0));
            physic.close();
        })
    });

    c.bench_function("physic_advance_busy", |b| {
        b.iter_batched(
            busy_scene,
            |mut physic| {
                black_box(physic.advance().expired_particles);
            },
            criterion::BatchSize::LargeInput,
        )
    });
}

fn render_benchmark(c: &mut Criterion) {
    let physic = busy_scene();

    c.bench_function("render_frame_720p", |b| {
        let mut renderer =
            Renderer::headless(WIDTH, HEIGHT, &RendererConfig::default()).with_twinkle_seed(1);
        let mut now_ms = 0;
        b.iter(|| {
            now_ms += 16;
            black_box(renderer.render_frame(&physic, &[], now_ms));
        })
    });
}

criterion_group!(benches, physic_benchmark, render_benchmark);
criterion_main!(benches);
