//! Frame cost benchmarks: one full tick into the recorder and into the
//! GPU line batch (CPU side only).
#![allow(missing_docs)]

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use polyorbit::animation::compute_scale;
use polyorbit::renderer::{CommandRecorder, LineBatch};
use polyorbit::{OrbitEngine, Options};

fn seeded_engine() -> OrbitEngine {
    let mut options = Options::default();
    options.scene.seed = Some(7);
    OrbitEngine::new(options)
}

fn pulse_benchmark(c: &mut Criterion) {
    let _ = c.bench_function("compute_scale", |b| {
        b.iter(|| black_box(compute_scale(black_box(1234.5))));
    });
}

fn recorded_frame_benchmark(c: &mut Criterion) {
    let mut engine = seeded_engine();
    let mut rec = CommandRecorder::new();
    let mut t = 0.0;
    let _ = c.bench_function("tick_recorded", |b| {
        b.iter(|| {
            rec.clear();
            t += 16.0;
            black_box(engine.tick(t, true, &mut rec))
        });
    });
}

fn line_batch_frame_benchmark(c: &mut Criterion) {
    let mut engine = seeded_engine();
    let mut batch = LineBatch::new(100);
    let mut t = 0.0;
    let _ = c.bench_function("tick_line_batch", |b| {
        b.iter(|| {
            batch.clear();
            t += 16.0;
            let _ = engine.tick(t, false, &mut batch);
            black_box(batch.vertices().len())
        });
    });
}

criterion_group!(
    benches,
    pulse_benchmark,
    recorded_frame_benchmark,
    line_batch_frame_benchmark
);
criterion_main!(benches);
