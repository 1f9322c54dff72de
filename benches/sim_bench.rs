use circle_physics::utils;
use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};

fn bench_step(c: &mut Criterion) {
    let mut group = c.benchmark_group("engine_step");

    for n in [16, 64, 256] {
        let mut engine = utils::scatter(n, 800.0, 600.0, 42).expect("valid scene");
        // Warmup
        engine.step(0.016);

        group.throughput(Throughput::Elements(engine.len() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(n), &n, |b, _| {
            b.iter(|| engine.step(0.016));
        });
    }

    group.finish();
}

fn bench_head_on(c: &mut Criterion) {
    c.bench_function("head_on_pair_until_contact", |b| {
        b.iter(|| {
            let mut engine = utils::head_on_pair(50.0).expect("valid scene");
            while engine.step(0.016).contacts == 0 {}
        });
    });
}

criterion_group!(benches, bench_step, bench_head_on);
criterion_main!(benches);
