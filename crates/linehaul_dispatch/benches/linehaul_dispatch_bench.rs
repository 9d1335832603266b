use std::hint::black_box;

use criterion::{Criterion, criterion_group, criterion_main};
use jiff::civil::date;
use linehaul_dispatch::scenario::generator;
use linehaul_dispatch::solver::dispatch_config::DispatchConfig;
use linehaul_dispatch::solver::engine;

fn plan_day_benchmark(c: &mut Criterion) {
    let config = DispatchConfig::default();
    let day = date(2025, 8, 25);

    let demo = generator::sample_scenario();
    c.bench_function("plan day (demo board)", |b| {
        b.iter(|| {
            let mut rng = generator::engine_rng(generator::DEFAULT_SEED, day);
            black_box(engine::plan_day(black_box(&demo), &config, day, &mut rng))
        })
    });

    let busy = generator::daily_problem(day, 60, generator::DEFAULT_SEED);
    c.bench_function("plan day (60-load board)", |b| {
        b.iter(|| {
            let mut rng = generator::engine_rng(generator::DEFAULT_SEED, day);
            black_box(engine::plan_day(black_box(&busy), &config, day, &mut rng))
        })
    });
}

fn daily_board_benchmark(c: &mut Criterion) {
    let day = date(2025, 8, 25);

    c.bench_function("generate daily board", |b| {
        b.iter(|| {
            black_box(generator::daily_problem(
                day,
                60,
                generator::DEFAULT_SEED,
            ))
        })
    });
}

criterion_group!(benches, plan_day_benchmark, daily_board_benchmark);
criterion_main!(benches);
