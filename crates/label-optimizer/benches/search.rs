//! 配置搜尋效能測試：候選印刷機與刀模數量遞增

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use label_core::{DieSpec, EngineConfig, MaterialSpec, PressSpec};
use label_optimizer::{ConfigurationOptimizer, Objective, OptimizationRequest};
use rust_decimal::Decimal;

fn request(n: usize) -> OptimizationRequest {
    let presses = (0..n)
        .map(|i| {
            PressSpec::new(
                format!("P{}", i),
                Decimal::from(80 + 10 * i as i64),
                Decimal::from(250 + 20 * i as i64),
            )
            .with_hourly_rates(
                Decimal::from(60),
                Decimal::from(45),
                Decimal::from(5),
                Decimal::from(25),
            )
        })
        .collect();
    let dies = (0..n)
        .map(|i| {
            DieSpec::new(format!("D{}", i), Decimal::from(15 + i as i64))
                .with_max_tracks(2 + (i % 4) as u32)
        })
        .collect();
    let material = MaterialSpec::new("VELLUM".to_string(), Decimal::from(330), Decimal::new(85, 2));

    OptimizationRequest::new(
        Decimal::from(50),
        Decimal::from(30),
        100_000,
        material,
        &EngineConfig::default(),
    )
    .with_presses(presses)
    .with_dies(dies)
    .with_objective(Objective::Cost)
    .with_max_tracks_preference(6)
}

fn bench_optimize(c: &mut Criterion) {
    let mut group = c.benchmark_group("configuration_optimizer");
    let optimizer = ConfigurationOptimizer::new(EngineConfig::default());

    for &n in &[2, 5, 10] {
        let request = request(n);
        group.bench_with_input(BenchmarkId::new("optimize", n), &request, |b, r| {
            b.iter(|| black_box(optimizer.optimize(black_box(r))))
        });
    }
    group.finish();
}

fn bench_combinations(c: &mut Criterion) {
    let request = request(10);
    c.bench_function("enumerate_combinations", |b| {
        b.iter(|| ConfigurationOptimizer::combinations(black_box(&request)))
    });
}

criterion_group!(benches, bench_optimize, bench_combinations);
criterion_main!(benches);
