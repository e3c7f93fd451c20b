// Assessment throughput benchmark
// Run with: cargo bench --bench analyze

use compost_assessor::{CompostEngine, ParameterKey, ParameterSet};
use criterion::{black_box, criterion_group, criterion_main, Criterion};

fn sample(gi: f64, cn: f64) -> ParameterSet {
    ParameterSet::try_from_values([
        (ParameterKey::Temperature, 34.0),
        (ParameterKey::Moisture, 52.0),
        (ParameterKey::Ph, 7.2),
        (ParameterKey::CnRatio, cn),
        (ParameterKey::Ammonia, 180.0),
        (ParameterKey::Nitrate, 350.0),
        (ParameterKey::TotalNitrogen, 1.4),
        (ParameterKey::TotalOrganicCarbon, 29.0),
        (ParameterKey::ElectricalConductivity, 2.8),
        (ParameterKey::OrganicMatter, 48.0),
        (ParameterKey::TValue, 0.7),
        (ParameterKey::GerminationIndex, gi),
    ])
    .expect("benchmark sample is valid")
}

fn bench_analyze(c: &mut Criterion) {
    let engine = CompostEngine::with_reference_data();
    let single = sample(82.0, 21.0);

    c.bench_function("analyze_single", |b| {
        b.iter(|| engine.analyze_parameters(black_box(&single)))
    });

    let batch: Vec<ParameterSet> = (0..1_000)
        .map(|i| sample(30.0 + (i % 70) as f64, 12.0 + (i % 25) as f64))
        .collect();

    c.bench_function("analyze_batch_1000", |b| {
        b.iter(|| engine.analyze_batch(black_box(&batch)))
    });
}

criterion_group!(benches, bench_analyze);
criterion_main!(benches);
