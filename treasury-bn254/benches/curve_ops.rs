use criterion::{criterion_group, criterion_main, Criterion};
use treasury_bn254::hash_to_curve::{hash_to_curve, DomainTag};
use treasury_bn254::{engine, G1Point, G2Point, Scalar};

use rand::rngs::OsRng;

fn bench_curve_ops(c: &mut Criterion) {
    let mut group = c.benchmark_group("curve_ops");

    let mut rng = OsRng;
    let scalar = Scalar::random(&mut rng);
    let dst = DomainTag::default();

    group.bench_function("g1_scalar_mul", |b| {
        b.iter(|| G1Point::GENERATOR * scalar)
    });

    group.bench_function("g2_scalar_mul", |b| {
        b.iter(|| G2Point::GENERATOR * scalar)
    });

    group.bench_function("hash_to_curve", |b| {
        b.iter(|| hash_to_curve(&dst, b"transfer"))
    });

    let engine = engine();
    let h = G1Point::GENERATOR * scalar;
    group.bench_function("pairing", |b| {
        b.iter(|| engine.pairing(&h, &G2Point::GENERATOR))
    });

    group.finish();
}

criterion_group!(benches, bench_curve_ops);
criterion_main!(benches);
