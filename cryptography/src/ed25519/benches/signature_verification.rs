use criterion::{criterion_group, Criterion};
use rand::rngs::OsRng;
use sigbench_cryptography::{
    ed25519::{Ed25519, Ed25519Dalek},
    Case, Scheme, MESSAGE,
};

fn benchmark_case<S: Scheme>(c: &mut Criterion) {
    let case = Case::<S>::provision(&mut OsRng, MESSAGE).unwrap();
    c.bench_function(&format!("{}/{}", module_path!(), S::NAME), |b| {
        b.iter(|| assert!(case.verify()));
    });
}

fn benchmark_signature_verification(c: &mut Criterion) {
    benchmark_case::<Ed25519>(c);
    benchmark_case::<Ed25519Dalek>(c);
}

criterion_group! {
    name = benches;
    config = Criterion::default().sample_size(50);
    targets = benchmark_signature_verification
}
