use criterion::{criterion_group, Criterion};
use sigbench_cryptography::{hash, MESSAGE};
use std::hint::black_box;

fn benchmark_hash_message(c: &mut Criterion) {
    c.bench_function(
        &format!("{}/msg_len={}", module_path!(), MESSAGE.len()),
        |b| {
            b.iter(|| hash(black_box(MESSAGE)));
        },
    );
}

criterion_group!(benches, benchmark_hash_message);
