use criterion::{criterion_group, Criterion};
use num_bigint::BigUint;
use rand::{rngs::StdRng, RngCore, SeedableRng};
use sigbench_cryptography::compress::encode;
use std::hint::black_box;

fn benchmark_encode(c: &mut Criterion) {
    let mut sampler = StdRng::seed_from_u64(0);
    for bit_size in [224, 256, 384, 528] {
        let mut scalar = vec![0u8; bit_size / 8];
        sampler.fill_bytes(&mut scalar);
        let r = BigUint::from_bytes_be(&scalar);
        sampler.fill_bytes(&mut scalar);
        let s = BigUint::from_bytes_be(&scalar);
        c.bench_function(&format!("{}/bits={}", module_path!(), bit_size), |b| {
            b.iter(|| encode(black_box(&r), black_box(&s), bit_size).unwrap());
        });
    }
}

criterion_group!(benches, benchmark_encode);
