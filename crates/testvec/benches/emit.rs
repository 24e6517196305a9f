use criterion::*;
use rand::prelude::*;
use testvec::{
    asm,
    kernels::{Ivec8mul, Vtmac},
    number,
};

/// Generates a vec of 1 million random i8s.
fn gen_i8s() -> Vec<i8> {
    testvec::random_data::random_full_range_i8(1_000_000, &mut rand_chacha::ChaCha8Rng::seed_from_u64(42))
}

fn pack_words(c: &mut Criterion) {
    let bytes = number::to_le_bytes(&gen_i8s());

    let mut group = c.benchmark_group("PackWords");
    group.throughput(Throughput::Bytes(bytes.len() as u64));
    group.bench_function("words", |b| b.iter_with_large_drop(|| black_box(asm::words(&bytes))));
    group.finish();
}

fn render(c: &mut Criterion) {
    let mut rng = rand_chacha::ChaCha8Rng::seed_from_u64(42);
    let ivec = Ivec8mul::generate(1 << 16, &mut rng).unwrap().to_asm();
    let vtmac = Vtmac::generate(1 << 16, &mut rng, true).unwrap().to_asm();

    let mut group = c.benchmark_group("Render");
    group.bench_function("ivec8mul", |b| b.iter_with_large_drop(|| black_box(ivec.to_string())));
    group.bench_function("vtmac", |b| b.iter_with_large_drop(|| black_box(vtmac.to_string())));
    group.finish();
}

criterion_group!(benches, pack_words, render);
criterion_main!(benches);
