use blowfish::Blowfish;
use criterion::{criterion_group, criterion_main, Criterion};

fn blowfish(c: &mut Criterion) {
    crypto_tests::bench_block_cipher::<Blowfish>(c, "blowfish", &[0u8; 16]);
}

criterion_group!(benches, blowfish);
criterion_main!(benches);
