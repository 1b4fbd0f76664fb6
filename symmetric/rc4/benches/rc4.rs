use criterion::{criterion_group, criterion_main, Criterion};
use rc4::Rc4;

fn rc4(c: &mut Criterion) {
    for &len in &[10, 1024, 65536] {
        crypto_tests::bench_stream_cipher::<Rc4>(c, "rc4", b"key", len);
    }
}

criterion_group!(benches, rc4);
criterion_main!(benches);
