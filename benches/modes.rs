use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use fcrypto::{crypt_cbc_in_place, crypt_ecb_in_place, BlockDecryptor, BlockEncryptor,
              BlowfishContext, CryptMode, Des3Context, SerpentContext};

const LEN: usize = 4096;

fn bench_context<C>(c: &mut Criterion, name: &str, context: &C)
    where C: BlockEncryptor + BlockDecryptor
{
    let iv = vec![0u8; BlockEncryptor::block_size(context)];
    let mut data = vec![0u8; LEN];

    let mut group = c.benchmark_group("modes");
    group.throughput(Throughput::Bytes(LEN as u64));
    group.bench_function(BenchmarkId::new("ecb_encrypt", name), |b| {
        b.iter(|| crypt_ecb_in_place(context, CryptMode::Encrypt, black_box(&mut data)))
    });
    group.bench_function(BenchmarkId::new("cbc_encrypt", name), |b| {
        b.iter(|| crypt_cbc_in_place(context, CryptMode::Encrypt, &iv, black_box(&mut data)))
    });
    group.bench_function(BenchmarkId::new("cbc_decrypt", name), |b| {
        b.iter(|| crypt_cbc_in_place(context, CryptMode::Decrypt, &iv, black_box(&mut data)))
    });
    group.finish();
}

fn modes(c: &mut Criterion) {
    let blowfish = BlowfishContext::with_key(&[0u8; 16]).unwrap();
    let serpent = SerpentContext::with_key(&[0u8; 32]).unwrap();
    let des3 = Des3Context::with_key(&[0x5a; 24]).unwrap();
    bench_context(c, "blowfish", &blowfish);
    bench_context(c, "serpent", &serpent);
    bench_context(c, "des3", &des3);
}

criterion_group!(benches, modes);
criterion_main!(benches);
