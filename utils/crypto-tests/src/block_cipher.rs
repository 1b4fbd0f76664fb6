use criterion::{black_box, Criterion, Throughput};
use crypto_symmetric::generic_array::typenum::Unsigned;
use crypto_symmetric::generic_array::GenericArray;
use crypto_symmetric::BlockCipher;

pub struct BlockCipherTest {
    pub name: &'static str,
    pub key: &'static [u8],
    pub input: &'static [u8],
    pub output: &'static [u8],
}

#[macro_export]
macro_rules! new_block_cipher_tests {
    ( $( $name:expr ),*  ) => {
        [$(
            $crate::BlockCipherTest {
                name: $name,
                key: include_bytes!(concat!("data/", $name, ".key.bin")),
                input: include_bytes!(concat!("data/", $name, ".input.bin")),
                output: include_bytes!(concat!("data/", $name, ".output.bin")),
            },
        )*]
    };
}

/// Checks every vector in both directions. `input` may hold several blocks,
/// each of which is transformed independently.
pub fn encrypt_decrypt<B: BlockCipher>(tests: &[BlockCipherTest]) {
    let block_size = B::BlockSize::to_usize();
    let mut buf = GenericArray::default();

    // test encryption
    for test in tests {
        let state = B::new(test.key)
            .unwrap_or_else(|e| panic!("{}: {}", test.name, e));
        assert_eq!(test.input.len(), test.output.len(), "{}", test.name);
        for (input, output) in test.input.chunks(block_size).zip(test.output.chunks(block_size)) {
            state.encrypt_block(GenericArray::from_slice(input), &mut buf);
            assert_eq!(output, &buf[..], "{}: encryption", test.name);
        }
    }

    // test decryption
    for test in tests {
        let state = B::new(test.key)
            .unwrap_or_else(|e| panic!("{}: {}", test.name, e));
        for (input, output) in test.input.chunks(block_size).zip(test.output.chunks(block_size)) {
            state.decrypt_block(GenericArray::from_slice(output), &mut buf);
            assert_eq!(input, &buf[..], "{}: decryption", test.name);
        }
    }
}

/// Registers a single block encryption benchmark for `B` under `name`.
pub fn bench_block_cipher<B: BlockCipher>(c: &mut Criterion, name: &str, key: &[u8]) {
    let state = match B::new(key) {
        Ok(state) => state,
        Err(e) => panic!("{}: {}", name, e),
    };
    let input = GenericArray::default();
    let mut output = GenericArray::default();

    let mut group = c.benchmark_group(name);
    group.throughput(Throughput::Bytes(B::BlockSize::to_u64()));
    group.bench_function("encrypt", |b| {
        b.iter(|| state.encrypt_block(black_box(&input), &mut output))
    });
    group.bench_function("decrypt", |b| {
        b.iter(|| state.decrypt_block(black_box(&input), &mut output))
    });
    group.finish();
}
