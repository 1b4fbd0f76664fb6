use criterion::{black_box, Criterion, Throughput};
use crypto_symmetric::SynchronousStreamCipher;

pub struct StreamCipherTest {
    pub name: &'static str,
    pub key: &'static [u8],
    pub input: &'static [u8],
    pub output: &'static [u8],
}

#[macro_export]
macro_rules! new_stream_cipher_tests {
    ( $( $name:expr ),*  ) => {
        [$(
            $crate::StreamCipherTest {
                name: $name,
                key: include_bytes!(concat!("data/", $name, ".key.bin")),
                input: include_bytes!(concat!("data/", $name, ".input.bin")),
                output: include_bytes!(concat!("data/", $name, ".output.bin")),
            },
        )*]
    };
}

/// Checks each vector in one call, then again fed one byte at a time so that
/// keystream position is carried correctly between calls.
pub fn encrypt_stream<S: SynchronousStreamCipher>(tests: &[StreamCipherTest]) {
    for test in tests {
        let mut state = S::new(test.key)
            .unwrap_or_else(|e| panic!("{}: {}", test.name, e));
        let mut buf = vec![0u8; test.input.len()];
        state.process(test.input, &mut buf);
        assert_eq!(test.output, &buf[..], "{}", test.name);

        let mut state = S::new(test.key)
            .unwrap_or_else(|e| panic!("{}: {}", test.name, e));
        for (i, &byte) in test.input.iter().enumerate() {
            state.process(&[byte], &mut buf[i..i + 1]);
        }
        assert_eq!(test.output, &buf[..], "{}: bytewise", test.name);
    }
}

/// Registers a keystream benchmark over `len` byte buffers.
pub fn bench_stream_cipher<S: SynchronousStreamCipher>(c: &mut Criterion, name: &str,
                                                       key: &[u8], len: usize) {
    let mut state = match S::new(key) {
        Ok(state) => state,
        Err(e) => panic!("{}: {}", name, e),
    };
    let input = vec![0u8; len];
    let mut output = vec![0u8; len];

    let mut group = c.benchmark_group(name);
    group.throughput(Throughput::Bytes(len as u64));
    group.bench_function(format!("process_{}", len), |b| {
        b.iter(|| state.process(black_box(&input), &mut output))
    });
    group.finish();
}
