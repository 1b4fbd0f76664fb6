//! Shared test vector runners and benchmark helpers for the cipher crates.
//!
//! Test vectors live next to each crate's tests as `data/<name>.key.bin`,
//! `data/<name>.input.bin` and `data/<name>.output.bin`, and are pulled in
//! at compile time by [`new_block_cipher_tests!`] and
//! [`new_stream_cipher_tests!`].

mod block_cipher;
mod stream_cipher;

pub use block_cipher::{bench_block_cipher, encrypt_decrypt, BlockCipherTest};
pub use stream_cipher::{bench_stream_cipher, encrypt_stream, StreamCipherTest};
