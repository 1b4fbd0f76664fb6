//! Traits, key contexts and errors shared by the ciphers of this workspace.
//!
//! A cipher crate implements [`KeyInit`] plus either [`BlockCipher`] or
//! [`SynchronousStreamCipher`] on its keyed state. Callers hold that state
//! inside a [`CipherContext`], which starts out empty and reports
//! [`SymmetricCipherError::NotInitialized`] until a key is set. Block mode
//! code only ever sees the slice-level [`BlockEncryptor`] and
//! [`BlockDecryptor`] traits.

pub use generic_array;

use generic_array::{ArrayLength, GenericArray};

mod context;
mod error;

pub use context::CipherContext;
pub use error::{ErrorKind, Result, SymmetricCipherError};

pub type Block<N> = GenericArray<u8, N>;

/// Direction of a cipher operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CryptMode {
    Encrypt,
    Decrypt,
}

/// Builds a keyed cipher state, computing the full key schedule.
pub trait KeyInit: Sized {
    /// Human readable algorithm name, used in errors and log records.
    const ALGORITHM: &'static str;

    fn new(key: &[u8]) -> Result<Self>;
}

/// A keyed block cipher. The schedule is complete once `new` returns, so
/// single block transforms cannot fail.
pub trait BlockCipher: KeyInit {
    type BlockSize: ArrayLength<u8>;

    fn encrypt_block(&self, input: &Block<Self::BlockSize>, output: &mut Block<Self::BlockSize>);
    fn decrypt_block(&self, input: &Block<Self::BlockSize>, output: &mut Block<Self::BlockSize>);
}

/// A keyed stream cipher. Encryption and decryption are the same operation.
///
/// Only the common prefix of `input` and `output` is processed.
pub trait SynchronousStreamCipher: KeyInit {
    fn process(&mut self, input: &[u8], output: &mut [u8]);
}

pub trait BlockEncryptor {
    fn block_size(&self) -> usize;
    fn encrypt_block(&self, input: &[u8], output: &mut [u8]) -> Result<()>;
}

pub trait BlockDecryptor {
    fn block_size(&self) -> usize;
    fn decrypt_block(&self, input: &[u8], output: &mut [u8]) -> Result<()>;
}

impl<'a, T: BlockEncryptor + ?Sized> BlockEncryptor for &'a T {
    fn block_size(&self) -> usize {
        (**self).block_size()
    }

    fn encrypt_block(&self, input: &[u8], output: &mut [u8]) -> Result<()> {
        (**self).encrypt_block(input, output)
    }
}

impl<'a, T: BlockDecryptor + ?Sized> BlockDecryptor for &'a T {
    fn block_size(&self) -> usize {
        (**self).block_size()
    }

    fn decrypt_block(&self, input: &[u8], output: &mut [u8]) -> Result<()> {
        (**self).decrypt_block(input, output)
    }
}

/// A mode object that encrypts whole buffers, possibly carrying chaining
/// state from one call to the next.
pub trait Encryptor {
    fn encrypt(&mut self, input: &[u8], output: &mut [u8]) -> Result<()>;
}

pub trait Decryptor {
    fn decrypt(&mut self, input: &[u8], output: &mut [u8]) -> Result<()>;
}

/// Checks that an output buffer can receive exactly the processed input.
pub fn check_output_len(input: usize, output: usize) -> Result<()> {
    if input != output {
        return Err(SymmetricCipherError::LengthMismatch { input, output });
    }
    Ok(())
}

#[cfg(test)]
mod tests;
