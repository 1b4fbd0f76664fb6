use core::fmt;

use generic_array::typenum::Unsigned;
use generic_array::GenericArray;
use log::debug;

use crate::{check_output_len, Block, BlockCipher, BlockDecryptor, BlockEncryptor, KeyInit,
            Result, SymmetricCipherError, SynchronousStreamCipher};

/// Holds the key schedule of a cipher, or nothing if no key was set yet.
///
/// `set_key` builds the new schedule completely before it replaces the old
/// one, so a rejected key leaves the context exactly as it was.
pub struct CipherContext<C> {
    cipher: Option<C>,
}

impl<C> Default for CipherContext<C> {
    fn default() -> Self {
        CipherContext { cipher: None }
    }
}

impl<C: KeyInit> fmt::Debug for CipherContext<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CipherContext")
            .field("algorithm", &C::ALGORITHM)
            .field("initialized", &self.cipher.is_some())
            .finish()
    }
}

impl<C: KeyInit> CipherContext<C> {
    /// Creates a context without a key schedule.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_key(key: &[u8]) -> Result<Self> {
        let mut context = Self::new();
        context.set_key(key)?;
        Ok(context)
    }

    /// Computes the key schedule for `key`, discarding any previous one.
    pub fn set_key(&mut self, key: &[u8]) -> Result<()> {
        let cipher = C::new(key)?;
        self.cipher = Some(cipher);
        debug!("{}: key schedule set from {} byte key", C::ALGORITHM, key.len());
        Ok(())
    }

    pub fn is_initialized(&self) -> bool {
        self.cipher.is_some()
    }

    /// Drops the key schedule, returning the context to its initial state.
    pub fn clear(&mut self) {
        self.cipher = None;
    }

    pub fn cipher(&self) -> Result<&C> {
        self.cipher.as_ref().ok_or(SymmetricCipherError::NotInitialized)
    }

    pub fn cipher_mut(&mut self) -> Result<&mut C> {
        self.cipher.as_mut().ok_or(SymmetricCipherError::NotInitialized)
    }
}

fn check_block_len(expected: usize, length: usize) -> Result<()> {
    if length != expected {
        return Err(SymmetricCipherError::InvalidBlockLength { expected, length });
    }
    Ok(())
}

impl<C: BlockCipher> CipherContext<C> {
    pub fn block_size(&self) -> usize {
        C::BlockSize::to_usize()
    }

    /// Encrypts a single block and returns the ciphertext block.
    pub fn encrypt(&self, block: &[u8]) -> Result<Block<C::BlockSize>> {
        let mut output = GenericArray::default();
        BlockEncryptor::encrypt_block(self, block, &mut output)?;
        Ok(output)
    }

    /// Decrypts a single block and returns the plaintext block.
    pub fn decrypt(&self, block: &[u8]) -> Result<Block<C::BlockSize>> {
        let mut output = GenericArray::default();
        BlockDecryptor::decrypt_block(self, block, &mut output)?;
        Ok(output)
    }
}

impl<C: BlockCipher> BlockEncryptor for CipherContext<C> {
    fn block_size(&self) -> usize {
        C::BlockSize::to_usize()
    }

    fn encrypt_block(&self, input: &[u8], output: &mut [u8]) -> Result<()> {
        let block_size = C::BlockSize::to_usize();
        check_block_len(block_size, input.len())?;
        check_block_len(block_size, output.len())?;
        self.cipher()?.encrypt_block(
            GenericArray::from_slice(input),
            GenericArray::from_mut_slice(output));
        Ok(())
    }
}

impl<C: BlockCipher> BlockDecryptor for CipherContext<C> {
    fn block_size(&self) -> usize {
        C::BlockSize::to_usize()
    }

    fn decrypt_block(&self, input: &[u8], output: &mut [u8]) -> Result<()> {
        let block_size = C::BlockSize::to_usize();
        check_block_len(block_size, input.len())?;
        check_block_len(block_size, output.len())?;
        self.cipher()?.decrypt_block(
            GenericArray::from_slice(input),
            GenericArray::from_mut_slice(output));
        Ok(())
    }
}

impl<C: SynchronousStreamCipher> CipherContext<C> {
    /// XORs `input` with the next `input.len()` keystream bytes into `output`.
    pub fn process(&mut self, input: &[u8], output: &mut [u8]) -> Result<()> {
        check_output_len(input.len(), output.len())?;
        self.cipher_mut()?.process(input, output);
        Ok(())
    }

    /// Encrypts or decrypts `data`; both directions are the same operation.
    pub fn transform(&mut self, data: &[u8]) -> Result<Vec<u8>> {
        let mut output = vec![0u8; data.len()];
        self.process(data, &mut output)?;
        Ok(output)
    }

    /// Returns the next `length` bytes of raw keystream.
    pub fn keystream(&mut self, length: usize) -> Result<Vec<u8>> {
        self.transform(&vec![0u8; length])
    }
}
