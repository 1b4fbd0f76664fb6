//! ECB and CBC modes of operation over any block cipher.
//!
//! The engine only knows the block size and the single block transforms of
//! the cipher ([`BlockEncryptor`] and [`BlockDecryptor`]), so every cipher in
//! the workspace plugs in unchanged. Input must be a positive multiple of the
//! block size; no padding is ever added or removed.
//!
//! There are two ways in:
//!
//! * the one-shot functions [`crypt`], [`crypt_ecb`], [`crypt_cbc`] and their
//!   `_in_place` variants, which validate their arguments and transform a
//!   whole buffer;
//! * the mode objects ([`EcbEncryptor`], [`CbcDecryptor`], ...) which keep
//!   their chaining value between calls, so a long message can be fed in
//!   block aligned pieces.

use log::trace;

use crypto_symmetric::{check_output_len, BlockDecryptor, BlockEncryptor, CryptMode, Decryptor,
                       Encryptor, Result, SymmetricCipherError};

/// Mode of operation selector for [`crypt`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BlockMode {
    Ecb,
    Cbc,
}

/// The `BlockProcessor` trait is used to implement modes that require processing
/// complete blocks of data. The methods of this trait are called by the
/// `BlockEngine` which is in charge of splitting the input into blocks.
trait BlockProcessor {
    /// Process a block of data. The `in_hist` and `out_hist` parameters represent
    /// the input and output when the last block was processed. These values are
    /// necessary for certain modes.
    fn process_block(&mut self, in_hist: &[u8], out_hist: &[u8], input: &[u8],
                     output: &mut [u8]) -> Result<()>;
}

/// `BlockEngine` hands complete blocks of data to the processor and keeps the
/// history the processor needs for chaining.
struct BlockEngine<P> {
    /// The block sized expected by the Processor
    block_size: usize,

    /// `in_hist` and `out_hist` keep track of data that was input to and output
    /// from the last invocation of the `process_block()` method of the `Processor`.
    /// Depending on the mode, these may be empty vectors if history is not needed.
    in_hist: Vec<u8>,
    out_hist: Vec<u8>,

    /// Holds a copy of the current input block when processing in place.
    scratch: Vec<u8>,

    /// The processor that implements the particular block mode.
    processor: P,
}

fn update_history(in_hist: &mut [u8], out_hist: &mut [u8], last_in: &[u8], last_out: &[u8]) {
    let in_hist_len = in_hist.len();
    if in_hist_len > 0 {
        in_hist.copy_from_slice(&last_in[last_in.len() - in_hist_len..]);
    }
    let out_hist_len = out_hist.len();
    if out_hist_len > 0 {
        out_hist.copy_from_slice(&last_out[last_out.len() - out_hist_len..]);
    }
}

fn check_data(block_size: usize, length: usize) -> Result<()> {
    if length == 0 {
        return Err(SymmetricCipherError::EmptyInput);
    }
    if length % block_size != 0 {
        return Err(SymmetricCipherError::MisalignedInput { block_size, length });
    }
    Ok(())
}

fn check_iv(block_size: usize, iv: &[u8]) -> Result<()> {
    if iv.len() != block_size {
        return Err(SymmetricCipherError::InvalidIvLength {
            expected: block_size,
            length: iv.len(),
        });
    }
    Ok(())
}

impl<P: BlockProcessor> BlockEngine<P> {
    /// Create a new `BlockEngine` instance with the given processor and
    /// `block_size`. No history will be saved.
    fn new(processor: P, block_size: usize) -> BlockEngine<P> {
        BlockEngine {
            block_size,
            in_hist: Vec::new(),
            out_hist: Vec::new(),
            scratch: vec![0; block_size],
            processor,
        }
    }

    /// Create a new `BlockEngine` instance with the given processor, `block_size`,
    /// and initial input and output history.
    fn new_with_history(processor: P, block_size: usize, in_hist: Vec<u8>,
                        out_hist: Vec<u8>) -> BlockEngine<P> {
        BlockEngine {
            in_hist,
            out_hist,
            ..BlockEngine::new(processor, block_size)
        }
    }

    fn process(&mut self, input: &[u8], output: &mut [u8]) -> Result<()> {
        check_data(self.block_size, input.len())?;
        check_output_len(input.len(), output.len())?;
        let block_size = self.block_size;
        for (next_in, next_out) in input.chunks(block_size).zip(output.chunks_mut(block_size)) {
            self.processor.process_block(&self.in_hist, &self.out_hist, next_in, next_out)?;
            update_history(&mut self.in_hist, &mut self.out_hist, next_in, next_out);
        }
        Ok(())
    }

    /// Same as `process` with the output written over the input. Each input
    /// block is copied to the scratch buffer before it is overwritten.
    fn process_in_place(&mut self, data: &mut [u8]) -> Result<()> {
        check_data(self.block_size, data.len())?;
        for block in data.chunks_mut(self.block_size) {
            self.scratch.copy_from_slice(block);
            self.processor.process_block(&self.in_hist, &self.out_hist, &self.scratch, block)?;
            update_history(&mut self.in_hist, &mut self.out_hist, &self.scratch, block);
        }
        Ok(())
    }

    fn reset_with_history(&mut self, in_hist: &[u8], out_hist: &[u8]) {
        self.in_hist.copy_from_slice(in_hist);
        self.out_hist.copy_from_slice(out_hist);
    }
}

struct EcbEncryptorProcessor<T> {
    algo: T,
}

impl<T: BlockEncryptor> BlockProcessor for EcbEncryptorProcessor<T> {
    fn process_block(&mut self, _: &[u8], _: &[u8], input: &[u8], output: &mut [u8]) -> Result<()> {
        self.algo.encrypt_block(input, output)
    }
}

/// ECB Encryption mode
pub struct EcbEncryptor<T> {
    block_engine: BlockEngine<EcbEncryptorProcessor<T>>,
}

impl<T: BlockEncryptor> EcbEncryptor<T> {
    /// Create a new ECB encryption mode object
    pub fn new(algo: T) -> EcbEncryptor<T> {
        let block_size = algo.block_size();
        let processor = EcbEncryptorProcessor { algo };
        EcbEncryptor {
            block_engine: BlockEngine::new(processor, block_size),
        }
    }

    pub fn encrypt_in_place(&mut self, data: &mut [u8]) -> Result<()> {
        self.block_engine.process_in_place(data)
    }
}

impl<T: BlockEncryptor> Encryptor for EcbEncryptor<T> {
    fn encrypt(&mut self, input: &[u8], output: &mut [u8]) -> Result<()> {
        self.block_engine.process(input, output)
    }
}

struct EcbDecryptorProcessor<T> {
    algo: T,
}

impl<T: BlockDecryptor> BlockProcessor for EcbDecryptorProcessor<T> {
    fn process_block(&mut self, _: &[u8], _: &[u8], input: &[u8], output: &mut [u8]) -> Result<()> {
        self.algo.decrypt_block(input, output)
    }
}

/// ECB Decryption mode
pub struct EcbDecryptor<T> {
    block_engine: BlockEngine<EcbDecryptorProcessor<T>>,
}

impl<T: BlockDecryptor> EcbDecryptor<T> {
    /// Create a new ECB decryption mode object
    pub fn new(algo: T) -> EcbDecryptor<T> {
        let block_size = algo.block_size();
        let processor = EcbDecryptorProcessor { algo };
        EcbDecryptor {
            block_engine: BlockEngine::new(processor, block_size),
        }
    }

    pub fn decrypt_in_place(&mut self, data: &mut [u8]) -> Result<()> {
        self.block_engine.process_in_place(data)
    }
}

impl<T: BlockDecryptor> Decryptor for EcbDecryptor<T> {
    fn decrypt(&mut self, input: &[u8], output: &mut [u8]) -> Result<()> {
        self.block_engine.process(input, output)
    }
}

struct CbcEncryptorProcessor<T> {
    algo: T,
    temp: Vec<u8>,
}

impl<T: BlockEncryptor> BlockProcessor for CbcEncryptorProcessor<T> {
    fn process_block(&mut self, _: &[u8], out_hist: &[u8], input: &[u8], output: &mut [u8]) -> Result<()> {
        for ((&x, &y), o) in input.iter().zip(out_hist.iter()).zip(self.temp.iter_mut()) {
            *o = x ^ y;
        }
        self.algo.encrypt_block(&self.temp, output)
    }
}

/// CBC encryption mode
pub struct CbcEncryptor<T> {
    block_engine: BlockEngine<CbcEncryptorProcessor<T>>,
}

impl<T: BlockEncryptor> CbcEncryptor<T> {
    /// Create a new CBC encryption mode object. The IV must be exactly one block.
    pub fn new(algo: T, iv: &[u8]) -> Result<CbcEncryptor<T>> {
        let block_size = algo.block_size();
        check_iv(block_size, iv)?;
        let processor = CbcEncryptorProcessor {
            algo,
            temp: vec![0; block_size],
        };
        Ok(CbcEncryptor {
            block_engine: BlockEngine::new_with_history(
                processor,
                block_size,
                Vec::new(),
                iv.to_vec()),
        })
    }

    /// Restart the chain from a new IV.
    pub fn reset(&mut self, iv: &[u8]) -> Result<()> {
        check_iv(self.block_engine.block_size, iv)?;
        self.block_engine.reset_with_history(&[], iv);
        Ok(())
    }

    pub fn encrypt_in_place(&mut self, data: &mut [u8]) -> Result<()> {
        self.block_engine.process_in_place(data)
    }
}

impl<T: BlockEncryptor> Encryptor for CbcEncryptor<T> {
    fn encrypt(&mut self, input: &[u8], output: &mut [u8]) -> Result<()> {
        self.block_engine.process(input, output)
    }
}

struct CbcDecryptorProcessor<T> {
    algo: T,
    temp: Vec<u8>,
}

impl<T: BlockDecryptor> BlockProcessor for CbcDecryptorProcessor<T> {
    fn process_block(&mut self, in_hist: &[u8], _: &[u8], input: &[u8], output: &mut [u8]) -> Result<()> {
        self.algo.decrypt_block(input, &mut self.temp)?;
        for ((&x, &y), o) in self.temp.iter().zip(in_hist.iter()).zip(output.iter_mut()) {
            *o = x ^ y;
        }
        Ok(())
    }
}

/// CBC decryption mode
pub struct CbcDecryptor<T> {
    block_engine: BlockEngine<CbcDecryptorProcessor<T>>,
}

impl<T: BlockDecryptor> CbcDecryptor<T> {
    /// Create a new CBC decryption mode object. The IV must be exactly one block.
    pub fn new(algo: T, iv: &[u8]) -> Result<CbcDecryptor<T>> {
        let block_size = algo.block_size();
        check_iv(block_size, iv)?;
        let processor = CbcDecryptorProcessor {
            algo,
            temp: vec![0; block_size],
        };
        Ok(CbcDecryptor {
            block_engine: BlockEngine::new_with_history(
                processor,
                block_size,
                iv.to_vec(),
                Vec::new()),
        })
    }

    /// Restart the chain from a new IV.
    pub fn reset(&mut self, iv: &[u8]) -> Result<()> {
        check_iv(self.block_engine.block_size, iv)?;
        self.block_engine.reset_with_history(iv, &[]);
        Ok(())
    }

    pub fn decrypt_in_place(&mut self, data: &mut [u8]) -> Result<()> {
        self.block_engine.process_in_place(data)
    }
}

impl<T: BlockDecryptor> Decryptor for CbcDecryptor<T> {
    fn decrypt(&mut self, input: &[u8], output: &mut [u8]) -> Result<()> {
        self.block_engine.process(input, output)
    }
}

/// Encrypts or decrypts `data` in the given mode and returns the result.
///
/// `iv` is required for CBC and must be exactly one block long; ECB ignores
/// it. Argument errors are reported before the context is used, and a
/// context without a key fails with `NotInitialized`.
pub fn crypt<C>(context: &C, mode: BlockMode, crypt_mode: CryptMode, iv: Option<&[u8]>,
                data: &[u8]) -> Result<Vec<u8>>
    where C: BlockEncryptor + BlockDecryptor + ?Sized
{
    let mut output = data.to_vec();
    crypt_in_place(context, mode, crypt_mode, iv, &mut output)?;
    Ok(output)
}

/// [`crypt`] with the result written over `data`.
///
/// On error `data` may be partially transformed, except for argument and
/// `NotInitialized` errors which are detected before any block is written.
pub fn crypt_in_place<C>(context: &C, mode: BlockMode, crypt_mode: CryptMode,
                         iv: Option<&[u8]>, data: &mut [u8]) -> Result<()>
    where C: BlockEncryptor + BlockDecryptor + ?Sized
{
    let block_size = BlockEncryptor::block_size(context);
    check_data(block_size, data.len())?;
    trace!("{:?} {:?}: {} blocks of {} bytes", mode, crypt_mode, data.len() / block_size,
           block_size);

    match (mode, crypt_mode) {
        (BlockMode::Ecb, CryptMode::Encrypt) => EcbEncryptor::new(context).encrypt_in_place(data),
        (BlockMode::Ecb, CryptMode::Decrypt) => EcbDecryptor::new(context).decrypt_in_place(data),
        (BlockMode::Cbc, CryptMode::Encrypt) => {
            let iv = iv.ok_or(SymmetricCipherError::MissingIv)?;
            CbcEncryptor::new(context, iv)?.encrypt_in_place(data)
        }
        (BlockMode::Cbc, CryptMode::Decrypt) => {
            let iv = iv.ok_or(SymmetricCipherError::MissingIv)?;
            CbcDecryptor::new(context, iv)?.decrypt_in_place(data)
        }
    }
}

pub fn crypt_ecb<C>(context: &C, crypt_mode: CryptMode, data: &[u8]) -> Result<Vec<u8>>
    where C: BlockEncryptor + BlockDecryptor + ?Sized
{
    crypt(context, BlockMode::Ecb, crypt_mode, None, data)
}

pub fn crypt_ecb_in_place<C>(context: &C, crypt_mode: CryptMode, data: &mut [u8]) -> Result<()>
    where C: BlockEncryptor + BlockDecryptor + ?Sized
{
    crypt_in_place(context, BlockMode::Ecb, crypt_mode, None, data)
}

pub fn crypt_cbc<C>(context: &C, crypt_mode: CryptMode, iv: &[u8], data: &[u8]) -> Result<Vec<u8>>
    where C: BlockEncryptor + BlockDecryptor + ?Sized
{
    crypt(context, BlockMode::Cbc, crypt_mode, Some(iv), data)
}

pub fn crypt_cbc_in_place<C>(context: &C, crypt_mode: CryptMode, iv: &[u8],
                             data: &mut [u8]) -> Result<()>
    where C: BlockEncryptor + BlockDecryptor + ?Sized
{
    crypt_in_place(context, BlockMode::Cbc, crypt_mode, Some(iv), data)
}
