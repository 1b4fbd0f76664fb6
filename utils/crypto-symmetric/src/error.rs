use thiserror::Error;

/// Coarse classification of a [`SymmetricCipherError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// A key, block, IV or buffer had an unacceptable length.
    InvalidArgument,
    /// A transform was attempted before a key schedule was installed.
    NotInitialized,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SymmetricCipherError {
    #[error("unsupported {algorithm} key length: {length} bytes")]
    InvalidKeyLength { algorithm: &'static str, length: usize },

    #[error("invalid block length: {length} bytes, expected {expected}")]
    InvalidBlockLength { expected: usize, length: usize },

    #[error("invalid input data: empty buffer")]
    EmptyInput,

    #[error("invalid input data: {length} bytes is not a multiple of the {block_size} byte block size")]
    MisalignedInput { block_size: usize, length: usize },

    #[error("missing initialization vector")]
    MissingIv,

    #[error("invalid initialization vector length: {length} bytes, expected {expected}")]
    InvalidIvLength { expected: usize, length: usize },

    #[error("output buffer length {output} does not match input length {input}")]
    LengthMismatch { input: usize, output: usize },

    #[error("no key has been set")]
    NotInitialized,
}

impl SymmetricCipherError {
    pub fn kind(&self) -> ErrorKind {
        match *self {
            SymmetricCipherError::NotInitialized => ErrorKind::NotInitialized,
            _ => ErrorKind::InvalidArgument,
        }
    }
}

pub type Result<T> = core::result::Result<T, SymmetricCipherError>;
