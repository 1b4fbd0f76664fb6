//! Symmetric ciphers with ECB and CBC chaining.
//!
//! Each cipher lives in its own crate and is re-exported here together with
//! its key context type. A context starts out without a key; set one, then
//! either transform single blocks through the context or hand it to the
//! block mode functions below. RC4 is a stream cipher and transforms data
//! of any length directly.
//!
//! ```
//! use fcrypto::{crypt_blowfish_cbc, BlowfishContext, CryptMode};
//!
//! let context = BlowfishContext::with_key(b"This is a key123").unwrap();
//! let ciphertext = crypt_blowfish_cbc(&context, CryptMode::Encrypt, b"This IV!",
//!                                     b"sixteen byte msg").unwrap();
//! let plaintext = crypt_blowfish_cbc(&context, CryptMode::Decrypt, b"This IV!",
//!                                    &ciphertext).unwrap();
//! assert_eq!(&plaintext[..], b"sixteen byte msg");
//! ```
//!
//! Ciphers can be left out through the `blowfish`, `rc4`, `serpent` and
//! `des3` Cargo features, all enabled by default.

pub use blockmodes;
pub use crypto_symmetric;

#[cfg(feature = "blowfish")]
pub use blowfish;
#[cfg(feature = "des3")]
pub use des3;
#[cfg(feature = "rc4")]
pub use rc4;
#[cfg(feature = "serpent")]
pub use serpent;

pub use blockmodes::{crypt, crypt_cbc, crypt_cbc_in_place, crypt_ecb, crypt_ecb_in_place,
                     crypt_in_place, BlockMode, CbcDecryptor, CbcEncryptor, EcbDecryptor,
                     EcbEncryptor};
pub use crypto_symmetric::{BlockDecryptor, BlockEncryptor, CipherContext, CryptMode, Decryptor,
                           Encryptor, ErrorKind, Result, SymmetricCipherError};

#[cfg(feature = "blowfish")]
pub use blowfish::{Blowfish, BlowfishContext};
#[cfg(feature = "des3")]
pub use des3::{Des3, Des3Context};
#[cfg(feature = "rc4")]
pub use rc4::{Rc4, Rc4Context};
#[cfg(feature = "serpent")]
pub use serpent::{Serpent, SerpentContext};

/// Blowfish in ECB mode. `data` must be a non-empty multiple of 8 bytes.
#[cfg(feature = "blowfish")]
pub fn crypt_blowfish_ecb(context: &BlowfishContext, crypt_mode: CryptMode, data: &[u8])
                          -> Result<Vec<u8>> {
    crypt_ecb(context, crypt_mode, data)
}

/// Blowfish in CBC mode with an 8 byte IV.
#[cfg(feature = "blowfish")]
pub fn crypt_blowfish_cbc(context: &BlowfishContext, crypt_mode: CryptMode, iv: &[u8],
                          data: &[u8]) -> Result<Vec<u8>> {
    crypt_cbc(context, crypt_mode, iv, data)
}

/// Serpent in ECB mode. `data` must be a non-empty multiple of 16 bytes.
#[cfg(feature = "serpent")]
pub fn crypt_serpent_ecb(context: &SerpentContext, crypt_mode: CryptMode, data: &[u8])
                         -> Result<Vec<u8>> {
    crypt_ecb(context, crypt_mode, data)
}

/// Serpent in CBC mode with a 16 byte IV.
#[cfg(feature = "serpent")]
pub fn crypt_serpent_cbc(context: &SerpentContext, crypt_mode: CryptMode, iv: &[u8],
                         data: &[u8]) -> Result<Vec<u8>> {
    crypt_cbc(context, crypt_mode, iv, data)
}

/// Triple-DES in ECB mode. `data` must be a non-empty multiple of 8 bytes.
#[cfg(feature = "des3")]
pub fn crypt_des3_ecb(context: &Des3Context, crypt_mode: CryptMode, data: &[u8])
                      -> Result<Vec<u8>> {
    crypt_ecb(context, crypt_mode, data)
}

/// Triple-DES in CBC mode with an 8 byte IV.
#[cfg(feature = "des3")]
pub fn crypt_des3_cbc(context: &Des3Context, crypt_mode: CryptMode, iv: &[u8], data: &[u8])
                      -> Result<Vec<u8>> {
    crypt_cbc(context, crypt_mode, iv, data)
}

/// Encrypts or decrypts `data` with the next bytes of the RC4 keystream.
#[cfg(feature = "rc4")]
pub fn crypt_rc4(context: &mut Rc4Context, data: &[u8]) -> Result<Vec<u8>> {
    context.transform(data)
}
