//! Triple-DES in encrypt-decrypt-encrypt form over 64 bit blocks.
//!
//! The key selects the keying option:
//!
//! * 8 or 7 bytes: K1 = K2 = K3, equivalent to single DES;
//! * 16 or 14 bytes: K1, K2 and K3 = K1;
//! * 24 or 21 bytes: three independent keys.
//!
//! Keys made of 8 byte parts carry parity bits, which are ignored. Keys made
//! of 7 byte parts carry none; each part becomes the low 56 bits of its key
//! word, so `key` is equivalent to `00 || key` in the 8 byte form.

use byte_tools::{read_u64_be, write_u64_be};
use crypto_symmetric::generic_array::typenum::U8;
use crypto_symmetric::{Block, BlockCipher, CipherContext, KeyInit, Result,
                       SymmetricCipherError};
use zeroize::Zeroize;

mod consts;

use consts::{E, FP, IP, P, PC1, PC2, SBOX, SHIFTS};

pub const KEY_LENGTHS: [usize; 6] = [7, 8, 14, 16, 21, 24];

type Subkeys = [u64; 16];

/// A keyed Triple-DES instance: the round keys of K1, K2 and K3.
#[derive(Clone)]
pub struct Des3 {
    schedules: [Subkeys; 3],
}

/// Triple-DES key holder; empty until `set_key` is called.
pub type Des3Context = CipherContext<Des3>;

/// Picks the bits of `value` named by `table`, counting from 1 at the top
/// of a `width` bit word.
fn permute(value: u64, table: &[u8], width: u32) -> u64 {
    table.iter().fold(0, |out, &bit| (out << 1) | ((value >> (width - bit as u32)) & 1))
}

/// Loads a 7 or 8 byte key part as a big-endian word.
fn key_word(part: &[u8]) -> u64 {
    part.iter().fold(0, |word, &byte| (word << 8) | byte as u64)
}

fn rotate28(x: u64, n: u32) -> u64 {
    ((x << n) | (x >> (28 - n))) & 0x0fff_ffff
}

fn key_schedule(key: u64) -> Subkeys {
    let cd = permute(key, &PC1, 64);
    let mut c = cd >> 28;
    let mut d = cd & 0x0fff_ffff;
    let mut subkeys = [0u64; 16];
    for (subkey, &shift) in subkeys.iter_mut().zip(SHIFTS.iter()) {
        c = rotate28(c, shift as u32);
        d = rotate28(d, shift as u32);
        *subkey = permute((c << 28) | d, &PC2, 56);
    }
    subkeys
}

fn feistel(r: u32, subkey: u64) -> u32 {
    let x = permute(r as u64, &E, 32) ^ subkey;
    let mut out = 0u64;
    for (i, sbox) in SBOX.iter().enumerate() {
        let six = (x >> (42 - 6 * i)) & 0x3f;
        let row = ((six >> 4) & 2) | (six & 1);
        let col = (six >> 1) & 0xf;
        out = (out << 4) | sbox[(row * 16 + col) as usize] as u64;
    }
    permute(out, &P, 32) as u32
}

fn des<'a, I>(block: u64, subkeys: I) -> u64
    where I: Iterator<Item = &'a u64>
{
    let v = permute(block, &IP, 64);
    let mut l = (v >> 32) as u32;
    let mut r = v as u32;
    for &k in subkeys {
        let next = l ^ feistel(r, k);
        l = r;
        r = next;
    }
    permute(((r as u64) << 32) | l as u64, &FP, 64)
}

fn des_encrypt(block: u64, subkeys: &Subkeys) -> u64 {
    des(block, subkeys.iter())
}

fn des_decrypt(block: u64, subkeys: &Subkeys) -> u64 {
    des(block, subkeys.iter().rev())
}

impl KeyInit for Des3 {
    const ALGORITHM: &'static str = "des3";

    fn new(key: &[u8]) -> Result<Des3> {
        let part = match key.len() {
            7 | 14 | 21 => 7,
            8 | 16 | 24 => 8,
            length => return Err(SymmetricCipherError::InvalidKeyLength {
                algorithm: Self::ALGORITHM,
                length,
            }),
        };
        let k1 = key_word(&key[..part]);
        let k2 = if key.len() > part { key_word(&key[part..2 * part]) } else { k1 };
        let k3 = if key.len() > 2 * part { key_word(&key[2 * part..]) } else { k1 };
        Ok(Des3 {
            schedules: [key_schedule(k1), key_schedule(k2), key_schedule(k3)],
        })
    }
}

impl BlockCipher for Des3 {
    type BlockSize = U8;

    fn encrypt_block(&self, input: &Block<U8>, output: &mut Block<U8>) {
        let [k1, k2, k3] = &self.schedules;
        let x = des_encrypt(read_u64_be(input), k1);
        let x = des_decrypt(x, k2);
        write_u64_be(output, des_encrypt(x, k3));
    }

    fn decrypt_block(&self, input: &Block<U8>, output: &mut Block<U8>) {
        let [k1, k2, k3] = &self.schedules;
        let x = des_decrypt(read_u64_be(input), k3);
        let x = des_encrypt(x, k2);
        write_u64_be(output, des_decrypt(x, k1));
    }
}

impl Drop for Des3 {
    fn drop(&mut self) {
        self.schedules.zeroize();
    }
}

#[cfg(test)]
mod tests;
