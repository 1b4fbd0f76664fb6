//! The Serpent block cipher: 128 bit blocks, 128, 192 or 256 bit keys.
//!
//! S-boxes are applied in bitslice form through table lookups, one nibble
//! per bit position, so this is NOT A FIXED TIME IMPLEMENTATION. Byte order
//! matches the NESSIE test vectors: key and block words are little-endian.

use byte_tools::{read_u32v_le, write_u32v_le};
use crypto_symmetric::generic_array::typenum::U16;
use crypto_symmetric::{Block, BlockCipher, CipherContext, KeyInit, Result,
                       SymmetricCipherError};
use zeroize::Zeroize;

mod consts;

use consts::{PHI, ROUNDS, SBOX, SBOX_INV};

pub const KEY_LENGTHS: [usize; 3] = [16, 24, 32];

/// A keyed Serpent instance holding the 33 round keys.
#[derive(Clone)]
pub struct Serpent {
    subkeys: [[u32; 4]; ROUNDS + 1],
}

/// Serpent key holder; empty until `set_key` is called.
pub type SerpentContext = CipherContext<Serpent>;

/// Runs bit `j` of the four words through `table` for every `j`.
fn apply_sbox(table: &[u8; 16], x: &[u32; 4]) -> [u32; 4] {
    let mut y = [0u32; 4];
    for j in 0..32 {
        let nibble = ((x[0] >> j) & 1)
            | (((x[1] >> j) & 1) << 1)
            | (((x[2] >> j) & 1) << 2)
            | (((x[3] >> j) & 1) << 3);
        let out = table[nibble as usize] as u32;
        for (bit, word) in y.iter_mut().enumerate() {
            *word |= ((out >> bit) & 1) << j;
        }
    }
    y
}

fn xor_key(x: &mut [u32; 4], key: &[u32; 4]) {
    for (word, k) in x.iter_mut().zip(key.iter()) {
        *word ^= k;
    }
}

fn linear_transform(x: &mut [u32; 4]) {
    x[0] = x[0].rotate_left(13);
    x[2] = x[2].rotate_left(3);
    x[1] ^= x[0] ^ x[2];
    x[3] ^= x[2] ^ (x[0] << 3);
    x[1] = x[1].rotate_left(1);
    x[3] = x[3].rotate_left(7);
    x[0] ^= x[1] ^ x[3];
    x[2] ^= x[3] ^ (x[1] << 7);
    x[0] = x[0].rotate_left(5);
    x[2] = x[2].rotate_left(22);
}

fn inverse_linear_transform(x: &mut [u32; 4]) {
    x[2] = x[2].rotate_right(22);
    x[0] = x[0].rotate_right(5);
    x[2] ^= x[3] ^ (x[1] << 7);
    x[0] ^= x[1] ^ x[3];
    x[3] = x[3].rotate_right(7);
    x[1] = x[1].rotate_right(1);
    x[3] ^= x[2] ^ (x[0] << 3);
    x[1] ^= x[0] ^ x[2];
    x[2] = x[2].rotate_right(3);
    x[0] = x[0].rotate_right(13);
}

impl Serpent {
    fn expand_key(key: &[u8]) -> [[u32; 4]; ROUNDS + 1] {
        // short keys are padded with a single one bit
        let mut padded = [0u8; 32];
        padded[..key.len()].copy_from_slice(key);
        if key.len() < padded.len() {
            padded[key.len()] = 1;
        }

        let mut w = [0u32; 8 + 4 * (ROUNDS + 1)];
        read_u32v_le(&mut w[..8], &padded);
        for i in 0..4 * (ROUNDS + 1) {
            w[i + 8] = (w[i] ^ w[i + 3] ^ w[i + 5] ^ w[i + 7] ^ PHI ^ i as u32).rotate_left(11);
        }

        let mut subkeys = [[0u32; 4]; ROUNDS + 1];
        for (k, subkey) in subkeys.iter_mut().enumerate() {
            let mut prekeys = [0u32; 4];
            prekeys.copy_from_slice(&w[8 + 4 * k..12 + 4 * k]);
            // round key k goes through S-box (3 - k) mod 8
            *subkey = apply_sbox(&SBOX[(ROUNDS + 3 - k) % 8], &prekeys);
        }

        padded.zeroize();
        w.zeroize();
        subkeys
    }
}

impl KeyInit for Serpent {
    const ALGORITHM: &'static str = "serpent";

    fn new(key: &[u8]) -> Result<Serpent> {
        if !KEY_LENGTHS.contains(&key.len()) {
            return Err(SymmetricCipherError::InvalidKeyLength {
                algorithm: Self::ALGORITHM,
                length: key.len(),
            });
        }
        Ok(Serpent { subkeys: Serpent::expand_key(key) })
    }
}

impl BlockCipher for Serpent {
    type BlockSize = U16;

    fn encrypt_block(&self, input: &Block<U16>, output: &mut Block<U16>) {
        let mut x = [0u32; 4];
        read_u32v_le(&mut x, input);
        for round in 0..ROUNDS {
            xor_key(&mut x, &self.subkeys[round]);
            x = apply_sbox(&SBOX[round % 8], &x);
            if round < ROUNDS - 1 {
                linear_transform(&mut x);
            } else {
                xor_key(&mut x, &self.subkeys[ROUNDS]);
            }
        }
        write_u32v_le(output, &x);
    }

    fn decrypt_block(&self, input: &Block<U16>, output: &mut Block<U16>) {
        let mut x = [0u32; 4];
        read_u32v_le(&mut x, input);
        for round in (0..ROUNDS).rev() {
            if round < ROUNDS - 1 {
                inverse_linear_transform(&mut x);
            } else {
                xor_key(&mut x, &self.subkeys[ROUNDS]);
            }
            x = apply_sbox(&SBOX_INV[round % 8], &x);
            xor_key(&mut x, &self.subkeys[round]);
        }
        write_u32v_le(output, &x);
    }
}

impl Drop for Serpent {
    fn drop(&mut self) {
        self.subkeys.zeroize();
    }
}
