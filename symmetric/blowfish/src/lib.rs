//! The Blowfish block cipher: 64 bit blocks, keys of 1 to 56 bytes.

use byte_tools::{read_u32v_be, write_u32_be};
use crypto_symmetric::generic_array::typenum::U8;
use crypto_symmetric::{Block, BlockCipher, CipherContext, KeyInit, Result,
                       SymmetricCipherError};
use zeroize::Zeroize;

mod consts;

pub const MIN_KEY_LEN: usize = 1;
pub const MAX_KEY_LEN: usize = 56;

/// A keyed Blowfish instance.
#[derive(Clone)]
pub struct Blowfish {
    s: [[u32; 256]; 4],
    p: [u32; 18],
}

/// Blowfish key holder; empty until `set_key` is called.
pub type BlowfishContext = CipherContext<Blowfish>;

fn next_u32_wrap(buf: &[u8], offset: &mut usize) -> u32 {
    let mut v = 0;
    for _ in 0..4 {
        if *offset >= buf.len() {
            *offset = 0;
        }
        v = (v << 8) | buf[*offset] as u32;
        *offset += 1;
    }
    v
}

impl Blowfish {
    fn init_state() -> Blowfish {
        Blowfish {
            p: consts::P,
            s: consts::S,
        }
    }

    fn expand_key(&mut self, key: &[u8]) {
        let mut key_pos = 0;
        for i in 0..18 {
            self.p[i] ^= next_u32_wrap(key, &mut key_pos);
        }
        let mut l = 0u32;
        let mut r = 0u32;
        for i in (0..18).step_by(2) {
            let (new_l, new_r) = self.encrypt_values(l, r);
            l = new_l;
            r = new_r;
            self.p[i] = l;
            self.p[i+1] = r;
        }
        for i in 0..4 {
            for j in (0..256).step_by(2) {
                let (new_l, new_r) = self.encrypt_values(l, r);
                l = new_l;
                r = new_r;
                self.s[i][j] = l;
                self.s[i][j+1] = r;
            }
        }
    }

    fn round_function(&self, x: u32) -> u32 {
        ((self.s[0][(x >> 24) as usize].wrapping_add(self.s[1][((x >> 16) & 0xff) as usize]))
            ^ self.s[2][((x >> 8) & 0xff) as usize])
            .wrapping_add(self.s[3][(x & 0xff) as usize])
    }

    /// Encrypts the block given as its two big-endian halves, returning the
    /// ciphertext halves in the same order.
    pub fn encrypt_values(&self, mut l: u32, mut r: u32) -> (u32, u32) {
        for i in (0..16).step_by(2) {
            l ^= self.p[i];
            r ^= self.round_function(l);
            r ^= self.p[i+1];
            l ^= self.round_function(r);
        }
        l ^= self.p[16];
        r ^= self.p[17];
        (r, l)
    }

    /// Inverse of [`encrypt_values`](Blowfish::encrypt_values).
    pub fn decrypt_values(&self, mut l: u32, mut r: u32) -> (u32, u32) {
        let mut i = 16;
        while i > 0 {
            l ^= self.p[i+1];
            r ^= self.round_function(l);
            r ^= self.p[i];
            l ^= self.round_function(r);
            i -= 2;
        }
        l ^= self.p[1];
        r ^= self.p[0];
        (r, l)
    }
}

impl KeyInit for Blowfish {
    const ALGORITHM: &'static str = "blowfish";

    fn new(key: &[u8]) -> Result<Blowfish> {
        if key.len() < MIN_KEY_LEN || key.len() > MAX_KEY_LEN {
            return Err(SymmetricCipherError::InvalidKeyLength {
                algorithm: Self::ALGORITHM,
                length: key.len(),
            });
        }
        let mut blowfish = Blowfish::init_state();
        blowfish.expand_key(key);
        Ok(blowfish)
    }
}

impl BlockCipher for Blowfish {
    type BlockSize = U8;

    fn encrypt_block(&self, input: &Block<U8>, output: &mut Block<U8>) {
        let mut block = [0u32, 0u32];
        read_u32v_be(&mut block, input);
        let (l, r) = self.encrypt_values(block[0], block[1]);
        write_u32_be(&mut output[0..4], l);
        write_u32_be(&mut output[4..8], r);
    }

    fn decrypt_block(&self, input: &Block<U8>, output: &mut Block<U8>) {
        let mut block = [0u32, 0u32];
        read_u32v_be(&mut block, input);
        let (l, r) = self.decrypt_values(block[0], block[1]);
        write_u32_be(&mut output[0..4], l);
        write_u32_be(&mut output[4..8], r);
    }
}

impl Drop for Blowfish {
    fn drop(&mut self) {
        self.p.zeroize();
        self.s.zeroize();
    }
}

#[cfg(test)]
mod tests;
