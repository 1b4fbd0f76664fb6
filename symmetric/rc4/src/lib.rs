//! An implementation of the RC4 (also sometimes called ARC4) stream cipher.
//! THIS IMPLEMENTATION IS NOT A FIXED TIME IMPLEMENTATION.

use crypto_symmetric::{check_output_len, CipherContext, Decryptor, Encryptor, KeyInit, Result,
                       SymmetricCipherError, SynchronousStreamCipher};
use zeroize::Zeroize;

pub const MIN_KEY_LEN: usize = 1;
pub const MAX_KEY_LEN: usize = 256;

#[derive(Clone)]
pub struct Rc4 {
    i: u8,
    j: u8,
    state: [u8; 256]
}

/// RC4 key holder. The keystream position carries over between calls and is
/// reset by `set_key`.
pub type Rc4Context = CipherContext<Rc4>;

impl Rc4 {
    fn next(&mut self) -> u8 {
        self.i = self.i.wrapping_add(1);
        self.j = self.j.wrapping_add(self.state[self.i as usize]);
        self.state.swap(self.i as usize, self.j as usize);
        self.state[(self.state[self.i as usize].wrapping_add(self.state[self.j as usize])) as usize]
    }
}

impl KeyInit for Rc4 {
    const ALGORITHM: &'static str = "rc4";

    fn new(key: &[u8]) -> Result<Rc4> {
        if key.len() < MIN_KEY_LEN || key.len() > MAX_KEY_LEN {
            return Err(SymmetricCipherError::InvalidKeyLength {
                algorithm: Self::ALGORITHM,
                length: key.len(),
            });
        }
        let mut rc4 = Rc4 { i: 0, j: 0, state: [0; 256] };
        for (i, x) in rc4.state.iter_mut().enumerate() {
            *x = i as u8;
        }
        let mut j: u8 = 0;
        for i in 0..256 {
            j = j.wrapping_add(rc4.state[i]).wrapping_add(key[i % key.len()]);
            rc4.state.swap(i, j as usize);
        }
        Ok(rc4)
    }
}

impl SynchronousStreamCipher for Rc4 {
    fn process(&mut self, input: &[u8], output: &mut [u8]) {
        for (x, y) in input.iter().zip(output.iter_mut()) {
            *y = *x ^ self.next();
        }
    }
}

impl Encryptor for Rc4 {
    fn encrypt(&mut self, input: &[u8], output: &mut [u8]) -> Result<()> {
        check_output_len(input.len(), output.len())?;
        self.process(input, output);
        Ok(())
    }
}

impl Decryptor for Rc4 {
    fn decrypt(&mut self, input: &[u8], output: &mut [u8]) -> Result<()> {
        self.encrypt(input, output)
    }
}

impl Drop for Rc4 {
    fn drop(&mut self) {
        self.state.zeroize();
        self.i.zeroize();
        self.j.zeroize();
    }
}
