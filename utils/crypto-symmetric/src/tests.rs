use generic_array::typenum::U4;

use super::*;

/// XORs every byte with the first key byte. Rejects keys longer than 4 bytes.
struct XorCipher {
    key: u8,
}

impl KeyInit for XorCipher {
    const ALGORITHM: &'static str = "xor";

    fn new(key: &[u8]) -> Result<Self> {
        if key.is_empty() || key.len() > 4 {
            return Err(SymmetricCipherError::InvalidKeyLength {
                algorithm: Self::ALGORITHM,
                length: key.len(),
            });
        }
        Ok(XorCipher { key: key[0] })
    }
}

impl BlockCipher for XorCipher {
    type BlockSize = U4;

    fn encrypt_block(&self, input: &Block<U4>, output: &mut Block<U4>) {
        for (o, &i) in output.iter_mut().zip(input.iter()) {
            *o = i ^ self.key;
        }
    }

    fn decrypt_block(&self, input: &Block<U4>, output: &mut Block<U4>) {
        self.encrypt_block(input, output);
    }
}

impl SynchronousStreamCipher for XorCipher {
    fn process(&mut self, input: &[u8], output: &mut [u8]) {
        for (o, &i) in output.iter_mut().zip(input.iter()) {
            *o = i ^ self.key;
        }
        self.key = self.key.wrapping_add(1);
    }
}

#[test]
fn empty_context_is_not_initialized() {
    let context = CipherContext::<XorCipher>::new();
    assert!(!context.is_initialized());
    assert_eq!(context.encrypt(&[0; 4]).unwrap_err(), SymmetricCipherError::NotInitialized);
    assert_eq!(context.decrypt(&[0; 4]).unwrap_err().kind(), ErrorKind::NotInitialized);
}

#[test]
fn block_transform() {
    let context = CipherContext::<XorCipher>::with_key(&[0x0f]).unwrap();
    assert_eq!(context.block_size(), 4);
    assert_eq!(&context.encrypt(&[0x00, 0x01, 0xf0, 0xff]).unwrap()[..], &[0x0f, 0x0e, 0xff, 0xf0]);
    assert_eq!(&context.decrypt(&[0x0f, 0x0e, 0xff, 0xf0]).unwrap()[..], &[0x00, 0x01, 0xf0, 0xff]);
}

#[test]
fn block_length_is_checked() {
    let context = CipherContext::<XorCipher>::with_key(&[1]).unwrap();
    let err = context.encrypt(&[0; 3]).unwrap_err();
    assert_eq!(err, SymmetricCipherError::InvalidBlockLength { expected: 4, length: 3 });
    assert_eq!(err.kind(), ErrorKind::InvalidArgument);

    let mut output = [0u8; 5];
    let err = BlockEncryptor::encrypt_block(&context, &[0; 4], &mut output).unwrap_err();
    assert_eq!(err, SymmetricCipherError::InvalidBlockLength { expected: 4, length: 5 });
}

#[test]
fn rejected_key_keeps_previous_schedule() {
    let mut context = CipherContext::<XorCipher>::with_key(&[0x55]).unwrap();
    let err = context.set_key(&[1, 2, 3, 4, 5]).unwrap_err();
    assert_eq!(err, SymmetricCipherError::InvalidKeyLength { algorithm: "xor", length: 5 });
    assert!(context.is_initialized());
    assert_eq!(&context.encrypt(&[0; 4]).unwrap()[..], &[0x55; 4]);
}

#[test]
fn set_key_replaces_schedule() {
    let mut context = CipherContext::<XorCipher>::with_key(&[0x01]).unwrap();
    let before = context.encrypt(&[0; 4]).unwrap();
    context.set_key(&[0x02]).unwrap();
    assert_ne!(before, context.encrypt(&[0; 4]).unwrap());
}

#[test]
fn clear_forgets_key() {
    let mut context = CipherContext::<XorCipher>::with_key(&[0x01]).unwrap();
    context.clear();
    assert!(!context.is_initialized());
    assert!(context.cipher().is_err());
}

#[test]
fn stream_process() {
    let mut context = CipherContext::<XorCipher>::new();
    assert_eq!(context.transform(b"abc").unwrap_err(), SymmetricCipherError::NotInitialized);

    context.set_key(&[0x20]).unwrap();
    assert_eq!(context.transform(b"abc").unwrap(), b"ABC".to_vec());
    // the toy keystream advances after each call
    assert_eq!(context.keystream(2).unwrap(), vec![0x21, 0x21]);

    let mut output = [0u8; 2];
    assert_eq!(
        context.process(b"abc", &mut output).unwrap_err(),
        SymmetricCipherError::LengthMismatch { input: 3, output: 2 });
}

#[test]
fn debug_does_not_show_key() {
    let context = CipherContext::<XorCipher>::with_key(&[0x42]).unwrap();
    let text = format!("{:?}", context);
    assert_eq!(text, "CipherContext { algorithm: \"xor\", initialized: true }");
}

#[test]
fn error_messages() {
    assert_eq!(SymmetricCipherError::EmptyInput.to_string(), "invalid input data: empty buffer");
    assert_eq!(
        SymmetricCipherError::MisalignedInput { block_size: 8, length: 12 }.to_string(),
        "invalid input data: 12 bytes is not a multiple of the 8 byte block size");
    assert_eq!(
        SymmetricCipherError::InvalidIvLength { expected: 16, length: 8 }.to_string(),
        "invalid initialization vector length: 8 bytes, expected 16");
    assert_eq!(SymmetricCipherError::NotInitialized.to_string(), "no key has been set");
    assert_eq!(SymmetricCipherError::MissingIv.kind(), ErrorKind::InvalidArgument);
}

#[test]
fn reference_forwards_block_traits() {
    fn size_of<T: BlockEncryptor + BlockDecryptor>(algo: T) -> usize {
        BlockEncryptor::block_size(&algo)
    }
    let context = CipherContext::<XorCipher>::with_key(&[1]).unwrap();
    assert_eq!(size_of(&context), 4);
}
