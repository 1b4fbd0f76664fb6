use blockmodes::{crypt_cbc, crypt_ecb};
use crypto_symmetric::{CryptMode, ErrorKind, SymmetricCipherError};
use crypto_tests::{encrypt_decrypt, new_block_cipher_tests, BlockCipherTest};

use super::*;

const EAY_TESTS: [BlockCipherTest; 34] = new_block_cipher_tests!(
    "1", "2", "3", "4", "5", "6", "7", "8", "9", "10", "11", "12", "13", "14",
    "15", "16", "17", "18", "19", "20", "21", "22", "23", "24", "25", "26",
    "27", "28", "29", "30", "31", "32", "33", "34");

#[test]
fn blowfish_eay_vectors() {
    encrypt_decrypt::<Blowfish>(&EAY_TESTS);
}

#[test]
fn encrypt_values_known_answer() {
    let state = Blowfish::new(b"TESTKEY").unwrap();
    assert_eq!(state.encrypt_values(1, 2), (0xdf333fd2, 0x30a71bb4));
    assert_eq!(state.decrypt_values(0xdf333fd2, 0x30a71bb4), (1, 2));
}

#[test]
fn ecb_decrypt_short_key() {
    let context = BlowfishContext::with_key(b"test1").unwrap();
    let plaintext = crypt_ecb(&context, CryptMode::Decrypt,
                              &[0x11, 0x71, 0x4d, 0x63, 0xe0, 0x6d, 0xd7, 0x9e]).unwrap();
    assert_eq!(plaintext, b"12345678".to_vec());
}

#[test]
fn cbc_known_answer() {
    let ciphertext = [
        0x7d, 0x00, 0x99, 0xd2, 0xab, 0x1c, 0xcd, 0x80, 0x79, 0xef, 0x0b, 0x0f, 0xf7, 0x32, 0x52,
        0x70, 0xbb, 0x5c, 0x68, 0x06, 0xff, 0x07, 0x9a, 0xcf, 0x45, 0x0d, 0x8d, 0x18, 0x90, 0x8e,
        0xfe, 0xa3,
    ];
    let plaintext = b"This is secret encrypted text!!!";
    let context = BlowfishContext::with_key(b"This is a key123").unwrap();

    let decrypted = crypt_cbc(&context, CryptMode::Decrypt, b"This IV!", &ciphertext).unwrap();
    assert_eq!(&decrypted[..], &plaintext[..]);

    let encrypted = crypt_cbc(&context, CryptMode::Encrypt, b"This IV!", plaintext).unwrap();
    assert_eq!(&encrypted[..], &ciphertext[..]);
}

#[test]
fn key_length_bounds() {
    assert!(Blowfish::new(&[0x42]).is_ok());
    assert!(Blowfish::new(&[0x42; 56]).is_ok());

    for &len in &[0, 57, 100] {
        let err = Blowfish::new(&vec![0u8; len]).err().unwrap();
        assert_eq!(err, SymmetricCipherError::InvalidKeyLength { algorithm: "blowfish", length: len });
        assert_eq!(err.kind(), ErrorKind::InvalidArgument);
    }
}

#[test]
fn context_requires_key() {
    let mut context = BlowfishContext::new();
    assert_eq!(context.encrypt(&[0; 8]).unwrap_err(), SymmetricCipherError::NotInitialized);

    context.set_key(b"key").unwrap();
    let block = context.encrypt(b"abcdefgh").unwrap();
    assert_eq!(&context.decrypt(&block).unwrap()[..], b"abcdefgh");
    assert_eq!(
        context.encrypt(&[0; 16]).unwrap_err(),
        SymmetricCipherError::InvalidBlockLength { expected: 8, length: 16 });
}

#[test]
fn rekey_changes_ciphertext() {
    let mut context = BlowfishContext::with_key(b"first key").unwrap();
    let first = context.encrypt(b"blockblk").unwrap();
    context.set_key(b"second key").unwrap();
    let second = context.encrypt(b"blockblk").unwrap();
    assert_ne!(first, second);

    // a rejected key must not disturb the installed schedule
    assert!(context.set_key(&[]).is_err());
    assert_eq!(second, context.encrypt(b"blockblk").unwrap());
}
