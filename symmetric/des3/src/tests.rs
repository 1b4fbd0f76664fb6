use blockmodes::{crypt_cbc, crypt_ecb};
use crypto_symmetric::{CryptMode, ErrorKind, SymmetricCipherError};
use crypto_tests::{encrypt_decrypt, new_block_cipher_tests, BlockCipherTest};

use super::*;

// 1-4 are single DES (8 byte keys), 5 uses three keys, 6 uses two
const TESTS: [BlockCipherTest; 6] = new_block_cipher_tests!("1", "2", "3", "4", "5", "6");

#[test]
fn des3_vectors() {
    encrypt_decrypt::<Des3>(&TESTS);
}

#[test]
fn single_des_known_answer() {
    let state = Des3::new(&[0x01, 0x23, 0x45, 0x67, 0x89, 0xab, 0xcd, 0xef]).unwrap();
    assert_eq!(des_encrypt(u64::from_be_bytes(*b"Now is t"), &state.schedules[0]),
               0x3fa4_0e8a_984d_4815);
}

#[test]
fn parity_bits_are_ignored() {
    let key = [0x13, 0x34, 0x57, 0x79, 0x9b, 0xbc, 0xdf, 0xf1];
    let mut flipped = key;
    for byte in flipped.iter_mut() {
        *byte ^= 1;
    }
    let a = Des3Context::with_key(&key).unwrap();
    let b = Des3Context::with_key(&flipped).unwrap();
    assert_eq!(a.encrypt(b"parity!!").unwrap(), b.encrypt(b"parity!!").unwrap());
}

#[test]
fn two_key_form_matches_three_key_form() {
    let k1 = [0x01, 0x23, 0x45, 0x67, 0x89, 0xab, 0xcd, 0xef];
    let k2 = [0x23, 0x45, 0x67, 0x89, 0xab, 0xcd, 0xef, 0x01];
    let two: Vec<u8> = k1.iter().chain(k2.iter()).cloned().collect();
    let three: Vec<u8> = k1.iter().chain(k2.iter()).chain(k1.iter()).cloned().collect();

    let two = Des3Context::with_key(&two).unwrap();
    let three = Des3Context::with_key(&three).unwrap();
    assert_eq!(two.encrypt(b"The qufc").unwrap(), three.encrypt(b"The qufc").unwrap());
}

#[test]
fn key_lengths() {
    for &len in &KEY_LENGTHS {
        assert!(Des3::new(&vec![0x5au8; len]).is_ok());
    }
    for &len in &[0, 6, 9, 15, 22, 32] {
        let err = Des3::new(&vec![0u8; len]).err().unwrap();
        assert_eq!(err, SymmetricCipherError::InvalidKeyLength { algorithm: "des3", length: len });
        assert_eq!(err.kind(), ErrorKind::InvalidArgument);
    }
}

#[test]
fn modes_through_context() {
    let mut context = Des3Context::new();
    assert_eq!(
        crypt_ecb(&context, CryptMode::Encrypt, &[0; 16]).unwrap_err(),
        SymmetricCipherError::NotInitialized);

    context.set_key(b"24 byte triple des key!!").unwrap();
    let iv = *b"initvect";
    let plaintext = b"sixteen byte msg";
    let ciphertext = crypt_cbc(&context, CryptMode::Encrypt, &iv, plaintext).unwrap();
    assert_eq!(crypt_cbc(&context, CryptMode::Decrypt, &iv, &ciphertext).unwrap(),
               plaintext.to_vec());
    assert_eq!(
        crypt_cbc(&context, CryptMode::Decrypt, &iv[..4], &ciphertext).unwrap_err(),
        SymmetricCipherError::InvalidIvLength { expected: 8, length: 4 });
}

/// Inserts a zero byte in front of every 7 byte part.
fn with_zero_prefix(key: &[u8]) -> Vec<u8> {
    key.chunks(7).flat_map(|part| std::iter::once(0u8).chain(part.iter().cloned())).collect()
}

#[test]
fn seven_byte_parts_are_low_56_bits() {
    let key = [0x13, 0x34, 0x57, 0x79, 0x9b, 0xbc, 0xdf, 0xf1, 0x01, 0x23, 0x45, 0x67,
               0x89, 0xab, 0xcd, 0xef, 0x23, 0x45, 0x67, 0x89, 0xab];
    for &len in &[7, 14, 21] {
        let short = Des3::new(&key[..len]).unwrap();
        let long = Des3::new(&with_zero_prefix(&key[..len])).unwrap();
        assert_eq!(short.schedules, long.schedules, "{} byte key", len);
    }

    let single = Des3::new(&key[..7]).unwrap();
    assert_eq!(single.schedules[0], key_schedule(0x0013_3457_799b_bcdf));
    assert_eq!(single.schedules[1], single.schedules[0]);
    assert_eq!(single.schedules[2], single.schedules[0]);

    let two = Des3::new(&key[..14]).unwrap();
    assert_eq!(two.schedules[1], key_schedule(0x00f1_0123_4567_89ab));
    assert_eq!(two.schedules[2], two.schedules[0]);

    let three = Des3::new(&key).unwrap();
    assert_eq!(three.schedules[2], key_schedule(0x00cd_ef23_4567_89ab));
}

#[test]
fn seven_byte_key_through_context() {
    let short = Des3Context::with_key(b"7 bytes").unwrap();
    let long = Des3Context::with_key(b"\x007 bytes").unwrap();
    assert_eq!(short.encrypt(b"The qufc").unwrap(), long.encrypt(b"The qufc").unwrap());
}
