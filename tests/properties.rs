use fcrypto::*;
use proptest::collection::vec;
use proptest::prelude::*;

/// Whole blocks of data: between one and eight blocks.
fn blocks(block_size: usize) -> impl Strategy<Value = Vec<u8>> {
    (1usize..=8).prop_flat_map(move |n| vec(any::<u8>(), n * block_size))
}

proptest! {
    #[test]
    fn blowfish_round_trip(key in vec(any::<u8>(), 1..=56), iv in vec(any::<u8>(), 8),
                           data in blocks(8)) {
        let context = BlowfishContext::with_key(&key).unwrap();
        let ecb = crypt_blowfish_ecb(&context, CryptMode::Encrypt, &data).unwrap();
        prop_assert_eq!(crypt_blowfish_ecb(&context, CryptMode::Decrypt, &ecb).unwrap(), data.clone());
        let cbc = crypt_blowfish_cbc(&context, CryptMode::Encrypt, &iv, &data).unwrap();
        prop_assert_eq!(crypt_blowfish_cbc(&context, CryptMode::Decrypt, &iv, &cbc).unwrap(), data);
    }

    #[test]
    fn serpent_round_trip(key_len in prop::sample::select(vec![16usize, 24, 32]),
                          seed in any::<u8>(), iv in vec(any::<u8>(), 16), data in blocks(16)) {
        let key: Vec<u8> = (0..key_len).map(|i| seed.wrapping_mul(i as u8 + 1)).collect();
        let context = SerpentContext::with_key(&key).unwrap();
        let ecb = crypt_serpent_ecb(&context, CryptMode::Encrypt, &data).unwrap();
        prop_assert_eq!(crypt_serpent_ecb(&context, CryptMode::Decrypt, &ecb).unwrap(), data.clone());
        let cbc = crypt_serpent_cbc(&context, CryptMode::Encrypt, &iv, &data).unwrap();
        prop_assert_eq!(crypt_serpent_cbc(&context, CryptMode::Decrypt, &iv, &cbc).unwrap(), data);
    }

    #[test]
    fn des3_round_trip(key_len in prop::sample::select(vec![8usize, 16, 24]),
                       key_bytes in vec(any::<u8>(), 24), iv in vec(any::<u8>(), 8),
                       data in blocks(8)) {
        let context = Des3Context::with_key(&key_bytes[..key_len]).unwrap();
        let cbc = crypt_des3_cbc(&context, CryptMode::Encrypt, &iv, &data).unwrap();
        prop_assert_eq!(crypt_des3_cbc(&context, CryptMode::Decrypt, &iv, &cbc).unwrap(), data);
    }

    #[test]
    fn rc4_round_trip(key in vec(any::<u8>(), 1..=256), data in vec(any::<u8>(), 0..512)) {
        let mut context = Rc4Context::with_key(&key).unwrap();
        let ciphertext = crypt_rc4(&mut context, &data).unwrap();
        context.set_key(&key).unwrap();
        prop_assert_eq!(crypt_rc4(&mut context, &ciphertext).unwrap(), data);
    }

    #[test]
    fn ecb_is_block_order_independent(key in vec(any::<u8>(), 16), data in blocks(16)) {
        let context = SerpentContext::with_key(&key).unwrap();
        let ciphertext = crypt_serpent_ecb(&context, CryptMode::Encrypt, &data).unwrap();

        let reversed: Vec<u8> = data.chunks(16).rev().flatten().cloned().collect();
        let reversed_ciphertext = crypt_serpent_ecb(&context, CryptMode::Encrypt, &reversed).unwrap();
        let expected: Vec<u8> = ciphertext.chunks(16).rev().flatten().cloned().collect();
        prop_assert_eq!(reversed_ciphertext, expected);
    }

    #[test]
    fn cbc_wrong_iv_corrupts_only_first_block(key in vec(any::<u8>(), 1..=56),
                                               iv in vec(any::<u8>(), 8),
                                               flip in 1u8..=255, data in blocks(8)) {
        let context = BlowfishContext::with_key(&key).unwrap();
        let ciphertext = crypt_blowfish_cbc(&context, CryptMode::Encrypt, &iv, &data).unwrap();

        let mut wrong_iv = iv.clone();
        wrong_iv[0] ^= flip;
        prop_assert_ne!(
            &crypt_blowfish_cbc(&context, CryptMode::Encrypt, &wrong_iv, &data).unwrap(),
            &ciphertext);

        let plaintext = crypt_blowfish_cbc(&context, CryptMode::Decrypt, &wrong_iv, &ciphertext).unwrap();
        prop_assert_ne!(&plaintext[..8], &data[..8]);
        prop_assert_eq!(&plaintext[8..], &data[8..]);
    }

    #[test]
    fn rekey_changes_ciphertext(key in vec(any::<u8>(), 8), flip in 1u8..=255,
                                block in vec(any::<u8>(), 8)) {
        let mut context = BlowfishContext::with_key(&key).unwrap();
        let first = context.encrypt(&block).unwrap();
        let mut other = key.clone();
        other[0] ^= flip;
        context.set_key(&other).unwrap();
        prop_assert_ne!(first, context.encrypt(&block).unwrap());
    }

    #[test]
    fn misaligned_data_is_rejected(len in 1usize..64) {
        prop_assume!(len % 8 != 0);
        let context = Des3Context::with_key(&[0x42; 24]).unwrap();
        let err = crypt_des3_ecb(&context, CryptMode::Encrypt, &vec![0u8; len]).unwrap_err();
        prop_assert_eq!(err, SymmetricCipherError::MisalignedInput { block_size: 8, length: len });
    }
}
