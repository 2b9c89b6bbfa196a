// src/crypto/encrypt.rs
use aes::cipher::{block_padding::Pkcs7, BlockEncryptMut, KeyIvInit};

use crate::aliases::DerivedKey16;
use crate::consts::{CBC_IV, SCHEME_TAG};

use super::Aes128CbcEnc;

/// Encrypt plaintext → tagged v10 value (in-memory)
///
/// Mirrors [`decrypt_value`](super::decrypt_value): the empty string encodes to no bytes at all.
pub fn encrypt_value(plaintext: &str, key: &DerivedKey16) -> Vec<u8> {
    if plaintext.is_empty() {
        return Vec::new();
    }

    let ciphertext = Aes128CbcEnc::new(key.expose_secret().into(), &CBC_IV.into())
        .encrypt_padded_vec_mut::<Pkcs7>(plaintext.as_bytes());

    let mut out = Vec::with_capacity(SCHEME_TAG.len() + ciphertext.len());
    out.extend_from_slice(SCHEME_TAG);
    out.extend_from_slice(&ciphertext);
    out
}
