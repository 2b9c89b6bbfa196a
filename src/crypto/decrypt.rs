// src/crypto/decrypt.rs
use aes::cipher::{block_padding::Pkcs7, BlockDecryptMut, KeyIvInit};

use crate::aliases::{DerivedKey16, PlainText};
use crate::consts::{CBC_IV, SCHEME_TAG};
use crate::error::CipherError;

use super::{Aes128CbcDec, Result};

/// Decrypt a stored v10 value → plaintext (in-memory)
///
/// An empty value is the encoding of the empty string and never reaches the cipher.
pub fn decrypt_value(value: &[u8], key: &DerivedKey16) -> Result<PlainText> {
    if value.is_empty() {
        return Ok(PlainText::new(String::new()));
    }

    let Some(ciphertext) = value.strip_prefix(SCHEME_TAG.as_slice()) else {
        // no byte of an untagged value may reach the error text
        return Err(CipherError::Format { len: value.len() });
    };

    let plaintext = Aes128CbcDec::new(key.expose_secret().into(), &CBC_IV.into())
        .decrypt_padded_vec_mut::<Pkcs7>(ciphertext)
        .map_err(|_| CipherError::Padding)?;

    Ok(PlainText::new(String::from_utf8(plaintext)?))
}
