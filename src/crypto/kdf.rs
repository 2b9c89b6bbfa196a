// src/crypto/kdf.rs
//! PBKDF2-HMAC-SHA1 key derivation for the two v10 policies

use pbkdf2::pbkdf2_hmac;
use sha1::Sha1;

use crate::aliases::{Credential, DerivedKey16};
use crate::consts::{
    DEST_KDF_ITERATIONS, DEST_PASSPHRASE, KDF_SALT, KEY_LEN, SOURCE_KDF_ITERATIONS,
};
use crate::error::CipherError;

use super::Result;

/// Derive a 16-byte key from `passphrase`
///
/// Pure function of its inputs. An empty salt or zero iterations is a caller bug
/// and is rejected before any hashing happens.
pub fn derive_key(passphrase: &[u8], salt: &[u8], iterations: u32) -> Result<DerivedKey16> {
    if salt.is_empty() {
        return Err(CipherError::InvalidKdfParams("salt must not be empty"));
    }
    if iterations == 0 {
        return Err(CipherError::InvalidKdfParams("iterations must be positive"));
    }

    let mut out = [0u8; KEY_LEN];
    pbkdf2_hmac::<Sha1>(passphrase, salt, iterations, &mut out);
    Ok(DerivedKey16::new(out))
}

/// macOS policy: Keychain credential, 1003 rounds
pub fn source_key(credential: &Credential) -> Result<DerivedKey16> {
    derive_key(
        credential.expose_secret().as_bytes(),
        KDF_SALT,
        SOURCE_KDF_ITERATIONS,
    )
}

/// Linux policy: fixed passphrase, a single round
pub fn destination_key() -> Result<DerivedKey16> {
    derive_key(DEST_PASSPHRASE.as_bytes(), KDF_SALT, DEST_KDF_ITERATIONS)
}
