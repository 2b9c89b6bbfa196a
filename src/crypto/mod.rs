// src/crypto/mod.rs
//! Pure cryptographic operations — no I/O, no database
//!
//! All functions work exclusively on in-memory buffers.
mod decrypt;
mod encrypt;
mod kdf;

use aes::Aes128;

pub use decrypt::decrypt_value;
pub use encrypt::encrypt_value;
pub use kdf::{derive_key, destination_key, source_key};

pub type Result<T> = std::result::Result<T, crate::error::CipherError>;

type Aes128CbcEnc = cbc::Encryptor<Aes128>;
type Aes128CbcDec = cbc::Decryptor<Aes128>;
