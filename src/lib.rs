// src/lib.rs
//! browser-secret-migrate — move a browser profile's encrypted secrets between platforms
//!
//! Features:
//! - PBKDF2-HMAC-SHA1 key derivation for both "v10" schemes
//! - AES-128-CBC re-encryption of cookies, logins, cards, IBANs and CVCs
//! - All-or-nothing table rewrites with a `<table>_backup` left behind
//! - secure-gate wrappers for every key and credential

pub mod aliases;
pub mod config;
pub mod consts;
pub mod crypto;
pub mod db;
pub mod key_ops;
pub mod migrate;
pub mod profiles;
pub mod targets;

pub mod error;

// Re-export everything users need at the crate root
pub use aliases::{Credential, DerivedKey16};
pub use config::{load as load_config, Config};
pub use crypto::{decrypt_value, derive_key, encrypt_value};
pub use db::reencrypt::{reencrypt_table, RewriteReport};
pub use error::{CipherError, MigrateError};
pub use key_ops::{
    check_credential_format, credential_from_input, CredentialFormatWarning, MigrationKeys,
};
pub use migrate::{run_migration, MigrationContext, TableOutcome};
pub use profiles::discover_profiles;
pub use targets::{Target, DEFAULT_TARGETS};

pub type Result<T> = std::result::Result<T, MigrateError>;
