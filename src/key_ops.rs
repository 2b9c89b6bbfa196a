// src/key_ops.rs
//! Credential checks and the derived key pair used for a whole run

use std::fmt;

use base64::engine::general_purpose::STANDARD;
use base64::Engine;

use crate::aliases::{Credential, DerivedKey16};
use crate::crypto::{destination_key, source_key};
use crate::CipherError;

/// Source and destination keys, derived once and only ever read afterwards
pub struct MigrationKeys {
    source: DerivedKey16,
    dest: DerivedKey16,
}

impl MigrationKeys {
    /// Derive both policies' keys: the credential for the source, "peanuts" for the destination
    pub fn derive(credential: &Credential) -> Result<Self, CipherError> {
        Ok(Self {
            source: source_key(credential)?,
            dest: destination_key()?,
        })
    }

    pub fn from_keys(source: DerivedKey16, dest: DerivedKey16) -> Self {
        Self { source, dest }
    }

    pub fn source(&self) -> &DerivedKey16 {
        &self.source
    }

    pub fn dest(&self) -> &DerivedKey16 {
        &self.dest
    }
}

impl fmt::Debug for MigrationKeys {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MigrationKeys")
            .field("source", &"[REDACTED]")
            .field("dest", &"[REDACTED]")
            .finish()
    }
}

/// Advisory only: the Keychain secret is normally a base64 string
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CredentialFormatWarning {
    pub reason: String,
}

impl fmt::Display for CredentialFormatWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "credential doesn't look like a base64 encoded string, which it should be ({})",
            self.reason
        )
    }
}

/// Accept a credential exactly as given; only an empty one is refused
pub fn credential_from_input(input: String) -> Option<Credential> {
    (!input.is_empty()).then(|| Credential::new(input))
}

pub fn check_credential_format(credential: &Credential) -> Option<CredentialFormatWarning> {
    STANDARD
        .decode(credential.expose_secret().as_bytes())
        .err()
        .map(|err| CredentialFormatWarning {
            reason: err.to_string(),
        })
}
