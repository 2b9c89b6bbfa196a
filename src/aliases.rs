// src/aliases.rs
//! Re-exports secure-gate's secret wrappers
//!
//! These are the canonical secret types used throughout browser-secret-migrate.

pub use secure_gate::{dynamic_alias, fixed_alias};

// Fixed-size secrets
fixed_alias!(DerivedKey16, 16); // AES-128 key for either v10 scheme

// Dynamic secrets
dynamic_alias!(Credential, String); // "Safe Storage" secret from the macOS Keychain
dynamic_alias!(PlainText, String); // decrypted value, alive only between decrypt and encrypt
