// src/error.rs
//! Public error types for the entire crate

use std::path::PathBuf;

use thiserror::Error;

/// Failures of a single value going through the "v10" cipher
#[derive(Error, Debug)]
pub enum CipherError {
    #[error("invalid key derivation parameters: {0}")]
    InvalidKdfParams(&'static str),

    #[error("value of {len} bytes does not start with the v10 scheme tag")]
    Format { len: usize },

    #[error("value is stored as a number, not as v10 bytes")]
    NumericCell,

    #[error("invalid padding — wrong key or corrupted ciphertext")]
    Padding,

    #[error("decrypted value is not valid UTF-8: {0}")]
    Decode(#[from] std::string::FromUtf8Error),
}

#[derive(Error, Debug)]
pub enum MigrateError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Database error: {0}")]
    Sql(#[from] rusqlite::Error),

    #[error("Invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid config: {0}")]
    Config(#[from] toml::de::Error),

    #[error(transparent)]
    Cipher(#[from] CipherError),

    #[error("profile discovery failed: {0}")]
    ProfileDiscovery(String),

    #[error("database {0} does not exist")]
    DatabaseMissing(PathBuf),

    #[error("table {table:?} does not exist")]
    MissingTable { table: String },

    #[error("table {backup:?} already exists — {table:?} looks migrated already")]
    BackupExists { table: String, backup: String },

    #[error("cannot find column {column:?} in {table:?}, only got {columns:?}")]
    Schema {
        table: String,
        column: String,
        columns: Vec<String>,
    },

    #[error("[#{ordinal}] failed to re-encrypt value for {table} {row}: {source}")]
    Row {
        table: String,
        ordinal: usize,
        row: String,
        #[source]
        source: CipherError,
    },

    #[error("[#{ordinal}] failed to insert re-encrypted row for {table} {row}: {source}")]
    Insert {
        table: String,
        ordinal: usize,
        row: String,
        #[source]
        source: rusqlite::Error,
    },

    #[error("[#{ordinal}] insert added {affected} rows in {table} {row}")]
    Integrity {
        table: String,
        ordinal: usize,
        row: String,
        affected: usize,
    },

    #[error("[{profile}] {database}: {source}")]
    Target {
        profile: String,
        database: String,
        #[source]
        source: Box<MigrateError>,
    },
}
