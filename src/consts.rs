// src/consts.rs
//! Shared constants — both "v10" schemes must match these bit-for-bit

/// Salt hardcoded in the browser's OSCrypt implementation
pub const KDF_SALT: &[u8] = b"saltysalt";

/// macOS derives its key from the Keychain secret with 1003 rounds
pub const SOURCE_KDF_ITERATIONS: u32 = 1003;

/// Linux without a keyring derives from a fixed passphrase with a single round
pub const DEST_KDF_ITERATIONS: u32 = 1;

/// Passphrase the Linux scheme uses when no keyring is available
pub const DEST_PASSPHRASE: &str = "peanuts";

/// Both schemes use AES-128
pub const KEY_LEN: usize = 16;

/// Prefix marking a versioned encrypted value
pub const SCHEME_TAG: &[u8; 3] = b"v10";

/// Fixed CBC initialization vector (16 spaces)
pub const CBC_IV: [u8; 16] = [b' '; 16];

/// Suffix of the scratch table a rewrite fills
pub const TEMP_SUFFIX: &str = "_temp";

/// Suffix the original table is renamed to after a successful rewrite
pub const BACKUP_SUFFIX: &str = "_backup";

/// How many non-secret columns a row diagnostic shows
pub const ROW_PREVIEW_COLUMNS: usize = 3;

/// Longest rendering of a single cell in a row diagnostic
pub const ROW_PREVIEW_CELL_CHARS: usize = 32;
