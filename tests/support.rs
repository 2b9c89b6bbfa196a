// tests/support.rs
//! Test fixtures — profile databases seeded with source-scheme values

use std::fs;
use std::path::Path;

use browser_secret_migrate::aliases::Credential;
use browser_secret_migrate::{encrypt_value, MigrationKeys};
use rusqlite::types::Value;
use rusqlite::{params, Connection};

/// Base64-shaped, like a real Keychain "Safe Storage" secret
#[allow(dead_code)]
pub const TEST_CREDENTIAL: &str = "dGVzdC1zYWZlLXN0b3JhZ2Uta2V5MjAyNQ==";

#[allow(dead_code)]
pub fn test_keys() -> MigrationKeys {
    MigrationKeys::derive(&Credential::new(TEST_CREDENTIAL.to_owned())).expect("derive keys")
}

/// Encrypt under the source (macOS) key, the way the stored values arrive
#[allow(dead_code)]
pub fn source_value(keys: &MigrationKeys, plaintext: &str) -> Vec<u8> {
    encrypt_value(plaintext, keys.source())
}

#[allow(dead_code)]
pub fn dest_value(keys: &MigrationKeys, plaintext: &str) -> Vec<u8> {
    encrypt_value(plaintext, keys.dest())
}

/// Cookies-shaped table: one secret column among ordinary ones
#[allow(dead_code)]
pub fn create_cookies_db(path: &Path, encrypted_values: &[Vec<u8>]) -> Connection {
    let conn = Connection::open(path).expect("open cookies db");
    conn.execute_batch(
        r#"
        CREATE TABLE meta (key LONGVARCHAR NOT NULL UNIQUE PRIMARY KEY, value LONGVARCHAR);
        INSERT INTO meta (key, value) VALUES ('version', '21');

        CREATE TABLE cookies (
            creation_utc INTEGER NOT NULL,
            host_key TEXT NOT NULL,
            name TEXT NOT NULL,
            value TEXT NOT NULL,
            encrypted_value BLOB NOT NULL DEFAULT '',
            path TEXT NOT NULL,
            is_secure INTEGER NOT NULL
        );
        "#,
    )
    .expect("create cookies schema");

    for (i, encrypted) in encrypted_values.iter().enumerate() {
        conn.execute(
            "INSERT INTO cookies (creation_utc, host_key, name, value, encrypted_value, path, is_secure)
             VALUES (?1, ?2, ?3, '', ?4, '/', ?5)",
            params![
                13_300_000_000_000_000i64 + i as i64,
                format!(".example{i}.com"),
                format!("session{i}"),
                encrypted,
                (i % 2) as i64,
            ],
        )
        .expect("insert cookie");
    }

    conn
}

/// Logins-shaped table
#[allow(dead_code)]
pub fn create_logins_db(path: &Path, passwords: &[Vec<u8>]) -> Connection {
    let conn = Connection::open(path).expect("open logins db");
    conn.execute_batch(
        r#"
        CREATE TABLE logins (
            origin_url VARCHAR NOT NULL,
            username_value VARCHAR,
            password_value BLOB,
            date_created INTEGER NOT NULL
        );
        "#,
    )
    .expect("create logins schema");

    for (i, password) in passwords.iter().enumerate() {
        conn.execute(
            "INSERT INTO logins (origin_url, username_value, password_value, date_created)
             VALUES (?1, ?2, ?3, ?4)",
            params![
                format!("https://site{i}.example/login"),
                format!("user{i}"),
                password,
                1_700_000_000i64 + i as i64,
            ],
        )
        .expect("insert login");
    }

    conn
}

/// Every cell of `table`, in insertion order
#[allow(dead_code)]
pub fn dump_table(conn: &Connection, table: &str) -> Vec<Vec<Value>> {
    let mut stmt = conn
        .prepare(&format!("SELECT * FROM \"{table}\" ORDER BY rowid"))
        .expect("prepare dump");
    let width = stmt.column_count();
    stmt.query_map([], |row| {
        (0..width)
            .map(|i| row.get::<_, Value>(i))
            .collect::<rusqlite::Result<Vec<_>>>()
    })
    .expect("query dump")
    .collect::<rusqlite::Result<Vec<_>>>()
    .expect("collect dump")
}

#[allow(dead_code)]
pub fn column_values(conn: &Connection, table: &str, column: &str) -> Vec<Value> {
    let mut stmt = conn
        .prepare(&format!("SELECT \"{column}\" FROM \"{table}\" ORDER BY rowid"))
        .expect("prepare column");
    stmt.query_map([], |row| row.get::<_, Value>(0))
        .expect("query column")
        .collect::<rusqlite::Result<Vec<_>>>()
        .expect("collect column")
}

#[allow(dead_code)]
pub fn table_exists(conn: &Connection, table: &str) -> bool {
    conn.query_row(
        "SELECT COUNT(*) FROM sqlite_master WHERE type = 'table' AND name = ?1",
        [table],
        |row| row.get::<_, i64>(0),
    )
    .expect("query sqlite_master")
        > 0
}

/// Minimal `Local State` document listing `profiles`
#[allow(dead_code)]
pub fn write_local_state(profile_root: &Path, profiles: &[&str]) {
    let doc = serde_json::json!({
        "browser": { "enabled_labs_experiments": [] },
        "profile": {
            "last_used": profiles.first().copied().unwrap_or("Default"),
            "profiles_order": profiles,
        }
    });
    fs::write(
        profile_root.join("Local State"),
        serde_json::to_string_pretty(&doc).expect("serialize local state"),
    )
    .expect("write local state");
}
