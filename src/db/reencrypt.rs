// src/db/reencrypt.rs
//! Whole-table rewrite: source-scheme values in, destination-scheme values out
//!
//! The rewrite fills `<table>_temp` inside a single transaction. Only when every
//! row went through does the same transaction rename the original to
//! `<table>_backup` and the temp table into its place. Any failure rolls the
//! transaction back, so the original is never touched and the temp table is
//! left empty for inspection (the next run drops it).

use rusqlite::types::Value;
use rusqlite::{params_from_iter, Connection, Statement, TransactionBehavior};
use tracing::{debug, info, warn};

use crate::consts::{BACKUP_SUFFIX, ROW_PREVIEW_CELL_CHARS, ROW_PREVIEW_COLUMNS, TEMP_SUFFIX};
use crate::crypto::{decrypt_value, encrypt_value};
use crate::error::{CipherError, MigrateError};
use crate::key_ops::MigrationKeys;
use crate::Result;

/// Outcome of one committed table rewrite
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RewriteReport {
    pub table: String,
    pub backup_table: String,
    pub rows: usize,
}

/// Rows and column names of the target table at the moment the rewrite begins
struct Snapshot {
    columns: Vec<String>,
    rows: Vec<Vec<Value>>,
    secret_idx: usize,
}

/// Re-encrypt `column` of every row in `table` from the source key to the destination key
///
/// The new table is a structure-only copy (`CREATE TABLE .. AS SELECT .. WHERE 0`): it keeps
/// column names and declared types but not PRIMARY KEY, UNIQUE, NOT NULL, DEFAULT, CHECK or
/// foreign key constraints. Indexes and triggers stay attached to `<table>_backup`.
pub fn reencrypt_table(
    conn: &mut Connection,
    table: &str,
    column: &str,
    keys: &MigrationKeys,
) -> Result<RewriteReport> {
    // 1. Init
    if !table_exists(conn, table)? {
        let tables = list_tables(conn)?;
        warn!("cannot find table {table:?}; existing tables: {tables:?}");
        return Err(MigrateError::MissingTable {
            table: table.to_string(),
        });
    }
    let backup_table = format!("{table}{BACKUP_SUFFIX}");
    if table_exists(conn, &backup_table)? {
        return Err(MigrateError::BackupExists {
            table: table.to_string(),
            backup: backup_table,
        });
    }
    let temp_table = format!("{table}{TEMP_SUFFIX}");

    // 2. Snapshot — the temp table is created outside the rewrite transaction so it survives an abort
    conn.execute_batch(&format!(
        "DROP TABLE IF EXISTS {temp};
         CREATE TABLE {temp} AS SELECT * FROM {orig} WHERE 0;",
        temp = quote_ident(&temp_table),
        orig = quote_ident(table),
    ))?;

    // write lock from the first read until commit or rollback
    let tx = conn.transaction_with_behavior(TransactionBehavior::Immediate)?;
    let snapshot = read_snapshot(&tx, table, column)?;

    // 3. Rewriting
    let mut count = 0;
    {
        let mut stmt = tx.prepare(&insert_sql(&temp_table, &snapshot.columns))?;

        for (idx, mut row) in snapshot.rows.into_iter().enumerate() {
            let ordinal = idx + 1;
            debug!(
                "processing [#{ordinal}]: {table} {}",
                row_preview(&row, snapshot.secret_idx)
            );

            let stored = std::mem::replace(&mut row[snapshot.secret_idx], Value::Null);
            let fresh = reencrypt_cell(stored, keys).map_err(|source| MigrateError::Row {
                table: table.to_string(),
                ordinal,
                row: row_preview(&row, snapshot.secret_idx),
                source,
            })?;
            row[snapshot.secret_idx] = fresh;

            insert_row(&mut stmt, table, ordinal, &row, snapshot.secret_idx)?;
            count = ordinal;
        }
    }

    // 4. Commit — the only externally visible transition
    tx.execute_batch(&format!(
        "ALTER TABLE {orig} RENAME TO {backup};
         ALTER TABLE {temp} RENAME TO {orig};",
        orig = quote_ident(table),
        backup = quote_ident(&backup_table),
        temp = quote_ident(&temp_table),
    ))?;
    tx.commit()?;

    info!("successfully re-encrypted {count} rows in {table}");
    Ok(RewriteReport {
        table: table.to_string(),
        backup_table,
        rows: count,
    })
}

fn read_snapshot(conn: &Connection, table: &str, column: &str) -> Result<Snapshot> {
    let mut stmt = conn.prepare(&format!("SELECT * FROM {}", quote_ident(table)))?;
    let columns: Vec<String> = stmt
        .column_names()
        .into_iter()
        .map(String::from)
        .collect();

    let secret_idx = columns
        .iter()
        .position(|name| name == column)
        .ok_or_else(|| MigrateError::Schema {
            table: table.to_string(),
            column: column.to_string(),
            columns: columns.clone(),
        })?;

    let width = columns.len();
    let rows = stmt
        .query_map([], |row| {
            (0..width)
                .map(|i| row.get::<_, Value>(i))
                .collect::<rusqlite::Result<Vec<_>>>()
        })?
        .collect::<rusqlite::Result<Vec<_>>>()?;

    Ok(Snapshot {
        columns,
        rows,
        secret_idx,
    })
}

/// BLOB and TEXT cells hold encrypted bytes; NULL has nothing to re-encrypt
fn reencrypt_cell(cell: Value, keys: &MigrationKeys) -> std::result::Result<Value, CipherError> {
    let stored = match cell {
        Value::Null => return Ok(Value::Null),
        Value::Blob(bytes) => bytes,
        Value::Text(text) => text.into_bytes(),
        Value::Integer(_) | Value::Real(_) => return Err(CipherError::NumericCell),
    };

    let plaintext = decrypt_value(&stored, keys.source())?;
    Ok(Value::Blob(encrypt_value(
        plaintext.expose_secret(),
        keys.dest(),
    )))
}

/// Exactly one row must land in the temp table per source row
fn insert_row(
    stmt: &mut Statement<'_>,
    table: &str,
    ordinal: usize,
    row: &[Value],
    secret_idx: usize,
) -> Result<()> {
    let affected = stmt
        .execute(params_from_iter(row.iter()))
        .map_err(|source| MigrateError::Insert {
            table: table.to_string(),
            ordinal,
            row: row_preview(row, secret_idx),
            source,
        })?;
    if affected != 1 {
        return Err(MigrateError::Integrity {
            table: table.to_string(),
            ordinal,
            row: row_preview(row, secret_idx),
            affected,
        });
    }
    Ok(())
}

fn insert_sql(table: &str, columns: &[String]) -> String {
    let names = columns
        .iter()
        .map(|c| quote_ident(c))
        .collect::<Vec<_>>()
        .join(", ");
    let placeholders = (1..=columns.len())
        .map(|i| format!("?{i}"))
        .collect::<Vec<_>>()
        .join(", ");
    format!(
        "INSERT INTO {} ({names}) VALUES ({placeholders})",
        quote_ident(table)
    )
}

fn table_exists(conn: &Connection, name: &str) -> Result<bool> {
    let count: i64 = conn.query_row(
        "SELECT COUNT(*) FROM sqlite_master WHERE type = 'table' AND name = ?1",
        [name],
        |row| row.get(0),
    )?;
    Ok(count > 0)
}

fn list_tables(conn: &Connection) -> Result<Vec<String>> {
    let mut stmt = conn.prepare("SELECT name FROM sqlite_master WHERE type = 'table'")?;
    let names = stmt
        .query_map([], |row| row.get::<_, String>(0))?
        .collect::<rusqlite::Result<Vec<_>>>()?;
    Ok(names)
}

fn quote_ident(name: &str) -> String {
    format!("\"{}\"", name.replace('"', "\"\""))
}

/// First few non-secret cells, each cut short; the secret column is never rendered
fn row_preview(row: &[Value], secret_idx: usize) -> String {
    let cells = row
        .iter()
        .enumerate()
        .filter(|(i, _)| *i != secret_idx)
        .take(ROW_PREVIEW_COLUMNS)
        .map(|(_, cell)| render_cell(cell))
        .collect::<Vec<_>>();
    format!("({})", cells.join(", "))
}

fn render_cell(cell: &Value) -> String {
    match cell {
        Value::Null => "NULL".to_string(),
        Value::Integer(i) => i.to_string(),
        Value::Real(f) => f.to_string(),
        Value::Text(text) => {
            let mut shown: String = text.chars().take(ROW_PREVIEW_CELL_CHARS).collect();
            if shown.len() < text.len() {
                shown.push('…');
            }
            format!("{shown:?}")
        }
        Value::Blob(bytes) => {
            let limit = ROW_PREVIEW_CELL_CHARS / 2;
            let suffix = if bytes.len() > limit { "…" } else { "" };
            format!("x'{}{suffix}'", hex::encode(&bytes[..bytes.len().min(limit)]))
        }
    }
}
