// src/db/profile_db_conn.rs
use std::path::Path;

use rusqlite::{Connection, OpenFlags};

use crate::error::MigrateError;
use crate::Result;

/// Open an existing profile database read-write; never creates one
pub fn open_profile_db(db_path: &Path) -> Result<Connection> {
    if !db_path.is_file() {
        return Err(MigrateError::DatabaseMissing(db_path.to_path_buf()));
    }

    let conn = Connection::open_with_flags(
        db_path,
        OpenFlags::SQLITE_OPEN_READ_WRITE
            | OpenFlags::SQLITE_OPEN_URI
            | OpenFlags::SQLITE_OPEN_NO_MUTEX,
    )?;

    // a running browser holds short locks
    conn.busy_timeout(std::time::Duration::from_secs(5))?;

    Ok(conn)
}
