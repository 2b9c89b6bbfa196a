// src/db/mod.rs
pub mod profile_db_conn;
pub mod reencrypt;

pub use profile_db_conn::open_profile_db;
pub use reencrypt::{reencrypt_table, RewriteReport};
