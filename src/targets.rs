// src/targets.rs
//! Known secret-bearing locations inside a profile directory

use std::fmt;

use serde::Deserialize;

/// One `(database file, table, column)` location holding v10 values
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Target {
    pub database: String,
    pub table: String,
    pub column: String,
}

impl Target {
    pub fn new(database: &str, table: &str, column: &str) -> Self {
        Self {
            database: database.to_owned(),
            table: table.to_owned(),
            column: column.to_owned(),
        }
    }
}

impl fmt::Display for Target {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{} in {:?}", self.table, self.column, self.database)
    }
}

/// Processed in this order, each one across every profile
pub const DEFAULT_TARGETS: &[(&str, &str, &str)] = &[
    ("Cookies", "cookies", "encrypted_value"),
    ("Safe Browsing Cookies", "cookies", "encrypted_value"),
    ("Extension Cookies", "cookies", "encrypted_value"),
    ("Login Data", "logins", "password_value"),
    ("Login Data For Account", "logins", "password_value"),
    ("Web Data", "credit_cards", "card_number_encrypted"),
    ("Web Data", "local_ibans", "value_encrypted"),
    ("Web Data", "local_stored_cvc", "value_encrypted"),
    ("Web Data", "server_stored_cvc", "value_encrypted"),
];

pub fn default_targets() -> Vec<Target> {
    DEFAULT_TARGETS
        .iter()
        .map(|(database, table, column)| Target::new(database, table, column))
        .collect()
}
