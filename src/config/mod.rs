// src/config/mod.rs
//! Configuration system for browser-secret-migrate
//!
//! TOML file + env overrides, falling back to built-in defaults.

pub use app::{load, load_from, Config, Options, Paths};
pub use defaults::{CONFIG_PATH_ENV, DEFAULT_CONFIG_FILE, PROFILE_ROOT_ENV};

mod app;
mod defaults;
