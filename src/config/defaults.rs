// src/config/defaults.rs
use std::path::PathBuf;

use crate::config::app::Paths;

pub const CONFIG_PATH_ENV: &str = "BSM_CONFIG";
pub const PROFILE_ROOT_ENV: &str = "BSM_PROFILE_ROOT";
pub const DEFAULT_CONFIG_FILE: &str = "migrate-config.toml";

pub const DEFAULT_BROWSER_DIR: &str = "google-chrome";
pub const DEFAULT_LOCAL_STATE: &str = "Local State";

pub fn default_profile_root() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from(".config"))
        .join(DEFAULT_BROWSER_DIR)
}

pub fn default_local_state() -> PathBuf {
    PathBuf::from(DEFAULT_LOCAL_STATE)
}

pub fn default_paths() -> Paths {
    Paths {
        profile_root: default_profile_root(),
        local_state: default_local_state(),
    }
}
