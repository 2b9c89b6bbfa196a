// src/config/app.rs
use std::env;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use tracing::warn;

use super::defaults::*;
use crate::targets::{default_targets, Target};
use crate::Result;

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    #[serde(default = "default_paths")]
    pub paths: Paths,
    #[serde(default)]
    pub options: Options,
    /// Replaces the built-in target list when present
    #[serde(default)]
    pub targets: Option<Vec<Target>>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Paths {
    #[serde(default = "default_profile_root")]
    pub profile_root: PathBuf,
    /// Relative paths are resolved against `profile_root`
    #[serde(default = "default_local_state")]
    pub local_state: PathBuf,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Options {
    #[serde(default)]
    pub skip_missing_databases: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            paths: default_paths(),
            options: Options::default(),
            targets: None,
        }
    }
}

impl Config {
    pub fn local_state_path(&self) -> PathBuf {
        self.paths.profile_root.join(&self.paths.local_state)
    }

    pub fn targets(&self) -> Vec<Target> {
        self.targets.clone().unwrap_or_else(default_targets)
    }
}

/// Parse a config file, without env overrides
pub fn load_from(path: &Path) -> Result<Config> {
    let content = std::fs::read_to_string(path)?;
    Ok(toml::from_str(&content)?)
}

/// Load config at runtime — falls back to defaults if missing
pub fn load() -> Result<Config> {
    let config_path =
        env::var(CONFIG_PATH_ENV).unwrap_or_else(|_| DEFAULT_CONFIG_FILE.to_string());

    let mut conf = if Path::new(&config_path).exists() {
        load_from(Path::new(&config_path))?
    } else {
        warn!("{config_path} not found — using built-in defaults");
        Config::default()
    };

    if let Ok(root) = env::var(PROFILE_ROOT_ENV) {
        conf.paths.profile_root = PathBuf::from(root);
    }

    Ok(conf)
}
