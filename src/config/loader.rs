use std::fs;
use std::path::{Path, PathBuf};

use super::types::Config;
use crate::error::DraftError;

const CONFIG_DIR: &str = "draftpick";
const CONFIG_FILE: &str = "config.toml";

/// Loaded configuration plus an optional warning for the UI
#[derive(Debug, Clone)]
pub struct ConfigResult {
    pub config: Config,
    pub warning: Option<String>,
}

pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|p| p.join(".config").join(CONFIG_DIR).join(CONFIG_FILE))
}

/// Load from `path_override`, or the default location when `None`
///
/// A missing file is only silent at the default location; a path given
/// explicitly must exist.
pub fn load_config(path_override: Option<&Path>) -> ConfigResult {
    match path_override {
        Some(path) => load(path, true),
        None => match config_path() {
            Some(path) => load(&path, false),
            None => ConfigResult {
                config: Config::default(),
                warning: None,
            },
        },
    }
}

/// Load an optional config file; a missing file yields defaults without a warning
pub fn load_config_from_path(path: &Path) -> ConfigResult {
    load(path, false)
}

fn load(path: &Path, required: bool) -> ConfigResult {
    let contents = match fs::read_to_string(path) {
        Ok(contents) => contents,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound && !required => {
            return ConfigResult {
                config: Config::default(),
                warning: None,
            };
        }
        Err(e) => {
            return ConfigResult {
                config: Config::default(),
                warning: Some(format!("Could not read {}: {}", path.display(), e)),
            };
        }
    };

    match parse_config(&contents) {
        Ok(config) => ConfigResult {
            config,
            warning: None,
        },
        Err(e) => {
            log::warn!("Ignoring config at {}: {}", path.display(), e);
            ConfigResult {
                config: Config::default(),
                warning: Some(format!("{} (using defaults)", e)),
            }
        }
    }
}

pub fn parse_config(content: &str) -> Result<Config, DraftError> {
    let config: Config =
        toml::from_str(content).map_err(|e| DraftError::Config(e.message().to_string()))?;
    config.validate()?;
    Ok(config)
}

#[cfg(test)]
#[path = "loader_tests.rs"]
mod loader_tests;
