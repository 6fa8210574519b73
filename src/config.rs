//! Configuration loading
//!
//! Reads `~/.config/draftpick/config.toml`. Every field has a default, so a
//! missing file is not an error; an invalid one falls back to defaults with a
//! warning for the UI to show.

mod loader;
mod types;

pub use loader::{ConfigResult, config_path, load_config, load_config_from_path, parse_config};
pub use types::{ApiConfig, Config, DraftConfig, MAX_BAN_LIMIT, MAX_TEAM_SIZE};
