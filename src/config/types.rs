// Configuration type definitions

use std::time::Duration;

use serde::Deserialize;

use crate::error::DraftError;
use crate::opendota::DEFAULT_API_URL;
use crate::roster::{DEFAULT_BAN_LIMIT, DEFAULT_TEAM_SIZE, Side};

/// Largest team a config may ask for
pub const MAX_TEAM_SIZE: usize = 10;
/// Largest ban list a config may ask for
pub const MAX_BAN_LIMIT: usize = 30;

fn default_base_url() -> String {
    DEFAULT_API_URL.to_string()
}

fn default_timeout_secs() -> u64 {
    15
}

fn default_team_size() -> usize {
    DEFAULT_TEAM_SIZE
}

fn default_ban_limit() -> usize {
    DEFAULT_BAN_LIMIT
}

/// Stats provider section
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ApiConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for ApiConfig {
    fn default() -> Self {
        ApiConfig {
            base_url: default_base_url(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl ApiConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

/// Draft rules section
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct DraftConfig {
    #[serde(default)]
    pub drafting_as: Side,
    #[serde(default = "default_team_size")]
    pub team_size: usize,
    #[serde(default = "default_ban_limit")]
    pub ban_limit: usize,
}

impl Default for DraftConfig {
    fn default() -> Self {
        DraftConfig {
            drafting_as: Side::default(),
            team_size: default_team_size(),
            ban_limit: default_ban_limit(),
        }
    }
}

/// Root configuration structure
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub draft: DraftConfig,
}

impl Config {
    pub fn validate(&self) -> Result<(), DraftError> {
        if self.draft.team_size == 0 {
            return Err(DraftError::Config(
                "draft.team_size must be at least 1".to_string(),
            ));
        }
        if self.draft.team_size > MAX_TEAM_SIZE {
            return Err(DraftError::Config(format!(
                "draft.team_size must be at most {}",
                MAX_TEAM_SIZE
            )));
        }
        if self.draft.ban_limit > MAX_BAN_LIMIT {
            return Err(DraftError::Config(format!(
                "draft.ban_limit must be at most {}",
                MAX_BAN_LIMIT
            )));
        }
        if self.api.timeout_secs == 0 {
            return Err(DraftError::Config(
                "api.timeout_secs must be at least 1".to_string(),
            ));
        }
        if self.api.base_url.trim().is_empty() {
            return Err(DraftError::Config("api.base_url is empty".to_string()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    // Feature: config-system, Property 1: Valid side parsing
    // For any valid side value in a TOML config file, parsing the config should
    // extract and store that side without errors.
    proptest! {
        #![proptest_config(ProptestConfig::with_cases(100))]

        #[test]
        fn prop_valid_side_parsing(side in prop::sample::select(vec!["radiant", "dire"])) {
            let toml_content = format!(r#"
[draft]
drafting_as = "{}"
"#, side);

            let config: Result<Config, _> = toml::from_str(&toml_content);

            prop_assert!(config.is_ok(), "Failed to parse valid side: {}", side);

            let config = config.unwrap();

            let expected = match side {
                "radiant" => Side::Radiant,
                "dire" => Side::Dire,
                _ => unreachable!(),
            };

            prop_assert_eq!(config.draft.drafting_as, expected);
        }
    }

    // Feature: config-system, Property 2: Missing fields use defaults
    // For any TOML config file with missing optional fields, parsing should
    // succeed and use default values for all missing fields.
    proptest! {
        #![proptest_config(ProptestConfig::with_cases(100))]

        #[test]
        fn prop_missing_fields_use_defaults(
            include_draft_section in prop::bool::ANY,
            include_team_size in prop::bool::ANY
        ) {
            let toml_content = if !include_draft_section {
                String::new()
            } else if !include_team_size {
                "[draft]\n".to_string()
            } else {
                r#"
[draft]
team_size = 3
"#.to_string()
            };

            let config: Result<Config, _> = toml::from_str(&toml_content);

            prop_assert!(config.is_ok(), "Failed to parse config with missing fields");

            let config = config.unwrap();

            prop_assert_eq!(&config.api, &ApiConfig::default());
            prop_assert_eq!(config.draft.ban_limit, DEFAULT_BAN_LIMIT);
            if !include_draft_section || !include_team_size {
                prop_assert_eq!(config.draft.team_size, DEFAULT_TEAM_SIZE);
            } else {
                prop_assert_eq!(config.draft.team_size, 3);
            }
        }
    }

    #[test]
    fn test_default_config_is_valid() {
        assert!(Config::default().validate().is_ok());
    }

    #[test]
    fn test_zero_team_size_invalid() {
        let mut config = Config::default();
        config.draft.team_size = 0;
        assert!(matches!(config.validate(), Err(DraftError::Config(_))));
    }

    #[test]
    fn test_zero_timeout_invalid() {
        let mut config = Config::default();
        config.api.timeout_secs = 0;
        assert!(config.validate().is_err());
    }
}
