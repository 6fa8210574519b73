//! OpenDota API client
//!
//! Serves both the hero catalog (`/heroStats`) and per-hero matchups
//! (`/heroes/{id}/matchups`).

use std::time::Duration;

use serde::de::DeserializeOwned;

use crate::catalog::{CatalogSource, Entry, EntryId};
use crate::error::DraftError;
use crate::matchup::{MatchupRecord, MatchupSource};

pub const DEFAULT_API_URL: &str = "https://api.opendota.com/api";

#[derive(Debug, Clone)]
pub struct OpenDotaClient {
    client: reqwest::Client,
    base_url: String,
}

impl OpenDotaClient {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, DraftError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .user_agent(concat!("draftpick/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| DraftError::Config(format!("HTTP client: {}", e)))?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn hero_stats_url(&self) -> String {
        format!("{}/heroStats", self.base_url)
    }

    pub fn matchups_url(&self, id: EntryId) -> String {
        format!("{}/heroes/{}/matchups", self.base_url, id)
    }

    async fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T, String> {
        log::debug!("GET {}", url);

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| format!("Network error: {}", e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(format!("HTTP {}", status));
        }

        response
            .json::<T>()
            .await
            .map_err(|e| format!("Parse error: {}", e))
    }
}

impl CatalogSource for OpenDotaClient {
    async fn fetch_catalog(&self) -> Result<Vec<Entry>, DraftError> {
        self.get_json(&self.hero_stats_url())
            .await
            .map_err(DraftError::CatalogUnavailable)
    }
}

impl MatchupSource for OpenDotaClient {
    async fn fetch_matchups(&self, id: EntryId) -> Result<Vec<MatchupRecord>, DraftError> {
        self.get_json(&self.matchups_url(id))
            .await
            .map_err(|reason| DraftError::MatchupUnavailable { id, reason })
    }
}

#[cfg(test)]
#[path = "opendota_tests.rs"]
mod opendota_tests;
