use std::future::Future;
use std::path::{Path, PathBuf};

use super::entry::Entry;
use crate::error::DraftError;

/// One-shot provider of the full hero catalog
pub trait CatalogSource {
    fn fetch_catalog(&self) -> impl Future<Output = Result<Vec<Entry>, DraftError>> + Send;
}

/// Catalog read from a local JSON file in hero stats format
#[derive(Debug, Clone)]
pub struct FileCatalog {
    path: PathBuf,
}

impl FileCatalog {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl CatalogSource for FileCatalog {
    async fn fetch_catalog(&self) -> Result<Vec<Entry>, DraftError> {
        let contents = std::fs::read_to_string(&self.path).map_err(|e| {
            DraftError::CatalogUnavailable(format!("{}: {}", self.path.display(), e))
        })?;
        parse_catalog_json(&contents)
    }
}

/// Parse a hero stats array
pub fn parse_catalog_json(json: &str) -> Result<Vec<Entry>, DraftError> {
    serde_json::from_str(json).map_err(|e| DraftError::CatalogUnavailable(e.to_string()))
}

#[cfg(test)]
#[path = "source_tests.rs"]
mod source_tests;
