use thiserror::Error;

use crate::catalog::EntryId;
use crate::roster::Role;

/// Errors surfaced by the draft core and its data sources
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DraftError {
    /// The hero catalog could not be retrieved. Fatal at startup.
    #[error("Hero catalog unavailable: {0}")]
    CatalogUnavailable(String),

    /// Matchup statistics for one hero could not be retrieved
    #[error("Matchups for hero {id} unavailable: {reason}")]
    MatchupUnavailable { id: EntryId, reason: String },

    /// A lookup by id found no entry in the catalog
    #[error("Unknown hero id {0}")]
    UnknownEntry(EntryId),

    /// The hero already occupies a roster set
    #[error("Hero {id} is already on the {role} roster")]
    AlreadyRostered { id: EntryId, role: Role },

    #[error("Config error: {0}")]
    Config(String),

    #[error("Invalid JSON: {0}")]
    Json(String),

    #[error("IO error: {0}")]
    Io(String),
}

impl From<std::io::Error> for DraftError {
    fn from(err: std::io::Error) -> Self {
        DraftError::Io(err.to_string())
    }
}

impl From<serde_json::Error> for DraftError {
    fn from(err: serde_json::Error) -> Self {
        DraftError::Json(err.to_string())
    }
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod error_tests;
