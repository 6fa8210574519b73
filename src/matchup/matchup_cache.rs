use std::collections::HashMap;
use std::sync::mpsc::{Receiver, TryRecvError};

use tokio::sync::mpsc::UnboundedSender;

use super::matchup_record::MatchupRecord;
use super::worker::{MatchupRequest, MatchupResponse};
use crate::catalog::EntryId;
use crate::error::DraftError;

/// One hero's records keyed by opponent id
pub type MatchupTable = HashMap<EntryId, MatchupRecord>;

/// Load state of a single hero's statistics
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlotState {
    Absent,
    Loading,
    Loaded,
}

#[derive(Debug)]
enum Slot {
    Loading,
    Loaded(MatchupTable),
}

/// What a call to [`MatchupCache::poll`] drained
#[derive(Debug, Default)]
pub struct PollOutcome {
    /// Heroes whose statistics arrived
    pub loaded: Vec<EntryId>,
    /// Fetches that failed; those slots are absent again
    pub failed: Vec<DraftError>,
}

impl PollOutcome {
    /// Whether any slot changed state
    pub fn changed(&self) -> bool {
        !self.loaded.is_empty() || !self.failed.is_empty()
    }
}

/// Lazily populated per-hero matchup tables
///
/// Requests go out over `request_tx` to the worker; results come back on
/// `response_rx` and are applied by [`poll`](Self::poll). Everything here runs
/// on the UI thread, so a presence check is enough to keep fetches single-flight.
pub struct MatchupCache {
    slots: HashMap<EntryId, Slot>,
    request_tx: Option<UnboundedSender<MatchupRequest>>,
    response_rx: Option<Receiver<MatchupResponse>>,
}

impl Default for MatchupCache {
    fn default() -> Self {
        Self::detached()
    }
}

impl MatchupCache {
    pub fn new(
        request_tx: UnboundedSender<MatchupRequest>,
        response_rx: Receiver<MatchupResponse>,
    ) -> Self {
        Self {
            slots: HashMap::new(),
            request_tx: Some(request_tx),
            response_rx: Some(response_rx),
        }
    }

    /// A cache with no worker attached. Requests fail immediately.
    pub fn detached() -> Self {
        Self {
            slots: HashMap::new(),
            request_tx: None,
            response_rx: None,
        }
    }

    /// Issue a fetch for `id` unless one is loaded or in flight
    ///
    /// Returns whether a request was sent.
    pub fn ensure_loaded(&mut self, id: EntryId) -> bool {
        if self.slots.contains_key(&id) {
            return false;
        }

        let Some(tx) = &self.request_tx else {
            log::warn!("No matchup worker attached, cannot fetch hero {}", id);
            return false;
        };

        if tx.send(MatchupRequest::Fetch { id }).is_err() {
            log::warn!("Matchup worker has shut down, cannot fetch hero {}", id);
            return false;
        }

        log::debug!("Requested matchups for hero {}", id);
        self.slots.insert(id, Slot::Loading);
        true
    }

    /// Loaded table for `id`; `None` while absent or loading
    pub fn get(&self, id: EntryId) -> Option<&MatchupTable> {
        match self.slots.get(&id) {
            Some(Slot::Loaded(table)) => Some(table),
            _ => None,
        }
    }

    pub fn state(&self, id: EntryId) -> SlotState {
        match self.slots.get(&id) {
            None => SlotState::Absent,
            Some(Slot::Loading) => SlotState::Loading,
            Some(Slot::Loaded(_)) => SlotState::Loaded,
        }
    }

    /// Whether any fetch is still outstanding
    pub fn is_pending(&self) -> bool {
        self.slots.values().any(|slot| matches!(slot, Slot::Loading))
    }

    /// Drain every response the worker has produced so far without blocking
    pub fn poll(&mut self) -> PollOutcome {
        let mut outcome = PollOutcome::default();

        loop {
            let response = match &self.response_rx {
                Some(rx) => rx.try_recv(),
                None => break,
            };

            match response {
                Ok(MatchupResponse::Loaded { id, records }) => {
                    if self.store(id, records) {
                        outcome.loaded.push(id);
                    }
                }
                Ok(MatchupResponse::Failed { id, error }) => {
                    log::warn!("Matchup fetch for hero {} failed: {}", id, error);
                    if matches!(self.slots.get(&id), Some(Slot::Loading)) {
                        self.slots.remove(&id);
                    }
                    outcome.failed.push(match error {
                        DraftError::MatchupUnavailable { .. } => error,
                        other => DraftError::MatchupUnavailable {
                            id,
                            reason: other.to_string(),
                        },
                    });
                }
                Err(TryRecvError::Empty) => break,
                Err(TryRecvError::Disconnected) => {
                    log::debug!("Matchup worker channel closed");
                    self.response_rx = None;
                    break;
                }
            }
        }

        outcome
    }

    /// Store a fetched table. A hero already loaded keeps its first table.
    fn store(&mut self, id: EntryId, records: Vec<MatchupRecord>) -> bool {
        if matches!(self.slots.get(&id), Some(Slot::Loaded(_))) {
            log::debug!("Ignoring duplicate matchups for hero {}", id);
            return false;
        }

        let (valid, invalid): (Vec<_>, Vec<_>) =
            records.into_iter().partition(MatchupRecord::is_valid);
        if !invalid.is_empty() {
            log::warn!(
                "Dropped {} matchup records for hero {} with more wins than games",
                invalid.len(),
                id
            );
        }

        let table: MatchupTable = valid
            .into_iter()
            .map(|record| (record.opponent, record))
            .collect();

        log::debug!("Loaded {} matchups for hero {}", table.len(), id);
        self.slots.insert(id, Slot::Loaded(table));
        true
    }
}

#[cfg(test)]
#[path = "matchup_cache_tests.rs"]
mod matchup_cache_tests;
