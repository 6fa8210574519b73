//! Head-to-head matchup statistics
//!
//! Statistics are fetched lazily, one hero at a time, by a background worker.
//! The [`MatchupCache`] lives on the UI thread: it issues at most one request
//! per hero and drains resolved responses when polled.

mod aggregate;
mod matchup_cache;
mod matchup_record;
pub mod worker;

pub use aggregate::{Aggregate, MatchupTotals, aggregate, win_rate_delta};
pub use matchup_cache::{MatchupCache, MatchupTable, PollOutcome, SlotState};
pub use matchup_record::MatchupRecord;
pub use worker::{MatchupRequest, MatchupResponse, MatchupSource, spawn_worker};
