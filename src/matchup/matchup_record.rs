use serde::{Deserialize, Serialize};

use super::aggregate::MatchupTotals;
use crate::catalog::EntryId;

/// Games and wins of one hero against one specific opponent
///
/// The record lives in the table of the hero it describes; `opponent` is the
/// other hero. `wins` counts wins of the table's hero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchupRecord {
    #[serde(rename = "hero_id")]
    pub opponent: EntryId,
    pub games_played: u32,
    pub wins: u32,
}

impl MatchupRecord {
    pub fn new(opponent: EntryId, games_played: u32, wins: u32) -> Self {
        Self {
            opponent,
            games_played,
            wins,
        }
    }

    pub fn is_valid(&self) -> bool {
        self.wins <= self.games_played
    }

    /// The same games seen from `opponent`'s side
    pub fn opponent_totals(&self) -> MatchupTotals {
        MatchupTotals {
            games: self.games_played,
            wins: self.games_played.saturating_sub(self.wins),
        }
    }
}
