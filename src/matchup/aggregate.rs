use std::fmt;
use std::ops::AddAssign;

use super::matchup_cache::MatchupCache;
use crate::catalog::EntryId;

/// Summed games and wins
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MatchupTotals {
    pub games: u32,
    pub wins: u32,
}

impl AddAssign for MatchupTotals {
    fn add_assign(&mut self, other: Self) {
        self.games = self.games.saturating_add(other.games);
        self.wins = self.wins.saturating_add(other.wins);
    }
}

impl MatchupTotals {
    pub fn new(games: u32, wins: u32) -> Self {
        Self { games, wins }
    }

    /// Win rate relative to 50%, in percent with one decimal
    pub fn win_rate_delta(&self) -> f64 {
        win_rate_delta(self.wins, self.games)
    }
}

impl fmt::Display for MatchupTotals {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:+.1}% ({}/{})",
            self.win_rate_delta(),
            self.wins,
            self.games
        )
    }
}

/// `round(1000 * wins / games - 500) / 10`, with halves rounded up.
///
/// A 50% win rate is `0.0`. Zero games yields exactly `0.0`.
pub fn win_rate_delta(wins: u32, games: u32) -> f64 {
    if games == 0 {
        return 0.0;
    }
    let permille = 1000.0 * f64::from(wins) / f64::from(games) - 500.0;
    let rounded = (permille + 0.5).floor() / 10.0;
    // Keep "-0.0" out of the display
    if rounded == 0.0 { 0.0 } else { rounded }
}

/// Matchup of one candidate against the current opposing roster
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Aggregate {
    /// Candidate's totals over every opponent whose statistics are loaded
    pub totals: MatchupTotals,
    /// Opponents left out because their statistics have not arrived
    pub pending: Vec<EntryId>,
}

impl Aggregate {
    pub fn is_partial(&self) -> bool {
        !self.pending.is_empty()
    }
}

/// Sum `candidate`'s record against each opponent with loaded statistics
///
/// Opponents still loading (or failed) are listed in `pending` rather than
/// counted as zero. Recomputing over the same inputs yields the same totals.
pub fn aggregate(cache: &MatchupCache, candidate: EntryId, opponents: &[EntryId]) -> Aggregate {
    let mut result = Aggregate::default();

    for &opponent in opponents {
        match cache.get(opponent) {
            Some(table) => {
                if let Some(record) = table.get(&candidate) {
                    result.totals += record.opponent_totals();
                }
            }
            None => result.pending.push(opponent),
        }
    }

    result
}

#[cfg(test)]
#[path = "aggregate_tests.rs"]
mod aggregate_tests;
