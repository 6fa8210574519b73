//! Draft session
//!
//! Ties the listing engine, the roster sets and the matchup cache together.
//! Every public mutation finishes all of its state changes before the single
//! recompute at its end, so callers never observe an intermediate state.

use crate::catalog::{Attribute, EntryId};
use crate::error::DraftError;
use crate::listing::ListingEngine;
use crate::matchup::{MatchupCache, PollOutcome};
use crate::roster::{Role, RosterSets, Side};

pub struct DraftSession {
    engine: ListingEngine,
    roster: RosterSets,
    cache: MatchupCache,
    side: Side,
}

impl DraftSession {
    /// Build a session. Any heroes already in `roster` are flagged on the listings.
    pub fn new(
        mut engine: ListingEngine,
        roster: RosterSets,
        cache: MatchupCache,
        side: Side,
    ) -> Result<Self, DraftError> {
        for id in roster.all_members() {
            engine.set_on_roster(id, true)?;
        }

        let mut session = Self {
            engine,
            roster,
            cache,
            side,
        };
        session.refresh();
        Ok(session)
    }

    pub fn engine(&self) -> &ListingEngine {
        &self.engine
    }

    pub fn roster(&self) -> &RosterSets {
        &self.roster
    }

    pub fn cache(&self) -> &MatchupCache {
        &self.cache
    }

    pub fn side(&self) -> Side {
        self.side
    }

    /// Heroes on the team the user is drafting against
    pub fn opponents(&self) -> &[EntryId] {
        self.roster.members(self.side.enemy_role())
    }

    pub fn set_query(&mut self, query: &str) {
        self.engine.set_query(query);
        self.refresh();
    }

    pub fn toggle_filter(&mut self, attr: Attribute) -> bool {
        let active = self.engine.toggle_filter(attr);
        self.refresh();
        active
    }

    pub fn clear_filters(&mut self) {
        self.engine.clear_filters();
        self.refresh();
    }

    /// Put `id` into `role`
    ///
    /// Capacity is the caller's concern. Adding to the opposing team starts
    /// loading that hero's matchups.
    pub fn add(&mut self, id: EntryId, role: Role) -> Result<(), DraftError> {
        self.engine.catalog().require(id)?;
        self.roster.add(id, role)?;
        self.engine.set_on_roster(id, true)?;

        if role == self.side.enemy_role() {
            self.cache.ensure_loaded(id);
        }

        self.refresh();
        Ok(())
    }

    /// Take `id` off whichever roster set holds it
    ///
    /// Returns the role it held, or `None` if it was not rostered. Loaded
    /// matchups stay cached.
    pub fn remove(&mut self, id: EntryId) -> Result<Option<Role>, DraftError> {
        self.engine.catalog().require(id)?;

        let Some(role) = self.roster.remove(id) else {
            return Ok(None);
        };
        self.engine.set_on_roster(id, false)?;

        self.refresh();
        Ok(Some(role))
    }

    /// Draft for the other team; its opponents become the new matchup basis
    pub fn switch_side(&mut self) -> Side {
        self.side = self.side.flipped();
        log::debug!("Now drafting as {:?}", self.side);
        self.refresh();
        self.side
    }

    /// Apply resolved fetches and recompute if anything changed
    pub fn poll_matchups(&mut self) -> PollOutcome {
        let outcome = self.cache.poll();
        if outcome.changed() {
            self.recompute();
        }
        outcome
    }

    /// Request any missing opponent statistics, then recompute
    ///
    /// A failed fetch leaves its slot absent, so the next user action
    /// requests it again. Poll-driven recomputes never issue requests.
    fn refresh(&mut self) {
        for &id in self.roster.members(self.side.enemy_role()) {
            self.cache.ensure_loaded(id);
        }
        self.recompute();
    }

    fn recompute(&mut self) {
        self.engine
            .recompute(&self.cache, self.roster.members(self.side.enemy_role()));
    }
}

#[cfg(test)]
#[path = "session_tests.rs"]
mod session_tests;
