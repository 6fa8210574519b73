use std::cmp::Ordering;
use std::sync::Arc;

use super::filter::FilterState;
use crate::catalog::{Attribute, CatalogStore, Entry, EntryId};
use crate::error::DraftError;
use crate::fuzzy;
use crate::matchup::{Aggregate, MatchupCache, aggregate};

/// Score every listing holds while no query is active
pub const NEUTRAL_SCORE: u32 = 0;

/// Mutable ranking state wrapping one catalog entry
#[derive(Debug, Clone)]
pub struct Listing {
    pub entry: Arc<Entry>,
    /// Fuzzy score against the current query; `None` means no match
    pub score: Option<u32>,
    /// Whether the entry occupies either team or the ban list
    pub on_roster: bool,
    /// Result of the visibility predicate at the last recompute
    pub visible: bool,
    /// Matchup against the opposing roster; default while hidden
    pub matchup: Aggregate,
}

impl Listing {
    fn new(entry: Arc<Entry>) -> Self {
        Self {
            entry,
            score: Some(NEUTRAL_SCORE),
            on_roster: false,
            visible: true,
            matchup: Aggregate::default(),
        }
    }

    pub fn id(&self) -> EntryId {
        self.entry.id
    }

    pub fn attribute(&self) -> Attribute {
        self.entry.primary_attr
    }
}

/// Owns the listings and produces the ordered, visibility-flagged sequence
#[derive(Debug)]
pub struct ListingEngine {
    catalog: CatalogStore,
    listings: Vec<Listing>,
    query: String,
    filters: FilterState,
}

impl ListingEngine {
    pub fn new(catalog: CatalogStore) -> Self {
        let listings = catalog.iter().cloned().map(Listing::new).collect();
        let mut engine = Self {
            catalog,
            listings,
            query: String::new(),
            filters: FilterState::new(),
        };
        engine.reorder();
        engine
    }

    pub fn catalog(&self) -> &CatalogStore {
        &self.catalog
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn filters(&self) -> &FilterState {
        &self.filters
    }

    /// Rescore every listing against `query`
    ///
    /// An empty query resets every score to [`NEUTRAL_SCORE`].
    pub fn set_query(&mut self, query: &str) {
        self.query = query.to_string();

        for listing in &mut self.listings {
            listing.score = if query.is_empty() {
                Some(NEUTRAL_SCORE)
            } else {
                fuzzy::score(query, &listing.entry.name)
            };
        }
    }

    pub fn toggle_filter(&mut self, attr: Attribute) -> bool {
        self.filters.toggle(attr)
    }

    pub fn clear_filters(&mut self) {
        self.filters.clear();
    }

    /// Mark whether `id` occupies a roster set
    pub fn set_on_roster(&mut self, id: EntryId, on_roster: bool) -> Result<(), DraftError> {
        let listing = self
            .listings
            .iter_mut()
            .find(|listing| listing.entry.id == id)
            .ok_or(DraftError::UnknownEntry(id))?;
        listing.on_roster = on_roster;
        Ok(())
    }

    /// Visibility predicate for one listing under the current filters
    pub fn passes(&self, listing: &Listing) -> bool {
        is_visible(listing, &self.filters)
    }

    /// Recompute visibility, order and matchup totals
    ///
    /// Hidden listings form one trailing run. Visible listings are ordered by
    /// ascending score, then by display name. Matchups are recomputed for every
    /// visible listing against `opponents`.
    pub fn recompute(&mut self, cache: &MatchupCache, opponents: &[EntryId]) -> &[Listing] {
        self.reorder();

        let pending: Vec<EntryId> = opponents
            .iter()
            .copied()
            .filter(|id| cache.get(*id).is_none())
            .collect();
        if !pending.is_empty() {
            log::warn!(
                "Matchups not yet available for {:?}; totals cover {} of {} opponents",
                pending,
                opponents.len() - pending.len(),
                opponents.len()
            );
        }

        for listing in &mut self.listings {
            listing.matchup = if listing.visible {
                aggregate(cache, listing.entry.id, opponents)
            } else {
                Aggregate::default()
            };
        }

        &self.listings
    }

    fn reorder(&mut self) {
        let filters = self.filters;
        for listing in &mut self.listings {
            listing.visible = is_visible(listing, &filters);
        }
        self.listings.sort_by(compare_listings);
    }

    /// Every listing in current order, hidden ones last
    pub fn listings(&self) -> &[Listing] {
        &self.listings
    }

    pub fn visible(&self) -> impl Iterator<Item = &Listing> {
        self.listings.iter().take_while(|listing| listing.visible)
    }

    pub fn visible_count(&self) -> usize {
        self.visible().count()
    }

    pub fn get(&self, id: EntryId) -> Option<&Listing> {
        self.listings.iter().find(|listing| listing.entry.id == id)
    }
}

fn is_visible(listing: &Listing, filters: &FilterState) -> bool {
    !listing.on_roster && listing.score.is_some() && filters.passes(listing.attribute())
}

fn compare_listings(a: &Listing, b: &Listing) -> Ordering {
    match (a.visible, b.visible) {
        (true, false) => Ordering::Less,
        (false, true) => Ordering::Greater,
        (false, false) => Ordering::Equal,
        (true, true) => a
            .score
            .cmp(&b.score)
            .then_with(|| a.entry.name.cmp(&b.entry.name)),
    }
}

#[cfg(test)]
#[path = "listing_engine_tests.rs"]
mod listing_engine_tests;
