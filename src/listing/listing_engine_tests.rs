//! Tests for listing/listing_engine

use super::*;
use crate::matchup::MatchupRecord;
use crate::test_utils::test_helpers::{loaded_cache, test_engine};
use insta::assert_snapshot;
use proptest::prelude::*;

fn names(engine: &ListingEngine) -> Vec<&str> {
    engine.visible().map(|l| l.entry.name.as_str()).collect()
}

fn recompute(engine: &mut ListingEngine) {
    engine.recompute(&MatchupCache::detached(), &[]);
}

#[test]
fn test_initial_order_is_alphabetical() {
    let engine = test_engine();
    assert_eq!(
        names(&engine),
        vec!["Anti-Mage", "Axe", "Crystal Maiden", "Pangolier"]
    );
    assert_eq!(engine.visible_count(), 4);
}

#[test]
fn test_query_hides_non_matches() {
    let mut engine = test_engine();
    engine.set_query("cm");
    recompute(&mut engine);

    assert_eq!(names(&engine), vec!["Crystal Maiden"]);
    assert_eq!(engine.get(2).unwrap().score, None);
}

#[test]
fn test_query_orders_by_score_then_name() {
    let mut engine = test_engine();
    engine.set_query("a");
    recompute(&mut engine);

    // "Anti-Mage" and "Axe" score 0, "Pangolier" 1, "Crystal Maiden" 5
    let ordered = engine
        .visible()
        .map(|l| format!("{} {}", l.score.unwrap(), l.entry.name))
        .collect::<Vec<_>>()
        .join("\n");
    assert_snapshot!(ordered, @r"
    0 Anti-Mage
    0 Axe
    1 Pangolier
    5 Crystal Maiden
    ");
}

#[test]
fn test_clearing_query_resets_scores() {
    let mut engine = test_engine();
    engine.set_query("zzz");
    recompute(&mut engine);
    assert_eq!(engine.visible_count(), 0);

    engine.set_query("");
    recompute(&mut engine);

    assert_eq!(engine.visible_count(), 4);
    assert!(
        engine
            .listings()
            .iter()
            .all(|l| l.score == Some(NEUTRAL_SCORE))
    );
}

#[test]
fn test_name_tiebreak_is_case_sensitive() {
    let mut engine = ListingEngine::new(CatalogStore::new(vec![
        Entry::new(1, "axe", Attribute::Strength),
        Entry::new(2, "Zeus", Attribute::Intelligence),
        Entry::new(3, "Abaddon", Attribute::Universal),
    ]));
    recompute(&mut engine);

    // Uppercase sorts before lowercase
    assert_eq!(names(&engine), vec!["Abaddon", "Zeus", "axe"]);
}

#[test]
fn test_filter_shows_only_active_attributes() {
    let mut engine = test_engine();
    engine.toggle_filter(Attribute::Strength);
    recompute(&mut engine);
    assert_eq!(names(&engine), vec!["Axe"]);

    engine.toggle_filter(Attribute::Universal);
    recompute(&mut engine);
    assert_eq!(names(&engine), vec!["Axe", "Pangolier"]);

    engine.clear_filters();
    recompute(&mut engine);
    assert_eq!(engine.visible_count(), 4);
}

#[test]
fn test_on_roster_hides_regardless_of_filters() {
    let mut engine = test_engine();
    engine.set_on_roster(2, true).unwrap();
    engine.toggle_filter(Attribute::Strength);
    recompute(&mut engine);

    assert!(names(&engine).is_empty());
    assert!(!engine.get(2).unwrap().visible);
}

#[test]
fn test_set_on_roster_unknown_id() {
    let mut engine = test_engine();
    assert_eq!(
        engine.set_on_roster(404, true).unwrap_err(),
        DraftError::UnknownEntry(404)
    );
}

#[test]
fn test_hidden_entries_trail() {
    let mut engine = test_engine();
    engine.set_on_roster(1, true).unwrap();
    engine.set_query("a");
    recompute(&mut engine);

    let flags: Vec<bool> = engine.listings().iter().map(|l| l.visible).collect();
    assert_eq!(flags, vec![true, true, true, false]);
    assert_eq!(engine.listings()[3].entry.name, "Anti-Mage");
}

#[test]
fn test_recompute_is_idempotent() {
    let mut engine = test_engine();
    engine.set_query("e");
    let cache = loaded_cache(vec![(9, vec![MatchupRecord::new(2, 10, 3)])]);

    let first: Vec<(EntryId, Aggregate)> = engine
        .recompute(&cache, &[9])
        .iter()
        .map(|l| (l.id(), l.matchup.clone()))
        .collect();
    let second: Vec<(EntryId, Aggregate)> = engine
        .recompute(&cache, &[9])
        .iter()
        .map(|l| (l.id(), l.matchup.clone()))
        .collect();

    assert_eq!(first, second);
}

#[test]
fn test_recompute_attaches_matchups_to_visible_only() {
    let mut engine = test_engine();
    engine.set_on_roster(5, true).unwrap();
    let cache = loaded_cache(vec![(
        9,
        vec![MatchupRecord::new(2, 10, 3), MatchupRecord::new(5, 8, 2)],
    )]);

    engine.recompute(&cache, &[9]);

    let axe = engine.get(2).unwrap();
    assert_eq!(axe.matchup.totals.games, 10);
    assert_eq!(axe.matchup.totals.wins, 7);
    assert_eq!(engine.get(5).unwrap().matchup, Aggregate::default());
}

#[test]
fn test_recompute_marks_pending_opponents() {
    let mut engine = test_engine();
    let cache = MatchupCache::detached();

    engine.recompute(&cache, &[9]);

    assert_eq!(engine.get(2).unwrap().matchup.pending, vec![9]);
}

// Feature: listing-engine, Property 1: Visibility predicate
// For any roster flags, query and filters, a listing is visible exactly when
// it is off-roster, matches the query, and passes the attribute filters.
// Feature: listing-engine, Property 2: Ordering
// Visible listings come first, ordered by (score, name); hidden ones trail.
proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    #[test]
    fn prop_visibility_and_ordering(
        query in "[a-z]{0,2}",
        rostered in prop::collection::vec(any::<bool>(), 4),
        toggles in prop::collection::vec(any::<bool>(), 4),
    ) {
        let mut engine = test_engine();
        let ids: Vec<EntryId> = engine.catalog().iter().map(|e| e.id).collect();
        for (id, on) in ids.iter().zip(&rostered) {
            engine.set_on_roster(*id, *on).unwrap();
        }
        for (attr, on) in Attribute::ALL.iter().zip(&toggles) {
            if *on {
                engine.toggle_filter(*attr);
            }
        }
        engine.set_query(&query);
        engine.recompute(&MatchupCache::detached(), &[]);

        let filters = *engine.filters();
        for listing in engine.listings() {
            let expected = !listing.on_roster
                && listing.score.is_some()
                && (!filters.any_active() || filters.is_active(listing.attribute()));
            prop_assert_eq!(listing.visible, expected);
        }

        let listings = engine.listings();
        let first_hidden = listings.iter().position(|l| !l.visible).unwrap_or(listings.len());
        prop_assert!(listings[first_hidden..].iter().all(|l| !l.visible));

        for pair in listings[..first_hidden].windows(2) {
            let (a, b) = (&pair[0], &pair[1]);
            prop_assert!(
                (a.score, &a.entry.name) <= (b.score, &b.entry.name),
                "{:?} before {:?}", a.entry.name, b.entry.name
            );
        }
    }
}
