//! Tests for app_state

use super::*;
use crate::matchup::MatchupRecord;
use crate::notification::NotificationLevel;
use crate::roster::RosterSets;
use crate::test_utils::test_helpers::{test_app, test_app_with, test_entries};

#[test]
fn test_app_initialization() {
    let t = test_app();

    assert_eq!(t.app.focus, Focus::HeroList);
    assert_eq!(t.app.selected, 0);
    assert!(!t.app.should_quit());
    assert!(!t.app.help_visible);
    assert_eq!(t.app.query(), "");
    assert_eq!(t.selected_name().as_deref(), Some("Anti-Mage"));
}

#[test]
fn test_startup_warning_is_shown() {
    let session = test_app().app.session;
    let mut app = App::new(session, Some("bad config (using defaults)".to_string()));

    let current = app.notification.current().unwrap();
    assert_eq!(current.level, NotificationLevel::Warning);
    assert!(current.message.contains("bad config"));
}

#[test]
fn test_move_selection_clamps() {
    let mut t = test_app();

    t.app.move_selection(-1);
    assert_eq!(t.app.selected, 0);

    t.app.move_selection(100);
    assert_eq!(t.app.selected, 3);
    assert_eq!(t.selected_name().as_deref(), Some("Pangolier"));
}

#[test]
fn test_pick_adds_selected_and_keeps_selection_in_range() {
    let mut t = test_app();
    t.app.move_selection(3);

    t.app.pick(Role::Radiant);

    assert_eq!(t.app.session.roster().members(Role::Radiant), &[120]);
    assert_eq!(t.app.selected, 2);
    assert_eq!(t.app.session.engine().visible_count(), 3);
}

#[test]
fn test_pick_on_full_team_notifies_and_changes_nothing() {
    let mut roster = RosterSets::new(1, 14);
    roster.add(5, Role::Radiant).unwrap();
    let mut t = test_app_with(test_entries(), roster);

    t.app.pick(Role::Radiant);

    assert_eq!(t.app.session.roster().members(Role::Radiant), &[5]);
    let current = t.app.notification.current().unwrap();
    assert_eq!(current.level, NotificationLevel::Warning);
    assert_eq!(current.message, "Radiant is full");
}

#[test]
fn test_pick_with_no_visible_entries_is_noop() {
    let mut t = test_app();
    t.app.search.insert_str("zzz");
    t.app.on_query_changed();

    t.app.pick(Role::Ban);

    assert!(t.app.session.roster().members(Role::Ban).is_empty());
}

#[test]
fn test_remove_at_cursor() {
    let mut t = test_app();
    t.app.pick(Role::Dire);
    t.app.pick(Role::Dire);
    assert_eq!(t.app.session.roster().members(Role::Dire), &[1, 2]);

    t.app.roster_cursor = RosterCursor {
        role: Role::Dire,
        index: 1,
    };
    t.app.remove_at_cursor();

    assert_eq!(t.app.session.roster().members(Role::Dire), &[1]);
    assert_eq!(t.app.roster_cursor.index, 0);
    assert!(t.app.session.engine().get(2).unwrap().visible);
}

#[test]
fn test_remove_at_empty_cursor_is_noop() {
    let mut t = test_app();
    t.app.roster_cursor = RosterCursor {
        role: Role::Ban,
        index: 0,
    };

    t.app.remove_at_cursor();

    assert!(t.app.notification.current().is_none());
}

#[test]
fn test_toggle_filter_resets_selection() {
    let mut t = test_app();
    t.app.move_selection(2);

    t.app.toggle_filter(Attribute::Intelligence);

    assert_eq!(t.app.selected, 0);
    assert_eq!(t.selected_name().as_deref(), Some("Crystal Maiden"));

    t.app.clear_filters();
    assert_eq!(t.app.session.engine().visible_count(), 4);
}

#[test]
fn test_switch_side_notifies() {
    let mut t = test_app();

    t.app.switch_side();

    assert_eq!(t.app.session.side(), crate::roster::Side::Dire);
    let current = t.app.notification.current().unwrap();
    assert_eq!(current.message, "Drafting as Dire");
}

#[test]
fn test_tick_applies_loaded_matchups() {
    let mut t = test_app();
    t.app.move_selection(2);
    t.app.pick(Role::Dire); // Crystal Maiden
    t.resolve(5, vec![MatchupRecord::new(2, 10, 4)]);

    t.app.tick();

    let axe = t.app.session.engine().get(2).unwrap();
    assert_eq!(axe.matchup.totals.to_string(), "+10.0% (6/10)");
    assert!(!axe.matchup.is_partial());
}

#[test]
fn test_tick_reports_failed_fetch() {
    let mut t = test_app();
    t.app.pick(Role::Dire); // Anti-Mage
    t.fail(1, "connection refused");

    t.app.tick();

    let current = t.app.notification.current().unwrap();
    assert_eq!(current.level, NotificationLevel::Error);
    assert!(current.message.contains("connection refused"));
}
