//! draftpick: hero draft helper with fuzzy search and live matchup statistics

pub mod app;
pub mod catalog;
pub mod config;
pub mod error;
pub mod fuzzy;
pub mod help;
pub mod listing;
pub mod matchup;
pub mod notification;
pub mod opendota;
pub mod roster;
pub mod session;
pub mod theme;
pub mod widgets;
