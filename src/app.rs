//! Draft screen: owns the session plus all UI-only state

mod app_events;
mod app_render;
mod app_state;
mod roster_cursor;
mod roster_render;

pub use app_state::{App, Focus};
pub use roster_cursor::RosterCursor;
