//! Notification module for draftpick
//!
//! Transient one-line messages shown over the top-right corner: full
//! rosters, failed fetches, config problems.

mod notification_render;
mod notification_state;

pub use notification_render::render_notification;
pub use notification_state::{Notification, NotificationLevel, NotificationState};
