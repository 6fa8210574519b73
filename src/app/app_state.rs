use ratatui::style::Style;
use tui_textarea::TextArea;

use super::roster_cursor::RosterCursor;
use crate::catalog::Attribute;
use crate::listing::Listing;
use crate::notification::NotificationState;
use crate::roster::Role;
use crate::session::DraftSession;

/// Which pane has focus
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    HeroList,
    Roster,
}

/// Application state
pub struct App {
    pub session: DraftSession,
    pub search: TextArea<'static>,
    pub focus: Focus,
    /// Index into the visible listings
    pub selected: usize,
    pub roster_cursor: RosterCursor,
    pub help_visible: bool,
    pub notification: NotificationState,
    pub should_quit: bool,
    /// Rows available to the hero list at the last render
    pub list_viewport_height: u16,
}

impl App {
    /// Create the app around a ready session. `warning` is shown once, e.g. a
    /// config file that failed to parse.
    pub fn new(session: DraftSession, warning: Option<String>) -> Self {
        let mut search = TextArea::default();
        // Remove default underline from cursor line
        search.set_cursor_line_style(Style::default());
        search.set_placeholder_text("Search heroes...");

        let mut notification = NotificationState::new();
        if let Some(message) = warning {
            notification.show_warning(message);
        }

        Self {
            session,
            search,
            focus: Focus::HeroList,
            selected: 0,
            roster_cursor: RosterCursor::default(),
            help_visible: false,
            notification,
            should_quit: false,
            list_viewport_height: 0,
        }
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Current search text
    pub fn query(&self) -> &str {
        self.search.lines().first().map(String::as_str).unwrap_or("")
    }

    /// Push the search text into the session and go back to the top match
    pub fn on_query_changed(&mut self) {
        let query = self.query().to_string();
        self.session.set_query(&query);
        self.selected = 0;
    }

    pub fn selected_listing(&self) -> Option<&Listing> {
        self.session.engine().visible().nth(self.selected)
    }

    /// Move the hero list selection by `delta` rows, clamped to the visible run
    pub fn move_selection(&mut self, delta: isize) {
        let count = self.session.engine().visible_count();
        if count == 0 {
            self.selected = 0;
            return;
        }
        let target = self.selected as isize + delta;
        self.selected = target.clamp(0, count as isize - 1) as usize;
    }

    pub fn clamp_selection(&mut self) {
        let count = self.session.engine().visible_count();
        self.selected = self.selected.min(count.saturating_sub(1));
    }

    /// Put the selected hero into `role`
    pub fn pick(&mut self, role: Role) {
        let Some(listing) = self.selected_listing() else {
            return;
        };
        let id = listing.id();
        let name = listing.entry.name.clone();

        if !self.session.roster().has_room(role) {
            self.notification
                .show_warning(format!("{} is full", role.title()));
            return;
        }

        match self.session.add(id, role) {
            Ok(()) => {
                log::info!("Added {} to {}", name, role);
                self.clamp_selection();
            }
            Err(e) => self.notification.show_error(e.to_string()),
        }
    }

    /// Remove the hero under the roster cursor
    pub fn remove_at_cursor(&mut self) {
        let role = self.roster_cursor.role;
        let Some(&id) = self
            .session
            .roster()
            .members(role)
            .get(self.roster_cursor.index)
        else {
            return;
        };

        match self.session.remove(id) {
            Ok(removed) => {
                log::info!("Removed {} from {:?}", id, removed);
                self.roster_cursor.clamp(self.session.roster());
            }
            Err(e) => self.notification.show_error(e.to_string()),
        }
    }

    pub fn toggle_filter(&mut self, attr: Attribute) {
        self.session.toggle_filter(attr);
        self.selected = 0;
    }

    pub fn clear_filters(&mut self) {
        self.session.clear_filters();
        self.selected = 0;
    }

    pub fn switch_side(&mut self) {
        let side = self.session.switch_side();
        self.notification
            .show(format!("Drafting as {}", side.own_role().title()));
    }

    /// Apply finished matchup fetches. Called once per frame.
    pub fn tick(&mut self) {
        let outcome = self.session.poll_matchups();
        for error in &outcome.failed {
            self.notification.show_error(error.to_string());
        }
        if outcome.changed() {
            self.clamp_selection();
        }
    }
}

#[cfg(test)]
#[path = "app_state_tests.rs"]
mod app_state_tests;
