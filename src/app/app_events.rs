use std::io;
use std::time::Duration;

use ratatui::crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use super::app_state::{App, Focus};
use crate::catalog::Attribute;
use crate::roster::Role;

/// Rows moved by PageUp/PageDown when the list has not been rendered yet
const DEFAULT_PAGE: usize = 10;

impl App {
    /// Wait up to `timeout` for one terminal event and apply it
    pub fn handle_events(&mut self, timeout: Duration) -> io::Result<()> {
        if !event::poll(timeout)? {
            return Ok(());
        }

        match event::read()? {
            // Check that it's a key press event to avoid duplicates
            Event::Key(key) if key.kind == KeyEventKind::Press => self.handle_key_event(key),
            Event::Paste(text) => self.handle_paste_event(text),
            _ => {}
        }
        Ok(())
    }

    /// Insert pasted text into the search box (first line only)
    pub fn handle_paste_event(&mut self, text: String) {
        let line = text.lines().next().unwrap_or("");
        if line.is_empty() {
            return;
        }
        self.focus = Focus::HeroList;
        self.search.insert_str(line);
        self.on_query_changed();
    }

    pub fn handle_key_event(&mut self, key: KeyEvent) {
        // Help popup blocks everything else while open
        if self.help_visible {
            if matches!(key.code, KeyCode::Esc | KeyCode::F(1) | KeyCode::Char('q')) {
                self.help_visible = false;
            }
            return;
        }

        if self.handle_global_keys(key) {
            return;
        }

        match self.focus {
            Focus::HeroList => self.handle_hero_list_key(key),
            Focus::Roster => self.handle_roster_key(key),
        }
    }

    /// Keys that work regardless of focus. Returns true if handled.
    fn handle_global_keys(&mut self, key: KeyEvent) -> bool {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        let alt = key.modifiers.contains(KeyModifiers::ALT);

        match key.code {
            KeyCode::Char('c') if ctrl => self.should_quit = true,
            KeyCode::Esc => self.should_quit = true,
            KeyCode::F(1) => self.help_visible = true,
            KeyCode::Tab | KeyCode::BackTab => {
                self.focus = match self.focus {
                    Focus::HeroList => Focus::Roster,
                    Focus::Roster => Focus::HeroList,
                };
                self.roster_cursor.clamp(self.session.roster());
            }
            KeyCode::Char('w') if ctrl => self.switch_side(),
            KeyCode::Char(c) if alt => match c.to_ascii_lowercase() {
                's' => self.toggle_filter(Attribute::Strength),
                'a' => self.toggle_filter(Attribute::Agility),
                'i' => self.toggle_filter(Attribute::Intelligence),
                'u' => self.toggle_filter(Attribute::Universal),
                'c' => self.clear_filters(),
                _ => return false,
            },
            _ => return false,
        }
        true
    }

    fn handle_hero_list_key(&mut self, key: KeyEvent) {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        let page = match self.list_viewport_height {
            0 => DEFAULT_PAGE,
            height => height as usize,
        };

        match key.code {
            KeyCode::Up => self.move_selection(-1),
            KeyCode::Down => self.move_selection(1),
            KeyCode::PageUp => self.move_selection(-(page as isize)),
            KeyCode::PageDown => self.move_selection(page as isize),
            KeyCode::Enter => {
                let own = self.session.side().own_role();
                self.pick(own);
            }
            KeyCode::Char('e') if ctrl => {
                let enemy = self.session.side().enemy_role();
                self.pick(enemy);
            }
            KeyCode::Char('b') if ctrl => self.pick(Role::Ban),
            // Ctrl+M / Ctrl+J would insert a newline into the single-line box
            KeyCode::Char('m' | 'j') if ctrl => {}
            _ => {
                if self.search.input(key) {
                    self.on_query_changed();
                }
            }
        }
    }

    fn handle_roster_key(&mut self, key: KeyEvent) {
        let roster = self.session.roster();
        match key.code {
            KeyCode::Left => self.roster_cursor.move_left(roster),
            KeyCode::Right => self.roster_cursor.move_right(roster),
            KeyCode::Up => self.roster_cursor.move_up(),
            KeyCode::Down => self.roster_cursor.move_down(roster),
            KeyCode::Delete | KeyCode::Backspace => self.remove_at_cursor(),
            _ => {}
        }
    }
}

#[cfg(test)]
#[path = "app_events_tests.rs"]
mod app_events_tests;
