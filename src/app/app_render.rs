use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
};
use unicode_width::UnicodeWidthStr;

use super::app_state::{App, Focus};
use crate::catalog::Attribute;
use crate::help::{help_line_render, help_popup_render};
use crate::listing::Listing;
use crate::matchup::Aggregate;
use crate::notification::render_notification;
use crate::theme;

/// Name column never grows past this many cells
const MAX_NAME_WIDTH: usize = 24;
const SIDE_PANEL_WIDTH: u16 = 36;

impl App {
    /// Render the UI
    pub fn render(&mut self, frame: &mut Frame) {
        let [main_area, search_area, filter_area, help_area] = Layout::vertical([
            Constraint::Min(5),
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .areas(frame.area());

        let [list_area, side_area] =
            Layout::horizontal([Constraint::Min(30), Constraint::Length(SIDE_PANEL_WIDTH)])
                .areas(main_area);

        self.render_hero_list(frame, list_area);
        self.render_side_panel(frame, side_area);
        self.render_search(frame, search_area);
        self.render_filter_bar(frame, filter_area);
        help_line_render::render_line(self, frame, help_area);

        render_notification(frame, &mut self.notification);

        if self.help_visible {
            help_popup_render::render_popup(frame);
        }
    }

    fn render_hero_list(&mut self, frame: &mut Frame, area: Rect) {
        let engine = self.session.engine();
        let visible = engine.visible_count();

        let title = format!(
            " Heroes ({}) | Drafting as {} ",
            visible,
            self.session.side().own_role().title()
        );
        let block = focus_block(title, self.focus == Focus::HeroList);
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let height = inner.height as usize;
        self.list_viewport_height = inner.height;
        if height == 0 {
            return;
        }

        let engine = self.session.engine();
        if visible == 0 {
            let empty = Paragraph::new("  No heroes match")
                .style(Style::default().fg(theme::listing::EMPTY));
            frame.render_widget(empty, inner);
            return;
        }

        let name_width = engine
            .visible()
            .map(|listing| listing.entry.name.width())
            .max()
            .unwrap_or(0)
            .min(MAX_NAME_WIDTH);

        // Keep the selection on screen
        let offset = self.selected.saturating_sub(height - 1);
        let lines: Vec<Line> = engine
            .visible()
            .enumerate()
            .skip(offset)
            .take(height)
            .map(|(index, listing)| {
                let line = listing_line(listing, name_width);
                if index == self.selected {
                    line.style(
                        Style::default()
                            .bg(theme::listing::SELECTED_BG)
                            .add_modifier(theme::listing::SELECTED_MODIFIER),
                    )
                } else {
                    line
                }
            })
            .collect();

        frame.render_widget(Paragraph::new(lines), inner);
    }

    fn render_search(&mut self, frame: &mut Frame, area: Rect) {
        let border_color = if self.focus == Focus::HeroList {
            theme::border::FOCUSED
        } else {
            theme::border::UNFOCUSED
        };

        self.search.set_block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .title(" Search ")
                .border_style(Style::default().fg(border_color)),
        );

        frame.render_widget(&self.search, area);
    }

    fn render_filter_bar(&self, frame: &mut Frame, area: Rect) {
        let filters = self.session.engine().filters();
        let mut spans = vec![Span::raw(" Filters: ")];

        for attr in Attribute::ALL {
            let style = if filters.is_active(attr) {
                Style::default()
                    .fg(theme::attribute_color(attr))
                    .add_modifier(Modifier::BOLD | Modifier::REVERSED)
            } else {
                Style::default().fg(theme::filter::INACTIVE)
            };
            spans.push(Span::styled(format!(" {} ", attr.label()), style));
            spans.push(Span::raw(" "));
        }

        frame.render_widget(Paragraph::new(Line::from(spans)), area);
    }
}

/// Bordered block whose border color follows focus
pub(super) fn focus_block(title: String, focused: bool) -> Block<'static> {
    let color = if focused {
        theme::border::FOCUSED
    } else {
        theme::border::UNFOCUSED
    };

    Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .title(title)
        .border_style(Style::default().fg(color))
}

fn listing_line(listing: &Listing, name_width: usize) -> Line<'static> {
    let name = &listing.entry.name;
    let padding = name_width.saturating_sub(name.width());
    let attr = listing.attribute();

    let mut spans = vec![
        Span::raw(format!(" {}{} ", name, " ".repeat(padding))),
        Span::styled(
            format!("[{}]", attr),
            Style::default().fg(theme::attribute_color(attr)),
        ),
    ];

    spans.push(Span::raw("  "));
    spans.extend(matchup_spans(&listing.matchup));

    Line::from(spans)
}

/// Colored `+x.x% (w/g)` text, with a trailing marker while opponents are pending
pub(super) fn matchup_spans(matchup: &Aggregate) -> Vec<Span<'static>> {
    let delta = matchup.totals.win_rate_delta();
    let color = if delta > 0.0 {
        theme::matchup::FAVORABLE
    } else if delta < 0.0 {
        theme::matchup::UNFAVORABLE
    } else {
        theme::matchup::EVEN
    };

    let mut spans = vec![Span::styled(
        matchup.totals.to_string(),
        Style::default().fg(color),
    )];
    if matchup.is_partial() {
        spans.push(Span::styled(
            " …",
            Style::default().fg(theme::listing::PARTIAL_MARKER),
        ));
    }
    spans
}

#[cfg(test)]
#[path = "app_render_tests.rs"]
mod app_render_tests;
