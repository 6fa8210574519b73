use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Wrap},
};

use super::app_render::{focus_block, matchup_spans};
use super::app_state::{App, Focus};
use crate::roster::Role;
use crate::theme;

/// Height of the selected-hero detail panel, borders included
const DETAIL_HEIGHT: u16 = 9;

impl App {
    /// Radiant, Dire and Bans columns stacked above the detail panel
    pub(super) fn render_side_panel(&self, frame: &mut Frame, area: Rect) {
        let roster = self.session.roster();
        let team_height = u16::try_from(roster.capacity(Role::Radiant))
            .unwrap_or(u16::MAX)
            .saturating_add(2)
            .min(area.height);

        let [radiant_area, dire_area, ban_area, detail_area] = Layout::vertical([
            Constraint::Length(team_height),
            Constraint::Length(team_height),
            Constraint::Min(3),
            Constraint::Length(DETAIL_HEIGHT),
        ])
        .areas(area);

        self.render_roster_column(frame, radiant_area, Role::Radiant);
        self.render_roster_column(frame, dire_area, Role::Dire);
        self.render_roster_column(frame, ban_area, Role::Ban);
        self.render_detail(frame, detail_area);
    }

    fn render_roster_column(&self, frame: &mut Frame, area: Rect, role: Role) {
        let roster = self.session.roster();
        let members = roster.members(role);
        let focused = self.focus == Focus::Roster && self.roster_cursor.role == role;

        let marker = if role == self.session.side().own_role() {
            " (you)"
        } else {
            ""
        };
        let title = format!(
            " {}{} {}/{} ",
            role.title(),
            marker,
            members.len(),
            roster.capacity(role)
        );
        let block = focus_block(title, focused);

        let color = match role {
            Role::Radiant => theme::roster::RADIANT,
            Role::Dire => theme::roster::DIRE,
            Role::Ban => theme::roster::BAN,
        };

        let catalog = self.session.engine().catalog();
        let mut lines: Vec<Line> = members
            .iter()
            .enumerate()
            .map(|(index, id)| {
                let name = catalog
                    .get(*id)
                    .map(|entry| entry.name.clone())
                    .unwrap_or_else(|| format!("#{}", id));
                let mut style = Style::default().fg(color);
                if focused && index == self.roster_cursor.index {
                    style = style
                        .bg(theme::listing::SELECTED_BG)
                        .add_modifier(Modifier::BOLD);
                }
                Line::from(Span::styled(format!(" {}", name), style))
            })
            .collect();

        if members.is_empty() {
            lines.push(Line::from(Span::styled(
                " empty",
                Style::default().fg(theme::roster::EMPTY_SLOT),
            )));
        }

        frame.render_widget(Paragraph::new(lines).block(block), area);
    }

    fn render_detail(&self, frame: &mut Frame, area: Rect) {
        let block = focus_block(" Details ".to_string(), false);

        let Some(listing) = self.selected_listing() else {
            frame.render_widget(block, area);
            return;
        };
        let entry = &listing.entry;
        let attr = entry.primary_attr;

        let mut header = vec![
            Span::styled(
                entry.name.clone(),
                Style::default().add_modifier(Modifier::BOLD),
            ),
            Span::raw("  "),
            Span::styled(
                attr.label(),
                Style::default().fg(theme::attribute_color(attr)),
            ),
        ];
        if let Some(attack_type) = entry.attack_type {
            header.push(Span::raw(format!("  {}", attack_type)));
        }

        let mut lines = vec![Line::from(header)];
        if !entry.roles.is_empty() {
            lines.push(Line::from(entry.roles.join(", ")));
        }

        let growth: Vec<String> = entry
            .attribute_growth()
            .iter()
            .map(|(attr, base, gain)| format!("{} {} +{:.1}", attr, base, gain))
            .collect();
        lines.push(Line::from(growth.join("  ")));

        let mut matchup = vec![Span::raw("vs enemy: ")];
        matchup.extend(matchup_spans(&listing.matchup));
        lines.push(Line::from(matchup));

        if let Some(url) = entry.image_url() {
            lines.push(Line::from(Span::styled(
                url,
                Style::default().fg(theme::listing::EMPTY),
            )));
        }

        let paragraph = Paragraph::new(lines)
            .block(block)
            .wrap(Wrap { trim: true });
        frame.render_widget(paragraph, area);
    }
}
