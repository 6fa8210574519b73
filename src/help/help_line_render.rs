//! Help line rendering (bottom of screen)

use ratatui::{Frame, layout::Rect, style::Style, widgets::Paragraph};

use crate::app::{App, Focus};
use crate::theme;

/// Render the help line with bindings for the focused pane
pub fn render_line(app: &App, frame: &mut Frame, area: Rect) {
    let help_text = match app.focus {
        Focus::HeroList => {
            " F1: Help | Enter: Pick | Ctrl+E: Enemy | Ctrl+B: Ban | Alt+S/A/I/U: Filter | Tab: Roster"
        }
        Focus::Roster => " F1: Help | ←/→/↑/↓: Navigate | Del: Remove | Tab: Heroes | Esc: Quit",
    };

    let help = Paragraph::new(help_text).style(Style::default().fg(theme::help::LINE));
    frame.render_widget(help, area);
}
