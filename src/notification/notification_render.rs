use ratatui::{
    Frame,
    layout::Rect,
    style::Style,
    text::Line,
    widgets::{Block, BorderType, Borders, Paragraph},
};
use unicode_width::UnicodeWidthStr;

use super::notification_state::{NotificationLevel, NotificationState};
use crate::theme;
use crate::widgets::popup;

/// Draw the current notification in the top-right corner of the frame
pub fn render_notification(frame: &mut Frame, state: &mut NotificationState) {
    let Some(notification) = state.current() else {
        return;
    };

    let color = match notification.level {
        NotificationLevel::Info => theme::notification::INFO,
        NotificationLevel::Warning => theme::notification::WARNING,
        NotificationLevel::Error => theme::notification::ERROR,
    };

    let frame_area = frame.area();
    let width = (notification.message.width() as u16 + 4).min(frame_area.width);
    let area = Rect {
        x: frame_area.width.saturating_sub(width + 1),
        y: 1.min(frame_area.height),
        width,
        height: 3.min(frame_area.height),
    };

    popup::clear_area(frame, area);

    let paragraph = Paragraph::new(Line::from(notification.message.as_str()))
        .style(Style::default().fg(color))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(color)),
        );

    frame.render_widget(paragraph, area);
}
