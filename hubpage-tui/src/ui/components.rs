use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use crate::app::{Notification, NotificationLevel};
use crate::ui::layout;

pub fn render_header(title: &str, frame: &mut Frame, area: Rect) {
    let header = Paragraph::new(title)
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(header, area);
}

pub fn render_footer(text: &str, frame: &mut Frame, area: Rect) {
    let footer = Paragraph::new(text)
        .style(Style::default().fg(Color::Gray))
        .block(Block::default().borders(Borders::ALL).title("Help"));
    frame.render_widget(footer, area);
}

/// Bordered placeholder used for the loading and empty states.
pub fn render_message(title: &str, lines: Vec<Line>, color: Color, frame: &mut Frame, area: Rect) {
    let message = Paragraph::new(lines)
        .style(Style::default().fg(color))
        .block(Block::default().borders(Borders::ALL).title(title.to_string()))
        .wrap(Wrap { trim: true });
    frame.render_widget(message, area);
}

fn level_style(level: NotificationLevel) -> (Color, &'static str) {
    match level {
        NotificationLevel::Danger => (Color::Red, "✗"),
        NotificationLevel::Warning => (Color::Yellow, "!"),
        NotificationLevel::Success => (Color::Green, "✓"),
        NotificationLevel::Info => (Color::Cyan, "i"),
    }
}

pub fn render_notification(notification: &Notification, frame: &mut Frame, area: Rect) {
    let (color, icon) = level_style(notification.level);
    let width = u16::try_from(notification.message.chars().count())
        .unwrap_or(u16::MAX)
        .saturating_add(6);
    let area = layout::notification_area(area, width);

    let toast = Paragraph::new(Line::from(vec![
        Span::styled(
            format!("{icon} "),
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        ),
        Span::styled(&notification.message, Style::default().fg(Color::White)),
    ]))
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(color)),
    );

    frame.render_widget(Clear, area);
    frame.render_widget(toast, area);
}
