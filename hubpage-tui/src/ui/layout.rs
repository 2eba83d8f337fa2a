use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Standard 3-section layout: header, main, footer
pub fn create_layout(area: Rect) -> Vec<Rect> {
    Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(1),
            Constraint::Length(3),
        ])
        .split(area)
        .to_vec()
}

/// Pager layout: header, user list, pagination controls, footer
pub fn create_pager_layout(area: Rect) -> Vec<Rect> {
    Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(1),    // Users
            Constraint::Length(3), // Pagination
            Constraint::Length(3), // Footer
        ])
        .split(area)
        .to_vec()
}

/// Box in the top right corner for notifications
pub fn notification_area(area: Rect, width: u16) -> Rect {
    let width = width.min(area.width);
    let height = 3.min(area.height);
    Rect::new(area.right() - width, area.y, width, height)
}
