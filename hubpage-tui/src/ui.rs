pub mod components;
pub mod layout;
pub mod pagination;
pub mod user_list;

use ratatui::layout::Rect;
use ratatui::Frame;

use crate::app::{App, AppState};

pub fn render(app: &App, frame: &mut Frame) {
    match app.state {
        AppState::Loading => user_list::render_loading(frame),
        AppState::UserList => user_list::render(app, frame),
    }

    if let Some(notification) = &app.notification {
        components::render_notification(notification, frame, frame.area());
    }
}

/// Inner area of the pagination row for a frame of the given size.
pub fn pagination_area(area: Rect) -> Rect {
    pagination::inner(layout::create_pager_layout(area)[2])
}
