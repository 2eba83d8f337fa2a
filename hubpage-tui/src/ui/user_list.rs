use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState},
    Frame,
};

use crate::app::App;
use crate::ui::{components, layout, pagination};

const TITLE: &str = "Custom Pagination";
const HELP: &str = "←/→: Prev/Next | 1-9: Page | j/k: Select | Enter: Open profile | q: Quit";

pub fn render(app: &App, frame: &mut Frame) {
    let chunks = layout::create_pager_layout(frame.area());

    let title = if app.pager.is_empty() {
        TITLE.to_string()
    } else {
        format!(
            "{} - page {}/{} ({} users)",
            TITLE,
            app.pager.current_index() + 1,
            app.pager.page_count(),
            app.pager.total_items()
        )
    };
    components::render_header(&title, frame, chunks[0]);
    render_users(app, frame, chunks[1]);
    pagination::render(&app.pager.controls(), frame, chunks[2]);
    components::render_footer(HELP, frame, chunks[3]);
}

pub fn render_loading(frame: &mut Frame) {
    let chunks = layout::create_layout(frame.area());
    components::render_header(TITLE, frame, chunks[0]);
    components::render_message(
        "Users",
        vec![Line::from("Loading users…")],
        Color::Cyan,
        frame,
        chunks[1],
    );
    components::render_footer("q: Quit", frame, chunks[2]);
}

fn render_users(app: &App, frame: &mut Frame, area: Rect) {
    let users = app.pager.current_page();

    if users.is_empty() {
        components::render_message(
            "Users",
            vec![
                Line::from("No users to show."),
                Line::from(""),
                Line::from("The user list could not be loaded or came back empty."),
            ],
            Color::Yellow,
            frame,
            area,
        );
        return;
    }

    let list_items: Vec<ListItem> = users
        .iter()
        .enumerate()
        .map(|(i, user)| {
            let is_selected = i == app.selected_index;
            let style = if is_selected {
                Style::default()
                    .fg(Color::Black)
                    .bg(Color::Cyan)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::White)
            };

            let indicator = if is_selected { "> " } else { "  " };

            ListItem::new(vec![
                Line::from(vec![
                    Span::styled(indicator, style),
                    Span::styled(&user.login, style),
                ]),
                Line::from(vec![
                    Span::raw("    "),
                    Span::styled(&user.avatar_url, Style::default().fg(Color::DarkGray)),
                ]),
                Line::from(vec![
                    Span::raw("    View profile: "),
                    Span::styled(&user.profile_url, Style::default().fg(Color::Blue)),
                ]),
            ])
        })
        .collect();

    let list = List::new(list_items).block(Block::default().borders(Borders::ALL).title("Users"));

    // scrolls the list so the selected user is always on screen
    let mut state = ListState::default().with_selected(Some(app.selected_index));
    frame.render_stateful_widget(list, area, &mut state);
}
