use color_eyre::Result;
use crossterm::event::{
    self, Event, KeyCode, KeyEvent, KeyEventKind, MouseButton, MouseEvent, MouseEventKind,
};
use user_service::NavEvent;

use crate::app::{App, AppState};
use crate::ui::pagination;

pub trait EventHandler {
    fn handle_events(&mut self) -> Result<()>;
    fn handle_key_event(&mut self, key_event: KeyEvent);
    fn handle_mouse_event(&mut self, mouse_event: MouseEvent);
}

impl EventHandler for App {
    fn handle_events(&mut self) -> Result<()> {
        if event::poll(std::time::Duration::from_millis(100))? {
            match event::read()? {
                Event::Key(key_event) if key_event.kind == KeyEventKind::Press => {
                    self.handle_key_event(key_event)
                }
                Event::Mouse(mouse_event) => self.handle_mouse_event(mouse_event),
                _ => {}
            }
        }
        Ok(())
    }

    fn handle_key_event(&mut self, key_event: KeyEvent) {
        match self.state {
            AppState::Loading => {
                if matches!(key_event.code, KeyCode::Char('q') | KeyCode::Esc) {
                    self.quit();
                }
            }
            AppState::UserList => match key_event.code {
                KeyCode::Char('q') | KeyCode::Esc => self.quit(),
                KeyCode::Left | KeyCode::Char('h') | KeyCode::Char('p') => {
                    self.navigate(NavEvent::Prev)
                }
                KeyCode::Right | KeyCode::Char('l') | KeyCode::Char('n') => {
                    self.navigate(NavEvent::Next)
                }
                KeyCode::Char(c @ '1'..='9') => {
                    if let Some(digit) = c.to_digit(10) {
                        self.navigate(NavEvent::Goto(digit as usize - 1));
                    }
                }
                KeyCode::Up | KeyCode::Char('k') => self.move_up(),
                KeyCode::Down | KeyCode::Char('j') => self.move_down(),
                KeyCode::Enter | KeyCode::Char('o') => self.open_selected_profile(),
                _ => {}
            },
        }
    }

    fn handle_mouse_event(&mut self, mouse_event: MouseEvent) {
        if self.state != AppState::UserList {
            return;
        }
        if mouse_event.kind != MouseEventKind::Down(MouseButton::Left) {
            return;
        }

        let controls = self.pager.controls();
        let regions = pagination::hit_regions(&controls, self.pagination_area);
        if let Some(control) =
            pagination::control_at(&controls, &regions, mouse_event.column, mouse_event.row)
        {
            if !control.disabled {
                self.navigate(control.kind.event());
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crossterm::event::KeyModifiers;
    use user_service::ControlKind;

    use crate::app::tests::loaded_app;
    use crate::ui;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn click(column: u16, row: u16) -> MouseEvent {
        MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column,
            row,
            modifiers: KeyModifiers::NONE,
        }
    }

    async fn app_with_layout(n: usize) -> App {
        let mut app = loaded_app(n).await;
        app.pagination_area = ui::pagination_area(ratatui::layout::Rect::new(0, 0, 80, 24));
        app
    }

    fn region_of(app: &App, kind: ControlKind) -> ratatui::layout::Rect {
        let controls = app.pager.controls();
        let index = controls.iter().position(|c| c.kind == kind).unwrap();
        pagination::hit_regions(&controls, app.pagination_area)
            .into_iter()
            .find(|(i, _)| *i == index)
            .map(|(_, rect)| rect)
            .unwrap()
    }

    #[tokio::test]
    async fn test_arrow_keys_page() {
        let mut app = loaded_app(40).await;
        app.handle_key_event(key(KeyCode::Right));
        app.handle_key_event(key(KeyCode::Char('n')));
        assert_eq!(app.pager.current_index(), 2);
        app.handle_key_event(key(KeyCode::Left));
        assert_eq!(app.pager.current_index(), 1);
    }

    #[tokio::test]
    async fn test_digit_keys_goto() {
        let mut app = loaded_app(40).await;
        app.handle_key_event(key(KeyCode::Char('4')));
        assert_eq!(app.pager.current_index(), 3);
        app.handle_key_event(key(KeyCode::Char('9')));
        assert_eq!(app.pager.current_index(), 3);
    }

    #[tokio::test]
    async fn test_quit_keys() {
        let mut app = loaded_app(5).await;
        app.handle_key_event(key(KeyCode::Char('q')));
        assert!(app.should_quit);
    }

    #[tokio::test]
    async fn test_click_numbered_control() {
        let mut app = app_with_layout(40).await;
        let rect = region_of(&app, ControlKind::Page(2));

        app.handle_mouse_event(click(rect.x + 1, rect.y));

        assert_eq!(app.pager.current_index(), 2);
        let active: Vec<_> = app
            .pager
            .controls()
            .into_iter()
            .filter(|c| c.active)
            .map(|c| c.kind)
            .collect();
        assert_eq!(active, vec![ControlKind::Page(2)]);
    }

    #[tokio::test]
    async fn test_click_next_and_prev() {
        let mut app = app_with_layout(25).await;
        let next = region_of(&app, ControlKind::Next);
        let prev = region_of(&app, ControlKind::Prev);

        app.handle_mouse_event(click(next.x, next.y));
        app.handle_mouse_event(click(next.x, next.y));
        assert_eq!(app.pager.current_index(), 2);

        // Next is disabled on the last page
        app.handle_mouse_event(click(next.x, next.y));
        assert_eq!(app.pager.current_index(), 2);

        app.handle_mouse_event(click(prev.x, prev.y));
        assert_eq!(app.pager.current_index(), 1);
    }

    #[tokio::test]
    async fn test_click_outside_controls_does_nothing() {
        let mut app = app_with_layout(25).await;
        app.handle_mouse_event(click(0, 0));
        assert_eq!(app.pager.current_index(), 0);
    }

    #[tokio::test]
    async fn test_right_click_ignored() {
        let mut app = app_with_layout(25).await;
        let next = region_of(&app, ControlKind::Next);
        app.handle_mouse_event(MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Right),
            column: next.x,
            row: next.y,
            modifiers: KeyModifiers::NONE,
        });
        assert_eq!(app.pager.current_index(), 0);
    }
}
