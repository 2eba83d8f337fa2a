use crate::events::EventHandler;
use crate::ui;

use color_eyre::Result;
use ratatui::layout::Rect;
use ratatui::DefaultTerminal;

use std::num::NonZeroUsize;
use std::time::{Duration, Instant};

use tracing::{debug, error, info, warn};
use user_service::{NavEvent, Pager, User, UserSource};

// =============================================================================
// Application States
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppState {
    /// Waiting for the user listing request to finish
    Loading,
    /// Paging through the fetched users
    UserList,
}

// =============================================================================
// Notifications
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationLevel {
    Danger,
    Warning,
    Success,
    Info,
}

#[derive(Debug, Clone)]
pub struct Notification {
    pub level: NotificationLevel,
    pub message: String,
    pub expires_at: Instant,
}

impl Notification {
    pub fn is_expired(&self, now: Instant) -> bool {
        now >= self.expires_at
    }
}

// =============================================================================
// Application
// =============================================================================

pub struct App {
    pub state: AppState,
    pub pager: Pager<User>,
    pub selected_index: usize,
    pub should_quit: bool,
    pub notification: Option<Notification>,

    /// Where the pagination row was last drawn; used for mouse hit-testing
    pub pagination_area: Rect,

    source: Box<dyn UserSource>,
    page_size: NonZeroUsize,
    notification_ttl: Duration,
}

impl App {
    pub fn new(
        source: Box<dyn UserSource>,
        page_size: NonZeroUsize,
        notification_ttl: Duration,
    ) -> Self {
        Self {
            state: AppState::Loading,
            pager: Pager::default(),
            selected_index: 0,
            should_quit: false,
            notification: None,
            pagination_area: Rect::default(),
            source,
            page_size,
            notification_ttl,
        }
    }

    pub async fn run(&mut self, mut terminal: DefaultTerminal) -> Result<()> {
        // Show the loading screen while the request is in flight
        self.draw(&mut terminal)?;
        self.load().await;

        while !self.should_quit {
            self.draw(&mut terminal)?;
            self.handle_events()?;
            self.expire_notification(Instant::now());
        }
        Ok(())
    }

    fn draw(&mut self, terminal: &mut DefaultTerminal) -> Result<()> {
        terminal.draw(|frame| {
            self.pagination_area = ui::pagination_area(frame.area());
            ui::render(self, frame);
        })?;
        Ok(())
    }

    // =========================================================================
    // Loading
    // =========================================================================

    /// Fetch the user list once and split it into pages.
    ///
    /// A failed request leaves the pager empty and raises a notification.
    pub async fn load(&mut self) {
        match self.source.fetch_users().await {
            Ok(users) => {
                info!(count = users.len(), "Loaded users.");
                self.pager = Pager::new(&users, self.page_size);
                if self.pager.is_empty() {
                    self.notify(NotificationLevel::Warning, "The API returned no users");
                }
            }
            Err(e) => {
                error!(error = %e, status = ?e.status(), "Failed to fetch users.");
                self.pager = Pager::default();
                self.notify(
                    NotificationLevel::Danger,
                    "Something went wrong, check the log file",
                );
            }
        }
        self.selected_index = 0;
        self.state = AppState::UserList;
    }

    // =========================================================================
    // Navigation
    // =========================================================================

    /// Apply a pagination event. Selection goes back to the top of the page.
    pub fn navigate(&mut self, event: NavEvent) {
        if self.pager.apply(event) {
            debug!(?event, page = self.pager.current_index(), "Changed page.");
            self.selected_index = 0;
        }
    }

    pub fn move_up(&mut self) {
        self.selected_index = self.selected_index.saturating_sub(1);
    }

    pub fn move_down(&mut self) {
        let len = self.pager.current_page().len();
        if self.selected_index + 1 < len {
            self.selected_index += 1;
        }
    }

    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    /// Get the currently selected user, if any
    pub fn selected_user(&self) -> Option<&User> {
        self.pager.current_page().get(self.selected_index)
    }

    pub fn open_selected_profile(&mut self) {
        let Some(user) = self.selected_user() else {
            return;
        };
        let login = user.login.clone();
        let url = user.profile_url.clone();

        match open::that(&url) {
            Ok(()) => {
                debug!(%url, "Opened profile.");
                self.notify(NotificationLevel::Info, format!("Opened {login}'s profile"));
            }
            Err(e) => {
                warn!(%url, error = %e, "Failed to open profile.");
                self.notify(
                    NotificationLevel::Danger,
                    format!("Could not open a browser for {url}"),
                );
            }
        }
    }

    // =========================================================================
    // Notifications
    // =========================================================================

    pub fn notify(&mut self, level: NotificationLevel, message: impl Into<String>) {
        self.notification = Some(Notification {
            level,
            message: message.into(),
            expires_at: Instant::now() + self.notification_ttl,
        });
    }

    pub fn expire_notification(&mut self, now: Instant) {
        if self.notification.as_ref().is_some_and(|n| n.is_expired(now)) {
            self.notification = None;
        }
    }
}
