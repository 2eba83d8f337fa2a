mod app;
mod events;
mod ui;

use std::io::{stdout, Write};

use app::App;
use color_eyre::Result;
use crossterm::event::{DisableMouseCapture, EnableMouseCapture};
use crossterm::execute;
use tracing::warn;
use user_service::Config;

pub async fn run(config: &Config) -> Result<()> {
    let client = config.build_client()?;
    let mut app = App::new(
        Box::new(client),
        config.page_size()?,
        config.notification_duration(),
    );

    let terminal = ratatui::init();
    install_panic_hook();
    let result = match execute!(stdout(), EnableMouseCapture) {
        Ok(()) => app.run(terminal).await,
        Err(e) => Err(e.into()),
    };
    disable_mouse_capture(&mut stdout());
    ratatui::restore();
    result
}

/// Chain mouse capture teardown in front of the hook `ratatui::init` set up,
/// so a panic does not leave the terminal reporting mouse events.
fn install_panic_hook() {
    let hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        disable_mouse_capture(&mut stdout());
        hook(info);
    }));
}

fn disable_mouse_capture(out: &mut impl Write) {
    if let Err(e) = execute!(out, DisableMouseCapture) {
        warn!(error = %e, "Failed to disable mouse capture.");
    }
}
