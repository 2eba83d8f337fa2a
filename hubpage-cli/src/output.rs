// Output formatting helpers for CLI commands

use user_service::{Control, User};

/// Print a status message: "  Status message"
pub fn status(action: &str, message: &str) {
    eprintln!("\x1b[1;36m{:>12}\x1b[0m {}", action, message);
}

/// Print a warning message
pub fn warning(message: &str) {
    eprintln!("\x1b[33m  !\x1b[0m {}", message);
}

/// Print an error message
pub fn error(message: &str) {
    eprintln!("\x1b[1;31merror:\x1b[0m {}", message);
}

/// Print a header line
pub fn header(message: &str) {
    println!("\x1b[1m==> {}\x1b[0m", message);
}

/// Print one user entry
pub fn user(user: &User) {
    println!("{}", format_user(user));
}

/// Print the pagination control row
pub fn controls(controls: &[Control]) {
    println!("{}", format_controls(controls));
}

pub fn format_user(user: &User) -> String {
    format!(
        "  \x1b[1m{}\x1b[0m\n    \x1b[2m{}\x1b[0m\n    View profile: \x1b[34m{}\x1b[0m",
        user.login, user.avatar_url, user.profile_url
    )
}

/// `[Prev] [1] [2] [Next]`, with the active page highlighted and disabled
/// controls dimmed.
pub fn format_controls(controls: &[Control]) -> String {
    controls
        .iter()
        .map(|control| {
            let label = format!("[{}]", control.label);
            if control.active {
                format!("\x1b[1;30;46m{}\x1b[0m", label)
            } else if control.disabled {
                format!("\x1b[2m{}\x1b[0m", label)
            } else {
                label
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}
