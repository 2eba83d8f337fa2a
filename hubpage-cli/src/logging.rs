//! Tracing setup.
//!
//! The interactive UI owns the terminal, so it logs to a file. The plain
//! `page` command logs to stderr.

use std::fs::{self, OpenOptions};
use std::path::Path;
use std::sync::Mutex;

use color_eyre::eyre::{eyre, Result, WrapErr};
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

const LOG_ENV: &str = "HUBPAGE_LOG";
const CRATES: [&str; 3] = ["hubpage", "hubpage_tui", "user_service"];

fn level(base: LevelFilter, verbose: u8) -> LevelFilter {
    let levels = [
        LevelFilter::ERROR,
        LevelFilter::WARN,
        LevelFilter::INFO,
        LevelFilter::DEBUG,
        LevelFilter::TRACE,
    ];
    let start = levels.iter().position(|l| *l == base).unwrap_or(0);
    levels[(start + usize::from(verbose)).min(levels.len() - 1)]
}

fn env_filter(base: LevelFilter, verbose: u8) -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV)
        .or_else(|_| EnvFilter::try_from_default_env())
        .unwrap_or_else(|_| EnvFilter::new(default_directives(level(base, verbose))))
}

fn default_directives(level: LevelFilter) -> String {
    let mut filter = vec!["off".to_owned()];
    for krate in CRATES {
        filter.push(format!("{krate}={level}"));
    }
    filter.join(",")
}

pub fn init_file(verbose: u8, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .wrap_err_with(|| format!("failed to create log directory {}", parent.display()))?;
    }

    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .wrap_err_with(|| format!("failed to open log file {}", path.display()))?;

    tracing_subscriber::fmt()
        .with_env_filter(env_filter(LevelFilter::INFO, verbose))
        .with_ansi(false)
        .with_writer(Mutex::new(file))
        .try_init()
        .map_err(|e| eyre!("failed to initialise logging: {e}"))
}

pub fn init_stderr(verbose: u8) -> Result<()> {
    let format = tracing_subscriber::fmt::format().with_target(false).compact();

    tracing_subscriber::fmt()
        .event_format(format)
        .without_time()
        .with_ansi(true)
        .with_writer(std::io::stderr)
        .with_env_filter(env_filter(LevelFilter::WARN, verbose))
        .try_init()
        .map_err(|e| eyre!("failed to initialise logging: {e}"))
}
