mod commands;
mod logging;
mod output;

use std::path::PathBuf;

use clap::{ArgAction, Args, Parser, Subcommand};
use color_eyre::Result;
use tracing::debug;
use user_service::{Config, ConfigError};

use commands::page::PageArgs;

/// Page through GitHub users in the terminal
#[derive(Parser, Debug)]
#[command(name = "hubpage", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,

    #[command(flatten)]
    global: GlobalArgs,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Browse users interactively (default)
    Browse,
    /// Print a single page of users and exit
    Page(PageArgs),
}

#[derive(Args, Debug)]
struct GlobalArgs {
    /// Path to a config TOML (default: <config dir>/hubpage/config.toml)
    #[arg(long, global = true, value_name = "PATH")]
    config: Option<PathBuf>,

    /// API root the /users path is appended to
    #[arg(long, global = true, value_name = "URL")]
    base_url: Option<String>,

    /// Only list users with an ID greater than this
    #[arg(long, global = true, value_name = "ID")]
    since: Option<u64>,

    /// Number of users to request from the API (1-100)
    #[arg(long, global = true, value_name = "N")]
    per_page: Option<u32>,

    /// Number of users per page in the pager
    #[arg(long, global = true, value_name = "N")]
    page_size: Option<usize>,

    /// Log file for the interactive UI
    #[arg(long, global = true, value_name = "PATH")]
    log_file: Option<PathBuf>,

    /// Increase log verbosity (-v, -vv, -vvv)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    verbose: u8,
}

impl GlobalArgs {
    /// Command line flags win over the config file and environment.
    fn apply(&self, config: &mut Config) {
        if let Some(base_url) = &self.base_url {
            config.base_url = base_url.clone();
        }
        if let Some(since) = self.since {
            config.since = since;
        }
        if let Some(per_page) = self.per_page {
            config.per_page = per_page;
        }
        if let Some(page_size) = self.page_size {
            config.page_size = page_size;
        }
        if let Some(log_file) = &self.log_file {
            config.log_file = Some(log_file.clone());
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;

    let cli = Cli::parse();
    let mut config = Config::load(cli.global.config.as_deref())?;
    cli.global.apply(&mut config);
    config.validate().map_err(ConfigError::Validation)?;

    let command = cli.command.unwrap_or(Command::Browse);
    match &command {
        Command::Browse => {
            let log_file = config
                .log_file
                .clone()
                .unwrap_or_else(Config::default_log_file);
            logging::init_file(cli.global.verbose, &log_file)?;
        }
        Command::Page(_) => logging::init_stderr(cli.global.verbose)?,
    }

    debug!(
        base_url = %config.base_url,
        since = config.since,
        per_page = config.per_page,
        page_size = config.page_size,
        authenticated = config.token.is_some(),
        "Loaded configuration."
    );

    match command {
        Command::Browse => hubpage_tui::run(&config).await,
        Command::Page(args) => commands::page::execute(args, &config).await,
    }
}
