//! Application configuration.
//!
//! Settings may come from a TOML file, the `GITHUB_TOKEN` environment
//! variable, and command line overrides, in increasing order of priority.

use std::num::NonZeroUsize;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::debug;
use url::Url;

use crate::client::{UserClient, DEFAULT_BASE_URL, DEFAULT_PER_PAGE, DEFAULT_SINCE};
use crate::error::{ConfigError, Result};
use crate::paginator::PAGE_SIZE;

const APP_DIR: &str = "hubpage";
const CONFIG_FILE: &str = "config.toml";
pub const TOKEN_ENV: &str = "GITHUB_TOKEN";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", default)]
pub struct Config {
    /// API root; the `/users` path is appended to it.
    pub base_url: String,

    /// Only list users with an ID greater than this.
    pub since: u64,

    /// Number of users requested from the API.
    pub per_page: u32,

    /// Number of users shown on one page of the pager.
    pub page_size: usize,

    /// Optional personal access token.
    pub token: Option<String>,

    /// How long notifications stay on screen, in seconds.
    pub notification_secs: u64,

    /// Where the interactive UI writes its log.
    pub log_file: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            since: DEFAULT_SINCE,
            per_page: DEFAULT_PER_PAGE,
            page_size: PAGE_SIZE,
            token: None,
            notification_secs: 3,
            log_file: None,
        }
    }
}

impl Config {
    /// Validate the correctness of the configuration.
    pub fn validate(&self) -> std::result::Result<(), Vec<String>> {
        let mut errors = Vec::new();

        if self.page_size == 0 {
            errors.push("page-size must be at least 1".to_string());
        }

        if !(1..=100).contains(&self.per_page) {
            errors.push(format!(
                "per-page must be between 1 and 100, got {}",
                self.per_page
            ));
        }

        if let Err(e) = Url::parse(&self.base_url) {
            errors.push(format!("base-url '{}' is not a valid URL: {}", self.base_url, e));
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }

    /// Config file paths in descending priority order.
    pub fn search_paths() -> Vec<PathBuf> {
        let mut paths = Vec::new();

        if let Some(dir) = dirs::config_dir() {
            paths.push(dir.join(APP_DIR).join(CONFIG_FILE));
        }

        if let Some(home) = dirs::home_dir() {
            let path = home.join(".config").join(APP_DIR).join(CONFIG_FILE);
            if !paths.contains(&path) {
                paths.push(path);
            }
        }

        paths
    }

    /// Default location of the interactive UI's log file.
    pub fn default_log_file() -> PathBuf {
        dirs::cache_dir()
            .unwrap_or_else(std::env::temp_dir)
            .join(APP_DIR)
            .join("hubpage.log")
    }

    pub fn load_from_file(path: &Path) -> std::result::Result<Self, ConfigError> {
        debug!(path = ?path, "Loading configuration file.");
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        toml::from_str(&content).map_err(|source| ConfigError::Toml {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Load the explicit file if given, else the first existing search path,
    /// else defaults. A token in the environment wins over one in the file.
    pub fn load(explicit: Option<&Path>) -> std::result::Result<Self, ConfigError> {
        let mut config = match explicit {
            Some(path) => Self::load_from_file(path)?,
            None => match Self::search_paths().into_iter().find(|p| p.exists()) {
                Some(path) => Self::load_from_file(&path)?,
                None => {
                    debug!("No configuration file found, using defaults.");
                    Self::default()
                }
            },
        };

        if let Ok(token) = std::env::var(TOKEN_ENV) {
            if !token.is_empty() {
                config.token = Some(token);
            }
        }

        Ok(config)
    }

    /// Validated page size.
    pub fn page_size(&self) -> std::result::Result<NonZeroUsize, ConfigError> {
        NonZeroUsize::new(self.page_size)
            .ok_or_else(|| ConfigError::Validation(vec!["page-size must be at least 1".into()]))
    }

    pub fn notification_duration(&self) -> std::time::Duration {
        std::time::Duration::from_secs(self.notification_secs)
    }

    pub fn build_client(&self) -> Result<UserClient> {
        UserClient::builder()
            .base_url(&self.base_url)
            .since(self.since)
            .per_page(self.per_page)
            .token(self.token.clone())
            .build()
    }
}
