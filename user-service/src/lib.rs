// User Service Library
// Fetching, paginating and navigating GitHub user listings

pub mod client;
pub mod config;
pub mod error;
pub mod models;
pub mod navigation;
pub mod paginator;

// Re-export commonly used types
pub use client::{UserClient, UserClientBuilder, UserSource};
pub use config::Config;
pub use error::{ConfigError, FetchError, Result};
pub use models::User;
pub use navigation::{Control, ControlKind, NavEvent, Pager};
pub use paginator::{default_page_size, paginate, PAGE_SIZE};
