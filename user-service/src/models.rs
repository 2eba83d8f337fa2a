// User Models
// Records returned by the GitHub users listing endpoint

use serde::{Deserialize, Serialize};

/// A single entry from the `/users` listing.
///
/// Only the fields the pager displays are kept; everything else in the
/// response object is ignored during deserialization.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub avatar_url: String,
    pub login: String,
    #[serde(rename = "html_url")]
    pub profile_url: String,
}

impl User {
    pub fn new(
        login: impl Into<String>,
        avatar_url: impl Into<String>,
        profile_url: impl Into<String>,
    ) -> Self {
        Self {
            avatar_url: avatar_url.into(),
            login: login.into(),
            profile_url: profile_url.into(),
        }
    }
}
