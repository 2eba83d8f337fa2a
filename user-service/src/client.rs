// GitHub Users Client
// One read-only request against the users listing endpoint

use async_trait::async_trait;
use reqwest::{
    header::{HeaderMap, HeaderValue, ACCEPT, AUTHORIZATION, USER_AGENT},
    Client,
};
use serde_json::Value;
use tracing::debug;
use url::Url;

use crate::error::{FetchError, Result};
use crate::models::User;

pub const DEFAULT_BASE_URL: &str = "https://api.github.com";
pub const DEFAULT_SINCE: u64 = 1;
pub const DEFAULT_PER_PAGE: u32 = 40;

/// Anything that can produce the full user list in one go.
#[async_trait]
pub trait UserSource: Send + Sync {
    async fn fetch_users(&self) -> Result<Vec<User>>;
}

#[derive(Debug, Clone)]
pub struct UserClient {
    client: Client,
    endpoint: Url,
    since: u64,
    per_page: u32,
}

#[derive(Debug, Clone)]
pub struct UserClientBuilder {
    base_url: String,
    since: u64,
    per_page: u32,
    token: Option<String>,
}

impl UserClient {
    pub fn builder() -> UserClientBuilder {
        UserClientBuilder {
            base_url: DEFAULT_BASE_URL.to_string(),
            since: DEFAULT_SINCE,
            per_page: DEFAULT_PER_PAGE,
            token: None,
        }
    }

    /// Full request URL, including query parameters.
    pub fn request_url(&self) -> Url {
        let mut url = self.endpoint.clone();
        url.query_pairs_mut()
            .append_pair("since", &self.since.to_string())
            .append_pair("per_page", &self.per_page.to_string());
        url
    }

    pub async fn fetch_users(&self) -> Result<Vec<User>> {
        let url = self.request_url();
        debug!(url = %url, "Fetching users.");

        let response = self.client.get(url).send().await?;
        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            let message = serde_json::from_str::<Value>(&body)
                .ok()
                .and_then(|value| {
                    value
                        .get("message")
                        .and_then(Value::as_str)
                        .map(str::to_owned)
                })
                .unwrap_or_else(|| format!("request failed with status {}", status.as_u16()));

            return Err(FetchError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let users: Vec<User> = serde_json::from_str(&body)?;
        debug!(count = users.len(), "Fetched users.");
        Ok(users)
    }
}

#[async_trait]
impl UserSource for UserClient {
    async fn fetch_users(&self) -> Result<Vec<User>> {
        UserClient::fetch_users(self).await
    }
}

impl UserClientBuilder {
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn since(mut self, since: u64) -> Self {
        self.since = since;
        self
    }

    pub fn per_page(mut self, per_page: u32) -> Self {
        self.per_page = per_page;
        self
    }

    pub fn token(mut self, token: Option<String>) -> Self {
        self.token = token.filter(|t| !t.is_empty());
        self
    }

    pub fn build(self) -> Result<UserClient> {
        let endpoint = Url::parse(&format!("{}/users", self.base_url.trim_end_matches('/')))?;
        let client = build_http_client(self.token.as_deref())?;

        Ok(UserClient {
            client,
            endpoint,
            since: self.since,
            per_page: self.per_page,
        })
    }
}

fn build_http_client(token: Option<&str>) -> Result<Client> {
    let mut headers = HeaderMap::new();
    headers.insert(USER_AGENT, HeaderValue::from_static("hubpage"));
    headers.insert(
        ACCEPT,
        HeaderValue::from_static("application/vnd.github+json"),
    );

    if let Some(token) = token {
        let mut value = HeaderValue::from_str(&format!("Bearer {token}"))?;
        value.set_sensitive(true);
        headers.insert(AUTHORIZATION, value);
    }

    Ok(Client::builder().default_headers(headers).build()?)
}
