use crate::output;

use clap::Args;
use color_eyre::eyre::{bail, Result, WrapErr};
use tracing::{error, info};

use user_service::{Config, NavEvent, Pager};

/// Print one page of users
#[derive(Args, Debug)]
pub struct PageArgs {
    /// Page number to print, starting at 1
    #[arg(default_value_t = 1)]
    pub page: usize,
}

pub async fn execute(args: PageArgs, config: &Config) -> Result<()> {
    let client = config.build_client()?;
    output::status("Fetching", client.request_url().as_str());

    let users = match client.fetch_users().await {
        Ok(users) => users,
        Err(e) => {
            error!(error = %e, status = ?e.status(), "Failed to fetch users.");
            output::error("Something went wrong while fetching users");
            return Err(e).wrap_err("failed to fetch users");
        }
    };
    info!(count = users.len(), "Loaded users.");

    let mut pager = Pager::new(&users, config.page_size()?);
    if pager.is_empty() {
        output::warning("The API returned no users");
        return Ok(());
    }

    let page_count = pager.page_count();
    if args.page == 0 || args.page > page_count {
        bail!("page {} is out of range (1-{})", args.page, page_count);
    }
    pager.apply(NavEvent::Goto(args.page - 1));

    output::header(&format!(
        "Page {}/{} ({} users)",
        args.page,
        page_count,
        pager.total_items()
    ));
    for user in pager.current_page() {
        output::user(user);
    }
    output::controls(&pager.controls());

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    use httpmock::prelude::*;
    use serde_json::{json, Value};

    fn users_json(n: u64) -> Value {
        Value::Array(
            (1..=n)
                .map(|id| {
                    json!({
                        "login": format!("user{id}"),
                        "avatar_url": format!("https://avatars.githubusercontent.com/u/{id}?v=4"),
                        "html_url": format!("https://github.com/user{id}"),
                    })
                })
                .collect(),
        )
    }

    async fn server_with(status: u16, body: Value) -> MockServer {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(GET).path("/users");
                then.status(status).json_body(body);
            })
            .await;
        server
    }

    fn config_for(server: &MockServer) -> Config {
        Config {
            base_url: server.base_url(),
            ..Config::default()
        }
    }

    #[tokio::test]
    async fn test_prints_requested_page() {
        let server = server_with(200, users_json(25)).await;
        let result = execute(PageArgs { page: 3 }, &config_for(&server)).await;
        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn test_out_of_range_page() {
        let server = server_with(200, users_json(25)).await;
        let config = config_for(&server);

        let err = execute(PageArgs { page: 4 }, &config).await.unwrap_err();
        assert!(err.to_string().contains("out of range (1-3)"));

        assert!(execute(PageArgs { page: 0 }, &config).await.is_err());
    }

    #[tokio::test]
    async fn test_empty_listing_is_not_an_error() {
        let server = server_with(200, json!([])).await;
        assert!(execute(PageArgs { page: 1 }, &config_for(&server)).await.is_ok());
    }

    #[tokio::test]
    async fn test_fetch_failure_is_reported() {
        let server = server_with(500, json!({ "message": "Server Error" })).await;
        let err = execute(PageArgs { page: 1 }, &config_for(&server))
            .await
            .unwrap_err();
        assert!(err.to_string().contains("failed to fetch users"));
    }
}
