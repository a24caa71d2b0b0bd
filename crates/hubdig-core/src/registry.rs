use crate::error::{Error, Result};
use async_trait::async_trait;
use tracing::debug;

/// Docker Hub registry host queried by default
pub const DOCKER_HUB_HOST: &str = "registry.hub.docker.com";

/// Source of raw tag-list page bodies.
///
/// The resolver only ever consumes pages through this trait, so tests can
/// substitute canned documents for the live registry.
#[async_trait]
pub trait TagPageFetcher: Send + Sync {
    /// Fetch one page of the tag listing for `author`/`name`, filtered by
    /// `tag`, and return the raw response body.
    async fn fetch_page(&self, author: &str, name: &str, tag: &str, page: u32) -> Result<String>;
}

/// Client for the Docker Hub tag-listing API
pub struct HubClient {
    client: reqwest::Client,
    base_url: String,
}

impl HubClient {
    /// Create a client for Docker Hub
    pub fn new() -> Self {
        Self::with_base_url(DOCKER_HUB_HOST)
    }

    /// Create a client for an arbitrary registry base.
    ///
    /// `base_url` may be a bare host ("registry.hub.docker.com") or carry an
    /// explicit scheme ("http://127.0.0.1:8080" for a local mirror or test
    /// server); bare hosts get "https://".
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into();
        let base_url = if base_url.starts_with("http://") || base_url.starts_with("https://") {
            base_url
        } else {
            format!("https://{}", base_url)
        };

        let client = reqwest::Client::builder()
            .user_agent(concat!("hubdig/", env!("CARGO_PKG_VERSION")))
            .build()
            .expect("Failed to build HTTP client");

        Self { client, base_url }
    }

    /// Build the tag-list URL for one page
    fn tags_url(&self, author: &str, name: &str, tag: &str, page: u32) -> String {
        format!(
            "{}/v2/repositories/{}/{}/tags?page={}&name={}",
            self.base_url, author, name, page, tag
        )
    }
}

impl Default for HubClient {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl TagPageFetcher for HubClient {
    async fn fetch_page(&self, author: &str, name: &str, tag: &str, page: u32) -> Result<String> {
        let url = self.tags_url(author, name, tag, page);
        debug!("Requesting {} ...", url);

        let response = self.client.get(&url).send().await?;

        let status = response.status().as_u16();
        let body = response.text().await?;
        debug!("Response statuscode={}", status);
        debug!("Response body:\n{}", body);

        if status != 200 {
            return Err(Error::bad_status(status));
        }

        Ok(body)
    }
}
