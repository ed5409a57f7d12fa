use crate::error::{Result, ViewerError};
use crate::types::{Profile, RepositorySummary};
use async_trait::async_trait;
use reqwest::{Client, Response};
use serde::de::DeserializeOwned;
use std::time::Duration;
use tracing::{debug, warn};
use url::Url;

pub const API_BASE_URL: &str = "https://api.github.com";
pub const DEFAULT_PAGE: u32 = 1;
pub const DEFAULT_PER_PAGE: u32 = 10;

const USER_AGENT: &str = "GitHub Profile Viewer/0.1.0";

/// Page selector for the repository listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RepoQuery {
    pub page: u32,
    pub per_page: u32,
}

impl Default for RepoQuery {
    fn default() -> Self {
        Self {
            page: DEFAULT_PAGE,
            per_page: DEFAULT_PER_PAGE,
        }
    }
}

/// The two read calls the viewer needs from GitHub.
#[async_trait]
pub trait GitHubApi: Send + Sync {
    async fn fetch_profile(&self, username: &str) -> Result<Profile>;

    async fn fetch_repositories(
        &self,
        username: &str,
        query: RepoQuery,
    ) -> Result<Vec<RepositorySummary>>;
}

#[derive(Debug)]
pub struct GitHubClient {
    client: Client,
    base_url: Url,
}

impl GitHubClient {
    pub fn new() -> Result<Self> {
        Self::with_base_url(API_BASE_URL)
    }

    pub fn with_base_url(base_url: &str) -> Result<Self> {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(Duration::from_secs(30))
            .build()?;

        Ok(GitHubClient {
            client,
            base_url: Url::parse(base_url)?,
        })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// `{base}/users/{username}`
    pub fn profile_url(&self, username: &str) -> Result<Url> {
        self.endpoint(&["users", username])
    }

    /// `{base}/users/{username}/repos?sort=created&page={p}&per_page={n}`
    pub fn repositories_url(&self, username: &str, query: RepoQuery) -> Result<Url> {
        let mut url = self.endpoint(&["users", username, "repos"])?;
        url.query_pairs_mut()
            .append_pair("sort", "created")
            .append_pair("page", &query.page.to_string())
            .append_pair("per_page", &query.per_page.to_string());
        Ok(url)
    }

    fn endpoint(&self, segments: &[&str]) -> Result<Url> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| {
                ViewerError::ConfigError(format!("API base cannot be a base URL: {}", self.base_url))
            })?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    async fn get(&self, url: &Url) -> Result<Response> {
        debug!(%url, "GET");
        let response = self
            .client
            .get(url.clone())
            .header("Accept", "application/vnd.github.v3+json")
            .send()
            .await?;
        Ok(response)
    }

    /// Decodes a successful body; malformed payloads surface as `JsonError`.
    async fn decode<T: DeserializeOwned>(url: &Url, response: Response) -> Result<T> {
        let body = response.bytes().await?;
        serde_json::from_slice(&body).map_err(|e| {
            warn!(%url, error = %e, "Unexpected GitHub payload");
            ViewerError::from(e)
        })
    }

    /// Logs the body of a failed response; callers decide the error variant.
    async fn log_failure(url: &Url, response: Response) {
        let status = response.status();
        let error_text = response.text().await.unwrap_or_default();
        warn!(%url, %status, body = %error_text, "GitHub request failed");
    }
}

#[async_trait]
impl GitHubApi for GitHubClient {
    async fn fetch_profile(&self, username: &str) -> Result<Profile> {
        let url = self.profile_url(username)?;
        let response = self.get(&url).await?;

        if !response.status().is_success() {
            Self::log_failure(&url, response).await;
            return Err(ViewerError::NotFound("User not found.".to_string()));
        }

        Self::decode(&url, response).await
    }

    async fn fetch_repositories(
        &self,
        username: &str,
        query: RepoQuery,
    ) -> Result<Vec<RepositorySummary>> {
        let url = self.repositories_url(username, query)?;
        let response = self.get(&url).await?;

        if !response.status().is_success() {
            Self::log_failure(&url, response).await;
            return Err(ViewerError::FetchError(
                "Error fetching repositories.".to_string(),
            ));
        }

        Self::decode(&url, response).await
    }
}
