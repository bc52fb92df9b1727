//! Pure GitHub REST API client.
//!
//! A minimal client for the repository metadata endpoints of the GitHub API.
//! Supports fetching single repositories and batches of repositories with an
//! in-memory response cache.
//!
//! # Example
//!
//! ```rust,ignore
//! use github_client::GithubClient;
//! use std::time::Duration;
//!
//! let client = GithubClient::from_env()?;
//!
//! let repos = client
//!     .fetch_repositories(&["rust-lang/rust".into()], Duration::from_secs(3600))
//!     .await?;
//! for repo in &repos {
//!     println!("{}: {}", repo.full_name, repo.stargazers_count.unwrap_or(0));
//! }
//! ```

pub mod cache;
pub mod credentials;
pub mod error;
pub mod types;

pub use cache::ResponseCache;
pub use credentials::Credentials;
pub use error::{GithubError, Result};
pub use types::{format_timestamp, License, Repository};

use futures::{stream, StreamExt, TryStreamExt};
use reqwest::header;
use std::collections::HashSet;
use std::sync::Arc;
use std::time::Duration;

const BASE_URL: &str = "https://api.github.com";

const USER_AGENT: &str = concat!("listing-hydrate/", env!("CARGO_PKG_VERSION"));

/// Requests in flight at once during a batch fetch.
const BATCH_CONCURRENCY: usize = 8;

#[derive(Clone)]
pub struct GithubClient {
    http_client: reqwest::Client,
    credentials: Credentials,
    base_url: String,
    cache: Arc<ResponseCache>,
}

impl GithubClient {
    pub fn new(credentials: Credentials) -> Self {
        Self {
            http_client: reqwest::Client::new(),
            credentials,
            base_url: BASE_URL.to_string(),
            cache: Arc::new(ResponseCache::new()),
        }
    }

    /// Create from `GITHUB_ACCESS_TOKEN` or `GITHUB_CLIENT_ID`/`GITHUB_CLIENT_SECRET`.
    pub fn from_env() -> Result<Self> {
        Ok(Self::new(Credentials::from_env()?))
    }

    /// Set a custom base URL (GitHub Enterprise, proxies, etc.).
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into().trim_end_matches('/').to_string();
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn credentials(&self) -> &Credentials {
        &self.credentials
    }

    pub fn cache(&self) -> &ResponseCache {
        &self.cache
    }

    /// Endpoint for a repository reference, validating the `owner/repo` shape.
    pub fn repository_url(&self, full_name: &str) -> Result<String> {
        let mut parts = full_name.split('/');
        match (parts.next(), parts.next(), parts.next()) {
            (Some(owner), Some(repo), None) if !owner.is_empty() && !repo.is_empty() => {
                Ok(format!("{}/repos/{}/{}", self.base_url, owner, repo))
            }
            _ => Err(GithubError::InvalidRepository(full_name.to_string())),
        }
    }

    /// Fetch a single repository, bypassing the cache.
    pub async fn get_repository(&self, full_name: &str) -> Result<Repository> {
        let url = self.repository_url(full_name)?;
        tracing::debug!(repo = full_name, %url, "Fetching repository metadata");

        let request = self
            .http_client
            .get(&url)
            .header(header::ACCEPT, "application/vnd.github+json")
            .header(header::USER_AGENT, USER_AGENT);
        let resp = self.credentials.apply(request).send().await?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(GithubError::Api {
                status: status.as_u16(),
                message: body,
            });
        }

        let repo: Repository = resp.json().await?;
        Ok(repo)
    }

    /// Fetch a repository, reusing a cached response younger than `cache_ttl`.
    pub async fn get_repository_cached(
        &self,
        full_name: &str,
        cache_ttl: Duration,
    ) -> Result<Repository> {
        if let Some(repo) = self.cache.get(full_name, cache_ttl) {
            tracing::debug!(repo = full_name, "Repository metadata served from cache");
            return Ok(repo);
        }

        let repo = self.get_repository(full_name).await?;
        self.cache.insert(full_name, repo.clone());
        Ok(repo)
    }

    /// Fetch many repositories. Input order is preserved, case-insensitive
    /// duplicates are fetched once, and the first failure aborts the batch.
    pub async fn fetch_repositories(
        &self,
        full_names: &[String],
        cache_ttl: Duration,
    ) -> Result<Vec<Repository>> {
        let unique = dedupe_case_insensitive(full_names);
        tracing::info!(
            requested = full_names.len(),
            unique = unique.len(),
            "Fetching repository metadata batch"
        );

        let repos: Vec<Repository> = stream::iter(unique)
            .map(|name| async move { self.get_repository_cached(&name, cache_ttl).await })
            .buffered(BATCH_CONCURRENCY)
            .try_collect()
            .await?;

        tracing::info!(count = repos.len(), "Fetched repository metadata");
        Ok(repos)
    }
}

fn dedupe_case_insensitive(names: &[String]) -> Vec<String> {
    let mut seen = HashSet::new();
    names
        .iter()
        .filter(|name| seen.insert(name.to_lowercase()))
        .cloned()
        .collect()
}
