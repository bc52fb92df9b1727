use async_trait::async_trait;
use github_client::{GithubClient, GithubError, Repository};
use std::time::Duration;

/// Options forwarded to the fetcher untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FetchOptions {
    /// How long a previously fetched response may be reused.
    pub cache: Duration,
}

// ============================================================================
// METADATA FETCHER: the single network-facing seam of a hydration run
// ============================================================================

#[async_trait]
pub trait MetadataFetcher: Send + Sync {
    type Error: std::error::Error + Send + Sync + 'static;

    /// Whether the credentials the fetcher needs are present.
    fn is_configured(&self) -> bool {
        true
    }

    /// Fetch metadata for `owner/repo` references in one batch.
    async fn fetch_repositories(
        &self,
        repos: &[String],
        options: &FetchOptions,
    ) -> Result<Vec<Repository>, Self::Error>;
}

#[async_trait]
impl MetadataFetcher for GithubClient {
    type Error = GithubError;

    fn is_configured(&self) -> bool {
        self.credentials().is_complete()
    }

    async fn fetch_repositories(
        &self,
        repos: &[String],
        options: &FetchOptions,
    ) -> Result<Vec<Repository>, Self::Error> {
        GithubClient::fetch_repositories(self, repos, options.cache).await
    }
}
