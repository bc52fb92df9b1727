// Common test utilities

use async_trait::async_trait;
use github_client::Repository;
use listing_hydrate::{FetchOptions, LogLevel, LogSink, MetadataFetcher};
use std::sync::{Arc, Mutex};

#[derive(Debug, thiserror::Error)]
#[error("stub fetch failed: {0}")]
pub struct StubError(pub String);

/// In-memory fetcher returning canned repositories and recording every call.
#[derive(Default)]
pub struct StubFetcher {
    pub unconfigured: bool,
    pub repos: Vec<Repository>,
    pub failure: Option<String>,
    pub calls: Mutex<Vec<(Vec<String>, FetchOptions)>>,
}

impl StubFetcher {
    pub fn returning(repos: Vec<Repository>) -> Self {
        Self {
            repos,
            ..Default::default()
        }
    }

    pub fn failing(message: &str) -> Self {
        Self {
            failure: Some(message.to_string()),
            ..Default::default()
        }
    }

    pub fn unconfigured() -> Self {
        Self {
            unconfigured: true,
            ..Default::default()
        }
    }

    pub fn calls(&self) -> Vec<(Vec<String>, FetchOptions)> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl MetadataFetcher for StubFetcher {
    type Error = StubError;

    fn is_configured(&self) -> bool {
        !self.unconfigured
    }

    async fn fetch_repositories(
        &self,
        repos: &[String],
        options: &FetchOptions,
    ) -> Result<Vec<Repository>, StubError> {
        self.calls.lock().unwrap().push((repos.to_vec(), *options));
        match &self.failure {
            Some(message) => Err(StubError(message.clone())),
            None => Ok(self.repos.clone()),
        }
    }
}

/// Log sink that keeps every event for later assertions.
#[derive(Clone, Default)]
pub struct RecordedLog {
    events: Arc<Mutex<Vec<(LogLevel, String)>>>,
}

impl RecordedLog {
    pub fn sink(&self) -> LogSink {
        let events = self.events.clone();
        Arc::new(move |level: LogLevel, message: &str| {
            events.lock().unwrap().push((level, message.to_string()));
        })
    }

    pub fn events(&self) -> Vec<(LogLevel, String)> {
        self.events.lock().unwrap().clone()
    }

    pub fn at(&self, level: LogLevel) -> Vec<String> {
        self.events()
            .into_iter()
            .filter(|(l, _)| *l == level)
            .map(|(_, message)| message)
            .collect()
    }
}

/// Repository payload as GitHub would send it.
pub fn repository(json: serde_json::Value) -> Repository {
    serde_json::from_value(json).expect("valid repository fixture")
}
