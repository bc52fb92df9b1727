use chrono::{DateTime, SecondsFormat, Utc};
use serde::Deserialize;

/// Repository metadata as returned by `GET /repos/{owner}/{repo}`.
///
/// Only the members the listing hydrator consumes are modelled; everything
/// else in the payload is ignored.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Repository {
    pub full_name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub language: Option<String>,
    #[serde(default)]
    pub license: Option<License>,
    #[serde(default)]
    pub homepage: Option<String>,
    #[serde(default)]
    pub stargazers_count: Option<u64>,
    #[serde(default)]
    pub watchers_count: Option<u64>,
    #[serde(default)]
    pub forks_count: Option<u64>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

impl Repository {
    /// Minimal repository with only a full name, for building fixtures.
    pub fn named(full_name: impl Into<String>) -> Self {
        Self {
            full_name: full_name.into(),
            description: None,
            language: None,
            license: None,
            homepage: None,
            stargazers_count: None,
            watchers_count: None,
            forks_count: None,
            created_at: None,
            updated_at: None,
        }
    }

    /// SPDX-ish license key (`mit`, `apache-2.0`, ...), if GitHub detected one.
    pub fn license_key(&self) -> Option<&str> {
        self.license.as_ref().and_then(|l| l.key.as_deref())
    }
}

/// License summary embedded in a repository payload.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct License {
    #[serde(default)]
    pub key: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
}

/// Render a timestamp the way GitHub does (`2011-01-26T19:01:12Z`).
pub fn format_timestamp(ts: &DateTime<Utc>) -> String {
    ts.to_rfc3339_opts(SecondsFormat::Secs, true)
}
