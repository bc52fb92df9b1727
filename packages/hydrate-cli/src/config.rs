use anyhow::{Context, Result};
use dotenvy::dotenv;
use github_client::Credentials;
use std::env;

/// Runtime configuration loaded from environment variables
#[derive(Debug, Clone)]
pub struct Config {
    pub credentials: Credentials,
    pub github_api_url: Option<String>,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        // Load .env file if present (development)
        let _ = dotenv();

        Ok(Self {
            credentials: Credentials::from_env().context("GitHub credentials must be set")?,
            github_api_url: env::var("GITHUB_API_URL")
                .ok()
                .filter(|url| !url.trim().is_empty()),
        })
    }
}
