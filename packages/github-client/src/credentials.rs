use crate::error::{GithubError, Result};

const MISSING_CREDENTIALS: &str = "environment variables GITHUB_CLIENT_ID and GITHUB_CLIENT_SECRET or GITHUB_ACCESS_TOKEN must be set";

/// Credentials used to authenticate against the GitHub API.
#[derive(Clone, PartialEq, Eq)]
pub enum Credentials {
    /// Personal access token or app installation token.
    Token(String),
    /// OAuth application client id and secret.
    ClientPair { id: String, secret: String },
}

impl Credentials {
    /// Resolve credentials from `GITHUB_ACCESS_TOKEN`, falling back to
    /// `GITHUB_CLIENT_ID` + `GITHUB_CLIENT_SECRET`.
    pub fn from_env() -> Result<Self> {
        Self::from_vars(
            std::env::var("GITHUB_ACCESS_TOKEN").ok(),
            std::env::var("GITHUB_CLIENT_ID").ok(),
            std::env::var("GITHUB_CLIENT_SECRET").ok(),
        )
    }

    /// Resolve credentials from already-read values. Empty strings count as unset.
    pub fn from_vars(
        token: Option<String>,
        client_id: Option<String>,
        client_secret: Option<String>,
    ) -> Result<Self> {
        let present = |v: Option<String>| v.filter(|s| !s.trim().is_empty());

        if let Some(token) = present(token) {
            return Ok(Self::Token(token));
        }
        match (present(client_id), present(client_secret)) {
            (Some(id), Some(secret)) => Ok(Self::ClientPair { id, secret }),
            _ => Err(GithubError::Config(MISSING_CREDENTIALS.into())),
        }
    }

    /// Whether every component carries a non-empty value.
    pub fn is_complete(&self) -> bool {
        match self {
            Self::Token(token) => !token.trim().is_empty(),
            Self::ClientPair { id, secret } => !id.trim().is_empty() && !secret.trim().is_empty(),
        }
    }

    pub(crate) fn apply(&self, request: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        match self {
            Self::Token(token) => request.bearer_auth(token),
            Self::ClientPair { id, secret } => request.basic_auth(id, Some(secret)),
        }
    }
}

// Secrets stay out of logs.
impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Token(_) => f.write_str("Credentials::Token(***)"),
            Self::ClientPair { id, .. } => f
                .debug_struct("Credentials::ClientPair")
                .field("id", id)
                .field("secret", &"***")
                .finish(),
        }
    }
}
