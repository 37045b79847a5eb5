use std::env::VarError;

use log::debug;

use crate::clients::errors::{Error, Result};

/// Address of the proxy when nothing else is configured
pub const DEFAULT_BASE_URL: &str = "http://localhost:8888";

/// Environment variable overriding [`DEFAULT_BASE_URL`]
pub const BASE_URL_ENV: &str = "SPOTIFY_PROXY_BASE_URL";

/// Configuration for the [`ProxyClient`](crate::clients::ProxyClient) struct
pub struct Config {
    /// Proxy address without a trailing slash
    pub base_url: String,
    /// HTTP client whose connection pool every request goes through
    pub http: reqwest::Client,
}

/// Assembles a [`Config`], falling back to the environment for unset values
pub struct ConfigBuilder {
    base_url: Option<String>,
    http: Option<reqwest::Client>,
}

impl Default for ConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfigBuilder {
    /// Builder with nothing set
    pub fn new() -> Self {
        Self {
            base_url: None, // Falls back to SPOTIFY_PROXY_BASE_URL, then DEFAULT_BASE_URL
            http: None,
        }
    }

    /// Use this proxy address instead of the environment
    #[must_use]
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    /// Share a connection pool with the rest of the application
    #[must_use]
    pub fn http_client(mut self, http: reqwest::Client) -> Self {
        self.http = Some(http);
        self
    }

    /// Validate the settings and produce a [`Config`]
    pub fn build(self) -> Result<Config> {
        let base_url = match self.base_url {
            Some(url) => url,
            None => resolve_env_base_url(std::env::var(BASE_URL_ENV))?,
        };
        let base_url = validate_base_url(&base_url)?;
        debug!("Using proxy base url {base_url}");
        Ok(Config {
            base_url,
            http: self.http.unwrap_or_default(),
        })
    }
}

fn resolve_env_base_url(lookup: std::result::Result<String, VarError>) -> Result<String> {
    match lookup {
        Ok(url) => Ok(url),
        Err(VarError::NotPresent) => Ok(DEFAULT_BASE_URL.to_string()),
        Err(e) => Err(Error::from(e)),
    }
}

// Paths are appended verbatim, so the stored url never ends with a slash
// and carries no query or fragment
fn validate_base_url(raw: &str) -> Result<String> {
    let url = reqwest::Url::parse(raw)
        .map_err(|e| Error::ConfigurationError(format!("Invalid proxy base url {raw:?}: {e}")))?;
    if !matches!(url.scheme(), "http" | "https") {
        return Err(Error::ConfigurationError(format!(
            "Proxy base url {raw:?} must use http or https"
        )));
    }
    if url.query().is_some() || url.fragment().is_some() {
        return Err(Error::ConfigurationError(format!(
            "Proxy base url {raw:?} must not contain a query or fragment"
        )));
    }
    Ok(raw.trim_end_matches('/').to_string())
}
