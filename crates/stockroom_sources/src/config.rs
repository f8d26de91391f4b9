//! Source selection from the environment.

use crate::http::HttpSource;
use crate::mock::MockSource;
use core::fmt;
use core::str::FromStr;
use core::time::Duration;
use std::sync::Arc;
use stockroom_resources::InventorySource;
use thiserror::Error;

/// Selects the source implementation.
pub const ENV_SOURCE: &str = "STOCKROOM_SOURCE";
/// Base URL of the inventory API.
pub const ENV_API_URL: &str = "STOCKROOM_API_URL";
/// Bearer token sent to the inventory API.
pub const ENV_API_TOKEN: &str = "STOCKROOM_API_TOKEN";
/// HTTP request timeout in seconds.
pub const ENV_TIMEOUT_SECS: &str = "STOCKROOM_TIMEOUT_SECS";
/// Artificial latency of the mock source in milliseconds.
pub const ENV_MOCK_LATENCY_MS: &str = "STOCKROOM_MOCK_LATENCY_MS";

const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Errors raised while configuring a source.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// The source name is not recognised.
    #[error("unknown source '{0}', expected 'mock' or 'http'")]
    UnknownSource(String),
    /// A required variable is not set.
    #[error("environment variable {0} is not set")]
    MissingVar(&'static str),
    /// A numeric variable does not parse.
    #[error("environment variable {var} has invalid value '{value}'")]
    InvalidNumber {
        /// Variable name.
        var: &'static str,
        /// Offending value.
        value: String,
    },
    /// The API base URL is unusable.
    #[error("invalid API URL '{url}': {reason}")]
    InvalidUrl {
        /// The configured URL.
        url: String,
        /// Why it was rejected.
        reason: String,
    },
    /// The HTTP client could not be built.
    #[error("failed to build HTTP client: {0}")]
    Client(String),
}

/// Which [`InventorySource`] to build.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SourceKind {
    /// Built-in fixtures.
    #[default]
    Mock,
    /// The HTTP inventory API.
    Http,
}

impl SourceKind {
    /// Lowercase name, as accepted by [`FromStr`].
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Mock => "mock",
            Self::Http => "http",
        }
    }
}

impl fmt::Display for SourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SourceKind {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "mock" => Ok(Self::Mock),
            "http" => Ok(Self::Http),
            _ => Err(ConfigError::UnknownSource(s.to_string())),
        }
    }
}

/// Source configuration.
///
/// ```
/// use stockroom_sources::{SourceConfig, SourceKind};
///
/// let config = SourceConfig::from_lookup(|var| match var {
///     "STOCKROOM_SOURCE" => Some("http".into()),
///     "STOCKROOM_API_URL" => Some("http://localhost:8080/api".into()),
///     _ => None,
/// })
/// .unwrap();
///
/// assert_eq!(config.kind, SourceKind::Http);
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct SourceConfig {
    /// Which source to build.
    pub kind: SourceKind,
    /// Base URL, required for [`SourceKind::Http`].
    pub api_url: Option<String>,
    /// Optional bearer token.
    pub api_token: Option<String>,
    /// HTTP request timeout.
    pub timeout: Duration,
    /// Delay added to every mock response.
    pub mock_latency: Duration,
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            kind: SourceKind::Mock,
            api_url: None,
            api_token: None,
            timeout: DEFAULT_TIMEOUT,
            mock_latency: Duration::ZERO,
        }
    }
}

impl SourceConfig {
    /// Configuration for the fixture-backed source.
    #[must_use]
    pub fn mock() -> Self {
        Self::default()
    }

    /// Configuration for the HTTP source at `api_url`.
    #[must_use]
    pub fn http(api_url: impl Into<String>) -> Self {
        Self {
            kind: SourceKind::Http,
            api_url: Some(api_url.into()),
            ..Self::default()
        }
    }

    /// Sets the bearer token.
    #[must_use]
    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.api_token = Some(token.into());
        self
    }

    /// Sets the HTTP timeout.
    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Sets the mock latency.
    #[must_use]
    pub fn with_mock_latency(mut self, latency: Duration) -> Self {
        self.mock_latency = latency;
        self
    }

    /// Reads the configuration from the process environment.
    ///
    /// # Errors
    ///
    /// See [`from_lookup`](Self::from_lookup).
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Reads the configuration through `lookup`.
    ///
    /// Blank values count as unset.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] for an unknown source name, a non-numeric
    /// timeout or latency, or an `http` source without a URL.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let read = |var: &str| lookup(var).filter(|value| !value.trim().is_empty());

        let kind = read(ENV_SOURCE)
            .map(|value| value.parse::<SourceKind>())
            .transpose()?
            .unwrap_or_default();

        let timeout = read(ENV_TIMEOUT_SECS)
            .map(|value| parse_u64(ENV_TIMEOUT_SECS, &value).map(Duration::from_secs))
            .transpose()?
            .unwrap_or(DEFAULT_TIMEOUT);

        let mock_latency = read(ENV_MOCK_LATENCY_MS)
            .map(|value| parse_u64(ENV_MOCK_LATENCY_MS, &value).map(Duration::from_millis))
            .transpose()?
            .unwrap_or(Duration::ZERO);

        let api_url = read(ENV_API_URL);
        if kind == SourceKind::Http && api_url.is_none() {
            return Err(ConfigError::MissingVar(ENV_API_URL));
        }

        Ok(Self {
            kind,
            api_url,
            api_token: read(ENV_API_TOKEN),
            timeout,
            mock_latency,
        })
    }

    /// Builds the configured source.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] if the HTTP source has no usable URL.
    pub fn build(&self) -> Result<Arc<dyn InventorySource>, ConfigError> {
        match self.kind {
            SourceKind::Mock => {
                tracing::info!(latency_ms = self.mock_latency.as_millis(), "using mock source");
                Ok(Arc::new(
                    MockSource::with_fixtures().with_latency(self.mock_latency),
                ))
            }
            SourceKind::Http => {
                let url = self
                    .api_url
                    .as_deref()
                    .ok_or(ConfigError::MissingVar(ENV_API_URL))?;
                tracing::info!(url, "using HTTP source");
                Ok(Arc::new(HttpSource::new(
                    url,
                    self.api_token.clone(),
                    self.timeout,
                )?))
            }
        }
    }
}

fn parse_u64(var: &'static str, value: &str) -> Result<u64, ConfigError> {
    value
        .trim()
        .parse()
        .map_err(|_| ConfigError::InvalidNumber {
            var,
            value: value.to_string(),
        })
}

impl fmt::Debug for SourceConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SourceConfig")
            .field("kind", &self.kind)
            .field("api_url", &self.api_url)
            .field("api_token", &self.api_token.as_ref().map(|_| "[REDACTED]"))
            .field("timeout", &self.timeout)
            .field("mock_latency", &self.mock_latency)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        move |var| vars.get(var).cloned()
    }

    #[test]
    fn defaults_to_mock() {
        let config = SourceConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config, SourceConfig::mock());
        assert_eq!(config.timeout, Duration::from_secs(30));
    }

    #[test]
    fn reads_http_settings() {
        let config = SourceConfig::from_lookup(lookup(&[
            (ENV_SOURCE, "HTTP"),
            (ENV_API_URL, "http://localhost:8080/api"),
            (ENV_API_TOKEN, "secret"),
            (ENV_TIMEOUT_SECS, "5"),
        ]))
        .unwrap();

        assert_eq!(
            config,
            SourceConfig::http("http://localhost:8080/api")
                .with_token("secret")
                .with_timeout(Duration::from_secs(5))
        );
    }

    #[test]
    fn http_requires_url() {
        let err = SourceConfig::from_lookup(lookup(&[(ENV_SOURCE, "http")])).unwrap_err();
        assert_eq!(err, ConfigError::MissingVar(ENV_API_URL));
    }

    #[test]
    fn blank_values_count_as_unset() {
        let config =
            SourceConfig::from_lookup(lookup(&[(ENV_SOURCE, "  "), (ENV_API_TOKEN, "")])).unwrap();
        assert_eq!(config.kind, SourceKind::Mock);
        assert_eq!(config.api_token, None);
    }

    #[test]
    fn rejects_unknown_source() {
        let err = SourceConfig::from_lookup(lookup(&[(ENV_SOURCE, "grpc")])).unwrap_err();
        assert_eq!(err, ConfigError::UnknownSource("grpc".into()));
    }

    #[test]
    fn rejects_non_numeric_latency() {
        let err =
            SourceConfig::from_lookup(lookup(&[(ENV_MOCK_LATENCY_MS, "fast")])).unwrap_err();
        assert_eq!(
            err,
            ConfigError::InvalidNumber {
                var: ENV_MOCK_LATENCY_MS,
                value: "fast".into()
            }
        );
    }

    #[test]
    fn build_rejects_bad_url() {
        let result = SourceConfig::http("not a url").build();
        assert!(matches!(result, Err(ConfigError::InvalidUrl { .. })));
    }

    #[test]
    fn debug_redacts_token() {
        let debug = format!("{:?}", SourceConfig::http("http://x").with_token("secret"));
        assert!(!debug.contains("secret"));
    }
}
