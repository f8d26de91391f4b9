//! Tracing subscriber setup.
//!
//! [`TracingConfig`] builds a `tracing_subscriber` registry with an
//! [`EnvFilter`] and one fmt layer. Only the first successful
//! [`init`](TracingConfig::init) in a process installs a subscriber; later
//! calls leave it in place.
//!
//! # Environment Filter
//!
//! Use `with_env_filter` to set target-specific log levels:
//!
//! ```
//! use stockroom_core::TracingConfig;
//!
//! TracingConfig::new()
//!     .with_env_filter("stockroom_resources=debug,reqwest=warn")
//! # ;
//! ```

use core::fmt;
use core::str::FromStr;
use tracing::Level;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt::format::FmtSpan;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

/// Target filter directives, e.g. `stockroom_resources=debug`.
pub const ENV_LOG: &str = "STOCKROOM_LOG";
/// Output format: `pretty`, `compact` or `json`.
pub const ENV_LOG_FORMAT: &str = "STOCKROOM_LOG_FORMAT";

// ─────────────────────────────────────────────────────────────────────────────
// TracingFormat
// ─────────────────────────────────────────────────────────────────────────────

/// Tracing output format.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TracingFormat {
    /// Human-readable colored output (default).
    #[default]
    Pretty,
    /// Compact single-line output.
    Compact,
    /// JSON structured output for log aggregation.
    Json,
}

/// A format name other than `pretty`, `compact` or `json`.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown log format '{0}', expected 'pretty', 'compact' or 'json'")]
pub struct UnknownFormat(pub String);

impl FromStr for TracingFormat {
    type Err = UnknownFormat;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "pretty" => Ok(Self::Pretty),
            "compact" => Ok(Self::Compact),
            "json" => Ok(Self::Json),
            _ => Err(UnknownFormat(s.to_string())),
        }
    }
}

impl fmt::Display for TracingFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Pretty => "pretty",
            Self::Compact => "compact",
            Self::Json => "json",
        })
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// TracingConfig
// ─────────────────────────────────────────────────────────────────────────────

/// Tracing configuration.
///
/// ```
/// use stockroom_core::{TracingConfig, TracingFormat};
/// use tracing::Level;
///
/// // Development: pretty output with span enter/exit
/// let dev = TracingConfig::new()
///     .with_level(Level::DEBUG)
///     .with_span_events(true);
///
/// // Production: JSON for log aggregation
/// let prod = TracingConfig::new()
///     .with_format(TracingFormat::Json)
///     .with_env_filter("stockroom=info,reqwest=warn");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TracingConfig {
    /// Maximum log level, used when no env filter is set or it fails to parse.
    pub level: Level,
    /// Output format.
    pub format: TracingFormat,
    /// Environment filter (e.g. `stockroom_resources=debug,reqwest=warn`).
    pub env_filter: Option<String>,
    /// Whether to include span enter/exit events.
    pub span_events: bool,
}

impl Default for TracingConfig {
    fn default() -> Self {
        Self {
            level: Level::INFO,
            format: TracingFormat::Pretty,
            env_filter: None,
            span_events: false,
        }
    }
}

impl TracingConfig {
    /// Creates a configuration with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Reads [`ENV_LOG`] and [`ENV_LOG_FORMAT`] on top of the defaults.
    ///
    /// # Errors
    ///
    /// Returns [`UnknownFormat`] if [`ENV_LOG_FORMAT`] names no known format.
    pub fn from_env() -> Result<Self, UnknownFormat> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Like [`from_env`](Self::from_env), reading variables through `lookup`.
    ///
    /// # Errors
    ///
    /// Returns [`UnknownFormat`] for an unrecognised format name.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, UnknownFormat> {
        let mut config = Self::default();
        if let Some(filter) = lookup(ENV_LOG).filter(|value| !value.trim().is_empty()) {
            config.env_filter = Some(filter);
        }
        if let Some(format) = lookup(ENV_LOG_FORMAT).filter(|value| !value.trim().is_empty()) {
            config.format = format.parse()?;
        }
        Ok(config)
    }

    /// Sets the maximum log level.
    #[must_use]
    pub fn with_level(mut self, level: Level) -> Self {
        self.level = level;
        self
    }

    /// Sets the output format.
    #[must_use]
    pub fn with_format(mut self, format: TracingFormat) -> Self {
        self.format = format;
        self
    }

    /// Sets a custom environment filter string.
    ///
    /// Format: `target=level,target=level,...`
    #[must_use]
    pub fn with_env_filter(mut self, filter: impl Into<String>) -> Self {
        self.env_filter = Some(filter.into());
        self
    }

    /// Enables span enter/exit events in output.
    #[must_use]
    pub fn with_span_events(mut self, enabled: bool) -> Self {
        self.span_events = enabled;
        self
    }

    /// The filter the subscriber will use.
    ///
    /// Falls back to [`level`](Self::level) when the env filter does not parse.
    #[must_use]
    pub fn build_filter(&self) -> EnvFilter {
        match &self.env_filter {
            Some(filter) => {
                EnvFilter::try_new(filter).unwrap_or_else(|_| EnvFilter::new(self.level.as_str()))
            }
            None => EnvFilter::new(self.level.as_str()),
        }
    }

    /// Installs the global subscriber.
    ///
    /// Returns `false` if a subscriber was already installed, in which case
    /// nothing changes.
    pub fn init(&self) -> bool {
        let env_filter = self.build_filter();
        let span_events = if self.span_events {
            FmtSpan::ENTER | FmtSpan::EXIT
        } else {
            FmtSpan::NONE
        };

        let registry = tracing_subscriber::registry().with(env_filter);
        let installed = match self.format {
            TracingFormat::Pretty => registry
                .with(
                    tracing_subscriber::fmt::layer()
                        .pretty()
                        .with_span_events(span_events),
                )
                .try_init(),
            TracingFormat::Compact => registry
                .with(
                    tracing_subscriber::fmt::layer()
                        .compact()
                        .with_span_events(span_events),
                )
                .try_init(),
            TracingFormat::Json => registry
                .with(
                    tracing_subscriber::fmt::layer()
                        .json()
                        .with_span_events(span_events),
                )
                .try_init(),
        }
        .is_ok();

        if installed {
            tracing::debug!(
                level = %self.level,
                format = %self.format,
                "tracing initialized"
            );
        }
        installed
    }
}
