//! Error taxonomy shared by centex crates.
//!
//! - `ConfigError` is startup-fatal: the exporter must not start serving.
//! - `ScrapeError` is per-pass and recoverable: the collector contains it and
//!   degrades the pass to `up = 0`.

use thiserror::Error;

/// Shared result type for configuration paths.
pub type Result<T> = std::result::Result<T, ConfigError>;

/// Malformed or incomplete exporter configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid centrifugo URL: {0}")]
    InvalidUri(String),
    #[error("invalid centrifugo URL {0}: scheme must be http or https")]
    UnsupportedScheme(String),
    #[error("invalid centrifugo URL {0}: missing host")]
    MissingHost(String),
    #[error("invalid config: {0}")]
    Invalid(String),
}

/// Stable scrape failure kinds (used as a structured log field).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrapeErrorKind {
    Transport,
    Timeout,
    Status,
    Decode,
    Upstream,
    EmptyReply,
}

impl ScrapeErrorKind {
    pub fn as_str(self) -> &'static str {
        match self {
            ScrapeErrorKind::Transport => "transport",
            ScrapeErrorKind::Timeout => "timeout",
            ScrapeErrorKind::Status => "status",
            ScrapeErrorKind::Decode => "decode",
            ScrapeErrorKind::Upstream => "upstream",
            ScrapeErrorKind::EmptyReply => "empty_reply",
        }
    }
}

/// One failed scrape of the upstream admin API.
#[derive(Debug, Error)]
pub enum ScrapeError {
    #[error("transport error: {0}")]
    Transport(String),
    #[error("request timed out")]
    Timeout,
    #[error("wrong status code: {0}")]
    Status(u16),
    #[error("malformed reply: {0}")]
    Decode(String),
    /// Application-level error string reported by the server.
    #[error("centrifugo error: {0}")]
    Upstream(String),
    #[error("empty reply")]
    EmptyReply,
}

impl ScrapeError {
    pub fn kind(&self) -> ScrapeErrorKind {
        match self {
            ScrapeError::Transport(_) => ScrapeErrorKind::Transport,
            ScrapeError::Timeout => ScrapeErrorKind::Timeout,
            ScrapeError::Status(_) => ScrapeErrorKind::Status,
            ScrapeError::Decode(_) => ScrapeErrorKind::Decode,
            ScrapeError::Upstream(_) => ScrapeErrorKind::Upstream,
            ScrapeError::EmptyReply => ScrapeErrorKind::EmptyReply,
        }
    }
}

impl From<serde_json::Error> for ScrapeError {
    fn from(e: serde_json::Error) -> Self {
        ScrapeError::Decode(e.to_string())
    }
}
