//! Upstream client for the Centrifugo admin HTTP API.
//!
//! One signed POST per scrape:
//! - body: `[{"method":"node"}]`
//! - `X-API-Sign`: hex HMAC-SHA256 of the body with the API secret
//! - `Content-Type: application/json`
//!
//! The client holds only immutable endpoint config and needs no locking.

use std::error::Error as _;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::CONTENT_TYPE;
use reqwest::StatusCode;
use tracing::debug;
use url::Url;

use centex_core::error::{ConfigError, ScrapeError};
use centex_core::protocol::sign::SIGN_HEADER;
use centex_core::protocol::{decode_node_reply, encode_commands, ApiSigner, Command};
use centex_core::NodeMetrics;

use crate::collector::NodeSource;

/// API path used when the configured URI carries no path of its own.
const DEFAULT_API_PATH: &str = "/api/";

/// Normalize and validate the configured server address.
///
/// `host:port` gets an `http://` prefix. A URI without a path is pointed at
/// `/api/`; an explicit path is kept as given.
pub fn resolve_endpoint(uri: &str) -> Result<Url, ConfigError> {
    let uri = uri.trim();
    let full = if uri.contains("://") {
        uri.to_string()
    } else {
        format!("http://{uri}")
    };

    let mut url = Url::parse(&full).map_err(|e| ConfigError::InvalidUri(format!("{full}: {e}")))?;

    if !matches!(url.scheme(), "http" | "https") {
        return Err(ConfigError::UnsupportedScheme(full));
    }
    if url.host_str().map_or(true, str::is_empty) {
        return Err(ConfigError::MissingHost(full));
    }

    if url.path().is_empty() || url.path() == "/" {
        url.set_path(DEFAULT_API_PATH);
    }
    Ok(url)
}

/// Signed client for one Centrifugo node.
#[derive(Debug)]
pub struct UpstreamClient {
    endpoint: Url,
    signer: ApiSigner,
    timeout: Duration,
    http: reqwest::Client,
}

impl UpstreamClient {
    /// Validate the endpoint config and build the client.
    pub fn configure(uri: &str, secret: &str, timeout: Duration) -> Result<Self, ConfigError> {
        if timeout.is_zero() {
            return Err(ConfigError::Invalid("centrifugo timeout must be non-zero".into()));
        }

        let endpoint = resolve_endpoint(uri)?;
        let signer = ApiSigner::new(secret)?;
        let http = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| ConfigError::Invalid(format!("http client build failed: {e}")))?;

        Ok(Self {
            endpoint,
            signer,
            timeout,
            http,
        })
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }
}

#[async_trait]
impl NodeSource for UpstreamClient {
    async fn fetch_node_status(&self) -> Result<NodeMetrics, ScrapeError> {
        let body = encode_commands(&[Command::node()])?;
        let sign = self.signer.sign(&body);

        let resp = self
            .http
            .post(self.endpoint.clone())
            .header(SIGN_HEADER, sign)
            .header(CONTENT_TYPE, "application/json")
            .body(body)
            .send()
            .await
            .map_err(transport_error)?;

        let status = resp.status();
        if status != StatusCode::OK {
            return Err(ScrapeError::Status(status.as_u16()));
        }

        let raw = resp.bytes().await.map_err(transport_error)?;
        debug!(endpoint = %self.endpoint, bytes = raw.len(), "node status received");

        decode_node_reply(&raw)
    }
}

fn transport_error(e: reqwest::Error) -> ScrapeError {
    if e.is_timeout() {
        return ScrapeError::Timeout;
    }

    // reqwest's top-level message hides the cause (e.g. connection refused).
    let mut msg = e.to_string();
    let mut source = e.source();
    while let Some(cause) = source {
        msg.push_str(": ");
        msg.push_str(&cause.to_string());
        source = cause.source();
    }
    ScrapeError::Transport(msg)
}
