use std::net::SocketAddr;
use std::time::Duration;

use centex_core::error::{ConfigError, Result};
use serde::Deserialize;

use super::parse_duration;

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ExporterConfig {
    pub version: u32,

    #[serde(default)]
    pub web: WebSection,

    #[serde(default)]
    pub centrifugo: CentrifugoSection,
}

impl Default for ExporterConfig {
    fn default() -> Self {
        Self {
            version: 1,
            web: WebSection::default(),
            centrifugo: CentrifugoSection::default(),
        }
    }
}

impl ExporterConfig {
    pub fn validate(&self) -> Result<()> {
        if self.version != 1 {
            return Err(ConfigError::Invalid(format!(
                "unsupported config version {}",
                self.version
            )));
        }

        self.web.validate()?;
        self.centrifugo.validate()?;

        Ok(())
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct WebSection {
    /// Address to listen on; `:9273` binds all interfaces.
    #[serde(default = "default_listen_address")]
    pub listen_address: String,

    #[serde(default = "default_telemetry_path")]
    pub telemetry_path: String,
}

impl Default for WebSection {
    fn default() -> Self {
        Self {
            listen_address: default_listen_address(),
            telemetry_path: default_telemetry_path(),
        }
    }
}

/// Routes served next to the telemetry path.
pub const RESERVED_PATHS: [&str; 2] = ["/", "/healthz"];

impl WebSection {
    pub fn validate(&self) -> Result<()> {
        let path = &self.telemetry_path;
        if !path.starts_with('/') {
            return Err(ConfigError::Invalid("web.telemetry_path must start with '/'".into()));
        }
        if RESERVED_PATHS.contains(&path.as_str()) {
            return Err(ConfigError::Invalid(format!(
                "web.telemetry_path {path:?} collides with a built-in route"
            )));
        }
        // The router would read these as captures or wildcards.
        if path.contains([':', '*', '{', '}']) {
            return Err(ConfigError::Invalid(format!(
                "web.telemetry_path {path:?} must not contain ':', '*', '{{' or '}}'"
            )));
        }
        self.listen_addr()?;
        Ok(())
    }

    pub fn listen_addr(&self) -> Result<SocketAddr> {
        let addr = &self.listen_address;
        let normalized = if addr.starts_with(':') {
            format!("0.0.0.0{addr}")
        } else {
            addr.clone()
        };
        normalized.parse().map_err(|e| {
            ConfigError::Invalid(format!("web.listen_address {addr:?} is invalid: {e}"))
        })
    }
}

fn default_listen_address() -> String {
    ":9273".into()
}
fn default_telemetry_path() -> String {
    "/metrics".into()
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CentrifugoSection {
    /// HTTP API address; `host:port` is accepted and treated as `http://`.
    #[serde(default = "default_server")]
    pub server: String,

    #[serde(default)]
    pub secret: String,

    #[serde(default = "default_timeout")]
    pub timeout: String,
}

impl Default for CentrifugoSection {
    fn default() -> Self {
        Self {
            server: default_server(),
            secret: String::new(),
            timeout: default_timeout(),
        }
    }
}

impl CentrifugoSection {
    pub fn validate(&self) -> Result<()> {
        self.timeout()?;
        Ok(())
    }

    pub fn timeout(&self) -> Result<Duration> {
        match parse_duration(&self.timeout) {
            Some(d) if !d.is_zero() => Ok(d),
            _ => Err(ConfigError::Invalid(format!(
                "centrifugo.timeout {:?} must be a positive duration (e.g. 200ms, 2s)",
                self.timeout
            ))),
        }
    }
}

fn default_server() -> String {
    "http://localhost:8000".into()
}
fn default_timeout() -> String {
    "200ms".into()
}
