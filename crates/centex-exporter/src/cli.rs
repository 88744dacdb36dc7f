//! Command-line flags.
//!
//! Flags override values from the optional YAML config file.

use clap::Parser;

use centex_core::error::Result;

use crate::config::{self, ExporterConfig};

#[derive(Debug, Parser)]
#[command(
    name = "centex-exporter",
    version,
    about = "Prometheus exporter for Centrifugo node statistics"
)]
pub struct Cli {
    /// Optional YAML config file.
    #[arg(long)]
    pub config: Option<String>,

    /// Address to listen on for web interface and telemetry. [default: :9273]
    #[arg(long = "web.listen-address")]
    pub listen_address: Option<String>,

    /// Path under which to expose metrics. [default: /metrics]
    #[arg(long = "web.telemetry-path")]
    pub telemetry_path: Option<String>,

    /// HTTP API address of a centrifugo server (prefix with https:// to connect over HTTPS).
    /// [default: http://localhost:8000]
    #[arg(long = "centrifugo.server")]
    pub server: Option<String>,

    /// Centrifugo API secret.
    #[arg(long = "centrifugo.secret")]
    pub secret: Option<String>,

    /// Timeout on HTTP requests to centrifugo. [default: 200ms]
    #[arg(long = "centrifugo.timeout")]
    pub timeout: Option<String>,
}

impl Cli {
    /// Resolve the effective config: file (or defaults), then flags, then validate.
    pub fn resolve(self) -> Result<ExporterConfig> {
        let mut cfg = match &self.config {
            Some(path) => config::load_from_file(path)?,
            None => ExporterConfig::default(),
        };

        if let Some(v) = self.listen_address {
            cfg.web.listen_address = v;
        }
        if let Some(v) = self.telemetry_path {
            cfg.web.telemetry_path = v;
        }
        if let Some(v) = self.server {
            cfg.centrifugo.server = v;
        }
        if let Some(v) = self.secret {
            cfg.centrifugo.secret = v;
        }
        if let Some(v) = self.timeout {
            cfg.centrifugo.timeout = v;
        }

        cfg.validate()?;
        Ok(cfg)
    }
}
