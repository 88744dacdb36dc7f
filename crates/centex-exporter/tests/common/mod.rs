//! Shared fixtures: fake node sources and an in-process mock Centrifugo.

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]
#![allow(dead_code)]

use std::net::SocketAddr;
use std::sync::Mutex;

use async_trait::async_trait;
use axum::Router;

use centex_core::error::ScrapeError;
use centex_core::NodeMetrics;
use centex_exporter::collector::NodeSource;

/// Serve `app` on an ephemeral localhost port.
pub async fn spawn_upstream(app: Router) -> SocketAddr {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    addr
}

/// Address with nothing listening on it.
pub async fn closed_addr() -> SocketAddr {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    addr
}

pub fn metrics(pairs: &[(&str, f64)]) -> NodeMetrics {
    pairs.iter().map(|(k, v)| (k.to_string(), *v)).collect()
}

/// Replays scripted outcomes, one per fetch.
pub struct ScriptedSource {
    script: Mutex<Vec<Result<NodeMetrics, ScrapeError>>>,
}

impl ScriptedSource {
    pub fn new(mut script: Vec<Result<NodeMetrics, ScrapeError>>) -> Self {
        script.reverse();
        Self {
            script: Mutex::new(script),
        }
    }
}

#[async_trait]
impl NodeSource for ScriptedSource {
    async fn fetch_node_status(&self) -> Result<NodeMetrics, ScrapeError> {
        self.script
            .lock()
            .unwrap()
            .pop()
            .unwrap_or_else(|| Err(ScrapeError::Transport("script exhausted".into())))
    }
}
