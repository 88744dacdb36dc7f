//! HTTP routes served by the exporter.

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use std::sync::Arc;

use axum::body::{to_bytes, Body};
use axum::http::{Request, StatusCode};
use tower::ServiceExt;

use centex_core::error::ScrapeError;
use centex_exporter::app_state::AppState;
use centex_exporter::config::ExporterConfig;
use centex_exporter::router::build_router;

mod common;
use common::{metrics, ScriptedSource};

fn app(script: Vec<Result<centex_core::NodeMetrics, ScrapeError>>) -> axum::Router {
    let source = Arc::new(ScriptedSource::new(script));
    let state = AppState::with_source(ExporterConfig::default(), source);
    build_router(state)
}

async fn get(app: axum::Router, path: &str) -> (StatusCode, Option<String>, String) {
    let resp = app
        .oneshot(Request::builder().uri(path).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = resp.status();
    let ct = resp
        .headers()
        .get("content-type")
        .map(|v| v.to_str().unwrap().to_string());
    let body = to_bytes(resp.into_body(), usize::MAX).await.unwrap();
    (status, ct, String::from_utf8(body.to_vec()).unwrap())
}

#[tokio::test]
async fn metrics_renders_prometheus_text() {
    let app = app(vec![Ok(metrics(&[
        ("node_num_clients", 42.0),
        ("client_bytes_in", 1024.0),
        ("unknown_field", 7.0),
    ]))]);

    let (status, ct, body) = get(app, "/metrics").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(ct.as_deref(), Some("text/plain; version=0.0.4; charset=utf-8"));

    assert!(body.contains("# HELP centrifugo_up Was the last scrape of centrifugo successful.\n"));
    assert!(body.contains("# TYPE centrifugo_up gauge\ncentrifugo_up 1\n"));
    assert!(body.contains(
        "# TYPE centrifugo_node_num_clients gauge\ncentrifugo_node_num_clients 42\n"
    ));
    assert!(body.contains(
        "# TYPE centrifugo_client_bytes_in_total counter\ncentrifugo_client_bytes_in_total 1024\n"
    ));
    assert!(!body.contains("unknown_field"));
}

#[tokio::test]
async fn metrics_stays_200_when_upstream_is_down() {
    let app = app(vec![Err(ScrapeError::Status(503))]);

    let (status, _, body) = get(app, "/metrics").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("centrifugo_up 0\n"));
    assert_eq!(body.lines().filter(|l| !l.starts_with('#')).count(), 1);
}

#[tokio::test]
async fn landing_page_links_to_metrics() {
    let (status, _, body) = get(app(vec![]), "/").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("<title>Centrifugo Exporter</title>"));
    assert!(body.contains("<a href='/metrics'>Metrics</a>"));
}

#[tokio::test]
async fn custom_telemetry_path() {
    let mut cfg = ExporterConfig::default();
    cfg.web.telemetry_path = "/prom".into();
    let source = Arc::new(ScriptedSource::new(vec![Err(ScrapeError::Timeout)]));
    let state = AppState::with_source(cfg, source);
    let router = build_router(state);

    let (status, _, body) = get(router.clone(), "/prom").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("centrifugo_up 0"));

    let (status, _, _) = get(router, "/metrics").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn healthz_is_ok() {
    let (status, _, body) = get(app(vec![]), "/healthz").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, "ok");
}

#[test]
fn app_state_rejects_bad_upstream() {
    let mut cfg = ExporterConfig::default();
    cfg.centrifugo.server = "ftp://centrifugo:21".into();
    assert!(AppState::new(cfg).is_err());
}
