//! Operational HTTP endpoints.
//!
//! - `/`           : landing page
//! - `/healthz`    : liveness
//! - telemetry path: Prometheus text format, always 200

use axum::{
    extract::State,
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};

use crate::{app_state::AppState, obs};

pub async fn landing(State(state): State<AppState>) -> Html<String> {
    let path = &state.cfg().web.telemetry_path;
    Html(format!(
        "<html>\n\
         <head><title>Centrifugo Exporter</title></head>\n\
         <body>\n\
         <h1>Centrifugo Exporter</h1>\n\
         <p><a href='{path}'>Metrics</a></p>\n\
         </body>\n\
         </html>\n"
    ))
}

pub async fn healthz() -> impl IntoResponse {
    (StatusCode::OK, "ok")
}

pub async fn metrics(State(state): State<AppState>) -> Response {
    let observations = state.collector().collect().await;
    let body = obs::render(&observations);

    (
        StatusCode::OK,
        [(axum::http::header::CONTENT_TYPE, obs::CONTENT_TYPE)],
        body,
    )
        .into_response()
}
