//! Mock companion backend serving `/api/hello` and `/api/status`
//!
//! Each mode reproduces one of the failure shapes the frontend must handle.

use std::net::SocketAddr;
use std::time::Instant;

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use serde_json::json;

/// How the mock backend answers
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum MockMode {
    /// Well-formed payloads
    #[default]
    Ok,
    /// 200 with an HTML index page, as a misrouted static host would send
    Html,
    /// 404 on both endpoints
    NotFound,
    /// 500 on both endpoints
    ServerError,
    /// Greeting without its nested `data` object
    MissingData,
}

#[derive(Clone)]
struct MockState {
    mode: MockMode,
    started_at: Instant,
}

const INDEX_HTML: &str = "<!DOCTYPE html>\n<html><head><title>Beacon</title></head>\
                          <body><div id=\"root\"></div></body></html>";

/// Build the mock backend router
pub fn build_router(mode: MockMode) -> Router {
    let state = MockState {
        mode,
        started_at: Instant::now(),
    };

    Router::new()
        .route("/api/hello", get(hello_handler))
        .route("/api/status", get(status_handler))
        .route("/health", get(health_handler))
        .with_state(state)
}

/// Bind the mock backend on `addr` and serve it in the background.
///
/// Returns the bound address, so port 0 can be used in tests.
pub async fn spawn(
    mode: MockMode,
    addr: SocketAddr,
) -> crate::Result<(SocketAddr, tokio::task::JoinHandle<()>)> {
    let listener = tokio::net::TcpListener::bind(addr).await?;
    let local_addr = listener.local_addr()?;
    tracing::info!("Mock backend ({:?}) listening on http://{}", mode, local_addr);

    let router = build_router(mode);
    let handle = tokio::spawn(async move {
        if let Err(e) = axum::serve(listener, router).await {
            tracing::error!("Mock backend stopped: {}", e);
        }
    });
    Ok((local_addr, handle))
}

fn failure(mode: MockMode) -> Option<Response> {
    match mode {
        MockMode::Html => Some(Html(INDEX_HTML).into_response()),
        MockMode::NotFound => Some((StatusCode::NOT_FOUND, "Not Found").into_response()),
        MockMode::ServerError => {
            Some((StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error").into_response())
        }
        MockMode::Ok | MockMode::MissingData => None,
    }
}

async fn hello_handler(State(state): State<MockState>) -> Response {
    if let Some(response) = failure(state.mode) {
        return response;
    }

    if state.mode == MockMode::MissingData {
        return Json(json!({ "message": "Hello from the Beacon mock backend!" })).into_response();
    }

    Json(json!({
        "message": "Hello from the Beacon mock backend!",
        "data": {
            "user": "Demo User",
            "status": "active",
            "features": ["Rust", "Axum", "Leptos", "Tokio"]
        }
    }))
    .into_response()
}

async fn status_handler(State(state): State<MockState>) -> Response {
    if let Some(response) = failure(state.mode) {
        return response;
    }

    Json(json!({
        "status": "healthy",
        "uptime": state.started_at.elapsed().as_secs_f64(),
        "version": env!("CARGO_PKG_VERSION")
    }))
    .into_response()
}

async fn health_handler() -> impl IntoResponse {
    "OK"
}
