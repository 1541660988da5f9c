//! HTTP surface: the websocket endpoint plus two read-only probes.

use std::sync::Arc;

use axum::extract::ws::WebSocketUpgrade;
use axum::extract::State;
use axum::http::header;
use axum::response::IntoResponse;
use axum::routing::get;
use axum::{Json, Router};
use serde::Serialize;
use tokio::sync::mpsc;

use bastion_core::commands::Command;

use crate::hub::Hub;
use crate::session;

/// Shared state available to all handlers.
#[derive(Clone)]
pub struct AppState {
    pub hub: Arc<Hub>,
    /// Intake of the game loop.
    pub commands: mpsc::Sender<Command>,
}

#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
    version: &'static str,
    listeners: usize,
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/ws", get(ws_handler))
        .route("/health", get(health_check))
        .route("/state", get(latest_state))
        .with_state(state)
}

async fn ws_handler(ws: WebSocketUpgrade, State(state): State<AppState>) -> impl IntoResponse {
    ws.on_upgrade(move |socket| session::serve_client(socket, state.hub, state.commands))
}

async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
        listeners: state.hub.client_count(),
    })
}

/// The most recent broadcast, or `null` before the first one.
async fn latest_state(State(state): State<AppState>) -> impl IntoResponse {
    let body = state
        .hub
        .latest()
        .map(|snapshot| snapshot.as_str().to_owned())
        .unwrap_or_else(|| "null".to_owned());
    ([(header::CONTENT_TYPE, "application/json")], body)
}
