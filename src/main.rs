//! Logic2Code · Backend
//!
//! - Axum HTTP + WebSocket API
//! - Keyword-matched logic-to-code translation and a snippet assistant
//! - Progress tracking, badges and learning paths over an in-memory store
//!
//! Important env variables:
//!   PORT                    : u16 (default 3000)
//!   LOGIC2CODE_CONFIG_PATH  : path to TOML config (extra scenarios, badges, rules, delay)
//!   LOG_LEVEL               : tracing filter, e.g. "debug" or full directives
//!   LOG_FORMAT              : "pretty" (default) or "json"

mod assistant;
mod badges;
mod catalog;
mod config;
mod domain;
mod error;
mod paths;
mod progress;
mod protocol;
mod routes;
mod seeds;
mod state;
mod store;
mod telemetry;
mod templates;
mod translator;
mod transpile;
mod util;

use std::{net::SocketAddr, sync::Arc};
use tokio::net::TcpListener;
use tracing::info;

use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
  telemetry::init_tracing();

  // Catalog, store and services, built once.
  let state = Arc::new(AppState::new());

  let app = build_router(state.clone());

  let addr: SocketAddr = std::env::var("PORT")
    .ok()
    .and_then(|p| p.parse::<u16>().ok())
    .map(|port| SocketAddr::from(([0, 0, 0, 0], port)))
    .unwrap_or_else(|| SocketAddr::from(([0, 0, 0, 0], 3000)));

  let listener = TcpListener::bind(addr).await?;
  info!(target: "logic2code_backend", %addr, scenarios = state.catalog.len(), "HTTP server listening");
  axum::serve(listener, app)
    .with_graceful_shutdown(shutdown_signal())
    .await?;
  Ok(())
}

async fn shutdown_signal() {
  if let Err(e) = tokio::signal::ctrl_c().await {
    tracing::error!(target: "logic2code_backend", error = %e, "Failed to listen for shutdown signal");
    std::future::pending::<()>().await;
  }
  info!(target: "logic2code_backend", "Shutdown signal received");
}
