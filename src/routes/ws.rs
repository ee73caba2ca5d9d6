//! WebSocket upgrade + message loop. Each client message is parsed as JSON and
//! forwarded to the services. We reply with a single JSON message per request.

use std::sync::Arc;
use axum::{
  extract::{
    ws::{Message, WebSocket},
    State, WebSocketUpgrade,
  },
  response::IntoResponse,
};
use tracing::{debug, error, info, instrument};

use crate::protocol::{ClientWsMessage, ServerWsMessage};
use crate::state::AppState;

#[instrument(level = "info", skip(state))]
pub async fn ws_upgrade(ws: WebSocketUpgrade, State(state): State<Arc<AppState>>) -> impl IntoResponse {
  info!(target: "logic2code_backend", "WebSocket upgrade requested");
  ws.on_upgrade(move |socket| handle_ws(socket, state))
}

#[instrument(level = "info", skip(socket, state))]
async fn handle_ws(mut socket: WebSocket, state: Arc<AppState>) {
  info!(target: "logic2code_backend", "WebSocket connected");
  while let Some(Ok(msg)) = socket.recv().await {
    match msg {
      Message::Text(txt) => {
        let reply_msg = match serde_json::from_str::<ClientWsMessage>(&txt) {
          Ok(incoming) => handle_client_ws(incoming, &state).await,
          Err(e) => ServerWsMessage::Error { message: format!("Invalid JSON: {}", e) },
        };

        let out = serde_json::to_string(&reply_msg).unwrap_or_else(|e| {
          serde_json::json!({ "type": "error", "message": format!("Serialization error: {}", e) }).to_string()
        });

        if let Err(e) = socket.send(Message::Text(out)).await {
          error!(target: "logic2code_backend", error = %e, "WS send error");
          break;
        }
      }
      Message::Ping(payload) => { let _ = socket.send(Message::Pong(payload)).await; }
      Message::Close(_) => break,
      _ => {}
    }
  }
  info!(target: "logic2code_backend", "WebSocket disconnected");
}

/// Dispatch one parsed client message. Free text stays out of the logs.
pub async fn handle_client_ws(msg: ClientWsMessage, state: &AppState) -> ServerWsMessage {
  match msg {
    ClientWsMessage::Ping => ServerWsMessage::Pong,

    ClientWsMessage::Translate { logic, scenario } => {
      if state.generation_delay_ms > 0 {
        tokio::time::sleep(std::time::Duration::from_millis(state.generation_delay_ms)).await;
      }
      let result = state.translator.translate(&logic, &scenario);
      debug!(target: "translator", template = ?result.template, logic_len = logic.len(), "WS translation served");
      ServerWsMessage::Translation { result }
    }

    ClientWsMessage::RecordProgress { user_id, body } => {
      match state
        .progress
        .record_progress(
          &user_id,
          &body.scenario_id,
          &body.user_logic,
          body.generated_code,
          body.language,
          body.completed,
        )
        .await
      {
        Ok(awarded) => ServerWsMessage::ProgressRecorded { awarded },
        Err(e) => ServerWsMessage::Error { message: e.to_string() },
      }
    }

    ClientWsMessage::GetStats { user_id } => {
      ServerWsMessage::Stats { stats: state.progress.get_progress_stats(&user_id).await }
    }

    ClientWsMessage::GetCategoryProgress { user_id } => {
      ServerWsMessage::CategoryProgress { categories: state.progress.get_category_progress(&user_id).await }
    }
  }
}
