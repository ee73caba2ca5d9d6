//! HTTP endpoint handlers. These are thin wrappers that forward to the services.
//! Each handler is instrumented; learner text is logged by length only.
//!
//! The caller's identity is the `x-user-id` header. Without it, reads are
//! empty and writes answer 401.

use std::collections::HashSet;
use std::sync::Arc;
use std::time::Duration;

use axum::{
  extract::{Path, Query, State},
  http::HeaderMap,
  response::IntoResponse,
  Json,
};
use tracing::{info, instrument};

use crate::domain::{Difficulty, Scenario};
use crate::error::{ApiError, ApiResult};
use crate::progress::DEFAULT_ACTIVITY_LIMIT;
use crate::protocol::*;
use crate::state::AppState;
use crate::transpile::convert;

pub const USER_HEADER: &str = "x-user-id";
const DEFAULT_RECOMMENDED: usize = 3;

/// Blank when the header is missing or not valid UTF-8.
pub fn user_id(headers: &HeaderMap) -> String {
  headers
    .get(USER_HEADER)
    .and_then(|v| v.to_str().ok())
    .map(|s| s.trim().to_string())
    .unwrap_or_default()
}

#[instrument(level = "info")]
pub async fn http_health() -> impl IntoResponse { Json(HealthOut { ok: true }) }

#[instrument(level = "info", skip(state))]
pub async fn http_list_scenarios(
  State(state): State<Arc<AppState>>,
  Query(q): Query<ScenarioQuery>,
) -> ApiResult<Json<Vec<Scenario>>> {
  let difficulty = match &q.difficulty {
    Some(d) => Some(Difficulty::parse(d).ok_or_else(|| ApiError::BadRequest(format!("unknown difficulty '{}'", d)))?),
    None => None,
  };
  let mut out: Vec<&Scenario> = match (difficulty, &q.category) {
    (Some(d), _) => state.catalog.by_difficulty(d),
    (None, Some(c)) => state.catalog.by_category(c),
    (None, None) => state.catalog.all().iter().collect(),
  };
  if let (Some(_), Some(c)) = (difficulty, &q.category) {
    out.retain(|s| s.category == *c);
  }
  if let Some(query) = q.q.as_deref().map(str::trim).filter(|s| !s.is_empty()) {
    let hits: HashSet<&str> = state.catalog.search(query).into_iter().map(|s| s.id.as_str()).collect();
    out.retain(|s| hits.contains(s.id.as_str()));
  }
  info!(target: "logic2code_backend", count = out.len(), "HTTP scenarios served");
  Ok(Json(out.into_iter().cloned().collect()))
}

#[instrument(level = "info", skip(state))]
pub async fn http_get_scenario(
  State(state): State<Arc<AppState>>,
  Path(id): Path<String>,
) -> ApiResult<Json<Scenario>> {
  state
    .catalog
    .get(&id)
    .cloned()
    .map(Json)
    .ok_or_else(|| ApiError::NotFound(format!("scenario {}", id)))
}

#[instrument(level = "info", skip(state, headers))]
pub async fn http_recommended(
  State(state): State<Arc<AppState>>,
  headers: HeaderMap,
  Query(q): Query<LimitQuery>,
) -> impl IntoResponse {
  let completed = state.progress.completed_scenario_ids(&user_id(&headers)).await;
  let rec: Vec<Scenario> = state
    .catalog
    .recommended(&completed, q.limit.unwrap_or(DEFAULT_RECOMMENDED))
    .into_iter()
    .cloned()
    .collect();
  Json(rec)
}

#[instrument(level = "info", skip(state))]
pub async fn http_categories(State(state): State<Arc<AppState>>) -> impl IntoResponse {
  Json(CategoriesOut { categories: state.catalog.categories() })
}

#[instrument(level = "info", skip(state, headers))]
pub async fn http_insights(State(state): State<Arc<AppState>>, headers: HeaderMap) -> impl IntoResponse {
  let completed = state.progress.completed_scenario_ids(&user_id(&headers)).await;
  Json(state.catalog.insights(&completed))
}

#[instrument(level = "info", skip(state, body), fields(logic_len = body.logic.len(), scenario_len = body.scenario.len()))]
pub async fn http_post_translate(
  State(state): State<Arc<AppState>>,
  Json(body): Json<TranslateIn>,
) -> impl IntoResponse {
  if state.generation_delay_ms > 0 {
    tokio::time::sleep(Duration::from_millis(state.generation_delay_ms)).await;
  }
  let result = state.translator.translate(&body.logic, &body.scenario);
  info!(target: "translator", template = ?result.template, "HTTP translation served");
  Json(result)
}

#[instrument(level = "info", skip(state, body), fields(logic_len = body.logic.len(), language = ?body.language))]
pub async fn http_post_assist(
  State(state): State<Arc<AppState>>,
  Json(body): Json<AssistIn>,
) -> impl IntoResponse {
  Json(state.assistant.generate(&body.logic, body.language))
}

#[instrument(level = "info", skip(state, body), fields(code_len = body.code.len(), feedback_len = body.feedback.len()))]
pub async fn http_post_refine(
  State(state): State<Arc<AppState>>,
  Json(body): Json<RefineIn>,
) -> impl IntoResponse {
  Json(state.assistant.refine(&body.code, &body.feedback))
}

#[instrument(level = "info", skip(state, body), fields(code_len = body.code.len()))]
pub async fn http_post_explain(
  State(state): State<Arc<AppState>>,
  Json(body): Json<ExplainIn>,
) -> impl IntoResponse {
  Json(ExplainOut { explanation: state.assistant.explain(&body.code) })
}

#[instrument(level = "info", skip(body), fields(code_len = body.code.len(), to = ?body.target))]
pub async fn http_post_convert(Json(body): Json<ConvertIn>) -> impl IntoResponse {
  Json(ConvertOut { code: convert(&body.code, body.target) })
}

#[instrument(level = "info", skip(state))]
pub async fn http_badges(State(state): State<Arc<AppState>>) -> impl IntoResponse {
  Json(state.progress.get_all_badges().await)
}

#[instrument(level = "info", skip(state, headers, body), fields(scenario_id = %body.scenario_id, completed = body.completed))]
pub async fn http_post_progress(
  State(state): State<Arc<AppState>>,
  headers: HeaderMap,
  Json(body): Json<RecordProgressIn>,
) -> ApiResult<Json<RecordProgressOut>> {
  let awarded = state
    .progress
    .record_progress(
      &user_id(&headers),
      &body.scenario_id,
      &body.user_logic,
      body.generated_code,
      body.language,
      body.completed,
    )
    .await?;
  Ok(Json(RecordProgressOut { awarded }))
}

#[instrument(level = "info", skip(state, headers))]
pub async fn http_get_progress(State(state): State<Arc<AppState>>, headers: HeaderMap) -> impl IntoResponse {
  Json(state.progress.get_user_progress(&user_id(&headers)).await)
}

#[instrument(level = "info", skip(state, headers))]
pub async fn http_progress_stats(State(state): State<Arc<AppState>>, headers: HeaderMap) -> impl IntoResponse {
  Json(state.progress.get_progress_stats(&user_id(&headers)).await)
}

#[instrument(level = "info", skip(state, headers))]
pub async fn http_progress_categories(State(state): State<Arc<AppState>>, headers: HeaderMap) -> impl IntoResponse {
  Json(state.progress.get_category_progress(&user_id(&headers)).await)
}

#[instrument(level = "info", skip(state, headers))]
pub async fn http_progress_activity(
  State(state): State<Arc<AppState>>,
  headers: HeaderMap,
  Query(q): Query<LimitQuery>,
) -> impl IntoResponse {
  let limit = q.limit.unwrap_or(DEFAULT_ACTIVITY_LIMIT);
  Json(state.progress.get_recent_activity(&user_id(&headers), limit).await)
}

#[instrument(level = "info", skip(state, headers))]
pub async fn http_progress_badges(State(state): State<Arc<AppState>>, headers: HeaderMap) -> impl IntoResponse {
  Json(state.progress.get_user_badges(&user_id(&headers)).await)
}

#[instrument(level = "info", skip(state, headers))]
pub async fn http_learning_paths(State(state): State<Arc<AppState>>, headers: HeaderMap) -> impl IntoResponse {
  let completed = state.progress.completed_scenario_ids(&user_id(&headers)).await;
  let out: Vec<LearningPathOut> = state
    .paths
    .paths()
    .iter()
    .zip(state.paths.progress_for(&completed))
    .map(|(path, progress)| LearningPathOut { path: path.clone(), progress })
    .collect();
  Json(out)
}
