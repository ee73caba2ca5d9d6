//! Progress tracker: records scenario attempts, awards badges on completion
//! and derives per-user aggregates (stats, category progress, activity feed).
//!
//! Error policy:
//!   - writes log and return the `StoreError`
//!   - reads log and degrade to an empty/default value
//!   - a blank user id never reaches the store: reads are empty, writes
//!     fail with `StoreError::MissingUser`

use std::collections::{HashMap, HashSet};
use std::sync::Arc;

use chrono::{DateTime, NaiveDate, Utc};
use serde::Serialize;
use tracing::{error, info, instrument, warn};

use crate::badges::BadgeEvaluator;
use crate::catalog::ScenarioCatalog;
use crate::domain::{
  Badge, CodeGenerationResult, Difficulty, EarnedBadge, Language, ProgressUpsert, UserProgressRecord,
};
use crate::error::StoreError;
use crate::store::ProgressStore;

pub const DEFAULT_ACTIVITY_LIMIT: usize = 10;
const STREAK_CAP: usize = 7;

#[derive(Clone, Debug, Default, Serialize, PartialEq)]
pub struct ProgressStats {
  /// Sum of earned badge points.
  pub total_points: u32,
  pub completed_scenarios: usize,
  pub earned_badges: usize,
  /// Distinct UTC days with a completion, capped at 7.
  pub current_streak: usize,
  /// Sum of difficulty-tier points over completed catalog scenarios.
  pub scenario_points: u32,
}

#[derive(Clone, Debug, Serialize, PartialEq)]
pub struct CategoryProgress {
  pub category: String,
  pub completed: usize,
  pub total: usize,
  pub percentage: u32,
  pub difficulty: Difficulty,
  pub points: u32,
}

#[derive(Clone, Debug, Serialize, PartialEq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Activity {
  ScenarioCompleted { date: DateTime<Utc>, record: UserProgressRecord },
  BadgeEarned { date: DateTime<Utc>, badge: EarnedBadge },
}

impl Activity {
  pub fn date(&self) -> DateTime<Utc> {
    match self {
      Activity::ScenarioCompleted { date, .. } | Activity::BadgeEarned { date, .. } => *date,
    }
  }
}

#[derive(Clone)]
pub struct ProgressService {
  store: Arc<dyn ProgressStore>,
  catalog: Arc<ScenarioCatalog>,
  evaluator: BadgeEvaluator,
}

fn no_user(user_id: &str) -> bool {
  user_id.trim().is_empty()
}

impl ProgressService {
  pub fn new(store: Arc<dyn ProgressStore>, catalog: Arc<ScenarioCatalog>, evaluator: BadgeEvaluator) -> Self {
    Self { store, catalog, evaluator }
  }

  /// Upsert the (user, scenario) record; on completion, award any newly
  /// qualifying badges and return them.
  #[instrument(level = "info", target = "progress", skip(self, user_logic, generated_code), fields(logic_len = user_logic.len()))]
  pub async fn record_progress(
    &self,
    user_id: &str,
    scenario_id: &str,
    user_logic: &str,
    generated_code: Option<CodeGenerationResult>,
    language: Language,
    completed: bool,
  ) -> Result<Vec<Badge>, StoreError> {
    if no_user(user_id) {
      return Err(StoreError::MissingUser);
    }
    if self.catalog.get(scenario_id).is_none() {
      warn!(target: "progress", %scenario_id, "Progress for unknown scenario rejected");
      return Err(StoreError::UnknownScenario(scenario_id.to_string()));
    }

    let upsert = ProgressUpsert {
      user_id: user_id.to_string(),
      scenario_id: scenario_id.to_string(),
      user_logic: user_logic.to_string(),
      generated_code,
      language,
      completed,
      completed_at: completed.then(Utc::now),
    };
    if let Err(e) = self.store.upsert_progress(upsert).await {
      error!(target: "progress", %user_id, %scenario_id, error = %e, "Failed to record progress");
      return Err(e);
    }
    info!(target: "progress", %user_id, %scenario_id, completed, "Progress recorded");

    if !completed {
      return Ok(Vec::new());
    }
    Ok(self.award_badges(user_id).await)
  }

  async fn award_badges(&self, user_id: &str) -> Vec<Badge> {
    let (progress, held, badges) = tokio::join!(
      self.store.list_progress(user_id),
      self.store.list_user_badges(user_id),
      self.store.list_badges(),
    );
    let (progress, held, badges) = match (progress, held, badges) {
      (Ok(p), Ok(h), Ok(b)) => (p, h, b),
      (p, h, b) => {
        let e = p.err().or(h.err()).or(b.err());
        error!(target: "badges", %user_id, error = ?e, "Badge check skipped: store read failed");
        return Vec::new();
      }
    };

    let earned: HashSet<String> = held.into_iter().map(|ub| ub.badge_id).collect();
    let completed = completed_ids(&progress);
    let candidates = self.evaluator.qualifying(&badges, &earned, &completed, &self.catalog);

    let mut awarded = Vec::new();
    for badge in candidates {
      match self.store.insert_user_badge(user_id, &badge.id, Utc::now()).await {
        Ok(Some(_)) => {
          info!(target: "badges", %user_id, badge = %badge.name, points = badge.points, "Badge awarded");
          awarded.push(badge);
        }
        Ok(None) => {}
        Err(e) => error!(target: "badges", %user_id, badge = %badge.name, error = %e, "Failed to award badge"),
      }
    }
    awarded
  }

  pub async fn get_user_progress(&self, user_id: &str) -> Vec<UserProgressRecord> {
    if no_user(user_id) {
      return Vec::new();
    }
    match self.store.list_progress(user_id).await {
      Ok(rows) => rows,
      Err(e) => {
        error!(target: "progress", %user_id, error = %e, "Error fetching user progress");
        Vec::new()
      }
    }
  }

  pub async fn get_user_badges(&self, user_id: &str) -> Vec<EarnedBadge> {
    if no_user(user_id) {
      return Vec::new();
    }
    let (held, badges) = tokio::join!(self.store.list_user_badges(user_id), self.store.list_badges());
    let (held, badges) = match (held, badges) {
      (Ok(h), Ok(b)) => (h, b),
      (h, b) => {
        let e = h.err().or(b.err());
        error!(target: "progress", %user_id, error = ?e, "Error fetching user badges");
        return Vec::new();
      }
    };
    let by_id: HashMap<&str, &Badge> = badges.iter().map(|b| (b.id.as_str(), b)).collect();
    held
      .into_iter()
      .filter_map(|ub| match by_id.get(ub.badge_id.as_str()) {
        Some(badge) => Some(EarnedBadge {
          id: ub.id,
          badge_id: ub.badge_id,
          earned_at: ub.earned_at,
          badge: (*badge).clone(),
        }),
        None => {
          warn!(target: "progress", %user_id, badge_id = %ub.badge_id, "Earned badge missing from catalog");
          None
        }
      })
      .collect()
  }

  /// Badge catalog, cheapest first.
  pub async fn get_all_badges(&self) -> Vec<Badge> {
    match self.store.list_badges().await {
      Ok(mut badges) => {
        badges.sort_by_key(|b| b.points);
        badges
      }
      Err(e) => {
        error!(target: "progress", error = %e, "Error fetching badges");
        Vec::new()
      }
    }
  }

  pub async fn completed_scenario_ids(&self, user_id: &str) -> Vec<String> {
    completed_ids(&self.get_user_progress(user_id).await)
  }

  pub async fn get_progress_stats(&self, user_id: &str) -> ProgressStats {
    if no_user(user_id) {
      return ProgressStats::default();
    }
    let (progress, badges) = tokio::join!(self.get_user_progress(user_id), self.get_user_badges(user_id));
    let completed: Vec<&UserProgressRecord> = progress.iter().filter(|p| p.completed).collect();
    let scenario_points = completed
      .iter()
      .filter_map(|p| self.catalog.get(&p.scenario_id))
      .map(|s| s.difficulty.tier_points())
      .sum();

    ProgressStats {
      total_points: badges.iter().map(|b| b.badge.points).sum(),
      completed_scenarios: completed.len(),
      earned_badges: badges.len(),
      current_streak: streak(&progress),
      scenario_points,
    }
  }

  /// One entry per catalog category, in catalog order.
  pub async fn get_category_progress(&self, user_id: &str) -> Vec<CategoryProgress> {
    let progress = self.get_user_progress(user_id).await;
    let mut rows: Vec<CategoryProgress> = Vec::new();
    let mut index: HashMap<String, usize> = HashMap::new();

    for s in self.catalog.all() {
      let i = *index.entry(s.category.clone()).or_insert_with(|| {
        rows.push(CategoryProgress {
          category: s.category.clone(),
          completed: 0,
          total: 0,
          percentage: 0,
          difficulty: s.difficulty,
          points: 0,
        });
        rows.len() - 1
      });
      rows[i].total += 1;
    }

    for p in progress.iter().filter(|p| p.completed) {
      let Some(s) = self.catalog.get(&p.scenario_id) else { continue };
      if let Some(&i) = index.get(&s.category) {
        rows[i].completed += 1;
        rows[i].points += s.difficulty.tier_points();
      }
    }

    for row in &mut rows {
      row.percentage = crate::util::percentage(row.completed, row.total);
    }
    rows
  }

  /// Completions and badge awards merged, newest first.
  pub async fn get_recent_activity(&self, user_id: &str, limit: usize) -> Vec<Activity> {
    let (progress, badges) = tokio::join!(self.get_user_progress(user_id), self.get_user_badges(user_id));

    let mut out: Vec<Activity> = progress
      .into_iter()
      .filter(|p| p.completed)
      .filter_map(|p| p.completed_at.map(|date| Activity::ScenarioCompleted { date, record: p }))
      .chain(badges.into_iter().map(|b| Activity::BadgeEarned { date: b.earned_at, badge: b }))
      .collect();
    out.sort_by(|a, b| b.date().cmp(&a.date()));
    out.truncate(limit);
    out
  }
}

fn completed_ids(progress: &[UserProgressRecord]) -> Vec<String> {
  progress.iter().filter(|p| p.completed).map(|p| p.scenario_id.clone()).collect()
}

fn streak(progress: &[UserProgressRecord]) -> usize {
  let days: HashSet<NaiveDate> = progress
    .iter()
    .filter(|p| p.completed)
    .filter_map(|p| p.completed_at)
    .map(|at| at.date_naive())
    .collect();
  days.len().min(STREAK_CAP)
}

#[cfg(test)]
mod tests {
  use super::*;
  use async_trait::async_trait;
  use chrono::{Duration, TimeZone};

  use crate::domain::UserBadge;
  use crate::seeds::{seed_badge_rules, seed_badges, seed_scenarios};
  use crate::store::InMemoryStore;

  fn service_with(store: Arc<dyn ProgressStore>) -> ProgressService {
    ProgressService::new(
      store,
      Arc::new(ScenarioCatalog::new(seed_scenarios().unwrap())),
      BadgeEvaluator::new(seed_badge_rules()),
    )
  }

  fn service() -> (ProgressService, Arc<InMemoryStore>) {
    let store = Arc::new(InMemoryStore::with_badges(seed_badges()));
    (service_with(store.clone()), store)
  }

  async fn complete(svc: &ProgressService, user: &str, scenario: &str) -> Vec<Badge> {
    svc.record_progress(user, scenario, "logic", None, Language::Python, true).await.unwrap()
  }

  struct FailingStore;

  #[async_trait]
  impl ProgressStore for FailingStore {
    async fn list_badges(&self) -> Result<Vec<Badge>, StoreError> {
      Err(StoreError::Unavailable("down".into()))
    }
    async fn upsert_progress(&self, _: ProgressUpsert) -> Result<UserProgressRecord, StoreError> {
      Err(StoreError::Unavailable("down".into()))
    }
    async fn list_progress(&self, _: &str) -> Result<Vec<UserProgressRecord>, StoreError> {
      Err(StoreError::Unavailable("down".into()))
    }
    async fn list_user_badges(&self, _: &str) -> Result<Vec<UserBadge>, StoreError> {
      Err(StoreError::Unavailable("down".into()))
    }
    async fn insert_user_badge(&self, _: &str, _: &str, _: DateTime<Utc>) -> Result<Option<UserBadge>, StoreError> {
      Err(StoreError::Unavailable("down".into()))
    }
  }

  #[tokio::test]
  async fn repeated_records_keep_one_row_per_scenario() {
    let (svc, _) = service();
    svc.record_progress("u1", "1", "first try", None, Language::Python, false).await.unwrap();
    svc.record_progress("u1", "1", "second try", None, Language::Javascript, true).await.unwrap();
    let rows = svc.get_user_progress("u1").await;
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].user_logic, "second try");
    assert!(rows[0].completed);
    assert!(rows[0].completed_at.is_some());
  }

  #[tokio::test]
  async fn incomplete_record_has_no_completion_time_and_awards_nothing() {
    let (svc, _) = service();
    let awarded = svc.record_progress("u1", "1", "x", None, Language::Python, false).await.unwrap();
    assert!(awarded.is_empty());
    assert_eq!(svc.get_user_progress("u1").await[0].completed_at, None);
    assert!(svc.get_user_badges("u1").await.is_empty());
  }

  #[tokio::test]
  async fn logic_master_is_awarded_once_on_the_fifth_completion() {
    let (svc, _) = service();
    for id in ["1", "2", "3", "4"] {
      let awarded = complete(&svc, "u1", id).await;
      assert!(!awarded.iter().any(|b| b.name == "Logic Master"));
    }
    let awarded = complete(&svc, "u1", "5").await;
    assert_eq!(awarded.iter().map(|b| b.name.as_str()).collect::<Vec<_>>(), vec!["Logic Master"]);

    // completing again (or another scenario) never re-awards
    assert!(complete(&svc, "u1", "5").await.is_empty());
    complete(&svc, "u1", "6").await;
    let held = svc.get_user_badges("u1").await;
    assert_eq!(held.iter().filter(|b| b.badge.name == "Logic Master").count(), 1);
  }

  #[tokio::test]
  async fn stats_after_five_completions() {
    let (svc, _) = service();
    for id in ["1", "2", "3", "4", "5"] {
      complete(&svc, "u1", id).await;
    }
    let stats = svc.get_progress_stats("u1").await;
    assert_eq!(stats.completed_scenarios, 5);
    assert_eq!(stats.earned_badges, 3);
    assert_eq!(stats.total_points, 50 + 150 + 250);
    assert_eq!(stats.current_streak, 1);
    // 2 beginner + 2 intermediate + 1 advanced
    assert_eq!(stats.scenario_points, 50 * 2 + 100 * 2 + 200);
  }

  #[tokio::test]
  async fn streak_counts_distinct_days_and_caps_at_seven() {
    let (svc, store) = service();
    let base = Utc.with_ymd_and_hms(2024, 3, 1, 10, 0, 0).unwrap();
    let ids: Vec<String> = svc.catalog.all().iter().take(10).map(|s| s.id.clone()).collect();
    for (i, id) in ids.iter().enumerate() {
      store
        .upsert_progress(ProgressUpsert {
          user_id: "u1".into(),
          scenario_id: id.clone(),
          user_logic: String::new(),
          generated_code: None,
          language: Language::Python,
          completed: true,
          completed_at: Some(base + Duration::days((i / 2) as i64)),
        })
        .await
        .unwrap();
    }
    // 10 completions over 5 days
    assert_eq!(svc.get_progress_stats("u1").await.current_streak, 5);

    for (i, s) in svc.catalog.all().iter().skip(10).enumerate() {
      store
        .upsert_progress(ProgressUpsert {
          user_id: "u1".into(),
          scenario_id: s.id.clone(),
          user_logic: String::new(),
          generated_code: None,
          language: Language::Python,
          completed: true,
          completed_at: Some(base + Duration::days(10 + i as i64)),
        })
        .await
        .unwrap();
    }
    assert_eq!(svc.get_progress_stats("u1").await.current_streak, 7);
  }

  #[tokio::test]
  async fn category_progress_lists_every_category_with_zero_percentages() {
    let (svc, _) = service();
    let rows = svc.get_category_progress("u1").await;
    assert_eq!(rows.len(), svc.catalog.categories().len());
    assert_eq!(rows[0].category, "Conditional Logic");
    assert!(rows.iter().all(|r| r.completed == 0 && r.percentage == 0 && r.points == 0));
  }

  #[tokio::test]
  async fn category_progress_counts_tier_points() {
    let (svc, _) = service();
    complete(&svc, "u1", "5").await;
    complete(&svc, "u1", "advanced-domain-1").await;
    let rows = svc.get_category_progress("u1").await;
    let data = rows.iter().find(|r| r.category == "Data Processing").unwrap();
    assert_eq!((data.completed, data.total, data.percentage, data.points), (2, 2, 100, 400));
    assert_eq!(data.difficulty, Difficulty::Advanced);
  }

  #[tokio::test]
  async fn recent_activity_merges_newest_first_and_honours_limit() {
    let (svc, _) = service();
    for id in ["1", "2", "3"] {
      complete(&svc, "u1", id).await;
    }
    let all = svc.get_recent_activity("u1", DEFAULT_ACTIVITY_LIMIT).await;
    // 3 completions + First Steps + Advanced Thinker
    assert_eq!(all.len(), 5);
    assert!(all.windows(2).all(|w| w[0].date() >= w[1].date()));
    assert!(all.iter().any(|a| matches!(a, Activity::BadgeEarned { .. })));
    assert!(all.iter().any(|a| matches!(a, Activity::ScenarioCompleted { .. })));

    assert_eq!(svc.get_recent_activity("u1", 2).await.len(), 2);
  }

  #[tokio::test]
  async fn activity_serializes_with_type_tag() {
    let (svc, _) = service();
    complete(&svc, "u1", "1").await;
    let feed = svc.get_recent_activity("u1", 10).await;
    let json = serde_json::to_value(&feed).unwrap();
    let kinds: Vec<&str> = json.as_array().unwrap().iter().map(|a| a["type"].as_str().unwrap()).collect();
    assert!(kinds.contains(&"scenario_completed"));
    assert!(kinds.contains(&"badge_earned"));
  }

  #[tokio::test]
  async fn failing_store_reads_empty_and_write_errors() {
    let svc = service_with(Arc::new(FailingStore));
    assert!(svc.get_user_progress("u1").await.is_empty());
    assert!(svc.get_user_badges("u1").await.is_empty());
    assert!(svc.get_all_badges().await.is_empty());
    assert_eq!(svc.get_progress_stats("u1").await, ProgressStats::default());
    assert!(svc.get_recent_activity("u1", 10).await.is_empty());
    let err = svc.record_progress("u1", "1", "x", None, Language::Python, true).await.unwrap_err();
    assert_eq!(err, StoreError::Unavailable("down".into()));
  }

  #[tokio::test]
  async fn blank_user_reads_empty_and_cannot_write() {
    let (svc, _) = service();
    assert!(svc.get_user_progress("  ").await.is_empty());
    assert_eq!(svc.get_progress_stats("").await, ProgressStats::default());
    let err = svc.record_progress("", "1", "x", None, Language::Python, true).await.unwrap_err();
    assert_eq!(err, StoreError::MissingUser);
  }

  #[tokio::test]
  async fn unknown_scenario_is_rejected() {
    let (svc, _) = service();
    let err = svc.record_progress("u1", "nope", "x", None, Language::Python, true).await.unwrap_err();
    assert_eq!(err, StoreError::UnknownScenario("nope".into()));
  }

  #[tokio::test]
  async fn all_badges_sorted_by_points() {
    let (svc, _) = service();
    let badges = svc.get_all_badges().await;
    assert_eq!(badges.len(), seed_badges().len());
    assert!(badges.windows(2).all(|w| w[0].points <= w[1].points));
  }
}
