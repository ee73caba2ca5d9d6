//! Record store seam for progress, badges and earned badges.
//!
//! `ProgressStore` is what the progress service talks to; `InMemoryStore` is
//! the implementation the binary runs with. Each operation takes its lock
//! once, so an upsert or a badge check-and-insert is atomic.

use std::collections::HashMap;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::domain::{Badge, ProgressUpsert, UserBadge, UserProgressRecord};
use crate::error::StoreError;

#[async_trait]
pub trait ProgressStore: Send + Sync {
  async fn list_badges(&self) -> Result<Vec<Badge>, StoreError>;

  /// Insert or replace the record for `(user_id, scenario_id)`.
  async fn upsert_progress(&self, upsert: ProgressUpsert) -> Result<UserProgressRecord, StoreError>;

  /// Newest first by creation time.
  async fn list_progress(&self, user_id: &str) -> Result<Vec<UserProgressRecord>, StoreError>;

  async fn list_user_badges(&self, user_id: &str) -> Result<Vec<UserBadge>, StoreError>;

  /// Returns `Ok(None)` when the user already holds the badge.
  async fn insert_user_badge(
    &self,
    user_id: &str,
    badge_id: &str,
    earned_at: DateTime<Utc>,
  ) -> Result<Option<UserBadge>, StoreError>;
}

#[derive(Default)]
pub struct InMemoryStore {
  badges: RwLock<Vec<Badge>>,
  // keyed by (user_id, scenario_id)
  progress: RwLock<HashMap<(String, String), UserProgressRecord>>,
  user_badges: RwLock<HashMap<String, Vec<UserBadge>>>,
}

impl InMemoryStore {
  pub fn with_badges(badges: Vec<Badge>) -> Self {
    Self { badges: RwLock::new(badges), ..Default::default() }
  }
}

#[async_trait]
impl ProgressStore for InMemoryStore {
  async fn list_badges(&self) -> Result<Vec<Badge>, StoreError> {
    Ok(self.badges.read().await.clone())
  }

  async fn upsert_progress(&self, upsert: ProgressUpsert) -> Result<UserProgressRecord, StoreError> {
    let key = (upsert.user_id.clone(), upsert.scenario_id.clone());
    let mut progress = self.progress.write().await;
    let (id, created_at) = match progress.get(&key) {
      Some(existing) => (existing.id.clone(), existing.created_at),
      None => (Uuid::new_v4().to_string(), Utc::now()),
    };
    let record = UserProgressRecord {
      id,
      user_id: upsert.user_id,
      scenario_id: upsert.scenario_id,
      user_logic: upsert.user_logic,
      generated_code: upsert.generated_code,
      language: upsert.language,
      completed: upsert.completed,
      completed_at: upsert.completed_at,
      created_at,
    };
    progress.insert(key, record.clone());
    Ok(record)
  }

  async fn list_progress(&self, user_id: &str) -> Result<Vec<UserProgressRecord>, StoreError> {
    let progress = self.progress.read().await;
    let mut out: Vec<UserProgressRecord> = progress
      .values()
      .filter(|r| r.user_id == user_id)
      .cloned()
      .collect();
    out.sort_by(|a, b| b.created_at.cmp(&a.created_at));
    Ok(out)
  }

  async fn list_user_badges(&self, user_id: &str) -> Result<Vec<UserBadge>, StoreError> {
    Ok(self.user_badges.read().await.get(user_id).cloned().unwrap_or_default())
  }

  async fn insert_user_badge(
    &self,
    user_id: &str,
    badge_id: &str,
    earned_at: DateTime<Utc>,
  ) -> Result<Option<UserBadge>, StoreError> {
    let mut user_badges = self.user_badges.write().await;
    let held = user_badges.entry(user_id.to_string()).or_default();
    if held.iter().any(|b| b.badge_id == badge_id) {
      return Ok(None);
    }
    let row = UserBadge {
      id: Uuid::new_v4().to_string(),
      user_id: user_id.to_string(),
      badge_id: badge_id.to_string(),
      earned_at,
    };
    held.push(row.clone());
    Ok(Some(row))
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::domain::Language;

  fn upsert(user: &str, scenario: &str, completed: bool) -> ProgressUpsert {
    ProgressUpsert {
      user_id: user.into(),
      scenario_id: scenario.into(),
      user_logic: "if sunny then shorts".into(),
      generated_code: None,
      language: Language::Python,
      completed,
      completed_at: completed.then(Utc::now),
    }
  }

  #[tokio::test]
  async fn upsert_replaces_and_keeps_identity() {
    let store = InMemoryStore::default();
    let first = store.upsert_progress(upsert("u1", "1", false)).await.unwrap();
    let second = store.upsert_progress(upsert("u1", "1", true)).await.unwrap();
    assert_eq!(first.id, second.id);
    assert_eq!(first.created_at, second.created_at);

    let rows = store.list_progress("u1").await.unwrap();
    assert_eq!(rows.len(), 1);
    assert!(rows[0].completed);
  }

  #[tokio::test]
  async fn progress_is_scoped_per_user() {
    let store = InMemoryStore::default();
    store.upsert_progress(upsert("u1", "1", true)).await.unwrap();
    store.upsert_progress(upsert("u2", "1", true)).await.unwrap();
    store.upsert_progress(upsert("u2", "2", true)).await.unwrap();
    assert_eq!(store.list_progress("u1").await.unwrap().len(), 1);
    assert_eq!(store.list_progress("u2").await.unwrap().len(), 2);
    assert!(store.list_progress("nobody").await.unwrap().is_empty());
  }

  #[tokio::test]
  async fn badge_insert_is_check_and_insert() {
    let store = InMemoryStore::default();
    let now = Utc::now();
    assert!(store.insert_user_badge("u1", "b1", now).await.unwrap().is_some());
    assert!(store.insert_user_badge("u1", "b1", now).await.unwrap().is_none());
    assert!(store.insert_user_badge("u2", "b1", now).await.unwrap().is_some());
    assert_eq!(store.list_user_badges("u1").await.unwrap().len(), 1);
  }
}
