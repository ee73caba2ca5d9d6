//! Domain models used by the backend: scenarios, progress records, badges,
//! learning paths and the transient code-generation result.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// How hard a scenario is. Drives recommendation order and tiered points.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "snake_case")]
pub enum Difficulty {
  Beginner,
  Intermediate,
  Advanced,
}

impl Difficulty {
  pub const ALL: [Difficulty; 3] = [Difficulty::Beginner, Difficulty::Intermediate, Difficulty::Advanced];

  /// Points credited per completed scenario in category aggregates.
  pub fn tier_points(self) -> u32 {
    match self {
      Difficulty::Beginner => 50,
      Difficulty::Intermediate => 100,
      Difficulty::Advanced => 200,
    }
  }

  pub fn rank(self) -> u8 {
    match self {
      Difficulty::Beginner => 1,
      Difficulty::Intermediate => 2,
      Difficulty::Advanced => 3,
    }
  }

  pub fn as_str(self) -> &'static str {
    match self {
      Difficulty::Beginner => "beginner",
      Difficulty::Intermediate => "intermediate",
      Difficulty::Advanced => "advanced",
    }
  }

  pub fn parse(s: &str) -> Option<Self> {
    match s.trim().to_lowercase().as_str() {
      "beginner" => Some(Difficulty::Beginner),
      "intermediate" => Some(Difficulty::Intermediate),
      "advanced" => Some(Difficulty::Advanced),
      _ => None,
    }
  }
}

/// Target language stored alongside a progress record.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum Language {
  #[default]
  Python,
  Javascript,
}

/// A single decision-logic teaching unit. Immutable once the catalog is built.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Scenario {
  pub id: String,
  pub title: String,
  pub description: String,
  pub difficulty: Difficulty,
  pub category: String,
  #[serde(default)] pub prompt: String,
  #[serde(default)] pub example: String,
  #[serde(default)] pub hints: Vec<String>,
  #[serde(default)] pub points: u32,
  #[serde(default)] pub estimated_time: String,
  #[serde(default)] pub prerequisites: Vec<String>,
  #[serde(default)] pub concepts: Vec<String>,
  #[serde(default)] pub real_world_application: String,
}

/// Which canned template the translator picked.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum TemplateKind {
  Weather,
  Sorting,
  Meal,
  Grade,
  Budget,
  Scheduler,
  Pathfinding,
  Trading,
  Inventory,
  Basic,
}

/// Paired code snippets plus the explanation shown under them.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct CodeGenerationResult {
  pub template: TemplateKind,
  pub python: String,
  pub javascript: String,
  pub explanation: String,
}

/// Durable record of one user's interaction with one scenario.
/// At most one exists per (user_id, scenario_id).
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct UserProgressRecord {
  pub id: String,
  pub user_id: String,
  pub scenario_id: String,
  pub user_logic: String,
  pub generated_code: Option<CodeGenerationResult>,
  pub language: Language,
  pub completed: bool,
  pub completed_at: Option<DateTime<Utc>>,
  pub created_at: DateTime<Utc>,
}

/// Write-side shape of a progress upsert; the store assigns ids and creation time.
#[derive(Clone, Debug)]
pub struct ProgressUpsert {
  pub user_id: String,
  pub scenario_id: String,
  pub user_logic: String,
  pub generated_code: Option<CodeGenerationResult>,
  pub language: Language,
  pub completed: bool,
  pub completed_at: Option<DateTime<Utc>>,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Badge {
  pub id: String,
  pub name: String,
  pub description: String,
  pub icon: String,
  pub requirement: String,
  pub points: u32,
}

/// Join row: a user earned a badge. Never mutated after creation.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct UserBadge {
  pub id: String,
  pub user_id: String,
  pub badge_id: String,
  pub earned_at: DateTime<Utc>,
}

/// A `UserBadge` with its badge definition attached.
#[derive(Clone, Debug, Serialize, PartialEq)]
pub struct EarnedBadge {
  pub id: String,
  pub badge_id: String,
  pub earned_at: DateTime<Utc>,
  pub badge: Badge,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct LearningPath {
  pub id: String,
  pub title: String,
  pub description: String,
  pub difficulty: Difficulty,
  pub estimated_duration: String,
  pub prerequisites: Vec<String>,
  pub scenarios: Vec<String>,
  pub learning_objectives: Vec<String>,
  pub badge_reward: String,
  pub category: String,
  pub order: u32,
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn difficulty_tiers_and_ranks() {
    assert_eq!(Difficulty::Beginner.tier_points(), 50);
    assert_eq!(Difficulty::Intermediate.tier_points(), 100);
    assert_eq!(Difficulty::Advanced.tier_points(), 200);
    assert!(Difficulty::Beginner.rank() < Difficulty::Advanced.rank());
  }

  #[test]
  fn difficulty_parse_is_case_insensitive() {
    assert_eq!(Difficulty::parse(" Advanced "), Some(Difficulty::Advanced));
    assert_eq!(Difficulty::parse("expert"), None);
  }

  #[test]
  fn difficulty_serializes_lowercase() {
    let s = serde_json::to_string(&Difficulty::Intermediate).unwrap();
    assert_eq!(s, "\"intermediate\"");
  }
}
