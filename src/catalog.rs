//! Scenario catalog: lookups, filters, search, unlocking and recommendations.
//!
//! The catalog is built once at startup (built-in TOML + optional config
//! entries) and is read-only afterwards, so it is shared behind an `Arc`
//! without locking.

use std::collections::{HashMap, HashSet};

use serde::Serialize;
use tracing::warn;

use crate::domain::{Difficulty, Scenario};
use crate::util::{minutes_from_label, percentage};

#[derive(Clone, Debug, Default)]
pub struct ScenarioCatalog {
  scenarios: Vec<Scenario>,
  index: HashMap<String, usize>,
}

#[derive(Clone, Debug, Serialize, PartialEq)]
pub struct CategoryStat {
  pub category: String,
  pub total: usize,
  pub completed: usize,
  pub percentage: u32,
  pub total_points: u32,
}

#[derive(Clone, Debug, Serialize, PartialEq)]
pub struct DifficultyStat {
  pub difficulty: Difficulty,
  pub total: usize,
  pub completed: usize,
  pub percentage: u32,
}

#[derive(Clone, Debug, Serialize, PartialEq)]
pub struct ProgressInsights {
  pub total_scenarios: usize,
  pub completed_scenarios: usize,
  pub total_points: u32,
  pub average_time_per_scenario: String,
  pub category_stats: Vec<CategoryStat>,
  pub difficulty_stats: Vec<DifficultyStat>,
}

impl ScenarioCatalog {
  /// Build from scenarios in priority order; a later entry never replaces an earlier id.
  pub fn new(scenarios: impl IntoIterator<Item = Scenario>) -> Self {
    let mut catalog = Self::default();
    for s in scenarios {
      if catalog.index.contains_key(&s.id) {
        warn!(target: "logic2code_backend", id = %s.id, "Duplicate scenario id ignored");
        continue;
      }
      catalog.index.insert(s.id.clone(), catalog.scenarios.len());
      catalog.scenarios.push(s);
    }
    catalog
  }

  pub fn all(&self) -> &[Scenario] {
    &self.scenarios
  }

  pub fn len(&self) -> usize {
    self.scenarios.len()
  }

  pub fn get(&self, id: &str) -> Option<&Scenario> {
    self.index.get(id).map(|&i| &self.scenarios[i])
  }

  pub fn by_difficulty(&self, difficulty: Difficulty) -> Vec<&Scenario> {
    self.scenarios.iter().filter(|s| s.difficulty == difficulty).collect()
  }

  pub fn by_category(&self, category: &str) -> Vec<&Scenario> {
    self.scenarios.iter().filter(|s| s.category == category).collect()
  }

  /// Sorted, de-duplicated category labels.
  pub fn categories(&self) -> Vec<String> {
    let mut cats: Vec<String> = self
      .scenarios
      .iter()
      .map(|s| s.category.clone())
      .collect::<HashSet<_>>()
      .into_iter()
      .collect();
    cats.sort();
    cats
  }

  /// Scenarios whose prerequisites have all been completed.
  pub fn unlocked(&self, completed_ids: &[String]) -> Vec<&Scenario> {
    let done: HashSet<&str> = completed_ids.iter().map(String::as_str).collect();
    self
      .scenarios
      .iter()
      .filter(|s| s.prerequisites.iter().all(|p| done.contains(p.as_str())))
      .collect()
  }

  /// Unlocked and not yet completed, easiest first, then by points.
  pub fn recommended(&self, completed_ids: &[String], limit: usize) -> Vec<&Scenario> {
    let done: HashSet<&str> = completed_ids.iter().map(String::as_str).collect();
    let mut out: Vec<&Scenario> = self
      .unlocked(completed_ids)
      .into_iter()
      .filter(|s| !done.contains(s.id.as_str()))
      .collect();
    out.sort_by_key(|s| (s.difficulty.rank(), s.points));
    out.truncate(limit);
    out
  }

  /// Case-insensitive match over title, description, category and concepts.
  pub fn search(&self, query: &str) -> Vec<&Scenario> {
    let q = query.to_lowercase();
    self
      .scenarios
      .iter()
      .filter(|s| {
        s.title.to_lowercase().contains(&q)
          || s.description.to_lowercase().contains(&q)
          || s.category.to_lowercase().contains(&q)
          || s.concepts.iter().any(|c| c.to_lowercase().contains(&q))
      })
      .collect()
  }

  pub fn insights(&self, completed_ids: &[String]) -> ProgressInsights {
    let done: HashSet<&str> = completed_ids.iter().map(String::as_str).collect();
    let completed: Vec<&Scenario> = self
      .scenarios
      .iter()
      .filter(|s| done.contains(s.id.as_str()))
      .collect();

    let category_stats = self
      .categories()
      .into_iter()
      .map(|category| {
        let total = self.scenarios.iter().filter(|s| s.category == category).count();
        let in_cat: Vec<&&Scenario> = completed.iter().filter(|s| s.category == category).collect();
        CategoryStat {
          percentage: percentage(in_cat.len(), total),
          completed: in_cat.len(),
          total_points: in_cat.iter().map(|s| s.points).sum(),
          category,
          total,
        }
      })
      .collect();

    let difficulty_stats = Difficulty::ALL
      .iter()
      .map(|&difficulty| {
        let total = self.scenarios.iter().filter(|s| s.difficulty == difficulty).count();
        let done_here = completed.iter().filter(|s| s.difficulty == difficulty).count();
        DifficultyStat { difficulty, total, completed: done_here, percentage: percentage(done_here, total) }
      })
      .collect();

    ProgressInsights {
      total_scenarios: self.scenarios.len(),
      completed_scenarios: completed.len(),
      total_points: completed.iter().map(|s| s.points).sum(),
      average_time_per_scenario: average_time(&completed),
      category_stats,
      difficulty_stats,
    }
  }
}

fn average_time(scenarios: &[&Scenario]) -> String {
  if scenarios.is_empty() {
    return "0 min".into();
  }
  let total: u32 = scenarios.iter().map(|s| minutes_from_label(&s.estimated_time)).sum();
  let avg = (total as f64 / scenarios.len() as f64).round() as u32;
  format!("{} min", avg)
}
