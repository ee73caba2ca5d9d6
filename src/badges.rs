//! Badge rules and their evaluation.
//!
//! - Rules are data, keyed by badge *name* (names are stable across stores,
//!   ids are not).
//! - Evaluation is pure: given the badge catalog, what the user already holds
//!   and which scenarios they completed, return the badges to award now.
//! - A badge with no rule can never be earned; `unruled` lists those so
//!   startup can flag them.

use std::collections::{HashMap, HashSet};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::catalog::ScenarioCatalog;
use crate::domain::{Badge, Difficulty};

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum BadgeRule {
  /// Any `count` completed scenarios.
  CompletedAtLeast { count: usize },
  /// `count` completed catalog scenarios matching the difficulty (if given)
  /// and one of the categories (if any are given).
  CompletedMatching {
    count: usize,
    #[serde(default)]
    difficulty: Option<Difficulty>,
    #[serde(default)]
    categories: Vec<String>,
  },
  /// Every listed scenario completed.
  CompletedScenarios { scenario_ids: Vec<String> },
  /// At least one completion in each listed category.
  CoversCategories { categories: Vec<String> },
}

impl BadgeRule {
  pub fn is_met(&self, completed: &[String], catalog: &ScenarioCatalog) -> bool {
    match self {
      BadgeRule::CompletedAtLeast { count } => completed.len() >= *count,
      BadgeRule::CompletedMatching { count, difficulty, categories } => {
        let hits = completed
          .iter()
          .filter_map(|id| catalog.get(id))
          .filter(|s| difficulty.map_or(true, |d| s.difficulty == d))
          .filter(|s| categories.is_empty() || categories.iter().any(|c| *c == s.category))
          .count();
        hits >= *count
      }
      BadgeRule::CompletedScenarios { scenario_ids } => {
        !scenario_ids.is_empty() && scenario_ids.iter().all(|id| completed.contains(id))
      }
      BadgeRule::CoversCategories { categories } => {
        let covered: HashSet<&str> = completed
          .iter()
          .filter_map(|id| catalog.get(id))
          .map(|s| s.category.as_str())
          .collect();
        !categories.is_empty() && categories.iter().all(|c| covered.contains(c.as_str()))
      }
    }
  }
}

/// TOML shape of a configured rule: `badge = "<name>"`, `rule = { kind = ... }`.
#[derive(Clone, Debug, Deserialize)]
pub struct BadgeRuleCfg {
  pub badge: String,
  pub rule: BadgeRule,
}

#[derive(Clone, Debug, Default)]
pub struct BadgeEvaluator {
  rules: HashMap<String, BadgeRule>,
}

impl BadgeEvaluator {
  /// Later entries for the same name replace earlier ones.
  pub fn new(rules: impl IntoIterator<Item = (String, BadgeRule)>) -> Self {
    Self { rules: rules.into_iter().collect() }
  }

  /// Badges not yet earned whose rule is satisfied by `completed`.
  pub fn qualifying(
    &self,
    badges: &[Badge],
    earned_ids: &HashSet<String>,
    completed: &[String],
    catalog: &ScenarioCatalog,
  ) -> Vec<Badge> {
    badges
      .iter()
      .filter(|b| !earned_ids.contains(&b.id))
      .filter(|b| match self.rules.get(&b.name) {
        Some(rule) => rule.is_met(completed, catalog),
        None => false,
      })
      .inspect(|b| debug!(target: "badges", badge = %b.name, "Badge requirement met"))
      .cloned()
      .collect()
  }

  /// Names of badges that no rule can ever award.
  pub fn unruled<'a>(&self, badges: &'a [Badge]) -> Vec<&'a str> {
    badges
      .iter()
      .filter(|b| !self.rules.contains_key(&b.name))
      .map(|b| b.name.as_str())
      .collect()
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::catalog::tests::scenario;
  use crate::seeds::{seed_badge_rules, seed_badges, seed_scenarios};

  fn seeded() -> (BadgeEvaluator, Vec<Badge>, ScenarioCatalog) {
    (
      BadgeEvaluator::new(seed_badge_rules()),
      seed_badges(),
      ScenarioCatalog::new(seed_scenarios().unwrap()),
    )
  }

  fn ids(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
  }

  fn names(badges: &[Badge]) -> Vec<&str> {
    badges.iter().map(|b| b.name.as_str()).collect()
  }

  #[test]
  fn logic_master_fires_at_five_not_four() {
    let (ev, badges, catalog) = seeded();
    let four = ev.qualifying(&badges, &HashSet::new(), &ids(&["1", "2", "3", "4"]), &catalog);
    assert!(!names(&four).contains(&"Logic Master"));
    assert!(names(&four).contains(&"Advanced Thinker"));

    let five = ev.qualifying(&badges, &HashSet::new(), &ids(&["1", "2", "3", "4", "5"]), &catalog);
    assert_eq!(names(&five), vec!["First Steps", "Advanced Thinker", "Logic Master"]);
  }

  #[test]
  fn already_earned_badges_are_not_offered_again() {
    let (ev, badges, catalog) = seeded();
    let earned: HashSet<String> = ["first-steps".to_string()].into_iter().collect();
    let out = ev.qualifying(&badges, &earned, &ids(&["1"]), &catalog);
    assert!(out.is_empty());
  }

  #[test]
  fn matching_rules_use_catalog_category_and_difficulty() {
    let (ev, badges, catalog) = seeded();
    let out = ev.qualifying(&badges, &HashSet::new(), &ids(&["lol-1"]), &catalog);
    assert_eq!(names(&out), vec!["First Steps", "MOBA Master"]);

    let fps = ids(&["valorant-1", "valorant-2", "cs2-1"]);
    let out = ev.qualifying(&badges, &HashSet::new(), &fps, &catalog);
    assert!(names(&out).contains(&"FPS Commander"));
    assert!(!names(&out).contains(&"Tactical Thinker"));

    let advanced = ids(&["cs2-2", "wow-1", "chess-1"]);
    let out = ev.qualifying(&badges, &HashSet::new(), &advanced, &catalog);
    assert!(names(&out).contains(&"Tactical Thinker"));
  }

  #[test]
  fn completed_scenarios_rule_needs_all_of_them() {
    let (ev, badges, catalog) = seeded();
    let one = ev.qualifying(&badges, &HashSet::new(), &ids(&["fortnite-1"]), &catalog);
    assert!(!names(&one).contains(&"Battle Royale Expert"));
    let both = ev.qualifying(&badges, &HashSet::new(), &ids(&["fortnite-1", "apex-1"]), &catalog);
    assert!(names(&both).contains(&"Battle Royale Expert"));
  }

  #[test]
  fn unknown_scenarios_count_only_for_plain_totals() {
    let catalog = ScenarioCatalog::new(vec![scenario("a", Difficulty::Beginner, "Logic", 10, &[])]);
    let matching = BadgeRule::CompletedMatching { count: 1, difficulty: None, categories: vec![] };
    assert!(!matching.is_met(&ids(&["ghost"]), &catalog));
    assert!(BadgeRule::CompletedAtLeast { count: 1 }.is_met(&ids(&["ghost"]), &catalog));
  }

  #[test]
  fn unruled_badges_are_reported() {
    let ev = BadgeEvaluator::new(vec![("First Steps".to_string(), BadgeRule::CompletedAtLeast { count: 1 })]);
    let badges = seed_badges();
    let unruled = ev.unruled(&badges);
    assert!(!unruled.contains(&"First Steps"));
    assert!(unruled.contains(&"Logic Master"));
    assert_eq!(unruled.len(), badges.len() - 1);
  }

  #[test]
  fn rule_parses_from_toml() {
    let cfg: BadgeRuleCfg = toml::from_str(
      r#"
badge = "Puzzle Solver"
rule = { kind = "completed_matching", count = 2, categories = ["Puzzle Games"] }
"#,
    )
    .unwrap();
    assert_eq!(cfg.badge, "Puzzle Solver");
    assert_eq!(
      cfg.rule,
      BadgeRule::CompletedMatching { count: 2, difficulty: None, categories: vec!["Puzzle Games".into()] }
    );
  }
}
