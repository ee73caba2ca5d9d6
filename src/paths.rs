//! Learning paths: ordered groups of scenarios gated by other paths.

use std::collections::HashSet;

use serde::Serialize;

use crate::domain::LearningPath;
use crate::util::percentage;

#[derive(Clone, Debug, Serialize, PartialEq)]
pub struct PathProgress {
  pub path_id: String,
  pub completed_scenarios: usize,
  pub total_scenarios: usize,
  pub percentage: u32,
  pub unlocked: bool,
  pub completed: bool,
}

#[derive(Clone, Debug, Default)]
pub struct LearningPaths {
  paths: Vec<LearningPath>,
}

impl LearningPaths {
  pub fn new(mut paths: Vec<LearningPath>) -> Self {
    paths.sort_by_key(|p| p.order);
    Self { paths }
  }

  pub fn paths(&self) -> &[LearningPath] {
    &self.paths
  }

  pub fn get(&self, id: &str) -> Option<&LearningPath> {
    self.paths.iter().find(|p| p.id == id)
  }

  fn is_completed(path: &LearningPath, done: &HashSet<&str>) -> bool {
    !path.scenarios.is_empty() && path.scenarios.iter().all(|s| done.contains(s.as_str()))
  }

  /// A path unlocks once every prerequisite path is completed; an unknown
  /// prerequisite keeps it locked.
  pub fn path_progress(&self, path: &LearningPath, completed_ids: &[String]) -> PathProgress {
    let done: HashSet<&str> = completed_ids.iter().map(String::as_str).collect();
    let completed_scenarios = path.scenarios.iter().filter(|s| done.contains(s.as_str())).count();
    let unlocked = path
      .prerequisites
      .iter()
      .all(|pre| self.get(pre).is_some_and(|p| Self::is_completed(p, &done)));

    PathProgress {
      path_id: path.id.clone(),
      completed_scenarios,
      total_scenarios: path.scenarios.len(),
      percentage: percentage(completed_scenarios, path.scenarios.len()),
      unlocked,
      completed: Self::is_completed(path, &done),
    }
  }

  pub fn progress_for(&self, completed_ids: &[String]) -> Vec<PathProgress> {
    self.paths.iter().map(|p| self.path_progress(p, completed_ids)).collect()
  }
}
