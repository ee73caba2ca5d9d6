//! Built-in content: the scenario catalog, badge catalog, badge rules and
//! learning paths that make the service useful without any config file.

use serde::Deserialize;

use crate::badges::BadgeRule;
use crate::domain::{Badge, Difficulty, LearningPath, Scenario};

/// Categories of the gaming scenarios; used by the gaming badge rules.
pub const GAMING_CATEGORIES: &[&str] = &[
  "Strategy Games",
  "FPS Games",
  "MOBA Games",
  "Sandbox Games",
  "Battle Royale",
  "RPG Games",
  "Social Deduction",
  "MMORPG",
  "Puzzle Games",
  "Mobile Games",
  "Racing Games",
];

const SCENARIOS_TOML: &str = include_str!("../data/scenarios.toml");

#[derive(Deserialize)]
struct ScenarioFile {
  scenarios: Vec<Scenario>,
}

/// Parse the embedded scenario file.
pub fn seed_scenarios() -> Result<Vec<Scenario>, toml::de::Error> {
  toml::from_str::<ScenarioFile>(SCENARIOS_TOML).map(|f| f.scenarios)
}

fn badge(id: &str, name: &str, description: &str, icon: &str, requirement: &str, points: u32) -> Badge {
  Badge {
    id: id.into(),
    name: name.into(),
    description: description.into(),
    icon: icon.into(),
    requirement: requirement.into(),
    points,
  }
}

pub fn seed_badges() -> Vec<Badge> {
  vec![
    badge("first-steps", "First Steps", "Complete your first scenario", "🎯", "Complete 1 scenario", 50),
    badge("advanced-thinker", "Advanced Thinker", "Complete three scenarios", "🧠", "Complete 3 scenarios", 150),
    badge("logic-master", "Logic Master", "Complete five scenarios", "🏆", "Complete 5 scenarios", 250),
    badge(
      "gaming-strategist",
      "Gaming Strategist",
      "Complete 5 gaming strategy scenarios",
      "🎮",
      "Complete 5 scenarios in Gaming Strategy category",
      300,
    ),
    badge(
      "tactical-thinker",
      "Tactical Thinker",
      "Master advanced gaming decision-making",
      "🧠",
      "Complete 3 advanced gaming scenarios",
      400,
    ),
    badge(
      "battle-royale-expert",
      "Battle Royale Expert",
      "Complete scenarios from battle royale games",
      "🏆",
      "Complete the Fortnite and Apex Legends scenarios",
      250,
    ),
    badge(
      "moba-master",
      "MOBA Master",
      "Excel at multiplayer online battle arena logic",
      "⚔️",
      "Complete a MOBA scenario",
      200,
    ),
    badge(
      "fps-commander",
      "FPS Commander",
      "Master first-person shooter strategies",
      "🎯",
      "Complete 3 FPS scenarios",
      350,
    ),
    badge(
      "all-game-veteran",
      "All-Game Veteran",
      "Complete scenarios from all gaming categories",
      "🏅",
      "Complete at least 1 scenario from each game type",
      500,
    ),
  ]
}

fn strings(items: &[&str]) -> Vec<String> {
  items.iter().map(|s| s.to_string()).collect()
}

/// Default rules keyed by badge name.
pub fn seed_badge_rules() -> Vec<(String, BadgeRule)> {
  let gaming = strings(GAMING_CATEGORIES);
  vec![
    ("First Steps".into(), BadgeRule::CompletedAtLeast { count: 1 }),
    ("Advanced Thinker".into(), BadgeRule::CompletedAtLeast { count: 3 }),
    ("Logic Master".into(), BadgeRule::CompletedAtLeast { count: 5 }),
    (
      "Gaming Strategist".into(),
      BadgeRule::CompletedMatching { count: 5, difficulty: None, categories: gaming.clone() },
    ),
    (
      "Tactical Thinker".into(),
      BadgeRule::CompletedMatching { count: 3, difficulty: Some(Difficulty::Advanced), categories: gaming.clone() },
    ),
    (
      "Battle Royale Expert".into(),
      BadgeRule::CompletedScenarios { scenario_ids: strings(&["fortnite-1", "apex-1"]) },
    ),
    (
      "MOBA Master".into(),
      BadgeRule::CompletedMatching { count: 1, difficulty: None, categories: strings(&["MOBA Games"]) },
    ),
    (
      "FPS Commander".into(),
      BadgeRule::CompletedMatching { count: 3, difficulty: None, categories: strings(&["FPS Games"]) },
    ),
    ("All-Game Veteran".into(), BadgeRule::CoversCategories { categories: gaming }),
  ]
}

#[allow(clippy::too_many_arguments)]
fn path(
  id: &str,
  title: &str,
  description: &str,
  difficulty: Difficulty,
  estimated_duration: &str,
  prerequisites: &[&str],
  scenarios: &[&str],
  learning_objectives: &[&str],
  badge_reward: &str,
  category: &str,
  order: u32,
) -> LearningPath {
  LearningPath {
    id: id.into(),
    title: title.into(),
    description: description.into(),
    difficulty,
    estimated_duration: estimated_duration.into(),
    prerequisites: strings(prerequisites),
    scenarios: strings(scenarios),
    learning_objectives: strings(learning_objectives),
    badge_reward: badge_reward.into(),
    category: category.into(),
    order,
  }
}

pub fn seed_learning_paths() -> Vec<LearningPath> {
  vec![
    path(
      "lp1",
      "Programming Fundamentals",
      "Master the basics of programming through real-world decision making and logic.",
      Difficulty::Beginner,
      "4 hours",
      &[],
      &["1", "2"],
      &[
        "Understand conditional logic and decision-making",
        "Learn to organize data using sorting techniques",
        "Master if/else statements and basic functions",
        "Apply logical thinking to solve everyday problems",
      ],
      "Code Novice Badge",
      "Programming Basics",
      1,
    ),
    path(
      "lp2",
      "Data Processing & Functions",
      "Learn to process data, create reusable functions, and handle complex logic.",
      Difficulty::Intermediate,
      "5 hours",
      &["lp1"],
      &["3", "4"],
      &[
        "Create and use functions effectively",
        "Process and manipulate data structures",
        "Implement complex decision-making logic",
        "Handle multiple input parameters and conditions",
      ],
      "Function Master Badge",
      "Data Processing",
      2,
    ),
    path(
      "lp3",
      "Advanced Algorithms & Systems",
      "Master complex algorithms, data structures, and system design.",
      Difficulty::Advanced,
      "8 hours",
      &["lp2"],
      &["5", "6", "advanced-algo-1", "advanced-domain-1"],
      &[
        "Implement advanced algorithms like pathfinding",
        "Design automated trading and financial systems",
        "Create complex data processing pipelines",
        "Build scalable system architectures",
      ],
      "Algorithm Expert Badge",
      "Advanced Algorithms",
      3,
    ),
    path(
      "lp4",
      "Game Development Logic",
      "Apply programming concepts to game development and interactive systems.",
      Difficulty::Intermediate,
      "6 hours",
      &["lp2"],
      &["clash-1", "clash-2", "valorant-1", "valorant-2"],
      &[
        "Implement game logic and mechanics",
        "Create strategy and decision-making systems",
        "Handle real-time data processing",
        "Design interactive user experiences",
      ],
      "Game Logic Master Badge",
      "Game Development",
      4,
    ),
    path(
      "lp5",
      "AI & Machine Learning Fundamentals",
      "Introduction to AI concepts through practical gaming and strategy scenarios.",
      Difficulty::Advanced,
      "7 hours",
      &["lp3", "lp4"],
      &["chess-1", "among-us-1", "lol-1"],
      &[
        "Understand pattern recognition and analysis",
        "Implement decision trees and scoring systems",
        "Create behavioral analysis algorithms",
        "Design intelligent recommendation systems",
      ],
      "AI Pioneer Badge",
      "Artificial Intelligence",
      5,
    ),
    path(
      "lp6",
      "System Optimization & Performance",
      "Learn to optimize systems, manage resources, and improve performance.",
      Difficulty::Advanced,
      "6 hours",
      &["lp3"],
      &["f1-1", "cs2-1", "cs2-2", "wow-1"],
      &[
        "Optimize resource allocation and management",
        "Implement performance monitoring systems",
        "Create efficient scheduling algorithms",
        "Design scalable system architectures",
      ],
      "Performance Expert Badge",
      "System Optimization",
      6,
    ),
    path(
      "lp7",
      "Creative Problem Solving",
      "Apply programming to creative challenges and complex problem-solving scenarios.",
      Difficulty::Intermediate,
      "5 hours",
      &["lp2"],
      &["portal-1", "tetris-1", "candy-crush-1", "minecraft-1"],
      &[
        "Solve complex spatial and logical puzzles",
        "Implement physics-based calculations",
        "Create pattern recognition systems",
        "Design automation and optimization algorithms",
      ],
      "Creative Coder Badge",
      "Creative Coding",
      7,
    ),
  ]
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::catalog::ScenarioCatalog;

  #[test]
  fn builtin_scenarios_parse_with_unique_ids() {
    let scenarios = seed_scenarios().unwrap();
    assert_eq!(scenarios.len(), 26);
    let catalog = ScenarioCatalog::new(scenarios);
    assert_eq!(catalog.len(), 26);
    assert_eq!(catalog.get("1").unwrap().title, "Weather-Based Clothing");
  }

  #[test]
  fn every_prerequisite_and_path_scenario_resolves() {
    let catalog = ScenarioCatalog::new(seed_scenarios().unwrap());
    for s in catalog.all() {
      for p in &s.prerequisites {
        assert!(catalog.get(p).is_some(), "{} requires unknown {}", s.id, p);
      }
    }
    let paths = seed_learning_paths();
    for lp in &paths {
      for id in &lp.scenarios {
        assert!(catalog.get(id).is_some(), "{} lists unknown {}", lp.id, id);
      }
      for pre in &lp.prerequisites {
        assert!(paths.iter().any(|p| &p.id == pre), "{} requires unknown path {}", lp.id, pre);
      }
    }
  }

  #[test]
  fn gaming_categories_match_the_catalog() {
    let catalog = ScenarioCatalog::new(seed_scenarios().unwrap());
    let cats = catalog.categories();
    for g in GAMING_CATEGORIES {
      assert!(cats.iter().any(|c| c == g), "no scenario in {}", g);
    }
  }

  #[test]
  fn every_seed_badge_has_a_rule() {
    let rules = seed_badge_rules();
    for b in seed_badges() {
      assert!(rules.iter().any(|(name, _)| *name == b.name), "{} has no rule", b.name);
    }
  }
}
