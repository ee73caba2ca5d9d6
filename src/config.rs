//! Loading service configuration (extra scenarios, badges, badge rules and
//! the simulated generation delay) from TOML.
//!
//! Expected schema:
//! ```toml
//! generation_delay_ms = 1500
//!
//! [[scenarios]]
//! id = "custom-1"
//! title = "Traffic Lights"
//! description = "..."
//! difficulty = "beginner"
//! category = "Conditional Logic"
//!
//! [[badges]]
//! id = "puzzle-solver"
//! name = "Puzzle Solver"
//! description = "..."
//! icon = "🧩"
//! requirement = "Complete 2 puzzle scenarios"
//! points = 120
//!
//! [[badge_rules]]
//! badge = "Puzzle Solver"
//! rule = { kind = "completed_matching", count = 2, categories = ["Puzzle Games"] }
//! ```

use serde::Deserialize;
use tracing::{error, info};

use crate::badges::BadgeRuleCfg;
use crate::domain::{Badge, Scenario};

#[derive(Clone, Debug, Deserialize, Default)]
pub struct AppConfig {
  /// Pause before answering a translate request (the UI shows a spinner).
  #[serde(default)]
  pub generation_delay_ms: u64,
  #[serde(default)]
  pub scenarios: Vec<Scenario>,
  #[serde(default)]
  pub badges: Vec<Badge>,
  #[serde(default)]
  pub badge_rules: Vec<BadgeRuleCfg>,
}

pub fn parse_config(s: &str) -> Result<AppConfig, toml::de::Error> {
  toml::from_str::<AppConfig>(s)
}

/// Attempt to load `AppConfig` from LOGIC2CODE_CONFIG_PATH. On any parsing/IO error, returns None.
pub fn load_config_from_env() -> Option<AppConfig> {
  let path = std::env::var("LOGIC2CODE_CONFIG_PATH").ok()?;
  match std::fs::read_to_string(&path) {
    Ok(s) => match parse_config(&s) {
      Ok(cfg) => {
        info!(target: "logic2code_backend", %path, scenarios = cfg.scenarios.len(), badges = cfg.badges.len(), "Loaded config (TOML)");
        Some(cfg)
      }
      Err(e) => {
        error!(target: "logic2code_backend", %path, error = %e, "Failed to parse TOML config");
        None
      }
    },
    Err(e) => {
      error!(target: "logic2code_backend", %path, error = %e, "Failed to read TOML config file");
      None
    }
  }
}
