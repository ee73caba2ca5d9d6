//! Application state: scenario catalog, record store, translator, assistant,
//! progress service and learning paths.
//!
//! Everything is built once at startup:
//!   - built-in scenarios and badges come first; config entries never
//!     replace a built-in id (scenarios) or name (badges)
//!   - configured badge rules replace seeded rules of the same name
//!   - badges without a rule are flagged, since nothing can ever award them

use std::collections::{BTreeMap, HashSet};
use std::sync::Arc;

use tracing::{error, info, instrument, warn};

use crate::assistant::Assistant;
use crate::badges::BadgeEvaluator;
use crate::catalog::ScenarioCatalog;
use crate::config::{load_config_from_env, AppConfig};
use crate::paths::LearningPaths;
use crate::progress::ProgressService;
use crate::seeds::{seed_badge_rules, seed_badges, seed_learning_paths, seed_scenarios};
use crate::store::{InMemoryStore, ProgressStore};
use crate::translator::Translator;

#[derive(Clone)]
pub struct AppState {
    pub catalog: Arc<ScenarioCatalog>,
    pub translator: Translator,
    pub assistant: Assistant,
    pub progress: ProgressService,
    pub paths: LearningPaths,
    pub generation_delay_ms: u64,
}

impl AppState {
    /// Build state from env: load config, merge seeds, build the services.
    #[instrument(level = "info", skip_all)]
    pub fn new() -> Self {
        Self::from_config(load_config_from_env().unwrap_or_default())
    }

    pub fn from_config(cfg: AppConfig) -> Self {
        let builtin = seed_scenarios().unwrap_or_else(|e| {
            error!(target: "logic2code_backend", error = %e, "Built-in scenario file is invalid; starting without it");
            Vec::new()
        });
        let catalog = Arc::new(ScenarioCatalog::new(builtin.into_iter().chain(cfg.scenarios)));

        let mut badges = seed_badges();
        let mut names: HashSet<String> = badges.iter().map(|b| b.name.clone()).collect();
        for b in cfg.badges {
            if names.insert(b.name.clone()) {
                badges.push(b);
            } else {
                warn!(target: "badges", badge = %b.name, "Configured badge duplicates a built-in name; ignored");
            }
        }

        let evaluator = BadgeEvaluator::new(
            seed_badge_rules()
                .into_iter()
                .chain(cfg.badge_rules.into_iter().map(|r| (r.badge, r.rule))),
        );
        for name in evaluator.unruled(&badges) {
            warn!(target: "badges", badge = %name, "Badge has no rule and can never be earned");
        }

        // Startup inventory by difficulty.
        let mut count_by_diff: BTreeMap<&str, usize> = BTreeMap::new();
        for s in catalog.all() {
            *count_by_diff.entry(s.difficulty.as_str()).or_default() += 1;
        }
        for (difficulty, count) in count_by_diff {
            info!(target: "logic2code_backend", %difficulty, count, "Startup scenario inventory");
        }
        info!(target: "logic2code_backend", badges = badges.len(), delay_ms = cfg.generation_delay_ms, "Badge catalog ready");

        let store: Arc<dyn ProgressStore> = Arc::new(InMemoryStore::with_badges(badges));
        Self {
            progress: ProgressService::new(store, catalog.clone(), evaluator),
            catalog,
            translator: Translator::default(),
            assistant: Assistant,
            paths: LearningPaths::new(seed_learning_paths()),
            generation_delay_ms: cfg.generation_delay_ms,
        }
    }
}
