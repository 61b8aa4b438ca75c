//! Configuration loading logic.
//!
//! Handles loading config from files and applying environment variable overrides.

use crate::PlannerConfig;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

/// Standard locations to search for planner.toml
pub const CONFIG_SEARCH_PATHS: &[&str] = &[
    "planner.toml",    // Current directory
    "../planner.toml", // Parent directory (when running from a crate directory)
];

/// Load the planner configuration.
///
/// Searches for planner.toml in the following order:
/// 1. Path specified by the PLANNER_CONFIG environment variable
/// 2. Current directory (planner.toml)
/// 3. Parent directory (../planner.toml)
///
/// After loading, environment variable overrides are applied.
pub fn load_config() -> PlannerConfig {
    if let Ok(path) = std::env::var("PLANNER_CONFIG") {
        let path = PathBuf::from(&path);
        if path.exists() {
            info!("Loading config from PLANNER_CONFIG: {}", path.display());
            return load_from_path(&path);
        }
        warn!(
            "PLANNER_CONFIG={} not found, searching defaults",
            path.display()
        );
    }

    for path_str in CONFIG_SEARCH_PATHS {
        let path = PathBuf::from(path_str);
        if path.exists() {
            info!("Loading config from {}", path.display());
            return load_from_path(&path);
        }
    }

    debug!("No planner.toml found, using built-in defaults");
    apply_env_overrides(PlannerConfig::default())
}

/// Load configuration from a specific path.
///
/// Unreadable or malformed files are logged and replaced by the defaults.
pub fn load_from_path(path: &Path) -> PlannerConfig {
    match std::fs::read_to_string(path) {
        Ok(content) => match toml::from_str(&content) {
            Ok(config) => apply_env_overrides(config),
            Err(e) => {
                warn!("Failed to parse {}: {}, using defaults", path.display(), e);
                apply_env_overrides(PlannerConfig::default())
            }
        },
        Err(e) => {
            warn!("Failed to read {}: {}, using defaults", path.display(), e);
            apply_env_overrides(PlannerConfig::default())
        }
    }
}

/// Macro to reduce env override boilerplate
macro_rules! env_override {
    // String field
    ($config:expr, $section:ident . $field:ident, $key:expr) => {
        if let Ok(v) = std::env::var($key) {
            $config.$section.$field = v;
        }
    };
    // Parseable field (u32, u64, f64, etc.)
    ($config:expr, $section:ident . $field:ident, $key:expr, parse) => {
        match std::env::var($key).map(|s| s.parse()) {
            Ok(Ok(v)) => $config.$section.$field = v,
            Ok(Err(_)) => warn!("Ignoring unparseable {}", $key),
            Err(_) => {}
        }
    };
}

/// Apply environment variable overrides to a configuration.
///
/// Environment variables follow the pattern: PLANNER_<SECTION>_<KEY>
pub fn apply_env_overrides(mut config: PlannerConfig) -> PlannerConfig {
    // Common
    env_override!(config, common.log_level, "PLANNER_COMMON_LOG_LEVEL");

    // Search
    env_override!(
        config,
        search.num_playouts,
        "PLANNER_SEARCH_NUM_PLAYOUTS",
        parse
    );
    env_override!(
        config,
        search.max_planning_time,
        "PLANNER_SEARCH_MAX_PLANNING_TIME",
        parse
    );
    env_override!(config, search.max_depth, "PLANNER_SEARCH_MAX_DEPTH", parse);
    env_override!(
        config,
        search.pruning_memory_size,
        "PLANNER_SEARCH_PRUNING_MEMORY_SIZE",
        parse
    );

    // UCT
    env_override!(config, uct.exploration, "PLANNER_UCT_EXPLORATION", parse);
    env_override!(config, uct.discount, "PLANNER_UCT_DISCOUNT", parse);
    env_override!(config, uct.seed, "PLANNER_UCT_SEED", parse);

    config
}
