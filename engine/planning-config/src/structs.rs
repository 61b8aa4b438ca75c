//! Configuration struct definitions.
//!
//! All config structs with serde deserialization support and default values.

use crate::defaults;
use serde::Deserialize;

// ============================================================================
// Serde default functions (required for #[serde(default = "...")])
// These call the accessor functions from defaults module
// ============================================================================

fn d_log_level() -> String {
    defaults::log_level().into()
}
fn d_num_playouts() -> u32 {
    defaults::num_playouts()
}
fn d_max_planning_time() -> f64 {
    defaults::max_planning_time()
}
fn d_max_depth() -> u32 {
    defaults::max_depth()
}
fn d_pruning_memory_size() -> u32 {
    defaults::pruning_memory_size()
}
fn d_exploration() -> f64 {
    defaults::exploration()
}
fn d_discount() -> f64 {
    defaults::discount()
}
fn d_seed() -> u64 {
    defaults::seed()
}

// ============================================================================
// Configuration Structs
// ============================================================================

/// Root configuration structure matching planner.toml
#[derive(Debug, Deserialize, Default, Clone)]
pub struct PlannerConfig {
    #[serde(default)]
    pub common: CommonConfig,
    #[serde(default)]
    pub search: SearchConfig,
    #[serde(default)]
    pub uct: UctConfig,
}

/// Settings shared by every component
#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct CommonConfig {
    /// Filter for the binary's tracing subscriber (e.g. "info", "mcts=trace").
    /// The planner crates only emit events and never install a subscriber,
    /// so this is read by whatever binary embeds them.
    #[serde(default = "d_log_level")]
    pub log_level: String,
}

impl Default for CommonConfig {
    fn default() -> Self {
        Self {
            log_level: defaults::log_level().into(),
        }
    }
}

/// Search budget settings
///
/// `max_planning_time` is in seconds and kept as a float so that a
/// negative value in the file reaches validation instead of failing to parse.
#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct SearchConfig {
    #[serde(default = "d_num_playouts")]
    pub num_playouts: u32,
    #[serde(default = "d_max_planning_time")]
    pub max_planning_time: f64,
    #[serde(default = "d_max_depth")]
    pub max_depth: u32,
    #[serde(default = "d_pruning_memory_size")]
    pub pruning_memory_size: u32,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            num_playouts: defaults::num_playouts(),
            max_planning_time: defaults::max_planning_time(),
            max_depth: defaults::max_depth(),
            pruning_memory_size: defaults::pruning_memory_size(),
        }
    }
}

/// UCT value estimator settings
#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct UctConfig {
    #[serde(default = "d_exploration")]
    pub exploration: f64,
    #[serde(default = "d_discount")]
    pub discount: f64,
    #[serde(default = "d_seed")]
    pub seed: u64,
}

impl Default for UctConfig {
    fn default() -> Self {
        Self {
            exploration: defaults::exploration(),
            discount: defaults::discount(),
            seed: defaults::seed(),
        }
    }
}
