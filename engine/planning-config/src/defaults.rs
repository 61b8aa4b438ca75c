//! Default configuration values loaded from config.defaults.toml.
//!
//! This module loads defaults from the shared TOML file at compile time,
//! so the documented defaults file and the binary can never disagree.

use once_cell::sync::Lazy;
use serde::Deserialize;

/// The embedded defaults TOML file (loaded at compile time)
const DEFAULTS_TOML: &str = include_str!("../../../config.defaults.toml");

/// Parsed defaults structure (parsed once at first use)
static DEFAULTS: Lazy<DefaultsConfig> = Lazy::new(|| {
    toml::from_str(DEFAULTS_TOML).expect("config.defaults.toml should be valid TOML")
});

// ============================================================================
// Internal structs for parsing config.defaults.toml
// ============================================================================

#[derive(Debug, Deserialize)]
struct DefaultsConfig {
    common: CommonDefaults,
    search: SearchDefaults,
    uct: UctDefaults,
}

#[derive(Debug, Deserialize)]
struct CommonDefaults {
    log_level: String,
}

#[derive(Debug, Deserialize)]
struct SearchDefaults {
    num_playouts: u32,
    max_planning_time: f64,
    max_depth: u32,
    pruning_memory_size: u32,
}

#[derive(Debug, Deserialize)]
struct UctDefaults {
    exploration: f64,
    discount: f64,
    seed: u64,
}

// ============================================================================
// Public accessor functions
// ============================================================================

// Common
pub fn log_level() -> &'static str {
    &DEFAULTS.common.log_level
}

// Search
pub fn num_playouts() -> u32 {
    DEFAULTS.search.num_playouts
}
pub fn max_planning_time() -> f64 {
    DEFAULTS.search.max_planning_time
}
pub fn max_depth() -> u32 {
    DEFAULTS.search.max_depth
}
pub fn pruning_memory_size() -> u32 {
    DEFAULTS.search.pruning_memory_size
}

// UCT
pub fn exploration() -> f64 {
    DEFAULTS.uct.exploration
}
pub fn discount() -> f64 {
    DEFAULTS.uct.discount
}
pub fn seed() -> u64 {
    DEFAULTS.uct.seed
}
