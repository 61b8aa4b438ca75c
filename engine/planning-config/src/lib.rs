//! Centralized configuration loading from planner.toml.
//!
//! This crate provides configuration structs and loading logic shared
//! by everything that constructs a planner.
//!
//! # Configuration Priority
//!
//! Settings are loaded with the following priority (highest to lowest):
//! 1. Environment variables (`PLANNER_<SECTION>_<KEY>`)
//! 2. planner.toml file
//! 3. Built-in defaults (config.defaults.toml, embedded at compile time)
//!
//! # Logging
//!
//! `common.log_level` is not applied by any planner crate: they only emit
//! `tracing` events. A binary embedding the planner reads it to build its
//! subscriber filter.
//!
//! # Environment Variable Override Pattern
//!
//! ```text
//! PLANNER_<SECTION>_<KEY>=value
//!
//! Examples:
//!     PLANNER_COMMON_LOG_LEVEL=debug
//!     PLANNER_SEARCH_NUM_PLAYOUTS=200
//!     PLANNER_SEARCH_MAX_PLANNING_TIME=0.5
//!     PLANNER_UCT_EXPLORATION=2.0
//! ```

mod defaults;
mod loader;
mod structs;

pub use defaults::*;
pub use loader::{apply_env_overrides, load_config, load_from_path, CONFIG_SEARCH_PATHS};
pub use structs::*;

#[cfg(test)]
mod tests;
