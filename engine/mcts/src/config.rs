//! Search engine configuration parameters.

use std::time::Duration;
use thiserror::Error;

/// Simulated steps after which any rollout stops, whatever the configuration.
///
/// Guards against models that never report a terminal state.
pub const HARD_DEPTH_CEILING: u32 = 100_000;

/// Configuration rejected by [`MctsConfig::validate`].
#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("Invalid max_planning_time {0}, must be a finite number of seconds >= 0")]
    InvalidPlanningTime(f64),

    #[error("Must stop planning at some point, either specify num_playouts or max_planning_time")]
    NoStoppingCondition,

    #[error("Rollouts must stop at some point, either specify max_depth or max_planning_time")]
    UnboundedRollout,
}

/// Configuration for the search engine.
///
/// Zero disables a bound: `num_playouts == 0` plans until the deadline,
/// `max_planning_time == 0.0` plans for exactly `num_playouts` rollouts,
/// `max_depth == 0` simulates until the model reports a terminal state.
#[derive(Debug, Clone, PartialEq)]
pub struct MctsConfig {
    /// Rollouts per search call.
    pub num_playouts: u32,

    /// Wall-clock budget per search call, in seconds.
    pub max_planning_time: f64,

    /// Simulated steps per rollout.
    pub max_depth: u32,

    /// How many rollouts of history the value estimator keeps when pruned.
    pub pruning_memory_size: u32,
}

impl Default for MctsConfig {
    fn default() -> Self {
        Self {
            num_playouts: 1000,
            max_planning_time: 0.0,
            max_depth: 50,
            pruning_memory_size: 5000,
        }
    }
}

impl MctsConfig {
    /// Create a fast config for testing.
    pub fn for_testing() -> Self {
        Self {
            num_playouts: 50,
            max_planning_time: 0.0,
            max_depth: 20,
            pruning_memory_size: 100,
        }
    }

    /// Builder pattern: set number of playouts.
    pub fn with_playouts(mut self, n: u32) -> Self {
        self.num_playouts = n;
        self
    }

    /// Builder pattern: set planning time budget in seconds.
    pub fn with_planning_time(mut self, seconds: f64) -> Self {
        self.max_planning_time = seconds;
        self
    }

    /// Builder pattern: set maximum rollout depth.
    pub fn with_max_depth(mut self, depth: u32) -> Self {
        self.max_depth = depth;
        self
    }

    /// Builder pattern: set pruning memory size.
    pub fn with_pruning_memory(mut self, rollouts: u32) -> Self {
        self.pruning_memory_size = rollouts;
        self
    }

    /// Check that the search and every rollout have a way to stop.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if Duration::try_from_secs_f64(self.max_planning_time).is_err() {
            return Err(ConfigError::InvalidPlanningTime(self.max_planning_time));
        }
        if self.num_playouts == 0 && self.max_planning_time == 0.0 {
            return Err(ConfigError::NoStoppingCondition);
        }
        if self.max_depth == 0 && self.max_planning_time == 0.0 {
            return Err(ConfigError::UnboundedRollout);
        }
        Ok(())
    }

    /// Planning time budget, or `None` when searches are bounded by playouts only.
    pub fn planning_budget(&self) -> Option<Duration> {
        if self.max_planning_time > 0.0 {
            Duration::try_from_secs_f64(self.max_planning_time).ok()
        } else {
            None
        }
    }

    /// Effective per-rollout step limit, including the hard ceiling.
    pub fn depth_limit(&self) -> u32 {
        if self.max_depth == 0 {
            HARD_DEPTH_CEILING
        } else {
            self.max_depth.min(HARD_DEPTH_CEILING)
        }
    }
}

impl From<&planning_config::SearchConfig> for MctsConfig {
    fn from(settings: &planning_config::SearchConfig) -> Self {
        Self {
            num_playouts: settings.num_playouts,
            max_planning_time: settings.max_planning_time,
            max_depth: settings.max_depth,
            pruning_memory_size: settings.pruning_memory_size,
        }
    }
}
