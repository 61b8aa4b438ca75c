//! Anytime, model-based Monte Carlo search.
//!
//! This crate provides a search engine that works with any environment
//! model implementing the `planning-core` Model trait. The engine decides
//! when and how often to simulate; what is learned from the simulations is
//! up to a pluggable value estimator.
//!
//! # Overview
//!
//! Each call to [`Mcts::search`] runs rollouts from the agent's current
//! state until a playout count or a wall-clock deadline is reached. Each
//! rollout:
//!
//! 1. **Model selection**: the [`ModelSelector`] picks which model to
//!    simulate with (a single model, or one sampled from an ensemble)
//! 2. **Simulation**: the [`ValueEstimator`] picks planning actions and the
//!    model produces rewards and successor states, until a terminal state,
//!    the depth limit, or the deadline
//! 3. **Backup**: the estimator sees every visited transition and the state
//!    the rollout stopped in
//!
//! The action to execute in the real environment then comes from
//! [`Mcts::select_world_action`].
//!
//! # Usage
//!
//! ```rust
//! use mcts::{Mcts, MctsConfig, SingleModelSelector, UctConfig, UctEstimator};
//! use planning_core::shared;
//! use sim_models::{Toggle, TwoState, TwoStateModel};
//!
//! let estimator = shared(UctEstimator::new(Toggle::ALL.to_vec(), UctConfig::default()));
//! let selector = shared(SingleModelSelector::new(TwoStateModel::default()));
//! let config = MctsConfig::for_testing();
//!
//! let mcts = Mcts::new(estimator, selector, config).unwrap();
//! let stats = mcts.search(&TwoState::start()).unwrap();
//! let action = mcts.select_world_action(&TwoState::start()).unwrap();
//!
//! println!("{} rollouts, best action {:?}", stats.rollouts, action);
//! ```
//!
//! # Configuration
//!
//! The [`MctsConfig`] struct bounds the search:
//!
//! - `num_playouts`: Rollouts per search (default: 1000, 0 = until deadline)
//! - `max_planning_time`: Seconds per search (default: 0.0 = no deadline)
//! - `max_depth`: Steps per rollout (default: 50, 0 = until terminal)
//! - `pruning_memory_size`: Rollouts of history kept by `prune_old_visits`
//!
//! # Estimators
//!
//! - [`RandomEstimator`]: Uniform random actions, no statistics (for testing)
//! - [`UctEstimator`]: Tabular UCT with discounted backups
//!
//! # Architecture
//!
//! ```text
//! +-------------------------------------------------------------+
//! |                            Mcts                             |
//! +-------------------------------------------------------------+
//! |  +----------------+  +----------------+  +----------------+ |
//! |  | ModelSelector  |  |     Model      |  | ValueEstimator | |
//! |  | (which model)  |  | (simulation)   |  | (statistics)   | |
//! |  +-------+--------+  +-------+--------+  +-------+--------+ |
//! |          |                   |                   |          |
//! |          v                   v                   v          |
//! |  +-------------------------------------------------------+  |
//! |  |      select model -> simulate steps -> back up        |  |
//! |  +-------------------------------------------------------+  |
//! +-------------------------------------------------------------+
//! ```

pub mod config;
pub mod estimator;
pub mod node;
pub mod search;
pub mod selector;
pub mod table;
pub mod uct;

// Re-export main types
pub use config::{ConfigError, MctsConfig, HARD_DEPTH_CEILING};
pub use estimator::{EstimatorError, RandomEstimator, ValueEstimator};
pub use node::{ActionStats, NodeId, StateNode};
pub use search::{Mcts, SearchError, SearchStats};
pub use selector::{EnsembleSelector, ModelId, ModelSelector, SelectorError, SingleModelSelector};
pub use table::StateTable;
pub use uct::{UctConfig, UctEstimator};
