//! Reference environment models for the planner
//!
//! This crate provides small, fully specified models that demonstrate how
//! to implement the `Model` trait and give the search engine something
//! concrete to plan against in tests and benchmarks.
//!
//! - [`TwoStateModel`]: deterministic two-state loop with a fixed horizon
//! - [`ChainWalk`]: stochastic corridor with slippery moves
//!
//! # Usage
//!
//! ```rust
//! use planning_core::Model;
//! use sim_models::{Toggle, TwoState, TwoStateModel};
//!
//! let mut model = TwoStateModel::default();
//! let t = model.take_action(&TwoState::start(), &Toggle::A1).unwrap();
//! assert_eq!(t.reward, 1.0);
//! ```

mod chain_walk;
mod two_state;

pub use chain_walk::{ChainWalk, Move};
pub use two_state::{Position, Toggle, TwoState, TwoStateModel};
