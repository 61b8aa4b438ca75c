//! Value estimator trait for search statistics.
//!
//! The value estimator owns everything the search learns: it picks actions
//! inside rollouts (planning policy), picks the action executed in the real
//! environment (world policy), and backs up rewards from visited
//! transitions. The search engine only decides when and how often it is
//! called. For testing, we provide a random estimator that keeps no
//! statistics at all.

use planning_core::indent;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;
use thiserror::Error;

/// Errors that can occur inside a value estimator.
#[derive(Debug, Error)]
pub enum EstimatorError {
    #[error("No actions available")]
    NoActions,

    #[error("Unknown action: {0}")]
    UnknownAction(String),

    #[error("Backup failed: {0}")]
    Backup(String),
}

/// Trait for value estimators.
///
/// Implementations could be:
/// - RandomEstimator: Uniformly random actions, no statistics (baseline)
/// - UctEstimator: Tabular UCT with discounted backups
/// - Tree- or function-approximation-based estimators
///
/// Every rollout is bracketed by `start_rollout` and `finish_rollout`, with
/// one `visit` per simulated transition in between, in depth order. A
/// rollout may contain no transitions at all.
pub trait ValueEstimator {
    /// Environment state type
    type State: Clone;

    /// Action type
    type Action: Clone;

    /// Action to simulate from `state` during a rollout (exploratory).
    fn select_planning_action(
        &mut self,
        state: &Self::State,
    ) -> Result<Self::Action, EstimatorError>;

    /// Action to execute in the real environment from `state` (exploitative).
    fn select_world_action(&mut self, state: &Self::State) -> Result<Self::Action, EstimatorError>;

    /// A new rollout is about to start.
    fn start_rollout(&mut self);

    /// The rollout took `action` from `state` and received `reward`.
    fn visit(
        &mut self,
        state: &Self::State,
        action: &Self::Action,
        reward: f32,
    ) -> Result<(), EstimatorError>;

    /// The rollout stopped at `state`; `terminal` tells whether the episode
    /// ended there or the rollout was cut short by depth or time.
    fn finish_rollout(&mut self, state: &Self::State, terminal: bool) -> Result<(), EstimatorError>;

    /// Forget all statistics.
    fn restart(&mut self);

    /// Forget statistics not updated within the last `memory_size` rollouts.
    fn prune_old_visits(&mut self, memory_size: u32);

    /// Human-readable dump of the estimator parameters and size.
    fn describe(&self, indentation: usize) -> String;
}

/// Estimator that picks uniformly random actions and learns nothing.
/// Useful as a baseline and for exercising the search loop without a model
/// of values.
#[derive(Debug, Clone)]
pub struct RandomEstimator<S, A> {
    actions: Vec<A>,
    seed: u64,
    rng: ChaCha20Rng,
    _state: std::marker::PhantomData<fn(&S)>,
}

impl<S, A: Clone> RandomEstimator<S, A> {
    pub fn new(actions: Vec<A>, seed: u64) -> Self {
        Self {
            actions,
            seed,
            rng: ChaCha20Rng::seed_from_u64(seed),
            _state: std::marker::PhantomData,
        }
    }

    fn random_action(&mut self) -> Result<A, EstimatorError> {
        self.actions
            .choose(&mut self.rng)
            .cloned()
            .ok_or(EstimatorError::NoActions)
    }
}

impl<S: Clone, A: Clone> ValueEstimator for RandomEstimator<S, A> {
    type State = S;
    type Action = A;

    fn select_planning_action(&mut self, _state: &S) -> Result<A, EstimatorError> {
        self.random_action()
    }

    fn select_world_action(&mut self, _state: &S) -> Result<A, EstimatorError> {
        self.random_action()
    }

    fn start_rollout(&mut self) {}

    fn visit(&mut self, _state: &S, _action: &A, _reward: f32) -> Result<(), EstimatorError> {
        Ok(())
    }

    fn finish_rollout(&mut self, _state: &S, _terminal: bool) -> Result<(), EstimatorError> {
        Ok(())
    }

    fn restart(&mut self) {
        self.rng = ChaCha20Rng::seed_from_u64(self.seed);
    }

    fn prune_old_visits(&mut self, _memory_size: u32) {}

    fn describe(&self, indentation: usize) -> String {
        let prefix = indent(indentation);
        format!(
            "{prefix}random estimator\n{prefix}actions: {}",
            self.actions.len()
        )
    }
}
