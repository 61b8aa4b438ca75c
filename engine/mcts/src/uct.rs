//! Tabular UCT value estimator.
//!
//! Statistics are keyed by state over a fixed action list. During planning,
//! untried actions are explored first (uniformly at random among them),
//! then UCB1 picks the action. The world policy is greedy on mean value.
//! Returns are backed up at the end of each rollout with discounting, and
//! rollouts cut short by depth or time bootstrap from the best known value
//! of the state they stopped in.

use std::hash::Hash;

use planning_core::indent;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha20Rng;
use tracing::debug;

use crate::estimator::{EstimatorError, ValueEstimator};
use crate::node::StateNode;
use crate::table::StateTable;

/// Parameters of the UCT estimator.
#[derive(Debug, Clone, PartialEq)]
pub struct UctConfig {
    /// UCB1 exploration constant
    pub exploration: f32,

    /// Per-step discount for backed up returns
    pub discount: f32,

    /// Seed for tie-breaking among untried actions
    pub seed: u64,
}

impl Default for UctConfig {
    fn default() -> Self {
        Self {
            exploration: 1.414,
            discount: 0.95,
            seed: 0,
        }
    }
}

impl UctConfig {
    /// Builder pattern: set exploration constant.
    pub fn with_exploration(mut self, exploration: f32) -> Self {
        self.exploration = exploration;
        self
    }

    /// Builder pattern: set discount.
    pub fn with_discount(mut self, discount: f32) -> Self {
        self.discount = discount;
        self
    }

    /// Builder pattern: set seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }
}

impl From<&planning_config::UctConfig> for UctConfig {
    fn from(settings: &planning_config::UctConfig) -> Self {
        Self {
            exploration: settings.exploration as f32,
            discount: settings.discount as f32,
            seed: settings.seed,
        }
    }
}

/// Tabular UCT estimator.
#[derive(Debug, Clone)]
pub struct UctEstimator<S, A> {
    config: UctConfig,
    actions: Vec<A>,
    table: StateTable<S>,
    /// Transitions visited by the current rollout: (state, action index, reward)
    path: Vec<(S, usize, f32)>,
    /// Rollouts started since creation or the last restart
    rollouts: u64,
    rng: ChaCha20Rng,
}

impl<S, A> UctEstimator<S, A>
where
    S: Hash + Eq + Clone,
    A: Clone + PartialEq,
{
    pub fn new(actions: Vec<A>, config: UctConfig) -> Self {
        let rng = ChaCha20Rng::seed_from_u64(config.seed);
        Self {
            config,
            actions,
            table: StateTable::new(),
            path: Vec::new(),
            rollouts: 0,
            rng,
        }
    }

    pub fn config(&self) -> &UctConfig {
        &self.config
    }

    pub fn actions(&self) -> &[A] {
        &self.actions
    }

    /// Number of states with retained statistics.
    pub fn num_states(&self) -> usize {
        self.table.len()
    }

    /// Rollouts started since creation or the last restart.
    pub fn rollouts(&self) -> u64 {
        self.rollouts
    }

    /// Statistics for `state`, if any are retained.
    pub fn stats(&self, state: &S) -> Option<&StateNode> {
        self.table.find(state).map(|id| self.table.get(id))
    }

    /// Estimated value of `state`: best mean over tried actions.
    pub fn state_value(&self, state: &S) -> Option<f32> {
        self.stats(state).and_then(StateNode::best_value)
    }

    fn action_index(&self, action: &A) -> Result<usize, EstimatorError> {
        self.actions.iter().position(|a| a == action).ok_or_else(|| {
            EstimatorError::UnknownAction(format!(
                "visited action is not one of the {} known actions",
                self.actions.len()
            ))
        })
    }
}

impl<S, A> ValueEstimator for UctEstimator<S, A>
where
    S: Hash + Eq + Clone,
    A: Clone + PartialEq,
{
    type State = S;
    type Action = A;

    fn select_planning_action(&mut self, state: &S) -> Result<A, EstimatorError> {
        if self.actions.is_empty() {
            return Err(EstimatorError::NoActions);
        }

        let index = match self.table.find(state).map(|id| self.table.get(id)) {
            None => self.rng.gen_range(0..self.actions.len()),
            Some(node) => {
                let untried = node.untried_actions();
                match untried.choose(&mut self.rng) {
                    Some(&i) => i,
                    None => node
                        .select_ucb(self.config.exploration)
                        .ok_or(EstimatorError::NoActions)?,
                }
            }
        };

        Ok(self.actions[index].clone())
    }

    fn select_world_action(&mut self, state: &S) -> Result<A, EstimatorError> {
        let index = match self.stats(state) {
            Some(node) => node.best_action(),
            None => Some(0),
        };
        index
            .and_then(|i| self.actions.get(i))
            .cloned()
            .ok_or(EstimatorError::NoActions)
    }

    fn start_rollout(&mut self) {
        self.rollouts += 1;
        self.path.clear();
    }

    fn visit(&mut self, state: &S, action: &A, reward: f32) -> Result<(), EstimatorError> {
        let index = self.action_index(action)?;
        self.path.push((state.clone(), index, reward));
        Ok(())
    }

    fn finish_rollout(&mut self, state: &S, terminal: bool) -> Result<(), EstimatorError> {
        let mut value = if terminal {
            0.0
        } else {
            self.state_value(state).unwrap_or(0.0)
        };

        // Every return is checked before the table is touched.
        let path = std::mem::take(&mut self.path);
        let mut returns = Vec::with_capacity(path.len());
        for (_, _, reward) in path.iter().rev() {
            value = reward + self.config.discount * value;
            if !value.is_finite() {
                return Err(EstimatorError::Backup(format!(
                    "non-finite return {} after reward {}",
                    value, reward
                )));
            }
            returns.push(value);
        }

        let num_actions = self.actions.len();
        for ((s, action, _), value) in path.into_iter().rev().zip(returns) {
            let id = self.table.get_or_insert(&s, num_actions, self.rollouts);
            self.table.get_mut(id).record(action, value, self.rollouts);
        }

        Ok(())
    }

    fn restart(&mut self) {
        self.table.clear();
        self.path.clear();
        self.rollouts = 0;
        self.rng = ChaCha20Rng::seed_from_u64(self.config.seed);
    }

    fn prune_old_visits(&mut self, memory_size: u32) {
        let now = self.rollouts;
        let removed = self
            .table
            .retain(|node| now.saturating_sub(node.last_update) <= memory_size as u64);
        debug!(
            removed = removed,
            retained = self.table.len(),
            memory_size = memory_size,
            "Pruned old visits"
        );
    }

    fn describe(&self, indentation: usize) -> String {
        let prefix = indent(indentation);
        format!(
            "{prefix}UCT estimator\n{prefix}exploration: {}\n{prefix}discount: {}\n{prefix}actions: {}\n{prefix}states: {}",
            self.config.exploration,
            self.config.discount,
            self.actions.len(),
            self.table.len()
        )
    }
}
