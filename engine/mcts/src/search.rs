//! Anytime search loop.
//!
//! Each `search` call runs rollouts from the start state until the playout
//! count or the planning deadline is reached. A rollout:
//! 1. Selection: ask the model selector which model to simulate with
//! 2. Simulation: alternate planning actions and model transitions until a
//!    terminal state, the depth limit, or the deadline
//! 3. Backup: the value estimator is told about every visited transition
//!    and about the state the rollout stopped in
//!
//! The engine never owns its collaborators. Estimator and selector are
//! shared handles, borrowed for the duration of each individual call.

use std::time::{Duration, Instant};

use planning_core::{indent, Model, ModelError, Shared};
use thiserror::Error;
use tracing::{debug, trace, warn};

use crate::config::{ConfigError, MctsConfig, HARD_DEPTH_CEILING};
use crate::estimator::{EstimatorError, ValueEstimator};
use crate::selector::ModelSelector;

/// Errors that can occur during MCTS search.
#[derive(Debug, Error)]
pub enum SearchError {
    #[error("Invalid configuration: {0}")]
    Config(#[from] ConfigError),

    #[error("Estimator error: {0}")]
    Estimator(#[from] EstimatorError),

    #[error("Model error: {0}")]
    Model(#[from] ModelError),
}

/// Summary of one `search` call.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SearchStats {
    /// Rollouts started and finished
    pub rollouts: u64,

    /// Transitions simulated across all rollouts
    pub simulated_steps: u64,

    /// Wall-clock time spent in the call
    pub elapsed: Duration,

    /// Whether the planning deadline stopped the loop
    pub hit_deadline: bool,
}

/// Monte Carlo search engine over a value estimator and a model selector.
pub struct Mcts<V, M> {
    estimator: Shared<V>,
    selector: Shared<M>,
    config: MctsConfig,
}

impl<V, M> Mcts<V, M>
where
    V: ValueEstimator,
    M: ModelSelector,
    M::Model: Model<State = V::State, Action = V::Action>,
{
    /// Create an engine, rejecting configurations under which a search
    /// or a rollout could run forever.
    pub fn new(
        estimator: Shared<V>,
        selector: Shared<M>,
        config: MctsConfig,
    ) -> Result<Self, SearchError> {
        if let Err(e) = config.validate() {
            warn!(
                error = %e,
                num_playouts = config.num_playouts,
                max_planning_time = config.max_planning_time,
                max_depth = config.max_depth,
                "Rejected search configuration"
            );
            return Err(e.into());
        }

        Ok(Self {
            estimator,
            selector,
            config,
        })
    }

    /// Create an engine from the `[search]` section of the central config.
    pub fn from_settings(
        estimator: Shared<V>,
        selector: Shared<M>,
        settings: &planning_config::PlannerConfig,
    ) -> Result<Self, SearchError> {
        Self::new(estimator, selector, MctsConfig::from(&settings.search))
    }

    pub fn config(&self) -> &MctsConfig {
        &self.config
    }

    pub fn estimator(&self) -> &Shared<V> {
        &self.estimator
    }

    pub fn selector(&self) -> &Shared<M> {
        &self.selector
    }

    /// Run rollouts from `start` until the playout count or the deadline
    /// is reached.
    ///
    /// A collaborator failure aborts the call; the failing rollout is not
    /// finished.
    pub fn search(&self, start: &V::State) -> Result<SearchStats, SearchError> {
        let started = Instant::now();
        let deadline = self
            .config
            .planning_budget()
            .and_then(|budget| started.checked_add(budget));

        let mut stats = SearchStats::default();
        loop {
            if self.config.num_playouts > 0
                && stats.rollouts >= u64::from(self.config.num_playouts)
            {
                break;
            }
            if past(deadline) {
                stats.hit_deadline = true;
                break;
            }
            stats.simulated_steps += self.rollout(start, deadline)?;
            stats.rollouts += 1;
        }
        stats.elapsed = started.elapsed();

        debug!(
            rollouts = stats.rollouts,
            simulated_steps = stats.simulated_steps,
            elapsed_ms = stats.elapsed.as_millis() as u64,
            hit_deadline = stats.hit_deadline,
            "Search complete"
        );

        Ok(stats)
    }

    /// Simulate one trajectory from `start`. Returns the number of steps.
    fn rollout(&self, start: &V::State, deadline: Option<Instant>) -> Result<u64, SearchError> {
        let model_id = self.selector.borrow_mut().select_model(start);
        let mut state = start.clone();
        let mut terminal = self
            .selector
            .borrow_mut()
            .model_mut(model_id)
            .is_terminal(&state);

        self.estimator.borrow_mut().start_rollout();

        let depth_limit = self.config.depth_limit();
        let mut depth = 0;
        while depth < depth_limit {
            if terminal || past(deadline) {
                break;
            }

            let action = self.estimator.borrow_mut().select_planning_action(&state)?;

            let transition = {
                let mut selector = self.selector.borrow_mut();
                let transition = selector.model_mut(model_id).take_action(&state, &action)?;
                selector.observe_simulated_transition(&action, &transition.next_state);
                transition
            };

            self.estimator
                .borrow_mut()
                .visit(&state, &action, transition.reward)?;

            trace!(
                depth,
                reward = transition.reward,
                terminal = transition.terminal,
                "Simulated step"
            );

            state = transition.next_state;
            terminal = transition.terminal;
            depth += 1;
        }

        if !terminal && depth >= HARD_DEPTH_CEILING {
            warn!(
                depth,
                "Rollout stopped at the hard depth ceiling without reaching a terminal state"
            );
        }

        self.estimator.borrow_mut().finish_rollout(&state, terminal)?;
        trace!(model = model_id.0, depth, terminal, "Rollout complete");

        Ok(depth as u64)
    }

    /// Action to execute in the real environment from `state`.
    ///
    /// Delegates to the estimator's world policy; never simulates.
    pub fn select_world_action(&self, state: &V::State) -> Result<V::Action, SearchError> {
        Ok(self.estimator.borrow_mut().select_world_action(state)?)
    }

    /// Forget every statistic gathered so far.
    pub fn restart(&self) {
        self.estimator.borrow_mut().restart();
    }

    /// Forget statistics older than the configured pruning memory.
    pub fn prune_old_visits(&self) {
        self.estimator
            .borrow_mut()
            .prune_old_visits(self.config.pruning_memory_size);
    }

    /// Configuration dump followed by the estimator's own description.
    pub fn describe(&self, indentation: usize) -> String {
        let prefix = indent(indentation);
        format!(
            "{prefix}num playouts: {}\n{prefix}max planning time: {}\n{prefix}max depth: {}\n{prefix}pruning memory size: {}\n{prefix}ValueEstimator:\n{}\n",
            self.config.num_playouts,
            self.config.max_planning_time,
            self.config.max_depth,
            self.config.pruning_memory_size,
            self.estimator.borrow().describe(indentation + 1)
        )
    }
}

fn past(deadline: Option<Instant>) -> bool {
    matches!(deadline, Some(d) if Instant::now() > d)
}
