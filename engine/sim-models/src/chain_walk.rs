//! Slippery corridor.
//!
//! Positions `0..=length`; the agent starts anywhere left of the goal at
//! `length`. Each move goes the intended way, except with probability
//! `slip` it goes the other way. Reaching the goal pays 1 and ends the
//! episode; every other step costs `step_cost`.

use planning_core::{indent, Model, ModelError, Transition};
use rand::distributions::{Bernoulli, Distribution};
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;

/// Corridor action
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Move {
    Left,
    Right,
}

impl Move {
    pub const ALL: [Move; 2] = [Move::Left, Move::Right];

    fn reversed(self) -> Self {
        match self {
            Move::Left => Move::Right,
            Move::Right => Move::Left,
        }
    }
}

/// Stochastic corridor model
///
/// Owns its RNG so that two models built with the same seed produce the
/// same transitions for the same calls.
#[derive(Debug, Clone)]
pub struct ChainWalk {
    length: u32,
    slip: f64,
    slip_dist: Bernoulli,
    step_cost: f32,
    rng: ChaCha20Rng,
}

impl ChainWalk {
    /// Create a corridor of `length` steps with the given slip probability.
    ///
    /// # Errors
    /// Returns `ModelError::Simulation` if `length` is zero or `slip` is not
    /// a probability.
    pub fn new(length: u32, slip: f64, seed: u64) -> Result<Self, ModelError> {
        if length == 0 {
            return Err(ModelError::Simulation(
                "chain length must be at least 1".to_string(),
            ));
        }
        let slip_dist = Bernoulli::new(slip).map_err(|e| {
            ModelError::Simulation(format!("invalid slip probability {}: {}", slip, e))
        })?;

        Ok(Self {
            length,
            slip,
            slip_dist,
            step_cost: 0.01,
            rng: ChaCha20Rng::seed_from_u64(seed),
        })
    }

    /// Builder pattern: set the per-step cost.
    pub fn with_step_cost(mut self, cost: f32) -> Self {
        self.step_cost = cost;
        self
    }

    pub fn length(&self) -> u32 {
        self.length
    }

    pub fn slip(&self) -> f64 {
        self.slip
    }

    /// Whether `position` is the goal
    pub fn is_goal(&self, position: u32) -> bool {
        position == self.length
    }
}

impl Model for ChainWalk {
    type State = u32;
    type Action = Move;

    fn take_action(&mut self, state: &u32, action: &Move) -> Result<Transition<u32>, ModelError> {
        if *state > self.length {
            return Err(ModelError::InvalidState(format!(
                "position {} outside corridor of length {}",
                state, self.length
            )));
        }
        if self.is_goal(*state) {
            return Err(ModelError::InvalidState(format!(
                "position {} is the goal",
                state
            )));
        }

        let direction = if self.slip_dist.sample(&mut self.rng) {
            action.reversed()
        } else {
            *action
        };

        let next = match direction {
            Move::Left => state.saturating_sub(1),
            Move::Right => state + 1,
        };

        if self.is_goal(next) {
            Ok(Transition::new(1.0, next, true))
        } else {
            Ok(Transition::new(-self.step_cost, next, false))
        }
    }

    fn is_terminal(&self, state: &u32) -> bool {
        *state >= self.length
    }

    fn describe(&self, indentation: usize) -> String {
        let prefix = indent(indentation);
        format!(
            "{prefix}chain walk\n{prefix}length: {}\n{prefix}slip: {}\n{prefix}step cost: {}\n",
            self.length, self.slip, self.step_cost
        )
    }
}
