//! Deterministic two-state loop.
//!
//! ```text
//!   S0 --A1 (+1)--> S1 --A2 (0)--> S0 ...
//! ```
//!
//! Every action advances a step counter; the state reached on step
//! `horizon` is terminal. Any other action keeps the position with reward 0.

use planning_core::{indent, Model, ModelError, Transition};

/// Which of the two positions the agent is in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Position {
    S0,
    S1,
}

/// Two-state loop state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TwoState {
    pub position: Position,
    /// Steps taken since the episode started
    pub steps: u32,
}

impl TwoState {
    /// Episode start: position S0, no steps taken
    pub fn start() -> Self {
        Self {
            position: Position::S0,
            steps: 0,
        }
    }
}

/// Two-state loop action
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Toggle {
    A1,
    A2,
}

impl Toggle {
    pub const ALL: [Toggle; 2] = [Toggle::A1, Toggle::A2];
}

/// Deterministic two-state model
#[derive(Debug, Clone)]
pub struct TwoStateModel {
    horizon: u32,
}

impl TwoStateModel {
    /// Create a model whose episodes end after `horizon` steps.
    pub fn new(horizon: u32) -> Self {
        Self { horizon }
    }

    pub fn horizon(&self) -> u32 {
        self.horizon
    }
}

impl Default for TwoStateModel {
    fn default() -> Self {
        Self::new(3)
    }
}

impl Model for TwoStateModel {
    type State = TwoState;
    type Action = Toggle;

    fn take_action(
        &mut self,
        state: &TwoState,
        action: &Toggle,
    ) -> Result<Transition<TwoState>, ModelError> {
        if self.is_terminal(state) {
            return Err(ModelError::InvalidState(format!(
                "episode ended after {} steps",
                state.steps
            )));
        }

        let (position, reward) = match (state.position, action) {
            (Position::S0, Toggle::A1) => (Position::S1, 1.0),
            (Position::S1, Toggle::A2) => (Position::S0, 0.0),
            (position, _) => (position, 0.0),
        };

        let next_state = TwoState {
            position,
            steps: state.steps + 1,
        };
        let terminal = self.is_terminal(&next_state);
        Ok(Transition::new(reward, next_state, terminal))
    }

    fn is_terminal(&self, state: &TwoState) -> bool {
        state.steps >= self.horizon
    }

    fn describe(&self, indentation: usize) -> String {
        format!("{}two-state loop, horizon {}\n", indent(indentation), self.horizon)
    }
}
