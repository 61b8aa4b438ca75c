//! Typed environment model used by the planners
//!
//! A model answers one question: "if the agent took this action in this
//! state, what would happen?". Planners call it from inside rollouts, so
//! implementations should be cheap and must always return.

/// Outcome of simulating one action.
#[derive(Debug, Clone, PartialEq)]
pub struct Transition<S> {
    /// Immediate reward for the transition
    pub reward: f32,
    /// State reached after the action
    pub next_state: S,
    /// Whether `next_state` ends the episode
    pub terminal: bool,
}

impl<S> Transition<S> {
    pub fn new(reward: f32, next_state: S, terminal: bool) -> Self {
        Self {
            reward,
            next_state,
            terminal,
        }
    }
}

/// Environment model trait
///
/// Models are statically typed over their state and action so that the
/// planner's inner loop is monomorphized: rollouts call `take_action`
/// millions of times and never go through a vtable.
///
/// # Type Parameters
///
/// * `State` - Full observable configuration, cloned once per rollout
/// * `Action` - Choice available to the agent, small and cheap to clone
///
/// # Example
///
/// ```rust
/// use planning_core::{Model, ModelError, Transition};
///
/// #[derive(Debug)]
/// struct Counter {
///     limit: u32,
/// }
///
/// impl Model for Counter {
///     type State = u32;
///     type Action = u32;
///
///     fn take_action(&mut self, state: &u32, action: &u32) -> Result<Transition<u32>, ModelError> {
///         let next = state + action;
///         Ok(Transition::new(*action as f32, next, next >= self.limit))
///     }
///
///     fn describe(&self, indentation: usize) -> String {
///         format!("{}counter to {}\n", planning_core::indent(indentation), self.limit)
///     }
/// }
///
/// let mut model = Counter { limit: 3 };
/// let t = model.take_action(&2, &1).unwrap();
/// assert!(t.terminal);
/// ```
pub trait Model {
    /// Environment state type
    type State: Clone;

    /// Action type
    type Action: Clone;

    /// Simulate `action` from `state`.
    ///
    /// The model may update private bookkeeping (a learned model, an RNG)
    /// but never the caller's state.
    ///
    /// # Errors
    ///
    /// Returns a `ModelError` when the action cannot be applied in this
    /// state; planners treat this as fatal for the current search.
    fn take_action(
        &mut self,
        state: &Self::State,
        action: &Self::Action,
    ) -> Result<Transition<Self::State>, ModelError>;

    /// Whether `state` already ends the episode.
    ///
    /// Planners check this before simulating from a start state. Models that
    /// only learn terminality from transitions can keep the default.
    fn is_terminal(&self, _state: &Self::State) -> bool {
        false
    }

    /// Human-readable dump of the model parameters.
    fn describe(&self, indentation: usize) -> String;
}

/// Error type for model simulation
#[derive(Debug, thiserror::Error)]
pub enum ModelError {
    #[error("Invalid action: {0}")]
    InvalidAction(String),
    #[error("Invalid state: {0}")]
    InvalidState(String),
    #[error("Simulation failed: {0}")]
    Simulation(String),
}
