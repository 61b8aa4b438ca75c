//! Model selection for rollouts.
//!
//! Before each rollout the search engine asks a [`ModelSelector`] which
//! environment model to simulate with, then reports every simulated
//! transition back to it. A selector over a single model is the common
//! case; an ensemble selector samples one model per rollout, which plans
//! against model uncertainty.

use planning_core::Model;
use rand::distributions::{Distribution, WeightedIndex};
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;
use thiserror::Error;

/// Handle to a model owned by a selector, valid for one rollout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ModelId(pub u32);

/// Errors when building a selector.
#[derive(Debug, Error, PartialEq)]
pub enum SelectorError {
    #[error("Ensemble needs at least one model")]
    EmptyEnsemble,

    #[error("Got {weights} weights for {models} models")]
    LengthMismatch { models: usize, weights: usize },

    #[error("Invalid ensemble weights: {0}")]
    InvalidWeights(String),
}

/// Trait for model selectors.
pub trait ModelSelector {
    /// Model type handed out for rollouts
    type Model: Model;

    /// Pick the model to simulate the next rollout from `state` with.
    fn select_model(&mut self, state: &<Self::Model as Model>::State) -> ModelId;

    /// Model behind a handle returned by `select_model`.
    fn model_mut(&mut self, id: ModelId) -> &mut Self::Model;

    /// A simulated rollout took `action` and reached `next_state`.
    ///
    /// Best effort: must not fail the rollout.
    fn observe_simulated_transition(
        &mut self,
        action: &<Self::Model as Model>::Action,
        next_state: &<Self::Model as Model>::State,
    );
}

/// Selector that always simulates with the same model.
#[derive(Debug, Clone)]
pub struct SingleModelSelector<M> {
    model: M,
    observed: u64,
}

impl<M: Model> SingleModelSelector<M> {
    pub fn new(model: M) -> Self {
        Self { model, observed: 0 }
    }

    pub fn model(&self) -> &M {
        &self.model
    }

    /// Simulated transitions reported so far.
    pub fn observed_transitions(&self) -> u64 {
        self.observed
    }

    pub fn into_inner(self) -> M {
        self.model
    }
}

impl<M: Model> ModelSelector for SingleModelSelector<M> {
    type Model = M;

    fn select_model(&mut self, _state: &M::State) -> ModelId {
        ModelId(0)
    }

    fn model_mut(&mut self, _id: ModelId) -> &mut M {
        &mut self.model
    }

    fn observe_simulated_transition(&mut self, _action: &M::Action, _next_state: &M::State) {
        self.observed += 1;
    }
}

/// Selector that samples one model per rollout from a weighted ensemble.
#[derive(Debug, Clone)]
pub struct EnsembleSelector<M> {
    models: Vec<M>,
    weights: WeightedIndex<f64>,
    observed: Vec<u64>,
    current: usize,
    rng: ChaCha20Rng,
}

impl<M: Model> EnsembleSelector<M> {
    /// Ensemble with every model equally likely.
    pub fn new(models: Vec<M>, seed: u64) -> Result<Self, SelectorError> {
        let weights = vec![1.0; models.len()];
        Self::with_weights(models, weights, seed)
    }

    /// Ensemble sampling model `i` with probability proportional to `weights[i]`.
    pub fn with_weights(models: Vec<M>, weights: Vec<f64>, seed: u64) -> Result<Self, SelectorError> {
        if models.is_empty() {
            return Err(SelectorError::EmptyEnsemble);
        }
        if models.len() != weights.len() {
            return Err(SelectorError::LengthMismatch {
                models: models.len(),
                weights: weights.len(),
            });
        }
        let weights =
            WeightedIndex::new(&weights).map_err(|e| SelectorError::InvalidWeights(e.to_string()))?;

        Ok(Self {
            observed: vec![0; models.len()],
            models,
            weights,
            current: 0,
            rng: ChaCha20Rng::seed_from_u64(seed),
        })
    }

    pub fn len(&self) -> usize {
        self.models.len()
    }

    pub fn is_empty(&self) -> bool {
        self.models.is_empty()
    }

    pub fn models(&self) -> &[M] {
        &self.models
    }

    /// Simulated transitions reported while each model was selected.
    pub fn observed_transitions(&self) -> &[u64] {
        &self.observed
    }
}

impl<M: Model> ModelSelector for EnsembleSelector<M> {
    type Model = M;

    fn select_model(&mut self, _state: &M::State) -> ModelId {
        self.current = self.weights.sample(&mut self.rng);
        ModelId(self.current as u32)
    }

    fn model_mut(&mut self, id: ModelId) -> &mut M {
        // Ids only come from select_model, so they are in range.
        &mut self.models[id.0 as usize]
    }

    fn observe_simulated_transition(&mut self, _action: &M::Action, _next_state: &M::State) {
        self.observed[self.current] += 1;
    }
}
