//! Per-state statistics for the tabular UCT estimator.
//!
//! Each node holds the visit statistics of one state: how often the state
//! was backed up through, and a mean return for every action in the
//! estimator's action list.

/// Index into the node arena. Using a newtype for type safety.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(pub u32);

/// Statistics of one (state, action) pair.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ActionStats {
    /// Number of backups through this action
    pub visit_count: u32,

    /// Sum of discounted returns backed up through this action.
    /// Q(s,a) = value_sum / visit_count
    pub value_sum: f32,
}

impl ActionStats {
    /// Calculate mean value Q(s,a) = value_sum / visit_count.
    /// Returns 0.0 if never visited.
    #[inline]
    pub fn mean_value(&self) -> f32 {
        if self.visit_count == 0 {
            0.0
        } else {
            self.value_sum / self.visit_count as f32
        }
    }

    /// UCB1 score: Q(s,a) + c * sqrt(ln N(s) / N(s,a)).
    ///
    /// Takes pre-computed ln(N(s)) so the log is not recomputed per action.
    /// Unvisited actions score infinity.
    #[inline]
    pub fn ucb_score(&self, ln_parent_visits: f32, exploration: f32) -> f32 {
        if self.visit_count == 0 {
            return f32::INFINITY;
        }
        let n = self.visit_count as f32;
        self.mean_value() + exploration * (ln_parent_visits / n).sqrt()
    }

    fn record(&mut self, value: f32) {
        self.visit_count += 1;
        self.value_sum += value;
    }
}

/// Statistics of one state.
#[derive(Debug, Clone, PartialEq)]
pub struct StateNode {
    /// Number of backups through this state
    pub visit_count: u32,

    /// One entry per action, in the estimator's action order
    pub actions: Vec<ActionStats>,

    /// Rollout counter value at the most recent backup
    pub last_update: u64,
}

impl StateNode {
    pub fn new(num_actions: usize, rollout: u64) -> Self {
        Self {
            visit_count: 0,
            actions: vec![ActionStats::default(); num_actions],
            last_update: rollout,
        }
    }

    /// Back up `value` through `action` during rollout number `rollout`.
    pub fn record(&mut self, action: usize, value: f32, rollout: u64) {
        self.visit_count += 1;
        self.actions[action].record(value);
        self.last_update = rollout;
    }

    /// Indices of actions never backed up through.
    pub fn untried_actions(&self) -> Vec<usize> {
        self.actions
            .iter()
            .enumerate()
            .filter(|(_, stats)| stats.visit_count == 0)
            .map(|(i, _)| i)
            .collect()
    }

    /// Action with the highest UCB1 score, lowest index on ties.
    pub fn select_ucb(&self, exploration: f32) -> Option<usize> {
        let ln_parent_visits = (self.visit_count.max(1) as f32).ln();
        argmax(self.actions.iter().map(|a| a.ucb_score(ln_parent_visits, exploration)))
    }

    /// Action with the highest mean value, lowest index on ties.
    pub fn best_action(&self) -> Option<usize> {
        argmax(self.actions.iter().map(ActionStats::mean_value))
    }

    /// Best mean value over actions tried at least once.
    pub fn best_value(&self) -> Option<f32> {
        self.actions
            .iter()
            .filter(|a| a.visit_count > 0)
            .map(ActionStats::mean_value)
            .fold(None, |best, v| match best {
                Some(b) if b >= v => Some(b),
                _ => Some(v),
            })
    }
}

/// First index of the maximum; NaN scores never win.
fn argmax(scores: impl Iterator<Item = f32>) -> Option<usize> {
    let mut best: Option<(usize, f32)> = None;
    for (i, score) in scores.enumerate() {
        match best {
            Some((_, b)) if score <= b || score.is_nan() => {}
            None if score.is_nan() => {}
            _ => best = Some((i, score)),
        }
    }
    best.map(|(i, _)| i)
}
