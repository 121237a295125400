//! # Tabular Q-Learning Agent
//!
//! Maintains a value table over (appliance state, scalar action) pairs and
//! refines it in place from observed transitions. Action selection is
//! epsilon-greedy: with probability epsilon a uniformly random switch vector,
//! otherwise the greedy scalar choice broadcast to every appliance slot.
//!
//! The table deliberately treats the hour's decision as a single on/off
//! choice applied to all appliances at once, indexed during updates by the
//! action's first (light) component. A genuine joint-action table over the
//! 2^3 switch combinations would be a different design; this one keeps the
//! single-scalar semantics.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::config::AgentConfig;
use crate::simulation::{Action, ApplianceState};

/// Value table over the full 2x2x2 appliance state space times the scalar
/// action dimension. Zero-initialized; owned exclusively by the agent and
/// never persisted across runs.
#[derive(Debug, Clone)]
pub struct QTable {
    values: Vec<f64>,
    action_size: usize,
}

impl QTable {
    /// Number of distinct appliance states (three binary flags).
    pub const STATE_SPACE: usize = 8;

    pub fn new(action_size: usize) -> Self {
        Self {
            values: vec![0.0; Self::STATE_SPACE * action_size],
            action_size,
        }
    }

    pub fn action_size(&self) -> usize {
        self.action_size
    }

    fn state_index(state: &ApplianceState) -> usize {
        (usize::from(state.light) << 2)
            | (usize::from(state.washing_machine) << 1)
            | usize::from(state.fridge)
    }

    /// Q-values for every scalar action in the given state.
    pub fn row(&self, state: &ApplianceState) -> &[f64] {
        let start = Self::state_index(state) * self.action_size;
        &self.values[start..start + self.action_size]
    }

    pub fn get(&self, state: &ApplianceState, action: usize) -> f64 {
        self.row(state)[action]
    }

    fn set(&mut self, state: &ApplianceState, action: usize, value: f64) {
        let start = Self::state_index(state) * self.action_size;
        self.values[start + action] = value;
    }

    /// Greedy scalar action for the state. Ties resolve to the lowest action
    /// index, so an untouched all-zero row yields action 0.
    pub fn argmax(&self, state: &ApplianceState) -> usize {
        let row = self.row(state);
        let mut best = 0;
        for (index, value) in row.iter().enumerate().skip(1) {
            if *value > row[best] {
                best = index;
            }
        }
        best
    }

    /// Largest Q-value in the state's row.
    pub fn max_value(&self, state: &ApplianceState) -> f64 {
        let row = self.row(state);
        row.iter().copied().fold(row[0], f64::max)
    }

    /// True when every entry is finite.
    pub fn is_finite(&self) -> bool {
        self.values.iter().all(|v| v.is_finite())
    }
}

/// Epsilon-greedy tabular Q-learning agent.
///
/// The table is carried across episodes; learning accumulates for the
/// lifetime of the agent instance.
pub struct QLearningAgent {
    q_table: QTable,
    alpha: f64,
    gamma: f64,
    epsilon: f64,
    rng: StdRng,
}

impl QLearningAgent {
    /// Create an agent from validated hyperparameters. A fixed seed makes
    /// training reproducible.
    pub fn new(config: &AgentConfig, seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };

        Self {
            q_table: QTable::new(config.action_size),
            alpha: config.alpha,
            gamma: config.gamma,
            epsilon: config.epsilon,
            rng,
        }
    }

    pub fn q_table(&self) -> &QTable {
        &self.q_table
    }

    /// Epsilon-greedy selection: explore with probability epsilon, otherwise
    /// act greedily.
    pub fn choose_action(&mut self, state: &ApplianceState) -> Action {
        if self.rng.gen::<f64>() < self.epsilon {
            return Action::new(
                self.rng.gen_bool(0.5),
                self.rng.gen_bool(0.5),
                self.rng.gen_bool(0.5),
            );
        }
        self.best_action(state)
    }

    /// Pure exploitation: the greedy scalar choice broadcast to every
    /// appliance slot. Any nonzero scalar maps to "on".
    pub fn best_action(&self, state: &ApplianceState) -> Action {
        let on = self.q_table.argmax(state) != 0;
        Action::new(on, on, on)
    }

    /// One tabular Q-learning update from an observed transition.
    ///
    /// The table row is indexed by the action's first component. The
    /// bootstrap term `max Q[next_state]` is applied on every transition,
    /// including the terminal one.
    pub fn learn(
        &mut self,
        state: &ApplianceState,
        action: Action,
        reward: f64,
        next_state: &ApplianceState,
    ) {
        let index = usize::from(action.light);
        let current = self.q_table.get(state, index);
        let next_max = self.q_table.max_value(next_state);
        let updated = current + self.alpha * (reward + self.gamma * next_max - current);
        self.q_table.set(state, index, updated);
    }
}
