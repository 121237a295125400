//! # Reinforcement Learning Module
//!
//! Tabular Q-learning over the household's small discrete state space.

pub mod agent;

pub use agent::{QLearningAgent, QTable};
