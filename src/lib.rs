//! # Household Energy RL
//!
//! Simulates a household's appliance-driven electricity consumption over a
//! fixed horizon under a two-tier (peak/off-peak) tariff, and trains a
//! tabular Q-learning agent to pick hourly appliance on/off decisions that
//! minimize cost.
//!
//! ## Components
//!
//! - **simulation**: deterministic discrete-time simulator of appliance
//!   state, energy draw, tariff selection, and episode termination
//! - **rl**: tabular Q-learning agent (epsilon-greedy selection, in-place
//!   value updates)
//! - **evaluation**: training loop plus fixed-length rollouts under trained,
//!   random, and scripted-baseline policies, aggregated into per-season
//!   comparison reports

pub mod config;
pub mod error;
pub mod evaluation;
pub mod rl;
pub mod simulation;
pub mod telemetry;

pub use config::Config;
pub use error::EnergyError;
