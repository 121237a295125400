//! # Evaluation Module
//!
//! Drives training and fixed-length evaluation rollouts, and aggregates the
//! per-hour energy/cost stream into the per-season comparison report consumed
//! by the external plotting collaborator.

pub mod harness;
pub mod policy;
pub mod report;

pub use harness::{rollout, train};
pub use policy::{RandomPolicy, RolloutPolicy, ScriptedBaseline, TrainedPolicy};
pub use report::{ComparisonDelta, RolloutSummary, SeasonComparison};

use crate::config::Config;
use crate::error::EnergyError;
use crate::rl::QLearningAgent;
use crate::simulation::{HouseholdSimulator, Season};

/// Train an agent for one season and evaluate it against the random and
/// scripted-baseline policies over the full horizon.
pub fn run_season(config: &Config, season: Season) -> Result<SeasonComparison, EnergyError> {
    let mut env = HouseholdSimulator::new(
        config.household.num_households,
        season,
        config.household.horizon_days,
    )?;
    let mut agent = QLearningAgent::new(&config.agent, config.training.seed);

    train(&mut agent, &mut env, config.training.episodes);

    let trained = rollout(&mut env, &mut TrainedPolicy::new(&agent));
    let random = rollout(
        &mut env,
        &mut RandomPolicy::new(config.training.seed.map(|s| s + 1)),
    );
    let baseline = rollout(&mut env, &mut ScriptedBaseline);

    Ok(SeasonComparison::new(season, trained, random, baseline))
}
