use std::path::PathBuf;

use anyhow::Result;
use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};

use crate::error::EnergyError;
use crate::simulation::Season;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub household: HouseholdConfig,
    pub agent: AgentConfig,
    pub training: TrainingConfig,
    pub report: ReportConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HouseholdConfig {
    /// Scales the lighting draw.
    pub num_households: u32,
    pub horizon_days: u32,
    /// Seasons simulated by the binary, each producing its own report.
    pub seasons: Vec<Season>,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct AgentConfig {
    /// Learning rate.
    pub alpha: f64,
    /// Discount factor.
    pub gamma: f64,
    /// Exploration probability.
    pub epsilon: f64,
    /// Cardinality of the scalar action dimension.
    pub action_size: usize,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct TrainingConfig {
    pub episodes: u32,
    /// Fixed RNG seed for reproducible runs; entropy-seeded when unset.
    pub seed: Option<u64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportConfig {
    /// Directory for per-season JSON report artifacts. Reports go to stdout
    /// only when unset.
    pub output_dir: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            household: HouseholdConfig {
                num_households: 100,
                horizon_days: 90,
                seasons: vec![Season::Winter, Season::Summer],
            },
            agent: AgentConfig {
                alpha: 0.1,
                gamma: 0.95,
                epsilon: 0.05,
                action_size: 2,
            },
            training: TrainingConfig {
                episodes: 2000,
                seed: None,
            },
            report: ReportConfig { output_dir: None },
        }
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        let figment = Figment::from(Serialized::defaults(Config::default()))
            .merge(Toml::file("config/default.toml"))
            .merge(Env::prefixed("HES__").split("__"));
        let config: Config = figment.extract()?;
        config.validate()?;
        Ok(config)
    }

    /// Fail fast on out-of-range values; a bad configuration aborts the run.
    pub fn validate(&self) -> Result<(), EnergyError> {
        if self.household.num_households == 0 {
            return Err(EnergyError::Configuration(
                "household.num_households must be positive".into(),
            ));
        }
        if self.household.horizon_days == 0 {
            return Err(EnergyError::Configuration(
                "household.horizon_days must be positive".into(),
            ));
        }
        if self.household.seasons.is_empty() {
            return Err(EnergyError::Configuration(
                "household.seasons must name at least one season".into(),
            ));
        }
        if !(0.0..=1.0).contains(&self.agent.alpha) || self.agent.alpha == 0.0 {
            return Err(EnergyError::Configuration(
                "agent.alpha must be in (0, 1]".into(),
            ));
        }
        if !(0.0..1.0).contains(&self.agent.gamma) || self.agent.gamma == 0.0 {
            return Err(EnergyError::Configuration(
                "agent.gamma must be in (0, 1)".into(),
            ));
        }
        if !(0.0..=1.0).contains(&self.agent.epsilon) {
            return Err(EnergyError::Configuration(
                "agent.epsilon must be in [0, 1]".into(),
            ));
        }
        if self.agent.action_size < 2 {
            return Err(EnergyError::Configuration(
                "agent.action_size must be at least 2".into(),
            ));
        }
        if self.training.episodes == 0 {
            return Err(EnergyError::Configuration(
                "training.episodes must be positive".into(),
            ));
        }
        Ok(())
    }
}
