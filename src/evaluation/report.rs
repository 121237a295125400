//! Per-season comparison reports.
//!
//! The four scalars per policy - average energy, total energy, average cost,
//! total cost - are the reporting contract consumed by the external plotting
//! collaborator; their order and naming are stable.

use chrono::{DateTime, FixedOffset, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::simulation::Season;

/// Aggregate usage and cost for one fixed-length rollout.
///
/// Serde field order is the reporting contract.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RolloutSummary {
    pub avg_energy_kwh: f64,
    pub total_energy_kwh: f64,
    pub avg_cost: f64,
    pub total_cost: f64,
}

impl RolloutSummary {
    /// Averages are plain totals over simulated hours; no partial-hour or
    /// partial-day weighting.
    pub fn from_totals(total_energy_kwh: f64, total_cost: f64, hours: u32) -> Self {
        let hours = f64::from(hours);
        Self {
            avg_energy_kwh: total_energy_kwh / hours,
            total_energy_kwh,
            avg_cost: total_cost / hours,
            total_cost,
        }
    }
}

/// Trained-vs-random improvement, positive when the trained policy wins.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ComparisonDelta {
    pub avg_energy_kwh: f64,
    pub total_energy_kwh: f64,
    pub avg_cost: f64,
    pub total_cost: f64,
}

/// One season's full evaluation result - the reporting boundary.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeasonComparison {
    pub id: Uuid,
    pub generated_at: DateTime<FixedOffset>,
    pub season: Season,
    pub trained: RolloutSummary,
    pub random: RolloutSummary,
    pub baseline: RolloutSummary,
    pub trained_vs_random: ComparisonDelta,
}

impl SeasonComparison {
    pub fn new(
        season: Season,
        trained: RolloutSummary,
        random: RolloutSummary,
        baseline: RolloutSummary,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            generated_at: Utc::now().fixed_offset(),
            season,
            trained,
            random,
            baseline,
            trained_vs_random: ComparisonDelta {
                avg_energy_kwh: random.avg_energy_kwh - trained.avg_energy_kwh,
                total_energy_kwh: random.total_energy_kwh - trained.total_energy_kwh,
                avg_cost: random.avg_cost - trained.avg_cost,
                total_cost: random.total_cost - trained.total_cost,
            },
        }
    }

    /// File name of the season's report artifact.
    pub fn artifact_name(&self) -> String {
        format!("{}.json", self.season)
    }
}
