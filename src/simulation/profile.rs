//! Seasonal energy-intensity profiles.
//!
//! Each season carries its own per-appliance coefficients plus exactly one
//! climate coefficient (heating in winter, cooling in summer). The variants
//! are matched exhaustively at the point of use, so a season can never end up
//! with a silently missing climate term.

use serde::{Deserialize, Serialize};

use crate::error::EnergyError;

/// Season selector. Only winter and summer are defined; anything else is
/// rejected at configuration time.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
    strum_macros::Display,
    strum_macros::EnumIter,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Season {
    Winter,
    Summer,
}

impl Season {
    /// Energy-intensity coefficients for this season.
    pub fn profile(&self) -> SeasonalProfile {
        match self {
            Season::Winter => SeasonalProfile::Winter {
                washing_machine: 0.12,
                fridge: 0.10,
                lighting: 0.08,
                heating: 0.30,
            },
            Season::Summer => SeasonalProfile::Summer {
                washing_machine: 0.10,
                fridge: 0.12,
                lighting: 0.05,
                cooling: 0.25,
            },
        }
    }
}

impl std::str::FromStr for Season {
    type Err = EnergyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "winter" => Ok(Self::Winter),
            "summer" => Ok(Self::Summer),
            other => Err(EnergyError::Configuration(format!(
                "unknown season '{other}'; expected winter or summer"
            ))),
        }
    }
}

/// Per-season coefficients applied to each appliance's unit draw.
///
/// Immutable once selected at simulator construction.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum SeasonalProfile {
    Winter {
        washing_machine: f64,
        fridge: f64,
        lighting: f64,
        heating: f64,
    },
    Summer {
        washing_machine: f64,
        fridge: f64,
        lighting: f64,
        cooling: f64,
    },
}

impl SeasonalProfile {
    pub fn washing_machine(&self) -> f64 {
        match self {
            Self::Winter { washing_machine, .. } | Self::Summer { washing_machine, .. } => {
                *washing_machine
            }
        }
    }

    pub fn fridge(&self) -> f64 {
        match self {
            Self::Winter { fridge, .. } | Self::Summer { fridge, .. } => *fridge,
        }
    }

    pub fn lighting(&self) -> f64 {
        match self {
            Self::Winter { lighting, .. } | Self::Summer { lighting, .. } => *lighting,
        }
    }

    /// Climate coefficient: heating in winter, cooling in summer.
    pub fn climate(&self) -> f64 {
        match self {
            Self::Winter { heating, .. } => *heating,
            Self::Summer { cooling, .. } => *cooling,
        }
    }
}
