//! # Household Simulation Module
//!
//! Deterministic discrete-time simulation of one household's appliance load
//! under a two-tier time-of-use tariff.
//!
//! ## Components
//!
//! - **Profile**: per-season appliance energy-intensity coefficients (heating
//!   in winter, cooling in summer)
//! - **Tariff**: peak/off-peak rate schedule with fixed peak windows
//! - **Household**: the simulator itself - owns appliance state and clock,
//!   computes hourly energy draw and the (negative) cost reward, and signals
//!   episode termination at the end of the horizon

pub mod household;
pub mod profile;
pub mod tariff;

pub use household::{Action, ApplianceState, HouseholdSimulator, SimClock, StepOutcome};
pub use profile::{Season, SeasonalProfile};
pub use tariff::{TariffBand, TariffSchedule};
