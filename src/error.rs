use thiserror::Error;

/// Errors surfaced by the simulation core.
///
/// Both variants are fatal: a failed construction aborts the run rather than
/// degrading, and there are no retries anywhere in the core.
#[derive(Debug, Error)]
pub enum EnergyError {
    /// Rejected configuration (unknown season, zero households, bad
    /// hyperparameters). Raised at construction time, never mid-run.
    #[error("invalid configuration: {0}")]
    Configuration(String),

    /// Action vector with the wrong arity or non-binary components,
    /// rejected at the environment boundary.
    #[error("invalid action: {0}")]
    InvalidAction(String),
}
