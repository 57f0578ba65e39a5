//! Error types for Monte Carlo pricing.

use pricer_instruments::InstrumentError;
use thiserror::Error;

/// Configuration validation errors.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ConfigError {
    /// Path count outside `1..=MAX_PATHS`.
    #[error("Invalid path count: {n_paths}")]
    InvalidPathCount {
        /// The rejected path count
        n_paths: usize,
    },

    /// Step count outside `1..=MAX_STEPS`.
    #[error("Invalid step count: {n_steps}")]
    InvalidStepCount {
        /// The rejected step count
        n_steps: usize,
    },
}

/// Monte Carlo pricing errors.
///
/// Early exercise has no pathwise resolution in a plain simulation, so
/// American instruments are rejected at entry instead of silently priced
/// as European.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum MonteCarloError {
    /// Invalid engine configuration.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Exercise style the simulation cannot resolve.
    #[error("Unsupported exercise style for Monte Carlo pricing: {style}")]
    UnsupportedExercise {
        /// Name of the rejected exercise style
        style: &'static str,
    },

    /// Error propagated from payoff evaluation.
    #[error(transparent)]
    Instrument(#[from] InstrumentError),
}
