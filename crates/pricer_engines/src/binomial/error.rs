//! Error types for lattice pricing.

use pricer_instruments::InstrumentError;
use thiserror::Error;

/// Lattice pricing errors.
///
/// `InvalidStepCount` is a validation failure raised before any
/// computation; `ProbabilityOutOfRange` signals an inconsistent
/// market/step parameterisation (a domain failure, not recoverable by
/// retry); `UnsupportedPayoff` rejects path-dependent payoffs, which a
/// recombining tree of terminal slices cannot observe.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum LatticeError {
    /// Step count must be a positive integer.
    #[error("Invalid step count: N = {steps}")]
    InvalidStepCount {
        /// The invalid step count
        steps: usize,
    },

    /// Derived risk-neutral probability fell outside `[0, 1]`.
    #[error("Risk-neutral probability outside [0, 1]: p = {probability}")]
    ProbabilityOutOfRange {
        /// The out-of-range probability
        probability: f64,
    },

    /// Payoff the lattice cannot price.
    #[error("Unsupported payoff for lattice pricing: {payoff}")]
    UnsupportedPayoff {
        /// Name of the rejected payoff
        payoff: &'static str,
    },

    /// Error propagated from payoff evaluation or exercise resolution.
    #[error(transparent)]
    Instrument(#[from] InstrumentError),
}
