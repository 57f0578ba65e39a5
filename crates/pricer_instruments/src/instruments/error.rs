//! Instrument error types.
//!
//! This module provides structured error handling for instrument
//! construction and payoff evaluation.

use thiserror::Error;

/// Instrument-related errors.
///
/// Construction errors (`InvalidStrike`, `InvalidBarrier`, `InvalidExpiry`)
/// are raised when an [`Instrument`](super::Instrument) is built from
/// out-of-domain contract data. Evaluation errors (`PathsRequired`,
/// `LengthMismatch`) are raised when a strategy is driven with an input
/// shape it cannot accept.
///
/// # Examples
/// ```
/// use pricer_instruments::instruments::InstrumentError;
///
/// let err = InstrumentError::InvalidStrike { strike: -100.0 };
/// assert!(format!("{}", err).contains("-100"));
/// ```
#[derive(Error, Debug, Clone, PartialEq)]
pub enum InstrumentError {
    /// Invalid strike price (non-positive or non-finite).
    #[error("Invalid strike: K = {strike}")]
    InvalidStrike {
        /// The invalid strike value
        strike: f64,
    },

    /// Invalid barrier level (non-positive or non-finite).
    #[error("Invalid barrier level: B = {barrier}")]
    InvalidBarrier {
        /// The invalid barrier value
        barrier: f64,
    },

    /// Invalid expiry time (negative or non-finite).
    #[error("Invalid expiry: T = {expiry}")]
    InvalidExpiry {
        /// The invalid expiry value
        expiry: f64,
    },

    /// A path-dependent payoff was given a terminal-only price slice.
    #[error("Payoff '{payoff}' requires a full path matrix, got a terminal slice")]
    PathsRequired {
        /// Name of the payoff that needed path observations
        payoff: &'static str,
    },

    /// Buffer lengths disagree in an elementwise operation.
    #[error("Length mismatch: expected {expected} elements, got {actual}")]
    LengthMismatch {
        /// Number of elements required
        expected: usize,
        /// Number of elements supplied
        actual: usize,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_strike_display() {
        let err = InstrumentError::InvalidStrike { strike: -100.0 };
        assert_eq!(format!("{}", err), "Invalid strike: K = -100");
    }

    #[test]
    fn test_invalid_barrier_display() {
        let err = InstrumentError::InvalidBarrier { barrier: 0.0 };
        assert_eq!(format!("{}", err), "Invalid barrier level: B = 0");
    }

    #[test]
    fn test_invalid_expiry_display() {
        let err = InstrumentError::InvalidExpiry { expiry: -0.5 };
        assert_eq!(format!("{}", err), "Invalid expiry: T = -0.5");
    }

    #[test]
    fn test_paths_required_display() {
        let err = InstrumentError::PathsRequired { payoff: "barrier" };
        assert_eq!(
            format!("{}", err),
            "Payoff 'barrier' requires a full path matrix, got a terminal slice"
        );
    }

    #[test]
    fn test_length_mismatch_display() {
        let err = InstrumentError::LengthMismatch {
            expected: 10,
            actual: 7,
        };
        assert_eq!(
            format!("{}", err),
            "Length mismatch: expected 10 elements, got 7"
        );
    }

    #[test]
    fn test_error_trait_implementation() {
        let err = InstrumentError::InvalidStrike { strike: -100.0 };
        let _: &dyn std::error::Error = &err;
    }

    #[test]
    fn test_clone_and_equality() {
        let err1 = InstrumentError::InvalidExpiry { expiry: -0.5 };
        let err2 = err1.clone();
        assert_eq!(err1, err2);
    }
}
