//! Error types for closed-form pricing.

use thiserror::Error;

/// Closed-form pricing errors.
///
/// The analytic engine prices vanilla European options only; anything else
/// is rejected at entry rather than priced incorrectly.
///
/// # Examples
/// ```
/// use pricer_engines::analytic::AnalyticError;
///
/// let err = AnalyticError::UnsupportedExercise { style: "american" };
/// assert!(format!("{}", err).contains("american"));
/// ```
#[derive(Debug, Clone, Error, PartialEq)]
pub enum AnalyticError {
    /// Non-positive volatility with time remaining to expiry.
    #[error("Invalid volatility for closed-form pricing: σ = {volatility}")]
    InvalidVolatility {
        /// The invalid volatility value
        volatility: f64,
    },

    /// Exercise style the closed form cannot represent.
    #[error("Unsupported exercise style for closed-form pricing: {style}")]
    UnsupportedExercise {
        /// Name of the rejected exercise style
        style: &'static str,
    },

    /// Payoff the closed form cannot represent.
    #[error("Unsupported payoff for closed-form pricing: {payoff}")]
    UnsupportedPayoff {
        /// Name of the rejected payoff
        payoff: &'static str,
    },
}
