//! Closed-form pricing.
//!
//! This module provides:
//! - [`BlackScholesEngine`]: Black-Scholes with continuous dividend yield,
//!   vanilla European options only
//! - [`norm_cdf`] / [`norm_pdf`]: the standard normal helpers the formula
//!   is built on
//!
//! The analytic price is the ground truth the lattice and Monte Carlo
//! engines are validated against.

pub mod distributions;
mod error;

pub use distributions::{norm_cdf, norm_pdf};
pub use error::AnalyticError;

use pricer_instruments::{Instrument, MarketState, OptionType};

/// Black-Scholes closed-form engine.
///
/// Supports plain calls and puts under European exercise; everything else
/// fails with [`AnalyticError::UnsupportedPayoff`] or
/// [`AnalyticError::UnsupportedExercise`] at entry. With the continuous
/// dividend (or foreign) yield `q` the formula is
///
/// ```text
/// d1 = (ln(S/K) + (r - q + σ²/2)·T) / (σ·√T)
/// d2 = d1 - σ·√T
/// call = S·e^(-qT)·Φ(d1) - K·e^(-rT)·Φ(d2)
/// put  = K·e^(-rT)·Φ(-d2) - S·e^(-qT)·Φ(-d1)
/// ```
///
/// # Examples
/// ```
/// use pricer_engines::analytic::BlackScholesEngine;
/// use pricer_instruments::{Instrument, MarketState, Payoff};
///
/// let market = MarketState::new(100.0, 0.05, 0.2).unwrap();
/// let call = Instrument::european(Payoff::call(100.0), 1.0).unwrap();
///
/// let price = BlackScholesEngine::new().price(&call, &market).unwrap();
/// assert!((price - 10.4506).abs() < 1e-3);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct BlackScholesEngine;

impl BlackScholesEngine {
    /// Creates a new closed-form engine.
    pub fn new() -> Self {
        Self
    }

    /// Prices a vanilla European option.
    ///
    /// At `T = 0` the price collapses to the intrinsic payoff, avoiding the
    /// division by `σ·√T`; for `T > 0` the volatility must be strictly
    /// positive.
    ///
    /// # Arguments
    /// * `instrument` - Vanilla European instrument
    /// * `market` - Market snapshot
    ///
    /// # Returns
    /// The finite fair value, or an [`AnalyticError`] if the instrument
    /// shape or volatility is unsupported.
    pub fn price(
        &self,
        instrument: &Instrument,
        market: &MarketState,
    ) -> Result<f64, AnalyticError> {
        let payoff = instrument.payoff();
        if !payoff.is_vanilla() {
            return Err(AnalyticError::UnsupportedPayoff {
                payoff: payoff.name(),
            });
        }
        if !instrument.exercise().is_european() {
            return Err(AnalyticError::UnsupportedExercise {
                style: instrument.exercise().name(),
            });
        }

        let spot = market.spot();
        let strike = instrument.strike();

        if instrument.is_expired() {
            return Ok(payoff.option_type().intrinsic(spot, strike));
        }

        let volatility = market.volatility();
        if volatility <= 0.0 {
            return Err(AnalyticError::InvalidVolatility { volatility });
        }

        let expiry = instrument.expiry();
        let rate = market.rate();
        let dividend_yield = market.dividend_yield();

        let vol_sqrt_t = volatility * expiry.sqrt();
        let d1 = ((spot / strike).ln() + (rate - dividend_yield + 0.5 * volatility * volatility) * expiry)
            / vol_sqrt_t;
        let d2 = d1 - vol_sqrt_t;

        let forward_leg = spot * (-dividend_yield * expiry).exp();
        let strike_leg = strike * (-rate * expiry).exp();

        let price = match payoff.option_type() {
            OptionType::Call => forward_leg * norm_cdf(d1) - strike_leg * norm_cdf(d2),
            OptionType::Put => strike_leg * norm_cdf(-d2) - forward_leg * norm_cdf(-d1),
        };

        Ok(price)
    }
}
