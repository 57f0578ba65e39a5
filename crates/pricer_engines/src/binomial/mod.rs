//! Cox-Ross-Rubinstein binomial lattice pricing.
//!
//! This module provides:
//! - [`CrrParams`]: per-step lattice parameters with domain validation
//! - [`BinomialEngine`]: backward induction with early-exercise support
//!
//! The backward pass runs on three buffers sized once per call (node
//! values, node spots, intrinsic scratch) with an explicit live-node
//! counter shrinking from `N + 1` to 1; no per-level reallocation.

mod error;
mod params;

pub use error::LatticeError;
pub use params::CrrParams;

use pricer_instruments::{Instrument, MarketState, Prices};

/// Binomial lattice engine.
///
/// Prices vanilla payoffs under European or American exercise on a CRR
/// tree. Path-dependent payoffs (barrier, Asian) are rejected at entry:
/// a recombining tree exposes terminal slices, not paths.
///
/// # Examples
/// ```
/// use pricer_engines::binomial::BinomialEngine;
/// use pricer_instruments::{Instrument, MarketState, Payoff};
///
/// let market = MarketState::new(100.0, 0.05, 0.2).unwrap();
/// let put = Instrument::american(Payoff::put(100.0), 1.0).unwrap();
///
/// let engine = BinomialEngine::new(500).unwrap();
/// let price = engine.price(&put, &market).unwrap();
/// assert!(price > 0.0);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct BinomialEngine {
    steps: usize,
}

impl BinomialEngine {
    /// Creates a lattice engine with a fixed step count.
    ///
    /// # Arguments
    /// * `steps` - Number of lattice steps (must be positive)
    ///
    /// # Returns
    /// `Err(LatticeError::InvalidStepCount)` for a zero step count.
    pub fn new(steps: usize) -> Result<Self, LatticeError> {
        if steps == 0 {
            return Err(LatticeError::InvalidStepCount { steps });
        }
        Ok(Self { steps })
    }

    /// Returns the configured step count.
    #[inline]
    pub fn steps(&self) -> usize {
        self.steps
    }

    /// Prices an instrument by backward induction.
    ///
    /// Builds the terminal slice of `N + 1` node spots
    /// (`S0 · u^(N-i) · d^i`), evaluates the payoff on it, then walks back
    /// one time slice per iteration: continuation
    /// `df·(p·v[i] + (1-p)·v[i+1])`, node spots divided by `u`, intrinsic
    /// re-evaluated, exercise resolved. After `N` iterations the single
    /// remaining node is the price.
    ///
    /// O(N²) time, O(N) auxiliary space.
    ///
    /// # Arguments
    /// * `instrument` - Vanilla instrument (European or American)
    /// * `market` - Market snapshot
    ///
    /// # Returns
    /// The lattice price, or a [`LatticeError`] for unsupported payoffs or
    /// an invalid parameterisation.
    pub fn price(
        &self,
        instrument: &Instrument,
        market: &MarketState,
    ) -> Result<f64, LatticeError> {
        let payoff = instrument.payoff();
        if payoff.requires_paths() {
            return Err(LatticeError::UnsupportedPayoff {
                payoff: payoff.name(),
            });
        }

        if instrument.is_expired() {
            return Ok(payoff
                .option_type()
                .intrinsic(market.spot(), instrument.strike()));
        }

        let params = CrrParams::derive(market, instrument.expiry(), self.steps)?;
        let n = self.steps;

        // Terminal slice: node i holds S0 · u^(n-i) · d^i = S0 · u^(n-2i)
        let mut spots = vec![0.0; n + 1];
        for (i, spot) in spots.iter_mut().enumerate() {
            *spot = market.spot() * params.up.powi(n as i32 - 2 * i as i32);
        }

        let mut values = vec![0.0; n + 1];
        payoff.evaluate_into(&Prices::Terminal(&spots), &mut values)?;
        let mut intrinsic = vec![0.0; n + 1];

        let p = params.probability;
        let df = params.discount;

        // values[i] is read before values[i + 1] is needed, so the
        // continuation update can run in place on the shrinking prefix
        let mut live = n + 1;
        while live > 1 {
            live -= 1;
            for i in 0..live {
                values[i] = df * (p * values[i] + (1.0 - p) * values[i + 1]);
                spots[i] *= params.down;
            }

            payoff.evaluate_into(&Prices::Terminal(&spots[..live]), &mut intrinsic[..live])?;
            instrument
                .exercise()
                .resolve(&intrinsic[..live], &mut values[..live])?;
        }

        Ok(values[0])
    }
}
