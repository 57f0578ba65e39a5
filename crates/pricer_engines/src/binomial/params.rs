//! Cox-Ross-Rubinstein lattice parameters.

use pricer_instruments::MarketState;

use super::error::LatticeError;

/// Per-step CRR parameters derived for one pricing call.
///
/// Under the CRR parameterisation `up = exp(σ√dt)` and `down = 1/up`, so
/// `up * down == 1` by construction and the tree recombines. The
/// risk-neutral probability
///
/// ```text
/// p = (exp((r - q)·dt) - down) / (up - down)
/// ```
///
/// must lie in `[0, 1]`; anything else (including the σ = 0 degenerate
/// case, where `up == down`) is rejected as a domain failure rather than
/// silently clamped.
///
/// # Examples
/// ```
/// use pricer_engines::binomial::CrrParams;
/// use pricer_instruments::MarketState;
///
/// let market = MarketState::new(100.0, 0.05, 0.2).unwrap();
/// let params = CrrParams::derive(&market, 1.0, 500).unwrap();
///
/// assert!((params.up * params.down - 1.0).abs() < 1e-12);
/// assert!((0.0..=1.0).contains(&params.probability));
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CrrParams {
    /// Up-move factor `exp(σ√dt)`
    pub up: f64,
    /// Down-move factor `1/up`
    pub down: f64,
    /// Risk-neutral probability of the up move
    pub probability: f64,
    /// Per-step discount factor `exp(-r·dt)`
    pub discount: f64,
}

impl CrrParams {
    /// Derives the per-step parameters from a market snapshot.
    ///
    /// # Arguments
    /// * `market` - Market snapshot (volatility, rate, dividend yield)
    /// * `expiry` - Total maturity in years (must be positive)
    /// * `steps` - Number of lattice steps (must be positive)
    ///
    /// # Returns
    /// `Err(LatticeError::InvalidStepCount)` for a zero step count,
    /// `Err(LatticeError::ProbabilityOutOfRange)` when the derived `p` is
    /// not a finite value in `[0, 1]`.
    pub fn derive(market: &MarketState, expiry: f64, steps: usize) -> Result<Self, LatticeError> {
        if steps == 0 {
            return Err(LatticeError::InvalidStepCount { steps });
        }

        let dt = expiry / steps as f64;
        let up = (market.volatility() * dt.sqrt()).exp();
        let down = 1.0 / up;
        let growth = (market.carry() * dt).exp();
        let probability = (growth - down) / (up - down);

        if !probability.is_finite() || !(0.0..=1.0).contains(&probability) {
            return Err(LatticeError::ProbabilityOutOfRange { probability });
        }

        Ok(Self {
            up,
            down,
            probability,
            discount: (-market.rate() * dt).exp(),
        })
    }
}
