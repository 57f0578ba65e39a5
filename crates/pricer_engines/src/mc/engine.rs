//! Monte Carlo pricing engine.

use pricer_instruments::{Instrument, MarketState, PathGrid, Prices};

use super::config::MonteCarloConfig;
use super::error::MonteCarloError;
use super::paths::generate_paths;
use super::workspace::PathWorkspace;
use crate::rng::SimulationRng;

/// Price estimate with its sampling uncertainty.
///
/// `std_error` is the standard error of the discounted mean payoff and
/// decays as `O(1/√n_paths)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PricingResult {
    /// Discounted mean payoff.
    pub price: f64,
    /// Standard error of the estimate.
    pub std_error: f64,
}

impl PricingResult {
    /// Returns the 95% confidence interval `(lower, upper)`.
    pub fn confidence_95(&self) -> (f64, f64) {
        let half_width = 1.96 * self.std_error;
        (self.price - half_width, self.price + half_width)
    }
}

/// Monte Carlo engine for European-exercise instruments.
///
/// Simulates GBM paths with an engine-owned seeded RNG and discounts the
/// mean payoff. The RNG stream restarts from the configured seed on every
/// call, so identical inputs give bit-identical results. Scratch buffers
/// are reused across calls and never visible to the caller.
///
/// American exercise is rejected: a plain pathwise simulation has no way
/// to resolve an early-exercise decision (that would need a regression
/// method), so the restriction is explicit rather than silently wrong.
///
/// # Examples
/// ```
/// use pricer_engines::mc::{MonteCarloConfig, MonteCarloEngine};
/// use pricer_instruments::{Instrument, MarketState, Payoff};
///
/// let config = MonteCarloConfig::builder()
///     .n_paths(20_000)
///     .n_steps(50)
///     .seed(42)
///     .build()
///     .unwrap();
/// let mut engine = MonteCarloEngine::new(config);
///
/// let market = MarketState::new(100.0, 0.05, 0.2).unwrap();
/// let call = Instrument::european(Payoff::call(100.0), 1.0).unwrap();
///
/// let result = engine.price(&call, &market).unwrap();
/// assert!((result.price - 10.45).abs() < 1.0);
/// ```
#[derive(Debug, Clone)]
pub struct MonteCarloEngine {
    config: MonteCarloConfig,
    workspace: PathWorkspace,
    rng: SimulationRng,
}

impl MonteCarloEngine {
    /// Creates an engine from a validated configuration.
    ///
    /// An unseeded configuration defaults to seed 0; runs are still
    /// reproducible, just not distinguishable across engines.
    pub fn new(config: MonteCarloConfig) -> Self {
        Self {
            config,
            workspace: PathWorkspace::new(config.n_paths(), config.n_steps()),
            rng: SimulationRng::from_seed(config.seed().unwrap_or(0)),
        }
    }

    /// Returns the engine configuration.
    #[inline]
    pub fn config(&self) -> &MonteCarloConfig {
        &self.config
    }

    /// Prices a European-exercise instrument by simulation.
    ///
    /// Vanilla payoffs read the terminal column of the path matrix;
    /// barrier and Asian payoffs observe the whole path, spot included.
    ///
    /// # Arguments
    /// * `instrument` - European instrument (any payoff)
    /// * `market` - Market snapshot
    ///
    /// # Returns
    /// The discounted price estimate with its standard error, or a
    /// [`MonteCarloError`] for American exercise.
    pub fn price(
        &mut self,
        instrument: &Instrument,
        market: &MarketState,
    ) -> Result<PricingResult, MonteCarloError> {
        if instrument.exercise().allows_early_exercise() {
            return Err(MonteCarloError::UnsupportedExercise {
                style: instrument.exercise().name(),
            });
        }

        let payoff = instrument.payoff();

        if instrument.is_expired() {
            // Degenerate horizon: a single observation at the spot
            let observation = [market.spot()];
            let grid = PathGrid::new(&observation, 1, 0)?;
            let intrinsic = payoff.evaluate(&Prices::Paths(grid))?[0];
            return Ok(PricingResult {
                price: intrinsic,
                std_error: 0.0,
            });
        }

        let n_paths = self.config.n_paths();
        let n_steps = self.config.n_steps();

        // Restart the stream so identical calls are bit-identical
        self.rng.reseed();
        self.workspace.ensure_capacity(n_paths, n_steps);
        self.rng.fill_normal(self.workspace.randoms_mut());
        generate_paths(&mut self.workspace, market, instrument.expiry());

        let (paths, payoffs) = self.workspace.paths_and_payoffs_mut();
        let grid = PathGrid::new(paths, n_paths, n_steps)?;
        payoff.evaluate_into(&Prices::Paths(grid), payoffs)?;

        let discount = (-market.rate() * instrument.expiry()).exp();
        let n = n_paths as f64;
        let mean = payoffs.iter().sum::<f64>() / n;
        let variance = payoffs
            .iter()
            .map(|&value| {
                let deviation = value - mean;
                deviation * deviation
            })
            .sum::<f64>()
            / (n - 1.0).max(1.0);

        Ok(PricingResult {
            price: discount * mean,
            std_error: discount * (variance / n).sqrt(),
        })
    }
}
