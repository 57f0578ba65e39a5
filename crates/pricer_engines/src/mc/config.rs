//! Monte Carlo engine configuration.

use super::error::ConfigError;

/// Maximum number of simulation paths accepted by the engine.
pub const MAX_PATHS: usize = 10_000_000;

/// Maximum number of time steps accepted by the engine.
pub const MAX_STEPS: usize = 10_000;

/// Validated Monte Carlo configuration.
///
/// Path and step counts are checked against `1..=MAX_*` at construction;
/// an invalid configuration never reaches the engine. The optional seed
/// makes pricing runs bit-reproducible.
///
/// # Examples
/// ```
/// use pricer_engines::mc::MonteCarloConfig;
///
/// let config = MonteCarloConfig::builder()
///     .n_paths(100_000)
///     .n_steps(50)
///     .seed(42)
///     .build()
///     .unwrap();
/// assert_eq!(config.n_paths(), 100_000);
/// assert_eq!(config.seed(), Some(42));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MonteCarloConfig {
    n_paths: usize,
    n_steps: usize,
    seed: Option<u64>,
}

impl MonteCarloConfig {
    /// Creates a validated configuration without a seed.
    ///
    /// # Arguments
    /// * `n_paths` - Number of simulation paths (`1..=MAX_PATHS`)
    /// * `n_steps` - Number of time steps per path (`1..=MAX_STEPS`)
    pub fn new(n_paths: usize, n_steps: usize) -> Result<Self, ConfigError> {
        Self::validate(n_paths, n_steps)?;
        Ok(Self {
            n_paths,
            n_steps,
            seed: None,
        })
    }

    /// Returns a builder with the default configuration
    /// (10,000 paths, 252 steps, no seed).
    pub fn builder() -> MonteCarloConfigBuilder {
        MonteCarloConfigBuilder::default()
    }

    fn validate(n_paths: usize, n_steps: usize) -> Result<(), ConfigError> {
        if n_paths == 0 || n_paths > MAX_PATHS {
            return Err(ConfigError::InvalidPathCount { n_paths });
        }
        if n_steps == 0 || n_steps > MAX_STEPS {
            return Err(ConfigError::InvalidStepCount { n_steps });
        }
        Ok(())
    }

    /// Returns the number of simulation paths.
    #[inline]
    pub fn n_paths(&self) -> usize {
        self.n_paths
    }

    /// Returns the number of time steps per path.
    #[inline]
    pub fn n_steps(&self) -> usize {
        self.n_steps
    }

    /// Returns the configured seed, if any.
    #[inline]
    pub fn seed(&self) -> Option<u64> {
        self.seed
    }
}

/// Builder for [`MonteCarloConfig`].
#[derive(Debug, Clone)]
pub struct MonteCarloConfigBuilder {
    n_paths: usize,
    n_steps: usize,
    seed: Option<u64>,
}

impl Default for MonteCarloConfigBuilder {
    fn default() -> Self {
        Self {
            n_paths: 10_000,
            n_steps: 252,
            seed: None,
        }
    }
}

impl MonteCarloConfigBuilder {
    /// Sets the number of simulation paths.
    pub fn n_paths(mut self, n_paths: usize) -> Self {
        self.n_paths = n_paths;
        self
    }

    /// Sets the number of time steps per path.
    pub fn n_steps(mut self, n_steps: usize) -> Self {
        self.n_steps = n_steps;
        self
    }

    /// Sets the RNG seed for reproducible runs.
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Validates and builds the configuration.
    pub fn build(self) -> Result<MonteCarloConfig, ConfigError> {
        MonteCarloConfig::validate(self.n_paths, self.n_steps)?;
        Ok(MonteCarloConfig {
            n_paths: self.n_paths,
            n_steps: self.n_steps,
            seed: self.seed,
        })
    }
}
