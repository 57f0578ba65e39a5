//! Monte Carlo pricing.
//!
//! This module provides:
//! - [`MonteCarloConfig`]: validated path/step counts and optional seed
//! - [`PathWorkspace`]: pre-allocated simulation buffers reused per call
//! - [`generate_paths`]: exact GBM simulation in log space
//! - [`MonteCarloEngine`]: the engine orchestrating draw → simulate →
//!   payoff → discount, returning a [`PricingResult`] with its standard
//!   error
//!
//! European exercise only; the early-exercise restriction is enforced at
//! engine entry.

mod config;
mod engine;
mod error;
mod paths;
mod workspace;

pub use config::{MonteCarloConfig, MonteCarloConfigBuilder, MAX_PATHS, MAX_STEPS};
pub use engine::{MonteCarloEngine, PricingResult};
pub use error::{ConfigError, MonteCarloError};
pub use paths::generate_paths;
pub use workspace::PathWorkspace;
