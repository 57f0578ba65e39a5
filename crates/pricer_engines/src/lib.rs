//! # Pricer Engines
//!
//! Three complementary pricing engines over the
//! [`pricer_instruments`] data model:
//!
//! - [`analytic::BlackScholesEngine`]: closed-form Black-Scholes with
//!   continuous dividend yield, vanilla European only - the ground truth
//!   the numerical engines are validated against
//! - [`binomial::BinomialEngine`]: Cox-Ross-Rubinstein lattice with
//!   backward induction and early-exercise support
//! - [`mc::MonteCarloEngine`]: GBM path simulation with an engine-owned,
//!   seedable random source
//!
//! ## Design Principles
//!
//! - **Uniform surface**: every engine exposes
//!   `price(&Instrument, &MarketState)` and returns a `Result`
//! - **Capability checks at entry**: payoff and exercise compatibility is
//!   checked once per call, never inside the hot loops
//! - **No shared state**: each engine owns its scratch buffers and RNG, so
//!   independent engines price concurrently without coordination

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod analytic;
pub mod binomial;
pub mod mc;
pub mod rng;

pub use analytic::{AnalyticError, BlackScholesEngine};
pub use binomial::{BinomialEngine, CrrParams, LatticeError};
pub use mc::{MonteCarloConfig, MonteCarloEngine, MonteCarloError, PricingResult};
