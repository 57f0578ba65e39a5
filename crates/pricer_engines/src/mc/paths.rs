//! Geometric Brownian Motion path generation.
//!
//! Paths are simulated exactly in log space: per-step log-returns
//! `(r - q - σ²/2)·dt + σ·√dt·Z` are accumulated and exponentiated, so the
//! discretisation is exact for GBM regardless of step size.

use pricer_instruments::MarketState;

use super::workspace::PathWorkspace;

/// Fills the workspace path buffer from its normal-draw buffer.
///
/// Consumes the active `n_paths × n_steps` draws and writes
/// `n_paths × (n_steps + 1)` prices, each row starting at the spot.
///
/// # Arguments
/// * `workspace` - Workspace whose `randoms` buffer holds the draws
/// * `market` - Market snapshot (spot, rate, volatility, dividend yield)
/// * `expiry` - Total horizon in years (must be positive)
pub fn generate_paths(workspace: &mut PathWorkspace, market: &MarketState, expiry: f64) {
    let n_paths = workspace.n_paths();
    let n_steps = workspace.n_steps();

    let dt = expiry / n_steps as f64;
    let volatility = market.volatility();
    let drift_dt = (market.carry() - 0.5 * volatility * volatility) * dt;
    let vol_sqrt_dt = volatility * dt.sqrt();
    let spot = market.spot();

    let row = n_steps + 1;
    let (paths, randoms) = workspace.paths_mut_and_randoms();

    for path_idx in 0..n_paths {
        let path_offset = path_idx * row;
        let rand_offset = path_idx * n_steps;

        paths[path_offset] = spot;
        let mut log_return = 0.0;
        for step in 0..n_steps {
            log_return += drift_dt + vol_sqrt_dt * randoms[rand_offset + step];
            paths[path_offset + step + 1] = spot * log_return.exp();
        }
    }
}
