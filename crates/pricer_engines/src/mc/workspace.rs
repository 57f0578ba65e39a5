//! Pre-allocated simulation buffers.
//!
//! The Monte Carlo engine reuses one [`PathWorkspace`] across pricing
//! calls: normal draws, simulated paths, and per-path payoffs live in flat
//! buffers that grow monotonically and are never reallocated per call.

/// Scratch buffers for one Monte Carlo engine.
///
/// Layout (all row-major, one row per path):
/// - `randoms`: `n_paths × n_steps` standard-normal draws
/// - `paths`: `n_paths × (n_steps + 1)` prices, spot at column 0
/// - `payoffs`: `n_paths` payoff values
///
/// The active dimensions are tracked separately from buffer capacity, so
/// shrinking a configuration never frees memory and growing one only
/// reallocates past the high-water mark.
#[derive(Debug, Clone)]
pub struct PathWorkspace {
    randoms: Vec<f64>,
    paths: Vec<f64>,
    payoffs: Vec<f64>,
    n_paths: usize,
    n_steps: usize,
}

impl PathWorkspace {
    /// Allocates a workspace for the given dimensions.
    pub fn new(n_paths: usize, n_steps: usize) -> Self {
        Self {
            randoms: vec![0.0; n_paths * n_steps],
            paths: vec![0.0; n_paths * (n_steps + 1)],
            payoffs: vec![0.0; n_paths],
            n_paths,
            n_steps,
        }
    }

    /// Grows the buffers if needed and sets the active dimensions.
    pub fn ensure_capacity(&mut self, n_paths: usize, n_steps: usize) {
        let randoms_len = n_paths * n_steps;
        let paths_len = n_paths * (n_steps + 1);

        if self.randoms.len() < randoms_len {
            self.randoms.resize(randoms_len, 0.0);
        }
        if self.paths.len() < paths_len {
            self.paths.resize(paths_len, 0.0);
        }
        if self.payoffs.len() < n_paths {
            self.payoffs.resize(n_paths, 0.0);
        }

        self.n_paths = n_paths;
        self.n_steps = n_steps;
    }

    /// Returns the active path count.
    #[inline]
    pub fn n_paths(&self) -> usize {
        self.n_paths
    }

    /// Returns the active step count.
    #[inline]
    pub fn n_steps(&self) -> usize {
        self.n_steps
    }

    /// Mutable view of the active normal-draw buffer.
    #[inline]
    pub fn randoms_mut(&mut self) -> &mut [f64] {
        &mut self.randoms[..self.n_paths * self.n_steps]
    }

    /// View of the active path buffer.
    #[inline]
    pub fn paths(&self) -> &[f64] {
        &self.paths[..self.n_paths * (self.n_steps + 1)]
    }

    /// View of the active payoff buffer.
    #[inline]
    pub fn payoffs(&self) -> &[f64] {
        &self.payoffs[..self.n_paths]
    }

    /// Split borrow for path generation: mutable paths, shared randoms.
    #[inline]
    pub fn paths_mut_and_randoms(&mut self) -> (&mut [f64], &[f64]) {
        (
            &mut self.paths[..self.n_paths * (self.n_steps + 1)],
            &self.randoms[..self.n_paths * self.n_steps],
        )
    }

    /// Split borrow for payoff evaluation: shared paths, mutable payoffs.
    #[inline]
    pub fn paths_and_payoffs_mut(&mut self) -> (&[f64], &mut [f64]) {
        (
            &self.paths[..self.n_paths * (self.n_steps + 1)],
            &mut self.payoffs[..self.n_paths],
        )
    }
}
