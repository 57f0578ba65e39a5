//! Price views supplied to payoff evaluation.
//!
//! Payoffs accept either a one-dimensional slice of terminal prices (the
//! lattice case) or a two-dimensional matrix of simulated paths (the Monte
//! Carlo case). Both shapes are borrowed views; evaluation never copies the
//! underlying data.

use super::error::InstrumentError;

/// Borrowed view over a flat, row-major path matrix.
///
/// Each row is one simulated path of `n_steps + 1` observations, time
/// ordered with the spot at column 0. Row `i` occupies
/// `data[i * (n_steps + 1) .. (i + 1) * (n_steps + 1)]`.
///
/// # Examples
/// ```
/// use pricer_instruments::instruments::PathGrid;
///
/// // Two paths, one step each
/// let data = [100.0, 110.0, 100.0, 95.0];
/// let grid = PathGrid::new(&data, 2, 1).unwrap();
/// assert_eq!(grid.path(0), &[100.0, 110.0]);
/// assert_eq!(grid.terminal(1), 95.0);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct PathGrid<'a> {
    data: &'a [f64],
    n_paths: usize,
    n_steps: usize,
}

impl<'a> PathGrid<'a> {
    /// Creates a path view over a flat buffer.
    ///
    /// # Arguments
    /// * `data` - Flat row-major buffer of `n_paths * (n_steps + 1)` prices
    /// * `n_paths` - Number of simulated paths (rows)
    /// * `n_steps` - Number of time steps per path (row length minus one)
    ///
    /// # Returns
    /// `Err(InstrumentError::LengthMismatch)` if the buffer length does not
    /// match the declared dimensions.
    pub fn new(data: &'a [f64], n_paths: usize, n_steps: usize) -> Result<Self, InstrumentError> {
        let expected = n_paths * (n_steps + 1);
        if data.len() != expected {
            return Err(InstrumentError::LengthMismatch {
                expected,
                actual: data.len(),
            });
        }

        Ok(Self {
            data,
            n_paths,
            n_steps,
        })
    }

    /// Returns the number of paths (rows).
    #[inline]
    pub fn n_paths(&self) -> usize {
        self.n_paths
    }

    /// Returns the number of time steps per path.
    #[inline]
    pub fn n_steps(&self) -> usize {
        self.n_steps
    }

    /// Returns path `idx` as a slice of `n_steps + 1` observations.
    ///
    /// # Panics
    /// Panics if `idx >= n_paths` (callers iterate `0..n_paths`).
    #[inline]
    pub fn path(&self, idx: usize) -> &'a [f64] {
        let row = self.n_steps + 1;
        &self.data[idx * row..(idx + 1) * row]
    }

    /// Returns the terminal price of path `idx`.
    #[inline]
    pub fn terminal(&self, idx: usize) -> f64 {
        self.data[idx * (self.n_steps + 1) + self.n_steps]
    }
}

/// Shape-tagged price input for payoff evaluation.
///
/// `Terminal` carries a one-dimensional slice of terminal prices (one per
/// lattice node); `Paths` carries a full path matrix (one row per simulated
/// path). Vanilla payoffs accept either shape, path-dependent payoffs
/// require `Paths`.
#[derive(Debug, Clone, Copy)]
pub enum Prices<'a> {
    /// One-dimensional slice of terminal prices.
    Terminal(&'a [f64]),
    /// Two-dimensional path matrix.
    Paths(PathGrid<'a>),
}

impl Prices<'_> {
    /// Returns the number of payoff values evaluation will produce:
    /// the slice length for `Terminal`, the path count for `Paths`.
    #[inline]
    pub fn len(&self) -> usize {
        match self {
            Prices::Terminal(slice) => slice.len(),
            Prices::Paths(grid) => grid.n_paths(),
        }
    }

    /// Returns `true` if there is nothing to evaluate.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the terminal price at `idx` regardless of shape.
    #[inline]
    pub fn terminal(&self, idx: usize) -> f64 {
        match self {
            Prices::Terminal(slice) => slice[idx],
            Prices::Paths(grid) => grid.terminal(idx),
        }
    }
}
