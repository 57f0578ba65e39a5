//! Payoff strategies.
//!
//! This module provides the closed set of payoff variants evaluated by the
//! pricing engines: vanilla calls and puts, barrier options over the four
//! knock-in/knock-out kinds, and arithmetic-average Asian options.
//!
//! Payoffs are pure functions from a [`Prices`] view to one payoff value
//! per node or path; they hold no state beyond their contract parameters.

use super::error::InstrumentError;
use super::prices::Prices;

/// Direction of a vanilla payoff.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OptionType {
    /// Call option: `max(S - K, 0)`
    Call,
    /// Put option: `max(K - S, 0)`
    Put,
}

impl OptionType {
    /// Computes the intrinsic value at a given price.
    ///
    /// # Examples
    /// ```
    /// use pricer_instruments::instruments::OptionType;
    ///
    /// assert_eq!(OptionType::Call.intrinsic(110.0, 100.0), 10.0);
    /// assert_eq!(OptionType::Put.intrinsic(110.0, 100.0), 0.0);
    /// ```
    #[inline]
    pub fn intrinsic(&self, price: f64, strike: f64) -> f64 {
        match self {
            OptionType::Call => (price - strike).max(0.0),
            OptionType::Put => (strike - price).max(0.0),
        }
    }

    /// Returns `true` for a call.
    #[inline]
    pub fn is_call(&self) -> bool {
        matches!(self, OptionType::Call)
    }
}

/// Barrier activation rule.
///
/// Knock-out payoffs stay alive only while the path avoids the barrier;
/// knock-in payoffs come alive only once the path touches it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BarrierKind {
    /// Knocked out when the path maximum reaches the barrier.
    UpAndOut,
    /// Knocked out when the path minimum reaches the barrier.
    DownAndOut,
    /// Knocked in when the path maximum reaches the barrier.
    UpAndIn,
    /// Knocked in when the path minimum reaches the barrier.
    DownAndIn,
}

impl BarrierKind {
    /// Decides whether the payoff is active given the path extrema.
    ///
    /// # Arguments
    /// * `path_max` - Running maximum over the whole path (spot included)
    /// * `path_min` - Running minimum over the whole path (spot included)
    /// * `barrier` - Barrier level
    #[inline]
    pub fn is_active(&self, path_max: f64, path_min: f64, barrier: f64) -> bool {
        match self {
            BarrierKind::UpAndOut => path_max < barrier,
            BarrierKind::DownAndOut => path_min > barrier,
            BarrierKind::UpAndIn => path_max >= barrier,
            BarrierKind::DownAndIn => path_min <= barrier,
        }
    }
}

/// Payoff strategy over terminal prices or simulated paths.
///
/// A closed enum selected at instrument construction; engines dispatch on
/// it statically. `Vanilla` accepts both price shapes, `Barrier` and
/// `Asian` require a full path matrix and fail with
/// [`InstrumentError::PathsRequired`] on a terminal slice.
///
/// # Examples
/// ```
/// use pricer_instruments::instruments::{Payoff, Prices};
///
/// let call = Payoff::call(100.0);
/// let payoffs = call.evaluate(&Prices::Terminal(&[95.0, 105.0])).unwrap();
/// assert_eq!(payoffs, vec![0.0, 5.0]);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Payoff {
    /// Plain call or put on the terminal price.
    Vanilla {
        /// Call/put direction
        option_type: OptionType,
        /// Strike price
        strike: f64,
    },
    /// Vanilla payoff gated by a barrier-crossing condition on the path.
    Barrier {
        /// Call/put direction of the underlying payoff
        option_type: OptionType,
        /// Strike price of the underlying payoff
        strike: f64,
        /// Barrier level monitored over the whole path
        barrier: f64,
        /// Knock-in/knock-out rule
        kind: BarrierKind,
    },
    /// Vanilla payoff on the arithmetic average price over the path.
    Asian {
        /// Call/put direction
        option_type: OptionType,
        /// Strike price
        strike: f64,
    },
}

impl Payoff {
    /// Creates a vanilla call payoff.
    pub fn call(strike: f64) -> Self {
        Payoff::Vanilla {
            option_type: OptionType::Call,
            strike,
        }
    }

    /// Creates a vanilla put payoff.
    pub fn put(strike: f64) -> Self {
        Payoff::Vanilla {
            option_type: OptionType::Put,
            strike,
        }
    }

    /// Creates a barrier payoff around a vanilla call or put.
    pub fn barrier(option_type: OptionType, strike: f64, barrier: f64, kind: BarrierKind) -> Self {
        Payoff::Barrier {
            option_type,
            strike,
            barrier,
            kind,
        }
    }

    /// Creates an arithmetic-average Asian payoff.
    pub fn asian(option_type: OptionType, strike: f64) -> Self {
        Payoff::Asian {
            option_type,
            strike,
        }
    }

    /// Returns the strike embedded in the payoff.
    #[inline]
    pub fn strike(&self) -> f64 {
        match self {
            Payoff::Vanilla { strike, .. }
            | Payoff::Barrier { strike, .. }
            | Payoff::Asian { strike, .. } => *strike,
        }
    }

    /// Returns the call/put direction of the (underlying) payoff.
    #[inline]
    pub fn option_type(&self) -> OptionType {
        match self {
            Payoff::Vanilla { option_type, .. }
            | Payoff::Barrier { option_type, .. }
            | Payoff::Asian { option_type, .. } => *option_type,
        }
    }

    /// Returns `true` for a plain call/put on the terminal price.
    #[inline]
    pub fn is_vanilla(&self) -> bool {
        matches!(self, Payoff::Vanilla { .. })
    }

    /// Returns `true` if evaluation needs a full path matrix.
    #[inline]
    pub fn requires_paths(&self) -> bool {
        !self.is_vanilla()
    }

    /// Short payoff name used in diagnostics.
    pub fn name(&self) -> &'static str {
        match self {
            Payoff::Vanilla {
                option_type: OptionType::Call,
                ..
            } => "call",
            Payoff::Vanilla {
                option_type: OptionType::Put,
                ..
            } => "put",
            Payoff::Barrier { .. } => "barrier",
            Payoff::Asian { .. } => "asian",
        }
    }

    /// Validates the contract parameters.
    pub(crate) fn validate(&self) -> Result<(), InstrumentError> {
        let strike = self.strike();
        if !strike.is_finite() || strike <= 0.0 {
            return Err(InstrumentError::InvalidStrike { strike });
        }

        if let Payoff::Barrier { barrier, .. } = self {
            if !barrier.is_finite() || *barrier <= 0.0 {
                return Err(InstrumentError::InvalidBarrier { barrier: *barrier });
            }
        }

        Ok(())
    }

    /// Evaluates the payoff into a caller-supplied buffer.
    ///
    /// Produces one value per lattice node (`Prices::Terminal`) or per
    /// simulated path (`Prices::Paths`). The mapping is pure and
    /// shape-consistent: `out.len()` must equal `prices.len()`.
    ///
    /// # Arguments
    /// * `prices` - Terminal slice or path matrix
    /// * `out` - Output buffer, one element per node/path
    ///
    /// # Returns
    /// `Err(InstrumentError::PathsRequired)` if a path-dependent payoff is
    /// given a terminal slice; `Err(InstrumentError::LengthMismatch)` if
    /// the output buffer has the wrong length.
    pub fn evaluate_into(
        &self,
        prices: &Prices<'_>,
        out: &mut [f64],
    ) -> Result<(), InstrumentError> {
        if out.len() != prices.len() {
            return Err(InstrumentError::LengthMismatch {
                expected: prices.len(),
                actual: out.len(),
            });
        }

        match self {
            Payoff::Vanilla {
                option_type,
                strike,
            } => {
                for (i, value) in out.iter_mut().enumerate() {
                    *value = option_type.intrinsic(prices.terminal(i), *strike);
                }
                Ok(())
            }

            Payoff::Barrier {
                option_type,
                strike,
                barrier,
                kind,
            } => {
                let grid = match prices {
                    Prices::Paths(grid) => grid,
                    Prices::Terminal(_) => {
                        return Err(InstrumentError::PathsRequired { payoff: self.name() })
                    }
                };

                for (i, value) in out.iter_mut().enumerate() {
                    let path = grid.path(i);
                    let mut path_max = f64::NEG_INFINITY;
                    let mut path_min = f64::INFINITY;
                    for &price in path {
                        path_max = path_max.max(price);
                        path_min = path_min.min(price);
                    }

                    *value = if kind.is_active(path_max, path_min, *barrier) {
                        option_type.intrinsic(grid.terminal(i), *strike)
                    } else {
                        0.0
                    };
                }
                Ok(())
            }

            Payoff::Asian {
                option_type,
                strike,
            } => {
                let grid = match prices {
                    Prices::Paths(grid) => grid,
                    Prices::Terminal(_) => {
                        return Err(InstrumentError::PathsRequired { payoff: self.name() })
                    }
                };

                for (i, value) in out.iter_mut().enumerate() {
                    let path = grid.path(i);
                    let sum: f64 = path.iter().sum();
                    let average = sum / path.len() as f64;
                    *value = option_type.intrinsic(average, *strike);
                }
                Ok(())
            }
        }
    }

    /// Evaluates the payoff into a freshly allocated vector.
    ///
    /// Convenience wrapper around [`Payoff::evaluate_into`].
    pub fn evaluate(&self, prices: &Prices<'_>) -> Result<Vec<f64>, InstrumentError> {
        let mut out = vec![0.0; prices.len()];
        self.evaluate_into(prices, &mut out)?;
        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::instruments::prices::PathGrid;
    use approx::assert_relative_eq;

    fn two_path_grid(data: &[f64]) -> PathGrid<'_> {
        // Two paths, two steps: rows of three observations
        PathGrid::new(data, 2, 2).unwrap()
    }

    #[test]
    fn test_call_terminal_slice() {
        let call = Payoff::call(100.0);
        let payoffs = call
            .evaluate(&Prices::Terminal(&[90.0, 100.0, 110.0]))
            .unwrap();
        assert_eq!(payoffs, vec![0.0, 0.0, 10.0]);
    }

    #[test]
    fn test_put_terminal_slice() {
        let put = Payoff::put(100.0);
        let payoffs = put
            .evaluate(&Prices::Terminal(&[90.0, 100.0, 110.0]))
            .unwrap();
        assert_eq!(payoffs, vec![10.0, 0.0, 0.0]);
    }

    #[test]
    fn test_vanilla_uses_terminal_column_of_paths() {
        let data = [100.0, 120.0, 110.0, 100.0, 80.0, 95.0];
        let grid = two_path_grid(&data);

        let call = Payoff::call(100.0);
        let payoffs = call.evaluate(&Prices::Paths(grid)).unwrap();
        assert_relative_eq!(payoffs[0], 10.0);
        assert_relative_eq!(payoffs[1], 0.0);
    }

    #[test]
    fn test_up_and_out_knocked() {
        // Path 0 touches 120 and is knocked out; path 1 stays below
        let data = [100.0, 120.0, 110.0, 100.0, 105.0, 115.0];
        let grid = two_path_grid(&data);

        let payoff = Payoff::barrier(OptionType::Call, 100.0, 120.0, BarrierKind::UpAndOut);
        let payoffs = payoff.evaluate(&Prices::Paths(grid)).unwrap();
        assert_eq!(payoffs[0], 0.0);
        assert_relative_eq!(payoffs[1], 15.0);
    }

    #[test]
    fn test_down_and_out_knocked() {
        let data = [100.0, 75.0, 110.0, 100.0, 95.0, 105.0];
        let grid = two_path_grid(&data);

        let payoff = Payoff::barrier(OptionType::Call, 100.0, 80.0, BarrierKind::DownAndOut);
        let payoffs = payoff.evaluate(&Prices::Paths(grid)).unwrap();
        assert_eq!(payoffs[0], 0.0);
        assert_relative_eq!(payoffs[1], 5.0);
    }

    #[test]
    fn test_up_and_in_activation() {
        let data = [100.0, 120.0, 110.0, 100.0, 105.0, 115.0];
        let grid = two_path_grid(&data);

        let payoff = Payoff::barrier(OptionType::Call, 100.0, 120.0, BarrierKind::UpAndIn);
        let payoffs = payoff.evaluate(&Prices::Paths(grid)).unwrap();
        assert_relative_eq!(payoffs[0], 10.0);
        assert_eq!(payoffs[1], 0.0);
    }

    #[test]
    fn test_down_and_in_activation() {
        let data = [100.0, 75.0, 110.0, 100.0, 95.0, 105.0];
        let grid = two_path_grid(&data);

        let payoff = Payoff::barrier(OptionType::Put, 120.0, 80.0, BarrierKind::DownAndIn);
        let payoffs = payoff.evaluate(&Prices::Paths(grid)).unwrap();
        assert_relative_eq!(payoffs[0], 10.0);
        assert_eq!(payoffs[1], 0.0);
    }

    #[test]
    fn test_barrier_monitors_spot_at_time_zero() {
        // The starting observation itself can trigger a knock-in
        let data = [100.0, 95.0, 90.0];
        let grid = PathGrid::new(&data, 1, 2).unwrap();

        let payoff = Payoff::barrier(OptionType::Put, 110.0, 100.0, BarrierKind::UpAndIn);
        let payoffs = payoff.evaluate(&Prices::Paths(grid)).unwrap();
        assert_relative_eq!(payoffs[0], 20.0);
    }

    #[test]
    fn test_barrier_rejects_terminal_slice() {
        let payoff = Payoff::barrier(OptionType::Call, 100.0, 120.0, BarrierKind::UpAndOut);
        let result = payoff.evaluate(&Prices::Terminal(&[110.0]));
        assert!(matches!(
            result,
            Err(InstrumentError::PathsRequired { payoff: "barrier" })
        ));
    }

    #[test]
    fn test_asian_averages_over_path() {
        // Averages include the spot observation: (100+110+120)/3 = 110
        let data = [100.0, 110.0, 120.0, 100.0, 90.0, 80.0];
        let grid = two_path_grid(&data);

        let payoff = Payoff::asian(OptionType::Call, 100.0);
        let payoffs = payoff.evaluate(&Prices::Paths(grid)).unwrap();
        assert_relative_eq!(payoffs[0], 10.0);
        assert_eq!(payoffs[1], 0.0);
    }

    #[test]
    fn test_asian_rejects_terminal_slice() {
        let payoff = Payoff::asian(OptionType::Put, 100.0);
        let result = payoff.evaluate(&Prices::Terminal(&[90.0]));
        assert!(matches!(
            result,
            Err(InstrumentError::PathsRequired { payoff: "asian" })
        ));
    }

    #[test]
    fn test_evaluate_into_length_mismatch() {
        let call = Payoff::call(100.0);
        let mut out = [0.0; 2];
        let result = call.evaluate_into(&Prices::Terminal(&[110.0]), &mut out);
        assert!(matches!(
            result,
            Err(InstrumentError::LengthMismatch {
                expected: 1,
                actual: 2
            })
        ));
    }

    #[test]
    fn test_payoff_is_pure() {
        // Repeated evaluation of the same input yields identical output
        let call = Payoff::call(100.0);
        let terminal = [95.0, 105.0, 115.0];
        let first = call.evaluate(&Prices::Terminal(&terminal)).unwrap();
        let second = call.evaluate(&Prices::Terminal(&terminal)).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_accessors() {
        let payoff = Payoff::barrier(OptionType::Call, 100.0, 120.0, BarrierKind::UpAndOut);
        assert_eq!(payoff.strike(), 100.0);
        assert!(payoff.option_type().is_call());
        assert!(!payoff.is_vanilla());
        assert!(payoff.requires_paths());
        assert_eq!(payoff.name(), "barrier");
    }

    #[test]
    fn test_names() {
        assert_eq!(Payoff::call(100.0).name(), "call");
        assert_eq!(Payoff::put(100.0).name(), "put");
        assert_eq!(Payoff::asian(OptionType::Call, 100.0).name(), "asian");
    }

    #[test]
    fn test_validate_rejects_bad_strike() {
        assert!(matches!(
            Payoff::call(-100.0).validate(),
            Err(InstrumentError::InvalidStrike { .. })
        ));
        assert!(matches!(
            Payoff::put(0.0).validate(),
            Err(InstrumentError::InvalidStrike { .. })
        ));
    }

    #[test]
    fn test_validate_rejects_bad_barrier() {
        let payoff = Payoff::barrier(OptionType::Call, 100.0, -120.0, BarrierKind::UpAndOut);
        assert!(matches!(
            payoff.validate(),
            Err(InstrumentError::InvalidBarrier { .. })
        ));
    }

    mod properties {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn prop_intrinsic_non_negative(
                price in 0.0_f64..1000.0,
                strike in 0.01_f64..1000.0,
            ) {
                prop_assert!(OptionType::Call.intrinsic(price, strike) >= 0.0);
                prop_assert!(OptionType::Put.intrinsic(price, strike) >= 0.0);
            }

            #[test]
            fn prop_call_put_decomposition(
                price in 0.0_f64..1000.0,
                strike in 0.01_f64..1000.0,
            ) {
                // max(S-K,0) - max(K-S,0) = S - K
                let call = OptionType::Call.intrinsic(price, strike);
                let put = OptionType::Put.intrinsic(price, strike);
                prop_assert!((call - put - (price - strike)).abs() < 1e-9);
            }

            #[test]
            fn prop_knock_in_and_out_partition(
                path_max in 100.0_f64..200.0,
                barrier in 90.0_f64..210.0,
            ) {
                // A path is either knocked in or knocked out, never both
                let path_min = 90.0;
                let up_out = BarrierKind::UpAndOut.is_active(path_max, path_min, barrier);
                let up_in = BarrierKind::UpAndIn.is_active(path_max, path_min, barrier);
                prop_assert_ne!(up_out, up_in);
            }
        }
    }
}
