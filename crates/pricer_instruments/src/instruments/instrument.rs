//! Option instrument composition.

use super::error::InstrumentError;
use super::exercise::ExerciseStyle;
use super::payoff::Payoff;

/// Immutable option instrument.
///
/// Composes a [`Payoff`], an [`ExerciseStyle`], and a time to expiry in
/// years. The strike lives inside the payoff; [`Instrument::strike`]
/// delegates to it, so engines that want the strike directly and engines
/// that drive the payoff strategy always agree.
///
/// # Examples
/// ```
/// use pricer_instruments::instruments::{ExerciseStyle, Instrument, Payoff};
///
/// let put = Instrument::new(Payoff::put(100.0), ExerciseStyle::American, 1.0).unwrap();
/// assert_eq!(put.strike(), 100.0);
/// assert!(put.exercise().allows_early_exercise());
///
/// // Expired contracts (T = 0) are valid; negative expiry is not
/// assert!(Instrument::new(Payoff::call(100.0), ExerciseStyle::European, 0.0).is_ok());
/// assert!(Instrument::new(Payoff::call(100.0), ExerciseStyle::European, -1.0).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Instrument {
    payoff: Payoff,
    exercise: ExerciseStyle,
    expiry: f64,
}

impl Instrument {
    /// Creates a new instrument with validation.
    ///
    /// # Arguments
    /// * `payoff` - Payoff strategy (strike/barrier levels must be positive)
    /// * `exercise` - Exercise style
    /// * `expiry` - Time to expiry in years (must be non-negative and finite)
    ///
    /// # Returns
    /// `Ok(Instrument)` if the contract data is valid,
    /// `Err(InstrumentError)` otherwise.
    pub fn new(
        payoff: Payoff,
        exercise: ExerciseStyle,
        expiry: f64,
    ) -> Result<Self, InstrumentError> {
        payoff.validate()?;

        if !expiry.is_finite() || expiry < 0.0 {
            return Err(InstrumentError::InvalidExpiry { expiry });
        }

        Ok(Self {
            payoff,
            exercise,
            expiry,
        })
    }

    /// Creates a European-exercise instrument.
    pub fn european(payoff: Payoff, expiry: f64) -> Result<Self, InstrumentError> {
        Self::new(payoff, ExerciseStyle::European, expiry)
    }

    /// Creates an American-exercise instrument.
    pub fn american(payoff: Payoff, expiry: f64) -> Result<Self, InstrumentError> {
        Self::new(payoff, ExerciseStyle::American, expiry)
    }

    /// Returns the payoff strategy.
    #[inline]
    pub fn payoff(&self) -> &Payoff {
        &self.payoff
    }

    /// Returns the exercise style.
    #[inline]
    pub fn exercise(&self) -> ExerciseStyle {
        self.exercise
    }

    /// Returns the time to expiry in years.
    #[inline]
    pub fn expiry(&self) -> f64 {
        self.expiry
    }

    /// Returns the strike embedded in the payoff strategy.
    #[inline]
    pub fn strike(&self) -> f64 {
        self.payoff.strike()
    }

    /// Returns `true` if the contract has already expired (T = 0).
    #[inline]
    pub fn is_expired(&self) -> bool {
        self.expiry <= 0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::instruments::payoff::{BarrierKind, OptionType};

    #[test]
    fn test_new_european_call() {
        let call = Instrument::european(Payoff::call(100.0), 1.0).unwrap();
        assert!(call.exercise().is_european());
        assert_eq!(call.strike(), 100.0);
        assert_eq!(call.expiry(), 1.0);
        assert!(!call.is_expired());
    }

    #[test]
    fn test_new_american_put() {
        let put = Instrument::american(Payoff::put(95.0), 0.5).unwrap();
        assert!(put.exercise().allows_early_exercise());
        assert_eq!(put.strike(), 95.0);
    }

    #[test]
    fn test_strike_delegates_to_payoff() {
        // A single source of truth: the strike reported by the instrument
        // is the strike the payoff strategy evaluates with
        let payoff = Payoff::barrier(OptionType::Call, 100.0, 120.0, BarrierKind::UpAndOut);
        let instrument = Instrument::european(payoff, 1.0).unwrap();
        assert_eq!(instrument.strike(), instrument.payoff().strike());
    }

    #[test]
    fn test_zero_expiry_is_valid() {
        let expired = Instrument::european(Payoff::call(100.0), 0.0).unwrap();
        assert!(expired.is_expired());
    }

    #[test]
    fn test_negative_expiry_rejected() {
        match Instrument::european(Payoff::call(100.0), -1.0) {
            Err(InstrumentError::InvalidExpiry { expiry }) => assert_eq!(expiry, -1.0),
            _ => panic!("Expected InvalidExpiry error"),
        }
    }

    #[test]
    fn test_invalid_strike_rejected() {
        let result = Instrument::european(Payoff::call(-100.0), 1.0);
        assert!(matches!(
            result,
            Err(InstrumentError::InvalidStrike { .. })
        ));
    }

    #[test]
    fn test_invalid_barrier_rejected() {
        let payoff = Payoff::barrier(OptionType::Put, 100.0, f64::NAN, BarrierKind::DownAndIn);
        let result = Instrument::european(payoff, 1.0);
        assert!(matches!(
            result,
            Err(InstrumentError::InvalidBarrier { .. })
        ));
    }

    #[test]
    fn test_copy_and_equality() {
        let i1 = Instrument::european(Payoff::call(100.0), 1.0).unwrap();
        let i2 = i1;
        assert_eq!(i1, i2);
    }
}
