//! Exercise strategies.
//!
//! This module provides the closed set of exercise styles resolved during
//! lattice backward induction: European (no early exercise) and American
//! (exercise whenever intrinsic exceeds continuation).

use super::error::InstrumentError;

/// Exercise style of an option.
///
/// Resolution is elementwise over equal-length node arrays and writes the
/// result into the continuation buffer, so the lattice backward pass runs
/// without per-level allocation.
///
/// # Examples
/// ```
/// use pricer_instruments::instruments::ExerciseStyle;
///
/// let intrinsic = [5.0, 0.0];
/// let mut continuation = [3.0, 2.0];
/// ExerciseStyle::American
///     .resolve(&intrinsic, &mut continuation)
///     .unwrap();
/// assert_eq!(continuation, [5.0, 2.0]);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExerciseStyle {
    /// Exercise only at expiry.
    European,
    /// Exercise at any lattice date.
    American,
}

impl ExerciseStyle {
    /// Returns `true` for European exercise.
    #[inline]
    pub fn is_european(&self) -> bool {
        matches!(self, ExerciseStyle::European)
    }

    /// Returns `true` if the style permits exercise before expiry.
    #[inline]
    pub fn allows_early_exercise(&self) -> bool {
        matches!(self, ExerciseStyle::American)
    }

    /// Short style name used in diagnostics.
    pub fn name(&self) -> &'static str {
        match self {
            ExerciseStyle::European => "european",
            ExerciseStyle::American => "american",
        }
    }

    /// Resolves node values from intrinsic and continuation values.
    ///
    /// European leaves the continuation values unchanged; American replaces
    /// each with `max(intrinsic, continuation)`. The result is written into
    /// `continuation`.
    ///
    /// # Arguments
    /// * `intrinsic` - Immediate-exercise value per node
    /// * `continuation` - Discounted holding value per node, overwritten
    ///   with the resolved node value
    ///
    /// # Returns
    /// `Err(InstrumentError::LengthMismatch)` if the slices disagree in
    /// length.
    pub fn resolve(
        &self,
        intrinsic: &[f64],
        continuation: &mut [f64],
    ) -> Result<(), InstrumentError> {
        if intrinsic.len() != continuation.len() {
            return Err(InstrumentError::LengthMismatch {
                expected: continuation.len(),
                actual: intrinsic.len(),
            });
        }

        match self {
            ExerciseStyle::European => Ok(()),
            ExerciseStyle::American => {
                for (value, &exercise) in continuation.iter_mut().zip(intrinsic) {
                    *value = value.max(exercise);
                }
                Ok(())
            }
        }
    }
}
