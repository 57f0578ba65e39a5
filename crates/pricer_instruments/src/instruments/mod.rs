//! Option instrument definitions.
//!
//! This module composes the two strategy enums - [`Payoff`] and
//! [`ExerciseStyle`] - into an immutable [`Instrument`], together with the
//! shape-tagged [`Prices`] view that payoff evaluation operates on.
//!
//! # Architecture
//!
//! Uses enum dispatch (NOT trait objects) so the engines' hot loops resolve
//! strategies statically:
//! - [`Payoff`] is a closed set of payoff variants selected at construction
//! - [`ExerciseStyle`] is the closed European/American set
//! - Engines check instrument capabilities once at entry, then match
//!
//! # Examples
//!
//! ```
//! use pricer_instruments::instruments::{ExerciseStyle, Instrument, Payoff, Prices};
//!
//! let call = Instrument::new(Payoff::call(100.0), ExerciseStyle::European, 1.0).unwrap();
//!
//! let terminal = [90.0, 100.0, 110.0];
//! let payoffs = call.payoff().evaluate(&Prices::Terminal(&terminal)).unwrap();
//! assert_eq!(payoffs, vec![0.0, 0.0, 10.0]);
//! ```

mod error;
mod exercise;
mod instrument;
mod payoff;
mod prices;

pub use error::InstrumentError;
pub use exercise::ExerciseStyle;
pub use instrument::Instrument;
pub use payoff::{BarrierKind, OptionType, Payoff};
pub use prices::{PathGrid, Prices};
