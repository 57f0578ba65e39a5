//! # Pricer Instruments
//!
//! Data model consumed by the pricing engines.
//!
//! This crate provides:
//! - [`MarketState`]: validated, immutable market snapshot
//! - Payoff strategies (vanilla, barrier, Asian) with enum dispatch
//! - Exercise strategies (European, American)
//! - [`Instrument`]: immutable payoff + exercise + expiry composition
//! - [`Prices`]: shape-tagged view over terminal slices and path matrices
//!
//! ## Design Principles
//!
//! - **Enum-based strategies** for static dispatch on hot engine loops
//! - **Validated constructors**: invalid market or contract data is rejected
//!   at construction, never inside an engine
//! - **Borrowed price views**: payoff evaluation never allocates or copies
//!   the underlying price data

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod instruments;
pub mod market;

pub use instruments::{
    BarrierKind, ExerciseStyle, Instrument, InstrumentError, OptionType, PathGrid, Payoff, Prices,
};
pub use market::{MarketError, MarketState};
