//! Market snapshot supplied to the pricing engines.
//!
//! This module provides:
//! - `MarketState`: immutable, validated market data for a single underlying
//! - `MarketError`: validation failures raised at construction

use thiserror::Error;

/// Market data errors.
///
/// Raised eagerly when a [`MarketState`] is constructed from values outside
/// their documented domains; engines never see an invalid snapshot.
///
/// # Examples
/// ```
/// use pricer_instruments::market::MarketError;
///
/// let err = MarketError::InvalidSpot { spot: -100.0 };
/// assert!(format!("{}", err).contains("-100"));
/// ```
#[derive(Debug, Clone, Error, PartialEq)]
pub enum MarketError {
    /// Invalid spot price (non-positive or non-finite).
    #[error("Invalid spot price: S = {spot}")]
    InvalidSpot {
        /// The invalid spot value
        spot: f64,
    },

    /// Invalid risk-free rate (non-finite).
    #[error("Invalid risk-free rate: r = {rate}")]
    InvalidRate {
        /// The invalid rate value
        rate: f64,
    },

    /// Invalid volatility (negative or non-finite).
    #[error("Invalid volatility: σ = {volatility}")]
    InvalidVolatility {
        /// The invalid volatility value
        volatility: f64,
    },

    /// Invalid dividend yield (negative or non-finite).
    #[error("Invalid dividend yield: q = {dividend_yield}")]
    InvalidDividendYield {
        /// The invalid dividend yield value
        dividend_yield: f64,
    },
}

/// Immutable market snapshot for a single underlying.
///
/// Constructed once per pricing request and treated as read-only by every
/// engine. Holds the spot price, the continuously-compounded risk-free
/// rate, the annualised volatility, and a continuous dividend (or foreign)
/// yield defaulting to zero.
///
/// # Examples
/// ```
/// use pricer_instruments::market::MarketState;
///
/// let market = MarketState::new(100.0, 0.05, 0.2).unwrap();
/// assert_eq!(market.spot(), 100.0);
/// assert_eq!(market.dividend_yield(), 0.0);
///
/// // Non-positive spot is rejected
/// assert!(MarketState::new(0.0, 0.05, 0.2).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MarketState {
    spot: f64,
    rate: f64,
    volatility: f64,
    dividend_yield: f64,
}

impl MarketState {
    /// Creates a market snapshot with zero dividend yield.
    ///
    /// # Arguments
    /// * `spot` - Current spot price (must be positive and finite)
    /// * `rate` - Continuously-compounded risk-free rate (must be finite)
    /// * `volatility` - Annualised volatility (must be non-negative and finite)
    ///
    /// # Returns
    /// `Ok(MarketState)` if all fields are within their domains,
    /// `Err(MarketError)` otherwise.
    pub fn new(spot: f64, rate: f64, volatility: f64) -> Result<Self, MarketError> {
        Self::with_dividend_yield(spot, rate, volatility, 0.0)
    }

    /// Creates a market snapshot with an explicit continuous dividend yield.
    ///
    /// For FX underlyings the yield plays the role of the foreign rate.
    ///
    /// # Arguments
    /// * `spot` - Current spot price (must be positive and finite)
    /// * `rate` - Continuously-compounded domestic rate (must be finite)
    /// * `volatility` - Annualised volatility (must be non-negative and finite)
    /// * `dividend_yield` - Continuous dividend/foreign yield (must be
    ///   non-negative and finite)
    ///
    /// # Examples
    /// ```
    /// use pricer_instruments::market::MarketState;
    ///
    /// let market = MarketState::with_dividend_yield(100.0, 0.05, 0.2, 0.02).unwrap();
    /// assert_eq!(market.dividend_yield(), 0.02);
    /// ```
    pub fn with_dividend_yield(
        spot: f64,
        rate: f64,
        volatility: f64,
        dividend_yield: f64,
    ) -> Result<Self, MarketError> {
        if !spot.is_finite() || spot <= 0.0 {
            return Err(MarketError::InvalidSpot { spot });
        }

        if !rate.is_finite() {
            return Err(MarketError::InvalidRate { rate });
        }

        if !volatility.is_finite() || volatility < 0.0 {
            return Err(MarketError::InvalidVolatility { volatility });
        }

        if !dividend_yield.is_finite() || dividend_yield < 0.0 {
            return Err(MarketError::InvalidDividendYield { dividend_yield });
        }

        Ok(Self {
            spot,
            rate,
            volatility,
            dividend_yield,
        })
    }

    /// Returns the spot price.
    #[inline]
    pub fn spot(&self) -> f64 {
        self.spot
    }

    /// Returns the continuously-compounded risk-free rate.
    #[inline]
    pub fn rate(&self) -> f64 {
        self.rate
    }

    /// Returns the annualised volatility.
    #[inline]
    pub fn volatility(&self) -> f64 {
        self.volatility
    }

    /// Returns the continuous dividend (or foreign) yield.
    #[inline]
    pub fn dividend_yield(&self) -> f64 {
        self.dividend_yield
    }

    /// Returns the net carry rate `r - q` used for risk-neutral drift.
    #[inline]
    pub fn carry(&self) -> f64 {
        self.rate - self.dividend_yield
    }
}
