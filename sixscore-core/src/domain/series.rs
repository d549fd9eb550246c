//! MarketSeries: the raw price/volume history handed to the engine.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors raised when building a `MarketSeries` by hand.
///
/// The analyzer re-checks alignment anyway; this only catches mistakes at
/// construction time for callers that want an early failure.
#[derive(Debug, Error, PartialEq)]
pub enum SeriesError {
    #[error("prices ({prices}) and volumes ({volumes}) have different lengths")]
    LengthMismatch { prices: usize, volumes: usize },
}

/// Chronological closing prices and volumes for one symbol, oldest first.
///
/// Index `i` of `prices` and index `i` of `volumes` describe the same period.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MarketSeries {
    pub symbol: String,
    pub prices: Vec<f64>,
    pub volumes: Vec<f64>,
}

impl MarketSeries {
    /// Build a series, rejecting mismatched lengths.
    pub fn new(
        symbol: impl Into<String>,
        prices: Vec<f64>,
        volumes: Vec<f64>,
    ) -> Result<Self, SeriesError> {
        if prices.len() != volumes.len() {
            return Err(SeriesError::LengthMismatch {
                prices: prices.len(),
                volumes: volumes.len(),
            });
        }
        Ok(Self {
            symbol: symbol.into(),
            prices,
            volumes,
        })
    }

    /// Number of periods (length of the price series).
    pub fn len(&self) -> usize {
        self.prices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.prices.is_empty()
    }

    /// Most recent closing price, if any.
    pub fn last_price(&self) -> Option<f64> {
        self.prices.last().copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_rejects_length_mismatch() {
        let err = MarketSeries::new("TEST", vec![1.0, 2.0], vec![10.0]).unwrap_err();
        assert_eq!(
            err,
            SeriesError::LengthMismatch {
                prices: 2,
                volumes: 1
            }
        );
    }

    #[test]
    fn accessors() {
        let series = MarketSeries::new("TEST", vec![1.0, 2.0, 3.0], vec![5.0; 3]).unwrap();
        assert_eq!(series.len(), 3);
        assert!(!series.is_empty());
        assert_eq!(series.last_price(), Some(3.0));
    }
}
