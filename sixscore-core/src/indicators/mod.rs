//! Concrete indicator implementations.
//!
//! All indicators implement the `Indicator` trait from `components::indicator`.
//! `StandardIndicators` runs them once per analysis to build an `IndicatorSet`.
//!
//! Multi-line indicators (Bollinger, MACD, KDJ) are exposed as separate
//! named instances per line, keeping the single-series `Indicator` trait
//! unchanged. Bollinger can also produce all three bands at once, reusing
//! an SMA the caller already computed.

pub mod bollinger;
pub mod ema;
pub mod kdj;
pub mod macd;
pub mod rsi;
pub mod sma;

pub use bollinger::{Bollinger, BollingerBand};
pub use ema::{ema_of_series, Ema};
pub use kdj::{Kdj, KdjLine};
pub use macd::{Macd, MacdLine};
pub use rsi::Rsi;
pub use sma::{rolling_mean, Sma};

/// Assert two f64 values are approximately equal (within epsilon).
#[cfg(test)]
pub fn assert_approx(actual: f64, expected: f64, epsilon: f64) {
    assert!(
        (actual - expected).abs() < epsilon,
        "assert_approx failed: actual={actual}, expected={expected}, diff={}, epsilon={epsilon}",
        (actual - expected).abs()
    );
}

/// Default epsilon for indicator tests.
#[cfg(test)]
pub const DEFAULT_EPSILON: f64 = 1e-10;
