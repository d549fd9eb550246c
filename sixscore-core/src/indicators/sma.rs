//! Simple moving average and the rolling mean it is built on.
//!
//! `rolling_mean` is shared with the Bollinger bands, which take the mean of
//! squared deviations through the same window.

use crate::components::indicator::Indicator;

/// Mean of each trailing `period`-value window.
///
/// Index `i` is NaN until `period` values are available and whenever the
/// window ending at `i` holds a non-finite value. Runs in one pass: a
/// running sum plus a count of non-finite values currently in the window.
pub fn rolling_mean(values: &[f64], period: usize) -> Vec<f64> {
    let mut out = vec![f64::NAN; values.len()];
    if period == 0 {
        return out;
    }

    let mut sum = 0.0;
    let mut gaps = 0usize;
    for (i, &v) in values.iter().enumerate() {
        if v.is_finite() {
            sum += v;
        } else {
            gaps += 1;
        }
        if i >= period {
            let leaving = values[i - period];
            if leaving.is_finite() {
                sum -= leaving;
            } else {
                gaps -= 1;
            }
        }
        if i + 1 >= period && gaps == 0 {
            out[i] = sum / period as f64;
        }
    }
    out
}

/// Simple moving average of closes. `ma20` and `ma60` in the standard set.
#[derive(Debug, Clone)]
pub struct Sma {
    period: usize,
    name: String,
}

impl Sma {
    pub fn new(period: usize) -> Self {
        assert!(period >= 1, "SMA period must be >= 1");
        Self {
            period,
            name: format!("ma{period}"),
        }
    }

    pub fn period(&self) -> usize {
        self.period
    }
}

impl Indicator for Sma {
    fn name(&self) -> &str {
        &self.name
    }

    fn lookback(&self) -> usize {
        self.period - 1
    }

    fn compute(&self, closes: &[f64]) -> Vec<f64> {
        rolling_mean(closes, self.period)
    }
}
