//! Exponential moving average.
//!
//! Seeded with the mean of the first `period` values, then
//! `ema += alpha * (x - ema)` with `alpha = 2 / (period + 1)`.
//! The MACD lines are built from it.

use crate::components::indicator::Indicator;

#[derive(Debug, Clone)]
pub struct Ema {
    period: usize,
    name: String,
}

impl Ema {
    pub fn new(period: usize) -> Self {
        assert!(period >= 1, "EMA period must be >= 1");
        Self {
            period,
            name: format!("ema{period}"),
        }
    }
}

impl Indicator for Ema {
    fn name(&self) -> &str {
        &self.name
    }

    fn lookback(&self) -> usize {
        self.period - 1
    }

    fn compute(&self, closes: &[f64]) -> Vec<f64> {
        ema_of_series(closes, self.period)
    }
}

/// EMA of any series, including one with its own NaN warmup prefix.
///
/// The seed window starts at the first non-NaN value, so the EMA of a MACD
/// line begins `period - 1` values after the line does. A NaN after the
/// seed ends the output there.
pub fn ema_of_series(values: &[f64], period: usize) -> Vec<f64> {
    let mut out = vec![f64::NAN; values.len()];
    let start = values
        .iter()
        .position(|v| !v.is_nan())
        .unwrap_or(values.len());
    if period == 0 || values.len() - start < period {
        return out;
    }

    let (seed_window, rest) = values[start..].split_at(period);
    if seed_window.iter().any(|v| v.is_nan()) {
        return out;
    }

    let alpha = 2.0 / (period as f64 + 1.0);
    let seed_at = start + period - 1;
    let mut ema = seed_window.iter().sum::<f64>() / period as f64;
    out[seed_at] = ema;
    for (slot, &v) in out[seed_at + 1..].iter_mut().zip(rest) {
        if v.is_nan() {
            break;
        }
        ema += alpha * (v - ema);
        *slot = ema;
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::indicators::{assert_approx, DEFAULT_EPSILON};

    #[test]
    fn seed_then_half_steps() {
        // alpha = 0.5 for period 3; seed = mean(4, 6, 8) = 6
        let out = Ema::new(3).compute(&[4.0, 6.0, 8.0, 10.0, 6.0]);
        assert!(out[..2].iter().all(|v| v.is_nan()));
        assert_approx(out[2], 6.0, DEFAULT_EPSILON);
        assert_approx(out[3], 8.0, DEFAULT_EPSILON);
        assert_approx(out[4], 7.0, DEFAULT_EPSILON);
    }

    #[test]
    fn twelve_and_twenty_six_agree_on_flat_closes() {
        let closes = vec![17.5; 40];
        let fast = Ema::new(12).compute(&closes);
        let slow = Ema::new(26).compute(&closes);
        assert_eq!(fast[39], 17.5);
        assert_eq!(slow[39], 17.5);
        assert!(slow[24].is_nan());
    }

    #[test]
    fn warmup_prefix_shifts_the_seed() {
        let values = [f64::NAN, f64::NAN, f64::NAN, 2.0, 4.0, 9.0];
        let out = ema_of_series(&values, 2);
        assert!(out[..4].iter().all(|v| v.is_nan()));
        assert_approx(out[4], 3.0, DEFAULT_EPSILON);
        // alpha = 2/3
        assert_approx(out[5], 3.0 + 2.0 / 3.0 * 6.0, DEFAULT_EPSILON);
    }

    #[test]
    fn gap_inside_seed_leaves_no_output() {
        let out = ema_of_series(&[1.0, f64::NAN, 3.0, 4.0, 5.0], 3);
        assert!(out.iter().all(|v| v.is_nan()));
    }

    #[test]
    fn gap_after_seed_ends_the_output() {
        let out = ema_of_series(&[1.0, 2.0, 3.0, f64::NAN, 5.0], 2);
        assert!(out[1].is_finite() && out[2].is_finite());
        assert!(out[3..].iter().all(|v| v.is_nan()));
    }

    #[test]
    fn all_nan_input_is_all_nan() {
        assert!(ema_of_series(&[f64::NAN; 4], 2).iter().all(|v| v.is_nan()));
    }
}
