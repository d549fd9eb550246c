//! Relative strength index with Wilder smoothing.
//!
//! The first value (index `period`) averages the first `period` changes;
//! later values update each average by `(x - avg) / period`. A window with
//! no movement at all reads 50, so a flat series never looks oversold.

use crate::components::indicator::Indicator;

#[derive(Debug, Clone)]
pub struct Rsi {
    period: usize,
    name: String,
}

impl Rsi {
    pub fn new(period: usize) -> Self {
        assert!(period >= 1, "RSI period must be >= 1");
        Self {
            period,
            name: format!("rsi{period}"),
        }
    }
}

/// Running average gain and loss.
#[derive(Debug, Default, Clone, Copy)]
struct Averages {
    gain: f64,
    loss: f64,
}

impl Averages {
    fn rsi(self) -> f64 {
        match (self.gain > 0.0, self.loss > 0.0) {
            (false, false) => 50.0,
            (true, false) => 100.0,
            (false, true) => 0.0,
            (true, true) => 100.0 - 100.0 / (1.0 + self.gain / self.loss),
        }
    }
}

impl Indicator for Rsi {
    fn name(&self) -> &str {
        &self.name
    }

    fn lookback(&self) -> usize {
        self.period
    }

    fn compute(&self, closes: &[f64]) -> Vec<f64> {
        let period = self.period as f64;
        let mut out = vec![f64::NAN; closes.len()];
        let mut avg = Averages::default();

        for (i, pair) in closes.windows(2).enumerate() {
            let at = i + 1;
            let change = pair[1] - pair[0];
            if !change.is_finite() {
                break;
            }
            let (gain, loss) = (change.max(0.0), (-change).max(0.0));
            if at <= self.period {
                avg.gain += gain / period;
                avg.loss += loss / period;
            } else {
                avg.gain += (gain - avg.gain) / period;
                avg.loss += (loss - avg.loss) / period;
            }
            if at >= self.period {
                out[at] = avg.rsi();
            }
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::indicators::assert_approx;

    #[test]
    fn flat_series_reads_fifty_not_oversold() {
        let out = Rsi::new(14).compute(&[12.0; 30]);
        assert!(out[..14].iter().all(|v| v.is_nan()));
        assert!(out[14..].iter().all(|&v| v == 50.0));
    }

    #[test]
    fn one_sided_moves_pin_the_extremes() {
        let up: Vec<f64> = (0..10).map(|i| 5.0 + i as f64).collect();
        let down: Vec<f64> = up.iter().rev().copied().collect();
        assert_eq!(Rsi::new(4).compute(&up)[9], 100.0);
        assert_eq!(Rsi::new(4).compute(&down)[9], 0.0);
    }

    #[test]
    fn seed_value_uses_simple_averages() {
        // Changes +2, -1, +1: avg gain 1, avg loss 1/3 → 100 - 100/4 = 75
        let out = Rsi::new(3).compute(&[10.0, 12.0, 11.0, 12.0]);
        assert_approx(out[3], 75.0, 1e-9);
    }

    #[test]
    fn wilder_step_after_seed() {
        // Seed gain 1, loss 1/3; next change -2: gain 2/3, loss 8/9
        let out = Rsi::new(3).compute(&[10.0, 12.0, 11.0, 12.0, 10.0]);
        let (gain, loss) = (2.0 / 3.0, 8.0 / 9.0);
        assert_approx(out[4], 100.0 - 100.0 / (1.0 + gain / loss), 1e-9);
    }

    #[test]
    fn three_value_tail_available_at_seventeen_periods() {
        // The stabilization check reads rsi now, one and two periods back
        let closes: Vec<f64> = (0..17).map(|i| 40.0 + ((i * 7) % 5) as f64).collect();
        let out = Rsi::new(14).compute(&closes);
        assert!(out[14..].iter().all(|v| (0.0..=100.0).contains(v)));
        assert_eq!(out[14..].len(), 3);
    }

    #[test]
    fn gap_stops_the_series() {
        let out = Rsi::new(2).compute(&[1.0, 2.0, 3.0, f64::NAN, 5.0, 6.0]);
        assert!(out[2].is_finite());
        assert!(out[3..].iter().all(|v| v.is_nan()));
    }

    #[test]
    fn too_short_for_one_value() {
        assert!(Rsi::new(14).compute(&[1.0; 14]).iter().all(|v| v.is_nan()));
    }
}
