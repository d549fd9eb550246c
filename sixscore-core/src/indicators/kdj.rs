//! KDJ stochastic oscillator on closing prices.
//!
//! RSV[t] = (close[t] - LLV) / (HHV - LLV) * 100 over the last `period` closes,
//! or 50 when the window is flat.
//! K[t] = (1 - 1/k_smooth) * K[t-1] + RSV[t] / k_smooth, seeded with K = 50.
//! D[t] = (1 - 1/d_smooth) * D[t-1] + K[t] / d_smooth, seeded with D = 50.
//!
//! Lookback: period - 1. A NaN in the window taints every later value.

use crate::components::indicator::Indicator;

/// Which KDJ line to compute.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KdjLine {
    K,
    D,
}

#[derive(Debug, Clone)]
pub struct Kdj {
    period: usize,
    k_smooth: usize,
    d_smooth: usize,
    line: KdjLine,
    name: String,
}

const KDJ_SEED: f64 = 50.0;

impl Kdj {
    fn with_line(period: usize, k_smooth: usize, d_smooth: usize, line: KdjLine) -> Self {
        assert!(period >= 1, "KDJ period must be >= 1");
        assert!(k_smooth >= 1 && d_smooth >= 1, "KDJ smoothing must be >= 1");
        let label = match line {
            KdjLine::K => "k",
            KdjLine::D => "d",
        };
        Self {
            period,
            k_smooth,
            d_smooth,
            line,
            name: format!("kdj_{label}_{period}_{k_smooth}_{d_smooth}"),
        }
    }

    pub fn k(period: usize, k_smooth: usize, d_smooth: usize) -> Self {
        Self::with_line(period, k_smooth, d_smooth, KdjLine::K)
    }

    pub fn d(period: usize, k_smooth: usize, d_smooth: usize) -> Self {
        Self::with_line(period, k_smooth, d_smooth, KdjLine::D)
    }
}

impl Indicator for Kdj {
    fn name(&self) -> &str {
        &self.name
    }

    fn lookback(&self) -> usize {
        self.period.saturating_sub(1)
    }

    fn compute(&self, closes: &[f64]) -> Vec<f64> {
        let n = closes.len();
        let mut result = vec![f64::NAN; n];
        if n < self.period {
            return result;
        }

        let k_weight = 1.0 / self.k_smooth as f64;
        let d_weight = 1.0 / self.d_smooth as f64;
        let mut k = KDJ_SEED;
        let mut d = KDJ_SEED;

        for i in (self.period - 1)..n {
            let window = &closes[i + 1 - self.period..=i];
            if window.iter().any(|c| c.is_nan()) {
                return result;
            }

            let hhv = window.iter().copied().fold(f64::NEG_INFINITY, f64::max);
            let llv = window.iter().copied().fold(f64::INFINITY, f64::min);
            let range = hhv - llv;
            let rsv = if range == 0.0 {
                KDJ_SEED
            } else {
                (closes[i] - llv) / range * 100.0
            };

            k = (1.0 - k_weight) * k + k_weight * rsv;
            d = (1.0 - d_weight) * d + d_weight * k;

            result[i] = match self.line {
                KdjLine::K => k,
                KdjLine::D => d,
            };
        }

        result
    }
}
