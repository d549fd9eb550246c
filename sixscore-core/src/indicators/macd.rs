//! Moving Average Convergence/Divergence (MACD).
//!
//! - Line: EMA(close, fast) - EMA(close, slow)
//! - Signal: EMA(line, signal)
//! - Histogram: line - signal
//!
//! Lookback: slow - 1 for the line, slow + signal - 2 for signal and histogram.

use crate::components::indicator::Indicator;
use crate::indicators::ema::ema_of_series;

/// Which MACD output to compute.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MacdLine {
    Line,
    Signal,
    Histogram,
}

#[derive(Debug, Clone)]
pub struct Macd {
    fast: usize,
    slow: usize,
    signal: usize,
    line: MacdLine,
    name: String,
}

impl Macd {
    fn with_line(fast: usize, slow: usize, signal: usize, line: MacdLine, label: &str) -> Self {
        assert!(fast >= 1, "MACD fast period must be >= 1");
        assert!(slow > fast, "MACD slow period must exceed fast period");
        assert!(signal >= 1, "MACD signal period must be >= 1");
        Self {
            fast,
            slow,
            signal,
            line,
            name: format!("macd_{label}_{fast}_{slow}_{signal}"),
        }
    }

    pub fn line(fast: usize, slow: usize, signal: usize) -> Self {
        Self::with_line(fast, slow, signal, MacdLine::Line, "line")
    }

    pub fn signal(fast: usize, slow: usize, signal: usize) -> Self {
        Self::with_line(fast, slow, signal, MacdLine::Signal, "signal")
    }

    pub fn histogram(fast: usize, slow: usize, signal: usize) -> Self {
        Self::with_line(fast, slow, signal, MacdLine::Histogram, "histogram")
    }
}

fn macd_line(closes: &[f64], fast: usize, slow: usize) -> Vec<f64> {
    let fast_ema = ema_of_series(closes, fast);
    let slow_ema = ema_of_series(closes, slow);
    fast_ema
        .iter()
        .zip(&slow_ema)
        .map(|(f, s)| f - s)
        .collect()
}

impl Indicator for Macd {
    fn name(&self) -> &str {
        &self.name
    }

    fn lookback(&self) -> usize {
        match self.line {
            MacdLine::Line => self.slow - 1,
            MacdLine::Signal | MacdLine::Histogram => self.slow + self.signal - 2,
        }
    }

    fn compute(&self, closes: &[f64]) -> Vec<f64> {
        let line = macd_line(closes, self.fast, self.slow);
        if self.line == MacdLine::Line {
            return line;
        }

        let signal = ema_of_series(&line, self.signal);
        match self.line {
            MacdLine::Signal => signal,
            _ => line.iter().zip(&signal).map(|(l, s)| l - s).collect(),
        }
    }
}
