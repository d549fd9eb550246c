//! Validated analysis input.
//!
//! `AnalysisInput` can only be built through [`AnalysisInput::new`], which
//! checks lengths, alignment and finiteness once. Evaluators then index the
//! trailing values without bounds or NaN checks of their own.

use crate::config::{ScoringConfig, SignalThresholds};
use crate::domain::{IndicatorSet, MarketSeries};
use crate::engine::error::AnalysisError;

/// Trailing values each series must provide, derived from the thresholds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RequiredHistory {
    /// Periods of price and volume history.
    pub periods: usize,
    pub ma20: usize,
    pub ma60: usize,
}

impl RequiredHistory {
    pub fn from_config(config: &ScoringConfig) -> Self {
        let t = &config.thresholds;
        let periods = config
            .min_history
            .max(t.breakout_lookback + 1)
            .max(t.stabilization_window + 2)
            .max(t.volume_window)
            .max(2);
        Self {
            periods,
            ma20: (t.ma20_trend_lookback + 1).max(2),
            ma60: (t.ma60_trend_lookback + 1).max(2),
        }
    }

    /// Raise `periods` so a provider with `warmup` leading NaNs still yields
    /// every indicator tail. A warmup of 0 leaves the requirement unchanged.
    pub fn with_warmup(mut self, warmup: usize) -> Self {
        if warmup > 0 {
            self.periods = self.periods.max(warmup + self.longest_tail());
        }
        self
    }

    /// Longest tail any indicator sequence must provide.
    pub fn longest_tail(&self) -> usize {
        self.ma20.max(self.ma60).max(3)
    }

    /// Tail length required of a named indicator sequence.
    pub fn indicator_tail(&self, name: &str) -> usize {
        match name {
            "ma20" => self.ma20,
            "ma60" => self.ma60,
            "rsi" => 3,
            "macd.line" | "boll.middle" => 1,
            _ => 2,
        }
    }
}

/// Read-only view over the most recent values of a series.
///
/// `back(1)` is the latest value, `back(2)` the one before.
#[derive(Debug, Clone, Copy)]
pub struct Recent<'a>(&'a [f64]);

impl<'a> Recent<'a> {
    pub fn back(&self, k: usize) -> f64 {
        self.0[self.0.len() - k]
    }

    /// The last `n` values, oldest first.
    pub fn tail(&self, n: usize) -> &'a [f64] {
        &self.0[self.0.len() - n..]
    }
}

/// Everything one evaluator may read, already validated.
#[derive(Debug, Clone, Copy)]
pub struct AnalysisInput<'a> {
    series: &'a MarketSeries,
    indicators: &'a IndicatorSet,
    thresholds: &'a SignalThresholds,
}

impl<'a> AnalysisInput<'a> {
    /// Validate `series` and `indicators` against `config`.
    pub fn new(
        series: &'a MarketSeries,
        indicators: &'a IndicatorSet,
        config: &'a ScoringConfig,
    ) -> Result<Self, AnalysisError> {
        Self::with_required(
            series,
            indicators,
            config,
            RequiredHistory::from_config(config),
        )
    }

    /// Validate against an explicit requirement, e.g. one raised by
    /// [`RequiredHistory::with_warmup`].
    pub fn with_required(
        series: &'a MarketSeries,
        indicators: &'a IndicatorSet,
        config: &'a ScoringConfig,
        required: RequiredHistory,
    ) -> Result<Self, AnalysisError> {
        let n = series.prices.len();

        if series.volumes.len() != n {
            return Err(AnalysisError::MisalignedSeries {
                series: "volumes",
                expected: n,
                actual: series.volumes.len(),
            });
        }
        if n < required.periods {
            return Err(AnalysisError::InsufficientHistory {
                series: "prices",
                required: required.periods,
                actual: n,
            });
        }
        check_finite("prices", &series.prices)?;
        check_finite("volumes", &series.volumes)?;

        for (name, values) in indicators.named_series() {
            if values.len() > n {
                return Err(AnalysisError::MisalignedSeries {
                    series: name,
                    expected: n,
                    actual: values.len(),
                });
            }
            let tail = required.indicator_tail(name);
            if values.len() < tail {
                return Err(AnalysisError::InsufficientHistory {
                    series: name,
                    required: tail,
                    actual: values.len(),
                });
            }
            let start = values.len() - tail;
            if let Some(offset) = values[start..].iter().position(|v| !v.is_finite()) {
                return Err(AnalysisError::NonFiniteInput {
                    series: name,
                    index: start + offset,
                    value: values[start + offset],
                });
            }
        }

        Ok(Self {
            series,
            indicators,
            thresholds: &config.thresholds,
        })
    }

    pub fn prices(&self) -> Recent<'a> {
        Recent(&self.series.prices)
    }

    pub fn volumes(&self) -> Recent<'a> {
        Recent(&self.series.volumes)
    }

    pub fn ma20(&self) -> Recent<'a> {
        Recent(&self.indicators.ma20)
    }

    pub fn ma60(&self) -> Recent<'a> {
        Recent(&self.indicators.ma60)
    }

    pub fn macd_signal(&self) -> Recent<'a> {
        Recent(&self.indicators.macd.signal)
    }

    pub fn macd_histogram(&self) -> Recent<'a> {
        Recent(&self.indicators.macd.histogram)
    }

    pub fn kdj_k(&self) -> Recent<'a> {
        Recent(&self.indicators.kdj.k)
    }

    pub fn kdj_d(&self) -> Recent<'a> {
        Recent(&self.indicators.kdj.d)
    }

    pub fn rsi(&self) -> Recent<'a> {
        Recent(&self.indicators.rsi)
    }

    pub fn boll_upper(&self) -> Recent<'a> {
        Recent(&self.indicators.boll.upper)
    }

    pub fn boll_lower(&self) -> Recent<'a> {
        Recent(&self.indicators.boll.lower)
    }

    pub fn thresholds(&self) -> &'a SignalThresholds {
        self.thresholds
    }

    /// Mean of the trailing `volume_window` volumes, latest included.
    pub fn average_volume(&self) -> f64 {
        let window = self.volumes().tail(self.thresholds.volume_window);
        window.iter().sum::<f64>() / window.len() as f64
    }

    /// Highest close over the `breakout_lookback` periods before the latest.
    pub fn box_high(&self) -> f64 {
        let lookback = self.thresholds.breakout_lookback;
        let prior = self.prices().tail(lookback + 1);
        prior[..lookback]
            .iter()
            .copied()
            .fold(f64::NEG_INFINITY, f64::max)
    }
}

fn check_finite(series: &'static str, values: &[f64]) -> Result<(), AnalysisError> {
    match values.iter().position(|v| !v.is_finite()) {
        Some(index) => Err(AnalysisError::NonFiniteInput {
            series,
            index,
            value: values[index],
        }),
        None => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{BollingerSeries, KdjSeries, MacdSeries};

    fn flat_indicators(len: usize) -> IndicatorSet {
        let v = vec![1.0; len];
        IndicatorSet {
            ma20: v.clone(),
            ma60: v.clone(),
            macd: MacdSeries {
                line: v.clone(),
                signal: v.clone(),
                histogram: v.clone(),
            },
            kdj: KdjSeries {
                k: v.clone(),
                d: v.clone(),
            },
            rsi: v.clone(),
            boll: BollingerSeries {
                upper: v.clone(),
                middle: v.clone(),
                lower: v,
            },
        }
    }

    fn series(n: usize) -> MarketSeries {
        let prices = (0..n).map(|i| 10.0 + i as f64).collect();
        MarketSeries {
            symbol: "TEST".into(),
            prices,
            volumes: vec![100.0; n],
        }
    }

    #[test]
    fn default_required_history() {
        let req = RequiredHistory::from_config(&ScoringConfig::default());
        assert_eq!(req.periods, 60);
        assert_eq!(req.ma20, 6);
        assert_eq!(req.ma60, 11);
        assert_eq!(req.indicator_tail("rsi"), 3);
        assert_eq!(req.indicator_tail("kdj.k"), 2);
    }

    #[test]
    fn warmup_raises_periods_by_longest_tail() {
        let req = RequiredHistory::from_config(&ScoringConfig::default());
        assert_eq!(req.with_warmup(0).periods, 60);
        // SMA(60) warmup plus the 11-value ma60 trend tail
        assert_eq!(req.with_warmup(59).periods, 70);
        assert_eq!(req.with_warmup(10).periods, 60);
    }

    #[test]
    fn long_breakout_window_raises_required_periods() {
        let mut config = ScoringConfig::default();
        config.thresholds.breakout_lookback = 100;
        assert_eq!(RequiredHistory::from_config(&config).periods, 101);
    }

    #[test]
    fn short_indicator_sequences_are_accepted() {
        let config = ScoringConfig::default();
        let s = series(60);
        let ind = flat_indicators(11);
        assert!(AnalysisInput::new(&s, &ind, &config).is_ok());
    }

    #[test]
    fn warmup_nan_outside_tail_is_accepted() {
        let config = ScoringConfig::default();
        let s = series(60);
        let mut ind = flat_indicators(60);
        ind.ma60[..49].fill(f64::NAN);
        assert!(AnalysisInput::new(&s, &ind, &config).is_ok());
    }

    #[test]
    fn nan_inside_tail_is_rejected() {
        let config = ScoringConfig::default();
        let s = series(60);
        let mut ind = flat_indicators(60);
        ind.rsi[57] = f64::NAN;
        let err = AnalysisInput::new(&s, &ind, &config).unwrap_err();
        assert!(matches!(
            err,
            AnalysisError::NonFiniteInput {
                series: "rsi",
                index: 57,
                ..
            }
        ));
    }

    #[test]
    fn recent_indexes_from_the_end() {
        let values = [1.0, 2.0, 3.0, 4.0];
        let r = Recent(&values);
        assert_eq!(r.back(1), 4.0);
        assert_eq!(r.back(4), 1.0);
        assert_eq!(r.tail(2), &[3.0, 4.0]);
    }

    #[test]
    fn box_high_excludes_latest_price() {
        let config = ScoringConfig::default();
        let mut s = series(60);
        s.prices[59] = 1_000.0;
        let ind = flat_indicators(60);
        let input = AnalysisInput::new(&s, &ind, &config).unwrap();
        // Prices are 10 + i; the box covers indices 39..=58
        assert_eq!(input.box_high(), 68.0);
    }

    #[test]
    fn average_volume_includes_latest() {
        let config = ScoringConfig::default();
        let mut s = series(60);
        s.volumes[59] = 600.0;
        let ind = flat_indicators(60);
        let input = AnalysisInput::new(&s, &ind, &config).unwrap();
        assert_eq!(input.average_volume(), 200.0);
    }
}
