//! Indicator providers.
//!
//! The analyzer consumes an [`IndicatorSet`]; how it is produced is the
//! provider's business. `StandardIndicators` computes the reference set from
//! closes, `FixedIndicators` hands back a precomputed set (tests, replays).

use crate::components::indicator::Indicator;
use crate::domain::{IndicatorSet, KdjSeries, MacdSeries, MarketSeries};
use crate::indicators::{Bollinger, Kdj, Macd, Rsi, Sma};

/// Source of derived series for one analysis.
///
/// Implementations must be pure: the same series yields the same set.
pub trait IndicatorProvider: Send + Sync {
    fn compute(&self, series: &MarketSeries) -> IndicatorSet;

    /// Leading NaN warmup periods of the slowest computed sequence.
    ///
    /// The analyzer adds this to the longest tail it reads to get the
    /// history a series needs. Providers that never emit warmup keep 0.
    fn warmup(&self) -> usize {
        0
    }
}

/// Reference provider: SMA(20), SMA(60), MACD(12,26,9), KDJ(9,3,3), RSI(14),
/// Bollinger(20, 2.0).
///
/// Every output has the length of the input; warmup values are NaN. The
/// Bollinger middle band is the `ma20` series itself, not a second SMA pass.
#[derive(Debug, Clone)]
pub struct StandardIndicators {
    ma_short: Sma,
    ma_long: Sma,
    macd_line: Macd,
    macd_signal: Macd,
    macd_histogram: Macd,
    kdj_k: Kdj,
    kdj_d: Kdj,
    rsi: Rsi,
    boll: Bollinger,
}

impl StandardIndicators {
    pub fn new() -> Self {
        Self {
            ma_short: Sma::new(20),
            ma_long: Sma::new(60),
            macd_line: Macd::line(12, 26, 9),
            macd_signal: Macd::signal(12, 26, 9),
            macd_histogram: Macd::histogram(12, 26, 9),
            kdj_k: Kdj::k(9, 3, 3),
            kdj_d: Kdj::d(9, 3, 3),
            rsi: Rsi::new(14),
            boll: Bollinger::middle(20, 2.0),
        }
    }

    fn indicators(&self) -> [&dyn Indicator; 9] {
        [
            &self.ma_short,
            &self.ma_long,
            &self.macd_line,
            &self.macd_signal,
            &self.macd_histogram,
            &self.kdj_k,
            &self.kdj_d,
            &self.rsi,
            &self.boll,
        ]
    }
}

impl Default for StandardIndicators {
    fn default() -> Self {
        Self::new()
    }
}

impl IndicatorProvider for StandardIndicators {
    fn compute(&self, series: &MarketSeries) -> IndicatorSet {
        let closes = series.prices.as_slice();
        let ma20 = self.ma_short.compute(closes);
        let boll = if self.boll.period() == self.ma_short.period() {
            self.boll.bands_from_middle(closes, ma20.clone())
        } else {
            self.boll.bands(closes)
        };
        IndicatorSet {
            ma20,
            ma60: self.ma_long.compute(closes),
            macd: MacdSeries {
                line: self.macd_line.compute(closes),
                signal: self.macd_signal.compute(closes),
                histogram: self.macd_histogram.compute(closes),
            },
            kdj: KdjSeries {
                k: self.kdj_k.compute(closes),
                d: self.kdj_d.compute(closes),
            },
            rsi: self.rsi.compute(closes),
            boll,
        }
    }

    /// Largest lookback among the contained indicators (SMA60: 59).
    fn warmup(&self) -> usize {
        self.indicators()
            .iter()
            .map(|ind| ind.lookback())
            .max()
            .unwrap_or(0)
    }
}

/// Provider returning the same precomputed set for every series.
#[derive(Debug, Clone, Default)]
pub struct FixedIndicators {
    set: IndicatorSet,
}

impl FixedIndicators {
    pub fn new(set: IndicatorSet) -> Self {
        Self { set }
    }
}

impl IndicatorProvider for FixedIndicators {
    fn compute(&self, _series: &MarketSeries) -> IndicatorSet {
        self.set.clone()
    }
}
