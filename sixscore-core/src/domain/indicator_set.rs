//! IndicatorSet: the bundle of derived series an Indicator Provider returns.
//!
//! Every sequence is right-aligned to the price series: its last element
//! describes the same period as the last price. A sequence may be shorter than
//! the price series (warm-up trimmed) or the same length with leading `NaN`
//! warm-up values. It may never be longer.

use serde::{Deserialize, Serialize};

/// MACD line, signal line and histogram.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MacdSeries {
    pub line: Vec<f64>,
    pub signal: Vec<f64>,
    pub histogram: Vec<f64>,
}

/// Stochastic %K and %D lines.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct KdjSeries {
    pub k: Vec<f64>,
    pub d: Vec<f64>,
}

/// Bollinger upper, middle and lower bands.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BollingerSeries {
    pub upper: Vec<f64>,
    pub middle: Vec<f64>,
    pub lower: Vec<f64>,
}

/// Precomputed indicator snapshot consumed by the strategy evaluators.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct IndicatorSet {
    pub ma20: Vec<f64>,
    pub ma60: Vec<f64>,
    pub macd: MacdSeries,
    pub kdj: KdjSeries,
    pub rsi: Vec<f64>,
    pub boll: BollingerSeries,
}

impl IndicatorSet {
    /// Every member sequence paired with its stable name, in a fixed order.
    pub fn named_series(&self) -> [(&'static str, &[f64]); 11] {
        [
            ("ma20", self.ma20.as_slice()),
            ("ma60", self.ma60.as_slice()),
            ("macd.line", self.macd.line.as_slice()),
            ("macd.signal", self.macd.signal.as_slice()),
            ("macd.histogram", self.macd.histogram.as_slice()),
            ("kdj.k", self.kdj.k.as_slice()),
            ("kdj.d", self.kdj.d.as_slice()),
            ("rsi", self.rsi.as_slice()),
            ("boll.upper", self.boll.upper.as_slice()),
            ("boll.middle", self.boll.middle.as_slice()),
            ("boll.lower", self.boll.lower.as_slice()),
        ]
    }
}
