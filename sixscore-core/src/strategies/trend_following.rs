//! Trend-following: MACD momentum plus rising moving averages.

use crate::domain::StrategyResult;
use crate::engine::AnalysisInput;

use super::{points, strategy_result};

pub const MACD_POSITIVE_POINTS: i32 = 20;
pub const MACD_TURNING_POSITIVE_POINTS: i32 = 30;
pub const MA60_TREND_POINTS: i32 = 25;
pub const MA20_TREND_POINTS: i32 = 25;

const STRONG: i32 = 75;
const TRENDING: i32 = 50;
const WEAK: i32 = 25;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TrendSignals {
    pub macd_positive: bool,
    pub macd_turning_positive: bool,
    pub ma60_trend: bool,
    pub ma20_trend: bool,
}

impl TrendSignals {
    pub fn detect(input: &AnalysisInput<'_>) -> Self {
        let t = input.thresholds();
        let hist = input.macd_histogram();
        let ma20 = input.ma20();
        let ma60 = input.ma60();

        Self {
            macd_positive: hist.back(1) > 0.0,
            macd_turning_positive: hist.back(2) <= 0.0 && hist.back(1) > 0.0,
            ma60_trend: ma60.back(1) > ma60.back(t.ma60_trend_lookback + 1),
            ma20_trend: ma20.back(1) > ma20.back(t.ma20_trend_lookback + 1),
        }
    }

    pub fn score(&self) -> i32 {
        points(self.macd_positive, MACD_POSITIVE_POINTS)
            + points(self.macd_turning_positive, MACD_TURNING_POSITIVE_POINTS)
            + points(self.ma60_trend, MA60_TREND_POINTS)
            + points(self.ma20_trend, MA20_TREND_POINTS)
    }

    fn named(&self) -> [(&'static str, bool); 4] {
        [
            ("macdPositive", self.macd_positive),
            ("macdTurningPositive", self.macd_turning_positive),
            ("ma60Trend", self.ma60_trend),
            ("ma20Trend", self.ma20_trend),
        ]
    }
}

pub fn interpret(score: i32) -> &'static str {
    if score >= STRONG {
        "Strong uptrend"
    } else if score >= TRENDING {
        "Uptrend in place"
    } else if score >= WEAK {
        "Weak trend"
    } else {
        "No trend"
    }
}

pub fn evaluate(input: &AnalysisInput<'_>) -> StrategyResult {
    let signals = TrendSignals::detect(input);
    let score = signals.score();
    strategy_result(score, signals.named(), interpret(score))
}
