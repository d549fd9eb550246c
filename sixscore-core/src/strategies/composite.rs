//! Composite confluence: MA alignment, a double golden cross (MACD and KDJ
//! in the same period) and a volume-backed range breakout.

use crate::domain::StrategyResult;
use crate::engine::AnalysisInput;

use super::{crossed_above, points, strategy_result};

pub const BULLISH_ALIGNMENT_POINTS: i32 = 20;
pub const DOUBLE_GOLDEN_CROSS_POINTS: i32 = 40;
pub const VOLUME_BREAKOUT_POINTS: i32 = 40;

const HIGH_CONVICTION: i32 = 80;
const PARTIAL: i32 = 40;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CompositeSignals {
    pub bullish_alignment: bool,
    pub double_golden_cross: bool,
    pub volume_breakout: bool,
}

impl CompositeSignals {
    pub fn detect(input: &AnalysisInput<'_>) -> Self {
        let t = input.thresholds();
        let signal = input.macd_signal();
        let hist = input.macd_histogram();
        let k = input.kdj_k();
        let d = input.kdj_d();

        let macd_turn = signal.back(1) > signal.back(2)
            && hist.back(2) <= 0.0
            && hist.back(1) > 0.0;
        let kdj_cross = crossed_above(k.back(2), k.back(1), d.back(2), d.back(1));

        let new_high = input.prices().back(1) > input.box_high();
        let heavy = input.volumes().back(1) > input.average_volume() * t.volume_spike_ratio;

        Self {
            bullish_alignment: input.ma20().back(1) > input.ma60().back(1),
            double_golden_cross: macd_turn && kdj_cross,
            volume_breakout: new_high && heavy,
        }
    }

    pub fn score(&self) -> i32 {
        points(self.bullish_alignment, BULLISH_ALIGNMENT_POINTS)
            + points(self.double_golden_cross, DOUBLE_GOLDEN_CROSS_POINTS)
            + points(self.volume_breakout, VOLUME_BREAKOUT_POINTS)
    }

    fn named(&self) -> [(&'static str, bool); 3] {
        [
            ("bullishAlignment", self.bullish_alignment),
            ("doubleGoldenCross", self.double_golden_cross),
            ("volumeBreakout", self.volume_breakout),
        ]
    }
}

pub fn interpret(score: i32) -> &'static str {
    if score >= HIGH_CONVICTION {
        "High-conviction setup: trend, momentum and volume agree"
    } else if score >= PARTIAL {
        "Partial confluence"
    } else if score > 0 {
        "Moving averages aligned, no trigger yet"
    } else {
        "No confluence"
    }
}

pub fn evaluate(input: &AnalysisInput<'_>) -> StrategyResult {
    let signals = CompositeSignals::detect(input);
    let score = signals.score();
    strategy_result(score, signals.named(), interpret(score))
}
