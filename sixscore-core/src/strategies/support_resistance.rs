//! Support/resistance against the Bollinger bands.
//!
//! Four independent additive terms; the score is not clamped and spans
//! -60..=60.

use crate::domain::StrategyResult;
use crate::engine::AnalysisInput;

use super::{points, strategy_result};

pub const BOUNCE_POINTS: i32 = 40;
pub const REJECTION_POINTS: i32 = -40;
pub const NEAR_LOWER_POINTS: i32 = 20;
pub const NEAR_UPPER_POINTS: i32 = -20;

const SUPPORT_CONFIRMED: i32 = 40;
const RESISTANCE_CONFIRMED: i32 = -40;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BandSignals {
    pub near_lower_band: bool,
    pub near_upper_band: bool,
    pub bouncing_from_support: bool,
    pub rejected_at_resistance: bool,
}

impl BandSignals {
    pub fn detect(input: &AnalysisInput<'_>) -> Self {
        let t = input.thresholds();
        let prices = input.prices();
        let upper = input.boll_upper();
        let lower = input.boll_lower();
        let (prev, now) = (prices.back(2), prices.back(1));

        Self {
            near_lower_band: now < lower.back(1) * t.lower_band_factor,
            near_upper_band: now > upper.back(1) * t.upper_band_factor,
            bouncing_from_support: prev < lower.back(2) && now > prev,
            rejected_at_resistance: prev > upper.back(2) && now < prev,
        }
    }

    pub fn score(&self) -> i32 {
        points(self.bouncing_from_support, BOUNCE_POINTS)
            + points(self.rejected_at_resistance, REJECTION_POINTS)
            + points(self.near_lower_band, NEAR_LOWER_POINTS)
            + points(self.near_upper_band, NEAR_UPPER_POINTS)
    }

    fn named(&self) -> [(&'static str, bool); 4] {
        [
            ("nearLowerBand", self.near_lower_band),
            ("nearUpperBand", self.near_upper_band),
            ("bouncingFromSupport", self.bouncing_from_support),
            ("rejectedAtResistance", self.rejected_at_resistance),
        ]
    }
}

pub fn interpret(score: i32) -> &'static str {
    if score >= SUPPORT_CONFIRMED {
        "Support confirmed: price rebounding off the lower band"
    } else if score > 0 {
        "Trading near support"
    } else if score <= RESISTANCE_CONFIRMED {
        "Resistance confirmed: price turned back at the upper band"
    } else if score < 0 {
        "Trading near resistance"
    } else {
        "Mid-channel, no band interaction"
    }
}

pub fn evaluate(input: &AnalysisInput<'_>) -> StrategyResult {
    let signals = BandSignals::detect(input);
    let score = signals.score();
    strategy_result(score, signals.named(), interpret(score))
}
