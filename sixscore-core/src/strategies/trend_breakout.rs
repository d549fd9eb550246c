//! Trend-breakout: price crossing above MA20, MA60 or the prior range high.
//!
//! | signal      | points |
//! |-------------|--------|
//! | `breakMA20` | 30     |
//! | `breakMA60` | 40     |
//! | `breakBox`  | 30     |
//!
//! Score range 0..=100.

use crate::domain::StrategyResult;
use crate::engine::AnalysisInput;

use super::{crossed_above, points, strategy_result};

pub const BREAK_MA20_POINTS: i32 = 30;
pub const BREAK_MA60_POINTS: i32 = 40;
pub const BREAK_BOX_POINTS: i32 = 30;

const STRONG: i32 = 70;
const FORMING: i32 = 40;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BreakoutSignals {
    pub break_ma20: bool,
    pub break_ma60: bool,
    pub break_box: bool,
}

impl BreakoutSignals {
    pub fn detect(input: &AnalysisInput<'_>) -> Self {
        let prices = input.prices();
        let ma20 = input.ma20();
        let ma60 = input.ma60();
        let (prev, now) = (prices.back(2), prices.back(1));
        let box_high = input.box_high();

        Self {
            break_ma20: crossed_above(prev, now, ma20.back(2), ma20.back(1)),
            break_ma60: crossed_above(prev, now, ma60.back(2), ma60.back(1)),
            break_box: now > box_high && prev <= box_high,
        }
    }

    pub fn score(&self) -> i32 {
        points(self.break_ma20, BREAK_MA20_POINTS)
            + points(self.break_ma60, BREAK_MA60_POINTS)
            + points(self.break_box, BREAK_BOX_POINTS)
    }

    fn named(&self) -> [(&'static str, bool); 3] {
        [
            ("breakMA20", self.break_ma20),
            ("breakMA60", self.break_ma60),
            ("breakBox", self.break_box),
        ]
    }
}

pub fn interpret(score: i32) -> &'static str {
    if score >= STRONG {
        "Strong breakout: price cleared its moving averages or prior range"
    } else if score >= FORMING {
        "Breakout forming"
    } else if score > 0 {
        "Early breakout hint"
    } else {
        "No breakout"
    }
}

pub fn evaluate(input: &AnalysisInput<'_>) -> StrategyResult {
    let signals = BreakoutSignals::detect(input);
    let score = signals.score();
    strategy_result(score, signals.named(), interpret(score))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::strategies::fixture::{set_tail, Fixture};

    #[test]
    fn break_above_ma20_and_box() {
        let mut fx = Fixture::new();
        set_tail(&mut fx.series.prices, &[9.0, 11.0]);
        set_tail(&mut fx.indicators.ma20, &[9.0, 9.0]);
        set_tail(&mut fx.indicators.ma60, &[12.0, 12.0]);

        let result = evaluate(&fx.input());
        assert!(result.signal("breakMA20"));
        assert!(result.signal("breakBox"));
        assert!(!result.signal("breakMA60"));
        assert_eq!(result.score, 60);
        assert_eq!(result.interpretation, "Breakout forming");
    }

    #[test]
    fn close_below_prior_high_is_not_a_break() {
        let mut fx = Fixture::new();
        fx.series.prices[40] = 15.0;
        set_tail(&mut fx.series.prices, &[10.0, 12.0]);
        let signals = BreakoutSignals::detect(&fx.input());
        assert!(!signals.break_box);
    }

    #[test]
    fn all_three_breaks() {
        let mut fx = Fixture::new();
        set_tail(&mut fx.series.prices, &[9.5, 11.0]);
        let result = evaluate(&fx.input());
        assert_eq!(result.score, 100);
        assert!(result.interpretation.starts_with("Strong breakout"));
    }

    #[test]
    fn each_signal_contributes_its_points() {
        let table = [
            (BreakoutSignals { break_ma20: true, ..Default::default() }, BREAK_MA20_POINTS),
            (BreakoutSignals { break_ma60: true, ..Default::default() }, BREAK_MA60_POINTS),
            (BreakoutSignals { break_box: true, ..Default::default() }, BREAK_BOX_POINTS),
        ];
        for (signals, pts) in table {
            assert_eq!(signals.score(), pts);
        }
    }

    #[test]
    fn interpretation_cutoffs() {
        assert_eq!(interpret(0), "No breakout");
        assert_eq!(interpret(30), "Early breakout hint");
        assert_eq!(interpret(40), "Breakout forming");
        assert!(interpret(70).starts_with("Strong breakout"));
    }
}
