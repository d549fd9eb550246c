//! Stabilization: signs that a decline is bottoming out.
//!
//! | signal           | points |
//! |------------------|--------|
//! | `rsiRecovery`    | 30     |
//! | `kdjGoldenCross` | 30     |
//! | `stabilizing`    | 40     |

use crate::domain::StrategyResult;
use crate::engine::AnalysisInput;

use super::{crossed_above, points, strategy_result};

pub const RSI_RECOVERY_POINTS: i32 = 30;
pub const KDJ_GOLDEN_CROSS_POINTS: i32 = 30;
pub const STABILIZING_POINTS: i32 = 40;

const CONFIRMED: i32 = 70;
const EMERGING: i32 = 30;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StabilizationSignals {
    pub rsi_recovery: bool,
    pub kdj_golden_cross: bool,
    pub stabilizing: bool,
}

impl StabilizationSignals {
    pub fn detect(input: &AnalysisInput<'_>) -> Self {
        let t = input.thresholds();
        let rsi = input.rsi();
        let k = input.kdj_k();
        let d = input.kdj_d();

        Self {
            rsi_recovery: rsi.back(3) < t.rsi_oversold && rsi.back(1) > rsi.back(2),
            kdj_golden_cross: crossed_above(k.back(2), k.back(1), d.back(2), d.back(1)),
            stabilizing: is_stabilizing(
                input.prices().tail(t.stabilization_window + 2),
                t.stabilization_min_declines,
            ),
        }
    }

    pub fn score(&self) -> i32 {
        points(self.rsi_recovery, RSI_RECOVERY_POINTS)
            + points(self.kdj_golden_cross, KDJ_GOLDEN_CROSS_POINTS)
            + points(self.stabilizing, STABILIZING_POINTS)
    }

    fn named(&self) -> [(&'static str, bool); 3] {
        [
            ("rsiRecovery", self.rsi_recovery),
            ("kdjGoldenCross", self.kdj_golden_cross),
            ("stabilizing", self.stabilizing),
        ]
    }
}

/// At least `min_declines` falls among the changes before the latest one,
/// and the latest change is a rise.
fn is_stabilizing(prices: &[f64], min_declines: usize) -> bool {
    let changes: Vec<f64> = prices.windows(2).map(|w| w[1] - w[0]).collect();
    let Some((latest, prior)) = changes.split_last() else {
        return false;
    };
    let declines = prior.iter().filter(|c| **c < 0.0).count();
    declines >= min_declines && *latest > 0.0
}

pub fn interpret(score: i32) -> &'static str {
    if score >= CONFIRMED {
        "Bottoming confirmed: momentum and price both turning up"
    } else if score >= EMERGING {
        "Stabilizing after a decline"
    } else {
        "No bottom yet"
    }
}

pub fn evaluate(input: &AnalysisInput<'_>) -> StrategyResult {
    let signals = StabilizationSignals::detect(input);
    let score = signals.score();
    strategy_result(score, signals.named(), interpret(score))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::strategies::fixture::{set_tail, Fixture};

    #[test]
    fn rsi_recovering_from_oversold() {
        let mut fx = Fixture::new();
        set_tail(&mut fx.indicators.rsi, &[25.0, 27.0, 29.0]);
        let result = evaluate(&fx.input());
        assert!(result.signal("rsiRecovery"));
        assert_eq!(result.score, 30);
        assert_eq!(result.interpretation, "Stabilizing after a decline");
    }

    #[test]
    fn rsi_still_falling_is_not_recovery() {
        let mut fx = Fixture::new();
        set_tail(&mut fx.indicators.rsi, &[25.0, 27.0, 26.0]);
        assert!(!StabilizationSignals::detect(&fx.input()).rsi_recovery);
    }

    #[test]
    fn kdj_golden_cross() {
        let mut fx = Fixture::new();
        set_tail(&mut fx.indicators.kdj.k, &[18.0, 26.0]);
        set_tail(&mut fx.indicators.kdj.d, &[20.0, 22.0]);
        assert!(StabilizationSignals::detect(&fx.input()).kdj_golden_cross);
    }

    #[test]
    fn declines_then_uptick_is_stabilizing() {
        let mut fx = Fixture::new();
        // Changes: -1, -1, +0.5, -1, -0.5 | latest +0.5
        set_tail(
            &mut fx.series.prices,
            &[14.0, 13.0, 12.0, 12.5, 11.5, 11.0, 11.5],
        );
        let result = evaluate(&fx.input());
        assert!(result.signal("stabilizing"));
        assert_eq!(result.score, 40);
    }

    #[test]
    fn uptick_without_prior_declines_is_not_stabilizing() {
        assert!(!is_stabilizing(&[10.0, 10.5, 11.0, 10.8, 11.2, 11.4, 11.6], 3));
    }

    #[test]
    fn declines_without_uptick_is_not_stabilizing() {
        assert!(!is_stabilizing(&[14.0, 13.0, 12.0, 11.0, 10.0, 9.0, 9.0], 3));
    }

    #[test]
    fn all_three_confirm_bottom() {
        let mut fx = Fixture::new();
        set_tail(&mut fx.indicators.rsi, &[22.0, 24.0, 28.0]);
        set_tail(&mut fx.indicators.kdj.k, &[15.0, 25.0]);
        set_tail(&mut fx.indicators.kdj.d, &[18.0, 20.0]);
        set_tail(
            &mut fx.series.prices,
            &[14.0, 13.0, 12.0, 11.0, 10.5, 10.0, 10.4],
        );
        let result = evaluate(&fx.input());
        assert_eq!(result.score, 100);
        assert!(result.interpretation.starts_with("Bottoming confirmed"));
    }

    #[test]
    fn flipping_one_signal_moves_score_by_its_points() {
        let base = StabilizationSignals {
            rsi_recovery: false,
            kdj_golden_cross: true,
            stabilizing: false,
        };
        let flips = [
            (StabilizationSignals { rsi_recovery: true, ..base }, RSI_RECOVERY_POINTS),
            (StabilizationSignals { kdj_golden_cross: false, ..base }, -KDJ_GOLDEN_CROSS_POINTS),
            (StabilizationSignals { stabilizing: true, ..base }, STABILIZING_POINTS),
        ];
        for (flipped, delta) in flips {
            assert_eq!(flipped.score() - base.score(), delta);
        }
    }
}
