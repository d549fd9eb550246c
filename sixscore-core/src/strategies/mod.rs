//! The six strategy evaluators.
//!
//! Each evaluator is a stateless function of a validated [`AnalysisInput`].
//! It detects a typed set of boolean signals, scores them with fixed points,
//! and picks an interpretation from its own score cut-offs.
//!
//! Dispatch goes through [`StrategyKind::evaluate`], an exhaustive match, so
//! adding a strategy without wiring it in does not compile.

pub mod composite;
pub mod stabilization;
pub mod support_resistance;
pub mod trend_breakout;
pub mod trend_following;
pub mod volume_price;

use std::collections::BTreeMap;

use crate::domain::{StrategyKind, StrategyResult};
use crate::engine::AnalysisInput;

impl StrategyKind {
    /// Run this strategy's evaluator.
    pub fn evaluate(self, input: &AnalysisInput<'_>) -> StrategyResult {
        match self {
            StrategyKind::TrendBreakout => trend_breakout::evaluate(input),
            StrategyKind::SupportResistance => support_resistance::evaluate(input),
            StrategyKind::VolumePrice => volume_price::evaluate(input),
            StrategyKind::Stabilization => stabilization::evaluate(input),
            StrategyKind::TrendFollowing => trend_following::evaluate(input),
            StrategyKind::Composite => composite::evaluate(input),
        }
    }
}

fn points(active: bool, points: i32) -> i32 {
    if active {
        points
    } else {
        0
    }
}

fn strategy_result<const N: usize>(
    score: i32,
    signals: [(&str, bool); N],
    interpretation: &str,
) -> StrategyResult {
    StrategyResult {
        score,
        signals: signals
            .into_iter()
            .map(|(name, on)| (name.to_string(), on))
            .collect::<BTreeMap<_, _>>(),
        interpretation: interpretation.to_string(),
    }
}

/// `x[-2] <= y[-2] && x[-1] > y[-1]`
fn crossed_above(x_prev: f64, x_now: f64, y_prev: f64, y_now: f64) -> bool {
    x_prev <= y_prev && x_now > y_now
}
