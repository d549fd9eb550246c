//! Weighted aggregation of the six strategy scores.
//!
//! `overall = clamp(Σ score_i * weight_i / 6, 0, 100)`
//!
//! The divisor is the number of strategies, not the sum of weights. Terms are
//! added in `StrategyKind::ALL` order so the float result is reproducible.

use std::collections::BTreeMap;

use crate::config::StrategyWeights;
use crate::domain::{StrategyKind, StrategyResult};

pub const STRATEGY_COUNT: usize = StrategyKind::ALL.len();

/// Weighted, normalized overall score in `[0, 100]`.
///
/// A missing strategy contributes zero.
pub fn overall_score(
    results: &BTreeMap<StrategyKind, StrategyResult>,
    weights: &StrategyWeights,
) -> f64 {
    let weighted: f64 = StrategyKind::ALL
        .iter()
        .map(|kind| {
            let score = results.get(kind).map(|r| r.score).unwrap_or(0);
            f64::from(score) * weights.weight(*kind)
        })
        .sum();
    (weighted / STRATEGY_COUNT as f64).clamp(0.0, 100.0)
}
