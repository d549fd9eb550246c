//! AggregateResult: the composite output of one analysis.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::recommendation::Recommendation;
use super::strategy::{StrategyKind, StrategyResult};

/// Composite result: six strategy results, the clamped overall score and the
/// recommendation derived from it.
///
/// Serialized keys (`strategies`, `overallScore`, `recommendation`) are part of
/// the output contract and must stay stable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AggregateResult {
    pub strategies: BTreeMap<StrategyKind, StrategyResult>,
    pub overall_score: f64,
    pub recommendation: Recommendation,
}

impl AggregateResult {
    /// Score of one strategy (0 if absent).
    pub fn score_of(&self, kind: StrategyKind) -> i32 {
        self.strategies.get(&kind).map(|r| r.score).unwrap_or(0)
    }
}
