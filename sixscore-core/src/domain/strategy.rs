//! Strategy identities and the per-strategy result record.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// The closed set of six strategies.
///
/// Declaration order is the evaluation and summation order; the derived `Ord`
/// keeps `BTreeMap<StrategyKind, _>` iteration in that same order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum StrategyKind {
    TrendBreakout,
    SupportResistance,
    VolumePrice,
    Stabilization,
    TrendFollowing,
    Composite,
}

impl StrategyKind {
    /// All six strategies in evaluation order.
    pub const ALL: [StrategyKind; 6] = [
        StrategyKind::TrendBreakout,
        StrategyKind::SupportResistance,
        StrategyKind::VolumePrice,
        StrategyKind::Stabilization,
        StrategyKind::TrendFollowing,
        StrategyKind::Composite,
    ];

    /// Stable kebab-case name, identical to the JSON key.
    pub fn name(&self) -> &'static str {
        match self {
            StrategyKind::TrendBreakout => "trend-breakout",
            StrategyKind::SupportResistance => "support-resistance",
            StrategyKind::VolumePrice => "volume-price",
            StrategyKind::Stabilization => "stabilization",
            StrategyKind::TrendFollowing => "trend-following",
            StrategyKind::Composite => "composite",
        }
    }
}

impl fmt::Display for StrategyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Output of one strategy evaluator.
///
/// `score` ranges are strategy-specific and may be negative; they are only
/// normalized at aggregation time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StrategyResult {
    pub score: i32,
    pub signals: BTreeMap<String, bool>,
    pub interpretation: String,
}

impl StrategyResult {
    /// Look up a named signal. Unknown names read as `false`.
    pub fn signal(&self, name: &str) -> bool {
        self.signals.get(name).copied().unwrap_or(false)
    }
}
