//! Report types written by the runner.
//!
//! All persisted artifacts carry a `schemaVersion`. Unknown (newer) versions
//! are rejected on load.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use sixscore_core::domain::{Action, AggregateResult};
use sixscore_core::InputHash;

/// Current schema version for persisted reports.
pub const SCHEMA_VERSION: u32 = 1;

fn default_schema_version() -> u32 {
    SCHEMA_VERSION
}

/// Result of analyzing one symbol, plus enough provenance to compare runs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisReport {
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,
    pub symbol: String,
    pub periods: usize,
    pub input_hash: InputHash,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub first_date: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_date: Option<NaiveDate>,
    /// True when the input was generated, not loaded.
    #[serde(default)]
    pub synthetic: bool,
    pub result: AggregateResult,
}

/// One line of the batch summary's ranking.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RankedSymbol {
    pub symbol: String,
    pub overall_score: f64,
    pub action: Action,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FailedSymbol {
    pub symbol: String,
    pub error: String,
}

/// Batch outcome: successes ranked by overall score, failures listed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BatchSummary {
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,
    pub total: usize,
    pub succeeded: usize,
    pub ranked: Vec<RankedSymbol>,
    pub failed: Vec<FailedSymbol>,
}

impl BatchSummary {
    /// Build from reports and `(symbol, error message)` pairs.
    ///
    /// Ranking is by descending overall score, ties broken by symbol.
    pub fn new(reports: &[&AnalysisReport], failed: Vec<FailedSymbol>) -> Self {
        let mut ranked: Vec<RankedSymbol> = reports
            .iter()
            .map(|r| RankedSymbol {
                symbol: r.symbol.clone(),
                overall_score: r.result.overall_score,
                action: r.result.recommendation.action,
            })
            .collect();
        ranked.sort_by(|a, b| {
            b.overall_score
                .total_cmp(&a.overall_score)
                .then_with(|| a.symbol.cmp(&b.symbol))
        });

        Self {
            schema_version: SCHEMA_VERSION,
            total: ranked.len() + failed.len(),
            succeeded: ranked.len(),
            ranked,
            failed,
        }
    }
}
