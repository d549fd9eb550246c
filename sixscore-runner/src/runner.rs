//! Analysis runner: wires loading, the core analyzer and report building.
//!
//! Entry points:
//! - `Runner::analyze_series()`: one pre-loaded series → report.
//! - `Runner::analyze_batch()`: many pre-loaded series, one outcome each.
//! - `Runner::analyze_files()`: load + analyze CSV files, one outcome each.
//!
//! Batches fan out across rayon's pool unless parallelism is disabled.
//! Outcomes come back in input order either way, and one failing symbol
//! never aborts the batch.

use std::path::{Path, PathBuf};

use rayon::prelude::*;
use thiserror::Error;
use tracing::{debug, info, warn};

use sixscore_core::config::ConfigError;
use sixscore_core::{AnalysisError, Analyzer, InputHash, ScoringConfig};

use crate::data_loader::{load_csv, LoadError, LoadedSeries};
use crate::report::{AnalysisReport, SCHEMA_VERSION};

/// Errors from the runner.
#[derive(Debug, Error)]
pub enum RunError {
    #[error("config error: {0}")]
    Config(#[from] ConfigError),

    #[error("data error: {0}")]
    Data(#[from] LoadError),

    #[error("analysis of '{symbol}' failed: {source}")]
    Analysis {
        symbol: String,
        #[source]
        source: AnalysisError,
    },

    #[error("failed to write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("serialization error: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("unsupported schema version {found} (max supported: {supported})")]
    UnsupportedSchema { found: u32, supported: u32 },

    #[error("cannot write report for '{symbol}': {reason}")]
    ReportName { symbol: String, reason: String },
}

/// Outcome for one symbol in a batch.
#[derive(Debug)]
pub struct SymbolOutcome {
    pub symbol: String,
    pub result: Result<AnalysisReport, RunError>,
}

/// Runs the analyzer over loaded series.
#[derive(Debug, Clone)]
pub struct Runner {
    analyzer: Analyzer,
    parallel: bool,
}

impl Runner {
    pub fn new(config: ScoringConfig) -> Result<Self, RunError> {
        Ok(Self {
            analyzer: Analyzer::new(config)?,
            parallel: true,
        })
    }

    /// Enables or disables parallel execution.
    pub fn with_parallelism(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    pub fn config(&self) -> &ScoringConfig {
        self.analyzer.config()
    }

    /// Analyze one series and wrap the result in a report.
    pub fn analyze_series(&self, loaded: &LoadedSeries) -> Result<AnalysisReport, RunError> {
        let series = &loaded.series;
        let result = self
            .analyzer
            .analyze(series)
            .map_err(|source| RunError::Analysis {
                symbol: series.symbol.clone(),
                source,
            })?;

        debug!(
            symbol = %series.symbol,
            periods = series.len(),
            overall_score = result.overall_score,
            action = %result.recommendation.action,
            "analyzed"
        );

        let dates = loaded.dates.as_deref();
        Ok(AnalysisReport {
            schema_version: SCHEMA_VERSION,
            symbol: series.symbol.clone(),
            periods: series.len(),
            input_hash: InputHash::of(series),
            first_date: dates.and_then(|d| d.first().copied()),
            last_date: dates.and_then(|d| d.last().copied()),
            synthetic: loaded.is_synthetic(),
            result,
        })
    }

    /// Analyze every series. Outcomes are returned in input order.
    pub fn analyze_batch(&self, batch: &[LoadedSeries]) -> Vec<SymbolOutcome> {
        let run = |loaded: &LoadedSeries| SymbolOutcome {
            symbol: loaded.symbol().to_string(),
            result: self.analyze_series(loaded),
        };

        let outcomes: Vec<SymbolOutcome> = if self.parallel {
            batch.par_iter().map(run).collect()
        } else {
            batch.iter().map(run).collect()
        };

        log_batch(&outcomes);
        outcomes
    }

    /// Load and analyze CSV files; the symbol of each is its file stem.
    pub fn analyze_files(&self, paths: &[PathBuf]) -> Vec<SymbolOutcome> {
        let run = |path: &PathBuf| {
            let symbol = crate::data_loader::symbol_from_path(path);
            let result = self.load_and_analyze(path);
            SymbolOutcome { symbol, result }
        };

        let outcomes: Vec<SymbolOutcome> = if self.parallel {
            paths.par_iter().map(run).collect()
        } else {
            paths.iter().map(run).collect()
        };

        log_batch(&outcomes);
        outcomes
    }

    fn load_and_analyze(&self, path: &Path) -> Result<AnalysisReport, RunError> {
        let loaded = load_csv(path, None)?;
        self.analyze_series(&loaded)
    }
}

fn log_batch(outcomes: &[SymbolOutcome]) {
    let mut failed = 0usize;
    for outcome in outcomes {
        if let Err(e) = &outcome.result {
            failed += 1;
            warn!(symbol = %outcome.symbol, error = %e, "symbol failed");
        }
    }
    info!(
        total = outcomes.len(),
        succeeded = outcomes.len() - failed,
        failed,
        "batch complete"
    );
}
