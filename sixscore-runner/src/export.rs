//! JSON export of reports and batch summaries.
//!
//! Batch layout: one `<symbol>.json` per successful symbol and a
//! `summary.json` ranking them, all in one output directory.
//!
//! Report file names are claimed case-insensitively, first come first
//! served. A symbol whose file would collide with an earlier report or with
//! `summary.json`, or that is not a plain file name, is listed as failed
//! instead of overwriting anything.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use tracing::{info, warn};

use crate::report::{AnalysisReport, BatchSummary, FailedSymbol, SCHEMA_VERSION};
use crate::runner::{RunError, SymbolOutcome};

pub const SUMMARY_FILE: &str = "summary.json";

/// Serialize a report, pretty-printed or compact.
pub fn export_json(report: &AnalysisReport, pretty: bool) -> Result<String, RunError> {
    let json = if pretty {
        serde_json::to_string_pretty(report)?
    } else {
        serde_json::to_string(report)?
    };
    Ok(json)
}

/// Deserialize a report, rejecting unknown schema versions.
pub fn import_json(json: &str) -> Result<AnalysisReport, RunError> {
    let report: AnalysisReport = serde_json::from_str(json)?;
    if report.schema_version > SCHEMA_VERSION {
        return Err(RunError::UnsupportedSchema {
            found: report.schema_version,
            supported: SCHEMA_VERSION,
        });
    }
    Ok(report)
}

/// Write every successful report plus `summary.json` into `dir`.
///
/// Creates `dir` if needed. Returns the summary that was written.
pub fn write_batch(dir: &Path, outcomes: &[SymbolOutcome]) -> Result<BatchSummary, RunError> {
    std::fs::create_dir_all(dir).map_err(|source| write_err(dir, source))?;

    let mut claimed = HashSet::new();
    let mut reports = Vec::new();
    let mut failed = Vec::new();
    for outcome in outcomes {
        let report = match &outcome.result {
            Ok(report) => report,
            Err(e) => {
                failed.push(failure(outcome, e));
                continue;
            }
        };
        match claim_report_file(&report.symbol, &mut claimed) {
            Ok(file) => {
                write_file(&dir.join(file), &export_json(report, true)?)?;
                reports.push(report);
            }
            Err(e) => {
                warn!(symbol = %report.symbol, error = %e, "report not written");
                failed.push(failure(outcome, &e));
            }
        }
    }

    let summary = BatchSummary::new(&reports, failed);
    write_file(&dir.join(SUMMARY_FILE), &serde_json::to_string_pretty(&summary)?)?;
    info!(
        dir = %dir.display(),
        written = summary.succeeded,
        failed = summary.failed.len(),
        "batch reports written"
    );
    Ok(summary)
}

/// Reserve `<symbol>.json` in `claimed` (lowercased names).
fn claim_report_file(symbol: &str, claimed: &mut HashSet<String>) -> Result<String, RunError> {
    let reject = |reason: String| RunError::ReportName {
        symbol: symbol.to_string(),
        reason,
    };
    if symbol.is_empty() || symbol == "." || symbol == ".." || symbol.contains(['/', '\\']) {
        return Err(reject("symbol is not a plain file name".into()));
    }

    let file = format!("{symbol}.json");
    let key = file.to_lowercase();
    if key == SUMMARY_FILE {
        return Err(reject(format!("{file} is reserved for the batch summary")));
    }
    if !claimed.insert(key) {
        return Err(reject(format!(
            "{file} is already written by another symbol in this batch"
        )));
    }
    Ok(file)
}

fn failure(outcome: &SymbolOutcome, error: &RunError) -> FailedSymbol {
    FailedSymbol {
        symbol: outcome.symbol.clone(),
        error: error.to_string(),
    }
}

fn write_file(path: &Path, content: &str) -> Result<(), RunError> {
    std::fs::write(path, content).map_err(|source| write_err(path, source))
}

fn write_err(path: &Path, source: std::io::Error) -> RunError {
    RunError::Write {
        path: PathBuf::from(path),
        source,
    }
}
