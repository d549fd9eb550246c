//! SixScore Runner: batch orchestration around `sixscore-core`.
//!
//! - CSV and synthetic series loading
//! - TOML scoring-config files
//! - Per-symbol analysis with rayon fan-out
//! - JSON reports and batch summaries

pub mod config;
pub mod data_loader;
pub mod export;
pub mod report;
pub mod runner;

pub use config::{load_config, load_config_or_default};
pub use data_loader::{load_csv, synthetic_series, DataSource, LoadError, LoadedSeries};
pub use export::{export_json, import_json, write_batch};
pub use report::{AnalysisReport, BatchSummary, FailedSymbol, RankedSymbol, SCHEMA_VERSION};
pub use runner::{RunError, Runner, SymbolOutcome};
