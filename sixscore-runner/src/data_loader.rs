//! Series loading for the runner.
//!
//! Two sources:
//! 1. CSV files with a header row: a `close` (or `price`) column and a
//!    `volume` column are required, `date` is optional. Column names are
//!    matched case-insensitively; other columns are ignored.
//! 2. Synthetic random walks, seeded from the symbol name. A developer-only
//!    debug mode; reports built on synthetic data are tagged.

use std::io::Read;
use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, warn};

use sixscore_core::config::ConfigError;
use sixscore_core::domain::{MarketSeries, SeriesError};

/// Errors from loading series and config files.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed CSV in {}: {source}", path.display())]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    #[error("{} has no '{column}' column", path.display())]
    MissingColumn { path: PathBuf, column: &'static str },

    #[error("{} row {row}: invalid {column} value '{value}'", path.display())]
    InvalidValue {
        path: PathBuf,
        row: usize,
        column: &'static str,
        value: String,
    },

    #[error("{} contains no data rows", path.display())]
    Empty { path: PathBuf },

    #[error("invalid config {}: {source}", path.display())]
    Config {
        path: PathBuf,
        #[source]
        source: ConfigError,
    },

    #[error("series error: {0}")]
    Series(#[from] SeriesError),
}

/// Where a series came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DataSource {
    Csv,
    Synthetic,
}

/// A loaded series plus provenance.
#[derive(Debug, Clone)]
pub struct LoadedSeries {
    pub series: MarketSeries,
    /// Per-period dates, when the input carried a `date` column.
    pub dates: Option<Vec<NaiveDate>>,
    pub source: DataSource,
}

impl LoadedSeries {
    pub fn symbol(&self) -> &str {
        &self.series.symbol
    }

    pub fn is_synthetic(&self) -> bool {
        self.source == DataSource::Synthetic
    }
}

/// Symbol implied by a file path: its stem (`data/AAPL.csv` → `AAPL`).
pub fn symbol_from_path(path: &Path) -> String {
    path.file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

/// Load a CSV file. The symbol defaults to the file stem.
pub fn load_csv(path: &Path, symbol: Option<&str>) -> Result<LoadedSeries, LoadError> {
    let file = std::fs::File::open(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let symbol = symbol
        .map(str::to_string)
        .unwrap_or_else(|| symbol_from_path(path));
    let loaded = parse_csv(file, &symbol, path)?;
    debug!(
        symbol = %symbol,
        periods = loaded.series.len(),
        path = %path.display(),
        "loaded CSV series"
    );
    Ok(loaded)
}

/// Parse CSV content from any reader. `origin` is only used in errors.
pub fn parse_csv<R: Read>(
    reader: R,
    symbol: &str,
    origin: &Path,
) -> Result<LoadedSeries, LoadError> {
    let csv_err = |source: csv::Error| LoadError::Csv {
        path: origin.to_path_buf(),
        source,
    };

    let mut rdr = csv::ReaderBuilder::new().trim(csv::Trim::All).from_reader(reader);
    let headers = rdr.headers().map_err(csv_err)?.clone();
    let find = |names: &[&str]| {
        headers
            .iter()
            .position(|h| names.iter().any(|n| h.eq_ignore_ascii_case(n)))
    };

    let close_idx = find(&["close", "price"]).ok_or_else(|| LoadError::MissingColumn {
        path: origin.to_path_buf(),
        column: "close",
    })?;
    let volume_idx = find(&["volume"]).ok_or_else(|| LoadError::MissingColumn {
        path: origin.to_path_buf(),
        column: "volume",
    })?;
    let date_idx = find(&["date"]);

    let mut prices = Vec::new();
    let mut volumes = Vec::new();
    let mut dates = date_idx.map(|_| Vec::new());

    for (i, record) in rdr.records().enumerate() {
        let record = record.map_err(csv_err)?;
        // Header is row 1
        let row = i + 2;
        let field = |idx: usize, column: &'static str| -> Result<f64, LoadError> {
            let raw = record.get(idx).unwrap_or("");
            raw.parse::<f64>().map_err(|_| LoadError::InvalidValue {
                path: origin.to_path_buf(),
                row,
                column,
                value: raw.to_string(),
            })
        };
        prices.push(field(close_idx, "close")?);
        volumes.push(field(volume_idx, "volume")?);

        if let (Some(idx), Some(dates)) = (date_idx, dates.as_mut()) {
            let raw = record.get(idx).unwrap_or("");
            let date = NaiveDate::parse_from_str(raw, "%Y-%m-%d").map_err(|_| {
                LoadError::InvalidValue {
                    path: origin.to_path_buf(),
                    row,
                    column: "date",
                    value: raw.to_string(),
                }
            })?;
            dates.push(date);
        }
    }

    if prices.is_empty() {
        return Err(LoadError::Empty {
            path: origin.to_path_buf(),
        });
    }

    Ok(LoadedSeries {
        series: MarketSeries::new(symbol, prices, volumes)?,
        dates,
        source: DataSource::Csv,
    })
}

/// Generate a synthetic series for testing/development.
///
/// A random walk from 100.0 with daily returns in ±3%, seeded from a BLAKE3
/// hash of the symbol so the same symbol always yields the same series.
pub fn synthetic_series(symbol: &str, periods: usize) -> LoadedSeries {
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    warn!(symbol = %symbol, periods, "generating synthetic data; report will be tagged synthetic");

    let seed: [u8; 32] = *blake3::hash(symbol.as_bytes()).as_bytes();
    let mut rng = StdRng::from_seed(seed);

    let mut prices = Vec::with_capacity(periods);
    let mut volumes = Vec::with_capacity(periods);
    let mut price = 100.0_f64;
    for _ in 0..periods {
        let daily_return: f64 = rng.gen_range(-0.03..0.03);
        price *= 1.0 + daily_return;
        prices.push(price);
        volumes.push(rng.gen_range(500_000..5_000_000u64) as f64);
    }

    LoadedSeries {
        series: MarketSeries {
            symbol: symbol.to_string(),
            prices,
            volumes,
        },
        dates: None,
        source: DataSource::Synthetic,
    }
}
