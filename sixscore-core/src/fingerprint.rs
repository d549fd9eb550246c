//! Input fingerprinting: a BLAKE3 digest of a series' price and volume bits.
//!
//! Two reports with the same `InputHash` were produced from bit-identical
//! input, so their results must be identical too.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::MarketSeries;

/// Hex-encoded BLAKE3 digest of a `MarketSeries`' numeric content.
///
/// The symbol is not hashed: renaming a file does not change the input.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct InputHash(pub String);

impl InputHash {
    pub fn of(series: &MarketSeries) -> Self {
        let mut hasher = blake3::Hasher::new();
        hash_values(&mut hasher, &series.prices);
        hash_values(&mut hasher, &series.volumes);
        Self(hasher.finalize().to_hex().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

// Length prefix keeps `prices ++ volumes` boundaries unambiguous.
fn hash_values(hasher: &mut blake3::Hasher, values: &[f64]) {
    hasher.update(&(values.len() as u64).to_le_bytes());
    for v in values {
        hasher.update(&v.to_bits().to_le_bytes());
    }
}

impl fmt::Display for InputHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
