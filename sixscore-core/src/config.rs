//! Scoring configuration: strategy weights, recommendation bands and the
//! numeric thresholds the evaluators compare against.
//!
//! Every field has a default matching the reference strategy set, so an
//! empty TOML document deserializes to `ScoringConfig::default()`.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::StrategyKind;

/// Errors from building or validating a `ScoringConfig`.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid weight for {strategy}: {value} (must be finite and >= 0)")]
    InvalidWeight { strategy: StrategyKind, value: f64 },

    #[error(
        "recommendation bands must satisfy 0 < sell < hold < buy < strong_buy <= 100 \
         (got sell={sell}, hold={hold}, buy={buy}, strong_buy={strong_buy})"
    )]
    InvalidBands {
        sell: f64,
        hold: f64,
        buy: f64,
        strong_buy: f64,
    },

    #[error("invalid threshold '{name}': {reason}")]
    InvalidThreshold { name: &'static str, reason: String },

    #[error("failed to parse config TOML: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("failed to serialize config TOML: {0}")]
    Serialize(#[from] toml::ser::Error),
}

/// Smallest accepted `min_history`: the slow moving average's window.
pub const MIN_HISTORY_FLOOR: usize = 60;

/// Complete scoring configuration handed to the analyzer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoringConfig {
    /// Minimum number of price/volume periods required before analysis.
    /// May be raised above [`MIN_HISTORY_FLOOR`], never lowered below it.
    pub min_history: usize,
    pub weights: StrategyWeights,
    pub bands: RecommendationBands,
    pub thresholds: SignalThresholds,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            min_history: MIN_HISTORY_FLOOR,
            weights: StrategyWeights::default(),
            bands: RecommendationBands::default(),
            thresholds: SignalThresholds::default(),
        }
    }
}

impl ScoringConfig {
    /// Parse and validate a TOML document.
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: ScoringConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Render as TOML (used by `sixscore config`).
    pub fn to_toml_string(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string_pretty(self)?)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.min_history < MIN_HISTORY_FLOOR {
            return Err(ConfigError::InvalidThreshold {
                name: "min_history",
                reason: format!("must be >= {MIN_HISTORY_FLOOR}, got {}", self.min_history),
            });
        }
        self.weights.validate()?;
        self.bands.validate()?;
        self.thresholds.validate()
    }
}

/// Per-strategy aggregation weights.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StrategyWeights {
    pub trend_breakout: f64,
    pub support_resistance: f64,
    pub volume_price: f64,
    pub stabilization: f64,
    pub trend_following: f64,
    pub composite: f64,
}

impl Default for StrategyWeights {
    fn default() -> Self {
        Self {
            trend_breakout: 1.0,
            support_resistance: 0.8,
            volume_price: 0.9,
            stabilization: 0.8,
            trend_following: 1.1,
            composite: 1.2,
        }
    }
}

impl StrategyWeights {
    pub fn weight(&self, kind: StrategyKind) -> f64 {
        match kind {
            StrategyKind::TrendBreakout => self.trend_breakout,
            StrategyKind::SupportResistance => self.support_resistance,
            StrategyKind::VolumePrice => self.volume_price,
            StrategyKind::Stabilization => self.stabilization,
            StrategyKind::TrendFollowing => self.trend_following,
            StrategyKind::Composite => self.composite,
        }
    }

    fn validate(&self) -> Result<(), ConfigError> {
        for kind in StrategyKind::ALL {
            let value = self.weight(kind);
            if !value.is_finite() || value < 0.0 {
                return Err(ConfigError::InvalidWeight {
                    strategy: kind,
                    value,
                });
            }
        }
        Ok(())
    }
}

/// Lower bounds (inclusive) of the four upper recommendation bands.
///
/// Anything below `sell` is strong-sell.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RecommendationBands {
    pub strong_buy: f64,
    pub buy: f64,
    pub hold: f64,
    pub sell: f64,
}

impl Default for RecommendationBands {
    fn default() -> Self {
        Self {
            strong_buy: 80.0,
            buy: 60.0,
            hold: 45.0,
            sell: 30.0,
        }
    }
}

impl RecommendationBands {
    fn validate(&self) -> Result<(), ConfigError> {
        let ordered = 0.0 < self.sell
            && self.sell < self.hold
            && self.hold < self.buy
            && self.buy < self.strong_buy
            && self.strong_buy <= 100.0;
        if ordered {
            Ok(())
        } else {
            Err(ConfigError::InvalidBands {
                sell: self.sell,
                hold: self.hold,
                buy: self.buy,
                strong_buy: self.strong_buy,
            })
        }
    }
}

/// Numeric thresholds read by the strategy evaluators.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SignalThresholds {
    /// Close below `lower * lower_band_factor` counts as near support.
    pub lower_band_factor: f64,
    /// Close above `upper * upper_band_factor` counts as near resistance.
    pub upper_band_factor: f64,
    /// Trailing window (including the latest period) for the volume average.
    pub volume_window: usize,
    pub volume_spike_ratio: f64,
    pub volume_dry_ratio: f64,
    /// Number of periods before the latest one that form the breakout box.
    pub breakout_lookback: usize,
    pub rsi_oversold: f64,
    /// Period-over-period changes inspected before the latest change.
    pub stabilization_window: usize,
    pub stabilization_min_declines: usize,
    pub ma20_trend_lookback: usize,
    pub ma60_trend_lookback: usize,
}

impl Default for SignalThresholds {
    fn default() -> Self {
        Self {
            lower_band_factor: 1.02,
            upper_band_factor: 0.98,
            volume_window: 5,
            volume_spike_ratio: 1.5,
            volume_dry_ratio: 0.7,
            breakout_lookback: 20,
            rsi_oversold: 30.0,
            stabilization_window: 5,
            stabilization_min_declines: 3,
            ma20_trend_lookback: 5,
            ma60_trend_lookback: 10,
        }
    }
}

impl SignalThresholds {
    fn validate(&self) -> Result<(), ConfigError> {
        let positive = [
            ("lower_band_factor", self.lower_band_factor),
            ("upper_band_factor", self.upper_band_factor),
            ("volume_spike_ratio", self.volume_spike_ratio),
            ("volume_dry_ratio", self.volume_dry_ratio),
        ];
        for (name, value) in positive {
            if !value.is_finite() || value <= 0.0 {
                return Err(ConfigError::InvalidThreshold {
                    name,
                    reason: format!("must be finite and > 0, got {value}"),
                });
            }
        }
        if !(0.0..=100.0).contains(&self.rsi_oversold) {
            return Err(ConfigError::InvalidThreshold {
                name: "rsi_oversold",
                reason: format!("must lie in [0, 100], got {}", self.rsi_oversold),
            });
        }
        let windows = [
            ("volume_window", self.volume_window),
            ("breakout_lookback", self.breakout_lookback),
            ("stabilization_window", self.stabilization_window),
            ("ma20_trend_lookback", self.ma20_trend_lookback),
            ("ma60_trend_lookback", self.ma60_trend_lookback),
        ];
        for (name, value) in windows {
            if value == 0 {
                return Err(ConfigError::InvalidThreshold {
                    name,
                    reason: "must be >= 1".into(),
                });
            }
        }
        if self.stabilization_min_declines > self.stabilization_window {
            return Err(ConfigError::InvalidThreshold {
                name: "stabilization_min_declines",
                reason: format!(
                    "{} exceeds stabilization_window {}",
                    self.stabilization_min_declines, self.stabilization_window
                ),
            });
        }
        Ok(())
    }
}
