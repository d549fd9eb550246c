//! SixScore Core: multi-strategy technical-analysis scoring.
//!
//! Given a price/volume history and its indicator series, six independent
//! evaluators each produce a score and a set of named signals. The scores are
//! combined with fixed weights into an overall score in `[0, 100]`, which maps
//! onto a five-band recommendation.
//!
//! - Domain types (series, indicator set, strategy results, recommendation)
//! - `Indicator` trait and reference indicators (SMA, EMA, MACD, KDJ, RSI, Bollinger)
//! - `IndicatorProvider` seam with a standard and a fixed implementation
//! - Validated `AnalysisInput` and the `Analyzer` orchestrator
//! - The six evaluators, the aggregator and the recommendation bands
//!
//! Everything here is synchronous and side-effect free.

pub mod components;
pub mod config;
pub mod domain;
pub mod engine;
pub mod fingerprint;
pub mod indicators;
pub mod scoring;
pub mod strategies;

pub use components::{FixedIndicators, IndicatorProvider, StandardIndicators};
pub use config::{ConfigError, RecommendationBands, ScoringConfig, SignalThresholds, StrategyWeights};
pub use domain::{
    Action, AggregateResult, Confidence, IndicatorSet, MarketSeries, Recommendation,
    StrategyKind, StrategyResult,
};
pub use engine::{AnalysisError, AnalysisInput, Analyzer};
pub use fingerprint::InputHash;
