//! Analyzer: provider → validation → six evaluators → aggregate → recommend.

use std::collections::BTreeMap;

use crate::components::{IndicatorProvider, StandardIndicators};
use crate::config::{ConfigError, ScoringConfig};
use crate::domain::{AggregateResult, IndicatorSet, MarketSeries, StrategyKind};
use crate::engine::error::AnalysisError;
use crate::engine::input::{AnalysisInput, RequiredHistory};
use crate::scoring::{overall_score, recommend};

/// Runs the full strategy set against one series at a time.
///
/// Holds no per-call state, so one analyzer can be shared across threads.
#[derive(Debug, Clone)]
pub struct Analyzer<P = StandardIndicators> {
    provider: P,
    config: ScoringConfig,
}

impl Analyzer<StandardIndicators> {
    /// Analyzer with the reference indicator provider.
    pub fn new(config: ScoringConfig) -> Result<Self, ConfigError> {
        Self::with_provider(StandardIndicators::new(), config)
    }
}

impl Default for Analyzer<StandardIndicators> {
    fn default() -> Self {
        Self {
            provider: StandardIndicators::new(),
            config: ScoringConfig::default(),
        }
    }
}

impl<P: IndicatorProvider> Analyzer<P> {
    pub fn with_provider(provider: P, config: ScoringConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self { provider, config })
    }

    pub fn config(&self) -> &ScoringConfig {
        &self.config
    }

    pub fn provider(&self) -> &P {
        &self.provider
    }

    /// History this analyzer needs from `analyze`: the configured minimum,
    /// raised by the provider's warmup (70 periods for the standard set).
    pub fn required_history(&self) -> RequiredHistory {
        RequiredHistory::from_config(&self.config).with_warmup(self.provider.warmup())
    }

    /// Compute indicators with the provider, then score.
    ///
    /// A series too short for the provider's warmup fails with
    /// `InsufficientHistory` on prices, before any evaluator runs.
    pub fn analyze(&self, series: &MarketSeries) -> Result<AggregateResult, AnalysisError> {
        let indicators = self.provider.compute(series);
        let input =
            AnalysisInput::with_required(series, &indicators, &self.config, self.required_history())?;
        Ok(self.score(&input))
    }

    /// Score against caller-supplied indicators.
    ///
    /// Only the configured minimum applies; the indicators' own warmup is
    /// checked through their tails.
    pub fn analyze_with(
        &self,
        series: &MarketSeries,
        indicators: &IndicatorSet,
    ) -> Result<AggregateResult, AnalysisError> {
        let input = AnalysisInput::new(series, indicators, &self.config)?;
        Ok(self.score(&input))
    }

    fn score(&self, input: &AnalysisInput<'_>) -> AggregateResult {
        let strategies: BTreeMap<_, _> = StrategyKind::ALL
            .into_iter()
            .map(|kind| (kind, kind.evaluate(input)))
            .collect();

        let overall_score = overall_score(&strategies, &self.config.weights);
        let recommendation = recommend(overall_score, &self.config.bands);

        AggregateResult {
            strategies,
            overall_score,
            recommendation,
        }
    }
}
