//! Domain types for SixScore.
//!
//! Everything here is plain data: created fresh inside one analysis call and
//! handed back to the caller. Nothing in this module carries state across calls.

pub mod indicator_set;
pub mod recommendation;
pub mod result;
pub mod series;
pub mod strategy;

pub use indicator_set::{BollingerSeries, IndicatorSet, KdjSeries, MacdSeries};
pub use recommendation::{Action, Confidence, Recommendation};
pub use result::AggregateResult;
pub use series::{MarketSeries, SeriesError};
pub use strategy::{StrategyKind, StrategyResult};
