//! Component traits at the engine's seams.
//!
//! - `Indicator`: one close series in, one derived series out.
//! - `IndicatorProvider`: a whole `MarketSeries` in, a full `IndicatorSet` out.
//!   This is the collaborator the analyzer calls once per analysis.

pub mod indicator;
pub mod provider;

pub use indicator::Indicator;
pub use provider::{FixedIndicators, IndicatorProvider, StandardIndicators};
