//! Indicator trait.
//!
//! Indicators are pure functions: close history in, numeric series out.
//! They run once per analysis, before any evaluator looks at the data.

/// Trait for single-series indicators.
///
/// Indicators take a full close series and produce an output series of the
/// same length. The first `lookback()` values are `f64::NAN` (warmup).
///
/// # Look-ahead contamination guard
/// No indicator value at period t may depend on a close from period t+1 or
/// later. Every indicator must pass the truncated-vs-full series test.
pub trait Indicator: Send + Sync {
    /// Human-readable name (e.g., "ma20", "rsi14").
    fn name(&self) -> &str;

    /// Number of periods needed before the indicator produces valid output.
    fn lookback(&self) -> usize;

    /// Compute the indicator for the entire close series.
    ///
    /// Returns a `Vec<f64>` of the same length as `closes`.
    fn compute(&self, closes: &[f64]) -> Vec<f64>;
}
