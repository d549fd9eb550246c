//! Look-ahead check for the assembled indicator set.
//!
//! Single indicators are covered next to the `Indicator` trait. This checks
//! what the analyzer actually receives: the standard provider's full set,
//! including the Bollinger middle band it shares with `ma20`. Periods
//! 0..100 must match between a 100-period and a 200-period history.

use sixscore_core::components::{IndicatorProvider, StandardIndicators};
use sixscore_core::domain::MarketSeries;

/// Deterministic random-walk closes (LCG, floor at 10).
fn make_test_closes(n: usize) -> Vec<f64> {
    let mut closes = Vec::with_capacity(n);
    let mut price = 100.0;
    for i in 0..n {
        let seed = (i as u64).wrapping_mul(6364136223846793005).wrapping_add(1);
        let change = ((seed % 200) as f64 - 100.0) * 0.05;
        price = (price + change).max(10.0);
        closes.push(price);
    }
    closes
}

fn assert_same_prefix(name: &str, truncated: &[f64], full: &[f64]) {
    for (i, (t, f)) in truncated.iter().zip(full).enumerate() {
        if t.is_nan() && f.is_nan() {
            continue;
        }
        assert!(
            !t.is_nan() && !f.is_nan(),
            "{name}: NaN mismatch at period {i} (truncated={t}, full={f})"
        );
        assert!(
            (t - f).abs() < 1e-10,
            "{name}: look-ahead contamination at period {i}: truncated={t}, full={f}"
        );
    }
}

#[test]
fn standard_set_has_no_lookahead() {
    let closes = make_test_closes(200);
    let volumes = vec![1_000.0; 200];
    let full = MarketSeries::new("TEST", closes.clone(), volumes.clone()).unwrap();
    let truncated =
        MarketSeries::new("TEST", closes[..100].to_vec(), volumes[..100].to_vec()).unwrap();

    let provider = StandardIndicators::new();
    let full_set = provider.compute(&full);
    let truncated_set = provider.compute(&truncated);

    for ((name, t), (_, f)) in truncated_set
        .named_series()
        .into_iter()
        .zip(full_set.named_series())
    {
        assert_same_prefix(name, t, f);
    }
}
