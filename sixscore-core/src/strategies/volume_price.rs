//! Volume-price confirmation.
//!
//! Volume is compared against the trailing average (latest period included),
//! price against the previous close. Only the four derived combinations score.

use crate::domain::StrategyResult;
use crate::engine::AnalysisInput;

use super::{points, strategy_result};

pub const UP_WITH_PRICE_POINTS: i32 = 40;
pub const DOWN_WITH_PRICE_POINTS: i32 = -20;
pub const UP_PRICE_DOWN_POINTS: i32 = -30;
pub const DOWN_PRICE_UP_POINTS: i32 = 20;

const ACCUMULATION: i32 = 40;
const DISTRIBUTION: i32 = -30;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct VolumePriceSignals {
    pub volume_increase: bool,
    pub volume_decrease: bool,
    pub price_increase: bool,
    pub price_decrease: bool,
}

impl VolumePriceSignals {
    pub fn detect(input: &AnalysisInput<'_>) -> Self {
        let t = input.thresholds();
        let prices = input.prices();
        let latest_volume = input.volumes().back(1);
        let avg = input.average_volume();

        Self {
            volume_increase: latest_volume > avg * t.volume_spike_ratio,
            volume_decrease: latest_volume < avg * t.volume_dry_ratio,
            price_increase: prices.back(1) > prices.back(2),
            price_decrease: prices.back(1) < prices.back(2),
        }
    }

    pub fn volume_up_with_price(&self) -> bool {
        self.volume_increase && self.price_increase
    }

    pub fn volume_down_with_price(&self) -> bool {
        self.volume_decrease && self.price_decrease
    }

    pub fn volume_up_price_down(&self) -> bool {
        self.volume_increase && self.price_decrease
    }

    pub fn volume_down_price_up(&self) -> bool {
        self.volume_decrease && self.price_increase
    }

    pub fn score(&self) -> i32 {
        points(self.volume_up_with_price(), UP_WITH_PRICE_POINTS)
            + points(self.volume_down_with_price(), DOWN_WITH_PRICE_POINTS)
            + points(self.volume_up_price_down(), UP_PRICE_DOWN_POINTS)
            + points(self.volume_down_price_up(), DOWN_PRICE_UP_POINTS)
    }

    fn named(&self) -> [(&'static str, bool); 8] {
        [
            ("volumeIncrease", self.volume_increase),
            ("volumeDecrease", self.volume_decrease),
            ("priceIncrease", self.price_increase),
            ("priceDecrease", self.price_decrease),
            ("volumeUpWithPrice", self.volume_up_with_price()),
            ("volumeDownWithPrice", self.volume_down_with_price()),
            ("volumeUpPriceDown", self.volume_up_price_down()),
            ("volumeDownPriceUp", self.volume_down_price_up()),
        ]
    }
}

pub fn interpret(score: i32) -> &'static str {
    if score >= ACCUMULATION {
        "Healthy accumulation: price rising on expanding volume"
    } else if score > 0 {
        "Advance on light volume"
    } else if score <= DISTRIBUTION {
        "Distribution: price falling on heavy volume"
    } else if score < 0 {
        "Quiet decline on shrinking volume"
    } else {
        "Volume and price neutral"
    }
}

pub fn evaluate(input: &AnalysisInput<'_>) -> StrategyResult {
    let signals = VolumePriceSignals::detect(input);
    let score = signals.score();
    strategy_result(score, signals.named(), interpret(score))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::strategies::fixture::{set_tail, Fixture};

    #[test]
    fn spike_with_rising_price() {
        // avg = (4 * 100 + 300) / 5 = 140; 300 > 210
        let mut fx = Fixture::new();
        set_tail(&mut fx.series.volumes, &[300.0]);
        set_tail(&mut fx.series.prices, &[10.0, 10.5]);
        let result = evaluate(&fx.input());

        assert!(result.signal("volumeIncrease"));
        assert!(result.signal("volumeUpWithPrice"));
        assert_eq!(result.score, 40);
        assert!(result.interpretation.starts_with("Healthy accumulation"));
    }

    #[test]
    fn spike_with_falling_price() {
        let mut fx = Fixture::new();
        set_tail(&mut fx.series.volumes, &[300.0]);
        set_tail(&mut fx.series.prices, &[10.0, 9.5]);
        let result = evaluate(&fx.input());

        assert!(result.signal("volumeUpPriceDown"));
        assert_eq!(result.score, -30);
        assert!(result.interpretation.starts_with("Distribution"));
    }

    #[test]
    fn dry_volume_cases() {
        // avg = (4 * 100 + 20) / 5 = 84; 20 < 58.8
        let mut fx = Fixture::new();
        set_tail(&mut fx.series.volumes, &[20.0]);
        set_tail(&mut fx.series.prices, &[10.0, 10.5]);
        assert_eq!(evaluate(&fx.input()).score, 20);

        set_tail(&mut fx.series.prices, &[10.0, 9.5]);
        let result = evaluate(&fx.input());
        assert!(result.signal("volumeDownWithPrice"));
        assert_eq!(result.score, -20);
        assert_eq!(result.interpretation, "Quiet decline on shrinking volume");
    }

    #[test]
    fn unchanged_price_scores_zero_even_on_spike() {
        let mut fx = Fixture::new();
        set_tail(&mut fx.series.volumes, &[300.0]);
        let result = evaluate(&fx.input());
        assert!(result.signal("volumeIncrease"));
        assert_eq!(result.score, 0);
    }

    #[test]
    fn signal_map_has_eight_entries() {
        let fx = Fixture::new();
        assert_eq!(evaluate(&fx.input()).signals.len(), 8);
    }

    #[test]
    fn derived_signal_points() {
        let cases = [
            ((true, false, true, false), UP_WITH_PRICE_POINTS),
            ((false, true, false, true), DOWN_WITH_PRICE_POINTS),
            ((true, false, false, true), UP_PRICE_DOWN_POINTS),
            ((false, true, true, false), DOWN_PRICE_UP_POINTS),
        ];
        for ((vi, vd, pi, pd), pts) in cases {
            let signals = VolumePriceSignals {
                volume_increase: vi,
                volume_decrease: vd,
                price_increase: pi,
                price_decrease: pd,
            };
            assert_eq!(signals.score(), pts);
        }
    }
}
