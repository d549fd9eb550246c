//! Score → recommendation bands.
//!
//! Five contiguous bands; a boundary value belongs to the higher band.

use crate::config::RecommendationBands;
use crate::domain::{Action, Confidence, Recommendation};

/// Map an overall score onto an action, confidence and description.
pub fn recommend(score: f64, bands: &RecommendationBands) -> Recommendation {
    let (action, confidence, description) = if score >= bands.strong_buy {
        (
            Action::StrongBuy,
            Confidence::High,
            "Multiple strategies agree on a strong bullish setup",
        )
    } else if score >= bands.buy {
        (
            Action::Buy,
            Confidence::MediumHigh,
            "Bullish signals outweigh bearish ones",
        )
    } else if score >= bands.hold {
        (
            Action::Hold,
            Confidence::Medium,
            "Mixed signals, no clear direction",
        )
    } else if score >= bands.sell {
        (
            Action::Sell,
            Confidence::MediumHigh,
            "Few supportive signals, downside risk dominates",
        )
    } else {
        (
            Action::StrongSell,
            Confidence::High,
            "Little to no technical support for the position",
        )
    };

    Recommendation {
        action,
        confidence,
        description: description.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn action(score: f64) -> Action {
        recommend(score, &RecommendationBands::default()).action
    }

    #[test]
    fn boundaries_belong_to_higher_band() {
        assert_eq!(action(80.0), Action::StrongBuy);
        assert_eq!(action(60.0), Action::Buy);
        assert_eq!(action(45.0), Action::Hold);
        assert_eq!(action(30.0), Action::Sell);
    }

    #[test]
    fn just_below_boundaries() {
        assert_eq!(action(79.999), Action::Buy);
        assert_eq!(action(59.999), Action::Hold);
        assert_eq!(action(44.999), Action::Sell);
        assert_eq!(action(29.999), Action::StrongSell);
    }

    #[test]
    fn extremes() {
        assert_eq!(action(0.0), Action::StrongSell);
        assert_eq!(action(100.0), Action::StrongBuy);
    }

    #[test]
    fn confidences() {
        let bands = RecommendationBands::default();
        let expected = [
            (90.0, Confidence::High),
            (70.0, Confidence::MediumHigh),
            (50.0, Confidence::Medium),
            (35.0, Confidence::MediumHigh),
            (10.0, Confidence::High),
        ];
        for (score, confidence) in expected {
            assert_eq!(recommend(score, &bands).confidence, confidence, "score {score}");
        }
    }

    #[test]
    fn custom_bands_shift_cutoffs() {
        let bands = RecommendationBands {
            strong_buy: 90.0,
            buy: 70.0,
            hold: 50.0,
            sell: 20.0,
        };
        assert_eq!(recommend(85.0, &bands).action, Action::Buy);
        assert_eq!(recommend(25.0, &bands).action, Action::Sell);
    }
}
