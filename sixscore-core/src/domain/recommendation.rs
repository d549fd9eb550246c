//! Discrete trading recommendation produced from the overall score.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Recommended action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Action {
    StrongBuy,
    Buy,
    Hold,
    Sell,
    StrongSell,
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Action::StrongBuy => "strong-buy",
            Action::Buy => "buy",
            Action::Hold => "hold",
            Action::Sell => "sell",
            Action::StrongSell => "strong-sell",
        };
        f.write_str(s)
    }
}

/// Confidence attached to a recommendation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Confidence {
    Low,
    Medium,
    MediumHigh,
    High,
}

impl fmt::Display for Confidence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Confidence::Low => "low",
            Confidence::Medium => "medium",
            Confidence::MediumHigh => "medium-high",
            Confidence::High => "high",
        };
        f.write_str(s)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recommendation {
    pub action: Action,
    pub confidence: Confidence,
    pub description: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kebab_case_on_the_wire() {
        let rec = Recommendation {
            action: Action::StrongBuy,
            confidence: Confidence::MediumHigh,
            description: "x".into(),
        };
        let json = serde_json::to_value(&rec).unwrap();
        assert_eq!(json["action"], "strong-buy");
        assert_eq!(json["confidence"], "medium-high");
    }

    #[test]
    fn display_matches_serde() {
        for action in [
            Action::StrongBuy,
            Action::Buy,
            Action::Hold,
            Action::Sell,
            Action::StrongSell,
        ] {
            let json = serde_json::to_string(&action).unwrap();
            assert_eq!(json, format!("\"{action}\""));
        }
    }
}
