//! Mock Data
//!
//! Hard-coded sample picks for the dashboard's featured section. These stand
//! in for backend responses the prediction services do not serve yet.

use crate::api::Domain;

/// A featured AI pick shown on the dashboard.
#[derive(Debug, Clone, PartialEq)]
pub struct FeaturedPick {
    pub title: &'static str,
    pub domain: Domain,
    pub result: &'static str,
    /// Confidence score in `0.0..=1.0`
    pub confidence: f64,
    pub model_version: &'static str,
    pub summary: &'static str,
}

/// Featured picks for the dashboard widgets.
pub fn featured_picks() -> Vec<FeaturedPick> {
    vec![
        FeaturedPick {
            title: "Arsenal vs Chelsea",
            domain: Domain::Sports,
            result: "Home win",
            confidence: 0.78,
            model_version: "sports-v2.1.0",
            summary: "Strong home form (WWWDW) against a side missing two starters.",
        },
        FeaturedPick {
            title: "Lakers vs Celtics",
            domain: Domain::Sports,
            result: "Away win",
            confidence: 0.61,
            model_version: "sports-v2.1.0",
            summary: "Back-to-back fatigue on the home side tilts a close matchup.",
        },
        FeaturedPick {
            title: "NVDA",
            domain: Domain::Finance,
            result: "Up 2.4% over 7 days",
            confidence: 0.72,
            model_version: "finance-v1.4.2",
            summary: "RSI cooling off from overbought while volume stays elevated.",
        },
        FeaturedPick {
            title: "BTC-USD",
            domain: Domain::Finance,
            result: "Sideways, high volatility",
            confidence: 0.54,
            model_version: "finance-v1.4.2",
            summary: "MACD crossover unconfirmed; wide intraday ranges expected.",
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_featured_picks_are_present_for_both_domains() {
        let picks = featured_picks();
        assert!(!picks.is_empty());
        assert!(picks.iter().any(|p| p.domain == Domain::Sports));
        assert!(picks.iter().any(|p| p.domain == Domain::Finance));
    }

    #[test]
    fn test_featured_pick_confidences_are_normalized() {
        for pick in featured_picks() {
            assert!(
                (0.0..=1.0).contains(&pick.confidence),
                "{} out of range",
                pick.title
            );
        }
    }
}
