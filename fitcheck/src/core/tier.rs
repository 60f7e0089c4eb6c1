//! Score tiers shared by every test.

use serde::{Deserialize, Serialize};

/// One of four fixed score bands, ordered `Minimal < Average < Good < Excellent`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Tier {
    Minimal,
    Average,
    Good,
    Excellent,
}

impl Tier {
    /// All tiers from highest to lowest.
    pub const DESCENDING: [Tier; 4] = [Tier::Excellent, Tier::Good, Tier::Average, Tier::Minimal];

    /// Categorical score for this tier.
    pub fn score(self) -> u8 {
        match self {
            Tier::Excellent => 100,
            Tier::Good => 75,
            Tier::Average => 50,
            Tier::Minimal => 25,
        }
    }

    /// Tier for an exact categorical score, if it is one.
    pub fn from_score(score: u8) -> Option<Self> {
        Self::DESCENDING
            .into_iter()
            .find(|tier| tier.score() == score)
    }

    pub fn label(self) -> &'static str {
        match self {
            Tier::Excellent => "Excellent",
            Tier::Good => "Good",
            Tier::Average => "Average",
            Tier::Minimal => "Minimal",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scores_follow_tier_order() {
        let scores: Vec<u8> = Tier::DESCENDING.iter().map(|tier| tier.score()).collect();
        assert_eq!(scores, vec![100, 75, 50, 25]);
        assert!(Tier::Excellent > Tier::Good);
        assert!(Tier::Average > Tier::Minimal);
    }

    #[test]
    fn from_score_accepts_only_tier_scores() {
        assert_eq!(Tier::from_score(75), Some(Tier::Good));
        assert_eq!(Tier::from_score(25), Some(Tier::Minimal));
        assert_eq!(Tier::from_score(60), None);
        assert_eq!(Tier::from_score(0), None);
    }
}
