//! Hand rank categories.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Hand rank categories, ordered from worst to best.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum HandCategory {
    HighCard = 0,
    Pair = 1,
    TwoPair = 2,
    Trips = 3,
    Straight = 4,
    Flush = 5,
    FullHouse = 6,
    Quads = 7,
    StraightFlush = 8,
}

impl HandCategory {
    /// All categories from strongest to weakest.
    pub const ALL: [HandCategory; 9] = [
        HandCategory::StraightFlush,
        HandCategory::Quads,
        HandCategory::FullHouse,
        HandCategory::Flush,
        HandCategory::Straight,
        HandCategory::Trips,
        HandCategory::TwoPair,
        HandCategory::Pair,
        HandCategory::HighCard,
    ];

    /// Coarse strength, 8 for a straight flush down to 0 for high card.
    #[inline]
    pub fn strength(self) -> u8 {
        self as u8
    }

    /// Get the category name.
    pub fn name(self) -> &'static str {
        match self {
            HandCategory::HighCard => "High Card",
            HandCategory::Pair => "Pair",
            HandCategory::TwoPair => "Two Pair",
            HandCategory::Trips => "Trips",
            HandCategory::Straight => "Straight",
            HandCategory::Flush => "Flush",
            HandCategory::FullHouse => "Full House",
            HandCategory::Quads => "Quads",
            HandCategory::StraightFlush => "Straight Flush",
        }
    }
}

impl fmt::Display for HandCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strength_matches_order() {
        let strengths: Vec<u8> = HandCategory::ALL.iter().map(|c| c.strength()).collect();
        assert_eq!(strengths, vec![8, 7, 6, 5, 4, 3, 2, 1, 0]);
        assert!(HandCategory::Quads > HandCategory::FullHouse);
        assert_eq!(HandCategory::FullHouse.to_string(), "Full House");
    }
}
