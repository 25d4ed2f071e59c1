//! A player's two private cards.

use std::fmt;
use std::str::FromStr;

use rustc_hash::FxHashSet;

use super::card::{parse_cards, Card};
use crate::error::HandError;

/// Fail with `DuplicateCard` if any card appears twice.
pub(crate) fn ensure_distinct(cards: &[Card]) -> Result<(), HandError> {
    let mut seen = FxHashSet::default();
    for &card in cards {
        if !seen.insert(card) {
            return Err(HandError::DuplicateCard(card));
        }
    }
    Ok(())
}

/// Two distinct hole cards, higher rank first.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct HoldemStartingHand {
    cards: [Card; 2],
}

impl HoldemStartingHand {
    /// Create a starting hand from exactly two distinct cards.
    pub fn new(cards: &[Card]) -> Result<Self, HandError> {
        let &[first, second] = cards else {
            return Err(HandError::WrongCardCount {
                expected: 2,
                actual: cards.len(),
            });
        };
        ensure_distinct(cards)?;

        // stable: equal ranks keep input order
        let cards = if second.rank() > first.rank() {
            [second, first]
        } else {
            [first, second]
        };
        Ok(Self { cards })
    }

    /// Both cards, higher rank first.
    pub fn cards(&self) -> [Card; 2] {
        self.cards
    }

    /// Check if both cards share a suit.
    pub fn is_suited(&self) -> bool {
        self.cards[0].suit() == self.cards[1].suit()
    }

    /// Check if both cards share a rank.
    pub fn is_pair(&self) -> bool {
        self.cards[0].rank() == self.cards[1].rank()
    }

    /// Suit-agnostic class of the hand: `"AA"`, `"AKs"` or `"AKo"`.
    pub fn class_label(&self) -> String {
        let (high, low) = (self.cards[0].rank(), self.cards[1].rank());
        if self.is_pair() {
            format!("{}{}", high, low)
        } else if self.is_suited() {
            format!("{}{}s", high, low)
        } else {
            format!("{}{}o", high, low)
        }
    }

    /// Check if a card is one of these hole cards.
    pub fn contains(&self, card: Card) -> bool {
        self.cards.contains(&card)
    }
}

impl FromStr for HoldemStartingHand {
    type Err = HandError;

    /// Parse hole cards from a string like "AhKs" or "Ah Ks".
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(&parse_cards(s)?)
    }
}

impl fmt::Display for HoldemStartingHand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.cards[0], self.cards[1])
    }
}

impl fmt::Debug for HoldemStartingHand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self)
    }
}
