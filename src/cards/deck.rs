//! A deck of 52 playing cards with dead-card removal and dealing.

use std::fmt;

use rand::seq::SliceRandom;
use rand::Rng;

use super::card::{Card, Rank, Suit};

/// A deck of playing cards.
#[derive(Clone)]
pub struct Deck {
    /// Cards in current order.
    cards: Vec<Card>,
    /// Index of next card to deal.
    index: usize,
}

impl Deck {
    /// Build all 52 distinct cards, rank-major from Ace down, suits `s h d c`.
    pub fn full() -> Self {
        let cards = Rank::ALL
            .iter()
            .flat_map(|&rank| Suit::ALL.iter().map(move |&suit| Card::new(rank, suit)))
            .collect();
        Self { cards, index: 0 }
    }

    /// Create a full deck with specific cards removed.
    pub fn without(dead_cards: &[Card]) -> Self {
        let mut deck = Self::full();
        deck.cards.retain(|card| !dead_cards.contains(card));
        deck
    }

    /// Shuffle the undealt cards in the deck.
    pub fn shuffle<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.cards[self.index..].shuffle(rng);
    }

    /// Deal the next card from the deck.
    pub fn deal(&mut self) -> Option<Card> {
        let card = self.cards.get(self.index).copied()?;
        self.index += 1;
        Some(card)
    }

    /// Deal up to `n` cards.
    pub fn deal_n(&mut self, n: usize) -> Vec<Card> {
        let end = (self.index + n).min(self.cards.len());
        let dealt = self.cards[self.index..end].to_vec();
        self.index = end;
        dealt
    }

    /// Get the number of undealt cards.
    pub fn remaining(&self) -> usize {
        self.cards.len() - self.index
    }

    /// Get undealt cards as a slice.
    pub fn remaining_cards(&self) -> &[Card] {
        &self.cards[self.index..]
    }

    /// Put every dealt card back without changing the order.
    pub fn reset(&mut self) {
        self.index = 0;
    }
}

impl Default for Deck {
    fn default() -> Self {
        Self::full()
    }
}

impl fmt::Debug for Deck {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Deck({} remaining)", self.remaining())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use rustc_hash::FxHashSet;

    #[test]
    fn test_full_deck_is_distinct() {
        let deck = Deck::full();
        assert_eq!(deck.remaining(), 52);

        let unique: FxHashSet<Card> = deck.remaining_cards().iter().copied().collect();
        assert_eq!(unique.len(), 52);
        assert_eq!(deck.remaining_cards()[0].to_string(), "As");
        assert_eq!(deck.remaining_cards()[51].to_string(), "2c");
    }

    #[test]
    fn test_deal() {
        let mut deck = Deck::full();
        let card = deck.deal().unwrap();
        assert_eq!(card.to_string(), "As");
        assert_eq!(deck.remaining(), 51);

        let cards = deck.deal_n(60);
        assert_eq!(cards.len(), 51);
        assert_eq!(deck.remaining(), 0);
        assert!(deck.deal().is_none());

        deck.reset();
        assert_eq!(deck.remaining(), 52);
    }

    #[test]
    fn test_deck_without() {
        let dead: Vec<Card> = vec!["As".parse().unwrap(), "Ah".parse().unwrap()];
        let deck = Deck::without(&dead);
        assert_eq!(deck.remaining(), 50);
        assert!(dead.iter().all(|c| !deck.remaining_cards().contains(c)));
    }

    #[test]
    fn test_shuffle_is_seeded_permutation() {
        let mut a = Deck::full();
        let mut b = Deck::full();
        a.shuffle(&mut StdRng::seed_from_u64(7));
        b.shuffle(&mut StdRng::seed_from_u64(7));
        assert_eq!(a.remaining_cards(), b.remaining_cards());

        let unique: FxHashSet<Card> = a.remaining_cards().iter().copied().collect();
        assert_eq!(unique.len(), 52);
        assert_ne!(a.remaining_cards(), Deck::full().remaining_cards());
    }
}
