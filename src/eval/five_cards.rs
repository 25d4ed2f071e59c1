//! Five-card hand classification and comparison.
//!
//! A `FiveCardsHand` keeps its cards in canonical order: cards sharing a
//! rank are grouped, larger groups first, then groups by descending rank.
//! Every predicate below reads the numeric ranks in that order, so
//! e.g. a full house always looks like `[t, t, t, p, p]` and quads like
//! `[q, q, q, q, k]`.

use std::cmp::{Ordering, Reverse};
use std::fmt;

use super::category::HandCategory;
use crate::cards::starting_hand::ensure_distinct;
use crate::cards::{parse_cards, Card};
use crate::error::HandError;

/// Numeric ranks of the wheel (A-2-3-4-5) in canonical order.
pub const WHEEL: [u8; 5] = [14, 5, 4, 3, 2];

/// Exactly five distinct cards in canonical order.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct FiveCardsHand {
    cards: [Card; 5],
    category: HandCategory,
}

impl FiveCardsHand {
    /// Build a hand from exactly five distinct cards.
    pub fn new(cards: &[Card]) -> Result<Self, HandError> {
        let mut cards: [Card; 5] = cards.try_into().map_err(|_| HandError::WrongCardCount {
            expected: 5,
            actual: cards.len(),
        })?;
        ensure_distinct(&cards)?;

        let mut counts = [0u8; 15];
        for card in &cards {
            counts[card.value() as usize] += 1;
        }
        // stable, so cards within a group keep their input order
        cards.sort_by_key(|c| (Reverse(counts[c.value() as usize]), Reverse(c.value())));

        let category = classify(&cards);
        Ok(Self { cards, category })
    }

    /// Cards in canonical order.
    pub fn cards(&self) -> &[Card; 5] {
        &self.cards
    }

    /// Numeric ranks in canonical order.
    pub fn ranks(&self) -> [u8; 5] {
        self.cards.map(|c| c.value())
    }

    /// All five cards share one suit.
    pub fn is_flush(&self) -> bool {
        is_flush(&self.cards)
    }

    /// Five consecutive ranks, including the wheel.
    pub fn is_straight(&self) -> bool {
        is_straight(&self.ranks())
    }

    /// Ranks are exactly A-5-4-3-2.
    pub fn is_wheel(&self) -> bool {
        self.ranks() == WHEEL
    }

    /// Hand category.
    pub fn category(&self) -> HandCategory {
        self.category
    }

    /// Coarse strength of the category (0-8).
    pub fn strength(&self) -> u8 {
        self.category.strength()
    }

    /// Compare hand strength. Suits never break ties.
    ///
    /// Within a category the canonical ranks are compared position by
    /// position, except that a wheel is the lowest straight.
    pub fn compare(&self, other: &Self) -> Ordering {
        self.strength()
            .cmp(&other.strength())
            .then_with(|| match (self.is_wheel(), other.is_wheel()) {
                (true, true) => Ordering::Equal,
                (true, false) => Ordering::Less,
                (false, true) => Ordering::Greater,
                (false, false) => self.ranks().cmp(&other.ranks()),
            })
    }

    /// Showdown share against `other`: 1.0 win, 0.5 tie, 0.0 loss.
    pub fn equity_against(&self, other: &Self) -> f64 {
        match self.compare(other) {
            Ordering::Greater => 1.0,
            Ordering::Equal => 0.5,
            Ordering::Less => 0.0,
        }
    }

    /// Parse a hand from a string like "As Ks Qs Js Ts".
    pub fn parse(s: &str) -> Result<Self, HandError> {
        Self::new(&parse_cards(s)?)
    }
}

fn is_flush(cards: &[Card; 5]) -> bool {
    cards.iter().all(|c| c.suit() == cards[0].suit())
}

fn is_straight(r: &[u8; 5]) -> bool {
    *r == WHEEL || r.windows(2).all(|w| w[0] == w[1] + 1)
}

/// Classify canonically ordered cards. First matching rule wins.
fn classify(cards: &[Card; 5]) -> HandCategory {
    let r = cards.map(|c| c.value());
    let flush = is_flush(cards);
    let straight = is_straight(&r);

    if flush && straight {
        HandCategory::StraightFlush
    } else if r[0] == r[3] || r[1] == r[4] {
        HandCategory::Quads
    } else if (r[0] == r[2] && r[3] == r[4]) || (r[0] == r[1] && r[2] == r[4]) {
        HandCategory::FullHouse
    } else if flush {
        HandCategory::Flush
    } else if straight {
        HandCategory::Straight
    } else if r[0] == r[2] {
        HandCategory::Trips
    } else if (r[0] == r[1] && r[2] == r[3])
        || (r[1] == r[2] && r[3] == r[4])
        || (r[0] == r[1] && r[3] == r[4])
    {
        HandCategory::TwoPair
    } else if r.windows(2).any(|w| w[0] == w[1]) {
        HandCategory::Pair
    } else {
        HandCategory::HighCard
    }
}

impl fmt::Display for FiveCardsHand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for card in &self.cards {
            write!(f, "{}", card)?;
        }
        Ok(())
    }
}

impl fmt::Debug for FiveCardsHand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self, self.category)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hand(s: &str) -> FiveCardsHand {
        FiveCardsHand::parse(s).unwrap()
    }

    #[test]
    fn test_rejects_wrong_count() {
        assert_eq!(
            FiveCardsHand::parse("As Ks Qs Js"),
            Err(HandError::WrongCardCount { expected: 5, actual: 4 })
        );
        assert_eq!(
            FiveCardsHand::parse("As Ks Qs Js Ts 9s"),
            Err(HandError::WrongCardCount { expected: 5, actual: 6 })
        );
        assert!(FiveCardsHand::new(&[]).is_err());
    }

    #[test]
    fn test_rejects_duplicates() {
        let dup: Card = "Ks".parse().unwrap();
        assert_eq!(
            FiveCardsHand::parse("As Ks Qs Ks Ts"),
            Err(HandError::DuplicateCard(dup))
        );
    }

    #[test]
    fn test_canonical_order() {
        // two pair: higher pair, lower pair, kicker
        assert_eq!(hand("4c Kh 4d Ah Kd").ranks(), [13, 13, 4, 4, 14]);
        // full house: trips before pair even when the pair ranks higher
        assert_eq!(hand("Ah 8s Ad 8c 8h").ranks(), [8, 8, 8, 14, 14]);
        // within a group the input order is kept
        let h = hand("9c 2d 9h 5s 9s");
        assert_eq!(h.to_string(), "9c9h9s5s2d");
    }

    #[test]
    fn test_classification() {
        let cases = [
            ("Ah 2h 5h 4h 3h", HandCategory::StraightFlush),
            ("As Ad Ah Ac Ks", HandCategory::Quads),
            ("Ks Ah Ad Ac Kd", HandCategory::FullHouse),
            ("As Ks 9s 7s 2s", HandCategory::Flush),
            ("Ts 9d 8h 7c 6s", HandCategory::Straight),
            ("5s 4d 3h 2c As", HandCategory::Straight),
            ("As Ad Ah Kc Js", HandCategory::Trips),
            ("As Ad Kh Kc Js", HandCategory::TwoPair),
            ("Ah Ad 5h 4c Kd", HandCategory::Pair),
            ("As Kd Qh Jc 9s", HandCategory::HighCard),
        ];
        for (cards, expected) in cases {
            assert_eq!(hand(cards).category(), expected, "{}", cards);
        }
        assert_eq!(hand("Ah Ad 5h 4c Kd").strength(), 1);
    }

    #[test]
    fn test_predicates() {
        let wheel = hand("Ah 2s 5c 3h 4s");
        assert!(wheel.is_straight());
        assert!(wheel.is_wheel());
        assert!(!wheel.is_flush());

        let broken = hand("Ah Ks Qc Jh 9s");
        assert!(!broken.is_straight());
        assert!(hand("2h 9h 5h 4h Kh").is_flush());
        // no wrap-around straights
        assert!(!hand("Qs Kd Ah 2c 3s").is_straight());
    }

    #[test]
    fn test_category_precedence() {
        let ladder = [
            hand("9s 8s 7s 6s 5s"),
            hand("2h 2s 2c 2d Ks"),
            hand("9h 9s 9c 8h 8s"),
            hand("Ah 8h 5h 4h Kh"),
            hand("Ts 9d 8h 7c 6s"),
            hand("As Ad Ah Kc Js"),
            hand("As Ad Kh Kc Js"),
            hand("Ah Ad 5h 4c Kd"),
            hand("As Kd Qh Jc 9s"),
        ];
        for (i, stronger) in ladder.iter().enumerate() {
            for weaker in &ladder[i + 1..] {
                assert_eq!(stronger.equity_against(weaker), 1.0, "{:?} vs {:?}", stronger, weaker);
                assert_eq!(weaker.equity_against(stronger), 0.0);
            }
        }
    }

    #[test]
    fn test_wheel_is_lowest_straight() {
        let steel_wheel = hand("Ah 2h 3h 4h 5h");
        assert_eq!(steel_wheel.category(), HandCategory::StraightFlush);
        assert_eq!(steel_wheel.equity_against(&hand("9c 8c 7c 6c 5c")), 0.0);

        assert_eq!(hand("9h 8s 7c 6h 5s").equity_against(&hand("Ah 2s 5c 3h 4s")), 1.0);
        assert_eq!(hand("Ah 2s 5c 3h 4s").equity_against(&hand("Ad 2d 5s 3c 4h")), 0.5);
        assert_eq!(hand("6h 2s 5c 3h 4s").equity_against(&hand("Ah 2s 5c 3d 4c")), 1.0);
    }

    #[test]
    fn test_suits_do_not_break_ties() {
        let hearts = hand("Ah 8h 5h 4h Kh");
        let diamonds = hand("Ad Kd 5d 4d 8d");
        assert_eq!(hearts.equity_against(&diamonds), 0.5);
        assert_eq!(hearts.compare(&diamonds), Ordering::Equal);
    }

    #[test]
    fn test_kickers() {
        // nines full beats eights full
        assert_eq!(hand("9h 9s 9c 8h 8s").equity_against(&hand("9h 9s 8c 8h 8s")), 1.0);
        // quads beat a full house
        assert_eq!(hand("2h 2s 2c 2d Ks").equity_against(&hand("9h 9s 9c 8h 8s")), 1.0);
        assert_eq!(hand("Ah As Ad Kh Ks").equity_against(&hand("2h 2s 2c 2d Ks")), 0.0);
        // same pair, kicker decides
        assert_eq!(hand("Ah Ad Kh 4c 3d").equity_against(&hand("As Ac Qh Jc 9d")), 1.0);
        // same two pair, kicker decides
        assert_eq!(hand("Kh Kd 7h 7c 2d").equity_against(&hand("Ks Kc 7s 7d 3d")), 0.0);
    }
}
