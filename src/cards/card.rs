//! Card representation for poker.
//!
//! This module provides the fundamental card types used throughout the crate:
//! - `Rank`: one of 13 ranks, Ace highest
//! - `Suit`: one of 4 suits, unordered
//! - `Card`: a single playing card with rank and suit

use std::fmt;
use std::str::FromStr;

use crate::error::CardError;

/// Rank of a card. The discriminant is the numeric rank used for comparison.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Rank {
    Two = 2,
    Three = 3,
    Four = 4,
    Five = 5,
    Six = 6,
    Seven = 7,
    Eight = 8,
    Nine = 9,
    Ten = 10,
    Jack = 11,
    Queen = 12,
    King = 13,
    Ace = 14,
}

impl Rank {
    /// All ranks from Ace down to Two.
    pub const ALL: [Rank; 13] = [
        Rank::Ace,
        Rank::King,
        Rank::Queen,
        Rank::Jack,
        Rank::Ten,
        Rank::Nine,
        Rank::Eight,
        Rank::Seven,
        Rank::Six,
        Rank::Five,
        Rank::Four,
        Rank::Three,
        Rank::Two,
    ];

    /// Numeric rank (2-14, Ace is 14).
    #[inline]
    pub fn value(self) -> u8 {
        self as u8
    }

    /// Symbol used in card notation.
    pub fn symbol(self) -> char {
        match self {
            Rank::Ace => 'A',
            Rank::King => 'K',
            Rank::Queen => 'Q',
            Rank::Jack => 'J',
            Rank::Ten => 'T',
            Rank::Nine => '9',
            Rank::Eight => '8',
            Rank::Seven => '7',
            Rank::Six => '6',
            Rank::Five => '5',
            Rank::Four => '4',
            Rank::Three => '3',
            Rank::Two => '2',
        }
    }

    /// Parse a rank from its symbol character, in either case.
    pub fn from_char(c: char) -> Option<Self> {
        let c = c.to_ascii_uppercase();
        Rank::ALL.iter().copied().find(|r| r.symbol() == c)
    }

    /// Parse a rank from a one-character symbol such as `"A"` or `"t"`.
    pub fn from_symbol(symbol: &str) -> Result<Self, CardError> {
        let mut chars = symbol.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => {
                Self::from_char(c).ok_or_else(|| CardError::InvalidRank(symbol.to_string()))
            }
            _ => Err(CardError::InvalidRank(symbol.to_string())),
        }
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// Suit of a card. Suits carry no order; they only matter for flushes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Suit {
    Spades,
    Hearts,
    Diamonds,
    Clubs,
}

impl Suit {
    /// All suits in notation order `s h d c`.
    pub const ALL: [Suit; 4] = [Suit::Spades, Suit::Hearts, Suit::Diamonds, Suit::Clubs];

    /// Symbol used in card notation.
    pub fn symbol(self) -> char {
        match self {
            Suit::Spades => 's',
            Suit::Hearts => 'h',
            Suit::Diamonds => 'd',
            Suit::Clubs => 'c',
        }
    }

    /// Parse a suit from its symbol character, in either case.
    pub fn from_char(c: char) -> Option<Self> {
        let c = c.to_ascii_lowercase();
        Suit::ALL.iter().copied().find(|s| s.symbol() == c)
    }

    /// Parse a suit from a one-character symbol such as `"s"`.
    pub fn from_symbol(symbol: &str) -> Result<Self, CardError> {
        let mut chars = symbol.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => {
                Self::from_char(c).ok_or_else(|| CardError::InvalidSuit(symbol.to_string()))
            }
            _ => Err(CardError::InvalidSuit(symbol.to_string())),
        }
    }
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// A single playing card.
///
/// Two cards are equal iff rank and suit both match.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Card {
    rank: Rank,
    suit: Suit,
}

impl Card {
    /// Create a new card.
    #[inline]
    pub const fn new(rank: Rank, suit: Suit) -> Self {
        Self { rank, suit }
    }

    /// Create a card from rank and suit symbols, e.g. `("A", "s")`.
    pub fn from_symbols(rank: &str, suit: &str) -> Result<Self, CardError> {
        Ok(Self::new(Rank::from_symbol(rank)?, Suit::from_symbol(suit)?))
    }

    /// Get the card's rank.
    #[inline]
    pub fn rank(&self) -> Rank {
        self.rank
    }

    /// Get the card's suit.
    #[inline]
    pub fn suit(&self) -> Suit {
        self.suit
    }

    /// Numeric rank (2-14).
    #[inline]
    pub fn value(&self) -> u8 {
        self.rank.value()
    }

    /// Copy of this card with a different rank.
    pub fn with_rank(self, rank: Rank) -> Self {
        Self { rank, ..self }
    }

    /// Copy of this card with a different suit.
    pub fn with_suit(self, suit: Suit) -> Self {
        Self { suit, ..self }
    }

    /// Copy of this card with the rank given by `symbol`.
    ///
    /// Fails on an unrecognized symbol instead of keeping the old rank.
    pub fn with_rank_symbol(self, symbol: &str) -> Result<Self, CardError> {
        Ok(self.with_rank(Rank::from_symbol(symbol)?))
    }

    /// Copy of this card with the suit given by `symbol`.
    pub fn with_suit_symbol(self, symbol: &str) -> Result<Self, CardError> {
        Ok(self.with_suit(Suit::from_symbol(symbol)?))
    }
}

impl FromStr for Card {
    type Err = CardError;

    /// Parse a card from a string like "As", "Kh", "2c".
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        let (Some(r), Some(su), None) = (chars.next(), chars.next(), chars.next()) else {
            return Err(CardError::InvalidCard(s.to_string()));
        };
        let rank = Rank::from_char(r).ok_or_else(|| CardError::InvalidRank(r.to_string()))?;
        let suit = Suit::from_char(su).ok_or_else(|| CardError::InvalidSuit(su.to_string()))?;
        Ok(Self::new(rank, suit))
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.rank, self.suit)
    }
}

impl fmt::Debug for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self)
    }
}

/// Parse a run of cards like "AhKs Qd" into a vector.
pub fn parse_cards(s: &str) -> Result<Vec<Card>, CardError> {
    let compact: Vec<char> = s.chars().filter(|c| !c.is_whitespace()).collect();
    if compact.len() % 2 != 0 {
        return Err(CardError::InvalidCard(s.to_string()));
    }
    compact
        .chunks(2)
        .map(|pair| pair.iter().collect::<String>().parse())
        .collect()
}
