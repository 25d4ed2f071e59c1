//! Cards, decks and starting hands.
//!
//! ## Modules
//!
//! - `card`: Rank, suit and card representations
//! - `deck`: The 52-card deck with dealing
//! - `starting_hand`: A player's two hole cards

pub mod card;
pub mod deck;
pub mod starting_hand;

pub use card::{parse_cards, Card, Rank, Suit};
pub use deck::Deck;
pub use starting_hand::HoldemStartingHand;
