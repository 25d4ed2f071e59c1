//! Poker hand evaluation.
//!
//! ## Modules
//!
//! - `combinations`: k-subsets of an ordered sequence
//! - `category`: Hand rank categories
//! - `five_cards`: Five-card hand classification and comparison
//! - `best_hand`: Best five-card hand from hole cards and a board

pub mod best_hand;
pub mod category;
pub mod combinations;
pub mod five_cards;

pub use best_hand::{best_five_cards_hand, best_of_pool};
pub use category::HandCategory;
pub use combinations::{combinations, Combinations};
pub use five_cards::FiveCardsHand;
