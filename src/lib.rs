//! # Hold'em Equity
//!
//! Five-card poker hand evaluation, best-hand selection over hole cards plus
//! a board, and Monte Carlo equity estimation between Texas Hold'em starting
//! hands.
//!
//! ## Quick Start
//!
//! ```
//! use holdem_equity::cards::{parse_cards, HoldemStartingHand};
//! use holdem_equity::eval::{best_five_cards_hand, HandCategory};
//!
//! let aces: HoldemStartingHand = "AhAd".parse().unwrap();
//! let board = parse_cards("As Jh Th 7h 4h").unwrap();
//!
//! let best = best_five_cards_hand(&board, &aces).unwrap();
//! assert_eq!(best.category(), HandCategory::Flush);
//! ```
//!
//! ## Modules
//!
//! - [`cards`]: Cards, the deck and starting hands
//! - [`eval`]: Hand classification and best-hand selection
//! - [`equity`]: Monte Carlo equity estimators
//! - [`error`]: Error types
//!
//! ## Architecture
//!
//! ```text
//!   Card ──► Combinations ──┐
//!     │                     ▼
//!     └────► FiveCardsHand ──► best_five_cards_hand ──► EquityEstimator
//!                                                       (rayon batches)
//! ```

#![warn(missing_docs)]

/// Card, deck and starting hand types.
pub mod cards;

/// Hand evaluation.
pub mod eval;

/// Equity estimation.
pub mod equity;

/// Error types.
pub mod error;

// Re-export commonly used types at crate root for convenience
pub use cards::{Card, Deck, HoldemStartingHand, Rank, Suit};
pub use equity::{estimate_equity, estimate_equity_vs_random, EquityConfig, EquityEstimator};
pub use error::{CardError, ConfigError, EquityError, HandError};
pub use eval::{best_five_cards_hand, FiveCardsHand, HandCategory};
