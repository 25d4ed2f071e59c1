//! Error types for card construction, hand construction, configuration
//! and equity estimation.

use thiserror::Error;

use crate::cards::Card;

/// Errors raised while building a single card.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CardError {
    /// The rank symbol is not one of `A K Q J T 9 8 7 6 5 4 3 2`.
    #[error("unrecognized rank symbol {0:?}")]
    InvalidRank(String),

    /// The suit symbol is not one of `s h d c`.
    #[error("unrecognized suit symbol {0:?}")]
    InvalidSuit(String),

    /// The card string is not a two-character rank/suit pair like `As`.
    #[error("cannot parse card from {0:?}")]
    InvalidCard(String),
}

/// Errors raised while building a hand from cards.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HandError {
    /// The hand does not hold the required number of cards.
    #[error("hand must contain exactly {expected} cards, got {actual}")]
    WrongCardCount {
        /// Required number of cards.
        expected: usize,
        /// Number of cards supplied.
        actual: usize,
    },

    /// The same rank and suit appear more than once.
    #[error("duplicate card {0} is not allowed")]
    DuplicateCard(Card),

    /// Board and hole cards together hold fewer than five cards.
    #[error("need at least 5 cards to make a hand, got {0}")]
    NotEnoughCards(usize),

    /// A card inside the hand failed to parse.
    #[error(transparent)]
    Card(#[from] CardError),
}

/// Errors that can occur when validating or loading an equity configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// The trial budget is zero.
    #[error("trial count must be greater than zero")]
    ZeroTrials,

    /// The batch size is zero.
    #[error("batch size must be greater than zero")]
    ZeroBatchSize,

    /// At least one opponent is required.
    #[error("at least one opponent is required")]
    NoOpponents,

    /// The deck cannot deal a board plus this many opponent hands.
    #[error("{0} opponents cannot be dealt from a single deck")]
    TooManyOpponents(usize),

    /// The config file could not be read.
    #[error("cannot read config: {0}")]
    Io(String),

    /// The config file is not valid JSON for this struct.
    #[error("cannot parse config: {0}")]
    Parse(String),
}

/// Errors returned by the equity estimators.
#[derive(Debug, Error)]
pub enum EquityError {
    /// A hand could not be built or evaluated.
    #[error(transparent)]
    Hand(#[from] HandError),

    /// The estimator configuration is invalid.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Both starting hands hold the same card.
    #[error("card {0} is held by both starting hands")]
    OverlappingHands(Card),

    /// The worker pool could not be created.
    #[error("cannot build worker pool: {0}")]
    ThreadPool(String),
}

impl From<rayon::ThreadPoolBuildError> for EquityError {
    fn from(err: rayon::ThreadPoolBuildError) -> Self {
        EquityError::ThreadPool(err.to_string())
    }
}
