//! Monte Carlo equity estimation between starting hands.
//!
//! # Overview
//!
//! Equity is the expected share of a contested pot. It is estimated here by
//! sampling random boards rather than enumerating every runout:
//! 1. Deal a fresh five-card board from the deck without the known hole cards
//! 2. Find each participant's best five-card hand
//! 3. Score the showdown and accumulate
//!
//! # Example
//!
//! ```
//! use holdem_equity::cards::HoldemStartingHand;
//! use holdem_equity::equity::estimate_equity;
//!
//! let kings: HoldemStartingHand = "KsKd".parse().unwrap();
//! let connectors: HoldemStartingHand = "7h6h".parse().unwrap();
//! let (kings_share, connectors_share) = estimate_equity(&kings, &connectors, 2_000, false).unwrap();
//! assert!(kings_share > connectors_share);
//! ```

pub mod config;
pub mod estimator;

pub use config::{EquityConfig, EquityStats};
pub use estimator::{
    estimate_equity, estimate_equity_vs_random, EquityEstimator, HeadsUpEquity, HeadsUpTally,
    VsRandomEquity,
};
