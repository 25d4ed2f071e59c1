//! Monte Carlo equity estimation.
//!
//! Each trial deals a fresh five-card board from a deck without the known
//! hole cards, finds every participant's best five-card hand and scores the
//! showdown. Two modes are supported:
//! - **Head-to-head**: two fixed starting hands; a tie gives each side half.
//! - **One vs N random**: one fixed hand against N opponents dealt from the
//!   same shuffled deck. The fixed hand scores `1 / (1 + ties)` when no
//!   opponent beats it and nothing otherwise.
//!
//! Trials are grouped into batches. Every batch owns a `StdRng` whose seed is
//! drawn up front from a master generator seeded with the base seed, so
//! batches can run on any rayon worker in any order and a seeded run still
//! reproduces exactly. Runs with neighbouring base seeds share no batches.

use std::cmp::Ordering;
use std::time::Instant;

use indicatif::{ProgressBar, ProgressStyle};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rayon::prelude::*;
use serde::Serialize;

use super::config::{EquityConfig, EquityStats};
use crate::cards::{Deck, HoldemStartingHand};
use crate::error::{ConfigError, EquityError, HandError};
use crate::eval::{best_five_cards_hand, FiveCardsHand};

/// Cards dealt to the board in every trial.
pub const BOARD_SIZE: usize = 5;

/// Most opponents a single deck can serve alongside the board and hero.
pub const MAX_OPPONENTS: usize = (52 - 2 - BOARD_SIZE) / 2;

/// Raw head-to-head showdown counts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct HeadsUpTally {
    /// Trials won by the first hand.
    pub wins1: u64,
    /// Trials won by the second hand.
    pub wins2: u64,
    /// Trials split.
    pub ties: u64,
}

impl HeadsUpTally {
    /// Record one showdown from the first hand's point of view.
    pub fn record(&mut self, outcome: Ordering) {
        match outcome {
            Ordering::Greater => self.wins1 += 1,
            Ordering::Less => self.wins2 += 1,
            Ordering::Equal => self.ties += 1,
        }
    }

    /// Combine two tallies.
    pub fn merge(self, other: Self) -> Self {
        Self {
            wins1: self.wins1 + other.wins1,
            wins2: self.wins2 + other.wins2,
            ties: self.ties + other.ties,
        }
    }

    /// Total trials recorded.
    pub fn trials(&self) -> u64 {
        self.wins1 + self.wins2 + self.ties
    }
}

/// Result of a head-to-head estimate.
#[derive(Debug, Clone, Serialize)]
pub struct HeadsUpEquity {
    /// Share of the pot won by the first hand (ties count half).
    pub equity1: f64,
    /// Share of the pot won by the second hand (ties count half).
    pub equity2: f64,
    /// Showdown counts behind the two shares.
    pub tally: HeadsUpTally,
    /// Run statistics.
    pub stats: EquityStats,
}

impl HeadsUpEquity {
    fn new(tally: HeadsUpTally, stats: EquityStats) -> Self {
        let trials = tally.trials().max(1) as f64;
        let half_ties = tally.ties as f64 * 0.5;
        Self {
            equity1: (tally.wins1 as f64 + half_ties) / trials,
            equity2: (tally.wins2 as f64 + half_ties) / trials,
            tally,
            stats,
        }
    }

    /// Both shares as a pair.
    pub fn as_pair(&self) -> (f64, f64) {
        (self.equity1, self.equity2)
    }
}

/// Result of a one-vs-N-random estimate.
#[derive(Debug, Clone, Serialize)]
pub struct VsRandomEquity {
    /// Expected pot share of the fixed hand.
    pub equity: f64,
    /// Opponents dealt per trial.
    pub num_opponents: usize,
    /// Run statistics.
    pub stats: EquityStats,
}

/// Monte Carlo equity estimator.
///
/// # Example
/// ```
/// use holdem_equity::cards::HoldemStartingHand;
/// use holdem_equity::equity::{EquityConfig, EquityEstimator};
///
/// let aces: HoldemStartingHand = "AhAd".parse().unwrap();
/// let suited: HoldemStartingHand = "QcTc".parse().unwrap();
/// let estimator = EquityEstimator::new(EquityConfig::default().with_trials(2_000).with_seed(1));
/// let result = estimator.heads_up(&aces, &suited).unwrap();
/// assert!(result.equity1 > result.equity2);
/// ```
#[derive(Debug, Clone, Default)]
pub struct EquityEstimator {
    config: EquityConfig,
}

impl EquityEstimator {
    /// Create an estimator with the given configuration.
    pub fn new(config: EquityConfig) -> Self {
        Self { config }
    }

    /// Get reference to the configuration.
    pub fn config(&self) -> &EquityConfig {
        &self.config
    }

    /// Estimate head-to-head equity of two starting hands.
    pub fn heads_up(
        &self,
        hand1: &HoldemStartingHand,
        hand2: &HoldemStartingHand,
    ) -> Result<HeadsUpEquity, EquityError> {
        check_disjoint(hand1, hand2)?;
        let dead = [hand1.cards(), hand2.cards()].concat();

        let (tallies, stats) = self.run_batches(|rng, trials| {
            let mut deck = Deck::without(&dead);
            heads_up_trials(&mut deck, hand1, hand2, trials, rng)
        })?;

        let tally = tallies.into_iter().fold(HeadsUpTally::default(), HeadsUpTally::merge);
        log::debug!(
            "{} vs {}: {} wins, {} losses, {} ties",
            hand1,
            hand2,
            tally.wins1,
            tally.wins2,
            tally.ties
        );
        Ok(HeadsUpEquity::new(tally, stats))
    }

    /// Estimate the equity of `hand` against `num_opponents` random hands.
    pub fn vs_random(
        &self,
        hand: &HoldemStartingHand,
        num_opponents: usize,
    ) -> Result<VsRandomEquity, EquityError> {
        check_opponents(num_opponents)?;
        let dead = hand.cards();

        let (scores, stats) = self.run_batches(|rng, trials| {
            let mut deck = Deck::without(&dead);
            vs_random_trials(&mut deck, hand, num_opponents, trials, rng)
        })?;

        // batch order, so a seeded run sums identically every time
        let total: f64 = scores.iter().sum();
        Ok(VsRandomEquity {
            equity: total / stats.trials as f64,
            num_opponents,
            stats,
        })
    }

    /// Head-to-head estimate on the calling thread, drawing from `rng`.
    ///
    /// Ignores the configured seed, threads and batch size.
    pub fn heads_up_with_rng<R: Rng + ?Sized>(
        &self,
        hand1: &HoldemStartingHand,
        hand2: &HoldemStartingHand,
        rng: &mut R,
    ) -> Result<HeadsUpEquity, EquityError> {
        self.config.validate()?;
        check_disjoint(hand1, hand2)?;
        let start = Instant::now();

        let mut deck = Deck::without(&[hand1.cards(), hand2.cards()].concat());
        let tally = heads_up_trials(&mut deck, hand1, hand2, self.config.trials, rng)?;

        let stats = self.finish(start, 1);
        Ok(HeadsUpEquity::new(tally, stats))
    }

    /// One-vs-N-random estimate on the calling thread, drawing from `rng`.
    pub fn vs_random_with_rng<R: Rng + ?Sized>(
        &self,
        hand: &HoldemStartingHand,
        num_opponents: usize,
        rng: &mut R,
    ) -> Result<VsRandomEquity, EquityError> {
        self.config.validate()?;
        check_opponents(num_opponents)?;
        let start = Instant::now();

        let mut deck = Deck::without(&hand.cards());
        let total = vs_random_trials(&mut deck, hand, num_opponents, self.config.trials, rng)?;

        let stats = self.finish(start, 1);
        Ok(VsRandomEquity {
            equity: total / stats.trials as f64,
            num_opponents,
            stats,
        })
    }

    /// Run every batch, in parallel unless configured otherwise.
    ///
    /// Results come back in batch order.
    fn run_batches<T, F>(&self, job: F) -> Result<(Vec<T>, EquityStats), EquityError>
    where
        T: Send,
        F: Fn(&mut StdRng, u64) -> Result<T, HandError> + Sync,
    {
        self.config.validate()?;
        let start = Instant::now();

        let trials = self.config.trials;
        let batch_size = self.config.batch_size;
        let batches = self.config.num_batches() as usize;
        let base_seed = self.config.seed.unwrap_or_else(rand::random);
        log::debug!("{} trials in {} batches, seed {}", trials, batches, base_seed);

        let seeds = batch_seeds(base_seed, batches);
        let progress = self.progress_bar(batches as u64);
        let run = |index: usize| -> Result<T, HandError> {
            let first = index as u64 * batch_size;
            let count = batch_size.min(trials - first);
            let mut rng = StdRng::seed_from_u64(seeds[index]);
            let result = job(&mut rng, count);
            progress.inc(1);
            result
        };

        let results: Result<Vec<T>, HandError> = match self.config.num_threads {
            Some(0) | Some(1) => (0..batches).map(run).collect(),
            Some(threads) => {
                let pool = rayon::ThreadPoolBuilder::new().num_threads(threads).build()?;
                pool.install(|| (0..batches).into_par_iter().map(run).collect())
            }
            None => (0..batches).into_par_iter().map(run).collect(),
        };
        progress.finish_and_clear();

        let results = results?;
        let stats = self.finish(start, batches as u64);
        Ok((results, stats))
    }

    fn progress_bar(&self, batches: u64) -> ProgressBar {
        if !self.config.show_progress {
            return ProgressBar::hidden();
        }
        let bar = ProgressBar::new(batches);
        if let Ok(style) =
            ProgressStyle::with_template("{spinner} [{elapsed_precise}] {bar:40} {pos}/{len} batches")
        {
            bar.set_style(style);
        }
        bar
    }

    fn finish(&self, start: Instant, batches: u64) -> EquityStats {
        let elapsed = start.elapsed();
        if self.config.report_timing {
            log::info!("monte carlo simulation took {} ms", elapsed.as_millis());
        }
        EquityStats::new(self.config.trials, batches, elapsed.as_secs_f64())
    }
}

/// Estimate head-to-head equity with default settings and `trials` trials.
///
/// Returns each hand's share of the pot; ties count half for each side.
pub fn estimate_equity(
    hand1: &HoldemStartingHand,
    hand2: &HoldemStartingHand,
    trials: u64,
    report_timing: bool,
) -> Result<(f64, f64), EquityError> {
    let config = EquityConfig::default()
        .with_trials(trials)
        .with_timing(report_timing);
    Ok(EquityEstimator::new(config).heads_up(hand1, hand2)?.as_pair())
}

/// Estimate the equity of `hand` against `num_opponents` random hands.
pub fn estimate_equity_vs_random(
    hand: &HoldemStartingHand,
    num_opponents: usize,
    trials: u64,
    report_timing: bool,
) -> Result<f64, EquityError> {
    let config = EquityConfig::default()
        .with_trials(trials)
        .with_timing(report_timing);
    Ok(EquityEstimator::new(config).vs_random(hand, num_opponents)?.equity)
}

/// One seed per batch, drawn in order from a generator seeded with `base_seed`.
fn batch_seeds(base_seed: u64, batches: usize) -> Vec<u64> {
    let mut master = StdRng::seed_from_u64(base_seed);
    (0..batches).map(|_| master.gen()).collect()
}

fn check_disjoint(
    hand1: &HoldemStartingHand,
    hand2: &HoldemStartingHand,
) -> Result<(), EquityError> {
    match hand1.cards().into_iter().find(|&c| hand2.contains(c)) {
        Some(card) => Err(EquityError::OverlappingHands(card)),
        None => Ok(()),
    }
}

fn check_opponents(num_opponents: usize) -> Result<(), ConfigError> {
    if num_opponents == 0 {
        return Err(ConfigError::NoOpponents);
    }
    if num_opponents > MAX_OPPONENTS {
        return Err(ConfigError::TooManyOpponents(num_opponents));
    }
    Ok(())
}

/// Play `trials` head-to-head showdowns on random boards from `deck`.
fn heads_up_trials<R: Rng + ?Sized>(
    deck: &mut Deck,
    hand1: &HoldemStartingHand,
    hand2: &HoldemStartingHand,
    trials: u64,
    rng: &mut R,
) -> Result<HeadsUpTally, HandError> {
    let mut tally = HeadsUpTally::default();
    for _ in 0..trials {
        deck.reset();
        deck.shuffle(rng);
        let board = deck.deal_n(BOARD_SIZE);

        let best1 = best_five_cards_hand(&board, hand1)?;
        let best2 = best_five_cards_hand(&board, hand2)?;
        tally.record(best1.compare(&best2));
    }
    Ok(tally)
}

/// Play `trials` multiway showdowns and return the summed pot share of `hand`.
fn vs_random_trials<R: Rng + ?Sized>(
    deck: &mut Deck,
    hand: &HoldemStartingHand,
    num_opponents: usize,
    trials: u64,
    rng: &mut R,
) -> Result<f64, HandError> {
    let mut total = 0.0;
    let mut opponents = Vec::with_capacity(num_opponents);
    for _ in 0..trials {
        deck.reset();
        deck.shuffle(rng);
        let board = deck.deal_n(BOARD_SIZE);
        let hero = best_five_cards_hand(&board, hand)?;

        opponents.clear();
        for _ in 0..num_opponents {
            let opponent = HoldemStartingHand::new(&deck.deal_n(2))?;
            opponents.push(best_five_cards_hand(&board, &opponent)?);
        }
        total += pot_share(&hero, &opponents);
    }
    Ok(total)
}

/// Share of the pot won by `hero` at a multiway showdown.
///
/// Nothing if any opponent holds a stronger hand, otherwise the pot split
/// evenly between `hero` and every opponent that ties it.
fn pot_share(hero: &FiveCardsHand, opponents: &[FiveCardsHand]) -> f64 {
    let mut ties = 0u32;
    for opponent in opponents {
        match hero.compare(opponent) {
            Ordering::Greater => {}
            Ordering::Equal => ties += 1,
            Ordering::Less => return 0.0,
        }
    }
    1.0 / (1.0 + ties as f64)
}
