//! Best five-card hand from hole cards plus a board.

use super::combinations::Combinations;
use super::five_cards::FiveCardsHand;
use crate::cards::starting_hand::ensure_distinct;
use crate::cards::{Card, HoldemStartingHand};
use crate::error::HandError;

/// Return the strongest five-card hand made from `board` plus the hole cards.
///
/// Every 5-card subset of the pool is classified; the incumbent is only
/// replaced by a subset that strictly beats it, so among equally strong
/// subsets the first one in subset order is kept. Which of those is returned
/// carries no meaning beyond its strength.
pub fn best_five_cards_hand(
    board: &[Card],
    starting_hand: &HoldemStartingHand,
) -> Result<FiveCardsHand, HandError> {
    let mut pool = Vec::with_capacity(board.len() + 2);
    pool.extend_from_slice(board);
    pool.extend_from_slice(&starting_hand.cards());
    best_of_pool(&pool)
}

/// Return the strongest five-card hand among all subsets of `pool`.
pub fn best_of_pool(pool: &[Card]) -> Result<FiveCardsHand, HandError> {
    if pool.len() < 5 {
        return Err(HandError::NotEnoughCards(pool.len()));
    }
    ensure_distinct(pool)?;

    let mut subsets = Combinations::new(pool, 5);
    let first = subsets.next().ok_or(HandError::NotEnoughCards(pool.len()))?;
    let mut best = FiveCardsHand::new(&first)?;

    for subset in subsets {
        let candidate = FiveCardsHand::new(&subset)?;
        if candidate.equity_against(&best) == 1.0 {
            best = candidate;
        }
    }
    Ok(best)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::parse_cards;
    use crate::eval::HandCategory;

    fn best(board: &str, hole: &str) -> FiveCardsHand {
        let board = parse_cards(board).unwrap();
        let hole: HoldemStartingHand = hole.parse().unwrap();
        best_five_cards_hand(&board, &hole).unwrap()
    }

    #[test]
    fn test_flush_beats_trip_aces() {
        let hand = best("As Jh Th 7h 4h", "Ah Ad");
        assert_eq!(hand.category(), HandCategory::Flush);
        assert_eq!(hand.to_string(), "AhJhTh7h4h");

        let clubs = FiveCardsHand::parse("Ac Jc Tc 7c 4c").unwrap();
        assert_eq!(hand.equity_against(&clubs), 0.5);
    }

    #[test]
    fn test_quads_found() {
        let hand = best("Ad Ac Kh Qs Jd", "Ah As");
        assert_eq!(hand.category(), HandCategory::Quads);
        assert_eq!(hand.ranks(), [14, 14, 14, 14, 13]);
    }

    #[test]
    fn test_plays_the_board() {
        let hand = best("Ts 9d 8h 7c 6s", "2h 3d");
        assert_eq!(hand.category(), HandCategory::Straight);
        assert_eq!(hand.ranks(), [10, 9, 8, 7, 6]);
    }

    #[test]
    fn test_highest_straight_over_wheel() {
        let hand = best("2s 3d 4h 5c Kd", "Ah 6s");
        assert_eq!(hand.category(), HandCategory::Straight);
        assert_eq!(hand.ranks(), [6, 5, 4, 3, 2]);
    }

    #[test]
    fn test_partial_boards() {
        let hole: HoldemStartingHand = "Ah Kh".parse().unwrap();
        let flop = parse_cards("Qh Jh Th").unwrap();
        let hand = best_five_cards_hand(&flop, &hole).unwrap();
        assert_eq!(hand.category(), HandCategory::StraightFlush);

        let too_short = parse_cards("Qh Jh").unwrap();
        assert_eq!(
            best_five_cards_hand(&too_short, &hole),
            Err(HandError::NotEnoughCards(4))
        );
    }

    #[test]
    fn test_board_overlapping_hole_cards() {
        let hole: HoldemStartingHand = "Ah Kh".parse().unwrap();
        let board = parse_cards("Ah 2c 3d 9s Ts").unwrap();
        let ah: Card = "Ah".parse().unwrap();
        assert_eq!(
            best_five_cards_hand(&board, &hole),
            Err(HandError::DuplicateCard(ah))
        );
    }
}
