//! Move validation
//!
//! A move is a factor pair. It is legal when the pair's product is printed on
//! an unclaimed cell. Validation never mutates the board.

use crate::board::{Board, Owner, Pos};

/// Product of a factor pair
#[inline]
pub fn product(a: u8, b: u8) -> u32 {
    u32::from(a) * u32::from(b)
}

/// Find the unclaimed cell numbered `number`, scanning row-major
#[inline]
pub fn find_unclaimed(board: &Board, number: u32) -> Option<Pos> {
    board
        .iter()
        .find(|(_, cell)| cell.number == number && cell.owner == Owner::Unclaimed)
        .map(|(pos, _)| pos)
}

/// Resolve a factor pair to the cell it would claim.
///
/// Returns `None` when no cell carries `a * b` or that cell is already owned.
pub fn try_resolve(board: &Board, a: u8, b: u8) -> Option<Pos> {
    find_unclaimed(board, product(a, b))
}

/// Check if a factor pair is a legal move
#[inline]
pub fn is_valid_move(board: &Board, a: u8, b: u8) -> bool {
    try_resolve(board, a, b).is_some()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Player;

    #[test]
    fn test_resolves_to_matching_cell() {
        let board = Board::new();
        assert_eq!(try_resolve(&board, 1, 1), Some(Pos::new(0, 0)));
        assert_eq!(try_resolve(&board, 3, 4), Some(Pos::new(1, 4)));
        assert_eq!(try_resolve(&board, 9, 9), Some(Pos::new(5, 5)));
    }

    #[test]
    fn test_order_of_factors_irrelevant() {
        let board = Board::new();
        assert_eq!(try_resolve(&board, 2, 7), try_resolve(&board, 7, 2));
    }

    #[test]
    fn test_missing_number_is_invalid() {
        let board = Board::new();
        assert_eq!(product(1, 11), 11);
        assert!(try_resolve(&board, 1, 11).is_none());
        assert!(try_resolve(&board, 3, 11).is_none());
        assert!(find_unclaimed(&board, 0).is_none());
    }

    #[test]
    fn test_claimed_number_is_invalid() {
        let mut board = Board::new();
        board.claim(Pos::new(1, 4), Player::Opponent);
        assert!(try_resolve(&board, 3, 4).is_none());
        assert!(try_resolve(&board, 2, 6).is_none());
        assert!(!is_valid_move(&board, 6, 2));
    }

    #[test]
    fn test_validation_does_not_mutate() {
        let board = Board::new();
        let before: Vec<_> = board.iter().map(|(_, c)| *c).collect();
        for a in 1..=9 {
            for b in 1..=9 {
                let _ = try_resolve(&board, a, b);
            }
        }
        let after: Vec<_> = board.iter().map(|(_, c)| *c).collect();
        assert_eq!(before, after);
    }

    #[test]
    fn test_every_factor_pair_lands_on_fresh_board() {
        let board = Board::new();
        for a in 1..=9 {
            for b in 1..=9 {
                let pos = try_resolve(&board, a, b).expect("product on board");
                assert_eq!(board.number(pos), product(a, b));
            }
        }
    }
}
