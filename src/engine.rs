//! Opponent move selection
//!
//! The opponent is a deterministic greedy player. Its first factor is the
//! anchor left by the previous move; it tries every second factor from 1 to 9
//! in increasing order and plays the first one whose product is printed on an
//! unclaimed cell. There is no look-ahead, blocking or randomness.
//!
//! # Example
//!
//! ```
//! use factor_grid::{Board, OpponentEngine, Pos};
//!
//! let board = Board::new();
//! let result = OpponentEngine::new().get_move(&board, 3);
//!
//! let mv = result.best_move.unwrap();
//! assert_eq!((mv.factor, mv.product), (1, 3));
//! assert_eq!(mv.pos, Pos::new(0, 2));
//! ```

use crate::board::{Board, Pos, MAX_FACTOR, MIN_FACTOR};
use crate::rules::{find_unclaimed, product};

/// A move chosen by the opponent
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OpponentMove {
    /// Second factor; the first is the anchor
    pub factor: u8,
    pub product: u32,
    pub pos: Pos,
}

/// Result of an opponent search
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoveResult {
    /// Move found, `None` when every candidate product is already claimed
    pub best_move: Option<OpponentMove>,
    /// Anchor factor the search started from
    pub anchor: u8,
    /// Number of second factors tried
    pub probes: u32,
}

impl MoveResult {
    /// Check if the search came up empty
    #[inline]
    pub fn is_stuck(&self) -> bool {
        self.best_move.is_none()
    }
}

/// Greedy opponent engine
#[derive(Debug, Clone, Copy, Default)]
pub struct OpponentEngine;

impl OpponentEngine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pick the opponent's move for the given anchor factor
    pub fn get_move(&self, board: &Board, anchor: u8) -> MoveResult {
        let mut probes = 0;
        for factor in MIN_FACTOR..=MAX_FACTOR {
            probes += 1;
            let target = product(anchor, factor);
            if let Some(pos) = find_unclaimed(board, target) {
                log::debug!(
                    "opponent: anchor {} x {} = {} at ({}, {}) after {} probes",
                    anchor, factor, target, pos.row, pos.col, probes
                );
                return MoveResult {
                    best_move: Some(OpponentMove { factor, product: target, pos }),
                    anchor,
                    probes,
                };
            }
        }

        log::debug!("opponent: no unclaimed product for anchor {}", anchor);
        MoveResult { best_move: None, anchor, probes }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Player;

    #[test]
    fn test_first_factor_wins_on_empty_board() {
        let board = Board::new();
        let result = OpponentEngine::new().get_move(&board, 7);
        assert_eq!(
            result.best_move,
            Some(OpponentMove { factor: 1, product: 7, pos: Pos::new(1, 0) })
        );
        assert_eq!(result.probes, 1);
        assert_eq!(result.anchor, 7);
    }

    #[test]
    fn test_skips_claimed_products() {
        let mut board = Board::new();
        board.claim(Pos::new(0, 0), Player::Human); // 1
        board.claim(Pos::new(0, 1), Player::Opponent); // 2

        let result = OpponentEngine::new().get_move(&board, 1);
        let mv = result.best_move.unwrap();
        assert_eq!(mv.factor, 3);
        assert_eq!(mv.pos, Pos::new(0, 2));
        assert_eq!(result.probes, 3);
    }

    #[test]
    fn test_stuck_when_all_products_claimed() {
        let mut board = Board::new();
        // Anchor 8: 8, 16, 24, 32, 40, 48, 56, 64, 72
        for n in [8, 16, 24, 32, 40, 48, 56, 64, 72] {
            let pos = find_unclaimed(&board, n).unwrap();
            board.claim(pos, Player::Human);
        }

        let result = OpponentEngine::new().get_move(&board, 8);
        assert!(result.is_stuck());
        assert_eq!(result.probes, 9);
    }

    #[test]
    fn test_search_does_not_mutate_board() {
        let board = Board::new();
        OpponentEngine::new().get_move(&board, 5);
        assert!(board.is_board_empty());
    }

    #[test]
    fn test_deterministic() {
        let mut board = Board::new();
        board.claim(Pos::new(1, 2), Player::Human); // 9
        let engine = OpponentEngine::new();
        let a = engine.get_move(&board, 3);
        let b = engine.get_move(&board, 3);
        assert_eq!(a, b);
        assert_eq!(a.best_move.unwrap().product, 3);
    }
}
