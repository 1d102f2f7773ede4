//! Board representation for the factor grid

pub mod board;


// Re-exports
pub use board::{Board, Cell, LAYOUT};

/// Board size (6x6)
pub const ROWS: usize = 6;
pub const COLS: usize = 6;
pub const TOTAL_CELLS: usize = ROWS * COLS; // 36

/// Smallest and largest selectable factor
pub const MIN_FACTOR: u8 = 1;
pub const MAX_FACTOR: u8 = 9;

/// Consecutive cells needed in a row or column to win
pub const WIN_LENGTH: usize = 4;

/// Claim state of a cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Owner {
    #[default]
    Unclaimed,
    Human,
    Opponent,
}

/// Side holding the turn. Never `Unclaimed`, unlike [`Owner`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Player {
    Human,
    Opponent,
}

impl Player {
    /// Get the other side
    #[inline]
    pub fn other(self) -> Player {
        match self {
            Player::Human => Player::Opponent,
            Player::Opponent => Player::Human,
        }
    }
}

impl From<Player> for Owner {
    #[inline]
    fn from(player: Player) -> Owner {
        match player {
            Player::Human => Owner::Human,
            Player::Opponent => Owner::Opponent,
        }
    }
}

/// Position on the board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Pos {
    pub row: u8,
    pub col: u8,
}

impl Pos {
    #[inline]
    pub fn new(row: u8, col: u8) -> Self {
        debug_assert!((row as usize) < ROWS && (col as usize) < COLS);
        Self { row, col }
    }

    #[inline]
    pub fn to_index(self) -> usize {
        self.row as usize * COLS + self.col as usize
    }

    #[inline]
    pub fn from_index(idx: usize) -> Self {
        Self {
            row: (idx / COLS) as u8,
            col: (idx % COLS) as u8,
        }
    }
}

impl PartialOrd for Pos {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Pos {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.to_index().cmp(&other.to_index())
    }
}
