//! Board structure with per-cell claim tracking

use super::{Owner, Player, Pos, COLS, ROWS, TOTAL_CELLS};

/// Fixed board layout, row-major.
///
/// Every entry is a product of two factors in 1..=9 and all 36 are distinct.
pub const LAYOUT: [[u32; COLS]; ROWS] = [
    [1, 2, 3, 4, 5, 6],
    [7, 8, 9, 10, 12, 14],
    [15, 16, 18, 20, 21, 24],
    [25, 27, 28, 30, 32, 35],
    [36, 40, 42, 45, 48, 49],
    [54, 56, 63, 64, 72, 81],
];

/// A single grid cell
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    /// Number printed on the cell, fixed for the board's lifetime
    pub number: u32,
    pub owner: Owner,
}

/// Game board: 36 numbered cells, each claimable once
#[derive(Debug, Clone)]
pub struct Board {
    cells: [Cell; TOTAL_CELLS],
}

impl Board {
    /// Build the board from [`LAYOUT`] with every cell unclaimed
    pub fn new() -> Self {
        let mut cells = [Cell { number: 0, owner: Owner::Unclaimed }; TOTAL_CELLS];
        for (idx, cell) in cells.iter_mut().enumerate() {
            cell.number = LAYOUT[idx / COLS][idx % COLS];
        }
        Self { cells }
    }

    /// Get the owner at position
    #[inline]
    pub fn get(&self, pos: Pos) -> Owner {
        self.cells[pos.to_index()].owner
    }

    /// Get the number at position
    #[inline]
    pub fn number(&self, pos: Pos) -> u32 {
        self.cells[pos.to_index()].number
    }

    /// Claim an unclaimed cell for a player.
    ///
    /// Returns `false` and leaves the board untouched if the cell is already owned.
    #[inline]
    pub fn claim(&mut self, pos: Pos, player: Player) -> bool {
        let cell = &mut self.cells[pos.to_index()];
        if cell.owner != Owner::Unclaimed {
            return false;
        }
        cell.owner = player.into();
        true
    }

    /// Set every cell back to unclaimed; numbers are untouched
    pub fn reset_ownership(&mut self) {
        for cell in self.cells.iter_mut() {
            cell.owner = Owner::Unclaimed;
        }
    }

    /// Iterate cells in row-major order
    pub fn iter(&self) -> impl Iterator<Item = (Pos, &Cell)> + '_ {
        self.cells
            .iter()
            .enumerate()
            .map(|(idx, cell)| (Pos::from_index(idx), cell))
    }

    /// Number of cells owned by `owner`
    pub fn count(&self, owner: Owner) -> usize {
        self.cells.iter().filter(|c| c.owner == owner).count()
    }

    /// Check if no cell has been claimed yet
    #[inline]
    pub fn is_board_empty(&self) -> bool {
        self.count(Owner::Unclaimed) == TOTAL_CELLS
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}
