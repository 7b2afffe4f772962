use rand::{seq::SliceRandom, Rng};
use std::fmt;
use std::str::FromStr;

use crate::error::SolverError;
use crate::solvability;

/// Width and height of the grid.
pub const SIDE: usize = 4;
/// Number of cells, blank included.
pub const CELLS: usize = SIDE * SIDE;

const GOAL: [u8; CELLS] = [1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 14, 15, 0];

/// One arrangement of the fifteen tiles and the blank (`0`), row-major.
///
/// Boards are values: moving the blank produces a new board and never touches
/// the old one. Equality and hashing are over the sixteen cells.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Board {
    cells: [u8; CELLS],
}

impl Board {
    /// Builds a board, checking that every value `0..16` appears exactly once.
    pub fn new(cells: [u8; CELLS]) -> Result<Self, SolverError> {
        let mut seen = [false; CELLS];
        for &value in &cells {
            let slot = seen.get_mut(value as usize).ok_or_else(|| {
                SolverError::MalformedBoard(format!("value {} is outside 0..=15", value))
            })?;
            if *slot {
                return Err(SolverError::MalformedBoard(format!(
                    "value {} appears more than once",
                    value
                )));
            }
            *slot = true;
        }
        Ok(Self { cells })
    }

    pub fn goal() -> Self {
        Self { cells: GOAL }
    }

    /// A uniformly shuffled board, resampled until it is solvable under the
    /// standard rules.
    pub fn shuffled<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let mut cells = GOAL;
        loop {
            cells.shuffle(rng);
            let board = Self { cells };
            if solvability::is_solvable(&board) {
                return board;
            }
        }
    }

    pub fn cells(&self) -> &[u8; CELLS] {
        &self.cells
    }

    pub fn tile_at(&self, row: usize, col: usize) -> u8 {
        self.cells[row * SIDE + col]
    }

    pub fn blank_index(&self) -> usize {
        // A validated board always holds a zero.
        self.cells.iter().position(|&v| v == 0).unwrap_or(CELLS - 1)
    }

    /// `(row, col)` of the blank.
    pub fn blank_position(&self) -> (usize, usize) {
        let index = self.blank_index();
        (index / SIDE, index % SIDE)
    }

    pub fn is_goal(&self) -> bool {
        self.cells == GOAL
    }

    /// Swaps the blank with the tile `(d_row, d_col)` away from it.
    ///
    /// Returns `None` when that cell is off the grid. Wraparound is the
    /// caller's business, see [`Board::swap_blank_with`].
    pub fn apply(&self, d_row: isize, d_col: isize) -> Option<Self> {
        let (row, col) = self.blank_position();
        let target_row = row as isize + d_row;
        let target_col = col as isize + d_col;
        if !in_bounds(target_row) || !in_bounds(target_col) {
            return None;
        }
        Some(self.swap_blank_with(target_row as usize, target_col as usize))
    }

    /// Swaps the blank with the tile at an already resolved cell.
    pub fn swap_blank_with(&self, row: usize, col: usize) -> Self {
        let mut cells = self.cells;
        cells.swap(self.blank_index(), row * SIDE + col);
        Self { cells }
    }
}

pub(crate) fn in_bounds(coord: isize) -> bool {
    (0..SIDE as isize).contains(&coord)
}

/// Goal cell `(row, col)` of a tile in `1..=15`.
pub(crate) fn goal_position(tile: u8) -> (usize, usize) {
    let index = tile as usize - 1;
    (index / SIDE, index % SIDE)
}

impl Default for Board {
    fn default() -> Self {
        Self::goal()
    }
}

impl FromStr for Board {
    type Err = SolverError;

    /// Sixteen whitespace-separated integers, line breaks anywhere.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let values = s
            .split_whitespace()
            .map(|token| {
                token
                    .parse::<u8>()
                    .map_err(|_| SolverError::MalformedBoard(format!("`{}` is not a tile number", token)))
            })
            .collect::<Result<Vec<_>, _>>()?;

        let cells: [u8; CELLS] = values.as_slice().try_into().map_err(|_| {
            SolverError::MalformedBoard(format!("expected {} values, found {}", CELLS, values.len()))
        })?;
        Self::new(cells)
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.cells.chunks(SIDE) {
            let line = row
                .iter()
                .map(|val| format!("{:3}", val))
                .collect::<Vec<_>>()
                .join(" ");
            writeln!(f, "{}", line)?;
        }
        Ok(())
    }
}
