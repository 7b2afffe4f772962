use strum::{Display, EnumString};

use crate::board::{goal_position, Board, SIDE};

/// Distance estimates the search can be driven by.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Display, EnumString)]
#[strum(serialize_all = "kebab-case", ascii_case_insensitive)]
pub enum Heuristic {
    Manhattan,
    Misplaced,
    /// Manhattan distance plus the linear-conflict penalty. Never selected by
    /// default; pass it through `SearchConfig::with_heuristic`.
    ManhattanLinearConflict,
}

impl Heuristic {
    pub fn evaluate(self, board: &Board) -> u32 {
        match self {
            Heuristic::Manhattan => manhattan(board),
            Heuristic::Misplaced => misplaced(board),
            Heuristic::ManhattanLinearConflict => manhattan(board) + linear_conflict(board),
        }
    }
}

/// Sum of grid distances from each tile to its goal cell.
pub fn manhattan(board: &Board) -> u32 {
    let mut distance = 0;
    for row in 0..SIDE {
        for col in 0..SIDE {
            let value = board.tile_at(row, col);
            if value != 0 {
                let (target_row, target_col) = goal_position(value);
                distance += row.abs_diff(target_row) + col.abs_diff(target_col);
            }
        }
    }
    distance as u32
}

/// Number of tiles (blank excluded) not on their goal cell.
pub fn misplaced(board: &Board) -> u32 {
    let goal = Board::goal();
    board
        .cells()
        .iter()
        .zip(goal.cells())
        .filter(|&(&value, &wanted)| value != 0 && value != wanted)
        .count() as u32
}

/// Two moves for every tile that sits in its goal line but after a tile of
/// the same line that belongs further along it.
pub fn linear_conflict(board: &Board) -> u32 {
    let mut conflicts = 0;

    for row in 0..SIDE {
        let mut max_seen = 0;
        for col in 0..SIDE {
            let value = board.tile_at(row, col);
            if value != 0 && goal_position(value).0 == row {
                if value > max_seen {
                    max_seen = value;
                } else {
                    conflicts += 2;
                }
            }
        }
    }

    for col in 0..SIDE {
        let mut max_seen = 0;
        for row in 0..SIDE {
            let value = board.tile_at(row, col);
            if value != 0 && goal_position(value).1 == col {
                if value > max_seen {
                    max_seen = value;
                } else {
                    conflicts += 2;
                }
            }
        }
    }

    conflicts
}
