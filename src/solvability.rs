//! Parity test for the standard rules.
//!
//! A horizontal slide keeps both the inversion count and the blank's row.
//! A vertical slide moves the blank one row and changes the inversion count by
//! an odd amount, so `inversions + blank_row` keeps its parity along every
//! standard move. The goal has no inversions and the blank on row 3, which
//! makes the sum odd; boards where it is even can never reach the goal.

use crate::board::{Board, SIDE};

/// Pairs of non-blank tiles read out of order, left to right and top to bottom.
pub fn inversions(board: &Board) -> usize {
    let cells = board.cells();
    cells
        .iter()
        .enumerate()
        .filter(|&(_, &val)| val != 0)
        .map(|(i, &val)| {
            cells[i + 1..]
                .iter()
                .filter(|&&next| next != 0 && next < val)
                .count()
        })
        .sum()
}

/// Whether the goal is reachable with standard moves.
pub fn is_solvable(board: &Board) -> bool {
    let blank_row = board.blank_index() / SIDE;
    (inversions(board) + blank_row) % 2 == 1
}

#[cfg(test)]
mod tests {
    use std::collections::{HashSet, VecDeque};

    use super::*;
    use crate::moves::Variant;

    /// Every board within `depth` standard moves of `start`.
    fn neighbourhood(start: Board, depth: usize) -> HashSet<Board> {
        let catalog = Variant::Original.catalog();
        let mut seen = HashSet::from([start]);
        let mut queue = VecDeque::from([(start, 0)]);
        while let Some((board, d)) = queue.pop_front() {
            if d == depth {
                continue;
            }
            for (next, _) in catalog.successors(&board) {
                if seen.insert(next) {
                    queue.push_back((next, d + 1));
                }
            }
        }
        seen
    }

    #[test]
    fn goal_is_solvable() {
        assert_eq!(inversions(&Board::goal()), 0);
        assert!(is_solvable(&Board::goal()));
    }

    #[test]
    fn swapped_tiles_are_unsolvable() {
        let b = Board::new([1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 15, 14, 0]).unwrap();
        assert_eq!(inversions(&b), 1);
        assert!(!is_solvable(&b));
    }

    #[test]
    fn blank_moved_up_is_solvable() {
        // Blank on an even row with an odd inversion count
        let b = Board::new([1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 0, 13, 14, 15, 12]).unwrap();
        assert_eq!(inversions(&b), 3);
        assert!(is_solvable(&b));
    }

    #[test]
    fn verdict_matches_reachability() {
        let reachable = neighbourhood(Board::goal(), 8);
        assert!(reachable.iter().all(is_solvable));

        let twisted = Board::new([1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 15, 14, 0]).unwrap();
        let unreachable = neighbourhood(twisted, 8);
        assert!(unreachable.iter().all(|b| !is_solvable(b)));
        assert!(reachable.is_disjoint(&unreachable));
    }
}
