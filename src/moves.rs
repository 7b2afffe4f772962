use rand::{seq::SliceRandom, Rng};
use std::fmt;
use strum::{Display, EnumString, VariantArray};

use crate::board::{in_bounds, Board, SIDE};
use crate::error::SolverError;
use crate::heuristic::Heuristic;

/// The move rules the solver understands.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Display, EnumString, VariantArray)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum Variant {
    /// Orthogonal slides on a bounded grid.
    #[strum(to_string = "original", serialize = "standard")]
    Original,
    /// Orthogonal slides on a torus: leaving one edge re-enters on the opposite one.
    Circular,
    /// Knight-pattern swaps on a bounded grid.
    #[strum(to_string = "luddy", serialize = "extended")]
    Luddy,
}

impl Variant {
    pub fn catalog(self) -> MoveCatalog {
        match self {
            Variant::Original => MoveCatalog { variant: self, moves: &ORTHOGONAL, wraps: false },
            Variant::Circular => MoveCatalog { variant: self, moves: &ORTHOGONAL, wraps: true },
            Variant::Luddy => MoveCatalog { variant: self, moves: &KNIGHT, wraps: false },
        }
    }

    pub fn default_heuristic(self) -> Heuristic {
        match self {
            Variant::Original | Variant::Circular => Heuristic::Manhattan,
            Variant::Luddy => Heuristic::Misplaced,
        }
    }

    /// Whether the inversion-parity test applies before searching.
    pub fn checks_parity(self) -> bool {
        self == Variant::Original
    }
}

/// A labeled offset from the blank to the tile it swaps with.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Move {
    pub label: char,
    pub d_row: isize,
    pub d_col: isize,
}

impl Move {
    const fn new(label: char, d_row: isize, d_col: isize) -> Self {
        Self { label, d_row, d_col }
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label)
    }
}

// Table order is the successor order, which decides ties in the frontier.
static ORTHOGONAL: [Move; 4] = [
    Move::new('R', 0, -1),
    Move::new('L', 0, 1),
    Move::new('D', -1, 0),
    Move::new('U', 1, 0),
];

static KNIGHT: [Move; 8] = [
    Move::new('A', 2, 1),
    Move::new('B', 2, -1),
    Move::new('C', -2, 1),
    Move::new('D', -2, -1),
    Move::new('E', 1, 2),
    Move::new('F', 1, -2),
    Move::new('G', -1, 2),
    Move::new('H', -1, -2),
];

/// The move table of one variant together with its edge rule.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MoveCatalog {
    variant: Variant,
    moves: &'static [Move],
    wraps: bool,
}

impl MoveCatalog {
    pub fn variant(&self) -> Variant {
        self.variant
    }

    pub fn moves(&self) -> &'static [Move] {
        self.moves
    }

    /// Cell the blank would swap with, or `None` if it is off the grid.
    pub fn target(&self, board: &Board, mv: Move) -> Option<(usize, usize)> {
        let (row, col) = board.blank_position();
        let mut row = row as isize + mv.d_row;
        let mut col = col as isize + mv.d_col;
        if self.wraps {
            row = wrap(row);
            col = wrap(col);
        }
        if in_bounds(row) && in_bounds(col) {
            Some((row as usize, col as usize))
        } else {
            None
        }
    }

    /// Every legal move from `board`, in table order.
    pub fn successors<'a>(&'a self, board: &'a Board) -> impl Iterator<Item = (Board, Move)> + 'a {
        self.moves.iter().filter_map(move |&mv| {
            self.target(board, mv)
                .map(|(row, col)| (board.swap_blank_with(row, col), mv))
        })
    }

    pub fn find(&self, label: char) -> Result<Move, SolverError> {
        self.moves
            .iter()
            .copied()
            .find(|mv| mv.label == label)
            .ok_or(SolverError::UnknownMove { label, variant: self.variant })
    }

    /// The move that undoes `mv`.
    pub fn inverse(&self, mv: Move) -> Option<Move> {
        self.moves
            .iter()
            .copied()
            .find(|other| other.d_row == -mv.d_row && other.d_col == -mv.d_col)
    }

    pub fn apply(&self, board: &Board, mv: Move) -> Result<Board, SolverError> {
        self.target(board, mv)
            .map(|(row, col)| board.swap_blank_with(row, col))
            .ok_or(SolverError::IllegalMove { label: mv.label })
    }

    pub fn apply_label(&self, board: &Board, label: char) -> Result<Board, SolverError> {
        self.apply(board, self.find(label)?)
    }

    /// Applies every label of `path` in order.
    pub fn replay(&self, board: &Board, path: &str) -> Result<Board, SolverError> {
        path.chars()
            .try_fold(*board, |current, label| self.apply_label(&current, label))
    }
}

fn wrap(coord: isize) -> isize {
    match coord {
        -1 => SIDE as isize - 1,
        c if c == SIDE as isize => 0,
        c => c,
    }
}

/// Walks `steps` random legal moves away from the goal.
///
/// The walk avoids stepping straight back to the board it just left whenever
/// another move is available. Returns the scrambled board and the labels
/// taken, so the result is always solvable under `variant`.
pub fn scramble<R: Rng + ?Sized>(variant: Variant, steps: usize, rng: &mut R) -> (Board, String) {
    let catalog = variant.catalog();
    let mut board = Board::goal();
    let mut previous: Option<Board> = None;
    let mut path = String::with_capacity(steps);

    for _ in 0..steps {
        let options: Vec<(Board, Move)> = catalog.successors(&board).collect();
        let fresh: Vec<(Board, Move)> = options
            .iter()
            .copied()
            .filter(|(next, _)| Some(*next) != previous)
            .collect();
        let pool = if fresh.is_empty() { &options } else { &fresh };
        let Some(&(next, mv)) = pool.choose(rng) else {
            break;
        };
        previous = Some(board);
        board = next;
        path.push(mv.label);
    }

    (board, path)
}

#[cfg(test)]
mod tests {
    use rand::{rngs::StdRng, SeedableRng};
    use strum::VariantArray;

    use super::*;

    fn labels(catalog: &MoveCatalog, board: &Board) -> String {
        catalog.successors(board).map(|(_, mv)| mv.label).collect()
    }

    #[test]
    fn parse_variant_names() {
        assert_eq!("original".parse::<Variant>().unwrap(), Variant::Original);
        assert_eq!("ORIGINAL".parse::<Variant>().unwrap(), Variant::Original);
        assert_eq!("Circular".parse::<Variant>().unwrap(), Variant::Circular);
        assert_eq!("LUDDY".parse::<Variant>().unwrap(), Variant::Luddy);
        assert_eq!("extended".parse::<Variant>().unwrap(), Variant::Luddy);
        assert!("diagonal".parse::<Variant>().is_err());
        assert_eq!(Variant::Luddy.to_string(), "luddy");
    }

    #[test]
    fn original_from_corner() {
        let catalog = Variant::Original.catalog();
        assert_eq!(labels(&catalog, &Board::goal()), "RD");
    }

    #[test]
    fn circular_wraps_from_corner() {
        let catalog = Variant::Circular.catalog();
        let goal = Board::goal();
        assert_eq!(labels(&catalog, &goal), "RLDU");

        // L from column 3 wraps to column 0, U from row 3 wraps to row 0.
        let left = catalog.apply_label(&goal, 'L').unwrap();
        assert_eq!(left.blank_position(), (3, 0));
        assert_eq!(left.tile_at(3, 3), 13);
        let up = catalog.apply_label(&goal, 'U').unwrap();
        assert_eq!(up.blank_position(), (0, 3));
        assert_eq!(up.tile_at(3, 3), 4);
    }

    #[test]
    fn luddy_from_corner() {
        let catalog = Variant::Luddy.catalog();
        let goal = Board::goal();
        assert_eq!(labels(&catalog, &goal), "DH");
        let d = catalog.apply_label(&goal, 'D').unwrap();
        assert_eq!(d.blank_position(), (1, 2));
        assert_eq!(d.tile_at(3, 3), 7);
    }

    #[test]
    fn luddy_from_center_has_all_moves_in_order() {
        let catalog = Variant::Luddy.catalog();
        // Put the blank at (1, 1)
        let board = catalog.replay(&Board::goal(), "DH").unwrap();
        assert_eq!(board.blank_position(), (0, 0));
        let centre = Variant::Original.catalog().replay(&board, "LU").unwrap();
        assert_eq!(centre.blank_position(), (1, 1));
        assert_eq!(labels(&catalog, &centre), "ABEG");
    }

    #[test]
    fn successors_stay_permutations() {
        let mut rng = StdRng::seed_from_u64(11);
        for &variant in Variant::VARIANTS {
            let catalog = variant.catalog();
            for _ in 0..30 {
                let board = Board::shuffled(&mut rng);
                for (next, _) in catalog.successors(&board) {
                    assert!(Board::new(*next.cells()).is_ok());
                    assert_ne!(next, board);
                }
            }
        }
    }

    #[test]
    fn inverse_undoes_every_move() {
        let mut rng = StdRng::seed_from_u64(3);
        for &variant in Variant::VARIANTS {
            let catalog = variant.catalog();
            for _ in 0..30 {
                let board = Board::shuffled(&mut rng);
                for (next, mv) in catalog.successors(&board) {
                    let back = catalog.inverse(mv).unwrap();
                    assert_eq!(catalog.apply(&next, back).unwrap(), board);
                }
            }
        }
    }

    #[test]
    fn replay_rejects_unknown_and_illegal() {
        let catalog = Variant::Original.catalog();
        let goal = Board::goal();
        assert!(matches!(
            catalog.replay(&goal, "RX"),
            Err(SolverError::UnknownMove { label: 'X', .. })
        ));
        assert!(matches!(
            catalog.replay(&goal, "U"),
            Err(SolverError::IllegalMove { label: 'U' })
        ));
    }

    #[test]
    fn scramble_replays_to_its_board() {
        let mut rng = StdRng::seed_from_u64(5);
        for &variant in Variant::VARIANTS {
            let (board, path) = scramble(variant, 12, &mut rng);
            assert_eq!(path.len(), 12);
            let replayed = variant.catalog().replay(&Board::goal(), &path).unwrap();
            assert_eq!(replayed, board);
        }
    }
}
