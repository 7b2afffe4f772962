//! A* solver for the 4x4 sliding-tile puzzle.
//!
//! Three move rules are supported, see [`Variant`]: plain orthogonal slides,
//! slides that wrap around the edges, and knight-pattern swaps.
//!
//! ```
//! use tile_slider::{solve, Board, Outcome, Variant};
//!
//! let start: Board = "1 2 3 4 5 6 7 8 9 10 11 12 13 14 0 15".parse().unwrap();
//! let outcome = solve(&start, Variant::Original).unwrap();
//! assert_eq!(outcome.solution().unwrap().path, "L");
//! ```

pub mod board;
pub mod error;
pub mod heuristic;
pub mod input;
pub mod moves;
pub mod search;
pub mod solvability;

pub use board::Board;
pub use error::SolverError;
pub use heuristic::Heuristic;
pub use moves::{scramble, Move, MoveCatalog, Variant};
pub use search::{solve, AbortReason, Outcome, SearchConfig, Solution, Solver};
