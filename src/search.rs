use std::cmp::{Ordering, Reverse};
use std::collections::{BinaryHeap, HashSet};
use std::fmt;
use std::time::{Duration, Instant};

use tracing::{debug, info, trace};

use crate::board::Board;
use crate::error::SolverError;
use crate::heuristic::Heuristic;
use crate::moves::{MoveCatalog, Variant};
use crate::solvability;

const PROGRESS_INTERVAL: usize = 10_000;
const INITIAL_CAPACITY: usize = 1 << 12;

/// Knobs for one solver. The default runs unbounded with the variant's own
/// heuristic.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SearchConfig {
    pub heuristic: Option<Heuristic>,
    pub max_expansions: Option<usize>,
    pub time_limit: Option<Duration>,
}

impl SearchConfig {
    pub fn with_heuristic(mut self, heuristic: Heuristic) -> Self {
        self.heuristic = Some(heuristic);
        self
    }

    pub fn with_max_expansions(mut self, limit: usize) -> Self {
        self.max_expansions = Some(limit);
        self
    }

    pub fn with_time_limit(mut self, limit: Duration) -> Self {
        self.time_limit = Some(limit);
        self
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Solution {
    /// Move labels from the start board to the goal.
    pub path: String,
    /// States taken off the frontier and expanded.
    pub expanded: usize,
}

impl Solution {
    pub fn len(&self) -> usize {
        self.path.len()
    }

    pub fn is_empty(&self) -> bool {
        self.path.is_empty()
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AbortReason {
    ExpansionLimit,
    TimeLimit,
}

impl fmt::Display for AbortReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AbortReason::ExpansionLimit => write!(f, "expansion limit reached"),
            AbortReason::TimeLimit => write!(f, "time limit reached"),
        }
    }
}

/// How a search ended, short of an error.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Outcome {
    Solved(Solution),
    /// The parity test proved the goal unreachable; printed as `Inf`.
    Unsolvable,
    /// A configured budget ran out first.
    Aborted { reason: AbortReason, expanded: usize },
}

impl Outcome {
    pub fn solution(&self) -> Option<&Solution> {
        match self {
            Outcome::Solved(solution) => Some(solution),
            _ => None,
        }
    }
}

/// Frontier entry. Ordered by `f`, then by the path so far.
#[derive(Debug, PartialEq, Eq)]
struct Node {
    f: u32,
    path: String,
    g: u32,
    board: Board,
}

impl Ord for Node {
    fn cmp(&self, other: &Self) -> Ordering {
        self.f
            .cmp(&other.f)
            .then_with(|| self.path.cmp(&other.path))
            .then_with(|| self.board.cmp(&other.board))
    }
}

impl PartialOrd for Node {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Best-first search for one variant.
///
/// The move table and heuristic are resolved once at construction; every
/// [`Solver::solve`] call owns its own frontier and visited set.
#[derive(Clone, Copy, Debug)]
pub struct Solver {
    catalog: MoveCatalog,
    heuristic: Heuristic,
    config: SearchConfig,
}

impl Solver {
    pub fn new(variant: Variant) -> Self {
        Self::with_config(variant, SearchConfig::default())
    }

    pub fn with_config(variant: Variant, config: SearchConfig) -> Self {
        Self {
            catalog: variant.catalog(),
            heuristic: config.heuristic.unwrap_or_else(|| variant.default_heuristic()),
            config,
        }
    }

    pub fn variant(&self) -> Variant {
        self.catalog.variant()
    }

    pub fn heuristic(&self) -> Heuristic {
        self.heuristic
    }

    pub fn solve(&self, start: &Board) -> Result<Outcome, SolverError> {
        if start.is_goal() {
            return Ok(Outcome::Solved(Solution { path: String::new(), expanded: 0 }));
        }

        let variant = self.variant();
        if variant.checks_parity() && !solvability::is_solvable(start) {
            info!(event = "unsolvable", %variant, inversions = solvability::inversions(start));
            return Ok(Outcome::Unsolvable);
        }

        let h0 = self.heuristic.evaluate(start);
        info!(event = "solve_start", %variant, heuristic = %self.heuristic, h = h0);

        let started = Instant::now();
        let mut frontier = BinaryHeap::with_capacity(INITIAL_CAPACITY);
        let mut visited: HashSet<Board> = HashSet::with_capacity(INITIAL_CAPACITY);
        frontier.push(Reverse(Node { f: h0, path: String::new(), g: 0, board: *start }));

        while let Some(Reverse(node)) = frontier.pop() {
            if node.board.is_goal() {
                info!(
                    event = "solve_end",
                    moves = node.path.len(),
                    expanded = visited.len(),
                    frontier = frontier.len(),
                    elapsed_ms = started.elapsed().as_millis() as u64
                );
                return Ok(Outcome::Solved(Solution { path: node.path, expanded: visited.len() }));
            }

            if !visited.insert(node.board) {
                continue;
            }

            let expanded = visited.len();
            if let Some(reason) = self.budget_exhausted(expanded, started) {
                info!(event = "solve_aborted", %reason, expanded);
                return Ok(Outcome::Aborted { reason, expanded });
            }
            if expanded % PROGRESS_INTERVAL == 0 {
                debug!(expanded, frontier = frontier.len(), f = node.f, g = node.g, "searching");
            }
            trace!(f = node.f, g = node.g, path = %node.path, "expand");

            for (next, mv) in self.catalog.successors(&node.board) {
                if visited.contains(&next) {
                    continue;
                }
                let g = node.g + 1;
                let mut path = String::with_capacity(node.path.len() + 1);
                path.push_str(&node.path);
                path.push(mv.label);
                frontier.push(Reverse(Node {
                    f: g + self.heuristic.evaluate(&next),
                    path,
                    g,
                    board: next,
                }));
            }
        }

        Err(SolverError::SearchExhausted { expanded: visited.len() })
    }

    fn budget_exhausted(&self, expanded: usize, started: Instant) -> Option<AbortReason> {
        if self.config.max_expansions.is_some_and(|limit| expanded > limit) {
            return Some(AbortReason::ExpansionLimit);
        }
        if self.config.time_limit.is_some_and(|limit| started.elapsed() >= limit) {
            return Some(AbortReason::TimeLimit);
        }
        None
    }
}

/// Solves `start` under `variant` with the default configuration.
pub fn solve(start: &Board, variant: Variant) -> Result<Outcome, SolverError> {
    Solver::new(variant).solve(start)
}
