use std::path::PathBuf;

use thiserror::Error;

use crate::moves::Variant;

#[derive(Debug, Error)]
pub enum SolverError {
    #[error("expected 2 arguments (board file and variant), got {0}")]
    InvalidArgumentCount(usize),

    #[error("couldn't parse start state: {0}")]
    MalformedBoard(String),

    #[error("unknown variant `{0}` (expected original, circular or luddy)")]
    UnknownVariant(String),

    #[error("move `{label}` is not defined for the {variant} variant")]
    UnknownMove { label: char, variant: Variant },

    #[error("move `{label}` would leave the board")]
    IllegalMove { label: char },

    /// The frontier emptied without reaching the goal.
    #[error("search exhausted after expanding {expanded} states without reaching the goal")]
    SearchExhausted { expanded: usize },

    #[error("failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
