use std::fs;
use std::path::Path;

use tracing::debug;

use crate::board::Board;
use crate::error::SolverError;

/// Reads a start board from a text file of sixteen whitespace-separated
/// integers.
pub fn read_board(path: impl AsRef<Path>) -> Result<Board, SolverError> {
    let path = path.as_ref();
    let text = fs::read_to_string(path).map_err(|source| SolverError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    debug!(path = %path.display(), bytes = text.len(), "read board file");
    text.parse()
}
